//! Page logic for the login and signup forms.
//!
//! Nothing in here touches the UI framework directly. Each collaborator a page needs (backend,
//! token slot, toasts, router, session) is a trait, bundled into [`PageServices`] and handed to the
//! submit functions explicitly. The Dioxus routes build a `PageServices` from their context and
//! the integration tests build one from recording doubles.

pub mod busy;
pub mod countdown;
pub mod login;
pub mod signup;
pub mod validation;

use async_trait::async_trait;

use crate::{
    client::{api::AuthApi, store::Toast, store::TokenStore},
    model::user::SessionUser,
};

pub use busy::{BusyFlag, BusyGuard};
pub use countdown::{run_countdown, ApprovalCountdown, APPROVAL_COUNTDOWN_SECONDS};
pub use login::{LoginForm, LoginOutcome};
pub use signup::{SignUpForm, SignUpOutcome};

/// Places the auth pages can send the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Login,
    SignUp,
    Course,
}

/// Transient user facing messages
pub trait Notifier {
    fn notify(&self, toast: Toast);
}

/// Programmatic route changes
pub trait Navigate {
    fn navigate(&self, to: Destination);
}

/// The owner of the current authentication state
#[async_trait(?Send)]
pub trait Session {
    fn userdata(&self) -> Option<SessionUser>;

    /// Reload the user behind the stored token and return the refreshed state.
    async fn fetch_userdata(&self) -> Option<SessionUser>;

    fn logout(&self);
}

/// Everything a page submit touches besides its own form state
#[derive(Clone)]
pub struct PageServices<A, T, N, R, S> {
    pub api: A,
    pub tokens: T,
    pub notifier: N,
    pub navigator: R,
    pub session: S,
}

impl<A, T, N, R, S> PageServices<A, T, N, R, S>
where
    A: AuthApi,
    T: TokenStore,
    N: Notifier,
    R: Navigate,
    S: Session,
{
    pub fn new(api: A, tokens: T, notifier: N, navigator: R, session: S) -> Self {
        Self {
            api,
            tokens,
            notifier,
            navigator,
            session,
        }
    }
}
