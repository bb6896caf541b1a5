use dioxus_logger::tracing;

use crate::{
    client::{
        api::AuthApi,
        error::AuthError,
        flow::{
            validation::validate_signup, BusyFlag, BusyGuard, Destination, Navigate, Notifier,
            PageServices, Session,
        },
        store::{Toast, TokenStore},
    },
    model::auth::{ProfileImage, Role},
};

pub const SIGNUP_PENDING_MESSAGE: &str = "Signing up... Please wait";

#[derive(Debug, Clone, PartialEq)]
pub struct SignUpForm {
    pub username: String,
    pub email: String,
    pub password: String,
    /// `None` when the select holds something that is not a known role
    pub role: Option<Role>,
    pub profile_image: Option<ProfileImage>,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            role: Some(Role::User),
            profile_image: None,
        }
    }
}

#[derive(Debug)]
pub enum SignUpOutcome {
    Ignored,
    /// Rejected on the client, one toast per error was shown.
    Invalid(Vec<AuthError>),
    /// Account created but waiting for approval; the page shows the approval modal.
    PendingApproval,
    Registered { navigated: bool },
    Failed(AuthError),
}

impl SignUpOutcome {
    pub fn shows_approval_modal(&self) -> bool {
        matches!(self, Self::PendingApproval)
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Invalid(_) | Self::Failed(_))
    }
}

impl<A, T, N, R, S> PageServices<A, T, N, R, S>
where
    A: AuthApi,
    T: TokenStore,
    N: Notifier,
    R: Navigate,
    S: Session,
{
    /// Handle a signup form submit.
    ///
    /// All missing inputs are reported before returning, the image on its own toast and the text
    /// fields aggregated into one. A valid form raises an info toast before the request is sent.
    pub async fn submit_signup<B>(&self, form: &SignUpForm, busy: &B) -> SignUpOutcome
    where
        B: BusyFlag + ?Sized,
    {
        if busy.is_busy() {
            tracing::debug!("Ignoring signup submit while a request is in flight");
            return SignUpOutcome::Ignored;
        }

        let request = match validate_signup(form) {
            Ok(request) => request,
            Err(errors) => {
                let errors: Vec<AuthError> = errors.into_iter().map(AuthError::from).collect();
                for err in &errors {
                    tracing::debug!("Signup rejected: {}", err);
                    self.notifier.notify(Toast::error(err.signup_message()));
                }
                return SignUpOutcome::Invalid(errors);
            }
        };

        tracing::debug!(role = %request.role, "Submitting signup");

        let response = {
            let _busy = BusyGuard::engage(busy);
            self.notifier.notify(Toast::info(SIGNUP_PENDING_MESSAGE));
            self.api.signup(&request).await
        };

        let response = match response {
            Ok(response) => response,
            Err(err) => return self.signup_failed(AuthError::from_signup_failure(err)),
        };

        match response.token.as_deref() {
            Some(token) => {
                if let Err(err) = self.tokens.save(token) {
                    return self.signup_failed(err.into());
                }
            }
            None => tracing::warn!("Signup response did not include a token"),
        }

        tracing::info!(role = %request.role, "Signup succeeded");
        let user = self.session.fetch_userdata().await;

        if response.is_pending_approval() {
            tracing::info!("Account is awaiting approval");
            return SignUpOutcome::PendingApproval;
        }

        let navigated = user.is_some();
        if navigated {
            self.navigator.navigate(Destination::Home);
        }

        SignUpOutcome::Registered { navigated }
    }

    fn signup_failed(&self, err: AuthError) -> SignUpOutcome {
        tracing::warn!("Signup failed: {}", err);

        self.notifier.notify(Toast::error(err.signup_message()));
        SignUpOutcome::Failed(err)
    }
}
