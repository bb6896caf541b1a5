use dioxus_logger::tracing;

use crate::{
    client::{
        api::AuthApi,
        error::AuthError,
        flow::{
            validation::validate_login, BusyFlag, BusyGuard, Destination, Navigate, Notifier,
            PageServices, Session,
        },
        store::{Toast, TokenStore},
    },
    model::auth::Role,
};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Successfully logged in";

#[derive(Debug, Default, Clone, PartialEq)]
pub struct LoginForm {
    pub role: Role,
    pub email: String,
    pub password: String,
}

#[derive(Debug)]
pub enum LoginOutcome {
    /// Another attempt was still in flight.
    Ignored,
    /// Token stored. `navigated` is set once the refreshed session confirmed a user.
    LoggedIn { navigated: bool },
    Failed(AuthError),
}

impl LoginOutcome {
    /// The attempt ended without a login, so the page is in charge of redirects again.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
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
    /// Handle a login form submit.
    ///
    /// Issues at most one request. The busy flag is raised only for the duration of that request.
    /// On success the token is persisted, the session is refreshed once, and the user is sent to
    /// the course page only if the refreshed session holds a user. Every failure ends in a single
    /// error toast.
    pub async fn submit_login<B>(&self, form: &LoginForm, busy: &B) -> LoginOutcome
    where
        B: BusyFlag + ?Sized,
    {
        if busy.is_busy() {
            tracing::debug!("Ignoring login submit while a request is in flight");
            return LoginOutcome::Ignored;
        }

        let request = match validate_login(form) {
            Ok(request) => request,
            Err(err) => return self.login_failed(err.into()),
        };

        tracing::debug!(role = %request.role, "Submitting login");

        let response = {
            let _busy = BusyGuard::engage(busy);
            self.api.login(&request).await
        };

        let token = match response {
            Ok(response) => match response.token {
                Some(token) => token,
                None => return self.login_failed(AuthError::MissingToken),
            },
            Err(err) => return self.login_failed(AuthError::from_login_failure(err)),
        };

        if let Err(err) = self.tokens.save(&token) {
            tracing::error!("Failed to persist auth token: {}", err);
            return self.login_failed(err.into());
        }

        tracing::info!(role = %request.role, "Login succeeded");
        self.notifier.notify(Toast::success(LOGIN_SUCCESS_MESSAGE));

        let navigated = match self.session.fetch_userdata().await {
            Some(_) => {
                self.navigator.navigate(Destination::Course);
                true
            }
            None => {
                tracing::warn!("Session is still empty after login, staying on the page");
                false
            }
        };

        LoginOutcome::LoggedIn { navigated }
    }

    fn login_failed(&self, err: AuthError) -> LoginOutcome {
        match &err {
            AuthError::Validation(_) => tracing::debug!("Login rejected: {}", err),
            _ => tracing::warn!("Login failed: {}", err),
        }

        self.notifier.notify(Toast::error(err.login_message()));
        LoginOutcome::Failed(err)
    }
}
