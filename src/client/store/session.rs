use async_trait::async_trait;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{api::AuthApi, flow::Session, store::TokenStore},
    model::user::SessionUser,
};

/// Authentication state shared through the component tree
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    /// Set once the first lookup finished, so pages can tell "logged out" from "not known yet"
    pub fetched: bool,
}

/// Signal backed session, refreshed from the backend using the stored token
#[derive(Clone)]
pub struct SessionHandle<A, T> {
    state: Signal<SessionState>,
    api: A,
    tokens: T,
}

impl<A, T> SessionHandle<A, T> {
    pub fn new(state: Signal<SessionState>, api: A, tokens: T) -> Self {
        Self { state, api, tokens }
    }

    pub fn state(&self) -> Signal<SessionState> {
        self.state
    }

    fn store(&self, user: Option<SessionUser>) {
        let mut state = self.state;
        if let Ok(mut state) = state.try_write() {
            state.user = user;
            state.fetched = true;
        };
    }
}

#[async_trait(?Send)]
impl<A, T> Session for SessionHandle<A, T>
where
    A: AuthApi,
    T: TokenStore,
{
    fn userdata(&self) -> Option<SessionUser> {
        self.state
            .try_peek()
            .ok()
            .and_then(|state| state.user.clone())
    }

    async fn fetch_userdata(&self) -> Option<SessionUser> {
        let token = match self.tokens.load() {
            Ok(Some(token)) => token,
            Ok(None) => {
                self.store(None);
                return None;
            }
            Err(err) => {
                tracing::error!("Failed to read auth token: {}", err);
                self.store(None);
                return None;
            }
        };

        let user = match self.api.current_user(&token).await {
            Ok(user) => user,
            Err(err) => {
                tracing::warn!("Failed to fetch session user: {}", err);
                None
            }
        };

        if let Some(user) = &user {
            tracing::info!(user_id = %user.id, role = %user.role, "Session refreshed");
        }

        self.store(user.clone());
        user
    }

    fn logout(&self) {
        if let Err(err) = self.tokens.clear() {
            tracing::error!("Failed to clear auth token: {}", err);
        }

        self.store(None);
        tracing::info!("Logged out");
    }
}
