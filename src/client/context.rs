//! Hooks that assemble the page collaborators from the context provided by [`App`](crate::client::App).

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus::router::Navigator;

use crate::client::{
    api::HttpAuthApi,
    flow::PageServices,
    store::{SessionHandle, SessionState, ToastQueue, TokenStore},
};

pub type SharedTokenStore = Rc<dyn TokenStore>;
pub type AppSession = SessionHandle<HttpAuthApi, SharedTokenStore>;
pub type AppServices =
    PageServices<HttpAuthApi, SharedTokenStore, Signal<ToastQueue>, Navigator, AppSession>;

pub fn use_session() -> AppSession {
    let api = use_context::<HttpAuthApi>();
    let tokens = use_context::<SharedTokenStore>();
    let state = use_context::<Signal<SessionState>>();

    SessionHandle::new(state, api, tokens)
}

pub fn use_page_services() -> AppServices {
    let session = use_session();
    let api = use_context::<HttpAuthApi>();
    let tokens = use_context::<SharedTokenStore>();
    let toasts = use_context::<Signal<ToastQueue>>();

    PageServices::new(api, tokens, toasts, navigator(), session)
}
