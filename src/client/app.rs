use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::HttpAuthApi,
    config::Config,
    context::{use_session, SharedTokenStore},
    flow::Session,
    router::Route,
    store::{MemoryTokenStore, PlatformTokenStore, SessionState, ToastQueue},
};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn load_config() -> Config {
    match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            let config = Config::default();
            tracing::error!(
                "Configuration error: {}, falling back to {}",
                err,
                config.api_base_url
            );
            config
        }
    }
}

fn open_token_store() -> SharedTokenStore {
    match PlatformTokenStore::open() {
        Ok(store) => Rc::new(store),
        Err(err) => {
            tracing::error!(
                "Token storage unavailable, login will not survive a reload: {}",
                err
            );
            Rc::new(MemoryTokenStore::new())
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(|| HttpAuthApi::new(load_config()));
    use_context_provider(open_token_store);
    use_context_provider(|| Signal::new(SessionState::default()));
    use_context_provider(|| Signal::new(ToastQueue::default()));

    // Restore the session from a previously stored token
    let session = use_session();
    use_future(move || {
        let session = session.clone();
        async move {
            session.fetch_userdata().await;
        }
    });

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Router::<Route> {}
    }
}
