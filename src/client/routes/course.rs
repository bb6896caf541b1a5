use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route, store::SessionState};

/// Landing page after login. Course content itself is served elsewhere.
#[component]
pub fn Course() -> Element {
    let session = use_context::<Signal<SessionState>>();
    let state = session.read();

    rsx!(
        Title { "Your courses" }
        Page { class: "centered",
            div { class: "card",
                if let Some(user) = &state.user {
                    h1 { "Welcome back, {user.username}" }
                    p { "Signed in as {user.email} ({user.role})" }
                    if let Some(image) = &user.profile_image {
                        img { class: "avatar", src: "{image}", alt: "{user.username}" }
                    }
                } else if state.fetched {
                    h1 { "You are not logged in" }
                    Link { to: Route::Login {}, class: "btn btn-primary", "Log In" }
                } else {
                    div { class: "skeleton" }
                }
            }
        }
    )
}
