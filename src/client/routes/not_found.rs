use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Page { class: "centered",
            div { class: "card",
                h1 { "Page not found" }
                p { "Nothing lives at /{path}." }
                Link { to: Route::Home {}, class: "btn btn-primary", "Back to home" }
            }
        }
    )
}
