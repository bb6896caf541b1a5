use dioxus::document::{Meta, Title};
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route, store::SessionState};

#[component]
pub fn Home() -> Element {
    let session = use_context::<Signal<SessionState>>();

    rsx!(
        Title { "LearnHub" }
        Meta {
            name: "description",
            content: "Courses from instructors you can trust."
        }
        Page { class: "centered",
            div { class: "hero",
                h1 { "LearnHub" }
                p { "Learn from instructors, track your courses, and pick up where you left off." }
                div { class: "hero-actions",
                    if session.read().user.is_some() {
                        Link { to: Route::Course {}, class: "btn btn-primary", "Go to your courses" }
                    } else if session.read().fetched {
                        Link { to: Route::Login {}, class: "btn btn-outline", "Log In" }
                        Link { to: Route::SignUp {}, class: "btn btn-primary", "Sign Up" }
                    }
                }
            }
        }
    )
}
