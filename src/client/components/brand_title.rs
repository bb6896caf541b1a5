use dioxus::prelude::*;

use crate::client::router::Route;

#[component]
pub fn BrandTitleButton() -> Element {
    rsx!(
        Link {
            to: Route::Home {},
            div { class: "brand",
                p { class: "brand-name",
                    "LearnHub"
                }
                p { class: "brand-version",
                    "v0.1.0"
                }
            }
        }
    )
}
