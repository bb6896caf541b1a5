use dioxus::prelude::*;

use crate::client::{
    components::{BrandTitleButton, Toaster},
    context::use_session,
    flow::Session,
    router::Route,
};

/// Landing navbar shared by the public pages, with the toaster mounted below it
#[component]
pub fn Navbar() -> Element {
    let session = use_session();
    let state = session.state();
    let navigator = navigator();

    let logout = move |_: MouseEvent| {
        session.logout();
        navigator.push(Route::Home {});
    };

    rsx! {
        nav {
            class: "navbar",
            div {
                class: "navbar-start",
                BrandTitleButton {}
            }
            div {
                class: "navbar-end",
                if state.read().user.is_some() {
                    Link {
                        to: Route::Course {},
                        class: "btn btn-link",
                        "Courses"
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: logout,
                        "Logout"
                    }
                } else {
                    Link {
                        to: Route::Login {},
                        class: "btn btn-link",
                        "Log In"
                    }
                    Link {
                        to: Route::SignUp {},
                        class: "btn btn-primary",
                        "Sign Up"
                    }
                }
            }
        }

        Toaster {}
        Outlet::<Route> {}
    }
}
