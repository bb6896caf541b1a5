use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCircleExclamation;
use dioxus_free_icons::Icon;

use crate::client::flow::{
    run_countdown, ApprovalCountdown, Destination, Navigate, APPROVAL_COUNTDOWN_SECONDS,
};

/// Overlay shown after a signup that still needs approval.
///
/// Owns the redirect countdown; unmounting the modal drops the countdown future with it.
#[component]
pub fn ApprovalModal() -> Element {
    let navigator = navigator();
    let mut remaining = use_signal(|| APPROVAL_COUNTDOWN_SECONDS);

    let countdown_navigator = navigator.clone();
    use_future(move || {
        let navigator = countdown_navigator.clone();
        async move {
            run_countdown(ApprovalCountdown::default(), &navigator, |seconds| {
                remaining.set(seconds)
            })
            .await;
        }
    });

    let home_navigator = navigator.clone();
    let go_home = move |_: MouseEvent| home_navigator.navigate(Destination::Home);
    let go_login = move |_: MouseEvent| navigator.navigate(Destination::Login);

    rsx! {
        div {
            class: "modal-backdrop",
            div {
                class: "popup-box",
                role: "dialog",
                "aria-labelledby": "approval-title",
                "aria-describedby": "approval-description",
                div { class: "header",
                    div { class: "icon",
                        Icon {
                            width: 24,
                            height: 24,
                            icon: FaCircleExclamation
                        }
                    }
                    h3 { id: "approval-title",
                        "Approval Pending"
                    }
                }
                div { id: "approval-description", class: "content",
                    p {
                        "Successfully Registered, Awaiting Approval"
                    }
                    div { class: "redirect",
                        p {
                            "Redirecting to Home Page in {remaining}..."
                        }
                        div { class: "content-box",
                            button {
                                class: "button-70",
                                onclick: go_home,
                                "Home"
                            }
                            button {
                                class: "button-70",
                                onclick: go_login,
                                "Login"
                            }
                        }
                    }
                }
            }
        }
    }
}
