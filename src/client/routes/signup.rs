use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::{ApprovalModal, Page},
        context::use_page_services,
        flow::SignUpForm,
        router::Route,
        store::SessionState,
    },
    model::auth::{ProfileImage, Role},
};

/// Read the first picked file into memory, `None` when nothing usable was picked
async fn read_profile_image(evt: &FormEvent) -> Option<ProfileImage> {
    let file = evt.files().into_iter().next()?;

    match file.read_bytes().await {
        Ok(bytes) => Some(ProfileImage {
            file_name: file.name(),
            content_type: file.content_type(),
            bytes: bytes.to_vec(),
        }),
        Err(err) => {
            tracing::warn!("Failed to read profile image: {:?}", err);
            None
        }
    }
}

#[component]
pub fn SignUp() -> Element {
    let services = use_page_services();
    let session = use_context::<Signal<SessionState>>();
    let mut form = use_signal(SignUpForm::default);
    let busy = use_signal(|| false);
    let mut awaiting_approval = use_signal(|| false);
    let mut submitted = use_signal(|| false);

    // Sessions restored from a stored token; after a submit the signup flow navigates
    let redirect = navigator();
    use_effect(move || {
        if session.read().user.is_some() && !awaiting_approval() && !*submitted.peek() {
            redirect.push(Route::Home {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let services = services.clone();
        let form = form.read().clone();
        spawn(async move {
            submitted.set(true);
            let outcome = services.submit_signup(&form, &busy).await;
            if outcome.shows_approval_modal() {
                awaiting_approval.set(true);
            } else if outcome.is_failure() {
                submitted.set(false);
            }
        });
    };

    let current_role = form.read().role;

    rsx! {
        Title { "Sign Up" }
        if awaiting_approval() {
            ApprovalModal {}
        }
        Page { class: "centered",
            div { class: "auth-container",
                div { class: "auth-heading", "Sign Up" }
                div { class: "auth-content",
                    form { class: "auth-form", onsubmit: on_submit,
                        div { class: "input-wrapper",
                            label { r#for: "role", "Role" }
                            div { class: "custom-select",
                                select {
                                    id: "role",
                                    name: "role",
                                    onchange: move |evt| {
                                        form.write().role = evt.value().parse::<Role>().ok();
                                    },
                                    for role in Role::ALL {
                                        option {
                                            key: "{role}",
                                            value: role.as_str(),
                                            selected: Some(role) == current_role,
                                            {role.label()}
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "input-wrapper",
                            label {
                                "Username:"
                                input {
                                    r#type: "text",
                                    name: "username",
                                    value: form.read().username.clone(),
                                    oninput: move |evt| form.write().username = evt.value(),
                                }
                            }
                        }
                        div { class: "input-wrapper",
                            label {
                                "Email:"
                                input {
                                    r#type: "email",
                                    name: "email",
                                    value: form.read().email.clone(),
                                    oninput: move |evt| form.write().email = evt.value(),
                                }
                            }
                        }
                        div { class: "input-wrapper",
                            label {
                                "Password:"
                                input {
                                    r#type: "password",
                                    name: "password",
                                    value: form.read().password.clone(),
                                    oninput: move |evt| form.write().password = evt.value(),
                                }
                            }
                        }
                        div { class: "input-wrapper",
                            label {
                                "Profile Image:"
                                input {
                                    r#type: "file",
                                    name: "profileImage",
                                    accept: "image/*",
                                    onchange: move |evt| async move {
                                        let image = read_profile_image(&evt).await;
                                        form.write().profile_image = image;
                                    },
                                }
                            }
                        }
                        button {
                            class: "btn-submit",
                            r#type: "submit",
                            disabled: busy(),
                            if busy() { "Signing up..." } else { "Submit" }
                        }
                        div { class: "auth-switch",
                            "Already have an account?"
                            Link { to: Route::Login {}, " Log In" }
                        }
                    }
                }
                if busy() {
                    div { class: "progress-toaster",
                        span { class: "loader" }
                        "Backend call in progress..."
                    }
                }
            }
        }
    }
}
