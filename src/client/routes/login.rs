use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::Page,
        context::use_page_services,
        flow::LoginForm,
        router::Route,
        store::SessionState,
    },
    model::auth::Role,
};

#[component]
pub fn Login() -> Element {
    let services = use_page_services();
    let session = use_context::<Signal<SessionState>>();
    let mut form = use_signal(LoginForm::default);
    let busy = use_signal(|| false);
    let mut submitted = use_signal(|| false);

    // Users restored from a stored token skip the form. After a submit the login flow navigates.
    let redirect = navigator();
    use_effect(move || {
        if session.read().user.is_some() && !*submitted.peek() {
            redirect.push(Route::Course {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let services = services.clone();
        let form = form.read().clone();
        spawn(async move {
            submitted.set(true);
            let outcome = services.submit_login(&form, &busy).await;
            if outcome.is_failure() {
                submitted.set(false);
            }
        });
    };

    let current_role = form.read().role;

    rsx! {
        Title { "Log In" }
        Page { class: "centered",
            div { class: "auth-container",
                div { class: "auth-heading", "Log In" }
                div { class: "auth-content",
                    form { class: "auth-form", onsubmit: on_submit,
                        div { class: "input-wrapper",
                            label { r#for: "role", "Role" }
                            select {
                                id: "role",
                                name: "role",
                                onchange: move |evt| {
                                    if let Ok(role) = evt.value().parse::<Role>() {
                                        form.write().role = role;
                                    }
                                },
                                for role in Role::ALL {
                                    option {
                                        key: "{role}",
                                        value: role.as_str(),
                                        selected: role == current_role,
                                        {role.label()}
                                    }
                                }
                            }
                        }
                        div { class: "input-wrapper",
                            label { r#for: "email", "Email" }
                            input {
                                r#type: "text",
                                id: "email",
                                name: "email",
                                value: form.read().email.clone(),
                                oninput: move |evt| form.write().email = evt.value(),
                            }
                        }
                        div { class: "input-wrapper",
                            label { r#for: "password", "Password" }
                            input {
                                r#type: "password",
                                id: "password",
                                name: "password",
                                value: form.read().password.clone(),
                                oninput: move |evt| form.write().password = evt.value(),
                            }
                        }
                        button {
                            class: "btn-submit",
                            r#type: "submit",
                            disabled: busy(),
                            if busy() { "Logging in..." } else { "Submit" }
                        }
                        div { class: "auth-switch",
                            "Don't have an account?"
                            Link { to: Route::SignUp {}, " Sign Up" }
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
