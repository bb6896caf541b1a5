use std::time::Duration;

use dioxus::prelude::*;

use crate::client::{
    store::{Position, Toast, ToastQueue},
    util::time::sleep,
};

const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// Renders every queued toast. Must be mounted on every page so no notification is lost.
#[component]
pub fn Toaster() -> Element {
    let toasts = use_context::<Signal<ToastQueue>>();
    let queue = toasts.read();
    if queue.is_empty() {
        return rsx! {};
    }

    let position = Position::default();
    let stacked: Vec<(u64, Toast)> = queue
        .iter()
        .filter(|(_, toast)| toast.position == position)
        .cloned()
        .collect();

    rsx! {
        ToastStack { position, toasts: stacked }
    }
}

#[component]
fn ToastStack(position: Position, toasts: Vec<(u64, Toast)>) -> Element {
    let class = format!("toaster {}", position.class());

    rsx! {
        div {
            class: "{class}",
            for (id, toast) in toasts {
                ToastItem { key: "{id}", id, toast }
            }
        }
    }
}

#[component]
fn ToastItem(id: u64, toast: Toast) -> Element {
    let mut toasts = use_context::<Signal<ToastQueue>>();

    use_future(move || async move {
        sleep(TOAST_LIFETIME).await;
        toasts.write().dismiss(id);
    });

    let class = format!("toast {}", toast.severity.class());

    rsx! {
        div {
            class: "{class}",
            role: "status",
            onclick: move |_| toasts.write().dismiss(id),
            "{toast.message}"
        }
    }
}
