use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::flow::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Info => "toast-info",
            Self::Success => "toast-success",
            Self::Error => "toast-error",
        }
    }
}

/// Placement hint for the toaster. Every page toast is shown top center.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    #[default]
    TopCenter,
}

impl Position {
    pub fn class(&self) -> &'static str {
        match self {
            Self::TopCenter => "toaster-top-center",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub position: Position,
}

impl Toast {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            position: Position::default(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }
}

/// Toasts currently on screen, each tagged with an id so it can dismiss itself
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<(u64, Toast)>,
}

impl ToastQueue {
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push((id, toast));
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|(toast_id, _)| *toast_id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &(u64, Toast)> {
        self.toasts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Notifier for Signal<ToastQueue> {
    fn notify(&self, toast: Toast) {
        tracing::debug!(severity = ?toast.severity, "{}", toast.message);

        let mut queue = *self;
        match queue.try_write() {
            Ok(mut queue) => {
                queue.push(toast);
            }
            Err(err) => tracing::warn!("Dropped toast, toaster is gone: {:?}", err),
        };
    }
}
