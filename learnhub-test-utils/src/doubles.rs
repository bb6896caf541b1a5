//! Recording stand-ins for the collaborators a page talks to.
//!
//! Each double is a cheap handle over shared state, so a test can hand one clone to
//! `PageServices` and keep another to inspect what the page did.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use async_trait::async_trait;
use learnhub::{
    client::{
        flow::{Destination, Navigate, Notifier, Session},
        store::{Severity, Toast},
    },
    model::user::SessionUser,
};

#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    toasts: Rc<RefCell<Vec<Toast>>>,
}

impl RecordingNotifier {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.borrow().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.toasts
            .borrow()
            .iter()
            .map(|toast| toast.message.clone())
            .collect()
    }

    /// Messages of every toast with the given severity, in order
    pub fn messages_with(&self, severity: Severity) -> Vec<String> {
        self.toasts
            .borrow()
            .iter()
            .filter(|toast| toast.severity == severity)
            .map(|toast| toast.message.clone())
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, toast: Toast) {
        self.toasts.borrow_mut().push(toast);
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<Destination>>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<Destination> {
        self.visited.borrow().clone()
    }
}

impl Navigate for RecordingNavigator {
    fn navigate(&self, to: Destination) {
        self.visited.borrow_mut().push(to);
    }
}

/// Session whose refresh result is scripted by the test
#[derive(Debug, Clone, Default)]
pub struct StubSession {
    current: Rc<RefCell<Option<SessionUser>>>,
    after_fetch: Rc<RefCell<Option<SessionUser>>>,
    fetch_calls: Rc<Cell<usize>>,
}

impl StubSession {
    /// A session that stays empty after a refresh
    pub fn empty() -> Self {
        Self::default()
    }

    /// A session that reports `user` once refreshed
    pub fn resolving_to(user: SessionUser) -> Self {
        let session = Self::default();
        *session.after_fetch.borrow_mut() = Some(user);
        session
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.get()
    }
}

#[async_trait(?Send)]
impl Session for StubSession {
    fn userdata(&self) -> Option<SessionUser> {
        self.current.borrow().clone()
    }

    async fn fetch_userdata(&self) -> Option<SessionUser> {
        self.fetch_calls.set(self.fetch_calls.get() + 1);

        let user = self.after_fetch.borrow().clone();
        *self.current.borrow_mut() = user.clone();
        user
    }

    fn logout(&self) {
        self.current.borrow_mut().take();
    }
}
