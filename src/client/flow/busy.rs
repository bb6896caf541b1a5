use std::{
    cell::Cell,
    sync::atomic::{AtomicBool, Ordering},
};

use dioxus::prelude::*;

/// A flag the page renders as "request in flight"
pub trait BusyFlag {
    fn is_busy(&self) -> bool;
    fn set_busy(&self, busy: bool);
}

impl BusyFlag for Cell<bool> {
    fn is_busy(&self) -> bool {
        self.get()
    }

    fn set_busy(&self, busy: bool) {
        self.set(busy);
    }
}

impl BusyFlag for AtomicBool {
    fn is_busy(&self) -> bool {
        self.load(Ordering::SeqCst)
    }

    fn set_busy(&self, busy: bool) {
        self.store(busy, Ordering::SeqCst);
    }
}

// Writes after the owning page unmounted are dropped.
impl BusyFlag for Signal<bool> {
    fn is_busy(&self) -> bool {
        self.try_peek().map(|busy| *busy).unwrap_or(false)
    }

    fn set_busy(&self, busy: bool) {
        let mut signal = *self;
        if let Ok(mut value) = signal.try_write() {
            *value = busy;
        };
    }
}

/// Holds the flag raised until dropped, so every exit path clears it.
#[must_use = "the flag is cleared as soon as the guard is dropped"]
pub struct BusyGuard<'a, B: BusyFlag + ?Sized> {
    flag: &'a B,
}

impl<'a, B: BusyFlag + ?Sized> BusyGuard<'a, B> {
    pub fn engage(flag: &'a B) -> Self {
        flag.set_busy(true);
        Self { flag }
    }
}

impl<B: BusyFlag + ?Sized> Drop for BusyGuard<'_, B> {
    fn drop(&mut self) {
        self.flag.set_busy(false);
    }
}
