use std::time::Duration;

use dioxus_logger::tracing;

use crate::client::{
    flow::{Destination, Navigate},
    util::time::sleep,
};

/// Seconds shown in the approval modal before the automatic redirect
pub const APPROVAL_COUNTDOWN_SECONDS: u32 = 5;

const TICK: Duration = Duration::from_secs(1);

/// Countdown shown while an account awaits approval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApprovalCountdown {
    remaining: u32,
}

impl Default for ApprovalCountdown {
    fn default() -> Self {
        Self::new(APPROVAL_COUNTDOWN_SECONDS)
    }
}

impl ApprovalCountdown {
    pub fn new(seconds: u32) -> Self {
        Self { remaining: seconds }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Advance by one second, returning the new value. Stops at zero.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }
}

/// Drive `countdown` to zero with one tick per second, then redirect home.
///
/// The counter is owned by this future, so dropping it (modal closed, page unmounted) stops the
/// countdown without leaving a timer behind. `on_tick` receives each new value for display.
pub async fn run_countdown<R, F>(mut countdown: ApprovalCountdown, navigator: &R, mut on_tick: F)
where
    R: Navigate + ?Sized,
    F: FnMut(u32),
{
    while !countdown.is_expired() {
        sleep(TICK).await;
        on_tick(countdown.tick());
    }

    tracing::debug!("Approval countdown finished, redirecting home");
    navigator.navigate(Destination::Home);
}
