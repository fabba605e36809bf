//! One-shot timers behind a trait, so timer-driven state can run against a
//! manual clock in tests.

use gloo_timers::callback::Timeout;

/// Schedules a callback to run once after a delay.
///
/// Dropping the returned handle cancels the callback if it hasn't run.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;
}

/// `setTimeout` through gloo.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl Scheduler for BrowserTimers {
    type Handle = Timeout;

    fn schedule(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(millis, callback)
    }
}
