//! Cancellable timers owned by a component.
//!
//! A [`TimerSlot`] holds at most one pending timeout and an [`IntervalSlot`]
//! at most one running interval. Scheduling a new timer clears the previous
//! handle first, and `clear_on_cleanup` ties the slot to the owning component
//! so nothing fires after unmount.

use std::time::Duration;

use leptos::prelude::*;

/// Slot for a single pending timeout.
#[derive(Clone, Copy)]
pub struct TimerSlot(StoredValue<Option<TimeoutHandle>>);

impl TimerSlot {
    pub fn new() -> Self {
        Self(StoredValue::new(None))
    }

    /// Runs `cb` after `delay`, cancelling whatever was pending.
    pub fn schedule(self, delay: Duration, cb: impl FnOnce() + 'static) {
        self.clear();
        match set_timeout_with_handle(cb, delay) {
            Ok(handle) => self.0.set_value(Some(handle)),
            Err(err) => ::log::error!("failed to schedule timeout: {err:?}"),
        }
    }

    /// Cancels the pending timeout, if any.
    pub fn clear(self) {
        if let Some(handle) = self.0.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }

    pub fn is_pending(self) -> bool {
        self.0.with_value(Option::is_some)
    }

    /// Clears the slot when the current reactive owner is disposed.
    pub fn clear_on_cleanup(self) {
        on_cleanup(move || self.clear());
    }
}

impl Default for TimerSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// Slot for a single running interval.
#[derive(Clone, Copy)]
pub struct IntervalSlot(StoredValue<Option<IntervalHandle>>);

impl IntervalSlot {
    pub fn new() -> Self {
        Self(StoredValue::new(None))
    }

    /// Runs `cb` every `period`, replacing the running interval so the next
    /// tick is a full period away.
    pub fn restart(self, period: Duration, cb: impl Fn() + 'static) {
        self.clear();
        match set_interval_with_handle(cb, period) {
            Ok(handle) => self.0.set_value(Some(handle)),
            Err(err) => ::log::error!("failed to start interval: {err:?}"),
        }
    }

    /// Stops the running interval, if any.
    pub fn clear(self) {
        if let Some(handle) = self.0.try_update_value(Option::take).flatten() {
            handle.clear();
        }
    }

    pub fn is_running(self) -> bool {
        self.0.with_value(Option::is_some)
    }

    /// Clears the slot when the current reactive owner is disposed.
    pub fn clear_on_cleanup(self) {
        on_cleanup(move || self.clear());
    }
}

impl Default for IntervalSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const LONG: Duration = Duration::from_secs(60);

    #[wasm_bindgen_test]
    fn test_schedule_replaces_pending_timeout() {
        let owner = Owner::new();
        owner.set();
        let slot = TimerSlot::new();
        let fired = Rc::new(Cell::new(0));

        let first = Rc::clone(&fired);
        slot.schedule(LONG, move || first.set(first.get() + 1));
        let first_handle = slot.0.with_value(|h| *h);

        let second = Rc::clone(&fired);
        slot.schedule(LONG, move || second.set(second.get() + 10));

        assert!(slot.is_pending());
        assert_ne!(slot.0.with_value(|h| *h), first_handle);
        assert_eq!(fired.get(), 0);
    }

    #[wasm_bindgen_test]
    fn test_clear_timeout() {
        let owner = Owner::new();
        owner.set();
        let slot = TimerSlot::new();
        slot.schedule(LONG, || {});
        slot.clear();
        assert!(!slot.is_pending());
        slot.clear();
        assert!(!slot.is_pending());
    }

    #[wasm_bindgen_test]
    fn test_restart_replaces_interval() {
        let owner = Owner::new();
        owner.set();
        let slot = IntervalSlot::new();
        slot.restart(LONG, || {});
        let first_handle = slot.0.with_value(|h| *h);

        slot.restart(LONG, || {});
        assert!(slot.is_running());
        assert_ne!(slot.0.with_value(|h| *h), first_handle);

        slot.clear();
        assert!(!slot.is_running());
    }
}
