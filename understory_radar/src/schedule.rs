// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cancellable deferred-invocation primitives.
//!
//! Both primitives only record *whether* work is due; running the work is up to
//! the owner. Neither reads a clock: time is a caller-supplied monotonic
//! timestamp in milliseconds, the same convention used for pointer timestamps
//! elsewhere in Understory.
//!
//! - [`TickOnce`] collapses any number of requests made during one scheduling tick
//!   into a single invocation at the end of that tick.
//! - [`Debounce`] defers an invocation until a quiet period has elapsed since the
//!   *last* request (trailing edge).
//!
//! ```
//! use understory_radar::schedule::{Debounce, TickOnce};
//!
//! let mut once = TickOnce::new();
//! assert!(once.schedule());
//! assert!(!once.schedule()); // already pending this tick
//! assert!(once.take());
//! assert!(!once.take());
//!
//! let mut debounce = Debounce::new();
//! debounce.schedule(0, 64);
//! debounce.schedule(50, 64); // pushes the deadline to 114
//! assert!(!debounce.poll(100));
//! assert!(debounce.poll(114));
//! assert!(!debounce.poll(200));
//! ```

/// Run-at-most-once-per-tick flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOnce {
    pending: bool,
}

impl TickOnce {
    /// Creates an idle flag.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: false }
    }

    /// Requests an invocation at the end of the current tick.
    ///
    /// Returns `true` if this request armed the flag, `false` if an invocation
    /// was already pending.
    pub fn schedule(&mut self) -> bool {
        let armed = !self.pending;
        self.pending = true;
        armed
    }

    /// Consumes the pending invocation, if any.
    pub fn take(&mut self) -> bool {
        core::mem::take(&mut self.pending)
    }

    /// Drops the pending invocation. Safe to call when nothing is pending.
    pub fn cancel(&mut self) {
        self.pending = false;
    }

    /// Returns `true` if an invocation is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Trailing-edge debounce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debounce {
    deadline: Option<u64>,
}

impl Debounce {
    /// Creates an idle debounce.
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// (Re)arms the debounce so that it fires `delay` milliseconds after `now`.
    ///
    /// A request made while already armed replaces the previous deadline.
    pub fn schedule(&mut self, now: u64, delay: u64) {
        self.deadline = Some(now.saturating_add(delay));
    }

    /// Returns `true` exactly once when `now` has reached the deadline.
    pub fn poll(&mut self, now: u64) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Drops the pending invocation. Safe to call when nothing is pending.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// The time at which the pending invocation fires, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Returns `true` if an invocation is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}
