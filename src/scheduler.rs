//! Cooperative tick scheduler.
//!
//! The main loop samples the clock once per pass and hands the reading to
//! [`Scheduler::tick`]. The scheduler decides whether a scan is due and
//! notifies a [`SchedulerDelegate`]; it knows nothing about sensors,
//! relays or LEDs.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  main loop pass                                              │
//! │                                                              │
//! │   now = clock.now()                                          │
//! │     │                                                        │
//! │     ├── now - last_scan >= scan_interval ? ──▶ on_scan(now)  │
//! │     │                                                        │
//! │     └── always ───────────────────────────▶ on_pass(now)    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no backlog: if a pass arrives late, exactly one scan runs and
//! the next deadline is measured from that pass.

use crate::app::ports::SchedulerDelegate;
use crate::time::Millis;

/// The scheduler engine.
pub struct Scheduler {
    scan_interval_ms: u32,
    last_scan: Millis,
    passes: u64,
    scans: u64,
}

impl Scheduler {
    /// The first scan runs once `scan_interval_ms` has elapsed from a
    /// counter value of zero (i.e. from boot).
    pub fn new(scan_interval_ms: u32) -> Self {
        Self {
            scan_interval_ms,
            last_scan: Millis::ZERO,
            passes: 0,
            scans: 0,
        }
    }

    /// Run one pass of the loop. Returns `true` if a scan ran.
    pub fn tick(&mut self, now: Millis, delegate: &mut impl SchedulerDelegate) -> bool {
        self.passes += 1;

        let scan_due = now.elapsed_since(self.last_scan) >= self.scan_interval_ms;
        if scan_due {
            self.last_scan = now;
            self.scans += 1;
            delegate.on_scan(now);
        }

        delegate.on_pass(now);
        scan_due
    }

    /// Total loop passes.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// Total scans dispatched.
    pub fn scans(&self) -> u64 {
        self.scans
    }

    pub fn last_scan(&self) -> Millis {
        self.last_scan
    }
}
