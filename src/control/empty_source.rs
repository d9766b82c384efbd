//! Empty-source detector.
//!
//! The source container (gallon) is never sensed directly. Instead, if the
//! pump has been running for longer than `threshold_ms` and the tank still
//! reads low, the source is assumed to be empty.
//!
//! ## Lifecycle
//!
//! 1. Pump on and water low: arm the timer (once; re-arming does not
//!    restart the clock).
//! 2. Water OK: disarm the timer and clear any previous alert. An OK reading
//!    always wins over a stale alert.
//! 3. Pump off and water low: disarm the timer silently.
//! 4. Armed for strictly more than `threshold_ms`: latch the alert and
//!    disarm. The alert stays latched until step 2 clears it.
//!
//! Evaluated once per scan, before the policy, with the same water reading.

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::time::Millis;

/// Single-shot interval timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptySourceTimer {
    pub active: bool,
    pub started_at: Millis,
}

/// Timer plus the latched "source empty" flag.
#[derive(Debug, Clone)]
pub struct EmptySourceDetector {
    timer: EmptySourceTimer,
    detected: bool,
    threshold_ms: u32,
}

impl EmptySourceDetector {
    pub fn new(threshold_ms: u32) -> Self {
        Self {
            timer: EmptySourceTimer::default(),
            detected: false,
            threshold_ms,
        }
    }

    /// Run one scan's worth of timer logic. Returns the (possibly updated)
    /// detected flag.
    pub fn update(
        &mut self,
        pump_on: bool,
        water_ok: bool,
        now: Millis,
        sink: &mut impl EventSink,
    ) -> bool {
        if pump_on && !water_ok {
            if !self.timer.active {
                self.timer = EmptySourceTimer { active: true, started_at: now };
                sink.emit(&AppEvent::EmptyTimerStarted);
            }
        } else if water_ok {
            if self.timer.active {
                self.timer.active = false;
                sink.emit(&AppEvent::EmptyTimerReset);
            }
            if self.detected {
                self.detected = false;
                sink.emit(&AppEvent::EmptySourceCleared);
            }
        } else {
            self.timer.active = false;
        }

        if self.timer.active && now.elapsed_since(self.timer.started_at) > self.threshold_ms {
            self.detected = true;
            self.timer.active = false;
            sink.emit(&AppEvent::EmptySourceDetected);
        }

        self.detected
    }

    /// Whether the source is currently considered empty.
    pub fn detected(&self) -> bool {
        self.detected
    }

    pub fn timer(&self) -> EmptySourceTimer {
        self.timer
    }
}
