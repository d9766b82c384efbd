//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing one human-readable line per
//! [`AppEvent`] to the `log` facade (UART / USB-CDC on the board). The
//! bracketed tags are what service technicians grep for on the serial
//! console.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Render an event as its console line.
pub fn format_event(event: &AppEvent) -> String {
    match event {
        AppEvent::Started { water_ok } => {
            format!("[START] water level {}", ok_low(*water_ok))
        }
        AppEvent::WaterLevelChanged { ok } => format!("[WATER] Level: {}", ok_low(*ok)),
        AppEvent::PumpChanged { on } => format!("[PUMP] {}", on_off(*on)),
        AppEvent::HeaterChanged { on } => format!("[HEATER] {}", on_off(*on)),
        AppEvent::EmptyTimerStarted => "[TIMER] empty-source detection started".to_string(),
        AppEvent::EmptyTimerReset => {
            "[TIMER] empty-source detection reset, water level OK".to_string()
        }
        AppEvent::EmptySourceDetected => "[ALERT] source container empty!".to_string(),
        AppEvent::EmptySourceCleared => {
            "[INFO] empty-source alert cleared, water level OK".to_string()
        }
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

fn ok_low(ok: bool) -> &'static str {
    if ok { "OK" } else { "LOW" }
}

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        let line = format_event(event);
        if matches!(event, AppEvent::EmptySourceDetected) {
            warn!("{}", line);
        } else {
            info!("{}", line);
        }
    }
}
