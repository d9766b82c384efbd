//! Start-up diagnostics banner.
//!
//! Printed once at boot so a technician with a serial console can confirm
//! the firmware version, pin wiring and active configuration before
//! touching the appliance.

use log::info;

use crate::config::ControllerConfig;
use crate::pins::PIN_TABLE;

/// Platform label reported in the banner.
#[cfg(target_os = "espidf")]
pub const PLATFORM: &str = "ESP32";
#[cfg(not(target_os = "espidf"))]
pub const PLATFORM: &str = "host-sim";

/// Build the banner lines.
pub fn banner_lines(config: &ControllerConfig) -> serde_json::Result<Vec<String>> {
    let mut lines = Vec::with_capacity(PIN_TABLE.len() + 4);
    lines.push(format!("Dispenser v{}", env!("CARGO_PKG_VERSION")));
    lines.push(format!("[PLATFORM] {PLATFORM}"));
    for (role, gpio) in PIN_TABLE {
        lines.push(format!("[PIN] {role}: {gpio}"));
    }
    lines.push(format!(
        "SENSOR_ACTIVE_LOW: {} | EMPTY_THRESHOLD_MS: {}",
        config.sensor_active_low, config.empty_threshold_ms
    ));
    lines.push(format!("[CONFIG] {}", serde_json::to_string(config)?));
    Ok(lines)
}

/// Log the banner through the `log` facade.
pub fn log_banner(config: &ControllerConfig) -> serde_json::Result<()> {
    for line in banner_lines(config)? {
        info!("{}", line);
    }
    Ok(())
}
