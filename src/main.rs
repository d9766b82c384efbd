//! Dispenser firmware entry point.
//!
//! Single cooperative loop, no RTOS tasks of our own:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter        LogEventSink       Esp32TimeAdapter    │
//! │  (LevelSensor+Actuator) (EventSink)        (Clock)             │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  level · empty-source timer · policy · indicator       │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Scheduler (scan every 100 ms, indicator every pass)           │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use esp_idf_hal::delay::FreeRtos;
use esp_idf_hal::gpio::{PinDriver, Pull};
use esp_idf_hal::peripherals::Peripherals;
use log::info;

use dispenser::adapters::hardware::HardwareAdapter;
use dispenser::adapters::log_sink::LogEventSink;
use dispenser::adapters::time::Esp32TimeAdapter;
use dispenser::app::ports::Clock;
use dispenser::app::service::{AppService, ServiceDelegate};
use dispenser::config::ControllerConfig;
use dispenser::diagnostics;
use dispenser::pins;
use dispenser::scheduler::Scheduler;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("Starting...");

    // ── 2. Configuration ──────────────────────────────────────
    let config = ControllerConfig::default();
    config.validate()?;
    diagnostics::log_banner(&config)?;

    // ── 3. Claim pins and check them against `dispenser::pins` ─
    let peripherals = Peripherals::take()?;
    let io = peripherals.pins;

    let mut level_sensor = PinDriver::input(io.gpio18)?;
    level_sensor.set_pull(Pull::Up)?;
    let pump = PinDriver::output(io.gpio19)?;
    let heater = PinDriver::output(io.gpio16)?;
    let led = PinDriver::output(io.gpio17)?;
    let builtin_led = PinDriver::output(io.gpio2)?;

    pins::verify_claimed(&[
        ("LEVEL_SENSOR", i32::from(level_sensor.pin())),
        ("PUMP_RELAY", i32::from(pump.pin())),
        ("HEATER_RELAY", i32::from(heater.pin())),
        ("WATER_EMPTY_LED", i32::from(led.pin())),
        ("BUILTIN_LED", i32::from(builtin_led.pin())),
    ])?;

    let mut hw = HardwareAdapter::new(
        level_sensor,
        pump,
        heater,
        led,
        builtin_led,
        config.output_polarity,
    );

    // ── 4. Controller ─────────────────────────────────────────
    let clock = Esp32TimeAdapter::new();
    let mut sink = LogEventSink::new();
    let mut sched = Scheduler::new(config.scan_interval_ms);
    let mut app = AppService::new(config);
    app.start(&mut hw, &mut sink);

    info!("System ready. Entering control loop.");

    // ── 5. Control loop ───────────────────────────────────────
    loop {
        let now = clock.now();
        sched.tick(now, &mut ServiceDelegate::new(&mut app, &mut hw, &mut sink));

        // Yield one RTOS tick so the idle task (and its watchdog) can run.
        FreeRtos::delay_ms(1);
    }
}
