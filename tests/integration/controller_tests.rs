//! Integration tests: Scheduler → AppService → mock outputs.
//!
//! Drives the full loop with a fake clock, the way the firmware `main`
//! does, and checks the end-to-end scenarios of the dispenser.

use dispenser::app::events::AppEvent;
use dispenser::app::ports::{Clock, Output};
use dispenser::app::service::{AppService, ServiceDelegate};
use dispenser::config::ControllerConfig;
use dispenser::scheduler::Scheduler;
use dispenser::time::Millis;

use super::mock_hw::{MockClock, MockHardware, RecordingSink};

/// Loop pass granularity used by these tests.
const PASS_MS: u32 = 10;

struct Rig {
    app: AppService,
    sched: Scheduler,
    hw: MockHardware,
    sink: RecordingSink,
    clock: MockClock,
}

impl Rig {
    fn new(config: ControllerConfig, hw: MockHardware, start_ms: u32) -> Self {
        let mut rig = Self {
            sched: Scheduler::new(config.scan_interval_ms),
            app: AppService::new(config),
            hw,
            sink: RecordingSink::new(),
            clock: MockClock::at(start_ms),
        };
        rig.app.start(&mut rig.hw, &mut rig.sink);
        rig
    }

    fn pass(&mut self) -> bool {
        let now = self.clock.now();
        self.sched.tick(
            now,
            &mut ServiceDelegate::new(&mut self.app, &mut self.hw, &mut self.sink),
        )
    }

    /// Advance the clock by `ms` in `PASS_MS` steps, running a pass after each step.
    fn run_for(&mut self, ms: u32) {
        for _ in 0..ms / PASS_MS {
            self.clock.advance(PASS_MS);
            self.pass();
        }
    }

    fn now(&self) -> u32 {
        self.clock.now().as_u32()
    }
}

#[test]
fn continuous_low_water_declares_source_empty() {
    let mut rig = Rig::new(ControllerConfig::default(), MockHardware::tank_low(), 0);

    rig.run_for(100);
    assert!(rig.app.pump_on(), "first scan starts filling");
    assert!(!rig.app.heater_on());

    // Timer arms on the scan after the pump started (t = 200).
    rig.run_for(100);
    let status = rig.app.status();
    assert!(status.timer.active);
    assert_eq!(status.timer.started_at, Millis(200));

    // Exactly threshold elapsed: not yet.
    rig.run_for(300_000);
    assert_eq!(rig.now(), 300_200);
    assert!(!rig.app.empty_detected());
    assert!(rig.app.pump_on());

    // Next scan: strictly past the threshold.
    rig.run_for(100);
    assert!(rig.app.empty_detected());
    assert!(!rig.app.pump_on());
    assert!(!rig.app.heater_on());
    assert!(rig.app.indicator_should_blink());
    assert!(!rig.hw.is_on(Output::Pump));

    // Alert and pump stop come from the same scan.
    let detected_at = rig
        .sink
        .events
        .iter()
        .position(|e| *e == AppEvent::EmptySourceDetected)
        .unwrap();
    assert_eq!(
        rig.sink.events[detected_at + 1],
        AppEvent::PumpChanged { on: false }
    );
}

#[test]
fn brief_ok_reading_restarts_the_timer() {
    let mut rig = Rig::new(ControllerConfig::default(), MockHardware::tank_low(), 0);

    rig.run_for(200_000);
    assert!(rig.app.pump_on());
    assert!(!rig.app.empty_detected());

    // Water reads OK for exactly one scan.
    rig.hw.set_tank(true);
    rig.run_for(100);
    assert!(!rig.app.pump_on());
    assert!(rig.app.heater_on());
    assert!(!rig.app.status().timer.active);
    rig.hw.set_tank(false);

    // 250 s of low water: still under threshold from the new start.
    for _ in 0..2_500 {
        rig.run_for(100);
        assert!(!rig.app.empty_detected(), "fired early at t={}", rig.now());
    }
    assert_eq!(rig.sink.count(AppEvent::EmptySourceDetected), 0);
    assert_eq!(rig.sink.count(AppEvent::EmptyTimerReset), 1);
    assert_eq!(rig.sink.count(AppEvent::EmptyTimerStarted), 2);
}

#[test]
fn full_tank_from_boot_only_heats() {
    let mut rig = Rig::new(ControllerConfig::default(), MockHardware::tank_full(), 0);
    rig.hw.clear();

    rig.run_for(100);
    assert!(rig.app.heater_on(), "heater on at the first scan");

    rig.run_for(60_000);
    assert_eq!(rig.hw.writes, vec![(Output::Heater, true)]);
    assert!(rig.hw.writes_to(Output::Pump).is_empty());
    assert!(rig.hw.writes_to(Output::Indicator).is_empty());
    assert_eq!(rig.sink.count(AppEvent::WaterLevelChanged { ok: true }), 0);
    assert_eq!(rig.app.scan_count(), 601);
}

#[test]
fn water_ok_clears_alert_and_resumes_heating() {
    let config = ControllerConfig::default().with_empty_threshold_ms(1_000);
    let mut rig = Rig::new(config, MockHardware::tank_low(), 0);

    // Detected at t = 1300; the indicator lights on that same pass.
    rig.run_for(1_500);
    assert!(rig.app.empty_detected());
    assert!(rig.hw.is_on(Output::Indicator));

    rig.hw.clear();
    rig.hw.set_tank(true);
    rig.run_for(100);

    assert!(!rig.app.empty_detected());
    assert!(rig.app.heater_on());
    assert!(!rig.app.pump_on());
    // A lit indicator is switched off with one write.
    assert_eq!(rig.hw.writes_to(Output::Indicator), vec![false]);
    assert_eq!(rig.sink.count(AppEvent::EmptySourceCleared), 1);

    rig.run_for(5_000);
    assert_eq!(rig.hw.writes_to(Output::Indicator), vec![false]);
}

#[test]
fn alert_stays_latched_while_water_low() {
    let config = ControllerConfig::default().with_empty_threshold_ms(1_000);
    let mut rig = Rig::new(config, MockHardware::tank_low(), 0);

    rig.run_for(1_500);
    assert!(rig.app.empty_detected());

    rig.run_for(60_000);
    assert!(rig.app.empty_detected());
    assert!(!rig.app.pump_on());
    assert_eq!(rig.sink.count(AppEvent::EmptySourceDetected), 1);
    assert_eq!(rig.sink.count(AppEvent::PumpChanged { on: true }), 1);
}

#[test]
fn indicator_blinks_at_its_own_rate() {
    for scan_interval_ms in [100, 1_000] {
        let config = ControllerConfig::default()
            .with_scan_interval_ms(scan_interval_ms)
            .with_empty_threshold_ms(5_000);
        let mut rig = Rig::new(config, MockHardware::tank_low(), 0);

        while !rig.app.empty_detected() {
            rig.run_for(PASS_MS);
        }
        let first_toggle = rig.now();
        rig.hw.clear();
        rig.run_for(5_000);

        let toggles = rig.hw.writes_to(Output::Indicator);
        assert_eq!(toggles.len(), 10, "scan interval {scan_interval_ms} ms");
        assert!(!toggles[0], "lit on the detecting pass, first toggle goes dark");
        assert_eq!(
            rig.app.status().blink.last_toggle,
            Millis(first_toggle + 5_000)
        );
    }
}

#[test]
fn pump_and_heater_never_energised_together() {
    let config = ControllerConfig::default().with_empty_threshold_ms(2_000);
    let mut rig = Rig::new(config, MockHardware::tank_low(), 0);

    // Flip the tank a few times, then let the source run dry.
    for (ms, ok) in [(500, false), (300, true), (700, false), (200, true), (4_000, false)] {
        rig.hw.set_tank(ok);
        rig.run_for(ms);
    }

    let (mut pump, mut heater) = (false, false);
    for (output, on) in &rig.hw.writes {
        match output {
            Output::Pump => pump = *on,
            Output::Heater => heater = *on,
            Output::Indicator => {}
        }
        assert!(!(pump && heater), "pump and heater both on");
    }
    assert!(rig.app.empty_detected());
}

#[test]
fn detection_survives_clock_overflow() {
    let config = ControllerConfig::default().with_empty_threshold_ms(100_000);
    let start = u32::MAX - 50_000;
    let mut rig = Rig::new(config, MockHardware::tank_low(), start);

    // First pass: last scan is 0, so a scan is due immediately.
    rig.run_for(PASS_MS);
    assert!(rig.app.pump_on());
    rig.run_for(100);
    let armed_at = rig.app.status().timer.started_at;
    assert_eq!(armed_at, Millis(start).wrapping_add(110));

    rig.run_for(100_000);
    assert!(!rig.app.empty_detected(), "exactly threshold, counter wrapped");
    rig.run_for(100);
    assert!(rig.app.empty_detected());
    assert!(rig.now() < start, "counter should have wrapped");
}
