//! Scheduler wiring tests: cadence and pass behaviour through `ServiceDelegate`.

use dispenser::app::ports::{Clock, Output};
use dispenser::app::service::{AppService, ServiceDelegate};
use dispenser::config::ControllerConfig;
use dispenser::scheduler::Scheduler;
use dispenser::time::Millis;

use super::mock_hw::{MockClock, MockHardware, RecordingSink};

fn tick(
    sched: &mut Scheduler,
    clock: &MockClock,
    app: &mut AppService,
    hw: &mut MockHardware,
    sink: &mut RecordingSink,
) -> bool {
    sched.tick(clock.now(), &mut ServiceDelegate::new(app, hw, sink))
}

#[test]
fn scans_read_the_sensor_once_each() {
    let mut app = AppService::new(ControllerConfig::default());
    let mut sched = Scheduler::new(100);
    let mut hw = MockHardware::tank_full();
    let mut sink = RecordingSink::new();
    let clock = MockClock::at(0);
    app.start(&mut hw, &mut sink);
    let reads_after_start = hw.reads;

    for _ in 0..1_000 {
        clock.advance(1);
        tick(&mut sched, &clock, &mut app, &mut hw, &mut sink);
    }

    assert_eq!(sched.passes(), 1_000);
    assert_eq!(sched.scans(), 10);
    assert_eq!(app.scan_count(), 10);
    assert_eq!(hw.reads - reads_after_start, 10);
}

#[test]
fn tick_reports_scan_passes() {
    let mut app = AppService::new(ControllerConfig::default());
    let mut sched = Scheduler::new(100);
    let mut hw = MockHardware::tank_low();
    let mut sink = RecordingSink::new();
    let clock = MockClock::at(99);
    app.start(&mut hw, &mut sink);

    assert!(!tick(&mut sched, &clock, &mut app, &mut hw, &mut sink));
    clock.set(100);
    assert!(tick(&mut sched, &clock, &mut app, &mut hw, &mut sink));
    assert!(app.pump_on());
    clock.set(150);
    assert!(!tick(&mut sched, &clock, &mut app, &mut hw, &mut sink));
    assert_eq!(sched.last_scan(), Millis(100));
}

#[test]
fn stalled_loop_runs_one_scan_on_resume() {
    let mut app = AppService::new(ControllerConfig::default());
    let mut sched = Scheduler::new(100);
    let mut hw = MockHardware::tank_full();
    let mut sink = RecordingSink::new();
    let clock = MockClock::at(100);
    app.start(&mut hw, &mut sink);

    tick(&mut sched, &clock, &mut app, &mut hw, &mut sink);
    clock.set(2_000);
    tick(&mut sched, &clock, &mut app, &mut hw, &mut sink);
    clock.set(2_050);
    tick(&mut sched, &clock, &mut app, &mut hw, &mut sink);

    assert_eq!(app.scan_count(), 2);
    assert_eq!(sched.last_scan(), Millis(2_000));
}

#[test]
fn blinker_runs_between_scans() {
    // Long scan interval: the indicator must still toggle on passes in between.
    let config = ControllerConfig::default()
        .with_scan_interval_ms(2_000)
        .with_empty_threshold_ms(3_000);
    let mut app = AppService::new(config);
    let mut sched = Scheduler::new(2_000);
    let mut hw = MockHardware::tank_low();
    let mut sink = RecordingSink::new();
    let clock = MockClock::at(0);
    app.start(&mut hw, &mut sink);

    // Pump on at 2000, timer armed at 4000, detected at 8000.
    while !app.empty_detected() {
        clock.advance(1);
        tick(&mut sched, &clock, &mut app, &mut hw, &mut sink);
    }
    assert_eq!(clock.now(), Millis(8_000));
    hw.clear();

    for _ in 0..1_999 {
        clock.advance(1);
        tick(&mut sched, &clock, &mut app, &mut hw, &mut sink);
    }

    // Toggles at 8500, 9000, 9500 with no scan in between.
    assert_eq!(hw.writes_to(Output::Indicator), vec![false, true, false]);
    assert_eq!(sched.last_scan(), Millis(8_000));
}
