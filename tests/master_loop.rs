//! End-to-end tests of the cooperative main loop with simulated devices.

mod common;

use core::cell::RefCell;
use std::rc::Rc;

use common::{
    LineHandle, PinLog, RecordingPin, ScriptInput, SimRtc, SimRtcState, final_levels, pin_log,
    scripted_input, sim_rtc,
};
use embassy_time::Instant;
use master_clock::{
    ClockTime, Error, FourBitDigit, MasterClock, NixieDisplay, OutputArray, RotaryDial, TickFlag,
};

const ANODE_IDS: [usize; 6] = [0, 1, 2, 3, 4, 5];
const VALUE_IDS: [usize; 4] = [10, 11, 12, 13];

/// Poll cadence: 5 ms steps, above the dial's 100 Hz contract.
const STEP_MS: u64 = 5;

struct Harness {
    master: MasterClock<'static, ScriptInput, RecordingPin, SimRtc>,
    dial: LineHandle,
    rtc: Rc<RefCell<SimRtcState>>,
    log: PinLog,
    tick: &'static TickFlag,
    now_ms: u64,
}

fn harness(time: ClockTime) -> Harness {
    // Tests in this binary run concurrently, so each harness leaks its own
    // flag rather than sharing a static.
    let tick: &'static TickFlag = Box::leak(Box::new(TickFlag::new()));

    let (input, dial) = scripted_input();
    let log = pin_log();
    let anodes = OutputArray::new(ANODE_IDS.map(|id| RecordingPin::new(id, &log)));
    let value_lines = FourBitDigit::new(VALUE_IDS.map(|id| RecordingPin::new(id, &log)));
    let (sim, rtc) = sim_rtc(time);

    let master = MasterClock::new(
        RotaryDial::new(input),
        NixieDisplay::new(anodes, value_lines),
        sim,
        tick,
    );
    Harness {
        master,
        dial,
        rtc,
        log,
        tick,
        now_ms: 1_000,
    }
}

impl Harness {
    fn step(&mut self) {
        self.now_ms += STEP_MS;
        self.master
            .step(Instant::from_millis(self.now_ms))
            .expect("simulated devices never fail");
    }

    fn steps(&mut self, count: usize) {
        for _ in 0..count {
            self.step();
        }
    }

    /// One clean dial pulse: 60 ms high, 40 ms low.
    fn pulse(&mut self) {
        self.dial.set(true);
        self.steps(12);
        self.dial.set(false);
        self.steps(8);
    }

    /// The six digits rendered by the next full multiplex cycle.
    fn rendered_digits(&mut self) -> [u8; 6] {
        // Align to the start of the cycle: step until the hour-tens anode
        // lights.
        loop {
            self.log.borrow_mut().clear();
            self.step();
            if final_levels(&self.log, &ANODE_IDS)[0] {
                break;
            }
        }

        let mut digits = [0u8; 6];
        digits[0] = self.committed_value();
        for digit in digits.iter_mut().skip(1) {
            self.log.borrow_mut().clear();
            self.step();
            *digit = self.committed_value();
        }
        digits
    }

    /// The value on the four shared lines at the end of the current log.
    fn committed_value(&self) -> u8 {
        final_levels(&self.log, &VALUE_IDS)
            .iter()
            .enumerate()
            .map(|(bit, &high)| u8::from(high) << bit)
            .sum()
    }
}

fn time(hour: u8, minute: u8, second: u8) -> ClockTime {
    ClockTime::new(hour, minute, second).expect("valid time")
}

#[test]
fn tick_updates_time_state_and_rendering() {
    let mut harness = harness(time(13, 5, 59));
    harness.master.begin().expect("rtc present");
    assert_eq!(harness.master.time(), time(13, 5, 59));

    // A second elapses: the clock chip rolls over and the PPS edge raises
    // the flag.
    harness.rtc.borrow_mut().time = time(13, 6, 0);
    harness.tick.raise();
    harness.step();
    assert_eq!(harness.master.time(), time(13, 6, 0));

    // The next full multiplex cycle renders 13:06:00, seconds showing 0/0.
    let digits = harness.rendered_digits();
    assert_eq!(digits, [1, 3, 0, 6, 0, 0]);
}

#[test]
fn time_state_is_untouched_until_tick() {
    let mut harness = harness(time(8, 0, 0));
    harness.master.begin().expect("rtc present");

    // The chip has moved on, but without a tick the state stays put.
    harness.rtc.borrow_mut().time = time(8, 0, 1);
    harness.steps(50);
    assert_eq!(harness.master.time(), time(8, 0, 0));

    harness.tick.raise();
    harness.step();
    assert_eq!(harness.master.time(), time(8, 0, 1));
}

#[test]
fn spurious_tick_with_unchanged_time_is_ignored() {
    let mut harness = harness(time(9, 30, 15));
    harness.master.begin().expect("rtc present");

    harness.tick.raise();
    harness.step();
    assert_eq!(harness.master.time(), time(9, 30, 15));
    assert!(harness.rtc.borrow().adjustments.is_empty());
}

#[test]
fn ten_pulse_rotation_decrements_one_second() {
    let mut harness = harness(time(12, 0, 0));
    harness.master.begin().expect("rtc present");

    for _ in 0..10 {
        harness.pulse();
    }
    // Dwell past the ceiling completes the rotation as digit 0 → -1 s.
    harness.steps(60);

    assert_eq!(harness.rtc.borrow().adjustments, [time(11, 59, 59)]);
    // The time state only catches up on the next tick.
    assert_eq!(harness.master.time(), time(12, 0, 0));
    harness.tick.raise();
    harness.step();
    assert_eq!(harness.master.time(), time(11, 59, 59));
}

#[test]
fn dialing_five_springs_forward_one_hour() {
    let mut harness = harness(time(1, 15, 30));
    harness.master.begin().expect("rtc present");

    for _ in 0..5 {
        harness.pulse();
    }
    harness.steps(60);

    assert_eq!(harness.rtc.borrow().adjustments, [time(2, 15, 30)]);
}

#[test]
fn missing_rtc_is_fatal_at_begin() {
    let mut harness = harness(time(0, 0, 0));
    harness.rtc.borrow_mut().present = false;

    let err = harness.master.begin().expect_err("no clock chip");
    assert!(matches!(err, Error::RtcNotFound));
}
