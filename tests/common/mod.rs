//! Test doubles shared by the host-level integration tests.
#![allow(dead_code, reason = "each test binary uses a subset of these helpers")]

use core::cell::RefCell;
use core::convert::Infallible;
use std::rc::Rc;
use std::vec::Vec;

use embassy_time::Instant;
use embedded_hal::digital::{ErrorType, OutputPin};
use master_clock::{ClockTime, DebouncedInput, Error, Result, Rtc};

// ============================================================================
// Scripted debounced input
// ============================================================================

#[derive(Default)]
struct LineState {
    level: bool,
    changed: bool,
}

/// A [`DebouncedInput`] whose settled level is driven by the test through a
/// [`LineHandle`].
pub struct ScriptInput(Rc<RefCell<LineState>>);

/// The test's side of a [`ScriptInput`].
#[derive(Clone)]
pub struct LineHandle(Rc<RefCell<LineState>>);

impl LineHandle {
    /// Settle the line at a level; the next poll reports the change.
    pub fn set(&self, level: bool) {
        let mut state = self.0.borrow_mut();
        if state.level != level {
            state.level = level;
            state.changed = true;
        }
    }
}

/// A scripted input starting out settled low, plus its driving handle.
pub fn scripted_input() -> (ScriptInput, LineHandle) {
    let shared = Rc::new(RefCell::new(LineState::default()));
    (ScriptInput(Rc::clone(&shared)), LineHandle(shared))
}

impl DebouncedInput for ScriptInput {
    fn update(&mut self, _now: Instant) -> bool {
        core::mem::take(&mut self.0.borrow_mut().changed)
    }

    fn read(&self) -> bool {
        self.0.borrow().level
    }
}

// ============================================================================
// Recording output pins
// ============================================================================

/// One level write: which pin, and the level it was driven to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PinEvent {
    pub pin: usize,
    pub high: bool,
}

pub type PinLog = Rc<RefCell<Vec<PinEvent>>>;

/// An infallible output pin that appends every write to a shared log.
pub struct RecordingPin {
    id: usize,
    log: PinLog,
}

impl RecordingPin {
    pub fn new(id: usize, log: &PinLog) -> Self {
        Self {
            id,
            log: Rc::clone(log),
        }
    }
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> core::result::Result<(), Infallible> {
        self.log.borrow_mut().push(PinEvent {
            pin: self.id,
            high: false,
        });
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Infallible> {
        self.log.borrow_mut().push(PinEvent {
            pin: self.id,
            high: true,
        });
        Ok(())
    }
}

pub fn pin_log() -> PinLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Replay a log, returning the final level of each pin id in `pins`.
pub fn final_levels(log: &PinLog, pins: &[usize]) -> Vec<bool> {
    pins.iter()
        .map(|&id| {
            log.borrow()
                .iter()
                .rev()
                .find(|event| event.pin == id)
                .map(|event| event.high)
                .unwrap_or(false)
        })
        .collect()
}

// ============================================================================
// Simulated realtime clock
// ============================================================================

pub struct SimRtcState {
    pub time: ClockTime,
    pub lost_power: bool,
    pub present: bool,
    pub adjustments: Vec<ClockTime>,
}

/// An in-memory [`Rtc`] with scriptable time and a log of adjustments.
pub struct SimRtc(Rc<RefCell<SimRtcState>>);

pub fn sim_rtc(time: ClockTime) -> (SimRtc, Rc<RefCell<SimRtcState>>) {
    let shared = Rc::new(RefCell::new(SimRtcState {
        time,
        lost_power: false,
        present: true,
        adjustments: Vec::new(),
    }));
    (SimRtc(Rc::clone(&shared)), shared)
}

impl Rtc for SimRtc {
    fn begin(&mut self) -> Result<()> {
        if self.0.borrow().present {
            Ok(())
        } else {
            Err(Error::RtcNotFound)
        }
    }

    fn now(&mut self) -> Result<ClockTime> {
        Ok(self.0.borrow().time)
    }

    fn adjust(&mut self, time: ClockTime) -> Result<()> {
        let mut state = self.0.borrow_mut();
        state.time = time;
        state.adjustments.push(time);
        Ok(())
    }

    fn lost_power(&mut self) -> Result<bool> {
        Ok(self.0.borrow().lost_power)
    }
}
