//! Rotary dial pulse decoder.
//!
//! A rotary telephone dial produces one clean 0→1→0 pulse per unit of the
//! dialed digit (ten pulses for the digit 0). [`RotaryDial`] consumes a
//! debounced level once per poll and runs the dial state machine: it counts
//! rising edges while a rotation is in progress and completes the rotation
//! when the line has been quiet for longer than [`ROTATION_DWELL`].
//!
//! The decoder must be polled at [`DIAL_POLL_HZ`](crate::DIAL_POLL_HZ) or
//! faster; pulses can be as short as ~100 ms and a slower poll rate can miss
//! them entirely. The current instant is passed in by the caller so the
//! decoder never reads a clock of its own.

use embassy_time::Instant;

use crate::digit::Digit;
use crate::shared_constants::{MIN_PULSE_WIDTH, ROTATION_DWELL};

/// A debounced binary input: a settled level plus a changed-since-last-poll
/// flag.
///
/// [`Bounce`](crate::Bounce) implements this over any `embedded-hal` input
/// pin; tests implement it with scripted levels.
pub trait DebouncedInput {
    /// Poll the underlying signal. Returns `true` when the settled level
    /// changed since the previous call.
    fn update(&mut self, now: Instant) -> bool;

    /// The current settled level (`true` = high).
    fn read(&self) -> bool;
}

/// Number of pulses observed in one completed dial rotation.
///
/// An intact dial produces 1-10 pulses; [`digit`](PulseCount::digit) performs
/// the conventional 10→0 mapping and rejects anything out of range.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseCount(pub u8);

impl PulseCount {
    /// The dialed digit this pulse count represents, if it is in range.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        Digit::from_pulse_count(self.0)
    }
}

/// Decoder state. `Counting` carries everything the in-progress rotation
/// needs; returning to `Waiting` discards it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum DialState {
    /// No rotation in progress.
    Waiting,
    /// A rotation is in progress: `count` rising edges seen so far, the most
    /// recent at `last_rising`.
    Counting { count: u8, last_rising: Instant },
}

/// The dial-pulse decoding state machine.
pub struct RotaryDial<I> {
    input: I,
    state: DialState,
}

impl<I: DebouncedInput> RotaryDial<I> {
    /// Create a decoder over a debounced input. Starts out waiting.
    pub const fn new(input: I) -> Self {
        Self {
            input,
            state: DialState::Waiting,
        }
    }

    /// The underlying debounced input.
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Advance the state machine by one poll tick.
    ///
    /// Returns `Some` exactly once per completed rotation, carrying the
    /// number of pulses observed; `None` on every other poll. A pulse
    /// narrower than [`MIN_PULSE_WIDTH`] silently cancels the whole
    /// in-progress rotation - the digit is dropped rather than partially
    /// counted, and no retry signal is given.
    pub fn poll(&mut self, now: Instant) -> Option<PulseCount> {
        let changed = self.input.update(now);
        let level = self.input.read();

        match self.state {
            DialState::Waiting => {
                // A falling edge while waiting is spurious; only a rising
                // edge starts a rotation.
                if changed && level {
                    self.state = DialState::Counting {
                        count: 1,
                        last_rising: now,
                    };
                }
                None
            }
            DialState::Counting { count, last_rising } => {
                if changed {
                    if level {
                        // Leading edge of the next pulse.
                        self.state = DialState::Counting {
                            count: count.saturating_add(1),
                            last_rising: now,
                        };
                    } else {
                        // Trailing edge: reject bounce that survived
                        // debouncing.
                        let pulse_width = now - last_rising;
                        if pulse_width < MIN_PULSE_WIDTH {
                            #[cfg(feature = "defmt")]
                            defmt::info!(
                                "pulse width {} ms too short - dropping rotation",
                                pulse_width.as_millis()
                            );
                            self.state = DialState::Waiting;
                        }
                    }
                    None
                } else {
                    // No edge this poll: a long enough quiet spell means the
                    // rotation is over.
                    let dwell = now - last_rising;
                    if dwell > ROTATION_DWELL {
                        self.state = DialState::Waiting;
                        #[cfg(feature = "defmt")]
                        defmt::info!("rotation complete: {} pulses", count);
                        Some(PulseCount(count))
                    } else {
                        None
                    }
                }
            }
        }
    }
}
