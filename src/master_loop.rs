//! The cooperative main loop tying dial, display, and realtime clock
//! together.
//!
//! One logical thread of control: every [`step`](MasterClock::step) refreshes
//! the display if its 1 ms deadline has passed, polls the dial, and handles
//! the once-per-second tick. Nothing blocks; the only asynchronous signal in
//! the system is the [`TickFlag`] raised by the pulse-per-second edge.
//! Because the tick work and the refresh run in the same unpreempted control
//! flow, a refresh always sees the time state the most recent tick wrote.

use embassy_time::Instant;
use embedded_hal::digital::OutputPin;

use crate::clock_time::ClockTime;
use crate::dial::{DebouncedInput, RotaryDial};
use crate::digit::Digit;
use crate::error::{Error, Result};
use crate::never::Never;
use crate::nixie_display::NixieDisplay;
use crate::offset_time::TimeOffset;
use crate::rtc::Rtc;
use crate::shared_constants::MULTIPLEX_PERIOD;
use crate::tick::TickFlag;

/// The master clock: pulse decoder, display multiplexer, realtime clock,
/// and the shared time state.
pub struct MasterClock<'a, I, P, R> {
    dial: RotaryDial<I>,
    display: NixieDisplay<P>,
    rtc: R,
    tick: &'a TickFlag,
    time: ClockTime,
    next_refresh: Instant,
}

impl<'a, I, P, R> MasterClock<'a, I, P, R>
where
    I: DebouncedInput,
    P: OutputPin,
    R: Rtc,
{
    /// Assemble the clock. Call [`begin`](MasterClock::begin) before
    /// stepping.
    pub fn new(
        dial: RotaryDial<I>,
        display: NixieDisplay<P>,
        rtc: R,
        tick: &'a TickFlag,
    ) -> Self {
        Self {
            dial,
            display,
            rtc,
            tick,
            time: ClockTime::default(),
            next_refresh: Instant::MIN,
        }
    }

    /// Probe the realtime clock and prime the time state from it.
    ///
    /// A missing clock chip is fatal: the error propagates out and the
    /// caller halts rather than run without correct time.
    pub fn begin(&mut self) -> Result<()> {
        self.rtc.begin()?;

        if self.rtc.lost_power()? {
            #[cfg(feature = "defmt")]
            defmt::warn!("realtime clock lost power - time may be incorrect");
        }

        self.time = self.rtc.now()?;
        #[cfg(feature = "defmt")]
        defmt::info!(
            "realtime clock initialized: {:02}:{:02}:{:02}",
            self.time.hour,
            self.time.minute,
            self.time.second
        );
        Ok(())
    }

    /// The current shared time state.
    #[must_use]
    pub const fn time(&self) -> ClockTime {
        self.time
    }

    /// One cooperative loop iteration.
    ///
    /// The dial is polled on every step, so as long as the caller iterates
    /// at ≥100 Hz the decoder's polling contract holds. The display refresh
    /// runs at most once per [`MULTIPLEX_PERIOD`].
    pub fn step(&mut self, now: Instant) -> Result<()> {
        if now >= self.next_refresh {
            self.display
                .refresh_tick(&self.time)
                .map_err(|_| Error::CannotSetOutputState)?;
            self.next_refresh = now + MULTIPLEX_PERIOD;
        }

        if let Some(count) = self.dial.poll(now) {
            // A count outside 1-10 means a damaged dial; ignore it.
            if let Some(digit) = count.digit() {
                self.apply_dialed_digit(digit)?;
            }
        }

        if self.tick.take() {
            let current = self.rtc.now()?;
            // A spurious tick can fire with the time unchanged; only a real
            // change touches the shared state.
            if current != self.time {
                self.time = current;
            }
        }
        Ok(())
    }

    /// Run the loop forever, yielding to the executor between steps so the
    /// pulse-per-second listener task can run.
    pub async fn run(&mut self) -> Result<Never> {
        loop {
            self.step(Instant::now())?;
            embassy_futures::yield_now().await;
        }
    }

    /// Turn a dialed digit into a clock adjustment, written back to the
    /// realtime clock. The time state is not touched here; it reflects the
    /// change on the next tick, up to one second later.
    fn apply_dialed_digit(&mut self, digit: Digit) -> Result<()> {
        let offset = TimeOffset::from_digit(digit);
        #[cfg(feature = "defmt")]
        defmt::info!(
            "you dialed: {} (offset {} s)",
            digit.as_u8(),
            offset.seconds()
        );

        if offset.is_no_op() {
            return Ok(());
        }

        let now = self.rtc.now()?;
        self.rtc.adjust(now.wrapping_add_seconds(offset.seconds()))
    }
}
