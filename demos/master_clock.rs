//! Rotary-dial nixie master clock firmware for the Raspberry Pi Pico.
//!
//! A DS3231 keeps wall time and emits a 1 Hz pulse-per-second signal; a
//! listener task turns each rising edge into a [`TickFlag`] raise. The main
//! loop multiplexes the six nixies, decodes dial pulses, and applies dialed
//! time adjustments back to the DS3231.
#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::gpio;
use master_clock::{
    Bounce, DIAL_DEBOUNCE, Ds3231, Hardware, MasterClock, Never, NixieDisplay, Result, RotaryDial,
    TickFlag,
};
use panic_probe as _;

static TICK: TickFlag = TickFlag::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    // A missing realtime clock ends up here: halt, loudly.
    match run(spawner).await {
        Ok(never) => match never {},
        Err(err) => core::panic!("{err}"),
    }
}

async fn run(spawner: Spawner) -> Result<Never> {
    info!("clock initializing...");
    let mut hardware = Hardware::default();

    spawner.spawn(pps_listener(hardware.pps, hardware.led, &TICK))?;

    let dial = RotaryDial::new(Bounce::new(hardware.dial_sense, DIAL_DEBOUNCE));
    let display = NixieDisplay::new(hardware.anodes, hardware.value_lines);
    let rtc = Ds3231::new(hardware.i2c);

    let mut master = MasterClock::new(dial, display, rtc, &TICK);
    master.begin()?;
    info!("DS3231 initialized");

    // The hour-tens lamp stays lit.
    hardware.lamp.set_high();

    master.run().await
}

/// Raise the tick flag on every pulse-per-second edge, blinking the activity
/// LED on every other pulse.
#[embassy_executor::task]
async fn pps_listener(
    mut pps: gpio::Input<'static>,
    mut led: gpio::Output<'static>,
    tick: &'static TickFlag,
) -> ! {
    loop {
        pps.wait_for_rising_edge().await;
        tick.raise();
        led.toggle();
    }
}
