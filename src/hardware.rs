use embassy_rp::{
    gpio::{self, Level, Pull},
    i2c,
    peripherals::I2C1,
};

use crate::four_bit_digit::FourBitDigit;
use crate::output_array::OutputArray;
use crate::shared_constants::CELL_COUNT;

/// Concrete RP2040 wiring for the master clock.
pub struct Hardware {
    /// Position-select anodes, one per digit, in multiplex order.
    pub anodes: OutputArray<gpio::Output<'static>, CELL_COUNT>,
    /// The four shared binary-coded value lines, lowest bit first.
    pub value_lines: FourBitDigit<gpio::Output<'static>>,
    /// Rotary dial sense contact; idles high, pulses while the dial returns.
    pub dial_sense: gpio::Input<'static>,
    /// The dial's other contact, held low for the sense input to pull
    /// against.
    pub dial_ground: gpio::Output<'static>,
    /// Pulse-per-second output of the DS3231.
    pub pps: gpio::Input<'static>,
    /// Lamp next to the hour-tens digit; stays lit.
    pub lamp: gpio::Output<'static>,
    /// On-board activity LED, blinked on every other second.
    pub led: gpio::Output<'static>,
    /// Bus to the DS3231.
    pub i2c: i2c::I2c<'static, I2C1, i2c::Blocking>,
}

impl Default for Hardware {
    fn default() -> Self {
        let peripherals: embassy_rp::Peripherals =
            embassy_rp::init(embassy_rp::config::Config::default());

        let anodes = OutputArray::new([
            gpio::Output::new(peripherals.PIN_2, Level::Low),
            gpio::Output::new(peripherals.PIN_3, Level::Low),
            gpio::Output::new(peripherals.PIN_4, Level::Low),
            gpio::Output::new(peripherals.PIN_5, Level::Low),
            gpio::Output::new(peripherals.PIN_6, Level::Low),
            gpio::Output::new(peripherals.PIN_7, Level::Low),
        ]);

        let value_lines = FourBitDigit::new([
            gpio::Output::new(peripherals.PIN_8, Level::Low),
            gpio::Output::new(peripherals.PIN_9, Level::Low),
            gpio::Output::new(peripherals.PIN_10, Level::Low),
            gpio::Output::new(peripherals.PIN_11, Level::Low),
        ]);

        let dial_sense = gpio::Input::new(peripherals.PIN_16, Pull::Up);
        let dial_ground = gpio::Output::new(peripherals.PIN_17, Level::Low);

        let pps = gpio::Input::new(peripherals.PIN_18, Pull::Up);
        let lamp = gpio::Output::new(peripherals.PIN_12, Level::Low);
        let led = gpio::Output::new(peripherals.PIN_25, Level::Low);

        let i2c = i2c::I2c::new_blocking(
            peripherals.I2C1,
            peripherals.PIN_15, // SCL
            peripherals.PIN_14, // SDA
            i2c::Config::default(),
        );

        Self {
            anodes,
            value_lines,
            dial_sense,
            dial_ground,
            pps,
            lamp,
            led,
            i2c,
        }
    }
}
