//! DS3231 realtime clock over I2C.

use embedded_hal::i2c::I2c;

use crate::clock_time::ClockTime;
use crate::error::{Error, Result};
use crate::rtc::Rtc;

/// 7-bit I2C address of the DS3231.
const ADDRESS: u8 = 0x68;

/// Seconds/minutes/hours registers, BCD encoded.
const REG_TIME: u8 = 0x00;
/// Control register; zeroed to emit the 1 Hz square wave on SQW.
const REG_CONTROL: u8 = 0x0E;
/// Status register; bit 7 is the oscillator-stop flag.
const REG_STATUS: u8 = 0x0F;
const OSF_BIT: u8 = 0x80;

/// The DS3231 clock chip, over any `embedded-hal` I2C bus.
///
/// Only the time-of-day registers are used; the calendar registers are left
/// alone. Hours run in 24-hour mode.
pub struct Ds3231<I> {
    i2c: I,
}

impl<I: I2c> Ds3231<I> {
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    fn read_register(&mut self, register: u8) -> Result<u8> {
        let mut buffer = [0u8];
        self.i2c
            .write_read(ADDRESS, &[register], &mut buffer)
            .map_err(|_| Error::RtcBus)?;
        Ok(buffer[0])
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<()> {
        self.i2c
            .write(ADDRESS, &[register, value])
            .map_err(|_| Error::RtcBus)
    }
}

impl<I: I2c> Rtc for Ds3231<I> {
    fn begin(&mut self) -> Result<()> {
        // A failed probe means no chip on the bus.
        let mut buffer = [0u8];
        self.i2c
            .write_read(ADDRESS, &[REG_STATUS], &mut buffer)
            .map_err(|_| Error::RtcNotFound)?;

        // INTCN=0, RS2/RS1=00: 1 Hz square wave on the SQW pin.
        self.write_register(REG_CONTROL, 0x00)
    }

    fn now(&mut self) -> Result<ClockTime> {
        let mut buffer = [0u8; 3];
        self.i2c
            .write_read(ADDRESS, &[REG_TIME], &mut buffer)
            .map_err(|_| Error::RtcBus)?;

        let second = bcd_to_dec(buffer[0] & 0x7F);
        let minute = bcd_to_dec(buffer[1] & 0x7F);
        let hour = bcd_to_dec(buffer[2] & 0x3F);
        ClockTime::new(hour, minute, second).ok_or(Error::RtcBus)
    }

    fn adjust(&mut self, time: ClockTime) -> Result<()> {
        self.i2c
            .write(
                ADDRESS,
                &[
                    REG_TIME,
                    dec_to_bcd(time.second),
                    dec_to_bcd(time.minute),
                    dec_to_bcd(time.hour),
                ],
            )
            .map_err(|_| Error::RtcBus)?;

        // Setting the time makes the oscillator-stop flag stale.
        let status = self.read_register(REG_STATUS)?;
        self.write_register(REG_STATUS, status & !OSF_BIT)
    }

    fn lost_power(&mut self) -> Result<bool> {
        Ok(self.read_register(REG_STATUS)? & OSF_BIT != 0)
    }
}

const fn bcd_to_dec(value: u8) -> u8 {
    (value >> 4) * 10 + (value & 0x0F)
}

const fn dec_to_bcd(value: u8) -> u8 {
    (value / 10) << 4 | (value % 10)
}
