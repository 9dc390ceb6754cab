// Wall clock backed by a PCF85063A/PCF85063TP real-time clock.
// Datasheet: https://files.waveshare.com/wiki/common/Pcf85063atl1118-NdPQpTGE-loeW7GbZ7.pdf

use embedded_hal::i2c::I2c;
use thiserror::Error;

use crate::time::{TimeSample, WallClock};

/// 7-bit bus address.
pub const PCF85063_ADDR: u8 = 0x51;
/// First time register (seconds); minutes through years follow.
const REG_SECONDS: u8 = 0x04;
/// Oscillator-stop flag in the seconds register.
const VL_BIT: u8 = 0x80;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DateTime {
    pub year: u16,  // full year, e.g., 2024
    pub month: u8,  // 1-12
    pub day: u8,    // 1-31
    pub hour: u8,   // 0-23
    pub minute: u8, // 0-59
    pub second: u8, // 0-59
}

impl DateTime {
    pub fn time_of_day(&self) -> TimeSample {
        TimeSample {
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RtcError<E> {
    #[error("i2c transfer failed: {0:?}")]
    I2c(E),

    /// The oscillator stopped at some point; the stored time cannot be trusted.
    #[error("clock integrity lost, time must be set again")]
    Unreliable,
}

pub struct Pcf85063<I2C> {
    i2c: I2C,
}

impl<I2C, E> Pcf85063<I2C>
where
    I2C: I2c<Error = E>,
{
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    pub fn into_inner(self) -> I2C {
        self.i2c
    }

    // Read datetime. Returns (dt, vl_flag) where vl_flag == true means time is unreliable (power loss).
    pub fn read_datetime(&mut self) -> Result<(DateTime, bool), E> {
        let mut buf = [0u8; 7];
        // sec, min, hour, day, weekday, month, year in one burst
        self.i2c.write_read(PCF85063_ADDR, &[REG_SECONDS], &mut buf)?;
        let vl = (buf[0] & VL_BIT) != 0;
        let month_raw = buf[5];
        let century = if (month_raw & 0x80) != 0 { 1900 } else { 2000 };
        Ok((
            DateTime {
                year: century + bcd_decode(buf[6]) as u16,
                month: bcd_decode(month_raw & 0x1F),
                day: bcd_decode(buf[3] & 0x3F),
                hour: bcd_decode(buf[2] & 0x3F),
                minute: bcd_decode(buf[1] & 0x7F),
                second: bcd_decode(buf[0] & 0x7F),
            },
            vl,
        ))
    }
}

impl<I2C, E> WallClock for Pcf85063<I2C>
where
    I2C: I2c<Error = E>,
{
    type Error = RtcError<E>;

    fn now(&mut self) -> Result<TimeSample, Self::Error> {
        let (dt, vl) = self.read_datetime().map_err(RtcError::I2c)?;
        if vl {
            return Err(RtcError::Unreliable);
        }
        Ok(dt.time_of_day())
    }
}

fn bcd_decode(v: u8) -> u8 {
    (v & 0x0F) + ((v >> 4) * 10)
}
