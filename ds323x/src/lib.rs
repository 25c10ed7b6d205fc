//! DS3231 real-time clock driver over an `embedded-hal` I²C bus.
//!
//! The driver owns its bus handle; get it back with
//! [`Ds323x::destroy_ds3231`]. Date and time travel as
//! [`rtc_datetime::RtcDateTime`] values.
#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

use core::fmt;

pub use rtc_datetime::RtcDateTime;

/// All possible errors in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// I²C bus error
    Comm,
    /// Invalid input data provided
    InvalidInputData,
    /// Internal device state is invalid.
    ///
    /// It was not possible to read a valid date and/or time.
    /// The device is probably missing initialization.
    InvalidDeviceState,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Comm => f.write_str("I2C bus error"),
            Error::InvalidInputData => f.write_str("invalid input data"),
            Error::InvalidDeviceState => f.write_str("device holds no valid date and time"),
        }
    }
}

impl core::error::Error for Error {}

/// Square-wave output frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqWFreq {
    /// 1 Hz (default)
    _1Hz,
    /// 1.024 kHz
    _1_024Hz,
    /// 4.096 kHz
    _4_096Hz,
    /// 8.192 kHz
    _8_192Hz,
}

struct Register;

impl Register {
    const SECONDS: u8 = 0x00;
    const CONTROL: u8 = 0x0E;
    const STATUS: u8 = 0x0F;
    const AGING_OFFSET: u8 = 0x10;
    const TEMP_MSB: u8 = 0x11;
}

struct BitFlags;

impl BitFlags {
    const CENTURY: u8 = 0b1000_0000;
    const EOSC: u8 = 0b1000_0000;
    const BBSQW: u8 = 0b0100_0000;
    const TEMP_CONV: u8 = 0b0010_0000;
    const RS2: u8 = 0b0001_0000;
    const RS1: u8 = 0b0000_1000;
    const INTCN: u8 = 0b0000_0100;
    const OSC_STOP: u8 = 0b1000_0000;
    const EN32KHZ: u8 = 0b0000_1000;
    const BUSY: u8 = 0b0000_0100;
    const ALARM2F: u8 = 0b0000_0010;
    const ALARM1F: u8 = 0b0000_0001;
}

const DEVICE_ADDRESS: u8 = 0b110_1000;
const CONTROL_POR_VALUE: u8 = 0b0001_1100;

/// DS3231 RTC driver
#[derive(Debug, Default)]
pub struct Ds323x<I2C> {
    i2c: I2C,
    control: u8,
    status: u8,
}

mod ds323x;
pub use crate::ds323x::Temperature;
mod ds3231;
