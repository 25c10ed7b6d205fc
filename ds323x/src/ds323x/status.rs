//! Device status

use crate::{BitFlags, Ds323x, Error, Register};

/// Die temperature in steps of 0.25°C
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Temperature {
    quarter_degrees: i16,
}

impl Temperature {
    /// Decode the MSB and LSB temperature registers.
    ///
    /// The MSB holds the signed whole degrees and the top two bits of the LSB
    /// the fraction.
    pub fn from_registers(msb: u8, lsb: u8) -> Self {
        let raw = i16::from_be_bytes([msb, lsb & 0b1100_0000]);
        Temperature {
            quarter_degrees: raw >> 6,
        }
    }

    pub fn quarter_degrees(&self) -> i16 {
        self.quarter_degrees
    }

    pub fn as_deg_c(&self) -> f32 {
        f32::from(self.quarter_degrees) / 4.0
    }
}

impl<I2C> Ds323x<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Read whether the oscillator is stopped or has been stopped at
    /// some point.
    ///
    /// This allows a sanity check of the stored date and time.
    pub fn has_been_stopped(&mut self) -> Result<bool, Error> {
        let status = self.read_register(Register::STATUS)?;
        Ok((status & BitFlags::OSC_STOP) != 0)
    }

    /// Clear flag indicating whether the oscillator is stopped or has been
    /// stopped at some point.
    ///
    /// See also: [`has_been_stopped()`](#method.has_been_stopped)
    pub fn clear_has_been_stopped_flag(&mut self) -> Result<(), Error> {
        let status = self.read_register(Register::STATUS)? & !BitFlags::OSC_STOP;
        self.write_status_without_clearing_alarm(status)
    }

    /// Read whether a temperature conversion is in progress.
    pub fn busy(&mut self) -> Result<bool, Error> {
        let status = self.read_register(Register::STATUS)?;
        Ok((status & BitFlags::BUSY) != 0)
    }

    /// Read the temperature, updated every 64 seconds or on
    /// [`convert_temperature()`](#method.convert_temperature).
    pub fn temperature(&mut self) -> Result<Temperature, Error> {
        let mut data = [Register::TEMP_MSB, 0, 0];
        self.read_data(&mut data)?;
        Ok(Temperature::from_registers(data[1], data[2]))
    }
}
