//! Construction and raw register access

use log::warn;

use crate::{BitFlags, Ds323x, Error, CONTROL_POR_VALUE, DEVICE_ADDRESS};

impl<I2C> Ds323x<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Create a new instance of the DS3231 device.
    pub fn new_ds3231(i2c: I2C) -> Self {
        const STATUS_POR_VALUE: u8 = BitFlags::OSC_STOP | BitFlags::EN32KHZ;
        Ds323x {
            i2c,
            control: CONTROL_POR_VALUE,
            status: STATUS_POR_VALUE,
        }
    }

    /// Destroy driver instance, return I²C bus instance.
    pub fn destroy_ds3231(self) -> I2C {
        self.i2c
    }

    pub(crate) fn write_register(&mut self, register: u8, data: u8) -> Result<(), Error> {
        self.write_data(&[register, data])
    }

    /// `payload` starts with the first register address.
    pub(crate) fn write_data(&mut self, payload: &[u8]) -> Result<(), Error> {
        self.i2c.write(DEVICE_ADDRESS, payload).map_err(|err| {
            warn!("ds3231 write at {:#04x} failed: {:?}", payload[0], err);
            Error::Comm
        })
    }

    pub(crate) fn read_register(&mut self, register: u8) -> Result<u8, Error> {
        let mut data = [register, 0];
        self.read_data(&mut data)?;
        Ok(data[1])
    }

    /// `payload[0]` holds the first register address, the rest is filled from the device.
    pub(crate) fn read_data(&mut self, payload: &mut [u8]) -> Result<(), Error> {
        let (register, data) = payload.split_at_mut(1);
        self.i2c
            .write_read(DEVICE_ADDRESS, register, data)
            .map_err(|err| {
                warn!("ds3231 read at {:#04x} failed: {:?}", register[0], err);
                Error::Comm
            })
    }
}
