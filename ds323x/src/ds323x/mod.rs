mod configuration;
mod datetime;
mod status;
pub use self::status::Temperature;

#[cfg(test)]
pub(crate) mod mock {
    pub use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTrans};

    pub const ADDR: u8 = crate::DEVICE_ADDRESS;

    pub fn new(expectations: &[I2cTrans]) -> crate::Ds323x<I2cMock> {
        crate::Ds323x::new_ds3231(I2cMock::new(expectations))
    }

    pub fn done(dev: crate::Ds323x<I2cMock>) {
        dev.destroy_ds3231().done();
    }
}
