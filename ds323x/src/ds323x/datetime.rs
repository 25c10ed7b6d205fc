//! Date and time registers

use rtc_datetime::{bcd_to_bin_24_hour, bcd_to_u8, u8_to_bcd, RtcDateTime};

use crate::{BitFlags, Ds323x, Error, Register};

/// The century bit only extends the two digit year register to 2199.
const LAST_YEAR: u16 = 2199;

impl<I2C> Ds323x<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Read the date and time.
    ///
    /// The day of week register is ignored; it is derived from the date.
    pub fn datetime(&mut self) -> Result<RtcDateTime, Error> {
        let mut data = [0; 8];
        data[0] = Register::SECONDS;
        self.read_data(&mut data)?;

        let century = if data[6] & BitFlags::CENTURY != 0 { 100 } else { 0 };
        let datetime = RtcDateTime::new(
            2000 + century + u16::from(bcd_to_u8(data[7])),
            bcd_to_u8(data[6] & !BitFlags::CENTURY),
            bcd_to_u8(data[5]),
            bcd_to_bin_24_hour(data[3]),
            bcd_to_u8(data[2]),
            bcd_to_u8(data[1] & 0x7F),
        );
        if !datetime.is_valid() {
            return Err(Error::InvalidDeviceState);
        }
        Ok(datetime)
    }

    /// Set the date and time, in 24-hour mode.
    ///
    /// Also clears the oscillator stop flag so that
    /// [`has_been_stopped()`](#method.has_been_stopped) reports the new time as trusted.
    pub fn set_datetime(&mut self, datetime: &RtcDateTime) -> Result<(), Error> {
        if !datetime.is_valid() || datetime.year() > LAST_YEAR {
            return Err(Error::InvalidInputData);
        }
        self.clear_has_been_stopped_flag()?;

        let (century, year) = match datetime.year() - 2000 {
            year @ 100.. => (BitFlags::CENTURY, year - 100),
            year => (0, year),
        };
        let dow = RtcDateTime::convert_dow_to_rtc(datetime.day_of_week() as u8);
        let payload = [
            Register::SECONDS,
            u8_to_bcd(datetime.second()),
            u8_to_bcd(datetime.minute()),
            u8_to_bcd(datetime.hour()),
            dow,
            u8_to_bcd(datetime.day()),
            u8_to_bcd(datetime.month()) | century,
            u8_to_bcd(year as u8),
        ];
        self.write_data(&payload)
    }
}
