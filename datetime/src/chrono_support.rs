//! Conversions to and from chrono's `NaiveDateTime`

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::datetime::{RtcDateTime, MAX_YEAR, ORIGIN_YEAR};
use crate::Error;

impl TryFrom<RtcDateTime> for NaiveDateTime {
    type Error = Error;

    fn try_from(value: RtcDateTime) -> Result<Self, Self::Error> {
        NaiveDate::from_ymd_opt(
            i32::from(value.year()),
            u32::from(value.month()),
            u32::from(value.day()),
        )
        .and_then(|date| {
            date.and_hms_opt(
                u32::from(value.hour()),
                u32::from(value.minute()),
                u32::from(value.second()),
            )
        })
        .ok_or(Error::OutOfRange)
    }
}

impl TryFrom<NaiveDateTime> for RtcDateTime {
    type Error = Error;

    /// Leap seconds fold into the preceding second.
    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        let year = u16::try_from(value.year()).map_err(|_| Error::OutOfRange)?;
        if !(ORIGIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::OutOfRange);
        }
        Ok(RtcDateTime::new(
            year,
            value.month() as u8,
            value.day() as u8,
            value.hour() as u8,
            value.minute() as u8,
            value.second() as u8,
        ))
    }
}
