//! Calendar value type shared by the RTC drivers and the alarm scheduler.
//!
//! [`RtcDateTime`] stores civil fields for 2000-01-01 through 2255-12-31 and
//! converts to and from a linear count of seconds since 2000-01-01T00:00:00.
//! Text is parsed with a small pattern language (see
//! [`RtcDateTime::parse_with_format`]) backed by a [`Locale`] for month
//! names and time zone abbreviations.
#![deny(unsafe_code)]
#![cfg_attr(not(test), no_std)]

use core::fmt;

mod datetime;
mod format;
mod locale;
mod timezone;
mod utility;

#[cfg(feature = "chrono")]
mod chrono_support;

pub use crate::datetime::{
    DayOfWeek, RtcDateTime, DAY_AS_SECONDS, HOUR_AS_SECONDS, MAX_SECONDS, MAX_YEAR,
    NTP_TO_UNIX_OFFSET, ORIGIN_YEAR, UNIX_EPOCH_OF_ORIGIN, WEEK_AS_SECONDS,
};
pub use crate::format::ISO8601_LEN;
pub use crate::locale::{Locale, LocaleEn, LocaleEnUs};
pub use crate::timezone::TimeZone;
pub use crate::utility::{bcd_to_bin_24_hour, bcd_to_u8, u8_to_bcd};

/// All possible errors in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Text did not match the format.
    ///
    /// `position` is the byte offset of the first character that could not be consumed.
    Parse { position: usize },
    /// The value lies outside of what an [`RtcDateTime`] can represent.
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parse { position } => write!(f, "text does not match format at offset {}", position),
            Error::OutOfRange => f.write_str("date and time outside of 2000-2255"),
        }
    }
}

impl core::error::Error for Error {}
