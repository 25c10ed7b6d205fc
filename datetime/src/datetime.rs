//! Civil date and time fields over a seconds-since-2000 count

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::Error;

/// First representable year, the zero point of [`RtcDateTime::total_seconds`].
pub const ORIGIN_YEAR: u16 = 2000;
/// Last representable year.
pub const MAX_YEAR: u16 = ORIGIN_YEAR + u8::MAX as u16;
/// Unix time of 2000-01-01T00:00:00.
pub const UNIX_EPOCH_OF_ORIGIN: u32 = 946_684_800;
/// Seconds from the NTP epoch (1900) to the Unix epoch (1970).
pub const NTP_TO_UNIX_OFFSET: u32 = 2_208_988_800;

pub const HOUR_AS_SECONDS: u32 = 3_600;
pub const DAY_AS_SECONDS: u32 = 24 * HOUR_AS_SECONDS;
pub const WEEK_AS_SECONDS: u32 = 7 * DAY_AS_SECONDS;

/// [`RtcDateTime::total_seconds64`] of 2255-12-31T23:59:59, the last representable instant.
pub const MAX_SECONDS: u64 = 93_504 * DAY_AS_SECONDS as u64 - 1;
const NTP_OF_ORIGIN: u32 = UNIX_EPOCH_OF_ORIGIN.wrapping_add(NTP_TO_UNIX_OFFSET);
const DAYS_IN_MONTH: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Day of the week, numbered from Sunday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayOfWeek {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl TryFrom<u8> for DayOfWeek {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DayOfWeek::Sunday),
            1 => Ok(DayOfWeek::Monday),
            2 => Ok(DayOfWeek::Tuesday),
            3 => Ok(DayOfWeek::Wednesday),
            4 => Ok(DayOfWeek::Thursday),
            5 => Ok(DayOfWeek::Friday),
            6 => Ok(DayOfWeek::Saturday),
            _ => Err(Error::OutOfRange),
        }
    }
}

/// A point in time between 2000-01-01 and 2255-12-31, always zone-naive (UTC).
///
/// The fields are stored as given and are not validated on construction; use
/// [`is_valid`](Self::is_valid) when the source is untrusted. Equality,
/// ordering and hashing go through [`total_seconds64`](Self::total_seconds64),
/// so two field sets naming the same instant compare equal.
#[derive(Debug, Clone, Copy)]
pub struct RtcDateTime {
    year_from_2000: u8,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl RtcDateTime {
    /// Build a value from calendar fields.
    ///
    /// A `year` below 2000 is taken as an offset from 2000 already, so `24`
    /// and `2024` name the same year. Anything that lands past [`MAX_YEAR`]
    /// saturates to it, including the offsets 256 to 1999: `new(1999, ..)`
    /// reports a year of 2255. Range check the year first when it comes from
    /// outside.
    pub fn new(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        let offset = if year >= ORIGIN_YEAR { year - ORIGIN_YEAR } else { year };
        RtcDateTime {
            year_from_2000: u8::try_from(offset).unwrap_or(u8::MAX),
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Decompose a count of seconds since 2000-01-01T00:00:00.
    pub fn from_seconds(seconds: u32) -> Self {
        Self::from_seconds64(u64::from(seconds))
    }

    /// Decompose a count of seconds since 2000-01-01T00:00:00.
    ///
    /// Counts past 2255-12-31T23:59:59 saturate to that instant.
    pub fn from_seconds64(seconds: u64) -> Self {
        let seconds = seconds.min(MAX_SECONDS);

        let second = (seconds % 60) as u8;
        let minutes = seconds / 60;
        let minute = (minutes % 60) as u8;
        let hours = minutes / 60;
        let hour = (hours % 24) as u8;
        let mut days = hours / 24;

        let mut year_from_2000: u8 = 0;
        loop {
            let year_days = 365 + u64::from(has_leap_day(year_from_2000));
            if days < year_days || year_from_2000 == u8::MAX {
                break;
            }
            days -= year_days;
            year_from_2000 += 1;
        }

        let mut month = 1;
        for &month_days in DAYS_IN_MONTH.iter() {
            let mut month_days = u64::from(month_days);
            if month == 2 && has_leap_day(year_from_2000) {
                month_days += 1;
            }
            if days < month_days {
                break;
            }
            days -= month_days;
            month += 1;
        }

        RtcDateTime {
            year_from_2000,
            month,
            day: (days + 1) as u8,
            hour,
            minute,
            second,
        }
    }

    /// Full year, 2000 through 2255.
    pub fn year(&self) -> u16 {
        ORIGIN_YEAR + u16::from(self.year_from_2000)
    }

    /// Month, 1 through 12 when valid.
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of the month, 1 through 31 when valid.
    pub fn day(&self) -> u8 {
        self.day
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Check the fields against the Gregorian calendar.
    ///
    /// Unlike the seconds arithmetic, February 29th is only accepted in full
    /// Gregorian leap years, so 2100-02-29 is rejected here even though it
    /// composes to a distinct instant.
    pub fn is_valid(&self) -> bool {
        if !(1..=12).contains(&self.month)
            || !(1..=31).contains(&self.day)
            || self.hour >= 24
            || self.minute >= 60
            || self.second >= 60
        {
            return false;
        }

        match self.month {
            2 => {
                let last = if is_gregorian_leap_year(self.year()) { 29 } else { 28 };
                self.day <= last
            }
            // odd months have 31 days up to July, even months from August on
            month if self.day == 31 => (month < 8) == (month % 2 == 1),
            _ => true,
        }
    }

    /// Days since 2000-01-01, counting every fourth year as a leap year.
    pub fn total_days(&self) -> u32 {
        let year = u32::from(self.year_from_2000);
        let month_index = usize::from(self.month.saturating_sub(1));

        let mut days = u32::from(self.day);
        for &month_days in DAYS_IN_MONTH.iter().take(month_index) {
            days += u32::from(month_days);
        }
        if self.month > 2 && has_leap_day(self.year_from_2000) {
            days += 1;
        }
        (days + 365 * year + (year + 3) / 4).saturating_sub(1)
    }

    /// Seconds since 2000-01-01T00:00:00, wrapping after 2136 like a 32-bit hardware counter.
    pub fn total_seconds(&self) -> u32 {
        self.total_seconds64() as u32
    }

    /// Seconds since 2000-01-01T00:00:00.
    pub fn total_seconds64(&self) -> u64 {
        let days = u64::from(self.total_days());
        ((days * 24 + u64::from(self.hour)) * 60 + u64::from(self.minute)) * 60
            + u64::from(self.second)
    }

    pub fn day_of_week(&self) -> DayOfWeek {
        // 2000-01-01 was a Saturday
        match (self.total_days() + 6) % 7 {
            0 => DayOfWeek::Sunday,
            1 => DayOfWeek::Monday,
            2 => DayOfWeek::Tuesday,
            3 => DayOfWeek::Wednesday,
            4 => DayOfWeek::Thursday,
            5 => DayOfWeek::Friday,
            _ => DayOfWeek::Saturday,
        }
    }

    /// Nearest date on or after this one that falls on `target`, keeping the time of day.
    pub fn next_day_of_week(&self, target: DayOfWeek) -> Self {
        let current = self.day_of_week() as u32;
        let delta = (target as u32 + 7 - current) % 7;
        *self + delta * DAY_AS_SECONDS
    }

    pub fn unix32_time(&self) -> u32 {
        self.total_seconds().wrapping_add(UNIX_EPOCH_OF_ORIGIN)
    }

    pub fn unix64_time(&self) -> u64 {
        self.total_seconds64() + u64::from(UNIX_EPOCH_OF_ORIGIN)
    }

    /// Instants before 2000 clamp to 2000-01-01T00:00:00.
    pub fn from_unix32_time(time: u32) -> Self {
        Self::from_seconds(time.saturating_sub(UNIX_EPOCH_OF_ORIGIN))
    }

    /// Instants before 2000 clamp to 2000-01-01T00:00:00.
    pub fn from_unix64_time(time: u64) -> Self {
        Self::from_seconds64(time.saturating_sub(u64::from(UNIX_EPOCH_OF_ORIGIN)))
    }

    /// NTP era time; rolls over in February 2036 like the wire format does.
    pub fn ntp32_time(&self) -> u32 {
        self.total_seconds().wrapping_add(NTP_OF_ORIGIN)
    }

    pub fn ntp64_time(&self) -> u64 {
        self.unix64_time() + u64::from(NTP_TO_UNIX_OFFSET)
    }

    /// Era 0 values before 2000 are read as era 1 (after the 2036 rollover).
    pub fn from_ntp32_time(time: u32) -> Self {
        Self::from_seconds(time.wrapping_sub(NTP_OF_ORIGIN))
    }

    /// Instants before 2000 clamp to 2000-01-01T00:00:00.
    pub fn from_ntp64_time(time: u64) -> Self {
        Self::from_unix64_time(time.saturating_sub(u64::from(NTP_TO_UNIX_OFFSET)))
    }

    /// Leap year test used by the seconds arithmetic: every fourth year.
    pub fn is_leap_year(year: u16) -> bool {
        year % 4 == 0
    }

    /// Length of `month` in `year` under the same rule as the seconds arithmetic.
    ///
    /// Returns 0 for a month outside 1..=12.
    pub fn days_in_month(year: u16, month: u8) -> u8 {
        match DAYS_IN_MONTH.get(usize::from(month.wrapping_sub(1))) {
            Some(&days) if month == 2 && Self::is_leap_year(year) => days + 1,
            Some(&days) => days,
            None => 0,
        }
    }

    /// Convert a day of week (0 = Sunday) to the 1 = Monday .. 7 = Sunday numbering of RTC registers.
    pub fn convert_dow_to_rtc(dow: u8) -> u8 {
        if dow == 0 {
            7
        } else {
            dow
        }
    }

    /// Convert an RTC register day of week (1 = Monday .. 7 = Sunday) to 0 = Sunday numbering.
    pub fn convert_rtc_to_dow(rtc_dow: u8) -> u8 {
        rtc_dow % 7
    }
}

fn has_leap_day(year_from_2000: u8) -> bool {
    year_from_2000 % 4 == 0
}

fn is_gregorian_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

impl Default for RtcDateTime {
    fn default() -> Self {
        Self::from_seconds(0)
    }
}

impl PartialEq for RtcDateTime {
    fn eq(&self, other: &Self) -> bool {
        self.total_seconds64() == other.total_seconds64()
    }
}

impl Eq for RtcDateTime {}

impl PartialOrd for RtcDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RtcDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.total_seconds64().cmp(&other.total_seconds64())
    }
}

impl Hash for RtcDateTime {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.total_seconds64().hash(state);
    }
}

impl Add<u32> for RtcDateTime {
    type Output = RtcDateTime;

    fn add(self, seconds: u32) -> Self::Output {
        Self::from_seconds64(self.total_seconds64() + u64::from(seconds))
    }
}

impl Sub<u32> for RtcDateTime {
    type Output = RtcDateTime;

    /// Stops at 2000-01-01T00:00:00 instead of wrapping.
    fn sub(self, seconds: u32) -> Self::Output {
        Self::from_seconds64(self.total_seconds64().saturating_sub(u64::from(seconds)))
    }
}

impl AddAssign<u32> for RtcDateTime {
    fn add_assign(&mut self, seconds: u32) {
        *self = *self + seconds;
    }
}

impl SubAssign<u32> for RtcDateTime {
    fn sub_assign(&mut self, seconds: u32) {
        *self = *self - seconds;
    }
}

impl fmt::Display for RtcDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.year(),
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second
        )
    }
}
