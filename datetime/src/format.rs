//! Pattern driven text parsing and fixed-capacity formatting
//!
//! A pattern is a sequence of runs of one repeated specifier character:
//!
//! | run          | reads                                                       |
//! |--------------|-------------------------------------------------------------|
//! | `YYYY`       | four digit year, the first digit is skipped                 |
//! | `Y`..`YYY`   | year as an offset from 2000                                 |
//! | `M`          | numeric month, or a month name resolved by the locale       |
//! | `D` `h` `m` `s` | day, hour, minute, second                                |
//! | `z` `zzz`    | `Z`, `+hh:mm`, `-hhmm`, or a locale abbreviation            |
//! | `*x`         | skip text through the next `x`                              |
//! | `!x`         | skip any number of `x`                                      |
//!
//! A numeric run of one reads one or two digits, a longer run reads exactly
//! that many. Every other pattern character must appear literally.

use core::fmt::Write;

use crate::datetime::{RtcDateTime, ORIGIN_YEAR};
use crate::locale::{Locale, LocaleEn};
use crate::Error;

/// Longest output of [`RtcDateTime::to_iso8601`], `YYYY-MM-DDThh:mm:ss`.
pub const ISO8601_LEN: usize = 19;

#[derive(Debug, Clone, Copy)]
struct Fields {
    year_from_2000: u8,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
    offset_minutes: Option<i32>,
}

impl Default for Fields {
    fn default() -> Self {
        Fields {
            year_from_2000: 0,
            month: 1,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            offset_minutes: None,
        }
    }
}

impl Fields {
    fn compose(&self) -> RtcDateTime {
        let local = RtcDateTime::new(
            ORIGIN_YEAR + u16::from(self.year_from_2000),
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        );
        match self.offset_minutes {
            Some(minutes) if minutes > 0 => local - minutes.unsigned_abs() * 60,
            Some(minutes) => local + minutes.unsigned_abs() * 60,
            None => local,
        }
    }
}

/// Walks `format` over `text`, filling `fields` as it goes.
///
/// `Ok` carries the number of bytes consumed; `Err` the offset of the first
/// byte that did not match.
fn scan<L: Locale + ?Sized>(
    format: &str,
    text: &str,
    locale: &L,
    fields: &mut Fields,
) -> Result<usize, usize> {
    let pattern = format.as_bytes();
    let input = text.as_bytes();
    let mut f = 0;
    let mut t = 0;

    while f < pattern.len() {
        let specifier = pattern[f];
        let run = pattern[f..].iter().take_while(|&&c| c == specifier).count();

        match specifier {
            b'Y' => {
                let start = t;
                if run == 4 {
                    if !input.get(t).is_some_and(u8::is_ascii_digit) {
                        return Err(t);
                    }
                    t += 1;
                }
                let offset = read_number(input, &mut t, run.min(3))?;
                fields.year_from_2000 = u8::try_from(offset).map_err(|_| start)?;
                f += run;
            }
            b'M' => {
                let start = t;
                let month = if input.get(t).is_some_and(u8::is_ascii_digit) {
                    read_number(input, &mut t, run)?
                } else {
                    let name = read_name(text, &mut t, run)?;
                    u32::from(locale.chars_to_month(name))
                };
                if month == 0 || month > 12 {
                    return Err(start);
                }
                fields.month = month as u8;
                f += run;
            }
            b'D' | b'h' | b'm' | b's' => {
                let value = u8::try_from(read_number(input, &mut t, run)?).map_err(|_| t)?;
                match specifier {
                    b'D' => fields.day = value,
                    b'h' => fields.hour = value,
                    b'm' => fields.minute = value,
                    _ => fields.second = value,
                }
                f += run;
            }
            b'z' => {
                fields.offset_minutes = Some(read_zone(text, &mut t, locale)?);
                f += run;
            }
            b'*' => {
                match pattern.get(f + run) {
                    Some(&stop) => {
                        let found = input[t..]
                            .iter()
                            .position(|&c| c == stop)
                            .ok_or(input.len())?;
                        t += found + 1;
                        f += run + 1;
                    }
                    None => {
                        t = input.len();
                        f += run;
                    }
                }
            }
            b'!' => {
                match pattern.get(f + run) {
                    Some(&repeated) => {
                        t += input[t..].iter().take_while(|&&c| c == repeated).count();
                        f += run + 1;
                    }
                    None => f += run,
                }
            }
            literal => {
                if input.get(t) != Some(&literal) {
                    return Err(t);
                }
                t += 1;
                f += 1;
            }
        }
    }

    Ok(t)
}

fn read_number(input: &[u8], t: &mut usize, run: usize) -> Result<u32, usize> {
    let available = input[*t..]
        .iter()
        .take_while(|c| c.is_ascii_digit())
        .count();
    let count = if run == 1 { available.min(2) } else { run };
    if count == 0 || available < count {
        return Err(*t + available);
    }

    let start = *t;
    let value = input[start..start + count].iter().try_fold(0u32, |acc, c| {
        acc.checked_mul(10)?.checked_add(u32::from(c - b'0'))
    });
    let value = value.ok_or(start)?;
    *t += count;
    Ok(value)
}

fn read_name<'a>(text: &'a str, t: &mut usize, run: usize) -> Result<&'a str, usize> {
    let rest = text.get(*t..).ok_or(*t)?;
    let available = rest
        .bytes()
        .take_while(|c| c.is_ascii_alphabetic())
        .count();
    let count = if run == 1 { available } else { run };
    if count == 0 || available < count {
        return Err(*t + available);
    }

    *t += count;
    Ok(&rest[..count])
}

fn read_zone<L: Locale + ?Sized>(text: &str, t: &mut usize, locale: &L) -> Result<i32, usize> {
    let input = text.as_bytes();
    match input.get(*t) {
        Some(b'Z') => {
            *t += 1;
            Ok(0)
        }
        Some(&sign @ (b'+' | b'-')) => {
            *t += 1;
            let hours = read_number(input, t, 2)?;
            if input.get(*t) == Some(&b':') {
                *t += 1;
            }
            let minutes = read_number(input, t, 2)?;
            let total = (hours * 60 + minutes) as i32;
            Ok(if sign == b'-' { -total } else { total })
        }
        _ => {
            let rest = text.get(*t..).ok_or(*t)?;
            let (minutes, len) = locale
                .time_zone_minutes_from_abbreviation(rest)
                .ok_or(*t)?;
            *t += len;
            Ok(minutes)
        }
    }
}

fn scan_all<L: Locale + ?Sized>(
    format: &str,
    text: &str,
    locale: &L,
    fields: &mut Fields,
) -> Result<(), Error> {
    match scan(format, text, locale, fields) {
        Ok(consumed) if consumed == text.len() => Ok(()),
        Ok(position) | Err(position) => Err(Error::Parse { position }),
    }
}

impl RtcDateTime {
    /// Parse `text` against `format`.
    ///
    /// Returns the value built from whatever fields were read together with
    /// the number of bytes consumed. A count below `text.len()` marks the
    /// offset of the first mismatch. A parsed zone offset is removed so the
    /// result is in UTC.
    pub fn parse_with_format<L: Locale + ?Sized>(
        format: &str,
        text: &str,
        locale: &L,
    ) -> (Self, usize) {
        let mut fields = Fields::default();
        let consumed = match scan(format, text, locale, &mut fields) {
            Ok(consumed) => consumed,
            Err(position) => position,
        };
        (fields.compose(), consumed)
    }

    /// Like [`parse_with_format`](Self::parse_with_format) but all of `text`
    /// and all of `format` must be consumed.
    pub fn from_format_str<L: Locale + ?Sized>(
        format: &str,
        text: &str,
        locale: &L,
    ) -> Result<Self, Error> {
        let mut fields = Fields::default();
        scan_all(format, text, locale, &mut fields)?;
        Ok(fields.compose())
    }

    /// Combine compiler style date and time stamps, `"Dec  6 2009"` and `"12:34:56"`.
    pub fn from_build_stamp(date: &str, time: &str) -> Result<Self, Error> {
        let mut fields = Fields::default();
        scan_all("MMM! D YYYY", date, &LocaleEn, &mut fields)?;
        scan_all("hh:mm:ss", time, &LocaleEn, &mut fields)?;
        Ok(fields.compose())
    }

    /// Parse an HTTP `Date` header such as `"Sat, 26 Dec 2009 12:34:56 GMT"`.
    pub fn from_http_date(text: &str) -> Result<Self, Error> {
        Self::from_format_str("*, DD MMM YYYY hh:mm:ss zzz", text, &LocaleEn)
    }

    /// Same text as `Display`, without allocating.
    pub fn to_iso8601(&self) -> heapless::String<ISO8601_LEN> {
        let mut out = heapless::String::new();
        // four digit year, so the output always fills ISO8601_LEN exactly
        write!(out, "{}", self).ok();
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LocaleEnUs;

    fn fields(value: &RtcDateTime) -> (u16, u8, u8, u8, u8, u8) {
        (
            value.year(),
            value.month(),
            value.day(),
            value.hour(),
            value.minute(),
            value.second(),
        )
    }

    #[test]
    fn month_name_day_and_year() {
        let (value, consumed) = RtcDateTime::parse_with_format("MMM DD YYYY", "Dec 06 2009", &LocaleEn);
        assert_eq!(consumed, 11);
        assert_eq!(fields(&value), (2009, 12, 6, 0, 0, 0));
    }

    #[test]
    fn time_of_day() {
        let (value, consumed) = RtcDateTime::parse_with_format("hh:mm:ss", "12:34:56", &LocaleEn);
        assert_eq!(consumed, 8);
        assert_eq!(fields(&value), (2000, 1, 1, 12, 34, 56));
    }

    #[test]
    fn numeric_date_time() {
        let value = RtcDateTime::from_format_str(
            "YYYY-MM-DD hh:mm:ss",
            "2024-06-30 23:59:58",
            &LocaleEnUs,
        )
        .unwrap();
        assert_eq!(fields(&value), (2024, 6, 30, 23, 59, 58));
    }

    #[test]
    fn single_letter_runs_take_one_or_two_digits() {
        let value = RtcDateTime::from_format_str("D/M/YYYY h:m", "5/11/2023 7:05", &LocaleEn).unwrap();
        assert_eq!(fields(&value), (2023, 11, 5, 7, 5, 0));
    }

    #[test]
    fn full_month_names() {
        let value = RtcDateTime::from_format_str("M D, YYYY", "September 9, 2031", &LocaleEn).unwrap();
        assert_eq!(fields(&value), (2031, 9, 9, 0, 0, 0));
    }

    #[test]
    fn mismatch_reports_offset() {
        let (value, consumed) = RtcDateTime::parse_with_format("hh:mm:ss", "12-34-56", &LocaleEn);
        assert_eq!(consumed, 2);
        assert_eq!(value.hour(), 12);

        assert_eq!(
            RtcDateTime::from_format_str("hh:mm:ss", "12-34-56", &LocaleEn),
            Err(Error::Parse { position: 2 })
        );
        assert_eq!(
            RtcDateTime::from_format_str("MMM", "Foo", &LocaleEn),
            Err(Error::Parse { position: 0 })
        );
    }

    #[test]
    fn trailing_text_is_an_error_only_for_the_strict_form() {
        let (_, consumed) = RtcDateTime::parse_with_format("hh:mm", "12:34:56", &LocaleEn);
        assert_eq!(consumed, 5);
        assert_eq!(
            RtcDateTime::from_format_str("hh:mm", "12:34:56", &LocaleEn),
            Err(Error::Parse { position: 5 })
        );
    }

    #[test]
    fn short_text_fails_at_its_end() {
        assert_eq!(
            RtcDateTime::from_format_str("hh:mm:ss", "12:34", &LocaleEn),
            Err(Error::Parse { position: 5 })
        );
    }

    #[test]
    fn year_past_range_is_a_mismatch() {
        assert_eq!(
            RtcDateTime::from_format_str("YYYY", "2300", &LocaleEn),
            Err(Error::Parse { position: 0 })
        );
        assert_eq!(
            RtcDateTime::from_format_str("YYYY", "2255", &LocaleEn).map(|v| v.year()),
            Ok(2255)
        );
    }

    #[test]
    fn overlong_numeric_runs_do_not_overflow() {
        let (_, consumed) = RtcDateTime::parse_with_format("ssssssssssss", "999999999999", &LocaleEn);
        assert_eq!(consumed, 0);
        assert_eq!(
            RtcDateTime::from_format_str("hhhhhhhhhh", "4294967296", &LocaleEn),
            Err(Error::Parse { position: 0 })
        );
        assert_eq!(
            RtcDateTime::from_format_str("DDDDDDDDDD", "4294967303", &LocaleEn),
            Err(Error::Parse { position: 0 })
        );
        // fits in u32 but not in a field
        assert!(RtcDateTime::from_format_str("mmmmmmmmm", "000000260", &LocaleEn).is_err());
    }

    #[test]
    fn star_skips_through_the_next_literal() {
        let value = RtcDateTime::from_format_str("*T hh", "2024-01-01T 08", &LocaleEn).unwrap();
        assert_eq!(value.hour(), 8);

        let (_, consumed) = RtcDateTime::parse_with_format("hh*", "08 and the rest", &LocaleEn);
        assert_eq!(consumed, 15);
    }

    #[test]
    fn bang_skips_repeated_characters() {
        let one = RtcDateTime::from_format_str("MMM! D", "Dec 6", &LocaleEn).unwrap();
        let two = RtcDateTime::from_format_str("MMM! D", "Dec  6", &LocaleEn).unwrap();
        let none = RtcDateTime::from_format_str("MMM! D", "Dec6", &LocaleEn).unwrap();
        assert_eq!(one, two);
        assert_eq!(one, none);
    }

    #[test]
    fn zones_normalize_to_utc() {
        let base = RtcDateTime::new(2024, 3, 1, 12, 0, 0);
        let parse = |text| RtcDateTime::from_format_str("YYYY-MM-DD hh:mm:ss zzz", text, &LocaleEn);

        assert_eq!(parse("2024-03-01 12:00:00 Z"), Ok(base));
        assert_eq!(parse("2024-03-01 14:00:00 +02:00"), Ok(base));
        assert_eq!(parse("2024-03-01 06:30:00 -0530"), Ok(base));
        assert_eq!(parse("2024-03-01 13:00:00 CET"), Ok(base));
        assert_eq!(parse("2024-03-01 07:00:00 EST"), Ok(base));
        assert_eq!(
            parse("2024-03-01 12:00:00 XYZ"),
            Err(Error::Parse { position: 20 })
        );
    }

    #[test]
    fn zone_offset_before_origin_clamps() {
        let value = RtcDateTime::from_format_str("hh:mm z", "00:30 +01:00", &LocaleEn).unwrap();
        assert_eq!(value, RtcDateTime::default());
    }

    #[test]
    fn build_stamp() {
        let value = RtcDateTime::from_build_stamp("Dec  6 2009", "12:34:56").unwrap();
        assert_eq!(fields(&value), (2009, 12, 6, 12, 34, 56));
        let value = RtcDateTime::from_build_stamp("Jun 26 2024", "01:02:03").unwrap();
        assert_eq!(fields(&value), (2024, 6, 26, 1, 2, 3));
        assert!(RtcDateTime::from_build_stamp("Dec  6 2009", "12:34").is_err());
    }

    #[test]
    fn http_date() {
        let value = RtcDateTime::from_http_date("Sat, 26 Dec 2009 12:34:56 GMT").unwrap();
        assert_eq!(fields(&value), (2009, 12, 26, 12, 34, 56));
        let value = RtcDateTime::from_http_date("Sun, 30 Jun 2024 01:00:00 CEST").unwrap();
        assert_eq!(fields(&value), (2024, 6, 29, 23, 0, 0));
    }

    #[test]
    fn iso8601_text() {
        let value = RtcDateTime::new(2024, 6, 30, 23, 59, 58);
        assert_eq!(value.to_iso8601().as_str(), "2024-06-30T23:59:58");
        assert_eq!(RtcDateTime::default().to_iso8601().as_str(), "2000-01-01T00:00:00");
    }
}
