//! Month names and time zone abbreviations used by the text parser

use crate::timezone::TimeZone;

mod en_table;

/// Locale services consumed by [`RtcDateTime::parse_with_format`](crate::RtcDateTime::parse_with_format).
pub trait Locale {
    /// Month number 1..=12 for a month name or abbreviation, 0 when not recognised.
    fn chars_to_month(&self, chars: &str) -> u8;

    /// Offset in minutes for the abbreviation at the start of `text`, and the
    /// number of characters the abbreviation spans.
    fn time_zone_minutes_from_abbreviation(&self, text: &str) -> Option<(i32, usize)>;
}

/// English month names with the full international abbreviation table
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleEn;

/// English month names with the North American abbreviations only
#[derive(Debug, Clone, Copy, Default)]
pub struct LocaleEnUs;

static US_TIME_ZONES: &[TimeZone] = &[
    TimeZone::new("ADT", -3 * 60),
    TimeZone::new("AKDT", -8 * 60),
    TimeZone::new("AKST", -9 * 60),
    TimeZone::new("AST", -4 * 60),
    TimeZone::new("CDT", -5 * 60),
    TimeZone::new("CST", -6 * 60),
    TimeZone::new("EDT", -4 * 60),
    TimeZone::new("EST", -5 * 60),
    TimeZone::new("GMT", 0),
    TimeZone::new("HDT", -9 * 60),
    TimeZone::new("HST", -10 * 60),
    TimeZone::new("MDT", -6 * 60),
    TimeZone::new("MST", -7 * 60),
    TimeZone::new("PDT", -7 * 60),
    TimeZone::new("PST", -8 * 60),
    TimeZone::new("UTC", 0),
];

impl Locale for LocaleEn {
    fn chars_to_month(&self, chars: &str) -> u8 {
        english_month(chars)
    }

    fn time_zone_minutes_from_abbreviation(&self, text: &str) -> Option<(i32, usize)> {
        TimeZone::binary_search(en_table::TIME_ZONES, text)
            .map(|zone| (zone.offset_minutes, zone.abbr.len()))
    }
}

impl Locale for LocaleEnUs {
    fn chars_to_month(&self, chars: &str) -> u8 {
        english_month(chars)
    }

    fn time_zone_minutes_from_abbreviation(&self, text: &str) -> Option<(i32, usize)> {
        TimeZone::binary_search(US_TIME_ZONES, text)
            .map(|zone| (zone.offset_minutes, zone.abbr.len()))
    }
}

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Works for both the three letter abbreviations and the full names.
///
/// Jan/Jun/Jul, Mar/May and Apr/Aug only differ after the first letter, so
/// up to three characters pick the candidate. The whole input must then be a
/// prefix of that month's name.
fn english_month(chars: &str) -> u8 {
    let bytes = chars.as_bytes();
    if bytes.len() < 3 {
        return 0;
    }
    let letter = |index: usize| bytes[index].to_ascii_lowercase();

    let month = match letter(0) {
        b'j' if letter(1) == b'a' => 1,
        b'j' if letter(2) == b'n' => 6,
        b'j' => 7,
        b'f' => 2,
        b'm' if letter(2) == b'r' => 3,
        b'm' => 5,
        b'a' if letter(1) == b'p' => 4,
        b'a' => 8,
        b's' => 9,
        b'o' => 10,
        b'n' => 11,
        b'd' => 12,
        _ => return 0,
    };

    let name = MONTH_NAMES[usize::from(month) - 1].as_bytes();
    if bytes.len() <= name.len() && name[..bytes.len()].eq_ignore_ascii_case(bytes) {
        month
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];

    #[test]
    fn abbreviations_and_full_names() {
        for (index, name) in NAMES.iter().enumerate() {
            let month = index as u8 + 1;
            assert_eq!(LocaleEn.chars_to_month(name), month, "{}", name);
            assert_eq!(LocaleEnUs.chars_to_month(&name[..3]), month, "{}", name);
            assert_eq!(LocaleEn.chars_to_month(&name.to_uppercase()), month, "{}", name);
        }
    }

    #[test]
    fn unknown_or_short_names() {
        assert_eq!(LocaleEn.chars_to_month("Ja"), 0);
        assert_eq!(LocaleEn.chars_to_month("Xyz"), 0);
        assert_eq!(LocaleEn.chars_to_month(""), 0);
    }

    #[test]
    fn words_that_only_start_like_a_month() {
        assert_eq!(LocaleEn.chars_to_month("Foo"), 0);
        assert_eq!(LocaleEn.chars_to_month("Dog"), 0);
        assert_eq!(LocaleEn.chars_to_month("Jxx"), 0);
        assert_eq!(LocaleEnUs.chars_to_month("Mayday"), 0);
        assert_eq!(LocaleEn.chars_to_month("Septembers"), 0);
        assert_eq!(LocaleEn.chars_to_month("sept"), 9);
        assert_eq!(LocaleEn.chars_to_month("SEPTEMBER"), 9);
    }

    fn assert_sorted(table: &[TimeZone]) {
        for pair in table.windows(2) {
            assert!(
                pair[0].search_key() < pair[1].search_key(),
                "{} must sort before {}",
                pair[0].abbr,
                pair[1].abbr
            );
        }
    }

    #[test]
    fn tables_are_strictly_sorted() {
        assert_sorted(en_table::TIME_ZONES);
        assert_sorted(US_TIME_ZONES);
    }

    #[test]
    fn every_entry_is_reachable() {
        for zone in en_table::TIME_ZONES {
            assert_eq!(
                LocaleEn.time_zone_minutes_from_abbreviation(zone.abbr),
                Some((zone.offset_minutes, zone.abbr.len()))
            );
        }
        for zone in US_TIME_ZONES {
            assert_eq!(
                LocaleEnUs.time_zone_minutes_from_abbreviation(zone.abbr),
                Some((zone.offset_minutes, zone.abbr.len()))
            );
        }
    }

    #[test]
    fn offsets() {
        assert_eq!(LocaleEn.time_zone_minutes_from_abbreviation("NPT"), Some((345, 3)));
        assert_eq!(LocaleEn.time_zone_minutes_from_abbreviation("CHADT"), Some((825, 5)));
        assert_eq!(LocaleEn.time_zone_minutes_from_abbreviation("MART"), Some((-570, 4)));
        assert_eq!(LocaleEnUs.time_zone_minutes_from_abbreviation("PDT"), Some((-420, 3)));
        assert_eq!(LocaleEnUs.time_zone_minutes_from_abbreviation("JST"), None);
        assert_eq!(LocaleEn.time_zone_minutes_from_abbreviation("JST"), Some((540, 3)));
    }
}
