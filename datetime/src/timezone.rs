//! Time zone abbreviation tables

use core::cmp::Ordering;

/// Abbreviations are compared on at most this many leading characters.
const SEARCH_WINDOW: usize = 4;

/// One entry of a locale's abbreviation table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeZone {
    pub abbr: &'static str,
    /// Offset from UTC, positive east of Greenwich.
    pub offset_minutes: i32,
}

impl TimeZone {
    pub const fn new(abbr: &'static str, offset_minutes: i32) -> Self {
        TimeZone {
            abbr,
            offset_minutes,
        }
    }

    /// Search a table sorted by [`search_key`](Self::search_key).
    ///
    /// `text` may continue past the abbreviation; only its leading run of
    /// letters takes part in the comparison.
    pub fn binary_search(table: &'static [TimeZone], text: &str) -> Option<&'static TimeZone> {
        let key = window(leading_letters(text));
        table
            .binary_search_by(|entry| entry.search_key().cmp(key))
            .ok()
            .map(|index| &table[index])
    }

    /// Same match rule as [`binary_search`](Self::binary_search), for unsorted tables.
    pub fn linear_search(table: &'static [TimeZone], text: &str) -> Option<&'static TimeZone> {
        let key = window(leading_letters(text));
        table
            .iter()
            .find(|entry| entry.search_key().cmp(key) == Ordering::Equal)
    }

    /// The part of the abbreviation that searches compare against.
    pub fn search_key(&self) -> &'static [u8] {
        window(self.abbr)
    }
}

fn leading_letters(text: &str) -> &str {
    let end = text
        .bytes()
        .take_while(|byte| byte.is_ascii_alphabetic())
        .count();
    &text[..end]
}

fn window(text: &str) -> &[u8] {
    let bytes = text.as_bytes();
    &bytes[..bytes.len().min(SEARCH_WINDOW)]
}
