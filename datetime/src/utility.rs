//! BCD helpers for RTC register values

/// Decode one packed BCD byte (two decimal digits).
pub fn bcd_to_u8(value: u8) -> u8 {
    value - 6 * (value >> 4)
}

/// Encode a value below 100 as one packed BCD byte.
pub fn u8_to_bcd(value: u8) -> u8 {
    value.wrapping_add(6 * (value / 10))
}

/// Decode an hours register, which may hold either 24-hour or 12-hour AM/PM form.
pub fn bcd_to_bin_24_hour(bcd_hour: u8) -> u8 {
    const TWELVE_HOUR: u8 = 0b0100_0000;
    const PM: u8 = 0b0010_0000;

    if bcd_hour & TWELVE_HOUR == 0 {
        return bcd_to_u8(bcd_hour & 0x3F);
    }
    let hour = bcd_to_u8(bcd_hour & 0x1F) % 12;
    if bcd_hour & PM != 0 {
        hour + 12
    } else {
        hour
    }
}
