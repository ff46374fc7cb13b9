//! Conversions between raw slot values and the form's preset time labels.
//!
//! Slot 1 is 6:00 am and each following slot adds thirty minutes, wrapping
//! past midnight up to slot 39 (1:00 am). Slot 0 is the unset sentinel.

use crate::timesheet::models::TimeSlot;

/// Minutes after midnight of slot 1 (6:00 am)
const FIRST_SLOT_MINUTES: u32 = 6 * 60;

const MINUTES_PER_DAY: u32 = 24 * 60;

/// Format a settable slot as its preset label, e.g. "6:30 am".
/// Returns `None` for the unset sentinel and for out-of-range values.
pub fn slot_label(slot: u8) -> Option<String> {
    if slot == 0 || slot > TimeSlot::LAST {
        return None;
    }
    let minutes = (FIRST_SLOT_MINUTES + u32::from(slot - 1) * 30) % MINUTES_PER_DAY;
    let hour24 = minutes / 60;
    let minute = minutes % 60;

    let meridiem = if hour24 < 12 { "am" } else { "pm" };
    let hour12 = match hour24 % 12 {
        0 => 12,
        h => h,
    };

    Some(format!("{}:{:02} {}", hour12, minute, meridiem))
}

/// Parse a preset time label back to its raw slot value.
///
/// Accepts both the display spelling ("6:00 am") and the zero-padded form
/// input spelling ("06:00 AM"). "-" is the unset sentinel.
pub fn slot_from_label(label: &str) -> Option<u8> {
    let label = label.trim();
    if label == "-" {
        return Some(0);
    }

    let (clock, meridiem) = label.split_once(' ')?;
    let meridiem = meridiem.to_ascii_lowercase();
    if meridiem != "am" && meridiem != "pm" {
        return None;
    }

    let (hour_str, minute_str) = clock.split_once(':')?;
    let hour = hour_str.parse::<u32>().ok()?;
    let minute = minute_str.parse::<u32>().ok()?;
    if !(1..=12).contains(&hour) || (minute != 0 && minute != 30) {
        return None;
    }

    // Convert to a 24-hour clock
    let hour24 = match (hour, meridiem.as_str()) {
        (12, "am") => 0,
        (12, "pm") => 12,
        (h, "am") => h,
        (h, _) => h + 12,
    };

    // Count half-hour steps from 6:00 am, wrapping past midnight
    let minutes = hour24 * 60 + minute;
    let offset = (minutes + MINUTES_PER_DAY - FIRST_SLOT_MINUTES) % MINUTES_PER_DAY;
    let slot = offset / 30 + 1;

    if slot <= u32::from(TimeSlot::LAST) {
        Some(slot as u8)
    } else {
        None
    }
}

/// Format an hour total the way the timesheet displays it: whole numbers
/// without a decimal point, halves as "n.5"
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{}", hours as i64)
    } else {
        format!("{}", hours)
    }
}
