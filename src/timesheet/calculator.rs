//! Pure shift-total calculator for a two-week pay period.
//!
//! A single fold over the fourteen entries produces per-day totals, the two
//! weekly totals, the grand total, and the submit-gate flag. The aggregate
//! validity is evaluated once after the fold, so the submit state never
//! reflects a prefix of the period.

use crate::timesheet::models::{
    PeriodResult, Segment, ShiftEntry, TimeSlot, DAYS_IN_PERIOD, WEEK_SPLIT_INDEX,
};

/// Hours and validity of one morning/afternoon/evening segment
struct SegmentOutcome {
    hours: f64,
    valid: bool,
}

/// Evaluate one segment of a day.
///
/// The raw slot difference always contributes to the hour count, with the
/// unset sentinel participating as zero, matching the form's arithmetic.
/// Validity rules:
/// - both boundaries unset: valid, zero hours
/// - exactly one boundary set: invalid
/// - both set: the duration must be positive; `require_ordered` additionally
///   demands `end > begin` (the original form applied the ordering check to
///   afternoon and evening but not morning, and that asymmetry is kept)
fn segment_outcome(begin: TimeSlot, end: TimeSlot, require_ordered: bool) -> SegmentOutcome {
    let hours = (f64::from(end.raw()) - f64::from(begin.raw())) / 2.0;
    match (begin, end) {
        (TimeSlot::Unset, TimeSlot::Unset) => SegmentOutcome {
            hours: 0.0,
            valid: true,
        },
        (TimeSlot::At(b), TimeSlot::At(e)) => {
            let valid = if require_ordered {
                e > b && hours > 0.0
            } else {
                hours > 0.0
            };
            SegmentOutcome { hours, valid }
        }
        _ => SegmentOutcome {
            hours,
            valid: false,
        },
    }
}

/// Compute day, week, and grand totals plus the submit gate for a period.
///
/// Pure function of the fourteen entries: no hidden state, identical input
/// always yields identical output.
pub fn compute(entries: &[ShiftEntry; DAYS_IN_PERIOD]) -> PeriodResult {
    let mut day_totals = [0.0_f64; DAYS_IN_PERIOD];
    let mut day_valid = [false; DAYS_IN_PERIOD];
    let mut grand_total = 0.0;
    let mut week_one_total = 0.0;

    for (index, entry) in entries.iter().enumerate() {
        let (morning_begin, morning_end) = entry.segment(Segment::Morning);
        let (afternoon_begin, afternoon_end) = entry.segment(Segment::Afternoon);
        let (evening_begin, evening_end) = entry.segment(Segment::Evening);

        let morning = segment_outcome(morning_begin, morning_end, false);
        let afternoon = segment_outcome(afternoon_begin, afternoon_end, true);
        let evening = segment_outcome(evening_begin, evening_end, true);

        // A day that nets out negative counts as zero hours, but an invalid
        // segment still invalidates the whole day
        let shift_total = (morning.hours + afternoon.hours + evening.hours).max(0.0);

        day_totals[index] = shift_total;
        day_valid[index] = morning.valid && afternoon.valid && evening.valid;
        grand_total += shift_total;

        if index == WEEK_SPLIT_INDEX {
            week_one_total = grand_total;
        }
    }

    let all_days_valid = day_valid.iter().all(|valid| *valid);

    PeriodResult {
        day_totals,
        day_valid,
        week_one_total,
        week_two_total: grand_total - week_one_total,
        grand_total,
        submit_enabled: all_days_valid && grand_total > 0.0,
    }
}
