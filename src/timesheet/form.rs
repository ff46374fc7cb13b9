//! Form-field access and totals display seams.
//!
//! The calculator itself never touches presentation state; it reads raw
//! select values through [`FormFieldSource`] and pushes its results through
//! [`TotalsDisplay`]. [`recalculate`] is the glue that runs on every
//! relevant input event.

use crate::error::{invalid_entry_error, missing_field_error, TallyResult};
use crate::timesheet::calculator;
use crate::timesheet::models::{
    Boundary, PeriodResult, Segment, ShiftEntry, TimeSlot, DAYS_IN_PERIOD,
};
use std::collections::HashMap;
use tracing::debug;

/// Opacity hint paired with an enabled submit control
pub const SUBMIT_ENABLED_OPACITY: f64 = 1.0;

/// Opacity hint paired with a disabled submit control
pub const SUBMIT_DISABLED_OPACITY: f64 = 0.5;

/// Read access to the rendered timesheet form's raw select values.
/// `None` means the control could not be located.
pub trait FormFieldSource {
    fn value(&self, day_index: u8, segment: Segment, boundary: Boundary) -> Option<u8>;
}

/// Output slots the calculator's results are written to
pub trait TotalsDisplay {
    fn set_day_total(&mut self, day_index: u8, hours: f64);
    fn set_week_one_total(&mut self, hours: f64);
    fn set_week_two_total(&mut self, hours: f64);
    fn set_grand_total(&mut self, hours: f64);
    fn set_submit_enabled(&mut self, enabled: bool);
}

/// Control id for one boundary of one segment of one day,
/// e.g. `id_morning_begin_3`
pub fn field_name(day_index: u8, segment: Segment, boundary: Boundary) -> String {
    format!("id_{}_{}_{}", segment.as_str(), boundary.as_str(), day_index)
}

/// Read all fourteen entries out of the form.
///
/// A control that cannot be located fails the whole read with
/// `MissingField`; a raw value outside the preset range fails with
/// `InvalidEntry`. Nothing here produces a silent NaN-style fallback.
pub fn read_entries(form: &impl FormFieldSource) -> TallyResult<[ShiftEntry; DAYS_IN_PERIOD]> {
    let mut entries = [ShiftEntry::default(); DAYS_IN_PERIOD];
    for (index, entry) in entries.iter_mut().enumerate() {
        let day_index = index as u8;
        entry.day_index = day_index;
        for segment in Segment::ALL {
            for boundary in Boundary::ALL {
                let raw = form
                    .value(day_index, segment, boundary)
                    .ok_or_else(|| missing_field_error(&field_name(day_index, segment, boundary)))?;
                let slot = TimeSlot::try_from(raw).map_err(|_| {
                    invalid_entry_error(&format!(
                        "{}: unhandled slot value of \"{}\"",
                        field_name(day_index, segment, boundary),
                        raw
                    ))
                })?;
                entry.set(segment, boundary, slot);
            }
        }
    }
    Ok(entries)
}

/// Recompute the period from current form state and apply the display
/// updates, each exactly once
pub fn recalculate(
    form: &impl FormFieldSource,
    display: &mut impl TotalsDisplay,
) -> TallyResult<PeriodResult> {
    let entries = read_entries(form)?;
    let result = calculator::compute(&entries);

    for (index, total) in result.day_totals.iter().enumerate() {
        display.set_day_total(index as u8, *total);
    }
    display.set_week_one_total(result.week_one_total);
    display.set_week_two_total(result.week_two_total);
    display.set_grand_total(result.grand_total);
    display.set_submit_enabled(result.submit_enabled);

    debug!(
        "Recalculated period: {} hours, submit {}",
        result.grand_total,
        if result.submit_enabled { "enabled" } else { "disabled" }
    );

    Ok(result)
}

/// In-memory form backing, keyed by control id (for tests and tooling)
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    fields: HashMap<String, u8>,
}

impl MemoryForm {
    /// Create a form with no controls at all
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a form with every control present and unset
    pub fn empty_period() -> Self {
        let mut form = Self::new();
        for day_index in 0..DAYS_IN_PERIOD as u8 {
            for segment in Segment::ALL {
                for boundary in Boundary::ALL {
                    form.set(day_index, segment, boundary, 0);
                }
            }
        }
        form
    }

    /// Set one control's raw value
    pub fn set(&mut self, day_index: u8, segment: Segment, boundary: Boundary, raw: u8) {
        self.fields
            .insert(field_name(day_index, segment, boundary), raw);
    }

    /// Remove a control, as if it were missing from the page
    pub fn remove(&mut self, day_index: u8, segment: Segment, boundary: Boundary) {
        self.fields.remove(&field_name(day_index, segment, boundary));
    }
}

impl FormFieldSource for MemoryForm {
    fn value(&self, day_index: u8, segment: Segment, boundary: Boundary) -> Option<u8> {
        self.fields
            .get(&field_name(day_index, segment, boundary))
            .copied()
    }
}

/// In-memory display slots (for tests and tooling)
#[derive(Debug, Clone)]
pub struct MemoryDisplay {
    pub day_totals: [f64; DAYS_IN_PERIOD],
    pub week_one_total: f64,
    pub week_two_total: f64,
    pub grand_total: f64,
    pub submit_enabled: bool,
    pub submit_opacity: f64,
}

impl Default for MemoryDisplay {
    fn default() -> Self {
        // The submit control starts out disabled and dimmed
        Self {
            day_totals: [0.0; DAYS_IN_PERIOD],
            week_one_total: 0.0,
            week_two_total: 0.0,
            grand_total: 0.0,
            submit_enabled: false,
            submit_opacity: SUBMIT_DISABLED_OPACITY,
        }
    }
}

impl MemoryDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TotalsDisplay for MemoryDisplay {
    fn set_day_total(&mut self, day_index: u8, hours: f64) {
        if let Some(slot) = self.day_totals.get_mut(usize::from(day_index)) {
            *slot = hours;
        }
    }

    fn set_week_one_total(&mut self, hours: f64) {
        self.week_one_total = hours;
    }

    fn set_week_two_total(&mut self, hours: f64) {
        self.week_two_total = hours;
    }

    fn set_grand_total(&mut self, hours: f64) {
        self.grand_total = hours;
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
        self.submit_opacity = if enabled {
            SUBMIT_ENABLED_OPACITY
        } else {
            SUBMIT_DISABLED_OPACITY
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_field_name_convention() {
        assert_eq!(
            field_name(3, Segment::Morning, Boundary::Begin),
            "id_morning_begin_3"
        );
        assert_eq!(
            field_name(13, Segment::Evening, Boundary::End),
            "id_evening_end_13"
        );
    }

    #[test]
    fn test_read_entries_missing_field() {
        let mut form = MemoryForm::empty_period();
        form.remove(7, Segment::Afternoon, Boundary::Begin);

        let err = read_entries(&form).unwrap_err();
        match err {
            Error::MissingField(field) => assert_eq!(field, "id_afternoon_begin_7"),
            other => panic!("expected MissingField, got {:?}", other),
        }
    }

    #[test]
    fn test_read_entries_out_of_range() {
        let mut form = MemoryForm::empty_period();
        form.set(2, Segment::Morning, Boundary::End, 99);

        let err = read_entries(&form).unwrap_err();
        assert!(matches!(err, Error::InvalidEntry(_)));
    }

    #[test]
    fn test_read_entries_round_trip() {
        let mut form = MemoryForm::empty_period();
        form.set(4, Segment::Evening, Boundary::Begin, 25);
        form.set(4, Segment::Evening, Boundary::End, 29);

        let entries = read_entries(&form).unwrap();
        assert_eq!(entries[4].evening_begin, TimeSlot::At(25));
        assert_eq!(entries[4].evening_end, TimeSlot::At(29));
        assert_eq!(entries[4].day_index, 4);
        assert_eq!(entries[0].morning_begin, TimeSlot::Unset);
    }

    #[test]
    fn test_recalculate_updates_display() {
        let mut form = MemoryForm::empty_period();
        form.set(0, Segment::Morning, Boundary::Begin, 1);
        form.set(0, Segment::Morning, Boundary::End, 5);

        let mut display = MemoryDisplay::new();
        let result = recalculate(&form, &mut display).unwrap();

        assert_eq!(display.day_totals[0], 2.0);
        assert_eq!(display.grand_total, 2.0);
        assert_eq!(display.week_one_total, 2.0);
        assert_eq!(display.week_two_total, 0.0);
        assert!(display.submit_enabled);
        assert_eq!(display.submit_opacity, SUBMIT_ENABLED_OPACITY);
        assert_eq!(result.grand_total, 2.0);
    }

    #[test]
    fn test_recalculate_empty_form_dims_submit() {
        let form = MemoryForm::empty_period();
        let mut display = MemoryDisplay::new();

        let result = recalculate(&form, &mut display).unwrap();
        assert!(!result.submit_enabled);
        assert!(!display.submit_enabled);
        assert_eq!(display.submit_opacity, SUBMIT_DISABLED_OPACITY);
    }
}
