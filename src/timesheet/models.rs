use crate::error::{invalid_entry_error, Error, TallyResult};
use crate::timesheet::time;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of days in a two-week pay period
pub const DAYS_IN_PERIOD: usize = 14;

/// Index of the last day of week one (days 0-6)
pub const WEEK_SPLIT_INDEX: usize = 6;

/// A half-hour-resolution clock time picked from the timesheet form.
///
/// The wire encoding is the form's raw select value: `0` means the control
/// was left unset, `1` is 6:00 am, and each step adds 30 minutes up to
/// `39` (1:00 am). Keeping the sentinel as its own variant means "unset"
/// can never be confused with a real time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TimeSlot {
    #[default]
    Unset,
    At(u8),
}

impl TimeSlot {
    /// Last settable slot (1:00 am)
    pub const LAST: u8 = 39;

    /// Raw form value for this slot
    pub fn raw(self) -> u8 {
        match self {
            TimeSlot::Unset => 0,
            TimeSlot::At(n) => n,
        }
    }

    /// Whether the control holds an actual time
    pub fn is_set(self) -> bool {
        !matches!(self, TimeSlot::Unset)
    }

    /// Human-readable label matching the form's preset choices
    pub fn label(self) -> String {
        match self {
            TimeSlot::Unset => "-".to_string(),
            TimeSlot::At(n) => {
                time::slot_label(n).unwrap_or_else(|| format!("slot {}", n))
            }
        }
    }
}

impl TryFrom<u8> for TimeSlot {
    type Error = Error;

    fn try_from(raw: u8) -> TallyResult<Self> {
        match raw {
            0 => Ok(TimeSlot::Unset),
            n if n <= TimeSlot::LAST => Ok(TimeSlot::At(n)),
            n => Err(invalid_entry_error(&format!(
                "Unhandled slot value of \"{}\"",
                n
            ))),
        }
    }
}

impl From<TimeSlot> for u8 {
    fn from(slot: TimeSlot) -> Self {
        slot.raw()
    }
}

/// One of the three shift segments of a timesheet day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Morning,
    Afternoon,
    Evening,
}

impl Segment {
    pub const ALL: [Segment; 3] = [Segment::Morning, Segment::Afternoon, Segment::Evening];

    pub fn as_str(&self) -> &'static str {
        match self {
            Segment::Morning => "morning",
            Segment::Afternoon => "afternoon",
            Segment::Evening => "evening",
        }
    }
}

/// Start or end boundary of a shift segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Boundary {
    Begin,
    End,
}

impl Boundary {
    pub const ALL: [Boundary; 2] = [Boundary::Begin, Boundary::End];

    pub fn as_str(&self) -> &'static str {
        match self {
            Boundary::Begin => "begin",
            Boundary::End => "end",
        }
    }
}

/// One calendar day of a two-week pay period
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftEntry {
    /// Position in the period: 0-6 is week one, 7-13 is week two
    #[serde(default)]
    pub day_index: u8,
    #[serde(default)]
    pub morning_begin: TimeSlot,
    #[serde(default)]
    pub morning_end: TimeSlot,
    #[serde(default)]
    pub afternoon_begin: TimeSlot,
    #[serde(default)]
    pub afternoon_end: TimeSlot,
    #[serde(default)]
    pub evening_begin: TimeSlot,
    #[serde(default)]
    pub evening_end: TimeSlot,
}

impl ShiftEntry {
    /// Create an empty entry for the given day
    pub fn new(day_index: u8) -> Self {
        Self {
            day_index,
            ..Self::default()
        }
    }

    /// Begin and end slots of the given segment
    pub fn segment(&self, segment: Segment) -> (TimeSlot, TimeSlot) {
        match segment {
            Segment::Morning => (self.morning_begin, self.morning_end),
            Segment::Afternoon => (self.afternoon_begin, self.afternoon_end),
            Segment::Evening => (self.evening_begin, self.evening_end),
        }
    }

    /// Set one boundary of one segment
    pub fn set(&mut self, segment: Segment, boundary: Boundary, slot: TimeSlot) {
        let field = match (segment, boundary) {
            (Segment::Morning, Boundary::Begin) => &mut self.morning_begin,
            (Segment::Morning, Boundary::End) => &mut self.morning_end,
            (Segment::Afternoon, Boundary::Begin) => &mut self.afternoon_begin,
            (Segment::Afternoon, Boundary::End) => &mut self.afternoon_end,
            (Segment::Evening, Boundary::Begin) => &mut self.evening_begin,
            (Segment::Evening, Boundary::End) => &mut self.evening_end,
        };
        *field = slot;
    }
}

/// Computed totals and submit-gate state for one pay period
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodResult {
    /// Hours worked per day, clamped at zero
    pub day_totals: [f64; DAYS_IN_PERIOD],
    /// Whether every segment of the day passed its validity check
    pub day_valid: [bool; DAYS_IN_PERIOD],
    pub week_one_total: f64,
    pub week_two_total: f64,
    pub grand_total: f64,
    /// True iff every day is valid and the period is non-empty
    pub submit_enabled: bool,
}

#[derive(Deserialize)]
struct PayPeriodSpec {
    date_start: NaiveDate,
    #[serde(default)]
    date_end: Option<NaiveDate>,
}

/// An instance of a two week pay period
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PayPeriodSpec")]
pub struct PayPeriod {
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
}

impl PayPeriod {
    /// Create a period starting on the given date; the end date is always
    /// thirteen days later
    pub fn new(date_start: NaiveDate) -> Self {
        Self {
            date_start,
            date_end: date_start + Duration::days(13),
        }
    }

    /// Whether the date falls inside this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.date_start && date <= self.date_end
    }

    /// Calendar date of the given day index, if it is in range
    pub fn day_date(&self, day_index: u8) -> Option<NaiveDate> {
        if usize::from(day_index) < DAYS_IN_PERIOD {
            Some(self.date_start + Duration::days(i64::from(day_index)))
        } else {
            None
        }
    }

    /// Locate the period a date falls into, given the start date of any
    /// known pay period. Periods repeat back to back every fourteen days.
    pub fn containing(anchor: NaiveDate, date: NaiveDate) -> Self {
        let offset = (date - anchor).num_days().rem_euclid(14);
        Self::new(date - Duration::days(offset))
    }
}

impl From<PayPeriodSpec> for PayPeriod {
    fn from(spec: PayPeriodSpec) -> Self {
        match spec.date_end {
            Some(date_end) => Self {
                date_start: spec.date_start,
                date_end,
            },
            None => Self::new(spec.date_start),
        }
    }
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.date_start, self.date_end)
    }
}

/// A pay period's worth of shift entries, as stored in a timesheet file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Timesheet {
    /// Period the sheet covers; resolved from the period anchor when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pay_period: Option<PayPeriod>,
    pub days: Vec<ShiftEntry>,
}

impl Timesheet {
    /// Parse a timesheet from TOML, requiring exactly fourteen days.
    /// Day indices are assigned from position in the file.
    pub fn from_toml(raw: &str) -> TallyResult<Self> {
        let mut sheet: Timesheet = toml::from_str(raw)?;
        if sheet.days.len() != DAYS_IN_PERIOD {
            return Err(invalid_entry_error(&format!(
                "Expected {} days in the pay period, got {}",
                DAYS_IN_PERIOD,
                sheet.days.len()
            )));
        }
        for (index, day) in sheet.days.iter_mut().enumerate() {
            day.day_index = index as u8;
        }
        Ok(sheet)
    }

    /// The fourteen entries as a fixed-size array for the calculator
    pub fn entries(&self) -> [ShiftEntry; DAYS_IN_PERIOD] {
        let mut entries = [ShiftEntry::default(); DAYS_IN_PERIOD];
        for (index, day) in self.days.iter().take(DAYS_IN_PERIOD).enumerate() {
            entries[index] = *day;
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slot_wire_values() {
        // Valid cases
        assert_eq!(TimeSlot::try_from(0).unwrap(), TimeSlot::Unset);
        assert_eq!(TimeSlot::try_from(1).unwrap(), TimeSlot::At(1));
        assert_eq!(TimeSlot::try_from(39).unwrap(), TimeSlot::At(39));

        // Out of range fails instead of silently producing garbage
        assert!(TimeSlot::try_from(40).is_err());
        assert!(TimeSlot::try_from(255).is_err());

        // Round trip back to the raw value
        assert_eq!(u8::from(TimeSlot::Unset), 0);
        assert_eq!(u8::from(TimeSlot::At(17)), 17);
    }

    #[test]
    fn test_time_slot_labels() {
        assert_eq!(TimeSlot::Unset.label(), "-");
        assert_eq!(TimeSlot::At(1).label(), "6:00 am");
        assert_eq!(TimeSlot::At(13).label(), "12:00 pm");
        assert_eq!(TimeSlot::At(39).label(), "1:00 am");
    }

    #[test]
    fn test_pay_period_end_date() {
        let start = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();
        let period = PayPeriod::new(start);
        assert_eq!(period.date_end, NaiveDate::from_ymd_opt(2019, 1, 14).unwrap());
        assert!(period.contains(start));
        assert!(period.contains(period.date_end));
        assert!(!period.contains(NaiveDate::from_ymd_opt(2019, 1, 15).unwrap()));
    }

    #[test]
    fn test_pay_period_day_dates() {
        let period = PayPeriod::new(NaiveDate::from_ymd_opt(2019, 1, 1).unwrap());
        assert_eq!(
            period.day_date(0),
            Some(NaiveDate::from_ymd_opt(2019, 1, 1).unwrap())
        );
        assert_eq!(
            period.day_date(13),
            Some(NaiveDate::from_ymd_opt(2019, 1, 14).unwrap())
        );
        assert_eq!(period.day_date(14), None);
    }

    #[test]
    fn test_pay_period_containing() {
        let anchor = NaiveDate::from_ymd_opt(2019, 1, 1).unwrap();

        // Date inside the anchor period
        let period = PayPeriod::containing(anchor, NaiveDate::from_ymd_opt(2019, 1, 8).unwrap());
        assert_eq!(period.date_start, anchor);

        // Date in the following period
        let period = PayPeriod::containing(anchor, NaiveDate::from_ymd_opt(2019, 1, 20).unwrap());
        assert_eq!(
            period.date_start,
            NaiveDate::from_ymd_opt(2019, 1, 15).unwrap()
        );

        // Date before the anchor still lands on the fourteen-day grid
        let period = PayPeriod::containing(anchor, NaiveDate::from_ymd_opt(2018, 12, 30).unwrap());
        assert_eq!(
            period.date_start,
            NaiveDate::from_ymd_opt(2018, 12, 18).unwrap()
        );
        assert!(period.contains(NaiveDate::from_ymd_opt(2018, 12, 30).unwrap()));
    }

    #[test]
    fn test_timesheet_requires_fourteen_days() {
        let sheet = Timesheet {
            pay_period: None,
            days: vec![ShiftEntry::default(); 13],
        };
        let raw = toml::to_string(&sheet).unwrap();
        assert!(Timesheet::from_toml(&raw).is_err());
    }

    #[test]
    fn test_timesheet_assigns_day_indices() {
        let sheet = Timesheet {
            pay_period: None,
            days: vec![ShiftEntry::default(); 14],
        };
        let raw = toml::to_string(&sheet).unwrap();
        let parsed = Timesheet::from_toml(&raw).unwrap();
        let indices: Vec<u8> = parsed.days.iter().map(|d| d.day_index).collect();
        assert_eq!(indices, (0..14).collect::<Vec<u8>>());
    }
}
