//! Timesheet component: pay-period models, the shift-total calculator, and
//! the form, display, and signature seams around it.

pub mod calculator;
pub mod form;
pub mod models;
pub mod signature;
pub mod time;

pub use calculator::compute;
pub use form::{recalculate, FormFieldSource, TotalsDisplay};
pub use models::{PayPeriod, PeriodResult, ShiftEntry, TimeSlot, Timesheet};
pub use signature::{SignatureGate, SignaturePad};
