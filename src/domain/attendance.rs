//! Attendance domain types.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

/// Check-ins after 7:30 count as late.
const LATE_AFTER_MINUTES: u32 = 7 * 60 + 30;
/// Check-outs before 16:30 count as early.
const EARLY_BEFORE_MINUTES: u32 = 16 * 60 + 30;

/// One employee's check-in/check-out record for a single day.
///
/// `first_in` and `last_out` are `None` when the device recorded no event.
/// No ordering between them is guaranteed by the source data.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub employee_id: String,
    pub employee_name: String,
    pub date: Option<NaiveDate>,
    pub first_in: Option<NaiveDateTime>,
    pub last_out: Option<NaiveDateTime>,
}

impl AttendanceRecord {
    pub fn is_late_check_in(&self) -> bool {
        self.first_in
            .map(|t| t.hour() * 60 + t.minute() > LATE_AFTER_MINUTES)
            .unwrap_or(false)
    }

    pub fn is_early_check_out(&self) -> bool {
        self.last_out
            .map(|t| t.hour() * 60 + t.minute() < EARLY_BEFORE_MINUTES)
            .unwrap_or(false)
    }
}
