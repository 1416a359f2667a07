//! Mapping between integer periods and civil dates
//!
//! Period `n` is the date `n` months after the model start. Month arithmetic
//! clamps to the end of shorter months (Jan 31 + 1 month = Feb 28/29), and
//! [`PeriodCalendar::period_of`] treats such clamped dates as a full month.

use jiff::ToSpan;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodCalendar {
    start: Date,
}

impl PeriodCalendar {
    pub fn new(start: Date) -> Self {
        Self { start }
    }

    pub fn start(&self) -> Date {
        self.start
    }

    /// Civil date at which `period` begins
    pub fn date_of(&self, period: u32) -> Date {
        self.start.saturating_add(i64::from(period).months())
    }

    /// Whole months elapsed from the start to `date`, or `None` before the start
    pub fn period_of(&self, date: Date) -> Option<u32> {
        if date < self.start {
            return None;
        }

        let years = i32::from(date.year()) - i32::from(self.start.year());
        let months = i32::from(date.month()) - i32::from(self.start.month());
        let mut elapsed = years * 12 + months;

        // Short of a full month unless the date was clamped to month end
        if date.day() < self.start.day() && date.day() < date.days_in_month() {
            elapsed -= 1;
        }

        u32::try_from(elapsed).ok()
    }
}
