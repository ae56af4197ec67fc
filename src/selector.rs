use crate::models::DateSelection;
use chrono::NaiveDate;
use std::fmt;

const YEARS_BACK: i32 = 200;
const YEARS_AHEAD: i32 = 10;

pub const PLACEHOLDER_TEXT: &str = "Please select a date";

/// Day options offered for the current year/month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayRange {
    /// Year or month unset: only the `DD` placeholder is offered.
    Placeholder,
    Days(u32),
}

impl DayRange {
    pub fn option_count(self) -> usize {
        match self {
            DayRange::Placeholder => 1,
            DayRange::Days(count) => count as usize,
        }
    }

    pub fn contains(self, day: u32) -> bool {
        match self {
            DayRange::Placeholder => false,
            DayRange::Days(count) => (1..=count).contains(&day),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    Month,
    Day,
}

impl fmt::Display for DateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DateField::Year => "Year",
            DateField::Month => "Month",
            DateField::Day => "Day",
        };
        f.write_str(name)
    }
}

/// Raised when a lookup is requested before all three fields are set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error: Please select all three fields (Year, Month, Day) before clicking Enter.")]
pub struct FieldValidationError {
    pub missing: Vec<DateField>,
}

/// Rejected edit: the value is not one of the options currently offered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} value {value} is not one of the offered options")]
pub struct OutOfRange {
    pub field: DateField,
    pub value: i64,
}

/// Three dependent date fields. The day range follows year and month.
#[derive(Debug, Clone)]
pub struct DateSelector {
    current_year: i32,
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    day_range: DayRange,
}

impl DateSelector {
    pub fn new(current_year: i32) -> Self {
        Self {
            current_year,
            year: None,
            month: None,
            day: None,
            day_range: DayRange::Placeholder,
        }
    }

    /// Newest year first, the way the year dropdown lists them.
    pub fn year_options(&self) -> Vec<i32> {
        let newest = self.current_year + YEARS_AHEAD;
        let oldest = self.current_year - YEARS_BACK;
        (oldest..=newest).rev().collect()
    }

    pub fn month_options(&self) -> Vec<u32> {
        (1..=12).collect()
    }

    pub fn day_options(&self) -> Vec<u32> {
        match self.day_range {
            DayRange::Placeholder => Vec::new(),
            DayRange::Days(count) => (1..=count).collect(),
        }
    }

    pub fn year(&self) -> Option<i32> {
        self.year
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn day(&self) -> Option<u32> {
        self.day
    }

    pub fn day_range(&self) -> DayRange {
        self.day_range
    }

    pub fn set_year(&mut self, year: Option<i32>) -> Result<(), OutOfRange> {
        if let Some(value) = year {
            let offset = self.current_year + YEARS_AHEAD - value;
            if !(0..=YEARS_BACK + YEARS_AHEAD).contains(&offset) {
                return Err(OutOfRange {
                    field: DateField::Year,
                    value: i64::from(value),
                });
            }
        }
        self.year = year;
        self.refresh_days();
        Ok(())
    }

    pub fn set_month(&mut self, month: Option<u32>) -> Result<(), OutOfRange> {
        if let Some(value) = month {
            if !(1..=12).contains(&value) {
                return Err(OutOfRange {
                    field: DateField::Month,
                    value: i64::from(value),
                });
            }
        }
        self.month = month;
        self.refresh_days();
        Ok(())
    }

    pub fn set_day(&mut self, day: Option<u32>) -> Result<(), OutOfRange> {
        if let Some(value) = day {
            if !self.day_range.contains(value) {
                return Err(OutOfRange {
                    field: DateField::Day,
                    value: i64::from(value),
                });
            }
        }
        self.day = day;
        Ok(())
    }

    // The day list is rebuilt from scratch, so any chosen day is dropped.
    fn refresh_days(&mut self) {
        self.day_range = recompute_day_range(self.year, self.month);
        self.day = None;
    }

    pub fn is_complete(&self) -> bool {
        self.year.is_some() && self.month.is_some() && self.day.is_some()
    }

    pub fn current_selection(&self) -> Result<DateSelection, FieldValidationError> {
        match (self.year, self.month, self.day) {
            (Some(year), Some(month), Some(day)) => Ok(DateSelection { year, month, day }),
            (year, month, day) => {
                let mut missing = Vec::new();
                if year.is_none() {
                    missing.push(DateField::Year);
                }
                if month.is_none() {
                    missing.push(DateField::Month);
                }
                if day.is_none() {
                    missing.push(DateField::Day);
                }
                Err(FieldValidationError { missing })
            }
        }
    }

    pub fn describe(&self) -> String {
        match self.current_selection() {
            Ok(selection) => format!("Selected Date: {}", selection.iso_date()),
            Err(_) => PLACEHOLDER_TEXT.to_string(),
        }
    }

    pub fn reset(&mut self) {
        self.year = None;
        self.month = None;
        self.day = None;
        self.day_range = DayRange::Placeholder;
    }
}

pub fn recompute_day_range(year: Option<i32>, month: Option<u32>) -> DayRange {
    match (year, month) {
        (Some(year), Some(month)) => days_in_month(year, month)
            .map(DayRange::Days)
            .unwrap_or(DayRange::Placeholder),
        _ => DayRange::Placeholder,
    }
}

/// Calendar days in `month` of `year`, `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some(next.signed_duration_since(first).num_days() as u32)
}
