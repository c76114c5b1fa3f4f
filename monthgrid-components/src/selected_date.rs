//! Selection and range value types.
//!
//! ## Usage
//!
//! A [`SelectedDate`] is the current user selection: a single date or an
//! ordered date pair. A [`DateRange`] is the inclusive min/max window the
//! picker is allowed to show. Both are immutable values replaced wholesale on
//! every change.

use thiserror::Error;
use time::Date;

/// Discriminates the two selection shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionType {
    /// One selected day.
    Single,
    /// An inclusive start/end pair of days.
    Range,
}

/// The current selection: one date, or an ordered pair of dates.
///
/// Range endpoints are normalized so that start ≤ end always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectedDate {
    /// A single selected date.
    Single(Date),
    /// An inclusive date range with `start <= end`.
    Range {
        /// Earlier endpoint.
        start: Date,
        /// Later endpoint.
        end: Date,
    },
}

impl SelectedDate {
    /// Creates a single-date selection.
    pub const fn single(date: Date) -> Self {
        Self::Single(date)
    }

    /// Creates a range selection, swapping the endpoints if needed.
    pub fn range(a: Date, b: Date) -> Self {
        if a <= b {
            Self::Range { start: a, end: b }
        } else {
            Self::Range { start: b, end: a }
        }
    }

    /// Returns the shape of this selection.
    pub fn selection_type(&self) -> SelectionType {
        match self {
            Self::Single(_) => SelectionType::Single,
            Self::Range { .. } => SelectionType::Range,
        }
    }

    /// The first date of the pair, or the single date itself.
    pub fn first_date(&self) -> Date {
        match self {
            Self::Single(date) => *date,
            Self::Range { start, .. } => *start,
        }
    }

    /// The second date of the pair, or the single date itself.
    pub fn second_date(&self) -> Date {
        match self {
            Self::Single(date) => *date,
            Self::Range { end, .. } => *end,
        }
    }

    /// The chronologically earlier endpoint.
    pub fn start_date(&self) -> Date {
        self.first_date()
    }

    /// The chronologically later endpoint.
    pub fn end_date(&self) -> Date {
        self.second_date()
    }
}

/// Error raised when a [`DateRange`] is constructed with inverted bounds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateRangeError {
    /// The minimum date fell after the maximum date.
    #[error("minimum date {min} is after maximum date {max}")]
    MinAfterMax {
        /// The offending minimum.
        min: Date,
        /// The offending maximum.
        max: Date,
    },
}

/// The inclusive min/max window a picker may display.
///
/// Month granularity drives the page count; day granularity drives the
/// enabled-day bounds at the boundary months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    min: Date,
    max: Date,
}

impl DateRange {
    /// Creates a range, rejecting inverted bounds.
    pub fn new(min: Date, max: Date) -> Result<Self, DateRangeError> {
        if min > max {
            return Err(DateRangeError::MinAfterMax { min, max });
        }
        Ok(Self { min, max })
    }

    /// The inclusive lower bound.
    pub fn min(&self) -> Date {
        self.min
    }

    /// The inclusive upper bound.
    pub fn max(&self) -> Date {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use time::Month;

    use super::*;

    fn date(year: i32, month: u8, day: u8) -> Date {
        Date::from_calendar_date(year, Month::try_from(month).unwrap(), day).unwrap()
    }

    #[test]
    fn test_range_normalizes_order() {
        let sel = SelectedDate::range(date(2024, 4, 5), date(2024, 2, 10));
        assert_eq!(sel.first_date(), date(2024, 2, 10));
        assert_eq!(sel.second_date(), date(2024, 4, 5));
        assert_eq!(sel.selection_type(), SelectionType::Range);
    }

    #[test]
    fn test_single_reports_same_date_for_both_endpoints() {
        let sel = SelectedDate::single(date(2024, 1, 15));
        assert_eq!(sel.first_date(), sel.second_date());
        assert_eq!(sel.selection_type(), SelectionType::Single);
    }

    #[test]
    fn test_date_range_rejects_inverted_bounds() {
        let err = DateRange::new(date(2024, 6, 1), date(2024, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            DateRangeError::MinAfterMax {
                min: date(2024, 6, 1),
                max: date(2024, 1, 1),
            }
        );
        assert!(DateRange::new(date(2024, 1, 1), date(2024, 1, 1)).is_ok());
    }
}
