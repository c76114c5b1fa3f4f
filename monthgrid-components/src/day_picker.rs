//! The day-picker position model.
//!
//! ## Usage
//!
//! Maps a bounded [`DateRange`] onto a zero-based sequence of month pages and
//! resolves, for any month, which days are selected and which are selectable.
//! Pure state + arithmetic; the adapters own all view concerns.

use smallvec::SmallVec;
use time::{Month, Weekday};

use crate::selected_date::{DateRange, SelectedDate};

const MONTHS_IN_YEAR: i64 = 12;

const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// An inclusive (start, end) day-of-month pair within one month.
///
/// `(-1, -1)` is the "nothing selected in this month" sentinel, kept as a
/// value rather than an `Option` so the bind path stays allocation-free and
/// the cell contract can consume it directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySpan {
    /// First highlighted day of month, or -1.
    pub start: i32,
    /// Last highlighted day of month, or -1.
    pub end: i32,
}

impl DaySpan {
    /// The "no days selected" sentinel.
    pub const NONE: Self = Self { start: -1, end: -1 };

    /// Creates a span over `start..=end` days of a month.
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Whether this span is the sentinel.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

/// Position model for a bounded grid of month pages.
///
/// Position 0 is the month containing the range minimum; each following
/// position advances one calendar month. All operations are total over their
/// stated domains and never allocate beyond the 1–2 element position sets.
#[derive(Debug, Clone)]
pub struct DayPicker {
    range: DateRange,
    selected_day: Option<SelectedDate>,
    week_start: Weekday,
    count: usize,
}

impl DayPicker {
    /// Creates a picker over the given range, with the week starting Sunday.
    pub fn new(range: DateRange) -> Self {
        let mut picker = Self {
            range,
            selected_day: None,
            week_start: Weekday::Sunday,
            count: 0,
        };
        picker.set_range(range);
        picker
    }

    /// Replaces the month range and recomputes the page count.
    ///
    /// All previously computed positions are stale after this call.
    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
        let diff_year = range.max().year() as i64 - range.min().year() as i64;
        let diff_month = month_index0(range.max().month()) - month_index0(range.min().month());
        self.count = (diff_month + MONTHS_IN_YEAR * diff_year + 1) as usize;
    }

    /// The configured range.
    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Total number of month pages.
    pub fn page_count(&self) -> usize {
        self.count
    }

    /// The weekday shown in the first column.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Sets the weekday shown in the first column.
    pub fn set_week_start(&mut self, week_start: Weekday) {
        self.week_start = week_start;
    }

    /// The current selection, if any.
    pub fn selected_day(&self) -> Option<SelectedDate> {
        self.selected_day
    }

    /// Replaces the current selection.
    pub fn set_selected_day(&mut self, day: Option<SelectedDate>) {
        self.selected_day = day;
    }

    /// The month shown at `position`. Valid for `0 <= position < count`.
    pub fn month_for_position(&self, position: usize) -> Month {
        debug_assert!(position < self.count, "position {position} out of range");
        let index = (position as i64 + month_index0(self.range.min().month())) % MONTHS_IN_YEAR;
        MONTHS[index as usize]
    }

    /// The year shown at `position`. Valid for `0 <= position < count`.
    pub fn year_for_position(&self, position: usize) -> i32 {
        debug_assert!(position < self.count, "position {position} out of range");
        let year_offset =
            (position as i64 + month_index0(self.range.min().month())) / MONTHS_IN_YEAR;
        self.range.min().year() + year_offset as i32
    }

    /// Page positions touched by a selection, relative to the range minimum.
    ///
    /// Empty for no selection, one element for a single date, two elements
    /// (start month, end month) for a range. Offsets are signed: a selection
    /// outside the configured range maps outside `[0, count)` and simply has
    /// no bound cell.
    pub fn positions_for_day(&self, day: Option<SelectedDate>) -> SmallVec<[i64; 2]> {
        let mut positions = SmallVec::new();
        let Some(day) = day else {
            return positions;
        };

        match day {
            SelectedDate::Single(date) => {
                positions.push(self.position_offset(date));
            }
            SelectedDate::Range { start, end } => {
                positions.push(self.position_offset(start));
                positions.push(self.position_offset(end));
            }
        }
        positions
    }

    /// Resolves the selected-day span for the given month, based on the
    /// current selection's shape.
    pub fn resolve_selected_day(&self, month: Month, year: i32) -> DaySpan {
        match self.selected_day {
            None => DaySpan::NONE,
            Some(SelectedDate::Single(date)) => {
                if date.month() == month && date.year() == year {
                    let day = date.day() as i32;
                    DaySpan::new(day, day)
                } else {
                    DaySpan::NONE
                }
            }
            Some(SelectedDate::Range { start, end }) => {
                // Sortable "year.month" quantity, e.g. Feb 2015 -> 2015.02.
                // Equality is tested on the composite value, not per field.
                let start_quan = start.year() as f32 + u8::from(start.month()) as f32 / 100.0;
                let end_quan = end.year() as f32 + u8::from(end.month()) as f32 / 100.0;
                let quan = year as f32 + u8::from(month) as f32 / 100.0;

                if quan >= start_quan && quan <= end_quan {
                    let start_day = if quan == start_quan {
                        start.day() as i32
                    } else {
                        1
                    };
                    let end_day = if quan == end_quan {
                        end.day() as i32
                    } else {
                        month.length(year) as i32
                    };
                    DaySpan::new(start_day, end_day)
                } else {
                    DaySpan::NONE
                }
            }
        }
    }

    /// First selectable day of the given month: the bound's day-of-month at
    /// the minimum month, 1 everywhere else.
    pub fn enabled_day_range_start(&self, month: Month, year: i32) -> i32 {
        let min = self.range.min();
        if min.month() == month && min.year() == year {
            min.day() as i32
        } else {
            1
        }
    }

    /// Last selectable day of the given month: the bound's day-of-month at
    /// the maximum month, otherwise the 31 sentinel. The sentinel is
    /// deliberately not clamped to the month's real length; clamping is a
    /// cell-layer concern.
    pub fn enabled_day_range_end(&self, month: Month, year: i32) -> i32 {
        let max = self.range.max();
        if max.month() == month && max.year() == year {
            max.day() as i32
        } else {
            31
        }
    }

    fn position_offset(&self, date: time::Date) -> i64 {
        let year_offset = date.year() as i64 - self.range.min().year() as i64;
        let month_offset = month_index0(date.month()) - month_index0(self.range.min().month());
        year_offset * MONTHS_IN_YEAR + month_offset
    }
}

fn month_index0(month: Month) -> i64 {
    u8::from(month) as i64 - 1
}

#[cfg(test)]
mod tests {
    use time::Date;

    use super::*;
    use crate::selected_date::DateRange;

    fn date(year: i32, month: u8, day: u8) -> Date {
        Date::from_calendar_date(year, Month::try_from(month).unwrap(), day).unwrap()
    }

    fn picker(min: Date, max: Date) -> DayPicker {
        DayPicker::new(DateRange::new(min, max).unwrap())
    }

    #[test]
    fn test_count_spans_bounds_inclusive() {
        let p = picker(date(2023, 11, 5), date(2024, 2, 20));
        assert_eq!(p.page_count(), 4);

        assert_eq!(p.month_for_position(0), Month::November);
        assert_eq!(p.year_for_position(0), 2023);
        assert_eq!(p.month_for_position(3), Month::February);
        assert_eq!(p.year_for_position(3), 2024);
    }

    #[test]
    fn test_single_day_range() {
        // [2024-01-15, 2024-01-15]: one page, span (15, 15).
        let mut p = picker(date(2024, 1, 15), date(2024, 1, 15));
        assert_eq!(p.page_count(), 1);
        assert_eq!(p.month_for_position(0), Month::January);
        assert_eq!(p.year_for_position(0), 2024);

        p.set_selected_day(Some(SelectedDate::single(date(2024, 1, 15))));
        assert_eq!(
            p.resolve_selected_day(Month::January, 2024),
            DaySpan::new(15, 15)
        );
    }

    #[test]
    fn test_position_roundtrip() {
        let p = picker(date(2023, 7, 1), date(2025, 3, 31));
        for position in 0..p.page_count() {
            let month = p.month_for_position(position);
            let year = p.year_for_position(position);
            let selected = SelectedDate::single(date(year, u8::from(month), 10));
            let positions = p.positions_for_day(Some(selected));
            assert_eq!(positions.as_slice(), [position as i64]);
        }
    }

    #[test]
    fn test_positions_for_day_shapes() {
        let p = picker(date(2024, 1, 1), date(2024, 6, 30));
        assert!(p.positions_for_day(None).is_empty());

        let range = SelectedDate::range(date(2024, 2, 10), date(2024, 4, 5));
        assert_eq!(p.positions_for_day(Some(range)).as_slice(), [1, 3]);

        // Selections outside the window map outside [0, count).
        let before = SelectedDate::single(date(2023, 12, 25));
        assert_eq!(p.positions_for_day(Some(before)).as_slice(), [-1]);
    }

    #[test]
    fn test_resolve_range_across_months() {
        // Feb 10 .. Apr 5 over Jan-Jun 2024.
        let mut p = picker(date(2024, 1, 1), date(2024, 6, 30));
        p.set_selected_day(Some(SelectedDate::range(
            date(2024, 2, 10),
            date(2024, 4, 5),
        )));

        assert_eq!(
            p.resolve_selected_day(Month::February, 2024),
            DaySpan::new(10, 29)
        );
        assert_eq!(
            p.resolve_selected_day(Month::March, 2024),
            DaySpan::new(1, 31)
        );
        assert_eq!(
            p.resolve_selected_day(Month::April, 2024),
            DaySpan::new(1, 5)
        );
        assert_eq!(p.resolve_selected_day(Month::January, 2024), DaySpan::NONE);
        assert_eq!(p.resolve_selected_day(Month::May, 2024), DaySpan::NONE);
    }

    #[test]
    fn test_resolve_range_within_one_month() {
        let mut p = picker(date(2024, 1, 1), date(2024, 6, 30));
        p.set_selected_day(Some(SelectedDate::range(
            date(2024, 3, 4),
            date(2024, 3, 20),
        )));
        assert_eq!(
            p.resolve_selected_day(Month::March, 2024),
            DaySpan::new(4, 20)
        );
    }

    #[test]
    fn test_resolve_single_requires_exact_month_and_year() {
        let mut p = picker(date(2023, 1, 1), date(2025, 12, 31));
        p.set_selected_day(Some(SelectedDate::single(date(2024, 3, 12))));

        assert_eq!(
            p.resolve_selected_day(Month::March, 2024),
            DaySpan::new(12, 12)
        );
        assert_eq!(p.resolve_selected_day(Month::March, 2023), DaySpan::NONE);
        assert_eq!(p.resolve_selected_day(Month::April, 2024), DaySpan::NONE);
    }

    #[test]
    fn test_resolve_without_selection() {
        let p = picker(date(2024, 1, 1), date(2024, 6, 30));
        assert_eq!(p.resolve_selected_day(Month::March, 2024), DaySpan::NONE);
    }

    #[test]
    fn test_enabled_day_bounds() {
        let p = picker(date(2024, 1, 15), date(2024, 6, 20));

        assert_eq!(p.enabled_day_range_start(Month::January, 2024), 15);
        assert_eq!(p.enabled_day_range_end(Month::June, 2024), 20);

        // Interior months report 1 and the unclamped 31 sentinel, even for
        // February.
        assert_eq!(p.enabled_day_range_start(Month::February, 2024), 1);
        assert_eq!(p.enabled_day_range_end(Month::February, 2024), 31);
    }

    #[test]
    fn test_set_range_recomputes_count() {
        let mut p = picker(date(2024, 1, 1), date(2024, 6, 30));
        assert_eq!(p.page_count(), 6);

        p.set_range(DateRange::new(date(2020, 5, 1), date(2021, 4, 30)).unwrap());
        assert_eq!(p.page_count(), 12);
        assert_eq!(p.month_for_position(0), Month::May);
        assert_eq!(p.year_for_position(11), 2021);
    }

    #[test]
    fn test_week_start_is_stored() {
        let mut p = picker(date(2024, 1, 1), date(2024, 6, 30));
        assert_eq!(p.week_start(), Weekday::Sunday);
        p.set_week_start(Weekday::Monday);
        assert_eq!(p.week_start(), Weekday::Monday);
    }
}
