//! The month-cell collaborator contract.
//!
//! ## Usage
//!
//! The adapters configure month cells through [`MonthCellView`]; any host
//! view type can implement it. [`GridMonthCell`] is the geometry-only
//! implementation used where no real view exists: it carries the 7-column
//! hit-test math but draws nothing.

use derive_setters::Setters;
use monthgrid_foundation::{Px, PxPosition};
use time::{Date, Month, Weekday};

use crate::day_picker::DaySpan;
use crate::selected_date::SelectionType;

/// Number of day columns in a month grid.
pub const DAYS_IN_WEEK: i32 = 7;

/// Everything a month cell needs to render one month page.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct MonthParams {
    /// Month shown by the cell.
    pub month: Month,
    /// Year shown by the cell.
    pub year: i32,
    /// Weekday shown in the first column.
    pub week_start: Weekday,
    /// First selectable day of the month.
    pub enabled_day_start: i32,
    /// Last selectable day of the month. May carry the unclamped 31
    /// sentinel; cells clamp visually.
    pub enabled_day_end: i32,
    /// Highlighted day span, or the sentinel.
    pub selected_days: DaySpan,
    /// Shape of the active selection, if any.
    pub selection_type: Option<SelectionType>,
}

impl MonthParams {
    /// Creates params for a month with no selection and all days enabled.
    pub fn new(month: Month, year: i32, week_start: Weekday) -> Self {
        Self {
            month,
            year,
            week_start,
            enabled_day_start: 1,
            enabled_day_end: 31,
            selected_days: DaySpan::NONE,
            selection_type: None,
        }
    }
}

/// Contract the adapters consume from a month-view cell.
pub trait MonthCellView {
    /// Reconfigures the cell for a month page in one call.
    fn set_month_params(&mut self, params: &MonthParams);

    /// Replaces the highlighted day span.
    fn set_selected_days(&mut self, days: DaySpan, selection_type: SelectionType);

    /// Highlights every day of the month (interior month of a range).
    fn select_all_days(&mut self);

    /// Updates the weekday shown in the first column.
    fn set_week_start(&mut self, week_start: Weekday);

    /// Maps a location within the cell to a day of month, if it hits one.
    fn day_at_location(&self, location: PxPosition) -> Option<u8>;

    /// Builds the concrete date for a day of this cell's month, if the day
    /// is valid and enabled.
    fn compose_date(&self, day: u8) -> Option<Date>;

    /// Title for page indicators, e.g. "March 2024".
    fn title(&self) -> String;
}

/// Pixel geometry of a [`GridMonthCell`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Setters)]
pub struct MonthGridGeometry {
    /// Width of one day column.
    pub cell_width: Px,
    /// Height of one week row.
    pub row_height: Px,
    /// Height of the title/weekday band above the day grid.
    pub header_height: Px,
}

impl Default for MonthGridGeometry {
    fn default() -> Self {
        Self {
            cell_width: Px(48),
            row_height: Px(48),
            header_height: Px(56),
        }
    }
}

/// Geometry-only month cell.
///
/// Holds the state a drawn month view would hold and answers hit tests over
/// a 7-column day grid below a header band, without any rendering.
#[derive(Debug, Clone)]
pub struct GridMonthCell {
    month: Month,
    year: i32,
    week_start: Weekday,
    enabled_day_start: i32,
    enabled_day_end: i32,
    selected_days: DaySpan,
    selection_type: Option<SelectionType>,
    geometry: MonthGridGeometry,
}

impl GridMonthCell {
    /// Creates a cell for the given month with default geometry.
    pub fn new(month: Month, year: i32) -> Self {
        Self::with_geometry(month, year, MonthGridGeometry::default())
    }

    /// Creates a cell with explicit geometry.
    pub fn with_geometry(month: Month, year: i32, geometry: MonthGridGeometry) -> Self {
        Self {
            month,
            year,
            week_start: Weekday::Sunday,
            enabled_day_start: 1,
            enabled_day_end: 31,
            selected_days: DaySpan::NONE,
            selection_type: None,
            geometry,
        }
    }

    /// Month shown by this cell.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Year shown by this cell.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Currently highlighted span.
    pub fn selected_days(&self) -> DaySpan {
        self.selected_days
    }

    /// Shape of the selection last applied to this cell.
    pub fn selection_type(&self) -> Option<SelectionType> {
        self.selection_type
    }

    /// Weekday shown in the first column.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    fn days_in_month(&self) -> i32 {
        self.month.length(self.year) as i32
    }

    /// Column of the month's first day, given the configured week start.
    fn first_day_offset(&self) -> Option<i32> {
        let first = Date::from_calendar_date(self.year, self.month, 1).ok()?;
        let first_col = first.weekday().number_days_from_sunday() as i32;
        let start_col = self.week_start.number_days_from_sunday() as i32;
        Some((first_col - start_col).rem_euclid(DAYS_IN_WEEK))
    }
}

impl MonthCellView for GridMonthCell {
    fn set_month_params(&mut self, params: &MonthParams) {
        self.month = params.month;
        self.year = params.year;
        self.week_start = params.week_start;
        self.enabled_day_start = params.enabled_day_start;
        self.enabled_day_end = params.enabled_day_end;
        self.selected_days = params.selected_days;
        self.selection_type = params.selection_type;
    }

    fn set_selected_days(&mut self, days: DaySpan, selection_type: SelectionType) {
        self.selected_days = days;
        self.selection_type = Some(selection_type);
    }

    fn select_all_days(&mut self) {
        self.selected_days = DaySpan::new(1, self.days_in_month());
        self.selection_type = Some(SelectionType::Range);
    }

    fn set_week_start(&mut self, week_start: Weekday) {
        self.week_start = week_start;
    }

    fn day_at_location(&self, location: PxPosition) -> Option<u8> {
        let x = location.x.raw();
        let y = location.y.raw();
        let grid_width = self.geometry.cell_width.raw() * DAYS_IN_WEEK;
        if x < 0 || x >= grid_width || y < self.geometry.header_height.raw() {
            return None;
        }

        let col = x / self.geometry.cell_width.raw();
        let row = (y - self.geometry.header_height.raw()) / self.geometry.row_height.raw();
        let day = row * DAYS_IN_WEEK + col - self.first_day_offset()? + 1;
        if day >= 1 && day <= self.days_in_month() {
            Some(day as u8)
        } else {
            None
        }
    }

    fn compose_date(&self, day: u8) -> Option<Date> {
        let day = day as i32;
        let enabled_start = self.enabled_day_start.max(1);
        let enabled_end = self.enabled_day_end.min(self.days_in_month());
        if day < enabled_start || day > enabled_end {
            return None;
        }
        Date::from_calendar_date(self.year, self.month, day as u8).ok()
    }

    fn title(&self) -> String {
        format!("{} {}", self.month, self.year)
    }
}
