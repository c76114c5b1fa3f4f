//! Date-picker logic components for monthgrid.
//!
//! # Usage
//!
//! The crate models the logic layer of a paged calendar date picker: a
//! [`day_picker::DayPicker`] maps a bounded month range onto page positions,
//! and two adapters bind that model onto a pool of month-view cells supplied
//! by the host container. Drawing, measurement and paging mechanics stay in
//! the host framework; the adapters only own the position → cell cache and
//! the selection state flowing through it.
//!
//! # Example
//!
//! ```
//! use monthgrid_components::{day_picker::DayPicker, selected_date::DateRange};
//! use time::{Date, Month};
//!
//! let min = Date::from_calendar_date(2024, Month::January, 1).unwrap();
//! let max = Date::from_calendar_date(2024, Month::June, 30).unwrap();
//! let picker = DayPicker::new(DateRange::new(min, max).unwrap());
//!
//! assert_eq!(picker.page_count(), 6);
//! assert_eq!(picker.month_for_position(3), Month::April);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod bindings;

pub mod day_picker;
pub mod events;
pub mod month_view;
pub mod pager_adapter;
pub mod range_tracker;
pub mod recycler_adapter;
pub mod selected_date;
pub mod week_row;

pub use day_picker::{DayPicker, DaySpan};
pub use events::{SelectionEvent, SelectionListener};
pub use month_view::{GridMonthCell, MonthCellView, MonthGridGeometry, MonthParams};
pub use pager_adapter::MonthPagerAdapter;
pub use range_tracker::RangeSelectionTracker;
pub use recycler_adapter::MonthRecyclerAdapter;
pub use selected_date::{DateRange, DateRangeError, SelectedDate, SelectionType};
pub use week_row::{
    week_label_row, NarrowWeekdayLabels, TextDirection, WeekLabelRowArgs, WeekdayFormatter,
    WeekdayLabel,
};
