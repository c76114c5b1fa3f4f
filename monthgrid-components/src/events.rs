//! Selection events emitted by the adapters.

use monthgrid_foundation::CallbackWith;
use time::Date;

use crate::selected_date::SelectedDate;

/// A change in the day selection, as driven by user gestures.
///
/// `DaySelected` fires on every tap that resolves to a day. The three range
/// events bracket a drag gesture: started once, updated zero or more times,
/// ended exactly once (with `None` when the gesture is cancelled).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionEvent {
    /// A single day was tapped.
    DaySelected {
        /// The tapped day.
        day: Date,
    },
    /// A range gesture started; both endpoints are the anchor day.
    RangeStarted {
        /// The one-day range at the anchor.
        selection: SelectedDate,
    },
    /// The moving endpoint of an active range gesture changed months or days.
    RangeUpdated {
        /// The current anchor-to-endpoint range.
        selection: SelectedDate,
    },
    /// A range gesture finished or was cancelled.
    RangeEnded {
        /// The final range, or `None` for a cancelled gesture.
        selection: Option<SelectedDate>,
    },
}

/// Callback handle the host registers to observe [`SelectionEvent`]s.
pub type SelectionListener = CallbackWith<SelectionEvent>;
