//! Drag-gesture state for range selection.

use time::Date;

use crate::selected_date::SelectedDate;

/// Tracks one range-selection drag from anchor to moving endpoint.
///
/// The anchor is pinned where the gesture began; [`SelectedDate::range`]
/// normalizes endpoint order, so dragging before the anchor still yields an
/// ordered range. The tracker is idle again after [`finish`](Self::finish)
/// or [`cancel`](Self::cancel).
#[derive(Debug, Clone, Default)]
pub struct RangeSelectionTracker {
    anchor: Option<Date>,
    last_end: Option<Date>,
}

impl RangeSelectionTracker {
    /// Creates an idle tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_selecting(&self) -> bool {
        self.anchor.is_some()
    }

    /// Starts a drag at `date` and returns the initial one-day range.
    pub fn begin(&mut self, date: Date) -> SelectedDate {
        self.anchor = Some(date);
        self.last_end = Some(date);
        SelectedDate::range(date, date)
    }

    /// Moves the endpoint to `date`.
    ///
    /// Returns the updated range, or `None` when idle or when the endpoint
    /// did not actually change.
    pub fn update(&mut self, date: Date) -> Option<SelectedDate> {
        let anchor = self.anchor?;
        if self.last_end == Some(date) {
            return None;
        }
        self.last_end = Some(date);
        Some(SelectedDate::range(anchor, date))
    }

    /// Ends the drag at `date` (or at the last endpoint when `None`) and
    /// returns the final range. Returns `None` when idle.
    pub fn finish(&mut self, date: Option<Date>) -> Option<SelectedDate> {
        let anchor = self.anchor.take()?;
        let end = date.or(self.last_end).unwrap_or(anchor);
        self.last_end = None;
        Some(SelectedDate::range(anchor, end))
    }

    /// Abandons the drag without producing a range.
    pub fn cancel(&mut self) {
        self.anchor = None;
        self.last_end = None;
    }

    /// The in-progress range, if a drag is active.
    pub fn selection(&self) -> Option<SelectedDate> {
        let anchor = self.anchor?;
        let end = self.last_end.unwrap_or(anchor);
        Some(SelectedDate::range(anchor, end))
    }
}
