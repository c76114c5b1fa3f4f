//! Pager-backed month adapter.
//!
//! ## Usage
//!
//! Binds a [`DayPicker`] onto a pager's pool of month cells. The host pager
//! owns instantiation order and page transitions; the adapter owns the
//! position → cell cache, selection propagation and gesture resolution. Call
//! [`bind_cell`](MonthPagerAdapter::bind_cell) when a page comes on screen
//! and [`release_cell`](MonthPagerAdapter::release_cell) when the pager
//! destroys it.

use monthgrid_foundation::PxPosition;
use time::{Date, Weekday};
use tracing::debug;

use crate::bindings::{apply_selected_day, bind_month_cell, CellBindings};
use crate::day_picker::DayPicker;
use crate::events::{SelectionEvent, SelectionListener};
use crate::month_view::MonthCellView;
use crate::selected_date::{DateRange, SelectedDate};

/// Adapter from a [`DayPicker`] to a paged set of month cells.
pub struct MonthPagerAdapter<V: MonthCellView> {
    picker: DayPicker,
    cells: CellBindings<V>,
    listener: Option<SelectionListener>,
    range_anchor: Option<Date>,
    range_last_end: Option<Date>,
}

impl<V: MonthCellView> MonthPagerAdapter<V> {
    /// Creates an adapter over the given month range with no cells bound.
    pub fn new(range: DateRange) -> Self {
        Self {
            picker: DayPicker::new(range),
            cells: CellBindings::new(),
            listener: None,
            range_anchor: None,
            range_last_end: None,
        }
    }

    /// Read access to the underlying position model.
    pub fn day_picker(&self) -> &DayPicker {
        &self.picker
    }

    /// Total number of month pages.
    pub fn page_count(&self) -> usize {
        self.picker.page_count()
    }

    /// Registers the selection listener, replacing any previous one.
    pub fn set_selection_listener(&mut self, listener: Option<SelectionListener>) {
        self.listener = listener;
    }

    /// Replaces the month range and reconfigures every bound cell.
    ///
    /// All positions are renumbered: cells past the new count are evicted,
    /// the rest rebind to their renumbered months. The host must also
    /// refresh its pager.
    pub fn set_range(&mut self, range: DateRange) {
        self.picker.set_range(range);
        let count = self.picker.page_count();
        debug!(count, "range replaced");
        self.cells.retain(|position| position < count);
        for (position, view) in self.cells.iter_mut() {
            bind_month_cell(&self.picker, position, view);
        }
    }

    /// Sets the weekday shown in the first column, on the model and on every
    /// bound cell.
    pub fn set_first_day_of_week(&mut self, week_start: Weekday) {
        self.picker.set_week_start(week_start);
        for (_, view) in self.cells.iter_mut() {
            view.set_week_start(week_start);
        }
    }

    /// The weekday shown in the first column.
    pub fn first_day_of_week(&self) -> Weekday {
        self.picker.week_start()
    }

    /// Replaces the selection and pushes the delta to bound cells.
    pub fn set_selected_day(&mut self, day: Option<SelectedDate>) {
        apply_selected_day(&mut self.picker, &mut self.cells, day);
    }

    /// Binds `view` to the page at `position`, configuring it from the
    /// current model state. Replaces any cell already bound there.
    pub fn bind_cell(&mut self, position: usize, mut view: V) -> Option<&mut V> {
        debug_assert!(
            position < self.picker.page_count(),
            "position {position} out of range"
        );
        bind_month_cell(&self.picker, position, &mut view);
        self.cells.insert(position, view);
        debug!(position, "cell bound");
        self.cells.get_mut(position)
    }

    /// Unbinds the cell at `position`, returning it to the host.
    pub fn release_cell(&mut self, position: usize) -> Option<V> {
        let view = self.cells.remove(position);
        if view.is_some() {
            debug!(position, "cell released");
        }
        view
    }

    /// The bound cell at `position`, if any.
    pub fn bound_cell(&self, position: usize) -> Option<&V> {
        self.cells.get(position)
    }

    /// Whether a cell is bound at `position`.
    pub fn is_bound(&self, position: usize) -> bool {
        self.cells.contains(position)
    }

    /// Maps an item index to its page position. Positions are fixed, so this
    /// is the identity; hosts that remap pages override at their layer.
    pub fn item_position(&self, position: usize) -> usize {
        position
    }

    /// Title for the page indicator at `position`, if a cell is bound.
    pub fn page_title(&self, position: usize) -> Option<String> {
        self.cells.get(position).map(|view| view.title())
    }

    /// Routes a tap within the cell at `position` to a day selection.
    ///
    /// Emits [`SelectionEvent::DaySelected`] when the location resolves to
    /// an enabled day.
    pub fn handle_day_click(&self, position: usize, location: PxPosition) {
        let Some(day) = self.resolve_date(position, location) else {
            return;
        };
        debug!(%day, "day clicked");
        if let Some(listener) = &self.listener {
            listener.call(SelectionEvent::DaySelected { day });
        }
    }

    /// Starts a range gesture at the given location.
    ///
    /// Pins the anchor and returns the initial one-day range, or `None` when
    /// the location does not resolve to an enabled day.
    pub fn resolve_start_date_for_range(
        &mut self,
        position: usize,
        location: PxPosition,
    ) -> Option<SelectedDate> {
        let day = self.resolve_date(position, location)?;
        self.range_anchor = Some(day);
        self.range_last_end = Some(day);
        Some(SelectedDate::range(day, day))
    }

    /// Extends the active range gesture to the given location.
    ///
    /// With `update_only_if_changed`, returns `None` when the resolved day
    /// equals the gesture's last moving endpoint, so callers can skip
    /// redundant updates mid-drag. The comparison is against the endpoint
    /// the gesture last resolved, not the normalized range bounds, so it
    /// holds on both sides of the anchor.
    pub fn resolve_end_date_for_range(
        &mut self,
        position: usize,
        location: PxPosition,
        update_only_if_changed: bool,
    ) -> Option<SelectedDate> {
        let anchor = self.range_anchor?;
        let day = self.resolve_date(position, location)?;
        if update_only_if_changed && self.range_last_end == Some(day) {
            return None;
        }
        self.range_last_end = Some(day);
        Some(SelectedDate::range(anchor, day))
    }

    /// Emits [`SelectionEvent::RangeStarted`].
    pub fn notify_range_started(&self, selection: SelectedDate) {
        if let Some(listener) = &self.listener {
            listener.call(SelectionEvent::RangeStarted { selection });
        }
    }

    /// Emits [`SelectionEvent::RangeUpdated`].
    pub fn notify_range_updated(&self, selection: SelectedDate) {
        if let Some(listener) = &self.listener {
            listener.call(SelectionEvent::RangeUpdated { selection });
        }
    }

    /// Emits [`SelectionEvent::RangeEnded`] and clears the gesture anchor.
    pub fn notify_range_ended(&mut self, selection: Option<SelectedDate>) {
        self.range_anchor = None;
        self.range_last_end = None;
        if let Some(listener) = &self.listener {
            listener.call(SelectionEvent::RangeEnded { selection });
        }
    }

    fn resolve_date(&self, position: usize, location: PxPosition) -> Option<Date> {
        let view = self.cells.get(position)?;
        let day = view.day_at_location(location)?;
        view.compose_date(day)
    }
}
