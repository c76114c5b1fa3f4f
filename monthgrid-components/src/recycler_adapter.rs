//! Recycler-backed month adapter.
//!
//! ## Usage
//!
//! The list-style counterpart of [`MonthPagerAdapter`]: the host recycler
//! attaches and detaches month cells as they scroll, and the adapter drives
//! the range gesture itself through a [`RangeSelectionTracker`] instead of
//! leaving resolution to the host. One tap anchors a range, a drag (or a
//! second tap) moves the endpoint, release ends the gesture.
//!
//! [`MonthPagerAdapter`]: crate::pager_adapter::MonthPagerAdapter

use monthgrid_foundation::PxPosition;
use time::{Date, Weekday};
use tracing::debug;

use crate::bindings::{apply_selected_day, bind_month_cell, CellBindings};
use crate::day_picker::DayPicker;
use crate::events::{SelectionEvent, SelectionListener};
use crate::month_view::MonthCellView;
use crate::range_tracker::RangeSelectionTracker;
use crate::selected_date::{DateRange, SelectedDate};

/// Adapter from a [`DayPicker`] to a recycled list of month cells.
pub struct MonthRecyclerAdapter<V: MonthCellView> {
    picker: DayPicker,
    cells: CellBindings<V>,
    listener: Option<SelectionListener>,
    tracker: RangeSelectionTracker,
}

impl<V: MonthCellView> MonthRecyclerAdapter<V> {
    /// Creates an adapter over the given month range with no cells attached.
    pub fn new(range: DateRange) -> Self {
        Self {
            picker: DayPicker::new(range),
            cells: CellBindings::new(),
            listener: None,
            tracker: RangeSelectionTracker::new(),
        }
    }

    /// Read access to the underlying position model.
    pub fn day_picker(&self) -> &DayPicker {
        &self.picker
    }

    /// Total number of month items.
    pub fn item_count(&self) -> usize {
        self.picker.page_count()
    }

    /// Registers the selection listener, replacing any previous one.
    pub fn set_selection_listener(&mut self, listener: Option<SelectionListener>) {
        self.listener = listener;
    }

    /// Replaces the month range, evicting cells past the new count and
    /// reconfiguring the rest.
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
    /// attached cell.
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

    /// Replaces the selection and pushes the delta to attached cells.
    pub fn set_selected_day(&mut self, day: Option<SelectedDate>) {
        apply_selected_day(&mut self.picker, &mut self.cells, day);
    }

    /// Attaches `view` at `position`, configuring it from the current model
    /// state. The recycler hands back previously detached cells here.
    pub fn bind_cell(&mut self, position: usize, mut view: V) -> Option<&mut V> {
        debug_assert!(
            position < self.picker.page_count(),
            "position {position} out of range"
        );
        bind_month_cell(&self.picker, position, &mut view);
        self.cells.insert(position, view);
        debug!(position, "cell attached");
        self.cells.get_mut(position)
    }

    /// Detaches the cell at `position` as it scrolls off screen, returning
    /// it to the host's recycle pool.
    pub fn detach_cell(&mut self, position: usize) -> Option<V> {
        let view = self.cells.remove(position);
        if view.is_some() {
            debug!(position, "cell detached");
        }
        view
    }

    /// The attached cell at `position`, if any.
    pub fn bound_cell(&self, position: usize) -> Option<&V> {
        self.cells.get(position)
    }

    /// Whether a cell is attached at `position`.
    pub fn is_bound(&self, position: usize) -> bool {
        self.cells.contains(position)
    }

    /// Maps an item index to its list position. Positions are fixed, so this
    /// is the identity; hosts that reorder items override at their layer.
    pub fn item_position(&self, position: usize) -> usize {
        position
    }

    /// Whether a range gesture is in progress.
    pub fn is_selecting_range(&self) -> bool {
        self.tracker.is_selecting()
    }

    /// Routes a press within the cell at `position` into the gesture state
    /// machine.
    ///
    /// Every resolved day emits [`SelectionEvent::DaySelected`]. The first
    /// press additionally anchors a range and emits
    /// [`SelectionEvent::RangeStarted`]; a press during an active gesture
    /// ends it at that day and emits [`SelectionEvent::RangeEnded`].
    pub fn handle_day_click(&mut self, position: usize, location: PxPosition) {
        let Some(day) = self.resolve_date(position, location) else {
            return;
        };
        debug!(%day, "day pressed");
        self.emit(SelectionEvent::DaySelected { day });

        if self.tracker.is_selecting() {
            let selection = self.tracker.finish(Some(day));
            self.emit(SelectionEvent::RangeEnded { selection });
        } else {
            let selection = self.tracker.begin(day);
            self.emit(SelectionEvent::RangeStarted { selection });
        }
    }

    /// Moves the endpoint of the active gesture to the day under `location`.
    ///
    /// Emits [`SelectionEvent::RangeUpdated`] only when the endpoint
    /// actually changed; no-ops when idle or off any day.
    pub fn handle_drag_update(&mut self, position: usize, location: PxPosition) {
        let Some(day) = self.resolve_date(position, location) else {
            return;
        };
        if let Some(selection) = self.tracker.update(day) {
            self.emit(SelectionEvent::RangeUpdated { selection });
        }
    }

    /// Ends the active gesture at its last endpoint.
    pub fn handle_drag_release(&mut self) {
        if let Some(selection) = self.tracker.finish(None) {
            self.emit(SelectionEvent::RangeEnded {
                selection: Some(selection),
            });
        }
    }

    /// Abandons the active gesture, emitting a `None` range end.
    pub fn cancel_range_gesture(&mut self) {
        if self.tracker.is_selecting() {
            self.tracker.cancel();
            self.emit(SelectionEvent::RangeEnded { selection: None });
        }
    }

    fn emit(&self, event: SelectionEvent) {
        if let Some(listener) = &self.listener {
            listener.call(event);
        }
    }

    fn resolve_date(&self, position: usize, location: PxPosition) -> Option<Date> {
        let view = self.cells.get(position)?;
        let day = view.day_at_location(location)?;
        view.compose_date(day)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use monthgrid_foundation::Px;
    use time::Month;

    use super::*;
    use crate::day_picker::DaySpan;
    use crate::month_view::{GridMonthCell, MonthGridGeometry};

    fn date(year: i32, month: u8, day: u8) -> Date {
        Date::from_calendar_date(year, Month::try_from(month).unwrap(), day).unwrap()
    }

    fn geometry() -> MonthGridGeometry {
        MonthGridGeometry {
            cell_width: Px(10),
            row_height: Px(10),
            header_height: Px(20),
        }
    }

    fn adapter() -> (
        MonthRecyclerAdapter<GridMonthCell>,
        Arc<Mutex<Vec<SelectionEvent>>>,
    ) {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 6, 30)).unwrap();
        let mut adapter = MonthRecyclerAdapter::new(range);
        for position in 0..adapter.item_count() {
            let month = adapter.day_picker().month_for_position(position);
            let year = adapter.day_picker().year_for_position(position);
            adapter.bind_cell(position, GridMonthCell::with_geometry(month, year, geometry()));
        }

        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        adapter.set_selection_listener(Some(SelectionListener::new(move |event| {
            sink.lock().unwrap().push(event);
        })));
        (adapter, events)
    }

    fn location_of(cell: &GridMonthCell, day: u8) -> PxPosition {
        for col in 0..7 {
            for row in 0..6 {
                let location = PxPosition::new(Px(col * 10 + 5), Px(20 + row * 10 + 5));
                if cell.day_at_location(location) == Some(day) {
                    return location;
                }
            }
        }
        panic!("day {day} not present in cell");
    }

    #[test]
    fn test_two_presses_make_a_range() {
        let (mut adapter, events) = adapter();

        let first = location_of(adapter.bound_cell(1).unwrap(), 10);
        adapter.handle_day_click(1, first);
        assert!(adapter.is_selecting_range());

        let second = location_of(adapter.bound_cell(3).unwrap(), 5);
        adapter.handle_day_click(3, second);
        assert!(!adapter.is_selecting_range());

        let anchor_range = SelectedDate::range(date(2024, 2, 10), date(2024, 2, 10));
        let full_range = SelectedDate::range(date(2024, 2, 10), date(2024, 4, 5));
        assert_eq!(
            events.lock().unwrap().as_slice(),
            [
                SelectionEvent::DaySelected {
                    day: date(2024, 2, 10)
                },
                SelectionEvent::RangeStarted {
                    selection: anchor_range
                },
                SelectionEvent::DaySelected {
                    day: date(2024, 4, 5)
                },
                SelectionEvent::RangeEnded {
                    selection: Some(full_range)
                },
            ]
        );
    }

    #[test]
    fn test_drag_updates_only_on_endpoint_change() {
        let (mut adapter, events) = adapter();

        adapter.handle_day_click(1, location_of(adapter.bound_cell(1).unwrap(), 10));
        events.lock().unwrap().clear();

        let over_20 = location_of(adapter.bound_cell(1).unwrap(), 20);
        adapter.handle_drag_update(1, over_20);
        adapter.handle_drag_update(1, over_20);
        adapter.handle_drag_release();

        let widened = SelectedDate::range(date(2024, 2, 10), date(2024, 2, 20));
        assert_eq!(
            events.lock().unwrap().as_slice(),
            [
                SelectionEvent::RangeUpdated { selection: widened },
                SelectionEvent::RangeEnded {
                    selection: Some(widened)
                },
            ]
        );
    }

    #[test]
    fn test_cancel_emits_none_range_end() {
        let (mut adapter, events) = adapter();

        adapter.handle_day_click(1, location_of(adapter.bound_cell(1).unwrap(), 10));
        events.lock().unwrap().clear();

        adapter.cancel_range_gesture();
        assert!(!adapter.is_selecting_range());
        assert_eq!(
            events.lock().unwrap().as_slice(),
            [SelectionEvent::RangeEnded { selection: None }]
        );

        // Cancelling when idle emits nothing.
        adapter.cancel_range_gesture();
        assert_eq!(events.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_press_outside_days_is_ignored() {
        let (mut adapter, events) = adapter();
        adapter.handle_day_click(1, PxPosition::new(Px(5), Px(5)));
        assert!(events.lock().unwrap().is_empty());
        assert!(!adapter.is_selecting_range());
    }

    #[test]
    fn test_detach_and_lazy_rebind() {
        let (mut adapter, _) = adapter();

        adapter.detach_cell(2);
        adapter.set_selected_day(Some(SelectedDate::single(date(2024, 3, 12))));
        assert_eq!(adapter.day_picker().selected_day().unwrap().first_date(), date(2024, 3, 12));

        // The detached position reconciles when a recycled cell comes back.
        adapter.bind_cell(2, GridMonthCell::with_geometry(Month::January, 2000, geometry()));
        assert_eq!(
            adapter.bound_cell(2).unwrap().selected_days(),
            DaySpan::new(12, 12)
        );
    }

    #[test]
    fn test_set_range_reconfigures_attached_cells() {
        let (mut adapter, _) = adapter();
        adapter.set_range(DateRange::new(date(2030, 2, 1), date(2030, 5, 31)).unwrap());
        assert_eq!(adapter.item_count(), 4);
        let cell = adapter.bound_cell(0).unwrap();
        assert_eq!(cell.month(), Month::February);
        assert_eq!(cell.year(), 2030);

        // Positions past the new count were evicted, not left answering for
        // the old range.
        for position in 4..6 {
            assert!(!adapter.is_bound(position), "position {position} kept a stale cell");
        }
    }
}
