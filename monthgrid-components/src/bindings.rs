//! Shared position → cell cache and bind logic for the two adapters.

use rustc_hash::FxHashMap;
use time::Date;
use tracing::debug;

use crate::day_picker::{DayPicker, DaySpan};
use crate::month_view::{MonthCellView, MonthParams};
use crate::selected_date::{SelectedDate, SelectionType};

/// Sparse cache of currently bound month cells, keyed by page position.
///
/// Only on-screen (plus retained off-screen) positions have entries; every
/// mutation that targets a position silently no-ops when the position is not
/// bound, relying on the rebind path to reconcile stale cells.
#[derive(Debug)]
pub(crate) struct CellBindings<V> {
    cells: FxHashMap<usize, V>,
}

impl<V: MonthCellView> CellBindings<V> {
    pub(crate) fn new() -> Self {
        Self {
            cells: FxHashMap::default(),
        }
    }

    pub(crate) fn insert(&mut self, position: usize, view: V) -> Option<V> {
        self.cells.insert(position, view)
    }

    pub(crate) fn remove(&mut self, position: usize) -> Option<V> {
        self.cells.remove(&position)
    }

    pub(crate) fn get(&self, position: usize) -> Option<&V> {
        self.cells.get(&position)
    }

    pub(crate) fn contains(&self, position: usize) -> bool {
        self.cells.contains_key(&position)
    }

    pub(crate) fn get_mut(&mut self, position: usize) -> Option<&mut V> {
        self.cells.get_mut(&position)
    }

    /// Lookup by a signed position offset. Negative offsets come from
    /// selections before the range minimum and never have a bound cell.
    pub(crate) fn get_offset_mut(&mut self, position: i64) -> Option<&mut V> {
        let position = usize::try_from(position).ok()?;
        self.cells.get_mut(&position)
    }

    pub(crate) fn retain(&mut self, mut keep: impl FnMut(usize) -> bool) {
        self.cells.retain(|position, _| keep(*position));
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut V)> {
        self.cells.iter_mut().map(|(position, view)| (*position, view))
    }
}

/// Configures `view` for the page at `position` from the picker's current
/// state, in one shot.
pub(crate) fn bind_month_cell<V: MonthCellView>(
    picker: &DayPicker,
    position: usize,
    view: &mut V,
) {
    let month = picker.month_for_position(position);
    let year = picker.year_for_position(position);
    let params = MonthParams {
        month,
        year,
        week_start: picker.week_start(),
        enabled_day_start: picker.enabled_day_range_start(month, year),
        enabled_day_end: picker.enabled_day_range_end(month, year),
        selected_days: picker.resolve_selected_day(month, year),
        selection_type: picker.selected_day().map(|day| day.selection_type()),
    };
    view.set_month_params(&params);
}

/// Replaces the selection on the picker and pushes the delta to every bound
/// cell.
///
/// Cells of the old selection are cleared before the new spans are applied,
/// so a shrinking range never leaves ghost highlights. Unbound positions are
/// skipped; they reconcile lazily on their next bind.
pub(crate) fn apply_selected_day<V: MonthCellView>(
    picker: &mut DayPicker,
    cells: &mut CellBindings<V>,
    day: Option<SelectedDate>,
) {
    // Clear every month the outgoing selection touched, endpoints included.
    if let Some(old) = picker.selected_day() {
        let positions = picker.positions_for_day(Some(old));
        let first = positions[0];
        let last = *positions.last().unwrap_or(&first);
        for position in first..=last {
            if let Some(view) = cells.get_offset_mut(position) {
                view.set_selected_days(DaySpan::NONE, SelectionType::Single);
            }
        }
    }

    match day {
        None => {}
        Some(SelectedDate::Single(date)) => {
            let span = DaySpan::new(date.day() as i32, date.day() as i32);
            if let Some(view) = cells.get_offset_mut(position_of(picker, date)) {
                view.set_selected_days(span, SelectionType::Single);
            }
        }
        Some(SelectedDate::Range { start, end }) => {
            let first = position_of(picker, start);
            let last = position_of(picker, end);
            if first == last {
                if let Some(view) = cells.get_offset_mut(first) {
                    view.set_selected_days(
                        DaySpan::new(start.day() as i32, end.day() as i32),
                        SelectionType::Range,
                    );
                }
            } else {
                if let Some(view) = cells.get_offset_mut(first) {
                    view.set_selected_days(
                        DaySpan::new(
                            start.day() as i32,
                            start.month().length(start.year()) as i32,
                        ),
                        SelectionType::Range,
                    );
                }
                for position in (first + 1)..last {
                    if let Some(view) = cells.get_offset_mut(position) {
                        view.select_all_days();
                    }
                }
                if let Some(view) = cells.get_offset_mut(last) {
                    view.set_selected_days(
                        DaySpan::new(1, end.day() as i32),
                        SelectionType::Range,
                    );
                }
            }
        }
    }

    debug!(?day, "selection replaced");
    picker.set_selected_day(day);
}

fn position_of(picker: &DayPicker, date: Date) -> i64 {
    picker.positions_for_day(Some(SelectedDate::single(date)))[0]
}
