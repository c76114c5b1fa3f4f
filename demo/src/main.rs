//! Headless walkthrough of the date-picker logic layer.
//!
//! Builds a six-month recycler adapter, simulates a tap and a drag-selected
//! range, and prints the resulting selection events and cell spans.

use monthgrid_components::{
    week_label_row, DateRange, GridMonthCell, MonthCellView, MonthRecyclerAdapter,
    NarrowWeekdayLabels, SelectedDate, SelectionListener, WeekLabelRowArgs,
};
use monthgrid_foundation::{Px, PxPosition};
use time::{Date, Month, Weekday};
use tracing::info;

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new("info,monthgrid_components=debug") {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("info"),
        },
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn date(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).expect("valid demo date")
}

fn location_of(cell: &GridMonthCell, day: u8) -> Option<PxPosition> {
    for col in 0..7 {
        for row in 0..6 {
            let location = PxPosition::new(Px(col * 48 + 24), Px(56 + row * 48 + 24));
            if cell.day_at_location(location) == Some(day) {
                return Some(location);
            }
        }
    }
    None
}

fn main() {
    init_tracing();

    let range = DateRange::new(date(2024, Month::January, 1), date(2024, Month::June, 30))
        .expect("ordered demo bounds");

    let mut adapter: MonthRecyclerAdapter<GridMonthCell> = MonthRecyclerAdapter::new(range);
    info!(pages = adapter.item_count(), "adapter created");

    for position in 0..adapter.item_count() {
        let month = adapter.day_picker().month_for_position(position);
        let year = adapter.day_picker().year_for_position(position);
        adapter.bind_cell(position, GridMonthCell::new(month, year));
    }

    adapter.set_selection_listener(Some(SelectionListener::new(|event| {
        info!(?event, "selection event");
    })));

    // Tap Feb 10, then drag to Apr 5 and release.
    if let Some(location) = adapter.bound_cell(1).and_then(|cell| location_of(cell, 10)) {
        adapter.handle_day_click(1, location);
    }
    if let Some(location) = adapter.bound_cell(3).and_then(|cell| location_of(cell, 5)) {
        adapter.handle_drag_update(3, location);
    }
    adapter.handle_drag_release();

    // Apply the finished range to the cells and show the spans.
    adapter.set_selected_day(Some(SelectedDate::range(
        date(2024, Month::February, 10),
        date(2024, Month::April, 5),
    )));

    for position in 0..adapter.item_count() {
        if let Some(cell) = adapter.bound_cell(position) {
            let span = cell.selected_days();
            println!(
                "{:<14} selected days {:>2}..={}",
                cell.title(),
                span.start,
                span.end
            );
        }
    }

    let labels = week_label_row(
        &WeekLabelRowArgs::default().week_start(Weekday::Monday),
        &NarrowWeekdayLabels,
    );
    let header: Vec<String> = labels.iter().map(|label| label.text.clone()).collect();
    println!("week header (Monday first): {}", header.join(" "));
}
