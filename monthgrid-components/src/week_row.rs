//! Weekday label row layout.
//!
//! ## Usage
//!
//! [`week_label_row`] lays seven weekday labels into equal columns across a
//! given width, honoring the configured week start and text direction, and
//! centers each label vertically on the font's ascent/descent midpoint. The
//! host draws the labels; this module only computes text and anchors.

use derive_setters::Setters;
use monthgrid_foundation::{Dp, Px};
use time::Weekday;

use crate::month_view::DAYS_IN_WEEK;

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

/// Supplies the narrow (typically one-letter) label for a weekday.
pub trait WeekdayFormatter {
    /// The label drawn for `weekday`.
    fn narrow_label(&self, weekday: Weekday) -> String;
}

/// English narrow labels: S M T W T F S.
#[derive(Debug, Clone, Copy, Default)]
pub struct NarrowWeekdayLabels;

impl WeekdayFormatter for NarrowWeekdayLabels {
    fn narrow_label(&self, weekday: Weekday) -> String {
        let label = match weekday {
            Weekday::Sunday | Weekday::Saturday => "S",
            Weekday::Monday => "M",
            Weekday::Tuesday | Weekday::Thursday => "T",
            Weekday::Wednesday => "W",
            Weekday::Friday => "F",
        };
        label.to_string()
    }
}

/// Horizontal layout direction of the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    /// Left to right; the week-start column is leftmost.
    #[default]
    Ltr,
    /// Right to left; the row is mirrored and the week-start column is
    /// rightmost.
    Rtl,
}

/// Layout inputs of the weekday label row.
#[derive(Debug, Clone, Copy, PartialEq, Setters)]
pub struct WeekLabelRowArgs {
    /// Total row width; divided into seven equal columns.
    pub width: Px,
    /// Row height.
    pub row_height: Px,
    /// Weekday placed in the first column.
    pub week_start: Weekday,
    /// Layout direction.
    pub text_direction: TextDirection,
    /// Font ascent above the baseline, negative per text-metric convention.
    pub font_ascent: f32,
    /// Font descent below the baseline, positive.
    pub font_descent: f32,
}

impl Default for WeekLabelRowArgs {
    fn default() -> Self {
        Self {
            width: Dp(336.0).to_px(),
            row_height: Dp(48.0).to_px(),
            week_start: Weekday::Sunday,
            text_direction: TextDirection::Ltr,
            font_ascent: -14.0,
            font_descent: 4.0,
        }
    }
}

/// One positioned weekday label.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekdayLabel {
    /// The weekday this label stands for.
    pub weekday: Weekday,
    /// The drawn text.
    pub text: String,
    /// Horizontal center of the label.
    pub center_x: Px,
    /// Text baseline, centered on the font's ascent/descent midpoint.
    pub baseline_y: Px,
}

/// Lays out the seven weekday labels for one row.
pub fn week_label_row<F: WeekdayFormatter>(
    args: &WeekLabelRowArgs,
    formatter: &F,
) -> [WeekdayLabel; 7] {
    let cell_width = args.width.raw() / DAYS_IN_WEEK;
    let baseline_y = args.row_height.raw() as f32 / 2.0
        - (args.font_ascent + args.font_descent) / 2.0;
    let baseline_y = Px::saturating_from_f32(baseline_y);
    let start_index = args.week_start.number_days_from_sunday() as usize;

    std::array::from_fn(|column| {
        let weekday = WEEKDAYS[(start_index + column) % WEEKDAYS.len()];
        let center = cell_width * column as i32 + cell_width / 2;
        let center_x = match args.text_direction {
            TextDirection::Ltr => Px(center),
            TextDirection::Rtl => Px(args.width.raw() - center),
        };
        WeekdayLabel {
            weekday,
            text: formatter.narrow_label(weekday),
            center_x,
            baseline_y,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> WeekLabelRowArgs {
        WeekLabelRowArgs::default()
            .width(Px(70))
            .row_height(Px(40))
            .font_ascent(-12.0)
            .font_descent(4.0)
    }

    #[test]
    fn test_ltr_centers_and_order() {
        let labels = week_label_row(&args(), &NarrowWeekdayLabels);

        let texts: Vec<&str> = labels.iter().map(|label| label.text.as_str()).collect();
        assert_eq!(texts, ["S", "M", "T", "W", "T", "F", "S"]);
        assert_eq!(labels[0].weekday, Weekday::Sunday);
        assert_eq!(labels[0].center_x, Px(5));
        assert_eq!(labels[6].center_x, Px(65));
    }

    #[test]
    fn test_rtl_mirrors_columns() {
        let labels = week_label_row(
            &args().text_direction(TextDirection::Rtl),
            &NarrowWeekdayLabels,
        );

        // Same weekday order, mirrored anchors.
        assert_eq!(labels[0].weekday, Weekday::Sunday);
        assert_eq!(labels[0].center_x, Px(65));
        assert_eq!(labels[6].center_x, Px(5));
    }

    #[test]
    fn test_week_start_rotates_labels() {
        let labels = week_label_row(&args().week_start(Weekday::Monday), &NarrowWeekdayLabels);
        assert_eq!(labels[0].weekday, Weekday::Monday);
        assert_eq!(labels[5].weekday, Weekday::Saturday);
        assert_eq!(labels[6].weekday, Weekday::Sunday);
    }

    #[test]
    fn test_baseline_centers_on_font_midpoint() {
        let labels = week_label_row(&args(), &NarrowWeekdayLabels);
        // 40 / 2 - (-12 + 4) / 2 = 24.
        assert!(labels.iter().all(|label| label.baseline_y == Px(24)));
    }
}
