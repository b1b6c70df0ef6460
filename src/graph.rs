//! ASCII graph layout for the contribution window.
//!
//! Two pure render modes over the same trailing slice of weeks: a one-row-
//! per-week bar chart and a GitHub-style 7-row grid. Both lean on
//! [`crate::intensity`] for anything threshold-shaped; this module only does
//! layout.

use chrono::Datelike;

use crate::calendar::WeekRecord;
use crate::intensity::{IntensityLevel, bucket};

/// Contributions represented by one bar cell.
pub const BAR_UNIT: u32 = 5;

/// Maximum bar length in cells.
pub const BAR_MAX: u32 = 20;

/// Printed instead of a table when the window holds no weeks at all.
pub const NO_DATA_NOTICE: &str = "No contribution data for this window.";

/// Which graph to lay out. Both variants share the intensity thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Bar,
    Grid,
}

/// One row of the weekly bar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarRow {
    pub label: String,
    pub total: u32,
    pub bar: String,
}

fn trailing(weeks: &[WeekRecord], n: usize) -> &[WeekRecord] {
    &weeks[weeks.len().saturating_sub(n)..]
}

/// Lay out the trailing `n` weeks as (label, total, bar) rows, oldest first.
/// The bar grows one cell per [`BAR_UNIT`] contributions, capped at
/// [`BAR_MAX`].
pub fn weekly_bars(weeks: &[WeekRecord], n: usize) -> Vec<BarRow> {
    trailing(weeks, n)
        .iter()
        .map(|week| {
            let total = week.total();
            let cells = (total / BAR_UNIT).min(BAR_MAX) as usize;
            BarRow {
                label: week
                    .start()
                    .map(|d| d.format("%b %d").to_string())
                    .unwrap_or_default(),
                total,
                bar: "█".repeat(cells),
            }
        })
        .collect()
}

/// Lay out the trailing `n` weeks as seven weekday lines, Sunday first,
/// columns chronological ascending. Days are placed by their actual weekday,
/// so a partial edge week leaves its missing slots blank instead of shifting
/// the column.
pub fn calendar_grid(weeks: &[WeekRecord], n: usize) -> Vec<String> {
    let window = trailing(weeks, n);
    if window.is_empty() {
        return Vec::new();
    }

    let mut rows: Vec<Vec<&'static str>> = vec![Vec::with_capacity(window.len()); 7];
    for week in window {
        let mut cells = [IntensityLevel::None.block(); 7];
        for day in &week.days {
            let slot = day.date.weekday().num_days_from_sunday() as usize;
            cells[slot] = bucket(day.count).block();
        }
        for (row, cell) in rows.iter_mut().zip(cells) {
            row.push(cell);
        }
    }

    rows.into_iter().map(|cells| cells.join(" ")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::DailyRecord;
    use chrono::{Duration, NaiveDate};

    /// A full Sunday-first week starting at `sunday`, one count per day.
    fn week(sunday: NaiveDate, counts: [u32; 7]) -> WeekRecord {
        WeekRecord {
            days: counts
                .iter()
                .enumerate()
                .map(|(i, &count)| DailyRecord {
                    date: sunday + Duration::days(i as i64),
                    count,
                })
                .collect(),
        }
    }

    fn sunday() -> NaiveDate {
        // 2026-08-02 is a Sunday.
        NaiveDate::from_ymd_opt(2026, 8, 2).unwrap()
    }

    #[test]
    fn bar_rows_carry_label_total_and_scaled_bar() {
        let rows = weekly_bars(&[week(sunday(), [3, 0, 5, 5, 5, 0, 2])], 12);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].label, "Aug 02");
        assert_eq!(rows[0].total, 20);
        assert_eq!(rows[0].bar, "████");
    }

    #[test]
    fn bar_length_is_capped() {
        let rows = weekly_bars(&[week(sunday(), [50, 50, 50, 0, 0, 0, 0])], 12);
        assert_eq!(rows[0].bar.chars().count(), BAR_MAX as usize);
    }

    #[test]
    fn only_the_trailing_weeks_are_rendered_oldest_first() {
        let weeks: Vec<WeekRecord> = (0..5)
            .map(|i| week(sunday() + Duration::weeks(i), [i as u32 + 1, 0, 0, 0, 0, 0, 0]))
            .collect();
        let rows = weekly_bars(&weeks, 2);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].total, 4);
        assert_eq!(rows[1].total, 5);
    }

    #[test]
    fn grid_has_seven_weekday_lines() {
        let lines = calendar_grid(&[week(sunday(), [0, 1, 5, 10, 20, 0, 3])], 12);
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "  "); // Sunday, count 0
        assert_eq!(lines[1], "░░"); // Monday, count 1
        assert_eq!(lines[2], "▒▒");
        assert_eq!(lines[3], "▓▓");
        assert_eq!(lines[4], "██");
        assert_eq!(lines[6], "░░");
    }

    #[test]
    fn partial_week_leaves_missing_slots_blank() {
        // Week containing only Wednesday.
        let wednesday = sunday() + Duration::days(3);
        let partial = WeekRecord {
            days: vec![DailyRecord {
                date: wednesday,
                count: 12,
            }],
        };
        let lines = calendar_grid(&[partial], 12);
        assert_eq!(lines[3], "▓▓");
        for slot in [0, 1, 2, 4, 5, 6] {
            assert_eq!(lines[slot], "  ", "slot {slot} should be blank");
        }
    }

    #[test]
    fn empty_window_renders_nothing() {
        assert!(weekly_bars(&[], 12).is_empty());
        assert!(calendar_grid(&[], 12).is_empty());
    }
}
