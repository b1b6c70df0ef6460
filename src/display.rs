//! Terminal presentation layer. The only module that prints; everything it
//! shows comes pre-computed from the calendar core.

use colored::*;
use tabled::{Alignment, Disable, Modify, Style, Table, Tabled, object::Segment};

use crate::calendar::CalendarWindow;
use crate::graph::{self, RenderMode};
use crate::intensity::IntensityLevel;
use crate::streaks::StreakResult;

#[derive(Tabled)]
struct SummaryRow {
    label: String,
    value: String,
}

#[derive(Tabled)]
struct GraphRow {
    #[tabled(rename = "Week")]
    week: String,
    #[tabled(rename = "Contributions")]
    contributions: String,
    #[tabled(rename = "Graph")]
    graph: String,
}

pub fn print_summary(username: &str, total: u64, streaks: StreakResult) {
    println!();
    println!(
        "{}",
        format!("GitHub Contribution Stats for {}", username.green()).bold()
    );

    let rows = vec![
        SummaryRow {
            label: "Total Contributions (last year)".bold().to_string(),
            value: total.to_string().yellow().bold().to_string(),
        },
        SummaryRow {
            label: "Current Streak".bold().to_string(),
            value: format!("{} days", streaks.current).green().bold().to_string(),
        },
        SummaryRow {
            label: "Longest Streak".bold().to_string(),
            value: format!("{} days", streaks.longest).cyan().bold().to_string(),
        },
    ];

    let table = Table::new(rows)
        .with(Style::modern())
        .with(Disable::Row(..1))
        .with(Modify::new(Segment::all()).with(Alignment::left()));

    println!("{table}");
}

pub fn print_graph(window: &CalendarWindow, mode: RenderMode, weeks: usize) {
    match mode {
        RenderMode::Bar => print_weekly_bars(window, weeks),
        RenderMode::Grid => print_calendar_grid(window, weeks),
    }
}

fn print_weekly_bars(window: &CalendarWindow, weeks: usize) {
    println!();
    println!("{}", format!("Weekly Contributions (Last {weeks} Weeks)").bold());

    let rows = graph::weekly_bars(&window.weeks, weeks);
    if rows.is_empty() {
        println!("{}", graph::NO_DATA_NOTICE.yellow());
        return;
    }

    let rows: Vec<GraphRow> = rows
        .into_iter()
        .map(|row| GraphRow {
            week: row.label,
            contributions: row.total.to_string(),
            graph: row.bar.green().to_string(),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::modern())
        .with(Modify::new(Segment::all()).with(Alignment::left()));

    println!("{table}");
}

fn print_calendar_grid(window: &CalendarWindow, weeks: usize) {
    println!();
    println!("{}", format!("Contribution Graph (Last {weeks} Weeks)").bold());
    println!("{}", "Sun → Sat".dimmed());

    let lines = graph::calendar_grid(&window.weeks, weeks);
    if lines.is_empty() {
        println!("{}", graph::NO_DATA_NOTICE.yellow());
        return;
    }

    for line in lines {
        println!("{line}");
    }

    println!();
    println!("{}", legend().dimmed());
}

fn legend() -> String {
    let entries: Vec<String> = [
        IntensityLevel::Low,
        IntensityLevel::Medium,
        IntensityLevel::High,
        IntensityLevel::VeryHigh,
    ]
    .iter()
    .map(|level| format!("{} {}", level.block(), level.label()))
    .collect();

    format!("Legend:  {}", entries.join("   "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_names_every_non_empty_level() {
        let legend = legend();
        for name in ["low", "medium", "high", "very high"] {
            assert!(legend.contains(name), "legend missing {name:?}");
        }
    }
}
