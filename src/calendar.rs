//! calendar.rs
//!
//! Contribution calendar data model and normalizer.
//!
//! The fetch layer hands us the raw week-grouped shape GitHub's GraphQL API
//! returns. This module validates it into typed records and flattens it into
//! a gap-free, date-ascending daily sequence that the streak and graph code
//! can trust without further checking.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Deserialize;
use thiserror::Error;

/// Wire shape of `contributionsCollection.contributionCalendar`.
#[derive(Debug, Deserialize)]
pub struct RawCalendar {
    #[serde(rename = "totalContributions")]
    pub total_contributions: u64,
    pub weeks: Vec<RawWeek>,
}

#[derive(Debug, Deserialize)]
pub struct RawWeek {
    #[serde(rename = "contributionDays")]
    pub contribution_days: Vec<RawDay>,
}

/// A single wire-level day. `date` and `count` are loose here on purpose so
/// that validation happens in [`CalendarWindow::from_raw`], not in serde.
#[derive(Debug, Deserialize)]
pub struct RawDay {
    pub date: Option<NaiveDate>,
    #[serde(rename = "contributionCount", default)]
    pub contribution_count: i64,
}

/// The only error the calendar core raises. Raised eagerly at normalization
/// time; everything downstream assumes well-formed input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MalformedInput {
    #[error("contribution day has no date")]
    MissingDate,
    #[error("negative contribution count {count} on {date}")]
    NegativeCount { date: NaiveDate, count: i64 },
    #[error("week starting {start} has {len} days")]
    OversizedWeek { start: NaiveDate, len: usize },
    #[error("duplicate entry for {0}")]
    DuplicateDate(NaiveDate),
}

/// One calendar day with its contribution count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub count: u32,
}

/// Up to seven days, Sunday first. Weeks at the window edges may be partial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRecord {
    pub days: Vec<DailyRecord>,
}

impl WeekRecord {
    pub fn total(&self) -> u32 {
        self.days.iter().map(|d| d.count).sum()
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }
}

/// The trailing contribution window: chronological weeks plus the total the
/// API reports for the same span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarWindow {
    pub total: u64,
    pub weeks: Vec<WeekRecord>,
}

impl CalendarWindow {
    /// Validate the raw wire calendar into typed records.
    pub fn from_raw(raw: RawCalendar) -> Result<Self, MalformedInput> {
        let mut weeks = Vec::with_capacity(raw.weeks.len());

        for raw_week in raw.weeks {
            let mut days = Vec::with_capacity(raw_week.contribution_days.len());
            for raw_day in raw_week.contribution_days {
                let date = raw_day.date.ok_or(MalformedInput::MissingDate)?;
                let count =
                    u32::try_from(raw_day.contribution_count).map_err(|_| {
                        MalformedInput::NegativeCount {
                            date,
                            count: raw_day.contribution_count,
                        }
                    })?;
                days.push(DailyRecord { date, count });
            }

            if days.len() > 7 {
                return Err(MalformedInput::OversizedWeek {
                    start: days[0].date,
                    len: days.len(),
                });
            }

            weeks.push(WeekRecord { days });
        }

        Ok(Self {
            total: raw.total_contributions,
            weeks,
        })
    }

    /// Flat, gap-filled, date-ascending view of the whole window.
    pub fn flatten(&self) -> Result<Vec<DailyRecord>, MalformedInput> {
        normalize(
            self.weeks
                .iter()
                .flat_map(|w| w.days.iter().copied())
                .collect(),
        )
    }
}

/// Sort daily records by date, reject duplicates, and fill any missing day in
/// the covered range with a zero count. Idempotent: normalizing an already
/// normalized sequence returns it unchanged.
pub fn normalize(mut days: Vec<DailyRecord>) -> Result<Vec<DailyRecord>, MalformedInput> {
    days.sort_by_key(|d| d.date);

    let mut out: Vec<DailyRecord> = Vec::with_capacity(days.len());
    for day in days {
        if let Some(&prev) = out.last() {
            if prev.date == day.date {
                return Err(MalformedInput::DuplicateDate(day.date));
            }
            let mut gap = prev.date + Duration::days(1);
            while gap < day.date {
                out.push(DailyRecord {
                    date: gap,
                    count: 0,
                });
                gap += Duration::days(1);
            }
        }
        out.push(day);
    }

    Ok(out)
}

/// A push event timestamp from the public events feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PushEvent {
    pub pushed_at: DateTime<Utc>,
}

/// Rough commits-per-push multiplier used by the event approximation.
pub const COMMITS_PER_PUSH: u32 = 2;

/// Approximate a daily sequence from unordered push events (events per day
/// times [`COMMITS_PER_PUSH`]). This is a distinct metric from the calendar
/// contribution count, which stays authoritative; never mix the two.
pub fn approx_from_push_events(events: &[PushEvent]) -> Result<Vec<DailyRecord>, MalformedInput> {
    let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for event in events {
        *per_day.entry(event.pushed_at.date_naive()).or_insert(0) += COMMITS_PER_PUSH;
    }

    normalize(
        per_day
            .into_iter()
            .map(|(date, count)| DailyRecord { date, count })
            .collect(),
    )
}
