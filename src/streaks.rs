//! Streak statistics over a normalized daily sequence.
//!
//! Both walks are pure and O(n). "Most recent" means the last entry of the
//! date-ascending sequence the normalizer produced, never the wall clock, so
//! results are reproducible for a given calendar.

use crate::calendar::DailyRecord;

/// Current and longest runs of consecutive non-zero days. Recomputed on
/// every request; `longest >= current` by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakResult {
    pub current: u32,
    pub longest: u32,
}

/// Compute both streaks in one call. `days` must be date-ascending.
pub fn streaks(days: &[DailyRecord]) -> StreakResult {
    StreakResult {
        current: current_streak(days),
        longest: longest_streak(days),
    }
}

/// Consecutive non-zero days ending at the most recent date. Zero when the
/// most recent day itself has no contributions, or the sequence is empty.
pub fn current_streak(days: &[DailyRecord]) -> u32 {
    days.iter().rev().take_while(|d| d.count > 0).count() as u32
}

/// Longest run of consecutive non-zero days anywhere in the sequence.
pub fn longest_streak(days: &[DailyRecord]) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;

    for day in days {
        if day.count > 0 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    /// Daily sequence with the given counts, oldest first, on consecutive days.
    fn seq(counts: &[u32]) -> Vec<DailyRecord> {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        counts
            .iter()
            .enumerate()
            .map(|(i, &count)| DailyRecord {
                date: start + Duration::days(i as i64),
                count,
            })
            .collect()
    }

    #[test]
    fn empty_sequence_yields_zero_streaks() {
        assert_eq!(streaks(&[]), StreakResult::default());
    }

    #[test]
    fn all_zero_sequence_yields_zero_streaks() {
        let days = seq(&[0, 0, 0, 0]);
        assert_eq!(streaks(&days), StreakResult { current: 0, longest: 0 });
    }

    #[test]
    fn single_recent_active_day_gives_current_streak_of_one() {
        let days = seq(&[0, 0, 0, 7]);
        assert_eq!(current_streak(&days), 1);
    }

    #[test]
    fn zero_on_most_recent_day_breaks_current_streak() {
        let days = seq(&[4, 4, 4, 0]);
        assert_eq!(current_streak(&days), 0);
        assert_eq!(longest_streak(&days), 3);
    }

    #[test]
    fn longest_run_in_the_middle_is_found() {
        // [3,0,5,5,5,0,2]: longest is the three-day run, current is the last day.
        let days = seq(&[3, 0, 5, 5, 5, 0, 2]);
        assert_eq!(streaks(&days), StreakResult { current: 1, longest: 3 });
    }

    #[test]
    fn fully_active_sequence_counts_every_day() {
        let days = seq(&[1, 1, 1, 1, 1]);
        assert_eq!(streaks(&days), StreakResult { current: 5, longest: 5 });
    }

    #[test]
    fn longest_is_never_below_current() {
        for counts in [
            vec![1, 0, 1],
            vec![2, 2, 0, 3, 3, 3],
            vec![1, 1, 1],
            vec![0],
            vec![9],
        ] {
            let days = seq(&counts);
            let result = streaks(&days);
            assert!(result.longest >= result.current, "failed for {counts:?}");
        }
    }
}
