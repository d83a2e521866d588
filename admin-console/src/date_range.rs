//! Date-range quick-select
//!
//! Presets for the analytics date pickers. Resolution takes "today" as an
//! argument so the helpers stay pure.

use chrono::{Datelike, Duration, NaiveDate};
use shared::types::DateRange;

/// Quick-select preset offered by the date picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRangePreset {
    Today,
    Yesterday,
    Last7Days,
    Last30Days,
    ThisMonth,
    LastMonth,
}

impl DateRangePreset {
    /// All presets, in display order
    pub const ALL: [DateRangePreset; 6] = [
        DateRangePreset::Today,
        DateRangePreset::Yesterday,
        DateRangePreset::Last7Days,
        DateRangePreset::Last30Days,
        DateRangePreset::ThisMonth,
        DateRangePreset::LastMonth,
    ];

    /// Resolve to an inclusive range relative to `today`
    pub fn resolve(&self, today: NaiveDate) -> DateRange {
        match self {
            DateRangePreset::Today => DateRange::new(today, today),
            DateRangePreset::Yesterday => {
                let yesterday = today - Duration::days(1);
                DateRange::new(yesterday, yesterday)
            }
            DateRangePreset::Last7Days => DateRange::new(today - Duration::days(6), today),
            DateRangePreset::Last30Days => DateRange::new(today - Duration::days(29), today),
            DateRangePreset::ThisMonth => DateRange::new(first_of_month(today), today),
            DateRangePreset::LastMonth => {
                let last_of_prev = first_of_month(today) - Duration::days(1);
                DateRange::new(first_of_month(last_of_prev), last_of_prev)
            }
        }
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    // with_day(1) is always valid
    date.with_day(1).unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_today_and_yesterday() {
        let today = date("2025-03-15");
        assert_eq!(
            DateRangePreset::Today.resolve(today),
            DateRange::new(today, today)
        );
        assert_eq!(
            DateRangePreset::Yesterday.resolve(today),
            DateRange::new(date("2025-03-14"), date("2025-03-14"))
        );
    }

    #[test]
    fn test_rolling_windows_are_inclusive() {
        let today = date("2025-03-15");
        let last7 = DateRangePreset::Last7Days.resolve(today);
        assert_eq!(last7, DateRange::new(date("2025-03-09"), today));
        assert_eq!(last7.days(), 7);

        let last30 = DateRangePreset::Last30Days.resolve(today);
        assert_eq!(last30.start, date("2025-02-14"));
        assert_eq!(last30.days(), 30);
    }

    #[test]
    fn test_month_presets() {
        let today = date("2025-03-15");
        assert_eq!(
            DateRangePreset::ThisMonth.resolve(today),
            DateRange::new(date("2025-03-01"), today)
        );
        assert_eq!(
            DateRangePreset::LastMonth.resolve(today),
            DateRange::new(date("2025-02-01"), date("2025-02-28"))
        );
    }

    #[test]
    fn test_last_month_across_year_boundary() {
        let today = date("2025-01-10");
        assert_eq!(
            DateRangePreset::LastMonth.resolve(today),
            DateRange::new(date("2024-12-01"), date("2024-12-31"))
        );
    }
}
