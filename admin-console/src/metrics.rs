//! Chart/view helpers
//!
//! Pure aggregation and formatting functions called by the view layer.
//! Kept out of the data models so the wire types stay free of derived
//! values.

use rust_decimal::Decimal;
use shared::models::{DailyPoint, PaymentMethodSplit};
use shared::types::DateRange;

/// Percent change from `previous` to `current`, rounded to one decimal
///
/// `None` when there is no previous value to compare against (zero
/// baseline); the view renders that as "—" instead of a fake number.
pub fn percent_change(current: Decimal, previous: Decimal) -> Option<Decimal> {
    if previous.is_zero() {
        return None;
    }
    let change = (current - previous) / previous * Decimal::ONE_HUNDRED;
    Some(change.round_dp(1))
}

/// Total volume over a series
pub fn total_volume(series: &[DailyPoint]) -> Decimal {
    series.iter().map(|point| point.volume).sum()
}

/// Total orders over a series
pub fn total_orders(series: &[DailyPoint]) -> u64 {
    series.iter().map(|point| point.orders).sum()
}

/// Volume change between two periods of the same length
pub fn volume_change(current: &[DailyPoint], previous: &[DailyPoint]) -> Option<Decimal> {
    percent_change(total_volume(current), total_volume(previous))
}

/// Window a series to the selected date range
///
/// Charts render whatever the backend returned; the range picker narrows
/// the view without refetching.
pub fn clip_series(series: &[DailyPoint], range: DateRange) -> Vec<DailyPoint> {
    series
        .iter()
        .filter(|point| range.contains(point.date))
        .cloned()
        .collect()
}

/// Share of total volume per payment method, rounded to one decimal
///
/// Empty when nothing was transacted (a pie chart over zeros is noise).
pub fn payment_method_shares(splits: &[PaymentMethodSplit]) -> Vec<(String, Decimal)> {
    let total: Decimal = splits.iter().map(|split| split.volume).sum();
    if total.is_zero() {
        return Vec::new();
    }
    splits
        .iter()
        .map(|split| {
            let share = (split.volume / total * Decimal::ONE_HUNDRED).round_dp(1);
            (split.method.clone(), share)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn point(date: &str, volume: &str, orders: u64) -> DailyPoint {
        DailyPoint {
            date: date.parse().unwrap(),
            volume: volume.parse().unwrap(),
            orders,
        }
    }

    #[test]
    fn test_percent_change() {
        assert_eq!(percent_change(dec("150"), dec("100")), Some(dec("50.0")));
        assert_eq!(percent_change(dec("75"), dec("100")), Some(dec("-25.0")));
        assert_eq!(percent_change(dec("100"), dec("100")), Some(dec("0.0")));
    }

    #[test]
    fn test_percent_change_with_zero_baseline() {
        assert_eq!(percent_change(dec("50"), Decimal::ZERO), None);
    }

    #[test]
    fn test_series_totals() {
        let series = vec![
            point("2025-03-01", "400.25", 12),
            point("2025-03-02", "512.00", 15),
        ];
        assert_eq!(total_volume(&series), dec("912.25"));
        assert_eq!(total_orders(&series), 27);
    }

    #[test]
    fn test_clip_series_keeps_in_range_days() {
        let series = vec![
            point("2025-03-01", "400.25", 12),
            point("2025-03-02", "512.00", 15),
            point("2025-03-05", "100.00", 3),
        ];
        let range = DateRange::new("2025-03-02".parse().unwrap(), "2025-03-04".parse().unwrap());
        let clipped = clip_series(&series, range);
        assert_eq!(clipped, vec![point("2025-03-02", "512.00", 15)]);
    }

    #[test]
    fn test_payment_method_shares() {
        let splits = vec![
            PaymentMethodSplit {
                method: "card".to_string(),
                volume: dec("75"),
                transactions: 10,
            },
            PaymentMethodSplit {
                method: "cash".to_string(),
                volume: dec("25"),
                transactions: 5,
            },
        ];
        assert_eq!(
            payment_method_shares(&splits),
            vec![
                ("card".to_string(), dec("75.0")),
                ("cash".to_string(), dec("25.0")),
            ]
        );
    }

    #[test]
    fn test_shares_of_zero_volume_are_empty() {
        let splits = vec![PaymentMethodSplit {
            method: "card".to_string(),
            volume: Decimal::ZERO,
            transactions: 0,
        }];
        assert!(payment_method_shares(&splits).is_empty());
    }
}
