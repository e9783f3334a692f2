//! Collection rate and report totals.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{CycleReport, CycleStatus, ReportTotals};

/// Returns `collected` as a whole percentage of `expected`.
///
/// The percentage is rounded half away from zero and clamped into
/// `0..=100`. Nothing expected means a rate of 0.
///
/// # Examples
///
/// ```
/// use susu_engine::calculation::collection_rate;
/// use rust_decimal::Decimal;
///
/// assert_eq!(collection_rate(Decimal::new(900, 0), Decimal::new(1200, 0)), 75);
/// assert_eq!(collection_rate(Decimal::ZERO, Decimal::ZERO), 0);
/// ```
pub fn collection_rate(collected: Decimal, expected: Decimal) -> u32 {
    if expected <= Decimal::ZERO {
        return 0;
    }

    let percentage = (collected * Decimal::ONE_HUNDRED / expected)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .clamp(Decimal::ZERO, Decimal::ONE_HUNDRED);

    percentage.to_u32().unwrap_or(0)
}

/// Sums a report sequence into group-level totals.
pub fn summarize_reports(reports: &[CycleReport]) -> ReportTotals {
    let total_expected: Decimal = reports.iter().map(|r| r.total_expected).sum();
    let total_collected: Decimal = reports.iter().map(|r| r.total_collected).sum();
    let closed_cycles = reports
        .iter()
        .filter(|r| r.status == CycleStatus::Closed)
        .count() as u32;

    ReportTotals {
        total_expected,
        total_collected,
        outstanding: total_expected - total_collected,
        collection_rate: collection_rate(total_collected, total_expected),
        open_cycles: reports.len() as u32 - closed_cycles,
        closed_cycles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn report(status: CycleStatus, expected: &str, collected: &str) -> CycleReport {
        CycleReport {
            cycle_id: "cyc_001".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            status,
            recipient_name: "Unknown".to_string(),
            recipient_email: String::new(),
            total_expected: dec(expected),
            total_collected: dec(collected),
            verified_count: 0,
            pending_count: 0,
            unpaid_count: 0,
            rejected_count: 0,
            contribution_amount: dec("100"),
        }
    }

    #[test]
    fn test_rate_is_zero_when_nothing_expected() {
        assert_eq!(collection_rate(dec("0"), dec("0")), 0);
    }

    #[test]
    fn test_rate_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(collection_rate(dec("100"), dec("800")), 13);
        // 1/3 = 33.33%
        assert_eq!(collection_rate(dec("100"), dec("300")), 33);
        // 2/3 = 66.67%
        assert_eq!(collection_rate(dec("200"), dec("300")), 67);
    }

    #[test]
    fn test_rate_full_collection() {
        assert_eq!(collection_rate(dec("1500"), dec("1500")), 100);
    }

    #[test]
    fn test_rate_is_clamped_when_collected_exceeds_expected() {
        assert_eq!(collection_rate(dec("1300"), dec("1200")), 100);
    }

    #[test]
    fn test_summarize_empty_reports() {
        let totals = summarize_reports(&[]);
        assert_eq!(totals.total_expected, Decimal::ZERO);
        assert_eq!(totals.total_collected, Decimal::ZERO);
        assert_eq!(totals.collection_rate, 0);
        assert_eq!(totals.open_cycles, 0);
        assert_eq!(totals.closed_cycles, 0);
    }

    #[test]
    fn test_summarize_sums_reports() {
        let reports = vec![
            report(CycleStatus::Open, "600", "0"),
            report(CycleStatus::Closed, "1200", "900"),
        ];

        let totals = summarize_reports(&reports);
        assert_eq!(totals.total_expected, dec("1800"));
        assert_eq!(totals.total_collected, dec("900"));
        assert_eq!(totals.outstanding, dec("900"));
        assert_eq!(totals.collection_rate, 50);
        assert_eq!(totals.open_cycles, 1);
        assert_eq!(totals.closed_cycles, 1);
    }

    proptest! {
        #[test]
        fn prop_rate_is_within_bounds(expected in 0u32..100_000, share in 0u32..=100) {
            let expected = Decimal::from(expected);
            let collected = expected * Decimal::from(share) / Decimal::ONE_HUNDRED;
            let rate = collection_rate(collected, expected);
            prop_assert!(rate <= 100);
            if expected.is_zero() {
                prop_assert_eq!(rate, 0);
            }
        }
    }
}
