//! Preset column sets for the report and history exports.

use crate::models::{CycleReport, PaymentHistoryEntry};

use super::CsvColumn;

/// Columns for the per-cycle report export.
pub fn cycle_report_columns() -> Vec<CsvColumn<CycleReport>> {
    vec![
        CsvColumn::new("Due Date", |r: &CycleReport| {
            r.due_date.format("%Y-%m-%d").to_string()
        }),
        CsvColumn::new("Status", |r: &CycleReport| r.status.as_str().to_string()),
        CsvColumn::new("Recipient", |r: &CycleReport| r.recipient_name.clone()),
        CsvColumn::new("Recipient Email", |r: &CycleReport| {
            r.recipient_email.clone()
        }),
        CsvColumn::new("Contribution", |r: &CycleReport| {
            r.contribution_amount.to_string()
        }),
        CsvColumn::new("Expected", |r: &CycleReport| r.total_expected.to_string()),
        CsvColumn::new("Collected", |r: &CycleReport| r.total_collected.to_string()),
        CsvColumn::new("Verified", |r: &CycleReport| r.verified_count.to_string()),
        CsvColumn::new("Pending", |r: &CycleReport| r.pending_count.to_string()),
        CsvColumn::new("Unpaid", |r: &CycleReport| r.unpaid_count.to_string()),
        CsvColumn::new("Rejected", |r: &CycleReport| r.rejected_count.to_string()),
    ]
}

/// Columns for a member's payment history export.
pub fn payment_history_columns() -> Vec<CsvColumn<PaymentHistoryEntry>> {
    vec![
        CsvColumn::new("Cycle", |h: &PaymentHistoryEntry| h.cycle_id.clone()),
        CsvColumn::new("Due Date", |h: &PaymentHistoryEntry| {
            h.due_date.format("%Y-%m-%d").to_string()
        }),
        CsvColumn::new("Status", |h: &PaymentHistoryEntry| {
            h.status.label().to_string()
        }),
        CsvColumn::new("Verified At", |h: &PaymentHistoryEntry| {
            h.verified_at
                .map(|t| t.to_rfc3339())
                .unwrap_or_default()
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::to_csv;
    use crate::models::{CycleStatus, PaymentStatus};
    use chrono::{NaiveDate, TimeZone, Utc};
    use rust_decimal::Decimal;

    #[test]
    fn test_cycle_report_export() {
        let report = CycleReport {
            cycle_id: "cyc_001".to_string(),
            due_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            status: CycleStatus::Closed,
            recipient_name: "Ama Mensah".to_string(),
            recipient_email: "ama@example.com".to_string(),
            total_expected: Decimal::new(1200, 0),
            total_collected: Decimal::new(900, 0),
            verified_count: 3,
            pending_count: 1,
            unpaid_count: 0,
            rejected_count: 0,
            contribution_amount: Decimal::new(300, 0),
        };

        let csv = to_csv(&[report], &cycle_report_columns()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("\"Due Date\",\"Status\",\"Recipient\""));
        assert_eq!(
            lines[1],
            "\"2026-03-01\",\"closed\",\"Ama Mensah\",\"ama@example.com\",\"300\",\"1200\",\"900\",\"3\",\"1\",\"0\",\"0\""
        );
    }

    #[test]
    fn test_history_export_leaves_unverified_blank() {
        let rows = vec![
            PaymentHistoryEntry {
                cycle_id: "cyc_002".to_string(),
                due_date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
                status: PaymentStatus::Pending,
                verified_at: None,
            },
            PaymentHistoryEntry {
                cycle_id: "cyc_001".to_string(),
                due_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
                status: PaymentStatus::Verified,
                verified_at: Some(Utc.with_ymd_and_hms(2026, 1, 3, 8, 0, 0).unwrap()),
            },
        ];

        let csv = to_csv(&rows, &payment_history_columns()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "\"Cycle\",\"Due Date\",\"Status\",\"Verified At\"");
        assert_eq!(lines[1], "\"cyc_002\",\"2026-02-01\",\"Pending\",\"\"");
        assert_eq!(
            lines[2],
            "\"cyc_001\",\"2026-01-01\",\"Verified\",\"2026-01-03T08:00:00+00:00\""
        );
    }
}
