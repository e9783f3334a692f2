//! Per-status tallies over payment logs.

use serde::{Deserialize, Serialize};

use super::{PaymentLog, PaymentStatus};

/// Number of payment logs in each status.
///
/// # Example
///
/// ```
/// use susu_engine::models::{PaymentLog, PaymentStatus, StatusCounts};
///
/// let logs = vec![
///     PaymentLog {
///         cycle_id: "cyc_001".to_string(),
///         member_id: "mem_001".to_string(),
///         status: PaymentStatus::Verified,
///         verified_at: None,
///     },
///     PaymentLog {
///         cycle_id: "cyc_001".to_string(),
///         member_id: "mem_002".to_string(),
///         status: PaymentStatus::Unpaid,
///         verified_at: None,
///     },
/// ];
///
/// let counts = StatusCounts::tally(&logs);
/// assert_eq!(counts.verified, 1);
/// assert_eq!(counts.unpaid, 1);
/// assert_eq!(counts.total(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Logs with a confirmed payment.
    pub verified: u32,
    /// Logs awaiting verification.
    pub pending: u32,
    /// Logs with no payment submitted.
    pub unpaid: u32,
    /// Logs whose payment was refused.
    pub rejected: u32,
}

impl StatusCounts {
    /// Counts the statuses of the given logs.
    pub fn tally<'a, I>(logs: I) -> Self
    where
        I: IntoIterator<Item = &'a PaymentLog>,
    {
        let mut counts = Self::default();
        for log in logs {
            counts.record(log.status);
        }
        counts
    }

    /// Adds one log in the given status.
    pub fn record(&mut self, status: PaymentStatus) {
        match status {
            PaymentStatus::Verified => self.verified += 1,
            PaymentStatus::Pending => self.pending += 1,
            PaymentStatus::Unpaid => self.unpaid += 1,
            PaymentStatus::Rejected => self.rejected += 1,
        }
    }

    /// Returns the count for one status.
    pub fn get(&self, status: PaymentStatus) -> u32 {
        match status {
            PaymentStatus::Verified => self.verified,
            PaymentStatus::Pending => self.pending,
            PaymentStatus::Unpaid => self.unpaid,
            PaymentStatus::Rejected => self.rejected,
        }
    }

    /// Returns the number of logs counted.
    pub fn total(&self) -> u32 {
        self.verified + self.pending + self.unpaid + self.rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn log(status: PaymentStatus) -> PaymentLog {
        PaymentLog {
            cycle_id: "cyc_001".to_string(),
            member_id: "mem_001".to_string(),
            status,
            verified_at: None,
        }
    }

    #[test]
    fn test_tally_empty_is_zero() {
        let counts = StatusCounts::tally(&Vec::<PaymentLog>::new());
        assert_eq!(counts, StatusCounts::default());
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_tally_counts_each_status() {
        let logs = vec![
            log(PaymentStatus::Verified),
            log(PaymentStatus::Verified),
            log(PaymentStatus::Pending),
            log(PaymentStatus::Rejected),
            log(PaymentStatus::Unpaid),
            log(PaymentStatus::Unpaid),
            log(PaymentStatus::Unpaid),
        ];

        let counts = StatusCounts::tally(&logs);
        assert_eq!(counts.verified, 2);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.unpaid, 3);
        assert_eq!(counts.rejected, 1);
        assert_eq!(counts.total(), 7);
    }

    #[test]
    fn test_get_matches_fields() {
        let counts = StatusCounts {
            verified: 4,
            pending: 3,
            unpaid: 2,
            rejected: 1,
        };
        assert_eq!(counts.get(PaymentStatus::Verified), 4);
        assert_eq!(counts.get(PaymentStatus::Pending), 3);
        assert_eq!(counts.get(PaymentStatus::Unpaid), 2);
        assert_eq!(counts.get(PaymentStatus::Rejected), 1);
    }
}
