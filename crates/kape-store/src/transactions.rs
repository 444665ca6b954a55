//! # Transaction Log
//!
//! Append-only, line-oriented storage of completed-sale records.
//!
//! ## File Shape
//! One pipe-delimited record per line (see
//! [`TransactionRecord::to_log_line`]):
//! ```text
//! 2026-08-24 14:31:05|ORD-20260824-0001|C00001|Maria Santos|624.00|156.00|0.00|12|0
//! 2026-08-24 15:02:11|ORD-20260824-0002|WALKIN|Walk-in|780.00|0.00|0.00|0|0
//! ```
//!
//! Queries load the full set and filter in memory; there is no index.
//! A line that cannot be parsed is skipped with a diagnostic so one
//! corrupt record never takes down the whole history.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::{debug, warn};

use kape_core::{Money, TransactionRecord};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Transaction Log
// =============================================================================

/// File-backed append-only transaction log.
#[derive(Debug, Clone)]
pub struct TransactionLog {
    path: PathBuf,
}

impl TransactionLog {
    /// Creates a log over the given file path. The file is created on
    /// first append.
    pub fn new(path: impl Into<PathBuf>) -> TransactionLog {
        TransactionLog { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record.
    ///
    /// A write failure is surfaced as `StoreError`: the sale must not be
    /// treated as logged when it is not on disk.
    pub fn append(&self, record: &TransactionRecord) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StoreError::WriteFailed {
                path: self.path.clone(),
                source,
            })?;

        writeln!(file, "{}", record.to_log_line()).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;

        debug!(order_id = %record.order_id, "transaction logged");
        Ok(())
    }

    /// Loads every parsable record.
    ///
    /// A missing or unreadable file degrades to an empty history; blank
    /// and malformed lines are skipped with a diagnostic.
    pub fn load_all(&self) -> Vec<TransactionRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "transaction log unavailable, no history");
                return Vec::new();
            }
        };

        let mut records = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }

            match TransactionRecord::parse_log_line(line) {
                Ok(record) => records.push(record),
                Err(err) => {
                    warn!(%err, line, "skipping invalid transaction log line");
                }
            }
        }

        debug!(count = records.len(), "loaded transactions");
        records
    }

    /// Records whose timestamp falls on the given calendar date.
    pub fn by_date(&self, date: NaiveDate) -> Vec<TransactionRecord> {
        self.load_all()
            .into_iter()
            .filter(|t| t.timestamp.date_naive() == date)
            .collect()
    }

    /// Records for one customer.
    pub fn by_customer(&self, customer_id: &str) -> Vec<TransactionRecord> {
        self.load_all()
            .into_iter()
            .filter(|t| t.customer_id == customer_id)
            .collect()
    }

    /// Total amount taken on the given date.
    pub fn revenue_for_date(&self, date: NaiveDate) -> Money {
        self.by_date(date).iter().map(|t| t.amount).sum()
    }

    /// Number of sales on the given date.
    pub fn count_for_date(&self, date: NaiveDate) -> usize {
        self.by_date(date).len()
    }

    /// Removes the whole history file.
    pub fn clear(&self) -> StoreResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::WriteFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use tempfile::tempdir;

    fn record(order_id: &str, customer_id: &str, day: u32, pesos: i64) -> TransactionRecord {
        TransactionRecord {
            timestamp: Utc.with_ymd_and_hms(2026, 8, day, 14, 31, 5).unwrap(),
            order_id: order_id.to_string(),
            customer_id: customer_id.to_string(),
            customer_name: "Maria Santos".to_string(),
            amount: Money::from_pesos(pesos),
            discount_amount: Money::zero(),
            loyalty_redeemed: Money::zero(),
            points_earned: 0,
            points_redeemed: 0,
        }
    }

    fn log_in(dir: &tempfile::TempDir) -> TransactionLog {
        TransactionLog::new(dir.path().join("transactions.txt"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        assert!(log_in(&dir).load_all().is_empty());
    }

    #[test]
    fn test_append_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);

        let first = record("ORD-1", "C00001", 24, 624);
        let second = record("ORD-2", "C00002", 24, 115);
        log.append(&first).unwrap();
        log.append(&second).unwrap();

        let loaded = log.load_all();
        assert_eq!(loaded, vec![first, second]);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);

        log.append(&record("ORD-1", "C00001", 24, 624)).unwrap();
        // Inject a short line, a corrupt amount, and a blank line
        let mut file = OpenOptions::new().append(true).open(log.path()).unwrap();
        writeln!(file, "only|three|fields").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "2026-08-24 15:00:00|ORD-X|C00002|Ana|oops|0.00|0.00|0|0").unwrap();
        log.append(&record("ORD-2", "C00002", 24, 115)).unwrap();

        let loaded = log.load_all();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].order_id, "ORD-1");
        assert_eq!(loaded[1].order_id, "ORD-2");
    }

    #[test]
    fn test_filter_by_date() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);

        log.append(&record("ORD-1", "C00001", 23, 100)).unwrap();
        log.append(&record("ORD-2", "C00001", 24, 200)).unwrap();
        log.append(&record("ORD-3", "C00002", 24, 300)).unwrap();

        let date = NaiveDate::from_ymd_opt(2026, 8, 24).unwrap();
        let on_date = log.by_date(date);
        assert_eq!(on_date.len(), 2);

        assert_eq!(log.revenue_for_date(date), Money::from_pesos(500));
        assert_eq!(log.count_for_date(date), 2);

        let other = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        assert_eq!(log.count_for_date(other), 0);
        assert_eq!(log.revenue_for_date(other), Money::zero());
    }

    #[test]
    fn test_filter_by_customer() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);

        log.append(&record("ORD-1", "C00001", 24, 100)).unwrap();
        log.append(&record("ORD-2", "C00002", 24, 200)).unwrap();
        log.append(&record("ORD-3", "C00001", 25, 300)).unwrap();

        let mine = log.by_customer("C00001");
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|t| t.customer_id == "C00001"));
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let log = log_in(&dir);

        log.append(&record("ORD-1", "C00001", 24, 100)).unwrap();
        log.clear().unwrap();
        assert!(log.load_all().is_empty());

        // Clearing an absent file is fine
        log.clear().unwrap();
    }
}
