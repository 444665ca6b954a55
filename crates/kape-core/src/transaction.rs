//! # Transaction Record
//!
//! The immutable snapshot of a completed sale, and its log wire format.
//!
//! ## Wire Format
//! One record per line, pipe-delimited, nine fields in fixed order:
//! ```text
//! timestamp|orderId|customerId|customerName|amount|discount|loyaltyRedeemed|pointsEarned|pointsRedeemed
//! 2026-08-24 14:31:05|ORD-20260824-0001|C00001|Maria Santos|624.00|156.00|0.00|12|0
//! ```
//! Amounts carry exactly two decimal places; the timestamp is second
//! precision. Walk-in sales use the [`WALK_IN_CUSTOMER_ID`] sentinel.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::money::Money;

/// Sentinel customer id recorded for walk-in sales.
pub const WALK_IN_CUSTOMER_ID: &str = "WALKIN";

/// Display name recorded for walk-in sales.
pub const WALK_IN_CUSTOMER_NAME: &str = "Walk-in";

/// Timestamp format used in the log.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// =============================================================================
// Transaction Record
// =============================================================================

/// An immutable snapshot of a completed sale. Created once at successful
/// checkout, appended to the transaction log, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub timestamp: DateTime<Utc>,
    pub order_id: String,
    /// Customer id, or [`WALK_IN_CUSTOMER_ID`] for walk-ins.
    pub customer_id: String,
    pub customer_name: String,
    /// Final amount paid.
    pub amount: Money,
    /// Customer-tier discount applied.
    pub discount_amount: Money,
    /// Peso value of redeemed loyalty points.
    pub loyalty_redeemed: Money,
    pub points_earned: u32,
    pub points_redeemed: u32,
}

impl TransactionRecord {
    /// Serializes the record to one log line (no trailing newline).
    pub fn to_log_line(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|{}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.order_id,
            self.customer_id,
            self.customer_name,
            self.amount.to_decimal_string(),
            self.discount_amount.to_decimal_string(),
            self.loyalty_redeemed.to_decimal_string(),
            self.points_earned,
            self.points_redeemed,
        )
    }

    /// Parses one log line back into a record.
    ///
    /// ## Errors
    /// `RecordParseError` when the line has fewer than nine fields or a
    /// field fails to parse. The log reader skips such lines and keeps
    /// going; corruption of one record must not take down the history.
    pub fn parse_log_line(line: &str) -> Result<TransactionRecord, RecordParseError> {
        let parts: Vec<&str> = line.split('|').collect();

        if parts.len() < 9 {
            return Err(RecordParseError::TooFewFields { found: parts.len() });
        }

        let timestamp = NaiveDateTime::parse_from_str(parts[0], TIMESTAMP_FORMAT)
            .map_err(|_| RecordParseError::InvalidField { field: "timestamp" })?
            .and_utc();

        let amount = Money::parse_decimal(parts[4])
            .map_err(|_| RecordParseError::InvalidField { field: "amount" })?;
        let discount_amount = Money::parse_decimal(parts[5])
            .map_err(|_| RecordParseError::InvalidField { field: "discountAmount" })?;
        let loyalty_redeemed = Money::parse_decimal(parts[6])
            .map_err(|_| RecordParseError::InvalidField { field: "loyaltyRedeemed" })?;

        let points_earned: u32 = parts[7]
            .trim()
            .parse()
            .map_err(|_| RecordParseError::InvalidField { field: "pointsEarned" })?;
        let points_redeemed: u32 = parts[8]
            .trim()
            .parse()
            .map_err(|_| RecordParseError::InvalidField { field: "pointsRedeemed" })?;

        Ok(TransactionRecord {
            timestamp,
            order_id: parts[1].to_string(),
            customer_id: parts[2].to_string(),
            customer_name: parts[3].to_string(),
            amount,
            discount_amount,
            loyalty_redeemed,
            points_earned,
            points_redeemed,
        })
    }

    /// True if this record belongs to a walk-in sale.
    #[inline]
    pub fn is_walk_in(&self) -> bool {
        self.customer_id == WALK_IN_CUSTOMER_ID
    }
}

// =============================================================================
// Parse Error
// =============================================================================

/// Why a persisted log line could not be parsed.
#[derive(Debug, Error)]
pub enum RecordParseError {
    #[error("expected 9 fields, found {found}")]
    TooFewFields { found: usize },

    #[error("invalid {field} field")]
    InvalidField { field: &'static str },
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> TransactionRecord {
        TransactionRecord {
            timestamp: Utc.with_ymd_and_hms(2026, 8, 24, 14, 31, 5).unwrap(),
            order_id: "ORD-20260824-0001".to_string(),
            customer_id: "C00001".to_string(),
            customer_name: "Maria Santos".to_string(),
            amount: Money::from_pesos(624),
            discount_amount: Money::from_pesos(156),
            loyalty_redeemed: Money::zero(),
            points_earned: 12,
            points_redeemed: 0,
        }
    }

    #[test]
    fn test_log_line_format() {
        assert_eq!(
            sample_record().to_log_line(),
            "2026-08-24 14:31:05|ORD-20260824-0001|C00001|Maria Santos|624.00|156.00|0.00|12|0"
        );
    }

    #[test]
    fn test_round_trip() {
        let record = sample_record();
        let parsed = TransactionRecord::parse_log_line(&record.to_log_line()).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_round_trip_walk_in() {
        let record = TransactionRecord {
            customer_id: WALK_IN_CUSTOMER_ID.to_string(),
            customer_name: WALK_IN_CUSTOMER_NAME.to_string(),
            ..sample_record()
        };
        let parsed = TransactionRecord::parse_log_line(&record.to_log_line()).unwrap();
        assert!(parsed.is_walk_in());
        assert_eq!(parsed, record);
    }

    #[test]
    fn test_too_few_fields() {
        let err = TransactionRecord::parse_log_line("2026-08-24 14:31:05|ORD|C00001").unwrap_err();
        assert!(matches!(err, RecordParseError::TooFewFields { found: 3 }));
    }

    #[test]
    fn test_invalid_amount_field() {
        let line =
            "2026-08-24 14:31:05|ORD-1|C00001|Maria Santos|six hundred|156.00|0.00|12|0";
        let err = TransactionRecord::parse_log_line(line).unwrap_err();
        assert!(matches!(
            err,
            RecordParseError::InvalidField { field: "amount" }
        ));
    }

    #[test]
    fn test_invalid_timestamp_field() {
        let line = "yesterday|ORD-1|C00001|Maria Santos|624.00|156.00|0.00|12|0";
        let err = TransactionRecord::parse_log_line(line).unwrap_err();
        assert!(matches!(
            err,
            RecordParseError::InvalidField { field: "timestamp" }
        ));
    }
}
