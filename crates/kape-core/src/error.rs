//! # Error Types
//!
//! Domain-specific error types for kape-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  kape-core errors (this file)                               │
//! │  ├── CoreError        - Business rule violations            │
//! │  └── ValidationError  - Input validation failures           │
//! │                                                             │
//! │  kape-store errors (separate crate)                         │
//! │  └── StoreError       - File persistence failures           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (amounts, balances)
//! 3. Errors are enum variants, never String
//!
//! Note that a rejected loyalty redemption is normally a *boolean* result
//! (`LoyaltyLedger::redeem` returns false), not an error. Only the checkout
//! settlement, which must keep the loyalty discount and the redemption in
//! lock-step, promotes an invalid redemption intent to `CoreError`.

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A negative monetary amount was passed to loyalty accrual.
    #[error("amount spent cannot be negative: {0}")]
    InvalidAmount(Money),

    /// A checkout redemption intent that the ledger cannot honor:
    /// not a positive multiple of 10, over the balance, or worth more
    /// than the remaining order total.
    #[error("cannot redeem {requested} points (balance: {balance})")]
    InvalidRedemption { requested: u32, balance: u32 },

    /// Checkout was attempted on an order with no line items.
    #[error("cannot settle an empty order")]
    EmptyOrder,

    /// Payment tendered is less than the amount due.
    #[error("insufficient payment: tendered {tendered}, due {due}")]
    InsufficientPayment { tendered: Money, due: Money },

    /// Validation error (wraps ValidationError).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input doesn't meet requirements. Used for early
/// validation before business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., unrecognized size token, bad amount).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
