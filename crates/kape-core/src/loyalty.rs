//! # Loyalty Ledger
//!
//! Points balance with accrual and redemption rules.
//!
//! ## The Earn/Redeem Asymmetry
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  EARN:   1 point per ₱50 spent, floor                       │
//! │          earn(₱624.00) → +12 points                         │
//! │                                                             │
//! │  REDEEM: only in blocks of 10 points, each worth ₱50        │
//! │          redeem(40) → -40 points, worth 4 × ₱50 = ₱200      │
//! │                                                             │
//! │  Points accrue in singles but leave in tens; the floor at   │
//! │  each step is what the "points to next reward" display      │
//! │  depends on, so neither may be changed.                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A rejected redemption is a boolean result, not an error: callers must
//! branch on the return value. Only a negative accrual amount is an error.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Centavos spent per point earned (₱50).
const CENTAVOS_PER_POINT: i64 = 5_000;

/// Points per redemption block.
const REDEEM_BLOCK: u32 = 10;

/// Peso value of one redemption block (₱50).
const BLOCK_VALUE_PESOS: i64 = 50;

// =============================================================================
// Loyalty Ledger
// =============================================================================

/// A customer's points balance.
///
/// ## Invariants
/// - `points` is never negative (enforced by `u32` and the mutation API;
///   there is no direct setter)
/// - Belongs to exactly one customer, by id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyLedger {
    customer_id: String,
    points: u32,
}

impl LoyaltyLedger {
    /// Creates an empty ledger for a customer.
    pub fn new(customer_id: impl Into<String>) -> LoyaltyLedger {
        LoyaltyLedger {
            customer_id: customer_id.into(),
            points: 0,
        }
    }

    /// Rehydrates a ledger with an existing balance.
    pub fn with_points(customer_id: impl Into<String>, points: u32) -> LoyaltyLedger {
        LoyaltyLedger {
            customer_id: customer_id.into(),
            points,
        }
    }

    /// The customer this ledger belongs to.
    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    /// Current points balance.
    #[inline]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Accrues points for an amount spent: 1 point per ₱50, floored.
    ///
    /// Returns the number of points earned.
    ///
    /// ## Errors
    /// `CoreError::InvalidAmount` if `amount_spent` is negative. The balance
    /// is left unchanged in that case.
    pub fn earn(&mut self, amount_spent: Money) -> CoreResult<u32> {
        if amount_spent.is_negative() {
            return Err(CoreError::InvalidAmount(amount_spent));
        }

        let earned = (amount_spent.centavos() / CENTAVOS_PER_POINT) as u32;
        self.points += earned;
        Ok(earned)
    }

    /// Redeems `n` points.
    ///
    /// Returns `false` without mutating the balance unless `n` is a
    /// positive multiple of 10 no greater than the current balance.
    #[must_use]
    pub fn redeem(&mut self, n: u32) -> bool {
        if !self.can_redeem(n) {
            return false;
        }

        self.points -= n;
        true
    }

    /// Pure predicate: can `n` points be redeemed right now?
    #[inline]
    pub fn can_redeem(&self, n: u32) -> bool {
        n > 0 && n % REDEEM_BLOCK == 0 && n <= self.points
    }

    /// The peso value of redeeming `n` points: ₱50 per complete block of
    /// 10. Returns zero for negative `n`. Does not validate `n` against
    /// the current balance.
    ///
    /// ## Example
    /// ```rust
    /// use kape_core::loyalty::LoyaltyLedger;
    /// use kape_core::money::Money;
    ///
    /// let ledger = LoyaltyLedger::new("C00001");
    /// assert_eq!(ledger.discount_value_for(40), Money::from_pesos(200));
    /// // Incomplete blocks are worth nothing
    /// assert_eq!(ledger.discount_value_for(25), Money::from_pesos(100));
    /// ```
    pub fn discount_value_for(&self, n: i64) -> Money {
        if n < 0 {
            return Money::zero();
        }

        Money::from_pesos((n / REDEEM_BLOCK as i64) * BLOCK_VALUE_PESOS)
    }

    /// The largest redeemable amount at the current balance: the balance
    /// floored to a multiple of 10.
    #[inline]
    pub fn max_redeemable(&self) -> u32 {
        (self.points / REDEEM_BLOCK) * REDEEM_BLOCK
    }

    /// Points still needed to reach the next redemption block.
    ///
    /// With 47 points, `max_redeemable` is 40 and the next block starts at
    /// 50, so 3 more points are needed.
    #[inline]
    pub fn points_to_next_reward(&self) -> u32 {
        (self.max_redeemable() + REDEEM_BLOCK) - self.points
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
