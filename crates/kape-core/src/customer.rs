//! # Customer Model
//!
//! Customer tiers and their discount rates.
//!
//! ## Discount Rule
//! `discount_on(subtotal)` returns the discount *portion*, never the
//! discounted total. Rates: Regular 0%, Senior 20%, PWD 20%.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::loyalty::LoyaltyLedger;
use crate::money::Money;

// =============================================================================
// Customer Tier
// =============================================================================

/// A customer's discount classification. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustomerTier {
    Regular,
    Senior,
    #[serde(rename = "PWD")]
    Pwd,
}

impl CustomerTier {
    /// Discount rate in basis points.
    pub const fn discount_bps(&self) -> u32 {
        match self {
            CustomerTier::Regular => 0,
            CustomerTier::Senior => 2000,
            CustomerTier::Pwd => 2000,
        }
    }

    /// The discount portion of `subtotal` for this tier.
    ///
    /// Pure function; `subtotal` derives from summed line-item totals and
    /// is therefore non-negative.
    ///
    /// ## Example
    /// ```rust
    /// use kape_core::customer::CustomerTier;
    /// use kape_core::money::Money;
    ///
    /// let discount = CustomerTier::Senior.discount_on(Money::from_pesos(780));
    /// assert_eq!(discount, Money::from_pesos(156));
    /// ```
    pub fn discount_on(&self, subtotal: Money) -> Money {
        subtotal.percent_of(self.discount_bps())
    }

    /// Stored/display label.
    pub const fn label(&self) -> &'static str {
        match self {
            CustomerTier::Regular => "Regular",
            CustomerTier::Senior => "Senior",
            CustomerTier::Pwd => "PWD",
        }
    }

    /// Maps a stored label back to a tier. Unrecognized or absent labels
    /// default to `Regular`, matching the customer store contract.
    pub fn from_label(label: &str) -> CustomerTier {
        match label {
            "Senior" => CustomerTier::Senior,
            "PWD" => CustomerTier::Pwd,
            _ => CustomerTier::Regular,
        }
    }
}

impl fmt::Display for CustomerTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A registered customer.
///
/// The customer store owns customer lifetime; an `Order` holds a working
/// copy whose updated ledger is persisted back after checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique id, `C` + zero-padded 5 digits (e.g. `C00001`).
    pub id: String,

    pub name: String,

    /// Tier tag; determines the discount rate and is immutable.
    pub tier: CustomerTier,

    pub registered_at: DateTime<Utc>,

    /// Loyalty ledger, if the customer is enrolled.
    pub loyalty: Option<LoyaltyLedger>,
}

impl Customer {
    /// Registers a new customer with a fresh, empty loyalty ledger.
    pub fn new(id: impl Into<String>, name: impl Into<String>, tier: CustomerTier) -> Customer {
        let id = id.into();
        let loyalty = Some(LoyaltyLedger::new(id.clone()));

        Customer {
            id,
            name: name.into(),
            tier,
            registered_at: Utc::now(),
            loyalty,
        }
    }

    /// Rehydrates a customer from stored fields.
    pub fn from_parts(
        id: impl Into<String>,
        name: impl Into<String>,
        tier: CustomerTier,
        registered_at: DateTime<Utc>,
        loyalty_points: u32,
    ) -> Customer {
        let id = id.into();
        let loyalty = Some(LoyaltyLedger::with_points(id.clone(), loyalty_points));

        Customer {
            id,
            name: name.into(),
            tier,
            registered_at,
            loyalty,
        }
    }

    /// Current loyalty points balance (0 when not enrolled).
    pub fn loyalty_points(&self) -> u32 {
        self.loyalty.as_ref().map_or(0, |l| l.points())
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - ID: {}", self.name, self.tier, self.id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
