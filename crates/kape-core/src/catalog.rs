//! # Product Catalog Model
//!
//! Beverage products, cup sizes, and the size-surcharge pricing table.
//!
//! ## Pricing Rule
//! ```text
//! price(size) = base_price + surcharge(category, size)
//!
//! ┌──────────┬───────┬────────┬───────┐
//! │ Category │ Small │ Medium │ Large │
//! ├──────────┼───────┼────────┼───────┤
//! │ Hot      │  +0   │  +20   │  +40  │
//! │ Cold     │  +0   │  +25   │  +45  │
//! │ Blended  │  +0   │  +30   │  +50  │
//! └──────────┴───────┴────────┴───────┘
//! ```
//!
//! Products are created once at catalog load and immutable thereafter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;

// =============================================================================
// Size
// =============================================================================

/// A cup size. Parsed case-insensitively from the six recognized tokens:
/// `S`/`SMALL`, `M`/`MEDIUM`, `L`/`LARGE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Parses a size token, returning `None` for unrecognized input.
    pub fn parse(token: &str) -> Option<Size> {
        match token.trim().to_ascii_uppercase().as_str() {
            "S" | "SMALL" => Some(Size::Small),
            "M" | "MEDIUM" => Some(Size::Medium),
            "L" | "LARGE" => Some(Size::Large),
            _ => None,
        }
    }

    /// Parses a size token, falling back to `Small` (no surcharge) for
    /// unrecognized input.
    ///
    /// The till historically treated an unknown token as the base price
    /// rather than rejecting it; callers that want a hard error use
    /// [`Size::from_str`] instead.
    pub fn parse_lenient(token: &str) -> Size {
        Size::parse(token).unwrap_or(Size::Small)
    }

    /// Short display label.
    pub const fn label(&self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }
}

impl FromStr for Size {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Size::parse(s).ok_or_else(|| ValidationError::InvalidFormat {
            field: "size".to_string(),
            reason: format!("'{}' is not one of S/SMALL, M/MEDIUM, L/LARGE", s),
        })
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Beverage Category
// =============================================================================

/// The beverage category, which selects the surcharge row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeverageCategory {
    Hot,
    Cold,
    Blended,
}

impl BeverageCategory {
    /// The size surcharge for this category, in pesos.
    pub const fn surcharge(&self, size: Size) -> Money {
        let pesos = match (self, size) {
            (_, Size::Small) => 0,
            (BeverageCategory::Hot, Size::Medium) => 20,
            (BeverageCategory::Hot, Size::Large) => 40,
            (BeverageCategory::Cold, Size::Medium) => 25,
            (BeverageCategory::Cold, Size::Large) => 45,
            (BeverageCategory::Blended, Size::Medium) => 30,
            (BeverageCategory::Blended, Size::Large) => 50,
        };
        Money::from_pesos(pesos)
    }

    /// Display label, as shown on receipts.
    pub const fn label(&self) -> &'static str {
        match self {
            BeverageCategory::Hot => "Hot",
            BeverageCategory::Cold => "Iced",
            BeverageCategory::Blended => "Blended",
        }
    }
}

impl fmt::Display for BeverageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog product.
///
/// ## Invariants
/// - `base_price >= 0` (checked by [`Product::new`])
/// - Immutable once created; the catalog owns product lifetime and line
///   items hold cloned snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog id (business key, e.g. `"HC-01"`).
    pub code: String,

    /// Display name shown on receipts.
    pub name: String,

    /// Price of a Small serving.
    pub base_price: Money,

    /// Category, which determines the surcharge row.
    pub category: BeverageCategory,
}

impl Product {
    /// Creates a catalog product, rejecting negative base prices.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        base_price: Money,
        category: BeverageCategory,
    ) -> Result<Product, ValidationError> {
        if base_price.is_negative() {
            return Err(ValidationError::MustBeNonNegative {
                field: "base_price".to_string(),
            });
        }

        Ok(Product {
            code: code.into(),
            name: name.into(),
            base_price,
            category,
        })
    }

    /// The price of this product at the given size.
    ///
    /// Pure function of the fixed base price and the surcharge table.
    ///
    /// ## Example
    /// ```rust
    /// use kape_core::catalog::{BeverageCategory, Product, Size};
    /// use kape_core::money::Money;
    ///
    /// let brew = Product::new("HC-01", "House Brew", Money::from_pesos(95),
    ///     BeverageCategory::Hot).unwrap();
    /// assert_eq!(brew.price_for(Size::Medium), Money::from_pesos(115));
    /// ```
    #[inline]
    pub fn price_for(&self, size: Size) -> Money {
        self.base_price + self.category.surcharge(size)
    }
}

// =============================================================================
// Add-On
// =============================================================================

/// An extra attached to a line item (extra shot, whipped cream, ...).
/// Immutable value object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOn {
    pub name: String,
    pub price: Money,
}

impl AddOn {
    /// Creates an add-on, rejecting negative prices.
    pub fn new(name: impl Into<String>, price: Money) -> Result<AddOn, ValidationError> {
        if price.is_negative() {
            return Err(ValidationError::MustBeNonNegative {
                field: "price".to_string(),
            });
        }

        Ok(AddOn {
            name: name.into(),
            price,
        })
    }
}

impl fmt::Display for AddOn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.price)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn hot(base: i64) -> Product {
        Product::new("HC-01", "House Brew", Money::from_pesos(base), BeverageCategory::Hot)
            .unwrap()
    }

    #[test]
    fn test_size_parsing() {
        assert_eq!(Size::parse("S"), Some(Size::Small));
        assert_eq!(Size::parse("small"), Some(Size::Small));
        assert_eq!(Size::parse(" M "), Some(Size::Medium));
        assert_eq!(Size::parse("MEDIUM"), Some(Size::Medium));
        assert_eq!(Size::parse("l"), Some(Size::Large));
        assert_eq!(Size::parse("Large"), Some(Size::Large));
        assert_eq!(Size::parse("venti"), None);
    }

    #[test]
    fn test_lenient_parse_falls_back_to_small() {
        assert_eq!(Size::parse_lenient("XL"), Size::Small);
        assert_eq!(Size::parse_lenient(""), Size::Small);
        assert_eq!(Size::parse_lenient("grande"), Size::Small);
    }

    #[test]
    fn test_strict_parse_rejects_unknown_token() {
        assert!("venti".parse::<Size>().is_err());
        assert_eq!("L".parse::<Size>().unwrap(), Size::Large);
    }

    #[test]
    fn test_surcharge_table() {
        use BeverageCategory::*;

        let table = [
            (Hot, Size::Small, 0),
            (Hot, Size::Medium, 20),
            (Hot, Size::Large, 40),
            (Cold, Size::Small, 0),
            (Cold, Size::Medium, 25),
            (Cold, Size::Large, 45),
            (Blended, Size::Small, 0),
            (Blended, Size::Medium, 30),
            (Blended, Size::Large, 50),
        ];

        for (category, size, pesos) in table {
            assert_eq!(
                category.surcharge(size),
                Money::from_pesos(pesos),
                "{:?} {:?}",
                category,
                size
            );
        }
    }

    #[test]
    fn test_hot_beverage_medium_price() {
        // Scenario: base ₱95, Medium → ₱115
        let brew = hot(95);
        assert_eq!(brew.price_for(Size::Medium), Money::from_pesos(115));
        assert_eq!(brew.price_for(Size::Small), Money::from_pesos(95));
        assert_eq!(brew.price_for(Size::Large), Money::from_pesos(135));
    }

    #[test]
    fn test_cold_beverage_medium_price() {
        let latte = Product::new(
            "IC-02",
            "Iced Latte",
            Money::from_pesos(145),
            BeverageCategory::Cold,
        )
        .unwrap();
        assert_eq!(latte.price_for(Size::Medium), Money::from_pesos(170));
    }

    #[test]
    fn test_negative_base_price_rejected() {
        let err = Product::new(
            "HC-02",
            "Broken",
            Money::from_pesos(-1),
            BeverageCategory::Hot,
        );
        assert!(err.is_err());
    }

    #[test]
    fn test_addon_rejects_negative_price() {
        assert!(AddOn::new("Extra Shot", Money::from_pesos(25)).is_ok());
        assert!(AddOn::new("Bad", Money::from_pesos(-5)).is_err());
    }
}
