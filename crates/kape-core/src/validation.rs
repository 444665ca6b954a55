//! # Validation Module
//!
//! Input validation for caller-supplied values, run before business logic.
//! Pricing and discount functions themselves are total over their domain;
//! these checks catch bad till input early with a typed error.

use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name: non-empty, at most 100 characters.
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates a raw size token against the six recognized forms.
///
/// This is the strict surface; the catalog also offers
/// [`Size::parse_lenient`](crate::catalog::Size::parse_lenient), which
/// silently falls back to Small as the till historically did.
pub fn validate_size_token(token: &str) -> ValidationResult<()> {
    token.parse::<crate::catalog::Size>().map(|_| ())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an item quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_ITEM_QUANTITY (999)
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_ITEM_QUANTITY as i64,
        });
    }

    Ok(())
}

/// Validates a catalog or add-on price.
///
/// Zero is allowed (promo items); negative is not.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a tendered payment amount: must be positive.
pub fn validate_payment_amount(payment: Money) -> ValidationResult<()> {
    if payment <= Money::zero() {
        return Err(ValidationError::MustBePositive {
            field: "payment amount".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Maria Santos").is_ok());
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(200)).is_err());
    }

    #[test]
    fn test_validate_size_token() {
        assert!(validate_size_token("M").is_ok());
        assert!(validate_size_token("large").is_ok());
        assert!(validate_size_token("venti").is_err());
        assert!(validate_size_token("").is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(1_000).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero()).is_ok());
        assert!(validate_price(Money::from_pesos(95)).is_ok());
        assert!(validate_price(Money::from_pesos(-1)).is_err());
    }

    #[test]
    fn test_validate_payment_amount() {
        assert!(validate_payment_amount(Money::from_pesos(100)).is_ok());
        assert!(validate_payment_amount(Money::zero()).is_err());
        assert!(validate_payment_amount(Money::from_pesos(-5)).is_err());
    }
}
