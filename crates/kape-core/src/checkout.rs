//! # Checkout Settlement
//!
//! Turns a finalized order plus a payment into a [`Settlement`]: the
//! transaction record, the change due, and the loyalty movements.
//!
//! ## Protocol
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  settle(order, points_to_redeem, payment)                   │
//! │                                                             │
//! │  1. Reject empty orders                                     │
//! │  2. Validate the redemption intent and price it ONCE        │
//! │     (discount and redemption cannot diverge)                │
//! │  3. total = subtotal - tier discount - loyalty discount     │
//! │  4. Reject payment < total (no partial payment)             │
//! │  5. Redeem points, then accrue on the FINAL total           │
//! │  6. Snapshot a TransactionRecord; change = payment - total  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Persistence is the caller's half of the protocol: hand the record to
//! the transaction log and save the order's customer (with the updated
//! ledger) back to the customer store.

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::order::Order;
use crate::transaction::{TransactionRecord, WALK_IN_CUSTOMER_ID, WALK_IN_CUSTOMER_NAME};

// =============================================================================
// Settlement
// =============================================================================

/// The outcome of a successful checkout.
#[derive(Debug, Clone, PartialEq)]
pub struct Settlement {
    /// The snapshot to append to the transaction log.
    pub record: TransactionRecord,
    /// Change due back to the customer.
    pub change: Money,
    pub points_earned: u32,
    pub points_redeemed: u32,
}

/// Settles an order against a tendered payment.
///
/// `points_to_redeem` is the single validated redemption intent: the
/// loyalty discount applied to the total and the points actually deducted
/// both derive from it, so they move in lock-step. Pass 0 to skip
/// redemption.
///
/// On success the order's embedded customer ledger has been updated
/// (redeemed, then accrued on the final total); on any error nothing has
/// been mutated.
///
/// ## Errors
/// - [`CoreError::EmptyOrder`] - no line items
/// - [`CoreError::InvalidRedemption`] - intent the ledger cannot honor,
///   including a discount worth more than the remaining total
/// - [`CoreError::InsufficientPayment`] - payment below the amount due
pub fn settle(order: &mut Order, points_to_redeem: u32, payment: Money) -> CoreResult<Settlement> {
    if order.is_empty() {
        return Err(CoreError::EmptyOrder);
    }

    let subtotal = order.subtotal();
    let customer_discount = order.customer_discount();

    // Validate the redemption intent before touching anything.
    let loyalty_discount = if points_to_redeem > 0 {
        let ledger = order.customer().and_then(|c| c.loyalty.as_ref());
        let balance = ledger.map_or(0, |l| l.points());

        match ledger {
            Some(ledger) if ledger.can_redeem(points_to_redeem) => {
                let discount = ledger.discount_value_for(points_to_redeem as i64);
                // A discount exceeding the remaining total would drive it
                // negative; the intent as a whole is invalid.
                if discount > subtotal - customer_discount {
                    return Err(CoreError::InvalidRedemption {
                        requested: points_to_redeem,
                        balance,
                    });
                }
                discount
            }
            _ => {
                return Err(CoreError::InvalidRedemption {
                    requested: points_to_redeem,
                    balance,
                })
            }
        }
    } else {
        Money::zero()
    };

    let total = subtotal - customer_discount - loyalty_discount;

    if payment < total {
        return Err(CoreError::InsufficientPayment {
            tendered: payment,
            due: total,
        });
    }

    // Intent validated; apply the ledger movements.
    let (points_redeemed, points_earned) = match order.customer_mut().and_then(|c| c.loyalty.as_mut())
    {
        Some(ledger) => {
            let redeemed = if points_to_redeem > 0 {
                let ok = ledger.redeem(points_to_redeem);
                debug_assert!(ok, "redeem must succeed after can_redeem");
                points_to_redeem
            } else {
                0
            };

            // Points are earned on what was actually paid, not the subtotal.
            let earned = ledger.earn(total)?;
            (redeemed, earned)
        }
        None => (0, 0),
    };

    let (customer_id, customer_name) = match order.customer() {
        Some(c) => (c.id.clone(), c.name.clone()),
        None => (
            WALK_IN_CUSTOMER_ID.to_string(),
            WALK_IN_CUSTOMER_NAME.to_string(),
        ),
    };

    let record = TransactionRecord {
        timestamp: chrono::Utc::now(),
        order_id: order.order_id().to_string(),
        customer_id,
        customer_name,
        amount: total,
        discount_amount: customer_discount,
        loyalty_redeemed: loyalty_discount,
        points_earned,
        points_redeemed,
    };

    Ok(Settlement {
        record,
        change: payment - total,
        points_earned,
        points_redeemed,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
