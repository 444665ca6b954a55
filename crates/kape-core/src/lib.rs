//! # kape-core: Pure Business Logic for Kape POS
//!
//! This crate is the heart of the till: the polymorphic product/customer
//! pricing model, the order aggregate, the loyalty ledger, and checkout
//! settlement, all as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  ★ kape-core (THIS CRATE) ★                 │
//! │                                                             │
//! │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐            │
//! │  │ catalog │ │customer │ │ loyalty │ │  order  │            │
//! │  │ Product │ │  Tier   │ │ Ledger  │ │LineItem │            │
//! │  │  Size   │ │Discount │ │ Points  │ │ Totals  │            │
//! │  └─────────┘ └─────────┘ └─────────┘ └─────────┘            │
//! │       └──────────┴───────────┴────────────┘                 │
//! │                       │                                     │
//! │                 ┌─────▼─────┐   ┌─────────────┐             │
//! │                 │ checkout  │──►│ transaction │             │
//! │                 │  settle   │   │   record    │             │
//! │                 └───────────┘   └─────────────┘             │
//! │                                                             │
//! │  NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS            │
//! └─────────────────────────────────────────────────────────────┘
//!                         │
//!                 ┌───────▼────────┐
//!                 │   kape-store   │  customer document,
//!                 │  (file layer)  │  transaction log
//!                 └────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer centavo arithmetic (no floats!)
//! - [`catalog`] - Products, sizes, and the surcharge table
//! - [`customer`] - Customer tiers and discount rates
//! - [`loyalty`] - Points accrual and redemption rules
//! - [`order`] - The order aggregate and its derived totals
//! - [`checkout`] - Settlement of an order against a payment
//! - [`transaction`] - The completed-sale snapshot and its wire format
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation for till entries
//!
//! ## Example
//!
//! ```rust
//! use kape_core::catalog::{BeverageCategory, Product, Size};
//! use kape_core::customer::{Customer, CustomerTier};
//! use kape_core::money::Money;
//! use kape_core::order::{LineItem, Order};
//!
//! let brew = Product::new("HC-01", "House Brew", Money::from_pesos(95),
//!     BeverageCategory::Hot).unwrap();
//!
//! let senior = Customer::new("C00001", "Maria Santos", CustomerTier::Senior);
//! let mut order = Order::for_customer(senior);
//! order.add_item(LineItem::new(brew, Size::Medium, 2).unwrap());
//!
//! assert_eq!(order.subtotal(), Money::from_pesos(230));
//! assert_eq!(order.customer_discount(), Money::from_pesos(46));
//! assert_eq!(order.total(), Money::from_pesos(184));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod checkout;
pub mod customer;
pub mod error;
pub mod loyalty;
pub mod money;
pub mod order;
pub mod transaction;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{AddOn, BeverageCategory, Product, Size};
pub use checkout::{settle, Settlement};
pub use customer::{Customer, CustomerTier};
pub use error::{CoreError, CoreResult, ValidationError};
pub use loyalty::LoyaltyLedger;
pub use money::Money;
pub use order::{LineItem, Order};
pub use transaction::{TransactionRecord, WALK_IN_CUSTOMER_ID, WALK_IN_CUSTOMER_NAME};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line item.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g., typing 100 instead of 10).
pub const MAX_ITEM_QUANTITY: u32 = 999;
