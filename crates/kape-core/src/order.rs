//! # Order Aggregate
//!
//! The transient shopping cart: line items plus an optional customer,
//! producing derived totals.
//!
//! ## Totals Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  LineItem.total = (price_for(size) + Σ add-on) × quantity   │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  subtotal = Σ item totals                                   │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  customer_discount = tier % of subtotal (walk-in → 0)       │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  total = subtotal - customer_discount [- loyalty_discount]  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The loyalty discount variant takes a caller-supplied amount: how many
//! points to redeem is decided at checkout, outside the pricing functions.
//! An order is never persisted directly; checkout turns it into a
//! `TransactionRecord`.

use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{AddOn, Product, Size};
use crate::customer::Customer;
use crate::error::{ValidationError, ValidationResult};
use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// One product entry in an order: product snapshot, size, quantity, and
/// any add-ons. Owned exclusively by its order; mutable only by
/// appending add-ons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub product: Product,
    pub size: Size,
    quantity: u32,
    add_ons: Vec<AddOn>,
}

impl LineItem {
    /// Creates a line item. Quantity must be positive.
    pub fn new(product: Product, size: Size, quantity: u32) -> ValidationResult<LineItem> {
        if quantity == 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            });
        }

        Ok(LineItem {
            product,
            size,
            quantity,
            add_ons: Vec::new(),
        })
    }

    /// Appends an add-on.
    pub fn add_addon(&mut self, add_on: AddOn) {
        self.add_ons.push(add_on);
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Read-only view of the attached add-ons.
    pub fn add_ons(&self) -> &[AddOn] {
        &self.add_ons
    }

    /// Price of one unit: sized product price plus all add-ons.
    pub fn unit_price(&self) -> Money {
        let add_ons: Money = self.add_ons.iter().map(|a| a.price).sum();
        self.product.price_for(self.size) + add_ons
    }

    /// Line total. The quantity multiplies the combined unit + add-on
    /// price, not just the base.
    ///
    /// ## Example
    /// ```rust
    /// use kape_core::catalog::{AddOn, BeverageCategory, Product, Size};
    /// use kape_core::money::Money;
    /// use kape_core::order::LineItem;
    ///
    /// let latte = Product::new("IC-02", "Iced Latte", Money::from_pesos(145),
    ///     BeverageCategory::Cold).unwrap();
    /// let mut item = LineItem::new(latte, Size::Medium, 4).unwrap();
    /// item.add_addon(AddOn::new("Extra Shot", Money::from_pesos(25)).unwrap());
    ///
    /// // (170 + 25) × 4 = 780
    /// assert_eq!(item.total(), Money::from_pesos(780));
    /// ```
    pub fn total(&self) -> Money {
        self.unit_price() * self.quantity
    }

    /// Multi-line human-readable description, as shown on receipts.
    pub fn describe(&self) -> String {
        let mut out = format!("{} ({})", self.product.name, self.size);

        if !self.add_ons.is_empty() {
            let names: Vec<&str> = self.add_ons.iter().map(|a| a.name.as_str()).collect();
            let _ = write!(out, "\n + {}", names.join(", "));
        }

        let _ = write!(out, "\nQuantity: {}", self.quantity);
        let _ = write!(out, "\nType: {}", self.product.category);
        let _ = write!(out, "\nProduct ID: {}", self.product.code);
        let _ = write!(out, "\nTotal Price: {}", self.total());

        out
    }
}

// =============================================================================
// Order
// =============================================================================

/// A cart of line items with an optional customer.
///
/// ## Lifecycle
/// Created empty, mutated through `add_item`/`remove_item`/`clear`, read
/// via derived totals. An empty order prices to zero everywhere; refusing
/// to check out an empty cart is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    order_id: String,
    order_date: DateTime<Utc>,
    /// `None` = walk-in.
    customer: Option<Customer>,
    items: Vec<LineItem>,
}

impl Order {
    /// Creates an empty walk-in order with a fresh order id.
    pub fn new() -> Order {
        Order {
            order_id: generate_order_id(),
            order_date: Utc::now(),
            customer: None,
            items: Vec::new(),
        }
    }

    /// Creates an empty order for a registered customer.
    pub fn for_customer(customer: Customer) -> Order {
        let mut order = Order::new();
        order.customer = Some(customer);
        order
    }

    #[inline]
    pub fn order_id(&self) -> &str {
        &self.order_id
    }

    #[inline]
    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    pub fn customer(&self) -> Option<&Customer> {
        self.customer.as_ref()
    }

    /// Mutable customer access, used by checkout to update the ledger.
    pub fn customer_mut(&mut self) -> Option<&mut Customer> {
        self.customer.as_mut()
    }

    /// Attaches or replaces the customer. `None` makes it a walk-in order.
    pub fn set_customer(&mut self, customer: Option<Customer>) {
        self.customer = customer;
    }

    /// Appends a line item.
    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    /// Removes the first line item equal to `item`. Removing an item not
    /// present is a no-op.
    pub fn remove_item(&mut self, item: &LineItem) {
        if let Some(pos) = self.items.iter().position(|i| i == item) {
            self.items.remove(pos);
        }
    }

    /// Removes all line items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Read-only view of the line items; mutation goes through the
    /// aggregate's own operations.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line-item totals.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.total()).sum()
    }

    /// The customer-tier discount on the current subtotal. Walk-in
    /// orders get zero.
    pub fn customer_discount(&self) -> Money {
        match &self.customer {
            Some(customer) => customer.tier.discount_on(self.subtotal()),
            None => Money::zero(),
        }
    }

    /// Final total after the customer discount.
    pub fn total(&self) -> Money {
        self.subtotal() - self.customer_discount()
    }

    /// Final total after the customer discount and an explicit loyalty
    /// discount. The caller pre-computes the loyalty amount via the
    /// ledger; this function does not consult the ledger itself.
    pub fn total_with_loyalty(&self, loyalty_discount: Money) -> Money {
        self.total() - loyalty_discount
    }

    /// Multi-line order summary for display and debugging.
    pub fn summary(&self) -> String {
        let mut out = format!("Order ID: {}\n", self.order_id);
        let _ = write!(
            out,
            "Date: {}\n",
            self.order_date.format("%Y-%m-%d %H:%M:%S")
        );
        let customer_name = self
            .customer
            .as_ref()
            .map_or("Walk-in", |c| c.name.as_str());
        let _ = write!(out, "Customer: {}\n", customer_name);
        let _ = write!(out, "Items: {}\n", self.items.len());

        out.push_str("\n--- ORDER ITEMS ---\n");
        for item in &self.items {
            let _ = write!(out, "{}\n", item.describe());
        }

        out.push_str("\n--- TOTALS ---\n");
        let _ = write!(out, "Subtotal: {}\n", self.subtotal());

        if let Some(customer) = &self.customer {
            let discount = self.customer_discount();
            if !discount.is_zero() {
                let _ = write!(out, "Discount ({}): -{}\n", customer.tier, discount);
            }
        }

        let _ = write!(out, "TOTAL: {}\n", self.total());
        out
    }
}

impl Default for Order {
    fn default() -> Self {
        Order::new()
    }
}

// =============================================================================
// Order ID Generation
// =============================================================================

static ORDER_SEQ: AtomicU64 = AtomicU64::new(1);

/// Generates an order id in format `ORD-YYYYMMDD-NNNN`.
///
/// The date prefix plus a process-wide monotonic sequence makes ids unique
/// per session and sortable by creation time for display.
fn generate_order_id() -> String {
    let date_part = Utc::now().format("%Y%m%d");
    let seq = ORDER_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("ORD-{}-{:04}", date_part, seq)
}

// =============================================================================
// Unit Tests
// =============================================================================
