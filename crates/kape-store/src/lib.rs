//! # kape-store: File-Backed Persistence for Kape POS
//!
//! This crate owns all file operations: the customer document store and
//! the append-only transaction log. Everything above it (pricing,
//! loyalty, checkout) lives in `kape-core` and never touches a file.
//!
//! ## Storage Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  customers.json      whole-document JSON, keyed by id       │
//! │  transactions.txt    append-only pipe-delimited lines       │
//! │                                                             │
//! │  Load → everything into memory                              │
//! │  Save → rewrite the whole file (customers)                  │
//! │         append one line (transactions)                      │
//! │                                                             │
//! │  Single user, single process, no locking. Concurrent        │
//! │  writers would race; out of scope for a one-till shop.      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Checkout Protocol (caller's half)
//! ```rust,no_run
//! use kape_core::{settle, Money, Order};
//! use kape_store::{CustomerStore, TransactionLog};
//!
//! # fn demo(mut order: Order) -> Result<(), Box<dyn std::error::Error>> {
//! let customers = CustomerStore::new("customers.json");
//! let log = TransactionLog::new("transactions.txt");
//!
//! let settlement = settle(&mut order, 0, Money::from_pesos(700))?;
//! log.append(&settlement.record)?;
//! if let Some(customer) = order.customer() {
//!     customers.save(customer)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod customers;
pub mod error;
pub mod transactions;

pub use customers::CustomerStore;
pub use error::{StoreError, StoreResult};
pub use transactions::TransactionLog;
