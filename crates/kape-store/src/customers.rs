//! # Customer Store
//!
//! Durable keyed storage of customers, including embedded ledger state,
//! as a single JSON document.
//!
//! ## Document Shape
//! ```json
//! [
//!   {
//!     "customerId": "C00001",
//!     "name": "Maria Santos",
//!     "customerType": "Senior",
//!     "loyaltyPoints": 47,
//!     "dateRegistered": "2026-01-15T09:30:00Z"
//!   }
//! ]
//! ```
//!
//! `customerType` is one of `"Regular"`, `"Senior"`, `"PWD"`; anything
//! else (including absence) reads back as Regular. Saving a customer
//! removes any record with the same key, appends the updated record, and
//! rewrites the whole document — acceptable for a single-till shop.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use kape_core::{Customer, CustomerTier};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Stored Record
// =============================================================================

/// Flat serialization shape for one customer. The domain `Customer` is a
/// tier-tagged type with an embedded ledger; this record is what lands
/// in the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CustomerRecord {
    customer_id: String,
    name: String,
    #[serde(default)]
    customer_type: String,
    #[serde(default)]
    loyalty_points: u32,
    date_registered: DateTime<Utc>,
}

impl From<&Customer> for CustomerRecord {
    fn from(customer: &Customer) -> Self {
        CustomerRecord {
            customer_id: customer.id.clone(),
            name: customer.name.clone(),
            customer_type: customer.tier.label().to_string(),
            loyalty_points: customer.loyalty_points(),
            date_registered: customer.registered_at,
        }
    }
}

impl From<CustomerRecord> for Customer {
    fn from(record: CustomerRecord) -> Self {
        Customer::from_parts(
            record.customer_id,
            record.name,
            CustomerTier::from_label(&record.customer_type),
            record.date_registered,
            record.loyalty_points,
        )
    }
}

// =============================================================================
// Customer Store
// =============================================================================

/// File-backed customer collection, keyed by customer id.
///
/// Non-reentrant: load-all / mutate / save-all with no locking, under
/// the single-user, single-process assumption.
#[derive(Debug, Clone)]
pub struct CustomerStore {
    path: PathBuf,
}

impl CustomerStore {
    /// Creates a store over the given document path. The file need not
    /// exist yet; it is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> CustomerStore {
        CustomerStore { path: path.into() }
    }

    /// The backing document path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every customer.
    ///
    /// A missing or unreadable file degrades to an empty collection with
    /// a diagnostic; it never fails the caller.
    pub fn load_all(&self) -> Vec<Customer> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "customer store unavailable, starting empty");
                return Vec::new();
            }
        };

        let records: Vec<CustomerRecord> = match serde_json::from_str(&json) {
            Ok(records) => records,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "customer document unparsable, starting empty");
                return Vec::new();
            }
        };

        let customers: Vec<Customer> = records.into_iter().map(Customer::from).collect();
        debug!(count = customers.len(), "loaded customers");
        customers
    }

    /// Loads one customer by id.
    pub fn load(&self, customer_id: &str) -> Option<Customer> {
        self.load_all().into_iter().find(|c| c.id == customer_id)
    }

    /// Saves a customer: removes any existing record with the same id,
    /// appends the updated record, rewrites the whole document.
    pub fn save(&self, customer: &Customer) -> StoreResult<()> {
        let mut customers = self.load_all();
        customers.retain(|c| c.id != customer.id);
        customers.push(customer.clone());

        let records: Vec<CustomerRecord> = customers.iter().map(CustomerRecord::from).collect();
        let json = serde_json::to_string_pretty(&records)?;

        fs::write(&self.path, json).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;

        debug!(customer_id = %customer.id, "saved customer");
        Ok(())
    }

    /// Generates the next customer id.
    ///
    /// Scans existing ids of the form `C` + 5 digits, takes the largest
    /// numeric suffix, and emits `max + 1` zero-padded to 5 digits. The
    /// first id ever issued is `C00001`.
    pub fn next_customer_id(&self) -> String {
        let max_id = self
            .load_all()
            .iter()
            .filter_map(|c| c.id.strip_prefix('C')?.parse::<u32>().ok())
            .max()
            .unwrap_or(0);

        format!("C{:05}", max_id + 1)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kape_core::Money;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> CustomerStore {
        CustomerStore::new(dir.path().join("customers.json"))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.load_all().is_empty());
        assert!(store.load("C00001").is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let mut customer = Customer::new("C00001", "Maria Santos", CustomerTier::Senior);
        customer.loyalty.as_mut().unwrap().earn(Money::from_pesos(2_350)).unwrap();
        store.save(&customer).unwrap();

        let loaded = store.load("C00001").unwrap();
        assert_eq!(loaded.id, customer.id);
        assert_eq!(loaded.name, customer.name);
        assert_eq!(loaded.tier, CustomerTier::Senior);
        assert_eq!(loaded.loyalty_points(), 47);
    }

    #[test]
    fn test_save_replaces_existing_record() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        let customer = Customer::new("C00001", "Maria Santos", CustomerTier::Senior);
        store.save(&customer).unwrap();

        let mut updated = customer.clone();
        updated.loyalty.as_mut().unwrap().earn(Money::from_pesos(100)).unwrap();
        store.save(&updated).unwrap();

        let all = store.load_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].loyalty_points(), 2);
    }

    #[test]
    fn test_next_customer_id_sequence() {
        let dir = tempdir().unwrap();
        let store = store_in(&dir);

        // Empty store issues C00001
        assert_eq!(store.next_customer_id(), "C00001");

        for i in 1..=3 {
            let id = format!("C{:05}", i);
            store
                .save(&Customer::new(id, format!("Customer {}", i), CustomerTier::Regular))
                .unwrap();
        }

        // Existing C00001..C00003 → next is C00004
        assert_eq!(store.next_customer_id(), "C00004");
    }

    #[test]
    fn test_unrecognized_tier_defaults_to_regular() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("customers.json");
        fs::write(
            &path,
            r#"[{"customerId":"C00009","name":"Ana","customerType":"Student",
                 "loyaltyPoints":5,"dateRegistered":"2026-01-15T09:30:00Z"}]"#,
        )
        .unwrap();

        let store = CustomerStore::new(&path);
        let loaded = store.load("C00009").unwrap();
        assert_eq!(loaded.tier, CustomerTier::Regular);
        assert_eq!(loaded.loyalty_points(), 5);
    }

    #[test]
    fn test_corrupt_document_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("customers.json");
        fs::write(&path, "this is not json").unwrap();

        let store = CustomerStore::new(&path);
        assert!(store.load_all().is_empty());
    }
}
