use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::observer::RepositoryObserver;
use crate::modules::customers::models::{Customer, ShortCustomer};

/// Predicate applied to full customer records during `get_page`/`count`.
///
/// Shared so decorators can clone and recombine predicates cheaply.
pub type Filter = Arc<dyn Fn(&Customer) -> bool + Send + Sync>;

/// Fields a repository can order by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    CustomerId,
    Name,
    Address,
    Phone,
    ContactPerson,
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SortField::CustomerId => "customer_id",
            SortField::Name => "name",
            SortField::Address => "address",
            SortField::Phone => "phone",
            SortField::ContactPerson => "contact_person",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "customer_id" => Ok(SortField::CustomerId),
            "name" => Ok(SortField::Name),
            "address" => Ok(SortField::Address),
            "phone" => Ok(SortField::Phone),
            "contact_person" => Ok(SortField::ContactPerson),
            _ => Err(format!("Invalid sort field: {}", s)),
        }
    }
}

/// A sort key plus direction. Direction always follows the key it was
/// supplied with; keys and directions from different sources are never
/// merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub reverse: bool,
}

impl SortSpec {
    pub fn ascending(field: SortField) -> Self {
        Self {
            field,
            reverse: false,
        }
    }

    pub fn descending(field: SortField) -> Self {
        Self {
            field,
            reverse: true,
        }
    }
}

/// The repository contract every backend and every decorator implements.
///
/// Query semantics are fixed across backends: `get_page` reloads backing
/// data, filters, sorts (default: ascending id), then slices the requested
/// page. Not-found never raises; backend failures are logged by the
/// backend and degraded to `None`/`false`/empty results.
#[async_trait]
pub trait CustomerRepository: Send {
    /// (Re)populate in-memory state from the backend's source of truth.
    ///
    /// Idempotent. Records that fail validation are skipped with a logged
    /// warning; a single bad record never aborts the rest of the load.
    async fn load(&mut self);

    /// Flush in-memory state to the source of truth.
    ///
    /// Backends with immediate-write semantics no-op. Failures are logged,
    /// never raised.
    async fn persist(&mut self);

    /// Fetch one full customer record, or `None` if the id is unknown.
    async fn get_by_id(&mut self, id: i64) -> Option<Customer>;

    /// Fetch one page of short-form records.
    ///
    /// `page` and `page_size` are 1-based; an out-of-range page yields an
    /// empty vector, never an error.
    async fn get_page(
        &mut self,
        page: usize,
        page_size: usize,
        filter: Option<Filter>,
        sort: Option<SortSpec>,
    ) -> Vec<ShortCustomer>;

    /// Reorder persisted state by `field` where order is meaningful.
    ///
    /// Returns `Err(AppError::Usage)` for field/backend combinations that
    /// do not support sorting.
    async fn sort_by_field(&mut self, field: SortField, reverse: bool) -> Result<()>;

    /// Add a customer, assigning a backend-issued id.
    ///
    /// `Ok(false)` on persistence failure (already logged). Only the
    /// product adapter returns `Err`, when called without product
    /// attributes.
    async fn add(&mut self, customer: Customer) -> Result<bool>;

    /// Replace the record stored under `id`; the stored id wins over the
    /// incoming one. `Ok(false)` if the id does not exist.
    async fn replace_by_id(&mut self, id: i64, customer: Customer) -> Result<bool>;

    /// Delete the record stored under `id`. `false` if it does not exist.
    async fn delete_by_id(&mut self, id: i64) -> bool;

    /// Count records matching `filter`.
    ///
    /// Without a filter, backends that support server-side counting
    /// delegate to it; filtered counts run in memory.
    async fn count(&mut self, filter: Option<Filter>) -> usize;

    /// Snapshot of all full records. Safe to mutate without affecting the
    /// repository.
    async fn get_all(&mut self) -> Vec<Customer>;

    /// Register an observer for mutation events. Registering the same
    /// handle twice has the effect of registering it once.
    fn add_observer(&mut self, observer: Arc<dyn RepositoryObserver>);

    /// Unregister an observer. Removing a non-registered handle is a no-op.
    fn remove_observer(&mut self, observer: &Arc<dyn RepositoryObserver>);
}
