// File-persisted list backend.
//
// Holds the working set in memory and mirrors it to a JSON or YAML file
// when a path is configured. Ids are issued monotonically starting at 1.
// Write failures roll the in-memory mutation back and surface as a `false`
// result, per the contract's failure policy.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use crate::core::error::Result;
use crate::core::observer::{ChangeEvent, ObserverRegistry, RepositoryObserver};
use crate::core::traits::repository::{CustomerRepository, Filter, SortField, SortSpec};

use super::super::models::{Customer, CustomerRow, ShortCustomer};
use super::query;

/// On-disk encoding of the persisted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    #[default]
    Json,
    Yaml,
}

impl std::str::FromStr for FileFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(FileFormat::Json),
            "yaml" | "yml" => Ok(FileFormat::Yaml),
            _ => Err(format!("Invalid file format: {}", s)),
        }
    }
}

pub struct FileCustomerRepository {
    path: Option<PathBuf>,
    format: FileFormat,
    customers: Vec<Customer>,
    observers: ObserverRegistry,
}

impl FileCustomerRepository {
    /// Backend persisted at `path`. Call [`load`](CustomerRepository::load)
    /// to pick up existing data.
    pub fn new(path: impl Into<PathBuf>, format: FileFormat) -> Self {
        Self {
            path: Some(path.into()),
            format,
            customers: Vec::new(),
            observers: ObserverRegistry::new(),
        }
    }

    /// Purely in-memory backend; `persist` becomes a no-op.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            format: FileFormat::default(),
            customers: Vec::new(),
            observers: ObserverRegistry::new(),
        }
    }

    fn next_id(&self) -> i64 {
        self.customers.iter().map(Customer::id).max().unwrap_or(0) + 1
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.customers.iter().position(|c| c.id() == id)
    }

    async fn read_rows(&self, path: &Path) -> Result<Vec<CustomerRow>> {
        let raw = tokio::fs::read_to_string(path).await?;
        let rows = match self.format {
            FileFormat::Json => serde_json::from_str(&raw)?,
            FileFormat::Yaml => serde_yaml::from_str(&raw)?,
        };
        Ok(rows)
    }

    async fn write_rows(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let rows: Vec<CustomerRow> = self.customers.iter().map(CustomerRow::from).collect();
        let raw = match self.format {
            FileFormat::Json => serde_json::to_string_pretty(&rows)?,
            FileFormat::Yaml => serde_yaml::to_string(&rows)?,
        };
        tokio::fs::write(path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl CustomerRepository for FileCustomerRepository {
    async fn load(&mut self) {
        let Some(path) = self.path.clone() else {
            return;
        };
        if !path.exists() {
            debug!("data file {} does not exist yet", path.display());
            return;
        }
        match self.read_rows(&path).await {
            Ok(rows) => {
                self.customers.clear();
                for row in rows {
                    match Customer::try_from(row) {
                        Ok(customer) => self.customers.push(customer),
                        Err(err) => warn!("skipping invalid stored record: {}", err),
                    }
                }
            }
            Err(err) => error!("failed to read {}: {}", path.display(), err),
        }
    }

    async fn persist(&mut self) {
        if let Err(err) = self.write_rows().await {
            error!("failed to persist customers: {}", err);
        }
    }

    async fn get_by_id(&mut self, id: i64) -> Option<Customer> {
        self.customers.iter().find(|c| c.id() == id).cloned()
    }

    async fn get_page(
        &mut self,
        page: usize,
        page_size: usize,
        filter: Option<Filter>,
        sort: Option<SortSpec>,
    ) -> Vec<ShortCustomer> {
        self.load().await;
        query::select_page(self.customers.clone(), page, page_size, filter.as_ref(), sort)
    }

    async fn sort_by_field(&mut self, field: SortField, reverse: bool) -> Result<()> {
        query::sort_customers(&mut self.customers, Some(SortSpec { field, reverse }));
        self.persist().await;
        self.observers.notify(&ChangeEvent::Sorted { field, reverse });
        Ok(())
    }

    async fn add(&mut self, customer: Customer) -> Result<bool> {
        let mut customer = customer;
        let id = self.next_id();
        customer.set_id(id)?;
        self.customers.push(customer.clone());
        if let Err(err) = self.write_rows().await {
            error!("add of customer {} rolled back, persist failed: {}", id, err);
            self.customers.pop();
            return Ok(false);
        }
        self.observers.notify(&ChangeEvent::Added { id, customer });
        Ok(true)
    }

    async fn replace_by_id(&mut self, id: i64, customer: Customer) -> Result<bool> {
        let Some(pos) = self.position(id) else {
            return Ok(false);
        };
        let mut customer = customer;
        customer.set_id(id)?;
        let previous = std::mem::replace(&mut self.customers[pos], customer.clone());
        if let Err(err) = self.write_rows().await {
            error!("replace of customer {} rolled back, persist failed: {}", id, err);
            self.customers[pos] = previous;
            return Ok(false);
        }
        self.observers.notify(&ChangeEvent::Replaced { id, customer });
        Ok(true)
    }

    async fn delete_by_id(&mut self, id: i64) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        let removed = self.customers.remove(pos);
        if let Err(err) = self.write_rows().await {
            error!("delete of customer {} rolled back, persist failed: {}", id, err);
            self.customers.insert(pos, removed);
            return false;
        }
        self.observers.notify(&ChangeEvent::Deleted { id });
        true
    }

    async fn count(&mut self, filter: Option<Filter>) -> usize {
        match filter {
            None => self.customers.len(),
            Some(accept) => self.customers.iter().filter(|c| accept(c)).count(),
        }
    }

    async fn get_all(&mut self) -> Vec<Customer> {
        self.customers.clone()
    }

    fn add_observer(&mut self, observer: Arc<dyn RepositoryObserver>) {
        self.observers.add(observer);
    }

    fn remove_observer(&mut self, observer: &Arc<dyn RepositoryObserver>) {
        self.observers.remove(observer);
    }
}
