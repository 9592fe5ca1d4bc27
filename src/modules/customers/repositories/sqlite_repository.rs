// SQL-store-backed backend.
//
// Constructed over a caller-owned pool; each operation runs one statement
// over a pool-scoped connection which is released on every exit path.
// Query failures are logged and swallowed into `None`/`false`/empty
// results, so callers cannot distinguish "empty" from "error" through the
// return value alone. `get_page` reloads the whole table and reuses the
// shared in-memory pipeline so its results match the list backend exactly.

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, error, warn};

use crate::core::error::Result;
use crate::core::observer::{ChangeEvent, ObserverRegistry, RepositoryObserver};
use crate::core::traits::repository::{CustomerRepository, Filter, SortField, SortSpec};

use super::super::models::{Customer, CustomerRow, ShortCustomer};
use super::query;

const SELECT_COLUMNS: &str = "SELECT customer_id, name, address, phone, contact_person FROM customers";

fn column_for(field: SortField) -> &'static str {
    match field {
        SortField::CustomerId => "customer_id",
        SortField::Name => "name",
        SortField::Address => "address",
        SortField::Phone => "phone",
        SortField::ContactPerson => "contact_person",
    }
}

fn order_clause(field: SortField, reverse: bool) -> String {
    let direction = if reverse { "DESC" } else { "ASC" };
    match field {
        // Case-insensitive ordering for text fields, matching the
        // in-memory comparator.
        SortField::CustomerId | SortField::Phone => {
            format!("{} {}", column_for(field), direction)
        }
        _ => format!("{} COLLATE NOCASE {}", column_for(field), direction),
    }
}

pub struct SqliteCustomerRepository {
    pool: SqlitePool,
    customers: Vec<Customer>,
    observers: ObserverRegistry,
}

impl SqliteCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            customers: Vec::new(),
            observers: ObserverRegistry::new(),
        }
    }

    /// Create the schema if needed and load the current table contents.
    pub async fn initialize(pool: SqlitePool) -> Result<Self> {
        let mut repo = Self::new(pool);
        repo.ensure_schema().await?;
        repo.load().await;
        Ok(repo)
    }

    /// Create the `customers` table if it does not exist.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS customers (
                customer_id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                address TEXT NOT NULL,
                phone TEXT NOT NULL,
                contact_person TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn fetch_rows(&self, order_by: &str) -> Result<Vec<CustomerRow>> {
        let statement = format!("{} ORDER BY {}", SELECT_COLUMNS, order_by);
        let rows: Vec<CustomerRow> = sqlx::query_as(&statement).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    fn replace_working_set(&mut self, rows: Vec<CustomerRow>) {
        self.customers.clear();
        for row in rows {
            match Customer::try_from(row) {
                Ok(customer) => self.customers.push(customer),
                Err(err) => warn!("skipping invalid stored record: {}", err),
            }
        }
    }

    async fn exists(&self, id: i64) -> bool {
        let found: std::result::Result<Option<i64>, sqlx::Error> =
            sqlx::query_scalar("SELECT customer_id FROM customers WHERE customer_id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await;
        match found {
            Ok(row) => row.is_some(),
            Err(err) => {
                error!("existence check for customer {} failed: {}", id, err);
                false
            }
        }
    }
}

#[async_trait]
impl CustomerRepository for SqliteCustomerRepository {
    async fn load(&mut self) {
        match self.fetch_rows("customer_id").await {
            Ok(rows) => self.replace_working_set(rows),
            Err(err) => error!("failed to load customers: {}", err),
        }
    }

    async fn persist(&mut self) {
        // Writes go straight to the store on every mutation.
        debug!("persist is a no-op for the SQL backend");
    }

    async fn get_by_id(&mut self, id: i64) -> Option<Customer> {
        let statement = format!("{} WHERE customer_id = ?", SELECT_COLUMNS);
        let row: std::result::Result<Option<CustomerRow>, sqlx::Error> =
            sqlx::query_as(&statement)
                .bind(id)
                .fetch_optional(&self.pool)
                .await;
        match row {
            Ok(Some(row)) => match Customer::try_from(row) {
                Ok(customer) => Some(customer),
                Err(err) => {
                    warn!("stored record {} failed validation: {}", id, err);
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                error!("failed to fetch customer {}: {}", id, err);
                None
            }
        }
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
        match self.fetch_rows(&order_clause(field, reverse)).await {
            Ok(rows) => {
                self.replace_working_set(rows);
                self.observers.notify(&ChangeEvent::Sorted { field, reverse });
            }
            Err(err) => error!("failed to sort customers by {}: {}", field, err),
        }
        Ok(())
    }

    async fn add(&mut self, customer: Customer) -> Result<bool> {
        let inserted: std::result::Result<i64, sqlx::Error> = sqlx::query_scalar(
            r#"
            INSERT INTO customers (name, address, phone, contact_person)
            VALUES (?, ?, ?, ?)
            RETURNING customer_id
            "#,
        )
        .bind(customer.name())
        .bind(customer.address())
        .bind(customer.phone())
        .bind(customer.contact_person())
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(id) => {
                let mut customer = customer;
                customer.set_id(id)?;
                self.customers.push(customer.clone());
                self.observers.notify(&ChangeEvent::Added { id, customer });
                Ok(true)
            }
            Err(err) => {
                error!("failed to insert customer: {}", err);
                Ok(false)
            }
        }
    }

    async fn replace_by_id(&mut self, id: i64, customer: Customer) -> Result<bool> {
        if !self.exists(id).await {
            return Ok(false);
        }
        let updated = sqlx::query(
            r#"
            UPDATE customers
            SET name = ?, address = ?, phone = ?, contact_person = ?
            WHERE customer_id = ?
            "#,
        )
        .bind(customer.name())
        .bind(customer.address())
        .bind(customer.phone())
        .bind(customer.contact_person())
        .bind(id)
        .execute(&self.pool)
        .await;

        match updated {
            Ok(_) => {
                let mut customer = customer;
                customer.set_id(id)?;
                if let Some(pos) = self.customers.iter().position(|c| c.id() == id) {
                    self.customers[pos] = customer.clone();
                }
                self.observers.notify(&ChangeEvent::Replaced { id, customer });
                Ok(true)
            }
            Err(err) => {
                error!("failed to update customer {}: {}", id, err);
                Ok(false)
            }
        }
    }

    async fn delete_by_id(&mut self, id: i64) -> bool {
        if !self.exists(id).await {
            return false;
        }
        let deleted = sqlx::query("DELETE FROM customers WHERE customer_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await;

        match deleted {
            Ok(_) => {
                self.customers.retain(|c| c.id() != id);
                self.observers.notify(&ChangeEvent::Deleted { id });
                true
            }
            Err(err) => {
                error!("failed to delete customer {}: {}", id, err);
                false
            }
        }
    }

    async fn count(&mut self, filter: Option<Filter>) -> usize {
        match filter {
            None => {
                let counted: std::result::Result<i64, sqlx::Error> =
                    sqlx::query_scalar("SELECT COUNT(*) FROM customers")
                        .fetch_one(&self.pool)
                        .await;
                match counted {
                    Ok(count) => count as usize,
                    Err(err) => {
                        error!("failed to count customers: {}", err);
                        self.customers.len()
                    }
                }
            }
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
