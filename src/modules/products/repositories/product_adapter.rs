// Adapter backend exposing the legacy product service through the
// customer repository contract.
//
// Each legacy record is translated into a Customer using fixed sentinel
// values for the fields the legacy shape lacks; the product-specific
// attributes travel in a structural side slot (`ProductAttrs`), never as
// probed dynamic state. The trait-level `add`/`replace_by_id` cannot carry
// those attributes and fail with a usage error; `add_product` and
// `replace_product` are the real mutation paths.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::core::error::{AppError, Result};
use crate::core::observer::{ChangeEvent, ObserverRegistry, RepositoryObserver};
use crate::core::traits::repository::{CustomerRepository, Filter, SortField, SortSpec};
use crate::modules::customers::models::{Customer, ShortCustomer};
use crate::modules::customers::repositories::query;

use super::super::models::{Product, ProductAttrs};
use super::super::services::LegacyProductService;

/// Sentinel phone for translated products; passes customer validation.
pub const PRODUCT_PHONE: &str = "+70000000000";
const PRODUCT_ADDRESS: &str = "Warehouse, bay 1";
const PRODUCT_CONTACT: &str = "Supplier";

struct ProductRecord {
    customer: Customer,
    attrs: ProductAttrs,
}

pub struct ProductRepositoryAdapter {
    service: LegacyProductService,
    records: Vec<ProductRecord>,
    observers: ObserverRegistry,
}

impl ProductRepositoryAdapter {
    pub fn new(service: LegacyProductService) -> Self {
        let mut adapter = Self {
            service,
            records: Vec::new(),
            observers: ObserverRegistry::new(),
        };
        adapter.refresh();
        adapter
    }

    /// Rebuild the translated view from the legacy service. Legacy records
    /// that cannot be expressed as customers are skipped with a warning.
    fn refresh(&mut self) {
        self.records.clear();
        for product in self.service.all_products() {
            match Customer::new(
                product.product_id,
                &product.name,
                PRODUCT_ADDRESS,
                PRODUCT_PHONE,
                PRODUCT_CONTACT,
            ) {
                Ok(customer) => self.records.push(ProductRecord {
                    customer,
                    attrs: ProductAttrs {
                        price: product.price,
                        has_delivery: product.has_delivery,
                    },
                }),
                Err(err) => warn!(
                    "skipping legacy product {}: {}",
                    product.product_id, err
                ),
            }
        }
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|r| r.customer.id() == id)
    }

    /// Add a product through the contract's customer shape plus its
    /// product attributes.
    pub fn add_product(&mut self, customer: Customer, attrs: ProductAttrs) -> Result<bool> {
        let id = self.service.add_product_entry(
            customer.name().to_string(),
            attrs.price,
            attrs.has_delivery,
        );
        let mut customer = customer;
        customer.set_id(id)?;
        customer.set_phone(PRODUCT_PHONE)?;
        self.records.push(ProductRecord {
            customer: customer.clone(),
            attrs,
        });
        self.observers.notify(&ChangeEvent::Added { id, customer });
        Ok(true)
    }

    /// Replace the translated record under `id`. Touches only the
    /// translated view; the legacy entry keeps its original data.
    pub fn replace_product(
        &mut self,
        id: i64,
        customer: Customer,
        attrs: ProductAttrs,
    ) -> Result<bool> {
        let Some(pos) = self.position(id) else {
            return Ok(false);
        };
        let mut customer = customer;
        customer.set_id(id)?;
        customer.set_phone(PRODUCT_PHONE)?;
        self.records[pos] = ProductRecord {
            customer: customer.clone(),
            attrs,
        };
        self.observers.notify(&ChangeEvent::Replaced { id, customer });
        Ok(true)
    }

    /// The record under `id` in its native product shape.
    pub fn product_by_id(&self, id: i64) -> Option<Product> {
        self.position(id).map(|pos| {
            let record = &self.records[pos];
            Product::new(
                record.customer.id(),
                record.customer.name(),
                record.attrs.price,
                record.attrs.has_delivery,
            )
        })
    }

    pub fn service(&self) -> &LegacyProductService {
        &self.service
    }

    fn short_entry(record: &ProductRecord) -> Option<ShortCustomer> {
        let listing_name = format!("{} ({})", record.customer.name(), record.attrs.price);
        match ShortCustomer::new(
            record.customer.id(),
            &listing_name,
            PRODUCT_PHONE,
            record.customer.contact_person(),
        ) {
            Ok(short) => Some(short),
            Err(err) => {
                warn!(
                    "cannot render product {} as a listing entry: {}",
                    record.customer.id(),
                    err
                );
                None
            }
        }
    }
}

#[async_trait]
impl CustomerRepository for ProductRepositoryAdapter {
    async fn load(&mut self) {
        self.refresh();
    }

    async fn persist(&mut self) {
        // The legacy service owns durability; nothing to flush here.
    }

    async fn get_by_id(&mut self, id: i64) -> Option<Customer> {
        self.position(id).map(|pos| self.records[pos].customer.clone())
    }

    async fn get_page(
        &mut self,
        page: usize,
        page_size: usize,
        filter: Option<Filter>,
        sort: Option<SortSpec>,
    ) -> Vec<ShortCustomer> {
        let mut matched: Vec<&ProductRecord> = self
            .records
            .iter()
            .filter(|r| filter.as_ref().map_or(true, |accept| accept(&r.customer)))
            .collect();
        let spec = sort.unwrap_or(SortSpec::ascending(SortField::CustomerId));
        matched.sort_by(|a, b| {
            let ord = query::compare_by(spec.field, &a.customer, &b.customer);
            if spec.reverse {
                ord.reverse()
            } else {
                ord
            }
        });
        query::page_slice(matched, page, page_size)
            .into_iter()
            .filter_map(Self::short_entry)
            .collect()
    }

    async fn sort_by_field(&mut self, field: SortField, reverse: bool) -> Result<()> {
        match field {
            SortField::CustomerId | SortField::Name => {
                self.records.sort_by(|a, b| {
                    let ord = query::compare_by(field, &a.customer, &b.customer);
                    if reverse {
                        ord.reverse()
                    } else {
                        ord
                    }
                });
                self.observers.notify(&ChangeEvent::Sorted { field, reverse });
                Ok(())
            }
            _ => Err(AppError::usage(format!(
                "field {} is not sortable on the product adapter",
                field
            ))),
        }
    }

    async fn add(&mut self, _customer: Customer) -> Result<bool> {
        Err(AppError::usage(
            "adding a product requires product attributes; use add_product",
        ))
    }

    async fn replace_by_id(&mut self, _id: i64, _customer: Customer) -> Result<bool> {
        Err(AppError::usage(
            "replacing a product requires product attributes; use replace_product",
        ))
    }

    async fn delete_by_id(&mut self, id: i64) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        self.records.remove(pos);
        // Dual write: the translated view and the legacy store must stay
        // consistent. There is no atomicity between the two removals; a
        // failed second write leaves the stores out of sync.
        if !self.service.remove_entry(id) {
            error!("legacy service had no entry for deleted product {}", id);
        }
        self.observers.notify(&ChangeEvent::Deleted { id });
        true
    }

    async fn count(&mut self, filter: Option<Filter>) -> usize {
        match filter {
            None => self.records.len(),
            Some(accept) => self
                .records
                .iter()
                .filter(|r| accept(&r.customer))
                .count(),
        }
    }

    async fn get_all(&mut self) -> Vec<Customer> {
        self.records.iter().map(|r| r.customer.clone()).collect()
    }

    fn add_observer(&mut self, observer: Arc<dyn RepositoryObserver>) {
        self.observers.add(observer);
    }

    fn remove_observer(&mut self, observer: &Arc<dyn RepositoryObserver>) {
        self.observers.remove(observer);
    }
}
