// Filter/sort decorator.
//
// Wraps any repository contract implementation and implements the same
// contract, so decorators stack. Stored predicates AND together with any
// call-time predicate; a call-time sort wins entirely over the stored
// default (key and direction travel together, never merged field by
// field).

use std::sync::Arc;

use async_trait::async_trait;

use crate::core::error::Result;
use crate::core::observer::RepositoryObserver;
use crate::core::traits::repository::{CustomerRepository, Filter, SortField, SortSpec};

use super::super::models::{Customer, ShortCustomer};

pub struct FilteredRepository<R> {
    inner: R,
    filters: Vec<Filter>,
    default_sort: Option<SortSpec>,
}

impl<R: CustomerRepository> FilteredRepository<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            filters: Vec::new(),
            default_sort: None,
        }
    }

    /// Add a predicate to the accumulated set. Chainable.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set the default sort used when a call supplies none. Chainable.
    pub fn with_sorting(mut self, sort: SortSpec) -> Self {
        self.default_sort = Some(sort);
        self
    }

    /// Drop all accumulated predicates. Chainable.
    pub fn cleared_filters(mut self) -> Self {
        self.filters.clear();
        self
    }

    pub fn inner_mut(&mut self) -> &mut R {
        &mut self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// AND the stored predicates with a call-time one.
    ///
    /// Returns `None` when there is nothing to filter by, so the wrapped
    /// backend still sees an unfiltered call and can take optimized paths
    /// (e.g. server-side counting).
    fn combined_filter(&self, extra: Option<Filter>) -> Option<Filter> {
        if self.filters.is_empty() {
            return extra;
        }
        let stored = self.filters.clone();
        Some(Arc::new(move |customer: &Customer| {
            stored.iter().all(|accept| accept(customer))
                && extra.as_ref().map_or(true, |accept| accept(customer))
        }))
    }
}

#[async_trait]
impl<R: CustomerRepository> CustomerRepository for FilteredRepository<R> {
    async fn load(&mut self) {
        self.inner.load().await;
    }

    async fn persist(&mut self) {
        self.inner.persist().await;
    }

    async fn get_by_id(&mut self, id: i64) -> Option<Customer> {
        self.inner.get_by_id(id).await
    }

    async fn get_page(
        &mut self,
        page: usize,
        page_size: usize,
        filter: Option<Filter>,
        sort: Option<SortSpec>,
    ) -> Vec<ShortCustomer> {
        let combined = self.combined_filter(filter);
        let effective_sort = sort.or(self.default_sort);
        self.inner
            .get_page(page, page_size, combined, effective_sort)
            .await
    }

    async fn sort_by_field(&mut self, field: SortField, reverse: bool) -> Result<()> {
        self.inner.sort_by_field(field, reverse).await
    }

    async fn add(&mut self, customer: Customer) -> Result<bool> {
        self.inner.add(customer).await
    }

    async fn replace_by_id(&mut self, id: i64, customer: Customer) -> Result<bool> {
        self.inner.replace_by_id(id, customer).await
    }

    async fn delete_by_id(&mut self, id: i64) -> bool {
        self.inner.delete_by_id(id).await
    }

    async fn count(&mut self, filter: Option<Filter>) -> usize {
        let combined = self.combined_filter(filter);
        self.inner.count(combined).await
    }

    async fn get_all(&mut self) -> Vec<Customer> {
        self.inner.get_all().await
    }

    fn add_observer(&mut self, observer: Arc<dyn RepositoryObserver>) {
        self.inner.add_observer(observer);
    }

    fn remove_observer(&mut self, observer: &Arc<dyn RepositoryObserver>) {
        self.inner.remove_observer(observer);
    }
}
