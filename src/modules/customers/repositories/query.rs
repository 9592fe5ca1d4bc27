// In-memory query pipeline shared by every backend.
//
// The contract fixes the order filter -> sort -> paginate; backends that
// hold their data elsewhere (SQL store, legacy service) reload into memory
// and run the same pipeline so results match the list backend exactly.

use std::cmp::Ordering;

use crate::core::traits::repository::{Filter, SortField, SortSpec};

use super::super::models::{Customer, ShortCustomer};

/// Compare two customers on one field. Text fields compare
/// case-insensitively; phone numbers compare as raw strings.
pub(crate) fn compare_by(field: SortField, a: &Customer, b: &Customer) -> Ordering {
    match field {
        SortField::CustomerId => a.id().cmp(&b.id()),
        SortField::Name => a.name().to_lowercase().cmp(&b.name().to_lowercase()),
        SortField::Address => a.address().to_lowercase().cmp(&b.address().to_lowercase()),
        SortField::Phone => a.phone().cmp(b.phone()),
        SortField::ContactPerson => a
            .contact_person()
            .to_lowercase()
            .cmp(&b.contact_person().to_lowercase()),
    }
}

/// Stable sort; the default when no sort is supplied is ascending id.
pub(crate) fn sort_customers(customers: &mut [Customer], sort: Option<SortSpec>) {
    let spec = sort.unwrap_or(SortSpec::ascending(SortField::CustomerId));
    customers.sort_by(|a, b| {
        let ord = compare_by(spec.field, a, b);
        if spec.reverse {
            ord.reverse()
        } else {
            ord
        }
    });
}

pub(crate) fn filter_customers(customers: Vec<Customer>, filter: Option<&Filter>) -> Vec<Customer> {
    match filter {
        None => customers,
        Some(accept) => customers.into_iter().filter(|c| accept(c)).collect(),
    }
}

/// Slice out one 1-based page. Out-of-range pages yield an empty vector.
pub(crate) fn page_slice<T>(items: Vec<T>, page: usize, page_size: usize) -> Vec<T> {
    if page == 0 || page_size == 0 {
        return Vec::new();
    }
    items
        .into_iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .collect()
}

/// Full pipeline: filter, sort, paginate, project to the short form.
pub(crate) fn select_page(
    customers: Vec<Customer>,
    page: usize,
    page_size: usize,
    filter: Option<&Filter>,
    sort: Option<SortSpec>,
) -> Vec<ShortCustomer> {
    let mut matched = filter_customers(customers, filter);
    sort_customers(&mut matched, sort);
    page_slice(matched, page, page_size)
        .iter()
        .map(Customer::to_short)
        .collect()
}
