//! Ready-made predicates for the decorator and for `get_page` callers.

use std::sync::Arc;

use regex::Regex;

use crate::core::traits::repository::Filter;

use super::models::Customer;

/// Case-insensitive substring match on the customer name.
pub fn name_contains(substring: &str) -> Filter {
    let needle = substring.to_lowercase();
    Arc::new(move |customer: &Customer| customer.name().to_lowercase().contains(&needle))
}

/// Case-insensitive prefix match on the customer name.
pub fn name_starts_with(prefix: &str) -> Filter {
    let needle = prefix.to_lowercase();
    Arc::new(move |customer: &Customer| customer.name().to_lowercase().starts_with(&needle))
}

/// Case-insensitive substring match on the address.
pub fn address_contains(fragment: &str) -> Filter {
    let needle = fragment.to_lowercase();
    Arc::new(move |customer: &Customer| customer.address().to_lowercase().contains(&needle))
}

/// Match the raw phone string against a compiled pattern.
pub fn phone_matches(pattern: Regex) -> Filter {
    Arc::new(move |customer: &Customer| pattern.is_match(customer.phone()))
}

/// Logical AND over a set of predicates.
pub fn all_of(filters: Vec<Filter>) -> Filter {
    Arc::new(move |customer: &Customer| filters.iter().all(|accept| accept(customer)))
}
