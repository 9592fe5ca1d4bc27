use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::core::error::AppError;

use super::Customer;

/// Persisted shape of a customer record.
///
/// This is the exact field set written to the JSON/YAML data file and read
/// from the `customers` table. Converting a row back into a [`Customer`]
/// revalidates every field, so corrupt stored data surfaces as a
/// per-record validation error the backends can skip.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CustomerRow {
    pub customer_id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub contact_person: String,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = AppError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        Customer::new(
            row.customer_id,
            &row.name,
            &row.address,
            &row.phone,
            &row.contact_person,
        )
    }
}

impl From<&Customer> for CustomerRow {
    fn from(customer: &Customer) -> Self {
        Self {
            customer_id: customer.id(),
            name: customer.name().to_string(),
            address: customer.address().to_string(),
            phone: customer.phone().to_string(),
            contact_person: customer.contact_person().to_string(),
        }
    }
}
