mod contact_info;
mod customer;
mod row;

pub use contact_info::ContactInfo;
pub use customer::{Customer, ShortCustomer};
pub use row::CustomerRow;
