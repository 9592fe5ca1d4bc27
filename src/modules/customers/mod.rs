// Customers module

pub mod filters;
pub mod models;
pub mod repositories;

pub use models::{ContactInfo, Customer, CustomerRow, ShortCustomer};
pub use repositories::{
    FileCustomerRepository, FileFormat, FilteredRepository, SqliteCustomerRepository,
};
