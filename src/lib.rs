//! Clientele — customer records behind a uniform repository contract.
//!
//! The crate provides one contract ([`CustomerRepository`]) with three
//! backends — a file-persisted list, a SQLite-backed store, and an adapter
//! over a legacy product service — plus a stacking filter/sort decorator
//! and synchronous change notification for view layers. Query semantics
//! (filter, then sort, then paginate) are identical across backends.
//!
//! HTTP routing, response rendering and the console entry point are
//! external collaborators: they construct a backend, optionally wrap it in
//! [`FilteredRepository`](modules::customers::FilteredRepository), wire an
//! observer, and drive everything through the contract.

pub mod config;
pub mod core;
pub mod modules;

pub use crate::core::error::{AppError, Result};
pub use crate::core::observer::{ChangeEvent, ObserverRegistry, RepositoryObserver};
pub use crate::core::traits::repository::{CustomerRepository, Filter, SortField, SortSpec};
pub use modules::customers;
pub use modules::products;
