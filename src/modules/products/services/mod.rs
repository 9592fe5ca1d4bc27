mod legacy_service;

pub use legacy_service::{LegacyProductRecord, LegacyProductService};
