// The legacy product service (adaptee). Its record shape and id scheme
// predate the customer repository contract and stay untouched; the adapter
// in `repositories::product_adapter` translates between the two worlds.

use rust_decimal::Decimal;

/// Native record shape of the legacy service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyProductRecord {
    pub product_id: i64,
    pub name: String,
    pub price: Decimal,
    pub has_delivery: bool,
}

/// In-process legacy store. Ids are max+1, seeded from 100, so the first
/// entry gets id 101.
#[derive(Debug, Default)]
pub struct LegacyProductService {
    products: Vec<LegacyProductRecord>,
}

impl LegacyProductService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Service preloaded with the historical demo inventory.
    pub fn seeded() -> Self {
        let demo = [
            ("Laptop", 50_000, true),
            ("Mouse", 1_500, false),
            ("Keyboard", 3_500, true),
            ("Monitor", 25_000, true),
        ];
        let mut service = Self::new();
        for (name, price, has_delivery) in demo {
            service.add_product_entry(name.to_string(), Decimal::from(price), has_delivery);
        }
        service
    }

    pub fn fetch_product(&self, code: i64) -> Option<&LegacyProductRecord> {
        self.products.iter().find(|p| p.product_id == code)
    }

    /// Append an entry and return its issued id.
    pub fn add_product_entry(&mut self, name: String, price: Decimal, has_delivery: bool) -> i64 {
        let new_id = self
            .products
            .iter()
            .map(|p| p.product_id)
            .max()
            .unwrap_or(100)
            + 1;
        self.products.push(LegacyProductRecord {
            product_id: new_id,
            name,
            price,
            has_delivery,
        });
        new_id
    }

    /// Remove an entry by code. `false` if the code is unknown.
    pub fn remove_entry(&mut self, code: i64) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.product_id != code);
        self.products.len() < before
    }

    pub fn total_entries(&self) -> usize {
        self.products.len()
    }

    pub fn all_products(&self) -> Vec<LegacyProductRecord> {
        self.products.clone()
    }
}
