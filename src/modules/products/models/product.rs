use rust_decimal::Decimal;

/// Product record as the adapter exposes it. No declared validation; the
/// legacy service is the authority on its own data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
    pub has_delivery: bool,
}

impl Product {
    pub fn new(id: i64, name: impl Into<String>, price: Decimal, has_delivery: bool) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            has_delivery,
        }
    }

    pub fn to_short(&self) -> ProductShort {
        ProductShort {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let delivery = if self.has_delivery {
            "with delivery"
        } else {
            "no delivery"
        };
        write!(
            f,
            "ID: {}, Product: {}, Price: {}, {}",
            self.id, self.name, self.price, delivery
        )
    }
}

/// Short-form product listing entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductShort {
    pub id: i64,
    pub name: String,
    pub price: Decimal,
}

impl std::fmt::Display for ProductShort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID: {}, Product: {}, Price: {}", self.id, self.name, self.price)
    }
}

/// The product-specific attributes the Customer shape cannot carry.
///
/// The adapter stores these structurally next to each translated record;
/// their presence is what marks a record as "really a product".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductAttrs {
    pub price: Decimal,
    pub has_delivery: bool,
}
