use serde::{Deserialize, Serialize};

/// A live catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier, immutable once created.
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(with = "crate::serde_price")]
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// Every client-supplied field of a [`Product`], already validated.
///
/// Only [`validate_product`](crate::validate_product) builds one from
/// untrusted input, so holding a `ProductPayload` means the payload rules
/// have passed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub name: String,
    pub description: String,
    #[serde(with = "crate::serde_price")]
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

impl Product {
    pub(crate) fn from_payload(id: String, payload: ProductPayload) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            category: payload.category,
            in_stock: payload.in_stock,
        }
    }

    /// Overwrite every mutable field. Nothing from the previous record survives
    /// except the id.
    pub(crate) fn replace_with(&mut self, payload: ProductPayload) {
        self.name = payload.name;
        self.description = payload.description;
        self.price = payload.price;
        self.category = payload.category;
        self.in_stock = payload.in_stock;
    }
}

/// The three records every fresh store starts with.
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".into(),
            name: "Laptop".into(),
            description: "High-performance laptop with 16GB RAM".into(),
            price: 1200.0,
            category: "electronics".into(),
            in_stock: true,
        },
        Product {
            id: "2".into(),
            name: "Smartphone".into(),
            description: "Latest model with 128GB storage".into(),
            price: 800.0,
            category: "electronics".into(),
            in_stock: true,
        },
        Product {
            id: "3".into(),
            name: "Coffee Maker".into(),
            description: "Programmable coffee maker with timer".into(),
            price: 50.0,
            category: "kitchen".into(),
            in_stock: false,
        },
    ]
}
