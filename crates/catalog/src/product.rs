use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, Sku};

/// Entity: a stocked product.
///
/// Keyed in the registry by its sku. Quantity is non-negative by construction
/// (`u32`); parsing user text into the integer is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    sku: Sku,
    quantity: u32,
    location: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        sku: impl Into<Sku>,
        quantity: u32,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            quantity,
            location: location.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Replace the stocked quantity, leaving every other field untouched.
    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
    }

    /// Case-insensitive name match, used by registry search.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

impl Entity for Product {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}

impl core::fmt::Display for Product {
    /// Inventory report line format.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Name: {}, SKU: {}, Quantity: {}, Location: {}",
            self.name, self.sku, self.quantity, self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_produces_report_line() {
        let product = Product::new("Bolt", "B1", 5, "A1");
        assert_eq!(
            product.to_string(),
            "Name: Bolt, SKU: B1, Quantity: 5, Location: A1"
        );
    }

    #[test]
    fn set_quantity_touches_only_quantity() {
        let mut product = Product::new("Bolt", "B1", 5, "A1");
        product.set_quantity(12);

        assert_eq!(product.quantity(), 12);
        assert_eq!(product.name(), "Bolt");
        assert_eq!(product.sku().as_str(), "B1");
        assert_eq!(product.location(), "A1");
    }

    #[test]
    fn entity_id_is_the_sku() {
        let product = Product::new("Bolt", "B1", 5, "A1");
        assert_eq!(Entity::id(&product), &Sku::new("B1"));
    }

    #[test]
    fn name_matches_ignores_case() {
        let product = Product::new("Widget", "W1", 3, "C2");
        assert!(product.name_matches("widget"));
        assert!(product.name_matches("WIDGET"));
        assert!(!product.name_matches("gadget"));
    }

    #[test]
    fn serializes_with_transparent_sku() {
        let product = Product::new("Bolt", "B1", 5, "A1");
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Bolt",
                "sku": "B1",
                "quantity": 5,
                "location": "A1",
            })
        );
    }
}
