use std::collections::BTreeMap;

use tracing::{debug, warn};

use stockroom_catalog::{Product, Supplier};
use stockroom_core::{RegistryError, RegistryResult, Sku, SupplierName};

/// Authoritative store for product and supplier entities.
///
/// Owns exactly two mappings: sku → [`Product`] and name → [`Supplier`].
/// Readers get references for display; no other component holds a competing
/// copy. Both mappings are ordered, so search, filtering, and reports are
/// deterministic in sku/name order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Warehouse {
    products: BTreeMap<Sku, Product>,
    suppliers: BTreeMap<SupplierName, Supplier>,
}

impl Warehouse {
    pub fn new() -> Self {
        Self::default()
    }

    // Product management

    /// Insert a product, replacing any prior entry under the same sku.
    ///
    /// Replace semantics, not merge: the returned value is the entry that was
    /// displaced, if any.
    pub fn add_product(&mut self, product: Product) -> Option<Product> {
        debug!(sku = %product.sku(), quantity = product.quantity(), "adding product");
        self.products.insert(product.sku().clone(), product)
    }

    /// Remove a product, returning it if it was present.
    ///
    /// An absent sku is an answer, not a failure.
    pub fn remove_product(&mut self, sku: &Sku) -> Option<Product> {
        let removed = self.products.remove(sku);
        if removed.is_some() {
            debug!(%sku, "removed product");
        }
        removed
    }

    pub fn product(&self, sku: &Sku) -> Option<&Product> {
        self.products.get(sku)
    }

    /// Replace the quantity of the product under `sku`, leaving every other
    /// field as it was.
    pub fn update_product_quantity(&mut self, sku: &Sku, quantity: u32) -> RegistryResult<()> {
        match self.products.get_mut(sku) {
            Some(product) => {
                product.set_quantity(quantity);
                debug!(%sku, quantity, "updated product quantity");
                Ok(())
            }
            None => {
                warn!(%sku, "quantity update for unknown sku");
                Err(RegistryError::not_found())
            }
        }
    }

    // Supplier management

    /// Insert a supplier, keyed by name.
    ///
    /// Re-registering an existing name replaces the record but inherits the
    /// prior entry's order history (prior records first). The displaced entry,
    /// if any, is returned.
    pub fn add_supplier(&mut self, mut supplier: Supplier) -> Option<Supplier> {
        let name = supplier.name().clone();
        let previous = self.suppliers.remove(&name);
        if let Some(prev) = &previous {
            supplier.inherit_history(prev.order_history().to_vec());
        }
        debug!(%name, "adding supplier");
        self.suppliers.insert(name, supplier);
        previous
    }

    pub fn supplier(&self, name: &SupplierName) -> Option<&Supplier> {
        self.suppliers.get(name)
    }

    /// Append an order record to the named supplier's history.
    pub fn add_supplier_order(
        &mut self,
        name: &SupplierName,
        order: impl Into<String>,
    ) -> RegistryResult<()> {
        match self.suppliers.get_mut(name) {
            Some(supplier) => {
                supplier.record_order(order);
                debug!(%name, "recorded supplier order");
                Ok(())
            }
            None => {
                warn!(%name, "order for unknown supplier");
                Err(RegistryError::not_found())
            }
        }
    }

    // Search and alerts

    /// Linear scan for the first product whose name matches
    /// case-insensitively. "First" is deterministic: lowest sku wins when
    /// several products share the name.
    pub fn search_product_by_name(&self, name: &str) -> Option<&Product> {
        self.products.values().find(|p| p.name_matches(name))
    }

    /// Every product whose quantity is strictly below `threshold`, in sku
    /// order.
    pub fn low_inventory(&self, threshold: u32) -> Vec<&Product> {
        self.products
            .values()
            .filter(|p| p.quantity() < threshold)
            .collect()
    }

    // Reports

    /// One line per product in sku order, each terminated by a newline.
    pub fn inventory_report(&self) -> String {
        let mut report = String::new();
        for product in self.products.values() {
            report.push_str(&product.to_string());
            report.push('\n');
        }
        report
    }

    /// One line per supplier in name order, each terminated by a newline.
    pub fn supplier_report(&self) -> String {
        let mut report = String::new();
        for supplier in self.suppliers.values() {
            report.push_str(&supplier.to_string());
            report.push('\n');
        }
        report
    }

    // Accessors backing the reports and any presentation layer

    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn suppliers(&self) -> impl Iterator<Item = &Supplier> {
        self.suppliers.values()
    }

    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    pub fn supplier_count(&self) -> usize {
        self.suppliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty() && self.suppliers.is_empty()
    }
}
