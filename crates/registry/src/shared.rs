use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stockroom_catalog::{Product, Supplier};
use stockroom_core::{RegistryResult, Sku, SupplierName};

use crate::warehouse::Warehouse;

/// Lock-guarded registry for embedders that mutate from several threads.
///
/// The two mappings are the sole shared mutable resource, and one lock guards
/// both: every operation is a single read or write transaction. Query methods
/// return owned copies so no guard outlives a call.
#[derive(Debug, Default)]
pub struct SharedWarehouse {
    inner: RwLock<Warehouse>,
}

impl SharedWarehouse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_warehouse(warehouse: Warehouse) -> Self {
        Self {
            inner: RwLock::new(warehouse),
        }
    }

    // No invariant spans more than one operation, so a poisoned lock still
    // guards internally consistent maps; recover the guard rather than
    // propagating the poisoning panic.
    fn read(&self) -> RwLockReadGuard<'_, Warehouse> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Warehouse> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn add_product(&self, product: Product) -> Option<Product> {
        self.write().add_product(product)
    }

    pub fn remove_product(&self, sku: &Sku) -> Option<Product> {
        self.write().remove_product(sku)
    }

    pub fn product(&self, sku: &Sku) -> Option<Product> {
        self.read().product(sku).cloned()
    }

    pub fn update_product_quantity(&self, sku: &Sku, quantity: u32) -> RegistryResult<()> {
        self.write().update_product_quantity(sku, quantity)
    }

    pub fn add_supplier(&self, supplier: Supplier) -> Option<Supplier> {
        self.write().add_supplier(supplier)
    }

    pub fn supplier(&self, name: &SupplierName) -> Option<Supplier> {
        self.read().supplier(name).cloned()
    }

    pub fn add_supplier_order(
        &self,
        name: &SupplierName,
        order: impl Into<String>,
    ) -> RegistryResult<()> {
        self.write().add_supplier_order(name, order)
    }

    pub fn search_product_by_name(&self, name: &str) -> Option<Product> {
        self.read().search_product_by_name(name).cloned()
    }

    pub fn low_inventory(&self, threshold: u32) -> Vec<Product> {
        self.read()
            .low_inventory(threshold)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn inventory_report(&self) -> String {
        self.read().inventory_report()
    }

    pub fn supplier_report(&self) -> String {
        self.read().supplier_report()
    }

    /// Owned copy of the whole registry, for display or inspection.
    pub fn snapshot(&self) -> Warehouse {
        self.read().clone()
    }
}
