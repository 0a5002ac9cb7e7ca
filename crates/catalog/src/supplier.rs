use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, SupplierName};

/// Entity: a supplier with an append-only order history.
///
/// Keyed in the registry by its name. Order history preserves insertion order
/// and only ever grows; there is no operation that rewrites past records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    name: SupplierName,
    contact_info: String,
    order_history: Vec<String>,
}

impl Supplier {
    pub fn new(name: impl Into<SupplierName>, contact_info: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact_info: contact_info.into(),
            order_history: Vec::new(),
        }
    }

    pub fn name(&self) -> &SupplierName {
        &self.name
    }

    pub fn contact_info(&self) -> &str {
        &self.contact_info
    }

    pub fn order_history(&self) -> &[String] {
        &self.order_history
    }

    /// Append one order record, preserving everything already recorded.
    pub fn record_order(&mut self, order: impl Into<String>) {
        self.order_history.push(order.into());
    }

    /// Splice an earlier entry's history in front of this one's.
    ///
    /// Used when a supplier is re-registered under an existing name: the new
    /// record wins on name/contact, but the prior order history is not lost.
    pub fn inherit_history(&mut self, mut prior: Vec<String>) {
        prior.append(&mut self.order_history);
        self.order_history = prior;
    }
}

impl Entity for Supplier {
    type Id = SupplierName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl core::fmt::Display for Supplier {
    /// Supplier report line format.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Name: {}, Contact: {}", self.name, self.contact_info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_order_appends_in_call_order() {
        let mut supplier = Supplier::new("Acme", "acme@x.com");
        supplier.record_order("Order#1");
        supplier.record_order("Order#2");

        assert_eq!(supplier.order_history(), ["Order#1", "Order#2"]);
        assert_eq!(supplier.contact_info(), "acme@x.com");
    }

    #[test]
    fn inherit_history_keeps_prior_records_first() {
        let mut supplier = Supplier::new("Acme", "sales@acme.example");
        supplier.record_order("Order#3");
        supplier.inherit_history(vec!["Order#1".to_owned(), "Order#2".to_owned()]);

        assert_eq!(supplier.order_history(), ["Order#1", "Order#2", "Order#3"]);
    }

    #[test]
    fn entity_id_is_the_name() {
        let supplier = Supplier::new("Acme", "acme@x.com");
        assert_eq!(Entity::id(&supplier), &SupplierName::new("Acme"));
    }

    #[test]
    fn display_produces_report_line() {
        let supplier = Supplier::new("Acme", "acme@x.com");
        assert_eq!(supplier.to_string(), "Name: Acme, Contact: acme@x.com");
    }
}
