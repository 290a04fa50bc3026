//! Invoice lookup used by bulk authorization.

use std::collections::HashMap;

use benefika_core::InvoiceId;

use crate::invoice::Invoice;

/// Read-side invoice lookup.
///
/// Bulk authorization resolves each target ID through this trait; a missing
/// invoice vetoes the whole batch at the policy layer.
pub trait InvoiceStore {
    fn get(&self, id: InvoiceId) -> Option<Invoice>;
}

/// In-memory store over a fixed invoice set.
#[derive(Debug, Default, Clone)]
pub struct InMemoryInvoiceStore {
    invoices: HashMap<InvoiceId, Invoice>,
}

impl InMemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, invoice: Invoice) {
        self.invoices.insert(invoice.id(), invoice);
    }
}

impl InvoiceStore for InMemoryInvoiceStore {
    fn get(&self, id: InvoiceId) -> Option<Invoice> {
        self.invoices.get(&id).cloned()
    }
}
