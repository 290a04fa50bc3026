//! `benefika-invoicing` — the invoice entity and its status lifecycle.
//!
//! Invoices are two-sided: the platform invoices divisions, and divisions
//! invoice their financers. The parties are encoded per kind so the
//! per-kind access-path dispatch in the policy layer is exhaustive.

pub mod invoice;
pub mod store;

pub use invoice::{Invoice, InvoiceKind, InvoiceParties, InvoiceStatus, InvoiceStatusTarget};
pub use store::{InMemoryInvoiceStore, InvoiceStore};
