//! Permission grants.
//!
//! Permissions are a closed enum rather than capability strings: a typo in a
//! grant name is a compile error, and policy dispatch over grants can be
//! checked for exhaustiveness. Serde names are the platform's wire values
//! (`read_invoice_division`, `self_update_user`, …).

use serde::{Deserialize, Serialize};

/// A capability an actor may hold, either directly or through a role.
///
/// Invoice permissions come in division/financer pairs: the division variant
/// governs the division side of an invoice (recipient of platform invoices,
/// issuer of financer invoices), the financer variant the recipient financer
/// side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    // Invoices
    ReadInvoiceDivision,
    ReadInvoiceFinancer,
    CreateInvoiceDivision,
    CreateInvoiceFinancer,
    UpdateInvoiceDivision,
    UpdateInvoiceFinancer,
    DeleteInvoiceDivision,
    DeleteInvoiceFinancer,
    ConfirmInvoiceDivision,
    ConfirmInvoiceFinancer,
    MarkInvoiceSentDivision,
    MarkInvoiceSentFinancer,
    MarkInvoicePaidDivision,
    MarkInvoicePaidFinancer,
    DownloadInvoicePdfDivision,
    DownloadInvoicePdfFinancer,
    ExportInvoiceDivision,
    ExportInvoiceFinancer,
    SendInvoiceEmailDivision,
    SendInvoiceEmailFinancer,
    ManageInvoiceItemsDivision,
    ManageInvoiceItemsFinancer,
    ExportUserBillingDivision,
    ExportUserBillingFinancer,

    // Users
    CreateUser,
    ReadUser,
    UpdateUser,
    SelfUpdateUser,
    DeleteUser,

    // Role management
    AssignRoles,
    RevokeRoles,
    ManageUserRoles,

    // Financers
    ManageFinancer,
    ManageAnyFinancer,
    ManageFinancerModules,
    CreateFinancer,
    ReadAnyFinancer,
    ReadOwnFinancer,
    UpdateFinancer,
    DeleteFinancer,
    ViewFinancerMetrics,

    // Divisions
    CreateDivision,
    ReadDivision,
    UpdateDivision,
    DeleteDivision,
    ManageDivisionModules,

    // Tags
    ReadTag,
    CreateTag,
    UpdateTag,
    DeleteTag,

    // Segments
    ReadSegment,
    CreateSegment,
    UpdateSegment,
    DeleteSegment,

    // Notification topics
    ReadNotificationTopic,
    CreateNotificationTopic,
    UpdateNotificationTopic,
    DeleteNotificationTopic,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_names_are_snake_case_wire_values() {
        assert_eq!(
            serde_json::to_string(&Permission::ReadInvoiceDivision).unwrap(),
            "\"read_invoice_division\""
        );
        assert_eq!(
            serde_json::to_string(&Permission::SelfUpdateUser).unwrap(),
            "\"self_update_user\""
        );
        let parsed: Permission = serde_json::from_str("\"download_invoice_pdf_financer\"").unwrap();
        assert_eq!(parsed, Permission::DownloadInvoicePdfFinancer);
    }
}
