//! Invoice authorization.
//!
//! Invoices are reachable through two paths. The *division path* covers the
//! division side of an invoice: the recipient division of a platform invoice,
//! or the issuing division of a financer invoice. The *financer path* covers
//! only financer invoices, through their recipient financer. Which permission
//! pair applies is dispatched on the invoice kind.

use benefika_auth::{Actor, AuthorizationContext, Capabilities, Permission};
use benefika_core::InvoiceId;
use benefika_invoicing::{Invoice, InvoiceKind, InvoiceParties, InvoiceStatusTarget, InvoiceStore};

/// Authorization decisions for invoices and invoice items.
#[derive(Debug, Default, Clone, Copy)]
pub struct InvoicePolicy;

impl InvoicePolicy {
    pub fn new() -> Self {
        Self
    }

    /// May the actor list invoices at all?
    pub fn view_any(&self, actor: &Actor) -> bool {
        actor.has_permission(Permission::ReadInvoiceDivision)
            || actor.has_permission(Permission::ReadInvoiceFinancer)
    }

    /// May the actor see this specific invoice?
    pub fn view(&self, actor: &Actor, ctx: &AuthorizationContext, invoice: &Invoice) -> bool {
        if actor.has_permission(Permission::ReadInvoiceDivision) {
            return self.accessible_as_division(ctx, invoice);
        }
        if actor.has_permission(Permission::ReadInvoiceFinancer) {
            return self.accessible_as_financer(ctx, invoice);
        }
        false
    }

    /// May the actor create an invoice of this kind?
    pub fn create(&self, actor: &Actor, kind: InvoiceKind) -> bool {
        match kind {
            InvoiceKind::PlatformToDivision => {
                actor.has_permission(Permission::CreateInvoiceDivision)
            }
            InvoiceKind::DivisionToFinancer => {
                actor.has_permission(Permission::CreateInvoiceFinancer)
            }
        }
    }

    pub fn update(&self, actor: &Actor, ctx: &AuthorizationContext, invoice: &Invoice) -> bool {
        self.can_manage(
            actor,
            ctx,
            invoice,
            Permission::UpdateInvoiceDivision,
            Permission::UpdateInvoiceFinancer,
        )
    }

    pub fn delete(&self, actor: &Actor, ctx: &AuthorizationContext, invoice: &Invoice) -> bool {
        self.can_manage(
            actor,
            ctx,
            invoice,
            Permission::DeleteInvoiceDivision,
            Permission::DeleteInvoiceFinancer,
        )
    }

    pub fn confirm(&self, actor: &Actor, ctx: &AuthorizationContext, invoice: &Invoice) -> bool {
        self.can_manage(
            actor,
            ctx,
            invoice,
            Permission::ConfirmInvoiceDivision,
            Permission::ConfirmInvoiceFinancer,
        )
    }

    pub fn mark_sent(&self, actor: &Actor, ctx: &AuthorizationContext, invoice: &Invoice) -> bool {
        self.can_manage(
            actor,
            ctx,
            invoice,
            Permission::MarkInvoiceSentDivision,
            Permission::MarkInvoiceSentFinancer,
        )
    }

    pub fn mark_paid(&self, actor: &Actor, ctx: &AuthorizationContext, invoice: &Invoice) -> bool {
        self.can_manage(
            actor,
            ctx,
            invoice,
            Permission::MarkInvoicePaidDivision,
            Permission::MarkInvoicePaidFinancer,
        )
    }

    pub fn send_email(&self, actor: &Actor, ctx: &AuthorizationContext, invoice: &Invoice) -> bool {
        self.can_manage(
            actor,
            ctx,
            invoice,
            Permission::SendInvoiceEmailDivision,
            Permission::SendInvoiceEmailFinancer,
        )
    }

    /// Seeing items follows seeing the invoice.
    pub fn view_items(&self, actor: &Actor, ctx: &AuthorizationContext, invoice: &Invoice) -> bool {
        self.view(actor, ctx, invoice)
    }

    pub fn create_item(&self, actor: &Actor, ctx: &AuthorizationContext, invoice: &Invoice) -> bool {
        self.can_manage(
            actor,
            ctx,
            invoice,
            Permission::ManageInvoiceItemsDivision,
            Permission::ManageInvoiceItemsFinancer,
        )
    }

    pub fn update_item(&self, actor: &Actor, ctx: &AuthorizationContext, invoice: &Invoice) -> bool {
        self.create_item(actor, ctx, invoice)
    }

    pub fn delete_item(&self, actor: &Actor, ctx: &AuthorizationContext, invoice: &Invoice) -> bool {
        self.create_item(actor, ctx, invoice)
    }

    pub fn download_pdf(
        &self,
        actor: &Actor,
        ctx: &AuthorizationContext,
        invoice: &Invoice,
    ) -> bool {
        if actor.has_permission(Permission::DownloadInvoicePdfDivision) {
            return self.accessible_as_division(ctx, invoice);
        }
        if actor.has_permission(Permission::DownloadInvoicePdfFinancer) {
            return self.accessible_as_financer(ctx, invoice);
        }
        false
    }

    pub fn export_excel(&self, actor: &Actor) -> bool {
        actor.has_permission(Permission::ExportInvoiceDivision)
            || actor.has_permission(Permission::ExportInvoiceFinancer)
    }

    pub fn export_user_billing(
        &self,
        actor: &Actor,
        ctx: &AuthorizationContext,
        invoice: &Invoice,
    ) -> bool {
        if actor.has_permission(Permission::ExportUserBillingDivision) {
            return self.accessible_as_division(ctx, invoice);
        }
        if actor.has_permission(Permission::ExportUserBillingFinancer) {
            return self.accessible_as_financer(ctx, invoice);
        }
        false
    }

    /// Authorize a bulk status update.
    ///
    /// Every target invoice is checked individually against the decision for
    /// the target status; a missing invoice or a single deny vetoes the whole
    /// batch. There is no partial authorization.
    pub fn bulk_update_status(
        &self,
        actor: &Actor,
        ctx: &AuthorizationContext,
        target: InvoiceStatusTarget,
        invoice_ids: &[InvoiceId],
        store: &dyn InvoiceStore,
    ) -> bool {
        for &id in invoice_ids {
            let Some(invoice) = store.get(id) else {
                return false;
            };

            let authorized = match target {
                InvoiceStatusTarget::Confirmed => self.confirm(actor, ctx, &invoice),
                InvoiceStatusTarget::Sent => self.mark_sent(actor, ctx, &invoice),
                InvoiceStatusTarget::Paid => self.mark_paid(actor, ctx, &invoice),
                InvoiceStatusTarget::Cancelled => self.delete(actor, ctx, &invoice),
            };

            if !authorized {
                return false;
            }
        }

        true
    }

    /// Division path: the division side of the invoice must be in scope.
    fn accessible_as_division(&self, ctx: &AuthorizationContext, invoice: &Invoice) -> bool {
        let division = match invoice.kind() {
            InvoiceKind::PlatformToDivision => invoice.recipient_division(),
            InvoiceKind::DivisionToFinancer => invoice.issuer_division(),
        };
        division.is_some_and(|id| ctx.can_access_division(id))
    }

    /// Financer path: only financer invoices, through their recipient.
    fn accessible_as_financer(&self, ctx: &AuthorizationContext, invoice: &Invoice) -> bool {
        match invoice.parties() {
            InvoiceParties::DivisionToFinancer {
                recipient_financer, ..
            } => ctx.can_access_financer(recipient_financer),
            InvoiceParties::PlatformToDivision { .. } => false,
        }
    }

    /// Manage dispatch: division permission + division path for platform
    /// invoices; financer-side permission + issuer-division scope for
    /// financer invoices.
    fn can_manage(
        &self,
        actor: &Actor,
        ctx: &AuthorizationContext,
        invoice: &Invoice,
        division_permission: Permission,
        financer_permission: Permission,
    ) -> bool {
        match invoice.parties() {
            InvoiceParties::PlatformToDivision { .. } => {
                actor.has_permission(division_permission)
                    && self.accessible_as_division(ctx, invoice)
            }
            InvoiceParties::DivisionToFinancer {
                issuer_division, ..
            } => actor.has_permission(financer_permission) && ctx.can_access_division(issuer_division),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use benefika_auth::{AuthorizationMode, Role};
    use benefika_core::{DivisionId, FinancerId, UserId};
    use benefika_invoicing::InMemoryInvoiceStore;

    use super::*;

    fn actor_with_permissions(permissions: Vec<Permission>) -> Actor {
        let mut actor = Actor::new(UserId::new());
        actor.direct_permissions = permissions;
        actor
    }

    fn context_scoped(
        financers: Vec<FinancerId>,
        divisions: Vec<DivisionId>,
    ) -> AuthorizationContext {
        let mut ctx = AuthorizationContext::new();
        ctx.hydrate(
            AuthorizationMode::SelfScope,
            financers,
            divisions,
            vec![Role::FinancerAdmin],
            None,
        );
        ctx
    }

    fn platform_invoice(recipient_division: DivisionId) -> Invoice {
        Invoice::draft(
            benefika_core::InvoiceId::new(),
            InvoiceParties::PlatformToDivision { recipient_division },
            4_900_00,
            Utc::now(),
            Utc::now(),
        )
    }

    fn financer_invoice(issuer_division: DivisionId, recipient_financer: FinancerId) -> Invoice {
        Invoice::draft(
            benefika_core::InvoiceId::new(),
            InvoiceParties::DivisionToFinancer {
                issuer_division,
                recipient_financer,
            },
            250_00,
            Utc::now(),
            Utc::now(),
        )
    }

    #[test]
    fn view_any_requires_either_read_permission() {
        let policy = InvoicePolicy::new();

        assert!(!policy.view_any(&actor_with_permissions(vec![])));
        assert!(policy.view_any(&actor_with_permissions(vec![Permission::ReadInvoiceDivision])));
        assert!(policy.view_any(&actor_with_permissions(vec![Permission::ReadInvoiceFinancer])));
    }

    #[test]
    fn division_reader_sees_recipient_division_of_platform_invoice() {
        let policy = InvoicePolicy::new();
        let division = DivisionId::new();
        let actor = actor_with_permissions(vec![Permission::ReadInvoiceDivision]);
        let ctx = context_scoped(vec![], vec![division]);

        assert!(policy.view(&actor, &ctx, &platform_invoice(division)));
        assert!(!policy.view(&actor, &ctx, &platform_invoice(DivisionId::new())));
    }

    #[test]
    fn division_reader_sees_issuer_division_of_financer_invoice() {
        let policy = InvoicePolicy::new();
        let division = DivisionId::new();
        let actor = actor_with_permissions(vec![Permission::ReadInvoiceDivision]);
        let ctx = context_scoped(vec![], vec![division]);

        let invoice = financer_invoice(division, FinancerId::new());
        assert!(policy.view(&actor, &ctx, &invoice));
    }

    #[test]
    fn financer_reader_sees_only_invoices_received_by_scoped_financers() {
        let policy = InvoicePolicy::new();
        let financer = FinancerId::new();
        let actor = actor_with_permissions(vec![Permission::ReadInvoiceFinancer]);
        let ctx = context_scoped(vec![financer], vec![]);

        let received = financer_invoice(DivisionId::new(), financer);
        let foreign = financer_invoice(DivisionId::new(), FinancerId::new());
        assert!(policy.view(&actor, &ctx, &received));
        assert!(!policy.view(&actor, &ctx, &foreign));

        // Platform invoices never travel the financer path.
        assert!(!policy.view(&actor, &ctx, &platform_invoice(DivisionId::new())));
    }

    #[test]
    fn create_dispatches_on_invoice_kind() {
        let policy = InvoicePolicy::new();
        let platform_creator =
            actor_with_permissions(vec![Permission::CreateInvoiceDivision]);
        let financer_creator =
            actor_with_permissions(vec![Permission::CreateInvoiceFinancer]);

        assert!(policy.create(&platform_creator, InvoiceKind::PlatformToDivision));
        assert!(!policy.create(&platform_creator, InvoiceKind::DivisionToFinancer));
        assert!(policy.create(&financer_creator, InvoiceKind::DivisionToFinancer));
        assert!(!policy.create(&financer_creator, InvoiceKind::PlatformToDivision));
    }

    #[test]
    fn managing_financer_invoice_requires_issuer_division_scope() {
        let policy = InvoicePolicy::new();
        let issuer = DivisionId::new();
        let actor = actor_with_permissions(vec![Permission::ConfirmInvoiceFinancer]);

        let invoice = financer_invoice(issuer, FinancerId::new());

        let in_scope = context_scoped(vec![], vec![issuer]);
        assert!(policy.confirm(&actor, &in_scope, &invoice));

        let out_of_scope = context_scoped(vec![], vec![DivisionId::new()]);
        assert!(!policy.confirm(&actor, &out_of_scope, &invoice));
    }

    #[test]
    fn managing_platform_invoice_requires_division_permission_and_scope() {
        let policy = InvoicePolicy::new();
        let division = DivisionId::new();
        let invoice = platform_invoice(division);
        let ctx = context_scoped(vec![], vec![division]);

        let division_updater = actor_with_permissions(vec![Permission::UpdateInvoiceDivision]);
        assert!(policy.update(&division_updater, &ctx, &invoice));

        // The financer-side permission does not manage platform invoices.
        let financer_updater = actor_with_permissions(vec![Permission::UpdateInvoiceFinancer]);
        assert!(!policy.update(&financer_updater, &ctx, &invoice));
    }

    #[test]
    fn item_management_delegates_to_manage_items_permissions() {
        let policy = InvoicePolicy::new();
        let issuer = DivisionId::new();
        let invoice = financer_invoice(issuer, FinancerId::new());
        let ctx = context_scoped(vec![], vec![issuer]);

        let manager = actor_with_permissions(vec![Permission::ManageInvoiceItemsFinancer]);
        assert!(policy.create_item(&manager, &ctx, &invoice));
        assert!(policy.update_item(&manager, &ctx, &invoice));
        assert!(policy.delete_item(&manager, &ctx, &invoice));

        let reader = actor_with_permissions(vec![Permission::ReadInvoiceFinancer]);
        assert!(!policy.create_item(&reader, &ctx, &invoice));
    }

    #[test]
    fn bulk_update_rejects_all_when_one_invoice_is_unauthorized() {
        let policy = InvoicePolicy::new();
        let issuer = DivisionId::new();
        let foreign_issuer = DivisionId::new();
        let actor = actor_with_permissions(vec![Permission::ConfirmInvoiceFinancer]);
        let ctx = context_scoped(vec![], vec![issuer]);

        let authorized_a = financer_invoice(issuer, FinancerId::new());
        let authorized_b = financer_invoice(issuer, FinancerId::new());
        let unauthorized = financer_invoice(foreign_issuer, FinancerId::new());

        let mut store = InMemoryInvoiceStore::new();
        store.insert(authorized_a.clone());
        store.insert(authorized_b.clone());
        store.insert(unauthorized.clone());

        let all_three = [authorized_a.id(), authorized_b.id(), unauthorized.id()];
        assert!(!policy.bulk_update_status(
            &actor,
            &ctx,
            InvoiceStatusTarget::Confirmed,
            &all_three,
            &store,
        ));

        let authorized_only = [authorized_a.id(), authorized_b.id()];
        assert!(policy.bulk_update_status(
            &actor,
            &ctx,
            InvoiceStatusTarget::Confirmed,
            &authorized_only,
            &store,
        ));
    }

    #[test]
    fn bulk_update_rejects_all_when_an_invoice_is_missing() {
        let policy = InvoicePolicy::new();
        let issuer = DivisionId::new();
        let actor = actor_with_permissions(vec![Permission::ConfirmInvoiceFinancer]);
        let ctx = context_scoped(vec![], vec![issuer]);

        let existing = financer_invoice(issuer, FinancerId::new());
        let mut store = InMemoryInvoiceStore::new();
        store.insert(existing.clone());

        let ids = [existing.id(), benefika_core::InvoiceId::new()];
        assert!(!policy.bulk_update_status(
            &actor,
            &ctx,
            InvoiceStatusTarget::Confirmed,
            &ids,
            &store,
        ));
    }

    #[test]
    fn pdf_and_billing_exports_follow_the_view_paths() {
        let policy = InvoicePolicy::new();
        let division = DivisionId::new();
        let invoice = platform_invoice(division);
        let ctx = context_scoped(vec![], vec![division]);

        let downloader = actor_with_permissions(vec![Permission::DownloadInvoicePdfDivision]);
        assert!(policy.download_pdf(&downloader, &ctx, &invoice));

        let exporter = actor_with_permissions(vec![Permission::ExportUserBillingDivision]);
        assert!(policy.export_user_billing(&exporter, &ctx, &invoice));

        let nobody = actor_with_permissions(vec![]);
        assert!(!policy.download_pdf(&nobody, &ctx, &invoice));
        assert!(!policy.export_user_billing(&nobody, &ctx, &invoice));
    }
}
