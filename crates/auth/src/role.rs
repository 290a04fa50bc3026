//! Roles and the role lattice.
//!
//! Roles are a closed enum; the grant set of each role is built by extending
//! the next role down, so the lattice is a strict chain:
//! `beneficiary ⊂ financer_admin ⊂ financer_super_admin ⊂ division_admin
//! ⊂ division_super_admin ⊂ platform_admin ⊂ platform_super_admin ⊂ god`.

use serde::{Deserialize, Serialize};

use crate::permission::Permission;

/// A role an actor may hold within a tenant boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    God,
    PlatformSuperAdmin,
    PlatformAdmin,
    DivisionSuperAdmin,
    DivisionAdmin,
    FinancerSuperAdmin,
    FinancerAdmin,
    Beneficiary,
}

/// The scoping tier a role operates at.
///
/// Policies dispatch on the tier, not on individual roles: the tier picks the
/// scoping strategy (bypass / division equivalence / financer equivalence).
/// Ordered so that `max()` over an actor's roles yields its strongest tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RoleTier {
    /// Regular member; scoped to shared financers.
    Member,
    /// Financer administration; scoped to shared financers.
    Financer,
    /// Division administration; scoped to shared divisions.
    Division,
    /// Platform tier. Bypasses every scoping check.
    Global,
}

impl Role {
    pub fn tier(&self) -> RoleTier {
        match self {
            Role::God | Role::PlatformSuperAdmin | Role::PlatformAdmin => RoleTier::Global,
            Role::DivisionSuperAdmin | Role::DivisionAdmin => RoleTier::Division,
            Role::FinancerSuperAdmin | Role::FinancerAdmin => RoleTier::Financer,
            Role::Beneficiary => RoleTier::Member,
        }
    }

    /// The permission grants this role confers.
    ///
    /// Each tier extends the one below it. The returned set may contain a
    /// grant more than once when tiers overlap; membership checks are
    /// unaffected.
    pub fn grants(&self) -> Vec<Permission> {
        use Permission::*;

        match self {
            // The scoping bypass of `god` comes from its tier, not from a
            // larger grant set.
            Role::God => Role::PlatformSuperAdmin.grants(),

            Role::PlatformSuperAdmin => {
                let mut grants = Role::PlatformAdmin.grants();
                grants.push(ManageDivisionModules);
                grants
            }

            Role::PlatformAdmin => {
                let mut grants = Role::DivisionSuperAdmin.grants();
                grants.extend([
                    CreateDivision,
                    DeleteDivision,
                    ManageAnyFinancer,
                    CreateInvoiceDivision,
                    UpdateInvoiceDivision,
                    DeleteInvoiceDivision,
                    ConfirmInvoiceDivision,
                    MarkInvoiceSentDivision,
                    MarkInvoicePaidDivision,
                    SendInvoiceEmailDivision,
                ]);
                grants
            }

            Role::DivisionSuperAdmin => {
                let mut grants = Role::DivisionAdmin.grants();
                grants.extend([DeleteFinancer, ManageFinancerModules]);
                grants
            }

            Role::DivisionAdmin => {
                let mut grants = Role::FinancerSuperAdmin.grants();
                grants.extend([
                    ReadDivision,
                    UpdateDivision,
                    ManageFinancer,
                    ReadAnyFinancer,
                    CreateFinancer,
                    ReadInvoiceDivision,
                    DownloadInvoicePdfDivision,
                    ExportInvoiceDivision,
                    ManageInvoiceItemsDivision,
                    ExportUserBillingDivision,
                    CreateInvoiceFinancer,
                    UpdateInvoiceFinancer,
                    DeleteInvoiceFinancer,
                    ConfirmInvoiceFinancer,
                    MarkInvoiceSentFinancer,
                    MarkInvoicePaidFinancer,
                    SendInvoiceEmailFinancer,
                    ManageInvoiceItemsFinancer,
                ]);
                grants
            }

            Role::FinancerSuperAdmin => {
                let mut grants = Role::FinancerAdmin.grants();
                grants.extend([
                    CreateUser,
                    UpdateUser,
                    DeleteUser,
                    AssignRoles,
                    RevokeRoles,
                    ManageUserRoles,
                ]);
                grants
            }

            Role::FinancerAdmin => {
                let mut grants = Role::Beneficiary.grants();
                grants.extend([
                    UpdateFinancer,
                    ViewFinancerMetrics,
                    ReadUser,
                    CreateTag,
                    UpdateTag,
                    DeleteTag,
                    CreateSegment,
                    UpdateSegment,
                    DeleteSegment,
                    CreateNotificationTopic,
                    UpdateNotificationTopic,
                    DeleteNotificationTopic,
                    ReadInvoiceFinancer,
                    DownloadInvoicePdfFinancer,
                    ExportUserBillingFinancer,
                    ExportInvoiceFinancer,
                ]);
                grants
            }

            Role::Beneficiary => vec![
                ReadOwnFinancer,
                SelfUpdateUser,
                ReadTag,
                ReadSegment,
                ReadNotificationTopic,
            ],
        }
    }

    /// Roles a holder of this role may assign to others: strictly lower roles
    /// in the chain. A role can never assign itself or anything above it.
    pub fn assignable_roles(&self) -> Vec<Role> {
        match self {
            Role::God => with_role(Role::PlatformSuperAdmin),
            Role::PlatformSuperAdmin => with_role(Role::PlatformAdmin),
            Role::PlatformAdmin => with_role(Role::DivisionSuperAdmin),
            Role::DivisionSuperAdmin => with_role(Role::DivisionAdmin),
            Role::DivisionAdmin => with_role(Role::FinancerSuperAdmin),
            Role::FinancerSuperAdmin => with_role(Role::FinancerAdmin),
            Role::FinancerAdmin => vec![Role::Beneficiary],
            Role::Beneficiary => Vec::new(),
        }
    }
}

fn with_role(role: Role) -> Vec<Role> {
    let mut roles = role.assignable_roles();
    roles.push(role);
    roles
}

/// May any of `actor_roles` assign `new_role`?
pub fn can_manage_role(actor_roles: &[Role], new_role: Role) -> bool {
    actor_roles
        .iter()
        .any(|role| role.assignable_roles().contains(&new_role))
}
