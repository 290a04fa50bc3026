//! User-to-user authorization.
//!
//! Three tiers, exhaustive over [`RoleTier`]:
//!
//! 1. global-tier actors bypass scoping entirely;
//! 2. self-access short-circuits (viewing yourself is always allowed);
//! 3. everyone else passes the permission gate and then a tier-dependent
//!    equivalence: division-tier actors must *share a division* with the
//!    target, all other actors must *share a single active financer*. The
//!    two relations differ — sharing a division through different financers
//!    is enough for a division admin and not enough for anyone else.

use benefika_auth::{Actor, Capabilities, Permission, Role, RoleTier, role::can_manage_role};
use benefika_tenancy::membership::{share_active_financer, share_division};
use benefika_workforce::UserProfile;

/// Authorization decisions for user records.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserPolicy;

impl UserPolicy {
    pub fn new() -> Self {
        Self
    }

    /// May the actor see this user's profile?
    pub fn view(&self, actor: &Actor, target: &UserProfile) -> bool {
        if actor.tier() == RoleTier::Global {
            return true;
        }
        if actor.user_id == target.user_id {
            // Self-view is unconditional.
            return true;
        }
        if !actor.has_permission(Permission::ReadUser) {
            return false;
        }
        self.shares_tenant_scope(actor, target)
    }

    /// May the actor update this user?
    pub fn update(&self, actor: &Actor, target: &UserProfile) -> bool {
        if actor.tier() == RoleTier::Global {
            return true;
        }
        if actor.user_id == target.user_id {
            return actor.has_permission(Permission::SelfUpdateUser)
                || actor.has_permission(Permission::UpdateUser);
        }
        if !actor.has_permission(Permission::UpdateUser) {
            return false;
        }
        self.shares_tenant_scope(actor, target)
    }

    /// May the actor delete this user?
    pub fn delete(&self, actor: &Actor, target: &UserProfile) -> bool {
        if actor.tier() == RoleTier::Global {
            return true;
        }
        if !actor.has_permission(Permission::DeleteUser) {
            return false;
        }
        self.shares_tenant_scope(actor, target)
    }

    /// May the actor grant `role` to the target user?
    ///
    /// Requires the grant permission, containment in the role hierarchy (a
    /// role can only assign strictly lower roles), and tenant scope. The
    /// hierarchy check is **not** bypassed by the global tier: even `god`
    /// cannot assign `god`.
    pub fn assign_role(&self, actor: &Actor, target: &UserProfile, role: Role) -> bool {
        if !actor.has_permission(Permission::AssignRoles) {
            return false;
        }
        if !can_manage_role(&actor.roles, role) {
            return false;
        }
        self.shares_tenant_scope(actor, target)
    }

    /// The tier-dependent equivalence relation between actor and target.
    fn shares_tenant_scope(&self, actor: &Actor, target: &UserProfile) -> bool {
        match actor.tier() {
            RoleTier::Global => true,
            RoleTier::Division => share_division(&actor.memberships, &target.memberships),
            RoleTier::Financer | RoleTier::Member => {
                share_active_financer(&actor.memberships, &target.memberships)
            }
        }
    }
}
