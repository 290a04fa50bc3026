//! The authenticated principal and the capability-check interface.

use std::collections::HashSet;

use benefika_core::{DivisionId, FinancerId, UserId};
use benefika_tenancy::FinancerMembership;
use benefika_tenancy::membership;

use crate::claims::AccessClaims;
use crate::permission::Permission;
use crate::role::{Role, RoleTier};

/// Capability checks over a principal.
///
/// This is the seam between policies and whatever resolves grants (role
/// mapping, a directory service, a token). Policies only consume these
/// predicates; [`Actor`] is the in-process implementation.
pub trait Capabilities {
    fn has_permission(&self, permission: Permission) -> bool;

    fn has_role(&self, role: Role) -> bool;

    fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.has_role(*role))
    }

    /// Alias of [`Capabilities::has_permission`], matching policy prose.
    fn can(&self, permission: Permission) -> bool {
        self.has_permission(permission)
    }

    /// The strongest tier across the held roles.
    fn tier(&self) -> RoleTier;
}

/// A fully resolved principal for authorization decisions.
///
/// Construction is decoupled from transport: the session layer derives an
/// actor from verified claims ([`Actor::from_claims`]) or from its own user
/// record. All reads policies need are materialized here — policy evaluation
/// itself never does I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id: UserId,
    pub roles: Vec<Role>,
    /// Grants held outside the role mapping (one-off elevations).
    pub direct_permissions: Vec<Permission>,
    pub memberships: Vec<FinancerMembership>,
    pub current_financer_id: Option<FinancerId>,
}

impl Actor {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            roles: Vec::new(),
            direct_permissions: Vec::new(),
            memberships: Vec::new(),
            current_financer_id: None,
        }
    }

    /// Build an actor from validated access claims.
    ///
    /// Claims must have passed [`crate::claims::validate_claims`] first; this
    /// constructor performs no validity checks of its own.
    pub fn from_claims(claims: AccessClaims) -> Self {
        let current_financer_id = claims
            .current_financer_id
            .or_else(|| claims.memberships.iter().find(|m| m.active).map(|m| m.financer_id));

        Self {
            user_id: claims.sub,
            roles: claims.roles,
            direct_permissions: claims.permissions,
            memberships: claims.memberships,
            current_financer_id,
        }
    }

    /// Financer IDs of the actor's active memberships.
    pub fn active_financer_ids(&self) -> HashSet<FinancerId> {
        membership::active_financer_ids(&self.memberships)
    }

    /// Division IDs reachable through the actor's active memberships.
    pub fn division_ids(&self) -> HashSet<DivisionId> {
        membership::active_division_ids(&self.memberships)
    }
}

impl Capabilities for Actor {
    fn has_permission(&self, permission: Permission) -> bool {
        if self.direct_permissions.contains(&permission) {
            return true;
        }
        self.roles
            .iter()
            .any(|role| role.grants().contains(&permission))
    }

    fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    fn tier(&self) -> RoleTier {
        self.roles
            .iter()
            .map(Role::tier)
            .max()
            .unwrap_or(RoleTier::Member)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn permissions_resolve_through_roles_and_direct_grants() {
        let mut actor = Actor::new(UserId::new());
        actor.roles = vec![Role::Beneficiary];

        assert!(actor.has_permission(Permission::ReadTag));
        assert!(!actor.has_permission(Permission::CreateTag));

        actor.direct_permissions.push(Permission::CreateTag);
        assert!(actor.has_permission(Permission::CreateTag));
    }

    #[test]
    fn tier_is_the_strongest_held_role() {
        let mut actor = Actor::new(UserId::new());
        assert_eq!(actor.tier(), RoleTier::Member);

        actor.roles = vec![Role::Beneficiary, Role::DivisionAdmin];
        assert_eq!(actor.tier(), RoleTier::Division);

        actor.roles.push(Role::God);
        assert_eq!(actor.tier(), RoleTier::Global);
    }

    #[test]
    fn from_claims_defaults_current_financer_to_first_active_membership() {
        let financer = FinancerId::new();
        let division = DivisionId::new();
        let claims = AccessClaims {
            sub: UserId::new(),
            roles: vec![Role::Beneficiary],
            permissions: Vec::new(),
            memberships: vec![
                FinancerMembership::inactive(FinancerId::new(), division, Utc::now()),
                FinancerMembership::active(financer, division, Utc::now()),
            ],
            current_financer_id: None,
            issued_at: Utc::now(),
            expires_at: Utc::now(),
        };

        let actor = Actor::from_claims(claims);
        assert_eq!(actor.current_financer_id, Some(financer));
    }
}
