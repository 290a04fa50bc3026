//! Division authorization.

use benefika_auth::{Actor, AuthorizationContext, Capabilities, Permission};
use benefika_tenancy::Division;

/// Authorization decisions for division records.
#[derive(Debug, Default, Clone, Copy)]
pub struct DivisionPolicy;

impl DivisionPolicy {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, actor: &Actor, ctx: &AuthorizationContext, division: &Division) -> bool {
        actor.has_permission(Permission::ReadDivision) && ctx.can_access_division(division.id)
    }

    pub fn create(&self, actor: &Actor) -> bool {
        actor.has_permission(Permission::CreateDivision)
    }

    pub fn update(&self, actor: &Actor, ctx: &AuthorizationContext, division: &Division) -> bool {
        actor.has_permission(Permission::UpdateDivision) && ctx.can_access_division(division.id)
    }

    pub fn delete(&self, actor: &Actor, ctx: &AuthorizationContext, division: &Division) -> bool {
        actor.has_permission(Permission::DeleteDivision) && ctx.can_access_division(division.id)
    }

    pub fn manage_modules(
        &self,
        actor: &Actor,
        ctx: &AuthorizationContext,
        division: &Division,
    ) -> bool {
        actor.has_permission(Permission::ManageDivisionModules)
            && ctx.can_access_division(division.id)
    }
}

#[cfg(test)]
mod tests {
    use benefika_auth::{AuthorizationMode, Role};
    use benefika_core::{DivisionId, UserId};

    use super::*;

    fn ctx_with(divisions: Vec<DivisionId>) -> AuthorizationContext {
        let mut ctx = AuthorizationContext::new();
        ctx.hydrate(
            AuthorizationMode::SelfScope,
            vec![],
            divisions,
            vec![Role::DivisionAdmin],
            None,
        );
        ctx
    }

    #[test]
    fn division_access_requires_grant_and_scope() {
        let policy = DivisionPolicy::new();
        let division = Division::new(DivisionId::new(), "EMEA");

        let mut admin = Actor::new(UserId::new());
        admin.roles = vec![Role::DivisionAdmin];

        assert!(policy.view(&admin, &ctx_with(vec![division.id]), &division));
        assert!(policy.update(&admin, &ctx_with(vec![division.id]), &division));
        assert!(!policy.view(&admin, &ctx_with(vec![DivisionId::new()]), &division));

        // division_admin cannot delete divisions.
        assert!(!policy.delete(&admin, &ctx_with(vec![division.id]), &division));
    }
}
