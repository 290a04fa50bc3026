//! Financer authorization.

use benefika_auth::{Actor, AuthorizationContext, Capabilities, Permission};
use benefika_tenancy::Financer;

/// Authorization decisions for financer records.
#[derive(Debug, Default, Clone, Copy)]
pub struct FinancerPolicy;

impl FinancerPolicy {
    pub fn new() -> Self {
        Self
    }

    /// May the actor see this financer?
    ///
    /// `read_any_financer` opens every financer in scope; `read_own_financer`
    /// only the financer the actor currently operates as.
    pub fn view(&self, actor: &Actor, ctx: &AuthorizationContext, financer: &Financer) -> bool {
        if actor.has_permission(Permission::ReadAnyFinancer) {
            return ctx.can_access_financer(financer.id);
        }
        if actor.has_permission(Permission::ReadOwnFinancer) {
            return ctx.current_financer_id() == Some(financer.id);
        }
        false
    }

    pub fn create(&self, actor: &Actor) -> bool {
        actor.has_permission(Permission::CreateFinancer)
    }

    pub fn update(&self, actor: &Actor, ctx: &AuthorizationContext, financer: &Financer) -> bool {
        actor.has_permission(Permission::UpdateFinancer) && ctx.can_access_financer(financer.id)
    }

    pub fn delete(&self, actor: &Actor, ctx: &AuthorizationContext, financer: &Financer) -> bool {
        actor.has_permission(Permission::DeleteFinancer) && ctx.can_access_financer(financer.id)
    }

    pub fn view_metrics(
        &self,
        actor: &Actor,
        ctx: &AuthorizationContext,
        financer: &Financer,
    ) -> bool {
        actor.has_permission(Permission::ViewFinancerMetrics)
            && ctx.can_access_financer(financer.id)
    }

    pub fn manage_modules(
        &self,
        actor: &Actor,
        ctx: &AuthorizationContext,
        financer: &Financer,
    ) -> bool {
        actor.has_permission(Permission::ManageFinancerModules)
            && ctx.can_access_financer(financer.id)
    }
}
