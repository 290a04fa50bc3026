//! Tag authorization.
//!
//! Tags are reachable through *either* isolation level: the owning financer
//! or that financer's parent division. The union is intentional — a division
//! admin manages the tags of every financer underneath it without holding a
//! membership in each one.

use benefika_auth::{Actor, AuthorizationContext, Capabilities, Permission};
use benefika_workforce::Tag;

/// Authorization decisions for employee tags.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagPolicy;

impl TagPolicy {
    pub fn new() -> Self {
        Self
    }

    pub fn view_any(&self, actor: &Actor) -> bool {
        actor.has_permission(Permission::ReadTag)
    }

    pub fn view(&self, actor: &Actor, ctx: &AuthorizationContext, tag: &Tag) -> bool {
        actor.has_permission(Permission::ReadTag) && self.in_scope(ctx, tag)
    }

    pub fn create(&self, actor: &Actor) -> bool {
        actor.has_permission(Permission::CreateTag)
    }

    pub fn update(&self, actor: &Actor, ctx: &AuthorizationContext, tag: &Tag) -> bool {
        actor.has_permission(Permission::UpdateTag) && self.in_scope(ctx, tag)
    }

    pub fn delete(&self, actor: &Actor, ctx: &AuthorizationContext, tag: &Tag) -> bool {
        actor.has_permission(Permission::DeleteTag) && self.in_scope(ctx, tag)
    }

    /// Financer path OR division path.
    fn in_scope(&self, ctx: &AuthorizationContext, tag: &Tag) -> bool {
        ctx.can_access_financer(tag.financer_id) || ctx.can_access_division(tag.division_id)
    }
}

#[cfg(test)]
mod tests {
    use benefika_auth::{AuthorizationMode, Role};
    use benefika_core::{DivisionId, FinancerId, TagId, UserId};

    use super::*;

    fn tag() -> Tag {
        Tag::new(TagId::new(), FinancerId::new(), DivisionId::new())
            .with_name("en-GB", "Remote workers")
    }

    fn reader() -> Actor {
        let mut actor = Actor::new(UserId::new());
        actor.direct_permissions = vec![Permission::ReadTag, Permission::UpdateTag];
        actor
    }

    fn ctx_with(financers: Vec<FinancerId>, divisions: Vec<DivisionId>) -> AuthorizationContext {
        let mut ctx = AuthorizationContext::new();
        ctx.hydrate(
            AuthorizationMode::SelfScope,
            financers,
            divisions,
            vec![Role::Beneficiary],
            None,
        );
        ctx
    }

    #[test]
    fn tag_is_visible_through_its_financer() {
        let policy = TagPolicy::new();
        let tag = tag();
        let ctx = ctx_with(vec![tag.financer_id], vec![]);

        assert!(policy.view(&reader(), &ctx, &tag));
    }

    #[test]
    fn tag_is_visible_through_its_division() {
        let policy = TagPolicy::new();
        let tag = tag();
        // Division in scope, financer not: the union still grants access.
        let ctx = ctx_with(vec![], vec![tag.division_id]);

        assert!(policy.view(&reader(), &ctx, &tag));
        assert!(policy.update(&reader(), &ctx, &tag));
    }

    #[test]
    fn tag_outside_both_scopes_is_invisible() {
        let policy = TagPolicy::new();
        let tag = tag();
        let ctx = ctx_with(vec![FinancerId::new()], vec![DivisionId::new()]);

        assert!(!policy.view(&reader(), &ctx, &tag));
    }

    #[test]
    fn permission_gate_applies_before_scope() {
        let policy = TagPolicy::new();
        let tag = tag();
        let ctx = ctx_with(vec![tag.financer_id], vec![tag.division_id]);

        let no_grants = Actor::new(UserId::new());
        assert!(!policy.view(&no_grants, &ctx, &tag));
        assert!(!policy.view_any(&no_grants));
    }
}
