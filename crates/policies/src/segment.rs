//! Segment authorization.
//!
//! Segments are the simple single-tenant shape: after the permission gate,
//! visibility is a direct match against the financer the actor is currently
//! operating as. (Departments, sites, and the other financer-owned HR
//! configuration entities follow this same shape.)

use benefika_auth::{Actor, AuthorizationContext, Capabilities, Permission};
use benefika_workforce::Segment;

/// Authorization decisions for employee segments.
#[derive(Debug, Default, Clone, Copy)]
pub struct SegmentPolicy;

impl SegmentPolicy {
    pub fn new() -> Self {
        Self
    }

    pub fn view_any(&self, actor: &Actor) -> bool {
        actor.has_permission(Permission::ReadSegment)
    }

    pub fn view(&self, actor: &Actor, ctx: &AuthorizationContext, segment: &Segment) -> bool {
        actor.has_permission(Permission::ReadSegment) && self.owned_by_current(ctx, segment)
    }

    pub fn create(&self, actor: &Actor) -> bool {
        actor.has_permission(Permission::CreateSegment)
    }

    pub fn update(&self, actor: &Actor, ctx: &AuthorizationContext, segment: &Segment) -> bool {
        actor.has_permission(Permission::UpdateSegment) && self.owned_by_current(ctx, segment)
    }

    pub fn delete(&self, actor: &Actor, ctx: &AuthorizationContext, segment: &Segment) -> bool {
        actor.has_permission(Permission::DeleteSegment) && self.owned_by_current(ctx, segment)
    }

    fn owned_by_current(&self, ctx: &AuthorizationContext, segment: &Segment) -> bool {
        ctx.current_financer_id() == Some(segment.financer_id)
    }
}
