//! Notification topic authorization.
//!
//! Topics live at either level of the hierarchy; the scope variant picks
//! which visibility set the check runs against.

use benefika_auth::{Actor, AuthorizationContext, Capabilities, Permission};
use benefika_workforce::{NotificationTopic, TopicScope};

/// Authorization decisions for notification topics.
#[derive(Debug, Default, Clone, Copy)]
pub struct NotificationTopicPolicy;

impl NotificationTopicPolicy {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, actor: &Actor, ctx: &AuthorizationContext, topic: &NotificationTopic) -> bool {
        actor.has_permission(Permission::ReadNotificationTopic) && self.in_scope(ctx, topic.scope)
    }

    /// Creation targets a scope; the actor must already reach it.
    pub fn create(&self, actor: &Actor, ctx: &AuthorizationContext, scope: TopicScope) -> bool {
        actor.has_permission(Permission::CreateNotificationTopic) && self.in_scope(ctx, scope)
    }

    pub fn update(
        &self,
        actor: &Actor,
        ctx: &AuthorizationContext,
        topic: &NotificationTopic,
    ) -> bool {
        actor.has_permission(Permission::UpdateNotificationTopic) && self.in_scope(ctx, topic.scope)
    }

    pub fn delete(
        &self,
        actor: &Actor,
        ctx: &AuthorizationContext,
        topic: &NotificationTopic,
    ) -> bool {
        actor.has_permission(Permission::DeleteNotificationTopic) && self.in_scope(ctx, topic.scope)
    }

    fn in_scope(&self, ctx: &AuthorizationContext, scope: TopicScope) -> bool {
        match scope {
            TopicScope::Financer(id) => ctx.can_access_financer(id),
            TopicScope::Division(id) => ctx.can_access_division(id),
        }
    }
}
