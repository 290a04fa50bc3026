//! The request-scoped authorization context.
//!
//! One context is constructed per request, hydrated once by the session
//! layer, and passed **by reference** to every policy that needs scope
//! checks. A context must never outlive its request or be shared between
//! requests serving different actors — that lifecycle is what prevents
//! visibility data leaking across concurrent requests.

use std::collections::HashSet;

use thiserror::Error;

use benefika_core::{DivisionId, FinancerId};
use benefika_tenancy::membership::{FinancerMembership, active_financer_ids};
use benefika_tenancy::{FinancerDirectory, resolve_scope};

use crate::actor::{Actor, Capabilities};
use crate::error::AuthzError;
use crate::mode::AuthorizationMode;
use crate::role::{Role, RoleTier};

/// Failures while deriving a scope from a request's `financer_id` filter.
///
/// These are request-shaping failures surfaced before any policy runs; they
/// are distinct from policy denials, which are plain `false` decisions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HydrationError {
    /// A requested financer does not exist.
    #[error("requested financers are not valid")]
    InvalidRequestedFinancers,

    /// The requested financers exist but lie outside the actor's reach.
    #[error("not allowed to access the requested financers")]
    OutsideScope,
}

/// Per-request visibility scope: the financer and division IDs the current
/// actor may operate on.
///
/// Unhydrated contexts **fail closed**: every access query answers `false`
/// and the ID accessors answer empty. Hydration is last-write-wins — a second
/// `hydrate` fully replaces the previous scope, so no stale membership can
/// survive a take-control switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationContext {
    mode: AuthorizationMode,
    financer_ids: HashSet<FinancerId>,
    division_ids: HashSet<DivisionId>,
    actor_roles: Vec<Role>,
    current_financer_id: Option<FinancerId>,
    hydrated: bool,
}

impl Default for AuthorizationContext {
    fn default() -> Self {
        Self {
            mode: AuthorizationMode::SelfScope,
            financer_ids: HashSet::new(),
            division_ids: HashSet::new(),
            actor_roles: Vec::new(),
            current_financer_id: None,
            hydrated: false,
        }
    }
}

impl AuthorizationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthorizationMode {
        self.mode
    }

    pub fn is_self_mode(&self) -> bool {
        self.mode.is_self()
    }

    pub fn is_global_mode(&self) -> bool {
        self.mode.is_global()
    }

    pub fn is_take_control_mode(&self) -> bool {
        self.mode.is_take_control()
    }

    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// The financer the actor is currently operating as.
    pub fn current_financer_id(&self) -> Option<FinancerId> {
        self.current_financer_id
    }

    /// Accessible financer IDs. Empty until hydrated.
    pub fn financer_ids(&self) -> &HashSet<FinancerId> {
        &self.financer_ids
    }

    /// Accessible division IDs. Empty until hydrated.
    pub fn division_ids(&self) -> &HashSet<DivisionId> {
        &self.division_ids
    }

    /// Roles of the actor the scope was hydrated for.
    pub fn actor_roles(&self) -> &[Role] {
        &self.actor_roles
    }

    /// Hydrate the context with authorization data.
    ///
    /// Called by the session layer after authentication. Last hydration wins:
    /// mode, both ID sets, roles, and the current financer are all replaced.
    pub fn hydrate(
        &mut self,
        mode: AuthorizationMode,
        financer_ids: Vec<FinancerId>,
        division_ids: Vec<DivisionId>,
        actor_roles: Vec<Role>,
        current_financer: Option<FinancerId>,
    ) {
        self.mode = mode;
        self.financer_ids = financer_ids.into_iter().collect();
        self.division_ids = division_ids.into_iter().collect();
        self.actor_roles = actor_roles;
        self.current_financer_id = current_financer;
        self.hydrated = true;
    }

    /// Can the actor access this financer?
    ///
    /// Fails closed before hydration. After hydration, a global-tier actor
    /// (or a globally hydrated scope) passes for any ID; everyone else needs
    /// set membership.
    pub fn can_access_financer(&self, id: FinancerId) -> bool {
        if !self.hydrated {
            tracing::warn!(financer_id = %id, "authorization context queried before hydration; denying");
            return false;
        }
        if self.scope_bypassed() {
            return true;
        }
        self.financer_ids.contains(&id)
    }

    /// Can the actor access this division? Same rules as financers.
    pub fn can_access_division(&self, id: DivisionId) -> bool {
        if !self.hydrated {
            tracing::warn!(division_id = %id, "authorization context queried before hydration; denying");
            return false;
        }
        if self.scope_bypassed() {
            return true;
        }
        self.division_ids.contains(&id)
    }

    /// Assert financer access, for handlers that treat an out-of-scope ID as
    /// a hard failure rather than a filtered result.
    pub fn assert_financer(&self, id: FinancerId) -> Result<(), AuthzError> {
        if self.can_access_financer(id) {
            Ok(())
        } else {
            Err(AuthzError::FinancerOutOfScope(id))
        }
    }

    /// Assert division access.
    pub fn assert_division(&self, id: DivisionId) -> Result<(), AuthzError> {
        if self.can_access_division(id) {
            Ok(())
        } else {
            Err(AuthzError::DivisionOutOfScope(id))
        }
    }

    /// Hydrate from an authenticated actor and an optional `financer_id`
    /// request filter.
    ///
    /// Without a filter: platform-tier actors get a [`AuthorizationMode::Global`]
    /// scope over the whole directory, everyone else a
    /// [`AuthorizationMode::SelfScope`] scope over their active memberships.
    ///
    /// With a filter, the scope narrows to the requested financers
    /// ([`AuthorizationMode::TakeControl`] for admins):
    /// - platform tier may take control of any existing financer;
    /// - division tier may take control only of financers whose division it
    ///   already reaches;
    /// - other actors may narrow to a subset of their own active financers.
    pub fn hydrate_for_actor(
        &mut self,
        actor: &Actor,
        requested_financers: &[FinancerId],
        directory: &dyn FinancerDirectory,
    ) -> Result<(), HydrationError> {
        let global_control = actor.tier() == RoleTier::Global;
        let division_control = actor.tier() == RoleTier::Division;
        let fallback_financer = actor
            .current_financer_id
            .or_else(|| actor.memberships.iter().find(|m| m.active).map(|m| m.financer_id));

        if !requested_financers.is_empty() {
            return self.hydrate_with_requested(
                actor,
                requested_financers,
                directory,
                global_control,
                division_control,
                fallback_financer,
            );
        }

        if global_control {
            self.hydrate(
                AuthorizationMode::Global,
                directory.all_financer_ids(),
                directory.all_division_ids(),
                actor.roles.clone(),
                fallback_financer,
            );
        } else {
            let financers: Vec<FinancerId> = actor.active_financer_ids().into_iter().collect();
            let divisions: Vec<DivisionId> = actor.division_ids().into_iter().collect();
            self.hydrate(
                AuthorizationMode::SelfScope,
                financers,
                divisions,
                actor.roles.clone(),
                fallback_financer,
            );
        }

        Ok(())
    }

    /// Financers of `target` that `viewer` may see under this scope.
    ///
    /// Scope filtering applies first. Viewing one's own profile shows only
    /// active memberships; global and take-control scopes show every scoped
    /// membership; otherwise only financers where the viewer also holds an
    /// active membership are shown.
    pub fn accessible_financers_for(
        &self,
        target: &[FinancerMembership],
        viewer: &[FinancerMembership],
        viewing_self: bool,
    ) -> Vec<FinancerId> {
        let scoped: Vec<&FinancerMembership> = target
            .iter()
            .filter(|m| self.can_access_financer(m.financer_id))
            .collect();

        if viewing_self {
            return scoped
                .into_iter()
                .filter(|m| m.active)
                .map(|m| m.financer_id)
                .collect();
        }

        if self.is_global_mode() || self.is_take_control_mode() {
            return scoped.into_iter().map(|m| m.financer_id).collect();
        }

        let viewer_active = active_financer_ids(viewer);
        scoped
            .into_iter()
            .filter(|m| viewer_active.contains(&m.financer_id))
            .map(|m| m.financer_id)
            .collect()
    }

    fn hydrate_with_requested(
        &mut self,
        actor: &Actor,
        requested: &[FinancerId],
        directory: &dyn FinancerDirectory,
        global_control: bool,
        division_control: bool,
        fallback_financer: Option<FinancerId>,
    ) -> Result<(), HydrationError> {
        if global_control {
            let (financers, divisions) = resolve_scope(directory, requested);
            if financers.is_empty() {
                return Err(HydrationError::InvalidRequestedFinancers);
            }
            let current = current_from(&financers, fallback_financer);
            self.hydrate(
                AuthorizationMode::TakeControl,
                financers,
                divisions,
                actor.roles.clone(),
                current,
            );
            return Ok(());
        }

        if division_control {
            let (financers, divisions) = resolve_scope(directory, requested);
            if financers.is_empty() {
                return Err(HydrationError::InvalidRequestedFinancers);
            }
            let division_scope = actor.division_ids();
            if divisions.iter().any(|d| !division_scope.contains(d)) {
                return Err(HydrationError::OutsideScope);
            }
            let current = current_from(&financers, fallback_financer);
            self.hydrate(
                AuthorizationMode::TakeControl,
                financers,
                divisions,
                actor.roles.clone(),
                current,
            );
            return Ok(());
        }

        let owned = actor.active_financer_ids();
        let within_scope: Vec<FinancerId> = requested
            .iter()
            .filter(|id| owned.contains(id))
            .copied()
            .collect();
        if within_scope.is_empty() {
            return Err(HydrationError::OutsideScope);
        }

        let (financers, divisions) = resolve_scope(directory, &within_scope);
        if financers.is_empty() {
            return Err(HydrationError::InvalidRequestedFinancers);
        }
        let current = current_from(&financers, fallback_financer);
        self.hydrate(
            AuthorizationMode::SelfScope,
            financers,
            divisions,
            actor.roles.clone(),
            current,
        );
        Ok(())
    }

    fn scope_bypassed(&self) -> bool {
        self.mode.is_global()
            || self
                .actor_roles
                .iter()
                .any(|role| role.tier() == RoleTier::Global)
    }
}

fn current_from(financers: &[FinancerId], fallback: Option<FinancerId>) -> Option<FinancerId> {
    if financers.len() == 1 {
        Some(financers[0])
    } else {
        fallback
    }
}
