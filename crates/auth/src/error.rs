//! Authorization errors for the request boundary.
//!
//! Policy decisions are booleans; these errors exist only at the boundary
//! where the request-handling layer converts a deny into an HTTP 403.

use thiserror::Error;

use benefika_core::{DivisionId, FinancerId};

use crate::actor::Capabilities;
use crate::permission::Permission;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("financer {0} is outside your authorization scope")]
    FinancerOutOfScope(FinancerId),

    #[error("division {0} is outside your authorization scope")]
    DivisionOutOfScope(DivisionId),

    #[error("forbidden: missing permission {0:?}")]
    MissingPermission(Permission),

    #[error("forbidden")]
    Forbidden,
}

/// Convert a policy decision into a boundary error.
pub fn ensure(allowed: bool) -> Result<(), AuthzError> {
    if allowed { Ok(()) } else { Err(AuthzError::Forbidden) }
}

/// Require a permission grant on the actor, for command-style endpoints that
/// gate on a capability without a target entity.
pub fn require_permission(
    actor: &impl Capabilities,
    permission: Permission,
) -> Result<(), AuthzError> {
    if actor.has_permission(permission) {
        Ok(())
    } else {
        Err(AuthzError::MissingPermission(permission))
    }
}
