use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use benefika_core::{FinancerId, UserId};
use benefika_tenancy::FinancerMembership;

use crate::permission::Permission;
use crate::role::Role;

/// Access-token claims (transport-agnostic).
///
/// The minimal set of claims the platform expects once a token has been
/// decoded and signature-verified by the identity provider integration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the authenticated user.
    pub sub: UserId,

    /// Roles granted to the subject.
    pub roles: Vec<Role>,

    /// Direct grants outside the role mapping.
    #[serde(default)]
    pub permissions: Vec<Permission>,

    /// The subject's financer memberships at token issue time.
    pub memberships: Vec<FinancerMembership>,

    /// The financer the subject was operating as, if any.
    #[serde(default)]
    pub current_financer_id: Option<FinancerId>,

    pub issued_at: DateTime<Utc>,

    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate the claims' time window.
///
/// Signature verification and decoding are intentionally outside this crate.
pub fn validate_claims(
    claims: &AccessClaims,
    now: DateTime<Utc>,
) -> Result<(), TokenValidationError> {
    if claims.expires_at <= claims.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}
