use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use benefika_core::{DivisionId, FinancerId, UserId};
use benefika_tenancy::FinancerMembership;
use benefika_tenancy::membership;

/// User account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Invitation sent, account not yet claimed.
    Invited,
    /// Active employee account.
    #[default]
    Active,
    /// Access suspended.
    Suspended,
}

/// A user record as seen by policies: identity plus tenant attachments.
///
/// This is the *target* side of user-to-user authorization; the acting side
/// is `benefika_auth::Actor`. Both carry the same membership records so the
/// sharing checks are symmetric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub status: UserStatus,
    pub memberships: Vec<FinancerMembership>,
}

impl UserProfile {
    pub fn new(user_id: UserId, email: impl Into<String>) -> Self {
        Self {
            user_id,
            email: email.into(),
            first_name: String::new(),
            last_name: String::new(),
            status: UserStatus::Active,
            memberships: Vec::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Financer IDs of the profile's active memberships.
    pub fn active_financer_ids(&self) -> HashSet<FinancerId> {
        membership::active_financer_ids(&self.memberships)
    }

    /// Division IDs reachable through the profile's active memberships.
    pub fn division_ids(&self) -> HashSet<DivisionId> {
        membership::active_division_ids(&self.memberships)
    }
}
