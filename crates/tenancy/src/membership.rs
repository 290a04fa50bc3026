//! Financer memberships: the attachment records between users and tenants.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use benefika_core::{DivisionId, FinancerId};

/// A user's membership in a financer.
///
/// The parent `division_id` is denormalized onto the record so division-level
/// visibility can be computed without a directory lookup. An inactive
/// membership (offboarded employee, suspended access) confers no visibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancerMembership {
    pub financer_id: FinancerId,
    pub division_id: DivisionId,
    pub active: bool,
    pub joined_at: DateTime<Utc>,
}

impl FinancerMembership {
    pub fn active(financer_id: FinancerId, division_id: DivisionId, joined_at: DateTime<Utc>) -> Self {
        Self {
            financer_id,
            division_id,
            active: true,
            joined_at,
        }
    }

    pub fn inactive(
        financer_id: FinancerId,
        division_id: DivisionId,
        joined_at: DateTime<Utc>,
    ) -> Self {
        Self {
            financer_id,
            division_id,
            active: false,
            joined_at,
        }
    }
}

/// Financer IDs of the *active* memberships.
pub fn active_financer_ids(memberships: &[FinancerMembership]) -> HashSet<FinancerId> {
    memberships
        .iter()
        .filter(|m| m.active)
        .map(|m| m.financer_id)
        .collect()
}

/// Division IDs reachable through *active* memberships (deduplicated).
pub fn active_division_ids(memberships: &[FinancerMembership]) -> HashSet<DivisionId> {
    memberships
        .iter()
        .filter(|m| m.active)
        .map(|m| m.division_id)
        .collect()
}

/// Do two membership sets share at least one single active financer?
pub fn share_active_financer(a: &[FinancerMembership], b: &[FinancerMembership]) -> bool {
    let b_ids = active_financer_ids(b);
    memberships_active(a).any(|m| b_ids.contains(&m.financer_id))
}

/// Do two membership sets share at least one division, reached through their
/// respective active memberships? Different financers under the same division
/// qualify.
pub fn share_division(a: &[FinancerMembership], b: &[FinancerMembership]) -> bool {
    let b_ids = active_division_ids(b);
    memberships_active(a).any(|m| b_ids.contains(&m.division_id))
}

fn memberships_active(
    memberships: &[FinancerMembership],
) -> impl Iterator<Item = &FinancerMembership> {
    memberships.iter().filter(|m| m.active)
}
