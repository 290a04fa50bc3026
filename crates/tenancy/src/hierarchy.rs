use serde::{Deserialize, Serialize};

use benefika_core::{DivisionId, FinancerId};

/// Top level of the tenant hierarchy.
///
/// Divisions group financers commercially (a reseller, a country entity, …)
/// and are the scoping level for division-tier roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    pub id: DivisionId,
    pub name: String,
}

impl Division {
    pub fn new(id: DivisionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A financer: the paying tenant organisation.
///
/// The primary isolation boundary for most entities. `division_id` is
/// immutable after creation — a financer never moves between divisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Financer {
    pub id: FinancerId,
    pub division_id: DivisionId,
    pub name: String,
}

impl Financer {
    pub fn new(id: FinancerId, division_id: DivisionId, name: impl Into<String>) -> Self {
        Self {
            id,
            division_id,
            name: name.into(),
        }
    }
}
