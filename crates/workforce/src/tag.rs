use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use benefika_core::{DivisionId, FinancerId, TagId};

/// An employee tag, owned by a financer.
///
/// The owner's parent division is denormalized onto the tag: a tag is
/// reachable both by admins of its financer and by admins of that financer's
/// division.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: TagId,
    pub financer_id: FinancerId,
    pub division_id: DivisionId,
    /// Localized display names, keyed by locale (`en-GB`, `fr-FR`, …).
    pub name: BTreeMap<String, String>,
}

impl Tag {
    pub fn new(id: TagId, financer_id: FinancerId, division_id: DivisionId) -> Self {
        Self {
            id,
            financer_id,
            division_id,
            name: BTreeMap::new(),
        }
    }

    pub fn with_name(mut self, locale: impl Into<String>, name: impl Into<String>) -> Self {
        self.name.insert(locale.into(), name.into());
        self
    }
}
