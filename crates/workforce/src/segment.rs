use serde::{Deserialize, Serialize};

use benefika_core::{FinancerId, SegmentId};

/// An employee segment (a saved population filter), owned by one financer.
///
/// Segments are simple single-tenant entities: visibility is a direct match
/// against the financer the actor is currently operating as.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub id: SegmentId,
    pub financer_id: FinancerId,
    pub name: String,
}

impl Segment {
    pub fn new(id: SegmentId, financer_id: FinancerId, name: impl Into<String>) -> Self {
        Self {
            id,
            financer_id,
            name: name.into(),
        }
    }
}
