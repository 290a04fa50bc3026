use serde::{Deserialize, Serialize};

use benefika_core::{DivisionId, FinancerId, TopicId};

/// Which level of the hierarchy a notification topic belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "level", content = "id", rename_all = "snake_case")]
pub enum TopicScope {
    Financer(FinancerId),
    Division(DivisionId),
}

/// A notification topic employees can subscribe to.
///
/// Topics are created either for a single financer or for a whole division;
/// the scope picks which visibility set applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationTopic {
    pub id: TopicId,
    pub name: String,
    pub scope: TopicScope,
}

impl NotificationTopic {
    pub fn new(id: TopicId, name: impl Into<String>, scope: TopicScope) -> Self {
        Self {
            id,
            name: name.into(),
            scope,
        }
    }
}
