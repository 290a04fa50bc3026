use serde::{Deserialize, Serialize};

/// How the current request's visibility scope was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationMode {
    /// The actor sees its own memberships only.
    #[serde(rename = "self")]
    SelfScope,
    /// A platform-tier actor sees the whole financer population.
    Global,
    /// An admin narrowed the request to specific financers it controls.
    TakeControl,
}

impl AuthorizationMode {
    pub fn is_self(&self) -> bool {
        matches!(self, AuthorizationMode::SelfScope)
    }

    pub fn is_global(&self) -> bool {
        matches!(self, AuthorizationMode::Global)
    }

    pub fn is_take_control(&self) -> bool {
        matches!(self, AuthorizationMode::TakeControl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_names_match_wire_values() {
        assert_eq!(
            serde_json::to_string(&AuthorizationMode::SelfScope).unwrap(),
            "\"self\""
        );
        assert_eq!(
            serde_json::to_string(&AuthorizationMode::TakeControl).unwrap(),
            "\"take_control\""
        );
    }
}
