use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Authorization class of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Primary authority: sees the dashboard, analytics and calendar
    Commander,
    /// Field operative: files threat reports from the field
    FieldAgent,
}

impl Role {
    /// Every role, in directory order.
    pub const ALL: [Role; 2] = [Role::Commander, Role::FieldAgent];

    /// Wire name, as stored in session snapshots
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Commander => "COMMANDER",
            Role::FieldAgent => "FIELD_AGENT",
        }
    }

    /// Human readable name shown next to the user's display name
    pub fn label(&self) -> &'static str {
        match self {
            Role::Commander => "COMMANDER",
            Role::FieldAgent => "FIELD AGENT",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user record for the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    /// Login handle
    pub username: String,
    /// Display name
    pub name: String,
    role: Role,
    pub last_active: DateTime<Utc>,
}

impl Identity {
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            name: name.into(),
            role,
            last_active: Utc::now(),
        }
    }

    /// Role is fixed at creation; there is no setter.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Refresh the last-active timestamp
    pub fn touch(&mut self) {
        self.last_active = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Commander).unwrap(), "\"COMMANDER\"");
        assert_eq!(serde_json::to_string(&Role::FieldAgent).unwrap(), "\"FIELD_AGENT\"");

        let role: Role = serde_json::from_str("\"FIELD_AGENT\"").unwrap();
        assert_eq!(role, Role::FieldAgent);
    }

    #[test]
    fn test_role_label() {
        assert_eq!(Role::Commander.label(), "COMMANDER");
        assert_eq!(Role::FieldAgent.label(), "FIELD AGENT");
        assert_eq!(Role::FieldAgent.to_string(), "FIELD_AGENT");
    }

    #[test]
    fn test_identity_serializes_flat_camel_case() {
        let identity = Identity::new("1", "commander", "Commander Anil", Role::Commander);
        let value = serde_json::to_value(&identity).unwrap();

        assert_eq!(value["id"], "1");
        assert_eq!(value["username"], "commander");
        assert_eq!(value["name"], "Commander Anil");
        assert_eq!(value["role"], "COMMANDER");
        assert!(value["lastActive"].is_string());
    }

    #[test]
    fn test_touch_moves_last_active_forward() {
        let mut identity = Identity::new("2", "agent", "Agent Rudra", Role::FieldAgent);
        let before = identity.last_active;
        identity.touch();
        assert!(identity.last_active >= before);
    }
}
