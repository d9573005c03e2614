use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCheckId(Uuid);

impl StatusCheckId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for StatusCheckId {
    fn default() -> Self {
        Self::new()
    }
}

/// A client liveness record.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusCheck {
    pub id: StatusCheckId,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusCheck {
    pub fn new(client_name: String) -> Self {
        Self {
            id: StatusCheckId::new(),
            client_name,
            timestamp: Utc::now(),
        }
    }
}
