use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, Status};

/// What kind of material a resource points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum ResourceKind {
    Link = 1,
    Audio = 2,
    Video = 3,
    Notes = 4,
}

impl From<ResourceKind> for u8 {
    fn from(kind: ResourceKind) -> u8 {
        kind as u8
    }
}

impl TryFrom<u8> for ResourceKind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ResourceKind::Link),
            2 => Ok(ResourceKind::Audio),
            3 => Ok(ResourceKind::Video),
            4 => Ok(ResourceKind::Notes),
            other => Err(format!("invalid resource kind: {other}")),
        }
    }
}

/// Reference material attached to a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: Uuid,
    pub kind: ResourceKind,
    pub link: Option<String>,
    pub todo_id: Uuid,
    pub status: Status,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Resource {
    pub fn new(user_id: Uuid, todo_id: Uuid, kind: ResourceKind) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            kind,
            link: None,
            todo_id,
            status: Status::NotStarted,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Resource {
    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.user_id
    }

    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
