use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, Status};

/// A task. Tasks may nest as subtasks via `parent_id` and may belong to a
/// project and/or a roadmap.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub is_roadmap: bool,
    /// 0 (highest) through 5 (lowest, default).
    pub priority: u8,
    /// Number of days estimated to complete the task.
    pub due_days: u32,
    pub start_date: Option<DateTime<Utc>>,
    pub status: Status,
    pub parent_id: Option<Uuid>,
    pub project_id: Option<Uuid>,
    pub roadmap_id: Option<Uuid>,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(user_id: Uuid, title: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            description: String::new(),
            is_roadmap: false,
            priority: 5,
            due_days: 0,
            start_date: None,
            status: Status::NotStarted,
            parent_id: None,
            project_id: None,
            roadmap_id: None,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Todo {
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
