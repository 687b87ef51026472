use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, Status};

/// Per-user financial position, created with zeroed figures at
/// registration. Transactions adjust it as they are recorded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceAccount {
    pub id: Uuid,
    pub balance: f64,
    pub total_debt: f64,
    pub status: Status,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FinanceAccount {
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            balance: 0.0,
            total_debt: 0.0,
            status: Status::NotStarted,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for FinanceAccount {
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
