use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, FlowKind, Status};

/// Per-user display, locale, notification, and privacy settings.
///
/// One row per user, created lazily with defaults on first read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    pub id: Uuid,
    pub user_id: Uuid,

    // Appearance
    pub theme: String,
    pub color_scheme: String,
    pub font_size: String,

    // Language & localization
    pub language: String,
    pub timezone: String,
    pub date_format: String,
    pub time_format: String,
    pub currency: String,

    // Notifications
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub task_reminders: bool,
    pub project_updates: bool,
    pub finance_alerts: bool,
    pub weekly_digest: bool,

    // Privacy
    pub profile_visibility: String,
    pub show_online_status: bool,
    pub allow_data_collection: bool,

    // Finance
    pub default_transaction_type: FlowKind,
    pub show_balance: bool,
    pub budget_warnings: bool,

    // Dashboard & display
    pub default_dashboard_view: String,
    pub tasks_per_page: u32,
    pub compact_mode: bool,

    pub status: Status,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Preferences {
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            theme: "light".to_string(),
            color_scheme: "blue".to_string(),
            font_size: "medium".to_string(),
            language: "en".to_string(),
            timezone: "UTC".to_string(),
            date_format: "MM/DD/YYYY".to_string(),
            time_format: "12h".to_string(),
            currency: "USD".to_string(),
            email_notifications: true,
            push_notifications: true,
            task_reminders: true,
            project_updates: true,
            finance_alerts: true,
            weekly_digest: false,
            profile_visibility: "private".to_string(),
            show_online_status: true,
            allow_data_collection: true,
            default_transaction_type: FlowKind::Expense,
            show_balance: true,
            budget_warnings: true,
            default_dashboard_view: "overview".to_string(),
            tasks_per_page: 20,
            compact_mode: false,
            status: Status::NotStarted,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Preferences {
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
