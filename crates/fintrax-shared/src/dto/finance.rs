use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use fintrax_core::domain::{FlowKind, Status};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFinanceRequest {
    pub balance: Option<f64>,
    pub total_debt: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSavingsRequest {
    pub name: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub target_amount: Option<f64>,
    #[serde(default)]
    pub rate: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSavingsRequest {
    pub name: Option<String>,
    pub amount: Option<f64>,
    pub target_amount: Option<f64>,
    pub rate: Option<f64>,
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLoanRequest {
    pub name: String,
    pub total_amount: f64,
    #[serde(default)]
    pub rate: Option<f64>,
    #[serde(default)]
    pub term: Option<u32>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub premium_amount: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateLoanRequest {
    pub name: Option<String>,
    pub total_amount: Option<f64>,
    pub rate: Option<f64>,
    pub term: Option<u32>,
    pub duration: Option<u32>,
    pub premium_amount: Option<f64>,
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    pub source: String,
    pub amount: f64,
    pub flow: FlowKind,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub note_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTransactionRequest {
    pub source: Option<String>,
    pub category: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub note_id: Option<Uuid>,
    pub status: Option<Status>,
}

/// Partial update of per-user preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePreferencesRequest {
    pub theme: Option<String>,
    pub color_scheme: Option<String>,
    pub font_size: Option<String>,
    pub language: Option<String>,
    pub timezone: Option<String>,
    pub date_format: Option<String>,
    pub time_format: Option<String>,
    pub currency: Option<String>,
    pub email_notifications: Option<bool>,
    pub push_notifications: Option<bool>,
    pub task_reminders: Option<bool>,
    pub project_updates: Option<bool>,
    pub finance_alerts: Option<bool>,
    pub weekly_digest: Option<bool>,
    pub profile_visibility: Option<String>,
    pub show_online_status: Option<bool>,
    pub allow_data_collection: Option<bool>,
    pub default_transaction_type: Option<FlowKind>,
    pub show_balance: Option<bool>,
    pub budget_warnings: Option<bool>,
    pub default_dashboard_view: Option<String>,
    pub tasks_per_page: Option<u32>,
    pub compact_mode: Option<bool>,
}

/// Aggregated figures for the dashboard view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub total_balance: f64,
    pub total_debt: f64,
    pub total_savings: f64,
    pub total_loans: f64,
    pub total_income: f64,
    pub total_expense: f64,
    pub net_worth: f64,
    pub total_todo: usize,
    pub total_projects: usize,
    pub active_roadmaps: usize,
}
