//! Preferences handlers.
//!
//! Preferences are created lazily: the first read (or update) for a user
//! materialises a row with defaults.

use actix_web::{HttpResponse, web};

use fintrax_core::domain::Preferences;
use fintrax_shared::ApiResponse;
use fintrax_shared::dto::UpdatePreferencesRequest;

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

async fn get_or_create(state: &AppState, identity: &Identity) -> AppResult<Preferences> {
    let existing = state
        .preferences
        .list(identity.user_id)
        .await?
        .into_iter()
        .next();

    match existing {
        Some(prefs) => Ok(prefs),
        None => {
            let prefs = state
                .preferences
                .insert(Preferences::new(identity.user_id))
                .await?;
            Ok(prefs)
        }
    }
}

/// GET /api/preferences
pub async fn get(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let prefs = get_or_create(&state, &identity).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Preferences fetched successfully", prefs)))
}

/// PATCH /api/preferences
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<UpdatePreferencesRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let mut prefs = get_or_create(&state, &identity).await?;

    if let Some(theme) = req.theme {
        prefs.theme = theme;
    }
    if let Some(color_scheme) = req.color_scheme {
        prefs.color_scheme = color_scheme;
    }
    if let Some(font_size) = req.font_size {
        prefs.font_size = font_size;
    }
    if let Some(language) = req.language {
        prefs.language = language;
    }
    if let Some(timezone) = req.timezone {
        prefs.timezone = timezone;
    }
    if let Some(date_format) = req.date_format {
        prefs.date_format = date_format;
    }
    if let Some(time_format) = req.time_format {
        prefs.time_format = time_format;
    }
    if let Some(currency) = req.currency {
        prefs.currency = currency;
    }
    if let Some(email_notifications) = req.email_notifications {
        prefs.email_notifications = email_notifications;
    }
    if let Some(push_notifications) = req.push_notifications {
        prefs.push_notifications = push_notifications;
    }
    if let Some(task_reminders) = req.task_reminders {
        prefs.task_reminders = task_reminders;
    }
    if let Some(project_updates) = req.project_updates {
        prefs.project_updates = project_updates;
    }
    if let Some(finance_alerts) = req.finance_alerts {
        prefs.finance_alerts = finance_alerts;
    }
    if let Some(weekly_digest) = req.weekly_digest {
        prefs.weekly_digest = weekly_digest;
    }
    if let Some(profile_visibility) = req.profile_visibility {
        prefs.profile_visibility = profile_visibility;
    }
    if let Some(show_online_status) = req.show_online_status {
        prefs.show_online_status = show_online_status;
    }
    if let Some(allow_data_collection) = req.allow_data_collection {
        prefs.allow_data_collection = allow_data_collection;
    }
    if let Some(default_transaction_type) = req.default_transaction_type {
        prefs.default_transaction_type = default_transaction_type;
    }
    if let Some(show_balance) = req.show_balance {
        prefs.show_balance = show_balance;
    }
    if let Some(budget_warnings) = req.budget_warnings {
        prefs.budget_warnings = budget_warnings;
    }
    if let Some(default_dashboard_view) = req.default_dashboard_view {
        prefs.default_dashboard_view = default_dashboard_view;
    }
    if let Some(tasks_per_page) = req.tasks_per_page {
        prefs.tasks_per_page = tasks_per_page;
    }
    if let Some(compact_mode) = req.compact_mode {
        prefs.compact_mode = compact_mode;
    }
    prefs.updated_at = chrono::Utc::now();

    let saved = state.preferences.update(prefs).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Preferences updated successfully", saved)))
}
