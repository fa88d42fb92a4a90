// src/models/settings.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

// Ainda não há configurações por usuário: todo mundo compartilha este registro
pub const DEFAULT_SETTINGS_USER: &str = "default-user";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub bio: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notifications {
    #[serde(default = "enabled")]
    pub email_notifications: bool,
    #[serde(default = "enabled")]
    pub push_notifications: bool,
    #[serde(default = "enabled")]
    pub lead_updates: bool,
    #[serde(default = "enabled")]
    pub team_mentions: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_accent")]
    #[schema(example = "#6366f1")]
    pub accent_color: String,
}

fn enabled() -> bool {
    true
}

fn default_accent() -> String {
    "#6366f1".to_string()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            first_name: "Admin".to_string(),
            last_name: "User".to_string(),
            email: "admin@test.com".to_string(),
            bio: String::new(),
            avatar: None,
        }
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            lead_updates: true,
            team_mentions: true,
        }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            accent_color: default_accent(),
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub user_id: String,
    #[sqlx(json)]
    pub profile: Profile,
    #[sqlx(json)]
    pub notifications: Notifications,
    #[sqlx(json)]
    pub appearance: Appearance,
    #[schema(example = "ru")]
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Cada seção enviada substitui a seção inteira
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingsRequest {
    pub profile: Option<Profile>,
    pub notifications: Option<Notifications>,
    pub appearance: Option<Appearance>,
    #[schema(example = "kk")]
    pub language: Option<String>,
}
