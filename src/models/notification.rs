use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Volunteer,
    Achievement,
    System,
}

impl NotificationCategory {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            NotificationCategory::Volunteer => "volunteer",
            NotificationCategory::Achievement => "achievement",
            NotificationCategory::System => "system",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "volunteer" => Some(NotificationCategory::Volunteer),
            "achievement" => Some(NotificationCategory::Achievement),
            "system" => Some(NotificationCategory::System),
            _ => None,
        }
    }
}

/// A row from the `notifications` table.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationRecord {
    pub id: i64,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    pub action_url: Option<String>,
    pub metadata: Value,
    pub is_read: bool,
    pub read_at: Option<String>,
    pub created_at: String,
}

/// Payload for inserting a notification.
#[derive(Debug, Clone)]
pub struct NewNotification {
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    pub action_url: Option<String>,
    pub metadata: Value,
}
