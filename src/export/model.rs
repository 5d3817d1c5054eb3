use crate::models::hour_entry::HourEntry;
use serde::Serialize;

/// Flat row used for CSV / JSON exports of hour entries.
/// The verification code is never exported.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub date: String,
    pub organization: String,
    pub description: String,
    pub hours: f64,
    pub status: String,
    pub location: String,
    pub supervisor_name: String,
    pub supervisor_email: String,
}

impl From<&HourEntry> for EntryExport {
    fn from(e: &HourEntry) -> Self {
        Self {
            id: e.id,
            date: e.date_str(),
            organization: e.organization.clone(),
            description: e.description.clone(),
            hours: e.hours,
            status: e.status_label().to_string(),
            location: e.location.clone().unwrap_or_default(),
            supervisor_name: e.supervisor_name.clone().unwrap_or_default(),
            supervisor_email: e.supervisor_email.clone().unwrap_or_default(),
        }
    }
}
