use chrono::NaiveDate;
use serde::Serialize;

/// A volunteer-hour claim as stored in `hour_entries`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourEntry {
    pub id: i64,
    pub owner_id: String,               // ⇔ hour_entries.owner_id (immutable)
    pub organization: String,           // ⇔ hour_entries.organization
    pub description: String,            // ⇔ hour_entries.description
    pub location: Option<String>,       // ⇔ hour_entries.location
    pub supervisor_name: Option<String>,
    pub supervisor_email: Option<String>,
    pub hours: f64,                     // ⇔ hour_entries.hours (REAL, > 0)
    pub date: NaiveDate,                // ⇔ hour_entries.date (TEXT "YYYY-MM-DD")
    pub verified: bool,                 // ⇔ hour_entries.verified (0/1)
    pub verification_code: String,      // ⇔ hour_entries.verification_code (UNIQUE)
    pub created_at: String,             // ISO8601
    pub updated_at: String,             // ISO8601
}

impl HourEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn status_label(&self) -> &'static str {
        if self.verified { "verified" } else { "pending" }
    }
}

/// Fields accepted when logging new hours.
#[derive(Debug, Clone, Default)]
pub struct NewHourEntry {
    pub organization: String,
    pub description: String,
    pub hours: f64,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub supervisor_name: Option<String>,
    pub supervisor_email: Option<String>,
}

/// Partial update of an entry. `None` leaves a field untouched; for the
/// optional text fields `Some("")` clears the stored value.
#[derive(Debug, Clone, Default)]
pub struct HourEntryPatch {
    pub organization: Option<String>,
    pub description: Option<String>,
    pub hours: Option<f64>,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub supervisor_name: Option<String>,
    pub supervisor_email: Option<String>,
    pub verified: Option<bool>,
}

impl HourEntryPatch {
    pub fn is_empty(&self) -> bool {
        self.organization.is_none()
            && self.description.is_none()
            && self.hours.is_none()
            && self.date.is_none()
            && self.location.is_none()
            && self.supervisor_name.is_none()
            && self.supervisor_email.is_none()
            && self.verified.is_none()
    }
}

/// Filters for listing a user's entries.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub verified: Option<bool>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
