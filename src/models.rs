use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Status stored on create when the client supplies none.
pub const DEFAULT_STATUS: &str = "New";

// ============ Database Models ============

/// A row in the `leads` table.
///
/// Every column except `id` and `created_at` is nullable: update overwrites
/// all six mutable columns with exactly what the client sent, so a row can
/// lose its name or email after creation and must still decode.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Lead {
    /// Unique identifier, assigned by the database on insert.
    pub id: i64,
    /// Contact name.
    pub name: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Phone number, free-form.
    pub phone: Option<String>,
    /// Company the lead belongs to.
    pub company: Option<String>,
    /// Pipeline status (e.g. "New", "Contacted").
    pub status: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Set by the database at insert time, never updated afterwards.
    pub created_at: DateTime<Utc>,
}

// ============ Request Models ============

/// Request body shared by create and update.
///
/// Every field is optional at the serde level. Create enforces presence of
/// `name` and `email` through [`LeadPayload::has_required_fields`]; update
/// accepts any combination and writes it verbatim.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub status: Option<String>,
    pub notes: Option<String>,
}

impl LeadPayload {
    /// Whether `name` and `email` are both present and non-empty.
    ///
    /// Absent, null and `""` all count as missing. Whitespace-only values
    /// count as present; nothing is trimmed.
    pub fn has_required_fields(&self) -> bool {
        field_present(&self.name) && field_present(&self.email)
    }

    /// The status to store on create: the submitted value, or
    /// [`DEFAULT_STATUS`] when absent or empty.
    pub fn status_or_default(&self) -> &str {
        match self.status.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => DEFAULT_STATUS,
        }
    }
}

fn field_present(value: &Option<String>) -> bool {
    value.as_deref().map_or(false, |v| !v.is_empty())
}

// ============ Response Models ============

/// Response for a successful create.
#[derive(Debug, Serialize)]
pub struct CreateLeadResponse {
    pub message: String,
    /// Identifier of the newly inserted row.
    pub id: i64,
}

/// Response for the list endpoint.
#[derive(Debug, Serialize)]
pub struct LeadsResponse {
    pub leads: Vec<Lead>,
}

/// Response for the get-by-id endpoint.
#[derive(Debug, Serialize)]
pub struct LeadResponse {
    pub lead: Lead,
}

/// Response for update and delete.
#[derive(Debug, Serialize)]
pub struct ChangesResponse {
    pub message: String,
    /// Number of rows the statement affected.
    pub changes: u64,
}
