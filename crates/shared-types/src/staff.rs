use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to every self-registered staff member until an admin
/// changes it out of band.
pub const DEFAULT_STAFF_ROLE: &str = "moderator";

/// A staff member record from the `staff_members` collection.
///
/// Usable for dashboard access only when `approved` is true. Records are
/// created unapproved; only an existing approved member flips the flag,
/// recording itself in `approved_by`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: Uuid,
    pub user_id: Uuid,
    pub discord_username: String,
    pub role: String,
    #[serde(default)]
    pub approved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new, unapproved staff member. Service-defaulted
/// columns (id, approved, timestamps) are deliberately absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStaffMember {
    pub user_id: Uuid,
    pub discord_username: String,
    pub role: String,
}

impl NewStaffMember {
    pub fn new(user_id: Uuid, discord_username: impl Into<String>) -> Self {
        Self {
            user_id,
            discord_username: discord_username.into(),
            role: DEFAULT_STAFF_ROLE.to_string(),
        }
    }
}

/// Update payload written when an approver grants staff status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffApproval {
    pub approved: bool,
    pub approved_by: Uuid,
    pub approved_at: DateTime<Utc>,
}

impl StaffApproval {
    /// Approval stamped with the approver's own staff id and the given time.
    pub fn by(approver: Uuid, at: DateTime<Utc>) -> Self {
        Self {
            approved: true,
            approved_by: approver,
            approved_at: at,
        }
    }
}
