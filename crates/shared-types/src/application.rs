use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Minimum applicant age accepted by the form.
pub const MIN_APPLICANT_AGE: i32 = 13;

/// Review state of a staff application.
///
/// The only legal transitions are `Pending -> Approved` and
/// `Pending -> Rejected`; reviewed applications never return to pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    /// Wire/display form of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Parse a status string, falling back to Pending.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "approved" => ApplicationStatus::Approved,
            "rejected" => ApplicationStatus::Rejected,
            _ => ApplicationStatus::Pending,
        }
    }

    /// Whether moving from `self` to `next` is a legal review transition.
    pub fn can_transition_to(&self, next: ApplicationStatus) -> bool {
        matches!(
            (self, next),
            (
                ApplicationStatus::Pending,
                ApplicationStatus::Approved | ApplicationStatus::Rejected
            )
        )
    }

    pub fn is_pending(&self) -> bool {
        *self == ApplicationStatus::Pending
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The reviewer's decision on a pending application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    /// The status this decision moves the application to.
    pub fn status(&self) -> ApplicationStatus {
        match self {
            ReviewDecision::Approve => ApplicationStatus::Approved,
            ReviewDecision::Reject => ApplicationStatus::Rejected,
        }
    }
}

/// A recruitment submission from the `staff_applications` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffApplication {
    pub id: Uuid,
    pub discord_username: String,
    pub discord_id: String,
    pub age: i32,
    pub timezone: String,
    pub experience: String,
    pub why_join: String,
    pub availability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
}

/// Insert payload for a new application. `status` is left to the service
/// default (pending); empty additional info is submitted as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStaffApplication {
    pub discord_username: String,
    pub discord_id: String,
    pub age: i32,
    pub timezone: String,
    pub experience: String,
    pub why_join: String,
    pub availability: String,
    pub additional_info: Option<String>,
}

/// Update payload written when a reviewer resolves a pending application.
/// `reviewed_at` is set exactly when status leaves pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationReview {
    pub status: ApplicationStatus,
    pub reviewed_at: DateTime<Utc>,
}

impl ApplicationReview {
    pub fn new(decision: ReviewDecision, at: DateTime<Utc>) -> Self {
        Self {
            status: decision.status(),
            reviewed_at: at,
        }
    }
}
