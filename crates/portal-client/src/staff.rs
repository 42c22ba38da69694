//! Staff workflows composed from the raw service contract: the two-phase
//! sign-in, self-registration, application intake, and the dashboard's
//! review and approval operations.

use crate::PortalClient;
use chrono::Utc;
use shared_types::{
    AppError, ApplicationReview, NewStaffApplication, NewStaffMember, ReviewDecision, Session,
    StaffApplication, StaffApproval, StaffMember,
};
use uuid::Uuid;

/// The two record collections owned by the remote service.
pub const STAFF_MEMBERS: &str = "staff_members";
pub const STAFF_APPLICATIONS: &str = "staff_applications";

/// Result of the two-phase staff sign-in.
///
/// Only `Approved` leaves an active session behind; the other outcomes have
/// already signed the session back out, so the caller's visible state is
/// consistent with "not logged in".
#[derive(Debug, Clone, PartialEq)]
pub enum SignInOutcome {
    /// Identity and approval checks both passed.
    Approved(StaffMember),
    /// The identity exists but has no staff record.
    NotRegistered,
    /// A staff record exists but has not been approved yet.
    PendingApproval,
}

/// Both dashboard lists, fetched together.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub applications: Vec<StaffApplication>,
    pub pending_staff: Vec<StaffMember>,
}

/// High-level staff operations over a [`PortalClient`].
#[derive(Clone)]
pub struct StaffPortal {
    client: PortalClient,
}

impl StaffPortal {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &PortalClient {
        &self.client
    }

    /// The staff record linked to an auth identity, if any.
    async fn staff_member_for(&self, user_id: Uuid) -> Result<Option<StaffMember>, AppError> {
        self.client
            .collection(STAFF_MEMBERS)
            .select()
            .eq("user_id", user_id)
            .maybe_single()
            .await
    }

    /// Two-phase sign-in: raw identity check, then the staff-approval
    /// authorization check.
    ///
    /// When the second phase fails — no staff record, or one that is not
    /// approved — the half-open session is signed out again before the
    /// outcome is reported, so a low-level authentication success never
    /// leaks through as "logged in". A lookup failure also reverts the
    /// session and propagates as an error.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInOutcome, AppError> {
        let session = self.client.sign_in_with_password(email, password).await?;

        let member = match self.staff_member_for(session.user.id).await {
            Ok(member) => member,
            Err(err) => {
                let _ = self.client.sign_out().await;
                return Err(err);
            }
        };

        match member {
            None => {
                tracing::info!(user_id = %session.user.id, "sign-in without staff record");
                let _ = self.client.sign_out().await;
                Ok(SignInOutcome::NotRegistered)
            }
            Some(member) if !member.approved => {
                tracing::info!(staff_id = %member.id, "sign-in while awaiting approval");
                let _ = self.client.sign_out().await;
                Ok(SignInOutcome::PendingApproval)
            }
            Some(member) => Ok(SignInOutcome::Approved(member)),
        }
    }

    /// Self-registration: create the auth identity, then the unapproved
    /// staff record linked to it.
    ///
    /// The two steps are not transactional. When the second fails the
    /// identity stays behind without a staff record — the accepted
    /// inconsistency of the original flow. On full success the fresh
    /// session is signed out immediately: the registrant logs in separately
    /// once approved.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        discord_username: &str,
    ) -> Result<(), AppError> {
        let session = self.client.sign_up(email, password).await?;

        let member = NewStaffMember::new(session.user.id, discord_username);
        self.client.collection(STAFF_MEMBERS).insert(&member).await?;

        tracing::info!(user_id = %session.user.id, "staff registration submitted");
        if let Err(err) = self.client.sign_out().await {
            tracing::warn!(error = %err, "post-registration sign-out failed");
        }
        Ok(())
    }

    /// Submit one application with the service-defaulted pending status.
    pub async fn submit_application(
        &self,
        application: &NewStaffApplication,
    ) -> Result<(), AppError> {
        self.client
            .collection(STAFF_APPLICATIONS)
            .insert(application)
            .await
    }

    /// Fetch both dashboard lists: all applications newest-first and all
    /// unapproved staff newest-first. Either failure discards both — no
    /// partial dashboard is ever shown.
    pub async fn load_dashboard(&self) -> Result<DashboardData, AppError> {
        let applications = self
            .client
            .collection(STAFF_APPLICATIONS)
            .select()
            .order_desc("created_at")
            .fetch::<StaffApplication>();
        let pending_staff = self
            .client
            .collection(STAFF_MEMBERS)
            .select()
            .eq("approved", false)
            .order_desc("created_at")
            .fetch::<StaffMember>();

        let (applications, pending_staff) = futures::try_join!(applications, pending_staff)?;
        Ok(DashboardData {
            applications,
            pending_staff,
        })
    }

    /// Resolve a pending application, stamping `reviewed_at` now. Returns
    /// the written fields so the caller can patch its local list to match
    /// what a fresh fetch would return.
    pub async fn review_application(
        &self,
        id: Uuid,
        decision: ReviewDecision,
    ) -> Result<ApplicationReview, AppError> {
        let review = ApplicationReview::new(decision, Utc::now());
        self.client
            .collection(STAFF_APPLICATIONS)
            .update_by_id(id, &review)
            .await?;
        Ok(review)
    }

    /// Approve a pending staff member, recording the approver's own staff
    /// id. Fails loudly when the current session has no staff record — the
    /// viewer should already be approved staff to get here, but the check
    /// stays.
    pub async fn approve_staff(&self, target: Uuid) -> Result<StaffApproval, AppError> {
        let session = self
            .client
            .session()
            .ok_or_else(|| AppError::unauthorized("Not authenticated"))?;

        let approver = self
            .staff_member_for(session.user.id)
            .await?
            .ok_or_else(|| AppError::forbidden("Current staff member not found"))?;

        let approval = StaffApproval::by(approver.id, Utc::now());
        self.client
            .collection(STAFF_MEMBERS)
            .update_by_id(target, &approval)
            .await?;
        tracing::info!(staff_id = %target, approved_by = %approval.approved_by, "staff member approved");
        Ok(approval)
    }

    /// Reject a pending staff member: hard delete, asymmetric with
    /// applications (which are soft-marked rejected).
    pub async fn reject_staff(&self, id: Uuid) -> Result<(), AppError> {
        self.client
            .collection(STAFF_MEMBERS)
            .delete_by_id(id)
            .await?;
        tracing::info!(staff_id = %id, "staff member rejected");
        Ok(())
    }

    /// Whether a session grants dashboard access: it must exist and its
    /// staff record must be approved. Lookup failures degrade to "no
    /// access" rather than propagating — the router treats this check as
    /// advisory and idempotent.
    pub async fn session_grants_access(&self, session: Option<&Session>) -> bool {
        let Some(session) = session else {
            return false;
        };
        match self.staff_member_for(session.user.id).await {
            Ok(Some(member)) => member.approved,
            Ok(None) => false,
            Err(err) => {
                tracing::warn!(error = %err, "staff lookup during session evaluation failed");
                false
            }
        }
    }
}
