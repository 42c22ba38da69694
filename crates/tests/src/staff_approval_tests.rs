use crate::common::start_service;
use chrono::Utc;
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

const APPROVER_EMAIL: &str = "approver@example.com";
const PASSWORD: &str = "hunter22";

// ─── Approve ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn approving_records_the_approvers_staff_id() {
    let service = start_service().await;
    let approver_user = service.seed_identity(APPROVER_EMAIL, PASSWORD);
    let approver = service.seed_staff_member(approver_user, "senior#0001", true, Utc::now());
    let pending = service.seed_staff_member(uuid::Uuid::new_v4(), "junior#0002", false, Utc::now());

    let portal = service.portal();
    portal
        .sign_in(APPROVER_EMAIL, PASSWORD)
        .await
        .expect("approver sign-in");

    let approval = portal.approve_staff(pending.id).await.expect("approval");

    assert_eq!(approval.approved_by, approver.id);

    let state = service.state();
    let row = state
        .staff_members
        .iter()
        .find(|m| m.id == pending.id)
        .expect("target row");
    assert!(row.approved);
    assert_eq!(row.approved_by, Some(approver.id));
    assert_eq!(row.approved_at, Some(approval.approved_at));
}

#[tokio::test]
async fn approved_member_leaves_the_pending_list() {
    let service = start_service().await;
    let approver_user = service.seed_identity(APPROVER_EMAIL, PASSWORD);
    service.seed_staff_member(approver_user, "senior#0001", true, Utc::now());
    let pending = service.seed_staff_member(uuid::Uuid::new_v4(), "junior#0002", false, Utc::now());

    let portal = service.portal();
    portal
        .sign_in(APPROVER_EMAIL, PASSWORD)
        .await
        .expect("approver sign-in");
    portal.approve_staff(pending.id).await.expect("approval");

    let data = portal.load_dashboard().await.expect("dashboard fetch");
    assert!(
        data.pending_staff.iter().all(|m| m.id != pending.id),
        "approved members are no longer pending"
    );
}

#[tokio::test]
async fn approving_without_a_session_fails_loudly() {
    let service = start_service().await;
    let pending = service.seed_staff_member(uuid::Uuid::new_v4(), "junior#0002", false, Utc::now());
    let portal = service.portal();

    let err = portal
        .approve_staff(pending.id)
        .await
        .expect_err("no session");

    assert_eq!(err.kind, AppErrorKind::Unauthorized);
    assert!(!service.state().staff_members[0].approved);
}

#[tokio::test]
async fn approving_without_own_staff_record_fails_loudly() {
    // Defensive check: the viewer should already be approved staff, but if
    // their record vanished mid-session the approval must not go through.
    let service = start_service().await;
    let approver_user = service.seed_identity(APPROVER_EMAIL, PASSWORD);
    let approver = service.seed_staff_member(approver_user, "senior#0001", true, Utc::now());
    let pending = service.seed_staff_member(uuid::Uuid::new_v4(), "junior#0002", false, Utc::now());

    let portal = service.portal();
    portal
        .sign_in(APPROVER_EMAIL, PASSWORD)
        .await
        .expect("approver sign-in");

    service.state().staff_members.retain(|m| m.id != approver.id);

    let err = portal
        .approve_staff(pending.id)
        .await
        .expect_err("no staff record for the session");

    assert_eq!(err.kind, AppErrorKind::Forbidden);
    assert_eq!(err.message, "Current staff member not found");
}

// ─── Reject ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn rejecting_hard_deletes_the_member() {
    let service = start_service().await;
    let pending = service.seed_staff_member(uuid::Uuid::new_v4(), "junior#0002", false, Utc::now());
    let portal = service.portal();

    portal.reject_staff(pending.id).await.expect("rejection");

    assert!(
        service.state().staff_members.is_empty(),
        "rejection deletes the record outright, unlike applications"
    );

    let data = portal.load_dashboard().await.expect("dashboard fetch");
    assert!(data.pending_staff.is_empty());
}
