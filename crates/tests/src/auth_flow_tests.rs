use crate::common::start_service;
use chrono::Utc;
use portal_client::SignInOutcome;
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

const EMAIL: &str = "staff@example.com";
const PASSWORD: &str = "hunter22";

// ─── Sign-in outcomes ───────────────────────────────────────────────────────

#[tokio::test]
async fn sign_in_without_staff_record_reverts_session() {
    let service = start_service().await;
    service.seed_identity(EMAIL, PASSWORD);
    let portal = service.portal();

    let outcome = portal.sign_in(EMAIL, PASSWORD).await.expect("sign-in flow");

    assert_eq!(outcome, SignInOutcome::NotRegistered);
    assert!(
        portal.client().session().is_none(),
        "no session may remain after the authorization check fails"
    );
    assert_eq!(
        service.active_session_count(),
        0,
        "the compensating sign-out must reach the service"
    );
}

#[tokio::test]
async fn sign_in_with_unapproved_staff_reverts_session() {
    let service = start_service().await;
    let user_id = service.seed_identity(EMAIL, PASSWORD);
    service.seed_staff_member(user_id, "mod#1234", false, Utc::now());
    let portal = service.portal();

    let outcome = portal.sign_in(EMAIL, PASSWORD).await.expect("sign-in flow");

    assert_eq!(outcome, SignInOutcome::PendingApproval);
    assert!(portal.client().session().is_none());
    assert_eq!(service.active_session_count(), 0);
}

#[tokio::test]
async fn sign_in_with_approved_staff_keeps_session() {
    let service = start_service().await;
    let user_id = service.seed_identity(EMAIL, PASSWORD);
    let seeded = service.seed_staff_member(user_id, "mod#1234", true, Utc::now());
    let portal = service.portal();

    let outcome = portal.sign_in(EMAIL, PASSWORD).await.expect("sign-in flow");

    match outcome {
        SignInOutcome::Approved(member) => {
            assert_eq!(member.id, seeded.id);
            assert_eq!(member.discord_username, "mod#1234");
        }
        other => panic!("expected Approved, got {other:?}"),
    }
    let session = portal.client().session().expect("session must stay active");
    assert_eq!(session.user.id, user_id);
    assert_eq!(service.active_session_count(), 1);
}

#[tokio::test]
async fn sign_in_with_bad_credentials_is_an_error() {
    let service = start_service().await;
    service.seed_identity(EMAIL, PASSWORD);
    let portal = service.portal();

    let err = portal
        .sign_in(EMAIL, "wrong-password")
        .await
        .expect_err("bad credentials must fail");

    assert_eq!(err.kind, AppErrorKind::BadRequest);
    assert_eq!(err.message, "Invalid login credentials");
    assert!(portal.client().session().is_none());
}

// ─── Session change notifications ───────────────────────────────────────────

#[tokio::test]
async fn session_changes_notify_subscribers() {
    let service = start_service().await;
    let user_id = service.seed_identity(EMAIL, PASSWORD);
    service.seed_staff_member(user_id, "mod#1234", true, Utc::now());
    let portal = service.portal();
    let mut events = portal.client().on_session_change();

    portal.sign_in(EMAIL, PASSWORD).await.expect("sign-in flow");
    portal.client().sign_out().await.expect("sign-out");

    let first = events.try_next().unwrap().flatten();
    assert_eq!(
        first.map(|s| s.user.id),
        Some(user_id),
        "first event carries the new session"
    );
    let second = events.try_next().unwrap();
    assert_eq!(second, Some(None), "sign-out delivers an empty session");
}

#[tokio::test]
async fn reverted_sign_in_notifies_both_changes() {
    let service = start_service().await;
    service.seed_identity(EMAIL, PASSWORD);
    let portal = service.portal();
    let mut events = portal.client().on_session_change();

    portal.sign_in(EMAIL, PASSWORD).await.expect("sign-in flow");

    // The half-open session appears, then the compensating sign-out.
    assert!(events.try_next().unwrap().flatten().is_some());
    assert_eq!(events.try_next().unwrap(), Some(None));
}

// ─── Session restore ────────────────────────────────────────────────────────

#[tokio::test]
async fn current_session_returns_active_session() {
    let service = start_service().await;
    let user_id = service.seed_identity(EMAIL, PASSWORD);
    service.seed_staff_member(user_id, "mod#1234", true, Utc::now());
    let portal = service.portal();
    portal.sign_in(EMAIL, PASSWORD).await.expect("sign-in flow");

    let session = portal
        .client()
        .current_session()
        .await
        .expect("session check")
        .expect("session should exist");
    assert_eq!(session.user.email, EMAIL);
}

#[tokio::test]
async fn revoked_session_degrades_to_signed_out() {
    let service = start_service().await;
    let user_id = service.seed_identity(EMAIL, PASSWORD);
    service.seed_staff_member(user_id, "mod#1234", true, Utc::now());
    let portal = service.portal();
    portal.sign_in(EMAIL, PASSWORD).await.expect("sign-in flow");

    // The service revokes the session out from under the client.
    service.state().sessions.clear();

    let session = portal
        .client()
        .current_session()
        .await
        .expect("session check");
    assert_eq!(session, None);
    assert!(
        portal.client().session().is_none(),
        "stale local state must be cleared, not trusted"
    );
}

#[tokio::test]
async fn current_session_without_sign_in_is_none() {
    let service = start_service().await;
    let portal = service.portal();

    let session = portal
        .client()
        .current_session()
        .await
        .expect("session check");
    assert_eq!(session, None);
}

// ─── Access evaluation (router re-check) ────────────────────────────────────

#[tokio::test]
async fn access_requires_approved_staff_record() {
    let service = start_service().await;
    let user_id = service.seed_identity(EMAIL, PASSWORD);
    let seeded = service.seed_staff_member(user_id, "mod#1234", true, Utc::now());
    let portal = service.portal();
    portal.sign_in(EMAIL, PASSWORD).await.expect("sign-in flow");
    let session = portal.client().session();

    assert!(portal.session_grants_access(session.as_ref()).await);
    assert!(!portal.session_grants_access(None).await);

    // Approval withdrawn server-side: the same session no longer grants
    // access on re-evaluation.
    service
        .state()
        .staff_members
        .iter_mut()
        .find(|m| m.id == seeded.id)
        .expect("seeded member")
        .approved = false;
    assert!(!portal.session_grants_access(session.as_ref()).await);
}
