pub mod apply;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod register;

use crate::auth::use_auth;
use dioxus::prelude::*;
use portal_client::StaffPortal;

use apply::Apply;
use home::Home;
use login::Login;
use register::Register;

/// Application routes. `Dashboard` is the only gated state: without an
/// authenticated approved-staff session it silently renders the home screen
/// instead.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/apply")]
    Apply {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/dashboard")]
    Dashboard {},
}

/// Root layout. Two jobs for the app's lifetime:
///
/// 1. On mount, ask the service for an existing session; when it belongs to
///    an approved staff member, jump straight to the dashboard.
/// 2. Hold a session-change subscription and re-evaluate staff
///    authorization on every change. The receiver lives inside the future,
///    so unmounting drops it and unsubscribes. Handling is sequential —
///    one change at a time — and re-evaluating the same session is
///    idempotent.
#[component]
fn Shell() -> Element {
    let portal = use_context::<StaffPortal>();
    let mut auth = use_auth();

    {
        let portal = portal.clone();
        use_future(move || {
            let portal = portal.clone();
            async move {
                match portal.client().current_session().await {
                    Ok(session) => {
                        if portal.session_grants_access(session.as_ref()).await {
                            auth.set_authenticated(true);
                            navigator().push(Route::Dashboard {});
                        }
                    }
                    Err(err) => tracing::warn!(error = %err, "session restore failed"),
                }
            }
        });
    }

    use_future(move || {
        let portal = portal.clone();
        async move {
            let mut events = portal.client().on_session_change();
            while let Some(session) = events.changed().await {
                let granted = portal.session_grants_access(session.as_ref()).await;
                auth.set_authenticated(granted);
            }
        }
    });

    rsx! { Outlet::<Route> {} }
}

/// Gate in front of the dashboard: unauthenticated visits fall back to the
/// home screen without an error or redirect flash.
#[component]
fn Dashboard() -> Element {
    let auth = use_auth();

    if auth.is_authenticated() {
        rsx! { dashboard::DashboardPage {} }
    } else {
        rsx! { Home {} }
    }
}
