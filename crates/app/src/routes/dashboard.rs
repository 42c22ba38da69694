use crate::auth::use_auth;
use crate::routes::Route;
use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdArrowLeft, LdCircleCheck, LdCircleX, LdClock, LdLogOut, LdUserPlus,
};
use dioxus_free_icons::Icon;
use portal_client::StaffPortal;
use shared_types::{ApplicationStatus, ReviewDecision, StaffApplication, StaffMember};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, PageActions, PageHeader, PageTitle, Skeleton,
    TabContent, TabList, TabTrigger, Tabs,
};
use uuid::Uuid;

/// Client-side filter over the fetched application list. Counts are derived
/// from the list in memory, never re-fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum StatusFilter {
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    const ALL: [StatusFilter; 4] = [
        StatusFilter::All,
        StatusFilter::Pending,
        StatusFilter::Approved,
        StatusFilter::Rejected,
    ];

    fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Pending => "Pending",
            StatusFilter::Approved => "Approved",
            StatusFilter::Rejected => "Rejected",
        }
    }

    fn matches(&self, status: ApplicationStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == ApplicationStatus::Pending,
            StatusFilter::Approved => status == ApplicationStatus::Approved,
            StatusFilter::Rejected => status == ApplicationStatus::Rejected,
        }
    }

    fn count(&self, applications: &[StaffApplication]) -> usize {
        applications
            .iter()
            .filter(|a| self.matches(a.status))
            .count()
    }
}

fn format_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

/// Staff dashboard: review applications and pending staff registrations.
///
/// Mounting fetches both lists together; either failure discards both, so
/// no partial dashboard is shown. Mutations update the service first, then
/// patch the in-memory list to what a fresh fetch would return.
#[component]
pub fn DashboardPage() -> Element {
    let portal = use_context::<StaffPortal>();
    let mut auth = use_auth();
    let mut applications = use_signal(Vec::<StaffApplication>::new);
    let mut pending_staff = use_signal(Vec::<StaffMember>::new);
    let mut loading = use_signal(|| true);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut filter = use_signal(StatusFilter::default);

    {
        let portal = portal.clone();
        use_future(move || {
            let portal = portal.clone();
            async move {
                match portal.load_dashboard().await {
                    Ok(data) => {
                        applications.set(data.applications);
                        pending_staff.set(data.pending_staff);
                    }
                    Err(err) => error_msg.set(Some(err.friendly_message())),
                }
                loading.set(false);
            }
        });
    }

    let review_portal = portal.clone();
    let handle_review = use_callback(move |(id, decision): (Uuid, ReviewDecision)| {
        let portal = review_portal.clone();
        spawn(async move {
            match portal.review_application(id, decision).await {
                Ok(review) => {
                    applications.with_mut(|apps| {
                        if let Some(app) = apps.iter_mut().find(|a| a.id == id) {
                            app.status = review.status;
                            app.reviewed_at = Some(review.reviewed_at);
                        }
                    });
                }
                Err(err) => error_msg.set(Some(err.friendly_message())),
            }
        });
    });

    let approve_portal = portal.clone();
    let handle_approve_staff = use_callback(move |id: Uuid| {
        let portal = approve_portal.clone();
        spawn(async move {
            match portal.approve_staff(id).await {
                Ok(_) => pending_staff.with_mut(|staff| staff.retain(|s| s.id != id)),
                Err(err) => error_msg.set(Some(err.friendly_message())),
            }
        });
    });

    let reject_portal = portal.clone();
    let handle_reject_staff = use_callback(move |id: Uuid| {
        let portal = reject_portal.clone();
        spawn(async move {
            match portal.reject_staff(id).await {
                Ok(()) => pending_staff.with_mut(|staff| staff.retain(|s| s.id != id)),
                Err(err) => error_msg.set(Some(err.friendly_message())),
            }
        });
    });

    let handle_logout = move |_| {
        let portal = portal.clone();
        spawn(async move {
            if let Err(err) = portal.client().sign_out().await {
                tracing::warn!(error = %err, "sign-out request failed");
            }
        });
        auth.set_authenticated(false);
        navigator().push(Route::Home {});
    };

    if loading() {
        return rsx! {
            document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }
            div { class: "dashboard-loading",
                Skeleton {}
                Skeleton {}
                Skeleton {}
            }
        };
    }

    let pending_count = pending_staff().len();
    let filter_buttons: Vec<(StatusFilter, String)> = StatusFilter::ALL
        .iter()
        .map(|f| (*f, format!("{} ({})", f.label(), f.count(&applications()))))
        .collect();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                button {
                    class: "back-button",
                    onclick: move |_| {
                        navigator().push(Route::Home {});
                    },
                    Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 20, height: 20 }
                    span { "Back" }
                }
                PageActions {
                    button { class: "back-button logout-button", onclick: handle_logout,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 20, height: 20 }
                        span { "Logout" }
                    }
                }
            }

            div { class: "dashboard-panel",
                PageTitle { "Staff Dashboard" }
                p { class: "dashboard-subtitle", "Review and manage staff applications and members" }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                Tabs { default_value: "applications", horizontal: true,
                    TabList {
                        TabTrigger { value: "applications", index: 0usize, "Applications" }
                        TabTrigger { value: "staff", index: 1usize,
                            span { "Pending Staff" }
                            if pending_count > 0 {
                                Badge { variant: BadgeVariant::Warning, "{pending_count}" }
                            }
                        }
                    }

                    TabContent { value: "applications", index: 0usize,
                        div { class: "filter-row",
                            for (f, label) in filter_buttons {
                                Button {
                                    variant: if filter() == f { ButtonVariant::Primary } else { ButtonVariant::Secondary },
                                    onclick: move |_| filter.set(f),
                                    "{label}"
                                }
                            }
                        }

                        ApplicationList {
                            applications: applications()
                                .iter()
                                .filter(|a| filter().matches(a.status))
                                .cloned()
                                .collect::<Vec<_>>(),
                            on_review: handle_review,
                        }
                    }

                    TabContent { value: "staff", index: 1usize,
                        PendingStaffList {
                            staff: pending_staff(),
                            on_approve: handle_approve_staff,
                            on_reject: handle_reject_staff,
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ApplicationList(
    applications: Vec<StaffApplication>,
    on_review: EventHandler<(Uuid, ReviewDecision)>,
) -> Element {
    if applications.is_empty() {
        return rsx! {
            div { class: "empty-state", "No applications found" }
        };
    }

    rsx! {
        div { class: "record-list",
            for app in applications.iter() {
                ApplicationCard { application: app.clone(), on_review: on_review }
            }
        }
    }
}

#[component]
fn ApplicationCard(
    application: StaffApplication,
    on_review: EventHandler<(Uuid, ReviewDecision)>,
) -> Element {
    let id = application.id;
    let status = application.status;
    let applied = format_date(application.created_at);

    rsx! {
        div { class: "record-card",
            div { class: "record-card-top",
                div {
                    h3 { class: "record-card-name", "{application.discord_username}" }
                    p { class: "record-card-meta", "ID: {application.discord_id}" }
                    p { class: "record-card-meta", "Applied: {applied}" }
                }
                StatusTag { status: status }
            }

            div { class: "record-card-grid",
                div {
                    p { class: "field-label", "Age" }
                    p { class: "field-value", "{application.age}" }
                }
                div {
                    p { class: "field-label", "Timezone" }
                    p { class: "field-value", "{application.timezone}" }
                }
            }

            div { class: "record-card-sections",
                div {
                    p { class: "field-label", "Previous Experience" }
                    p { class: "field-text", "{application.experience}" }
                }
                div {
                    p { class: "field-label", "Why Join" }
                    p { class: "field-text", "{application.why_join}" }
                }
                div {
                    p { class: "field-label", "Availability" }
                    p { class: "field-text", "{application.availability}" }
                }
                if let Some(info) = application.additional_info.as_ref() {
                    div {
                        p { class: "field-label", "Additional Info" }
                        p { class: "field-text", "{info}" }
                    }
                }
            }

            if status.is_pending() {
                div { class: "record-card-actions",
                    Button {
                        variant: ButtonVariant::Success,
                        onclick: move |_| on_review.call((id, ReviewDecision::Approve)),
                        Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 20, height: 20 }
                        "Approve"
                    }
                    Button {
                        variant: ButtonVariant::Destructive,
                        onclick: move |_| on_review.call((id, ReviewDecision::Reject)),
                        Icon::<LdCircleX> { icon: LdCircleX, width: 20, height: 20 }
                        "Reject"
                    }
                }
            }
        }
    }
}

/// Status icon and label, colored like the filter buttons.
#[component]
fn StatusTag(status: ApplicationStatus) -> Element {
    match status {
        ApplicationStatus::Approved => rsx! {
            div { class: "status-tag status-approved",
                Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 20, height: 20 }
                span { "approved" }
            }
        },
        ApplicationStatus::Rejected => rsx! {
            div { class: "status-tag status-rejected",
                Icon::<LdCircleX> { icon: LdCircleX, width: 20, height: 20 }
                span { "rejected" }
            }
        },
        ApplicationStatus::Pending => rsx! {
            div { class: "status-tag status-pending",
                Icon::<LdClock> { icon: LdClock, width: 20, height: 20 }
                span { "pending" }
            }
        },
    }
}

#[component]
fn PendingStaffList(
    staff: Vec<StaffMember>,
    on_approve: EventHandler<Uuid>,
    on_reject: EventHandler<Uuid>,
) -> Element {
    if staff.is_empty() {
        return rsx! {
            div { class: "empty-state", "No pending staff registrations" }
        };
    }

    rsx! {
        div { class: "record-list",
            for member in staff.iter() {
                PendingStaffCard {
                    member: member.clone(),
                    on_approve: on_approve,
                    on_reject: on_reject,
                }
            }
        }
    }
}

#[component]
fn PendingStaffCard(
    member: StaffMember,
    on_approve: EventHandler<Uuid>,
    on_reject: EventHandler<Uuid>,
) -> Element {
    let id = member.id;
    let requested = format_date(member.created_at);

    rsx! {
        div { class: "record-card",
            div { class: "record-card-top",
                div {
                    h3 { class: "record-card-name", "{member.discord_username}" }
                    p { class: "record-card-meta", "Requested: {requested}" }
                    p { class: "record-card-meta", "Role: {member.role}" }
                }
                div { class: "status-tag status-pending",
                    Icon::<LdUserPlus> { icon: LdUserPlus, width: 20, height: 20 }
                    span { "Pending Approval" }
                }
            }

            div { class: "record-card-actions",
                Button {
                    variant: ButtonVariant::Success,
                    onclick: move |_| on_approve.call(id),
                    Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 20, height: 20 }
                    "Approve Staff Member"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_reject.call(id),
                    Icon::<LdCircleX> { icon: LdCircleX, width: 20, height: 20 }
                    "Reject"
                }
            }
        }
    }
}
