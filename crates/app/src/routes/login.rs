use crate::auth::use_auth;
use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowLeft;
use dioxus_free_icons::Icon;
use portal_client::{SignInOutcome, StaffPortal};
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
};

const NOT_REGISTERED_MSG: &str = "You are not authorized to access the staff dashboard. \
     Please register for a staff account first.";
const PENDING_APPROVAL_MSG: &str = "Your staff account is pending approval. \
     Please wait for an existing staff member to approve your request.";

/// Staff login. Two modes toggled by a flag: normal sign-in, and a
/// password-reset request that reports the same success regardless of
/// whether the address exists.
///
/// Sign-in is the two-phase flow: a successful raw authentication can still
/// end signed-out when the staff-approval check fails, so only the
/// `Approved` outcome counts as logged in.
#[component]
pub fn Login() -> Element {
    let portal = use_context::<StaffPortal>();
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut show_forgot = use_signal(|| false);
    let mut reset_sent = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        let portal = portal.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            if show_forgot() {
                match portal.client().request_password_reset(&email()).await {
                    Ok(()) => reset_sent.set(true),
                    Err(err) => error_msg.set(Some(err.friendly_message())),
                }
            } else {
                match portal.sign_in(&email(), &password()).await {
                    Ok(SignInOutcome::Approved(member)) => {
                        tracing::info!(staff_id = %member.id, "staff signed in");
                        auth.set_authenticated(true);
                        navigator().push(Route::Dashboard {});
                    }
                    Ok(SignInOutcome::NotRegistered) => {
                        error_msg.set(Some(NOT_REGISTERED_MSG.to_string()));
                    }
                    Ok(SignInOutcome::PendingApproval) => {
                        error_msg.set(Some(PENDING_APPROVAL_MSG.to_string()));
                    }
                    Err(err) => error_msg.set(Some(err.friendly_message())),
                }
            }
            loading.set(false);
        }
    };

    let submit_label = if loading() {
        if show_forgot() { "Sending..." } else { "Signing in..." }
    } else if show_forgot() {
        "Send Reset Link"
    } else {
        "Sign In"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-column",
                button {
                    class: "back-button",
                    onclick: move |_| {
                        navigator().push(Route::Home {});
                    },
                    Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 20, height: 20 }
                    span { "Back" }
                }

                Card { class: "auth-card",
                    CardHeader {
                        CardTitle {
                            if show_forgot() { "Reset Password" } else { "Staff Login" }
                        }
                        CardDescription {
                            if show_forgot() {
                                "Enter your email to receive a password reset link"
                            } else {
                                "Sign in to access the staff dashboard"
                            }
                        }
                    }

                    CardContent {
                        if let Some(err) = error_msg() {
                            div { class: "auth-error", "{err}" }
                        }

                        if reset_sent() {
                            div { class: "auth-success",
                                "Password reset email sent! Check your inbox for the reset link."
                            }
                        }

                        form { onsubmit: handle_submit,
                            div { class: "auth-field",
                                Label { html_for: "email", "Email" }
                                Input {
                                    input_type: "email",
                                    id: "email",
                                    required: true,
                                    placeholder: "staff@example.com",
                                    value: email(),
                                    on_input: move |e: FormEvent| email.set(e.value()),
                                }
                            }

                            if !show_forgot() {
                                div { class: "auth-field",
                                    Label { html_for: "password", "Password" }
                                    Input {
                                        input_type: "password",
                                        id: "password",
                                        required: true,
                                        placeholder: "••••••••",
                                        value: password(),
                                        on_input: move |e: FormEvent| password.set(e.value()),
                                    }
                                }
                            }

                            button {
                                r#type: "submit",
                                class: "auth-submit button",
                                disabled: loading() || reset_sent(),
                                "{submit_label}"
                            }
                        }

                        div { class: "auth-toggle",
                            if show_forgot() {
                                button {
                                    class: "auth-link-button",
                                    onclick: move |_| {
                                        show_forgot.set(false);
                                        reset_sent.set(false);
                                        error_msg.set(None);
                                    },
                                    "Back to login"
                                }
                            } else {
                                button {
                                    class: "auth-link-button",
                                    onclick: move |_| show_forgot.set(true),
                                    "Forgot password?"
                                }
                            }
                        }
                    }

                    CardFooter {
                        p { class: "auth-link",
                            "Don't have an account? "
                            Link { to: Route::Register {}, "Create staff account" }
                        }
                    }
                }
            }
        }
    }
}
