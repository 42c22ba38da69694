use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowLeft;
use dioxus_free_icons::Icon;
use portal_client::StaffPortal;
use shared_ui::{
    Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
};

/// Staff self-registration: creates an auth identity, then an unapproved
/// staff record linked to it. The two steps are not transactional; a
/// step-two failure surfaces as an error and leaves the identity behind.
/// On success the fresh session is signed out again — the registrant logs
/// in once an existing staff member approves the request.
#[component]
pub fn Register() -> Element {
    let portal = use_context::<StaffPortal>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut discord_username = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut success = use_signal(|| false);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        let portal = portal.clone();
        async move {
            evt.prevent_default();
            loading.set(true);
            error_msg.set(None);

            match portal
                .register(&email(), &password(), &discord_username())
                .await
            {
                Ok(()) => success.set(true),
                Err(err) => error_msg.set(Some(err.friendly_message())),
            }
            loading.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "auth-page",
            div { class: "auth-column",
                button {
                    class: "back-button",
                    onclick: move |_| {
                        navigator().push(Route::Login {});
                    },
                    Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 20, height: 20 }
                    span { "Back" }
                }

                Card { class: "auth-card",
                    CardHeader {
                        CardTitle { "Request Staff Access" }
                        CardDescription { "Submit a request to join the staff team" }
                    }

                    CardContent {
                        div { class: "auth-notice",
                            p {
                                "Your registration will need to be approved by an existing \
                                 staff member before you can access the dashboard."
                            }
                        }

                        if success() {
                            div { class: "auth-success",
                                "Registration submitted! Please wait for approval from an \
                                 existing staff member."
                            }
                        }

                        if let Some(err) = error_msg() {
                            div { class: "auth-error", "{err}" }
                        }

                        form { onsubmit: handle_register,
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

                            div { class: "auth-field",
                                Label { html_for: "password", "Password" }
                                Input {
                                    input_type: "password",
                                    id: "password",
                                    required: true,
                                    minlength: 6,
                                    placeholder: "••••••••",
                                    value: password(),
                                    on_input: move |e: FormEvent| password.set(e.value()),
                                }
                                p { class: "auth-field-hint", "Minimum 6 characters" }
                            }

                            div { class: "auth-field",
                                Label { html_for: "discord_username", "Discord Username" }
                                Input {
                                    id: "discord_username",
                                    required: true,
                                    placeholder: "username#1234",
                                    value: discord_username(),
                                    on_input: move |e: FormEvent| discord_username.set(e.value()),
                                }
                            }

                            button {
                                r#type: "submit",
                                class: "auth-submit button",
                                disabled: loading() || success(),
                                if loading() { "Submitting Request..." } else { "Submit Request" }
                            }
                        }
                    }

                    CardFooter {
                        p { class: "auth-link",
                            "Already have an account? "
                            Link { to: Route::Login {}, "Sign in instead" }
                        }
                    }
                }
            }
        }
    }
}
