use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdArrowLeft;
use dioxus_free_icons::Icon;
use portal_client::StaffPortal;
use shared_types::{NewStaffApplication, MIN_APPLICANT_AGE};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label, Textarea,
};

/// Public application form. Validation is the browser's (required fields,
/// numeric minimum on age); the only work done here is assembling the
/// insert payload. Success clears the form; failure keeps the entered
/// values so nothing is lost.
#[component]
pub fn Apply() -> Element {
    let portal = use_context::<StaffPortal>();
    let mut discord_username = use_signal(String::new);
    let mut discord_id = use_signal(String::new);
    let mut age = use_signal(String::new);
    let mut timezone = use_signal(String::new);
    let mut experience = use_signal(String::new);
    let mut why_join = use_signal(String::new);
    let mut availability = use_signal(String::new);
    let mut additional_info = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut success = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        let portal = portal.clone();
        async move {
            evt.prevent_default();
            submitting.set(true);
            success.set(false);
            error_msg.set(None);

            // The number input guarantees a numeric value; a parse failure
            // means the form never reached the service.
            let parsed_age = match age().trim().parse::<i32>() {
                Ok(value) => value,
                Err(_) => {
                    error_msg.set(Some(format!(
                        "Age must be a number of at least {MIN_APPLICANT_AGE}."
                    )));
                    submitting.set(false);
                    return;
                }
            };

            let extra = additional_info();
            let application = NewStaffApplication {
                discord_username: discord_username(),
                discord_id: discord_id(),
                age: parsed_age,
                timezone: timezone(),
                experience: experience(),
                why_join: why_join(),
                availability: availability(),
                additional_info: if extra.trim().is_empty() {
                    None
                } else {
                    Some(extra)
                },
            };

            match portal.submit_application(&application).await {
                Ok(()) => {
                    success.set(true);
                    discord_username.set(String::new());
                    discord_id.set(String::new());
                    age.set(String::new());
                    timezone.set(String::new());
                    experience.set(String::new());
                    why_join.set(String::new());
                    availability.set(String::new());
                    additional_info.set(String::new());
                }
                Err(err) => error_msg.set(Some(err.friendly_message())),
            }
            submitting.set(false);
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./apply.css") }

        div { class: "apply-page",
            div { class: "apply-column",
                button {
                    class: "back-button",
                    onclick: move |_| {
                        navigator().push(Route::Home {});
                    },
                    Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 20, height: 20 }
                    span { "Back" }
                }

                Card {
                    CardHeader {
                        CardTitle { "Staff Application" }
                        CardDescription {
                            "Fill out the form below to apply for a staff position on our \
                             Discord server."
                        }
                    }

                    CardContent {
                        if success() {
                            div { class: "auth-success",
                                "Application submitted successfully! We'll review it and get \
                                 back to you soon."
                            }
                        }

                        if let Some(err) = error_msg() {
                            div { class: "auth-error", "{err}" }
                        }

                        form { onsubmit: handle_submit,
                            div { class: "auth-field",
                                Label { html_for: "discord_username", "Discord Username *" }
                                Input {
                                    id: "discord_username",
                                    required: true,
                                    placeholder: "username#1234",
                                    value: discord_username(),
                                    on_input: move |e: FormEvent| discord_username.set(e.value()),
                                }
                            }

                            div { class: "auth-field",
                                Label { html_for: "discord_id", "Discord ID *" }
                                Input {
                                    id: "discord_id",
                                    required: true,
                                    placeholder: "123456789012345678",
                                    value: discord_id(),
                                    on_input: move |e: FormEvent| discord_id.set(e.value()),
                                }
                            }

                            div { class: "auth-field",
                                Label { html_for: "age", "Age *" }
                                Input {
                                    input_type: "number",
                                    id: "age",
                                    required: true,
                                    min: MIN_APPLICANT_AGE as i64,
                                    value: age(),
                                    on_input: move |e: FormEvent| age.set(e.value()),
                                }
                            }

                            div { class: "auth-field",
                                Label { html_for: "timezone", "Timezone *" }
                                Input {
                                    id: "timezone",
                                    required: true,
                                    placeholder: "EST, PST, GMT+1, etc.",
                                    value: timezone(),
                                    on_input: move |e: FormEvent| timezone.set(e.value()),
                                }
                            }

                            div { class: "auth-field",
                                Label { html_for: "experience", "Previous Moderation Experience *" }
                                Textarea {
                                    id: "experience",
                                    required: true,
                                    rows: 4,
                                    placeholder: "Describe your previous experience with moderation or community management...",
                                    value: experience(),
                                    on_input: move |e: FormEvent| experience.set(e.value()),
                                }
                            }

                            div { class: "auth-field",
                                Label { html_for: "why_join", "Why do you want to join the staff team? *" }
                                Textarea {
                                    id: "why_join",
                                    required: true,
                                    rows: 4,
                                    placeholder: "Tell us why you'd be a great addition to our team...",
                                    value: why_join(),
                                    on_input: move |e: FormEvent| why_join.set(e.value()),
                                }
                            }

                            div { class: "auth-field",
                                Label { html_for: "availability", "Availability *" }
                                Textarea {
                                    id: "availability",
                                    required: true,
                                    rows: 3,
                                    placeholder: "When are you typically available? (days, times, hours per week)",
                                    value: availability(),
                                    on_input: move |e: FormEvent| availability.set(e.value()),
                                }
                            }

                            div { class: "auth-field",
                                Label { html_for: "additional_info", "Additional Information" }
                                Textarea {
                                    id: "additional_info",
                                    rows: 3,
                                    placeholder: "Anything else you'd like us to know...",
                                    value: additional_info(),
                                    on_input: move |e: FormEvent| additional_info.set(e.value()),
                                }
                            }

                            button {
                                r#type: "submit",
                                class: "auth-submit button",
                                disabled: submitting(),
                                if submitting() { "Submitting..." } else { "Submit Application" }
                            }
                        }
                    }
                }
            }
        }
    }
}
