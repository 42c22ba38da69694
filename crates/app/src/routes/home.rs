use crate::routes::Route;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdFileText, LdShield, LdUsers};
use dioxus_free_icons::Icon;

/// Landing screen: apply for a staff position, or sign in to the dashboard.
#[component]
pub fn Home() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./home.css") }

        div { class: "home-page",
            div { class: "home-hero",
                div { class: "home-hero-icon",
                    Icon::<LdShield> { icon: LdShield, width: 80, height: 80 }
                }
                h1 { class: "home-title", "Discord Staff Portal" }
                p { class: "home-subtitle", "Join our team or manage staff applications" }
            }

            div { class: "home-cards",
                button {
                    class: "home-card",
                    onclick: move |_| {
                        navigator().push(Route::Apply {});
                    },
                    div { class: "home-card-icon accent-blue",
                        Icon::<LdFileText> { icon: LdFileText, width: 64, height: 64 }
                    }
                    h2 { "Apply for Staff" }
                    p { "Submit your application to join our staff team" }
                }

                button {
                    class: "home-card home-card-green",
                    onclick: move |_| {
                        navigator().push(Route::Login {});
                    },
                    div { class: "home-card-icon accent-green",
                        Icon::<LdUsers> { icon: LdUsers, width: 64, height: 64 }
                    }
                    h2 { "Staff Dashboard" }
                    p { "Login to review and manage applications" }
                }
            }

            div { class: "home-footer",
                p { "Secure staff application system" }
            }
        }
    }
}
