use dioxus::prelude::*;

mod auth;
mod routes;

use auth::AuthState;
use portal_client::{PortalClient, ServiceConfig, StaffPortal};
use routes::Route;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

/// Remote service coordinates, baked in at build time. The browser bundle
/// has no process environment, so overrides must come through the build.
fn service_config() -> ServiceConfig {
    let base_url = option_env!("STAFF_PORTAL_SERVICE_URL").unwrap_or("http://localhost:54321");
    let anon_key = option_env!("STAFF_PORTAL_SERVICE_KEY").unwrap_or("local-anon-key");
    ServiceConfig::new(base_url, anon_key)
}

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| StaffPortal::new(PortalClient::new(service_config())));
    use_context_provider(AuthState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        Router::<Route> {}
    }
}
