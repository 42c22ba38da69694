/// Connection settings for the remote service.
///
/// The browser bundle has no process environment, so both values arrive at
/// construction time (the app bakes them in at compile time; tests point at
/// an in-process mock).
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    base_url: String,
    anon_key: String,
}

impl ServiceConfig {
    pub fn new(base_url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            anon_key: anon_key.into(),
        }
    }

    /// Public API key sent with every request.
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// URL of an auth endpoint, e.g. `auth_url("signup")`.
    pub(crate) fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.base_url, path)
    }

    /// URL of a collection's record endpoint.
    pub(crate) fn rest_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection)
    }
}
