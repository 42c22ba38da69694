use crate::PortalClient;
use serde::Deserialize;
use shared_types::AppError;

/// Error body shapes the service produces. Auth endpoints use
/// `error_description`/`msg`, record endpoints use `message`.
#[derive(Debug, Deserialize)]
struct ServiceErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    msg: Option<String>,
}

impl PortalClient {
    /// Start a request with the headers every service call carries: the
    /// public API key, plus the bearer token when a session is held.
    pub(crate) fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let mut builder = self
            .http
            .request(method, url)
            .header("apikey", self.config.anon_key());
        if let Some(session) = self.session() {
            builder = builder.bearer_auth(session.access_token);
        }
        builder
    }

    pub(crate) fn config(&self) -> &crate::ServiceConfig {
        &self.config
    }
}

/// Convert a reqwest failure (connection refused, DNS, timeout) into the
/// transport arm of the error taxonomy.
pub(crate) fn transport_error(err: reqwest::Error) -> AppError {
    AppError::transport(format!("request failed: {err}"))
}

/// Map a non-success response to an `AppError`, decoding the service's
/// error body when one is present.
pub(crate) async fn error_from_response(response: reqwest::Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    error_from_parts(status, &body)
}

pub(crate) fn error_from_parts(status: u16, body: &str) -> AppError {
    let message = serde_json::from_str::<ServiceErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error_description).or(b.msg))
        .unwrap_or_else(|| format!("service returned status {status}"));

    match status {
        400 => AppError::bad_request(message),
        401 => AppError::unauthorized(message),
        403 => AppError::forbidden(message),
        404 => AppError::not_found(message),
        422 => AppError::validation(message),
        _ => AppError::service(message),
    }
}
