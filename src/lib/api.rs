//! HTTP helpers for the storefront JSON API with consistent timeouts and
//! error handling. Feature clients use these helpers to avoid duplicating
//! request setup and to enforce a predictable timeout policy. Error bodies
//! follow the backend convention of `{ "message": string }`; the message is
//! surfaced to call sites so they can apply their own fallback text.

use super::config::AppConfig;
#[cfg(target_arch = "wasm32")]
use super::errors::AppError;
use serde::Deserialize;
use std::sync::OnceLock;

#[cfg(target_arch = "wasm32")]
use gloo_net::http::{Request, Response};
#[cfg(target_arch = "wasm32")]
use gloo_timers::callback::Timeout;
#[cfg(target_arch = "wasm32")]
use serde::Serialize;
#[cfg(target_arch = "wasm32")]
use web_sys::{AbortController, RequestCredentials};

/// Default request timeout (milliseconds) applied to all HTTP helpers.
#[cfg(target_arch = "wasm32")]
const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Maximum number of error message characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Handle to the remote storefront API. Call sites receive it explicitly
/// instead of reading globals, and the shared instance is resolved exactly
/// once per session.
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
        }
    }

    /// Shared per-session instance, created lazily on first use and never
    /// recreated on route re-entry.
    pub fn shared() -> &'static ApiClient {
        static SHARED: OnceLock<ApiClient> = OnceLock::new();
        SHARED.get_or_init(|| ApiClient::from_config(&AppConfig::load()))
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

/// Posts JSON and treats any 2xx response as a success marker; the body is
/// ignored.
#[cfg(target_arch = "wasm32")]
pub async fn post_json<B: Serialize>(
    api: &ApiClient,
    path: &str,
    body: &B,
) -> Result<(), AppError> {
    let response = send_post(api, path, body, false).await?;
    handle_marker_response(response).await
}

/// Posts JSON with cookies included so the backend can set a session cookie.
/// Use this only for calls that establish or refresh a session.
#[cfg(target_arch = "wasm32")]
pub async fn post_json_with_credentials<B: Serialize>(
    api: &ApiClient,
    path: &str,
    body: &B,
) -> Result<(), AppError> {
    let response = send_post(api, path, body, true).await?;
    handle_marker_response(response).await
}

#[cfg(target_arch = "wasm32")]
async fn send_post<B: Serialize>(
    api: &ApiClient,
    path: &str,
    body: &B,
    with_credentials: bool,
) -> Result<Response, AppError> {
    let url = api.url(path);
    let payload = serde_json::to_string(body)
        .map_err(|err| AppError::Serialization(format!("Failed to encode request: {err}")))?;

    send_with_timeout(move |signal| {
        let mut builder = Request::post(&url)
            .header("Content-Type", "application/json")
            .abort_signal(Some(signal));

        if with_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }

        builder
            .body(payload)
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
    })
    .await
}

/// Sends a request with an abort timeout to avoid hanging UI state.
#[cfg(target_arch = "wasm32")]
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(map_request_error)
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
#[cfg(target_arch = "wasm32")]
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Handles marker responses: any 2xx succeeds, everything else surfaces the
/// decoded server message (when present) alongside the status.
#[cfg(target_arch = "wasm32")]
async fn handle_marker_response(response: Response) -> Result<(), AppError> {
    if response.ok() {
        return Ok(());
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    log::warn!("storefront api call failed with status {status}");
    Err(AppError::Api {
        status,
        message: extract_message(&body),
    })
}

/// Builds a URL from the configured base URL and the provided path.
fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Pulls the `message` field out of an error body. Malformed or empty bodies
/// yield `None` so callers fall back to their per-call default.
fn extract_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = parsed.message?;
    let trimmed = message.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(MAX_ERROR_CHARS).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_message, join_url};

    #[test]
    fn join_url_handles_slashes() {
        assert_eq!(
            join_url("https://api.nexus.shop", "/api/login-user"),
            "https://api.nexus.shop/api/login-user"
        );
        assert_eq!(
            join_url("https://api.nexus.shop/", "api/login-user"),
            "https://api.nexus.shop/api/login-user"
        );
        assert_eq!(
            join_url("  https://api.nexus.shop/  ", "/api/login-user"),
            "https://api.nexus.shop/api/login-user"
        );
    }

    #[test]
    fn join_url_with_empty_base_keeps_the_path() {
        assert_eq!(join_url("", "/api/verify-user"), "/api/verify-user");
    }

    #[test]
    fn extract_message_reads_the_message_field() {
        assert_eq!(
            extract_message(r#"{"message":"Invalid OTP!"}"#),
            Some("Invalid OTP!".to_string())
        );
    }

    #[test]
    fn extract_message_rejects_malformed_or_empty_bodies() {
        assert_eq!(extract_message(""), None);
        assert_eq!(extract_message("<html>502</html>"), None);
        assert_eq!(extract_message(r#"{"message":"   "}"#), None);
        assert_eq!(extract_message(r#"{"error":"nope"}"#), None);
    }

    #[test]
    fn extract_message_truncates_oversized_messages() {
        let body = format!(r#"{{"message":"{}"}}"#, "x".repeat(500));
        let message = extract_message(&body).expect("message");
        assert_eq!(message.len(), 200);
    }
}
