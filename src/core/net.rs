use crate::core::PulseError;
use serde::Deserialize;

/// Body shape of a non-success answer. Every field is optional.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Read the response body as text.
pub(crate) async fn get_text(resp: reqwest::Response, endpoint: &str) -> Result<String, PulseError> {
    let text = resp.text().await?;

    #[cfg(feature = "tracing")]
    tracing::trace!(endpoint, bytes = text.len(), "response body received");
    #[cfg(not(feature = "tracing"))]
    let _ = endpoint;

    Ok(text)
}

/// Turn a non-2xx response into [`PulseError::Api`].
///
/// The body is consulted for a `detail` field; unreadable or non-JSON bodies
/// leave `detail` empty so the status code is shown instead.
pub(crate) async fn status_error(resp: reqwest::Response) -> PulseError {
    let status = resp.status().as_u16();
    let url = resp.url().to_string();
    let detail = match resp.text().await {
        Ok(body) => extract_detail(&body),
        Err(_) => None,
    };

    #[cfg(feature = "tracing")]
    tracing::warn!(status, %url, detail = detail.as_deref(), "service returned an error status");

    PulseError::Api { status, detail, url }
}

fn extract_detail(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
