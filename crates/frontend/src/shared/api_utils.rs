//! API utilities for frontend-backend communication
//!
//! URL construction plus small JSON helpers on top of `gloo-net`.
//! Failed responses are decoded as [`ApiErrorBody`] so the backend's
//! message reaches the UI unchanged.

use contracts::shared::api_error::ApiErrorBody;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Port of the backend server
pub const BACKEND_PORT: u16 = 3000;

/// Get the base URL for API requests
///
/// Built from the current window location with the backend port,
/// e.g. "http://localhost:3000". Empty string if there is no window.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// Build a full API URL from a path starting with "/api/"
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// GET JSON
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&api_url(path))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

/// POST JSON body, read JSON response
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, String>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    let response = Request::post(&api_url(path))
        .header("Accept", "application/json")
        .json(body)
        .map_err(|e| format!("Failed to encode request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;
    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(error_message(status, &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Текст ошибки из ответа backend: `message` из тела,
/// иначе "HTTP {status}: {body}" или просто "HTTP {status}" для пустого тела
pub fn error_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if !parsed.message.trim().is_empty() => parsed.message,
        _ => {
            let raw = body.trim();
            if raw.is_empty() {
                format!("HTTP {}", status)
            } else {
                format!("HTTP {}: {}", status, raw)
            }
        }
    }
}
