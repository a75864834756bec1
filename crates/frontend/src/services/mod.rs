//! Remote gateway to the guardians API.
//!
//! All calls go over HTTP against `/api`. Callers catch errors, log
//! them to the browser console, and keep their prior state; no
//! retries happen at this layer.

mod family;
mod notification;
mod question;

pub use family::get_family;
pub use notification::{
    get_approvals, get_unanswered_notifications, reply_approval, reply_notification,
};
pub use question::get_questions;

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from gateway calls.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Transport failure before any response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// Non-success response from the API.
    #[error("server error: status {status}")]
    Server { status: u16 },

    /// Response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Log a failed gateway call to the browser console.
pub fn log_error(context: &str, err: &ServiceError) {
    web_sys::console::error_1(&format!("{context}: {err}").into());
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| ServiceError::Network(e.to_string()))?;
    decode(resp).await
}

async fn post_json<B: Serialize>(url: &str, body: &B) -> Result<()> {
    let resp = Request::post(url)
        .json(body)
        .map_err(|e| ServiceError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ServiceError::Network(e.to_string()))?;

    if resp.ok() {
        Ok(())
    } else {
        Err(ServiceError::Server {
            status: resp.status(),
        })
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    if !resp.ok() {
        return Err(ServiceError::Server {
            status: resp.status(),
        });
    }
    resp.json::<T>()
        .await
        .map_err(|e| ServiceError::Decode(e.to_string()))
}
