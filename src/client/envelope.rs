//! Result envelope and response normalization
//!
//! Every client operation resolves to an [`ApiResponse`], never to a panic
//! or an unhandled error. Server bodies come in two shapes, a wrapped
//! `{success, data, message}` object or the bare payload, and are
//! normalized here before decoding.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::classify::{classify_rejection, classify_status};
use super::request::ApiRequest;
use crate::error::{ApiError, ApiResult, Error, ErrorKind, Result};

/// Uniform outcome of a client operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    pub fn failure(error: &ApiError) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(error.to_string()),
            error: Some(error.kind()),
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Convert to an application result for command handlers
    pub fn into_result(self) -> Result<T> {
        match (self.success, self.data) {
            (true, Some(data)) => Ok(data),
            (true, None) => Err(Error::Request {
                kind: ErrorKind::InvalidResponse,
                message: "Invalid response from server".to_string(),
            }),
            (false, _) => Err(Error::Request {
                kind: self.error.unwrap_or(ErrorKind::Rejected),
                message: self
                    .message
                    .unwrap_or_else(|| "Request failed".to_string()),
            }),
        }
    }
}

impl<T> From<ApiResult<T>> for ApiResponse<T> {
    fn from(result: ApiResult<T>) -> Self {
        match result {
            Ok(data) => ApiResponse::ok(data),
            Err(err) => ApiResponse::failure(&err),
        }
    }
}

/// Normalized body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub struct Payload {
    /// `data` of a wrapped body, or the whole body otherwise
    pub data: Value,
    /// Top-level `message` of the body, if any
    pub message: Option<String>,
}

impl Payload {
    pub fn decode<T: DeserializeOwned>(self) -> ApiResult<T> {
        decode(self.data)
    }

    /// Decode a list found either as the payload itself or under `key`
    pub fn list<T: DeserializeOwned>(self, key: &str) -> ApiResult<Vec<T>> {
        decode(extract_list(self.data, key))
    }
}

/// Message from a body: `message` first, then `error`
pub fn server_message(body: &Value) -> Option<String> {
    ["message", "error"]
        .iter()
        .filter_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::trim)
        .find(|message| !message.is_empty())
        .map(str::to_string)
}

fn payload(mut body: Value) -> Value {
    if body.get("data").is_some_and(|data| !data.is_null()) {
        body["data"].take()
    } else {
        body
    }
}

/// List out of a payload: the payload itself if it is an array, else the
/// array under `key`, else empty.
pub fn extract_list(mut payload: Value, key: &str) -> Value {
    if payload.is_array() {
        return payload;
    }

    if payload.get(key).is_some_and(Value::is_array) {
        payload[key].take()
    } else {
        Value::Array(Vec::new())
    }
}

fn decode<T: DeserializeOwned>(value: Value) -> ApiResult<T> {
    serde_json::from_value(value).map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

/// Interpret a raw response for `request`.
pub fn normalize(status: StatusCode, body: &str, request: &ApiRequest) -> ApiResult<Payload> {
    let parsed = if body.trim().is_empty() {
        Some(Value::Null)
    } else {
        serde_json::from_str::<Value>(body).ok()
    };

    if !status.is_success() {
        let message = parsed.as_ref().and_then(server_message);
        return Err(classify_status(
            status,
            message.as_deref(),
            request.field_rules,
            request.fallback,
        ));
    }

    let body = parsed.ok_or_else(|| {
        ApiError::InvalidResponse(format!("{} returned a non-JSON body", request.path))
    })?;
    let message = server_message(&body);

    if body.get("success").and_then(Value::as_bool) == Some(false) {
        return Err(classify_rejection(
            message.as_deref(),
            request.field_rules,
            request.fallback,
        ));
    }

    Ok(Payload {
        data: payload(body),
        message,
    })
}
