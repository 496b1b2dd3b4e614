//! Request description consumed by the client's execute path

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;

use super::classify::FieldRule;
use super::pagination::PageParams;
use crate::error::{ApiError, ApiResult};

const DEFAULT_FALLBACK: &str = "Request failed";

/// One API call: what to send and how to interpret a failure.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, starting with `/`
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<Value>,
    /// Attach the stored session token; fails fast when there is none
    pub authorized: bool,
    /// Re-issue the request on rate-limited failures
    pub retry_on_rate_limit: bool,
    pub field_rules: &'static [FieldRule],
    /// Message used when the server gives none and no status rule applies
    pub fallback: &'static str,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            authorized: false,
            retry_on_rate_limit: false,
            field_rules: &[],
            fallback: DEFAULT_FALLBACK,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    pub fn page(mut self, page: &PageParams) -> Self {
        self.query.extend(page.to_query_params());
        self
    }

    /// Serialize `body` as the JSON request body
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> ApiResult<Self> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Encoding(e.to_string()))?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn authorized(mut self) -> Self {
        self.authorized = true;
        self
    }

    pub fn retry_on_rate_limit(mut self) -> Self {
        self.retry_on_rate_limit = true;
        self
    }

    pub fn field_rules(mut self, rules: &'static [FieldRule]) -> Self {
        self.field_rules = rules;
        self
    }

    pub fn fallback(mut self, message: &'static str) -> Self {
        self.fallback = message;
        self
    }
}
