//! Failure classification
//!
//! Turns a failed response into an [`ApiError`] with a user-facing message.
//! Rules are checked in order: rate limiting, then field hints on 400
//! responses, then status classes, then the operation's fallback.

use reqwest::StatusCode;

use crate::error::{ApiError, Field};

/// Maps a keyword in a 400 message to the form field it concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub keyword: &'static str,
    pub field: Field,
    pub message: &'static str,
}

/// Field hints for account registration, in precedence order
pub const REGISTRATION_RULES: &[FieldRule] = &[
    FieldRule {
        keyword: "email",
        field: Field::Email,
        message: "This email address is already in use",
    },
    FieldRule {
        keyword: "alias",
        field: Field::Alias,
        message: "This alias is already taken",
    },
    FieldRule {
        keyword: "password",
        field: Field::Password,
        message: "Password does not meet the requirements",
    },
];

/// Field hints for profile updates
pub const PROFILE_RULES: &[FieldRule] = &[FieldRule {
    keyword: "alias",
    field: Field::Alias,
    message: "This alias is already taken",
}];

const RATE_LIMIT_KEYWORDS: &[&str] = &[
    "rate limit",
    "rate-limit",
    "too many requests",
    "too many attempts",
];

const RATE_LIMIT_MESSAGE: &str = "Too many requests, please try again later";

enum StatusMatch {
    Exact(StatusCode),
    ServerError,
}

impl StatusMatch {
    fn matches(&self, status: StatusCode) -> bool {
        match self {
            StatusMatch::Exact(expected) => *expected == status,
            StatusMatch::ServerError => status.is_server_error(),
        }
    }
}

struct StatusRule {
    status: StatusMatch,
    fallback: &'static str,
    error: fn(String) -> ApiError,
}

fn validation(message: String) -> ApiError {
    ApiError::Validation {
        field: None,
        message,
    }
}

const STATUS_RULES: &[StatusRule] = &[
    StatusRule {
        status: StatusMatch::Exact(StatusCode::BAD_REQUEST),
        fallback: "Invalid data",
        error: validation,
    },
    StatusRule {
        status: StatusMatch::Exact(StatusCode::UNAUTHORIZED),
        fallback: "Authentication required",
        error: ApiError::Unauthorized,
    },
    StatusRule {
        status: StatusMatch::Exact(StatusCode::FORBIDDEN),
        fallback: "Access denied",
        error: ApiError::Forbidden,
    },
    StatusRule {
        status: StatusMatch::Exact(StatusCode::NOT_FOUND),
        fallback: "Resource not found",
        error: ApiError::NotFound,
    },
    StatusRule {
        status: StatusMatch::Exact(StatusCode::UNPROCESSABLE_ENTITY),
        fallback: "Malformed data",
        error: validation,
    },
    StatusRule {
        status: StatusMatch::ServerError,
        fallback: "Server error, please try again later",
        error: ApiError::Server,
    },
];

/// Whether a server message signals rate limiting
pub fn is_rate_limit_message(message: &str) -> bool {
    let message = message.to_lowercase();
    RATE_LIMIT_KEYWORDS
        .iter()
        .any(|keyword| message.contains(keyword))
}

fn field_hint(message: &str, rules: &[FieldRule]) -> Option<ApiError> {
    let message = message.to_lowercase();
    rules
        .iter()
        .find(|rule| message.contains(rule.keyword))
        .map(|rule| ApiError::Validation {
            field: Some(rule.field),
            message: rule.message.to_string(),
        })
}

/// The surfaced message always reads as rate limiting, whatever the server said
fn rate_limited(message: Option<&str>) -> ApiError {
    let message = message
        .filter(|m| is_rate_limit_message(m))
        .unwrap_or(RATE_LIMIT_MESSAGE);
    ApiError::RateLimited(message.to_string())
}

/// Classify a non-2xx response.
///
/// `message` is the server-provided message, if any.
pub fn classify_status(
    status: StatusCode,
    message: Option<&str>,
    rules: &[FieldRule],
    fallback: &str,
) -> ApiError {
    if status == StatusCode::TOO_MANY_REQUESTS || message.is_some_and(is_rate_limit_message) {
        return rate_limited(message);
    }

    if status == StatusCode::BAD_REQUEST {
        if let Some(err) = message.and_then(|m| field_hint(m, rules)) {
            return err;
        }
    }

    if let Some(rule) = STATUS_RULES.iter().find(|rule| rule.status.matches(status)) {
        return (rule.error)(message.unwrap_or(rule.fallback).to_string());
    }

    ApiError::Rejected(message.unwrap_or(fallback).to_string())
}

/// Classify a 2xx response whose body reports `success: false`.
pub fn classify_rejection(message: Option<&str>, rules: &[FieldRule], fallback: &str) -> ApiError {
    if message.is_some_and(is_rate_limit_message) {
        return rate_limited(message);
    }

    if let Some(err) = message.and_then(|m| field_hint(m, rules)) {
        return err;
    }

    ApiError::Rejected(message.unwrap_or(fallback).to_string())
}
