//! Best-effort classification of upstream failure text.
//!
//! The categories only pick the advisory message and tag attached to a
//! fallback result; they never change control flow.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    RegionRestriction,
    BillingIssue,
    AuthError,
    RateLimit,
    Timeout,
    UnknownError,
}

impl ErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::RegionRestriction => "region_restriction",
            ErrorCategory::BillingIssue => "billing_issue",
            ErrorCategory::AuthError => "auth_error",
            ErrorCategory::RateLimit => "rate_limit",
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::UnknownError => "unknown_error",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorCategory::RegionRestriction => {
                "OpenAI is not available in your region. Showing a demo image instead."
            }
            ErrorCategory::BillingIssue => {
                "Your OpenAI account has exceeded its quota. Check your billing details. Showing a demo image instead."
            }
            ErrorCategory::AuthError => {
                "The OpenAI API key was rejected. Check the key and try again. Showing a demo image instead."
            }
            ErrorCategory::RateLimit => {
                "OpenAI rate limit reached. Wait a moment and retry. Showing a demo image instead."
            }
            ErrorCategory::Timeout => {
                "OpenAI did not respond in time. Showing a demo image instead."
            }
            ErrorCategory::UnknownError => {
                "Image generation failed. Showing a demo image instead."
            }
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const REGION_KEYWORDS: &[&str] = &["region", "Country", "territory", "unsupported_country"];
const BILLING_KEYWORDS: &[&str] = &["quota", "billing"];
const AUTH_KEYWORDS: &[&str] = &["401", "authentication", "invalid_api_key"];
// matched against the lowercased text
const RATE_LIMIT_KEYWORDS: &[&str] = &["rate", "limit"];
const TIMEOUT_KEYWORDS: &[&str] = &["timeout", "timed out"];

/// First matching category wins, in declaration order.
pub fn classify(error_text: &str) -> ErrorCategory {
    let contains_any =
        |haystack: &str, needles: &[&str]| needles.iter().any(|n| haystack.contains(n));
    let lowered = error_text.to_lowercase();

    if contains_any(error_text, REGION_KEYWORDS) {
        ErrorCategory::RegionRestriction
    } else if contains_any(error_text, BILLING_KEYWORDS) {
        ErrorCategory::BillingIssue
    } else if contains_any(error_text, AUTH_KEYWORDS) {
        ErrorCategory::AuthError
    } else if contains_any(&lowered, RATE_LIMIT_KEYWORDS) {
        ErrorCategory::RateLimit
    } else if contains_any(&lowered, TIMEOUT_KEYWORDS) {
        ErrorCategory::Timeout
    } else {
        ErrorCategory::UnknownError
    }
}
