//! Controller error type shared by the request, reply, and apply paths.
//!
//! ERROR HANDLING
//! ==============
//! `Display` output is the exact text shown to the user in the blocking
//! notification. Transport details are kept in the variant for logging only
//! and never reach the notification text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::net::types::Endpoint;

/// Every failure the form controller can surface to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControllerError {
    /// The query input was empty when analysis was requested.
    #[error("Please enter a query.")]
    EmptyQuery,

    /// A numeric form field could not be parsed.
    #[error("{field} must be a number (got '{value}').")]
    InvalidNumber { field: &'static str, value: String },

    /// The service answered with an explicit `error` field.
    #[error("{}", application_message(.endpoint, .message))]
    Application { endpoint: Endpoint, message: String },

    /// The exchange failed below the application layer (network, parse, schema).
    #[error("{}", .endpoint.transport_message())]
    Transport { endpoint: Endpoint, detail: String },

    /// A recommended topic is not among the selectable options.
    #[error("Next topic '{topic}' is not in the dropdown list!")]
    TopicNotListed { topic: String },
}

impl ControllerError {
    pub fn transport(endpoint: Endpoint, detail: impl Into<String>) -> Self {
        Self::Transport { endpoint, detail: detail.into() }
    }

    /// Diagnostic detail for logs. Falls back to the display text.
    pub fn detail(&self) -> String {
        match self {
            Self::Transport { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

fn application_message(endpoint: &Endpoint, message: &str) -> String {
    match endpoint {
        Endpoint::Analyze => format!("Error: {message}"),
        Endpoint::Recommend => message.to_owned(),
    }
}
