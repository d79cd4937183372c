//! Error types for the StreetEasy client.
//!
//! # Design
//! Transports report failures as `TransportFailure`, an explicit set of
//! variants covering everything a GraphQL round-trip can fail with: structured
//! GraphQL errors, bad HTTP statuses, network errors, undecodable bodies, and
//! arbitrary values raised by custom transports. The facade collapses every
//! one of them into a single `StreetEasyError` whose message always carries
//! the `StreetEasy GraphQL Error: ` prefix. Callers never see any other error
//! type.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Prefix of every normalized error message.
pub const ERROR_PREFIX: &str = "StreetEasy GraphQL Error: ";

/// GraphQL error location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlErrorLocation {
    pub line: u32,
    pub column: u32,
}

/// A single entry of a GraphQL `errors` array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<GraphqlErrorLocation>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

/// Reads an explicit `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Everything a transport can fail with.
#[derive(Debug, Error)]
pub enum TransportFailure {
    /// The server answered with a non-empty GraphQL `errors` array.
    #[error("{}", first_message(.errors))]
    Graphql {
        status: Option<u16>,
        errors: Vec<GraphqlError>,
    },

    /// Non-2xx status without any GraphQL errors in the body.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// The body, or its `data` payload, could not be decoded.
    #[error("{0}")]
    Decode(String),

    /// An error instance raised by a custom transport.
    #[error("{0}")]
    Other(Box<dyn std::error::Error + Send + Sync>),

    /// Any other raised value.
    #[error("{}", describe_thrown(.0))]
    Thrown(Value),

    #[error("undefined")]
    Undefined,
}

impl TransportFailure {
    /// Wrap an arbitrary error instance.
    pub fn other<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        TransportFailure::Other(err.into())
    }

    /// HTTP status of the failed response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportFailure::Graphql { status, .. } => *status,
            TransportFailure::Http { status, .. } => Some(*status),
            TransportFailure::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TransportFailure {
    fn from(err: serde_json::Error) -> Self {
        TransportFailure::Decode(err.to_string())
    }
}

fn first_message(errors: &[GraphqlError]) -> String {
    errors
        .first()
        .map(|err| err.message.clone())
        .unwrap_or_else(|| "GraphQL error".to_string())
}

/// Extract a message from a value that looks like an error object, otherwise
/// fall back to its string form.
fn describe_thrown(value: &Value) -> String {
    match value {
        Value::Object(map) => match map.get("message") {
            Some(Value::String(message)) => message.clone(),
            Some(message) => message.to_string(),
            None => value.to_string(),
        },
        Value::String(text) => text.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

/// The only error returned by `StreetEasyClient` operations.
#[derive(Debug, Error)]
#[error("{}{}", ERROR_PREFIX, .cause)]
pub struct StreetEasyError {
    cause: TransportFailure,
}

impl StreetEasyError {
    /// The text after the `StreetEasy GraphQL Error: ` prefix.
    pub fn detail(&self) -> String {
        self.cause.to_string()
    }

    pub fn cause(&self) -> &TransportFailure {
        &self.cause
    }

    pub fn into_cause(self) -> TransportFailure {
        self.cause
    }

    /// GraphQL errors reported by the server, empty for other failures.
    pub fn graphql_errors(&self) -> &[GraphqlError] {
        match &self.cause {
            TransportFailure::Graphql { errors, .. } => errors,
            _ => &[],
        }
    }
}

impl From<TransportFailure> for StreetEasyError {
    fn from(cause: TransportFailure) -> Self {
        StreetEasyError { cause }
    }
}
