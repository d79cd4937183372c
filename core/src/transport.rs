//! The seam between the client facade and whatever executes GraphQL calls.
//!
//! # Design
//! `StreetEasyClient` never talks to the network itself. It hands a
//! `GraphqlDocument` and optional variables to a `GraphqlTransport` and gets
//! back the decoded `data` payload or a `TransportFailure`. The default
//! transport is `HttpTransport`; tests and hosts with their own HTTP stack
//! inject their own implementation.

use std::borrow::Cow;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::TransportFailure;

/// Variables mapping sent alongside a document.
pub type Variables = Map<String, Value>;

/// A GraphQL document as sent on the wire, optionally tagged with the name of
/// the operation it contains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphqlDocument {
    source: Cow<'static, str>,
    operation_name: Option<Cow<'static, str>>,
}

impl GraphqlDocument {
    /// Document backed by a static string with a known operation name.
    pub const fn named(source: &'static str, operation_name: &'static str) -> Self {
        Self {
            source: Cow::Borrowed(source),
            operation_name: Some(Cow::Borrowed(operation_name)),
        }
    }

    pub fn new(source: impl Into<Cow<'static, str>>) -> Self {
        Self {
            source: source.into(),
            operation_name: None,
        }
    }

    pub fn with_operation_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.operation_name = Some(name.into());
        self
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn operation_name(&self) -> Option<&str> {
        self.operation_name.as_deref()
    }
}

impl From<&'static str> for GraphqlDocument {
    fn from(source: &'static str) -> Self {
        Self::new(source)
    }
}

impl From<String> for GraphqlDocument {
    fn from(source: String) -> Self {
        Self::new(source)
    }
}

impl From<&GraphqlDocument> for GraphqlDocument {
    fn from(document: &GraphqlDocument) -> Self {
        document.clone()
    }
}

/// Executes a GraphQL document against one endpoint.
///
/// Implementations return the `data` object of the response on success.
/// They must not retry; whatever they fail with is normalized by the facade.
#[async_trait]
pub trait GraphqlTransport: Send + Sync {
    /// The endpoint this transport is bound to.
    fn endpoint(&self) -> &str;

    async fn execute(
        &self,
        document: &GraphqlDocument,
        variables: Option<&Variables>,
    ) -> Result<Value, TransportFailure>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_strings_have_no_operation_name() {
        let document = GraphqlDocument::from("query { viewer { id } }");
        assert_eq!(document.source(), "query { viewer { id } }");
        assert!(document.operation_name().is_none());
    }

    #[test]
    fn named_documents_keep_their_operation() {
        const DOC: GraphqlDocument = GraphqlDocument::named("query Viewer { id }", "Viewer");
        assert_eq!(DOC.operation_name(), Some("Viewer"));

        let owned = GraphqlDocument::from(String::from("query Other { id }"))
            .with_operation_name("Other");
        assert_eq!(owned.operation_name(), Some("Other"));
        assert_eq!(GraphqlDocument::from(&owned), owned);
    }
}
