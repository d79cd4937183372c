//! GraphQL-over-HTTP transport.
//!
//! # Design
//! Requests and responses are first described as plain data: `build_request`
//! turns a document plus variables into an `HttpRequest`, and
//! `parse_response` turns an `HttpResponse` into the `data` payload or a
//! `TransportFailure`. Both are pure and testable without a network.
//! `HttpTransport` glues them to reqwest; hosts with their own HTTP stack can
//! run the same two functions around it instead.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::trace;

use crate::config::DEFAULT_HEADERS;
use crate::error::{null_as_default, GraphqlError, TransportFailure};
use crate::transport::{GraphqlDocument, GraphqlTransport, Variables};

const MAX_ERROR_BODY: usize = 4096;

/// A GraphQL POST described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RequestBody<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<&'a Variables>,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation_name: Option<&'a str>,
}

#[derive(Deserialize)]
struct ResponseBody {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    errors: Vec<GraphqlError>,
}

/// Build the POST for `document` against `endpoint`, with the fixed header set.
pub fn build_request(
    endpoint: &str,
    document: &GraphqlDocument,
    variables: Option<&Variables>,
) -> Result<HttpRequest, TransportFailure> {
    let body = serde_json::to_string(&RequestBody {
        query: document.source(),
        variables,
        operation_name: document.operation_name(),
    })?;
    Ok(HttpRequest {
        url: endpoint.to_string(),
        headers: DEFAULT_HEADERS
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect(),
        body,
    })
}

/// Extract the `data` payload, or classify the failure.
///
/// GraphQL errors win over the status code: upstream reports variable
/// validation problems as 400 responses carrying an `errors` array.
pub fn parse_response(response: HttpResponse) -> Result<Value, TransportFailure> {
    let parsed = serde_json::from_str::<ResponseBody>(&response.body);

    if let Ok(body) = &parsed {
        if !body.errors.is_empty() {
            return Err(TransportFailure::Graphql {
                status: Some(response.status),
                errors: body.errors.clone(),
            });
        }
    }

    if !(200..300).contains(&response.status) {
        return Err(TransportFailure::Http {
            status: response.status,
            body: truncate_body(&response.body),
        });
    }

    parsed?
        .data
        .ok_or_else(|| TransportFailure::Decode("response contained no data".to_string()))
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &body[..end])
}

/// Default transport: POSTs JSON to the endpoint with reqwest.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(endpoint, reqwest::Client::new())
    }

    /// Use a preconfigured reqwest client (timeouts, proxies, TLS roots).
    pub fn with_client(endpoint: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }
}

#[async_trait]
impl GraphqlTransport for HttpTransport {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn execute(
        &self,
        document: &GraphqlDocument,
        variables: Option<&Variables>,
    ) -> Result<Value, TransportFailure> {
        let request = build_request(&self.endpoint, document, variables)?;

        let mut builder = self.http.post(&request.url).body(request.body);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        let response = builder.send().await?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|value| (name.as_str().to_string(), value.to_string()))
            })
            .collect();
        let body = response.text().await?;
        trace!(status, bytes = body.len(), "GraphQL response received");

        parse_response(HttpResponse {
            status,
            headers,
            body,
        })
    }
}
