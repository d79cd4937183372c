//! Client facade for the StreetEasy GraphQL API.
//!
//! # Design
//! `StreetEasyClient` holds only a shared transport handle and carries no
//! mutable state between calls, so clones and concurrent calls are
//! independent. Each operation is one round-trip: fill in request defaults,
//! hand the document to the transport, decode the `data` payload. Whatever
//! goes wrong comes back as a `StreetEasyError`.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{StreetEasyError, TransportFailure};
use crate::http::HttpTransport;
use crate::queries::{RENTAL_LISTING_DETAILS, SEARCH_RENTALS};
use crate::transport::{GraphqlDocument, GraphqlTransport, Variables};
use crate::types::details::RentalListingDetailsResponse;
use crate::types::search::{SearchRentalsInput, SearchRentalsResponse};

#[derive(Clone)]
pub struct StreetEasyClient {
    transport: Arc<dyn GraphqlTransport>,
}

impl std::fmt::Debug for StreetEasyClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreetEasyClient")
            .field("endpoint", &self.endpoint())
            .finish()
    }
}

impl Default for StreetEasyClient {
    fn default() -> Self {
        Self::new()
    }
}

impl StreetEasyClient {
    /// Client bound to the default endpoint.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        Self::from_transport(Arc::new(HttpTransport::new(config.resolved_endpoint())))
    }

    /// Client over any transport, e.g. a host-provided HTTP stack or a test
    /// double.
    pub fn from_transport(transport: Arc<dyn GraphqlTransport>) -> Self {
        Self { transport }
    }

    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    /// Run `document` with `variables` and decode the `data` payload as `T`.
    ///
    /// Ask for `serde_json::Value` to get the payload exactly as received.
    pub async fn request<T>(
        &self,
        document: impl Into<GraphqlDocument>,
        variables: Option<Variables>,
    ) -> Result<T, StreetEasyError>
    where
        T: DeserializeOwned,
    {
        let document = document.into();
        let operation = document.operation_name().unwrap_or("anonymous");
        debug!(endpoint = self.endpoint(), operation, "sending GraphQL request");

        let result = self
            .transport
            .execute(&document, variables.as_ref())
            .await
            .and_then(|data| serde_json::from_value::<T>(data).map_err(TransportFailure::from));

        match result {
            Ok(data) => {
                debug!(operation, "GraphQL request succeeded");
                Ok(data)
            }
            Err(failure) => {
                let err = StreetEasyError::from(failure);
                warn!(operation, error = %err, "GraphQL request failed");
                Err(err)
            }
        }
    }

    /// Search rental listings. `adStrategy` and `userSearchToken` are filled
    /// in when the caller left them unset.
    pub async fn search_rentals(
        &self,
        input: SearchRentalsInput,
    ) -> Result<SearchRentalsResponse, StreetEasyError> {
        let input = serde_json::to_value(input.with_defaults()).map_err(TransportFailure::from)?;
        let mut variables = Variables::new();
        variables.insert("input".to_string(), input);
        self.request(&SEARCH_RENTALS, Some(variables)).await
    }

    /// Full details of one rental listing. The id is passed through as is.
    pub async fn get_rental_listing_details(
        &self,
        listing_id: &str,
    ) -> Result<RentalListingDetailsResponse, StreetEasyError> {
        let mut variables = Variables::new();
        variables.insert("listingID".to_string(), Value::String(listing_id.to_string()));
        self.request(&RENTAL_LISTING_DETAILS, Some(variables)).await
    }

    pub async fn get_listing_details(
        &self,
        listing_id: &str,
    ) -> Result<RentalListingDetailsResponse, StreetEasyError> {
        self.get_rental_listing_details(listing_id).await
    }
}
