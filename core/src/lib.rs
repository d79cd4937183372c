//! Typed async client for the StreetEasy rentals GraphQL API.
//!
//! # Overview
//! `StreetEasyClient` exposes a generic `request`, a rental search and a
//! listing-details lookup. It fills in the request defaults upstream expects,
//! executes the call through a `GraphqlTransport`, and reports every failure
//! as one `StreetEasyError` with a `StreetEasy GraphQL Error: ` message.
//!
//! # Design
//! - The client is stateless apart from its transport handle; no caching,
//!   retries or pagination.
//! - `HttpTransport` is the default transport. Its request building and
//!   response parsing are plain functions over `HttpRequest`/`HttpResponse`
//!   so hosts can run their own HTTP stack around them.
//! - Search edges are a closed enum keyed by `__typename` with an explicit
//!   `Unknown` case.

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod queries;
pub mod transport;
pub mod types;

pub use client::StreetEasyClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use constants::{Amenity, AreaCode};
pub use error::{GraphqlError, StreetEasyError, TransportFailure, ERROR_PREFIX};
pub use http::{HttpRequest, HttpResponse, HttpTransport};
pub use transport::{GraphqlDocument, GraphqlTransport, Variables};
pub use types::details::RentalListingDetailsResponse;
pub use types::search::{
    is_organic_or_featured_edge, is_sponsored_edge, AdStrategy, EdgeKind, NumberRange,
    RentalEdge, RentalStatus, SearchFilters, SearchRentalListing, SearchRentalsInput,
    SearchRentalsResponse, SortAttribute, SortDirection, Sorting,
};
