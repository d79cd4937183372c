//! DTOs for the two StreetEasy operations.
//!
//! # Design
//! Field names follow the GraphQL schema through `rename_all = "camelCase"`;
//! every object carries its optional `__typename`. Search DTOs keep required
//! fields required, so a search response that misses them fails to decode.
//! Listing details come from a federated backend where any sub-record can be
//! missing, so almost everything there is an `Option`.

mod common;
pub mod details;
pub mod search;

pub use common::{GeoPoint, Photo};
