//! Rental search input and response shapes.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use uuid::Uuid;

use super::common::{GeoPoint, Photo};
use crate::constants::{AreaCode, Amenity};

const TYPENAME: &str = "__typename";

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// Only value upstream accepts for `adStrategy`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdStrategy {
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RentalStatus {
    Active,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortAttribute {
    Recommended,
    Price,
    DateListed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sorting {
    pub attribute: SortAttribute,
    pub direction: SortDirection,
}

/// Inclusive range; an open end is sent as `null`. Bounds may be fractional
/// (1.5 bathrooms); whole bounds go out as JSON integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberRange {
    #[serde(serialize_with = "serialize_bound")]
    pub lower_bound: Option<f64>,
    #[serde(serialize_with = "serialize_bound")]
    pub upper_bound: Option<f64>,
}

impl NumberRange {
    pub fn between(lower: impl Into<f64>, upper: impl Into<f64>) -> Self {
        Self {
            lower_bound: Some(lower.into()),
            upper_bound: Some(upper.into()),
        }
    }

    pub fn at_least(lower: impl Into<f64>) -> Self {
        Self {
            lower_bound: Some(lower.into()),
            upper_bound: None,
        }
    }

    pub fn at_most(upper: impl Into<f64>) -> Self {
        Self {
            lower_bound: None,
            upper_bound: Some(upper.into()),
        }
    }
}

// Largest magnitude below which every whole f64 fits an i64 exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

fn serialize_bound<S>(bound: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match *bound {
        Some(value) if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER => {
            serializer.serialize_some(&(value as i64))
        }
        Some(value) => serializer.serialize_some(&value),
        None => serializer.serialize_none(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub areas: Option<Vec<AreaCode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rental_status: Option<RentalStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<NumberRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<NumberRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<NumberRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<Amenity>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pets_allowed: Option<bool>,
}

/// The `input` variable of the search operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRentalsInput {
    pub filters: SearchFilters,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sorting: Option<Sorting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ad_strategy: Option<AdStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_search_token: Option<String>,
}

impl SearchRentalsInput {
    pub fn new(filters: SearchFilters) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    pub fn with_sorting(mut self, attribute: SortAttribute, direction: SortDirection) -> Self {
        self.sorting = Some(Sorting {
            attribute,
            direction,
        });
        self
    }

    pub fn with_page(mut self, page: u32, per_page: u32) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }

    pub fn with_ad_strategy(mut self, strategy: AdStrategy) -> Self {
        self.ad_strategy = Some(strategy);
        self
    }

    pub fn with_user_search_token(mut self, token: impl Into<String>) -> Self {
        self.user_search_token = Some(token.into());
        self
    }

    /// Fill in `adStrategy` and `userSearchToken` when the caller left them
    /// unset. The token is a fresh UUIDv4.
    pub fn with_defaults(self) -> Self {
        self.with_defaults_using(|| Uuid::new_v4().to_string())
    }

    /// Same as `with_defaults` with a caller-provided token generator. The
    /// generator only runs when a token is actually needed.
    pub fn with_defaults_using(mut self, new_token: impl FnOnce() -> String) -> Self {
        if self.ad_strategy.is_none() {
            self.ad_strategy = Some(AdStrategy::None);
        }
        // An empty token is as good as none upstream.
        if self.user_search_token.as_deref().map_or(true, str::is_empty) {
            self.user_search_token = Some(new_token());
        }
        self
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRentalsResponse {
    pub search_rentals: SearchRentals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRentals {
    #[serde(rename = "__typename", default)]
    pub typename: Option<String>,
    pub total_count: u64,
    #[serde(default)]
    pub edges: Vec<RentalEdge>,
}

impl SearchRentals {
    /// Listing nodes of every recognized edge, in result order.
    pub fn listings(&self) -> impl Iterator<Item = &SearchRentalListing> {
        self.edges.iter().filter_map(RentalEdge::node)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadMedia {
    #[serde(rename = "__typename", default)]
    pub typename: Option<String>,
    #[serde(default)]
    pub photo: Option<Photo>,
    #[serde(default)]
    pub floor_plan: Option<Photo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenHouseDigest {
    #[serde(rename = "__typename", default)]
    pub typename: Option<String>,
    pub start_time: String,
    pub end_time: String,
    pub appointment_only: bool,
}

/// Listing digest shown on a search results page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRentalListing {
    #[serde(rename = "__typename", default)]
    pub typename: Option<String>,
    pub id: String,
    pub area_name: String,
    #[serde(default)]
    pub available_at: Option<String>,
    pub bedroom_count: u32,
    /// `CO_OP`, `CONDO`, `MULTI_FAMILY`, `RENTAL` or `TOWNHOUSE`.
    pub building_type: String,
    pub full_bathroom_count: u32,
    pub furnished: bool,
    #[serde(default)]
    pub geo_point: Option<GeoPoint>,
    pub half_bathroom_count: u32,
    pub has_tour3d: bool,
    pub has_videos: bool,
    pub is_new_development: bool,
    #[serde(default)]
    pub lead_media: Option<LeadMedia>,
    #[serde(default)]
    pub lease_term_months: Option<u32>,
    #[serde(default)]
    pub living_area_size: Option<f64>,
    pub media_asset_count: u32,
    #[serde(default)]
    pub months_free: Option<f64>,
    pub no_fee: bool,
    #[serde(default)]
    pub net_effective_price: Option<f64>,
    #[serde(default)]
    pub off_market_at: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
    pub price: f64,
    #[serde(default)]
    pub price_changed_at: Option<String>,
    #[serde(default)]
    pub price_delta: Option<f64>,
    pub slug: String,
    #[serde(default)]
    pub source_group_label: Option<String>,
    #[serde(default)]
    pub source_type: Option<String>,
    pub status: String,
    pub street: String,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub upcoming_open_house: Option<OpenHouseDigest>,
    pub url_path: String,
}

/// Payload shared by organic and featured edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmenityMatchedEdge {
    pub node: SearchRentalListing,
    pub amenities_match: bool,
    #[serde(default)]
    pub matched_amenities: Vec<String>,
    #[serde(default)]
    pub missing_amenities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsoredEdge {
    pub node: SearchRentalListing,
    #[serde(default)]
    pub sponsored_similarity_label: Option<String>,
}

/// Which variant an edge's `__typename` names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Organic,
    Featured,
    Sponsored,
    Unknown,
}

impl EdgeKind {
    pub fn from_typename(typename: Option<&str>) -> Self {
        match typename {
            Some("OrganicRentalEdge") => EdgeKind::Organic,
            Some("FeaturedRentalEdge") => EdgeKind::Featured,
            Some("SponsoredRentalEdge") => EdgeKind::Sponsored,
            _ => EdgeKind::Unknown,
        }
    }

    /// Classify a raw JSON edge. Non-objects and missing or non-string
    /// discriminators are `Unknown`.
    pub fn of(edge: &Value) -> Self {
        Self::from_typename(edge.get(TYPENAME).and_then(Value::as_str))
    }

    pub fn typename(self) -> Option<&'static str> {
        match self {
            EdgeKind::Organic => Some("OrganicRentalEdge"),
            EdgeKind::Featured => Some("FeaturedRentalEdge"),
            EdgeKind::Sponsored => Some("SponsoredRentalEdge"),
            EdgeKind::Unknown => None,
        }
    }

    pub fn is_organic_or_featured(self) -> bool {
        matches!(self, EdgeKind::Organic | EdgeKind::Featured)
    }

    pub fn is_sponsored(self) -> bool {
        self == EdgeKind::Sponsored
    }
}

/// One search result, keyed by `__typename`.
///
/// Edges whose discriminator is missing or not one of the three known
/// variants decode into `Unknown` with the raw payload kept intact.
#[derive(Debug, Clone, PartialEq)]
pub enum RentalEdge {
    Organic(AmenityMatchedEdge),
    Featured(AmenityMatchedEdge),
    Sponsored(SponsoredEdge),
    Unknown { typename: Option<String>, raw: Value },
}

impl RentalEdge {
    pub fn kind(&self) -> EdgeKind {
        match self {
            RentalEdge::Organic(_) => EdgeKind::Organic,
            RentalEdge::Featured(_) => EdgeKind::Featured,
            RentalEdge::Sponsored(_) => EdgeKind::Sponsored,
            RentalEdge::Unknown { .. } => EdgeKind::Unknown,
        }
    }

    pub fn is_organic_or_featured(&self) -> bool {
        self.kind().is_organic_or_featured()
    }

    pub fn is_sponsored(&self) -> bool {
        self.kind().is_sponsored()
    }

    pub fn node(&self) -> Option<&SearchRentalListing> {
        match self {
            RentalEdge::Organic(edge) | RentalEdge::Featured(edge) => Some(&edge.node),
            RentalEdge::Sponsored(edge) => Some(&edge.node),
            RentalEdge::Unknown { .. } => None,
        }
    }
}

pub fn is_organic_or_featured_edge(edge: &RentalEdge) -> bool {
    edge.is_organic_or_featured()
}

pub fn is_sponsored_edge(edge: &RentalEdge) -> bool {
    edge.is_sponsored()
}

impl<'de> Deserialize<'de> for RentalEdge {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Value::deserialize(deserializer)?;
        let typename = raw.get(TYPENAME).and_then(Value::as_str).map(str::to_owned);
        let edge = match EdgeKind::from_typename(typename.as_deref()) {
            EdgeKind::Organic => RentalEdge::Organic(serde_json::from_value(raw).map_err(D::Error::custom)?),
            EdgeKind::Featured => RentalEdge::Featured(serde_json::from_value(raw).map_err(D::Error::custom)?),
            EdgeKind::Sponsored => RentalEdge::Sponsored(serde_json::from_value(raw).map_err(D::Error::custom)?),
            EdgeKind::Unknown => RentalEdge::Unknown { typename, raw },
        };
        Ok(edge)
    }
}

impl Serialize for RentalEdge {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut value = match self {
            RentalEdge::Organic(edge) | RentalEdge::Featured(edge) => serde_json::to_value(edge),
            RentalEdge::Sponsored(edge) => serde_json::to_value(edge),
            RentalEdge::Unknown { raw, .. } => return raw.serialize(serializer),
        }
        .map_err(S::Error::custom)?;

        if let (Value::Object(map), Some(typename)) = (&mut value, self.kind().typename()) {
            map.insert(TYPENAME.to_string(), Value::String(typename.to_string()));
        }
        value.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn listing_json(id: &str) -> Value {
        json!({
            "__typename": "SearchRentalListing",
            "id": id,
            "areaName": "Astoria",
            "availableAt": null,
            "bedroomCount": 2,
            "buildingType": "RENTAL",
            "fullBathroomCount": 1,
            "furnished": false,
            "geoPoint": { "__typename": "GeoPoint", "latitude": 40.77, "longitude": -73.92 },
            "halfBathroomCount": 0,
            "hasTour3d": false,
            "hasVideos": true,
            "isNewDevelopment": false,
            "leadMedia": { "__typename": "LeadMedia", "photo": { "__typename": "Photo", "key": "abc" }, "floorPlan": null },
            "leaseTermMonths": 12,
            "livingAreaSize": null,
            "mediaAssetCount": 9,
            "monthsFree": null,
            "noFee": true,
            "netEffectivePrice": 2850,
            "offMarketAt": null,
            "photos": [{ "__typename": "Photo", "key": "abc" }],
            "price": 2850,
            "priceChangedAt": null,
            "priceDelta": null,
            "slug": "21-12-31st-street-astoria",
            "sourceGroupLabel": "Agency",
            "sourceType": "BROKER",
            "status": "ACTIVE",
            "street": "21-12 31st Street",
            "unit": "2B",
            "upcomingOpenHouse": null,
            "urlPath": "/building/21-12-31st-street-astoria/2b"
        })
    }

    #[test]
    fn empty_filters_serialize_as_empty_object() {
        let input = SearchRentalsInput::new(SearchFilters::default());
        assert_eq!(serde_json::to_value(&input).unwrap(), json!({ "filters": {} }));
    }

    #[test]
    fn open_range_ends_are_sent_as_null() {
        let filters = SearchFilters {
            areas: Some(vec![AreaCode::BROOKLYN]),
            price: Some(NumberRange::at_most(5000)),
            amenities: Some(vec![Amenity::WasherDryer, Amenity::Dishwasher]),
            pets_allowed: Some(true),
            rental_status: Some(RentalStatus::Active),
            ..SearchFilters::default()
        };
        let input = SearchRentalsInput::new(filters)
            .with_sorting(SortAttribute::Recommended, SortDirection::Descending)
            .with_page(1, 5);
        assert_eq!(
            serde_json::to_value(&input).unwrap(),
            json!({
                "filters": {
                    "areas": [300],
                    "rentalStatus": "ACTIVE",
                    "price": { "lowerBound": null, "upperBound": 5000 },
                    "amenities": ["WASHER_DRYER", "DISHWASHER"],
                    "petsAllowed": true
                },
                "sorting": { "attribute": "RECOMMENDED", "direction": "DESCENDING" },
                "perPage": 5,
                "page": 1
            })
        );
    }

    #[test]
    fn fractional_bounds_round_trip() {
        let input: SearchRentalsInput = serde_json::from_value(json!({
            "filters": { "bathrooms": { "lowerBound": 1.5, "upperBound": null } }
        }))
        .unwrap();
        let bathrooms = input.filters.bathrooms.unwrap();
        assert_eq!(bathrooms.lower_bound, Some(1.5));
        assert_eq!(bathrooms.upper_bound, None);

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["filters"]["bathrooms"], json!({ "lowerBound": 1.5, "upperBound": null }));
    }

    #[test]
    fn whole_bounds_are_sent_as_integers() {
        let range = NumberRange::between(2, 3500.0);
        assert_eq!(
            serde_json::to_value(range).unwrap(),
            json!({ "lowerBound": 2, "upperBound": 3500 })
        );
    }

    #[test]
    fn defaults_fill_both_fields() {
        let input = SearchRentalsInput::default().with_defaults_using(|| "token-1".to_string());
        assert_eq!(input.ad_strategy, Some(AdStrategy::None));
        assert_eq!(input.user_search_token.as_deref(), Some("token-1"));
    }

    #[test]
    fn defaults_keep_caller_token_and_skip_generator() {
        let input = SearchRentalsInput::default()
            .with_user_search_token("custom-token")
            .with_defaults_using(|| panic!("generator must not run"));
        assert_eq!(input.user_search_token.as_deref(), Some("custom-token"));
        assert_eq!(input.ad_strategy, Some(AdStrategy::None));
    }

    #[test]
    fn empty_token_is_replaced() {
        let input = SearchRentalsInput::default()
            .with_user_search_token("")
            .with_defaults_using(|| "fresh".to_string());
        assert_eq!(input.user_search_token.as_deref(), Some("fresh"));
    }

    #[test]
    fn generated_tokens_are_uuids() {
        let a = SearchRentalsInput::default().with_defaults();
        let b = SearchRentalsInput::default().with_defaults();
        let a = a.user_search_token.unwrap();
        let b = b.user_search_token.unwrap();
        assert!(Uuid::parse_str(&a).is_ok());
        assert_ne!(a, b);
    }

    #[test]
    fn edge_kind_from_raw_values() {
        let cases = [
            (json!({ "__typename": "OrganicRentalEdge" }), true, false),
            (json!({ "__typename": "FeaturedRentalEdge" }), true, false),
            (json!({ "__typename": "SponsoredRentalEdge" }), false, true),
            (json!({ "__typename": "UnknownEdgeType" }), false, false),
            (json!({}), false, false),
            (json!({ "__typename": 3 }), false, false),
            (json!(null), false, false),
        ];
        for (value, organic_or_featured, sponsored) in cases {
            let kind = EdgeKind::of(&value);
            assert_eq!(kind.is_organic_or_featured(), organic_or_featured, "{value}");
            assert_eq!(kind.is_sponsored(), sponsored, "{value}");
        }
    }

    #[test]
    fn decodes_each_edge_variant() {
        let mut organic = json!({ "amenitiesMatch": true, "matchedAmenities": ["DISHWASHER"], "missingAmenities": [] });
        organic["__typename"] = json!("OrganicRentalEdge");
        organic["node"] = listing_json("1");

        let mut sponsored = json!({ "sponsoredSimilarityLabel": "Similar to your search" });
        sponsored["__typename"] = json!("SponsoredRentalEdge");
        sponsored["node"] = listing_json("2");

        let edges: Vec<RentalEdge> = serde_json::from_value(json!([
            organic,
            sponsored,
            { "__typename": "UnknownEdgeType", "node": { "id": "3" } },
            { "node": { "id": "4" } }
        ]))
        .unwrap();

        assert!(matches!(&edges[0], RentalEdge::Organic(edge) if edge.matched_amenities == ["DISHWASHER"]));
        assert!(is_organic_or_featured_edge(&edges[0]));
        assert!(is_sponsored_edge(&edges[1]));
        assert_eq!(edges[1].node().unwrap().id, "2");

        match &edges[2] {
            RentalEdge::Unknown { typename, raw } => {
                assert_eq!(typename.as_deref(), Some("UnknownEdgeType"));
                assert_eq!(raw["node"]["id"], "3");
            }
            other => panic!("expected unknown edge, got {other:?}"),
        }
        assert!(!edges[3].is_organic_or_featured());
        assert!(!edges[3].is_sponsored());
        assert!(edges[3].node().is_none());
    }

    #[test]
    fn known_edge_with_bad_payload_is_an_error() {
        let result: Result<RentalEdge, _> =
            serde_json::from_value(json!({ "__typename": "FeaturedRentalEdge", "node": {} }));
        assert!(result.is_err());
    }

    #[test]
    fn edges_serialize_with_their_discriminator() {
        let edge = RentalEdge::Featured(AmenityMatchedEdge {
            node: serde_json::from_value(listing_json("9")).unwrap(),
            amenities_match: false,
            matched_amenities: Vec::new(),
            missing_amenities: vec!["GYM".to_string()],
        });
        let value = serde_json::to_value(&edge).unwrap();
        assert_eq!(value["__typename"], "FeaturedRentalEdge");
        assert_eq!(value["missingAmenities"], json!(["GYM"]));

        let back: RentalEdge = serde_json::from_value(value).unwrap();
        assert_eq!(back, edge);
    }
}
