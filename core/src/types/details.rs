//! Rental listing details, as returned by the federated details query.

use serde::{Deserialize, Serialize};

use super::common::{GeoPoint, Photo};

/// Response of `RentalListingDetailsFederated`. Each root field comes from a
/// different backend and may be null on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RentalListingDetailsResponse {
    pub rental_by_listing_id: Option<DetailedRentalListing>,
    pub building_by_rental_listing_id: Option<Building>,
    pub get_building_express_by_rental_listing_id: Option<BuildingExpress>,
    pub get_rello_rental_by_id: Option<RelloExpress>,
    pub get_rental_listing_express_by_id: Option<RentalListingExpress>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DetailedRentalListing {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub id: Option<String>,
    pub off_market_at: Option<String>,
    pub available_at: Option<String>,
    pub building_id: Option<String>,
    pub status: Option<String>,
    pub status_changes: Option<Vec<RentalStatusChange>>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub interesting_change_at: Option<String>,
    pub description: Option<String>,
    pub media: Option<Media>,
    pub property_details: Option<PropertyDetails>,
    pub mls_number: Option<String>,
    pub back_office: Option<RentalBackOffice>,
    pub pricing: Option<RentalPricing>,
    pub recent_listings_price_stats: Option<NeighborhoodPriceStats>,
    pub upcoming_open_houses: Option<Vec<OpenHouse>>,
    pub listing_source: Option<ListingSource>,
    pub property_history: Option<Vec<RentalListingChangesOfInterest>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RentalStatusChange {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub status: Option<String>,
    pub changed_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Media {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub photos: Option<Vec<Photo>>,
    pub floor_plans: Option<Vec<Photo>>,
    pub videos: Option<Vec<Video>>,
    pub tour3d_url: Option<String>,
    pub asset_count: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Video {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub image_url: Option<String>,
    pub id: Option<String>,
    pub provider: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Address {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub street: Option<String>,
    pub house_number: Option<String>,
    pub street_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub unit: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyDetails {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub address: Option<Address>,
    pub room_count: Option<f64>,
    pub bedroom_count: Option<u32>,
    pub full_bathroom_count: Option<u32>,
    pub half_bathroom_count: Option<u32>,
    pub living_area_size: Option<f64>,
    pub amenities: Option<UnitAmenities>,
    pub features: Option<PropertyFeatures>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnitAmenities {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub list: Option<Vec<String>>,
    pub doorman_types: Option<Vec<String>>,
    pub parking_types: Option<Vec<String>>,
    pub shared_outdoor_space_types: Option<Vec<String>>,
    pub storage_space_types: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyFeatures {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub list: Option<Vec<String>>,
    pub fireplace_types: Option<Vec<String>>,
    pub private_outdoor_space_types: Option<Vec<String>>,
    pub views: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RentalBackOffice {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub brokerage_listing_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RentalPricing {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub lease_term_months: Option<u32>,
    pub months_free: Option<f64>,
    pub no_fee: Option<bool>,
    pub price: Option<f64>,
    pub price_delta: Option<f64>,
    pub price_changes: Option<Vec<PriceChange>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceChange {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub changed_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NeighborhoodPriceStats {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub rental_price_stats: Option<PriceStats>,
    pub sale_price_stats: Option<PriceStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceStats {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub median_price: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OpenHouse {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub id: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub appointment_only: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingSource {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub source_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RentalListingChangesOfInterest {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub listing_id: Option<String>,
    pub source_group_label: Option<String>,
    pub photos: Option<Vec<Photo>>,
    pub off_market_at: Option<String>,
    pub rental_events_of_interest: Option<Vec<RentalEventOfInterest>>,
}

/// One entry of a listing's history. `price_percent_change` is only set on
/// price changes and `status` only on status changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RentalEventOfInterest {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub date: Option<String>,
    pub price: Option<f64>,
    pub price_percent_change: Option<f64>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Building {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub building_type: Option<String>,
    pub residential_unit_count: Option<u32>,
    pub year_built: Option<i32>,
    pub status: Option<String>,
    pub additional_details: Option<BuildingAdditionalDetails>,
    pub address: Option<Address>,
    pub hero_image: Option<Photo>,
    pub media: Option<Media>,
    pub complex: Option<Complex>,
    pub area: Option<BuildingArea>,
    pub sale_inventory_summary: Option<InventorySummary>,
    pub rental_inventory_summary: Option<InventorySummary>,
    pub is_land_lease: Option<bool>,
    pub policies: Option<Policies>,
    pub nearby: Option<Nearby>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildingAdditionalDetails {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub leasing_start_date: Option<String>,
    pub sales_start_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Complex {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildingArea {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventorySummary {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub available_listing_digests: Option<Vec<ListingDigest>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingDigest {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Policies {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub list: Option<Vec<String>>,
    pub pet_policy: Option<PetPolicy>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PetPolicy {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub cats_allowed: Option<bool>,
    pub dogs_allowed: Option<bool>,
    pub max_dog_weight: Option<f64>,
    pub restricted_dog_breeds: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Nearby {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub transit_stations: Option<Vec<TransitStation>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransitStation {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub name: Option<String>,
    pub distance: Option<f64>,
    pub routes: Option<Vec<String>>,
    pub geo: Option<GeoPoint>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildingExpress {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub nearby_schools: Option<Vec<School>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct School {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub name: Option<String>,
    pub district: Option<String>,
    pub grades: Option<Vec<String>>,
    pub id: Option<String>,
    pub idstr: Option<String>,
    pub geo_center: Option<GeoPoint>,
}

/// Third-party application link offered on some listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelloExpress {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub rental_id: Option<String>,
    pub cta_enabled: Option<bool>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RentalListingExpress {
    #[serde(rename = "__typename")]
    pub typename: Option<String>,
    pub has_active_building_showcase: Option<bool>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_roots_decode_as_none() {
        let details: RentalListingDetailsResponse = serde_json::from_value(json!({
            "rentalByListingId": { "id": "1", "offMarketAt": null },
            "getRelloRentalById": null
        }))
        .unwrap();
        let listing = details.rental_by_listing_id.unwrap();
        assert_eq!(listing.id.as_deref(), Some("1"));
        assert!(listing.off_market_at.is_none());
        assert!(details.building_by_rental_listing_id.is_none());
        assert!(details.get_rello_rental_by_id.is_none());
    }

    #[test]
    fn building_type_and_camel_case_names() {
        let building: Building = serde_json::from_value(json!({
            "__typename": "Building",
            "type": "RENTAL",
            "yearBuilt": 1931,
            "isLandLease": null,
            "policies": { "petPolicy": { "catsAllowed": true, "dogsAllowed": false, "maxDogWeight": null } },
            "nearby": { "transitStations": [{ "name": "30 Av", "distance": 0.2, "routes": ["N", "W"], "geo": { "latitude": 40.76, "longitude": -73.92 } }] }
        }))
        .unwrap();
        assert_eq!(building.typename.as_deref(), Some("Building"));
        assert_eq!(building.building_type.as_deref(), Some("RENTAL"));
        assert_eq!(building.year_built, Some(1931));
        let pets = building.policies.unwrap().pet_policy.unwrap();
        assert_eq!(pets.cats_allowed, Some(true));
        assert_eq!(pets.dogs_allowed, Some(false));
        let stations = building.nearby.unwrap().transit_stations.unwrap();
        assert_eq!(stations[0].routes.as_ref().unwrap(), &["N", "W"]);
    }

    #[test]
    fn media_field_names() {
        let media: Media = serde_json::from_value(json!({
            "tour3dUrl": "https://tours.example/1",
            "assetCount": 4,
            "floorPlans": null
        }))
        .unwrap();
        assert_eq!(media.tour3d_url.as_deref(), Some("https://tours.example/1"));
        assert_eq!(media.asset_count, Some(4));
        assert!(media.floor_plans.is_none());

        let value = serde_json::to_value(&media).unwrap();
        assert_eq!(value["floorPlans"], serde_json::Value::Null);
        assert_eq!(value["tour3dUrl"], "https://tours.example/1");
    }
}
