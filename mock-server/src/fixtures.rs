//! Canned upstream data served by the mock.

use serde_json::{json, Value};

/// Listing with every sub-record populated.
pub const FULL_LISTING_ID: &str = "4652509";
/// Listing whose optional sub-records are null.
pub const PARTIAL_LISTING_ID: &str = "4700121";

/// A search edge plus the area code it is filed under.
#[derive(Clone, Debug)]
pub struct SeededEdge {
    pub area: u64,
    pub edge: Value,
}

pub fn listing_details() -> Vec<(String, Value)> {
    vec![
        (FULL_LISTING_ID.to_string(), full_listing()),
        (PARTIAL_LISTING_ID.to_string(), partial_listing()),
    ]
}

pub fn search_edges() -> Vec<SeededEdge> {
    vec![
        SeededEdge {
            area: 401,
            edge: organic(listing_node("4700121", "Astoria", 2500.0, 2), true, &["DISHWASHER"], &[]),
        },
        SeededEdge {
            area: 301,
            edge: featured(listing_node("4698310", "Williamsburg", 3200.0, 1), false, &["GYM"], &["DOORMAN"]),
        },
        SeededEdge {
            area: 115,
            edge: sponsored(listing_node("4652509", "Chelsea", 3500.0, 1), "Similar to your search"),
        },
        SeededEdge {
            area: 102,
            edge: organic(listing_node("4611877", "Upper West Side", 6500.0, 3), true, &[], &[]),
        },
        SeededEdge {
            area: 201,
            edge: organic(listing_node("4599002", "Riverdale", 1900.0, 1), true, &[], &[]),
        },
    ]
}

pub fn listing_node(id: &str, area_name: &str, price: f64, bedrooms: u32) -> Value {
    let slug = format!("{}-{id}", area_name.to_lowercase().replace(' ', "-"));
    json!({
        "__typename": "SearchRentalListing",
        "id": id,
        "areaName": area_name,
        "availableAt": null,
        "bedroomCount": bedrooms,
        "buildingType": "RENTAL",
        "fullBathroomCount": 1,
        "furnished": false,
        "geoPoint": { "__typename": "GeoPoint", "latitude": 40.7128, "longitude": -73.8067 },
        "halfBathroomCount": 0,
        "hasTour3d": false,
        "hasVideos": false,
        "isNewDevelopment": false,
        "leadMedia": {
            "__typename": "LeadMedia",
            "photo": { "__typename": "Photo", "key": format!("photo-{id}") },
            "floorPlan": null
        },
        "leaseTermMonths": 12,
        "livingAreaSize": null,
        "mediaAssetCount": 1,
        "monthsFree": null,
        "noFee": true,
        "netEffectivePrice": price,
        "offMarketAt": null,
        "photos": [{ "__typename": "Photo", "key": format!("photo-{id}") }],
        "price": price,
        "priceChangedAt": null,
        "priceDelta": null,
        "slug": slug,
        "sourceGroupLabel": "Agency",
        "sourceType": "BROKER",
        "status": "ACTIVE",
        "street": "123 Main St",
        "unit": "2B",
        "upcomingOpenHouse": null,
        "urlPath": format!("/rental/{id}")
    })
}

pub fn organic(node: Value, amenities_match: bool, matched: &[&str], missing: &[&str]) -> Value {
    json!({
        "__typename": "OrganicRentalEdge",
        "node": node,
        "amenitiesMatch": amenities_match,
        "matchedAmenities": matched,
        "missingAmenities": missing
    })
}

pub fn featured(node: Value, amenities_match: bool, matched: &[&str], missing: &[&str]) -> Value {
    json!({
        "__typename": "FeaturedRentalEdge",
        "node": node,
        "amenitiesMatch": amenities_match,
        "matchedAmenities": matched,
        "missingAmenities": missing
    })
}

pub fn sponsored(node: Value, label: &str) -> Value {
    json!({
        "__typename": "SponsoredRentalEdge",
        "node": node,
        "sponsoredSimilarityLabel": label
    })
}

pub fn full_listing() -> Value {
    json!({
        "rentalByListingId": {
            "__typename": "RentalListing",
            "id": FULL_LISTING_ID,
            "offMarketAt": null,
            "availableAt": "2024-05-15",
            "buildingId": "12345",
            "status": "ACTIVE",
            "statusChanges": [
                { "__typename": "RentalStatusChange", "status": "ACTIVE", "changedAt": "2024-04-01T12:00:00Z" }
            ],
            "createdAt": "2024-04-01T12:00:00Z",
            "updatedAt": "2024-04-01T12:00:00Z",
            "interestingChangeAt": "2024-04-01T12:00:00Z",
            "description": "Nice apartment",
            "media": {
                "__typename": "Media",
                "photos": [{ "__typename": "Photo", "key": "photo1" }],
                "floorPlans": [{ "__typename": "FloorPlan", "key": "floorplan1" }],
                "videos": [],
                "tour3dUrl": null,
                "assetCount": 2
            },
            "propertyDetails": {
                "__typename": "PropertyDetails",
                "address": {
                    "__typename": "Address",
                    "street": "123 Main St",
                    "houseNumber": "123",
                    "streetName": "Main St",
                    "city": "New York",
                    "state": "NY",
                    "zipCode": "10001",
                    "unit": "4B"
                },
                "roomCount": 3,
                "bedroomCount": 1,
                "fullBathroomCount": 1,
                "halfBathroomCount": 0,
                "livingAreaSize": 750,
                "amenities": {
                    "__typename": "BuildingAmenities",
                    "list": ["DOORMAN", "ELEVATOR"],
                    "doormanTypes": [],
                    "parkingTypes": [],
                    "sharedOutdoorSpaceTypes": [],
                    "storageSpaceTypes": []
                },
                "features": {
                    "__typename": "PropertyFeatures",
                    "list": ["HARDWOOD_FLOORS", "DISHWASHER"],
                    "fireplaceTypes": [],
                    "privateOutdoorSpaceTypes": [],
                    "views": []
                }
            },
            "mlsNumber": null,
            "backOffice": { "__typename": "RentalBackOffice", "brokerageListingId": null },
            "pricing": {
                "__typename": "RentalPricing",
                "leaseTermMonths": 12,
                "monthsFree": null,
                "noFee": true,
                "price": 3500,
                "priceDelta": null,
                "priceChanges": []
            },
            "recentListingsPriceStats": {
                "__typename": "NeighborhoodPriceStats",
                "rentalPriceStats": { "__typename": "PriceStats", "medianPrice": 3400 },
                "salePriceStats": { "__typename": "PriceStats", "medianPrice": 750000 }
            },
            "upcomingOpenHouses": [
                {
                    "__typename": "OpenHouse",
                    "id": "oh-1",
                    "startTime": "2024-05-04T14:00:00Z",
                    "endTime": "2024-05-04T15:00:00Z",
                    "appointmentOnly": false
                }
            ],
            "listingSource": { "__typename": "ListingSource", "sourceType": "BROKER" },
            "propertyHistory": [
                {
                    "__typename": "RentalListingChangesOfInterest",
                    "listingId": FULL_LISTING_ID,
                    "sourceGroupLabel": "Agency",
                    "photos": [],
                    "offMarketAt": null,
                    "rentalEventsOfInterest": [
                        { "__typename": "PriceChangeOfInterest", "date": "2024-04-10", "price": 3500, "pricePercentChange": -2.8 },
                        { "__typename": "RentalStatusChangeOfInterest", "date": "2024-04-01", "price": 3600, "status": "LISTED" }
                    ]
                }
            ]
        },
        "buildingByRentalListingId": {
            "__typename": "Building",
            "id": "12345",
            "name": "The Building",
            "type": "CONDO",
            "residentialUnitCount": 100,
            "yearBuilt": 2000,
            "status": "COMPLETED",
            "additionalDetails": {
                "__typename": "BuildingAdditionalDetails",
                "leasingStartDate": null,
                "salesStartDate": null
            },
            "address": {
                "__typename": "Address",
                "street": "123 Main St",
                "city": "New York",
                "state": "NY",
                "zipCode": "10001"
            },
            "heroImage": null,
            "media": { "__typename": "Media", "photos": [] },
            "complex": null,
            "area": { "__typename": "Area", "name": "Chelsea" },
            "saleInventorySummary": { "__typename": "SaleInventorySummary", "availableListingDigests": [] },
            "rentalInventorySummary": {
                "__typename": "RentalInventorySummary",
                "availableListingDigests": [{ "__typename": "ListingDigest", "id": FULL_LISTING_ID }]
            },
            "isLandLease": null,
            "policies": {
                "__typename": "Policies",
                "list": ["PETS_ALLOWED"],
                "petPolicy": {
                    "__typename": "PetPolicy",
                    "catsAllowed": true,
                    "dogsAllowed": true,
                    "maxDogWeight": 50,
                    "restrictedDogBreeds": []
                }
            },
            "nearby": {
                "__typename": "Nearby",
                "transitStations": [
                    {
                        "__typename": "TransitStation",
                        "name": "23 St",
                        "distance": 0.1,
                        "routes": ["C", "E"],
                        "geo": { "__typename": "Geo", "latitude": 40.7459, "longitude": -73.9981 }
                    }
                ]
            }
        },
        "getBuildingExpressByRentalListingId": {
            "__typename": "BuildingExpress",
            "nearbySchools": [
                {
                    "__typename": "SchoolExpress",
                    "name": "PS 11 Sarah J. Garnet",
                    "district": "2",
                    "grades": ["PK", "K", "1", "2", "3", "4", "5"],
                    "id": "school-11",
                    "idstr": "02M011",
                    "geoCenter": { "__typename": "Geo", "latitude": 40.7447, "longitude": -73.9995 }
                }
            ]
        },
        "getRelloRentalById": {
            "__typename": "RelloExpress",
            "rentalId": FULL_LISTING_ID,
            "ctaEnabled": true,
            "link": "https://rello.example/apply/4652509"
        },
        "getRentalListingExpressById": {
            "__typename": "RentalListingExpress",
            "hasActiveBuildingShowcase": false
        }
    })
}

pub fn partial_listing() -> Value {
    json!({
        "rentalByListingId": {
            "id": PARTIAL_LISTING_ID,
            "status": "ACTIVE",
            "offMarketAt": null,
            "availableAt": null,
            "propertyDetails": {
                "address": { "street": "21-12 31st Street", "unit": null },
                "bedroomCount": 2,
                "fullBathroomCount": 1,
                "halfBathroomCount": 0
            },
            "pricing": { "price": 2500, "noFee": true },
            "media": { "photos": [], "floorPlans": null }
        },
        "buildingByRentalListingId": {
            "name": "Ditmars Court",
            "type": "RENTAL",
            "area": { "name": "Astoria" }
        },
        "getBuildingExpressByRentalListingId": null,
        "getRelloRentalById": null,
        "getRentalListingExpressById": null
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_edges_cover_every_variant() {
        let seeded = search_edges();
        let typenames: Vec<&str> = seeded
            .iter()
            .filter_map(|seeded| seeded.edge["__typename"].as_str())
            .collect();
        for variant in ["OrganicRentalEdge", "FeaturedRentalEdge", "SponsoredRentalEdge"] {
            assert!(typenames.contains(&variant), "{variant}");
        }
    }

    #[test]
    fn listing_ids_are_unique() {
        let details = listing_details();
        assert_eq!(details.len(), 2);
        assert_ne!(details[0].0, details[1].0);
        assert_eq!(details[0].1["rentalByListingId"]["id"], FULL_LISTING_ID);
    }
}
