//! Query documents sent verbatim to the StreetEasy endpoint.

use crate::transport::GraphqlDocument;

/// Rental search with organic, featured and sponsored edges.
pub const SEARCH_RENTALS: GraphqlDocument =
    GraphqlDocument::named(SEARCH_RENTALS_QUERY, "SearchRentalsFederated");

/// Listing, building, nearby schools and third-party integrations for one
/// rental listing.
pub const RENTAL_LISTING_DETAILS: GraphqlDocument =
    GraphqlDocument::named(RENTAL_LISTING_DETAILS_QUERY, "RentalListingDetailsFederated");

pub const SEARCH_RENTALS_QUERY: &str = r#"
query SearchRentalsFederated($input: SearchRentalsInput!) {
  searchRentals(input: $input) {
    __typename
    edges {
      __typename
      ... on OrganicRentalEdge {
        node {
          __typename
          ...RentalListingDigestForSearchResults
        }
        amenitiesMatch
        matchedAmenities
        missingAmenities
      }
      ... on FeaturedRentalEdge {
        node {
          __typename
          ...RentalListingDigestForSearchResults
        }
        amenitiesMatch
        matchedAmenities
        missingAmenities
      }
      ... on SponsoredRentalEdge {
        node {
          __typename
          ...RentalListingDigestForSearchResults
        }
        sponsoredSimilarityLabel
      }
    }
    totalCount
  }
}
fragment LeadMediaForSRP on LeadMedia {
  __typename
  photo {
    __typename
    key
  }
  floorPlan {
    __typename
    key
  }
}
fragment OpenHouseForSRP on OpenHouseDigest {
  __typename
  startTime
  endTime
  appointmentOnly
}
fragment RentalListingDigestForSearchResults on SearchRentalListing {
  __typename
  id
  areaName
  availableAt
  bedroomCount
  buildingType
  fullBathroomCount
  furnished
  geoPoint {
    __typename
    latitude
    longitude
  }
  halfBathroomCount
  hasTour3d
  hasVideos
  isNewDevelopment
  leadMedia {
    __typename
    ...LeadMediaForSRP
  }
  leaseTermMonths
  livingAreaSize
  mediaAssetCount
  monthsFree
  noFee
  netEffectivePrice
  offMarketAt
  photos {
    __typename
    key
  }
  price
  priceChangedAt
  priceDelta
  slug
  sourceGroupLabel
  sourceType
  status
  street
  unit
  upcomingOpenHouse {
    __typename
    ...OpenHouseForSRP
  }
  urlPath
}
"#;

pub const RENTAL_LISTING_DETAILS_QUERY: &str = r#"
query RentalListingDetailsFederated($listingID: ID!) {
  rentalByListingId(id: $listingID) {
    __typename
    id
    offMarketAt
    availableAt
    buildingId
    status
    statusChanges {
      __typename
      status
      changedAt
    }
    createdAt
    updatedAt
    interestingChangeAt
    description
    media {
      __typename
      ...MediaInfo
    }
    propertyDetails {
      __typename
      ...PropertyInfo
    }
    mlsNumber
    backOffice {
      __typename
      brokerageListingId
    }
    pricing {
      __typename
      leaseTermMonths
      monthsFree
      noFee
      price
      priceDelta
      priceChanges {
        __typename
        changedAt
      }
    }
    recentListingsPriceStats {
      __typename
      rentalPriceStats {
        __typename
        medianPrice
      }
      salePriceStats {
        __typename
        medianPrice
      }
    }
    upcomingOpenHouses {
      __typename
      ...FederatedOpenHouseInfo
    }
    listingSource {
      __typename
      ...ListingSourceInfo
    }
    propertyHistory {
      __typename
      ...RentalPropertyHistory
    }
  }
  buildingByRentalListingId(id: $listingID) {
    __typename
    ...ListingBuildingInfo
  }
  getBuildingExpressByRentalListingId(id: $listingID) {
    __typename
    ...NearbySchools
  }
  getRelloRentalById(id: $listingID) {
    __typename
    ...RelloInfo
  }
  getRentalListingExpressById(id: $listingID) {
    __typename
    hasActiveBuildingShowcase
  }
}
fragment FederatedOpenHouseInfo on OpenHouse {
  __typename
  id
  startTime
  endTime
  appointmentOnly
}
fragment ListingBuildingInfo on Building {
  __typename
  id
  name
  type
  residentialUnitCount
  yearBuilt
  status
  additionalDetails {
    __typename
    leasingStartDate
    salesStartDate
  }
  address {
    __typename
    street
    city
    state
    zipCode
  }
  heroImage {
    __typename
    key
  }
  media {
    __typename
    photos {
      __typename
      key
    }
  }
  complex {
    __typename
    id
    name
  }
  area {
    __typename
    name
  }
  media {
    __typename
    photos {
      __typename
      key
    }
  }
  saleInventorySummary {
    __typename
    availableListingDigests {
      __typename
      id
    }
  }
  rentalInventorySummary {
    __typename
    availableListingDigests {
      __typename
      id
    }
  }
  isLandLease
  policies {
    __typename
    list
    petPolicy {
      __typename
      catsAllowed
      dogsAllowed
      maxDogWeight
      restrictedDogBreeds
    }
  }
  nearby {
    __typename
    transitStations {
      __typename
      name
      distance
      routes
      geo {
        __typename
        latitude
        longitude
      }
    }
  }
}
fragment ListingSourceInfo on ListingSource {
  __typename
  sourceType
}
fragment MediaInfo on Media {
  __typename
  photos {
    __typename
    key
  }
  floorPlans {
    __typename
    key
  }
  videos {
    __typename
    imageUrl
    id
    provider
  }
  tour3dUrl
  assetCount
}
fragment NearbySchools on BuildingExpress {
  __typename
  nearbySchools {
    __typename
    name
    district
    grades
    id
    idstr
    geoCenter {
      __typename
      latitude
      longitude
    }
  }
}
fragment PriceChangePercent on PriceChangeOfInterest {
  __typename
  pricePercentChange
}
fragment PropertyInfo on PropertyDetails {
  __typename
  address {
    __typename
    street
    houseNumber
    streetName
    city
    state
    zipCode
    unit
  }
  roomCount
  bedroomCount
  fullBathroomCount
  halfBathroomCount
  livingAreaSize
  amenities {
    __typename
    list
    doormanTypes
    parkingTypes
    sharedOutdoorSpaceTypes
    storageSpaceTypes
  }
  features {
    __typename
    list
    fireplaceTypes
    privateOutdoorSpaceTypes
    views
  }
}
fragment RelloInfo on RelloExpress {
  __typename
  rentalId
  ctaEnabled
  link
}
fragment RentalPropertyHistory on RentalListingChangesOfInterest {
  __typename
  listingId
  sourceGroupLabel
  photos {
    __typename
    key
  }
  offMarketAt
  rentalEventsOfInterest {
    __typename
    date
    price
    ...PriceChangePercent
    ... on RentalStatusChangeOfInterest {
      status
    }
  }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_declare_their_operations() {
        assert!(SEARCH_RENTALS
            .source()
            .contains("query SearchRentalsFederated($input: SearchRentalsInput!)"));
        assert!(RENTAL_LISTING_DETAILS
            .source()
            .contains("query RentalListingDetailsFederated($listingID: ID!)"));
    }

    #[test]
    fn search_selects_every_edge_variant() {
        for variant in ["OrganicRentalEdge", "FeaturedRentalEdge", "SponsoredRentalEdge"] {
            assert!(SEARCH_RENTALS_QUERY.contains(&format!("... on {variant}")), "{variant}");
        }
    }

    #[test]
    fn every_used_fragment_is_defined() {
        for query in [SEARCH_RENTALS_QUERY, RENTAL_LISTING_DETAILS_QUERY] {
            for spread in query.split("...").skip(1) {
                let name = spread.split_whitespace().next().unwrap();
                if name == "on" {
                    continue;
                }
                assert!(query.contains(&format!("fragment {name} on")), "{name}");
            }
        }
    }
}
