//! Area codes and amenity tags accepted by the search filters.

use serde::{Deserialize, Serialize};

/// Numeric StreetEasy area identifier. Regions and boroughs have named
/// constants; neighborhood codes can be built with `AreaCode(n)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AreaCode(pub u32);

impl AreaCode {
    pub const ALL_NYC_AND_NJ: AreaCode = AreaCode(1);

    pub const MANHATTAN: AreaCode = AreaCode(100);
    pub const BRONX: AreaCode = AreaCode(200);
    pub const BROOKLYN: AreaCode = AreaCode(300);
    pub const QUEENS: AreaCode = AreaCode(400);
    pub const STATEN_ISLAND: AreaCode = AreaCode(500);

    pub fn code(self) -> u32 {
        self.0
    }
}

/// Amenity tag used both in filters and in `matchedAmenities`/`missingAmenities`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Amenity {
    // Unit
    WasherDryer,
    Dishwasher,
    PrivateOutdoorSpace,
    CentralAc,
    Furnished,
    Fireplace,
    Loft,

    // Views
    CityView,
    GardenView,
    ParkView,
    SkylineView,
    WaterView,

    // Building
    Doorman,
    Laundry,
    Elevator,
    Gym,
    Parking,
    SharedOutdoorSpace,
    Pool,
    PiedATerreAllowed,
    ChildrensPlayroom,
    SmokeFree,
    StorageSpace,
    GuarantorsAccepted,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn area_codes() {
        assert_eq!(AreaCode::ALL_NYC_AND_NJ.code(), 1);
        assert_eq!(AreaCode::MANHATTAN.code(), 100);
        assert_eq!(AreaCode::BRONX.code(), 200);
        assert_eq!(AreaCode::BROOKLYN.code(), 300);
        assert_eq!(AreaCode::QUEENS.code(), 400);
        assert_eq!(AreaCode::STATEN_ISLAND.code(), 500);
    }

    #[test]
    fn area_codes_serialize_as_numbers() {
        let areas = vec![AreaCode::MANHATTAN, AreaCode(115)];
        assert_eq!(serde_json::to_value(&areas).unwrap(), json!([100, 115]));
    }

    #[test]
    fn amenities_serialize_as_upstream_names() {
        let cases = [
            (Amenity::WasherDryer, "WASHER_DRYER"),
            (Amenity::CentralAc, "CENTRAL_AC"),
            (Amenity::SkylineView, "SKYLINE_VIEW"),
            (Amenity::PiedATerreAllowed, "PIED_A_TERRE_ALLOWED"),
            (Amenity::ChildrensPlayroom, "CHILDRENS_PLAYROOM"),
            (Amenity::GuarantorsAccepted, "GUARANTORS_ACCEPTED"),
        ];
        for (amenity, name) in cases {
            assert_eq!(serde_json::to_value(amenity).unwrap(), json!(name));
            let back: Amenity = serde_json::from_value(json!(name)).unwrap();
            assert_eq!(back, amenity);
        }
    }
}
