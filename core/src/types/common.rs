use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    #[serde(rename = "__typename", default)]
    pub typename: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Media asset reference. `key` is the image key on the StreetEasy CDN.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    #[serde(rename = "__typename", default)]
    pub typename: Option<String>,
    #[serde(default)]
    pub key: Option<String>,
}
