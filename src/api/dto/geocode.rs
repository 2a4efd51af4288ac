//! DTOs for the geocoding endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{GeocodeResult, ResultSource};

/// Query string of `GET /geocode`.
#[derive(Debug, Default, Validate)]
pub struct GeocodeQuery {
    /// Free-text address, at most 512 characters. Blank or missing values
    /// are rejected by the handler.
    #[validate(length(max = 512, message = "Address is too long"))]
    pub address: Option<String>,
}

impl GeocodeQuery {
    /// Extracts `address` from a raw query string. The first occurrence wins;
    /// other parameters are ignored.
    pub fn from_query_string(query: Option<&str>) -> Self {
        let address = query.and_then(|query| {
            url::form_urlencoded::parse(query.as_bytes())
                .find(|(key, _)| key == "address")
                .map(|(_, value)| value.into_owned())
        });

        Self { address }
    }
}

/// Successful geocoding response.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct GeocodeResponse {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub source: String,
}

impl From<GeocodeResult> for GeocodeResponse {
    fn from(result: GeocodeResult) -> Self {
        Self {
            address: result.address,
            latitude: result.latitude,
            longitude: result.longitude,
            source: result.source.as_str().to_string(),
        }
    }
}

impl GeocodeResponse {
    pub fn is_cached(&self) -> bool {
        self.source == ResultSource::Cache.as_str()
    }
}
