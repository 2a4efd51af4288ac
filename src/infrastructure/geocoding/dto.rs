//! Wire format of the Google Maps Geocoding API (the subset we read).

use serde::Deserialize;

use crate::domain::providers::{Candidate, ProviderResponse};

#[derive(Debug, Deserialize)]
pub struct GeocodeResponseDto {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<GeocodeResultDto>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodeResultDto {
    pub formatted_address: String,
    pub geometry: GeometryDto,
}

#[derive(Debug, Deserialize)]
pub struct GeometryDto {
    pub location: LocationDto,
}

#[derive(Debug, Deserialize)]
pub struct LocationDto {
    pub lat: f64,
    pub lng: f64,
}

impl From<GeocodeResponseDto> for ProviderResponse {
    fn from(dto: GeocodeResponseDto) -> Self {
        Self {
            status: dto.status,
            error_message: dto.error_message.filter(|message| !message.is_empty()),
            candidates: dto
                .results
                .into_iter()
                .map(|result| Candidate {
                    formatted_address: result.formatted_address,
                    latitude: result.geometry.location.lat,
                    longitude: result.geometry.location.lng,
                })
                .collect(),
        }
    }
}
