use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::sdk::util::rate_limit::Limiter;

use super::error::{OrsErrorPayload, ProviderError};
use super::route::Coordinate;
use super::search::{Interest, InterestCategory, Region};
use super::service::{DirectionsProvider, InterestSearch};

const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

/// OpenRouteService client: driving directions and points-of-interest.
pub struct OrsProvider {
    client: Client,
    api_key: String,
    base_url: String,
    limiter: Limiter,
}

impl OrsProvider {
    pub fn new(api_key: String, limiter: Limiter) -> Self {
        Self::with_base_url(api_key, limiter, DEFAULT_BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, limiter: Limiter, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(15))
                .build()
                .unwrap(),
            api_key,
            base_url,
            limiter,
        }
    }

    fn error_from(status: reqwest::StatusCode, text: String) -> ProviderError {
        // Try to parse the structured error first
        if let Ok(payload) = serde_json::from_str::<OrsErrorPayload>(&text) {
            ProviderError::Api {
                code: payload.error.code,
                message: payload.error.message,
            }
        } else {
            log::error!(
                "API returned non-success status: {}. Unparseable Body: {}",
                status,
                text
            );
            ProviderError::RawApi(text)
        }
    }
}

#[async_trait]
impl DirectionsProvider for OrsProvider {
    async fn drive_geometry(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Vec<Coordinate>, ProviderError> {
        self.limiter.until_ready().await;
        log::debug!("[PROVIDER] Directions {:?} -> {:?}", start, end);

        let url = format!("{}/v2/directions/driving-car/geojson", self.base_url);
        // ORS expects [lon, lat] pairs; no alternate routes are requested.
        let body = json!({
            "coordinates": [
                [start.longitude, start.latitude],
                [end.longitude, end.latitude]
            ]
        });

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Self::error_from(status, text));
        }

        let directions: DirectionsResponse = serde_json::from_str(&text).map_err(|e| {
            log::error!(
                "Failed to parse DirectionsResponse. URL: {}\nError: {}. Body: {}",
                url,
                e,
                text
            );
            e
        })?;

        let feature = directions
            .features
            .into_iter()
            .next()
            .ok_or(ProviderError::NoRoute)?;

        Ok(feature
            .geometry
            .coordinates
            .into_iter()
            .map(|pair| Coordinate::new(pair[1], pair[0]))
            .collect())
    }
}

#[async_trait]
impl InterestSearch for OrsProvider {
    async fn interests_in(
        &self,
        region: &Region,
        category: InterestCategory,
        limit: Option<usize>,
    ) -> Result<Vec<Interest>, ProviderError> {
        self.limiter.until_ready().await;
        let (sw, ne) = region.bounds();
        log::debug!(
            "[PROVIDER] POI search for {:?} in bbox {:?} -> {:?}",
            category,
            sw,
            ne
        );

        let url = format!("{}/pois", self.base_url);
        let mut body = json!({
            "request": "pois",
            "geometry": {
                "bbox": [
                    [sw.longitude, sw.latitude],
                    [ne.longitude, ne.latitude]
                ]
            },
            "filters": { "category_ids": [category.category_id()] }
        });
        if let Some(limit) = limit {
            body["limit"] = json!(limit);
        }

        let response = self
            .client
            .post(&url)
            .header("Authorization", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Self::error_from(status, text));
        }

        let pois: PoiResponse = serde_json::from_str(&text).map_err(|e| {
            log::error!(
                "Failed to parse PoiResponse. URL: {}\nError: {}. Body: {}",
                url,
                e,
                text
            );
            e
        })?;

        let mut interests: Vec<Interest> = pois
            .features
            .into_iter()
            .filter_map(|feature| {
                let name = feature.properties.osm_tags.and_then(|tags| tags.name)?;
                let [lon, lat] = feature.geometry.coordinates;
                Some(Interest {
                    name,
                    coordinate: Coordinate::new(lat, lon),
                })
            })
            .collect();
        if let Some(limit) = limit {
            interests.truncate(limit);
        }
        Ok(interests)
    }
}

// --- Data structures for parsing ORS responses ---

#[derive(Deserialize)]
struct DirectionsResponse {
    features: Vec<RouteFeature>,
}
#[derive(Deserialize)]
struct RouteFeature {
    geometry: LineGeometry,
}
#[derive(Deserialize)]
struct LineGeometry {
    coordinates: Vec<[f64; 2]>,
}

#[derive(Deserialize)]
struct PoiResponse {
    features: Vec<PoiFeature>,
}
#[derive(Deserialize)]
struct PoiFeature {
    geometry: PointGeometry,
    properties: PoiProperties,
}
#[derive(Deserialize)]
struct PointGeometry {
    coordinates: [f64; 2],
}
#[derive(Deserialize)]
struct PoiProperties {
    #[serde(default)]
    osm_tags: Option<OsmTags>,
}
#[derive(Deserialize)]
struct OsmTags {
    #[serde(default)]
    name: Option<String>,
}
