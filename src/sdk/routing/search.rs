use serde::Serialize;

use super::route::Coordinate;
use super::service::InterestSearch;

// Regions are padded so a route hugging one road still catches points just
// off it; degenerate point sets get a usable minimum area instead of zero.
const SPAN_PADDING: f64 = 1.5;
const MIN_SPAN_DEGREES: f64 = 0.01;

/// A centered search region with latitude/longitude spans in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub center: Coordinate,
    pub latitude_span: f64,
    pub longitude_span: f64,
}

impl Region {
    /// South-west and north-east corners of the region.
    pub fn bounds(&self) -> (Coordinate, Coordinate) {
        let half_lat = self.latitude_span / 2.0;
        let half_lon = self.longitude_span / 2.0;
        (
            Coordinate::new(
                self.center.latitude - half_lat,
                self.center.longitude - half_lon,
            ),
            Coordinate::new(
                self.center.latitude + half_lat,
                self.center.longitude + half_lon,
            ),
        )
    }
}

/// Categories understood by the points-of-interest provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterestCategory {
    Restaurant,
    FuelStation,
    Viewpoint,
}

impl InterestCategory {
    /// OpenRouteService POI category id.
    pub fn category_id(self) -> u32 {
        match self {
            InterestCategory::Restaurant => 570,
            InterestCategory::FuelStation => 596,
            InterestCategory::Viewpoint => 624,
        }
    }
}

/// A named point of interest.
#[derive(Debug, Clone, Serialize)]
pub struct Interest {
    pub name: String,
    pub coordinate: Coordinate,
}

/// Axis-aligned bounding region of the coordinates, centered on the box and
/// padded on both axes. Returns `None` for an empty set.
pub fn bounding_region(coords: &[Coordinate]) -> Option<Region> {
    if coords.is_empty() {
        return None;
    }

    let mut min_lat = f64::INFINITY;
    let mut max_lat = f64::NEG_INFINITY;
    let mut min_lon = f64::INFINITY;
    let mut max_lon = f64::NEG_INFINITY;
    for coord in coords {
        min_lat = min_lat.min(coord.latitude);
        max_lat = max_lat.max(coord.latitude);
        min_lon = min_lon.min(coord.longitude);
        max_lon = max_lon.max(coord.longitude);
    }

    Some(Region {
        center: Coordinate::new((min_lat + max_lat) / 2.0, (min_lon + max_lon) / 2.0),
        latitude_span: ((max_lat - min_lat) * SPAN_PADDING).max(MIN_SPAN_DEGREES),
        longitude_span: ((max_lon - min_lon) * SPAN_PADDING).max(MIN_SPAN_DEGREES),
    })
}

/// Finds points of interest of one category around the given coordinates.
///
/// A provider failure degrades to an empty list; planning a ride never fails
/// because a side lookup did.
pub async fn nearby_interests(
    search: &dyn InterestSearch,
    coords: &[Coordinate],
    category: InterestCategory,
    limit: Option<usize>,
) -> Vec<Interest> {
    let Some(region) = bounding_region(coords) else {
        return Vec::new();
    };

    match search.interests_in(&region, category, limit).await {
        Ok(interests) => interests,
        Err(e) => {
            log::warn!("[SEARCH] Interest lookup failed: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sdk::routing::error::ProviderError;
    use async_trait::async_trait;

    #[test]
    fn empty_set_has_no_region() {
        assert!(bounding_region(&[]).is_none());
    }

    #[test]
    fn degenerate_point_set_gets_the_floor_span() {
        let point = Coordinate::new(34.0, -118.0);
        let region = bounding_region(&[point, point]).unwrap();

        assert_eq!(region.center, point);
        assert_eq!(region.latitude_span, MIN_SPAN_DEGREES);
        assert_eq!(region.longitude_span, MIN_SPAN_DEGREES);
    }

    #[test]
    fn spans_are_padded_around_the_box_center() {
        let coords = [Coordinate::new(0.0, 10.0), Coordinate::new(2.0, 14.0)];
        let region = bounding_region(&coords).unwrap();

        assert_eq!(region.center, Coordinate::new(1.0, 12.0));
        assert_eq!(region.latitude_span, 2.0 * SPAN_PADDING);
        assert_eq!(region.longitude_span, 4.0 * SPAN_PADDING);
    }

    #[test]
    fn bounds_are_centered_corners() {
        let region = Region {
            center: Coordinate::new(1.0, 12.0),
            latitude_span: 3.0,
            longitude_span: 6.0,
        };
        let (sw, ne) = region.bounds();
        assert_eq!(sw, Coordinate::new(-0.5, 9.0));
        assert_eq!(ne, Coordinate::new(2.5, 15.0));
    }

    struct Unavailable;

    #[async_trait]
    impl InterestSearch for Unavailable {
        async fn interests_in(
            &self,
            _region: &Region,
            _category: InterestCategory,
            _limit: Option<usize>,
        ) -> Result<Vec<Interest>, ProviderError> {
            Err(ProviderError::RawApi("service down".to_string()))
        }
    }

    #[tokio::test]
    async fn provider_failure_degrades_to_empty() {
        let coords = [Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 1.0)];
        let found =
            nearby_interests(&Unavailable, &coords, InterestCategory::Restaurant, Some(5)).await;
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn no_coordinates_means_no_query() {
        let found = nearby_interests(&Unavailable, &[], InterestCategory::Restaurant, None).await;
        assert!(found.is_empty());
    }
}
