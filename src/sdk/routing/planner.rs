use serde::Serialize;

use super::error::RideError;
use super::fanout::segment_geometries;
use super::polyline::merge_segments;
use super::route::{parse_route, Coordinate, Route};
use super::service::{DirectionsProvider, RouteSource};

/// A fully planned ride: the drivable path plus the model's plan it was
/// stitched from.
#[derive(Debug, Clone, Serialize)]
pub struct PlannedRide {
    pub path: Vec<Coordinate>,
    pub route: Route,
}

/// Composes the pipeline: model route, per-segment directions, merged
/// polyline. This is the only type external callers need to touch.
pub struct RoutePlanner<'a> {
    source: &'a dyn RouteSource,
    directions: &'a dyn DirectionsProvider,
}

impl<'a> RoutePlanner<'a> {
    pub fn new(source: &'a dyn RouteSource, directions: &'a dyn DirectionsProvider) -> Self {
        Self { source, directions }
    }

    /// Plans a scenic round trip from the starting coordinate.
    ///
    /// Failing to obtain or decode the route aborts the whole call; a failed
    /// directions segment only leaves a gap in the returned path, so the
    /// path is best-effort while the route itself is authoritative.
    pub async fn plan(&self, start: Coordinate) -> Result<PlannedRide, RideError> {
        let content = self.source.scenic_route_text(start).await?;
        let route = parse_route(&content)?;
        log::info!(
            "Model proposed {} waypoints over {} miles",
            route.waypoints.len(),
            route.distance
        );

        let coords: Vec<Coordinate> = route.waypoints.iter().map(|w| w.coordinate()).collect();
        let segments = segment_geometries(self.directions, &coords).await;
        let path = merge_segments(&segments);
        log::info!(
            "Stitched {} of {} segments into {} path points",
            segments.iter().filter(|s| s.is_some()).count(),
            segments.len(),
            path.len()
        );

        Ok(PlannedRide { path, route })
    }
}
