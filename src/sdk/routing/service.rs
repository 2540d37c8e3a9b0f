use async_trait::async_trait;

use super::error::{ProviderError, RideError};
use super::route::Coordinate;
use super::search::{Interest, InterestCategory, Region};

/// Source of the model-authored route text.
#[async_trait]
pub trait RouteSource: Send + Sync {
    /// Requests a scenic round trip from the given start and returns the raw
    /// content text embedded in the model's answer, still unparsed.
    async fn scenic_route_text(&self, start: Coordinate) -> Result<String, RideError>;
}

/// Driving directions between two points.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    /// Returns the geometry of the chosen driving route, start to end.
    async fn drive_geometry(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<Vec<Coordinate>, ProviderError>;
}

/// Points-of-interest lookup within a region.
#[async_trait]
pub trait InterestSearch: Send + Sync {
    async fn interests_in(
        &self,
        region: &Region,
        category: InterestCategory,
        limit: Option<usize>,
    ) -> Result<Vec<Interest>, ProviderError>;
}
