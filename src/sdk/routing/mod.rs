pub mod ai;
pub mod error;
pub mod fanout;
pub mod planner;
pub mod polyline;
pub mod provider;
pub mod route;
pub mod search;
pub mod service;

pub use ai::{extract_content, ChatClient};
pub use error::{ProviderError, RideError};
pub use fanout::{segment_geometries, Segment};
pub use planner::{PlannedRide, RoutePlanner};
pub use polyline::merge_segments;
pub use provider::OrsProvider;
pub use route::{parse_route, Coordinate, Route, Waypoint};
pub use search::{bounding_region, nearby_interests, Interest, InterestCategory, Region};
pub use service::{DirectionsProvider, InterestSearch, RouteSource};
