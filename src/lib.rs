pub mod sdk;

pub use sdk::advisor::{stock_recommendations, AnswerOption, InvestmentQuestion};
pub use sdk::config::RideConfig;
pub use sdk::routing::ai::ChatClient;
pub use sdk::routing::planner::{PlannedRide, RoutePlanner};
pub use sdk::routing::provider::OrsProvider;
pub use sdk::routing::route::{parse_route, Coordinate, Route, Waypoint};
pub use sdk::routing::search::{nearby_interests, Interest, InterestCategory};
