use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

use super::error::RideError;

/// A point on the map in signed decimal degrees.
///
/// Equality is exact numeric equality on both fields, no tolerance. The
/// polyline merge relies on this to recognise a segment that starts on the
/// previous segment's endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Eq for Coordinate {}

impl Hash for Coordinate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(degree_bits(self.latitude));
        state.write_u64(degree_bits(self.longitude));
    }
}

// Raw IEEE bits, with -0.0 folded into 0.0 so equal values hash alike.
fn degree_bits(degrees: f64) -> u64 {
    if degrees == 0.0 {
        0f64.to_bits()
    } else {
        degrees.to_bits()
    }
}

/// A named stop on the generated route. The id is assigned when the route
/// is decoded; it is never read from the wire.
#[derive(Debug, Clone, Serialize)]
pub struct Waypoint {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Waypoint {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// The model-authored plan: ordered waypoints plus the reported total
/// distance in miles. First and last waypoint are the start/finish by
/// convention; the distance is never recomputed locally.
#[derive(Debug, Clone, Serialize)]
pub struct Route {
    pub waypoints: Vec<Waypoint>,
    pub distance: f64,
}

// --- Wire format of the content field of the chat answer ---

#[derive(Deserialize)]
struct RouteWire {
    waypoints: Vec<WaypointWire>,
    distance: f64,
}

#[derive(Deserialize)]
struct WaypointWire {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl From<WaypointWire> for Waypoint {
    fn from(wire: WaypointWire) -> Self {
        Waypoint {
            id: Uuid::new_v4(),
            name: wire.name,
            latitude: wire.latitude,
            longitude: wire.longitude,
        }
    }
}

/// Decodes the JSON the model embedded in its answer into a [`Route`].
///
/// Whole-or-nothing: a payload with a missing or mistyped field fails the
/// entire decode instead of producing a partial route.
pub fn parse_route(content: &str) -> Result<Route, RideError> {
    let wire: RouteWire = serde_json::from_str(content).map_err(RideError::DecodeFailure)?;
    Ok(Route {
        waypoints: wire.waypoints.into_iter().map(Waypoint::from).collect(),
        distance: wire.distance,
    })
}
