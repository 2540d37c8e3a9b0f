use airide_rust::sdk::config::RideConfig;
use airide_rust::sdk::routing::{
    nearby_interests, ChatClient, Coordinate, Interest, InterestCategory, OrsProvider, Route,
    RoutePlanner,
};
use airide_rust::sdk::util::log::init_logging;
use airide_rust::sdk::util::rate_limit::{chat_limiter, directions_limiter};
use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use std::{fs::File, io::Write};

/// Plan a scenic motorbike round trip with an AI route planner
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Starting latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Starting longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// Also look up restaurants around the planned route
    #[arg(long)]
    restaurants: bool,

    /// Maximum number of points of interest to report
    #[arg(long, default_value_t = 5)]
    max_interests: usize,

    /// Output file for the planned ride
    #[arg(long, default_value = "planned_ride.json")]
    output: String,
}

#[derive(Serialize)]
struct RideReport {
    route: Route,
    path: Vec<Coordinate>,
    restaurants: Vec<Interest>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let start = Coordinate::new(cli.lat, cli.lon);
    log::info!(
        "Planning a scenic ride from ({}, {})",
        start.latitude,
        start.longitude
    );

    let config = RideConfig::from_env()?;
    let chat = ChatClient::new(&config, chat_limiter());
    let ors = OrsProvider::with_base_url(
        config.ors_api_key.clone(),
        directions_limiter(),
        config.ors_base_url.clone(),
    );

    let planner = RoutePlanner::new(&chat, &ors);
    let ride = planner.plan(start).await?;

    let restaurants = if cli.restaurants {
        let waypoint_coords: Vec<Coordinate> = ride
            .route
            .waypoints
            .iter()
            .map(|w| w.coordinate())
            .collect();
        nearby_interests(
            &ors,
            &waypoint_coords,
            InterestCategory::Restaurant,
            Some(cli.max_interests),
        )
        .await
    } else {
        Vec::new()
    };
    if !restaurants.is_empty() {
        log::info!("Found {} restaurants around the route", restaurants.len());
    }

    let report = RideReport {
        route: ride.route,
        path: ride.path,
        restaurants,
    };
    let json_output = serde_json::to_string_pretty(&report)?;
    let mut file = File::create(&cli.output)?;
    file.write_all(json_output.as_bytes())?;
    log::info!("✅ Planned ride written to {}", cli.output);

    Ok(())
}
