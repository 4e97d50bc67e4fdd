use std::{net::SocketAddr, time::Duration};

use clap::Parser;
use drivetime_directions::google_directions_api::GOOGLE_DIRECTIONS_API_URL;
use drivetime_kitchens::kitchen_client::KITCHENS_API_URL;
use jiff::SpanRelativeTo;

/// Drive time to the closest kitchen
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    /// Key clients must send in the Access-Key header
    #[arg(long, env = "CT_API_ACCESS_KEY", hide_env_values = true)]
    pub access_key: String,

    /// Key of the Google Directions API
    #[arg(long, env = "CT_GMAPS_API_KEY", hide_env_values = true)]
    pub directions_api_key: String,

    #[arg(long, env = "CT_DIRECTIONS_API_URL", default_value = GOOGLE_DIRECTIONS_API_URL)]
    pub directions_api_url: String,

    #[arg(long, env = "CT_KITCHENS_API_URL", default_value = KITCHENS_API_URL)]
    pub kitchens_api_url: String,

    #[arg(long, env = "CT_BIND_ADDRESS", default_value = "0.0.0.0:8090")]
    pub bind_address: SocketAddr,

    /// Timeout of every outbound request (e.g., "10s", "PT1M", "30")
    #[arg(long, env = "CT_REQUEST_TIMEOUT", default_value = "10s", value_parser = parse_duration)]
    pub request_timeout: Duration,

    #[arg(short, long)]
    pub debug: bool,
}

pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let duration = if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        duration
    } else if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        duration
    } else if let Ok(seconds) = input.parse::<i64>() {
        jiff::SignedDuration::from_secs(seconds)
    } else {
        return Err(String::from("Invalid duration"));
    };

    Duration::try_from(duration).map_err(|_| String::from("Duration must not be negative"))
}
