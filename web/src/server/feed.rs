//! Server-side view of the mock data: fixtures enriched with configuration.

use chrono::Utc;

use farm_common::config::Config;
use farm_common::fixtures::{self, Camera, WeatherReport};

/// All cameras; online ones stream the configured sample video.
pub fn cameras(config: &Config) -> Vec<Camera> {
    fixtures::cameras()
        .into_iter()
        .map(|mut cam| {
            if cam.is_online() {
                cam.stream_url = Some(config.sample_video_url.clone());
            }
            cam
        })
        .collect()
}

/// The mock weather report for the configured location.  No weather service
/// is ever contacted.
pub fn weather(config: &Config) -> WeatherReport {
    fixtures::mock_weather(config.weather_location(), Utc::now().to_rfc3339())
}
