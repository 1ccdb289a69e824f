//! Configuration parsing – reads a `KEY=VALUE` file (`farm.conf`).
//!
//! Only the dashboard server reads it; the browser build never does.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::analysis::DEFAULT_DELAY_MS;
use crate::fixtures::WeatherLocation;

/// Stream shown for every online camera.
pub const DEFAULT_SAMPLE_VIDEO_URL: &str =
    "https://sample-videos.com/zip/10/mp4/SampleVideo_1280x720_1mb.mp4";

/// Dashboard server configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // ── analysis simulation ──────────────────────────────────────────
    pub analysis_delay_ms: u64,

    // ── video ────────────────────────────────────────────────────────
    pub sample_video_url: String,

    // ── weather (mock) location ──────────────────────────────────────
    pub location_name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_map(&HashMap::new())
    }
}

impl Config {
    /// Default config path.
    pub fn default_path() -> &'static str {
        "/etc/smartfarm/farm.conf"
    }

    pub fn analysis_delay(&self) -> Duration {
        Duration::from_millis(self.analysis_delay_ms)
    }

    pub fn weather_location(&self) -> WeatherLocation {
        WeatherLocation {
            name: self.location_name.clone(),
            country: self.country.clone(),
            lat: self.latitude,
            lon: self.longitude,
        }
    }

    fn from_map(map: &HashMap<String, String>) -> Self {
        let get = |key: &str| -> Option<String> { map.get(key).cloned().filter(|s| !s.is_empty()) };
        let get_f64 = |key: &str, default: f64| -> f64 {
            get(key).and_then(|v| v.parse().ok()).unwrap_or(default)
        };

        Config {
            analysis_delay_ms: get("ANALYSIS_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DELAY_MS),
            sample_video_url: get("SAMPLE_VIDEO_URL")
                .unwrap_or_else(|| DEFAULT_SAMPLE_VIDEO_URL.into()),
            location_name: get("LOCATION_NAME").unwrap_or_else(|| "Sydney".into()),
            country: get("COUNTRY").unwrap_or_else(|| "AU".into()),
            latitude: get_f64("LATITUDE", -33.8688),
            longitude: get_f64("LONGITUDE", 151.2093),
        }
    }
}

/// Parse a `KEY=VALUE` configuration file.
///
/// Lines starting with `#` are comments.  Values may be optionally
/// double-quoted.  Unknown keys are silently ignored.
pub fn load(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read config: {}", path.display()))?;

    let config = Config::from_map(&parse_conf(&text));
    info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Like [`load`], but a missing file yields the defaults.
pub fn load_or_default(path: &Path) -> Result<Config> {
    if !path.exists() {
        warn!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }
    load(path)
}

/// Parse `KEY=VALUE` lines into a map, stripping optional double-quotes.
fn parse_conf(text: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, val)) = line.split_once('=') {
            let key = key.trim();
            let val = val.trim().trim_matches('"');
            map.insert(key.to_string(), val.to_string());
        }
    }
    map
}

// ─── tests ───────────────────────────────────────────────────────────────
