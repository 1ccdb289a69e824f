//! Static mock data shown by the dashboard: cameras, logs, alarms, system
//! status and weather.  Everything here is read-only.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format of every fixture timestamp.
pub const TIMESTAMP_FMT: &str = "%Y-%m-%d %H:%M:%S";

// ─── Cameras ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    Online,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub id: u32,
    pub name: String,
    pub status: CameraStatus,
    pub location: String,
    pub last_update: String,
    pub resolution: String,
    pub fps: u32,
    pub recording: bool,
    /// Filled in by the server for online cameras.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_url: Option<String>,
}

impl Camera {
    pub fn is_online(&self) -> bool {
        self.status == CameraStatus::Online
    }
}

fn camera(
    id: u32,
    status: CameraStatus,
    location: &str,
    last_update: &str,
    resolution: &str,
    fps: u32,
    recording: bool,
) -> Camera {
    Camera {
        id,
        name: format!("Camera {id}"),
        status,
        location: location.into(),
        last_update: last_update.into(),
        resolution: resolution.into(),
        fps,
        recording,
        stream_url: None,
    }
}

pub fn cameras() -> Vec<Camera> {
    use CameraStatus::*;
    vec![
        camera(1, Online, "Barn A", "2024-01-15 14:30:25", "1080p", 30, true),
        camera(2, Online, "Barn B", "2024-01-15 14:29:45", "1080p", 30, true),
        camera(3, Online, "Barn C", "2024-01-15 14:30:10", "720p", 25, true),
        camera(4, Offline, "External Surveillance", "2024-01-15 13:45:20", "1080p", 30, false),
    ]
}

pub fn online_count(cameras: &[Camera]) -> usize {
    cameras.iter().filter(|c| c.is_online()).count()
}

// ─── Logs ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    Detection,
    System,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogSeverity {
    Error,
    Warning,
    Success,
    Info,
}

impl LogSeverity {
    pub const ALL: [LogSeverity; 4] = [
        LogSeverity::Error,
        LogSeverity::Warning,
        LogSeverity::Success,
        LogSeverity::Info,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Error => "Error",
            LogSeverity::Warning => "Warning",
            LogSeverity::Success => "Success",
            LogSeverity::Info => "Info",
        }
    }

    /// CSS modifier used by the log panel.
    pub fn css(self) -> &'static str {
        match self {
            LogSeverity::Error => "error",
            LogSeverity::Warning => "warning",
            LogSeverity::Success => "success",
            LogSeverity::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u32,
    pub timestamp: String,
    pub kind: LogKind,
    pub message: String,
    pub severity: LogSeverity,
    pub camera: String,
    pub location: String,
}

pub fn logs() -> Vec<LogEntry> {
    use LogKind::*;
    use LogSeverity::*;
    let entry = |id, timestamp: &str, kind, message: &str, severity, camera: &str, location: &str| {
        LogEntry {
            id,
            timestamp: timestamp.into(),
            kind,
            message: message.into(),
            severity,
            camera: camera.into(),
            location: location.into(),
        }
    };
    vec![
        entry(
            1,
            "2024-01-15 14:30:25",
            Detection,
            "Animal behavior anomaly detected: Camera 1 shows unusual movement patterns",
            Warning,
            "Camera 1",
            "Barn A",
        ),
        entry(2, "2024-01-15 14:28:10", System, "System operating normally", Info, "All", "All Areas"),
        entry(
            3,
            "2024-01-15 14:25:45",
            Detection,
            "AI analysis complete: Normal activity confirmed on Camera 3",
            Success,
            "Camera 3",
            "Barn C",
        ),
        entry(
            4,
            "2024-01-15 14:22:30",
            Alert,
            "Temperature sensor warning: Temperature rising in Barn B",
            Error,
            "Camera 2",
            "Barn B",
        ),
        entry(
            5,
            "2024-01-15 14:20:15",
            Detection,
            "Animal count verified: 15 animals confirmed on Camera 1",
            Info,
            "Camera 1",
            "Barn A",
        ),
    ]
}

// ─── Alarms ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlarmSeverity {
    High,
    Medium,
    Low,
}

impl AlarmSeverity {
    pub fn label(self) -> &'static str {
        match self {
            AlarmSeverity::High => "High",
            AlarmSeverity::Medium => "Medium",
            AlarmSeverity::Low => "Low",
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            AlarmSeverity::High => "high",
            AlarmSeverity::Medium => "medium",
            AlarmSeverity::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alarm {
    pub id: u32,
    pub timestamp: String,
    pub kind: String,
    pub severity: AlarmSeverity,
    pub camera: String,
    pub location: String,
    pub resolved: bool,
}

pub fn alarms() -> Vec<Alarm> {
    let alarm = |id, timestamp: &str, kind: &str, severity, camera: &str, location: &str, resolved| Alarm {
        id,
        timestamp: timestamp.into(),
        kind: kind.into(),
        severity,
        camera: camera.into(),
        location: location.into(),
        resolved,
    };
    vec![
        alarm(1, "2024-01-15 14:30:25", "Animal Behavior Anomaly", AlarmSeverity::High, "Camera 1", "Barn A", false),
        alarm(2, "2024-01-15 14:22:30", "Temperature Warning", AlarmSeverity::Medium, "Camera 2", "Barn B", false),
        alarm(3, "2024-01-15 13:15:45", "Camera Offline", AlarmSeverity::Low, "Camera 4", "External Surveillance", true),
    ]
}

// ─── System status ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemStatus {
    pub total_cameras: u32,
    pub online_cameras: u32,
    pub offline_cameras: u32,
    pub total_storage: String,
    pub used_storage: String,
    pub cpu_usage: String,
    pub memory_usage: String,
    pub network_status: String,
    pub last_backup: String,
}

/// Camera counts are derived from [`cameras`]; the rest is fixed.
pub fn system_status() -> SystemStatus {
    let cams = cameras();
    let online = online_count(&cams) as u32;
    SystemStatus {
        total_cameras: cams.len() as u32,
        online_cameras: online,
        offline_cameras: cams.len() as u32 - online,
        total_storage: "2.5TB".into(),
        used_storage: "1.8TB".into(),
        cpu_usage: "45%".into(),
        memory_usage: "62%".into(),
        network_status: "stable".into(),
        last_backup: "2024-01-15 02:00:00".into(),
    }
}

// ─── Weather ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature: f64,
    pub humidity: u32,
    pub pressure: u32,
    pub description: String,
    pub icon: String,
    pub wind_speed: f64,
    pub rain: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherLocation {
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherAlert {
    pub kind: String,
    pub severity: AlarmSeverity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub current: CurrentWeather,
    pub location: WeatherLocation,
    pub alerts: Vec<WeatherAlert>,
    pub timestamp: String,
    pub is_mock: bool,
}

impl WeatherReport {
    /// Most alerts the dashboard card shows.
    pub const MAX_SHOWN_ALERTS: usize = 4;

    pub fn shown_alerts(&self) -> &[WeatherAlert] {
        let n = self.alerts.len().min(Self::MAX_SHOWN_ALERTS);
        &self.alerts[..n]
    }

    pub fn icon_url(&self) -> String {
        format!("https://openweathermap.org/img/wn/{}@2x.png", self.current.icon)
    }
}

/// Fixed clear-sky report for `location`, stamped with `timestamp`.
pub fn mock_weather(location: WeatherLocation, timestamp: String) -> WeatherReport {
    WeatherReport {
        current: CurrentWeather {
            temperature: 24.0,
            humidity: 62,
            pressure: 1014,
            description: "clear sky".into(),
            icon: "01d".into(),
            wind_speed: 3.6,
            rain: 0.0,
        },
        location,
        alerts: vec![WeatherAlert {
            kind: "cattle_heat_stress".into(),
            severity: AlarmSeverity::Low,
            message: "Warm conditions - Ensure shade and water are available".into(),
        }],
        timestamp,
        is_mock: true,
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Split a fixture timestamp into `(time, date)` display strings.
/// Unparseable input is returned unchanged as the time with an empty date.
pub fn split_timestamp(ts: &str) -> (String, String) {
    match NaiveDateTime::parse_from_str(ts, TIMESTAMP_FMT) {
        Ok(dt) => (
            dt.format("%H:%M:%S").to_string(),
            dt.format("%Y-%m-%d").to_string(),
        ),
        Err(_) => (ts.to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_fixture() {
        let cams = cameras();
        assert_eq!(cams.len(), 4);
        assert_eq!(online_count(&cams), 3);
        assert_eq!(cams[3].location, "External Surveillance");
        assert!(!cams[3].is_online());
        assert!(cams.iter().all(|c| c.stream_url.is_none()));
    }

    #[test]
    fn test_system_status_matches_cameras() {
        let status = system_status();
        assert_eq!(status.total_cameras, 4);
        assert_eq!(status.online_cameras, 3);
        assert_eq!(status.offline_cameras, 1);
    }

    #[test]
    fn test_fixture_timestamps_parse() {
        for ts in logs().iter().map(|l| &l.timestamp).chain(alarms().iter().map(|a| &a.timestamp)) {
            assert!(NaiveDateTime::parse_from_str(ts, TIMESTAMP_FMT).is_ok(), "{ts}");
        }
    }

    #[test]
    fn test_split_timestamp() {
        assert_eq!(
            split_timestamp("2024-01-15 14:30:25"),
            ("14:30:25".to_string(), "2024-01-15".to_string())
        );
        assert_eq!(split_timestamp("yesterday"), ("yesterday".to_string(), String::new()));
    }

    #[test]
    fn test_severity_wire_format() {
        let json = serde_json::to_string(&logs()[0]).unwrap();
        assert!(json.contains(r#""severity":"warning""#));
        assert!(json.contains(r#""kind":"detection""#));
    }

    #[test]
    fn test_weather_alert_cap() {
        let loc = WeatherLocation {
            name: "Sydney".into(),
            country: "AU".into(),
            lat: -33.8688,
            lon: 151.2093,
        };
        let mut report = mock_weather(loc, "now".into());
        assert!(report.is_mock);
        assert_eq!(report.shown_alerts().len(), 1);

        let extra = report.alerts[0].clone();
        report.alerts.extend(std::iter::repeat(extra).take(6));
        assert_eq!(report.shown_alerts().len(), WeatherReport::MAX_SHOWN_ALERTS);
        assert_eq!(report.icon_url(), "https://openweathermap.org/img/wn/01d@2x.png");
    }
}
