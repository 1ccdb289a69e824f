//! Simulated AI video analysis.
//!
//! No inference happens: an accepted upload yields a fixed report after a
//! configurable delay (the delay itself lives with the async caller).

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Delay before the mock result is returned.
pub const DEFAULT_DELAY_MS: u64 = 3000;

/// Progress lines shown while the simulation runs.
pub const PROGRESS_STEPS: [&str; 6] = [
    "Extracting video frames...",
    "Loading AI model...",
    "Analyzing animal detection...",
    "Analyzing behavior patterns...",
    "Evaluating health status...",
    "Generating results...",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Only video files can be uploaded.")]
    NotVideo { content_type: String },
}

/// A file the user selected for analysis.  Only its metadata is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoUpload {
    pub file_name: String,
    pub content_type: String,
}

/// Accept the file only if its MIME type is `video/*`.
pub fn accept_upload(file_name: &str, content_type: &str) -> Result<VideoUpload, AnalysisError> {
    if !content_type.trim().to_ascii_lowercase().starts_with("video/") {
        return Err(AnalysisError::NotVideo {
            content_type: content_type.to_string(),
        });
    }
    Ok(VideoUpload {
        file_name: file_name.to_string(),
        content_type: content_type.to_string(),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DetectionKind {
    Animal,
    Anomaly,
    #[serde(rename = "Health Status")]
    HealthStatus,
}

impl DetectionKind {
    pub fn label(self) -> &'static str {
        match self {
            DetectionKind::Animal => "Animal",
            DetectionKind::Anomaly => "Anomaly",
            DetectionKind::HealthStatus => "Health Status",
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            DetectionKind::Animal => "animal",
            DetectionKind::Anomaly => "anomaly",
            DetectionKind::HealthStatus => "health",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisDetection {
    pub id: u32,
    pub kind: DetectionKind,
    pub confidence: f64,
    /// Offset into the video, `HH:MM:SS`.
    pub timestamp: String,
    pub bounding_box: BoundingBox,
    pub description: String,
}

impl AnalysisDetection {
    pub fn confidence_pct(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_animals: u32,
    pub anomalies: u32,
    pub health_issues: u32,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// RFC 3339 time the analysis finished.
    pub timestamp: String,
    pub file_name: String,
    pub duration: String,
    pub detections: Vec<AnalysisDetection>,
    pub summary: AnalysisSummary,
}

/// The fixed result for `upload`, stamped with `now`.
pub fn mock_report(upload: &VideoUpload, now: DateTime<Utc>) -> AnalysisReport {
    let detection = |id: u32,
                     kind: DetectionKind,
                     confidence: f64,
                     timestamp: &str,
                     (x, y, width, height): (u32, u32, u32, u32),
                     description: &str| {
        AnalysisDetection {
            id,
            kind,
            confidence,
            timestamp: timestamp.into(),
            bounding_box: BoundingBox { x, y, width, height },
            description: description.into(),
        }
    };

    AnalysisReport {
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        file_name: upload.file_name.clone(),
        duration: "00:02:15".into(),
        detections: vec![
            detection(1, DetectionKind::Animal, 0.95, "00:00:45", (100, 150, 200, 300), "1 cow detected"),
            detection(
                2,
                DetectionKind::Anomaly,
                0.87,
                "00:01:20",
                (300, 200, 150, 250),
                "Unusual movement pattern detected",
            ),
            detection(
                3,
                DetectionKind::HealthStatus,
                0.92,
                "00:01:45",
                (200, 100, 180, 280),
                "Normal health status confirmed",
            ),
        ],
        summary: AnalysisSummary {
            total_animals: 3,
            anomalies: 1,
            health_issues: 0,
            recommendations: vec![
                "Monitor 1 cow in Barn A section".into(),
                "Check temperature sensors".into(),
                "Verify regular health check schedule".into(),
            ],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_accept_video_types() {
        let up = accept_upload("barn.mp4", "video/mp4").unwrap();
        assert_eq!(up.file_name, "barn.mp4");
        assert!(accept_upload("clip.mov", "Video/QuickTime").is_ok());
    }

    #[test]
    fn test_reject_non_video() {
        for ct in ["image/png", "application/octet-stream", "", "videos/mp4", "audio/video"] {
            let err = accept_upload("x", ct).unwrap_err();
            assert_eq!(err.to_string(), "Only video files can be uploaded.");
        }
    }

    #[test]
    fn test_mock_report_contents() {
        let up = accept_upload("cows.mp4", "video/mp4").unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 14, 30, 25).unwrap();
        let report = mock_report(&up, now);

        assert_eq!(report.timestamp, "2024-01-15T14:30:25.000Z");
        assert_eq!(report.file_name, "cows.mp4");
        assert_eq!(report.detections.len(), 3);
        assert_eq!(report.summary.total_animals, 3);
        assert_eq!(report.summary.anomalies, 1);
        assert_eq!(report.summary.health_issues, 0);
        assert_eq!(report.summary.recommendations.len(), 3);

        let pcts: Vec<_> = report.detections.iter().map(|d| d.confidence_pct()).collect();
        assert_eq!(pcts, vec![95, 87, 92]);
    }

    #[test]
    fn test_detection_kind_wire_name() {
        let json = serde_json::to_string(&DetectionKind::HealthStatus).unwrap();
        assert_eq!(json, r#""Health Status""#);
        assert_eq!(DetectionKind::HealthStatus.label(), "Health Status");
    }
}
