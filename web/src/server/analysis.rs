//! Timed analysis simulation run by the `AnalyzeVideo` server function.

use std::time::Duration;

use chrono::Utc;
use tracing::info;

use farm_common::analysis::{mock_report, AnalysisReport, VideoUpload};

/// Wait `delay`, then return the fixed report for `upload`.
///
/// Not cancellable: a client that navigates away simply never reads the result.
pub async fn simulate(upload: VideoUpload, delay: Duration) -> AnalysisReport {
    info!(
        "Analysing {} ({}), ready in {} ms",
        upload.file_name,
        upload.content_type,
        delay.as_millis()
    );
    tokio::time::sleep(delay).await;
    let report = mock_report(&upload, Utc::now());
    info!(
        "Analysis of {} finished: {} detections",
        report.file_name,
        report.detections.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use farm_common::analysis::accept_upload;

    #[tokio::test(start_paused = true)]
    async fn test_simulate_waits_for_delay() {
        let upload = accept_upload("barn.mp4", "video/mp4").unwrap();
        let start = tokio::time::Instant::now();

        let report = simulate(upload, Duration::from_millis(3000)).await;

        assert!(start.elapsed() >= Duration::from_millis(3000));
        assert_eq!(report.file_name, "barn.mp4");
        assert_eq!(report.detections.len(), 3);
    }

    #[tokio::test]
    async fn test_simulate_zero_delay() {
        let upload = accept_upload("quick.webm", "video/webm").unwrap();
        let report = simulate(upload, Duration::ZERO).await;
        assert_eq!(report.summary.total_animals, 3);
    }
}
