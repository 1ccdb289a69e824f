//! Log-panel filtering and alarm-badge helpers.

use std::collections::HashMap;

use crate::fixtures::{Alarm, LogEntry, LogSeverity};

/// Severity selector of the log panel.  `All` disables severity filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SeverityFilter {
    #[default]
    All,
    Only(LogSeverity),
}

impl SeverityFilter {
    /// The buttons in panel order.
    pub fn options() -> Vec<SeverityFilter> {
        std::iter::once(SeverityFilter::All)
            .chain(LogSeverity::ALL.into_iter().map(SeverityFilter::Only))
            .collect()
    }

    pub fn label(self) -> &'static str {
        match self {
            SeverityFilter::All => "All",
            SeverityFilter::Only(s) => s.label(),
        }
    }

    pub fn matches(self, severity: LogSeverity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(s) => s == severity,
        }
    }
}

/// Entries matching `filter` whose message, camera or location contains
/// `search` (case-insensitive).  An empty search matches everything.
pub fn filter_logs<'a>(logs: &'a [LogEntry], filter: SeverityFilter, search: &str) -> Vec<&'a LogEntry> {
    let needle = search.to_lowercase();
    logs.iter()
        .filter(|log| filter.matches(log.severity))
        .filter(|log| {
            log.message.to_lowercase().contains(&needle)
                || log.camera.to_lowercase().contains(&needle)
                || log.location.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Count per severity over all entries (zero counts included).
pub fn severity_counts(logs: &[LogEntry]) -> HashMap<LogSeverity, usize> {
    let mut counts: HashMap<LogSeverity, usize> =
        LogSeverity::ALL.into_iter().map(|s| (s, 0)).collect();
    for log in logs {
        *counts.entry(log.severity).or_default() += 1;
    }
    counts
}

pub fn unresolved_count(alarms: &[Alarm]) -> usize {
    alarms.iter().filter(|a| !a.resolved).count()
}

/// Text of the alarm badge, `None` when nothing is unresolved.
pub fn badge_text(unresolved: usize) -> Option<String> {
    match unresolved {
        0 => None,
        n if n > 9 => Some("9+".into()),
        n => Some(n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{alarms, logs};

    fn ids(entries: &[&LogEntry]) -> Vec<u32> {
        entries.iter().map(|l| l.id).collect()
    }

    #[test]
    fn test_filter_all_with_empty_search() {
        let all = logs();
        assert_eq!(filter_logs(&all, SeverityFilter::All, "").len(), all.len());
    }

    #[test]
    fn test_filter_by_severity() {
        let all = logs();
        let info = filter_logs(&all, SeverityFilter::Only(LogSeverity::Info), "");
        assert_eq!(ids(&info), vec![2, 5]);
        let errors = filter_logs(&all, SeverityFilter::Only(LogSeverity::Error), "");
        assert_eq!(ids(&errors), vec![4]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_fields() {
        let all = logs();
        // location
        assert_eq!(ids(&filter_logs(&all, SeverityFilter::All, "barn a")), vec![1, 5]);
        // camera
        assert_eq!(ids(&filter_logs(&all, SeverityFilter::All, "CAMERA 2")), vec![4]);
        // message
        assert_eq!(ids(&filter_logs(&all, SeverityFilter::All, "normally")), vec![2]);
    }

    #[test]
    fn test_search_and_filter_combine() {
        let all = logs();
        let hits = filter_logs(&all, SeverityFilter::Only(LogSeverity::Warning), "barn a");
        assert_eq!(ids(&hits), vec![1]);
        assert!(filter_logs(&all, SeverityFilter::Only(LogSeverity::Success), "barn a").is_empty());
    }

    #[test]
    fn test_severity_counts() {
        let counts = severity_counts(&logs());
        assert_eq!(counts[&LogSeverity::Error], 1);
        assert_eq!(counts[&LogSeverity::Warning], 1);
        assert_eq!(counts[&LogSeverity::Success], 1);
        assert_eq!(counts[&LogSeverity::Info], 2);
        assert_eq!(severity_counts(&[])[&LogSeverity::Info], 0);
    }

    #[test]
    fn test_filter_options_order() {
        let labels: Vec<_> = SeverityFilter::options().into_iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["All", "Error", "Warning", "Success", "Info"]);
    }

    #[test]
    fn test_alarm_badge() {
        assert_eq!(unresolved_count(&alarms()), 2);
        assert_eq!(badge_text(0), None);
        assert_eq!(badge_text(2).as_deref(), Some("2"));
        assert_eq!(badge_text(9).as_deref(), Some("9"));
        assert_eq!(badge_text(10).as_deref(), Some("9+"));
    }
}
