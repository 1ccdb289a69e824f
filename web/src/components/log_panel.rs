//! System log panel with severity filter, search box and per-severity totals.

use leptos::prelude::*;

use farm_common::fixtures::{split_timestamp, LogEntry, LogKind, LogSeverity};
use farm_common::logs::{filter_logs, severity_counts, SeverityFilter};

#[component]
pub fn LogPanel(logs: Vec<LogEntry>) -> impl IntoView {
    let (filter, set_filter) = signal(SeverityFilter::All);
    let (search, set_search) = signal(String::new());

    let counts = severity_counts(&logs);
    let logs = StoredValue::new(logs);

    let visible = move || {
        logs.with_value(|all| {
            filter_logs(all, filter.get(), &search.get())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let buttons = SeverityFilter::options()
        .into_iter()
        .map(|option| {
            let class = move || {
                if filter.get() == option {
                    "filter-btn active"
                } else {
                    "filter-btn"
                }
            };
            view! {
                <button class=class on:click=move |_| set_filter.set(option)>
                    {option.label()}
                </button>
            }
        })
        .collect_view();

    let totals = LogSeverity::ALL
        .into_iter()
        .map(|sev| {
            let n = counts.get(&sev).copied().unwrap_or(0);
            view! {
                <div class=format!("log-total sev-{}", sev.css())>
                    <div class="log-total-count">{n}</div>
                    <div class="log-total-label">{sev.label()}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section class="card log-panel">
            <div class="card-head">
                <h2>"System Logs"</h2>
                <span class="live-dot">"Real-time"</span>
            </div>

            <div class="log-controls">
                <input
                    type="text"
                    class="log-search"
                    placeholder="Search logs..."
                    prop:value=search
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <div class="log-filters">{buttons}</div>
            </div>

            <div class="log-list">
                <For
                    each=visible
                    key=|log| log.id
                    children=move |log: LogEntry| view! { <LogRow log/> }
                />
            </div>

            <div class="log-totals">{totals}</div>
        </section>
    }
}

#[component]
fn LogRow(log: LogEntry) -> impl IntoView {
    let (time, date) = split_timestamp(&log.timestamp);
    let icon = match log.kind {
        LogKind::Detection => "🎥",
        LogKind::System => "🖥",
        LogKind::Alert => "⚠",
    };

    view! {
        <div class=format!("log-row sev-{}", log.severity.css())>
            <span class="log-icon">{icon}</span>
            <div class="log-body">
                <div class="log-source">
                    <span class="log-camera">{log.camera.clone()}</span>
                    " • "
                    <span class="log-location">{log.location.clone()}</span>
                </div>
                <p class="log-message">{log.message.clone()}</p>
            </div>
            <div class="log-time">
                <div>{time}</div>
                <div>{date}</div>
            </div>
        </div>
    }
}
