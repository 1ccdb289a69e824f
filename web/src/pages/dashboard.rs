//! Dashboard – live camera view, weather card, camera status and logs.

use chrono::{DateTime, Local};
use leptos::prelude::*;

use farm_common::fixtures::{Alarm, Camera, LogEntry, SystemStatus, WeatherReport};

use crate::components::log_panel::LogPanel;
use crate::components::video_player::VideoPlayer;

// ─── Server functions ────────────────────────────────────────────────────────

#[server(GetCameras, "/api")]
pub async fn get_cameras() -> Result<Vec<Camera>, ServerFnError> {
    use crate::server::feed;
    let state = use_context::<crate::app::AppState>()
        .ok_or_else(|| ServerFnError::new("Missing AppState"))?;
    Ok(feed::cameras(&state.config))
}

#[server(GetLogs, "/api")]
pub async fn get_logs() -> Result<Vec<LogEntry>, ServerFnError> {
    Ok(farm_common::fixtures::logs())
}

#[server(GetAlarms, "/api")]
pub async fn get_alarms() -> Result<Vec<Alarm>, ServerFnError> {
    Ok(farm_common::fixtures::alarms())
}

#[server(GetSystemStatus, "/api")]
pub async fn get_system_status() -> Result<SystemStatus, ServerFnError> {
    Ok(farm_common::fixtures::system_status())
}

#[server(GetWeather, "/api")]
pub async fn get_weather() -> Result<WeatherReport, ServerFnError> {
    use crate::server::feed;
    let state = use_context::<crate::app::AppState>()
        .ok_or_else(|| ServerFnError::new("Missing AppState"))?;
    Ok(feed::weather(&state.config))
}

// ─── Page component ──────────────────────────────────────────────────────────

#[component]
pub fn DashboardPage() -> impl IntoView {
    let cameras = Resource::new(|| (), |_| async { get_cameras().await });
    let weather = Resource::new(|| (), |_| async { get_weather().await });
    let logs = Resource::new(|| (), |_| async { get_logs().await });
    let status = Resource::new(|| (), |_| async { get_system_status().await });

    let (selected, set_selected) = signal(1u32);

    // Clock: empty until the browser takes over, then ticks every second.
    let (now, set_now) = signal(None::<DateTime<Local>>);
    Effect::new(move |_| set_now.set(Some(Local::now())));
    #[cfg(feature = "hydrate")]
    {
        if let Ok(handle) = set_interval_with_handle(
            move || set_now.set(Some(Local::now())),
            std::time::Duration::from_secs(1),
        ) {
            on_cleanup(move || handle.clear());
        }
    }
    let clock = move || {
        now.get()
            .map(|t| {
                format!(
                    "{} • {}",
                    t.format("%A, %-d %B %Y"),
                    t.format("%H:%M:%S")
                )
            })
            .unwrap_or_default()
    };

    let camera_list = move || cameras.get().and_then(Result::ok).unwrap_or_default();
    let current = move || {
        let list = camera_list();
        let id = selected.get();
        list.iter().find(|c| c.id == id).cloned().or_else(|| list.first().cloned())
    };

    view! {
        <div class="dashboard-page">
            <header class="page-header">
                <div>
                    <h1>"Smart Farm Monitoring Dashboard"</h1>
                    <p class="muted">{clock}</p>
                </div>
                <div class="system-ok">
                    <span class="dot online"></span>
                    <Transition fallback=|| view! { <span>"System Normal"</span> }>
                        {move || status.get().map(|res| match res {
                            Ok(s) => view! {
                                <span>
                                    "System Normal · "{s.online_cameras}"/"{s.total_cameras}
                                    " cameras · network "{s.network_status}
                                </span>
                            }.into_any(),
                            Err(_) => view! { <span>"System Normal"</span> }.into_any(),
                        })}
                    </Transition>
                </div>
            </header>

            <div class="dashboard-grid">
                <section class="card live-view">
                    <div class="card-head">
                        <h2>"Real-time Monitoring"</h2>
                        <label class="camera-select">
                            "Select Camera: "
                            <select on:change=move |ev| {
                                if let Ok(id) = event_target_value(&ev).parse() {
                                    set_selected.set(id);
                                }
                            }>
                                {move || camera_list().into_iter().map(|c| {
                                    let id = c.id;
                                    view! {
                                        <option value=id.to_string() selected=move || selected.get() == id>
                                            {format!("{} - {}", c.name, c.location)}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </label>
                    </div>
                    <Transition fallback=|| view! { <p class="loading">"Loading…"</p> }>
                        <VideoPlayer
                            video_url=Signal::derive(move || current().and_then(|c| c.stream_url))
                            camera_name=Signal::derive(move || {
                                current().map(|c| c.name).unwrap_or_else(|| "Camera 1".into())
                            })
                            location=Signal::derive(move || {
                                current().map(|c| c.location).unwrap_or_else(|| "Barn A".into())
                            })
                            is_live=true
                        />
                    </Transition>
                </section>

                <aside class="dashboard-side">
                    <section class="card weather-card">
                        <h3>"Weather & Alerts"</h3>
                        <Suspense fallback=|| view! { <p class="muted">"Loading weather..."</p> }>
                            {move || weather.get().map(|res| match res {
                                Ok(report) => view! { <WeatherCard report/> }.into_any(),
                                Err(_) => view! {
                                    <p class="error">"Failed to load weather"</p>
                                }.into_any(),
                            })}
                        </Suspense>
                    </section>

                    <section class="card camera-status">
                        <h3>"Camera Status"</h3>
                        <Suspense fallback=|| view! { <p class="loading">"Loading…"</p> }>
                            {move || cameras.get().map(|res| match res {
                                Ok(list) => list
                                    .into_iter()
                                    .map(|cam| view! { <CameraStatusRow cam/> })
                                    .collect_view()
                                    .into_any(),
                                Err(e) => view! {
                                    <p class="error">"Error: " {e.to_string()}</p>
                                }.into_any(),
                            })}
                        </Suspense>
                    </section>
                </aside>
            </div>

            <Suspense fallback=|| view! { <p class="loading">"Loading…"</p> }>
                {move || logs.get().map(|res| match res {
                    Ok(entries) => view! { <LogPanel logs=entries/> }.into_any(),
                    Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
                })}
            </Suspense>
        </div>
    }
}

#[component]
fn WeatherCard(report: WeatherReport) -> impl IntoView {
    let icon = report.icon_url();
    let alerts = report.shown_alerts().to_vec();

    view! {
        <div class="weather">
            <div class="weather-now">
                <span class="weather-temp">{format!("{:.0}°C", report.current.temperature)}</span>
                <span class="weather-desc">{report.current.description.clone()}</span>
                <img class="weather-icon" alt="icon" src=icon/>
            </div>
            <p class="muted small">
                {format!("{}, {}", report.location.name, report.location.country)}
            </p>
            {if alerts.is_empty() {
                view! { <p class="muted small">"No alerts"</p> }.into_any()
            } else {
                alerts
                    .into_iter()
                    .map(|a| view! {
                        <div class=format!("weather-alert sev-{}", a.severity.css())>{a.message}</div>
                    })
                    .collect_view()
                    .into_any()
            }}
        </div>
    }
}

#[component]
fn CameraStatusRow(cam: Camera) -> impl IntoView {
    let (class, status) = if cam.is_online() {
        ("camera-row online", "online")
    } else {
        ("camera-row offline", "offline")
    };

    view! {
        <div class=class>
            <div>
                <p class="camera-name">{cam.name.clone()}</p>
                <p class="muted small">{cam.location.clone()}</p>
            </div>
            <span class="camera-state">
                <span class=format!("dot {status}")></span>
                {status}
            </span>
        </div>
    }
}
