//! AI analysis page – pick a video, run the (simulated) analysis, show results.

use leptos::prelude::*;

use farm_common::analysis::{
    accept_upload, AnalysisDetection, AnalysisReport, VideoUpload, PROGRESS_STEPS,
};

// ─── Server functions ────────────────────────────────────────────────────────

/// Only the file's metadata is sent; the video itself never leaves the browser.
#[server(AnalyzeVideo, "/api")]
pub async fn analyze_video(
    file_name: String,
    content_type: String,
) -> Result<AnalysisReport, ServerFnError> {
    use crate::server::analysis;
    let state = use_context::<crate::app::AppState>()
        .ok_or_else(|| ServerFnError::new("Missing AppState"))?;
    let upload = accept_upload(&file_name, &content_type)
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(analysis::simulate(upload, state.config.analysis_delay()).await)
}

fn drop_zone_class(dragging: bool) -> &'static str {
    if dragging {
        "drop-zone active"
    } else {
        "drop-zone"
    }
}

// ─── Page component ──────────────────────────────────────────────────────────

#[component]
pub fn AnalyzePage() -> impl IntoView {
    let analyze = ServerAction::<AnalyzeVideo>::new();
    let pending = analyze.pending();

    let (upload, set_upload) = signal::<Option<VideoUpload>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (dragging, set_dragging) = signal(false);

    #[allow(unused_variables)] // only called from the hydrate (WASM) file handlers
    let choose = move |file_name: String, content_type: String| {
        match accept_upload(&file_name, &content_type) {
            Ok(up) => {
                set_upload.set(Some(up));
                set_error.set(None);
                analyze.value().set(None);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let on_file = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                choose(file.name(), file.type_());
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        set_dragging.set(true);
    };
    let on_drag_leave = move |_: leptos::ev::DragEvent| set_dragging.set(false);
    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        set_dragging.set(false);
        #[cfg(feature = "hydrate")]
        {
            let dropped = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0));
            if let Some(file) = dropped {
                choose(file.name(), file.type_());
            }
        }
    };

    let on_start = move |_| {
        if let Some(up) = upload.get_untracked() {
            analyze.dispatch(AnalyzeVideo {
                file_name: up.file_name,
                content_type: up.content_type,
            });
        }
    };

    let result = move || analyze.value().get();

    view! {
        <div class="analyze-page">
            <header class="page-header">
                <div>
                    <h1>"AI Video Analysis"</h1>
                    <p class="muted">
                        "Analyze uploaded videos with AI to detect animal behavior and health status"
                    </p>
                </div>
            </header>

            <div class="analyze-grid">
                <div class="analyze-left">
                    <section class="card upload-card">
                        <h2>"Video Upload"</h2>
                        <div
                            class=move || drop_zone_class(dragging.get())
                            on:dragenter=on_drag_over
                            on:dragover=on_drag_over
                            on:dragleave=on_drag_leave
                            on:drop=on_drop
                        >
                            {move || match upload.get() {
                                Some(up) => view! {
                                    <div class="upload-done">
                                        <h3>"File Upload Complete"</h3>
                                        <p class="muted">{up.file_name}</p>
                                        <button class="link-btn danger" on:click=move |_| set_upload.set(None)>
                                            "Select Different File"
                                        </button>
                                    </div>
                                }.into_any(),
                                None => view! {
                                    <div class="upload-empty">
                                        <h3>"Upload video file"</h3>
                                        <p class="muted">"Drag and drop or click to select a file"</p>
                                    </div>
                                }.into_any(),
                            }}
                            <input type="file" accept="video/*" on:change=on_file/>
                        </div>

                        {move || error.get().map(|msg| view! { <p class="error">{msg}</p> })}

                        <Show when=move || upload.get().is_some()>
                            <button
                                class="btn primary wide"
                                disabled=move || pending.get()
                                on:click=on_start
                            >
                                {move || if pending.get() {
                                    "AI Analysis in Progress..."
                                } else {
                                    "Start AI Analysis"
                                }}
                            </button>
                        </Show>
                    </section>

                    <Show when=move || pending.get()>
                        <section class="card progress-card">
                            <h3>"Analysis Progress"</h3>
                            <ul class="progress-steps">
                                {PROGRESS_STEPS
                                    .iter()
                                    .map(|step| view! { <li>{*step}</li> })
                                    .collect_view()}
                            </ul>
                        </section>
                    </Show>
                </div>

                <div class="analyze-right">
                    {move || result().map(|res| match res {
                        Ok(report) => view! { <AnalysisResults report/> }.into_any(),
                        Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
                    })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn AnalysisResults(report: AnalysisReport) -> impl IntoView {
    let summary = report.summary;

    view! {
        <section class="card">
            <h2>"Analysis Results"</h2>
            <p class="muted small">{format!("{} · {}", report.file_name, report.duration)}</p>
            <div class="summary-counters">
                <div class="counter animals">
                    <div class="counter-value">{summary.total_animals}</div>
                    <div class="counter-label">"Animals Detected"</div>
                </div>
                <div class="counter anomalies">
                    <div class="counter-value">{summary.anomalies}</div>
                    <div class="counter-label">"Anomalies"</div>
                </div>
                <div class="counter health">
                    <div class="counter-value">{summary.health_issues}</div>
                    <div class="counter-label">"Health Issues"</div>
                </div>
            </div>
        </section>

        <section class="card">
            <h3>"Detection Results"</h3>
            {report
                .detections
                .into_iter()
                .map(|detection| view! { <DetectionRow detection/> })
                .collect_view()}
        </section>

        <section class="card">
            <h3>"Recommendations"</h3>
            <ul class="recommendations">
                {summary
                    .recommendations
                    .into_iter()
                    .map(|rec| view! { <li>{rec}</li> })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[component]
fn DetectionRow(detection: AnalysisDetection) -> impl IntoView {
    let pct = format!("{}%", detection.confidence_pct());

    view! {
        <div class=format!("detection-row kind-{}", detection.kind.css())>
            <div class="detection-head">
                <span class="detection-kind">{detection.kind.label()}</span>
                <span class="detection-conf">{pct}</span>
            </div>
            <p>{detection.description}</p>
            <p class="muted small">{format!("Time: {}", detection.timestamp)}</p>
        </div>
    }
}
