//! Multi-camera monitor – grid of all cameras with layout switching.

use leptos::prelude::*;

use farm_common::fixtures::{online_count, Camera};

use crate::components::video_player::VideoPlayer;
use crate::pages::dashboard::get_cameras;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GridLayout {
    #[default]
    Grid,
    Quad,
    Single,
}

impl GridLayout {
    pub const ALL: [GridLayout; 3] = [GridLayout::Grid, GridLayout::Quad, GridLayout::Single];

    pub fn label(self) -> &'static str {
        match self {
            GridLayout::Grid => "Grid",
            GridLayout::Quad => "Quad",
            GridLayout::Single => "Single",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            GridLayout::Grid => "⊞",
            GridLayout::Quad => "⊟",
            GridLayout::Single => "⊡",
        }
    }
}

/// Grid class for the camera wall.  An expanded camera always gets a single column.
pub fn grid_class(layout: GridLayout, expanded: Option<u32>) -> &'static str {
    if expanded.is_some() {
        return "camera-wall cols-1";
    }
    match layout {
        GridLayout::Single => "camera-wall cols-1",
        GridLayout::Quad => "camera-wall cols-2",
        GridLayout::Grid => "camera-wall cols-auto",
    }
}

/// Clicking the expanded camera collapses it; any other camera replaces it.
pub fn toggle_expanded(current: Option<u32>, clicked: u32) -> Option<u32> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[component]
pub fn MonitorPage() -> impl IntoView {
    let cameras = Resource::new(|| (), |_| async { get_cameras().await });
    let (layout, set_layout) = signal(GridLayout::default());
    let (expanded, set_expanded) = signal::<Option<u32>>(None);

    let on_toggle = Callback::new(move |id: u32| {
        set_expanded.update(|cur| *cur = toggle_expanded(*cur, id));
    });

    let layout_buttons = GridLayout::ALL
        .into_iter()
        .map(|option| {
            let class = move || {
                if layout.get() == option {
                    "layout-btn active"
                } else {
                    "layout-btn"
                }
            };
            view! {
                <button class=class title=option.label() on:click=move |_| set_layout.set(option)>
                    {option.icon()}
                </button>
            }
        })
        .collect_view();

    let camera_list = move || cameras.get().and_then(Result::ok).unwrap_or_default();

    view! {
        <div class="monitor-page">
            <header class="page-header">
                <div>
                    <h1>"Multi-Camera Monitoring"</h1>
                    <p class="muted">
                        <Transition fallback=|| ()>
                            {move || format!("{} cameras online", online_count(&camera_list()))}
                        </Transition>
                    </p>
                </div>
                <div class="layout-select">
                    <span class="muted">"Layout:"</span>
                    <div class="layout-buttons">{layout_buttons}</div>
                </div>
            </header>

            <Suspense fallback=|| view! { <p class="loading">"Loading…"</p> }>
                <div class=move || grid_class(layout.get(), expanded.get())>
                    <For
                        each=camera_list
                        key=|cam| cam.id
                        children=move |cam: Camera| {
                            let id = cam.id;
                            let is_expanded = Signal::derive(move || expanded.get() == Some(id));
                            view! { <CameraTile cam is_expanded on_toggle/> }
                        }
                    />
                </div>

                <section class="card camera-summary">
                    <h3>"Camera Summary"</h3>
                    <div class="summary-grid">
                        {move || camera_list().into_iter().map(|cam| {
                            let id = cam.id;
                            let dot = if cam.is_online() { "dot online" } else { "dot offline" };
                            view! {
                                <div class="summary-card" on:click=move |_| on_toggle.run(id)>
                                    <div class="summary-head">
                                        <h4>{cam.name.clone()}</h4>
                                        <span class=dot></span>
                                    </div>
                                    <p class="muted">{cam.location.clone()}</p>
                                    <div class="summary-meta muted small">
                                        <span>{cam.resolution.clone()}</span>
                                        <span>{format!("{} FPS", cam.fps)}</span>
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                </section>
            </Suspense>
        </div>
    }
}

#[component]
fn CameraTile(cam: Camera, is_expanded: Signal<bool>, on_toggle: Callback<u32>) -> impl IntoView {
    let id = cam.id;
    let online = cam.is_online();
    let (dot_class, state_label) = if online {
        ("dot online", "ONLINE")
    } else {
        ("dot offline", "OFFLINE")
    };
    let recording_class = if cam.recording { "recording on" } else { "recording" };
    let recording_label = if cam.recording { "Recording" } else { "Stopped" };

    let body = if online {
        view! {
            <VideoPlayer
                video_url=Signal::stored(cam.stream_url.clone())
                camera_name=Signal::stored(cam.name.clone())
                location=Signal::stored(cam.location.clone())
                is_live=true
            />
        }
        .into_any()
    } else {
        view! {
            <div class="camera-offline">
                <p>"⚠"</p>
                <p class="muted">"Camera Offline"</p>
                <p class="muted small">{format!("Last update: {}", cam.last_update)}</p>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="camera-tile">
            <div class="tile-head">
                <div>
                    <h3>{cam.name.clone()}</h3>
                    <p class="muted small">{cam.location.clone()}</p>
                </div>
                <span class=dot_class></span>
                <span class="small">{state_label}</span>
            </div>
            <div class="tile-video">{body}</div>
            <div class="tile-foot small">
                <span>{cam.resolution.clone()}</span>
                <span>{format!("{} FPS", cam.fps)}</span>
                <span class=recording_class>{recording_label}</span>
                <button
                    class="expand-btn"
                    title={move || if is_expanded.get() { "Collapse" } else { "Expand" }}
                    on:click=move |_| on_toggle.run(id)
                >
                    {move || if is_expanded.get() { "✕" } else { "⤢" }}
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_class_per_layout() {
        assert_eq!(grid_class(GridLayout::Grid, None), "camera-wall cols-auto");
        assert_eq!(grid_class(GridLayout::Quad, None), "camera-wall cols-2");
        assert_eq!(grid_class(GridLayout::Single, None), "camera-wall cols-1");
    }

    #[test]
    fn test_expanded_camera_forces_single_column() {
        for layout in GridLayout::ALL {
            assert_eq!(grid_class(layout, Some(2)), "camera-wall cols-1");
        }
    }

    #[test]
    fn test_toggle_expanded() {
        assert_eq!(toggle_expanded(None, 1), Some(1));
        assert_eq!(toggle_expanded(Some(1), 1), None);
        assert_eq!(toggle_expanded(Some(1), 3), Some(3));
    }
}
