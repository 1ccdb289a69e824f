//! Camera video player with name/location overlay and LIVE badge.

use leptos::prelude::*;

#[component]
pub fn VideoPlayer(
    /// Stream to play; `None` renders an empty frame.
    #[prop(into)]
    video_url: Signal<Option<String>>,
    #[prop(into)] camera_name: Signal<String>,
    #[prop(into)] location: Signal<String>,
    #[prop(optional)] is_live: bool,
) -> impl IntoView {
    view! {
        <div class="video-player">
            <div class="video-overlay-top">
                <div>
                    <h3 class="video-camera">{move || camera_name.get()}</h3>
                    <p class="video-location">{move || location.get()}</p>
                </div>
                {is_live.then(|| view! { <span class="live-badge">"LIVE"</span> })}
            </div>
            <video
                class="video-element"
                src=move || video_url.get()
                controls=true
                muted=true
                preload="none"
            ></video>
        </div>
    }
}
