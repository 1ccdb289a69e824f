//! Header alarm bell with unresolved-count badge and dropdown list.

use leptos::prelude::*;

use farm_common::fixtures::{split_timestamp, Alarm};
use farm_common::logs::{badge_text, unresolved_count};

use crate::pages::dashboard::get_alarms;

#[component]
pub fn AlarmIcon() -> impl IntoView {
    let alarms = Resource::new(|| (), |_| async { get_alarms().await });
    let (open, set_open) = signal(false);

    let list = move || alarms.get().and_then(Result::ok).unwrap_or_default();
    let unresolved = move || unresolved_count(&list());

    view! {
        <div class="alarm-icon">
            <button class="alarm-bell" on:click=move |_| set_open.update(|o| *o = !*o)>
                "🔔"
                <Transition fallback=|| ()>
                    {move || badge_text(unresolved()).map(|text| view! {
                        <span class="alarm-badge">{text}</span>
                    })}
                </Transition>
            </button>

            <Show when=move || open.get()>
                <div class="alarm-backdrop" on:click=move |_| set_open.set(false)></div>
                <div class="alarm-dropdown">
                    <div class="alarm-dropdown-head">
                        <h3>"Alarms"</h3>
                        <button class="close-btn" on:click=move |_| set_open.set(false)>"✕"</button>
                        <p class="muted">{move || format!("{} unread alarms", unresolved())}</p>
                    </div>
                    <div class="alarm-list">
                        {move || {
                            let items = list();
                            if items.is_empty() {
                                view! { <p class="muted empty">"No alarms"</p> }.into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|alarm| view! { <AlarmRow alarm/> })
                                    .collect_view()
                                    .into_any()
                            }
                        }}
                    </div>
                    <div class="alarm-dropdown-foot">
                        <button class="link-btn">"View All Alarms"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

#[component]
fn AlarmRow(alarm: Alarm) -> impl IntoView {
    let (time, date) = split_timestamp(&alarm.timestamp);
    let class = if alarm.resolved {
        "alarm-row resolved".to_string()
    } else {
        format!("alarm-row sev-{}", alarm.severity.css())
    };

    view! {
        <div class=class>
            <div class="alarm-row-main">
                <span class="alarm-kind">{alarm.kind.clone()}</span>
                <span class="alarm-sev">{alarm.severity.label()}</span>
                <p class="alarm-camera">{alarm.camera.clone()}</p>
                <p class="alarm-location muted">{alarm.location.clone()}</p>
            </div>
            <div class="alarm-row-time muted">
                <div>{time}</div>
                <div>{date}</div>
            </div>
            {(!alarm.resolved).then(|| view! {
                <div class="alarm-actions">
                    <button class="btn-small primary">"Acknowledge"</button>
                    <button class="btn-small">"Dismiss"</button>
                </div>
            })}
        </div>
    }
}
