//! Route guard wrapping every protected page, plus the fallback for unknown paths.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use leptos_router::NavigateOptions;

use farm_common::guard::{resolve, GuardDecision, Route};

use crate::session::use_session;

/// Renders `children` only once [`resolve`] allows `route` for the current
/// session.  While the startup check is pending a neutral spinner is shown
/// and no navigation happens.
#[component]
pub fn Protected(route: Route, children: ChildrenFn) -> impl IntoView {
    let session = use_session();

    move || match resolve(route.path(), session.status()) {
        GuardDecision::Wait => view! { <Waiting/> }.into_any(),
        GuardDecision::Redirect(path) => view! { <ReplaceWith path/> }.into_any(),
        GuardDecision::Allow => children(),
    }
}

/// Router fallback: whatever [`resolve`] says for a path outside the table.
#[component]
pub fn Unmatched() -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;

    move || match resolve(&pathname.get(), session.status()) {
        GuardDecision::Redirect(path) => view! { <ReplaceWith path/> }.into_any(),
        GuardDecision::Wait | GuardDecision::Allow => view! { <Waiting/> }.into_any(),
    }
}

#[component]
fn ReplaceWith(path: &'static str) -> impl IntoView {
    view! {
        <Redirect
            path=path
            options=NavigateOptions { replace: true, ..Default::default() }
        />
    }
}

#[component]
fn Waiting() -> impl IntoView {
    view! {
        <div class="guard-waiting">
            <div class="spinner"></div>
            <p class="loading">"Loading..."</p>
        </div>
    }
}
