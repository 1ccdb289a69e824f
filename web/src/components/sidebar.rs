//! Left navigation sidebar with the user card and logout button.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use farm_common::guard::{Route, LOGIN_PATH};

use crate::session::use_session;

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.logout();
        navigate(LOGIN_PATH, Default::default());
    };

    let links = Route::protected()
        .map(|route| {
            let class = move || {
                if pathname.get() == route.path() {
                    "side-link active"
                } else {
                    "side-link"
                }
            };
            view! {
                <a href=route.path() class=class>
                    <span>{route.label()}</span>
                </a>
            }
        })
        .collect_view();

    let display_name = move || {
        session
            .user()
            .map(|u| u.name)
            .unwrap_or_else(|| "Administrator".into())
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="brand-logo">"🐄"</span>
                <h1>"Smart Farm"</h1>
            </div>

            <nav class="sidebar-nav">{links}</nav>

            <div class="sidebar-user">
                <div class="user-card">
                    <p class="user-name">{display_name}</p>
                    <p class="user-mail">"admin@farm.com"</p>
                </div>
                <button class="logout-btn" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </aside>
    }
}
