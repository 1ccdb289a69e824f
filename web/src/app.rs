//! Root Leptos application component with routing.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use farm_common::guard::Route as Screen;

use crate::components::{
    alarm_icon::AlarmIcon,
    guard::{Protected, Unmatched},
    sidebar::Sidebar,
};
use crate::pages::{
    analyze::AnalyzePage, dashboard::DashboardPage, login::LoginPage, monitor::MonitorPage,
};
use crate::session::provide_session;

/// Server-side application state, provided as Leptos context for server functions.
#[derive(Clone, Debug)]
#[cfg(feature = "ssr")]
pub struct AppState {
    pub config: farm_common::config::Config,
    pub leptos_options: LeptosOptions,
}

/// Dummy state for the client – never actually constructed on WASM, but the
/// type must exist so server functions can reference it in their signatures.
#[derive(Clone, Debug)]
#[cfg(not(feature = "ssr"))]
pub struct AppState;

/// HTML document wrapping `<App/>` for server-side rendering.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// The root `<App/>` component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();

    view! {
        <Stylesheet id="leptos" href="/pkg/farm-web.css"/>
        <Title text="Smart Farm – Monitoring Dashboard"/>
        <Meta name="description" content="Smart farm camera monitoring dashboard"/>

        <Router>
            <Routes fallback=|| view! { <Unmatched/> }>
                <Route
                    path=StaticSegment(Screen::Login.segment())
                    view=|| view! { <Page screen=Screen::Login/> }
                />
                <Route
                    path=StaticSegment(Screen::Dashboard.segment())
                    view=|| view! { <Page screen=Screen::Dashboard/> }
                />
                <Route
                    path=StaticSegment(Screen::Monitor.segment())
                    view=|| view! { <Page screen=Screen::Monitor/> }
                />
                <Route
                    path=StaticSegment(Screen::Analyze.segment())
                    view=|| view! { <Page screen=Screen::Analyze/> }
                />
            </Routes>
        </Router>
    }
}

/// One screen of the route table; protected screens get the guard and layout.
#[component]
fn Page(screen: Screen) -> impl IntoView {
    let content = move || match screen {
        Screen::Login => view! { <LoginPage/> }.into_any(),
        Screen::Dashboard => view! { <Layout><DashboardPage/></Layout> }.into_any(),
        Screen::Monitor => view! { <Layout><MonitorPage/></Layout> }.into_any(),
        Screen::Analyze => view! { <Layout><AnalyzePage/></Layout> }.into_any(),
    };

    if screen.is_protected() {
        view! { <Protected route=screen>{content()}</Protected> }.into_any()
    } else {
        content()
    }
}

/// Sidebar plus a header carrying the alarm icon, around a protected page.
#[component]
fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Sidebar/>
            <div class="layout-body">
                <header class="top-header">
                    <AlarmIcon/>
                </header>
                <main class="main-content">{children()}</main>
            </div>
        </div>
    }
}
