//! Login page – the only screen outside the route guard.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use farm_common::guard::HOME_PATH;
use farm_common::session::Credentials;

use crate::session::use_session;

/// Username submitted with every login; the form only asks for a password.
const ADMIN_USERNAME: &str = "admin";

fn submit_label(pending: bool) -> &'static str {
    if pending {
        "Accessing Dashboard..."
    } else {
        "Access Dashboard"
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (pending, set_pending) = signal(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        set_error.set(None);
        set_pending.set(true);

        let credentials = Credentials::new(ADMIN_USERNAME, password.get_untracked());
        match session.login(&credentials) {
            // Stays pending until the navigation replaces this page.
            Ok(_) => navigate(HOME_PATH, Default::default()),
            Err(e) => {
                set_error.set(Some(e.to_string()));
                set_pending.set(false);
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-box">
                <div class="login-brand">
                    <span class="brand-logo">"🐄"</span>
                    <h1>"Smart Farm"</h1>
                    <p class="muted">"Administrator Access"</p>
                </div>

                <div class="card login-card">
                    <h2>"Dashboard Login"</h2>
                    <p class="muted">"Enter your password to access the monitoring dashboard"</p>

                    <form on:submit=on_submit>
                        {move || error.get().map(|msg| view! { <div class="login-error">{msg}</div> })}

                        <label for="password">"Administrator Password"</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            required=true
                            autofocus=true
                            placeholder="Enter 0000"
                            disabled=pending
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />

                        <button type="submit" class="btn primary wide" disabled=pending>
                            {move || submit_label(pending.get())}
                        </button>
                    </form>

                    <div class="login-hint">
                        <h3>"Quick Access"</h3>
                        <p>"• Password: " <span class="mono">"0000"</span></p>
                        <p>"• This is a demo system for testing purposes"</p>
                    </div>
                </div>

                <p class="login-footer muted">
                    "© 2024 Smart Farm Monitoring System. All rights reserved."
                </p>
            </div>
        </div>
    }
}
