//! Login page: username + password, then the composed login flow.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginCredentials;
use crate::state::auth::AuthState;

pub(crate) fn validate_login_input(username: &str, password: &str) -> Result<LoginCredentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(LoginCredentials::new(username, password))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::browser_client().complete_login(&credentials).await {
                Ok(outcome) => {
                    auth.set(AuthState::signed_in(outcome.profile));
                    password.set(String::new());
                    info.set(String::new());
                    busy.set(false);
                    navigate("/map", NavigateOptions::default());
                }
                Err(e) => {
                    info.set(format!("Login failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, auth, navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign in"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__subtitle">
                    "No account yet? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
