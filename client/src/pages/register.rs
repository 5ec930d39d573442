//! Registration page. Creates the account only; signing in is a separate step.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{Registration, Role};

/// Raw form values as typed by the user.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub favorite_genres: String,
    pub role: String,
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

pub(crate) fn validate_registration_input(form: &RegistrationForm) -> Result<Registration, &'static str> {
    let username = form.username.trim();
    let email = form.email.trim();
    if username.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("Enter a username, an email and a password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    let role = match Role::from(form.role.trim()) {
        role @ (Role::Listener | Role::Artist) => role,
        _ => return Err("Choose listener or artist."),
    };

    let mut registration = Registration::new(username, email, form.password.clone());
    registration.first_name = non_empty(&form.first_name);
    registration.last_name = non_empty(&form.last_name);
    registration.favorite_genres = non_empty(&form.favorite_genres);
    registration.role = Some(role);
    Ok(registration)
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let form = RwSignal::new(RegistrationForm {
        role: Role::Listener.to_string(),
        ..RegistrationForm::default()
    });
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match validate_registration_input(&form.get()) {
            Ok(registration) => registration,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let navigate = navigate.clone();
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::browser_client().register(&registration).await {
                Ok(_) => {
                    busy.set(false);
                    navigate("/login", NavigateOptions::default());
                }
                Err(e) => {
                    info.set(format!("Registration failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (registration, navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create an account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || form.get().username
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="First name"
                        prop:value=move || form.get().first_name
                        on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Last name"
                        prop:value=move || form.get().last_name
                        on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Favorite genres (Rock, Jazz)"
                        prop:value=move || form.get().favorite_genres
                        on:input=move |ev| form.update(|f| f.favorite_genres = event_target_value(&ev))
                    />
                    <select
                        class="login-input"
                        prop:value=move || form.get().role
                        on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
                    >
                        <option value="listener">"Listener"</option>
                        <option value="artist">"Artist"</option>
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
