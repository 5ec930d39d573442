//! Top navigation bar with the signed-in user and a logout button.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::state::storage::BrowserStorage;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_: leptos::ev::MouseEvent| {
        SessionStore::new(BrowserStorage).clear();
        auth.set(AuthState::default());
        navigate("/", NavigateOptions::default());
    };

    let identity = move || {
        let state = auth.get();
        match state.display_name() {
            Some(name) => view! {
                <span class="nav-bar__user">{name} " (" {state.role().to_string()} ")"</span>
            }
            .into_any(),
            None => view! {
                <a href="/login" class="nav-bar__link">"Sign in"</a>
                <a href="/register" class="nav-bar__link">"Register"</a>
            }
            .into_any(),
        }
    };

    view! {
        <nav class="nav-bar">
            <a href="/" class="nav-bar__brand">"SoundMap"</a>
            <a href="/map" class="nav-bar__link">"Map"</a>
            <span class="nav-bar__spacer"></span>
            {identity}
            <Show when=move || auth.get().authenticated>
                <button class="nav-bar__logout" on:click=on_logout.clone()>
                    "Log out"
                </button>
            </Show>
        </nav>
    }
}
