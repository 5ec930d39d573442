//! Administration page. Admin role only.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::state::auth::AuthState;
use crate::util::guard::{RouteAccess, install_route_guard};

const STATISTICS_ENDPOINTS: [&str; 2] = ["auth/user-statistics/", "auth/user-growth-statistics/"];

#[component]
pub fn AdminPage() -> impl IntoView {
    if !install_route_guard(RouteAccess::ADMIN, use_navigate()) {
        return ().into_any();
    }

    let auth = expect_context::<RwSignal<AuthState>>();
    let config = ApiConfig::from_build_env();
    let endpoints = STATISTICS_ENDPOINTS
        .iter()
        .map(|path| view! { <li><code>{config.endpoint(path)}</code></li> })
        .collect_view();

    view! {
        <section class="admin-page">
            <h1>"Administration"</h1>
            <p>"Signed in as " {move || auth.get().display_name().unwrap_or_default()}</p>
            <ul class="admin-page__endpoints">{endpoints}</ul>
        </section>
    }
    .into_any()
}
