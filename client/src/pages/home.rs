//! Public landing page. Protected routes redirect here with a query marker.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

/// Message for the redirect markers the route guard appends.
pub(crate) fn home_notice(auth_required: Option<&str>, access_denied: Option<&str>) -> Option<&'static str> {
    if access_denied == Some("true") {
        return Some("You do not have access to that page.");
    }
    if auth_required == Some("true") {
        return Some("Please sign in to open that page.");
    }
    None
}

#[component]
pub fn HomePage() -> impl IntoView {
    let query = use_query_map();
    let notice = move || {
        let params = query.get();
        home_notice(
            params.get("authRequired").as_deref(),
            params.get("accessDenied").as_deref(),
        )
    };

    view! {
        <section class="home-page">
            <h1>"SoundMap"</h1>
            <p class="home-page__subtitle">"What France listens to, region by region."</p>
            <Show when=move || notice().is_some()>
                <p class="home-page__notice">{move || notice().unwrap_or_default()}</p>
            </Show>
            <a href="/map" class="home-page__cta">"Open the map"</a>
        </section>
    }
}
