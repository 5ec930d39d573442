//! Regions page backing the genre map. Requires a signed-in user.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::config::ApiConfig;
use crate::data::regions::{all_regions, departments_for_region};
use crate::net::api::{ROLE_SCOPED_ENDPOINT, role_based_url};
use crate::state::session::SessionStore;
use crate::state::storage::BrowserStorage;
use crate::util::guard::{RouteAccess, install_route_guard};

#[component]
pub fn MapPage() -> impl IntoView {
    if !install_route_guard(RouteAccess::AUTHENTICATED, use_navigate()) {
        return ().into_any();
    }

    let role = SessionStore::new(BrowserStorage).current_user_role();
    let stats_url = role_based_url(&ApiConfig::from_build_env(), &role, ROLE_SCOPED_ENDPOINT);
    let regions = all_regions()
        .map(|region| {
            let departments = departments_for_region(region).join(", ");
            view! {
                <li class="region-list__item">
                    <strong>{region}</strong>
                    " "
                    <span class="region-list__departments">{departments}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="map-page">
            <h1>"Popular genres by region"</h1>
            <p class="map-page__source">
                "Statistics source: "
                <code>{stats_url}</code>
            </p>
            <ul class="region-list">{regions}</ul>
        </section>
    }
    .into_any()
}
