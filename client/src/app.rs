//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{admin::AdminPage, home::HomePage, login::LoginPage, map::MapPage, register::RegisterPage};
use crate::state::auth::AuthState;
use crate::state::session::SessionStore;
use crate::state::storage::BrowserStorage;

/// Root application component.
///
/// Seeds the auth context from the persisted session and sets up routing.
/// `/map` and `/admin` guard themselves.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::from_session(&SessionStore::new(BrowserStorage)));
    provide_context(auth);

    view! {
        <Title text="SoundMap"/>

        <Router>
            <NavBar/>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("map") view=MapPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </main>
        </Router>
    }
}
