//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{bank::BankPage, escrow::EscrowPage, home::HomePage};
use crate::state::auth::AuthState;

/// Hosted Plaid Link loader; defines the global `Plaid` object.
const PLAID_LINK_SCRIPT: &str = "https://cdn.plaid.com/link/v2/stable/link-initialize.js";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src=PLAID_LINK_SCRIPT></script>
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

/// Root application component.
///
/// Provides the shared auth context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The session lives in localStorage, so it is only known after hydration.
    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    Effect::new(move || auth.set(AuthState::load()));

    view! {
        <Stylesheet id="leptos" href="/pkg/escrow-portal.css"/>
        <Title text="Escrow Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("bank") view=BankPage/>
                <Route path=StaticSegment("escrow") view=EscrowPage/>
            </Routes>
        </Router>
    }
}
