//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_header::NavHeader;
use crate::components::notification::Notification;
use crate::pages::{guide::GuidePage, wireflows::WireflowsPage, wires::WiresPage};
use crate::state::ui::UiState;
use crate::util::config::{API_BASE_META, ApiConfig};

/// HTML shell rendered on the server for SSR + hydration.
///
/// The backend base URL is embedded as a `<meta>` tag so the hydrated
/// client talks to the same backend the server was configured with.
pub fn shell(options: LeptosOptions, api: ApiConfig) -> impl IntoView {
    let api_base = api.base_url().to_owned();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
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
/// Provides the backend config and UI chrome state, then sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The server provides its validated config; the browser reads it back.
    provide_context(use_context::<ApiConfig>().unwrap_or_else(ApiConfig::detect));
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/geminiwire.css"/>
        <Title text="GeminiWire"/>

        <Router>
            <NavHeader/>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=WiresPage/>
                    <Route path=StaticSegment("wires") view=WiresPage/>
                    <Route path=StaticSegment("wireflows") view=WireflowsPage/>
                    <Route path=StaticSegment("guide") view=GuidePage/>
                </Routes>
            </main>
            <Notification/>
        </Router>
    }
}
