//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NavHeader() -> impl IntoView {
    view! {
        <header class="nav-header">
            <A href="/" attr:class="nav-header__brand">
                "GeminiWire"
            </A>
            <nav class="nav-header__links">
                <A href="/wires" attr:class="nav-header__link">
                    "Wires"
                </A>
                <A href="/wireflows" attr:class="nav-header__link">
                    "Wireflows"
                </A>
                <A href="/guide" attr:class="nav-header__link">
                    "Guide"
                </A>
            </nav>
        </header>
    }
}
