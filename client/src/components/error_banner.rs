//! Page-level error banner with Retry and Dismiss.

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(
    #[prop(into)] message: Signal<Option<String>>,
    on_retry: Callback<()>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="error-banner" role="alert">
                    <span class="error-banner__message">{text}</span>
                    <button class="btn btn--small" on:click=move |_| on_retry.run(())>
                        "Retry"
                    </button>
                    <button class="btn btn--small btn--ghost" on:click=move |_| on_dismiss.run(())>
                        "Dismiss"
                    </button>
                </div>
            }
        })
    }
}
