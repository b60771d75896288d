//! Toast notification bound to [`UiState`].
//!
//! In the browser each notice clears itself after a few seconds; a newer
//! notice is never cleared by an older timer because `dismiss` matches on
//! the sequence number.

use leptos::prelude::*;

use crate::state::ui::{NoticeKind, UiState};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS: std::time::Duration = std::time::Duration::from_secs(4);

#[component]
pub fn Notification() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(seq) = ui.with(|u| u.notice.as_ref().map(|n| n.seq)) else {
                return;
            };
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(AUTO_DISMISS).await;
                ui.update(|u| u.dismiss(seq));
            });
        });
    }

    move || {
        ui.get().notice.map(|notice| {
            let seq = notice.seq;
            view! {
                <div
                    class="notification"
                    class:notification--error=notice.kind == NoticeKind::Error
                    class:notification--success=notice.kind == NoticeKind::Success
                    role="status"
                >
                    <span class="notification__message">{notice.message}</span>
                    <button
                        class="notification__close"
                        title="Dismiss"
                        on:click=move |_| ui.update(|u| u.dismiss(seq))
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
