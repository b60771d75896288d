//! Wires page: list, create, edit, view, execute and delete wires.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is fetched on mount and again after every successful mutation;
//! the backend is the only source of truth. Dialog contents live in their
//! own signals so edits do not re-render the table.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wires::{Wire, find_wire};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error_banner::ErrorBanner;
use crate::components::execute_modal::ExecuteModal;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::wire_detail::WireDetail;
use crate::components::wire_form::WireForm;
use crate::components::wire_list::WireList;
use crate::net::api;
use crate::pages::{deleted_message, saved_message};
use crate::state::execute::ExecuteForm;
use crate::state::ui::{NoticeKind, UiState};
use crate::state::wire_form::WireDraft;
use crate::state::wires::{WiresModal, WiresState};
use crate::util::config::ApiConfig;

fn load_wires(config: ApiConfig, state: RwSignal<WiresState>) {
    state.update(WiresState::begin_fetch);
    spawn_local(async move {
        match api::list_wires(&config).await {
            Ok(items) => state.update(|s| s.fetch_succeeded(items)),
            Err(e) => state.update(|s| s.fetch_failed(e.to_string())),
        }
    });
}

#[component]
pub fn WiresPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let state = RwSignal::new(WiresState::default());
    let draft = RwSignal::new(WireDraft::create());

    let config_load = config.clone();
    Effect::new(move || load_wires(config_load.clone(), state));

    let config_retry = config.clone();
    let on_retry = Callback::new(move |()| load_wires(config_retry.clone(), state));
    let on_dismiss = Callback::new(move |()| state.update(WiresState::dismiss_error));
    let on_close = Callback::new(move |()| state.update(WiresState::close_modal));

    let on_create = move |_| {
        draft.set(WireDraft::create());
        state.update(WiresState::open_create);
    };
    let on_view = Callback::new(move |id: String| {
        state.update(|s| {
            s.open_detail(&id);
        });
    });
    let on_edit = Callback::new(move |id: String| {
        let mut found = None;
        state.update(|s| found = s.open_edit(&id));
        if let Some(wire) = found {
            draft.set(WireDraft::edit(&wire));
        }
    });
    let on_execute = Callback::new(move |id: String| {
        state.update(|s| {
            s.open_execute(&id);
        });
    });
    let on_delete = Callback::new(move |id: String| state.update(|s| s.request_delete(&id)));

    let config_save = config.clone();
    let on_save = Callback::new(move |wire: Wire| {
        let editing = draft.with_untracked(WireDraft::is_edit);
        draft.update(WireDraft::begin_save);
        let config = config_save.clone();
        spawn_local(async move {
            let result = if editing {
                api::update_wire(&config, &wire).await
            } else {
                api::create_wire(&config, &wire).await
            };
            match result {
                Ok(()) => {
                    state.update(WiresState::close_modal);
                    ui.update(|u| {
                        u.notify(NoticeKind::Success, saved_message("Wire", &wire.wire_id, editing));
                    });
                    load_wires(config, state);
                }
                Err(e) => draft.update(|d| d.save_failed(e.to_string())),
            }
        });
    });

    let config_delete = config;
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = state.with_untracked(|s| s.pending_delete().map(ToOwned::to_owned)) else {
            return;
        };
        state.update(|s| s.delete_pending = true);
        let config = config_delete.clone();
        spawn_local(async move {
            match api::delete_wire(&config, &id).await {
                Ok(()) => {
                    state.update(WiresState::close_modal);
                    ui.update(|u| {
                        u.notify(NoticeKind::Success, deleted_message("Wire", &id));
                    });
                    load_wires(config, state);
                }
                Err(e) => {
                    ui.update(|u| {
                        u.notify(NoticeKind::Error, e.to_string());
                    });
                    state.update(|s| s.delete_failed(e.to_string()));
                }
            }
        });
    });

    let modal = Memo::new(move |_| state.with(|s| s.modal.clone()));
    let wire_by_id = move |id: &str| state.with_untracked(|s| find_wire(&s.items, id).cloned());

    view! {
        <div class="page__wires">
            <header class="page__header">
                <h1>"Wires"</h1>
                <button class="btn btn--primary" on:click=on_create>
                    "+ Create Wire"
                </button>
            </header>

            <ErrorBanner
                message=Signal::derive(move || state.with(|s| s.error.clone()))
                on_retry=on_retry
                on_dismiss=on_dismiss
            />

            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <LoadingSpinner label="Loading wires..." /> }>
                <WireList
                    wires=Signal::derive(move || state.with(|s| s.items.clone()))
                    on_view=on_view
                    on_edit=on_edit
                    on_execute=on_execute
                    on_delete=on_delete
                />
            </Show>

            {move || match modal.get() {
                WiresModal::Closed => ().into_any(),
                WiresModal::Create | WiresModal::Edit(_) => {
                    view! { <WireForm draft=draft on_submit=on_save on_cancel=on_close /> }.into_any()
                }
                WiresModal::Detail(_) => match state.with_untracked(|s| s.detail_wire().cloned()) {
                    Some(wire) => {
                        view! { <WireDetail wire=wire on_close=on_close on_edit=on_edit on_execute=on_execute /> }
                            .into_any()
                    }
                    None => ().into_any(),
                },
                WiresModal::Execute(id) => match wire_by_id(&id) {
                    Some(wire) => {
                        let form = RwSignal::new(ExecuteForm::for_wire(&wire));
                        view! { <ExecuteModal form=form on_close=on_close /> }.into_any()
                    }
                    None => ().into_any(),
                },
                WiresModal::ConfirmDelete(id) => {
                    view! {
                        <ConfirmDialog
                            title="Delete Wire"
                            message=format!("Permanently delete wire \"{id}\"? Wireflows that use it will stop working.")
                            pending=Signal::derive(move || state.with(|s| s.delete_pending))
                            on_confirm=on_delete_confirm
                            on_cancel=on_close
                        />
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
