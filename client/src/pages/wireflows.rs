//! Wireflows page: list, build, edit, execute and delete wireflows.
//!
//! Fetches wireflows and wires together; the builder offers the fetched
//! wires as its available list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wires::{ApiError, Wire, Wireflow, find_wireflow};

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::error_banner::ErrorBanner;
use crate::components::execute_modal::ExecuteModal;
use crate::components::loading_spinner::LoadingSpinner;
use crate::components::wireflow_builder::WireflowBuilderModal;
use crate::components::wireflow_list::WireflowList;
use crate::net::api;
use crate::pages::{deleted_message, saved_message};
use crate::state::builder::WireflowBuilder;
use crate::state::execute::ExecuteForm;
use crate::state::ui::{NoticeKind, UiState};
use crate::state::wireflows::{WireflowsModal, WireflowsState};
use crate::util::config::ApiConfig;

async fn fetch_all(config: &ApiConfig) -> Result<(Vec<Wireflow>, Vec<Wire>), ApiError> {
    let wireflows = api::list_wireflows(config).await?;
    let wires = api::list_wires(config).await?;
    Ok((wireflows, wires))
}

fn load_wireflows(config: ApiConfig, state: RwSignal<WireflowsState>) {
    state.update(WireflowsState::begin_fetch);
    spawn_local(async move {
        match fetch_all(&config).await {
            Ok((items, wires)) => state.update(|s| s.fetch_succeeded(items, wires)),
            Err(e) => state.update(|s| s.fetch_failed(e.to_string())),
        }
    });
}

#[component]
pub fn WireflowsPage() -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let ui = expect_context::<RwSignal<UiState>>();
    let state = RwSignal::new(WireflowsState::default());
    let builder = RwSignal::new(WireflowBuilder::default());

    let config_load = config.clone();
    Effect::new(move || load_wireflows(config_load.clone(), state));

    let config_retry = config.clone();
    let on_retry = Callback::new(move |()| load_wireflows(config_retry.clone(), state));
    let on_dismiss = Callback::new(move |()| state.update(WireflowsState::dismiss_error));
    let on_close = Callback::new(move |()| state.update(WireflowsState::close_modal));

    let on_create = move |_| {
        builder.set(WireflowBuilder::create(state.with_untracked(|s| s.wires.clone())));
        state.update(WireflowsState::open_create);
    };
    let on_edit = Callback::new(move |id: String| {
        let mut found = None;
        state.update(|s| found = s.open_edit(&id));
        if let Some(wireflow) = found {
            builder.set(WireflowBuilder::edit(&wireflow, state.with_untracked(|s| s.wires.clone())));
        }
    });
    let on_execute = Callback::new(move |id: String| {
        state.update(|s| {
            s.open_execute(&id);
        });
    });
    let on_delete = Callback::new(move |id: String| state.update(|s| s.request_delete(&id)));

    let config_save = config.clone();
    let on_save = Callback::new(move |wireflow: Wireflow| {
        let editing = builder.with_untracked(WireflowBuilder::is_edit);
        builder.update(WireflowBuilder::begin_save);
        let config = config_save.clone();
        spawn_local(async move {
            let result = if editing {
                api::update_wireflow(&config, &wireflow).await
            } else {
                api::create_wireflow(&config, &wireflow).await
            };
            match result {
                Ok(()) => {
                    state.update(WireflowsState::close_modal);
                    ui.update(|u| {
                        u.notify(NoticeKind::Success, saved_message("Wireflow", &wireflow.wireflow_id, editing));
                    });
                    load_wireflows(config, state);
                }
                Err(e) => builder.update(|b| b.save_failed(e.to_string())),
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
            match api::delete_wireflow(&config, &id).await {
                Ok(()) => {
                    state.update(WireflowsState::close_modal);
                    ui.update(|u| {
                        u.notify(NoticeKind::Success, deleted_message("Wireflow", &id));
                    });
                    load_wireflows(config, state);
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

    view! {
        <div class="page__wireflows">
            <header class="page__header">
                <h1>"Wireflows"</h1>
                <button class="btn btn--primary" on:click=on_create>
                    "+ Create Wireflow"
                </button>
            </header>

            <ErrorBanner
                message=Signal::derive(move || state.with(|s| s.error.clone()))
                on_retry=on_retry
                on_dismiss=on_dismiss
            />

            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <LoadingSpinner label="Loading wireflows..." /> }
            >
                <WireflowList
                    wireflows=Signal::derive(move || state.with(|s| s.items.clone()))
                    on_edit=on_edit
                    on_execute=on_execute
                    on_delete=on_delete
                />
            </Show>

            {move || match modal.get() {
                WireflowsModal::Closed => ().into_any(),
                WireflowsModal::Create | WireflowsModal::Edit(_) => {
                    view! { <WireflowBuilderModal builder=builder on_save=on_save on_cancel=on_close /> }.into_any()
                }
                WireflowsModal::Execute(id) => {
                    match state.with_untracked(|s| find_wireflow(&s.items, &id).cloned()) {
                        Some(wireflow) => {
                            let form = RwSignal::new(ExecuteForm::for_wireflow(&wireflow));
                            view! { <ExecuteModal form=form on_close=on_close /> }.into_any()
                        }
                        None => ().into_any(),
                    }
                }
                WireflowsModal::ConfirmDelete(id) => {
                    view! {
                        <ConfirmDialog
                            title="Delete Wireflow"
                            message=format!("Permanently delete wireflow \"{id}\"?")
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
