//! Execute dialog for wires and wireflows.
//!
//! Owns the request: inputs are validated by [`ExecuteForm::submit`] before
//! anything is sent, then the result (or error) replaces the form in place.

use leptos::prelude::*;
use wires::ExecuteResult;

use crate::components::loading_spinner::LoadingSpinner;
use crate::components::modal::Modal;
use crate::net::api;
use crate::state::execute::ExecuteForm;
use crate::util::config::ApiConfig;

#[component]
pub fn ExecuteModal(form: RwSignal<ExecuteForm>, on_close: Callback<()>) -> impl IntoView {
    let config = expect_context::<ApiConfig>();
    let title = form.with_untracked(ExecuteForm::title);

    let submit = Callback::new(move |()| {
        let mut request = None;
        form.update(|f| request = f.submit());
        let Some(request) = request else {
            return;
        };
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match api::execute(&config, &request).await {
                Ok(result) => form.update(|f| f.succeeded(result)),
                Err(e) => form.update(|f| f.failed(e.to_string())),
            }
        });
    });

    let has_result = move || form.with(|f| f.result.is_some());

    view! {
        <Modal title=title on_close=on_close>
            <Show
                when=has_result
                fallback=move || view! { <ExecuteInputs form=form submit=submit on_close=on_close /> }
            >
                <ExecuteOutput form=form on_close=on_close />
            </Show>
        </Modal>
    }
}

#[component]
fn ExecuteInputs(form: RwSignal<ExecuteForm>, submit: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let pending = move || form.with(|f| f.pending);

    view! {
        <form
            class="form"
            on:submit=move |ev| {
                ev.prevent_default();
                submit.run(());
            }
        >
            <Show when=move || form.with(|f| f.fields.is_empty())>
                <p class="dialog__hint">"No inputs required."</p>
            </Show>
            <For
                each=move || form.with(|f| f.fields.iter().map(|x| (x.name.clone(), x.hint.clone())).collect::<Vec<_>>())
                key=|(name, _)| name.clone()
                children=move |(name, hint)| {
                    let read_name = name.clone();
                    let write_name = name.clone();
                    view! {
                        <label class="dialog__label">
                            {name}
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder=hint
                                prop:value=move || {
                                    form.with(|f| {
                                        f.fields
                                            .iter()
                                            .find(|x| x.name == read_name)
                                            .map(|x| x.value.clone())
                                            .unwrap_or_default()
                                    })
                                }
                                on:input=move |ev| form.update(|f| f.set_value(&write_name, event_target_value(&ev)))
                            />
                        </label>
                    }
                }
            />

            {move || form.with(|f| f.error.clone()).map(|e| view! { <p class="dialog__error">{e}</p> })}
            <Show when=pending>
                <LoadingSpinner label="Running..." />
            </Show>

            <div class="dialog__actions">
                <button class="btn" type="button" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button class="btn btn--primary" type="submit" disabled=pending>
                    {move || if pending() { "Running..." } else { "Execute" }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn ExecuteOutput(form: RwSignal<ExecuteForm>, on_close: Callback<()>) -> impl IntoView {
    let show_json = move || form.with(|f| f.show_json);
    let is_error = move || form.with(|f| f.result.as_ref().is_some_and(ExecuteResult::is_error));
    let text = move || {
        form.with(|f| {
            f.result
                .as_ref()
                .map(|r| if f.show_json { r.raw_json() } else { r.display_text() })
                .unwrap_or_default()
        })
    };

    view! {
        <div class="execute-result">
            <h3 class="execute-result__heading">{move || if is_error() { "Error" } else { "Result" }}</h3>
            <pre
                class="execute-result__body"
                class:execute-result__body--error=is_error
                class:execute-result__body--json=show_json
            >
                {text}
            </pre>
        </div>
        <div class="dialog__actions">
            <button class="btn btn--ghost" on:click=move |_| form.update(ExecuteForm::toggle_json)>
                {move || if show_json() { "Hide JSON" } else { "Show JSON" }}
            </button>
            <button class="btn" on:click=move |_| form.update(ExecuteForm::run_again)>
                "Run Again"
            </button>
            <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                "Close"
            </button>
        </div>
    }
}
