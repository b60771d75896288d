//! Create/edit wire dialog.

use leptos::prelude::*;
use wires::{Wire, prompt_placeholders};

use crate::components::modal::Modal;
use crate::state::wire_form::WireDraft;

/// Controlled form over `draft`. Validation runs here; `on_submit` receives
/// a complete wire and performs the request.
#[component]
pub fn WireForm(draft: RwSignal<WireDraft>, on_submit: Callback<Wire>, on_cancel: Callback<()>) -> impl IntoView {
    let editing = draft.with_untracked(WireDraft::is_edit);
    let title = if editing {
        format!("Edit Wire: {}", draft.with_untracked(|d| d.wire_id.clone()))
    } else {
        "Create Wire".to_owned()
    };

    let submit = Callback::new(move |()| {
        if draft.with_untracked(|d| d.saving) {
            return;
        }
        match draft.with_untracked(WireDraft::to_wire) {
            Ok(wire) => on_submit.run(wire),
            Err(e) => draft.update(|d| d.error = Some(e.to_string())),
        }
    });

    let undeclared = move || {
        draft.with(|d| {
            prompt_placeholders(&d.prompt)
                .into_iter()
                .filter(|name| !d.inputs.iter().any(|field| field.name.trim() == name))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Modal title=title on_close=on_cancel>
            <form
                class="form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <label class="dialog__label">
                    "Wire ID"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g. summarize_text"
                        disabled=editing
                        prop:value=move || draft.with(|d| d.wire_id.clone())
                        on:input=move |ev| draft.update(|d| d.set_wire_id(event_target_value(&ev)))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| draft.update(|d| d.set_description(event_target_value(&ev)))
                    />
                </label>
                <label class="dialog__label">
                    "Prompt"
                    <textarea
                        class="dialog__input dialog__textarea"
                        rows="5"
                        placeholder="Summarize the following text: {text}"
                        prop:value=move || draft.with(|d| d.prompt.clone())
                        on:input=move |ev| draft.update(|d| d.set_prompt(event_target_value(&ev)))
                    ></textarea>
                </label>
                <Show when=move || !undeclared().is_empty()>
                    <p class="dialog__warning">
                        "Prompt uses undeclared inputs: "
                        {move || undeclared().join(", ")}
                        " "
                        <button
                            class="btn btn--small"
                            type="button"
                            on:click=move |_| {
                                draft.update(|d| {
                                    d.sync_inputs_from_prompt();
                                });
                            }
                        >
                            "Add them"
                        </button>
                    </p>
                </Show>

                <fieldset class="form__inputs">
                    <legend>"Inputs"</legend>
                    <For
                        each=move || 0..draft.with(|d| d.inputs.len())
                        key=|index| *index
                        children=move |index| {
                            view! {
                                <div class="form__input-row">
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        placeholder="name"
                                        prop:value=move || {
                                            draft.with(|d| d.inputs.get(index).map(|f| f.name.clone()).unwrap_or_default())
                                        }
                                        on:input=move |ev| draft.update(|d| d.rename_input(index, event_target_value(&ev)))
                                    />
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        placeholder="placeholder text"
                                        prop:value=move || {
                                            draft
                                                .with(|d| {
                                                    d.inputs.get(index).map(|f| f.placeholder.clone()).unwrap_or_default()
                                                })
                                        }
                                        on:input=move |ev| {
                                            draft.update(|d| d.set_input_placeholder(index, event_target_value(&ev)));
                                        }
                                    />
                                    <button
                                        class="btn btn--small btn--ghost"
                                        type="button"
                                        title="Remove input"
                                        on:click=move |_| draft.update(|d| d.remove_input(index))
                                    >
                                        "×"
                                    </button>
                                </div>
                            }
                        }
                    />
                    <button class="btn btn--small" type="button" on:click=move |_| draft.update(WireDraft::add_input)>
                        "+ Add Input"
                    </button>
                </fieldset>

                <label class="dialog__label">
                    "Output Key"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="e.g. summary"
                        prop:value=move || draft.with(|d| d.output_key.clone())
                        on:input=move |ev| draft.update(|d| d.set_output_key(event_target_value(&ev)))
                    />
                </label>

                {move || draft.with(|d| d.error.clone()).map(|e| view! { <p class="dialog__error">{e}</p> })}

                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || draft.with(|d| d.saving)>
                        {move || if draft.with(|d| d.saving) { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
