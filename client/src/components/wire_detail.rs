//! Read-only view of a single wire.

use leptos::prelude::*;
use wires::Wire;

use crate::components::modal::Modal;

#[component]
pub fn WireDetail(wire: Wire, on_close: Callback<()>, on_edit: Callback<String>, on_execute: Callback<String>) -> impl IntoView {
    let undeclared = wire.undeclared_placeholders().join(", ");
    let (edit_id, exec_id) = (wire.wire_id.clone(), wire.wire_id.clone());
    let inputs = wire.inputs.clone().into_iter().collect::<Vec<_>>();
    let has_inputs = !inputs.is_empty();

    view! {
        <Modal title=format!("Wire: {}", wire.wire_id) on_close=on_close>
            <dl class="detail">
                <dt>"Wire ID"</dt>
                <dd><code>{wire.wire_id.clone()}</code></dd>
                <dt>"Description"</dt>
                <dd>{wire.description.clone()}</dd>
                <dt>"Prompt"</dt>
                <dd><pre class="detail__prompt">{wire.prompt.clone()}</pre></dd>
                <dt>"Inputs"</dt>
                <dd>
                    {if has_inputs {
                        view! {
                            <ul class="detail__inputs">
                                {inputs
                                    .into_iter()
                                    .map(|(name, hint)| {
                                        view! {
                                            <li>
                                                <code>{name}</code>
                                                <span class="detail__hint">{hint}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    } else {
                        view! { <span class="detail__hint">"None"</span> }.into_any()
                    }}
                </dd>
                <dt>"Output Key"</dt>
                <dd><code>{wire.output_key.clone()}</code></dd>
            </dl>
            {(!undeclared.is_empty())
                .then(|| {
                    view! { <p class="dialog__warning">"Prompt uses undeclared inputs: " {undeclared}</p> }
                })}
            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
                <button class="btn" on:click=move |_| on_edit.run(edit_id.clone())>
                    "Edit"
                </button>
                <button class="btn btn--primary" on:click=move |_| on_execute.run(exec_id.clone())>
                    "Execute"
                </button>
            </div>
        </Modal>
    }
}
