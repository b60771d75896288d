//! Wire table with per-row actions.

use leptos::prelude::*;
use wires::Wire;

#[component]
pub fn WireList(
    #[prop(into)] wires: Signal<Vec<Wire>>,
    on_view: Callback<String>,
    on_edit: Callback<String>,
    on_execute: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || wires.with(|w| !w.is_empty())
            fallback=|| view! { <p class="empty-state">"No wires yet. Create one to get started."</p> }
        >
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Wire ID"</th>
                        <th>"Description"</th>
                        <th>"Inputs"</th>
                        <th>"Output Key"</th>
                        <th class="data-table__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || wires.get()
                        key=|wire| wire.wire_id.clone()
                        children=move |wire| {
                            let inputs = wire.inputs.keys().cloned().collect::<Vec<_>>().join(", ");
                            let id = wire.wire_id.clone();
                            let (view_id, edit_id, exec_id, delete_id) = (id.clone(), id.clone(), id.clone(), id);
                            view! {
                                <tr>
                                    <td class="data-table__id">{wire.wire_id}</td>
                                    <td>{wire.description}</td>
                                    <td class="data-table__muted">{inputs}</td>
                                    <td><code>{wire.output_key}</code></td>
                                    <td class="data-table__actions">
                                        <button class="btn btn--small" on:click=move |_| on_view.run(view_id.clone())>
                                            "View"
                                        </button>
                                        <button class="btn btn--small" on:click=move |_| on_edit.run(edit_id.clone())>
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn--small btn--primary"
                                            on:click=move |_| on_execute.run(exec_id.clone())
                                        >
                                            "Execute"
                                        </button>
                                        <button
                                            class="btn btn--small btn--danger"
                                            on:click=move |_| on_delete.run(delete_id.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </Show>
    }
}
