//! Wireflow table with per-row actions.

use leptos::prelude::*;
use wires::Wireflow;

#[component]
pub fn WireflowList(
    #[prop(into)] wireflows: Signal<Vec<Wireflow>>,
    on_edit: Callback<String>,
    on_execute: Callback<String>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <Show
            when=move || wireflows.with(|w| !w.is_empty())
            fallback=|| view! { <p class="empty-state">"No wireflows yet. Build one from your wires."</p> }
        >
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Wireflow ID"</th>
                        <th>"Description"</th>
                        <th>"Steps"</th>
                        <th class="data-table__actions">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || wireflows.get()
                        key=|flow| flow.wireflow_id.clone()
                        children=move |flow| {
                            let steps = flow.wires.iter().map(|s| s.wire_id.as_str()).collect::<Vec<_>>().join(" → ");
                            let id = flow.wireflow_id.clone();
                            let (edit_id, exec_id, delete_id) = (id.clone(), id.clone(), id);
                            view! {
                                <tr>
                                    <td class="data-table__id">{flow.wireflow_id}</td>
                                    <td>{flow.description}</td>
                                    <td class="data-table__muted">{steps}</td>
                                    <td class="data-table__actions">
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
