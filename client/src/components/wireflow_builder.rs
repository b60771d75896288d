//! Three-step wireflow builder dialog.
//!
//! DESIGN
//! ======
//! All list edits go through [`WireflowBuilder`]; this module only maps DOM
//! drag events onto `DragSource`/`DropTarget` pairs. The active drag is kept
//! in a signal, with the `DataTransfer` token as a fallback when the browser
//! delivers `dragend` before `drop`.
//!
//! Selected rows are keyed by their step key, so handlers look their index
//! up at event time rather than capturing it.

use leptos::ev::DragEvent;
use leptos::prelude::*;
use uuid::Uuid;
use wires::Wireflow;

use crate::components::modal::Modal;
use crate::state::builder::{BuilderStep, DragSource, DropTarget, WireflowBuilder};
#[cfg(feature = "hydrate")]
use crate::util::drag;

const STEPS: [BuilderStep; 3] = [BuilderStep::Details, BuilderStep::Wires, BuilderStep::Review];

/// Builder dialog. `on_save` receives the finished wireflow.
#[component]
pub fn WireflowBuilderModal(
    builder: RwSignal<WireflowBuilder>,
    on_save: Callback<Wireflow>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = if builder.with_untracked(WireflowBuilder::is_edit) {
        format!("Edit Wireflow: {}", builder.with_untracked(|b| b.wireflow_id.clone()))
    } else {
        "Create Wireflow".to_owned()
    };
    let step = move || builder.with(|b| b.step);
    let saving = move || builder.with(|b| b.saving);

    let on_next = move |_| {
        builder.update(|b| {
            let _ = b.next();
        });
    };
    let on_back = move |_| {
        builder.update(|b| {
            b.back();
        });
    };
    let on_submit = move |_| {
        if builder.with_untracked(|b| b.saving) {
            return;
        }
        match builder.with_untracked(WireflowBuilder::to_wireflow) {
            Ok(wireflow) => on_save.run(wireflow),
            Err(e) => builder.update(|b| b.error = Some(e.to_string())),
        }
    };

    view! {
        <Modal title=title on_close=on_cancel wide=true>
            <ol class="builder-steps">
                {STEPS
                    .into_iter()
                    .map(|s| {
                        view! {
                            <li
                                class="builder-steps__item"
                                class:builder-steps__item--active=move || step() == s
                                class:builder-steps__item--done={move || step().number() > s.number()}
                            >
                                <span class="builder-steps__number">{s.number()}</span>
                                {s.label()}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>

            {move || match step() {
                BuilderStep::Details => view! { <DetailsStep builder=builder /> }.into_any(),
                BuilderStep::Wires => view! { <WiresStep builder=builder /> }.into_any(),
                BuilderStep::Review => view! { <ReviewStep builder=builder /> }.into_any(),
            }}

            {move || builder.with(|b| b.error.clone()).map(|e| view! { <p class="dialog__error">{e}</p> })}

            <div class="dialog__actions">
                <button class="btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <Show when=move || step() != BuilderStep::Details>
                    <button class="btn" on:click=on_back>
                        "Back"
                    </button>
                </Show>
                <Show
                    when=move || step() == BuilderStep::Review
                    fallback=move || {
                        view! {
                            <button class="btn btn--primary" on:click=on_next>
                                "Next"
                            </button>
                        }
                    }
                >
                    <button class="btn btn--primary" disabled=saving on:click=on_submit>
                        {move || if saving() { "Saving..." } else { "Save Wireflow" }}
                    </button>
                </Show>
            </div>
        </Modal>
    }
}

#[component]
fn DetailsStep(builder: RwSignal<WireflowBuilder>) -> impl IntoView {
    let editing = builder.with_untracked(WireflowBuilder::is_edit);
    view! {
        <div class="builder-details">
            <label class="dialog__label">
                "Wireflow ID"
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="e.g. summarize_then_translate"
                    disabled=editing
                    prop:value=move || builder.with(|b| b.wireflow_id.clone())
                    on:input=move |ev| builder.update(|b| b.set_wireflow_id(event_target_value(&ev)))
                />
            </label>
            <label class="dialog__label">
                "Description"
                <textarea
                    class="dialog__input dialog__textarea"
                    rows="3"
                    prop:value=move || builder.with(|b| b.description.clone())
                    on:input=move |ev| builder.update(|b| b.set_description(event_target_value(&ev)))
                ></textarea>
            </label>
        </div>
    }
}

fn start_drag(dragging: RwSignal<Option<DragSource>>, ev: &DragEvent, source: DragSource) {
    #[cfg(feature = "hydrate")]
    drag::write_event(ev, &source);
    #[cfg(not(feature = "hydrate"))]
    let _ = ev;
    dragging.set(Some(source));
}

fn finish_drag(
    builder: RwSignal<WireflowBuilder>,
    dragging: RwSignal<Option<DragSource>>,
    ev: &DragEvent,
    target: DropTarget,
) {
    ev.prevent_default();
    ev.stop_propagation();
    let source = dragging.get_untracked();
    dragging.set(None);
    #[cfg(feature = "hydrate")]
    let source = source.or_else(|| drag::read_event(ev));
    if let Some(source) = source {
        builder.update(|b| b.drop_wire(source, target));
    }
}

#[component]
fn WiresStep(builder: RwSignal<WireflowBuilder>) -> impl IntoView {
    let dragging = RwSignal::new(None::<DragSource>);
    let allow_drop = move |ev: DragEvent| ev.prevent_default();
    let end_drag = move |_: DragEvent| dragging.set(None);

    view! {
        <div class="builder-columns">
            <section
                class="builder-column"
                on:dragover=allow_drop
                on:drop=move |ev: DragEvent| finish_drag(builder, dragging, &ev, DropTarget::Available)
            >
                <h3 class="builder-column__title">"Available Wires"</h3>
                <Show
                    when=move || builder.with(|b| !b.available.is_empty())
                    fallback=|| view! { <p class="empty-state">"No wires exist yet."</p> }
                >
                    <ul class="builder-list">
                        <For
                            each=move || builder.with(|b| b.available.clone())
                            key=|wire| wire.wire_id.clone()
                            children=move |wire| {
                                let drag_id = wire.wire_id.clone();
                                let add_id = wire.wire_id.clone();
                                view! {
                                    <li
                                        class="builder-card"
                                        draggable="true"
                                        on:dragstart=move |ev: DragEvent| {
                                            start_drag(dragging, &ev, DragSource::Available(drag_id.clone()));
                                        }
                                        on:dragend=end_drag
                                    >
                                        <div class="builder-card__body">
                                            <strong>{wire.wire_id}</strong>
                                            <span class="builder-card__meta">{wire.description}</span>
                                        </div>
                                        <button
                                            class="btn btn--small"
                                            title="Add to wireflow"
                                            on:click=move |_| builder.update(|b| b.append_wire(&add_id))
                                        >
                                            "Add"
                                        </button>
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </section>

            <section
                class="builder-column builder-column--selected"
                class:builder-column--dragging=move || dragging.with(Option::is_some)
                on:dragover=allow_drop
                on:drop=move |ev: DragEvent| {
                    let end = builder.with_untracked(|b| b.selected.len());
                    finish_drag(builder, dragging, &ev, DropTarget::Selected(end));
                }
            >
                <h3 class="builder-column__title">"Selected Wires"</h3>
                <Show when=move || builder.with(|b| b.selected.is_empty())>
                    <p class="builder-column__placeholder">"Drag wires here to build the flow."</p>
                </Show>
                <ol class="builder-list">
                    <For
                        each=move || builder.with(|b| b.selected.iter().map(|s| s.key).collect::<Vec<_>>())
                        key=|key| *key
                        children=move |key| view! { <SelectedCard builder=builder dragging=dragging step_key=key /> }
                    />
                </ol>
            </section>
        </div>
    }
}

#[component]
fn SelectedCard(
    builder: RwSignal<WireflowBuilder>,
    dragging: RwSignal<Option<DragSource>>,
    step_key: Uuid,
) -> impl IntoView {
    let key = step_key;
    let index = move || builder.with(|b| b.selected.iter().position(|s| s.key == key));
    let field = move |f: fn(&wires::WireflowStep) -> String| {
        builder.with(|b| b.selected.iter().find(|s| s.key == key).map(|s| f(&s.step)).unwrap_or_default())
    };
    let count = move || builder.with(|b| b.selected.len());

    view! {
        <li
            class="builder-card builder-card--selected"
            draggable="true"
            on:dragstart=move |ev: DragEvent| {
                if let Some(i) = index() {
                    start_drag(dragging, &ev, DragSource::Selected(i));
                }
            }
            on:dragend=move |_: DragEvent| dragging.set(None)
            on:dragover=move |ev: DragEvent| ev.prevent_default()
            on:drop=move |ev: DragEvent| {
                if let Some(i) = index() {
                    finish_drag(builder, dragging, &ev, DropTarget::Selected(i));
                }
            }
        >
            <div class="builder-card__header">
                <span class="builder-card__position">{move || index().map_or(0, |i| i + 1)}</span>
                <strong>{move || field(|s| s.wire_id.clone())}</strong>
                <span class="builder-card__meta">"→ " {move || field(|s| s.output_key.clone())}</span>
                <span class="builder-card__spacer"></span>
                <button
                    class="btn btn--small btn--ghost"
                    title="Move up"
                    disabled=move || index() == Some(0)
                    on:click=move |_| {
                        if let Some(i) = index().filter(|i| *i > 0) {
                            builder.update(|b| b.move_step(i, i - 1));
                        }
                    }
                >
                    "↑"
                </button>
                <button
                    class="btn btn--small btn--ghost"
                    title="Move down"
                    disabled=move || index().is_none_or(|i| i + 1 >= count())
                    on:click=move |_| {
                        if let Some(i) = index() {
                            builder.update(|b| b.move_step(i, i + 1));
                        }
                    }
                >
                    "↓"
                </button>
                <button
                    class="btn btn--small btn--ghost"
                    title="Remove"
                    on:click=move |_| {
                        if let Some(i) = index() {
                            builder.update(|b| b.remove_step(i));
                        }
                    }
                >
                    "×"
                </button>
            </div>
            <For
                each=move || {
                    builder
                        .with(|b| {
                            b.selected
                                .iter()
                                .find(|s| s.key == key)
                                .map(|s| s.step.inputs.keys().cloned().collect::<Vec<_>>())
                                .unwrap_or_default()
                        })
                }
                key=|name| name.clone()
                children=move |name| view! { <StepInput builder=builder step_key=key name=name /> }
            />
        </li>
    }
}

#[component]
fn StepInput(builder: RwSignal<WireflowBuilder>, step_key: Uuid, name: String) -> impl IntoView {
    let key = step_key;
    let index = move || builder.with(|b| b.selected.iter().position(|s| s.key == key));
    let hint = builder.with_untracked(|b| {
        b.selected
            .iter()
            .position(|s| s.key == key)
            .and_then(|i| b.wire_for(i))
            .and_then(|w| w.inputs.get(&name).cloned())
            .filter(|h| !h.is_empty())
            .unwrap_or_else(|| "leave blank to ask at execution, or {output_key}".to_owned())
    });
    let read_name = name.clone();
    let write_name = name.clone();

    view! {
        <label class="builder-input">
            <span class="builder-input__name">{name}</span>
            <input
                class="dialog__input"
                type="text"
                placeholder=hint
                prop:value=move || {
                    builder
                        .with(|b| {
                            b.selected
                                .iter()
                                .find(|s| s.key == key)
                                .and_then(|s| s.step.inputs.get(&read_name).cloned())
                                .unwrap_or_default()
                        })
                }
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    if let Some(i) = index() {
                        builder.update(|b| b.set_step_input(i, &write_name, value));
                    }
                }
            />
        </label>
    }
}

#[component]
fn ReviewStep(builder: RwSignal<WireflowBuilder>) -> impl IntoView {
    let preview = builder.with_untracked(WireflowBuilder::preview);
    let links = preview.links();
    let required = preview.required_inputs();
    let step_name = |wireflow: &Wireflow, index: usize| {
        wireflow.wires.get(index).map(|s| format!("{}. {}", index + 1, s.wire_id)).unwrap_or_default()
    };
    let link_rows = links
        .iter()
        .map(|link| {
            format!(
                "{} `{}` ← {} output",
                step_name(&preview, link.step),
                link.input,
                step_name(&preview, link.source)
            )
        })
        .collect::<Vec<_>>();

    view! {
        <div class="builder-review">
            <dl class="detail">
                <dt>"Wireflow ID"</dt>
                <dd><code>{preview.wireflow_id.clone()}</code></dd>
                <dt>"Description"</dt>
                <dd>{preview.description.clone()}</dd>
            </dl>
            <h3>"Steps"</h3>
            {if preview.wires.is_empty() {
                view! { <p class="dialog__warning">"No wires selected."</p> }.into_any()
            } else {
                view! {
                    <ol class="builder-review__steps">
                        {preview
                            .wires
                            .iter()
                            .map(|step| {
                                let inputs = step
                                    .inputs
                                    .iter()
                                    .map(|(k, v)| if v.is_empty() { k.clone() } else { format!("{k} = {v}") })
                                    .collect::<Vec<_>>()
                                    .join(", ");
                                view! {
                                    <li>
                                        <strong>{step.wire_id.clone()}</strong>
                                        " → "
                                        <code>{step.output_key.clone()}</code>
                                        <span class="builder-card__meta">{inputs}</span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ol>
                }
                    .into_any()
            }}
            {(!link_rows.is_empty())
                .then(|| {
                    view! {
                        <h3>"Links"</h3>
                        <ul class="builder-review__links">
                            {link_rows.into_iter().map(|row| view! { <li>{row}</li> }).collect::<Vec<_>>()}
                        </ul>
                    }
                })}
            <p class="dialog__hint">
                {if required.is_empty() {
                    "Execution needs no inputs.".to_owned()
                } else {
                    format!("Execution will ask for: {}", required.join(", "))
                }}
            </p>
        </div>
    }
}
