//! Drag payload encoding for the wireflow builder.
//!
//! The builder tracks the active drag in a signal; the same source is also
//! written to `DataTransfer` as a short text token so drops still resolve if
//! the signal was cleared by a `dragend` racing the `drop`.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::state::builder::DragSource;

/// MIME type used with `DataTransfer::set_data`.
pub const DRAG_MIME: &str = "text/plain";

const AVAILABLE_PREFIX: &str = "available:";
const SELECTED_PREFIX: &str = "selected:";

/// Encode a drag source as `available:<wire_id>` or `selected:<index>`.
#[must_use]
pub fn drag_token(source: &DragSource) -> String {
    match source {
        DragSource::Available(wire_id) => format!("{AVAILABLE_PREFIX}{wire_id}"),
        DragSource::Selected(index) => format!("{SELECTED_PREFIX}{index}"),
    }
}

/// Decode a token produced by [`drag_token`]. Foreign payloads (files,
/// text dragged from elsewhere) decode to `None`.
#[must_use]
pub fn parse_drag_token(token: &str) -> Option<DragSource> {
    if let Some(wire_id) = token.strip_prefix(AVAILABLE_PREFIX) {
        if wire_id.is_empty() {
            return None;
        }
        return Some(DragSource::Available(wire_id.to_owned()));
    }
    let index = token.strip_prefix(SELECTED_PREFIX)?;
    index.parse().ok().map(DragSource::Selected)
}

/// Store `source` on a drag event's `DataTransfer`.
#[cfg(feature = "hydrate")]
pub fn write_event(ev: &web_sys::DragEvent, source: &DragSource) {
    if let Some(dt) = ev.data_transfer() {
        let _ = dt.set_data(DRAG_MIME, &drag_token(source));
        dt.set_effect_allowed("move");
    }
}

/// Read a source back from a drop event.
#[cfg(feature = "hydrate")]
pub fn read_event(ev: &web_sys::DragEvent) -> Option<DragSource> {
    let dt = ev.data_transfer()?;
    let token = dt.get_data(DRAG_MIME).ok()?;
    parse_drag_token(&token)
}
