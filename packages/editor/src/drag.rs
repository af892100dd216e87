//! # Drag-Reorder Protocol
//!
//! Maps drag-and-drop gestures onto mutations. Two gestures share the same
//! transport but carry different payloads:
//!
//! ```text
//! palette entry  --(kind token)-->  canvas background  = create + append
//! canvas item    --(instance id)--> another canvas item = move
//! anything else                                         = nothing
//! ```

use crate::kind::ComponentKind;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Transfer key set by palette entries
pub const TRANSFER_KIND_KEY: &str = "componentType";

/// Transfer key set by rendered instances
pub const TRANSFER_ID_KEY: &str = "componentId";

/// What is being dragged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DragPayload {
    /// A palette entry; carries only the kind
    PaletteKind(ComponentKind),
    /// An existing instance; carries its id
    Instance(String),
}

impl DragPayload {
    /// Decode a payload from drag transfer data (key → value lookup).
    /// An instance id wins over a kind token; unknown kind tokens decode to
    /// nothing.
    pub fn from_transfer<F>(get: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(id) = get(TRANSFER_ID_KEY).filter(|id| !id.is_empty()) {
            return Some(DragPayload::Instance(id));
        }

        let token = get(TRANSFER_KIND_KEY).filter(|token| !token.is_empty())?;
        match token.parse::<ComponentKind>() {
            Ok(kind) => Some(DragPayload::PaletteKind(kind)),
            Err(err) => {
                debug!(%token, error = %err, "Ignoring drag with unknown kind token");
                None
            }
        }
    }
}

/// Where the payload was released
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DropTarget {
    /// Empty area of the canvas
    CanvasBackground,
    /// A rendered instance
    Instance(String),
    /// Not a valid target
    Outside,
}

/// Mutation intent produced by a drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    /// Build a new instance of the kind and append it
    Create(ComponentKind),
    /// Move `drag_id` to `drop_id`'s position
    Reorder { drag_id: String, drop_id: String },
}

/// Decide what a drop does. `None` means the drop is ignored.
pub fn resolve_drop(payload: &DragPayload, target: &DropTarget) -> Option<DropAction> {
    match (payload, target) {
        (DragPayload::PaletteKind(kind), DropTarget::CanvasBackground) => {
            Some(DropAction::Create(*kind))
        }
        (DragPayload::Instance(drag_id), DropTarget::Instance(drop_id)) if drag_id != drop_id => {
            Some(DropAction::Reorder {
                drag_id: drag_id.clone(),
                drop_id: drop_id.clone(),
            })
        }
        _ => None,
    }
}

/// Transient hover highlight for the instance under the pointer.
/// Not part of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropIndicator {
    hovered: Option<String>,
}

impl DropIndicator {
    pub fn enter(&mut self, id: &str) {
        self.hovered = Some(id.to_string());
    }

    /// Clear the highlight if it is still on `id`
    pub fn leave(&mut self, id: &str) {
        if self.hovered.as_deref() == Some(id) {
            self.hovered = None;
        }
    }

    pub fn clear(&mut self) {
        self.hovered = None;
    }

    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.hovered.as_deref() == Some(id)
    }
}
