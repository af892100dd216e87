//! # Document Mutations
//!
//! The five operations that change a [`Document`]. They are the only write
//! path into the model.
//!
//! ## Mutation Semantics
//!
//! Every mutation is total: invalid input (unknown id, self-move, duplicate
//! id) leaves the document untouched and reports
//! [`Outcome::Unchanged`] instead of failing.
//!
//! ### Add
//! - Inserts a fully formed instance, shifting later instances right
//! - Index is clamped to `[0, len]`
//!
//! ### Move
//! - Places the dragged instance at the drop target's original position
//! - All other instances keep their relative order
//!
//! ### UpdateProps
//! - Shallow merge; names the kind does not define are ignored
//!
//! ### Select
//! - Unconditional set, no existence check
//!
//! ### Delete
//! - Removes the instance and clears the selection if it pointed at it

use crate::component::ComponentInstance;
use crate::document::Document;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Operations dispatched by the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum Mutation {
    /// Insert a new instance at index
    Add {
        component: ComponentInstance,
        index: usize,
    },

    /// Move the dragged instance to the drop target's position
    Move {
        #[serde(rename = "dragId")]
        drag_id: String,
        #[serde(rename = "dropId")]
        drop_id: String,
    },

    /// Merge property values into an instance
    UpdateProps {
        id: String,
        props: BTreeMap<String, String>,
    },

    /// Set or clear the selection (no existence check)
    Select { id: Option<String> },

    /// Remove an instance
    Delete { id: String },
}

/// Why a mutation left the document as it was
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NoOpReason {
    /// An id did not match any instance
    UnknownId,
    /// Move onto itself
    SameInstance,
    /// Move that would put the instance back where it already is
    SamePosition,
    /// Add with an id that is already placed
    DuplicateId,
    /// Update carried no name the kind defines, or no names at all
    NoRecognizedProps,
    /// Select of the value already selected
    SameSelection,
    /// Delete declined at the confirmation prompt
    Cancelled,
    /// Drop with no meaning for its target
    InvalidDrop,
    /// Canvas click already handled by an instance click
    ClickHandled,
}

/// Result of applying a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Outcome {
    Applied,
    Unchanged(NoOpReason),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

impl Mutation {
    /// Debug name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Add { .. } => "add",
            Mutation::Move { .. } => "move",
            Mutation::UpdateProps { .. } => "update_props",
            Mutation::Select { .. } => "select",
            Mutation::Delete { .. } => "delete",
        }
    }

    /// Apply mutation to the document. Never fails; bumps the document
    /// version when state changed.
    pub fn apply(&self, doc: &mut Document) -> Outcome {
        let outcome = match self {
            Mutation::Add { component, index } => Self::apply_add(doc, component, *index),

            Mutation::Move { drag_id, drop_id } => Self::apply_move(doc, drag_id, drop_id),

            Mutation::UpdateProps { id, props } => Self::apply_update_props(doc, id, props),

            Mutation::Select { id } => Self::apply_select(doc, id.as_deref()),

            Mutation::Delete { id } => Self::apply_delete(doc, id),
        };

        match outcome {
            Outcome::Applied => {
                doc.version += 1;
                debug!(mutation = self.name(), version = doc.version, "Applied mutation");
            }
            Outcome::Unchanged(reason) => {
                debug!(mutation = self.name(), ?reason, "Mutation left document unchanged");
            }
        }

        outcome
    }

    fn apply_add(doc: &mut Document, component: &ComponentInstance, index: usize) -> Outcome {
        if doc.contains(component.id()) {
            return Outcome::Unchanged(NoOpReason::DuplicateId);
        }

        let insert_index = index.min(doc.sequence.len());
        doc.sequence.insert(insert_index, component.clone());
        Outcome::Applied
    }

    fn apply_move(doc: &mut Document, drag_id: &str, drop_id: &str) -> Outcome {
        let (drag_index, mut drop_index) = match (doc.position(drag_id), doc.position(drop_id)) {
            (Some(drag), Some(drop)) => (drag, drop),
            _ => {
                warn!(%drag_id, %drop_id, "Move references an instance that is not on the canvas");
                return Outcome::Unchanged(NoOpReason::UnknownId);
            }
        };

        if drag_index == drop_index {
            return Outcome::Unchanged(NoOpReason::SameInstance);
        }

        let dragged = doc.sequence.remove(drag_index);

        // Removal shifted everything after the drag source left by one
        if drag_index < drop_index {
            drop_index -= 1;
        }

        if drop_index == drag_index {
            doc.sequence.insert(drag_index, dragged);
            return Outcome::Unchanged(NoOpReason::SamePosition);
        }

        doc.sequence.insert(drop_index, dragged);
        Outcome::Applied
    }

    fn apply_update_props(
        doc: &mut Document,
        id: &str,
        props: &BTreeMap<String, String>,
    ) -> Outcome {
        let Some(instance) = doc.find_mut(id) else {
            return Outcome::Unchanged(NoOpReason::UnknownId);
        };

        let kind = instance.kind();
        let mut changed = false;
        for (name, value) in props {
            if !kind.recognizes(name) {
                debug!(%id, %kind, property = %name, "Ignoring property the kind does not define");
                continue;
            }
            changed |= instance.props_mut().set(name, value.as_str());
        }

        if changed {
            Outcome::Applied
        } else {
            Outcome::Unchanged(NoOpReason::NoRecognizedProps)
        }
    }

    fn apply_select(doc: &mut Document, id: Option<&str>) -> Outcome {
        if doc.selected_id.as_deref() == id {
            return Outcome::Unchanged(NoOpReason::SameSelection);
        }

        doc.selected_id = id.map(str::to_string);
        Outcome::Applied
    }

    fn apply_delete(doc: &mut Document, id: &str) -> Outcome {
        let before = doc.sequence.len();
        doc.sequence.retain(|c| c.id() != id);
        let removed = doc.sequence.len() != before;

        // Runs whether or not anything was removed
        let cleared = doc.selected_id.as_deref() == Some(id);
        if cleared {
            doc.selected_id = None;
        }

        if removed || cleared {
            Outcome::Applied
        } else {
            Outcome::Unchanged(NoOpReason::UnknownId)
        }
    }
}
