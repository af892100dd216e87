//! # Document Model
//!
//! The ordered list of placed components plus the selection pointer.
//!
//! The document offers read access only; every change flows through
//! [`Mutation::apply`](crate::Mutation::apply), which keeps the invariants:
//! - every id in the sequence is unique
//! - the selection, when set by a delete-aware path, never dangles
//!
//! Documents are only built in code, never decoded, so no outside JSON can
//! bring in duplicate ids or a dangling selection.
//! - an instance's property keys are fixed by its kind

use crate::component::{ComponentInstance, ComponentProps};
use crate::id_generator::IDGenerator;
use crate::kind::{DEFAULT_BUTTON_BACKGROUND, DEFAULT_BUTTON_TEXT_COLOR};
use serde::Serialize;
use std::collections::HashSet;
use tracing::warn;

/// Editable site document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Canvas order, top to bottom
    #[serde(rename = "components")]
    pub(crate) sequence: Vec<ComponentInstance>,

    pub(crate) selected_id: Option<String>,

    /// Increments on each mutation that changed state
    #[serde(skip)]
    pub version: u64,
}

impl Document {
    /// Blank document, nothing selected
    pub fn empty() -> Self {
        Self::default()
    }

    /// Starter document shown when a session opens: a heading, a paragraph
    /// and a button, with nothing selected
    pub fn seeded(ids: &mut IDGenerator) -> Self {
        let sequence = vec![
            ComponentInstance::new(
                ids.new_id(),
                ComponentProps::Heading {
                    text: "Welcome to Your Website".to_string(),
                },
            ),
            ComponentInstance::new(
                ids.new_id(),
                ComponentProps::Paragraph {
                    text: "This is a paragraph. Click on an element to edit its properties on the right. You can also drag and drop to reorder!".to_string(),
                },
            ),
            ComponentInstance::new(
                ids.new_id(),
                ComponentProps::Button {
                    text: "Learn More".to_string(),
                    background_color: DEFAULT_BUTTON_BACKGROUND.to_string(),
                    text_color: DEFAULT_BUTTON_TEXT_COLOR.to_string(),
                },
            ),
        ];

        Self {
            sequence,
            selected_id: None,
            version: 0,
        }
    }

    /// Build a document from existing instances (no selection). Only the
    /// first instance with a given id is kept.
    pub fn from_components(components: Vec<ComponentInstance>) -> Self {
        let mut seen = HashSet::new();
        let sequence = components
            .into_iter()
            .filter(|c| {
                let fresh = seen.insert(c.id().to_string());
                if !fresh {
                    warn!(id = %c.id(), "Dropping instance with a duplicate id");
                }
                fresh
            })
            .collect();

        Self {
            sequence,
            selected_id: None,
            version: 0,
        }
    }

    pub fn sequence(&self) -> &[ComponentInstance] {
        &self.sequence
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// The selected instance, if the selection names a live one
    pub fn selected(&self) -> Option<&ComponentInstance> {
        self.selected_id().and_then(|id| self.find(id))
    }

    pub fn find(&self, id: &str) -> Option<&ComponentInstance> {
        self.sequence.iter().find(|c| c.id() == id)
    }

    pub(crate) fn find_mut(&mut self, id: &str) -> Option<&mut ComponentInstance> {
        self.sequence.iter_mut().find(|c| c.id() == id)
    }

    /// Index of the instance in canvas order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.sequence.iter().position(|c| c.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.sequence.iter().map(|c| c.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
