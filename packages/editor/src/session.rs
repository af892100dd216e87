//! # Edit Session
//!
//! The owned state container for one open builder. A session holds the
//! document, the id generator, the configuration and the transient drag
//! highlight, and turns UI gestures into mutations.
//!
//! [`EditSession::dispatch`] is the single write path; every gesture
//! handler ends up there.

use crate::component::ComponentInstance;
use crate::config::EditorConfig;
use crate::document::Document;
use crate::drag::{resolve_drop, DragPayload, DropAction, DropIndicator, DropTarget};
use crate::id_generator::IDGenerator;
use crate::kind::ComponentKind;
use crate::mutations::{Mutation, NoOpReason, Outcome};
use crate::render::{render_canvas, RenderOptions, VNode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// What a click landed on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClickTarget {
    Instance(String),
    CanvasBackground,
}

/// Single builder session
pub struct EditSession {
    /// Document being edited
    document: Document,

    ids: IDGenerator,

    config: EditorConfig,

    /// Hover highlight while dragging over an instance
    drop_indicator: DropIndicator,

    /// Set when an instance click already handled the current gesture
    click_consumed: bool,
}

impl EditSession {
    /// Open a session using `config`; the document is seeded unless the
    /// config turns that off
    pub fn new(config: EditorConfig) -> Self {
        let mut ids = IDGenerator::new(&config.session_name);
        let document = if config.seed_document {
            Document::seeded(&mut ids)
        } else {
            Document::empty()
        };

        info!(
            session = %config.session_name,
            components = document.len(),
            "Opened edit session"
        );

        Self {
            document,
            ids,
            config,
            drop_indicator: DropIndicator::default(),
            click_consumed: false,
        }
    }

    /// Session over an existing document
    pub fn with_document(config: EditorConfig, document: Document) -> Self {
        let ids = IDGenerator::new(&config.session_name);
        Self {
            document,
            ids,
            config,
            drop_indicator: DropIndicator::default(),
            click_consumed: false,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn drop_indicator(&self) -> &DropIndicator {
        &self.drop_indicator
    }

    /// Apply a mutation to the session's document
    pub fn dispatch(&mut self, mutation: Mutation) -> Outcome {
        mutation.apply(&mut self.document)
    }

    /// Build an instance of `kind` with a fresh id and default properties
    pub fn create_instance(&mut self, kind: ComponentKind) -> ComponentInstance {
        let id = self.fresh_id();
        ComponentInstance::with_defaults(id, kind)
    }

    // Ids are sequential, but a loaded document may already use the next one
    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.new_id();
            if !self.document.contains(&id) {
                return id;
            }
        }
    }

    /// Append a new instance of `kind` to the end of the canvas
    pub fn add_kind(&mut self, kind: ComponentKind) -> (String, Outcome) {
        let component = self.create_instance(kind);
        let id = component.id().to_string();
        let index = self.document.len();

        let outcome = self.dispatch(Mutation::Add { component, index });
        (id, outcome)
    }

    pub fn update_props<I, K, V>(&mut self, id: &str, props: I) -> Outcome
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.dispatch(Mutation::UpdateProps {
            id: id.to_string(),
            props: props.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        })
    }

    pub fn select(&mut self, id: Option<&str>) -> Outcome {
        self.dispatch(Mutation::Select {
            id: id.map(str::to_string),
        })
    }

    pub fn delete(&mut self, id: &str) -> Outcome {
        self.dispatch(Mutation::Delete { id: id.to_string() })
    }

    /// Delete behind a confirmation gate owned by the caller. `confirm` is
    /// only asked for instances that exist.
    pub fn request_delete<F>(&mut self, id: &str, confirm: F) -> Outcome
    where
        F: FnOnce(&ComponentInstance) -> bool,
    {
        let Some(component) = self.document.find(id) else {
            return Outcome::Unchanged(NoOpReason::UnknownId);
        };

        if !confirm(component) {
            debug!(%id, "Delete cancelled");
            return Outcome::Unchanged(NoOpReason::Cancelled);
        }

        self.delete(id)
    }

    // --- drag gestures ---

    /// Pointer dragged over an instance
    pub fn drag_enter(&mut self, target_id: &str) {
        self.drop_indicator.enter(target_id);
    }

    /// Pointer left an instance
    pub fn drag_leave(&mut self, target_id: &str) {
        self.drop_indicator.leave(target_id);
    }

    /// Drag ended without a usable drop
    pub fn cancel_drag(&mut self) {
        self.drop_indicator.clear();
    }

    /// Payload released over `target`. The highlight clears regardless of
    /// what the drop does.
    pub fn drop(&mut self, payload: &DragPayload, target: &DropTarget) -> Outcome {
        self.drop_indicator.clear();

        match resolve_drop(payload, target) {
            Some(DropAction::Create(kind)) => {
                let (id, outcome) = self.add_kind(kind);
                debug!(%id, %kind, "Created instance from palette drop");
                outcome
            }
            Some(DropAction::Reorder { drag_id, drop_id }) => {
                self.dispatch(Mutation::Move { drag_id, drop_id })
            }
            None => {
                debug!(?payload, ?target, "Ignoring drop");
                Outcome::Unchanged(NoOpReason::InvalidDrop)
            }
        }
    }

    // --- clicks ---

    /// Click on a rendered instance: selects it and claims the gesture so
    /// the canvas click that follows does not deselect
    pub fn click_instance(&mut self, id: &str) -> Outcome {
        self.click_consumed = true;
        self.select(Some(id))
    }

    /// Click on the canvas background: deselects unless an instance click
    /// already handled this gesture. Swallowing the bubbled click closes the
    /// gesture, so the next background click deselects again.
    pub fn click_canvas(&mut self) -> Outcome {
        if std::mem::take(&mut self.click_consumed) {
            return Outcome::Unchanged(NoOpReason::ClickHandled);
        }
        self.select(None)
    }

    /// Close the current click gesture. Needed when the instance click did
    /// not bubble to the canvas.
    pub fn end_gesture(&mut self) {
        self.click_consumed = false;
    }

    /// One complete click gesture. An instance click bubbles to the canvas,
    /// where it is swallowed.
    pub fn click(&mut self, target: &ClickTarget) -> Outcome {
        let outcome = match target {
            ClickTarget::Instance(id) => {
                let outcome = self.click_instance(id);
                self.click_canvas();
                outcome
            }
            ClickTarget::CanvasBackground => self.click_canvas(),
        };
        self.end_gesture();
        outcome
    }

    // --- views ---

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            image_placeholder: self.config.image_placeholder.clone(),
        }
    }

    /// Canvas as visual primitives, including the drag highlight
    pub fn render(&self) -> VNode {
        render_canvas(
            &self.document,
            self.drop_indicator.hovered(),
            &self.render_options(),
        )
    }
}
