//! # Site Builder Editor
//!
//! Core document editing engine for the drag-and-drop site builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ presentation: palette, canvas, properties   │
//! └─────────────────────────────────────────────┘
//!          ↓ gestures            ↑ reads
//! ┌─────────────────────────────────────────────┐
//! │ session: EditSession                        │
//! │  - drag protocol → Add / Move               │
//! │  - clicks → Select                          │
//! │  - properties panel → UpdateProps / Delete  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ mutations: the only write path              │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: ordered instances + selection     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Flat model**: the canvas is an ordered list, no nesting
//! 2. **Total operations**: bad input is a no-op, never an error
//! 3. **Typed kinds**: each kind's property set is fixed by its variant
//! 4. **Owned state**: one session owns one document, no globals
//!
//! ## Usage
//!
//! ```rust
//! use sitebuilder_editor::{ComponentKind, DragPayload, DropTarget, EditSession, EditorConfig};
//!
//! let mut session = EditSession::new(EditorConfig::default());
//!
//! // Drag a Button from the palette onto the canvas
//! session.drop(
//!     &DragPayload::PaletteKind(ComponentKind::Button),
//!     &DropTarget::CanvasBackground,
//! );
//!
//! // Drag the new button above the heading
//! let ids: Vec<String> = session.document().ids().iter().map(|s| s.to_string()).collect();
//! session.drop(
//!     &DragPayload::Instance(ids[3].clone()),
//!     &DropTarget::Instance(ids[0].clone()),
//! );
//!
//! assert_eq!(session.document().sequence()[0].kind(), ComponentKind::Button);
//! ```

mod component;
mod config;
mod document;
mod drag;
mod errors;
mod id_generator;
mod kind;
mod mutations;
mod render;
mod session;

pub use component::{ComponentInstance, ComponentProps};
pub use config::{EditorConfig, DEFAULT_CONFIG_NAME, DEFAULT_IMAGE_PLACEHOLDER};
pub use document::Document;
pub use drag::{
    resolve_drop, DragPayload, DropAction, DropIndicator, DropTarget, TRANSFER_ID_KEY,
    TRANSFER_KIND_KEY,
};
pub use errors::EditorError;
pub use id_generator::IDGenerator;
pub use kind::{ComponentKind, PropertyEditor, PropertyField};
pub use mutations::{Mutation, NoOpReason, Outcome};
pub use render::{
    render_canvas, render_component, HtmlOptions, RenderOptions, VNode, EMPTY_CANVAS_HINT,
};
pub use session::{ClickTarget, EditSession};
