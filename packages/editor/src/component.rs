//! # Component Instances
//!
//! A placed component: an immutable id plus kind-specific properties.
//! The kind is the variant of [`ComponentProps`], so an instance can never
//! gain or lose recognized property keys, only change their values.

use crate::kind::{ComponentKind, DEFAULT_BUTTON_BACKGROUND, DEFAULT_BUTTON_TEXT_COLOR};
use serde::{Deserialize, Serialize};

/// Properties of an instance, tagged by kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "properties")]
pub enum ComponentProps {
    Heading {
        text: String,
    },
    Paragraph {
        text: String,
    },
    Button {
        text: String,
        #[serde(rename = "backgroundColor")]
        background_color: String,
        #[serde(rename = "textColor")]
        text_color: String,
    },
    Image {
        src: String,
    },
}

impl ComponentProps {
    /// Default properties used when a kind is dropped from the palette
    pub fn defaults(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Heading => ComponentProps::Heading {
                text: "New Heading".to_string(),
            },
            ComponentKind::Paragraph => ComponentProps::Paragraph {
                text: "New paragraph of text.".to_string(),
            },
            ComponentKind::Button => ComponentProps::Button {
                text: "Click Me".to_string(),
                background_color: DEFAULT_BUTTON_BACKGROUND.to_string(),
                text_color: DEFAULT_BUTTON_TEXT_COLOR.to_string(),
            },
            ComponentKind::Image => ComponentProps::Image { src: String::new() },
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            ComponentProps::Heading { .. } => ComponentKind::Heading,
            ComponentProps::Paragraph { .. } => ComponentKind::Paragraph,
            ComponentProps::Button { .. } => ComponentKind::Button,
            ComponentProps::Image { .. } => ComponentKind::Image,
        }
    }

    /// Look up a property by its wire name
    pub fn get(&self, name: &str) -> Option<&str> {
        let value = match (self, name) {
            (ComponentProps::Heading { text }, "text")
            | (ComponentProps::Paragraph { text }, "text")
            | (ComponentProps::Button { text, .. }, "text") => text,
            (ComponentProps::Button { background_color, .. }, "backgroundColor") => {
                background_color
            }
            (ComponentProps::Button { text_color, .. }, "textColor") => text_color,
            (ComponentProps::Image { src }, "src") => src,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut String> {
        match (self, name) {
            (ComponentProps::Heading { text }, "text")
            | (ComponentProps::Paragraph { text }, "text")
            | (ComponentProps::Button { text, .. }, "text") => Some(text),
            (ComponentProps::Button { background_color, .. }, "backgroundColor") => {
                Some(background_color)
            }
            (ComponentProps::Button { text_color, .. }, "textColor") => Some(text_color),
            (ComponentProps::Image { src }, "src") => Some(src),
            _ => None,
        }
    }

    /// Overwrite a recognized property. Returns false for names the kind
    /// does not define; the props are left untouched in that case.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.slot_mut(name) {
            Some(slot) => {
                *slot = value.into();
                true
            }
            None => false,
        }
    }

    /// `(name, value)` pairs in schema order
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        self.kind()
            .property_names()
            .filter_map(|name| self.get(name).map(|value| (name, value)))
            .collect()
    }
}

/// One placed component on the canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentInstance {
    id: String,
    #[serde(flatten)]
    props: ComponentProps,
}

impl ComponentInstance {
    pub fn new(id: impl Into<String>, props: ComponentProps) -> Self {
        Self {
            id: id.into(),
            props,
        }
    }

    /// New instance of `kind` carrying that kind's default properties
    pub fn with_defaults(id: impl Into<String>, kind: ComponentKind) -> Self {
        Self::new(id, ComponentProps::defaults(kind))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ComponentKind {
        self.props.kind()
    }

    pub fn props(&self) -> &ComponentProps {
        &self.props
    }

    pub(crate) fn props_mut(&mut self) -> &mut ComponentProps {
        &mut self.props
    }

    /// Property value by wire name, if the kind defines it
    pub fn prop(&self, name: &str) -> Option<&str> {
        self.props.get(name)
    }
}
