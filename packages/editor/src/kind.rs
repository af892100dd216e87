//! # Component Kinds
//!
//! The fixed palette of component types and the property schema each one
//! carries. The schema drives both default construction and the properties
//! panel.

use crate::EditorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of placeable component types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ComponentKind {
    Heading,
    Paragraph,
    Button,
    Image,
}

impl ComponentKind {
    /// Palette order
    pub const ALL: [ComponentKind; 4] = [
        ComponentKind::Heading,
        ComponentKind::Paragraph,
        ComponentKind::Button,
        ComponentKind::Image,
    ];

    /// Token carried by palette drags and used in JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Heading => "Heading",
            ComponentKind::Paragraph => "Paragraph",
            ComponentKind::Button => "Button",
            ComponentKind::Image => "Image",
        }
    }

    /// Property fields in panel order
    pub fn fields(&self) -> &'static [PropertyField] {
        match self {
            ComponentKind::Heading | ComponentKind::Paragraph => TEXT_FIELDS,
            ComponentKind::Button => BUTTON_FIELDS,
            ComponentKind::Image => IMAGE_FIELDS,
        }
    }

    /// Recognized property names for this kind
    pub fn property_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields().iter().map(|f| f.name)
    }

    pub fn recognizes(&self, name: &str) -> bool {
        self.fields().iter().any(|f| f.name == name)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EditorError::UnknownKind(s.to_string()))
    }
}

/// How the properties panel edits a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyEditor {
    /// Multi-line text
    TextArea,
    /// Single-line text
    Text,
    /// Hex color picker
    Color,
    /// URL input
    Url,
}

/// One editable property of a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyField {
    pub name: &'static str,
    pub label: &'static str,
    pub editor: PropertyEditor,
    /// Value shown when the stored value is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<&'static str>,
}

pub const DEFAULT_BUTTON_BACKGROUND: &str = "#3b82f6";
pub const DEFAULT_BUTTON_TEXT_COLOR: &str = "#ffffff";

const TEXT_FIELDS: &[PropertyField] = &[PropertyField {
    name: "text",
    label: "Text Content",
    editor: PropertyEditor::TextArea,
    fallback: None,
    placeholder: None,
}];

const BUTTON_FIELDS: &[PropertyField] = &[
    PropertyField {
        name: "text",
        label: "Button Text",
        editor: PropertyEditor::Text,
        fallback: None,
        placeholder: None,
    },
    PropertyField {
        name: "backgroundColor",
        label: "Background Color",
        editor: PropertyEditor::Color,
        fallback: Some(DEFAULT_BUTTON_BACKGROUND),
        placeholder: None,
    },
    PropertyField {
        name: "textColor",
        label: "Text Color",
        editor: PropertyEditor::Color,
        fallback: Some(DEFAULT_BUTTON_TEXT_COLOR),
        placeholder: None,
    },
];

const IMAGE_FIELDS: &[PropertyField] = &[PropertyField {
    name: "src",
    label: "Image URL",
    editor: PropertyEditor::Url,
    fallback: None,
    placeholder: Some("https://placehold.co/600x400"),
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_token_parsing() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.as_str().parse::<ComponentKind>().unwrap(), kind);
        }

        let err = "Video".parse::<ComponentKind>().unwrap_err();
        assert!(matches!(err, EditorError::UnknownKind(ref token) if token == "Video"));
    }

    #[test]
    fn test_property_names_per_kind() {
        let names: Vec<_> = ComponentKind::Button.property_names().collect();
        assert_eq!(names, vec!["text", "backgroundColor", "textColor"]);

        let names: Vec<_> = ComponentKind::Image.property_names().collect();
        assert_eq!(names, vec!["src"]);

        assert!(ComponentKind::Heading.recognizes("text"));
        assert!(!ComponentKind::Heading.recognizes("src"));
    }

    #[test]
    fn test_color_fields_have_fallbacks() {
        for field in ComponentKind::Button.fields() {
            if field.editor == PropertyEditor::Color {
                assert!(field.fallback.is_some(), "{} has no fallback", field.name);
            }
        }
    }
}
