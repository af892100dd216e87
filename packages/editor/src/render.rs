//! # Visual Primitives
//!
//! Maps component instances to a small virtual DOM the presentation layer
//! can mount, plus an HTML fragment serializer for previews and the CLI.

use crate::component::{ComponentInstance, ComponentProps};
use crate::config::DEFAULT_IMAGE_PLACEHOLDER;
use crate::document::Document;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const EMPTY_CANVAS_HINT: &str = "Drag components from the left panel and drop them here.";

/// Virtual DOM node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VNode {
    /// HTML element
    Element {
        tag: String,
        attributes: BTreeMap<String, String>,
        styles: BTreeMap<String, String>,
        children: Vec<VNode>,
    },

    /// Text node
    Text { content: String },
}

impl VNode {
    pub fn element(tag: impl Into<String>) -> Self {
        VNode::Element {
            tag: tag.into(),
            attributes: BTreeMap::new(),
            styles: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        VNode::Text {
            content: content.into(),
        }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element {
            ref mut attributes, ..
        } = self
        {
            attributes.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let VNode::Element { ref mut styles, .. } = self {
            styles.insert(key.into(), value.into());
        }
        self
    }

    pub fn with_child(mut self, child: VNode) -> Self {
        if let VNode::Element {
            ref mut children, ..
        } = self
        {
            children.push(child);
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag.as_str()),
            VNode::Text { .. } => None,
        }
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { attributes, .. } => attributes.get(key).map(String::as_str),
            VNode::Text { .. } => None,
        }
    }

    pub fn style(&self, key: &str) -> Option<&str> {
        match self {
            VNode::Element { styles, .. } => styles.get(key).map(String::as_str),
            VNode::Text { .. } => None,
        }
    }

    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children.as_slice(),
            VNode::Text { .. } => &[],
        }
    }

    /// Concatenated text content of this subtree
    pub fn text_content(&self) -> String {
        match self {
            VNode::Text { content } => content.clone(),
            VNode::Element { children, .. } => children.iter().map(VNode::text_content).collect(),
        }
    }

    /// Serialize to an HTML fragment
    pub fn to_html(&self, options: &HtmlOptions) -> String {
        let mut ctx = HtmlContext::new(options);
        write_node(self, &mut ctx);
        ctx.buffer
    }
}

/// Options for mapping instances to primitives
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// `src` used for Image instances whose own `src` is empty
    pub image_placeholder: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            image_placeholder: DEFAULT_IMAGE_PLACEHOLDER.to_string(),
        }
    }
}

/// Map one instance to its visual primitive
pub fn render_component(component: &ComponentInstance, options: &RenderOptions) -> VNode {
    match component.props() {
        ComponentProps::Heading { text } => VNode::element("h1").with_child(VNode::text(text)),
        ComponentProps::Paragraph { text } => VNode::element("p").with_child(VNode::text(text)),
        ComponentProps::Button {
            text,
            background_color,
            text_color,
        } => VNode::element("button")
            .with_attr("type", "button")
            .with_style("background-color", background_color)
            .with_style("color", text_color)
            .with_child(VNode::text(text)),
        ComponentProps::Image { src } => {
            let src = if src.is_empty() {
                options.image_placeholder.as_str()
            } else {
                src.as_str()
            };
            VNode::element("img")
                .with_attr("src", src)
                .with_attr("alt", "User content")
        }
    }
}

/// Render the whole canvas. Each instance is wrapped in a draggable frame
/// carrying its id, selection and drop-target state.
pub fn render_canvas(doc: &Document, highlighted: Option<&str>, options: &RenderOptions) -> VNode {
    let mut canvas = VNode::element("div").with_attr("data-canvas", "true");

    for component in doc.sequence() {
        let id = component.id();
        let selected = doc.selected_id() == Some(id);
        let drop_target = highlighted == Some(id);

        let frame = VNode::element("div")
            .with_attr("draggable", "true")
            .with_attr("data-id", id)
            .with_attr("data-kind", component.kind().as_str())
            .with_attr("data-selected", selected.to_string())
            .with_attr("data-drop-target", drop_target.to_string())
            .with_child(render_component(component, options));

        canvas = canvas.with_child(frame);
    }

    if doc.is_empty() {
        canvas = canvas.with_child(
            VNode::element("div")
                .with_attr("data-empty-hint", "true")
                .with_child(VNode::element("p").with_child(VNode::text(EMPTY_CANVAS_HINT))),
        );
    }

    canvas
}

/// Options for HTML serialization
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

struct HtmlContext<'a> {
    options: &'a HtmlOptions,
    depth: usize,
    buffer: String,
}

impl<'a> HtmlContext<'a> {
    fn new(options: &'a HtmlOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            for _ in 0..self.depth {
                self.buffer.push_str(&self.options.indent);
            }
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }
}

fn write_node(node: &VNode, ctx: &mut HtmlContext<'_>) {
    match node {
        VNode::Text { content } => ctx.add_line(&escape_html(content)),
        VNode::Element {
            tag,
            attributes,
            styles,
            children,
        } => {
            let mut open = format!("<{}", tag);
            for (name, value) in attributes {
                open.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
            }
            if !styles.is_empty() {
                let style: Vec<String> = styles
                    .iter()
                    .map(|(prop, value)| format!("{}: {}", prop, value))
                    .collect();
                open.push_str(&format!(" style=\"{}\"", escape_html(&style.join("; "))));
            }
            open.push('>');

            if is_self_closing(tag) {
                ctx.add_line(&open);
                return;
            }

            ctx.add_line(&open);
            ctx.indent();
            for child in children {
                write_node(child, ctx);
            }
            ctx.dedent();
            ctx.add_line(&format!("</{}>", tag));
        }
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(tag, "img" | "input" | "br" | "hr" | "meta")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ComponentKind;

    #[test]
    fn test_render_each_kind() {
        let options = RenderOptions::default();

        let heading = ComponentInstance::with_defaults("h", ComponentKind::Heading);
        let node = render_component(&heading, &options);
        assert_eq!(node.tag(), Some("h1"));
        assert_eq!(node.text_content(), "New Heading");

        let paragraph = ComponentInstance::with_defaults("p", ComponentKind::Paragraph);
        assert_eq!(render_component(&paragraph, &options).tag(), Some("p"));

        let button = ComponentInstance::with_defaults("b", ComponentKind::Button);
        let node = render_component(&button, &options);
        assert_eq!(node.tag(), Some("button"));
        assert_eq!(node.style("background-color"), Some("#3b82f6"));
        assert_eq!(node.style("color"), Some("#ffffff"));
        assert_eq!(node.text_content(), "Click Me");
    }

    #[test]
    fn test_empty_image_uses_placeholder() {
        let options = RenderOptions {
            image_placeholder: "https://example.com/blank.png".to_string(),
        };
        let image = ComponentInstance::with_defaults("i", ComponentKind::Image);

        let node = render_component(&image, &options);
        assert_eq!(node.tag(), Some("img"));
        assert_eq!(node.attr("src"), Some("https://example.com/blank.png"));
        assert_eq!(node.attr("alt"), Some("User content"));
    }

    #[test]
    fn test_canvas_marks_selection_and_drop_target() {
        let mut doc = Document::from_components(vec![
            ComponentInstance::with_defaults("a", ComponentKind::Heading),
            ComponentInstance::with_defaults("b", ComponentKind::Paragraph),
        ]);
        crate::Mutation::Select {
            id: Some("a".to_string()),
        }
        .apply(&mut doc);

        let canvas = render_canvas(&doc, Some("b"), &RenderOptions::default());
        let frames = canvas.children();

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].attr("data-selected"), Some("true"));
        assert_eq!(frames[0].attr("data-drop-target"), Some("false"));
        assert_eq!(frames[1].attr("data-selected"), Some("false"));
        assert_eq!(frames[1].attr("data-drop-target"), Some("true"));
    }

    #[test]
    fn test_empty_canvas_shows_hint() {
        let canvas = render_canvas(&Document::empty(), None, &RenderOptions::default());
        assert_eq!(canvas.text_content(), EMPTY_CANVAS_HINT);
    }

    #[test]
    fn test_html_escapes_text() {
        let node = VNode::element("p").with_child(VNode::text("<b>\"hi\" & bye</b>"));
        let html = node.to_html(&HtmlOptions {
            pretty: false,
            indent: String::new(),
        });

        assert_eq!(html, "<p>&lt;b&gt;&quot;hi&quot; &amp; bye&lt;/b&gt;</p>");
    }

    #[test]
    fn test_html_button_styles_and_void_tags() {
        let options = HtmlOptions {
            pretty: false,
            indent: String::new(),
        };

        let button = ComponentInstance::with_defaults("b", ComponentKind::Button);
        let html = render_component(&button, &RenderOptions::default()).to_html(&options);
        assert_eq!(
            html,
            "<button type=\"button\" style=\"background-color: #3b82f6; color: #ffffff\">Click Me</button>"
        );

        let image = ComponentInstance::new(
            "i",
            ComponentProps::Image {
                src: "a.png".to_string(),
            },
        );
        let html = render_component(&image, &RenderOptions::default()).to_html(&options);
        assert_eq!(html, "<img alt=\"User content\" src=\"a.png\">");
    }
}
