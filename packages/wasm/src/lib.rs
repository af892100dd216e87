use sitebuilder_editor::{
    ClickTarget, ComponentKind, DragPayload, DropTarget, EditSession, EditorConfig, HtmlOptions, Mutation,
    TRANSFER_ID_KEY, TRANSFER_KIND_KEY,
};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// Palette entries as a JSON array of kind tokens
#[wasm_bindgen(js_name = paletteKinds)]
pub fn palette_kinds() -> String {
    let kinds: Vec<&str> = ComponentKind::ALL.iter().map(|k| k.as_str()).collect();
    serde_json::to_string(&kinds).unwrap_or_else(|_| "[]".to_string())
}

/// Properties-panel fields for a kind, as JSON
#[wasm_bindgen(js_name = propertyFields)]
pub fn property_fields(kind: &str) -> Result<String, JsValue> {
    let kind: ComponentKind = kind
        .parse()
        .map_err(|e| JsValue::from_str(&format!("{}", e)))?;

    serde_json::to_string(kind.fields())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Browser-side handle on one edit session. The presentation layer reads
/// the document through it and sends every gesture through it.
#[wasm_bindgen]
pub struct Builder {
    session: EditSession,
}

#[wasm_bindgen]
impl Builder {
    /// Open a session with the starter document
    #[wasm_bindgen(constructor)]
    pub fn new(session_name: Option<String>) -> Builder {
        let mut config = EditorConfig::default();
        if let Some(name) = session_name.filter(|n| !n.trim().is_empty()) {
            config.session_name = name;
        }
        Builder {
            session: EditSession::new(config),
        }
    }

    /// Open a session from a `sitebuilder.config.json` payload
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config_json: &str) -> Result<Builder, JsValue> {
        let config = EditorConfig::from_json(config_json)
            .map_err(|e| JsValue::from_str(&format!("Config error: {}", e)))?;
        Ok(Builder {
            session: EditSession::new(config),
        })
    }

    /// Whole document as JSON: `{ components, selectedId }`
    #[wasm_bindgen(js_name = documentJson)]
    pub fn document_json(&self) -> Result<String, JsValue> {
        self.session
            .document()
            .to_json()
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(js_name = selectedId)]
    pub fn selected_id(&self) -> Option<String> {
        self.session.document().selected_id().map(str::to_string)
    }

    /// Document version; bumps whenever a mutation changed state
    #[wasm_bindgen(getter)]
    pub fn version(&self) -> f64 {
        self.session.document().version as f64
    }

    /// Apply a JSON-encoded mutation. Returns whether the document changed.
    pub fn dispatch(&mut self, mutation_json: &str) -> Result<bool, JsValue> {
        let mutation: Mutation = serde_json::from_str(mutation_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid mutation: {}", e)))?;
        Ok(self.session.dispatch(mutation).is_applied())
    }

    // --- drag & drop ---

    #[wasm_bindgen(js_name = dragEnter)]
    pub fn drag_enter(&mut self, target_id: &str) {
        self.session.drag_enter(target_id);
    }

    #[wasm_bindgen(js_name = dragLeave)]
    pub fn drag_leave(&mut self, target_id: &str) {
        self.session.drag_leave(target_id);
    }

    /// Instance currently highlighted as a drop target
    #[wasm_bindgen(js_name = highlightedId)]
    pub fn highlighted_id(&self) -> Option<String> {
        self.session.drop_indicator().hovered().map(str::to_string)
    }

    /// Drop straight from `dataTransfer` values. `target_id` is the
    /// instance under the pointer, or none for the canvas background.
    #[wasm_bindgen(js_name = dropTransfer)]
    pub fn drop_transfer(
        &mut self,
        component_type: Option<String>,
        component_id: Option<String>,
        target_id: Option<String>,
    ) -> bool {
        let payload = DragPayload::from_transfer(|key| match key {
            TRANSFER_KIND_KEY => component_type.clone(),
            TRANSFER_ID_KEY => component_id.clone(),
            _ => None,
        });
        let target = match target_id {
            Some(id) => DropTarget::Instance(id),
            None => DropTarget::CanvasBackground,
        };

        match payload {
            Some(payload) => self.session.drop(&payload, &target).is_applied(),
            None => {
                self.session.cancel_drag();
                false
            }
        }
    }

    /// Palette drop onto the canvas background
    #[wasm_bindgen(js_name = dropFromPalette)]
    pub fn drop_from_palette(&mut self, kind: &str) -> bool {
        self.drop_transfer(Some(kind.to_string()), None, None)
    }

    /// Canvas reorder drop
    #[wasm_bindgen(js_name = dropOnInstance)]
    pub fn drop_on_instance(&mut self, drag_id: &str, drop_id: &str) -> bool {
        self.drop_transfer(None, Some(drag_id.to_string()), Some(drop_id.to_string()))
    }

    // --- clicks ---

    /// One complete click. `target_id` is the instance clicked, or none for
    /// the canvas background.
    pub fn click(&mut self, target_id: Option<String>) -> bool {
        let target = match target_id {
            Some(id) => ClickTarget::Instance(id),
            None => ClickTarget::CanvasBackground,
        };
        self.session.click(&target).is_applied()
    }

    // --- properties panel ---

    #[wasm_bindgen(js_name = updateProp)]
    pub fn update_prop(&mut self, id: &str, name: &str, value: &str) -> bool {
        self.session.update_props(id, [(name, value)]).is_applied()
    }

    /// Delete the selected instance once the user confirmed the prompt
    #[wasm_bindgen(js_name = deleteSelected)]
    pub fn delete_selected(&mut self, confirmed: bool) -> bool {
        let Some(id) = self.selected_id() else {
            return false;
        };
        self.session.request_delete(&id, |_| confirmed).is_applied()
    }

    // --- views ---

    /// Canvas as an HTML fragment
    #[wasm_bindgen(js_name = renderHtml)]
    pub fn render_html(&self) -> String {
        self.session.render().to_html(&HtmlOptions::default())
    }

    /// Canvas as a JSON virtual DOM
    #[wasm_bindgen(js_name = renderJson)]
    pub fn render_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.session.render())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }
}
