//! Widget Configuration
//!
//! Labels, submit key and theme. Defaults match the stock page; a host page
//! may override any field with an embedded JSON block:
//!
//! ```html
//! <script id="todo-config" type="application/json">{"title": "Groceries"}</script>
//! ```

use serde::Deserialize;

use crate::style::Theme;

/// Id of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub title: String,
    pub input_placeholder: String,
    pub add_label: String,
    pub delete_label: String,
    pub delete_all_label: String,
    pub empty_message: String,
    /// `KeyboardEvent.key` value that submits the input
    pub submit_key: String,
    pub theme: Theme,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            title: "To-Do List".to_string(),
            input_placeholder: "Add a task...".to_string(),
            add_label: "Add".to_string(),
            delete_label: "Delete".to_string(),
            delete_all_label: "Delete All".to_string(),
            empty_message: "No tasks yet".to_string(),
            submit_key: "Enter".to_string(),
            theme: Theme::default(),
        }
    }
}

impl WidgetConfig {
    /// Parse overrides from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Read overrides from the host document, falling back to defaults
    pub fn load() -> Self {
        let Some(json) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("loaded widget config from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                log::warn!("ignoring malformed #{} config: {}", CONFIG_ELEMENT_ID, e);
                Self::default()
            }
        }
    }
}
