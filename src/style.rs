//! Item Styling
//!
//! The two visual states of a list row.

use serde::Deserialize;

/// Colors and opacity for open and completed rows
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub completed_opacity: f32,
    pub completed_background: String,
    pub default_background: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            completed_opacity: 0.6,
            completed_background: "#63a060".to_string(),
            default_background: "aliceblue".to_string(),
        }
    }
}

/// Resolved presentation of one row
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStyle {
    pub opacity: f32,
    pub background: String,
}

impl ItemStyle {
    pub fn for_item(completed: bool, theme: &Theme) -> Self {
        if completed {
            Self {
                opacity: theme.completed_opacity,
                background: theme.completed_background.clone(),
            }
        } else {
            Self {
                opacity: 1.0,
                background: theme.default_background.clone(),
            }
        }
    }

    /// Inline `style` attribute value
    pub fn to_css(&self) -> String {
        format!("opacity: {}; background-color: {};", self.opacity, self.background)
    }
}
