//! Data models for the review screen

use serde::{Deserialize, Serialize};

/// What the card is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Only the word is visible; the button reveals the definition
    #[default]
    Hidden,
    /// Word and definition are visible; the button advances to the next word
    Shown,
}

/// Texts shown by the review screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ReviewLabels {
    #[serde(rename = "show_definition_label")]
    pub show_definition: String,
    #[serde(rename = "next_word_label")]
    pub next_word: String,
    /// Word text when the provider returned nothing
    pub empty_placeholder: String,
}

impl Default for ReviewLabels {
    fn default() -> Self {
        Self {
            show_definition: "show definition".to_string(),
            next_word: "next word".to_string(),
            empty_placeholder: "No terms available".to_string(),
        }
    }
}
