//! Rendering surface driven by the review controller

/// Outputs of the review screen. Implemented by whatever draws the card.
pub trait CardView {
    fn set_word_text(&mut self, text: &str);
    fn set_definition_text(&mut self, text: &str);
    fn set_definition_visible(&mut self, visible: bool);
    fn set_button_label(&mut self, label: &str);
}

/// Plain snapshot of everything the card shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardFace {
    pub word: String,
    pub definition: String,
    pub definition_visible: bool,
    pub button_label: String,
}

impl CardView for CardFace {
    fn set_word_text(&mut self, text: &str) {
        self.word = text.to_string();
    }

    fn set_definition_text(&mut self, text: &str) {
        self.definition = text.to_string();
    }

    fn set_definition_visible(&mut self, visible: bool) {
        self.definition_visible = visible;
    }

    fn set_button_label(&mut self, label: &str) {
        self.button_label = label.to_string();
    }
}
