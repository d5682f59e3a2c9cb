//! Review controller: cursor position, display mode and card rendering

use crate::contract::TermsContract;
use crate::terms::{Term, TermCursor};

use super::models::{DisplayMode, ReviewLabels};
use super::view::CardView;

/// Drives a `CardView` through the loaded terms.
///
/// Until `load` is called every click is ignored. Once loaded, a click in
/// `Hidden` mode reveals the definition and a click in `Shown` mode moves to
/// the next term, wrapping after the last one.
pub struct ReviewController<V: CardView> {
    view: V,
    contract: TermsContract,
    labels: ReviewLabels,
    results: Option<TermCursor>,
    word_column: usize,
    definition_column: usize,
    position: usize,
    mode: DisplayMode,
    loaded: bool,
    disposed: bool,
}

impl<V: CardView> ReviewController<V> {
    pub fn new(view: V, contract: TermsContract, labels: ReviewLabels) -> Self {
        Self {
            view,
            contract,
            labels,
            results: None,
            word_column: TermsContract::COLUMN_INDEX_WORD,
            definition_column: TermsContract::COLUMN_INDEX_DEFINITION,
            position: 0,
            mode: DisplayMode::Hidden,
            loaded: false,
            disposed: false,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of loaded terms
    pub fn len(&self) -> usize {
        self.results.as_ref().map_or(0, TermCursor::len)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// True once loaded with no terms to show
    pub fn is_empty(&self) -> bool {
        self.loaded && self.len() == 0
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The term at the current position
    pub fn current_term(&self) -> Option<Term> {
        let cursor = self.results.as_ref()?;
        let id = cursor
            .column_index(&self.contract.column_id)
            .and_then(|c| cursor.get_long(self.position, c))?;
        Some(Term {
            id,
            word: cursor
                .get_string(self.position, self.word_column)
                .unwrap_or_default(),
            definition: cursor
                .get_string(self.position, self.definition_column)
                .unwrap_or_default(),
        })
    }

    /// Take ownership of the fetched results and show the first word.
    ///
    /// `None` or an empty cursor switches to the empty state: the
    /// placeholder is shown and clicks do nothing.
    pub fn load(&mut self, results: Option<TermCursor>) {
        if self.disposed {
            log::debug!("Ignoring results for a disposed review controller");
            return;
        }

        if let Some(mut previous) = self.results.take() {
            previous.close();
        }

        self.position = 0;
        self.mode = DisplayMode::Hidden;
        self.loaded = true;

        match results {
            Some(cursor) if !cursor.is_empty() => {
                self.word_column = cursor
                    .column_index(&self.contract.column_word)
                    .unwrap_or(TermsContract::COLUMN_INDEX_WORD);
                self.definition_column = cursor
                    .column_index(&self.contract.column_definition)
                    .unwrap_or(TermsContract::COLUMN_INDEX_DEFINITION);
                log::info!("Loaded {} terms for review", cursor.len());
                self.results = Some(cursor);
                self.render_current();
            }
            _ => {
                log::warn!("No terms returned by the provider");
                self.render_empty();
            }
        }
    }

    /// Either show the definition of the current word, or if the definition
    /// is showing, move to the next word.
    pub fn on_button_click(&mut self) {
        if self.disposed || self.len() == 0 {
            return;
        }

        match self.mode {
            DisplayMode::Hidden => self.show_definition(),
            DisplayMode::Shown => self.next_word(),
        }
    }

    fn show_definition(&mut self) {
        self.view.set_definition_visible(true);
        self.view.set_button_label(&self.labels.next_word);
        self.mode = DisplayMode::Shown;
        log::debug!("Showing definition at position {}", self.position);
    }

    fn next_word(&mut self) {
        self.position = (self.position + 1) % self.len();
        self.render_current();
        log::debug!("Advanced to position {}", self.position);
    }

    fn render_current(&mut self) {
        let (word, definition) = match &self.results {
            Some(cursor) => (
                cursor
                    .get_string(self.position, self.word_column)
                    .unwrap_or_default(),
                cursor
                    .get_string(self.position, self.definition_column)
                    .unwrap_or_default(),
            ),
            None => return,
        };

        self.view.set_definition_visible(false);
        self.view.set_button_label(&self.labels.show_definition);
        self.view.set_word_text(&word);
        self.view.set_definition_text(&definition);
        self.mode = DisplayMode::Hidden;
    }

    fn render_empty(&mut self) {
        self.view.set_definition_visible(false);
        self.view.set_button_label(&self.labels.show_definition);
        self.view.set_word_text(&self.labels.empty_placeholder);
        self.view.set_definition_text("");
        self.mode = DisplayMode::Hidden;
    }

    /// Close the held results. Every later call is a no-op.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        if let Some(mut cursor) = self.results.take() {
            cursor.close();
        }
        self.disposed = true;
        log::debug!("Review controller disposed");
    }
}
