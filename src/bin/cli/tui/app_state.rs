use ratatui::prelude::Rect;

use quizapp_lib::{CardFace, FetchStatus, ReviewSession};

use crate::app::App;

pub struct TuiState {
    pub session: ReviewSession<CardFace>,
    pub source: String,

    // Button area for mouse hit-testing (updated each draw)
    pub button_area: Option<Rect>,

    pub flash_message: Option<String>,
    pub show_help: bool,
    pub quit: bool,
}

impl TuiState {
    pub fn new(app: App) -> Self {
        let source = app.config.contract.content_uri().to_string();
        let session = ReviewSession::start(
            app.provider,
            app.config.contract,
            app.config.review,
            CardFace::default(),
        );

        Self {
            session,
            source,
            button_area: None,
            flash_message: None,
            show_help: false,
            quit: false,
        }
    }

    /// Apply the fetch outcome once it arrives
    pub fn pump_fetch(&mut self) {
        if let Some(FetchStatus::Failed) = self.session.pump() {
            self.flash_message = Some("Could not read terms, see log for details".to_string());
        }
    }

    pub fn is_loading(&self) -> bool {
        !self.session.controller().is_loaded()
    }

    pub fn card(&self) -> &CardFace {
        self.session.controller().view()
    }

    pub fn press_button(&mut self) {
        self.session.click();
    }

    /// `position/len`, or `None` before anything is loaded
    pub fn progress(&self) -> Option<(usize, usize)> {
        let controller = self.session.controller();
        match controller.len() {
            0 => None,
            len => Some((controller.position() + 1, len)),
        }
    }
}
