pub mod config;
pub mod contract;
pub mod fetch;
pub mod provider;
pub mod review;
pub mod terms;

pub use config::QuizConfig;
pub use contract::{ContentUri, TermsContract};
pub use fetch::{FetchStatus, ReviewSession, WordFetchTask};
pub use provider::{MemoryTermsProvider, QueryArgs, SqliteTermsProvider, TermsProvider};
pub use review::{CardFace, CardView, DisplayMode, ReviewController, ReviewLabels};
pub use terms::{Term, TermCursor};
