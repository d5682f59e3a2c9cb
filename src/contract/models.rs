//! Data models for the terms provider contract

use serde::{Deserialize, Serialize};

use super::uri::ContentUri;

/// MIME prefix for URIs that reference a list of rows
pub const CURSOR_DIR_BASE_TYPE: &str = "vnd.android.cursor.dir";

/// MIME prefix for URIs that reference a single row
pub const CURSOR_ITEM_BASE_TYPE: &str = "vnd.android.cursor.item";

/// Describes how the external terms provider exposes its data.
///
/// The defaults match the DroidTermsExample provider. Every field can be
/// overridden from the `[contract]` section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct TermsContract {
    /// Content authority of the provider
    pub authority: String,
    /// Path segment for the terms collection
    pub path_terms: String,
    pub column_id: String,
    pub column_word: String,
    pub column_definition: String,
    /// Name of the SQL table backing the provider
    pub terms_table: String,
    /// Name of the provider's database
    pub database_name: String,
    /// Schema version the provider's database is expected to carry
    pub database_version: i32,
}

impl Default for TermsContract {
    fn default() -> Self {
        Self {
            authority: "com.example.udacity.droidtermsexample".to_string(),
            path_terms: "terms".to_string(),
            column_id: "_id".to_string(),
            column_word: "word".to_string(),
            column_definition: "definition".to_string(),
            terms_table: "term_entries".to_string(),
            database_name: "terms".to_string(),
            database_version: 1,
        }
    }
}

/// What a content URI refers to, relative to a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UriMatch {
    /// The full list of terms
    Terms,
    /// A single term referenced by id
    TermWithId(i64),
}

impl TermsContract {
    pub const COLUMN_INDEX_ID: usize = 0;
    pub const COLUMN_INDEX_WORD: usize = 1;
    pub const COLUMN_INDEX_DEFINITION: usize = 2;

    /// The URI all other provider URIs are built on
    pub fn base_content_uri(&self) -> ContentUri {
        ContentUri::with_authority(self.authority.clone())
    }

    /// URI for the full list of terms and definitions
    pub fn content_uri(&self) -> ContentUri {
        self.base_content_uri().append_path(self.path_terms.clone())
    }

    /// URI for a single term, referenced by id
    pub fn build_term_uri_with_id(&self, id: i64) -> ContentUri {
        self.content_uri().with_appended_id(id)
    }

    /// MIME type of the terms collection
    pub fn content_type(&self) -> String {
        format!("{}/{}/{}", CURSOR_DIR_BASE_TYPE, self.authority, self.path_terms)
    }

    /// MIME type of a single term
    pub fn content_item_type(&self) -> String {
        format!("{}/{}/{}", CURSOR_ITEM_BASE_TYPE, self.authority, self.path_terms)
    }

    /// All column names, in table order
    pub fn columns(&self) -> [&str; 3] {
        [
            self.column_id.as_str(),
            self.column_word.as_str(),
            self.column_definition.as_str(),
        ]
    }

    pub fn is_known_column(&self, name: &str) -> bool {
        self.columns().contains(&name)
    }

    /// Classify a URI against this contract
    pub fn match_uri(&self, uri: &ContentUri) -> Option<UriMatch> {
        if uri.scheme() != ContentUri::SCHEME || uri.authority() != self.authority {
            return None;
        }

        match uri.path_segments() {
            [path] if *path == self.path_terms => Some(UriMatch::Terms),
            [path, id] if *path == self.path_terms => id.parse().ok().map(UriMatch::TermWithId),
            _ => None,
        }
    }
}
