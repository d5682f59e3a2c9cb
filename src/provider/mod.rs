//! Read access to the external terms provider
//!
//! The provider itself lives outside this crate. Adapters here only query
//! it through the contract's URIs and hand back a `TermCursor`.

pub mod memory;
pub mod sqlite;

use thiserror::Error;

use crate::contract::{ContentUri, TermsContract};
use crate::terms::TermCursor;

pub use memory::MemoryTermsProvider;
pub use sqlite::SqliteTermsProvider;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown URI: {0}")]
    UnknownUri(String),

    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Invalid sort order: {0}")]
    InvalidSortOrder(String),

    #[error("Selection is not supported by this provider")]
    SelectionUnsupported,
}

pub type Result<T> = std::result::Result<T, ProviderError>;

/// Optional query parameters. The default value is the all-null query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryArgs {
    /// Columns to return, `None` for all
    pub projection: Option<Vec<String>>,
    /// SQL filter with `?` placeholders
    pub selection: Option<String>,
    pub selection_args: Vec<String>,
    /// Comma separated `column [ASC|DESC]` list
    pub sort_order: Option<String>,
}

/// Anything that can answer a terms query.
///
/// `Ok(None)` means the provider is not available; it is not an error.
pub trait TermsProvider: Send + Sync {
    fn query(&self, uri: &ContentUri, args: &QueryArgs) -> Result<Option<TermCursor>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub column: String,
    pub direction: SortDirection,
}

/// Parse a sort order against the contract's known columns
pub fn parse_sort_order(contract: &TermsContract, sort_order: &str) -> Result<Vec<SortKey>> {
    let mut keys = Vec::new();
    for part in sort_order.split(',') {
        let mut tokens = part.split_whitespace();
        let column = tokens
            .next()
            .ok_or_else(|| ProviderError::InvalidSortOrder(sort_order.to_string()))?;
        if !contract.is_known_column(column) {
            return Err(ProviderError::UnknownColumn(column.to_string()));
        }
        let direction = match tokens.next().map(|d| d.to_ascii_uppercase()).as_deref() {
            None | Some("ASC") => SortDirection::Asc,
            Some("DESC") => SortDirection::Desc,
            Some(_) => return Err(ProviderError::InvalidSortOrder(sort_order.to_string())),
        };
        if tokens.next().is_some() {
            return Err(ProviderError::InvalidSortOrder(sort_order.to_string()));
        }
        keys.push(SortKey {
            column: column.to_string(),
            direction,
        });
    }
    Ok(keys)
}

/// Resolve the projection, defaulting to every contract column
pub fn resolve_projection(contract: &TermsContract, args: &QueryArgs) -> Result<Vec<String>> {
    match &args.projection {
        None => Ok(contract.columns().iter().map(|c| c.to_string()).collect()),
        Some(columns) => {
            if let Some(unknown) = columns.iter().find(|c| !contract.is_known_column(c)) {
                return Err(ProviderError::UnknownColumn(unknown.clone()));
            }
            Ok(columns.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_order() {
        let contract = TermsContract::default();
        let keys = parse_sort_order(&contract, "word DESC, _id").unwrap();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[0].column, "word");
        assert_eq!(keys[0].direction, SortDirection::Desc);
        assert_eq!(keys[1].direction, SortDirection::Asc);
    }

    #[test]
    fn test_parse_sort_order_rejects_injection() {
        let contract = TermsContract::default();
        assert!(matches!(
            parse_sort_order(&contract, "word; DROP TABLE term_entries"),
            Err(ProviderError::UnknownColumn(_))
        ));
        assert!(matches!(
            parse_sort_order(&contract, "word sideways"),
            Err(ProviderError::InvalidSortOrder(_))
        ));
        assert!(matches!(
            parse_sort_order(&contract, "word,"),
            Err(ProviderError::InvalidSortOrder(_))
        ));
    }

    #[test]
    fn test_resolve_projection() {
        let contract = TermsContract::default();
        let all = resolve_projection(&contract, &QueryArgs::default()).unwrap();
        assert_eq!(all, vec!["_id", "word", "definition"]);

        let args = QueryArgs {
            projection: Some(vec!["word".to_string(), "notes".to_string()]),
            ..Default::default()
        };
        assert!(matches!(
            resolve_projection(&contract, &args),
            Err(ProviderError::UnknownColumn(c)) if c == "notes"
        ));
    }
}
