//! In-memory terms source, loadable from a JSON array

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use super::{parse_sort_order, resolve_projection, ProviderError, QueryArgs, Result, SortDirection, TermsProvider};
use crate::contract::{ContentUri, TermsContract, UriMatch};
use crate::terms::{Term, TermCursor, Value};

/// Serves a fixed list of terms through the same URIs as the real provider.
/// Selections are not supported.
pub struct MemoryTermsProvider {
    contract: TermsContract,
    terms: Vec<Term>,
}

impl MemoryTermsProvider {
    pub fn new(contract: TermsContract, terms: Vec<Term>) -> Self {
        Self { contract, terms }
    }

    /// Load terms from a JSON array of `{ "id", "word", "definition" }`
    pub fn from_json_file(contract: TermsContract, path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let terms: Vec<Term> = serde_json::from_str(&content)?;
        Ok(Self::new(contract, terms))
    }

    fn cell(&self, term: &Term, column: &str) -> Value {
        if column == self.contract.column_id {
            Value::Integer(term.id)
        } else if column == self.contract.column_word {
            Value::Text(term.word.clone())
        } else {
            Value::Text(term.definition.clone())
        }
    }

    fn compare(&self, a: &Term, b: &Term, column: &str) -> Ordering {
        if column == self.contract.column_id {
            a.id.cmp(&b.id)
        } else if column == self.contract.column_word {
            a.word.cmp(&b.word)
        } else {
            a.definition.cmp(&b.definition)
        }
    }
}

impl TermsProvider for MemoryTermsProvider {
    fn query(&self, uri: &ContentUri, args: &QueryArgs) -> Result<Option<TermCursor>> {
        let matched = self
            .contract
            .match_uri(uri)
            .ok_or_else(|| ProviderError::UnknownUri(uri.to_string()))?;

        if args.selection.as_deref().is_some_and(|s| !s.trim().is_empty()) {
            return Err(ProviderError::SelectionUnsupported);
        }

        let projection = resolve_projection(&self.contract, args)?;

        let mut selected: Vec<&Term> = match matched {
            UriMatch::Terms => self.terms.iter().collect(),
            UriMatch::TermWithId(id) => self.terms.iter().filter(|t| t.id == id).collect(),
        };

        if let Some(sort_order) = args.sort_order.as_deref().filter(|s| !s.trim().is_empty()) {
            let keys = parse_sort_order(&self.contract, sort_order)?;
            selected.sort_by(|a, b| {
                keys.iter()
                    .map(|k| {
                        let ord = self.compare(a, b, &k.column);
                        match k.direction {
                            SortDirection::Asc => ord,
                            SortDirection::Desc => ord.reverse(),
                        }
                    })
                    .find(|ord| *ord != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            });
        }

        let rows = selected
            .into_iter()
            .map(|t| projection.iter().map(|c| self.cell(t, c)).collect())
            .collect();

        Ok(Some(TermCursor::new(projection, rows)))
    }
}
