//! Result handle for a terms query
//!
//! A cursor owns the rows of one query. It is closed explicitly by its
//! holder or implicitly when dropped; a closed cursor answers every read
//! with `None`.

use crate::contract::TermsContract;

use super::models::{Term, Value};

#[derive(Debug)]
pub struct TermCursor {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
    closed: bool,
}

impl TermCursor {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            columns,
            rows,
            closed: false,
        }
    }

    /// Build a cursor over full term rows, in contract column order
    pub fn from_terms(contract: &TermsContract, terms: &[Term]) -> Self {
        let columns = contract.columns().iter().map(|c| c.to_string()).collect();
        let rows = terms
            .iter()
            .map(|t| {
                vec![
                    Value::Integer(t.id),
                    Value::Text(t.word.clone()),
                    Value::Text(t.definition.clone()),
                ]
            })
            .collect();
        Self::new(columns, rows)
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn len(&self) -> usize {
        if self.closed {
            0
        } else {
            self.rows.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cell(&self, row: usize, column: usize) -> Option<&Value> {
        if self.closed {
            return None;
        }
        self.rows.get(row).and_then(|r| r.get(column))
    }

    pub fn get_string(&self, row: usize, column: usize) -> Option<String> {
        self.cell(row, column).and_then(Value::as_string)
    }

    pub fn get_long(&self, row: usize, column: usize) -> Option<i64> {
        self.cell(row, column).and_then(Value::as_long)
    }

    /// Map every row to a `Term`, resolving columns by name.
    ///
    /// Rows without an id are skipped; missing word or definition cells
    /// become empty strings.
    pub fn terms(&self, contract: &TermsContract) -> Vec<Term> {
        let id_col = self.column_index(&contract.column_id);
        let word_col = self.column_index(&contract.column_word);
        let def_col = self.column_index(&contract.column_definition);

        (0..self.len())
            .filter_map(|row| {
                let id = id_col.and_then(|c| self.get_long(row, c))?;
                let word = word_col.and_then(|c| self.get_string(row, c)).unwrap_or_default();
                let definition = def_col.and_then(|c| self.get_string(row, c)).unwrap_or_default();
                Some(Term { id, word, definition })
            })
            .collect()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Release the rows held by this cursor. Calling it twice is harmless.
    pub fn close(&mut self) {
        if !self.closed {
            log::debug!("Closing term cursor with {} rows", self.rows.len());
            self.rows = Vec::new();
            self.closed = true;
        }
    }
}

impl Drop for TermCursor {
    fn drop(&mut self) {
        self.close();
    }
}
