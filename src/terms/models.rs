//! Data models for terms

use serde::{Deserialize, Serialize};

/// One word/definition pair served by the terms provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub id: i64,
    pub word: String,
    pub definition: String,
}

impl Term {
    pub fn new(id: i64, word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            id,
            word: word.into(),
            definition: definition.into(),
        }
    }
}

/// A single cell of a query result
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl Value {
    /// Read the cell as text, converting numbers
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Integer(i) => Some(i.to_string()),
            Value::Real(r) => Some(r.to_string()),
            Value::Text(s) => Some(s.clone()),
        }
    }

    /// Read the cell as an integer, parsing text when possible
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Null => None,
            Value::Integer(i) => Some(*i),
            Value::Real(r) => Some(*r as i64),
            Value::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<rusqlite::types::Value> for Value {
    fn from(value: rusqlite::types::Value) -> Self {
        use rusqlite::types::Value as Sql;
        match value {
            Sql::Null => Value::Null,
            Sql::Integer(i) => Value::Integer(i),
            Sql::Real(r) => Value::Real(r),
            Sql::Text(s) => Value::Text(s),
            Sql::Blob(b) => Value::Text(String::from_utf8_lossy(&b).into_owned()),
        }
    }
}
