//! Read-only adapter over the terms provider's SQLite database

use std::path::{Path, PathBuf};

use rusqlite::types::Value as SqlValue;
use rusqlite::{params_from_iter, Connection, OpenFlags};

use super::{parse_sort_order, resolve_projection, QueryArgs, Result, SortDirection, TermsProvider};
use super::ProviderError;
use crate::contract::{ContentUri, TermsContract, UriMatch};
use crate::terms::{TermCursor, Value};

/// Queries the provider's database file. The file is opened read-only for
/// every query and never created or modified.
pub struct SqliteTermsProvider {
    contract: TermsContract,
    db_path: PathBuf,
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

impl SqliteTermsProvider {
    pub fn new(contract: TermsContract, db_path: PathBuf) -> Self {
        Self { contract, db_path }
    }

    /// Default location: `{data_dir}/quizapp/{database_name}.db`
    pub fn default_database_path(contract: &TermsContract) -> Option<PathBuf> {
        dirs::data_dir().map(|d| {
            d.join("quizapp")
                .join(format!("{}.db", contract.database_name))
        })
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn open(&self) -> Result<Connection> {
        let conn = Connection::open_with_flags(
            &self.db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
        if version != self.contract.database_version {
            log::warn!(
                "Terms database {} has version {}, expected {}",
                self.db_path.display(),
                version,
                self.contract.database_version
            );
        }

        Ok(conn)
    }

    fn build_sql(&self, matched: UriMatch, args: &QueryArgs) -> Result<(String, Vec<SqlValue>)> {
        let projection = resolve_projection(&self.contract, args)?;
        let mut sql = format!(
            "SELECT {} FROM {}",
            projection
                .iter()
                .map(|c| quote_ident(c))
                .collect::<Vec<_>>()
                .join(", "),
            quote_ident(&self.contract.terms_table)
        );

        let mut clauses = Vec::new();
        let mut params = Vec::new();

        if let UriMatch::TermWithId(id) = matched {
            clauses.push(format!("{} = ?", quote_ident(&self.contract.column_id)));
            params.push(SqlValue::Integer(id));
        }
        if let Some(selection) = args.selection.as_deref().filter(|s| !s.trim().is_empty()) {
            clauses.push(format!("({})", selection));
            params.extend(args.selection_args.iter().cloned().map(SqlValue::Text));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }

        if let Some(sort_order) = args.sort_order.as_deref().filter(|s| !s.trim().is_empty()) {
            let keys = parse_sort_order(&self.contract, sort_order)?;
            let order = keys
                .iter()
                .map(|k| {
                    let dir = match k.direction {
                        SortDirection::Asc => "ASC",
                        SortDirection::Desc => "DESC",
                    };
                    format!("{} {}", quote_ident(&k.column), dir)
                })
                .collect::<Vec<_>>()
                .join(", ");
            sql.push_str(" ORDER BY ");
            sql.push_str(&order);
        }

        Ok((sql, params))
    }
}

impl TermsProvider for SqliteTermsProvider {
    fn query(&self, uri: &ContentUri, args: &QueryArgs) -> Result<Option<TermCursor>> {
        let matched = self
            .contract
            .match_uri(uri)
            .ok_or_else(|| ProviderError::UnknownUri(uri.to_string()))?;

        if !self.db_path.exists() {
            log::warn!(
                "Terms provider database not found at {}",
                self.db_path.display()
            );
            return Ok(None);
        }

        let conn = self.open()?;
        let (sql, params) = self.build_sql(matched, args)?;
        log::debug!("Querying {}: {}", uri, sql);

        let mut stmt = conn.prepare(&sql)?;
        let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
        let column_count = columns.len();

        let rows = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                (0..column_count)
                    .map(|i| row.get::<_, SqlValue>(i).map(Value::from))
                    .collect::<rusqlite::Result<Vec<_>>>()
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        log::info!("Fetched {} rows from {}", rows.len(), uri);
        Ok(Some(TermCursor::new(columns, rows)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_db(dir: &TempDir, version: i32) -> PathBuf {
        let path = dir.path().join("terms.db");
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(&format!(
            r#"
            CREATE TABLE term_entries (
                _id INTEGER PRIMARY KEY AUTOINCREMENT,
                word TEXT NOT NULL,
                definition TEXT NOT NULL
            );
            INSERT INTO term_entries (word, definition) VALUES ('cat', 'a feline');
            INSERT INTO term_entries (word, definition) VALUES ('dog', 'a canine');
            INSERT INTO term_entries (word, definition) VALUES ('ant', 'an insect');
            PRAGMA user_version = {};
            "#,
            version
        ))
        .unwrap();
        path
    }

    fn provider(dir: &TempDir) -> SqliteTermsProvider {
        SqliteTermsProvider::new(TermsContract::default(), create_db(dir, 1))
    }

    #[test]
    fn test_query_all_terms() {
        let dir = TempDir::new().unwrap();
        let provider = provider(&dir);
        let contract = TermsContract::default();

        let cursor = provider
            .query(&contract.content_uri(), &QueryArgs::default())
            .unwrap()
            .unwrap();

        assert_eq!(cursor.column_names(), &["_id", "word", "definition"]);
        let words: Vec<String> = cursor.terms(&contract).into_iter().map(|t| t.word).collect();
        assert_eq!(words, vec!["cat", "dog", "ant"]);
    }

    #[test]
    fn test_query_single_term() {
        let dir = TempDir::new().unwrap();
        let provider = provider(&dir);
        let contract = TermsContract::default();

        let cursor = provider
            .query(&contract.build_term_uri_with_id(2), &QueryArgs::default())
            .unwrap()
            .unwrap();
        let terms = cursor.terms(&contract);
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].definition, "a canine");
    }

    #[test]
    fn test_query_with_selection_and_sort() {
        let dir = TempDir::new().unwrap();
        let provider = provider(&dir);
        let contract = TermsContract::default();

        let args = QueryArgs {
            projection: Some(vec!["word".to_string()]),
            selection: Some("word <> ?".to_string()),
            selection_args: vec!["dog".to_string()],
            sort_order: Some("word ASC".to_string()),
        };
        let cursor = provider.query(&contract.content_uri(), &args).unwrap().unwrap();
        assert_eq!(cursor.column_names(), &["word"]);
        assert_eq!(cursor.len(), 2);
        assert_eq!(cursor.get_string(0, 0).as_deref(), Some("ant"));
        assert_eq!(cursor.get_string(1, 0).as_deref(), Some("cat"));
    }

    #[test]
    fn test_missing_database_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let provider = SqliteTermsProvider::new(TermsContract::default(), dir.path().join("nope.db"));
        let result = provider
            .query(&TermsContract::default().content_uri(), &QueryArgs::default())
            .unwrap();
        assert!(result.is_none());
        assert!(!dir.path().join("nope.db").exists());
    }

    #[test]
    fn test_unknown_uri() {
        let dir = TempDir::new().unwrap();
        let provider = provider(&dir);
        let uri = ContentUri::parse("content://someone.else/terms").unwrap();
        assert!(matches!(
            provider.query(&uri, &QueryArgs::default()),
            Err(ProviderError::UnknownUri(_))
        ));
    }

    #[test]
    fn test_version_mismatch_still_queries() {
        let dir = TempDir::new().unwrap();
        let provider = SqliteTermsProvider::new(TermsContract::default(), create_db(&dir, 7));
        let cursor = provider
            .query(&TermsContract::default().content_uri(), &QueryArgs::default())
            .unwrap()
            .unwrap();
        assert_eq!(cursor.len(), 3);
    }
}
