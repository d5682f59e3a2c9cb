use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use quizapp_lib::provider::{MemoryTermsProvider, QueryArgs, SqliteTermsProvider, TermsProvider};
use quizapp_lib::{QuizConfig, Term};

/// Command line values that take precedence over the config file
#[derive(Debug, Default)]
pub struct Overrides {
    pub config: Option<PathBuf>,
    pub database: Option<PathBuf>,
    pub terms_json: Option<PathBuf>,
}

/// Shared application state for CLI commands
pub struct App {
    pub config: QuizConfig,
    pub provider: Arc<dyn TermsProvider>,
}

impl App {
    pub fn new(overrides: Overrides) -> Result<Self> {
        let mut config = QuizConfig::load(overrides.config.as_deref())
            .context("Failed to load config")?;

        if let Some(database) = overrides.database {
            config.provider.database = Some(database);
            config.provider.terms_json = None;
        }
        if let Some(terms_json) = overrides.terms_json {
            config.provider.terms_json = Some(terms_json);
        }

        let provider: Arc<dyn TermsProvider> = match &config.provider.terms_json {
            Some(path) => {
                log::info!("Reading terms from {}", path.display());
                let provider = MemoryTermsProvider::from_json_file(config.contract.clone(), path)
                    .with_context(|| format!("Failed to read terms from {}", path.display()))?;
                Arc::new(provider)
            }
            None => {
                let db_path = config
                    .database_path()
                    .context("Failed to determine the terms database location")?;
                log::info!("Reading terms from database {}", db_path.display());
                Arc::new(SqliteTermsProvider::new(config.contract.clone(), db_path))
            }
        };

        Ok(Self { config, provider })
    }

    /// Query every term, optionally sorted
    pub fn list_terms(&self, sort_order: Option<&str>) -> Result<Vec<Term>> {
        let args = QueryArgs {
            sort_order: sort_order.map(str::to_string),
            ..Default::default()
        };
        let cursor = self
            .provider
            .query(&self.config.contract.content_uri(), &args)
            .context("Failed to query terms")?;

        Ok(cursor
            .map(|c| c.terms(&self.config.contract))
            .unwrap_or_default())
    }

    /// Query a single term through its item URI
    pub fn get_term(&self, id: i64) -> Result<Option<Term>> {
        let uri = self.config.contract.build_term_uri_with_id(id);
        let cursor = self
            .provider
            .query(&uri, &QueryArgs::default())
            .with_context(|| format!("Failed to query {}", uri))?;

        Ok(cursor.and_then(|c| c.terms(&self.config.contract).into_iter().next()))
    }
}
