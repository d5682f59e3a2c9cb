use anyhow::Result;

use quizapp_lib::TermsContract;

use crate::app::App;
use crate::render::terminal::Color;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let contract = &app.config.contract;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "authority": contract.authority,
                "contentUri": contract.content_uri().to_string(),
                "itemUri": format!("{}/{{id}}", contract.content_uri()),
                "contentType": contract.content_type(),
                "contentItemType": contract.content_item_type(),
                "columns": contract.columns(),
                "table": contract.terms_table,
                "databaseName": contract.database_name,
                "databaseVersion": contract.database_version,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let label = |name: &str| {
                if use_color {
                    format!("{}{:<18}{}", Color::CYAN, name, Color::RESET)
                } else {
                    format!("{:<18}", name)
                }
            };
            println!("{}{}", label("authority"), contract.authority);
            println!("{}{}", label("content uri"), contract.content_uri());
            println!("{}{}/{{id}}", label("item uri"), contract.content_uri());
            println!("{}{}", label("content type"), contract.content_type());
            println!("{}{}", label("item type"), contract.content_item_type());
            println!(
                "{}{} [{}, {}, {}]",
                label("columns"),
                contract.columns().join(", "),
                TermsContract::COLUMN_INDEX_ID,
                TermsContract::COLUMN_INDEX_WORD,
                TermsContract::COLUMN_INDEX_DEFINITION
            );
            println!(
                "{}{} (table {}, version {})",
                label("database"),
                contract.database_name,
                contract.terms_table,
                contract.database_version
            );
        }
    }

    Ok(())
}
