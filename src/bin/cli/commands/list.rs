use anyhow::Result;

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, sort: Option<&str>, format: &OutputFormat, use_color: bool) -> Result<()> {
    let terms = app.list_terms(sort)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&terms)?);
        }
        OutputFormat::Plain => {
            if terms.is_empty() {
                println!("(no terms)");
                return Ok(());
            }
            for term in &terms {
                println!("{}", terminal::render_term_line(term, use_color));
            }
        }
    }

    Ok(())
}
