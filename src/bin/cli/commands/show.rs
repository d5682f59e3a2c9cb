use anyhow::{bail, Result};

use crate::app::App;
use crate::render::terminal;
use crate::OutputFormat;

pub fn run(app: &App, id: i64, format: &OutputFormat, use_color: bool) -> Result<()> {
    let Some(term) = app.get_term(id)? else {
        bail!("No term with id {}", id);
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&term)?),
        OutputFormat::Plain => println!("{}", terminal::render_term(&term, use_color)),
    }

    Ok(())
}
