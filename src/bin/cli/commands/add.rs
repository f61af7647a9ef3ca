use anyhow::{Context, Result};

use patente_lib::vocabulary::Category;

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &App,
    prompt: &str,
    answer: &str,
    category: Category,
    format: &OutputFormat,
) -> Result<()> {
    let item = app
        .store
        .add_custom_item(prompt, answer, category)
        .context("Failed to add word")?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&item)?);
        }
        OutputFormat::Plain => {
            println!(
                "Added \"{}\" = \"{}\" to {} ({})",
                item.prompt, item.answer, item.category, item.id
            );
        }
    }

    Ok(())
}
