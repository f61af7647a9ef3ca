use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, term: &str, format: &OutputFormat) -> Result<()> {
    let text = app.explain(term)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({ "term": term, "explanation": text });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => println!("{}", text),
    }

    Ok(())
}
