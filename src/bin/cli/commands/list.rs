use anyhow::{Context, Result};

use patente_lib::vocabulary::algorithm::{format_interval, now_millis, preview_intervals};
use patente_lib::vocabulary::{CategoryFilter, LearningItem};

use crate::app::App;
use crate::render::terminal::{due_in, paint, Color};
use crate::OutputFormat;

pub fn run(
    app: &App,
    filter: CategoryFilter,
    due_only: bool,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let now = now_millis();
    let items: Vec<LearningItem> = app
        .store
        .load_vocabulary()
        .context("Failed to load vocabulary")?
        .into_iter()
        .filter(|i| filter.matches(i))
        .filter(|i| !due_only || i.is_due(now))
        .collect();

    match format {
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = items
                .iter()
                .map(|item| {
                    let [again, hard, good, easy] = preview_intervals(item);
                    let mut value = serde_json::to_value(item)?;
                    value["preview"] = serde_json::json!({
                        "again": again,
                        "hard": hard,
                        "good": good,
                        "easy": easy,
                    });
                    Ok(value)
                })
                .collect::<Result<_, serde_json::Error>>()?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if items.is_empty() {
                println!("(no items)");
                return Ok(());
            }

            for item in &items {
                let when = due_in(item.next_review_date, now);
                let when = if item.is_due(now) {
                    paint(&when, Color::YELLOW, use_color)
                } else {
                    paint(&when, Color::DIM, use_color)
                };
                println!(
                    "{} = {}  rep {} | {}d | ef {:.2} | due {} | next {}",
                    paint(&item.prompt, Color::BOLD, use_color),
                    item.answer,
                    item.repetition,
                    item.interval,
                    item.ease_factor,
                    when,
                    paint(&preview_label(item), Color::DIM, use_color)
                );
            }
            println!();
            println!("{} items", items.len());
        }
    }

    Ok(())
}

/// Interval each rating would give, as "again/hard/good/easy"
fn preview_label(item: &LearningItem) -> String {
    preview_intervals(item)
        .map(|days| format_interval(days as i64))
        .join("/")
}
