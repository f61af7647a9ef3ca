use anyhow::{Context, Result};

use patente_lib::vocabulary::collection::{count_mastered, progress_by_category};

use crate::app::App;
use crate::render::terminal::{paint, progress_bar, Color};
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat, use_color: bool) -> Result<()> {
    let items = app.store.load_vocabulary().context("Failed to load vocabulary")?;
    let mut stats = app.store.load_stats().context("Failed to load stats")?;
    stats.refresh_learned(&items);

    let mastered = count_mastered(&items);
    let progress = progress_by_category(&items);

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "totalItems": items.len(),
                "learnedCount": stats.learned_count,
                "masteredCount": mastered,
                "totalCorrect": stats.total_correct,
                "totalAttempts": stats.total_attempts,
                "accuracy": stats.accuracy(),
                "categories": progress,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            let accuracy = stats
                .accuracy()
                .map(|a| format!("{:.0}%", a * 100.0))
                .unwrap_or_else(|| "-".to_string());

            println!("{}", paint("Progress", Color::BOLD, use_color));
            println!("  Attempts:  {}", stats.total_attempts);
            println!("  Correct:   {} ({})", stats.total_correct, accuracy);
            println!("  Learned:   {}/{}", stats.learned_count, items.len());
            println!("  Mastered:  {}", mastered);
            println!();

            for entry in &progress {
                let bar = progress_bar(entry.percent, 20);
                let color = if entry.percent == 100 { Color::GREEN } else { Color::CYAN };
                println!(
                    "  {} {:>3}% {:>3}/{:<3} {}",
                    paint(&bar, color, use_color),
                    entry.percent,
                    entry.learned,
                    entry.total,
                    entry.category
                );
            }
        }
    }

    Ok(())
}
