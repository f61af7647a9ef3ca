use patente_lib::vocabulary::algorithm::{format_interval, DAY_MS};

/// ANSI color codes
pub struct Color;

impl Color {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";
    pub const RED: &'static str = "\x1b[31m";
    pub const GREEN: &'static str = "\x1b[32m";
    pub const YELLOW: &'static str = "\x1b[33m";
    pub const CYAN: &'static str = "\x1b[36m";
}

/// Wrap `text` in `color` when colors are enabled
pub fn paint(text: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", color, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Fixed-width bar like `[#####-----]`
pub fn progress_bar(percent: u32, width: usize) -> String {
    let filled = (percent.min(100) as usize * width + 50) / 100;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// Time until `next_review_date` as `now`, `3d`, `2w`, ...
pub fn due_in(next_review_date: i64, now: i64) -> String {
    let remaining = next_review_date - now;
    if remaining <= 0 {
        return format_interval(0);
    }
    // Round up so an item due in 20 hours reads as 1d
    format_interval((remaining + DAY_MS - 1) / DAY_MS)
}

/// Repetition streak as dots, capped at `max`
pub fn streak_dots(repetition: u32, max: u32, use_color: bool) -> String {
    let filled = repetition.min(max) as usize;
    let empty = max as usize - filled;
    format!(
        "{}{}",
        paint(&"●".repeat(filled), Color::CYAN, use_color && filled > 0),
        paint(&"○".repeat(empty), Color::DIM, use_color && empty > 0)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0, 10), "[----------]");
        assert_eq!(progress_bar(33, 10), "[###-------]");
        assert_eq!(progress_bar(100, 10), "[##########]");
        assert_eq!(progress_bar(150, 4), "[####]");
    }

    #[test]
    fn test_due_in() {
        assert_eq!(due_in(0, 1_000), "now");
        assert_eq!(due_in(1_000 + DAY_MS / 2, 1_000), "1d");
        assert_eq!(due_in(1_000 + 15 * DAY_MS, 1_000), "2w");
    }

    #[test]
    fn test_streak_dots_plain() {
        assert_eq!(streak_dots(2, 5, false), "●●○○○");
        assert_eq!(streak_dots(9, 5, false), "●●●●●");
    }
}
