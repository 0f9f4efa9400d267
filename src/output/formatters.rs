//! Formatting utilities for terminal output

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a count relative to the largest count in the same listing
#[must_use]
pub fn frequency_bar(count: usize, max_count: usize, width: usize) -> String {
    create_progress_bar(count as f64, max_count as f64, width)
}

/// `source -> target, target` line for one relation
#[must_use]
pub fn relation_line(source: &str, targets: &[String]) -> String {
    format!("{source} -> {}", targets.join(", "))
}

/// Share of `part` in `total` as a percentage
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
