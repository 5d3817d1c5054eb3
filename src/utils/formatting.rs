//! Formatting utilities used for CLI and notification outputs.

/// Render an hour amount without noise: `120`, `2.5`, `1.25`.
pub fn fmt_hours(hours: f64) -> String {
    if hours.fract() == 0.0 {
        format!("{:.0}", hours)
    } else {
        let s = format!("{:.2}", hours);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Cut `s` to at most `max` visible characters, ending with `...` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

/// Text progress bar, e.g. `[#####-----]` for 50%.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
