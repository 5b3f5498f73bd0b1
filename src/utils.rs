//! Formatting helpers shared across the pages.

use chrono::NaiveDateTime;
use unicode_segmentation::UnicodeSegmentation;

use crate::constants::TEXT_NO_GRADE;

/// Render an optional grade the way a JS number would print: `85` rather
/// than `85.0`, `N/A` when absent.
pub fn format_grade(grade: Option<f64>) -> String {
    match grade {
        None => TEXT_NO_GRADE.to_string(),
        Some(g) if g.fract() == 0.0 => format!("{:.0}", g),
        Some(g) => format!("{}", g),
    }
}

/// Value used to pre-fill a numeric input.
pub fn format_number_input(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Short date for the enrollment list, e.g. `2025-03-01`.
pub fn format_enrolled_at(ts: Option<&NaiveDateTime>) -> Option<String> {
    ts.map(|t| t.format("%Y-%m-%d").to_string())
}

/// Clip a label to `max` grapheme clusters, appending an ellipsis when cut.
pub fn truncate_label(label: &str, max: usize) -> String {
    let graphemes: Vec<&str> = label.graphemes(true).collect();
    if graphemes.len() <= max {
        return label.to_string();
    }
    let mut out: String = graphemes[..max.saturating_sub(1)].concat();
    out.push('…');
    out
}
