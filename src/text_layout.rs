//! Text layout helpers: line breaking and label formatting

use crate::font_metrics::text_width_mm;
use crate::types::FontWeight;

/// Line breaker for wrapping text to a fixed width
pub struct LineBreaker {
    max_width: f64,
}

impl LineBreaker {
    /// `max_width` in millimetres
    pub fn new(max_width: f64) -> Self {
        Self { max_width }
    }

    /// Greedy word wrap on whitespace
    ///
    /// A word wider than the line is kept whole on its own line.
    pub fn break_text(&self, text: &str, font_size: f64, weight: FontWeight) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();

        for word in text.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate_width = text_width_mm(&current, font_size, weight)
                + text_width_mm(" ", font_size, weight)
                + text_width_mm(word, font_size, weight);
            if candidate_width <= self.max_width {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }

        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

/// Turn a camelCase key into a spaced, capitalized label
///
/// `maxReach` becomes `Max Reach`, `fuelType` becomes `Fuel Type`.
pub fn humanize_label(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    let trimmed = spaced.trim();
    let mut chars = trimmed.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Daily rate as printed on the contract
pub fn format_rate(rate: f64) -> String {
    format!("${:.2}", rate)
}
