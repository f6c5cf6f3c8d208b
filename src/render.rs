use crate::pet_classifier::prediction::Prediction;

const BAR_WIDTH: usize = 20;

pub fn format_percent(probability: f32) -> String {
    format!("{:.1}%", probability * 100.0)
}

fn bar(probability: f32) -> String {
    let filled = ((probability.clamp(0.0, 1.0) * BAR_WIDTH as f32).round() as usize).min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Top `n` results as an indented block, one line per class.
pub fn render_text(source: &str, prediction: &Prediction, n: usize) -> String {
    let mut lines = vec![source.to_string()];
    for entry in prediction.top(n) {
        lines.push(format!(
            "  {} {:>6}  {}",
            bar(entry.probability),
            format_percent(entry.probability),
            entry.label()
        ));
    }
    lines.join("\n")
}
