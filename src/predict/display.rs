//! Terminal formatting for predictions and importance charts

use crate::predict::{ImportanceEntry, PricePrediction};
use crate::CarRecord;

/// Format a price with thousands separators, no decimals and a currency
/// suffix, e.g. `86,500 SAR`
pub fn format_price(price: f64, currency: &str) -> String {
    let rounded = price.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-{} {}", grouped, currency)
    } else {
        format!("{} {}", grouped, currency)
    }
}

/// Format a prediction for display
pub fn format_prediction(record: &CarRecord, pred: &PricePrediction, currency: &str) -> String {
    let mut out = format!(
        r#"
┌─────────────────────────────────────────────────┐
│  {} {} · {} · {} · {}
│  {:.1} L · {} km
├─────────────────────────────────────────────────┤
│  Estimated price:  {}
└─────────────────────────────────────────────────┘
"#,
        record.year,
        record.make,
        record.color,
        record.options,
        record.gear_type,
        record.engine_size,
        group_mileage(record.mileage),
        format_price(pred.price, currency),
    );
    if !pred.uncovered.is_empty() {
        out.push_str(&format!(
            "Note: the model was not trained on {}; the estimate ignores that field.\n",
            pred.uncovered.join(", ")
        ));
    }
    out
}

fn group_mileage(mileage: u32) -> String {
    format_price(mileage as f64, "")
        .trim_end()
        .to_string()
}

/// Render the top importance entries as a horizontal bar chart
pub fn render_importance_chart(entries: &[ImportanceEntry], width: usize) -> String {
    if entries.is_empty() {
        return "  (no importance scores)\n".to_string();
    }
    let max_score = entries
        .iter()
        .map(|e| e.score)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(f64::MIN_POSITIVE);
    let label_width = entries
        .iter()
        .map(|e| e.column.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for entry in entries {
        let bar_len = ((entry.score / max_score) * width as f64).round() as usize;
        // Keep nonzero scores visible even when dwarfed by the leader.
        let bar_len = if entry.score > 0.0 { bar_len.max(1) } else { 0 };
        out.push_str(&format!(
            "  {:<label_width$}  {:<width$}  {:.4}\n",
            entry.column,
            "█".repeat(bar_len),
            entry.score,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_groups_thousands() {
        assert_eq!(format_price(86_500.0, "SAR"), "86,500 SAR");
        assert_eq!(format_price(1_234_567.0, "SAR"), "1,234,567 SAR");
        assert_eq!(format_price(950.0, "SAR"), "950 SAR");
    }

    #[test]
    fn test_format_price_rounds_to_whole() {
        assert_eq!(format_price(123_456.7, "SAR"), "123,457 SAR");
        assert_eq!(format_price(99.4, "SAR"), "99 SAR");
    }

    #[test]
    fn test_format_price_negative() {
        assert_eq!(format_price(-1_500.0, "SAR"), "-1,500 SAR");
    }

    #[test]
    fn test_chart_scales_to_leader() {
        let entries = vec![
            ImportanceEntry {
                column: "Year".to_string(),
                score: 0.5,
            },
            ImportanceEntry {
                column: "Mileage".to_string(),
                score: 0.25,
            },
        ];
        let chart = render_importance_chart(&entries, 20);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches('█').count(), 20);
        assert_eq!(lines[1].matches('█').count(), 10);
    }

    #[test]
    fn test_chart_keeps_small_scores_visible() {
        let entries = vec![
            ImportanceEntry {
                column: "Year".to_string(),
                score: 1.0,
            },
            ImportanceEntry {
                column: "Color_Oily".to_string(),
                score: 0.001,
            },
        ];
        let chart = render_importance_chart(&entries, 20);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[1].matches('█').count(), 1);
    }

    #[test]
    fn test_chart_zero_score_has_no_bar() {
        let entries = vec![
            ImportanceEntry {
                column: "Year".to_string(),
                score: 1.0,
            },
            ImportanceEntry {
                column: "Color_Navy".to_string(),
                score: 0.0,
            },
        ];
        let chart = render_importance_chart(&entries, 20);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines[1].matches('█').count(), 0);
    }
}
