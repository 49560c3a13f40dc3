// Plain-text rendering of dashboard sections: navigation, summary card, bar and doughnut charts
use crate::domain::aggregation::{QuarterSelection, SeriesPoint};
use crate::domain::dashboard::SectionView;
use crate::domain::dataset::DatasetKind;
use std::fmt::Write;

#[derive(Debug, Clone)]
pub struct TextRenderer {
    bar_width: usize,
}

impl TextRenderer {
    pub fn new(bar_width: usize) -> Self {
        Self { bar_width }
    }

    /// Full page: navigation, quarter selector, then the section itself.
    pub fn render_page(
        &self,
        section: &SectionView,
        quarter: &QuarterSelection,
        quarter_options: &[String],
    ) -> String {
        let mut out = String::new();
        out.push_str(&render_navigation(section.kind));
        out.push('\n');
        out.push_str(&render_quarter_selector(quarter, quarter_options));
        out.push_str("\n\n");
        out.push_str(&self.render_section(section));
        out
    }

    pub fn render_section(&self, section: &SectionView) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "== {} ==", section.title);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", section.card_title());
        let _ = writeln!(out, "  Count: {}", section.summary.count);
        let _ = writeln!(out, "  ACV: ${}", format_thousands(section.summary.acv));
        let _ = writeln!(out);
        let _ = writeln!(out, "Bar Chart");
        out.push_str(&self.render_bar_chart(&section.bar));

        if let Some(pie) = &section.pie {
            let _ = writeln!(out);
            let _ = writeln!(out, "Doughnut Chart");
            out.push_str(&render_doughnut(pie));
        }

        out
    }

    /// One row per point; the largest value spans `bar_width` cells.
    pub fn render_bar_chart(&self, series: &[SeriesPoint]) -> String {
        if series.is_empty() {
            return "  (no data)\n".to_string();
        }

        let label_width = label_width(series);
        let max = series.iter().map(|p| p.value).fold(0.0_f64, f64::max);

        let mut out = String::new();
        for point in series {
            let cells = if max > 0.0 && point.value > 0.0 {
                ((point.value / max) * self.bar_width as f64).round().max(1.0) as usize
            } else {
                0
            };
            let _ = writeln!(
                out,
                "  {:<width$} | {} {}",
                point.label,
                "#".repeat(cells),
                format_thousands(point.value),
                width = label_width
            );
        }
        out
    }
}

/// Share of the total per slice, one decimal.
pub fn render_doughnut(series: &[SeriesPoint]) -> String {
    if series.is_empty() {
        return "  (no data)\n".to_string();
    }

    let label_width = label_width(series);
    let total: f64 = series.iter().map(|p| p.value).sum();

    let mut out = String::new();
    for point in series {
        let share = if total > 0.0 {
            point.value / total * 100.0
        } else {
            0.0
        };
        let _ = writeln!(
            out,
            "  {:<width$} {:>5.1}%",
            point.label,
            share,
            width = label_width
        );
    }
    out
}

pub fn render_navigation(selected: DatasetKind) -> String {
    let items: Vec<String> = DatasetKind::ALL
        .into_iter()
        .map(|kind| {
            let label = nav_label(kind);
            if kind == selected {
                format!("[{}]", label)
            } else {
                label.to_string()
            }
        })
        .collect();
    items.join("  ")
}

pub fn render_quarter_selector(selected: &QuarterSelection, options: &[String]) -> String {
    let mut items = Vec::with_capacity(options.len() + 1);
    items.push(if *selected == QuarterSelection::All {
        "[All Quarters]".to_string()
    } else {
        "All Quarters".to_string()
    });
    for quarter in options {
        if selected.matches(quarter) && *selected != QuarterSelection::All {
            items.push(format!("[{}]", quarter));
        } else {
            items.push(quarter.clone());
        }
    }
    format!("Quarter: {}", items.join("  "))
}

fn nav_label(kind: DatasetKind) -> &'static str {
    match kind {
        DatasetKind::CustomerType => "Customer",
        DatasetKind::AccountIndustry => "Industry",
        DatasetKind::Team => "Team",
        DatasetKind::AcvRange => "ACV Range",
    }
}

fn label_width(series: &[SeriesPoint]) -> usize {
    series
        .iter()
        .map(|p| p.label.chars().count())
        .max()
        .unwrap_or(0)
}

/// en-US style grouping with at most three fraction digits: 1234567.5 → "1,234,567.5"
pub fn format_thousands(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let mut out = String::new();
    if value < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
