//! Run summary and chart preview tables

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, CellAlignment, Color, Table};
use console::style;

use super::format::format_tick_label;
use crate::pipeline::{GenreRevenue, LineChartData, ScatterChartData, StageCounts};

/// Number of bars shown in the terminal preview
const BAR_PREVIEW_ROWS: usize = 10;

/// Summary of one preparation run
#[derive(Debug, Default)]
pub struct PrepSummary {
    pub counts: StageCounts,
    pub bar_groups: Option<usize>,
    pub scatter_points: Option<usize>,
    pub line_years: Option<usize>,
}

impl PrepSummary {
    pub fn new(counts: StageCounts) -> Self {
        Self {
            counts,
            ..Default::default()
        }
    }

    pub fn set_bar(&mut self, bars: &[GenreRevenue]) {
        self.bar_groups = Some(bars.len());
    }

    pub fn set_scatter(&mut self, scatter: &ScatterChartData) {
        self.scatter_points = Some(scatter.len());
    }

    pub fn set_line(&mut self, line: &LineChartData) {
        self.line_years = Some(line.dates.len());
    }

    /// Share of converted records that survived the filter, in percent
    pub fn kept_pct(&self) -> f64 {
        if self.counts.converted > 0 {
            self.counts.kept as f64 / self.counts.converted as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Build the summary table (without printing it)
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL_CONDENSED);
        table.set_header(vec![
            Cell::new("Metric").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        table.add_row(vec![
            Cell::new("📁 Rows Loaded"),
            Cell::new(self.counts.loaded),
        ]);

        table.add_row(vec![
            Cell::new("🗑️  Skipped (Malformed)"),
            Cell::new(self.counts.skipped).fg(if self.counts.skipped == 0 {
                Color::White
            } else {
                Color::Red
            }),
        ]);

        table.add_row(vec![
            Cell::new("🔄 Converted"),
            Cell::new(self.counts.converted),
        ]);

        table.add_row(vec![
            Cell::new("✅ Kept by Filter"),
            Cell::new(format!("{} ({:.1}%)", self.counts.kept, self.kept_pct()))
                .fg(Color::Green)
                .add_attribute(Attribute::Bold),
        ]);

        let charts = [
            ("📊 Bar Groups", self.bar_groups),
            ("✨ Scatter Points", self.scatter_points),
            ("📈 Line Years", self.line_years),
        ];
        for (label, value) in charts {
            if let Some(value) = value {
                table.add_row(vec![Cell::new(label), Cell::new(value).fg(Color::Cyan)]);
            }
        }

        table
    }

    pub fn display(&self) {
        println!();
        println!(
            "    {} {}",
            style("📋").cyan(),
            style("PREPARATION SUMMARY").white().bold()
        );
        println!("    {}", style("─".repeat(50)).dim());
        println!();

        // Indent the table
        for line in self.table().to_string().lines() {
            println!("    {}", line);
        }
    }
}

/// Build a table of the top bars with formatted revenue labels
pub fn bar_preview_table(bars: &[GenreRevenue]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Genre").add_attribute(Attribute::Bold),
        Cell::new("Revenue").add_attribute(Attribute::Bold),
    ]);

    for bar in bars.iter().take(BAR_PREVIEW_ROWS) {
        let revenue = bar
            .revenue
            .value()
            .map(format_tick_label)
            .unwrap_or_else(|| "invalid".to_string());
        table.add_row(vec![
            Cell::new(&bar.genre),
            Cell::new(revenue).set_alignment(CellAlignment::Right),
        ]);
    }

    table
}

/// Print the bar preview, noting how many genres were left out
pub fn display_bar_preview(bars: &[GenreRevenue]) {
    if bars.is_empty() {
        return;
    }

    println!();
    println!(
        "    {} {}",
        style("📊").cyan(),
        style("TOTAL REVENUE BY GENRE").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();

    for line in bar_preview_table(bars).to_string().lines() {
        println!("    {}", line);
    }

    if bars.len() > BAR_PREVIEW_ROWS {
        println!(
            "      {}",
            style(format!("… {} more genre(s)", bars.len() - BAR_PREVIEW_ROWS)).dim()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::Numeric;

    #[test]
    fn test_kept_pct() {
        let summary = PrepSummary::new(StageCounts {
            loaded: 10,
            skipped: 2,
            converted: 8,
            kept: 2,
        });
        assert!((summary.kept_pct() - 25.0).abs() < 1e-9);
        assert_eq!(PrepSummary::default().kept_pct(), 0.0);
    }

    #[test]
    fn test_bar_preview_formats_revenue() {
        let bars = vec![
            GenreRevenue {
                genre: "Action".to_string(),
                revenue: Numeric::Valid(1_500_000_000.0),
            },
            GenreRevenue {
                genre: "Mystery".to_string(),
                revenue: Numeric::Invalid,
            },
        ];
        let rendered = bar_preview_table(&bars).to_string();
        assert!(rendered.contains("1.5 bil"));
        assert!(rendered.contains("invalid"));
    }

    #[test]
    fn test_summary_lists_only_built_charts() {
        let mut summary = PrepSummary::new(StageCounts::default());
        summary.set_bar(&[]);
        let rendered = summary.table().to_string();
        assert!(rendered.contains("Bar Groups"));
        assert!(!rendered.contains("Line Years"));
    }
}
