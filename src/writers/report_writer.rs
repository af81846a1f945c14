use crate::analyzers::{Extremum, ExtremesAnalyzer};
use crate::error::Result;
use crate::models::{EventCatalog, SeismicEvent};
use crate::utils::constants::{
    DEPTH_COLUMN, MAG_COLUMN, MAJOR_DIVIDER, MINOR_DIVIDER, PREVIEW_ROWS, TIME_FORMAT,
};
use std::io::Write;

/// Renders the report to any writer. Each section is written as soon as it
/// is computed, so a failure part-way leaves the earlier sections visible.
pub struct ReportWriter {
    preview_rows: usize,
}

impl ReportWriter {
    pub fn new() -> Self {
        Self {
            preview_rows: PREVIEW_ROWS,
        }
    }

    pub fn with_preview_rows(preview_rows: usize) -> Self {
        Self { preview_rows }
    }

    /// Write the full report in fixed order: preview, then the four
    /// extremum sections interleaved with dividers.
    pub fn write_report<W: Write>(&self, out: &mut W, catalog: &EventCatalog) -> Result<()> {
        let analyzer = ExtremesAnalyzer::new();

        writeln!(out, "{}", self.render_preview(catalog))?;
        writeln!(out, "{}", MINOR_DIVIDER)?;

        let max_depth = analyzer.largest(catalog, DEPTH_COLUMN)?;
        writeln!(out, "{}", self.render_extremum(DEPTH_COLUMN, max_depth))?;
        writeln!(out, "{}", MINOR_DIVIDER)?;

        let min_depth = analyzer.smallest(catalog, DEPTH_COLUMN)?;
        writeln!(out, "{}", self.render_extremum(DEPTH_COLUMN, min_depth))?;
        writeln!(out, "{}", MAJOR_DIVIDER)?;

        let max_mag = analyzer.largest(catalog, MAG_COLUMN)?;
        writeln!(out, "{}", self.render_extremum(MAG_COLUMN, max_mag))?;
        writeln!(out, "{}", MINOR_DIVIDER)?;

        let min_mag = analyzer.smallest(catalog, MAG_COLUMN)?;
        writeln!(out, "{}", self.render_extremum(MAG_COLUMN, min_mag))?;

        out.flush()?;
        Ok(())
    }

    /// First rows of the catalog as a right-aligned table: an unlabeled
    /// row-index gutter, then the five retained columns.
    pub fn render_preview(&self, catalog: &EventCatalog) -> String {
        let shown = catalog.head(self.preview_rows);

        let mut table = Vec::with_capacity(shown.len() + 1);
        let mut header = vec![String::new()];
        header.extend(catalog.columns().iter().cloned());
        table.push(header);

        for (row_index, event) in shown.iter().enumerate() {
            let mut row = vec![row_index.to_string()];
            row.extend(event_cells(event));
            table.push(row);
        }

        render_aligned(&table)
    }

    /// One extremum as a two-line mini-table: the column name over the
    /// value, with the original row index in the gutter.
    pub fn render_extremum(&self, column: &str, extremum: Extremum) -> String {
        let table = vec![
            vec![String::new(), column.to_string()],
            vec![
                extremum.row_index.to_string(),
                extremum.value.to_string(),
            ],
        ];

        render_aligned(&table)
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn event_cells(event: &SeismicEvent) -> [String; 5] {
    [
        event.time.format(TIME_FORMAT).to_string(),
        render_number(event.depth),
        render_number(event.mag),
        event.place.clone(),
        event.event_type.clone(),
    ]
}

/// Missing measurements render as an empty cell.
fn render_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Right-align every cell to its column width, two spaces between columns.
fn render_aligned(table: &[Vec<String>]) -> String {
    let column_count = table.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; column_count];
    for row in table {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    table
        .iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(i, cell)| format!("{:>width$}", cell, width = widths[i]))
                .collect::<Vec<_>>()
                .join("  ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
