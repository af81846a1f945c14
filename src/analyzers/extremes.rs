use crate::error::{ReportError, Result};
use crate::models::EventCatalog;

/// A single selected row: its 0-based index among the data rows (header
/// excluded) and the value it attains in the inspected column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum {
    pub row_index: usize,
    pub value: f64,
}

pub struct ExtremesAnalyzer;

impl ExtremesAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Row with the largest value of the named column.
    pub fn largest(&self, catalog: &EventCatalog, column: &str) -> Result<Extremum> {
        self.select(catalog, column, |candidate, best| candidate > best)
    }

    /// Row with the smallest value of the named column.
    pub fn smallest(&self, catalog: &EventCatalog, column: &str) -> Result<Extremum> {
        self.select(catalog, column, |candidate, best| candidate < best)
    }

    /// Scan in file order. Missing values are excluded; on ties the first
    /// row in file order wins (strict comparison never replaces the holder).
    fn select<F>(&self, catalog: &EventCatalog, column: &str, wins: F) -> Result<Extremum>
    where
        F: Fn(f64, f64) -> bool,
    {
        let accessor = catalog.numeric_column(column)?;

        let mut best: Option<Extremum> = None;
        let mut skipped = 0usize;

        for (row_index, event) in catalog.events().iter().enumerate() {
            let Some(value) = accessor.value(event) else {
                skipped += 1;
                continue;
            };

            let replaces = match best {
                Some(ref current) => wins(value, current.value),
                None => true,
            };
            if replaces {
                best = Some(Extremum { row_index, value });
            }
        }

        if skipped > 0 {
            tracing::debug!(column, skipped, "missing values excluded from selection");
        }

        best.ok_or_else(|| ReportError::EmptyColumn(column.to_string()))
    }
}

impl Default for ExtremesAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
