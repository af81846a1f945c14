use crate::error::{ReportError, Result};
use crate::models::SeismicEvent;
use crate::utils::constants::{DEPTH_COLUMN, MAG_COLUMN};

/// Typed accessor for the numeric catalog columns, resolved from a column
/// name once per analysis pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericColumn {
    Depth,
    Magnitude,
}

impl NumericColumn {
    pub fn value(&self, event: &SeismicEvent) -> Option<f64> {
        match self {
            NumericColumn::Depth => event.depth,
            NumericColumn::Magnitude => event.mag,
        }
    }
}

/// The loaded catalog: the five retained column names in source order plus
/// every data row in file order. Read-only after load.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    columns: Vec<String>,
    events: Vec<SeismicEvent>,
}

impl EventCatalog {
    pub fn new(columns: Vec<String>, events: Vec<SeismicEvent>) -> Self {
        Self { columns, events }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn events(&self) -> &[SeismicEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// First `n` rows in file order, or fewer if the catalog is smaller.
    pub fn head(&self, n: usize) -> &[SeismicEvent] {
        &self.events[..n.min(self.events.len())]
    }

    /// Resolve a column name to its typed numeric accessor.
    pub fn numeric_column(&self, name: &str) -> Result<NumericColumn> {
        if !self.columns.iter().any(|column| column == name) {
            return Err(ReportError::ColumnNotFound(name.to_string()));
        }

        match name {
            DEPTH_COLUMN => Ok(NumericColumn::Depth),
            MAG_COLUMN => Ok(NumericColumn::Magnitude),
            _ => Err(ReportError::ColumnNotNumeric(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_catalog() -> EventCatalog {
        let time = Utc.with_ymd_and_hms(2024, 7, 15, 0, 0, 0).unwrap();
        let events = vec![
            SeismicEvent::new(time, Some(5.0), Some(2.1), "a".to_string(), "earthquake".to_string()),
            SeismicEvent::new(time, Some(12.3), None, "b".to_string(), "earthquake".to_string()),
        ];
        let columns = vec![
            "time".to_string(),
            "depth".to_string(),
            "mag".to_string(),
            "place".to_string(),
            "type".to_string(),
        ];
        EventCatalog::new(columns, events)
    }

    #[test]
    fn test_head_clamps_to_row_count() {
        let catalog = sample_catalog();
        assert_eq!(catalog.head(10).len(), 2);
        assert_eq!(catalog.head(1).len(), 1);
    }

    #[test]
    fn test_numeric_column_resolution() {
        let catalog = sample_catalog();

        let depth = catalog.numeric_column("depth").unwrap();
        assert_eq!(depth, NumericColumn::Depth);
        assert_eq!(depth.value(&catalog.events()[1]), Some(12.3));

        let mag = catalog.numeric_column("mag").unwrap();
        assert_eq!(mag.value(&catalog.events()[1]), None);
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        let catalog = sample_catalog();
        assert!(matches!(
            catalog.numeric_column("rms"),
            Err(ReportError::ColumnNotFound(_))
        ));
    }

    #[test]
    fn test_non_numeric_column_is_rejected() {
        let catalog = sample_catalog();
        assert!(matches!(
            catalog.numeric_column("place"),
            Err(ReportError::ColumnNotNumeric(_))
        ));
    }
}
