use crate::error::{ReportError, Result};
use crate::models::{EventCatalog, SeismicEvent};
use crate::utils::constants::{
    DEPTH_POSITION, MAG_POSITION, PLACE_POSITION, RETAINED_POSITIONS, TIME_POSITION, TYPE_POSITION,
};
use chrono::{DateTime, Utc};
use csv::StringRecord;
use std::fs::File;
use std::path::Path;

pub struct CatalogReader;

impl CatalogReader {
    pub fn new() -> Self {
        Self
    }

    /// Read a catalog file, keeping only the retained column positions.
    ///
    /// The file is opened, fully read, and released before this returns.
    pub fn read_catalog(&self, path: &Path) -> Result<EventCatalog> {
        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

        let headers = reader.headers()?.clone();
        let columns = self.project_header(&headers)?;

        let mut events = Vec::new();
        for row in reader.records() {
            let record = row?;
            events.push(self.parse_event(&record, &columns)?);
        }

        tracing::debug!(rows = events.len(), "catalog loaded");
        Ok(EventCatalog::new(columns, events))
    }

    /// Pick the retained column names out of the header, in source order.
    fn project_header(&self, headers: &StringRecord) -> Result<Vec<String>> {
        RETAINED_POSITIONS
            .iter()
            .map(|&position| {
                headers
                    .get(position)
                    .map(str::to_string)
                    .ok_or(ReportError::MissingColumn {
                        expected: position + 1,
                        found: headers.len(),
                    })
            })
            .collect()
    }

    fn parse_event(&self, record: &StringRecord, columns: &[String]) -> Result<SeismicEvent> {
        let time = self.parse_time(self.field(record, TIME_POSITION)?)?;
        let depth = self.parse_number(self.field(record, DEPTH_POSITION)?, &columns[1])?;
        let mag = self.parse_number(self.field(record, MAG_POSITION)?, &columns[2])?;
        let place = self.field(record, PLACE_POSITION)?.to_string();
        let event_type = self.field(record, TYPE_POSITION)?.to_string();

        Ok(SeismicEvent::new(time, depth, mag, place, event_type))
    }

    fn field<'r>(&self, record: &'r StringRecord, position: usize) -> Result<&'r str> {
        record.get(position).ok_or(ReportError::MissingColumn {
            expected: position + 1,
            found: record.len(),
        })
    }

    /// Feed timestamps are RFC 3339 UTC, e.g. `2024-07-09T14:23:55.040Z`.
    fn parse_time(&self, raw: &str) -> Result<DateTime<Utc>> {
        let parsed = DateTime::parse_from_rfc3339(raw.trim())?;
        Ok(parsed.with_timezone(&Utc))
    }

    /// An empty cell is a missing measurement, not a parse failure.
    fn parse_number(&self, raw: &str, column: &str) -> Result<Option<f64>> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }

        trimmed
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ReportError::InvalidNumber {
                column: column.to_string(),
                value: raw.to_string(),
            })
    }
}

impl Default for CatalogReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str =
        "time,latitude,longitude,depth,mag,magType,nst,gap,dmin,rms,net,id,updated,place,type";

    fn write_catalog(rows: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    #[test]
    fn test_read_catalog_projects_five_columns() -> Result<()> {
        let file = write_catalog(&[
            "2024-07-09T14:23:55.040Z,61.5,-150.0,10.5,2.1,ml,,,,0.5,ak,ak0248,2024-07-09T15:00:00.000Z,\"10 km N of Anchorage, Alaska\",earthquake",
            "2024-07-09T15:01:02.000Z,35.4,-117.7,1.2,0.9,ml,,,,0.2,ci,ci4041,2024-07-09T15:30:00.000Z,\"14 km SW of Searles Valley, CA\",earthquake",
        ]);

        let reader = CatalogReader::new();
        let catalog = reader.read_catalog(file.path())?;

        assert_eq!(
            catalog.columns(),
            ["time", "depth", "mag", "place", "type"]
        );
        assert_eq!(catalog.len(), 2);

        let first = &catalog.events()[0];
        assert_eq!(first.depth, Some(10.5));
        assert_eq!(first.mag, Some(2.1));
        assert_eq!(first.place, "10 km N of Anchorage, Alaska");
        assert_eq!(first.event_type, "earthquake");
        assert_eq!(
            first.time.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            "2024-07-09T14:23:55.040Z"
        );

        Ok(())
    }

    #[test]
    fn test_empty_cells_become_missing_values() -> Result<()> {
        let file = write_catalog(&[
            "2024-07-09T14:23:55.040Z,61.5,-150.0,,,ml,,,,0.5,ak,ak0248,2024-07-09T15:00:00.000Z,place,earthquake",
        ]);

        let reader = CatalogReader::new();
        let catalog = reader.read_catalog(file.path())?;

        assert_eq!(catalog.events()[0].depth, None);
        assert_eq!(catalog.events()[0].mag, None);

        Ok(())
    }

    #[test]
    fn test_non_numeric_depth_is_a_parse_error() {
        let file = write_catalog(&[
            "2024-07-09T14:23:55.040Z,61.5,-150.0,deep,2.1,ml,,,,0.5,ak,ak0248,2024-07-09T15:00:00.000Z,place,earthquake",
        ]);

        let reader = CatalogReader::new();
        let result = reader.read_catalog(file.path());

        assert!(matches!(
            result,
            Err(ReportError::InvalidNumber { ref column, .. }) if column == "depth"
        ));
    }

    #[test]
    fn test_short_header_is_a_lookup_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "time,latitude,longitude,depth,mag").unwrap();
        writeln!(file, "2024-07-09T14:23:55.040Z,61.5,-150.0,10.5,2.1").unwrap();

        let reader = CatalogReader::new();
        let result = reader.read_catalog(file.path());

        assert!(matches!(
            result,
            Err(ReportError::MissingColumn { found: 5, .. })
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let reader = CatalogReader::new();
        let result = reader.read_catalog(Path::new("no_such_catalog.csv"));

        assert!(matches!(result, Err(ReportError::Io(_))));
    }
}
