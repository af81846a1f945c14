use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One catalog row after projection down to the five retained columns.
///
/// The USGS feed leaves the `depth` and `mag` cells empty when the network
/// could not determine a value, so both are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeismicEvent {
    pub time: DateTime<Utc>,
    pub depth: Option<f64>,
    pub mag: Option<f64>,
    pub place: String,
    pub event_type: String,
}

impl SeismicEvent {
    pub fn new(
        time: DateTime<Utc>,
        depth: Option<f64>,
        mag: Option<f64>,
        place: String,
        event_type: String,
    ) -> Self {
        Self {
            time,
            depth,
            mag,
            place,
            event_type,
        }
    }

    pub fn has_depth(&self) -> bool {
        self.depth.is_some()
    }

    pub fn has_mag(&self) -> bool {
        self.mag.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_event_creation() {
        let time = Utc.with_ymd_and_hms(2024, 7, 15, 12, 30, 0).unwrap();
        let event = SeismicEvent::new(
            time,
            Some(10.5),
            Some(4.2),
            "22 km SE of Honiara, Solomon Islands".to_string(),
            "earthquake".to_string(),
        );

        assert_eq!(event.time, time);
        assert!(event.has_depth());
        assert!(event.has_mag());
        assert_eq!(event.event_type, "earthquake");
    }

    #[test]
    fn test_missing_measurements() {
        let time = Utc.with_ymd_and_hms(2024, 7, 15, 12, 30, 0).unwrap();
        let event = SeismicEvent::new(time, None, None, "somewhere".to_string(), "quarry blast".to_string());

        assert!(!event.has_depth());
        assert!(!event.has_mag());
    }
}
