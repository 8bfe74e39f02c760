use chrono::{DateTime, Utc};

/// Parse the backend's `generated_at` stamp (ISO 8601, UTC).
///
/// The backend emits `datetime.utcnow().isoformat() + "Z"`, i.e.
/// microsecond precision with a literal Z suffix.
pub fn parse_generated_at(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn parses_backend_stamp() {
        let dt = parse_generated_at("2026-08-07T11:30:00.123456Z").unwrap();
        assert_eq!(dt.hour(), 11);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn parses_without_fraction() {
        assert!(parse_generated_at("2026-08-07T11:30:00Z").is_some());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_generated_at("ontem").is_none());
    }
}
