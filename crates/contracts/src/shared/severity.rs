use serde::{Deserialize, Serialize};

/// Severity scale used by insights and recommendations.
///
/// The backend sends it as a free string; parsing is lenient and
/// anything unrecognized lands on `Info` so a new backend value never
/// breaks rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Baixo,
    Medio,
    Alto,
}

impl Severity {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "alto" | "alta" | "high" => Severity::Alto,
            "medio" | "média" | "media" | "médio" | "medium" => Severity::Medio,
            "baixo" | "baixa" | "low" => Severity::Baixo,
            _ => Severity::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Alto => "alto",
            Severity::Medio => "medio",
            Severity::Baixo => "baixo",
            Severity::Info => "info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_values() {
        assert_eq!(Severity::parse("alto"), Severity::Alto);
        assert_eq!(Severity::parse("Medio"), Severity::Medio);
        assert_eq!(Severity::parse(" baixo "), Severity::Baixo);
        assert_eq!(Severity::parse("info"), Severity::Info);
    }

    #[test]
    fn unknown_values_fall_back_to_info() {
        assert_eq!(Severity::parse(""), Severity::Info);
        assert_eq!(Severity::parse("critical!!"), Severity::Info);
    }

    #[test]
    fn orders_by_urgency() {
        assert!(Severity::Alto > Severity::Medio);
        assert!(Severity::Medio > Severity::Baixo);
        assert!(Severity::Baixo > Severity::Info);
    }
}
