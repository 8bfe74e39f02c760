//! Display formatting (pt-BR conventions).
//!
//! All values arrive pre-computed from the backend; these helpers only
//! change how they read on screen.

/// "2026-07-28" (or an ISO datetime) -> "28/07/2026".
/// Unrecognized input is shown as-is.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            if !day.is_empty() {
                return format!("{}/{}/{}", day, month, year);
            }
        }
    }
    date_str.to_string()
}

/// Number with dot thousands separator and comma decimals.
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value, prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    let digits: Vec<char> = integer_part.chars().rev().collect();
    let mut count = 0;
    for c in digits {
        if c.is_ascii_digit() {
            if count > 0 && count % 3 == 0 {
                grouped.push('.');
            }
            count += 1;
        }
        grouped.push(c);
    }
    let integer_grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{},{}", integer_grouped, d),
        None => integer_grouped,
    }
}

/// Percentage with one decimal: 6.09 -> "6,1%".
pub fn format_pct(value: f64) -> String {
    format!("{}%", format_number(value, 1))
}

/// Coverage in days: Some(4.5) -> "4,5 dias", None -> "—".
pub fn format_days(value: Option<f64>) -> String {
    match value {
        Some(days) => format!("{} dias", format_number(days, 1)),
        None => "—".to_string(),
    }
}

/// Criticality score (0-100), shown rounded: Some(88.5) -> "89".
pub fn format_score(value: Option<f64>) -> String {
    match value {
        Some(score) => format!("{}", score.round() as i64),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates() {
        assert_eq!(format_date("2026-07-28"), "28/07/2026");
        assert_eq!(format_date("2026-08-07T11:30:00Z"), "07/08/2026");
        assert_eq!(format_date("sem data"), "sem data");
    }

    #[test]
    fn formats_numbers() {
        assert_eq!(format_number(1234.5, 1), "1.234,5");
        assert_eq!(format_number(1234567.0, 0), "1.234.567");
        assert_eq!(format_number(-1234.5, 1), "-1.234,5");
        assert_eq!(format_number(0.0, 2), "0,00");
    }

    #[test]
    fn formats_percentages_and_days() {
        assert_eq!(format_pct(6.09), "6,1%");
        assert_eq!(format_days(Some(4.5)), "4,5 dias");
        assert_eq!(format_days(None), "—");
    }

    #[test]
    fn formats_scores() {
        assert_eq!(format_score(Some(88.5)), "89");
        assert_eq!(format_score(None), "—");
    }
}
