use crate::defaults::{LB_PER_KG, MAX_WEIGHT_KG, MIN_WEIGHT_KG};
use once_cell::sync::Lazy;
use regex::Regex;

// Compiled regexes for weight parsing
static WEIGHT_KG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s*(?:kg|kgs|kilos?|kilograms?)$").unwrap());
static WEIGHT_LB_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(\d+(?:\.\d+)?)\s*(?:lb|lbs|pounds?)$").unwrap());

/// Weight parsing error types
#[derive(Debug)]
pub enum WeightParseError {
    EmptyInput,
    InvalidFormat(String),
    InvalidNumber,
    OutOfRange { weight_kg: f64, min: f64, max: f64 },
}

impl std::fmt::Display for WeightParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightParseError::EmptyInput => write!(f, "Weight cannot be empty"),
            WeightParseError::InvalidFormat(hint) => write!(f, "Invalid weight format. {}", hint),
            WeightParseError::InvalidNumber => write!(f, "Weight must be a valid number"),
            WeightParseError::OutOfRange { weight_kg, min, max } => write!(
                f,
                "Weight must be between {} and {} kg (got {:.1} kg)",
                min, max, weight_kg
            ),
        }
    }
}

impl std::error::Error for WeightParseError {}

/// Parse a weight string to kilograms.
///
/// Supported formats:
/// - Pure number: "70" (interpreted as kilograms)
/// - Kilograms: "70kg", "70 kg", "72.5 kilos"
/// - Pounds: "154lb", "154 lbs", "154 pounds"
///
/// The result must fall inside the slider domain.
///
/// # Examples
/// ```
/// use elevate_drive::utils::parse_weight_to_kg;
/// assert_eq!(parse_weight_to_kg("70"), Ok(70.0));
/// assert_eq!(parse_weight_to_kg("70 kg"), Ok(70.0));
/// assert!(parse_weight_to_kg("500").is_err());
/// ```
pub fn parse_weight_to_kg(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(WeightParseError::EmptyInput.to_string());
    }

    let weight_kg = if let Ok(kg) = trimmed.parse::<f64>() {
        kg
    } else if let Some(captures) = WEIGHT_KG_REGEX.captures(trimmed) {
        captures[1]
            .parse::<f64>()
            .map_err(|_| WeightParseError::InvalidNumber.to_string())?
    } else if let Some(captures) = WEIGHT_LB_REGEX.captures(trimmed) {
        let lb: f64 = captures[1]
            .parse()
            .map_err(|_| WeightParseError::InvalidNumber.to_string())?;
        lb / LB_PER_KG
    } else {
        return Err(
            WeightParseError::InvalidFormat("Use: 70, 70kg, or 154lb".to_string()).to_string(),
        );
    };

    if !weight_kg.is_finite() || !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
        return Err(WeightParseError::OutOfRange {
            weight_kg,
            min: MIN_WEIGHT_KG,
            max: MAX_WEIGHT_KG,
        }
        .to_string());
    }
    Ok(weight_kg)
}

/// Render a BAC fraction as a percentage string, e.g. `0.0548` → "0.055%".
pub fn format_bac_percent(bac: f64) -> String {
    format!("{:.3}%", bac)
}

/// Round-trip-stable text for a weight shown next to the slider.
pub fn format_weight_kg(weight_kg: f64) -> String {
    if weight_kg.fract() == 0.0 {
        format!("{} kg", weight_kg as u32)
    } else {
        format!("{:.1} kg", weight_kg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_kg() {
        assert_eq!(parse_weight_to_kg("70"), Ok(70.0));
        assert_eq!(parse_weight_to_kg(" 72.5kg "), Ok(72.5));
        assert_eq!(parse_weight_to_kg("80 KG"), Ok(80.0));
        assert_eq!(parse_weight_to_kg("65 kilos"), Ok(65.0));
    }

    #[test]
    fn test_parse_pounds() {
        let kg = parse_weight_to_kg("154.3234 lb").unwrap();
        assert!((kg - 70.0).abs() < 0.001);
        let kg = parse_weight_to_kg("200lbs").unwrap();
        assert!((kg - 90.718).abs() < 0.01);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(parse_weight_to_kg("   "), Err("Weight cannot be empty".to_string()));
        assert!(parse_weight_to_kg("seventy").unwrap_err().contains("Invalid weight format"));
        assert!(parse_weight_to_kg("39").unwrap_err().contains("between 40 and 120"));
        assert!(parse_weight_to_kg("300 lb").is_err());
        assert!(parse_weight_to_kg("-70").is_err());
        assert!(parse_weight_to_kg("NaN").is_err());
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_bac_percent(0.05475), "0.055%");
        assert_eq!(format_weight_kg(70.0), "70 kg");
        assert_eq!(format_weight_kg(72.46), "72.5 kg");
    }
}
