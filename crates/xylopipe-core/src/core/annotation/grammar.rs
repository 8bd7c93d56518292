use super::OptimumExtractor;
use crate::core::classify::coerce_temperature;
use regex::Regex;
use std::sync::LazyLock;

// optional "is/of/was/at" then optional "about/around/...", then separators
const CONNECTIVES: &str =
    r"(?:\s+(?:is|of|was|at))?(?:\s+(?:about|around|approximately|near))?[\s:.=]*";

static TEMPERATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:optimum|optimal)\s+(?:temperature|temp)\b{CONNECTIVES}(\d+(?:\.\d+)?)\s*(?:°\s*C|degrees\s+celsius|C\b)?"
    ))
    .expect("temperature pattern is valid")
});

static PH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:(?:optimum|optimal)\s+pH|pH\s+optimum)\b{CONNECTIVES}(\d+(?:\.\d+)?)"
    ))
    .expect("pH pattern is valid")
});

/// The default phrase grammar for optimum statements in free-text annotations.
///
/// Recognises "Optimum temperature is 50 degrees Celsius", "optimal temp: 37°C",
/// "Optimum pH is about 5.5", "pH optimum of 6" and similar. Only the first number
/// after the phrase is taken, so ranges resolve to their lower bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptimumGrammar;

fn first_number_text<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

impl OptimumExtractor for OptimumGrammar {
    fn temperature(&self, text: &str) -> Option<f64> {
        first_number_text(&TEMPERATURE, text).and_then(coerce_temperature)
    }

    fn ph(&self, text: &str) -> Option<f64> {
        first_number_text(&PH, text).and_then(|n| n.parse::<f64>().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp(text: &str) -> Option<f64> {
        OptimumGrammar.temperature(text)
    }

    fn ph(text: &str) -> Option<f64> {
        OptimumGrammar.ph(text)
    }

    #[test]
    fn temperature_phrasings() {
        assert_eq!(temp("Optimum temperature is 50 degrees Celsius."), Some(50.0));
        assert_eq!(temp("Optimum temperature: 65°C"), Some(65.0));
        assert_eq!(temp("optimal temp 37 C"), Some(37.0));
        assert_eq!(temp("Optimal temperature of about 55 °C"), Some(55.0));
        assert_eq!(temp("OPTIMUM TEMPERATURE IS AROUND 70"), Some(70.0));
        assert_eq!(temp("Optimum temperature at approximately 80 degrees Celsius"), Some(80.0));
    }

    #[test]
    fn temperature_accepts_decimals_and_takes_range_start() {
        assert_eq!(temp("Optimum temperature is 42.5 degrees Celsius."), Some(42.5));
        assert_eq!(temp("Optimum temperature is 50-60 degrees Celsius."), Some(50.0));
    }

    #[test]
    fn temperature_absent_without_optimum_phrase() {
        assert_eq!(temp("Thermostable up to 80 degrees Celsius."), None);
        assert_eq!(temp("Optimum pH is 5.5."), None);
        assert_eq!(temp(""), None);
    }

    #[test]
    fn ph_phrasings() {
        assert_eq!(ph("Optimum pH is 5.5."), Some(5.5));
        assert_eq!(ph("optimal pH: 6"), Some(6.0));
        assert_eq!(ph("pH optimum of 4.8"), Some(4.8));
        assert_eq!(ph("Optimum pH is about 7.0 with substrate xylan."), Some(7.0));
        assert_eq!(ph("Optimum pH was near 5"), Some(5.0));
    }

    #[test]
    fn ph_absent_when_not_stated() {
        assert_eq!(ph("Active from pH 4 to 9."), None);
        assert_eq!(ph("Optimum temperature is 50 degrees Celsius."), None);
    }
}
