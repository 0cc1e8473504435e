//! Calculator configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::number::{format_number, format_precision};
use crate::core::operations::DIVISION_BY_ZERO_MESSAGE;
use crate::core::{CalcError, CalcResult, DisplayValue, Outcome};

/// Largest precision accepted for rounded results
pub const MAX_PRECISION: usize = 100;

/// Display tuning for computed results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Results whose text is longer than this are rounded
    pub max_result_len: usize,
    /// Significant digits kept when a result is rounded
    pub overflow_precision: usize,
    /// Text shown in place of a number after dividing by zero
    pub divide_by_zero_message: String,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_result_len: 12,
            overflow_precision: 8,
            divide_by_zero_message: DIVISION_BY_ZERO_MESSAGE.to_string(),
        }
    }
}

impl CalculatorConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the result width limit
    #[must_use]
    pub const fn with_max_result_len(mut self, len: usize) -> Self {
        self.max_result_len = len;
        self
    }

    /// Set the rounding precision
    #[must_use]
    pub const fn with_overflow_precision(mut self, precision: usize) -> Self {
        self.overflow_precision = precision;
        self
    }

    /// Set the division-by-zero message
    #[must_use]
    pub fn with_divide_by_zero_message(mut self, message: impl Into<String>) -> Self {
        self.divide_by_zero_message = message.into();
        self
    }

    /// Checks the settings
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_result_len == 0 {
            return Err(CalcError::config("max_result_len must be at least 1"));
        }
        if !(1..=MAX_PRECISION).contains(&self.overflow_precision) {
            return Err(CalcError::config(format!(
                "overflow_precision must be between 1 and {MAX_PRECISION}, got {}",
                self.overflow_precision
            )));
        }
        if self.divide_by_zero_message.is_empty() {
            return Err(CalcError::config("divide_by_zero_message must not be empty"));
        }
        Ok(())
    }

    /// Parses and validates a JSON configuration
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CalcError::config(format!("invalid JSON: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| CalcError::config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Serializes the configuration as pretty JSON
    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::config(e.to_string()))
    }

    /// Readout for a result produced by equals
    ///
    /// Numbers wider than `max_result_len` are rounded to
    /// `overflow_precision` significant digits.
    #[must_use]
    pub fn render_final(&self, outcome: Outcome) -> DisplayValue {
        match outcome {
            Outcome::Value(v) => {
                let text = format_number(v);
                if text.chars().count() > self.max_result_len {
                    DisplayValue::from_text(format_precision(v, self.overflow_precision))
                } else {
                    DisplayValue::from_text(text)
                }
            }
            Outcome::DivisionByZero => DisplayValue::from_text(self.divide_by_zero_message.clone()),
        }
    }

    /// Readout for a running total produced by chaining operators
    #[must_use]
    pub fn render_running(&self, outcome: Outcome) -> DisplayValue {
        match outcome {
            Outcome::Value(v) => DisplayValue::from_number(v),
            Outcome::DivisionByZero => DisplayValue::from_text(self.divide_by_zero_message.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = CalculatorConfig::default();
        assert_eq!(config.max_result_len, 12);
        assert_eq!(config.overflow_precision, 8);
        assert_eq!(config.divide_by_zero_message, "Can't divide by zero");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builders() {
        let config = CalculatorConfig::new()
            .with_max_result_len(16)
            .with_overflow_precision(10)
            .with_divide_by_zero_message("Error");
        assert_eq!(config.max_result_len, 16);
        assert_eq!(config.overflow_precision, 10);
        assert_eq!(config.divide_by_zero_message, "Error");
    }

    #[test]
    fn test_validate_rejects_zero_width() {
        let config = CalculatorConfig::new().with_max_result_len(0);
        assert!(matches!(config.validate(), Err(CalcError::Config { .. })));
    }

    #[test]
    fn test_validate_rejects_precision_out_of_range() {
        assert!(CalculatorConfig::new()
            .with_overflow_precision(0)
            .validate()
            .is_err());
        assert!(CalculatorConfig::new()
            .with_overflow_precision(101)
            .validate()
            .is_err());
        assert!(CalculatorConfig::new()
            .with_overflow_precision(100)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_message() {
        let config = CalculatorConfig::new().with_divide_by_zero_message("");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let config = CalculatorConfig::from_json(r#"{"overflow_precision": 6}"#).unwrap();
        assert_eq!(config.overflow_precision, 6);
        assert_eq!(config.max_result_len, 12);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = CalculatorConfig::from_json("not json").unwrap_err();
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn test_from_json_validates() {
        assert!(CalculatorConfig::from_json(r#"{"max_result_len": 0}"#).is_err());
    }

    #[test]
    fn test_to_json_round_trip() {
        let config = CalculatorConfig::new().with_max_result_len(20);
        let json = config.to_json().unwrap();
        assert_eq!(CalculatorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"divide_by_zero_message": "Nope"}}"#).unwrap();
        let config = CalculatorConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.divide_by_zero_message, "Nope");
    }

    #[test]
    fn test_from_json_file_missing() {
        let err = CalculatorConfig::from_json_file("/nonexistent/calc.json").unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }

    #[test]
    fn test_render_final_short_result_unchanged() {
        let config = CalculatorConfig::default();
        assert_eq!(config.render_final(Outcome::Value(8.0)).as_str(), "8");
        assert_eq!(
            config.render_final(Outcome::Value(123_456_789_000.0)).as_str(),
            "123456789000"
        );
    }

    #[test]
    fn test_render_final_rounds_wide_result() {
        let config = CalculatorConfig::default();
        assert_eq!(
            config.render_final(Outcome::Value(0.1 + 0.2)).as_str(),
            "0.30000000"
        );
        assert_eq!(
            config.render_final(Outcome::Value(1_234_567_890_000.0)).as_str(),
            "1.2345679e+12"
        );
    }

    #[test]
    fn test_render_final_rounded_result_stays_numeric() {
        let config = CalculatorConfig::default();
        let display = config.render_final(Outcome::Value(0.000_244_140_625));
        assert_eq!(display.as_str(), "0.00024414063");
        assert!(!display.is_message());
        assert_eq!(display.parse(), Ok(0.000_244_140_63));
    }

    #[test]
    fn test_render_final_message_not_rounded() {
        let config = CalculatorConfig::default();
        assert_eq!(
            config.render_final(Outcome::DivisionByZero).as_str(),
            "Can't divide by zero"
        );
    }

    #[test]
    fn test_render_running_never_rounds() {
        let config = CalculatorConfig::default();
        assert_eq!(
            config.render_running(Outcome::Value(0.1 + 0.2)).as_str(),
            "0.30000000000000004"
        );
    }

    #[test]
    fn test_render_uses_configured_message() {
        let config = CalculatorConfig::new().with_divide_by_zero_message("Error");
        assert_eq!(config.render_final(Outcome::DivisionByZero).as_str(), "Error");
        assert_eq!(config.render_running(Outcome::DivisionByZero).as_str(), "Error");
    }
}
