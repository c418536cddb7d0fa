use crate::error::{Result, ScoutmodError};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Physical pixel spacing in millimeters
///
/// `row` is the distance between adjacent rows, `col` the distance between
/// adjacent columns (DICOM PixelSpacing order).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize))]
pub struct PixelSpacing {
    pub row: f64,
    pub col: f64,
}

impl PixelSpacing {
    pub fn new(row: f64, col: f64) -> Self {
        Self { row, col }
    }

    /// Builds spacing from the first two values of a decoded DS element
    pub fn from_values(values: &[f64]) -> Option<Self> {
        match values {
            [row, col, ..] => Some(Self::new(*row, *col)),
            _ => None,
        }
    }

    /// Parses pixel spacing from a loosely formatted string
    ///
    /// Accepts `"0.7\\0.7"`, `"0.7 0.7"`, `"[0.7, 0.7]"` and exponential
    /// notation such as `"7e-1 7e-1"`.
    pub fn parse(s: &str) -> Result<Self> {
        static REGEX: OnceLock<Regex> = OnceLock::new();
        let re = REGEX.get_or_init(|| {
            Regex::new(r"[-+]?\d*\.?\d+(?:[eE][-+]?\d+)?").expect("Failed to compile regex")
        });

        let values = re
            .find_iter(s)
            .map(|m| m.as_str().parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| ScoutmodError::InvalidValue(format!("PixelSpacing '{}': {}", s, e)))?;

        Self::from_values(&values).ok_or_else(|| {
            ScoutmodError::InvalidValue(format!("PixelSpacing needs two values, got '{}'", s))
        })
    }
}

impl fmt::Display for PixelSpacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} mm", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_backslash_separator() {
        let ps = PixelSpacing::parse("0.7\\0.5").unwrap();
        assert_eq!(ps.row, 0.7);
        assert_eq!(ps.col, 0.5);
    }

    #[test]
    fn test_parse_array_format() {
        let ps = PixelSpacing::parse("[0.1, 0.2]").unwrap();
        assert_eq!(ps, PixelSpacing::new(0.1, 0.2));
    }

    #[test]
    fn test_parse_exponential_notation() {
        let ps = PixelSpacing::parse("1.5e-1 1.5e+1").unwrap();
        assert_eq!(ps, PixelSpacing::new(0.15, 15.0));
    }

    #[test]
    fn test_from_values() {
        assert_eq!(
            PixelSpacing::from_values(&[0.5, 0.6, 9.0]),
            Some(PixelSpacing::new(0.5, 0.6))
        );
        assert_eq!(PixelSpacing::from_values(&[0.5]), None);
    }

    #[test]
    fn test_parse_invalid() {
        assert!(PixelSpacing::parse("invalid").is_err());
        assert!(PixelSpacing::parse("").is_err());
        assert!(PixelSpacing::parse("0.1").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(PixelSpacing::new(0.5, 0.5).to_string(), "0.5 x 0.5 mm");
    }
}
