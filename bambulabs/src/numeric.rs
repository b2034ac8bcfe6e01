//! Loosely typed numeric readings.

use anyhow::{Context, Result};
use parse_display::Display;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A number as the printer reports it.
///
/// The firmware is inconsistent about quoting: `"humidity": "4"`,
/// `"temp": "25.3"` and `"k": 0.02` all show up in the same report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Display)]
#[serde(untagged)]
#[display("{0}")]
pub enum Numeric {
    /// An integer reading.
    Integer(i64),
    /// A floating point reading.
    Float(f64),
    /// A reading sent as a string.
    String(String),
}

impl Numeric {
    /// Get the reading as an i64.
    ///
    /// Floats are truncated, so `"25.8"` reads as `25`. NaN and infinite
    /// readings are rejected.
    pub fn as_i64(&self) -> Result<i64> {
        match self {
            Self::Integer(i) => Ok(*i),
            _ => {
                let f = self.as_f64()?;
                anyhow::ensure!(f.is_finite(), "`{self}` is not a finite number");
                Ok(f.trunc() as i64)
            }
        }
    }

    /// Get the reading as an f64.
    pub fn as_f64(&self) -> Result<f64> {
        match self {
            Self::Integer(i) => Ok(*i as f64),
            Self::Float(f) => Ok(*f),
            Self::String(s) => s.trim().parse().with_context(|| format!("`{s}` is not a number")),
        }
    }

    /// Get the reading as a u32, used for AMS ids and tray indices.
    ///
    /// Only whole numbers are accepted: `"2.9"`, `1.5` and `"NaN"` are errors.
    pub fn as_u32(&self) -> Result<u32> {
        let i = match self {
            Self::Integer(i) => *i,
            Self::Float(f) => {
                anyhow::ensure!(f.is_finite() && f.fract() == 0.0, "`{f}` is not a whole number");
                *f as i64
            }
            Self::String(s) => s
                .trim()
                .parse::<i64>()
                .with_context(|| format!("`{s}` is not a whole number"))?,
        };
        u32::try_from(i).with_context(|| format!("`{i}` is out of range for an id"))
    }
}

impl From<i64> for Numeric {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Numeric {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Numeric {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_numeric_from_json() {
        let values: Vec<Numeric> = serde_json::from_str(r#"[4, "4", 25.3, "25.3", " 7 "]"#).unwrap();

        assert_eq!(values[0].as_i64().unwrap(), 4);
        assert_eq!(values[1].as_i64().unwrap(), 4);
        assert_eq!(values[2].as_f64().unwrap(), 25.3);
        assert_eq!(values[3].as_f64().unwrap(), 25.3);
        assert_eq!(values[3].as_i64().unwrap(), 25);
        assert_eq!(values[4].as_u32().unwrap(), 7);
    }

    #[test]
    fn test_numeric_not_a_number() {
        let value = Numeric::from("dry");

        assert!(value.as_i64().is_err());
        assert!(value.as_f64().is_err());
    }

    #[test]
    fn test_numeric_negative_id() {
        assert!(Numeric::from(-1).as_u32().is_err());
    }

    #[test]
    fn test_numeric_id_must_be_whole() {
        assert!(Numeric::from("2.9").as_u32().is_err());
        assert!(Numeric::from("0.5").as_u32().is_err());
        assert!(Numeric::from("NaN").as_u32().is_err());
        assert!(Numeric::from(1.5).as_u32().is_err());
        assert!(Numeric::from(f64::NAN).as_u32().is_err());
        assert_eq!(Numeric::from(3.0).as_u32().unwrap(), 3);
        assert_eq!(Numeric::from(" 2 ").as_u32().unwrap(), 2);
    }

    #[test]
    fn test_numeric_non_finite_reading() {
        assert!(Numeric::from("NaN").as_i64().is_err());
        assert!(Numeric::from("inf").as_i64().is_err());
        assert_eq!(Numeric::from(25.8).as_i64().unwrap(), 25);
    }

    #[test]
    fn test_numeric_display() {
        assert_eq!(Numeric::from("254").to_string(), "254");
        assert_eq!(Numeric::from(3).to_string(), "3");
    }
}
