// src/threshold.rs
//! Low-ink selection.
//!
//! A cartridge is low when its level key is at or below the threshold. How the
//! two strings are compared is a policy:
//!
//! - `Compare::Numeric` parses both sides as numbers (`"8" <= "11"` holds).
//! - `Compare::Lexical` compares the raw strings byte by byte, which is what
//!   older deployments of this check did. It is only correct when every level
//!   has the same number of digits (`"8" <= "11"` does not hold).

use std::fmt;
use std::str::FromStr;

use crate::cartridge::CartridgeRecord;
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Compare {
    #[default]
    Numeric,
    Lexical,
}

impl FromStr for Compare {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(Compare::Numeric),
            "lexical" => Ok(Compare::Lexical),
            _ => Err(Error::InvalidMode(s!(s))),
        }
    }
}

impl fmt::Display for Compare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Compare::Numeric => "numeric",
            Compare::Lexical => "lexical",
        })
    }
}

/// Inclusive cut-off level plus the comparison policy.
#[derive(Clone, Debug, PartialEq)]
pub struct Threshold {
    raw: String,
    compare: Compare,
}

impl Threshold {
    /// Numeric thresholds are validated here so a bad value fails before any fetch.
    /// `NaN` and infinities are not thresholds.
    pub fn new(raw: impl Into<String>, compare: Compare) -> Result<Self> {
        let raw = raw.into().trim().to_string();
        if compare == Compare::Numeric && !raw.parse::<f64>().is_ok_and(f64::is_finite) {
            return Err(Error::InvalidThreshold(raw));
        }
        Ok(Self { raw, compare })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn compare(&self) -> Compare {
        self.compare
    }

    /// Whether `rec` is at or below the threshold.
    pub fn is_low(&self, rec: &CartridgeRecord) -> Result<bool> {
        let key = rec.level_key()?;
        match self.compare {
            Compare::Lexical => Ok(key <= self.raw.as_str()),
            Compare::Numeric => {
                let level: f64 = key.parse().map_err(|_| Error::InvalidLevel {
                    cartridge: rec.cartridge.clone(),
                    level: rec.level.clone(),
                })?;
                // validated in `new`
                let cut: f64 = self.raw.parse().map_err(|_| Error::InvalidThreshold(self.raw.clone()))?;
                Ok(level <= cut)
            }
        }
    }
}

/// Records at or below `threshold`, in their original order.
pub fn select_low(records: &[CartridgeRecord], threshold: &Threshold) -> Result<Vec<CartridgeRecord>> {
    let mut low = Vec::new();
    for rec in records {
        if threshold.is_low(rec)? {
            low.push(rec.clone());
        }
    }
    Ok(low)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(letter: &str, level: &str) -> CartridgeRecord {
        CartridgeRecord::from_cells([letter, "Ink", "OK", level])
    }

    #[test]
    fn lexical_selects_at_or_below_in_order() {
        let recs = [rec("A", "45%"), rec("B", "60%"), rec("C", "05%")];
        let t = Threshold::new("50", Compare::Lexical).unwrap();
        let low = select_low(&recs, &t).unwrap();
        let letters: Vec<&str> = low.iter().map(|r| r.letter.as_str()).collect();
        assert_eq!(letters, ["A", "C"]);
    }

    #[test]
    fn cutoff_is_inclusive() {
        let recs = [rec("A", "11 %")];
        for compare in [Compare::Numeric, Compare::Lexical] {
            let t = Threshold::new("11", compare).unwrap();
            assert_eq!(select_low(&recs, &t).unwrap().len(), 1, "{compare}");
        }
    }

    #[test]
    fn single_digit_level_differs_between_policies() {
        let recs = [rec("K", "8%")];
        let numeric = Threshold::new("11", Compare::Numeric).unwrap();
        let lexical = Threshold::new("11", Compare::Lexical).unwrap();
        assert_eq!(select_low(&recs, &numeric).unwrap().len(), 1);
        assert!(select_low(&recs, &lexical).unwrap().is_empty());
    }

    #[test]
    fn empty_input_selects_nothing() {
        let t = Threshold::new("11", Compare::Numeric).unwrap();
        assert!(select_low(&[], &t).unwrap().is_empty());
    }

    #[test]
    fn missing_level_propagates() {
        let recs = [rec("Y", "")];
        let t = Threshold::new("11", Compare::Lexical).unwrap();
        assert!(matches!(select_low(&recs, &t), Err(Error::MissingLevel { .. })));
    }

    #[test]
    fn unparseable_level_is_a_value_error() {
        let recs = [rec("Y", "1.2.3 %")];
        let t = Threshold::new("11", Compare::Numeric).unwrap();
        assert!(matches!(select_low(&recs, &t), Err(Error::InvalidLevel { .. })));
    }

    #[test]
    fn numeric_threshold_must_parse() {
        assert!(matches!(Threshold::new("low", Compare::Numeric), Err(Error::InvalidThreshold(_))));
        assert!(Threshold::new("low", Compare::Lexical).is_ok());
    }

    #[test]
    fn non_finite_threshold_is_rejected() {
        for raw in ["NaN", "inf", "-infinity"] {
            assert!(matches!(Threshold::new(raw, Compare::Numeric), Err(Error::InvalidThreshold(_))), "{raw}");
        }
    }

    #[test]
    fn compare_parses_case_insensitively() {
        assert_eq!("Lexical".parse::<Compare>().unwrap(), Compare::Lexical);
        assert!(matches!("fuzzy".parse::<Compare>(), Err(Error::InvalidMode(_))));
    }
}
