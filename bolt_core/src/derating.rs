//! # Temperature Derating
//!
//! Temperature-dependent length adjustment for fastener selection.
//!
//! ## Overview
//!
//! Each temperature class maps to a dimensionless multiplier applied to the
//! computed bolt length to account for thermal expansion and material margin:
//!
//! ```text
//! final_length = round(multiplier × raw_length)
//! ```
//!
//! | Class  | Service range   | Multiplier |
//! |--------|-----------------|------------|
//! | Normal | 0°C to 60°C     | 1.00       |
//! | High   | >60°C           | 1.20       |
//! | Low    | <0°C to -50°C   | 1.10       |
//!
//! The table is fixed and read-only, same lifecycle as the fastener catalog.
//! An unrecognized class label is a configuration error reported to the
//! caller, never silently defaulted, since an unset selection would corrupt
//! all downstream length arithmetic.

use serde::{Deserialize, Serialize};

use crate::errors::{SelectError, SelectResult};

/// Temperature class for service-environment derating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TemperatureClass {
    /// Normal service (0°C to 60°C): multiplier 1.0
    #[default]
    Normal,

    /// High temperature (>60°C): multiplier 1.2
    High,

    /// Low temperature (<0°C to -50°C): multiplier 1.1
    Low,
}

impl TemperatureClass {
    /// All temperature class variants for UI selection
    pub const ALL: [TemperatureClass; 3] = [
        TemperatureClass::Normal,
        TemperatureClass::High,
        TemperatureClass::Low,
    ];

    /// Get the length multiplier value
    pub fn multiplier(&self) -> f64 {
        match self {
            TemperatureClass::Normal => 1.0,
            TemperatureClass::High => 1.2,
            TemperatureClass::Low => 1.1,
        }
    }

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            TemperatureClass::Normal => "Normal (0°C to 60°C)",
            TemperatureClass::High => "High (>60°C)",
            TemperatureClass::Low => "Low (<0°C to -50°C)",
        }
    }

    /// Parse from common string representations
    ///
    /// Accepts the bare class name or the full labeled form. Unknown labels
    /// are an error, surfaced before any stack computation.
    pub fn from_label(label: &str) -> SelectResult<Self> {
        let trimmed = label.trim();
        Self::ALL
            .iter()
            .find(|c| {
                c.display_name().eq_ignore_ascii_case(trimmed)
                    || trimmed.eq_ignore_ascii_case(match c {
                        TemperatureClass::Normal => "Normal",
                        TemperatureClass::High => "High",
                        TemperatureClass::Low => "Low",
                    })
            })
            .copied()
            .ok_or_else(|| SelectError::unknown_temperature_class(label))
    }
}

impl std::fmt::Display for TemperatureClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multipliers() {
        assert_eq!(TemperatureClass::Normal.multiplier(), 1.0);
        assert_eq!(TemperatureClass::High.multiplier(), 1.2);
        assert_eq!(TemperatureClass::Low.multiplier(), 1.1);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(
            TemperatureClass::from_label("High").unwrap(),
            TemperatureClass::High
        );
        assert_eq!(
            TemperatureClass::from_label("normal").unwrap(),
            TemperatureClass::Normal
        );
        assert_eq!(
            TemperatureClass::from_label("Low (<0°C to -50°C)").unwrap(),
            TemperatureClass::Low
        );
    }

    #[test]
    fn test_unknown_label_is_error() {
        let err = TemperatureClass::from_label("Cryogenic").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_TEMPERATURE_CLASS");
        assert!(!err.is_selection_failure());
    }

    #[test]
    fn test_serialization() {
        let class = TemperatureClass::High;
        let json = serde_json::to_string(&class).unwrap();
        assert_eq!(json, "\"High\"");
        let parsed: TemperatureClass = serde_json::from_str(&json).unwrap();
        assert_eq!(class, parsed);
    }
}
