//! # Assembly Configuration
//!
//! Input parameters describing one bolted joint. A configuration is
//! constructed fresh per recommendation request and stays immutable for the
//! duration of one selection call; nothing in the engine holds onto it.

use serde::{Deserialize, Serialize};

use crate::derating::TemperatureClass;
use crate::errors::{SelectError, SelectResult};

/// Hole type of the joint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum HoleType {
    /// Hole passing fully through the joint; bolt + nut compress a plate
    #[default]
    ThroughHole,
    /// Closed-bottom hole; the screw threads directly into the material
    BlindHole,
}

impl HoleType {
    /// All hole type variants for UI selection
    pub const ALL: [HoleType; 2] = [HoleType::ThroughHole, HoleType::BlindHole];

    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            HoleType::ThroughHole => "Through Hole",
            HoleType::BlindHole => "Blind Hole",
        }
    }

    /// Hardware style recommended for this hole type
    pub fn bolt_style(&self) -> &'static str {
        match self {
            HoleType::ThroughHole => "Hex Bolt",
            HoleType::BlindHole => "Socket Head Cap Screw",
        }
    }

    /// Nut style for this hole type, if one is used
    ///
    /// Blind holes thread into the material and take no nut.
    pub fn nut_style(&self) -> Option<&'static str> {
        match self {
            HoleType::ThroughHole => Some("DIN 934"),
            HoleType::BlindHole => None,
        }
    }
}

impl std::fmt::Display for HoleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input parameters for one fastener recommendation.
///
/// All lengths are in millimetres.
///
/// ## JSON Example
///
/// ```json
/// {
///   "hole_type": "ThroughHole",
///   "depth_or_plate_mm": 10.0,
///   "temperature_class": "Normal",
///   "washer_under_head": true,
///   "washer_under_nut": true,
///   "washer_thickness_mm": 2.0,
///   "safety_allowance_mm": 3.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyConfiguration {
    /// Through hole (bolt + nut) or blind hole (screw into material)
    pub hole_type: HoleType,

    /// Blind-hole depth or through-hole plate thickness, depending on
    /// `hole_type` (mm). Use [`depth_mm`](Self::depth_mm) /
    /// [`plate_thickness_mm`](Self::plate_thickness_mm) for the
    /// mode-specific reading.
    pub depth_or_plate_mm: f64,

    /// Service temperature class for length derating
    pub temperature_class: TemperatureClass,

    /// Flat washer under the bolt head
    pub washer_under_head: bool,

    /// Flat washer under the nut (through holes only)
    pub washer_under_nut: bool,

    /// Washer thickness used for both washer positions (mm)
    pub washer_thickness_mm: f64,

    /// Extra length/depth margin for assembly tolerance (mm)
    pub safety_allowance_mm: f64,
}

impl AssemblyConfiguration {
    /// Plate thickness reading of the depth field (through-hole mode)
    pub fn plate_thickness_mm(&self) -> f64 {
        self.depth_or_plate_mm
    }

    /// Hole depth reading of the depth field (blind-hole mode)
    pub fn depth_mm(&self) -> f64 {
        self.depth_or_plate_mm
    }

    /// Validate input parameters.
    ///
    /// The selection engine assumes validated, non-negative inputs and does
    /// not re-validate; call this before invoking it.
    pub fn validate(&self) -> SelectResult<()> {
        if self.depth_or_plate_mm < 0.0 {
            return Err(SelectError::invalid_input(
                "depth_or_plate_mm",
                self.depth_or_plate_mm.to_string(),
                "Depth / plate thickness must be non-negative",
            ));
        }
        if self.washer_thickness_mm < 0.0 {
            return Err(SelectError::invalid_input(
                "washer_thickness_mm",
                self.washer_thickness_mm.to_string(),
                "Washer thickness must be non-negative",
            ));
        }
        if self.safety_allowance_mm < 0.0 {
            return Err(SelectError::invalid_input(
                "safety_allowance_mm",
                self.safety_allowance_mm.to_string(),
                "Safety allowance must be non-negative",
            ));
        }
        Ok(())
    }
}

impl Default for AssemblyConfiguration {
    fn default() -> Self {
        Self {
            hole_type: HoleType::ThroughHole,
            depth_or_plate_mm: 0.0,
            temperature_class: TemperatureClass::Normal,
            washer_under_head: false,
            washer_under_nut: false,
            washer_thickness_mm: 2.0,
            safety_allowance_mm: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AssemblyConfiguration::default();
        assert_eq!(config.hole_type, HoleType::ThroughHole);
        assert_eq!(config.washer_thickness_mm, 2.0);
        assert_eq!(config.safety_allowance_mm, 3.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_fields() {
        let config = AssemblyConfiguration {
            depth_or_plate_mm: -1.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("depth_or_plate_mm"));

        let config = AssemblyConfiguration {
            washer_thickness_mm: -0.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = AssemblyConfiguration {
            safety_allowance_mm: -3.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_hole_type_styles() {
        assert_eq!(HoleType::ThroughHole.bolt_style(), "Hex Bolt");
        assert_eq!(HoleType::ThroughHole.nut_style(), Some("DIN 934"));
        assert_eq!(HoleType::BlindHole.bolt_style(), "Socket Head Cap Screw");
        assert_eq!(HoleType::BlindHole.nut_style(), None);
    }

    #[test]
    fn test_serialization() {
        let config = AssemblyConfiguration {
            hole_type: HoleType::BlindHole,
            depth_or_plate_mm: 20.0,
            washer_under_head: true,
            washer_thickness_mm: 1.6,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"hole_type\":\"BlindHole\""));
        let parsed: AssemblyConfiguration = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }
}
