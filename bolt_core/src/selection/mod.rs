//! # Fastener Selection
//!
//! The decision procedure that turns an [`AssemblyConfiguration`] into a
//! concrete [`Recommendation`] or a documented failure. Each hole-type mode
//! follows the pattern:
//!
//! - `select(config) -> SelectResult<Recommendation>` - pure selection function
//!
//! Selection is stateless and side-effect-free per call: no I/O, no shared
//! mutable state, no retries. For fixed catalog and derating tables,
//! identical inputs always yield identical results, so concurrent requests
//! need no coordination.
//!
//! ## Modes
//!
//! - [`through_hole`] - bolt + nut through a plate, derated length threshold
//! - [`blind_hole`] - screw into material, minimum thread engagement

pub mod blind_hole;
pub mod stack;
pub mod through_hole;

use serde::{Deserialize, Serialize};

use crate::catalog::FastenerSize;
use crate::config::{AssemblyConfiguration, HoleType};
use crate::errors::SelectResult;
use crate::units::{Mm, NewtonMeters};

pub use stack::{build_stack_report, AssemblyStackReport, SegmentKind, StackSegment};
pub use through_hole::select as select_through_hole;
pub use blind_hole::select as select_blind_hole;

/// A concrete fastener recommendation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "size": "M16",
///   "hole_type": "ThroughHole",
///   "length_or_engagement_mm": 32.0,
///   "applied_multiplier": 1.0,
///   "torque_nm": 190.0,
///   "stack": { "segments": [] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The selected catalog size
    pub size: FastenerSize,

    /// Which mode produced this recommendation
    pub hole_type: HoleType,

    /// Total required bolt length (through hole) or available thread
    /// engagement (blind hole), in millimetres
    pub length_or_engagement_mm: f64,

    /// Temperature derating multiplier that was in effect.
    ///
    /// Applied arithmetically to through-hole lengths; reported for the
    /// caller's information in blind-hole mode.
    pub applied_multiplier: f64,

    /// Rated tightening torque for the selected size (N·m)
    pub torque_nm: f64,

    /// Physical stack description for the diagram renderer
    pub stack: AssemblyStackReport,
}

impl Recommendation {
    /// Length or engagement as a typed quantity
    pub fn length_or_engagement(&self) -> Mm {
        Mm(self.length_or_engagement_mm)
    }

    /// Tightening torque as a typed quantity
    pub fn torque(&self) -> NewtonMeters {
        NewtonMeters(self.torque_nm)
    }

    /// Full bolt description (e.g., "M16 Hex Bolt")
    pub fn bolt_description(&self) -> String {
        format!("{} {}", self.size, self.hole_type.bolt_style())
    }

    /// Full nut description (e.g., "M16 DIN 934"), if the mode uses a nut
    pub fn nut_description(&self) -> Option<String> {
        self.hole_type
            .nut_style()
            .map(|style| format!("{} {}", self.size, style))
    }
}

/// Select a fastener for a configuration, dispatching on its hole type.
///
/// # Example
///
/// ```rust
/// use bolt_core::config::{AssemblyConfiguration, HoleType};
/// use bolt_core::selection::select;
///
/// let config = AssemblyConfiguration {
///     hole_type: HoleType::ThroughHole,
///     depth_or_plate_mm: 10.0,
///     washer_under_head: true,
///     washer_under_nut: true,
///     ..Default::default()
/// };
///
/// let rec = select(&config).unwrap();
/// assert_eq!(rec.size.designation(), "M16");
/// assert_eq!(rec.length_or_engagement_mm, 32.0);
/// ```
pub fn select(config: &AssemblyConfiguration) -> SelectResult<Recommendation> {
    match config.hole_type {
        HoleType::ThroughHole => through_hole::select(config),
        HoleType::BlindHole => blind_hole::select(config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derating::TemperatureClass;

    #[test]
    fn test_dispatch_matches_mode_functions() {
        let through = AssemblyConfiguration {
            hole_type: HoleType::ThroughHole,
            depth_or_plate_mm: 10.0,
            washer_under_head: true,
            washer_under_nut: true,
            ..Default::default()
        };
        assert_eq!(select(&through), through_hole::select(&through));

        let blind = AssemblyConfiguration {
            hole_type: HoleType::BlindHole,
            depth_or_plate_mm: 20.0,
            washer_under_head: true,
            washer_thickness_mm: 1.6,
            ..Default::default()
        };
        assert_eq!(select(&blind), blind_hole::select(&blind));
    }

    #[test]
    fn test_determinism() {
        let config = AssemblyConfiguration {
            hole_type: HoleType::ThroughHole,
            depth_or_plate_mm: 10.0,
            temperature_class: TemperatureClass::High,
            washer_under_head: true,
            washer_under_nut: true,
            ..Default::default()
        };
        let first = select(&config);
        let second = select(&config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_descriptions() {
        let through = AssemblyConfiguration {
            hole_type: HoleType::ThroughHole,
            depth_or_plate_mm: 10.0,
            washer_under_head: true,
            washer_under_nut: true,
            ..Default::default()
        };
        let rec = select(&through).unwrap();
        assert_eq!(rec.bolt_description(), "M16 Hex Bolt");
        assert_eq!(rec.nut_description(), Some("M16 DIN 934".to_string()));

        let blind = AssemblyConfiguration {
            hole_type: HoleType::BlindHole,
            depth_or_plate_mm: 20.0,
            ..Default::default()
        };
        let rec = select(&blind).unwrap();
        assert_eq!(rec.bolt_description(), "M6 Socket Head Cap Screw");
        assert_eq!(rec.nut_description(), None);
    }

    #[test]
    fn test_recommendation_serialization() {
        let config = AssemblyConfiguration {
            hole_type: HoleType::ThroughHole,
            depth_or_plate_mm: 10.0,
            washer_under_head: true,
            washer_under_nut: true,
            ..Default::default()
        };
        let rec = select(&config).unwrap();
        let json = serde_json::to_string(&rec).unwrap();
        assert!(json.contains("\"size\":\"M16\""));
        let parsed: Recommendation = serde_json::from_str(&json).unwrap();
        assert_eq!(rec, parsed);
    }
}
