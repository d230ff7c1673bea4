//! # Stack Assembly
//!
//! Computes the physical thickness stack of a joint, independent of which
//! fastener size ends up recommended, and produces the
//! [`AssemblyStackReport`] an external renderer consumes.
//!
//! The report is descriptive only: it never feeds back into selection, and
//! each report is owned solely by the caller that requested it.

use serde::{Deserialize, Serialize};

use crate::catalog::FastenerSize;
use crate::config::{AssemblyConfiguration, HoleType};
use crate::units::Mm;

/// Fixed thread run-out / clearance added to every bolt length (mm)
pub const THREAD_CLEARANCE_MM: f64 = 2.0;

/// Nominal bolt head height used for the diagram's top segment (mm)
pub const BOLT_HEAD_HEIGHT_MM: f64 = 5.0;

/// Kind of one layer in the assembly stack, bottom to top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SegmentKind {
    /// Safety allowance margin below the nut
    Safety,
    /// Flat washer on the nut side
    NutSideWasher,
    /// Hex nut (drawn with a representative size's height)
    Nut,
    /// The clamped plate
    Plate,
    /// Flat washer on the head side
    HeadSideWasher,
    /// Bolt head (fixed nominal height)
    BoltHead,
}

impl SegmentKind {
    /// Diagram label for this segment
    pub fn label(&self) -> &'static str {
        match self {
            SegmentKind::Safety => "Safety",
            SegmentKind::NutSideWasher => "Washer (Nut Side)",
            SegmentKind::Nut => "Nut",
            SegmentKind::Plate => "Plate",
            SegmentKind::HeadSideWasher => "Washer (Head Side)",
            SegmentKind::BoltHead => "Bolt Head",
        }
    }

    /// Color hint for a renderer
    pub fn color_hint(&self) -> &'static str {
        match self {
            SegmentKind::Safety => "lightgray",
            SegmentKind::NutSideWasher | SegmentKind::HeadSideWasher => "lightblue",
            SegmentKind::Nut => "orange",
            SegmentKind::Plate => "gray",
            SegmentKind::BoltHead => "black",
        }
    }
}

/// One labeled layer of the assembly stack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StackSegment {
    /// What this layer is
    pub kind: SegmentKind,
    /// Layer thickness in millimetres
    pub thickness_mm: f64,
}

/// Ordered bottom-to-top description of the joint's physical stack.
///
/// Purely descriptive output for a diagram renderer: stacked labeled
/// segments with literal thickness values attached.
///
/// ## JSON Example
///
/// ```json
/// {
///   "segments": [
///     { "kind": "Safety", "thickness_mm": 3.0 },
///     { "kind": "Nut", "thickness_mm": 8.0 },
///     { "kind": "Plate", "thickness_mm": 10.0 },
///     { "kind": "BoltHead", "thickness_mm": 5.0 }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssemblyStackReport {
    segments: Vec<StackSegment>,
}

impl AssemblyStackReport {
    /// The segments in bottom-to-top order
    pub fn segments(&self) -> &[StackSegment] {
        &self.segments
    }

    /// Total stack height in millimetres
    pub fn total_height_mm(&self) -> f64 {
        self.segments.iter().map(|s| s.thickness_mm).sum()
    }

    /// Total stack height as a typed quantity
    pub fn total_height(&self) -> Mm {
        Mm(self.total_height_mm())
    }
}

/// Base stack thickness for a configuration, in millimetres.
///
/// Excludes all fastener-size-dependent terms: washer under the head plus,
/// for through holes only, the plate and the optional washer under the nut.
pub fn base_stack_mm(config: &AssemblyConfiguration) -> f64 {
    let mut total = 0.0;
    if config.washer_under_head {
        total += config.washer_thickness_mm;
    }
    if config.hole_type == HoleType::ThroughHole {
        total += config.plate_thickness_mm();
        if config.washer_under_nut {
            total += config.washer_thickness_mm;
        }
    }
    total
}

/// Build the assembly stack report for a configuration.
///
/// Segments run bottom to top: safety allowance, optional nut-side washer,
/// nut, plate, optional head-side washer, bolt head. The nut segment uses a
/// representative size's height (M10, the diagram default), not necessarily
/// the size the engine ends up recommending.
pub fn build_stack_report(config: &AssemblyConfiguration) -> AssemblyStackReport {
    let mut segments = Vec::with_capacity(6);

    segments.push(StackSegment {
        kind: SegmentKind::Safety,
        thickness_mm: config.safety_allowance_mm,
    });
    if config.washer_under_nut {
        segments.push(StackSegment {
            kind: SegmentKind::NutSideWasher,
            thickness_mm: config.washer_thickness_mm,
        });
    }
    segments.push(StackSegment {
        kind: SegmentKind::Nut,
        thickness_mm: FastenerSize::M10.nut_height_mm(),
    });
    segments.push(StackSegment {
        kind: SegmentKind::Plate,
        thickness_mm: config.depth_or_plate_mm,
    });
    if config.washer_under_head {
        segments.push(StackSegment {
            kind: SegmentKind::HeadSideWasher,
            thickness_mm: config.washer_thickness_mm,
        });
    }
    segments.push(StackSegment {
        kind: SegmentKind::BoltHead,
        thickness_mm: BOLT_HEAD_HEIGHT_MM,
    });

    AssemblyStackReport { segments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derating::TemperatureClass;

    fn through_hole_config() -> AssemblyConfiguration {
        AssemblyConfiguration {
            hole_type: HoleType::ThroughHole,
            depth_or_plate_mm: 10.0,
            temperature_class: TemperatureClass::Normal,
            washer_under_head: true,
            washer_under_nut: true,
            washer_thickness_mm: 2.0,
            safety_allowance_mm: 3.0,
        }
    }

    #[test]
    fn test_base_stack_through_hole() {
        // head washer 2 + plate 10 + nut washer 2
        assert_eq!(base_stack_mm(&through_hole_config()), 14.0);

        let no_washers = AssemblyConfiguration {
            washer_under_head: false,
            washer_under_nut: false,
            ..through_hole_config()
        };
        assert_eq!(base_stack_mm(&no_washers), 10.0);
    }

    #[test]
    fn test_base_stack_blind_hole_ignores_plate_and_nut_washer() {
        let config = AssemblyConfiguration {
            hole_type: HoleType::BlindHole,
            depth_or_plate_mm: 20.0,
            washer_under_head: true,
            washer_under_nut: true,
            washer_thickness_mm: 1.6,
            ..Default::default()
        };
        assert_eq!(base_stack_mm(&config), 1.6);
    }

    #[test]
    fn test_report_segment_order() {
        let report = build_stack_report(&through_hole_config());
        let kinds: Vec<SegmentKind> = report.segments().iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::Safety,
                SegmentKind::NutSideWasher,
                SegmentKind::Nut,
                SegmentKind::Plate,
                SegmentKind::HeadSideWasher,
                SegmentKind::BoltHead,
            ]
        );
        // safety 3 + washer 2 + nut 8 + plate 10 + washer 2 + head 5
        assert_eq!(report.total_height_mm(), 30.0);
        assert_eq!(report.total_height().value(), 30.0);
    }

    #[test]
    fn test_report_omits_unused_washers() {
        let config = AssemblyConfiguration {
            washer_under_head: false,
            washer_under_nut: false,
            ..through_hole_config()
        };
        let report = build_stack_report(&config);
        assert_eq!(report.segments().len(), 4);
        assert!(report
            .segments()
            .iter()
            .all(|s| s.kind != SegmentKind::NutSideWasher && s.kind != SegmentKind::HeadSideWasher));
    }

    #[test]
    fn test_segment_labels_and_colors() {
        assert_eq!(SegmentKind::Nut.label(), "Nut");
        assert_eq!(SegmentKind::Nut.color_hint(), "orange");
        assert_eq!(SegmentKind::NutSideWasher.label(), "Washer (Nut Side)");
        assert_eq!(SegmentKind::HeadSideWasher.color_hint(), "lightblue");
        assert_eq!(SegmentKind::BoltHead.color_hint(), "black");
    }

    #[test]
    fn test_serialization() {
        let report = build_stack_report(&through_hole_config());
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"kind\":\"Safety\""));
        let parsed: AssemblyStackReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, parsed);
    }
}
