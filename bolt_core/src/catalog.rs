//! Standard Fastener Sizes
//!
//! Metric bolt/nut sizes with the catalog data the selection engine works
//! from: nut height, default washer thickness, minimum thread engagement,
//! and rated tightening torque (ASME/DIN hex hardware, coarse thread).
//!
//! ## Catalog
//!
//! | Size | Nut height | Washer | Min engagement | Torque  |
//! |------|------------|--------|----------------|---------|
//! | M6   | 5.2 mm     | 1.6 mm | 6 mm           | 9 N·m   |
//! | M8   | 6.5 mm     | 1.6 mm | 8 mm           | 22 N·m  |
//! | M10  | 8.0 mm     | 2.0 mm | 10 mm          | 45 N·m  |
//! | M12  | 10.0 mm    | 2.5 mm | 12 mm          | 77 N·m  |
//! | M16  | 13.0 mm    | 3.0 mm | 16 mm          | 190 N·m |
//!
//! The catalog is a fixed table, ordered by ascending nominal diameter.
//! [`FastenerSize::ALL`] is that order; the selection engine iterates it
//! front to back so the first satisfying entry is always the smallest.

use serde::{Deserialize, Serialize};

use crate::units::NewtonMeters;

/// Standard metric fastener size designation
///
/// Represents one catalog entry with lookup methods for its dimensional
/// and torque data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FastenerSize {
    /// M6 (nut 5.2 mm, engagement 6 mm)
    M6,
    /// M8 (nut 6.5 mm, engagement 8 mm)
    M8,
    /// M10 (nut 8.0 mm, engagement 10 mm)
    #[default]
    M10,
    /// M12 (nut 10.0 mm, engagement 12 mm)
    M12,
    /// M16 (nut 13.0 mm, engagement 16 mm)
    M16,
}

impl FastenerSize {
    /// All catalog sizes in ascending nominal diameter order.
    ///
    /// Selection iterates this array front to back; keep it sorted.
    pub const ALL: [FastenerSize; 5] = [
        FastenerSize::M6,
        FastenerSize::M8,
        FastenerSize::M10,
        FastenerSize::M12,
        FastenerSize::M16,
    ];

    /// Get the size designation (e.g., "M10")
    pub fn designation(&self) -> &'static str {
        match self {
            FastenerSize::M6 => "M6",
            FastenerSize::M8 => "M8",
            FastenerSize::M10 => "M10",
            FastenerSize::M12 => "M12",
            FastenerSize::M16 => "M16",
        }
    }

    /// Get the nominal thread diameter in millimetres
    pub fn nominal_diameter_mm(&self) -> f64 {
        match self {
            FastenerSize::M6 => 6.0,
            FastenerSize::M8 => 8.0,
            FastenerSize::M10 => 10.0,
            FastenerSize::M12 => 12.0,
            FastenerSize::M16 => 16.0,
        }
    }

    /// Get the hex nut height in millimetres
    pub fn nut_height_mm(&self) -> f64 {
        match self {
            FastenerSize::M6 => 5.2,
            FastenerSize::M8 => 6.5,
            FastenerSize::M10 => 8.0,
            FastenerSize::M12 => 10.0,
            FastenerSize::M16 => 13.0,
        }
    }

    /// Get the default flat washer thickness in millimetres
    ///
    /// Informational only: the configuration's custom washer thickness
    /// overrides this in all stack arithmetic.
    pub fn washer_thickness_mm(&self) -> f64 {
        match self {
            FastenerSize::M6 => 1.6,
            FastenerSize::M8 => 1.6,
            FastenerSize::M10 => 2.0,
            FastenerSize::M12 => 2.5,
            FastenerSize::M16 => 3.0,
        }
    }

    /// Get the minimum thread engagement in millimetres (blind holes)
    pub fn min_engagement_mm(&self) -> f64 {
        match self {
            FastenerSize::M6 => 6.0,
            FastenerSize::M8 => 8.0,
            FastenerSize::M10 => 10.0,
            FastenerSize::M12 => 12.0,
            FastenerSize::M16 => 16.0,
        }
    }

    /// Get the rated tightening torque in newton-metres
    pub fn rated_torque_nm(&self) -> f64 {
        match self {
            FastenerSize::M6 => 9.0,
            FastenerSize::M8 => 22.0,
            FastenerSize::M10 => 45.0,
            FastenerSize::M12 => 77.0,
            FastenerSize::M16 => 190.0,
        }
    }

    /// Get the rated tightening torque as a typed quantity
    pub fn rated_torque(&self) -> NewtonMeters {
        NewtonMeters(self.rated_torque_nm())
    }

    /// Largest nut height across the whole catalog, in millimetres
    ///
    /// The through-hole admission threshold is computed from this value,
    /// not from the candidate size under consideration.
    pub fn max_nut_height_mm() -> f64 {
        Self::ALL
            .iter()
            .map(|s| s.nut_height_mm())
            .fold(0.0, f64::max)
    }

    /// Look up a size by designation (e.g., "M10", case-insensitive)
    ///
    /// The engine only iterates known entries; this lookup exists for
    /// callers constructing configurations from text.
    pub fn from_designation(designation: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|s| s.designation().eq_ignore_ascii_case(designation.trim()))
            .copied()
    }
}

impl std::fmt::Display for FastenerSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.designation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_values() {
        let size = FastenerSize::M16;
        assert_eq!(size.nut_height_mm(), 13.0);
        assert_eq!(size.washer_thickness_mm(), 3.0);
        assert_eq!(size.min_engagement_mm(), 16.0);
        assert_eq!(size.rated_torque_nm(), 190.0);
        assert_eq!(size.designation(), "M16");
    }

    #[test]
    fn test_ascending_diameter_order() {
        // The engine's first-fit rule depends on this ordering.
        for pair in FastenerSize::ALL.windows(2) {
            assert!(
                pair[0].nominal_diameter_mm() < pair[1].nominal_diameter_mm(),
                "{} must come before {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_unique_designations() {
        for (i, a) in FastenerSize::ALL.iter().enumerate() {
            for b in FastenerSize::ALL.iter().skip(i + 1) {
                assert_ne!(a.designation(), b.designation());
            }
        }
    }

    #[test]
    fn test_max_nut_height() {
        assert_eq!(FastenerSize::max_nut_height_mm(), 13.0);
    }

    #[test]
    fn test_from_designation() {
        assert_eq!(FastenerSize::from_designation("M10"), Some(FastenerSize::M10));
        assert_eq!(FastenerSize::from_designation("m16"), Some(FastenerSize::M16));
        assert_eq!(FastenerSize::from_designation(" M6 "), Some(FastenerSize::M6));
        assert_eq!(FastenerSize::from_designation("M20"), None);
    }

    #[test]
    fn test_typed_torque() {
        let torque = FastenerSize::M10.rated_torque();
        assert_eq!(torque.value(), 45.0);
    }

    #[test]
    fn test_serialization() {
        let size = FastenerSize::M12;
        let json = serde_json::to_string(&size).unwrap();
        assert_eq!(json, "\"M12\"");
        let parsed: FastenerSize = serde_json::from_str(&json).unwrap();
        assert_eq!(size, parsed);
    }

    #[test]
    fn test_default() {
        assert_eq!(FastenerSize::default(), FastenerSize::M10);
    }
}
