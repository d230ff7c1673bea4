//! # Through-Hole Selection
//!
//! Selects a bolt/nut pair for a hole passing fully through the joint.
//!
//! The admission threshold is computed once from the *largest* nut height in
//! the whole catalog; each candidate's own length uses its own nut height,
//! scaled by the temperature multiplier and rounded to whole millimetres.
//! The first (smallest) size whose rounded length reaches the threshold
//! wins. The threshold itself is never scaled by the multiplier.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::config::{AssemblyConfiguration, HoleType};
//! use bolt_core::selection::through_hole;
//!
//! let config = AssemblyConfiguration {
//!     hole_type: HoleType::ThroughHole,
//!     depth_or_plate_mm: 10.0,
//!     washer_under_head: true,
//!     washer_under_nut: true,
//!     ..Default::default()
//! };
//!
//! let rec = through_hole::select(&config).unwrap();
//! assert_eq!(rec.size.designation(), "M16");
//! assert_eq!(rec.torque_nm, 190.0);
//! ```

use crate::catalog::FastenerSize;
use crate::config::AssemblyConfiguration;
use crate::errors::{SelectError, SelectResult};
use crate::selection::stack::{self, THREAD_CLEARANCE_MM};
use crate::selection::Recommendation;

/// Select the smallest catalog size whose derated length meets the
/// admission threshold.
///
/// Expects a configuration with `hole_type = ThroughHole`; the plate reading
/// of the depth field is used. Inputs are assumed validated (see
/// [`AssemblyConfiguration::validate`]).
///
/// # Returns
///
/// * `Ok(Recommendation)` - smallest satisfying size, rounded total length,
///   rated torque, applied multiplier, stack report
/// * `Err(SelectError::NoSizeFitsLength)` - no catalog size reaches the
///   threshold
pub fn select(config: &AssemblyConfiguration) -> SelectResult<Recommendation> {
    let multiplier = config.temperature_class.multiplier();
    let base = stack::base_stack_mm(config);

    // Threshold from the catalog-wide maximum nut height, not per candidate.
    let threshold =
        base + FastenerSize::max_nut_height_mm() + THREAD_CLEARANCE_MM + config.safety_allowance_mm;

    for size in FastenerSize::ALL {
        let raw_length =
            base + size.nut_height_mm() + THREAD_CLEARANCE_MM + config.safety_allowance_mm;
        let final_length = (raw_length * multiplier).round();

        if final_length >= threshold {
            return Ok(Recommendation {
                size,
                hole_type: config.hole_type,
                length_or_engagement_mm: final_length,
                applied_multiplier: multiplier,
                torque_nm: size.rated_torque_nm(),
                stack: stack::build_stack_report(config),
            });
        }
    }

    Err(SelectError::NoSizeFitsLength {
        required_mm: threshold,
    })
}
