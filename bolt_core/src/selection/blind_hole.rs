//! # Blind-Hole Selection
//!
//! Selects a screw for a closed-bottom hole. The screw threads directly
//! into the material, so the criterion is thread engagement: the depth left
//! after the head-side washer and safety allowance must cover a size's
//! minimum engagement. The temperature multiplier is computed and reported
//! but not applied to the depth arithmetic in this mode.
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::config::{AssemblyConfiguration, HoleType};
//! use bolt_core::selection::blind_hole;
//!
//! let config = AssemblyConfiguration {
//!     hole_type: HoleType::BlindHole,
//!     depth_or_plate_mm: 20.0,
//!     washer_under_head: true,
//!     washer_thickness_mm: 1.6,
//!     ..Default::default()
//! };
//!
//! let rec = blind_hole::select(&config).unwrap();
//! assert_eq!(rec.size.designation(), "M6");
//! assert!((rec.length_or_engagement_mm - 15.4).abs() < 1e-9);
//! ```

use crate::catalog::FastenerSize;
use crate::config::AssemblyConfiguration;
use crate::errors::{SelectError, SelectResult};
use crate::selection::stack;
use crate::selection::Recommendation;

/// Select the smallest catalog size whose minimum engagement fits within
/// the available depth.
///
/// Expects a configuration with `hole_type = BlindHole`; the depth reading
/// of the depth field is used and `washer_under_nut` is not applicable.
/// Inputs are assumed validated (see [`AssemblyConfiguration::validate`]).
///
/// # Returns
///
/// * `Ok(Recommendation)` - smallest satisfying size, available engagement
///   depth, rated torque, reported multiplier, stack report
/// * `Err(SelectError::InsufficientDepth)` - the available depth is below
///   every catalog size's minimum engagement
pub fn select(config: &AssemblyConfiguration) -> SelectResult<Recommendation> {
    let multiplier = config.temperature_class.multiplier();

    let head_washer = if config.washer_under_head {
        config.washer_thickness_mm
    } else {
        0.0
    };
    let depth_available = config.depth_mm() - head_washer - config.safety_allowance_mm;

    for size in FastenerSize::ALL {
        if depth_available >= size.min_engagement_mm() {
            return Ok(Recommendation {
                size,
                hole_type: config.hole_type,
                length_or_engagement_mm: depth_available,
                applied_multiplier: multiplier,
                torque_nm: size.rated_torque_nm(),
                stack: stack::build_stack_report(config),
            });
        }
    }

    let min_engagement_mm = FastenerSize::ALL
        .iter()
        .map(|s| s.min_engagement_mm())
        .fold(f64::INFINITY, f64::min);

    Err(SelectError::InsufficientDepth {
        depth_available_mm: depth_available,
        min_engagement_mm,
    })
}
