//! # Unit Types
//!
//! Type-safe wrappers for the units used in fastener selection. These provide
//! compile-time safety against unit confusion while remaining lightweight
//! (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Fastener selection uses a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Metric Units (Primary)
//!
//! BoltCalc works in metric internally, matching the ISO/DIN fastener tables:
//! - Length: millimetres (mm), with inch conversions for US shops
//! - Torque: newton-metres (N·m), with foot-pound conversions
//!
//! ## Example
//!
//! ```rust
//! use bolt_core::units::{Mm, Inches};
//!
//! let plate = Mm(25.4);
//! let plate_in: Inches = plate.into();
//! assert!((plate_in.0 - 1.0).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Millimetres per inch
const MM_PER_INCH: f64 = 25.4;

/// Newton-metres per foot-pound
const NM_PER_FTLB: f64 = 1.355_817_948_331_400_4;

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mm(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Inches> for Mm {
    fn from(inches: Inches) -> Self {
        Mm(inches.0 * MM_PER_INCH)
    }
}

impl From<Mm> for Inches {
    fn from(mm: Mm) -> Self {
        Inches(mm.0 / MM_PER_INCH)
    }
}

// ============================================================================
// Torque Units
// ============================================================================

/// Torque in newton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

/// Torque in foot-pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FootPounds(pub f64);

impl From<FootPounds> for NewtonMeters {
    fn from(ftlb: FootPounds) -> Self {
        NewtonMeters(ftlb.0 * NM_PER_FTLB)
    }
}

impl From<NewtonMeters> for FootPounds {
    fn from(nm: NewtonMeters) -> Self {
        FootPounds(nm.0 / NM_PER_FTLB)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Mm);
impl_arithmetic!(Inches);
impl_arithmetic!(NewtonMeters);
impl_arithmetic!(FootPounds);
