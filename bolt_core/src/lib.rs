//! # bolt_core - Fastener Selection Engine
//!
//! `bolt_core` is the computational heart of BoltCalc, recommending a
//! standardized bolt/nut size and tightening torque for a mechanical joint
//! with a clean, LLM-friendly API. All inputs and outputs are
//! JSON-serializable, making it ideal for integration with AI assistants
//! via MCP or similar protocols.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Well-Documented**: Every type and function has examples
//!
//! ## Quick Start
//!
//! ```rust
//! use bolt_core::config::{AssemblyConfiguration, HoleType};
//! use bolt_core::selection::select;
//!
//! // Describe the joint: a 10 mm plate, washers both sides
//! let config = AssemblyConfiguration {
//!     hole_type: HoleType::ThroughHole,
//!     depth_or_plate_mm: 10.0,
//!     washer_under_head: true,
//!     washer_under_nut: true,
//!     ..Default::default()
//! };
//! config.validate().unwrap();
//!
//! let rec = select(&config).unwrap();
//! assert_eq!(rec.bolt_description(), "M16 Hex Bolt");
//!
//! // Serialize to JSON for display or transmission
//! let json = serde_json::to_string_pretty(&rec).unwrap();
//! # assert!(json.contains("M16"));
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Joint configuration (hole type, geometry, washers, margins)
//! - [`catalog`] - Standard fastener sizes and their reference data
//! - [`derating`] - Temperature classes and length multipliers
//! - [`selection`] - The selection procedures and stack report
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod config;
pub mod derating;
pub mod errors;
pub mod selection;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use catalog::FastenerSize;
pub use config::{AssemblyConfiguration, HoleType};
pub use derating::TemperatureClass;
pub use errors::{SelectError, SelectResult};
pub use selection::{
    build_stack_report, select, select_blind_hole, select_through_hole, AssemblyStackReport,
    Recommendation,
};
