//! # bscalc_core - British Standard Design Check Engine
//!
//! `bscalc_core` evaluates the closed-form design formulas of BS 8110
//! (reinforced concrete), BS 5950 (structural steel) and BS 6399 (loading).
//! All inputs, results and errors are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Components hold code constants only; every method is pure
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Design-rule failures are distinct from bad input
//!
//! ## Quick Start
//!
//! ```rust
//! use bscalc_core::design::BeamDesignBS8110;
//! use bscalc_core::materials::MaterialProperties;
//!
//! let material = MaterialProperties::new("C30", "B500", 200_000.0, 30_000.0);
//! let beam = BeamDesignBS8110::new(&material);
//!
//! let mu = beam.moment_capacity_singly_reinforced(300.0, 450.0, 942.0).unwrap();
//! let as_req = beam.required_reinforcement(150.0, 300.0, 450.0).unwrap();
//! assert!(as_req < 942.0 && mu > 150.0);
//! ```
//!
//! ## Modules
//!
//! - [`design`] - BS 8110 beam and BS 5950 steel designers
//! - [`loads`] - BS 6399 floor loading and load factors
//! - [`equations`] - Rectangular section properties
//! - [`calculations`] - Member checks with unity ratios
//! - [`materials`] - Material properties and grade tables
//! - [`settings`] - Code-edition constants as JSON
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod design;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use design::{BeamDesignBS8110, SteelDesignBS5950};
pub use equations::{section_properties, SectionProperties};
pub use errors::{CalcError, CalcResult, DesignRule};
pub use loads::{LoadingBS6399, UltimateLoads};
pub use materials::MaterialProperties;
pub use settings::DesignSettings;
