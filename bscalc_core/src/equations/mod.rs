//! # Structural Engineering Equations
//!
//! Geometric formulas shared by the design checks. The code-specific design
//! equations live with their design components in [`crate::design`].
//!
//! ## Modules
//!
//! - [`section`] - Cross-section properties (A, I, Z, r)
//!
//! ## Units
//!
//! All formulas are unit-agnostic; the design components pass millimetres.

pub mod section;

pub use section::{
    rectangular_area,
    rectangular_moment_of_inertia,
    rectangular_radius_of_gyration,
    rectangular_section_modulus,
    section_properties,
    SectionProperties,
};
