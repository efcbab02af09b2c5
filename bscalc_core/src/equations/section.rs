//! # Cross-Section Property Formulas
//!
//! Geometric properties of solid rectangular sections. These feed the member
//! checks: the elastic section modulus is the input to the BS 5950 bending
//! capacity, and the radius of gyration is the basis for slenderness.
//!
//! ## Notation
//!
//! - `A` = Cross-sectional area
//! - `I` = Moment of inertia (second moment of area)
//! - `Z` = Elastic section modulus (I/c, where c = distance to extreme fiber)
//! - `r` = Radius of gyration (√(I/A))
//! - `b` = Width of section
//! - `h` = Overall depth of section
//!
//! ## References
//!
//! - BS 5950-1:2000 Section 4.2.5: Moment capacity
//! - SCI P363 (Blue Book): Section property definitions

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::units::{CubicCentimetres, CubicMillimetres};

// =============================================================================
// RECTANGULAR SECTION PROPERTIES
// =============================================================================

/// Calculate cross-sectional area for rectangular section
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │         │
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b × h
///
/// # Example
/// ```rust
/// use bscalc_core::equations::section::rectangular_area;
///
/// let area = rectangular_area(300.0, 600.0);
/// assert_eq!(area, 180_000.0);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Calculate moment of inertia for rectangular section about the major axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← neutral axis at h/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bh³/12
///
/// # Example
/// ```rust
/// use bscalc_core::equations::section::rectangular_moment_of_inertia;
///
/// let i = rectangular_moment_of_inertia(300.0, 600.0);
/// assert_eq!(i, 5.4e9);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Calculate elastic section modulus for rectangular section
///
/// # Formula
/// Z = I/c = bh³/12 ÷ h/2 = bh²/6
///
/// # Example
/// ```rust
/// use bscalc_core::equations::section::rectangular_section_modulus;
///
/// let z = rectangular_section_modulus(300.0, 600.0);
/// assert_eq!(z, 1.8e7);
/// ```
#[inline]
pub fn rectangular_section_modulus(b: f64, h: f64) -> f64 {
    b * h.powi(2) / 6.0
}

/// Calculate radius of gyration for rectangular section
///
/// # Formula
/// r = √(I/A)
///
/// Returns NaN for a zero-area section; use [`section_properties`] for a
/// checked version.
#[inline]
pub fn rectangular_radius_of_gyration(b: f64, h: f64) -> f64 {
    (rectangular_moment_of_inertia(b, h) / rectangular_area(b, h)).sqrt()
}

// =============================================================================
// CHECKED SECTION PROPERTIES
// =============================================================================

/// Geometric properties of a solid rectangle (mm, mm², mm⁴, mm³).
///
/// ## JSON Example
///
/// ```json
/// {
///   "area": 180000.0,
///   "moment_of_inertia": 5400000000.0,
///   "section_modulus": 18000000.0,
///   "radius_of_gyration": 173.205
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area A (mm²)
    pub area: f64,
    /// Moment of inertia I (mm⁴)
    pub moment_of_inertia: f64,
    /// Elastic section modulus Z (mm³)
    pub section_modulus: f64,
    /// Radius of gyration r (mm)
    pub radius_of_gyration: f64,
}

impl SectionProperties {
    /// Section modulus in cm³, the unit steel section tables use
    pub fn section_modulus_cm3(&self) -> f64 {
        CubicCentimetres::from(CubicMillimetres(self.section_modulus)).value()
    }
}

/// Calculate all properties of a solid rectangular section.
///
/// Zero, negative or non-finite dimensions are a degenerate section and
/// return `InvalidInput` rather than NaN properties.
///
/// # Example
/// ```rust
/// use bscalc_core::equations::section::section_properties;
///
/// let props = section_properties(300.0, 600.0).unwrap();
/// assert_eq!(props.area, 180_000.0);
/// assert!((props.radius_of_gyration - 173.2).abs() < 0.01);
///
/// assert!(section_properties(0.0, 600.0).is_err());
/// ```
pub fn section_properties(b: f64, h: f64) -> CalcResult<SectionProperties> {
    check_dimension("b", b)?;
    check_dimension("h", h)?;

    let area = rectangular_area(b, h);
    let moment_of_inertia = rectangular_moment_of_inertia(b, h);

    Ok(SectionProperties {
        area,
        moment_of_inertia,
        section_modulus: rectangular_section_modulus(b, h),
        radius_of_gyration: (moment_of_inertia / area).sqrt(),
    })
}

fn check_dimension(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            "Degenerate section: dimensions must be positive and finite",
        ));
    }
    Ok(())
}

// =============================================================================
// UNIT TESTS
// =============================================================================
