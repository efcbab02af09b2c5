//! # Steel Member Check
//!
//! Cross-section check of a steel member under axial compression and major
//! axis bending per BS 5950-1.
//!
//! ## Assumptions
//!
//! - Full lateral restraint (no lateral-torsional buckling)
//! - Stocky member: compression resistance is the squash load
//! - Linear interaction F/Pc + M/Mc ≤ 1 (clause 4.8.3.2)
//!
//! ## Example
//!
//! ```rust
//! use bscalc_core::calculations::steel_member::{calculate, SteelMemberInput};
//! use bscalc_core::design::SteelDesignBS5950;
//! use bscalc_core::materials::StrutCurve;
//!
//! let input = SteelMemberInput {
//!     label: "C-1".to_string(),
//!     section_modulus_cm3: 1_320.0,
//!     area_mm2: 11_400.0,
//!     strut_curve: StrutCurve::B,
//!     design_moment_knm: 120.0,
//!     design_axial_kn: 900.0,
//! };
//!
//! let result = calculate(&input, &SteelDesignBS5950::default()).unwrap();
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::design::SteelDesignBS5950;
use crate::errors::{require_non_negative, require_positive, CalcResult};
use crate::materials::StrutCurve;

/// Input parameters for a steel member check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "C-1",
///   "section_modulus_cm3": 1320.0,
///   "area_mm2": 11400.0,
///   "strut_curve": "B",
///   "design_moment_knm": 120.0,
///   "design_axial_kn": 900.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteelMemberInput {
    /// User label for this member (e.g., "C-1")
    pub label: String,

    /// Elastic section modulus Z (cm³)
    pub section_modulus_cm3: f64,

    /// Gross cross-sectional area Ag (mm²)
    pub area_mm2: f64,

    /// Strut curve designation; recorded only
    #[serde(default)]
    pub strut_curve: StrutCurve,

    /// Ultimate design moment Mx (kN·m)
    pub design_moment_knm: f64,

    /// Ultimate axial compression Fc (kN)
    pub design_axial_kn: f64,
}

impl SteelMemberInput {
    /// Validate input parameters.
    ///
    /// Section properties must be positive, loads non-negative, and every
    /// value finite.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("section_modulus_cm3", self.section_modulus_cm3)?;
        require_positive("area_mm2", self.area_mm2)?;
        require_non_negative("design_moment_knm", self.design_moment_knm)?;
        require_non_negative("design_axial_kn", self.design_axial_kn)?;
        Ok(())
    }
}

/// Results from a steel member check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SteelMemberResult {
    /// Moment capacity Mc (kN·m)
    pub moment_capacity_knm: f64,

    /// Compression capacity Pc (kN)
    pub compression_capacity_kn: f64,

    /// Mx / Mc
    pub bending_unity: f64,

    /// Fc / Pc
    pub axial_unity: f64,

    /// Fc/Pc + Mx/Mc
    pub combined_unity: f64,
}

impl SteelMemberResult {
    /// Check if the member passes (combined unity ≤ 1.0)
    pub fn passes(&self) -> bool {
        self.combined_unity <= 1.0
    }
}

/// Check a steel member.
pub fn calculate(
    input: &SteelMemberInput,
    designer: &SteelDesignBS5950,
) -> CalcResult<SteelMemberResult> {
    input.validate()?;

    let moment_capacity_knm = designer.bending_capacity(input.section_modulus_cm3)?;
    let compression_capacity_kn =
        designer.compression_capacity(input.area_mm2, input.strut_curve)?;

    let bending_unity = input.design_moment_knm / moment_capacity_knm;
    let axial_unity = input.design_axial_kn / compression_capacity_kn;

    Ok(SteelMemberResult {
        moment_capacity_knm,
        compression_capacity_kn,
        bending_unity,
        axial_unity,
        combined_unity: bending_unity + axial_unity,
    })
}
