//! # Reinforced Concrete Beam Check
//!
//! Checks a singly reinforced rectangular beam against its ultimate design
//! moment and shear per BS 8110.
//!
//! ## Assumptions
//!
//! - Tension reinforcement only; a section needing compression steel or
//!   carrying more than the balanced steel area is reported as an error
//! - Concrete shear resistance only (no links)
//!
//! ## Example
//!
//! ```rust
//! use bscalc_core::calculations::rc_beam::{calculate, RcBeamInput};
//! use bscalc_core::design::BeamDesignBS8110;
//! use bscalc_core::materials::MaterialProperties;
//!
//! let input = RcBeamInput {
//!     label: "B-1".to_string(),
//!     width_mm: 300.0,
//!     effective_depth_mm: 450.0,
//!     steel_area_mm2: 942.0, // 3H20
//!     design_moment_knm: 150.0,
//!     design_shear_kn: 60.0,
//! };
//!
//! let designer = BeamDesignBS8110::new(&MaterialProperties::default());
//! let result = calculate(&input, &designer).unwrap();
//!
//! println!("Mu = {:.1} kN·m", result.moment_capacity_knm);
//! println!("As,req = {:.0} mm²", result.required_steel_mm2);
//! assert!(result.passes());
//! ```

use serde::{Deserialize, Serialize};

use crate::design::BeamDesignBS8110;
use crate::errors::{require_non_negative, require_positive, CalcResult};

/// Input parameters for a rectangular RC beam check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "width_mm": 300.0,
///   "effective_depth_mm": 450.0,
///   "steel_area_mm2": 942.0,
///   "design_moment_knm": 150.0,
///   "design_shear_kn": 60.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RcBeamInput {
    /// User label for this beam (e.g., "B-1", "Transfer beam grid 3")
    pub label: String,

    /// Beam width b (mm)
    pub width_mm: f64,

    /// Effective depth d to the tension steel centroid (mm)
    pub effective_depth_mm: f64,

    /// Area of tension reinforcement provided (mm²)
    pub steel_area_mm2: f64,

    /// Ultimate design moment M (kN·m)
    pub design_moment_knm: f64,

    /// Ultimate design shear V (kN)
    pub design_shear_kn: f64,
}

impl RcBeamInput {
    /// Validate input parameters.
    ///
    /// Geometry and steel area must be positive, loads non-negative, and
    /// every value finite.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("width_mm", self.width_mm)?;
        require_positive("effective_depth_mm", self.effective_depth_mm)?;
        require_positive("steel_area_mm2", self.steel_area_mm2)?;
        require_non_negative("design_moment_knm", self.design_moment_knm)?;
        require_non_negative("design_shear_kn", self.design_shear_kn)?;
        Ok(())
    }
}

/// Results from an RC beam check.
///
/// ## JSON Example
///
/// ```json
/// {
///   "moment_capacity_knm": 165.74,
///   "required_steel_mm2": 853.1,
///   "shear_capacity_kn": 73.48,
///   "k_factor": 0.0823,
///   "lever_arm_mm": 404.18,
///   "neutral_axis_depth_mm": 101.18,
///   "bending_unity": 0.91,
///   "steel_unity": 0.91,
///   "shear_unity": 0.82
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RcBeamResult {
    // === Capacity ===
    /// Moment of resistance of the provided steel Mu (kN·m)
    pub moment_capacity_knm: f64,

    /// Steel area required for the design moment (mm²)
    pub required_steel_mm2: f64,

    /// Concrete shear resistance Vc (kN)
    pub shear_capacity_kn: f64,

    // === Intermediate Values ===
    /// K = M / (b·d²·fcu)
    pub k_factor: f64,

    /// Lever arm used for the required steel z (mm)
    pub lever_arm_mm: f64,

    /// Neutral axis depth of the provided steel x (mm)
    pub neutral_axis_depth_mm: f64,

    // === Unity Checks ===
    /// M / Mu
    pub bending_unity: f64,

    /// As,req / As,prov
    pub steel_unity: f64,

    /// V / Vc; above 1.0 the beam needs designed links
    pub shear_unity: f64,
}

impl RcBeamResult {
    /// Check if all unity checks pass (≤ 1.0)
    pub fn passes(&self) -> bool {
        self.bending_unity <= 1.0 && self.steel_unity <= 1.0 && self.shear_unity <= 1.0
    }

    /// Get the governing (highest) unity ratio
    pub fn governing_unity(&self) -> f64 {
        self.bending_unity.max(self.steel_unity).max(self.shear_unity)
    }

    /// Get a description of what governs the design
    pub fn governing_condition(&self) -> &'static str {
        if self.bending_unity >= self.steel_unity && self.bending_unity >= self.shear_unity {
            "Bending"
        } else if self.steel_unity >= self.shear_unity {
            "Reinforcement"
        } else {
            "Shear"
        }
    }
}

/// Check an RC beam.
///
/// # Returns
///
/// * `Ok(RcBeamResult)` - Capacities and unity checks
/// * `Err(CalcError::DesignRuleViolation)` - The section is over-reinforced or
///   the design moment needs compression reinforcement
/// * `Err(CalcError::InvalidInput)` - Invalid geometry or loads
pub fn calculate(input: &RcBeamInput, designer: &BeamDesignBS8110) -> CalcResult<RcBeamResult> {
    input.validate()?;

    let b = input.width_mm;
    let d = input.effective_depth_mm;

    let steel_area_mm2 = input.steel_area_mm2;
    let moment_capacity_knm = designer.moment_capacity_singly_reinforced(b, d, steel_area_mm2)?;
    let required_steel_mm2 = designer.required_reinforcement(input.design_moment_knm, b, d)?;
    let shear_capacity_kn = designer.shear_capacity(b, d, input.steel_area_mm2)?;

    let k_factor = designer.k_factor(input.design_moment_knm, b, d);

    Ok(RcBeamResult {
        moment_capacity_knm,
        required_steel_mm2,
        shear_capacity_kn,
        k_factor,
        lever_arm_mm: designer.lever_arm(k_factor, d),
        neutral_axis_depth_mm: designer.neutral_axis_depth(b, input.steel_area_mm2),
        bending_unity: input.design_moment_knm / moment_capacity_knm,
        steel_unity: required_steel_mm2 / input.steel_area_mm2,
        shear_unity: input.design_shear_kn / shear_capacity_kn,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{CalcError, DesignRule};
    use crate::materials::MaterialProperties;
    use approx::assert_relative_eq;

    fn designer() -> BeamDesignBS8110 {
        BeamDesignBS8110::new(&MaterialProperties::default())
    }

    fn test_beam() -> RcBeamInput {
        RcBeamInput {
            label: "Test Beam".to_string(),
            width_mm: 300.0,
            effective_depth_mm: 450.0,
            steel_area_mm2: 942.0,
            design_moment_knm: 150.0,
            design_shear_kn: 60.0,
        }
    }

    #[test]
    fn test_beam_check() {
        let result = calculate(&test_beam(), &designer()).unwrap();
        assert_relative_eq!(result.moment_capacity_knm, 165.7397, epsilon = 1e-3);
        assert_relative_eq!(result.required_steel_mm2, 853.148, epsilon = 1e-2);
        assert_relative_eq!(result.neutral_axis_depth_mm, 101.178, epsilon = 1e-2);
        assert_relative_eq!(result.lever_arm_mm, 404.183, epsilon = 1e-2);
        assert!(result.passes());
    }

    #[test]
    fn test_unity_ratios() {
        let result = calculate(&test_beam(), &designer()).unwrap();
        assert_relative_eq!(result.bending_unity, 150.0 / result.moment_capacity_knm);
        assert_relative_eq!(result.steel_unity, result.required_steel_mm2 / 942.0);
        assert_relative_eq!(result.shear_unity, 60.0 / result.shear_capacity_kn);
        assert_eq!(result.governing_condition(), "Reinforcement");
    }

    #[test]
    fn test_shear_governs() {
        let mut beam = test_beam();
        beam.design_shear_kn = 120.0;
        let result = calculate(&beam, &designer()).unwrap();
        assert!(!result.passes());
        assert_eq!(result.governing_condition(), "Shear");
    }

    #[test]
    fn test_over_reinforced_propagates() {
        let mut beam = test_beam();
        beam.steel_area_mm2 = 2500.0;
        let err = calculate(&beam, &designer()).unwrap_err();
        assert_eq!(err.design_rule(), Some(DesignRule::OverReinforced));
    }

    #[test]
    fn test_compression_steel_propagates() {
        let mut beam = test_beam();
        beam.design_moment_knm = 320.0;
        let err = calculate(&beam, &designer()).unwrap_err();
        assert_eq!(err.design_rule(), Some(DesignRule::CompressionReinforcementRequired));
    }

    #[test]
    fn test_invalid_width() {
        let mut beam = test_beam();
        beam.width_mm = -300.0;
        let err = calculate(&beam, &designer()).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let beam = test_beam();
        let json = serde_json::to_string_pretty(&beam).unwrap();
        let roundtrip: RcBeamInput = serde_json::from_str(&json).unwrap();
        assert_eq!(beam.effective_depth_mm, roundtrip.effective_depth_mm);

        let result = calculate(&beam, &designer()).unwrap();
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("moment_capacity_knm"));
        assert!(json.contains("shear_unity"));
    }

    #[test]
    fn test_nan_inputs_rejected() {
        let fields: [(&str, fn(&mut RcBeamInput)); 5] = [
            ("width_mm", |beam| beam.width_mm = f64::NAN),
            ("effective_depth_mm", |beam| beam.effective_depth_mm = f64::NAN),
            ("steel_area_mm2", |beam| beam.steel_area_mm2 = f64::NAN),
            ("design_moment_knm", |beam| beam.design_moment_knm = f64::NAN),
            ("design_shear_kn", |beam| beam.design_shear_kn = f64::NAN),
        ];
        for (name, corrupt) in fields {
            let mut beam = test_beam();
            corrupt(&mut beam);
            match beam.validate().unwrap_err() {
                CalcError::InvalidInput { field, .. } => assert_eq!(field, name),
                other => panic!("unexpected error for {}: {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_infinite_shear_rejected() {
        let mut beam = test_beam();
        beam.design_shear_kn = f64::INFINITY;
        assert_eq!(calculate(&beam, &designer()).unwrap_err().error_code(), "INVALID_INPUT");
    }
}
