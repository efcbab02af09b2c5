//! # Reinforced Concrete Beam Design (BS 8110-1:1997)
//!
//! Flexural and shear capacity of singly reinforced rectangular beams using
//! the simplified rectangular stress block of clause 3.4.4.4.
//!
//! ## Assumptions
//!
//! - Rectangular section, tension reinforcement only
//! - Moment redistribution not exceeding 10% (K' = 0.156, x ≤ 0.5d)
//! - Concrete shear resistance without links (Table 3.8 expression)
//!
//! ## Units
//!
//! Geometry in mm, areas in mm², stresses in MPa. Moments are returned in
//! kN·m and shears in kN.
//!
//! ## Example
//!
//! ```rust
//! use bscalc_core::design::BeamDesignBS8110;
//! use bscalc_core::errors::DesignRule;
//! use bscalc_core::materials::MaterialProperties;
//!
//! let beam = BeamDesignBS8110::new(&MaterialProperties::default());
//!
//! let mu = beam.moment_capacity_singly_reinforced(300.0, 450.0, 942.0).unwrap();
//! assert!((mu - 165.74).abs() < 0.01);
//!
//! // Too much steel for a singly reinforced design
//! let err = beam.moment_capacity_singly_reinforced(300.0, 450.0, 3000.0).unwrap_err();
//! assert_eq!(err.design_rule(), Some(DesignRule::OverReinforced));
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::{
    require_fraction, require_non_negative, require_positive, CalcError, CalcResult, DesignRule,
};
use crate::materials::MaterialProperties;
use crate::units::{KilonewtonMetres, Kilonewtons, NewtonMillimetres, Newtons};

/// Partial safety factor for concrete in flexure
pub const GAMMA_C: f64 = 1.5;
/// Partial safety factor for reinforcement
pub const GAMMA_S: f64 = 1.15;
/// Partial safety factor for concrete shear strength (Table 3.8)
pub const GAMMA_M_SHEAR: f64 = 1.25;

/// Default characteristic cube strength fcu (MPa)
pub const DEFAULT_FCU_MPA: f64 = 30.0;
/// Default characteristic reinforcement yield strength fy (MPa)
pub const DEFAULT_FY_MPA: f64 = 500.0;

/// Design stress in reinforcement as a fraction of fy (≈ 1/γs)
pub const STEEL_STRESS_FACTOR: f64 = 0.87;
/// Average stress-block stress as a fraction of fcu (0.67/γc)
pub const CONCRETE_STRESS_FACTOR: f64 = 0.45;
/// Lever arm reduction z = d - 0.45x
pub const LEVER_ARM_REDUCTION: f64 = 0.45;
/// Maximum neutral axis depth as a fraction of d
pub const NEUTRAL_AXIS_LIMIT: f64 = 0.5;
/// K' for redistribution not exceeding 10%
pub const K_LIMIT: f64 = 0.156;
/// Upper bound on the lever arm as a fraction of d
pub const LEVER_ARM_CAP: f64 = 0.95;

/// Largest K for which 0.25 - K/0.9 stays non-negative
const K_LIMIT_MAX: f64 = 0.225;
const LEVER_ARM_K_DIVISOR: f64 = 0.9;
const SHEAR_COEFFICIENT: f64 = 0.79;
const SHEAR_REFERENCE_DEPTH_MM: f64 = 400.0;
const SHEAR_STEEL_RATIO_MIN: f64 = 0.15;
const SHEAR_STEEL_RATIO_MAX: f64 = 3.0;

const FLEXURE_CLAUSE: &str = "BS 8110-1 cl. 3.4.4.4";

/// BS 8110 beam designer.
///
/// Holds the material and the code constants for one code edition. Every
/// method is a pure function of its arguments and these fields, so separate
/// instances can carry different editions side by side.
///
/// ## JSON Example
///
/// Any field may be omitted; missing fields take the BS 8110-1:1997 values.
///
/// ```json
/// {
///   "fcu_mpa": 35.0,
///   "k_limit": 0.156
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamDesignBS8110 {
    /// Material the beam was configured with
    pub material: MaterialProperties,

    /// Characteristic cube strength fcu (MPa)
    pub fcu_mpa: f64,

    /// Characteristic reinforcement yield strength fy (MPa)
    pub fy_mpa: f64,

    /// Partial safety factor γc for concrete.
    ///
    /// Informational: the flexure formulas use `concrete_stress_factor`
    /// (0.67/γc, rounded to 0.45 by the code). Change that factor to model
    /// a different γc.
    pub gamma_c: f64,

    /// Partial safety factor γs for reinforcement.
    ///
    /// Informational: the formulas use `steel_stress_factor` (1/γs, rounded
    /// to 0.87 by the code).
    pub gamma_s: f64,

    /// Partial safety factor γm applied to the shear stress expression
    pub gamma_m_shear: f64,

    /// Reinforcement design stress factor (0.87)
    pub steel_stress_factor: f64,

    /// Stress block factor (0.45)
    pub concrete_stress_factor: f64,

    /// Lever arm reduction factor (0.45)
    pub lever_arm_reduction: f64,

    /// Neutral axis depth limit x/d (0.5)
    pub neutral_axis_limit: f64,

    /// Singly reinforced limit K' (0.156)
    pub k_limit: f64,

    /// Lever arm cap z/d (0.95)
    pub lever_arm_cap: f64,
}

impl Default for BeamDesignBS8110 {
    fn default() -> Self {
        BeamDesignBS8110::new(&MaterialProperties::default())
    }
}

impl BeamDesignBS8110 {
    /// Create a designer with the default strengths fcu = 30 MPa, fy = 500 MPa.
    ///
    /// The grade labels on `material` are kept for reference but do not change
    /// the strengths; use [`BeamDesignBS8110::from_grades`] for that.
    pub fn new(material: &MaterialProperties) -> Self {
        BeamDesignBS8110 {
            material: material.clone(),
            fcu_mpa: DEFAULT_FCU_MPA,
            fy_mpa: DEFAULT_FY_MPA,
            gamma_c: GAMMA_C,
            gamma_s: GAMMA_S,
            gamma_m_shear: GAMMA_M_SHEAR,
            steel_stress_factor: STEEL_STRESS_FACTOR,
            concrete_stress_factor: CONCRETE_STRESS_FACTOR,
            lever_arm_reduction: LEVER_ARM_REDUCTION,
            neutral_axis_limit: NEUTRAL_AXIS_LIMIT,
            k_limit: K_LIMIT,
            lever_arm_cap: LEVER_ARM_CAP,
        }
    }

    /// Create a designer whose strengths come from the material's grade labels.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bscalc_core::design::BeamDesignBS8110;
    /// use bscalc_core::materials::MaterialProperties;
    ///
    /// let material = MaterialProperties::new("C40", "B500", 200_000.0, 28_000.0);
    /// let beam = BeamDesignBS8110::from_grades(&material).unwrap();
    /// assert_eq!(beam.fcu_mpa, 40.0);
    /// ```
    pub fn from_grades(material: &MaterialProperties) -> CalcResult<Self> {
        let strengths = material.characteristic_strengths()?;
        Self::new(material).with_strengths(strengths.fcu_mpa, strengths.fy_mpa)
    }

    /// Override the characteristic strengths (builder pattern).
    ///
    /// Returns `InvalidInput` unless both strengths are positive and finite.
    pub fn with_strengths(mut self, fcu_mpa: f64, fy_mpa: f64) -> CalcResult<Self> {
        self.fcu_mpa = require_positive("fcu_mpa", fcu_mpa)?;
        self.fy_mpa = require_positive("fy_mpa", fy_mpa)?;
        Ok(self)
    }

    /// Check the code constants.
    ///
    /// Strengths, partial factors and stress factors must be positive and
    /// finite, the x/d and z/d limits must lie in (0, 1], and K' in
    /// (0, 0.225] so the lever-arm quadratic stays real.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("fcu_mpa", self.fcu_mpa)?;
        require_positive("fy_mpa", self.fy_mpa)?;
        require_positive("gamma_c", self.gamma_c)?;
        require_positive("gamma_s", self.gamma_s)?;
        require_positive("gamma_m_shear", self.gamma_m_shear)?;
        require_positive("steel_stress_factor", self.steel_stress_factor)?;
        require_positive("concrete_stress_factor", self.concrete_stress_factor)?;
        require_positive("lever_arm_reduction", self.lever_arm_reduction)?;
        require_fraction("neutral_axis_limit", self.neutral_axis_limit, 1.0)?;
        require_fraction("lever_arm_cap", self.lever_arm_cap, 1.0)?;
        require_fraction("k_limit", self.k_limit, K_LIMIT_MAX)?;
        Ok(())
    }

    /// Design stress in the tension reinforcement, 0.87fy (MPa)
    pub fn steel_design_stress(&self) -> f64 {
        self.steel_stress_factor * self.fy_mpa
    }

    /// Neutral axis depth x = 0.87·fy·As / (0.45·fcu·b) in mm.
    ///
    /// Unchecked; callers pass positive geometry.
    pub fn neutral_axis_depth(&self, b: f64, as_mm2: f64) -> f64 {
        (self.steel_stress_factor * self.fy_mpa * as_mm2)
            / (self.concrete_stress_factor * self.fcu_mpa * b)
    }

    /// K = M / (b·d²·fcu) with M in kN·m.
    pub fn k_factor(&self, m_knm: f64, b: f64, d: f64) -> f64 {
        let m_nmm = NewtonMillimetres::from(KilonewtonMetres(m_knm)).value();
        m_nmm / (b * d.powi(2) * self.fcu_mpa)
    }

    /// Lever arm z = d·(0.5 + √(0.25 − K/0.9)), capped at 0.95d.
    ///
    /// The square-root argument is clamped at zero so K at or just above the
    /// limit cannot produce NaN.
    pub fn lever_arm(&self, k: f64, d: f64) -> f64 {
        let discriminant = (0.25 - k / LEVER_ARM_K_DIVISOR).max(0.0);
        let z = d * (0.5 + discriminant.sqrt());
        z.min(self.lever_arm_cap * d)
    }

    /// Ultimate moment of resistance of a singly reinforced section (kN·m).
    ///
    /// # Arguments
    ///
    /// * `b` - Beam width (mm)
    /// * `d` - Effective depth (mm)
    /// * `as_mm2` - Area of tension reinforcement (mm²)
    ///
    /// # Returns
    ///
    /// * `Ok(Mu)` - Moment capacity in kN·m
    /// * `Err(DesignRuleViolation)` - x > 0.5d, the section is over-reinforced
    /// * `Err(InvalidInput)` - Non-positive or non-finite input
    pub fn moment_capacity_singly_reinforced(
        &self,
        b: f64,
        d: f64,
        as_mm2: f64,
    ) -> CalcResult<f64> {
        self.validate()?;
        require_positive("b", b)?;
        require_positive("d", d)?;
        require_positive("as_mm2", as_mm2)?;

        let x = self.neutral_axis_depth(b, as_mm2);
        let x_max = self.neutral_axis_limit * d;
        if x > x_max {
            warn!("Over-reinforced section: x = {:.1} mm > {:.1} mm", x, x_max);
            return Err(CalcError::design_rule_violation(
                DesignRule::OverReinforced,
                FLEXURE_CLAUSE,
                format!(
                    "Neutral axis depth x = {:.1} mm exceeds {}d = {:.1} mm",
                    x, self.neutral_axis_limit, x_max
                ),
            ));
        }

        let z = d - self.lever_arm_reduction * x;
        let mu_nmm = NewtonMillimetres(self.steel_design_stress() * as_mm2 * z);
        let mu = KilonewtonMetres::from(mu_nmm).value();

        debug!(
            "BS 8110 moment capacity: b = {} mm, d = {} mm, As = {} mm², \
             x = {:.2} mm, z = {:.2} mm, Mu = {:.3} kN·m",
            b, d, as_mm2, x, z, mu
        );
        Ok(mu)
    }

    /// Area of tension reinforcement required for moment `m_knm` (mm²).
    ///
    /// # Returns
    ///
    /// * `Ok(As)` - Required steel area in mm²
    /// * `Err(DesignRuleViolation)` - K > K', compression steel is required
    /// * `Err(InvalidInput)` - Negative moment or non-positive geometry
    pub fn required_reinforcement(&self, m_knm: f64, b: f64, d: f64) -> CalcResult<f64> {
        self.validate()?;
        require_non_negative("m_knm", m_knm)?;
        require_positive("b", b)?;
        require_positive("d", d)?;

        let k = self.k_factor(m_knm, b, d);
        if k > self.k_limit {
            warn!("Compression reinforcement required: K = {:.4} > K' = {}", k, self.k_limit);
            return Err(CalcError::design_rule_violation(
                DesignRule::CompressionReinforcementRequired,
                FLEXURE_CLAUSE,
                format!("K = {:.4} exceeds K' = {}", k, self.k_limit),
            ));
        }

        let z = self.lever_arm(k, d);
        let m_nmm = NewtonMillimetres::from(KilonewtonMetres(m_knm)).value();
        let as_required = m_nmm / (self.steel_design_stress() * z);

        debug!(
            "BS 8110 required steel: M = {} kN·m, K = {:.4}, z = {:.2} mm, As = {:.1} mm²",
            m_knm, k, z, as_required
        );
        Ok(as_required)
    }

    /// Design concrete shear resistance Vc = vc·b·d (kN).
    ///
    /// vc = 0.79·(100As/bd)^(1/3)·(400/d)^(1/4) / γm
    ///
    /// The empirical limits of Table 3.8 are not applied; inputs outside the
    /// tabulated steel ratio range are logged at warn level and evaluated as-is.
    pub fn shear_capacity(&self, b: f64, d: f64, as_mm2: f64) -> CalcResult<f64> {
        self.validate()?;
        require_positive("b", b)?;
        require_positive("d", d)?;
        require_positive("as_mm2", as_mm2)?;

        let steel_ratio = 100.0 * as_mm2 / (b * d);
        if !(SHEAR_STEEL_RATIO_MIN..=SHEAR_STEEL_RATIO_MAX).contains(&steel_ratio) {
            warn!(
                "100As/bd = {:.3} is outside the Table 3.8 range {}..{}",
                steel_ratio, SHEAR_STEEL_RATIO_MIN, SHEAR_STEEL_RATIO_MAX
            );
        }

        let depth_factor = (SHEAR_REFERENCE_DEPTH_MM / d).powf(0.25);
        let vc =
            SHEAR_COEFFICIENT * steel_ratio.powf(1.0 / 3.0) * depth_factor / self.gamma_m_shear;
        let capacity = Kilonewtons::from(Newtons(vc * b * d)).value();

        debug!("BS 8110 shear capacity: vc = {:.3} MPa, Vc = {:.2} kN", vc, capacity);
        Ok(capacity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn beam() -> BeamDesignBS8110 {
        BeamDesignBS8110::new(&MaterialProperties::default())
    }

    #[test]
    fn test_moment_capacity_regression() {
        // x = 0.87*500*942 / (0.45*30*300) = 101.18 mm, z = 404.47 mm
        let mu = beam().moment_capacity_singly_reinforced(300.0, 450.0, 942.0).unwrap();
        assert_relative_eq!(mu, 165.7396719, max_relative = 1e-9);
    }

    #[test]
    fn test_moment_capacity_matches_formula() {
        let cases = [(250.0, 400.0, 600.0), (300.0, 550.0, 1256.0), (450.0, 700.0, 2454.0)];
        for (b, d, as_mm2) in cases {
            let x = (0.87 * 500.0 * as_mm2) / (0.45 * 30.0 * b);
            assert!(x <= 0.5 * d);
            let z = d - 0.45 * x;
            let expected = 0.87 * 500.0 * as_mm2 * z / 1e6;
            let mu = beam().moment_capacity_singly_reinforced(b, d, as_mm2).unwrap();
            assert_relative_eq!(mu, expected, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_over_reinforced() {
        // x = 0.5d at As = 2094.8 mm² for b=300, d=450
        let err = beam().moment_capacity_singly_reinforced(300.0, 450.0, 2100.0).unwrap_err();
        assert_eq!(err.design_rule(), Some(DesignRule::OverReinforced));
        assert_eq!(err.error_code(), "OVER_REINFORCED");

        assert!(beam().moment_capacity_singly_reinforced(300.0, 450.0, 2090.0).is_ok());
    }

    #[test]
    fn test_required_reinforcement_regression() {
        let beam = beam();
        let k = beam.k_factor(150.0, 300.0, 450.0);
        assert_relative_eq!(k, 0.0823045267, max_relative = 1e-9);

        let as_req = beam.required_reinforcement(150.0, 300.0, 450.0).unwrap();
        assert_relative_eq!(as_req, 853.1475677, max_relative = 1e-9);
    }

    #[test]
    fn test_lever_arm_capped() {
        // Small K gives z above 0.95d
        let beam = beam();
        let z = beam.lever_arm(0.01, 500.0);
        assert_relative_eq!(z, 475.0);

        let as_req = beam.required_reinforcement(20.0, 300.0, 500.0).unwrap();
        assert_relative_eq!(as_req, 20.0e6 / (0.87 * 500.0 * 475.0), max_relative = 1e-12);
    }

    #[test]
    fn test_lever_arm_at_limit_is_finite() {
        // K/0.9 > 0.25 would take the square root of a negative number
        let z = beam().lever_arm(0.3, 450.0);
        assert!(z.is_finite());
        assert_relative_eq!(z, 225.0);
    }

    #[test]
    fn test_requires_compression_reinforcement() {
        // K' is reached at M = 284.31 kN·m for b=300, d=450
        let err = beam().required_reinforcement(300.0, 300.0, 450.0).unwrap_err();
        assert_eq!(err.design_rule(), Some(DesignRule::CompressionReinforcementRequired));
        assert!(err.is_design_rule_violation());

        assert!(beam().required_reinforcement(284.0, 300.0, 450.0).is_ok());
    }

    #[test]
    fn test_k_at_limit_passes() {
        // M = 4680 kN·m, b = d = 1000 mm gives K == 0.156 exactly
        let beam = beam();
        assert_eq!(beam.k_factor(4680.0, 1000.0, 1000.0), K_LIMIT);

        let as_req = beam.required_reinforcement(4680.0, 1000.0, 1000.0).unwrap();
        assert_relative_eq!(as_req, 13848.3644215, max_relative = 1e-9);
    }

    #[test]
    fn test_zero_moment_needs_no_steel() {
        assert_eq!(beam().required_reinforcement(0.0, 300.0, 450.0).unwrap(), 0.0);
    }

    #[test]
    fn test_shear_capacity() {
        let vc = beam().shear_capacity(300.0, 450.0, 942.0).unwrap();
        let expected = 0.79 * (100.0 * 942.0 / (300.0 * 450.0_f64)).powf(1.0 / 3.0)
            * (400.0 / 450.0_f64).powf(0.25)
            / 1.25
            * 300.0
            * 450.0
            / 1000.0;
        assert_relative_eq!(vc, expected, max_relative = 1e-12);
        assert_relative_eq!(vc, 73.48, epsilon = 0.01);
    }

    #[test]
    fn test_invalid_geometry() {
        let beam = beam();
        assert_eq!(
            beam.moment_capacity_singly_reinforced(0.0, 450.0, 942.0).unwrap_err().error_code(),
            "INVALID_INPUT"
        );
        assert!(beam.required_reinforcement(-10.0, 300.0, 450.0).is_err());
        assert!(beam.required_reinforcement(150.0, 300.0, f64::NAN).is_err());
        assert!(beam.shear_capacity(300.0, -450.0, 942.0).is_err());
    }

    #[test]
    fn test_strengths_from_grades() {
        let material = MaterialProperties::new("C40", "B500", 200_000.0, 28_000.0);
        let beam = BeamDesignBS8110::from_grades(&material).unwrap();
        assert_eq!(beam.fcu_mpa, 40.0);
        assert_eq!(beam.fy_mpa, 500.0);

        // new() ignores the labels
        assert_eq!(BeamDesignBS8110::new(&material).fcu_mpa, 30.0);
    }

    #[test]
    fn test_idempotent() {
        let beam = beam();
        let a = beam.moment_capacity_singly_reinforced(300.0, 450.0, 942.0).unwrap();
        let b = beam.moment_capacity_singly_reinforced(300.0, 450.0, 942.0).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());

        let a = beam.required_reinforcement(150.0, 300.0, 450.0).unwrap();
        let b = beam.required_reinforcement(150.0, 300.0, 450.0).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_partial_json_config() {
        let beam: BeamDesignBS8110 = serde_json::from_str(r#"{ "fcu_mpa": 35.0 }"#).unwrap();
        assert_eq!(beam.fcu_mpa, 35.0);
        assert_eq!(beam.fy_mpa, DEFAULT_FY_MPA);
        assert_eq!(beam.k_limit, K_LIMIT);
    }

    #[test]
    fn test_with_strengths_rejects_bad_values() {
        let err = beam().with_strengths(0.0, 500.0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(beam().with_strengths(30.0, -500.0).is_err());
        assert!(beam().with_strengths(f64::NAN, 500.0).is_err());

        let beam = beam().with_strengths(40.0, 460.0).unwrap();
        assert_eq!(beam.fcu_mpa, 40.0);
        assert_eq!(beam.fy_mpa, 460.0);
    }

    #[test]
    fn test_validate_constants() {
        assert!(beam().validate().is_ok());

        let zero_fcu = BeamDesignBS8110 { fcu_mpa: 0.0, ..beam() };
        let err = zero_fcu.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        // Reported as bad input rather than as a design-rule failure
        let err = zero_fcu.moment_capacity_singly_reinforced(300.0, 450.0, 942.0).unwrap_err();
        assert!(!err.is_design_rule_violation());

        assert!(BeamDesignBS8110 { gamma_m_shear: f64::NAN, ..beam() }.validate().is_err());
        assert!(BeamDesignBS8110 { steel_stress_factor: -0.87, ..beam() }.validate().is_err());
        assert!(BeamDesignBS8110 { lever_arm_cap: 1.2, ..beam() }.validate().is_err());
    }

    #[test]
    fn test_k_limit_range() {
        assert!(BeamDesignBS8110 { k_limit: 0.225, ..beam() }.validate().is_ok());
        assert!(BeamDesignBS8110 { k_limit: 0.3, ..beam() }.validate().is_err());
        assert!(BeamDesignBS8110 { k_limit: 0.0, ..beam() }.validate().is_err());

        let err = BeamDesignBS8110 { k_limit: 0.3, ..beam() }
            .required_reinforcement(150.0, 300.0, 450.0)
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }
}
