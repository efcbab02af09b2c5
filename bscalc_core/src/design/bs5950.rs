//! # Steel Member Design (BS 5950-1:2000)
//!
//! Cross-section capacities of steel members. Lateral-torsional buckling
//! and flexural buckling are not considered, so these are upper bounds that
//! apply to fully restrained beams and stocky struts.
//!
//! ## Example
//!
//! ```rust
//! use bscalc_core::design::SteelDesignBS5950;
//! use bscalc_core::materials::StrutCurve;
//!
//! let steel = SteelDesignBS5950::new("S275");
//! let mc = steel.bending_capacity(1000.0).unwrap();
//! assert!((mc - 275.0).abs() < 1e-9);
//!
//! let pc = steel.compression_capacity(10_000.0, StrutCurve::B).unwrap();
//! assert!((pc - 2750.0).abs() < 1e-9);
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};
use crate::materials::{SteelGrade, StrutCurve};
use crate::units::{
    CubicCentimetres, CubicMillimetres, KilonewtonMetres, Kilonewtons, NewtonMillimetres, Newtons,
};

/// Default design strength py (MPa), S275 up to 16 mm thick
pub const DEFAULT_PY_MPA: f64 = 275.0;
/// Partial factor on the cross-section resistance
pub const GAMMA_M0: f64 = 1.0;

/// BS 5950 steel member designer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SteelDesignBS5950 {
    /// Steel grade label the designer was created with
    pub steel_grade: String,

    /// Design strength py (MPa)
    pub py_mpa: f64,

    /// Partial factor γm0
    pub gamma_m0: f64,
}

impl Default for SteelDesignBS5950 {
    fn default() -> Self {
        SteelDesignBS5950::new(SteelGrade::S275.code())
    }
}

impl SteelDesignBS5950 {
    /// Create a designer with py = 275 MPa.
    ///
    /// The grade label is recorded but does not change py; use
    /// [`SteelDesignBS5950::for_grade`] to look the strength up.
    pub fn new(steel_grade: impl Into<String>) -> Self {
        SteelDesignBS5950 {
            steel_grade: steel_grade.into(),
            py_mpa: DEFAULT_PY_MPA,
            gamma_m0: GAMMA_M0,
        }
    }

    /// Create a designer with py taken from the steel grade table.
    pub fn for_grade(steel_grade: &str) -> CalcResult<Self> {
        let grade = SteelGrade::from_label(steel_grade)?;
        Ok(SteelDesignBS5950 {
            py_mpa: grade.py_mpa(),
            ..Self::new(steel_grade)
        })
    }

    /// Check that py and γm0 are positive and finite.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("py_mpa", self.py_mpa)?;
        require_positive("gamma_m0", self.gamma_m0)?;
        Ok(())
    }

    /// Moment capacity Mc = py·Z (kN·m) from the elastic modulus in cm³.
    ///
    /// # Arguments
    ///
    /// * `section_modulus_cm3` - Section modulus Z (cm³), as listed in section tables
    pub fn bending_capacity(&self, section_modulus_cm3: f64) -> CalcResult<f64> {
        self.validate()?;
        require_positive("section_modulus_cm3", section_modulus_cm3)?;

        let z_mm3 = CubicMillimetres::from(CubicCentimetres(section_modulus_cm3)).value();
        let mc_nmm = NewtonMillimetres(self.py_mpa * z_mm3 / self.gamma_m0);
        let mc = KilonewtonMetres::from(mc_nmm).value();

        debug!(
            "BS 5950 bending capacity: Z = {} cm³, py = {} MPa, Mc = {:.2} kN·m",
            section_modulus_cm3, self.py_mpa, mc
        );
        Ok(mc)
    }

    /// Squash capacity Pc = py·A (kN).
    ///
    /// `curve` is accepted for interface compatibility with the Table 24
    /// strut curves but has no effect: slenderness is not considered.
    pub fn compression_capacity(&self, area_mm2: f64, curve: StrutCurve) -> CalcResult<f64> {
        self.validate()?;
        require_positive("area_mm2", area_mm2)?;

        let pc = Kilonewtons::from(Newtons(self.py_mpa * area_mm2 / self.gamma_m0)).value();

        debug!(
            "BS 5950 compression capacity: A = {} mm², curve {}, Pc = {:.2} kN",
            area_mm2, curve, pc
        );
        Ok(pc)
    }
}
