//! # Materials
//!
//! Material definitions and grade lookups for concrete and steel design.
//!
//! ## Material Types
//!
//! - **MaterialProperties**: grade labels plus elastic moduli, passed to the
//!   concrete beam designer
//! - **Concrete / reinforcement grades**: BS 8110 characteristic strengths
//! - **Structural steel grades**: BS 5950 design strengths and strut curves
//!
//! ## Example
//!
//! ```rust
//! use bscalc_core::materials::MaterialProperties;
//!
//! let material = MaterialProperties::new("C30", "B500", 200_000.0, 30_000.0);
//! assert_eq!(material.concrete_grade, "C30");
//!
//! // Labels resolve to strengths only on request
//! let strengths = material.characteristic_strengths().unwrap();
//! assert_eq!(strengths.fcu_mpa, 30.0);
//! assert_eq!(strengths.fy_mpa, 500.0);
//! ```

pub mod concrete;
pub mod steel;

pub use concrete::{ConcreteGrade, ReinforcementGrade};
pub use steel::{SteelGrade, StrutCurve};

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;

/// Grade labels and elastic moduli for a concrete member.
///
/// ## JSON Example
///
/// ```json
/// {
///   "concrete_grade": "C30",
///   "steel_grade": "B500",
///   "modulus_elasticity_steel": 200000.0,
///   "modulus_elasticity_concrete": 30000.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Concrete grade label (e.g., "C30")
    pub concrete_grade: String,

    /// Reinforcement grade label (e.g., "B500")
    pub steel_grade: String,

    /// Modulus of elasticity of reinforcement Es (MPa)
    pub modulus_elasticity_steel: f64,

    /// Modulus of elasticity of concrete Ec (MPa)
    pub modulus_elasticity_concrete: f64,
}

impl MaterialProperties {
    /// Create a new set of material properties
    pub fn new(
        concrete_grade: impl Into<String>,
        steel_grade: impl Into<String>,
        modulus_elasticity_steel: f64,
        modulus_elasticity_concrete: f64,
    ) -> Self {
        MaterialProperties {
            concrete_grade: concrete_grade.into(),
            steel_grade: steel_grade.into(),
            modulus_elasticity_steel,
            modulus_elasticity_concrete,
        }
    }

    /// Modular ratio Es/Ec
    pub fn modular_ratio(&self) -> f64 {
        self.modulus_elasticity_steel / self.modulus_elasticity_concrete
    }

    /// Resolve the grade labels to characteristic strengths.
    ///
    /// Returns `MaterialNotFound` if either label is not in the grade tables.
    pub fn characteristic_strengths(&self) -> CalcResult<CharacteristicStrengths> {
        let concrete = ConcreteGrade::from_label(&self.concrete_grade)?;
        let reinforcement = ReinforcementGrade::from_label(&self.steel_grade)?;
        Ok(CharacteristicStrengths {
            fcu_mpa: concrete.fcu_mpa(),
            fy_mpa: reinforcement.fy_mpa(),
        })
    }
}

impl Default for MaterialProperties {
    fn default() -> Self {
        MaterialProperties::new("C30", "B500", 200_000.0, 30_000.0)
    }
}

/// Characteristic strengths resolved from grade labels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacteristicStrengths {
    /// Concrete cube strength fcu (MPa)
    pub fcu_mpa: f64,
    /// Reinforcement yield strength fy (MPa)
    pub fy_mpa: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let material = MaterialProperties::default();
        assert_eq!(material.concrete_grade, "C30");
        assert_eq!(material.steel_grade, "B500");
        assert_eq!(material.modular_ratio(), 200_000.0 / 30_000.0);
    }

    #[test]
    fn test_characteristic_strengths_from_labels() {
        let material = MaterialProperties::new("C40", "250", 200_000.0, 28_000.0);
        let strengths = material.characteristic_strengths().unwrap();
        assert_eq!(strengths.fcu_mpa, 40.0);
        assert_eq!(strengths.fy_mpa, 250.0);
    }

    #[test]
    fn test_unknown_label() {
        let material = MaterialProperties::new("Grade 30", "B500", 200_000.0, 30_000.0);
        assert!(material.characteristic_strengths().is_err());
    }

    #[test]
    fn test_serialization() {
        let material = MaterialProperties::default();
        let json = serde_json::to_string_pretty(&material).unwrap();
        assert!(json.contains("modulus_elasticity_concrete"));
        let roundtrip: MaterialProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(material, roundtrip);
    }
}
