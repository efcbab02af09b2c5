//! Concrete and Reinforcement Grades (BS 8110)
//!
//! Characteristic strengths keyed by the grade labels carried on
//! [`MaterialProperties`](super::MaterialProperties).

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Concrete grades per BS 8110 Table 3.3 (cube strength designation)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConcreteGrade {
    C20,
    C25,
    C30,
    C35,
    C40,
    C45,
    C50,
}

impl ConcreteGrade {
    /// All concrete grades in ascending strength order
    pub const ALL: [ConcreteGrade; 7] = [
        ConcreteGrade::C20,
        ConcreteGrade::C25,
        ConcreteGrade::C30,
        ConcreteGrade::C35,
        ConcreteGrade::C40,
        ConcreteGrade::C45,
        ConcreteGrade::C50,
    ];

    /// Parse a grade label such as "C30", "c30" or "30"
    pub fn from_label(label: &str) -> CalcResult<Self> {
        let normalized = label.trim().to_uppercase();
        let digits = normalized.strip_prefix('C').unwrap_or(&normalized);
        Self::ALL
            .iter()
            .copied()
            .find(|grade| grade.code()[1..] == *digits)
            .ok_or_else(|| CalcError::material_not_found(label))
    }

    /// Grade label (e.g., "C30")
    pub fn code(&self) -> &'static str {
        match self {
            ConcreteGrade::C20 => "C20",
            ConcreteGrade::C25 => "C25",
            ConcreteGrade::C30 => "C30",
            ConcreteGrade::C35 => "C35",
            ConcreteGrade::C40 => "C40",
            ConcreteGrade::C45 => "C45",
            ConcreteGrade::C50 => "C50",
        }
    }

    /// Characteristic cube strength fcu (MPa)
    pub fn fcu_mpa(&self) -> f64 {
        match self {
            ConcreteGrade::C20 => 20.0,
            ConcreteGrade::C25 => 25.0,
            ConcreteGrade::C30 => 30.0,
            ConcreteGrade::C35 => 35.0,
            ConcreteGrade::C40 => 40.0,
            ConcreteGrade::C45 => 45.0,
            ConcreteGrade::C50 => 50.0,
        }
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Reinforcing steel grades per BS 8110 Table 3.1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReinforcementGrade {
    /// Hot rolled mild steel, fy = 250 MPa
    Mild250,
    /// High yield steel, fy = 500 MPa
    HighYield500,
}

impl ReinforcementGrade {
    /// Parse from common string representations
    pub fn from_label(label: &str) -> CalcResult<Self> {
        match label.trim().to_uppercase().replace([' ', '_', '-'], "").as_str() {
            "250" | "MILD" | "MILD250" | "R250" => Ok(ReinforcementGrade::Mild250),
            "500" | "B500" | "B500A" | "B500B" | "B500C" | "T500" | "HIGHYIELD" => {
                Ok(ReinforcementGrade::HighYield500)
            }
            _ => Err(CalcError::material_not_found(label)),
        }
    }

    /// Characteristic yield strength fy (MPa)
    pub fn fy_mpa(&self) -> f64 {
        match self {
            ReinforcementGrade::Mild250 => 250.0,
            ReinforcementGrade::HighYield500 => 500.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_grade_labels() {
        assert_eq!(ConcreteGrade::from_label("C30").unwrap(), ConcreteGrade::C30);
        assert_eq!(ConcreteGrade::from_label("c40").unwrap(), ConcreteGrade::C40);
        assert_eq!(ConcreteGrade::from_label(" 25 ").unwrap(), ConcreteGrade::C25);
        assert_eq!(ConcreteGrade::C35.fcu_mpa(), 35.0);
    }

    #[test]
    fn test_unknown_concrete_grade() {
        let err = ConcreteGrade::from_label("C99").unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_NOT_FOUND");
        assert!(ConcreteGrade::from_label("").is_err());
    }

    #[test]
    fn test_reinforcement_grade_labels() {
        assert_eq!(ReinforcementGrade::from_label("B500B").unwrap().fy_mpa(), 500.0);
        assert_eq!(ReinforcementGrade::from_label("mild").unwrap().fy_mpa(), 250.0);
        assert!(ReinforcementGrade::from_label("S275").is_err());
    }
}
