//! Structural Steel Grades (BS 5950-1)
//!
//! Design strengths for hot rolled sections and the strut curve designations
//! used for compression members.
//!
//! ## Example
//!
//! ```rust
//! use bscalc_core::materials::steel::{SteelGrade, StrutCurve};
//!
//! let grade = SteelGrade::from_label("s355").unwrap();
//! assert_eq!(grade.py_mpa(), 355.0);
//!
//! let curve: StrutCurve = "c".parse().unwrap();
//! assert_eq!(curve, StrutCurve::C);
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{CalcError, CalcResult};

/// Steel grades per BS EN 10025 as referenced by BS 5950-1 Table 9
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SteelGrade {
    S275,
    S355,
    S460,
}

impl SteelGrade {
    /// All steel grades for selection lists
    pub const ALL: [SteelGrade; 3] = [SteelGrade::S275, SteelGrade::S355, SteelGrade::S460];

    /// Parse a grade label. Accepts the old BS 4360 names as well.
    pub fn from_label(label: &str) -> CalcResult<Self> {
        match label.trim().to_uppercase().replace([' ', '_'], "").as_str() {
            "S275" | "275" | "GRADE43" | "43" => Ok(SteelGrade::S275),
            "S355" | "355" | "GRADE50" | "50" => Ok(SteelGrade::S355),
            "S460" | "460" | "GRADE55" | "55" => Ok(SteelGrade::S460),
            _ => Err(CalcError::material_not_found(label)),
        }
    }

    /// Grade label (e.g., "S275")
    pub fn code(&self) -> &'static str {
        match self {
            SteelGrade::S275 => "S275",
            SteelGrade::S355 => "S355",
            SteelGrade::S460 => "S460",
        }
    }

    /// Design strength py (MPa) for thickness up to 16 mm
    pub fn py_mpa(&self) -> f64 {
        match self {
            SteelGrade::S275 => 275.0,
            SteelGrade::S355 => 355.0,
            SteelGrade::S460 => 460.0,
        }
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Strut curve designation per BS 5950-1 Table 23 (curves a to d)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StrutCurve {
    A,
    B,
    #[default]
    C,
    D,
}

impl StrutCurve {
    /// Lowercase letter as printed in Table 24
    pub fn letter(&self) -> char {
        match self {
            StrutCurve::A => 'a',
            StrutCurve::B => 'b',
            StrutCurve::C => 'c',
            StrutCurve::D => 'd',
        }
    }
}

impl FromStr for StrutCurve {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(StrutCurve::A),
            "b" => Ok(StrutCurve::B),
            "c" => Ok(StrutCurve::C),
            "d" => Ok(StrutCurve::D),
            _ => Err(CalcError::invalid_input(
                "strut_curve",
                s,
                "Strut curve must be one of a, b, c, d",
            )),
        }
    }
}

impl std::fmt::Display for StrutCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}
