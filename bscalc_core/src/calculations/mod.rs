//! # Member Checks
//!
//! Each check follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Capacities and unity ratios (JSON-serializable)
//! - `calculate(input, designer) -> CalcResult<*Result>` - Pure check function
//!
//! ## Available Checks
//!
//! - [`rc_beam`] - Singly reinforced concrete beam (BS 8110)
//! - [`steel_member`] - Steel member cross-section check (BS 5950)

pub mod rc_beam;
pub mod steel_member;

use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::settings::DesignSettings;

pub use rc_beam::{RcBeamInput, RcBeamResult};
pub use steel_member::{SteelMemberInput, SteelMemberResult};

/// Enum wrapper for all check inputs.
///
/// Lets a batch of mixed checks live in one JSON array.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Reinforced concrete beam check
    RcBeam(RcBeamInput),
    /// Steel member check
    SteelMember(SteelMemberInput),
}

/// Result of running a [`CalculationItem`]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutcome {
    /// Result of a reinforced concrete beam check
    RcBeam(RcBeamResult),
    /// Result of a steel member check
    SteelMember(SteelMemberResult),
}

impl CalculationOutcome {
    /// Check if all unity checks pass
    pub fn passes(&self) -> bool {
        match self {
            CalculationOutcome::RcBeam(r) => r.passes(),
            CalculationOutcome::SteelMember(r) => r.passes(),
        }
    }
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::RcBeam(b) => &b.label,
            CalculationItem::SteelMember(m) => &m.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::RcBeam(_) => "RcBeam",
            CalculationItem::SteelMember(_) => "SteelMember",
        }
    }

    /// Run the check with the designers from `settings`
    pub fn run(&self, settings: &DesignSettings) -> CalcResult<CalculationOutcome> {
        match self {
            CalculationItem::RcBeam(input) => {
                rc_beam::calculate(input, &settings.beam).map(CalculationOutcome::RcBeam)
            }
            CalculationItem::SteelMember(input) => {
                steel_member::calculate(input, &settings.steel).map(CalculationOutcome::SteelMember)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_from_json() {
        let json = r#"[
            {
                "type": "RcBeam",
                "label": "B-1",
                "width_mm": 300.0,
                "effective_depth_mm": 450.0,
                "steel_area_mm2": 942.0,
                "design_moment_knm": 150.0,
                "design_shear_kn": 60.0
            },
            {
                "type": "SteelMember",
                "label": "C-1",
                "section_modulus_cm3": 1000.0,
                "area_mm2": 10000.0,
                "strut_curve": "B",
                "design_moment_knm": 110.0,
                "design_axial_kn": 1100.0
            }
        ]"#;

        let items: Vec<CalculationItem> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label(), "B-1");
        assert_eq!(items[1].calc_type(), "SteelMember");

        let settings = DesignSettings::default();
        for item in &items {
            let outcome = item.run(&settings).unwrap();
            assert!(outcome.passes(), "{} should pass", item.label());
        }
    }

    #[test]
    fn test_run_reports_design_rule() {
        let item = CalculationItem::RcBeam(RcBeamInput {
            label: "B-2".to_string(),
            width_mm: 200.0,
            effective_depth_mm: 300.0,
            steel_area_mm2: 500.0,
            design_moment_knm: 200.0,
            design_shear_kn: 10.0,
        });
        let err = item.run(&DesignSettings::default()).unwrap_err();
        assert!(err.is_design_rule_violation());
    }
}
