//! # Design Settings
//!
//! The code constants for one design-code edition, bundled so a whole edition
//! can be stored as JSON and loaded back. Every field is optional in JSON;
//! omitted values take the published BS 8110 / BS 5950 / BS 6399 defaults.
//!
//! ## Example
//!
//! ```rust
//! use bscalc_core::settings::DesignSettings;
//!
//! let settings = DesignSettings::from_json(r#"{
//!     "beam": { "fcu_mpa": 40.0 },
//!     "steel": { "steel_grade": "S355", "py_mpa": 355.0 }
//! }"#).unwrap();
//!
//! assert_eq!(settings.beam.fcu_mpa, 40.0);
//! assert_eq!(settings.beam.fy_mpa, 500.0);
//! assert_eq!(settings.loading.gamma_g, 1.4);
//! ```

use serde::{Deserialize, Serialize};

use crate::design::{BeamDesignBS8110, SteelDesignBS5950};
use crate::errors::CalcResult;
use crate::loads::LoadingBS6399;

/// Component configuration for one code edition
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignSettings {
    /// BS 8110 concrete beam constants
    pub beam: BeamDesignBS8110,

    /// BS 5950 steel constants
    pub steel: SteelDesignBS5950,

    /// BS 6399 loading table and load factors
    pub loading: LoadingBS6399,
}

impl DesignSettings {
    /// Parse settings from JSON; missing fields take their defaults.
    ///
    /// The parsed constants are validated; a zero strength or an
    /// out-of-range K' is `InvalidInput`.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        let settings: DesignSettings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate every component's constants.
    pub fn validate(&self) -> CalcResult<()> {
        self.beam.validate()?;
        self.steel.validate()?;
        self.loading.validate()?;
        Ok(())
    }

    /// Serialize settings to pretty-printed JSON.
    pub fn to_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
