//! # Floor Loading (BS 6399-1:1996)
//!
//! Characteristic imposed floor loads by occupancy, and the BS 8110 ultimate
//! limit state factors for dead + imposed loading.

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Deserializer, Serialize};

use super::occupancy::OccupancyType;
use crate::errors::{require_non_negative, require_positive, CalcResult};

/// Partial load factor on dead load
pub const GAMMA_G: f64 = 1.4;
/// Partial load factor on imposed load
pub const GAMMA_Q: f64 = 1.6;
/// Imposed load used for occupancies not in the table (kN/m²)
pub const DEFAULT_IMPOSED_LOAD_KN_M2: f64 = 2.0;

/// Factored loads at the ultimate limit state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UltimateLoads {
    /// γg × dead load
    pub dead: f64,
    /// γq × imposed load
    pub live: f64,
}

impl UltimateLoads {
    /// Total design load
    pub fn total(&self) -> f64 {
        self.dead + self.live
    }

    /// (dead, live) pair
    pub fn as_tuple(&self) -> (f64, f64) {
        (self.dead, self.live)
    }
}

/// BS 6399 floor loading.
///
/// # Example
/// ```
/// use bscalc_core::loads::LoadingBS6399;
///
/// let loading = LoadingBS6399::default();
/// assert_eq!(loading.floor_loading("office", None).unwrap(), 2.5);
/// assert_eq!(loading.floor_loading("office", Some(4.0)).unwrap(), 4.0);
///
/// let ult = loading.ultimate_load(2.0, 2.5);
/// assert_eq!(ult.as_tuple(), (2.8, 4.0));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadingBS6399 {
    /// Characteristic imposed loads by occupancy (kN/m²).
    ///
    /// Entries given in JSON replace the tabulated values one by one; the
    /// rest of the table is kept.
    #[serde(deserialize_with = "merge_with_table")]
    pub imposed_loads: BTreeMap<OccupancyType, f64>,

    /// Imposed load for occupancies missing from the table (kN/m²)
    pub default_imposed_load: f64,

    /// Partial factor on dead load γg
    pub gamma_g: f64,

    /// Partial factor on imposed load γq
    pub gamma_q: f64,
}

impl Default for LoadingBS6399 {
    fn default() -> Self {
        LoadingBS6399 {
            imposed_loads: tabulated_loads(),
            default_imposed_load: DEFAULT_IMPOSED_LOAD_KN_M2,
            gamma_g: GAMMA_G,
            gamma_q: GAMMA_Q,
        }
    }
}

fn tabulated_loads() -> BTreeMap<OccupancyType, f64> {
    OccupancyType::ALL
        .iter()
        .map(|occupancy| (*occupancy, occupancy.characteristic_load_kn_m2()))
        .collect()
}

fn merge_with_table<'de, D>(deserializer: D) -> Result<BTreeMap<OccupancyType, f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = BTreeMap::<OccupancyType, f64>::deserialize(deserializer)?;
    let mut table = tabulated_loads();
    table.extend(overrides);
    Ok(table)
}

impl LoadingBS6399 {
    /// Check that the load factors are positive and every load is
    /// non-negative, all finite.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("gamma_g", self.gamma_g)?;
        require_positive("gamma_q", self.gamma_q)?;
        require_non_negative("default_imposed_load", self.default_imposed_load)?;
        for (occupancy, load) in &self.imposed_loads {
            require_non_negative(&format!("imposed_loads.{}", occupancy.name()), *load)?;
        }
        Ok(())
    }

    /// Characteristic imposed floor load (kN/m²).
    ///
    /// An explicit `imposed_load` wins over the table, including `Some(0.0)`.
    /// Otherwise `occupancy_type` is looked up case-insensitively, falling back
    /// to the default load for unknown occupancies.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if the override is negative or non-finite.
    pub fn floor_loading(
        &self,
        occupancy_type: &str,
        imposed_load: Option<f64>,
    ) -> CalcResult<f64> {
        if let Some(load) = imposed_load {
            return require_non_negative("imposed_load", load);
        }

        self.validate()?;
        match OccupancyType::from_name(occupancy_type) {
            Some(occupancy) => Ok(self.imposed_load_for(occupancy)),
            None => {
                debug!(
                    "Occupancy '{}' not tabulated, using {} kN/m²",
                    occupancy_type, self.default_imposed_load
                );
                Ok(self.default_imposed_load)
            }
        }
    }

    /// Tabulated imposed load for a known occupancy (kN/m²)
    pub fn imposed_load_for(&self, occupancy: OccupancyType) -> f64 {
        self.imposed_loads
            .get(&occupancy)
            .copied()
            .unwrap_or(self.default_imposed_load)
    }

    /// Apply the ultimate limit state factors: 1.4 × dead, 1.6 × imposed.
    pub fn ultimate_load(&self, dead_load: f64, live_load: f64) -> UltimateLoads {
        UltimateLoads {
            dead: dead_load * self.gamma_g,
            live: live_load * self.gamma_q,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_floor_loading_table() {
        let loading = LoadingBS6399::default();
        assert_eq!(loading.floor_loading("office", None).unwrap(), 2.5);
        assert_eq!(loading.floor_loading("corridor", None).unwrap(), 3.0);
        assert_eq!(loading.floor_loading("storage", None).unwrap(), 5.0);
        assert_eq!(loading.floor_loading("parking", None).unwrap(), 2.5);
    }

    #[test]
    fn test_floor_loading_case_insensitive() {
        let loading = LoadingBS6399::default();
        assert_eq!(loading.floor_loading("Residential", None).unwrap(), 1.5);
        assert_eq!(loading.floor_loading("OFFICE", None).unwrap(), 2.5);
    }

    #[test]
    fn test_floor_loading_unknown() {
        let loading = LoadingBS6399::default();
        assert_eq!(loading.floor_loading("unknown_type", None).unwrap(), 2.0);
        assert_eq!(loading.floor_loading("", None).unwrap(), 2.0);
    }

    #[test]
    fn test_explicit_override() {
        let loading = LoadingBS6399::default();
        assert_eq!(loading.floor_loading("storage", Some(7.5)).unwrap(), 7.5);
        // Zero is a real override, not "absent"
        assert_eq!(loading.floor_loading("storage", Some(0.0)).unwrap(), 0.0);
        assert!(loading.floor_loading("storage", Some(-1.0)).is_err());
        assert!(loading.floor_loading("storage", Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_ultimate_load() {
        let loading = LoadingBS6399::default();
        let ult = loading.ultimate_load(2.0, 2.5);
        assert_eq!(ult.dead, 2.8);
        assert_eq!(ult.live, 4.0);
        assert_eq!(ult.as_tuple(), (2.8, 4.0));
        assert!((ult.total() - 6.8).abs() < 1e-12);
    }

    #[test]
    fn test_edition_override() {
        let json = r#"{ "imposed_loads": { "office": 3.0 }, "gamma_q": 1.5 }"#;
        let loading: LoadingBS6399 = serde_json::from_str(json).unwrap();
        assert_eq!(loading.floor_loading("office", None).unwrap(), 3.0);
        // Entries not named in the override keep their tabulated values
        assert_eq!(loading.floor_loading("storage", None).unwrap(), 5.0);
        assert_eq!(loading.floor_loading("residential", None).unwrap(), 1.5);
        assert_eq!(loading.imposed_loads.len(), OccupancyType::ALL.len());
        assert_eq!(loading.ultimate_load(0.0, 2.0).live, 3.0);
    }

    #[test]
    fn test_empty_table_keeps_defaults() {
        let loading: LoadingBS6399 = serde_json::from_str(r#"{ "imposed_loads": {} }"#).unwrap();
        assert_eq!(loading, LoadingBS6399::default());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(LoadingBS6399::default().validate().is_ok());

        let loading = LoadingBS6399 { gamma_g: 0.0, ..LoadingBS6399::default() };
        assert_eq!(loading.validate().unwrap_err().error_code(), "INVALID_INPUT");

        let mut loading = LoadingBS6399::default();
        loading.imposed_loads.insert(OccupancyType::Office, -2.5);
        assert!(loading.validate().is_err());
        assert!(loading.floor_loading("office", None).is_err());

        let loading = LoadingBS6399 { default_imposed_load: f64::NAN, ..LoadingBS6399::default() };
        assert!(loading.validate().is_err());
    }
}
