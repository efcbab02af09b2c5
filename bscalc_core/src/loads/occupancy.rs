//! Occupancy categories for imposed floor loads (BS 6399-1 Table 1)

use serde::{Deserialize, Serialize};

/// Floor occupancy categories with a tabulated imposed load.
///
/// # Example
/// ```
/// use bscalc_core::loads::OccupancyType;
///
/// assert_eq!(OccupancyType::from_name("Office"), Some(OccupancyType::Office));
/// assert_eq!(OccupancyType::Storage.characteristic_load_kn_m2(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyType {
    /// Self-contained dwelling units
    Residential,
    /// Offices for general use
    Office,
    /// Corridors, hallways, aisles
    Corridor,
    /// General storage
    Storage,
    /// Car parking for light vehicles
    Parking,
}

impl OccupancyType {
    /// All occupancy types in table order
    pub const ALL: [OccupancyType; 5] = [
        OccupancyType::Residential,
        OccupancyType::Office,
        OccupancyType::Corridor,
        OccupancyType::Storage,
        OccupancyType::Parking,
    ];

    /// Lookup key (lowercase)
    pub fn name(&self) -> &'static str {
        match self {
            OccupancyType::Residential => "residential",
            OccupancyType::Office => "office",
            OccupancyType::Corridor => "corridor",
            OccupancyType::Storage => "storage",
            OccupancyType::Parking => "parking",
        }
    }

    /// Case-insensitive parse; `None` for categories not in the table
    pub fn from_name(s: &str) -> Option<Self> {
        let key = s.trim().to_lowercase();
        Self::ALL.iter().copied().find(|occupancy| occupancy.name() == key)
    }

    /// Characteristic uniformly distributed imposed load (kN/m²)
    pub fn characteristic_load_kn_m2(&self) -> f64 {
        match self {
            OccupancyType::Residential => 1.5,
            OccupancyType::Office => 2.5,
            OccupancyType::Corridor => 3.0,
            OccupancyType::Storage => 5.0,
            OccupancyType::Parking => 2.5,
        }
    }
}

impl std::fmt::Display for OccupancyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
