//! Floor loading and load factoring per BS 6399-1
//!
//! # Overview
//!
//! - [`OccupancyType`] - Occupancy categories with tabulated imposed loads
//! - [`LoadingBS6399`] - Imposed load lookup and ultimate factoring
//! - [`UltimateLoads`] - Factored dead and imposed loads
//!
//! # Example
//!
//! ```
//! use bscalc_core::loads::LoadingBS6399;
//!
//! let loading = LoadingBS6399::default();
//!
//! // Residential floor with 3.5 kN/m² finishes and self-weight
//! let imposed = loading.floor_loading("residential", None).unwrap();
//! let ult = loading.ultimate_load(3.5, imposed);
//!
//! println!("Design load: {:.2} kN/m²", ult.total());
//! ```

pub mod bs6399;
pub mod occupancy;

pub use bs6399::{LoadingBS6399, UltimateLoads};
pub use occupancy::OccupancyType;
