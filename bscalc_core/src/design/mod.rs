//! # Design Code Components
//!
//! One component per design code. Each component holds the constants of a
//! single code edition and exposes its capacity formulas as methods.
//!
//! - [`bs8110`] - Reinforced concrete beams (BS 8110-1)
//! - [`bs5950`] - Steel members (BS 5950-1)
//!
//! Loading to BS 6399 lives in [`crate::loads`].

pub mod bs5950;
pub mod bs8110;

pub use bs5950::SteelDesignBS5950;
pub use bs8110::BeamDesignBS8110;
