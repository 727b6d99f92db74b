/// lotkeeper library
///
/// Core functionality for the parking-slot occupancy tracker.

pub mod config;
pub mod core;
pub mod error;
pub mod storage;

// Re-exports for convenience
pub use config::LotConfig;
pub use core::{ParkingLot, Receipt, SlotRecord, VehicleType};
pub use error::{LotError, Result};
