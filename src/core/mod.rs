/// Core domain logic: the slot store, its operations, and billing

pub mod billing;
pub mod lot;
pub mod slot;

pub use billing::{billable_hours, compute_fee, Receipt};
pub use lot::ParkingLot;
pub use slot::{SlotRecord, VehicleType, EMPTY_PLATE};
