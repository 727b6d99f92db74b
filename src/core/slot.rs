/// Data model for parking slots
///
/// One SlotRecord per physical bay. The slot ID lives on the record itself,
/// so reordering the store (sort-by-plate) can never reassign which bay a
/// vehicle is actually in.

use serde::{Deserialize, Serialize};

/// Sentinel plate for an unoccupied slot
pub const EMPTY_PLATE: &str = "EMPTY";

/// Vehicle class, which decides the hourly rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    Bike,
    /// Light transport vehicle (cars, vans)
    Ltv,
    /// Heavy transport vehicle (trucks, buses)
    Htv,
}

impl VehicleType {
    /// Map a user-entered type code to a vehicle type.
    ///
    /// Anything outside 1..=3 clamps to LTV; the bool tells the caller the
    /// value was clamped so the console can warn about it.
    pub fn from_code(code: i64) -> (VehicleType, bool) {
        match code {
            1 => (VehicleType::Bike, false),
            2 => (VehicleType::Ltv, false),
            3 => (VehicleType::Htv, false),
            _ => (VehicleType::Ltv, true),
        }
    }

    /// The numeric code used in the data file (0 is "unset")
    pub fn code(&self) -> u8 {
        match self {
            VehicleType::Bike => 1,
            VehicleType::Ltv => 2,
            VehicleType::Htv => 3,
        }
    }

    /// Hourly parking rate in currency units
    pub fn hourly_rate(&self) -> u64 {
        match self {
            VehicleType::Bike => 20,
            VehicleType::Ltv => 50,
            VehicleType::Htv => 100,
        }
    }
}

impl std::fmt::Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VehicleType::Bike => "BIKE",
            VehicleType::Ltv => "LTV",
            VehicleType::Htv => "HTV",
        };
        write!(f, "{}", s)
    }
}

/// One parking bay and whatever is (or isn't) parked in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    /// Bay number, 1-based, immutable for the life of the store
    pub slot_id: u32,
    pub plate: String,
    /// None while the slot is unoccupied
    pub vehicle_type: Option<VehicleType>,
    /// Entry timestamp in epoch seconds; 0 while unoccupied
    pub entry_time: i64,
    pub occupied: bool,
}

impl SlotRecord {
    /// A fresh, unoccupied slot
    pub fn vacant(slot_id: u32) -> Self {
        Self {
            slot_id,
            plate: EMPTY_PLATE.to_string(),
            vehicle_type: None,
            entry_time: 0,
            occupied: false,
        }
    }

    /// Reset occupancy fields back to their defaults, keeping the slot ID
    pub fn clear(&mut self) {
        self.plate = EMPTY_PLATE.to_string();
        self.vehicle_type = None;
        self.entry_time = 0;
        self.occupied = false;
    }

    /// Type name for display, or "-" when unset
    pub fn type_label(&self) -> String {
        match self.vehicle_type {
            Some(vt) => vt.to_string(),
            None => "-".to_string(),
        }
    }
}
