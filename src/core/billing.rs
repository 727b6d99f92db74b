// Parking fee calculation
//
// Pure math, no clock access. Callers pass both timestamps so tests don't
// have to fake time.

use serde::{Deserialize, Serialize};

use crate::core::slot::VehicleType;

/// Seconds per billable hour
const HOUR: i64 = 3600;

/// Itemized bill handed back when a vehicle checks out
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub slot_id: u32,
    pub plate: String,
    pub vehicle_type: VehicleType,
    pub hours: u64,
    pub rate: u64,
    pub total: u64,
}

/// Billable hours between entry and exit.
///
/// Partial hours round up, and every stay bills at least one hour, so a
/// ten-second stop still costs an hour. Negative elapsed time (clock moved
/// backwards) also bills one hour rather than zero or a panic.
pub fn billable_hours(entry_time: i64, exit_time: i64) -> u64 {
    let elapsed = exit_time - entry_time;
    if elapsed <= 0 {
        return 1;
    }
    // Ceiling division, then floor at 1 for the zero-elapsed case above
    (elapsed as u64).div_ceil(HOUR as u64).max(1)
}

/// Compute the full bill for a stay
pub fn compute_fee(entry_time: i64, exit_time: i64, vehicle_type: VehicleType) -> (u64, u64, u64) {
    let hours = billable_hours(entry_time, exit_time);
    let rate = vehicle_type.hourly_rate();
    (hours, rate, hours * rate)
}
