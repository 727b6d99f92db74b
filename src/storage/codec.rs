// Line-level codec for the data file
//
// One occupied slot per line, whitespace-separated:
//   slot_id plate type_code entry_time occupied
// Older files from the variant without time tracking have four fields (no
// entry_time); those load with entry_time = 0.
//
// The original tool stopped reading at the first token it couldn't parse,
// silently dropping the rest of the file. Here every line gets its own
// parse result so the caller can keep the good lines and say exactly which
// ones were skipped and why.

use thiserror::Error;

use crate::core::slot::{SlotRecord, VehicleType};

/// Why a data-file line was skipped
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineIssue {
    #[error("expected 4 or 5 fields, got {0}")]
    WrongFieldCount(usize),

    #[error("unreadable {field}: '{value}'")]
    BadField { field: &'static str, value: String },

    #[error("slot {id} is outside 1..={capacity}")]
    SlotOutOfRange { id: u32, capacity: usize },
}

/// Parse one non-blank line into a slot record.
///
/// Type codes outside 1..=3 clamp to LTV, same as console input. A zero
/// occupied flag loads as a vacant slot so the unoccupied-implies-defaults
/// invariant holds no matter what the file says.
pub fn parse_line(line: &str, capacity: usize) -> Result<SlotRecord, LineIssue> {
    let fields: Vec<&str> = line.split_whitespace().collect();

    let (id_str, plate, type_str, entry_str, occ_str) = match fields.as_slice() {
        [id, plate, ty, entry, occ] => (*id, *plate, *ty, Some(*entry), *occ),
        [id, plate, ty, occ] => (*id, *plate, *ty, None, *occ),
        other => return Err(LineIssue::WrongFieldCount(other.len())),
    };

    let slot_id: u32 = id_str.parse().map_err(|_| LineIssue::BadField {
        field: "slot id",
        value: id_str.to_string(),
    })?;
    if slot_id == 0 || slot_id as usize > capacity {
        return Err(LineIssue::SlotOutOfRange {
            id: slot_id,
            capacity,
        });
    }

    let type_code: i64 = type_str.parse().map_err(|_| LineIssue::BadField {
        field: "vehicle type",
        value: type_str.to_string(),
    })?;

    let entry_time: i64 = match entry_str {
        Some(s) => s.parse().map_err(|_| LineIssue::BadField {
            field: "entry time",
            value: s.to_string(),
        })?,
        None => 0,
    };

    let occ_flag: i64 = occ_str.parse().map_err(|_| LineIssue::BadField {
        field: "occupied flag",
        value: occ_str.to_string(),
    })?;

    if occ_flag == 0 {
        return Ok(SlotRecord::vacant(slot_id));
    }

    let (vehicle_type, _) = VehicleType::from_code(type_code);
    Ok(SlotRecord {
        slot_id,
        plate: plate.to_string(),
        vehicle_type: Some(vehicle_type),
        entry_time,
        occupied: true,
    })
}

/// Format an occupied slot as one data-file line (no trailing newline)
pub fn format_line(record: &SlotRecord) -> String {
    let type_code = record.vehicle_type.map(|vt| vt.code()).unwrap_or(0);
    format!(
        "{} {} {} {} 1",
        record.slot_id, record.plate, type_code, record.entry_time
    )
}
