// The in-memory record store plus every operation the menu exposes
//
// Fixed-length store: capacity slots created up front, mutated in place,
// never grown or shrunk. All scans are linear, which is fine at 10-20 slots.

use crate::core::billing::{compute_fee, Receipt};
use crate::core::slot::{SlotRecord, VehicleType};
use crate::error::{LotError, Result};

pub struct ParkingLot {
    slots: Vec<SlotRecord>,
}

impl ParkingLot {
    /// Create a lot with `capacity` vacant slots, IDs 1..=capacity
    pub fn new(capacity: usize) -> Self {
        let slots = (1..=capacity as u32).map(SlotRecord::vacant).collect();
        Self { slots }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slots in current storage order (sort-by-plate changes this order)
    pub fn slots(&self) -> &[SlotRecord] {
        &self.slots
    }

    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|s| s.occupied).count()
    }

    /// Overlay a loaded record onto the slot with the matching ID.
    ///
    /// Records whose ID doesn't exist in this lot are ignored; the file layer
    /// already reported them.
    pub fn apply(&mut self, record: SlotRecord) {
        if let Some(slot) = self.slots.iter_mut().find(|s| s.slot_id == record.slot_id) {
            *slot = record;
        }
    }

    /// Park a vehicle in the first vacant slot (storage order).
    ///
    /// Returns the slot ID on success, `LotFull` when every slot is taken.
    pub fn park(&mut self, plate: &str, vehicle_type: VehicleType, now: i64) -> Result<u32> {
        validate_plate(plate)?;

        let capacity = self.slots.len();
        let slot = self
            .slots
            .iter_mut()
            .find(|s| !s.occupied)
            .ok_or(LotError::LotFull(capacity))?;

        slot.plate = plate.to_string();
        slot.vehicle_type = Some(vehicle_type);
        slot.entry_time = now;
        slot.occupied = true;
        Ok(slot.slot_id)
    }

    /// Read-only lookup by exact plate match among occupied slots.
    ///
    /// Duplicate plates aren't prevented anywhere, so the first match in
    /// storage order wins.
    pub fn find(&self, plate: &str) -> Option<&SlotRecord> {
        self.slots.iter().find(|s| s.occupied && s.plate == plate)
    }

    /// Bill the vehicle and vacate its slot.
    pub fn checkout(&mut self, plate: &str, now: i64) -> Result<Receipt> {
        let slot = self
            .slots
            .iter_mut()
            .find(|s| s.occupied && s.plate == plate)
            .ok_or_else(|| LotError::PlateNotFound(plate.to_string()))?;

        // Occupied slots always have a type; fall back to LTV if a hand-edited
        // data file managed to drop it.
        let vehicle_type = slot.vehicle_type.unwrap_or(VehicleType::Ltv);
        let (hours, rate, total) = compute_fee(slot.entry_time, now, vehicle_type);

        let receipt = Receipt {
            slot_id: slot.slot_id,
            plate: slot.plate.clone(),
            vehicle_type,
            hours,
            rate,
            total,
        };
        slot.clear();
        Ok(receipt)
    }

    /// Overwrite the plate and type of an occupied slot.
    ///
    /// Overwrites unconditionally, even when the new values equal the old
    /// ones, and doesn't check the new plate against other occupied slots.
    pub fn update(&mut self, plate: &str, new_plate: &str, new_type: VehicleType) -> Result<u32> {
        validate_plate(new_plate)?;

        let slot = self
            .slots
            .iter_mut()
            .find(|s| s.occupied && s.plate == plate)
            .ok_or_else(|| LotError::PlateNotFound(plate.to_string()))?;

        slot.plate = new_plate.to_string();
        slot.vehicle_type = Some(new_type);
        Ok(slot.slot_id)
    }

    /// Sort the whole store by plate, ascending, "EMPTY" sentinels included.
    ///
    /// Only the display order changes; each record carries its own slot ID,
    /// so nobody's bay number moves.
    pub fn sort_by_plate(&mut self) {
        self.slots.sort_by(|a, b| a.plate.cmp(&b.plate));
    }
}

/// A plate has to survive the whitespace-delimited data file, so it must be
/// one non-empty token.
fn validate_plate(plate: &str) -> Result<()> {
    if plate.is_empty() {
        return Err(LotError::InvalidPlate("empty plate".to_string()));
    }
    if plate.chars().any(char::is_whitespace) {
        return Err(LotError::InvalidPlate(format!(
            "'{}' contains whitespace",
            plate
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::slot::EMPTY_PLATE;

    #[test]
    fn test_fresh_lot_all_vacant() {
        let lot = ParkingLot::new(10);
        assert_eq!(lot.capacity(), 10);
        assert_eq!(lot.occupied_count(), 0);
        for (i, slot) in lot.slots().iter().enumerate() {
            assert_eq!(slot.slot_id, i as u32 + 1);
            assert_eq!(slot.plate, EMPTY_PLATE);
            assert!(slot.vehicle_type.is_none());
            assert_eq!(slot.entry_time, 0);
            assert!(!slot.occupied);
        }
    }

    #[test]
    fn test_park_takes_lowest_vacant_slot() {
        let mut lot = ParkingLot::new(3);
        let id = lot.park("ABC123", VehicleType::Ltv, 100).unwrap();
        assert_eq!(id, 1);

        let id = lot.park("XYZ789", VehicleType::Bike, 200).unwrap();
        assert_eq!(id, 2);

        // Free slot 1, next park should reuse it
        lot.checkout("ABC123", 300).unwrap();
        let id = lot.park("NEW-01", VehicleType::Htv, 400).unwrap();
        assert_eq!(id, 1);
    }

    #[test]
    fn test_park_full_lot() {
        let mut lot = ParkingLot::new(2);
        lot.park("AAA111", VehicleType::Ltv, 0).unwrap();
        lot.park("BBB222", VehicleType::Ltv, 0).unwrap();

        let result = lot.park("CCC333", VehicleType::Ltv, 0);
        assert!(matches!(result, Err(LotError::LotFull(2))));
        assert_eq!(lot.occupied_count(), 2);
    }

    #[test]
    fn test_checkout_bills_and_vacates() {
        let mut lot = ParkingLot::new(2);
        let t0 = 1_700_000_000;
        lot.park("ABC123", VehicleType::Ltv, t0).unwrap();

        let receipt = lot.checkout("ABC123", t0 + 7200).unwrap();
        assert_eq!(receipt.slot_id, 1);
        assert_eq!(receipt.hours, 2);
        assert_eq!(receipt.rate, 50);
        assert_eq!(receipt.total, 100);

        let slot = &lot.slots()[0];
        assert!(!slot.occupied);
        assert_eq!(slot.plate, EMPTY_PLATE);
        assert_eq!(lot.occupied_count(), 0);
    }

    #[test]
    fn test_checkout_unknown_plate() {
        let mut lot = ParkingLot::new(2);
        let result = lot.checkout("GHOST", 100);
        assert!(matches!(result, Err(LotError::PlateNotFound(_))));
    }

    #[test]
    fn test_find_first_match_wins_on_duplicates() {
        let mut lot = ParkingLot::new(3);
        lot.park("DUP-1", VehicleType::Bike, 10).unwrap();
        lot.park("DUP-1", VehicleType::Htv, 20).unwrap();

        let found = lot.find("DUP-1").unwrap();
        assert_eq!(found.slot_id, 1);
        assert_eq!(found.vehicle_type, Some(VehicleType::Bike));
    }

    #[test]
    fn test_update_overwrites_plate_and_type() {
        let mut lot = ParkingLot::new(2);
        lot.park("OLD-99", VehicleType::Bike, 50).unwrap();

        let id = lot.update("OLD-99", "NEW-99", VehicleType::Htv).unwrap();
        assert_eq!(id, 1);

        let slot = lot.find("NEW-99").unwrap();
        assert_eq!(slot.vehicle_type, Some(VehicleType::Htv));
        // entry time untouched by update
        assert_eq!(slot.entry_time, 50);
        assert!(lot.find("OLD-99").is_none());
    }

    #[test]
    fn test_update_unknown_plate_changes_nothing() {
        let mut lot = ParkingLot::new(2);
        lot.park("KEEP-1", VehicleType::Ltv, 30).unwrap();
        let before: Vec<_> = lot.slots().to_vec();

        let result = lot.update("NOPE", "ANY", VehicleType::Bike);
        assert!(matches!(result, Err(LotError::PlateNotFound(_))));
        assert_eq!(lot.slots(), &before[..]);
    }

    #[test]
    fn test_sort_by_plate_keeps_slot_ids() {
        let mut lot = ParkingLot::new(3);
        lot.park("ZZZ", VehicleType::Ltv, 0).unwrap(); // slot 1
        lot.park("AAA", VehicleType::Ltv, 0).unwrap(); // slot 2

        lot.sort_by_plate();

        let plates: Vec<&str> = lot.slots().iter().map(|s| s.plate.as_str()).collect();
        assert_eq!(plates, vec!["AAA", "EMPTY", "ZZZ"]);

        // identity travels with the record
        assert_eq!(lot.find("ZZZ").unwrap().slot_id, 1);
        assert_eq!(lot.find("AAA").unwrap().slot_id, 2);
    }

    #[test]
    fn test_park_rejects_bad_plates() {
        let mut lot = ParkingLot::new(2);
        assert!(matches!(
            lot.park("", VehicleType::Ltv, 0),
            Err(LotError::InvalidPlate(_))
        ));
        assert!(matches!(
            lot.park("TWO WORDS", VehicleType::Ltv, 0),
            Err(LotError::InvalidPlate(_))
        ));
        assert_eq!(lot.occupied_count(), 0);
    }

    #[test]
    fn test_apply_overlays_by_slot_id() {
        let mut lot = ParkingLot::new(2);
        lot.apply(SlotRecord {
            slot_id: 2,
            plate: "LOADED".to_string(),
            vehicle_type: Some(VehicleType::Htv),
            entry_time: 999,
            occupied: true,
        });

        assert_eq!(lot.find("LOADED").unwrap().slot_id, 2);
        assert!(!lot.slots()[0].occupied);

        // unknown slot IDs are ignored
        lot.apply(SlotRecord::vacant(99));
        assert_eq!(lot.capacity(), 2);
    }
}
