// lotkeeper - tracks who's parked in a fixed lot of slots
//
// This is the main entry point. Loads the snapshot file, then runs the
// menu loop until the user exits.

use anyhow::{Context, Result};
use chrono::{Local, TimeZone, Utc};
use lotkeeper_lib::{
    core::{ParkingLot, VehicleType},
    storage, LotConfig, LotError,
};
use std::io::{self, BufRead, Write};

type Input = io::Lines<io::StdinLock<'static>>;

fn main() -> Result<()> {
    let config = LotConfig::default();
    let mut lot = ParkingLot::new(config.capacity);

    // Missing file is fine (fresh lot); anything else is a real startup error
    let report = storage::load(&config.data_file, config.capacity)
        .with_context(|| format!("could not read {}", config.data_file.display()))?;
    for skipped in &report.skipped {
        eprintln!(
            "Warning: skipped {} line {}: {}",
            config.data_file.display(),
            skipped.line_no,
            skipped.issue
        );
    }
    for record in report.records {
        lot.apply(record);
    }

    let mut input = io::stdin().lock().lines();

    loop {
        print_status(&lot);
        print_menu();

        let choice = match prompt(&mut input, "Choose: ")? {
            Some(token) => token.parse::<i64>().unwrap_or(-1),
            // stdin closed, same as picking exit
            None => EXIT_CHOICE,
        };

        let result = match choice {
            1 => handle_park(&mut input, &mut lot, &config),
            2 => handle_checkout(&mut input, &mut lot, &config),
            3 => handle_search(&mut input, &lot),
            4 => handle_update(&mut input, &mut lot, &config),
            5 => handle_sort(&mut lot),
            EXIT_CHOICE => {
                storage::save(&config.data_file, lot.slots())?;
                println!("Saved to file. Bye!");
                break;
            }
            _ => {
                println!("Invalid choice. Try again.");
                Ok(())
            }
        };

        // Errors come back to the menu as a message, never as a crash
        if let Err(e) = result {
            println!("{}", e.user_message());
        }
    }

    Ok(())
}

const EXIT_CHOICE: i64 = 6;

fn handle_park(
    input: &mut Input,
    lot: &mut ParkingLot,
    config: &LotConfig,
) -> lotkeeper_lib::Result<()> {
    if lot.occupied_count() == lot.capacity() {
        return Err(LotError::LotFull(lot.capacity()));
    }

    let Some(plate) = prompt(input, "Enter Plate: ")? else {
        return Ok(());
    };
    let vehicle_type = prompt_type(input)?;

    let slot_id = lot.park(&plate, vehicle_type, Utc::now().timestamp())?;
    storage::save(&config.data_file, lot.slots())?;
    println!("Parked at Slot {}. Ticket created.", slot_id);
    Ok(())
}

fn handle_checkout(
    input: &mut Input,
    lot: &mut ParkingLot,
    config: &LotConfig,
) -> lotkeeper_lib::Result<()> {
    let Some(plate) = prompt(input, "Enter Plate to remove: ")? else {
        return Ok(());
    };

    let receipt = lot.checkout(&plate, Utc::now().timestamp())?;
    storage::save(&config.data_file, lot.slots())?;

    println!("\nVehicle {} leaving Slot {}", receipt.plate, receipt.slot_id);
    println!(
        "Billed {} hour(s) x {} ({}) = {}",
        receipt.hours, receipt.rate, receipt.vehicle_type, receipt.total
    );
    println!("Removed and saved.");
    Ok(())
}

fn handle_search(input: &mut Input, lot: &ParkingLot) -> lotkeeper_lib::Result<()> {
    let Some(plate) = prompt(input, "Enter Plate to search: ")? else {
        return Ok(());
    };

    let slot = lot
        .find(&plate)
        .ok_or_else(|| LotError::PlateNotFound(plate.clone()))?;

    println!("Found at Slot {}", slot.slot_id);
    println!("Type : {}", slot.type_label());
    println!("Since: {}", format_entry_time(slot.entry_time));
    Ok(())
}

fn handle_update(
    input: &mut Input,
    lot: &mut ParkingLot,
    config: &LotConfig,
) -> lotkeeper_lib::Result<()> {
    let Some(plate) = prompt(input, "Enter Plate to update: ")? else {
        return Ok(());
    };

    // Fail before prompting for replacements if the plate isn't here
    let current = lot
        .find(&plate)
        .ok_or_else(|| LotError::PlateNotFound(plate.clone()))?;
    println!("Slot {} selected.", current.slot_id);

    let Some(new_plate) = prompt(input, "Enter new Plate (or same): ")? else {
        return Ok(());
    };
    let new_type = prompt_type(input)?;

    lot.update(&plate, &new_plate, new_type)?;
    storage::save(&config.data_file, lot.slots())?;
    println!("Updated and saved.");
    Ok(())
}

fn handle_sort(lot: &mut ParkingLot) -> lotkeeper_lib::Result<()> {
    lot.sort_by_plate();
    println!("Slots reordered by plate (bay numbers stay with their vehicles).");
    Ok(())
}

/// Print the occupancy grid, two slots per row
fn print_status(lot: &ParkingLot) {
    println!("\n--- Parking Status ({}/{} occupied) ---", lot.occupied_count(), lot.capacity());
    for (i, slot) in lot.slots().iter().enumerate() {
        if slot.occupied {
            print!("[{}:{}:{}] ", slot.slot_id, slot.type_label(), slot.plate);
        } else {
            print!("[ Slot {} ] ", slot.slot_id);
        }
        if (i + 1) % 2 == 0 {
            println!();
        }
    }
    println!();
}

fn print_menu() {
    println!("{}", "=".repeat(60));
    println!("1) Park vehicle (Add)");
    println!("2) Exit vehicle (Remove & bill)");
    println!("3) Search vehicle");
    println!("4) Update vehicle info");
    println!("5) Sort slots by plate");
    println!("6) Save & Exit");
}

/// Print a prompt and read the first whitespace-free token of the reply.
///
/// Returns None once stdin is closed. Blank replies re-prompt.
fn prompt(input: &mut Input, message: &str) -> lotkeeper_lib::Result<Option<String>> {
    loop {
        print!("{}", message);
        io::stdout().flush()?;

        let Some(line) = input.next() else {
            return Ok(None);
        };
        if let Some(token) = line?.split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
    }
}

/// Ask for a vehicle type code; anything unreadable or out of range becomes
/// LTV, with a warning
fn prompt_type(input: &mut Input) -> lotkeeper_lib::Result<VehicleType> {
    let code = match prompt(input, "Type (1=Bike, 2=LTV, 3=HTV): ")? {
        Some(token) => token.parse::<i64>().unwrap_or(0),
        None => 0,
    };
    let (vehicle_type, clamped) = VehicleType::from_code(code);
    if clamped {
        println!("Invalid type. Set to LTV.");
    }
    Ok(vehicle_type)
}

/// Entry timestamp for display; 0 means a legacy record with no timestamp
fn format_entry_time(entry_time: i64) -> String {
    if entry_time == 0 {
        return "unknown".to_string();
    }
    match Local.timestamp_opt(entry_time, 0) {
        chrono::LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        _ => entry_time.to_string(),
    }
}
