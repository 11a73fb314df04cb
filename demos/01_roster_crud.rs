//! Example 01: Roster CRUD Operations
//!
//! This example walks through a full session: logging in, seeding the
//! roster, and the create, read, update, and delete operations.
//!
//! Run with: cargo run --example 01_roster_crud

use eyre::Result;
use staffstore::{Credentials, EmployeeDraft, Gender, Store};
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    // Create a temporary directory for this example
    let temp_dir = tempfile::tempdir()?;
    let store_path = temp_dir.path().to_path_buf();

    println!("Staffstore Roster CRUD Example");
    println!("==============================\n");
    println!("Store path: {}\n", store_path.display());

    let mut store = Store::open(&store_path)?;

    // LOGIN: The roster sits behind a demo credential gate
    println!("1. LOGIN - Starting a session...");
    println!("   Logged in before: {}", store.is_authenticated());
    let credentials = Credentials {
        username: "admin".to_string(),
        password: "admin123".to_string(),
    };
    if credentials.verify() {
        store.login()?;
    }
    println!("   Logged in after:  {}\n", store.is_authenticated());

    // SEED: First visit writes an empty roster
    println!("2. SEED - Preparing the roster...");
    println!("   Loading roster...");
    thread::sleep(Duration::from_millis(500));
    store.ensure_seeded()?;
    println!("   Roster ready with {} employees\n", store.all().len());

    // CREATE: Add two employees
    println!("3. CREATE - Adding employees...");
    let asha = store.add(EmployeeDraft::new(
        "Asha Rao".to_string(),
        Gender::Female,
        "1990-01-01".parse()?,
        "Karnataka".to_string(),
    ))?;
    println!("   Added {} with id {}", asha.full_name, asha.id);

    let mut draft = EmployeeDraft::new(
        "Vikram Singh".to_string(),
        Gender::Male,
        "1985-07-23".parse()?,
        "Punjab".to_string(),
    );
    draft.active = false;
    let vikram = store.add(draft)?;
    println!("   Added {} with id {}\n", vikram.full_name, vikram.id);

    // READ: Look one employee up by id
    println!("4. READ - Retrieving an employee...");
    match store.find(&asha.id) {
        Some(employee) => {
            println!("   Found employee:");
            println!("   - Name:   {}", employee.full_name);
            println!("   - Gender: {}", employee.gender);
            println!("   - DOB:    {}", employee.date_of_birth);
            println!("   - State:  {}", employee.state);
            println!("   - Avatar: {}", employee.profile_image);
        }
        None => println!("   Employee not found!"),
    }
    println!();

    // UPDATE: Replace a record, keeping its id
    println!("5. UPDATE - Modifying an employee...");
    let mut updated = EmployeeDraft::new(
        "Asha Rao-Mehta".to_string(),
        Gender::Female,
        "1990-01-01".parse()?,
        "Maharashtra".to_string(),
    );
    updated.profile_image = Some(asha.profile_image.clone());
    store.update(&asha.id, updated)?;
    if let Some(employee) = store.find(&asha.id) {
        println!("   New name:  {}", employee.full_name);
        println!("   New state: {}\n", employee.state);
    }

    // TOGGLE: Flip the active flag only
    println!("6. TOGGLE - Flipping employment status...");
    let now_active = store.toggle_active(&vikram.id)?;
    println!("   {} active = {:?}\n", vikram.full_name, now_active);

    // DELETE: Remove an employee
    println!("7. DELETE - Removing an employee...");
    let removed = store.remove(&vikram.id)?;
    println!("   Removed: {}", removed);
    println!("   Roster now has {} employees\n", store.all().len());

    // LOGOUT: End the session; the roster itself stays on disk
    println!("8. LOGOUT - Ending the session...");
    store.logout()?;
    println!("   Logged in: {}", store.is_authenticated());
    println!("   Roster still has {} employees\n", store.all().len());

    println!("Example complete!");
    Ok(())
}
