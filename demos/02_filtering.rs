//! Example 02: Filtering the Roster
//!
//! This example demonstrates the three filter axes (name search, gender,
//! employment status), how they combine, and the roster tally.
//!
//! Run with: cargo run --example 02_filtering

use eyre::Result;
use staffstore::filter::{self, Filters, StatusFilter};
use staffstore::{Employee, EmployeeDraft, Gender, Store};

fn seed(store: &mut Store<staffstore::MemoryBackend>) -> Result<()> {
    let people = [
        ("Ananya Iyer", Gender::Female, "1992-03-14", "Tamil Nadu", true),
        ("Anil Kumar", Gender::Male, "1988-11-02", "Bihar", true),
        ("Ben Thomas", Gender::Male, "1995-06-30", "Kerala", false),
        ("Chandra Devi", Gender::Female, "1979-01-21", "Rajasthan", true),
        ("Kiran Patel", Gender::Other, "1999-09-09", "Gujarat", false),
    ];

    for (name, gender, dob, state, active) in people {
        let mut draft =
            EmployeeDraft::new(name.to_string(), gender, dob.parse()?, state.to_string());
        draft.active = active;
        store.add(draft)?;
    }
    Ok(())
}

fn show(label: &str, view: &[Employee]) {
    println!("{label}");
    for employee in view {
        let status = if employee.active { "active" } else { "inactive" };
        println!(
            "   - {} ({}, {}, {})",
            employee.full_name, employee.gender, employee.state, status
        );
    }
    println!();
}

fn main() -> Result<()> {
    println!("Staffstore Filtering Example");
    println!("============================\n");

    // The in-memory backend keeps everything in a HashMap; handy for demos
    // and tests
    let mut store = Store::in_memory();
    seed(&mut store)?;

    let roster = store.all();
    show("Seeded roster:", &roster);

    // 1. Name search: case-insensitive substring on the full name
    println!("1. Search for \"an\"...");
    let filters = Filters {
        search: "an".to_string(),
        ..Filters::default()
    };
    show("   Matches:", &filter::apply(&roster, &filters));

    // 2. Gender: exact match
    println!("2. Only female employees...");
    let filters = Filters {
        gender: Some(Gender::Female),
        ..Filters::default()
    };
    show("   Matches:", &filter::apply(&roster, &filters));

    // 3. Status: active or inactive
    println!("3. Only inactive employees...");
    let filters = Filters {
        status: Some(StatusFilter::Inactive),
        ..Filters::default()
    };
    show("   Matches:", &filter::apply(&roster, &filters));

    // 4. Axes combine with AND
    println!("4. Active men whose name contains \"an\"...");
    let filters = Filters {
        search: "an".to_string(),
        gender: Some(Gender::Male),
        status: Some(StatusFilter::Active),
    };
    show("   Matches:", &filter::apply(&roster, &filters));

    // 5. An empty filter set returns everyone in stored order
    println!("5. Empty filters...");
    let filters = Filters::default();
    let view = filter::apply(&roster, &filters);
    println!("   {} of {} employees pass\n", view.len(), roster.len());

    // 6. Roster tally
    println!("6. Tally...");
    let totals = filter::tally(&roster);
    println!(
        "   total = {}, active = {}, inactive = {}\n",
        totals.total, totals.active, totals.inactive
    );

    println!("Example complete!");
    Ok(())
}
