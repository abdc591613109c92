//! Example 02: Filtering
//!
//! This example demonstrates switching the active filter and reading the
//! visible task list, which always keeps insertion order.
//!
//! Run with: cargo run --example 02_filtering

use chrono::{Duration, TimeZone, Utc};
use eyre::{Result, eyre};
use tasklist::{Filter, ManualClock, Motivator, TaskStatus, TaskStore};

fn main() -> Result<()> {
    println!("Tasklist Filtering Example");
    println!("==========================\n");

    // A manual clock gives every task a predictable timestamp
    let start = Utc
        .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .single()
        .ok_or_else(|| eyre!("Invalid start time"))?;
    let clock = ManualClock::new(start).with_step(Duration::minutes(15));
    let mut store = TaskStore::new()
        .with_clock(clock)
        .with_motivator(Motivator::seeded(1));

    println!("Creating sample tasks...\n");
    store.add_incomplete("Write documentation")?;
    store.add("Fix critical bug", TaskStatus::Complete)?;
    store.add_incomplete("Code review")?;
    let deploy = store.add_incomplete("Deploy release")?;
    store.toggle_status(deploy)?;

    for filter in Filter::ALL {
        store.set_filter(filter);
        println!("Filter: {}", filter);
        for task in store.visible_tasks() {
            println!("   [{}] {} (created {})", task.status, task.title, task.created_at.format("%H:%M"));
        }
        println!();
    }

    println!("Trying an unknown filter value...");
    match store.set_filter_str("done") {
        Ok(filter) => println!("   Unexpectedly accepted: {}", filter),
        Err(err) => println!("   Rejected: {}", err),
    }
    println!("   Active filter is still {}\n", store.active_filter());

    let (incomplete, complete) = store.counts();
    println!("Summary: {} incomplete, {} complete", incomplete, complete);

    println!("\nExample complete!");
    Ok(())
}
