//! Example 01: Basic Usage
//!
//! This example demonstrates adding, editing, toggling, and deleting tasks
//! with a TaskStore, and how each outcome maps to a notice.
//!
//! Run with: cargo run --example 01_basic_usage

use eyre::Result;
use tasklist::{Motivator, Notice, StoreError, TaskStatus, TaskStore};

fn main() -> Result<()> {
    println!("Tasklist Basic Usage Example");
    println!("============================\n");

    // Seeded so the motivational messages are the same on every run
    let mut store = TaskStore::new().with_motivator(Motivator::seeded(2024));

    // ADD
    println!("1. ADD - Creating two tasks...");
    let milk = store.add_incomplete("Buy milk")?;
    let dog = store.add("Walk dog", TaskStatus::Incomplete)?;
    println!("   {}", Notice::added());
    for task in store.tasks() {
        println!("   - {} [{}] {}", task.id, task.status, task.title);
    }
    println!();

    // Empty titles are rejected
    println!("2. ADD - Trying an empty title...");
    match store.add_incomplete("   ") {
        Err(err) => println!("   {} ({})", Notice::from(&err), err),
        Ok(_) => println!("   Unexpectedly accepted!"),
    }
    println!("   Task count is still {}\n", store.len());

    // UPDATE
    println!("3. UPDATE - Renaming a task...");
    let task = store.update(dog, "Walk the dog", TaskStatus::Incomplete)?;
    println!("   {} -> {}", Notice::updated(), task.title);

    println!("   Submitting the same values again...");
    match store.update(dog, "Walk the dog", TaskStatus::Incomplete) {
        Err(err @ StoreError::NoChange(_)) => println!("   {}", Notice::from(err)),
        other => println!("   Unexpected outcome: {:?}", other),
    }
    println!();

    // TOGGLE
    println!("4. TOGGLE - Completing 'Buy milk'...");
    let toggled = store.toggle_status(milk)?;
    println!("   Status is now {}", toggled.status);
    println!("   {}\n", toggled.message);

    // DELETE
    println!("5. DELETE - Removing 'Walk the dog'...");
    let removed = store.delete(dog)?;
    println!("   {} ({})", Notice::deleted(), removed.title);
    println!("   Remaining tasks: {}\n", store.len());

    println!("Example complete!");
    Ok(())
}
