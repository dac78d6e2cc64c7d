//! Guided tour of the `IntSeq` API.
//!
//! Builds a small sequence, appends, inspects, mutates, rotates, searches and
//! removes, then triggers both kinds of bounds error and reports them.
//! The sequence is printed after every step.
//!
//! Run with: cargo run --example walkthrough
//! Set `RUST_LOG=trace` to also see buffer reallocations.

use int_seq::IntSeq;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("=== IntSeq walkthrough ===");

    let mut v = IntSeq::new(5);
    println!("Initial sequence (size 5): {v}");

    v.push_back(10);
    v.push_back(20);
    v.push_back(30);
    println!("After appending 10, 20, 30: {v}");
    info!(len = v.len(), capacity = v.capacity(), "after appends");

    if let (Ok(front), Ok(back)) = (v.front(), v.back()) {
        println!("First element (front): {front}");
        println!("Last element (back): {back}");
    }

    match v.set(0, 99) {
        Ok(()) => println!("After setting the first element to 99: {v}"),
        Err(e) => warn!("set failed: {e}"),
    }

    match v.insert(2, 50) {
        Ok(()) => println!("After inserting 50 at index 2: {v}"),
        Err(e) => warn!("insert failed: {e}"),
    }

    match v.find(20) {
        Some(index) => println!("Element 20 found at index: {index}"),
        None => println!("Element 20 not found"),
    }

    v.right_rotate_one();
    println!("After right rotation by 1: {v}");

    v.right_rotate(3);
    println!("After right rotation by 3: {v}");

    v.left_rotate_one();
    println!("After left rotation by 1: {v}");

    match v.remove(2) {
        Ok(removed) => println!("After removing element at index 2 (removed: {removed}): {v}"),
        Err(e) => warn!("remove failed: {e}"),
    }

    for value in [30, 50] {
        match v.find_transposition(value) {
            Some(index) => {
                println!("Element {value} found and moved closer to the front. New index: {index}")
            }
            None => println!("Element {value} not found"),
        }
        println!("After find with transposition: {v}");
    }

    // `-1` wraps to `usize::MAX`.
    print!("Accessing element at invalid index (-1): ");
    match v.get(usize::MAX) {
        Ok(x) => println!("{x}"),
        Err(e) => {
            println!("Caught error: {e}");
            warn!(error = %e, "get rejected");
        }
    }

    print!("Removing element at invalid index (100): ");
    match v.remove(100) {
        Ok(x) => println!("{x}"),
        Err(e) => {
            println!("Caught error: {e}");
            warn!(error = %e, "remove rejected");
        }
    }

    println!("Final state of the sequence: {v}");
    info!(len = v.len(), capacity = v.capacity(), "done");
}
