//! Shared helper utilities for factory methods.

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Gets the next unique counter value as a record id.
///
/// Posts and categories use client-supplied `i32` primary keys, so factories
/// draw from the same counter to keep them unique within a test binary.
pub fn next_record_id() -> i32 {
    (next_id() % i32::MAX as u64) as i32
}
