//! A clock that only moves when told to.
//!
//! Crates under test swap `chrono::Utc` for the `Utc` provided here so
//! that every timestamp recorded within a test is deterministic.  The
//! timestamp is tracked per thread, which is sufficient for the
//! single threaded executors used by the tests.

use std::cell::Cell;

pub const DEFAULT_TIMESTAMP: i64 = 1234567890;

thread_local! {
    static TIMESTAMP: Cell<i64> = const { Cell::new(DEFAULT_TIMESTAMP) };
}

pub fn set_timestamp(ts: i64) {
    TIMESTAMP.with(|cell| cell.set(ts));
}

pub fn timestamp() -> i64 {
    TIMESTAMP.with(|cell| cell.get())
}

pub struct Utc;

impl Utc {
    pub fn now() -> chrono::DateTime<chrono::Utc> {
        chrono::DateTime::from_timestamp(timestamp(), 0)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frozen() {
        assert_eq!(Utc::now().timestamp(), DEFAULT_TIMESTAMP);
        set_timestamp(1700000000);
        assert_eq!(Utc::now().timestamp(), 1700000000);
        assert_eq!(Utc::now().timestamp(), 1700000000);
        set_timestamp(DEFAULT_TIMESTAMP);
    }
}
