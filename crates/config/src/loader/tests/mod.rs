//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests touching process environment are `#[serial]` and use `temp_env`
//!   so values never leak between tests.
