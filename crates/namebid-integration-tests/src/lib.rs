//! Integration test crate for namebid.
//!
//! This crate has no library code. It only contains scenario tests that
//! exercise auction records end to end: JSON record in, price / phase /
//! bid decision out.
//!
//! Run all integration tests:
//! ```sh
//! cargo test -p namebid-integration-tests
//! ```
