//! Shared helpers for integration suites that need a real PostgreSQL.
//!
//! Integration tests compile as separate crates under `backend/tests/`, so
//! the embedded cluster bootstrap and seeding helpers live here rather than
//! in the library.

pub mod embedded_postgres;

/// Returns true when `REQUIRE_TEST_CLUSTER` is set to a truthy value.
///
/// Truthy values: "1", "true", "yes" (case-insensitive).
pub fn test_cluster_required() -> bool {
    std::env::var("REQUIRE_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Handles embedded cluster setup failures consistently.
///
/// Prints a skip marker and returns `None` unless `REQUIRE_TEST_CLUSTER` is
/// truthy, in which case the failure panics so CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if test_cluster_required() {
        panic!("Test cluster setup failed: {reason}. Unset REQUIRE_TEST_CLUSTER to skip.");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}
