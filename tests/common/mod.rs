// Common test utilities and fixtures

pub mod fixtures;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{fixture_path, FakeConverter, SourceDir, FAIL_MARKER};
#[allow(unused_imports)]
pub use helpers::{assert_output_invariants, create_test_services, run_pipeline};
