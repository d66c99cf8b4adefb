// tests/support/mod.rs
// Shared support code for the integration test binaries. Individual test
// crates use different subsets of these helpers, which would otherwise
// produce dead_code / unused_imports warnings; allow them at module level.
#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(unused_imports)]
pub use builders::*;
#[allow(unused_imports)]
pub use mocks::*;
