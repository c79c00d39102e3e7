// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules over the reward split and the per-round claim guard.
//
// USAGE:
// - Unit tests: cargo test -p rewarder-pool
// - Certora build: cargo build --features certora -p rewarder-pool
//
// ============================================================================

pub mod reward_specs;
