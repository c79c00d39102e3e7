// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules over the lender pool's repayment and backing predicates.
//
// USAGE:
// - Unit tests: cargo test -p lender-pool
// - Certora build: cargo build --features certora -p lender-pool
//
// ============================================================================

pub mod loan_specs;
