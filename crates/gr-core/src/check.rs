//! Representation-invariant checking.
//!
//! Every value type in the workspace has a private `check_rep()` that asserts
//! its invariants after construction and extension.  Those assertions indicate
//! bugs inside the crates, never caller misuse (preconditions are reported
//! through `Result`), so they are only worth their cost while developing:
//!
//! | Build                               | `STRICT` |
//! |-------------------------------------|----------|
//! | debug / test                        | `true`   |
//! | release                             | `false`  |
//! | release + `strict-checks` feature   | `true`   |
//!
//! `check_rep()` bodies start with `if !STRICT { return; }`, so a permissive
//! build optimises them away entirely.

/// `true` when representation invariants are asserted.
pub const STRICT: bool = cfg!(any(debug_assertions, feature = "strict-checks"));
