//! `gr-core` — foundational geometry for the `georoute` workspace.
//!
//! This crate is a dependency of every other `gr-*` crate.  It has no `gr-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`point`]     | `GeoPoint`, flat-plane distance and heading             |
//! | [`segment`]   | `GeoSegment` (named, oriented straight edge)            |
//! | [`check`]     | `STRICT` switch for representation-invariant checks     |
//! | [`error`]     | `GeoError`, `GeoResult`                                 |
//!
//! # Feature flags
//!
//! | Flag            | Effect                                                |
//! |-----------------|-------------------------------------------------------|
//! | `serde`         | Adds `Serialize`/`Deserialize` to all public types.   |
//! | `strict-checks` | Keeps invariant checks in release builds.             |

pub mod check;
pub mod error;
pub mod point;
pub mod segment;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{GeoError, GeoResult};
pub use point::{normalize_heading, GeoPoint};
pub use segment::GeoSegment;
