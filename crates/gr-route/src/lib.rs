//! `gr-route` — features and routes as immutable, append-only values.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`feature`] | `GeoFeature` (maximal run of same-named chained segments)   |
//! | [`route`]   | `Route` (chain of features; merges same-named neighbours)   |
//! | [`catalog`] | `SegmentCatalog`, `load_catalog_csv`, `load_catalog_reader` |
//! | [`error`]   | `RouteError`, `RouteResult<T>`                              |
//!
//! # Value semantics
//!
//! Nothing here is ever mutated after construction.  `append` borrows the
//! receiver and returns a new value; the old one stays valid and iterates to
//! the same sequence as before.
//!
//! # Feature flags
//!
//! | Flag            | Effect                                               |
//! |-----------------|------------------------------------------------------|
//! | `serde`         | Derives `Serialize`/`Deserialize` on public types.   |
//! | `strict-checks` | Keeps invariant checks in release builds.            |

pub mod catalog;
pub mod error;
pub mod feature;
pub mod route;

#[cfg(test)]
mod tests;

pub use catalog::{load_catalog_csv, load_catalog_reader, SegmentCatalog};
pub use error::{RouteError, RouteResult};
pub use feature::GeoFeature;
pub use route::Route;
