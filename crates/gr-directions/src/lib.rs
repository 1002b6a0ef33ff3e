//! `gr-directions` — human-readable turn-by-turn directions.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`turn`]     | `Turn`, `angle_delta`, `classify`, `compute_turn_instruction` |
//! | [`renderer`] | `DirectionsRenderer` trait (per-feature line + full pass)  |
//! | [`driving`]  | `DrivingDirections` ("… and go 1.2 kilometers.")           |
//! | [`walking`]  | `WalkingDirections` ("… and walk for 24 minutes.")         |
//! | [`surface`]  | Free functions used by interactive front ends              |
//!
//! # Feature flags
//!
//! | Flag            | Effect                                               |
//! |-----------------|------------------------------------------------------|
//! | `serde`         | Derives `Serialize`/`Deserialize` on `Turn`.         |
//! | `strict-checks` | Keeps invariant checks in release builds.            |

pub mod driving;
pub mod renderer;
pub mod surface;
pub mod turn;
pub mod walking;


pub use driving::DrivingDirections;
pub use renderer::DirectionsRenderer;
pub use surface::{
    is_attachable, render_directions, render_directions_with, route_append_segment,
    route_end_point, start_or_append,
};
pub use turn::{angle_delta, classify, compute_turn_instruction, Turn};
pub use walking::WalkingDirections;
