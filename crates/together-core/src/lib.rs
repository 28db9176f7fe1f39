//! Platform-free core of the Together Apart visualizer.
//!
//! Everything here is deterministic given a seeded RNG and talks to the outside
//! world only through the traits in [`render`], [`analysis`] and [`session`].

pub mod analysis;
pub mod color;
pub mod connection;
pub mod constants;
pub mod error;
pub mod heart;
pub mod math;
pub mod particle;
pub mod render;
pub mod session;
pub mod sketch;

pub use analysis::*;
pub use color::Rgba;
pub use connection::*;
pub use error::VisualizerError;
pub use heart::*;
pub use particle::*;
pub use render::*;
pub use session::*;
pub use sketch::*;
