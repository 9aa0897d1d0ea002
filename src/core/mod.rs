//! Core types: geometry, identifiers, configuration, RNG, input, resources
//! and errors.
//!
//! Nothing in here knows about card rules. Stacks and the table build on it.

pub mod config;
pub mod error;
pub mod geometry;
pub mod input;
pub mod resources;
pub mod rng;

pub use config::{StackId, TableConfig, FOUNDATION_COUNT, LANE_COUNT};
pub use error::TableError;
pub use geometry::{Rect, Vec2};
pub use input::{ClickTimers, FrameInput, PointerButton, Press};
pub use resources::{ResourceCatalog, Rgba, SizeTable};
pub use rng::GameRng;
