//! Cards: identity, per-card state and the registry that owns them.
//!
//! ## Key Types
//!
//! - `Suit`, `Rank`, `Color`: Card identity
//! - `Card`: Face, grab, draw-order and drag state plus the owning `StackId`
//! - `CardId`: Index into the registry
//! - `CardRegistry`: The 52 cards of the current game

pub mod card;
pub mod registry;

pub use card::{is_valid_run, Card, Color, Rank, Suit};
pub use registry::{CardId, CardRegistry};
