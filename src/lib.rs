//! # solitaire-table
//!
//! Rule engine and interaction model for single-player Klondike solitaire.
//!
//! ## Design Principles
//!
//! 1. **Host-Driven**: The table never polls input or draws. The host hands
//!    it one `FrameInput` per frame and renders the returned `SpriteDraw`s.
//!
//! 2. **Frame Time Only**: Tweens and routines advance on the frame's `dt`
//!    and nothing else, so a run is reproducible from its inputs and seed.
//!
//! 3. **Keys, Not References**: Cards point at their stack by `StackId`.
//!    The table owns every stack and card.
//!
//! ## Modules
//!
//! - `core`: Geometry, configuration, input, RNG, resources, errors
//! - `cards`: Card identity, state and registry
//! - `stacks`: Draw pile, lanes and foundations
//! - `motion`: Tweens and cooperative routines
//! - `table`: The orchestrator, dragging and drop resolution

pub mod cards;
pub mod core;
pub mod motion;
pub mod stacks;
pub mod table;

// Re-export commonly used types
pub use crate::core::{
    FrameInput, GameRng, PointerButton, Rect, ResourceCatalog, Rgba, SizeTable, StackId,
    TableConfig, TableError, Vec2,
};

pub use crate::cards::{Card, CardId, CardRegistry, Color, Rank, Suit};

pub use crate::stacks::{CardStack, DrawPile, Foundation, Lane};

pub use crate::motion::{Animator, Routine, Scheduler, Sequence, Step};

pub use crate::table::{Phase, SpriteDraw, Table};
