//! The Klondike table: stacks, dealing, dragging and drop resolution.
//!
//! ## Key Types
//!
//! - `Table`: Owns every stack and card and runs the per-frame loop
//! - `Phase`: Dealing or playing
//! - `SpriteDraw`: One draw command for the host renderer
//! - `Button`: The new-game button
//! - `find_drop_destination`: Pure placement-rule resolver over a snapshot
//!
//! ## Frame Order
//!
//! Each `Table::update` runs hit testing and press dispatch, then card
//! tweens, the button, drag tracking, routines, and finally the
//! double-click timers. A button click resets the game after all of that.

pub mod button;
pub mod deal;
pub mod drag;
pub mod resolve;
pub mod state;

pub use button::{Button, ButtonState};
pub use resolve::{find_drop_destination, BodyId, Candidate, Probe, TargetKind};
pub use state::{Phase, SpriteDraw, Table};
