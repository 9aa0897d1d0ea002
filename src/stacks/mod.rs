//! Card stacks: the draw pile, tableau lanes and foundations.
//!
//! ## Key Types
//!
//! - `CardStack`: Capability trait shared by every stack variant
//! - `Lane`: Vertical cascade. Only the top face-up run moves
//! - `Foundation`: Append-only suit pile, Ace upwards
//! - `DrawPile`: Undrawn cards plus the fanned waste window
//! - `Pieces`: Card registry and move tweens, passed into stack operations
//!
//! ## Ownership
//!
//! A card's `owner` names exactly the stack whose membership holds it. The
//! owner is `None` only between removal from one stack and attachment to
//! the next.

pub mod deck;
pub mod foundation;
pub mod lane;
pub mod pieces;

pub use deck::{DrawPile, PileClick};
pub use foundation::Foundation;
pub use lane::Lane;
pub use pieces::Pieces;

use crate::cards::CardId;
use crate::core::error::TableError;
use crate::core::geometry::Vec2;
use crate::core::StackId;

/// Operations common to every stack.
pub trait CardStack {
    fn id(&self) -> StackId;

    /// Top-left corner of the stack's slot.
    fn anchor(&self) -> Vec2;

    /// Members, bottom first.
    fn cards(&self) -> &[CardId];

    /// The most recently added member.
    fn top(&self) -> Option<CardId> {
        self.cards().last().copied()
    }

    fn contains(&self, card: CardId) -> bool {
        self.cards().contains(&card)
    }

    /// Attach `card`, taking ownership and animating it into place.
    fn add_card(&mut self, card: CardId, pieces: &mut Pieces);

    /// Detach `card` (and anything stacked above it). Returns the detached
    /// cards bottom first, each with its owner cleared.
    fn remove_card(&mut self, card: CardId, pieces: &mut Pieces) -> Result<Vec<CardId>, TableError>;

    /// Where `card` rests in this stack, or where the next card would go.
    fn card_position(&self, card: Option<CardId>) -> Result<Vec2, TableError>;

    /// Drop every member. The cards are discarded with the registry.
    fn clear(&mut self) -> Vec<CardId>;
}
