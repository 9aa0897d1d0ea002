//! Foundation (suit pile).

use super::{CardStack, Pieces};
use crate::cards::{CardId, CardRegistry, Rank};
use crate::core::error::TableError;
use crate::core::geometry::Vec2;
use crate::core::StackId;

/// A suit pile built from the Ace upwards.
///
/// Only the top card is visible. Cards on a foundation are never grabbable
/// and never leave it.
#[derive(Clone, Debug)]
pub struct Foundation {
    index: u8,
    anchor: Vec2,
    cards: Vec<CardId>,
}

impl Foundation {
    #[must_use]
    pub fn new(index: u8, anchor: Vec2) -> Self {
        Self {
            index,
            anchor,
            cards: Vec::new(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether `card` may be placed here next.
    ///
    /// An empty foundation takes any Ace. Otherwise the card must share the
    /// top card's suit and be exactly one rank higher.
    #[must_use]
    pub fn can_accept(&self, card: CardId, registry: &CardRegistry) -> bool {
        let incoming = &registry[card];
        match self.cards.last() {
            None => incoming.rank == Rank::ACE,
            Some(&top) => {
                let top = &registry[top];
                top.suit == incoming.suit && top.rank.precedes(incoming.rank)
            }
        }
    }

    /// Whether this pile runs from Ace to King.
    #[must_use]
    pub fn is_complete(&self, registry: &CardRegistry) -> bool {
        self.cards
            .last()
            .is_some_and(|&top| registry[top].rank == Rank::KING)
    }
}

impl CardStack for Foundation {
    fn id(&self) -> StackId {
        StackId::Foundation(self.index)
    }

    fn anchor(&self) -> Vec2 {
        self.anchor
    }

    fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Covers the previous top and animates `card` onto the anchor.
    ///
    /// Acceptance is the caller's concern: drop resolution and the
    /// double-click path only offer cards that pass `can_accept`.
    fn add_card(&mut self, card: CardId, pieces: &mut Pieces) {
        if let Some(&covered) = self.cards.last() {
            pieces.cards[covered].visible = false;
        }
        self.cards.push(card);

        let state = &mut pieces.cards[card];
        state.owner = Some(self.id());
        state.visible = true;
        state.set_grabbable(false);
        pieces.move_card(card, self.anchor, true);
    }

    fn remove_card(&mut self, _card: CardId, _pieces: &mut Pieces) -> Result<Vec<CardId>, TableError> {
        Err(TableError::AppendOnly(self.id()))
    }

    fn card_position(&self, _card: Option<CardId>) -> Result<Vec2, TableError> {
        Ok(self.anchor)
    }

    fn clear(&mut self) -> Vec<CardId> {
        std::mem::take(&mut self.cards)
    }
}
