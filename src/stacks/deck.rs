//! Draw pile and waste window.
//!
//! The pile keeps the whole undrawn order. Clicking it reveals the next
//! `hand_size` cards into the visible window, which is a prefix of that
//! order. Only the newest `hand_size` window cards are shown, fanned to the
//! right of the pile; the rest of the window sits hidden underneath. Once
//! the whole order is visible the next click recycles it, without a
//! reshuffle.
//!
//! The pile only does the bookkeeping. The table drives the reveal and
//! recycle animations as routines.

use super::{CardStack, Pieces};
use crate::cards::CardId;
use crate::core::error::TableError;
use crate::core::geometry::Vec2;
use crate::core::rng::GameRng;
use crate::core::StackId;

/// What a click on the pile started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PileClick {
    /// More cards were added to the visible window.
    Reveal,
    /// Every card was visible; the window goes back under the pile.
    Recycle,
}

/// The draw pile in the top-left corner.
#[derive(Clone, Debug)]
pub struct DrawPile {
    anchor: Vec2,
    card_size: Vec2,
    hand_size: usize,
    spacing: f32,
    cards: Vec<CardId>,
    visible: Vec<CardId>,
    can_click: bool,
    exhausted: bool,
}

impl DrawPile {
    #[must_use]
    pub fn new(anchor: Vec2, card_size: Vec2, hand_size: usize, spacing: f32) -> Self {
        Self {
            anchor,
            card_size,
            hand_size,
            spacing,
            cards: Vec::new(),
            visible: Vec::new(),
            can_click: true,
            exhausted: false,
        }
    }

    /// Fill the pile with every card in the registry, shuffled.
    ///
    /// All cards start face down, hidden and ungrabbable at the anchor.
    pub fn init(&mut self, rng: &mut GameRng, pieces: &mut Pieces) {
        let mut order: Vec<CardId> = pieces.cards.ids().collect();
        rng.shuffle(&mut order);

        for &id in &order {
            let card = &mut pieces.cards[id];
            card.face_down = true;
            card.visible = false;
            card.set_grabbable(false);
            card.position = self.anchor;
            card.z = 0;
            card.owner = Some(StackId::Deck);
        }

        self.cards = order;
        self.visible.clear();
        self.can_click = true;
        self.exhausted = false;
    }

    /// Take the last undrawn card off the pile. Used by the deal.
    pub fn draw_card(&mut self, pieces: &mut Pieces) -> Option<CardId> {
        let card = self.cards.pop()?;
        self.visible.retain(|&c| c != card);
        pieces.cards[card].owner = None;
        Some(card)
    }

    /// Take a specific card that has not been revealed yet.
    pub fn take(&mut self, card: CardId, pieces: &mut Pieces) -> Result<CardId, TableError> {
        let index = self
            .cards
            .iter()
            .position(|&c| c == card)
            .filter(|_| !self.visible.contains(&card))
            .ok_or(TableError::NotInStack {
                card,
                stack: StackId::Deck,
            })?;
        self.cards.remove(index);
        pieces.cards[card].owner = None;
        Ok(card)
    }

    /// The revealed window, oldest first.
    #[must_use]
    pub fn visible(&self) -> &[CardId] {
        &self.visible
    }

    /// The newest revealed card, the only one that can be played.
    #[must_use]
    pub fn top_visible(&self) -> Option<CardId> {
        self.visible.last().copied()
    }

    /// The newest `hand_size` window cards, oldest first.
    #[must_use]
    pub fn shown(&self) -> &[CardId] {
        let start = self.visible.len().saturating_sub(self.hand_size);
        &self.visible[start..]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    #[must_use]
    pub fn can_click(&self) -> bool {
        self.can_click
    }

    pub fn set_can_click(&mut self, can_click: bool) {
        self.can_click = can_click;
    }

    /// Whether every card is in the window. The pile then draws as a placeholder.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn set_exhausted(&mut self, exhausted: bool) {
        self.exhausted = exhausted;
    }

    /// Handle a click on the pile.
    ///
    /// Returns `None` while the click cooldown runs or when the pile holds
    /// no cards. On a reveal, the previously shown cards are hidden and the
    /// window grows by up to `hand_size`.
    pub fn click(&mut self, pieces: &mut Pieces) -> Option<PileClick> {
        if !self.can_click || self.cards.is_empty() {
            return None;
        }
        self.can_click = false;

        if self.visible.len() == self.cards.len() {
            return Some(PileClick::Recycle);
        }

        for &id in self.shown() {
            let card = &mut pieces.cards[id];
            card.visible = false;
            card.set_grabbable(false);
        }

        let count = self.hand_size.min(self.cards.len() - self.visible.len());
        for _ in 0..count {
            let next = self.cards[self.visible.len()];
            self.visible.push(next);
        }

        if self.visible.len() == self.cards.len() {
            self.exhausted = true;
        }
        Some(PileClick::Reveal)
    }

    /// Remove the newest window card, which is being played elsewhere.
    ///
    /// The card below it becomes grabbable. The caller runs the shifting
    /// reveal so older cards slide into view.
    pub fn remove_top_card(&mut self, pieces: &mut Pieces) -> Option<CardId> {
        let top = self.visible.pop()?;
        self.cards.retain(|&c| c != top);
        pieces.cards[top].owner = None;

        if let Some(&next) = self.visible.last() {
            pieces.cards[next].set_grabbable(true);
        }
        Some(top)
    }

    /// Move the window back under the pile, keeping the order.
    pub fn collapse(&mut self, pieces: &mut Pieces) {
        for &id in &self.visible {
            let card = &mut pieces.cards[id];
            card.face_down = true;
            card.visible = false;
            card.set_grabbable(false);
            card.z = 0;
            card.position = self.anchor;
        }
        self.visible.clear();
    }
}

impl CardStack for DrawPile {
    fn id(&self) -> StackId {
        StackId::Deck
    }

    fn anchor(&self) -> Vec2 {
        self.anchor
    }

    /// The undrawn order, including the window.
    fn cards(&self) -> &[CardId] {
        &self.cards
    }

    /// Return a card face down to the end of the undrawn order.
    fn add_card(&mut self, card: CardId, pieces: &mut Pieces) {
        let state = &mut pieces.cards[card];
        state.face_down = true;
        state.visible = false;
        state.set_grabbable(false);
        state.owner = Some(StackId::Deck);
        state.z = 0;
        pieces.move_card(card, self.anchor, false);
        self.cards.push(card);
        self.exhausted = false;
    }

    /// Only the newest window card can leave the pile this way.
    fn remove_card(&mut self, card: CardId, pieces: &mut Pieces) -> Result<Vec<CardId>, TableError> {
        if self.top_visible() != Some(card) {
            return Err(TableError::NotInStack {
                card,
                stack: StackId::Deck,
            });
        }
        Ok(self.remove_top_card(pieces).into_iter().collect())
    }

    /// Fan slot of a window card. With no card, the pile itself.
    fn card_position(&self, card: Option<CardId>) -> Result<Vec2, TableError> {
        let Some(card) = card else {
            return Ok(self.anchor);
        };
        let index = self
            .visible
            .iter()
            .position(|&c| c == card)
            .ok_or(TableError::NotInStack {
                card,
                stack: StackId::Deck,
            })?;

        let n = self.visible.len();
        let fanned = self.hand_size.min(n) as f32;
        let x = self.anchor.x + self.card_size.x + (fanned + 1.0) * self.spacing
            - self.spacing * (n - index) as f32;
        Ok(Vec2::new(x, self.anchor.y))
    }

    fn clear(&mut self) -> Vec<CardId> {
        self.visible.clear();
        self.can_click = true;
        self.exhausted = false;
        std::mem::take(&mut self.cards)
    }
}
