//! Tableau lane.
//!
//! Cards cascade downwards from the anchor, one `lane_spacing` per card.
//! Placement legality is decided by drop resolution, not here: a lane takes
//! whatever it is given and only keeps its own face-up/grab bookkeeping.

use super::{CardStack, Pieces};
use crate::cards::CardId;
use crate::core::error::TableError;
use crate::core::geometry::Vec2;
use crate::core::StackId;

/// One of the seven tableau lanes.
#[derive(Clone, Debug)]
pub struct Lane {
    index: u8,
    anchor: Vec2,
    spacing: f32,
    cards: Vec<CardId>,
}

impl Lane {
    #[must_use]
    pub fn new(index: u8, anchor: Vec2, spacing: f32) -> Self {
        Self {
            index,
            anchor,
            spacing,
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

    fn slot(&self, depth: usize) -> Vec2 {
        self.anchor + Vec2::new(0.0, depth as f32 * self.spacing)
    }

    /// Depth of `card` from the bottom of the lane.
    #[must_use]
    pub fn depth_of(&self, card: CardId) -> Option<usize> {
        self.cards.iter().position(|&c| c == card)
    }

    /// `card` and everything above it, bottom first.
    #[must_use]
    pub fn run_from(&self, card: CardId) -> Option<&[CardId]> {
        self.depth_of(card).map(|depth| &self.cards[depth..])
    }

    /// Depth of the lowest card in the face-up run at the top of the lane.
    #[must_use]
    pub fn face_up_run_start(&self, pieces: &Pieces) -> Option<usize> {
        let mut start = None;
        for (depth, &card) in self.cards.iter().enumerate().rev() {
            if pieces.cards[card].face_down {
                break;
            }
            start = Some(depth);
        }
        start
    }

    /// Attach `card` in the next slot.
    ///
    /// The card is drawn above everything already in the lane. With
    /// `face_up` it is turned over and becomes grabbable. Otherwise it keeps
    /// its current facing.
    pub fn add_card_facing(&mut self, card: CardId, face_up: bool, pieces: &mut Pieces) {
        let z = self
            .cards
            .iter()
            .map(|&c| pieces.cards[c].z)
            .max()
            .map_or(1, |z| z + 1);

        let state = &mut pieces.cards[card];
        state.z = z;
        if face_up {
            state.face_down = false;
            state.set_grabbable(true);
        }
        state.visible = true;
        state.owner = Some(self.id());

        pieces.move_card(card, self.slot(self.cards.len()), false);
        self.cards.push(card);
    }
}

impl CardStack for Lane {
    fn id(&self) -> StackId {
        StackId::Lane(self.index)
    }

    fn anchor(&self) -> Vec2 {
        self.anchor
    }

    fn cards(&self) -> &[CardId] {
        &self.cards
    }

    fn add_card(&mut self, card: CardId, pieces: &mut Pieces) {
        self.add_card_facing(card, true, pieces);
    }

    /// Pops from the top down to and including `card`, then turns the newly
    /// exposed card face up.
    fn remove_card(&mut self, card: CardId, pieces: &mut Pieces) -> Result<Vec<CardId>, TableError> {
        let depth = self.depth_of(card).ok_or(TableError::NotInStack {
            card,
            stack: self.id(),
        })?;

        let removed = self.cards.split_off(depth);
        for &c in &removed {
            pieces.cards[c].owner = None;
        }

        if let Some(&exposed) = self.cards.last() {
            let state = &mut pieces.cards[exposed];
            state.face_down = false;
            state.set_grabbable(true);
        }
        Ok(removed)
    }

    fn card_position(&self, card: Option<CardId>) -> Result<Vec2, TableError> {
        match card {
            None => Ok(self.slot(self.cards.len())),
            Some(card) => self
                .depth_of(card)
                .map(|depth| self.slot(depth))
                .ok_or(TableError::NotInStack {
                    card,
                    stack: self.id(),
                }),
        }
    }

    fn clear(&mut self) -> Vec<CardId> {
        std::mem::take(&mut self.cards)
    }
}
