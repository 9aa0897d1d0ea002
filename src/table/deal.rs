//! Routines that choreograph the opening deal and the draw pile.
//!
//! Each routine is a `Sequence` of table actions separated by waits. Steps
//! look the pile up again when they run, because a card can be played out
//! of the window while a routine is still in flight.

use super::state::{Phase, Table};
use crate::cards::CardId;
use crate::core::LANE_COUNT;
use crate::motion::schedule::{self, Sequence};
use crate::stacks::{CardStack, PileClick};

impl Table {
    /// Start the opening deal: lane `i` gets `i + 1` cards, the last one face up.
    pub(crate) fn start_deal(&mut self) {
        let delay = self.config.deal_delay;
        let mut deal = Sequence::new();
        for round in 0..LANE_COUNT {
            for lane in round..LANE_COUNT {
                deal.push(move |table: &mut Table| table.deal_one(lane, lane == round));
                deal.push_wait(delay);
            }
        }
        deal.push(|table: &mut Table| {
            table.phase = Phase::Playing;
            table.button.set_enabled(true);
            log::debug!("deal finished, {} cards left in the pile", table.deck.len());
        });
        schedule::start(self, Box::new(deal));
    }

    fn deal_one(&mut self, lane: usize, face_up: bool) {
        match self.deck.draw_card(&mut self.pieces) {
            Some(card) => self.lanes[lane].add_card_facing(card, face_up, &mut self.pieces),
            None => log::error!("draw pile ran out while dealing lane {}", lane),
        }
    }

    /// Handle a click on the draw pile.
    pub(crate) fn click_deck(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        match self.deck.click(&mut self.pieces) {
            Some(PileClick::Reveal) => {
                log::debug!("revealed up to {} cards", self.deck.visible().len());
                self.start_reveal(false);
            }
            Some(PileClick::Recycle) => {
                log::debug!("recycling {} cards", self.deck.visible().len());
                self.start_recycle();
            }
            None => {}
        }
    }

    /// Play the newest window card out of the pile and slide the rest over.
    pub(crate) fn remove_top_waste(&mut self) -> Option<CardId> {
        let card = self.deck.remove_top_card(&mut self.pieces)?;
        self.start_reveal(true);
        Some(card)
    }

    /// Animate the shown window cards into their fan slots.
    ///
    /// With `shifting` the cards are already on the table and move one slot
    /// to the right, newest first.
    fn start_reveal(&mut self, shifting: bool) {
        let hand = self.deck.hand_size();
        let mut shown: Vec<CardId> = self.deck.shown().to_vec();
        if shifting {
            shown.reverse();
        }

        let mut reveal = Sequence::new();
        for (i, card) in shown.into_iter().enumerate() {
            let z = (if shifting { hand - i } else { i }) as i32;
            reveal.push(move |table: &mut Table| table.reveal_card(card, z));
            reveal.push_wait(self.config.card_delay);
        }
        reveal.push_wait(self.config.click_delay);
        reveal.push(|table: &mut Table| {
            table.deck.set_can_click(true);
            if let Some(top) = table.deck.top_visible() {
                table.pieces.cards[top].set_grabbable(true);
            }
        });
        schedule::start(self, Box::new(reveal));
    }

    fn reveal_card(&mut self, card: CardId, z: i32) {
        // Played out of the window since the routine started.
        if !self.deck.visible().contains(&card) {
            return;
        }
        match self.deck.card_position(Some(card)) {
            Ok(slot) => {
                let state = &mut self.pieces.cards[card];
                state.visible = true;
                state.face_down = false;
                state.z = z;
                self.pieces.move_card(card, slot, false);
            }
            Err(err) => log::error!("cannot reveal {}: {}", card, err),
        }
    }

    /// Gather the window back under the pile.
    fn start_recycle(&mut self) {
        let delay = self.config.card_delay;
        let anchor = self.deck.anchor();
        self.deck.set_exhausted(false);

        let mut recycle = Sequence::new();
        for (i, &card) in self.deck.shown().iter().rev().enumerate() {
            let z = 100 + i as i32;
            recycle.push(move |table: &mut Table| {
                let state = &mut table.pieces.cards[card];
                state.visible = true;
                state.face_down = true;
                state.z = z;
                state.set_grabbable(false);
                table.pieces.move_card(card, anchor, false);
            });
            recycle.push_wait(delay);
            recycle.push(move |table: &mut Table| table.pieces.cards[card].visible = false);
        }
        recycle.push(|table: &mut Table| table.deck.collapse(&mut table.pieces));
        recycle.push_wait(self.config.click_delay);
        recycle.push(|table: &mut Table| table.deck.set_can_click(true));
        schedule::start(self, Box::new(recycle));
    }
}
