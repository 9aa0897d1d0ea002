//! Pick-up, drag tracking, release and set-down.
//!
//! A drag goes Idle → Held → Animating → Idle. While held, each card keeps
//! a grip offset and follows the pointer. On release the base card is
//! resolved against a snapshot of the table. The run is then either
//! detached and sequenced onto the destination, or sent back to where it
//! came from.

use smallvec::SmallVec;

use super::resolve::{find_drop_destination, BodyId, Candidate, Probe, TargetKind};
use super::state::{Phase, Table};
use crate::cards::{is_valid_run, CardId};
use crate::core::error::TableError;
use crate::core::geometry::{Rect, Vec2};
use crate::core::input::FrameInput;
use crate::core::StackId;
use crate::motion::schedule::{self, Sequence};
use crate::stacks::CardStack;

/// z of the topmost held card. Cards below it in the run step down by one.
const HELD_Z: i32 = 100;

impl Table {
    /// Grab `card`, and for a lane card everything above it.
    pub(crate) fn pick_up(&mut self, card: CardId, pointer: Vec2) {
        if self.phase != Phase::Playing || !self.held.is_empty() {
            return;
        }
        let run: SmallVec<[CardId; 13]> = match self.pieces.cards[card].owner {
            Some(StackId::Lane(i)) => match self.lanes[i as usize].run_from(card) {
                Some(run) => run.iter().copied().collect(),
                None => {
                    log::error!("{} claims Lane({}) but is not in it", card, i);
                    return;
                }
            },
            Some(_) => SmallVec::from_slice(&[card]),
            // Lifted out of its stack and waiting for its set-down step.
            None => return,
        };
        // A run with any card still in flight stays put until it lands.
        let settled = run.iter().all(|&id| {
            let state = &self.pieces.cards[id];
            state.is_face_up() && state.can_grab() && !state.is_moving()
        });
        if !settled {
            log::trace!("{} is not ready to be picked up", card);
            return;
        }

        let top = run.len() - 1;
        for (depth, &id) in run.iter().enumerate() {
            let held = &mut self.pieces.cards[id];
            held.grip = Some(pointer - held.position);
            held.rest_z = held.z;
            held.z = HELD_Z - (top - depth) as i32;
        }
        log::trace!("picked up {} card(s) from {}", run.len(), card);
        self.held = run;
    }

    /// Make held cards follow the pointer, releasing them once the button is up.
    pub(crate) fn track_drag(&mut self, input: &FrameInput) {
        if self.held.is_empty() {
            return;
        }
        if !input.primary.down {
            self.release();
            return;
        }
        for &id in &self.held {
            let card = &mut self.pieces.cards[id];
            if let Some(grip) = card.grip {
                card.position = input.pointer - grip;
            }
        }
    }

    fn release(&mut self) {
        let run = std::mem::take(&mut self.held);
        let Some(&base) = run.first() else {
            return;
        };
        let destination = find_drop_destination(&self.probe(&run), &self.candidates(&run));
        let owner = self.pieces.cards[base].owner;

        for &id in &run {
            self.pieces.cards[id].grip = None;
        }

        match owner {
            Some(StackId::Lane(i)) if destination.is_some_and(|d| Some(d) != owner) => {
                match self.lanes[i as usize].remove_card(base, &mut self.pieces) {
                    Ok(lifted) => self.start_set_down_run(&lifted, destination),
                    Err(err) => log::error!("cannot lift {} out of Lane({}): {}", base, i, err),
                }
            }
            Some(StackId::Lane(_)) => self.start_set_down_run(&run, destination),
            _ => self.set_down_logged(base, destination),
        }
    }

    fn start_set_down_run(&mut self, run: &[CardId], destination: Option<StackId>) {
        match destination {
            Some(dest) => log::debug!("dropping {} card(s) on {}", run.len(), dest),
            None => log::debug!("no target for {}, returning", run[0]),
        }
        let delay = self.config.card_delay;
        let mut sequence = Sequence::new();
        for &card in run {
            sequence.push(move |table: &mut Table| table.set_down_logged(card, destination));
            sequence.push_wait(delay);
        }
        schedule::start(self, Box::new(sequence));
    }

    fn set_down_logged(&mut self, card: CardId, destination: Option<StackId>) {
        if let Err(err) = self.set_down(card, destination) {
            log::error!("set-down of {} failed: {}", card, err);
        }
    }

    /// Move `card` onto `destination`, or back home when there is none.
    pub(crate) fn set_down(
        &mut self,
        card: CardId,
        destination: Option<StackId>,
    ) -> Result<(), TableError> {
        let owner = self.pieces.cards[card].owner;

        match destination {
            Some(dest) if Some(dest) != owner => {
                if self.deck.top_visible() == Some(card) {
                    self.remove_top_waste();
                } else if let Some(StackId::Lane(i)) = owner {
                    self.lanes[i as usize].remove_card(card, &mut self.pieces)?;
                }

                if self.pieces.cards[card].owner.is_none() {
                    self.attach(card, dest)?;
                }
                Ok(())
            }
            _ => {
                let Some(home) = owner else {
                    log::error!("{} has no stack to return to", card);
                    return Ok(());
                };
                let slot = self.stack(home)?.card_position(Some(card))?;
                self.pieces.move_card(card, slot, true);
                Ok(())
            }
        }
    }

    fn attach(&mut self, card: CardId, dest: StackId) -> Result<(), TableError> {
        let pieces = &mut self.pieces;
        match dest {
            StackId::Deck => self.deck.add_card(card, pieces),
            StackId::Lane(i) => self
                .lanes
                .get_mut(i as usize)
                .ok_or(TableError::UnknownStack(dest))?
                .add_card(card, pieces),
            StackId::Foundation(i) => self
                .foundations
                .get_mut(i as usize)
                .ok_or(TableError::UnknownStack(dest))?
                .add_card(card, pieces),
        }
        Ok(())
    }

    /// Move `card`, and anything stacked on it, onto `dest` with no rules check.
    ///
    /// The cards leave through the stack that owns them, so a foundation card
    /// fails with [`TableError::AppendOnly`] and the table is left unchanged.
    pub fn transfer(&mut self, card: CardId, dest: StackId) -> Result<(), TableError> {
        self.stack(dest)?;
        let owner = self
            .pieces
            .cards
            .get(card)
            .and_then(|state| state.owner)
            .ok_or(TableError::Unowned(card))?;
        if owner == dest {
            return Ok(());
        }

        let lifted = match owner {
            StackId::Deck => {
                if self.deck.top_visible() != Some(card) {
                    return Err(TableError::NotInStack { card, stack: owner });
                }
                self.remove_top_waste();
                vec![card]
            }
            StackId::Lane(i) => self
                .lanes
                .get_mut(i as usize)
                .ok_or(TableError::UnknownStack(owner))?
                .remove_card(card, &mut self.pieces)?,
            StackId::Foundation(i) => self
                .foundations
                .get_mut(i as usize)
                .ok_or(TableError::UnknownStack(owner))?
                .remove_card(card, &mut self.pieces)?,
        };
        log::debug!("transferring {} card(s) from {} to {}", lifted.len(), owner, dest);
        for id in lifted {
            self.attach(id, dest)?;
        }
        Ok(())
    }

    /// Send a lane-top or window-top card to the first foundation that takes it.
    pub(crate) fn double_click_card(&mut self, card: CardId) {
        if self.phase != Phase::Playing || !self.held.is_empty() {
            return;
        }
        let state = &self.pieces.cards[card];
        if state.face_down {
            return;
        }
        let playable = match state.owner {
            Some(StackId::Lane(i)) => self.lanes[i as usize].top() == Some(card),
            Some(StackId::Deck) => self.deck.top_visible() == Some(card),
            _ => false,
        };
        if !playable {
            return;
        }
        if let Some(foundation) = self.foundation_for(card) {
            log::debug!("sending {} to {}", card, foundation);
            self.set_down_logged(card, Some(foundation));
        }
    }

    fn probe(&self, run: &[CardId]) -> Probe {
        let base = run[0];
        let card = &self.pieces.cards[base];
        Probe {
            card: base,
            bounds: Rect::new(card.position, self.card_size),
            color: card.color(),
            rank: card.rank,
            multi: run.len() > 1,
            run_valid: is_valid_run(run.iter().map(|&id| &self.pieces.cards[id])),
        }
    }

    /// Snapshot of every body a dropped card could land on, in hit-test order.
    pub(crate) fn candidates(&self, held: &[CardId]) -> Vec<Candidate> {
        let cards = &self.pieces.cards;
        let base = held.first().copied();

        self.bodies()
            .into_iter()
            .filter(|(body, _, _)| !matches!(body, BodyId::Card(id) if held.contains(id)))
            .map(|(body, bounds, _)| {
                let kind = match body {
                    BodyId::Card(id) => {
                        let card = &cards[id];
                        let lane_top = card
                            .owner
                            .filter(|owner| owner.is_lane())
                            .filter(|&owner| self.stack(owner).is_ok_and(|s| s.top() == Some(id)));
                        TargetKind::Card {
                            lane_top,
                            color: card.color(),
                            rank: card.rank,
                            face_up: card.is_face_up(),
                        }
                    }
                    BodyId::Stack(stack @ StackId::Lane(i)) => TargetKind::Lane {
                        stack,
                        empty: self.lanes[i as usize].is_empty(),
                    },
                    BodyId::Stack(stack @ StackId::Foundation(i)) => TargetKind::Foundation {
                        stack,
                        accepts: base
                            .is_some_and(|b| self.foundations[i as usize].can_accept(b, cards)),
                    },
                    BodyId::Stack(StackId::Deck) | BodyId::Button => TargetKind::Other,
                };
                Candidate { body, bounds, kind }
            })
            .collect()
    }
}
