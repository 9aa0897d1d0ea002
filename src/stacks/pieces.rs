//! The card registry together with the tweens that move its cards.

use crate::cards::{CardId, CardRegistry};
use crate::core::geometry::Vec2;
use crate::motion::{Animator, TrackId, Tween};

/// Cards plus their position tweens.
///
/// Stacks receive this to update card state and start move animations in
/// one place. Each card animates on its own track, so a second move of the
/// same card supersedes the first.
#[derive(Debug)]
pub struct Pieces {
    pub cards: CardRegistry,
    animator: Animator<CardRegistry, Vec2>,
    movement_time: f32,
}

impl Pieces {
    #[must_use]
    pub fn new(cards: CardRegistry, movement_time: f32) -> Self {
        Self {
            cards,
            animator: Animator::new(),
            movement_time,
        }
    }

    /// Animate `card` to `to`.
    ///
    /// Grabbing is suspended until the move finishes. With `reset_z` the card
    /// also returns to its resting draw order on arrival.
    pub fn move_card(&mut self, card: CardId, to: Vec2, reset_z: bool) {
        let state = &mut self.cards[card];
        state.begin_motion();
        let from = state.position;
        log::trace!("{} moving {} -> {}", card, from, to);

        let tween = Tween::new(from, to, self.movement_time, move |cards: &mut CardRegistry, p| {
            cards[card].position = p;
        })
        .on_complete(move |cards: &mut CardRegistry| cards[card].finish_motion(reset_z));
        self.animator.start(TrackId::new(card.raw()), tween);
    }

    /// Advance all card moves by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        self.animator.tick(dt, &mut self.cards);
    }

    /// Drop every running move without completing it.
    pub fn stop_all(&mut self) {
        self.animator.stop_all();
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.animator.is_idle()
    }

    #[must_use]
    pub fn is_moving(&self, card: CardId) -> bool {
        self.animator.is_animating(TrackId::new(card.raw()))
    }
}
