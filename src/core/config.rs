//! Table configuration types.
//!
//! - `StackId`: Names every pile on the table (draw pile, lanes, foundations)
//! - `TableConfig`: Timing, layout and dealing parameters
//!
//! The defaults reproduce the classic three-card Klondike layout on a
//! 1920×1020 board.

use serde::{Deserialize, Serialize};

use super::geometry::Vec2;

/// Number of tableau lanes.
pub const LANE_COUNT: usize = 7;

/// Number of foundation (suit) piles.
pub const FOUNDATION_COUNT: usize = 4;

/// Stack identifier. This is the lookup key a card keeps for its owning stack.
///
/// Stacks live in the table's registry. A card only stores one of these, never
/// a reference, so ownership always flows from the table to the stacks to the
/// card membership.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackId {
    /// The draw pile and its visible waste window.
    Deck,
    /// A tableau lane, `0..LANE_COUNT`.
    Lane(u8),
    /// A foundation pile, `0..FOUNDATION_COUNT`.
    Foundation(u8),
}

impl StackId {
    #[must_use]
    pub const fn is_lane(self) -> bool {
        matches!(self, StackId::Lane(_))
    }
}

impl std::fmt::Display for StackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StackId::Deck => write!(f, "Deck"),
            StackId::Lane(i) => write!(f, "Lane({})", i),
            StackId::Foundation(i) => write!(f, "Foundation({})", i),
        }
    }
}

/// Table configuration.
///
/// Durations are in seconds of frame time. Distances are in pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Cards revealed per click on the draw pile.
    pub hand_size: usize,

    /// Horizontal offset between fanned waste cards.
    pub waste_spacing: f32,

    /// Vertical offset between cards cascading down a lane.
    pub lane_spacing: f32,

    /// Gap between neighbouring piles, and between piles and the board edge.
    pub board_spacing: f32,

    /// Duration of a single card move animation.
    pub movement_time: f32,

    /// Delay between consecutive cards of a sequenced move or reveal.
    pub card_delay: f32,

    /// Cooldown after a draw pile reveal/recycle before it accepts another click.
    pub click_delay: f32,

    /// Delay between placements during the opening deal.
    pub deal_delay: f32,

    /// Two presses on the same body within this window form a double-click.
    pub double_click_window: f32,

    /// Board dimensions. Lanes are centred horizontally.
    pub board_size: Vec2,

    /// Top-left corner of the new-game button.
    pub button_position: Vec2,

    /// Root seed. Every new game forks a fresh stream from it.
    pub seed: u64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            hand_size: 3,
            waste_spacing: 30.0,
            lane_spacing: 45.0,
            board_spacing: 30.0,
            movement_time: 0.05,
            card_delay: 0.05,
            click_delay: 0.1,
            deal_delay: 0.05,
            double_click_window: 0.5,
            board_size: Vec2::new(1920.0, 1020.0),
            button_position: Vec2::new(20.0, 926.0),
            seed: 42,
        }
    }
}

impl TableConfig {
    /// Set the root seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set how many cards each draw pile click reveals.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        assert!(hand_size > 0, "Hand size must be at least 1");
        self.hand_size = hand_size;
        self
    }

    /// Set the card move duration.
    #[must_use]
    pub fn with_movement_time(mut self, seconds: f32) -> Self {
        self.movement_time = seconds;
        self
    }

    /// Set the double-click window.
    #[must_use]
    pub fn with_double_click_window(mut self, seconds: f32) -> Self {
        self.double_click_window = seconds;
        self
    }

    /// Set all sequencing delays (card, click cooldown, deal) at once.
    #[must_use]
    pub fn with_delays(mut self, card_delay: f32, click_delay: f32, deal_delay: f32) -> Self {
        self.card_delay = card_delay;
        self.click_delay = click_delay;
        self.deal_delay = deal_delay;
        self
    }
}
