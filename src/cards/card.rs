//! Card identity and per-card mutable state.

use serde::{Deserialize, Serialize};

use crate::core::error::TableError;
use crate::core::geometry::Vec2;
use crate::core::resources::{card_face, CARD_BACK};
use crate::core::StackId;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in allocation order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }

    /// Lowercase name used in resource names.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }
}

/// Card colour, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

/// Card rank, `1..=14`.
///
/// 1 is the Ace and 11 to 13 are the face cards. 14 is the Joker: it can be
/// constructed, but a standard deck never contains it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const KING: Rank = Rank(13);
    pub const JOKER: Rank = Rank(14);

    /// Validate a raw rank value.
    pub fn new(value: u8) -> Result<Self, TableError> {
        if (1..=14).contains(&value) {
            Ok(Self(value))
        } else {
            Err(TableError::RankOutOfRange(value))
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Ace through King.
    pub fn standard() -> impl Iterator<Item = Rank> {
        (1..=13).map(Rank)
    }

    /// Whether `self` sits exactly one rank below `other`.
    #[must_use]
    pub const fn precedes(self, other: Rank) -> bool {
        self.0 + 1 == other.0
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            1 => write!(f, "A"),
            11 => write!(f, "J"),
            12 => write!(f, "Q"),
            13 => write!(f, "K"),
            14 => write!(f, "Joker"),
            v => write!(f, "{}", v),
        }
    }
}

/// A playing card and its table state.
///
/// The card does not know where its stack is. `owner` is a key the table
/// looks up. Everything else here is presentation and grab state that stacks
/// and the drag controller update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,

    /// Starts `true`. Face-down cards cannot be grabbed or double-clicked.
    pub face_down: bool,

    /// Only visible cards are drawn and hit-tested.
    pub visible: bool,

    /// Screen position of the top-left corner.
    pub position: Vec2,

    /// Draw order. Higher values are drawn later and win hit tests.
    pub z: i32,

    /// Draw order to restore when a move finishes with `reset_z`.
    pub rest_z: i32,

    /// Pointer-minus-position offset while the card is held.
    pub grip: Option<Vec2>,

    /// Stack whose membership holds this card.
    pub owner: Option<StackId>,

    can_grab: bool,

    /// Grab flag to restore when the current motion finishes.
    pending_grab: Option<bool>,
}

impl Card {
    #[must_use]
    pub fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_down: true,
            visible: false,
            position: Vec2::ZERO,
            z: 0,
            rest_z: 0,
            grip: None,
            owner: None,
            can_grab: false,
            pending_grab: None,
        }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        !self.face_down
    }

    #[must_use]
    pub const fn can_grab(&self) -> bool {
        self.can_grab
    }

    #[must_use]
    pub const fn is_moving(&self) -> bool {
        self.pending_grab.is_some()
    }

    /// Set the grab flag.
    ///
    /// While a forced move is running the flag stays suspended and the new
    /// value is applied when the move finishes.
    pub fn set_grabbable(&mut self, grabbable: bool) {
        match self.pending_grab.as_mut() {
            Some(pending) => *pending = grabbable,
            None => self.can_grab = grabbable,
        }
    }

    /// Suspend grabbing for the duration of a move.
    ///
    /// A second move started before the first finishes keeps the value
    /// saved by the first.
    pub fn begin_motion(&mut self) {
        if self.pending_grab.is_none() {
            self.pending_grab = Some(self.can_grab);
        }
        self.can_grab = false;
    }

    /// Restore the grab flag after a move, and optionally the pre-drag z.
    pub fn finish_motion(&mut self, reset_z: bool) {
        if let Some(grab) = self.pending_grab.take() {
            self.can_grab = grab;
        }
        if reset_z {
            self.z = self.rest_z;
        }
    }

    /// Name of the resource that draws this card in its current facing.
    #[must_use]
    pub fn resource_name(&self) -> String {
        if self.face_down {
            CARD_BACK.to_string()
        } else {
            card_face(self.suit, self.rank)
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.rank, self.suit.name())
    }
}

/// Whether `run` (base first) descends one rank at a time with alternating colours.
///
/// Empty and single-card runs are trivially valid.
#[must_use]
pub fn is_valid_run<'a>(run: impl IntoIterator<Item = &'a Card>) -> bool {
    let mut iter = run.into_iter();
    let Some(mut below) = iter.next() else {
        return true;
    };
    for card in iter {
        if !card.rank.precedes(below.rank) || card.color() == below.color() {
            return false;
        }
        below = card;
    }
    true
}
