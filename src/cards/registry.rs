//! Card storage for one game.
//!
//! The `CardRegistry` owns every card on the table. Stacks, the drag
//! controller and tweens refer to cards by `CardId` and index into the
//! registry. A reset discards the registry and builds a fresh one.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};

/// Index of a card in its `CardRegistry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Registry of the cards in play.
///
/// ## Example
///
/// ```
/// use solitaire_table::cards::{CardRegistry, Rank, Suit};
///
/// let registry = CardRegistry::standard_deck();
/// assert_eq!(registry.len(), 52);
///
/// let ace = registry.find(Suit::Hearts, Rank::ACE).unwrap();
/// assert_eq!(registry[ace].suit, Suit::Hearts);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: Vec<Card>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The 52 cards of a standard deck, suit-major: Clubs Ace to King, then
    /// Diamonds, Hearts and Spades.
    #[must_use]
    pub fn standard_deck() -> Self {
        let mut registry = Self::new();
        for suit in Suit::ALL {
            for rank in Rank::standard() {
                registry.insert(Card::new(suit, rank));
            }
        }
        registry
    }

    /// Add a card and return its ID.
    pub fn insert(&mut self, card: Card) -> CardId {
        let id = CardId::new(self.cards.len() as u32);
        self.cards.push(card);
        id
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.index())
    }

    #[must_use]
    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(id.index())
    }

    /// Look a card up by identity.
    #[must_use]
    pub fn find(&self, suit: Suit, rank: Rank) -> Option<CardId> {
        self.cards
            .iter()
            .position(|c| c.suit == suit && c.rank == rank)
            .map(|i| CardId::new(i as u32))
    }

    /// All card IDs in allocation order.
    pub fn ids(&self) -> impl Iterator<Item = CardId> {
        (0..self.cards.len() as u32).map(CardId::new)
    }

    /// Iterate over `(id, card)` pairs in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, c)| (CardId::new(i as u32), c))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Panics on an ID this registry did not allocate. IDs never outlive the
/// game that produced them, so a miss is a bug in the caller.
impl Index<CardId> for CardRegistry {
    type Output = Card;

    fn index(&self, id: CardId) -> &Card {
        &self.cards[id.index()]
    }
}

impl IndexMut<CardId> for CardRegistry {
    fn index_mut(&mut self, id: CardId) -> &mut Card {
        &mut self.cards[id.index()]
    }
}
