//! Visual resource naming contract.
//!
//! The table never touches textures. It asks a `ResourceCatalog` how large a
//! named resource is and emits draw commands that refer to resources by name.
//! The host maps those names to whatever its renderer loads.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::TableError;
use super::geometry::Vec2;
use crate::cards::{Rank, Suit};

/// Back face of every card. Also the draw pile while it still has hidden cards.
pub const CARD_BACK: &str = "card_back";

/// Empty foundation slots and the exhausted draw pile.
pub const CARD_PLACEHOLDER: &str = "card_placeholder";

/// New-game button face.
pub const BUTTON: &str = "button";

/// Board background.
pub const BACKGROUND: &str = "background";

/// Resource name for a face-up card, e.g. `card_hearts12`.
#[must_use]
pub fn card_face(suit: Suit, rank: Rank) -> String {
    format!("card_{}{}", suit.name(), rank.value())
}

/// RGBA tint applied to a drawn resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);
    pub const GREEN: Rgba = Rgba::new(0, 228, 48, 255);

    /// Reduced-opacity tint for placeholders.
    pub const PLACEHOLDER: Rgba = Rgba::new(255, 255, 255, 63);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Resolves a named visual resource to its pixel dimensions.
pub trait ResourceCatalog {
    /// Dimensions of `name`, or `None` if the renderer has no such resource.
    fn dimensions(&self, name: &str) -> Option<Vec2>;

    /// Dimensions of `name`, treating a missing resource as a construction error.
    fn require(&self, name: &str) -> Result<Vec2, TableError> {
        self.dimensions(name)
            .ok_or_else(|| TableError::MissingResource(name.to_string()))
    }
}

/// In-memory catalog backed by a name → size map.
///
/// Headless hosts and tests use this in place of a texture loader.
#[derive(Clone, Debug, Default)]
pub struct SizeTable {
    sizes: FxHashMap<String, Vec2>,
}

impl SizeTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding every resource the game draws. All card resources are
    /// `card_width`×`card_height`.
    #[must_use]
    pub fn standard(card_width: f32, card_height: f32) -> Self {
        let card = Vec2::new(card_width, card_height);
        let mut table = Self::new()
            .with(CARD_BACK, card)
            .with(CARD_PLACEHOLDER, card)
            .with(BUTTON, Vec2::new(200.0, 70.0))
            .with(BACKGROUND, Vec2::new(1920.0, 1020.0));

        for suit in Suit::ALL {
            for rank in Rank::standard() {
                table.insert(card_face(suit, rank), card);
            }
        }
        table
    }

    /// Add or replace one entry.
    pub fn insert(&mut self, name: impl Into<String>, size: Vec2) {
        self.sizes.insert(name.into(), size);
    }

    /// Builder form of `insert`.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, size: Vec2) -> Self {
        self.insert(name, size);
        self
    }

    /// Drop one entry.
    #[must_use]
    pub fn without(mut self, name: &str) -> Self {
        self.sizes.remove(name);
        self
    }
}

impl ResourceCatalog for SizeTable {
    fn dimensions(&self, name: &str) -> Option<Vec2> {
        self.sizes.get(name).copied()
    }
}
