//! The table: every stack, the cards, and the per-frame loop.
//!
//! `Table` owns all game state. The host calls `update` once per frame with
//! that frame's input and then draws `sprites()`. Nothing advances between
//! calls.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::button::Button;
use super::resolve::BodyId;
use crate::cards::{Card, CardId, CardRegistry, Rank, Suit};
use crate::core::error::TableError;
use crate::core::geometry::{Rect, Vec2};
use crate::core::input::{ClickTimers, FrameInput, Press};
use crate::core::resources::{
    card_face, ResourceCatalog, Rgba, BACKGROUND, BUTTON, CARD_BACK, CARD_PLACEHOLDER,
};
use crate::core::rng::GameRng;
use crate::core::{StackId, TableConfig, FOUNDATION_COUNT, LANE_COUNT};
use crate::motion::schedule::{self, Cooperative, Scheduler};
use crate::stacks::{CardStack, DrawPile, Foundation, Lane, Pieces};

/// Game phase. Input on cards and the draw pile is ignored while dealing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Dealing,
    Playing,
}

/// One draw command for the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct SpriteDraw {
    pub resource: String,
    pub position: Vec2,
    pub z: i32,
    pub tint: Rgba,
}

impl SpriteDraw {
    fn new(resource: impl Into<String>, position: Vec2, z: i32, tint: Rgba) -> Self {
        Self {
            resource: resource.into(),
            position,
            z,
            tint,
        }
    }
}

/// Pile anchors for a given board and card size.
///
/// The seven lanes are centred horizontally with `board_spacing` between
/// them. The draw pile sits above the first lane and the foundations above
/// the last four.
struct Layout {
    deck: Vec2,
    foundations: [Vec2; FOUNDATION_COUNT],
    lanes: [Vec2; LANE_COUNT],
}

impl Layout {
    fn compute(config: &TableConfig, card: Vec2) -> Self {
        let gap = config.board_spacing;
        let width = LANE_COUNT as f32 * card.x + (LANE_COUNT - 1) as f32 * gap;
        let left = config.board_size.x / 2.0 - width / 2.0;
        let column = |i: usize| left + i as f32 * (card.x + gap);
        let lane_y = card.y + gap * 2.0;

        Self {
            deck: Vec2::new(left, gap),
            foundations: std::array::from_fn(|k| {
                Vec2::new(column(LANE_COUNT - FOUNDATION_COUNT + k), gap)
            }),
            lanes: std::array::from_fn(|i| Vec2::new(column(i), lane_y)),
        }
    }
}

/// A Klondike table.
///
/// ## Example
///
/// ```
/// use solitaire_table::core::{FrameInput, SizeTable, TableConfig, Vec2};
/// use solitaire_table::table::{Phase, Table};
///
/// let catalog = SizeTable::standard(100.0, 140.0);
/// let mut table = Table::new(TableConfig::default(), &catalog).unwrap();
/// assert_eq!(table.phase(), Phase::Dealing);
///
/// while !table.is_settled() {
///     table.update(&FrameInput::idle(1.0 / 60.0, Vec2::ZERO));
/// }
/// assert_eq!(table.phase(), Phase::Playing);
/// assert_eq!(table.deck().len(), 24);
/// ```
pub struct Table {
    pub(crate) config: TableConfig,
    pub(crate) card_size: Vec2,
    pub(crate) pieces: Pieces,
    pub(crate) deck: DrawPile,
    pub(crate) lanes: Vec<Lane>,
    pub(crate) foundations: Vec<Foundation>,
    pub(crate) button: Button,
    pub(crate) scheduler: Scheduler<Table>,
    pub(crate) phase: Phase,
    /// Cards being dragged, base first.
    pub(crate) held: SmallVec<[CardId; 13]>,
    pub(crate) clicks: ClickTimers<BodyId>,
    rng: GameRng,
    game_seed: u64,
}

impl Cooperative for Table {
    fn scheduler(&mut self) -> &mut Scheduler<Self> {
        &mut self.scheduler
    }
}

impl Table {
    /// Build a table and start dealing the first game.
    pub fn new(config: TableConfig, catalog: &impl ResourceCatalog) -> Result<Self, TableError> {
        let mut table = Self::build(config, catalog)?;
        table.start_game(true);
        Ok(table)
    }

    /// Build a table in the `Playing` phase with a shuffled, undealt pile.
    ///
    /// Use `place_in_lane` and `place_on_foundation` to arrange a position.
    pub fn blank(config: TableConfig, catalog: &impl ResourceCatalog) -> Result<Self, TableError> {
        let mut table = Self::build(config, catalog)?;
        table.start_game(false);
        Ok(table)
    }

    fn build(config: TableConfig, catalog: &impl ResourceCatalog) -> Result<Self, TableError> {
        let card_size = catalog.require(CARD_BACK)?;
        catalog.require(CARD_PLACEHOLDER)?;
        catalog.require(BACKGROUND)?;
        let button_size = catalog.require(BUTTON)?;
        for suit in Suit::ALL {
            for rank in Rank::standard() {
                catalog.require(&card_face(suit, rank))?;
            }
        }

        let layout = Layout::compute(&config, card_size);
        let lanes = (0..LANE_COUNT)
            .map(|i| Lane::new(i as u8, layout.lanes[i], config.lane_spacing))
            .collect();
        let foundations = (0..FOUNDATION_COUNT)
            .map(|k| Foundation::new(k as u8, layout.foundations[k]))
            .collect();

        Ok(Self {
            card_size,
            pieces: Pieces::new(CardRegistry::standard_deck(), config.movement_time),
            deck: DrawPile::new(layout.deck, card_size, config.hand_size, config.waste_spacing),
            lanes,
            foundations,
            button: Button::new(config.button_position, button_size),
            scheduler: Scheduler::new(),
            phase: Phase::Playing,
            held: SmallVec::new(),
            clicks: ClickTimers::new(config.double_click_window),
            rng: GameRng::new(config.seed),
            game_seed: config.seed,
            config,
        })
    }

    /// Shuffle a fresh stream into the pile and either deal or go straight to play.
    fn start_game(&mut self, deal: bool) {
        let mut rng = self.rng.fork();
        self.game_seed = rng.seed();
        self.deck.init(&mut rng, &mut self.pieces);
        log::debug!("new game with seed {:#x}", self.game_seed);

        if deal {
            self.phase = Phase::Dealing;
            self.button.set_enabled(false);
            self.start_deal();
        } else {
            self.phase = Phase::Playing;
            self.button.set_enabled(true);
        }
    }

    /// Abandon the current game and deal a new one.
    pub fn reset_game(&mut self) {
        self.scheduler.stop_all();
        self.pieces.stop_all();
        self.held.clear();
        self.clicks.clear();

        for lane in &mut self.lanes {
            lane.clear();
        }
        for foundation in &mut self.foundations {
            foundation.clear();
        }
        self.deck.clear();

        self.pieces.cards = CardRegistry::standard_deck();
        self.start_game(true);
    }

    /// Run one frame.
    pub fn update(&mut self, input: &FrameInput) {
        if input.primary.pressed {
            if let Some(body) = self.hit_test(input.pointer) {
                match self.clicks.press(body) {
                    Press::Single => self.pointer_down(body, input.pointer),
                    Press::Double => self.double_click(body),
                }
            }
        }

        self.pieces.tick(input.dt);
        let reset = self.button.update(input.pointer, input.primary);
        self.track_drag(input);
        schedule::advance(self, input.dt);
        self.clicks.tick(input.dt);

        if reset {
            self.reset_game();
        }
    }

    fn pointer_down(&mut self, body: BodyId, pointer: Vec2) {
        match body {
            BodyId::Card(card) => self.pick_up(card, pointer),
            BodyId::Stack(StackId::Deck) => self.click_deck(),
            BodyId::Stack(_) | BodyId::Button => {}
        }
    }

    fn double_click(&mut self, body: BodyId) {
        match body {
            BodyId::Card(card) => self.double_click_card(card),
            BodyId::Stack(StackId::Deck) => self.click_deck(),
            BodyId::Stack(_) | BodyId::Button => {}
        }
    }

    /// Visible pointer targets with their bounds and draw order, in
    /// registration order.
    pub(crate) fn bodies(&self) -> Vec<(BodyId, Rect, i32)> {
        let slot = |anchor: Vec2| Rect::new(anchor, self.card_size);
        let mut bodies = Vec::with_capacity(64);

        bodies.push((BodyId::Button, self.button.bounds(), 0));
        bodies.push((BodyId::Stack(StackId::Deck), slot(self.deck.anchor()), 0));
        for foundation in &self.foundations {
            bodies.push((BodyId::Stack(foundation.id()), slot(foundation.anchor()), 0));
        }
        for lane in &self.lanes {
            bodies.push((BodyId::Stack(lane.id()), slot(lane.anchor()), 0));
        }
        for (id, card) in self.pieces.cards.iter() {
            if card.visible {
                bodies.push((BodyId::Card(id), slot(card.position), card.z));
            }
        }
        bodies
    }

    /// The topmost body under `point`. Equal draw order goes to the body
    /// registered later.
    #[must_use]
    pub fn hit_test(&self, point: Vec2) -> Option<BodyId> {
        let mut best: Option<(i32, BodyId)> = None;
        for (body, bounds, z) in self.bodies() {
            if bounds.contains(point) && best.map_or(true, |(top, _)| z >= top) {
                best = Some((z, body));
            }
        }
        best.map(|(_, body)| body)
    }

    /// The first foundation that would accept `card`.
    #[must_use]
    pub fn foundation_for(&self, card: CardId) -> Option<StackId> {
        self.foundations
            .iter()
            .find(|f| f.can_accept(card, &self.pieces.cards))
            .map(Foundation::id)
    }

    /// Deal `card` from the pile onto a lane.
    pub fn place_in_lane(&mut self, lane: usize, card: CardId, face_up: bool) -> Result<(), TableError> {
        let target = self
            .lanes
            .get_mut(lane)
            .ok_or(TableError::UnknownStack(StackId::Lane(lane as u8)))?;
        self.deck.take(card, &mut self.pieces)?;
        target.add_card_facing(card, face_up, &mut self.pieces);
        Ok(())
    }

    /// Put `card` from the pile straight onto a foundation. No acceptance check.
    pub fn place_on_foundation(&mut self, index: usize, card: CardId) -> Result<(), TableError> {
        let target = self
            .foundations
            .get_mut(index)
            .ok_or(TableError::UnknownStack(StackId::Foundation(index as u8)))?;
        self.deck.take(card, &mut self.pieces)?;
        target.add_card(card, &mut self.pieces);
        Ok(())
    }

    /// Look up a stack by ID.
    pub fn stack(&self, id: StackId) -> Result<&dyn CardStack, TableError> {
        let stack: Option<&dyn CardStack> = match id {
            StackId::Deck => Some(&self.deck as &dyn CardStack),
            StackId::Lane(i) => self.lanes.get(i as usize).map(|l| l as &dyn CardStack),
            StackId::Foundation(i) => self.foundations.get(i as usize).map(|f| f as &dyn CardStack),
        };
        stack.ok_or(TableError::UnknownStack(id))
    }

    /// Draw list for the current frame, sorted by draw order.
    #[must_use]
    pub fn sprites(&self) -> Vec<SpriteDraw> {
        let mut draws = Vec::with_capacity(64);
        draws.push(SpriteDraw::new(BACKGROUND, Vec2::ZERO, i32::MIN, Rgba::GREEN));

        let (pile, tint) = if self.deck.is_exhausted() {
            (CARD_PLACEHOLDER, Rgba::PLACEHOLDER)
        } else {
            (CARD_BACK, Rgba::WHITE)
        };
        draws.push(SpriteDraw::new(pile, self.deck.anchor(), 0, tint));

        for foundation in &self.foundations {
            draws.push(SpriteDraw::new(
                CARD_PLACEHOLDER,
                foundation.anchor(),
                0,
                Rgba::PLACEHOLDER,
            ));
        }

        draws.push(SpriteDraw::new(
            self.button.resource(),
            self.button.bounds().origin,
            0,
            self.button.state().tint(),
        ));

        for (_, card) in self.pieces.cards.iter() {
            if card.visible {
                draws.push(SpriteDraw::new(card.resource_name(), card.position, card.z, Rgba::WHITE));
            }
        }

        draws.sort_by_key(|d| d.z);
        draws
    }

    /// No card is moving and no routine is pending.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.pieces.is_idle() && self.scheduler.is_idle()
    }

    #[must_use]
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seed of the stream the current game was shuffled with.
    #[must_use]
    pub fn game_seed(&self) -> u64 {
        self.game_seed
    }

    #[must_use]
    pub fn card_size(&self) -> Vec2 {
        self.card_size
    }

    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.pieces.cards
    }

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.pieces.cards.get(id)
    }

    #[must_use]
    pub fn card_id(&self, suit: Suit, rank: Rank) -> Option<CardId> {
        self.pieces.cards.find(suit, rank)
    }

    #[must_use]
    pub fn deck(&self) -> &DrawPile {
        &self.deck
    }

    #[must_use]
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    #[must_use]
    pub fn lane(&self, index: usize) -> Option<&Lane> {
        self.lanes.get(index)
    }

    #[must_use]
    pub fn foundations(&self) -> &[Foundation] {
        &self.foundations
    }

    #[must_use]
    pub fn foundation(&self, index: usize) -> Option<&Foundation> {
        self.foundations.get(index)
    }

    #[must_use]
    pub fn button(&self) -> &Button {
        &self.button
    }

    /// Cards currently being dragged, base first.
    #[must_use]
    pub fn held(&self) -> &[CardId] {
        &self.held
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Table")
            .field("phase", &self.phase)
            .field("game_seed", &self.game_seed)
            .field("deck", &self.deck.len())
            .field("held", &self.held)
            .field("scheduler", &self.scheduler)
            .finish_non_exhaustive()
    }
}
