//! Drop-target resolution.
//!
//! Resolution is a pure function over a snapshot of the bodies on the table,
//! so it can be tested and benchmarked without a live table. The table builds
//! the snapshot; this module only applies the placement rules and the
//! nearest-centre tiebreak.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Color, Rank};
use crate::core::geometry::Rect;
use crate::core::StackId;

/// Anything on the table that can be hit by the pointer or a dragged card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyId {
    Button,
    Stack(StackId),
    Card(CardId),
}

/// The dragged card being resolved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Probe {
    pub card: CardId,
    pub bounds: Rect,
    pub color: Color,
    pub rank: Rank,
    /// More than one card is being dragged.
    pub multi: bool,
    /// The dragged run descends with alternating colours.
    pub run_valid: bool,
}

/// What a candidate body is, as far as placement rules care.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TargetKind {
    Card {
        /// The lane this card tops, if it is the top card of a lane.
        lane_top: Option<StackId>,
        color: Color,
        rank: Rank,
        face_up: bool,
    },
    Lane {
        stack: StackId,
        empty: bool,
    },
    Foundation {
        stack: StackId,
        accepts: bool,
    },
    /// Bodies that never take cards (the draw pile, the button).
    Other,
}

/// One body in the snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Candidate {
    pub body: BodyId,
    pub bounds: Rect,
    pub kind: TargetKind,
}

impl Candidate {
    /// The stack a drop on this body lands in, if the drop is legal.
    fn target_for(&self, probe: &Probe) -> Option<StackId> {
        match self.kind {
            TargetKind::Card {
                lane_top: Some(lane),
                color,
                rank,
                face_up: true,
            } if color != probe.color && probe.rank.precedes(rank) => Some(lane),
            TargetKind::Lane { stack, empty: true } if probe.rank == Rank::KING => Some(stack),
            TargetKind::Foundation {
                stack,
                accepts: true,
            } if !probe.multi => Some(stack),
            _ => None,
        }
    }
}

/// Find the stack the probe should be dropped onto.
///
/// Only bodies overlapping the probe are considered, excluding the probe's
/// own card. Of the legal targets, the one whose centre is nearest the
/// probe's centre wins; on equal distance the earlier candidate wins. A
/// multi-card run that is not a valid sequence has no targets.
#[must_use]
pub fn find_drop_destination(probe: &Probe, candidates: &[Candidate]) -> Option<StackId> {
    if probe.multi && !probe.run_valid {
        return None;
    }

    let center = probe.bounds.center();
    let mut best: Option<(f32, StackId)> = None;

    for candidate in candidates {
        if candidate.body == BodyId::Card(probe.card) || !candidate.bounds.overlaps(&probe.bounds) {
            continue;
        }
        let Some(target) = candidate.target_for(probe) else {
            continue;
        };
        let distance = center.distance(candidate.bounds.center());
        if best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, target));
        }
    }

    best.map(|(_, target)| target)
}
