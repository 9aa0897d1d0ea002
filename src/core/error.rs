//! Error taxonomy for the table.
//!
//! There are two kinds of failure, and neither is transient:
//! - **Construction errors**: an out-of-range rank, or a visual resource the
//!   catalog cannot resolve. These surface to whoever builds the card or table.
//! - **Invariant violations**: removing a card from a stack that does not hold it,
//!   or removing anything from an append-only foundation. These are programming
//!   errors in the caller.
//!
//! Ordinary play mistakes are not errors. A rejected drop just sends the card
//! back to where it came from.

use crate::cards::CardId;
use crate::core::config::StackId;

/// Errors returned by table, stack and card operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// A rank outside `1..=14`.
    RankOutOfRange(u8),

    /// The resource catalog has no entry for this name.
    MissingResource(String),

    /// The card is not a member of the stack it was addressed through.
    NotInStack { card: CardId, stack: StackId },

    /// Removal was attempted on a stack that only grows.
    AppendOnly(StackId),

    /// The stack id does not name a stack on this table.
    UnknownStack(StackId),

    /// The card belongs to no stack, usually because it is mid-move.
    Unowned(CardId),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableError::RankOutOfRange(value) => {
                write!(f, "rank {} is outside 1..=14", value)
            }
            TableError::MissingResource(name) => {
                write!(f, "visual resource '{}' is not in the catalog", name)
            }
            TableError::NotInStack { card, stack } => {
                write!(f, "{} is not held by {}", card, stack)
            }
            TableError::AppendOnly(stack) => {
                write!(f, "cards cannot be removed from {}", stack)
            }
            TableError::UnknownStack(stack) => write!(f, "{} does not exist", stack),
            TableError::Unowned(card) => write!(f, "{} is not in any stack", card),
        }
    }
}

impl std::error::Error for TableError {}
