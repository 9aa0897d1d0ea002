//! Per-frame input consumed from the host.
//!
//! The host polls its windowing/input backend once per frame and hands the
//! table a `FrameInput`. The frame's `dt` is the only time base for both
//! animations and routines.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::geometry::Vec2;

/// Edge and level state of the primary pointer button for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerButton {
    /// The button went down this frame.
    pub pressed: bool,
    /// The button went up this frame.
    pub released: bool,
    /// The button is currently held.
    pub down: bool,
}

impl PointerButton {
    /// Button went down this frame and is held.
    #[must_use]
    pub const fn press() -> Self {
        Self {
            pressed: true,
            released: false,
            down: true,
        }
    }

    /// Button is held with no edge.
    #[must_use]
    pub const fn hold() -> Self {
        Self {
            pressed: false,
            released: false,
            down: true,
        }
    }

    /// Button went up this frame.
    #[must_use]
    pub const fn release() -> Self {
        Self {
            pressed: false,
            released: true,
            down: false,
        }
    }

    /// Button is up with no edge.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            pressed: false,
            released: false,
            down: false,
        }
    }
}

/// Everything the table needs from the host for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameInput {
    /// Seconds elapsed since the previous frame.
    pub dt: f32,
    /// Pointer position in board pixels.
    pub pointer: Vec2,
    /// Primary button state.
    pub primary: PointerButton,
}

impl FrameInput {
    #[must_use]
    pub const fn new(dt: f32, pointer: Vec2, primary: PointerButton) -> Self {
        Self { dt, pointer, primary }
    }

    /// A frame with the pointer resting at `pointer` and no button activity.
    #[must_use]
    pub const fn idle(dt: f32, pointer: Vec2) -> Self {
        Self::new(dt, pointer, PointerButton::idle())
    }
}

/// What a press on a body turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Press {
    /// First press. The body's double-click window is now open.
    Single,
    /// Second press inside the open window.
    Double,
}

/// Per-body double-click timers.
///
/// A press on a body whose window is open is a double-click and leaves the
/// window running. Any other press opens a new window and counts as a
/// single press.
#[derive(Clone, Debug)]
pub struct ClickTimers<K> {
    window: f32,
    open: FxHashMap<K, f32>,
}

impl<K: Copy + Eq + Hash> ClickTimers<K> {
    /// Create timers with the given window in seconds.
    #[must_use]
    pub fn new(window: f32) -> Self {
        Self {
            window,
            open: FxHashMap::default(),
        }
    }

    /// Register a press on `body`.
    pub fn press(&mut self, body: K) -> Press {
        if self.open.contains_key(&body) {
            Press::Double
        } else {
            self.open.insert(body, self.window);
            Press::Single
        }
    }

    /// Advance all open windows by `dt`, closing the expired ones.
    pub fn tick(&mut self, dt: f32) {
        self.open.retain(|_, remaining| {
            *remaining -= dt;
            *remaining > 0.0
        });
    }

    /// Close every window.
    pub fn clear(&mut self) {
        self.open.clear();
    }

    /// Whether `body` currently has an open window.
    #[must_use]
    pub fn is_open(&self, body: K) -> bool {
        self.open.contains_key(&body)
    }
}
