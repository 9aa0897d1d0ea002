//! New-game button.

use crate::core::geometry::{Rect, Vec2};
use crate::core::input::PointerButton;
use crate::core::resources::{Rgba, BUTTON};

/// Text drawn on the button.
pub const LABEL: &str = "NEW GAME";

/// Visual state of the button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonState {
    Regular,
    Hover,
    Click,
    Disabled,
}

impl ButtonState {
    /// Face tint for this state.
    #[must_use]
    pub const fn tint(self) -> Rgba {
        match self {
            ButtonState::Regular => Rgba::new(0, 41, 138, 255),
            ButtonState::Hover => Rgba::new(9, 143, 253, 255),
            ButtonState::Click => Rgba::new(197, 97, 0, 255),
            ButtonState::Disabled => Rgba::new(127, 127, 127, 127),
        }
    }

    /// Label colour for this state.
    #[must_use]
    pub const fn label_color(self) -> Rgba {
        match self {
            ButtonState::Disabled => Rgba::new(127, 127, 127, 127),
            _ => Rgba::WHITE,
        }
    }
}

/// A clickable sprite.
///
/// Pressing over the button arms it. Releasing over an armed button fires
/// it. Any release disarms. A disabled button ignores input.
#[derive(Clone, Debug)]
pub struct Button {
    bounds: Rect,
    enabled: bool,
    hovered: bool,
    armed: bool,
}

impl Button {
    #[must_use]
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            bounds: Rect::new(position, size),
            enabled: true,
            hovered: false,
            armed: false,
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[must_use]
    pub const fn resource(&self) -> &'static str {
        BUTTON
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        LABEL
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.armed = false;
        }
    }

    #[must_use]
    pub fn state(&self) -> ButtonState {
        if !self.enabled {
            ButtonState::Disabled
        } else if self.hovered && self.armed {
            ButtonState::Click
        } else if self.hovered {
            ButtonState::Hover
        } else {
            ButtonState::Regular
        }
    }

    /// Feed one frame of pointer input. Returns `true` when the button fires.
    pub fn update(&mut self, pointer: Vec2, primary: PointerButton) -> bool {
        if !self.enabled {
            self.hovered = false;
            self.armed = false;
            return false;
        }

        self.hovered = self.bounds.contains(pointer);
        if primary.pressed && self.hovered {
            self.armed = true;
        }

        let fired = primary.released && self.hovered && self.armed;
        if primary.released {
            self.armed = false;
        }
        fired
    }
}
