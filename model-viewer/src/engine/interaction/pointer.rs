use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use constants::interaction::{BUTTON_LEFT, BUTTON_MIDDLE, BUTTON_RIGHT, WHEEL_PIXELS_PER_LINE};

use super::profile::ReleasePolicy;

/// Held mouse buttons, laid out like the DOM `MouseEvent.buttons` bitmask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonMask(u8);

impl ButtonMask {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(BUTTON_LEFT);
    pub const RIGHT: Self = Self(BUTTON_RIGHT);
    pub const MIDDLE: Self = Self(BUTTON_MIDDLE);
    pub const LEFT_RIGHT: Self = Self(BUTTON_LEFT | BUTTON_RIGHT);

    pub fn from_button(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::LEFT,
            MouseButton::Right => Self::RIGHT,
            MouseButton::Middle => Self::MIDDLE,
            _ => Self::NONE,
        }
    }

    pub fn with(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragMode {
    #[default]
    Rotate,
    Pan,
}

/// A cursor movement that should be applied to the pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDrag {
    pub mode: DragMode,
    pub delta: Vec2,
}

/// Mouse drag state machine. Pressing anchors the drag at the press
/// position, motion while dragging yields deltas, and releasing ends the
/// drag according to the active [`ReleasePolicy`].
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PointerState {
    /// Last known cursor position, tracked even when no button is held.
    pub cursor: Option<Vec2>,
    /// Cursor position the next drag delta is measured from.
    pub anchor: Option<Vec2>,
    pub held: ButtonMask,
    pub mode: DragMode,
    dragging: bool,
}

impl PointerState {
    /// Start a drag at `at`. With no known position the first motion
    /// anchors the drag instead of producing a delta.
    pub fn press(&mut self, held: ButtonMask, at: Option<Vec2>) {
        self.held = held;
        self.mode = if held == ButtonMask::LEFT_RIGHT {
            DragMode::Pan
        } else {
            DragMode::Rotate
        };
        if at.is_some() {
            self.cursor = at;
        }
        self.anchor = at;
        self.dragging = true;
    }

    pub fn release(&mut self, held: ButtonMask, policy: ReleasePolicy) {
        self.held = held;
        self.mode = DragMode::Rotate;
        let ends_drag = match policy {
            ReleasePolicy::AnyRelease => true,
            ReleasePolicy::AllReleased => held.is_empty(),
        };
        if ends_drag {
            self.dragging = false;
            self.anchor = None;
        }
    }

    /// Record a new cursor position, returning the drag to apply if a
    /// drag is in progress.
    pub fn motion(&mut self, cursor: Vec2) -> Option<PointerDrag> {
        self.cursor = Some(cursor);
        if !self.dragging {
            return None;
        }

        let anchor = self.anchor.replace(cursor)?;
        Some(PointerDrag {
            mode: self.mode,
            delta: cursor - anchor,
        })
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn reset(&mut self) {
        *self = Self {
            cursor: self.cursor,
            ..default()
        };
    }
}

/// Convert a wheel event into a DOM-style `deltaY` in pixels: positive when
/// scrolling towards the user. Bevy reports the opposite sign.
pub fn wheel_delta_pixels(event: &MouseWheel) -> f32 {
    let pixels = match event.unit {
        MouseScrollUnit::Line => event.y * WHEEL_PIXELS_PER_LINE,
        MouseScrollUnit::Pixel => event.y,
    };
    -pixels
}
