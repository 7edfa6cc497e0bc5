//! Host-window input events consumed by the translators.
//!
//! These mirror what a host GUI toolkit's event queue delivers for an
//! embedded viewer widget. Positions use the host convention: origin at
//! the *top-left* corner, Y grows downward, in the widget's logical
//! coordinates. The translators convert to the scene convention.

use glam::Vec2;

use super::modifiers::Modifiers;

/// A mouse-related event as delivered by the host window's event queue.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowInput {
    /// Cursor moved to a new position.
    PointerMoved {
        /// Cursor position (top-left origin, Y down).
        position: Vec2,
        /// Modifier keys held during the move.
        modifiers: Modifiers,
    },
    /// A mouse button went down.
    ButtonPressed {
        /// Cursor position at the press.
        position: Vec2,
        /// Which host button went down.
        button: WindowButton,
        /// Modifier keys held at the press.
        modifiers: Modifiers,
    },
    /// A mouse button came back up.
    ButtonReleased {
        /// Cursor position at the release.
        position: Vec2,
        /// Which host button came up.
        button: WindowButton,
        /// Modifier keys held at the release.
        modifiers: Modifiers,
    },
    /// Second press of a double-click, as synthesized by host toolkits
    /// that detect multi-clicks themselves. Translated exactly like a
    /// press.
    DoubleClick {
        /// Cursor position at the click.
        position: Vec2,
        /// Which host button was double-clicked.
        button: WindowButton,
        /// Modifier keys held at the click.
        modifiers: Modifiers,
    },
    /// Scroll wheel rotated.
    Wheel {
        /// Cursor position when the wheel moved.
        position: Vec2,
        /// Rotation per axis: `x` horizontal, `y` vertical. Positive `y`
        /// is rotation away from the user.
        delta: Vec2,
        /// Whether the host reports inverted ("natural") scrolling.
        inverted: bool,
        /// Modifier keys held during the rotation.
        modifiers: Modifiers,
    },
    /// The hosting window or widget changed size.
    Resized {
        /// New width in the host's coordinates.
        width: u32,
        /// New height in the host's coordinates.
        height: u32,
    },
    /// Cursor entered the widget. Not translatable.
    CursorEntered,
    /// Cursor left the widget. Not translatable.
    CursorLeft,
}

/// Host-side mouse button identifier.
///
/// Kept open-ended: device-specific codes beyond the three standard
/// buttons arrive as `Back`, `Forward`, or `Other` and are mapped to
/// [`SceneButton::Any`](crate::scene::SceneButton::Any) by the
/// translator instead of being rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowButton {
    /// Primary (usually left) button.
    Primary,
    /// Secondary (usually right) button.
    Secondary,
    /// Middle button (wheel click).
    Middle,
    /// Navigation "back" side button.
    Back,
    /// Navigation "forward" side button.
    Forward,
    /// Any other device-specific button code.
    Other(u16),
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for WindowButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Primary,
            winit::event::MouseButton::Right => Self::Secondary,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Back => Self::Back,
            winit::event::MouseButton::Forward => Self::Forward,
            winit::event::MouseButton::Other(code) => Self::Other(code),
        }
    }
}

#[cfg(feature = "winit")]
impl From<winit::dpi::PhysicalSize<u32>> for WindowInput {
    fn from(size: winit::dpi::PhysicalSize<u32>) -> Self {
        Self::Resized {
            width: size.width,
            height: size.height,
        }
    }
}
