//! Scene-graph event model produced by the translators.
//!
//! These are the viewer-side counterparts of the host window's mouse
//! events. Positions are in physical pixels with the origin at the
//! *bottom-left* corner of the viewport (Y grows upward), which is what
//! the scene graph's camera and manipulation logic expects.

use glam::Vec2;

use crate::input::Modifiers;

/// Pointer-motion event: the cursor moved to a new position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionEvent {
    /// Cursor position in scene coordinates (bottom-left origin,
    /// physical pixels).
    pub position: Vec2,
    /// Modifier keys held when the event was generated.
    pub modifiers: Modifiers,
}

/// Button-state event: a button went down or up, or the wheel rotated.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ButtonEvent {
    /// Cursor position in scene coordinates (bottom-left origin,
    /// physical pixels).
    pub position: Vec2,
    /// Modifier keys held when the event was generated.
    pub modifiers: Modifiers,
    /// Which scene button changed.
    pub button: SceneButton,
    /// Whether the button went down or came up.
    pub state: ButtonState,
}

/// Scene-side button identifier.
///
/// `Button4` and `Button5` are the wheel pseudo-buttons (rotation away
/// from and toward the user). `Any` stands in for host buttons with no
/// scene equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SceneButton {
    /// Primary (usually left) button.
    Button1,
    /// Secondary (usually right) button.
    Button2,
    /// Tertiary (middle / wheel click) button.
    Button3,
    /// Wheel rotated away from the user.
    Button4,
    /// Wheel rotated toward the user.
    Button5,
    /// Unrecognized host button.
    #[default]
    Any,
}

/// Button transition direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ButtonState {
    /// The button was pressed (wheel pulses always report this).
    Down,
    /// The button was released.
    #[default]
    Up,
}

/// A translated event, borrowed from the translator that produced it.
///
/// The two underlying events are owned by the translator and reused
/// across calls; the borrow carried here makes a `SceneEvent` valid only
/// until the next translation call. Copy the payload out if it must
/// outlive that.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent<'a> {
    /// Pointer motion.
    Motion(&'a MotionEvent),
    /// Button state change, including wheel pulses.
    Button(&'a ButtonEvent),
}

impl SceneEvent<'_> {
    /// Cursor position carried by either variant.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        match self {
            Self::Motion(event) => event.position,
            Self::Button(event) => event.position,
        }
    }

    /// Modifier flags carried by either variant.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        match self {
            Self::Motion(event) => event.modifiers,
            Self::Button(event) => event.modifiers,
        }
    }
}
