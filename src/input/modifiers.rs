//! Keyboard modifier flags attached to pointer events.

use super::event::WindowInput;

/// Modifier keys held at the time of an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Modifiers {
    /// Shift key.
    pub shift: bool,
    /// Control key.
    pub control: bool,
    /// Alt / option key.
    pub alt: bool,
    /// Meta / super / command key.
    pub meta: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };
}

/// Extract the modifier flags carried by a host event.
///
/// The translators call this for every event kind before filling in
/// position and state fields, so the output events always carry the
/// modifier state of the event that produced them. Kinds that carry no
/// modifier state (resize, enter/leave) report [`Modifiers::NONE`].
#[must_use]
pub fn modifiers_of(input: &WindowInput) -> Modifiers {
    match input {
        WindowInput::PointerMoved { modifiers, .. }
        | WindowInput::ButtonPressed { modifiers, .. }
        | WindowInput::ButtonReleased { modifiers, .. }
        | WindowInput::DoubleClick { modifiers, .. }
        | WindowInput::Wheel { modifiers, .. } => *modifiers,
        WindowInput::Resized { .. }
        | WindowInput::CursorEntered
        | WindowInput::CursorLeft => Modifiers::NONE,
    }
}

#[cfg(feature = "winit")]
impl From<winit::keyboard::ModifiersState> for Modifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            control: state.control_key(),
            alt: state.alt_key(),
            meta: state.super_key(),
        }
    }
}
