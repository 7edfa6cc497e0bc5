//! Host-window input: event types, modifier flags, and the mouse
//! translator that converts host events into scene events.

/// Host-window event types.
pub mod event;
/// Modifier flags and the shared modifier-translation helper.
pub mod modifiers;
/// Mouse-event translation.
pub mod mouse;

pub use event::{WindowButton, WindowInput};
pub use modifiers::{modifiers_of, Modifiers};
pub use mouse::MouseTranslator;
