//! Translation of host-window mouse events into scene events.
//!
//! The `MouseTranslator` is the only thing that sits between the host
//! toolkit's mouse events and the scene graph's camera/manipulation
//! logic: one [`WindowInput`] in, at most one [`SceneEvent`] out.

use glam::Vec2;

use super::event::{WindowButton, WindowInput};
use super::modifiers::modifiers_of;
use crate::scene::{ButtonEvent, ButtonState, MotionEvent, SceneButton, SceneEvent};

/// Window height sentinel, replaced by the first resize event.
const HEIGHT_UNSET: f32 = -1.0;

/// Translates mouse events from the host window into scene events.
///
/// The translator owns one [`MotionEvent`] and one [`ButtonEvent`] and
/// mutates them in place on every call; [`translate`](Self::translate)
/// returns a borrow of whichever one applies. A returned event is
/// therefore valid only until the next call, which the borrow checker
/// enforces. Besides the two output events the translator tracks the
/// last reported window height (for the Y-axis flip) and the host's
/// device pixel ratio.
///
/// One translator is owned per viewer widget, living exactly as long as
/// the widget that feeds it.
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use sceneview_input::{Modifiers, MouseTranslator, SceneEvent, WindowInput};
///
/// let mut mouse = MouseTranslator::new();
///
/// // The host must report the widget size before any pointer event.
/// let _ = mouse.translate(&WindowInput::Resized { width: 800, height: 600 });
///
/// let moved = WindowInput::PointerMoved {
///     position: Vec2::new(10.0, 20.0),
///     modifiers: Modifiers::NONE,
/// };
/// let Some(SceneEvent::Motion(motion)) = mouse.translate(&moved) else {
///     unreachable!();
/// };
/// assert_eq!(motion.position, Vec2::new(10.0, 579.0));
/// ```
#[derive(Debug)]
pub struct MouseTranslator {
    /// Reused pointer-motion output event.
    motion: MotionEvent,
    /// Reused button-state output event.
    button: ButtonEvent,
    /// Height from the last resize, `HEIGHT_UNSET` until one arrives.
    window_height: f32,
    /// Scale factor for high-density displays.
    device_pixel_ratio: f32,
}

impl MouseTranslator {
    /// Create a translator with a device pixel ratio of 1.0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            motion: MotionEvent::default(),
            button: ButtonEvent::default(),
            window_height: HEIGHT_UNSET,
            device_pixel_ratio: 1.0,
        }
    }

    /// Create a translator with the hosting widget's device pixel ratio.
    #[must_use]
    pub fn with_device_pixel_ratio(ratio: f32) -> Self {
        Self {
            device_pixel_ratio: ratio,
            ..Self::new()
        }
    }

    /// Current device pixel ratio.
    #[must_use]
    pub fn device_pixel_ratio(&self) -> f32 {
        self.device_pixel_ratio
    }

    /// Update the device pixel ratio.
    ///
    /// The hosting widget calls this when the window moves to a display
    /// with a different scale factor.
    pub fn set_device_pixel_ratio(&mut self, ratio: f32) {
        self.device_pixel_ratio = ratio;
    }

    /// Translate one host event into at most one scene event.
    ///
    /// Motion, button, and wheel events yield a borrow of one of the two
    /// reused output events. `Resized` records the new window height and
    /// yields nothing. Kinds with no scene counterpart yield nothing.
    ///
    /// # Panics
    ///
    /// Panics if a position-bearing event arrives before the first
    /// `Resized` event has established the window height.
    pub fn translate(&mut self, input: &WindowInput) -> Option<SceneEvent<'_>> {
        match *input {
            WindowInput::PointerMoved { position, .. } => {
                Some(self.pointer_moved(input, position))
            }
            // The host delivers a double-click inside a press/release
            // series, so it carries the same payload as the press.
            WindowInput::ButtonPressed { position, button, .. }
            | WindowInput::DoubleClick { position, button, .. } => {
                Some(self.button_changed(input, position, button, ButtonState::Down))
            }
            WindowInput::ButtonReleased { position, button, .. } => {
                Some(self.button_changed(input, position, button, ButtonState::Up))
            }
            WindowInput::Wheel {
                position,
                delta,
                inverted,
                ..
            } => Some(self.wheel_rotated(input, position, delta, inverted)),
            WindowInput::Resized { height, .. } => {
                self.window_height = height as f32;
                None
            }
            WindowInput::CursorEntered | WindowInput::CursorLeft => None,
        }
    }

    fn pointer_moved(&mut self, input: &WindowInput, position: Vec2) -> SceneEvent<'_> {
        self.motion.modifiers = modifiers_of(input);
        let pos = self.to_scene(position);
        self.motion.position = pos;
        self.button.position = pos;
        SceneEvent::Motion(&self.motion)
    }

    fn button_changed(
        &mut self,
        input: &WindowInput,
        position: Vec2,
        button: WindowButton,
        state: ButtonState,
    ) -> SceneEvent<'_> {
        self.button.modifiers = modifiers_of(input);
        let pos = self.to_scene(position);
        self.motion.position = pos;
        self.button.position = pos;
        self.button.state = state;
        self.button.button = match button {
            WindowButton::Primary => SceneButton::Button1,
            WindowButton::Secondary => SceneButton::Button2,
            WindowButton::Middle => SceneButton::Button3,
            other => {
                log::info!("unhandled mouse button {other:?}, reporting it as Any");
                SceneButton::Any
            }
        };
        SceneEvent::Button(&self.button)
    }

    fn wheel_rotated(
        &mut self,
        input: &WindowInput,
        position: Vec2,
        delta: Vec2,
        inverted: bool,
    ) -> SceneEvent<'_> {
        self.button.modifiers = modifiers_of(input);
        let pos = self.to_scene(position);
        self.motion.position = pos;
        self.button.position = pos;

        // Some hosts route wheel rotation to the horizontal axis while
        // ALT is held; read that axis when the vertical one is silent.
        let mut rotation = delta.y;
        if self.button.modifiers.alt && rotation == 0.0 {
            rotation = delta.x;
        }

        // Positive rotation is away from the user. Inverted ("natural")
        // scrolling swaps the pseudo-button pair; zero rotation leaves
        // the button field at its previous value.
        if rotation > 0.0 {
            self.button.button = if inverted {
                SceneButton::Button5
            } else {
                SceneButton::Button4
            };
        } else if rotation < 0.0 {
            self.button.button = if inverted {
                SceneButton::Button4
            } else {
                SceneButton::Button5
            };
        }

        // Wheel pulses are momentary: always a press, never a release.
        self.button.state = ButtonState::Down;
        SceneEvent::Button(&self.button)
    }

    /// Convert a host position (top-left origin, Y down) to a scene
    /// position (bottom-left origin, Y up), scaled for display density.
    fn to_scene(&self, position: Vec2) -> Vec2 {
        assert!(
            self.window_height >= 0.0,
            "mouse event translated before the first resize event"
        );
        Vec2::new(position.x, self.window_height - position.y - 1.0) * self.device_pixel_ratio
    }
}

impl Default for MouseTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Modifiers;

    fn sized(height: u32) -> MouseTranslator {
        let mut translator = MouseTranslator::new();
        let _ = translator.translate(&WindowInput::Resized { width: 800, height });
        translator
    }

    fn moved(x: f32, y: f32) -> WindowInput {
        WindowInput::PointerMoved {
            position: Vec2::new(x, y),
            modifiers: Modifiers::NONE,
        }
    }

    fn pressed(button: WindowButton) -> WindowInput {
        WindowInput::ButtonPressed {
            position: Vec2::new(100.0, 100.0),
            button,
            modifiers: Modifiers::NONE,
        }
    }

    fn released(button: WindowButton) -> WindowInput {
        WindowInput::ButtonReleased {
            position: Vec2::new(100.0, 100.0),
            button,
            modifiers: Modifiers::NONE,
        }
    }

    fn wheel(delta: Vec2, inverted: bool, modifiers: Modifiers) -> WindowInput {
        WindowInput::Wheel {
            position: Vec2::new(100.0, 100.0),
            delta,
            inverted,
            modifiers,
        }
    }

    fn motion_of<'a>(event: Option<SceneEvent<'a>>) -> &'a MotionEvent {
        match event {
            Some(SceneEvent::Motion(motion)) => motion,
            other => unreachable!("expected a motion event, got {other:?}"),
        }
    }

    fn button_of<'a>(event: Option<SceneEvent<'a>>) -> &'a ButtonEvent {
        match event {
            Some(SceneEvent::Button(button)) => button,
            other => unreachable!("expected a button event, got {other:?}"),
        }
    }

    #[test]
    fn test_resize_produces_no_event() {
        let mut translator = MouseTranslator::new();
        let resized = WindowInput::Resized {
            width: 800,
            height: 600,
        };
        assert!(translator.translate(&resized).is_none());
    }

    #[test]
    fn test_move_flips_y() {
        let mut translator = sized(600);
        let motion = motion_of(translator.translate(&moved(10.0, 20.0)));
        assert_eq!(motion.position, Vec2::new(10.0, 579.0));
    }

    #[test]
    fn test_move_scales_by_device_pixel_ratio() {
        let mut translator = MouseTranslator::with_device_pixel_ratio(2.0);
        let _ = translator.translate(&WindowInput::Resized {
            width: 800,
            height: 600,
        });
        let motion = motion_of(translator.translate(&moved(10.0, 20.0)));
        assert_eq!(motion.position, Vec2::new(20.0, 1158.0));
    }

    #[test]
    #[should_panic(expected = "before the first resize")]
    fn test_move_before_resize_panics() {
        let mut translator = MouseTranslator::new();
        let _ = translator.translate(&moved(10.0, 20.0));
    }

    #[test]
    fn test_resize_updates_following_positions() {
        let mut translator = sized(600);
        let first = motion_of(translator.translate(&moved(10.0, 20.0))).position;
        assert_eq!(first, Vec2::new(10.0, 579.0));

        let _ = translator.translate(&WindowInput::Resized {
            width: 800,
            height: 300,
        });
        let second = motion_of(translator.translate(&moved(10.0, 20.0))).position;
        assert_eq!(second, Vec2::new(10.0, 279.0));
    }

    #[test]
    fn test_press_maps_standard_buttons() {
        let mut translator = sized(600);
        let cases = [
            (WindowButton::Primary, SceneButton::Button1),
            (WindowButton::Secondary, SceneButton::Button2),
            (WindowButton::Middle, SceneButton::Button3),
        ];
        for (host, scene) in cases {
            let event = button_of(translator.translate(&pressed(host)));
            assert_eq!(event.button, scene);
            assert_eq!(event.state, ButtonState::Down);
        }
    }

    #[test]
    fn test_press_then_release_keeps_button() {
        let mut translator = sized(600);

        let down = button_of(translator.translate(&pressed(WindowButton::Secondary)));
        assert_eq!(down.button, SceneButton::Button2);
        assert_eq!(down.state, ButtonState::Down);

        let up = button_of(translator.translate(&released(WindowButton::Secondary)));
        assert_eq!(up.button, SceneButton::Button2);
        assert_eq!(up.state, ButtonState::Up);
    }

    #[test]
    fn test_double_click_is_a_press() {
        let mut translator = sized(600);
        let event = button_of(translator.translate(&WindowInput::DoubleClick {
            position: Vec2::new(5.0, 5.0),
            button: WindowButton::Primary,
            modifiers: Modifiers::NONE,
        }));
        assert_eq!(event.button, SceneButton::Button1);
        assert_eq!(event.state, ButtonState::Down);
    }

    #[test]
    fn test_unknown_button_maps_to_any() {
        let mut translator = sized(600);
        let event = button_of(translator.translate(&pressed(WindowButton::Other(0x99))));
        assert_eq!(event.button, SceneButton::Any);
        assert_eq!(event.state, ButtonState::Down);

        let event = button_of(translator.translate(&pressed(WindowButton::Back)));
        assert_eq!(event.button, SceneButton::Any);
    }

    #[test]
    fn test_wheel_vertical_sign_picks_pseudo_button() {
        let mut translator = sized(600);

        let away = button_of(translator.translate(&wheel(
            Vec2::new(0.0, 120.0),
            false,
            Modifiers::NONE,
        )));
        assert_eq!(away.button, SceneButton::Button4);
        assert_eq!(away.state, ButtonState::Down);

        let toward = button_of(translator.translate(&wheel(
            Vec2::new(0.0, -120.0),
            false,
            Modifiers::NONE,
        )));
        assert_eq!(toward.button, SceneButton::Button5);
        assert_eq!(toward.state, ButtonState::Down);
    }

    #[test]
    fn test_wheel_inverted_swaps_pseudo_buttons() {
        let mut translator = sized(600);

        let away = button_of(translator.translate(&wheel(
            Vec2::new(0.0, 120.0),
            true,
            Modifiers::NONE,
        )));
        assert_eq!(away.button, SceneButton::Button5);

        let toward = button_of(translator.translate(&wheel(
            Vec2::new(0.0, -120.0),
            true,
            Modifiers::NONE,
        )));
        assert_eq!(toward.button, SceneButton::Button4);
    }

    #[test]
    fn test_wheel_alt_falls_back_to_horizontal_axis() {
        let mut translator = sized(600);
        let alt = Modifiers {
            alt: true,
            ..Modifiers::NONE
        };

        let event = button_of(translator.translate(&wheel(Vec2::new(120.0, 0.0), false, alt)));
        assert_eq!(event.button, SceneButton::Button4);

        let event = button_of(translator.translate(&wheel(Vec2::new(-120.0, 0.0), false, alt)));
        assert_eq!(event.button, SceneButton::Button5);
    }

    #[test]
    fn test_wheel_ignores_horizontal_axis_without_alt() {
        let mut translator = sized(600);

        let _ = translator.translate(&wheel(Vec2::new(0.0, 120.0), false, Modifiers::NONE));
        let event = button_of(translator.translate(&wheel(
            Vec2::new(-120.0, 0.0),
            false,
            Modifiers::NONE,
        )));
        // No effective rotation: the button field keeps its last value.
        assert_eq!(event.button, SceneButton::Button4);
        assert_eq!(event.state, ButtonState::Down);
    }

    #[test]
    fn test_position_mirrored_onto_both_events() {
        let mut translator = sized(600);

        let _ = translator.translate(&moved(10.0, 20.0));
        assert_eq!(translator.motion.position, translator.button.position);

        let _ = translator.translate(&pressed(WindowButton::Primary));
        assert_eq!(translator.motion.position, translator.button.position);
        assert_eq!(translator.button.position, Vec2::new(100.0, 499.0));

        let _ = translator.translate(&wheel(Vec2::new(0.0, 120.0), false, Modifiers::NONE));
        assert_eq!(translator.motion.position, translator.button.position);
    }

    #[test]
    fn test_modifiers_stamped_before_state() {
        let mut translator = sized(600);
        let shifted = Modifiers {
            shift: true,
            control: true,
            ..Modifiers::NONE
        };

        let motion = motion_of(translator.translate(&WindowInput::PointerMoved {
            position: Vec2::new(1.0, 1.0),
            modifiers: shifted,
        }));
        assert_eq!(motion.modifiers, shifted);

        let event = button_of(translator.translate(&WindowInput::ButtonPressed {
            position: Vec2::new(1.0, 1.0),
            button: WindowButton::Primary,
            modifiers: shifted,
        }));
        assert_eq!(event.modifiers, shifted);
    }

    #[test]
    fn test_enter_and_leave_are_not_translated() {
        let mut translator = sized(600);
        assert!(translator.translate(&WindowInput::CursorEntered).is_none());
        assert!(translator.translate(&WindowInput::CursorLeft).is_none());
    }
}
