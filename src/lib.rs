// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code beyond the documented precondition assert
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]

//! Mouse-input translation for a scene-graph viewer embedded in a host
//! window.
//!
//! A 3D viewer widget receives mouse events in its host toolkit's
//! representation; the scene graph's camera and manipulation logic
//! consumes its own. This crate is the one-way adapter between the two:
//! it converts positions from the host's top-left-origin convention to
//! the scene's bottom-up convention (scaled for high-density displays),
//! maps host buttons and wheel rotation onto scene buttons, and carries
//! modifier flags across unchanged.
//!
//! # Key entry points
//!
//! - [`MouseTranslator`] - the translator owned by the hosting widget
//! - [`WindowInput`] - the host-side event representation it consumes
//! - [`scene`] - the scene-side events it produces
//!
//! # Integration
//!
//! The hosting widget owns one translator, forwards every mouse-related
//! event to [`MouseTranslator::translate`], and hands any returned
//! [`SceneEvent`] to the scene graph. The host must deliver a resize
//! before the first pointer event and push scale-factor changes via
//! [`MouseTranslator::set_device_pixel_ratio`]. Returned events borrow
//! the translator's two reused output objects, so they are valid only
//! until the next call.
//!
//! With the `winit` feature enabled, `From` conversions cover the winit
//! types a host event loop starts from; with `serde`, the plain event
//! types serialize for input capture and replay.

pub mod input;
pub mod scene;

pub use input::{modifiers_of, Modifiers, MouseTranslator, WindowButton, WindowInput};
pub use scene::{ButtonEvent, ButtonState, MotionEvent, SceneButton, SceneEvent};
