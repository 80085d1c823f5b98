//! Gesture model: modifiers, button chords, axes, and the bindings that map
//! gestures onto camera actions.
//!
//! In memory everything is a tagged structure ([`Gesture`], [`Binding`]).
//! The packed integer form lives only in [`code`], at the persistence
//! boundary.

mod binding;
mod classify;
/// Packed integer control codes for persistence.
pub mod code;
mod modifiers;

pub use binding::{
    Axis, Binding, ButtonChord, CameraAction, Gesture, Inversion,
};
pub(crate) use binding::BindingPatch;
pub use classify::{classify, resolve_chord};
pub use modifiers::{Modifier, Modifiers};
