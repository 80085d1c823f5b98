// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Trackpad-friendly scene camera control.
//!
//! Orbitpad maps configurable input gestures (modifier keys, mouse button
//! chord, pointer or scroll axis) onto orbit, pan and zoom of a host-owned
//! camera, with per-action axis inversion and tunable sensitivities that
//! persist to a flat key-value store.
//!
//! # Key entry points
//!
//! - [`session::Session`] - per-viewport event cycle with lazy settings load
//!   and save-while-editing
//! - [`camera::CameraOperator`] - turns one classified event into at most one
//!   camera transform
//! - [`settings::Settings`] - bindings and sensitivities, with key-value and
//!   TOML persistence
//! - [`gesture::code`] - packed integer codes for persisted bindings
//!
//! # Architecture
//!
//! Everything runs synchronously on the host's input thread. Raw
//! [`input::InputEvent`]s fold into [`input::InputSnapshot`]s, the snapshot
//! classifies to a [`gesture::Gesture`], and the operator checks it against
//! the rotate, pan and zoom bindings in that order. Scroll and pointer-move
//! events are always reported consumed so the host skips its own handling.

pub mod camera;
pub mod error;
pub mod gesture;
pub mod input;
pub mod panel;
pub mod session;
pub mod settings;

pub use camera::{CameraOperator, CameraPose, Viewport, ViewportHost};
pub use error::OrbitpadError;
pub use session::Session;
pub use settings::Settings;
