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
// Complexity limits (thresholds in clippy.toml)
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

//! Procedural placement and idle motion for decorative vector
//! illustrations.
//!
//! Drift reads a configuration describing which illustrations to draw,
//! places each one (explicitly or at random within a buffered canvas), and
//! then periodically nudges every element's transform to give the scene a
//! gentle ambient "wobble". Elements that drift past the buffered edge are
//! wrapped around to the opposite side.
//!
//! # Key entry points
//!
//! - [`engine::StageBuilder`] / [`engine::Stage`] - draws a config and
//!   drives the wobble timer
//! - [`options::Config`] - configuration (canvas, render settings,
//!   illustration entries), loadable from TOML or JSON
//! - [`surface::Surface`] - the vector-graphics collaborator everything is
//!   drawn on; [`surface::MemorySurface`] is a headless implementation
//! - [`shapes::Sources`] - typed constructor registries for named
//!   illustration types
//! - [`animation`] - delta computation, overflow reset and tweening
//!
//! # Architecture
//!
//! Everything runs on the caller's thread. The host calls
//! [`engine::Stage::frame`] from its own loop with the current time and its
//! visibility state; the stage advances in-flight tweens and, when the tick
//! timer is due and the host is active, runs one wobble tick. Each drawn
//! element (or each atom of a composite element) carries a typed
//! [`scene::AnimState`], and a new tween is only started from `Idle`.

pub mod animation;
pub mod engine;
pub mod error;
pub mod options;
pub mod scene;
pub mod shapes;
pub mod surface;
pub mod util;
