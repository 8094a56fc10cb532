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
#![allow(clippy::cargo_common_metadata)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Animated Bloch sphere renderer for single-qubit gate sequences.
//!
//! Each gate is drawn as a rotation of an inner sphere about a fixed axis by
//! a fixed angle; no quantum state is simulated. Frames are built as SVG and
//! exported as an animated GIF, an MP4 video or a directory of SVG files. A
//! comparison mode plays two gate sequences side by side with a circuit
//! diagram and an equation between them.
//!
//! # Key entry points
//!
//! - [`engine::BlochEngine`] - renders gate lists to animation files
//! - [`gates::parse_gate_list`] - turns gate names into instructions
//! - [`options::Options`] - output, timing, camera, style and color settings
//! - [`animation::Sequencer`] - the fade/rotate/wait phase machine
//!
//! # Architecture
//!
//! The sequencer emits one [`animation::FrameState`] per frame into a
//! [`animation::FrameSink`]. For single animations that sink renders each
//! state with [`renderer::FrameRenderer`] and hands the drawing straight to
//! an [`export::FrameEncoder`]. Comparisons record both sides, pair the
//! frames, and render them through [`renderer::ComparisonRenderer`].

pub mod animation;
pub mod camera;
pub mod engine;
pub mod error;
pub mod export;
pub mod gates;
pub mod options;
pub mod renderer;
pub mod svg;
pub mod util;
