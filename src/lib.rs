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
// Complexity limits (clippy default thresholds)
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

//! Camera and transform math kernel for real-time 3D renderers.
//!
//! Vantage turns per-frame input deltas into view and projection matrices
//! ready for upload as shader uniforms. It carries its own small set of
//! column-major math types rather than a general linear-algebra library.
//!
//! # Key entry points
//!
//! - [`math`] - `Vec3`, `Vec4`, `Mat4`, `Quat` and the look-at/perspective
//!   builders
//! - [`camera::FlyCamera`] - free-fly camera driven by yaw and pitch
//! - [`camera::ThirdPersonCamera`] - orbit camera trailing a focal point
//! - [`camera::CameraRig`] - both cameras plus the active mode; the
//!   explicit context a render loop drives once per frame
//! - [`input::InputProcessor`] - raw window events to camera commands
//! - [`options::Options`] - TOML-backed configuration
//!
//! # Frame flow
//!
//! Input events become [`camera::CameraCommand`]s, which mutate the active
//! camera's yaw, pitch and position. The Front/Right/Up basis is derived
//! from the latest angles, so all commands for a frame must be executed
//! before the view matrix is read.
//!
//! Degenerate numeric input (normalizing a zero vector, `znear == zfar`)
//! is a precondition violation that surfaces as NaN/Inf, never as an
//! error value.

pub mod camera;
pub mod error;
pub mod input;
pub mod math;
pub mod options;
pub mod util;

pub use error::VantageError;
