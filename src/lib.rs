//! Channel-permutation puzzle engine
//!
//! Three faces (R, G, B) each own a random permutation of 0-255 laid out on a
//! 16x16 grid. A coordinate picks one row per face, the rows are crossed into
//! three two-channel composites, each composite is rotated, and the results are
//! revealed according to a payment tier. Row usage per face is capped across a
//! session.

#![forbid(unsafe_code)]

/// Face tables, faces and the color buffers they live in
pub mod channel;
/// Composite derivation and rotation
pub mod compose;
/// Input/output operations, configuration and error handling
pub mod io;
/// Session state machine, payment gating and row usage tracking
pub mod session;

pub use io::error::{PuzzleError, Result};
