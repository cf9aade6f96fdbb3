//! Face tables and the color buffers that hold them

/// Buffer alias and pixel helpers
pub mod buffer;
/// Face and composite identifiers
pub mod face;
/// Seeded permutation table generation
pub mod permutation;

pub use buffer::ColorBuffer;
pub use face::{CompositeKind, Face};
pub use permutation::{ChannelTables, PermutationTable};
