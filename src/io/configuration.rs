//! Puzzle constants and runtime configuration defaults

/// Edge length of every permutation table and composite
pub const GRID_SIZE: usize = 16;

/// Number of color planes in a buffer
pub const CHANNEL_COUNT: usize = 3;

/// Number of distinct values held by one permutation table
pub const TABLE_VALUES: usize = GRID_SIZE * GRID_SIZE;

// Pricing mirrors one fee per face
/// Cost of revealing a single face
pub const FACE_COST: u32 = 20;
/// Cost of revealing every face
pub const TOTAL_COST: u32 = FACE_COST * 3;

/// Minimum payment that reveals all six images
pub const FULL_DISPLAY_PAYMENT: u32 = TOTAL_COST;
/// Minimum payment that reveals a chosen subset of composites
pub const PARTIAL_DISPLAY_PAYMENT: u32 = FACE_COST;

/// Distinct rows a face may consume before the session is invalidated
pub const MAX_ROWS_PER_FACE: usize = 3;

/// Fill value for pixels exposed by rotation
pub const BACKGROUND_VALUE: u8 = 0;

// Preview output settings
/// Edge length in pixels of exported previews
pub const DEFAULT_PREVIEW_SIZE: u32 = 400;
/// Directory receiving exported previews
pub const DEFAULT_OUTPUT_DIR: &str = "puzzle_output";
/// Suffix added to preview filenames
pub const PREVIEW_SUFFIX: &str = "_phase";
