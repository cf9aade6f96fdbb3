//! Composite construction from selected table rows

/// Coordinate-driven cross-channel composites
pub mod intensity;
/// Center-anchored rotation with bilinear sampling
pub mod rotation;
