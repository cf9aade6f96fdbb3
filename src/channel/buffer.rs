//! Three-plane color buffers shared by tables, composites and previews

use crate::io::configuration::{CHANNEL_COUNT, GRID_SIZE};
use ndarray::Array3;

/// A (rows, cols, planes) grid of 8-bit channel values
///
/// Planes follow blue, green, red order: a face's table lives in the plane
/// given by `Face::plane`, and previews swap plane 0 and plane 2 on export.
pub type ColorBuffer = Array3<u8>;

/// One pixel as its three plane values
pub type Pixel = [u8; CHANNEL_COUNT];

/// Allocate a zero-filled buffer at the puzzle's fixed grid size
pub fn blank_buffer() -> ColorBuffer {
    ColorBuffer::zeros((GRID_SIZE, GRID_SIZE, CHANNEL_COUNT))
}

/// Write all planes of a single pixel
///
/// Positions outside the buffer are ignored.
pub fn write_pixel(buffer: &mut ColorBuffer, row: usize, col: usize, pixel: Pixel) {
    for (plane, value) in pixel.into_iter().enumerate() {
        if let Some(cell) = buffer.get_mut([row, col, plane]) {
            *cell = value;
        }
    }
}

/// Read all planes of a single pixel, or `None` outside the buffer
pub fn read_pixel(buffer: &ColorBuffer, row: usize, col: usize) -> Option<Pixel> {
    let mut pixel = [0; CHANNEL_COUNT];
    for (plane, value) in pixel.iter_mut().enumerate() {
        *value = *buffer.get([row, col, plane])?;
    }
    Some(pixel)
}

/// Count the planes that hold at least one non-zero value
pub fn active_planes(buffer: &ColorBuffer) -> usize {
    buffer
        .axis_iter(ndarray::Axis(2))
        .filter(|plane| plane.iter().any(|&value| value != 0))
        .count()
}
