//! Center-anchored rotation of color buffers
//!
//! Rotation uses inverse mapping: every destination pixel is traced back into
//! the source and sampled bilinearly. Sources outside the image read as the
//! background value. Quarter turns use exact trigonometry so they reduce to
//! lossless pixel permutations.

use crate::channel::buffer::ColorBuffer;
use crate::io::configuration::BACKGROUND_VALUE;
use num_traits::ToPrimitive;
use std::fmt;
use std::str::FromStr;

/// Counter-clockwise rotation in whole degrees
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RotationAngle(i32);

impl RotationAngle {
    /// No rotation
    pub const ZERO: Self = Self(0);
    /// The angles a puzzle operator is expected to choose from
    pub const QUARTER_TURNS: [Self; 4] = [Self(0), Self(90), Self(180), Self(270)];

    /// Wrap a raw degree value
    pub const fn new(degrees: i32) -> Self {
        Self(degrees)
    }

    /// Raw degree value as supplied
    pub const fn degrees(self) -> i32 {
        self.0
    }

    /// Degrees folded into [0, 360)
    pub const fn normalized(self) -> i32 {
        self.0.rem_euclid(360)
    }

    /// Whether this angle is a multiple of 90 degrees
    pub const fn is_quarter_turn(self) -> bool {
        self.0.rem_euclid(90) == 0
    }

    fn sin_cos(self) -> (f64, f64) {
        match self.normalized() {
            0 => (0.0, 1.0),
            90 => (1.0, 0.0),
            180 => (0.0, -1.0),
            270 => (-1.0, 0.0),
            degrees => f64::from(degrees).to_radians().sin_cos(),
        }
    }
}

impl fmt::Display for RotationAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}

impl FromStr for RotationAngle {
    type Err = std::num::ParseIntError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.trim().parse().map(Self)
    }
}

/// Rotate a buffer about its geometric center
///
/// The output has the same dimensions as the input. Pixels whose source lies
/// outside the input are filled with [`BACKGROUND_VALUE`].
pub fn rotate(image: &ColorBuffer, angle: RotationAngle) -> ColorBuffer {
    let (rows, cols, planes) = image.dim();
    let center_row = (rows as f64 - 1.0) / 2.0;
    let center_col = (cols as f64 - 1.0) / 2.0;
    let (sin, cos) = angle.sin_cos();

    let mut rotated = ColorBuffer::from_elem(image.raw_dim(), BACKGROUND_VALUE);

    for row in 0..rows {
        let dy = row as f64 - center_row;
        for col in 0..cols {
            let dx = col as f64 - center_col;

            // Inverse of a counter-clockwise turn with rows growing downward
            let source_col = cos.mul_add(dx, -sin * dy) + center_col;
            let source_row = sin.mul_add(dx, cos * dy) + center_row;

            for plane in 0..planes {
                if let Some(cell) = rotated.get_mut([row, col, plane]) {
                    *cell = sample_bilinear(image, source_row, source_col, plane);
                }
            }
        }
    }

    rotated
}

fn sample_bilinear(image: &ColorBuffer, row: f64, col: f64, plane: usize) -> u8 {
    let row_floor = row.floor();
    let col_floor = col.floor();
    let row_weight = row - row_floor;
    let col_weight = col - col_floor;

    let fetch = |r: f64, c: f64| -> f64 {
        if r < 0.0 || c < 0.0 {
            return f64::from(BACKGROUND_VALUE);
        }
        image
            .get([r as usize, c as usize, plane])
            .map_or(f64::from(BACKGROUND_VALUE), |&value| f64::from(value))
    };

    let top = fetch(row_floor, col_floor).mul_add(
        1.0 - col_weight,
        fetch(row_floor, col_floor + 1.0) * col_weight,
    );
    let bottom = fetch(row_floor + 1.0, col_floor).mul_add(
        1.0 - col_weight,
        fetch(row_floor + 1.0, col_floor + 1.0) * col_weight,
    );
    let value = top.mul_add(1.0 - row_weight, bottom * row_weight);

    value
        .round()
        .clamp(0.0, f64::from(u8::MAX))
        .to_u8()
        .unwrap_or(BACKGROUND_VALUE)
}
