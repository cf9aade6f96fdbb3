//! Cross-channel composite derivation
//!
//! A coordinate selects one row from each face table. Pairs of those rows are
//! crossed against each other to form three two-plane images:
//!
//! - `RG[p, q] = (R[p], G[q], 0)`
//! - `GB[q, p] = (0, G[q], B[p])`, written transposed
//! - `BR[p, q] = (R[p], 0, B[q])`
//!
//! The differing index orders make the three composites visually distinct even
//! though they share source rows.

use crate::channel::buffer::{ColorBuffer, blank_buffer, write_pixel};
use crate::channel::face::{CompositeKind, Face};
use crate::channel::permutation::ChannelTables;
use crate::compose::rotation::{RotationAngle, rotate};
use crate::io::configuration::GRID_SIZE;
use crate::io::error::{Result, check_index};
use std::fmt;

/// Row selection into the red, green and blue tables
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    x: usize,
    y: usize,
    z: usize,
}

impl Coordinate {
    /// Create a coordinate, rejecting components outside the grid
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfRange` naming the first offending component
    pub fn new(x: usize, y: usize, z: usize) -> Result<Self> {
        Ok(Self {
            x: check_index("x", x, GRID_SIZE)?,
            y: check_index("y", y, GRID_SIZE)?,
            z: check_index("z", z, GRID_SIZE)?,
        })
    }

    /// Red table row
    pub const fn x(self) -> usize {
        self.x
    }

    /// Green table row
    pub const fn y(self) -> usize {
        self.y
    }

    /// Blue table row
    pub const fn z(self) -> usize {
        self.z
    }

    /// Row this coordinate consumes from the given face
    pub const fn row_for(self, face: Face) -> usize {
        match face {
            Face::Red => self.x,
            Face::Green => self.y,
            Face::Blue => self.z,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// The three composites produced for one coordinate
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Composites {
    rg: ColorBuffer,
    gb: ColorBuffer,
    br: ColorBuffer,
}

impl Composites {
    /// Composite of the given kind
    pub const fn get(&self, kind: CompositeKind) -> &ColorBuffer {
        match kind {
            CompositeKind::Rg => &self.rg,
            CompositeKind::Gb => &self.gb,
            CompositeKind::Br => &self.br,
        }
    }

    /// Composites paired with their kind, in RG, GB, BR order
    pub fn iter(&self) -> impl Iterator<Item = (CompositeKind, &ColorBuffer)> {
        [
            (CompositeKind::Rg, &self.rg),
            (CompositeKind::Gb, &self.gb),
            (CompositeKind::Br, &self.br),
        ]
        .into_iter()
    }

    /// Rotate each composite by its own angle, given in RG, GB, BR order
    #[must_use]
    pub fn rotated(&self, angles: [RotationAngle; 3]) -> Self {
        let [rg_angle, gb_angle, br_angle] = angles;
        Self {
            rg: rotate(&self.rg, rg_angle),
            gb: rotate(&self.gb, gb_angle),
            br: rotate(&self.br, br_angle),
        }
    }
}

/// Derive the RG, GB and BR composites for a coordinate
///
/// # Errors
///
/// Returns `CoordinateOutOfRange` if a selected row does not exist in its table
pub fn compose(coordinate: Coordinate, tables: &ChannelTables) -> Result<Composites> {
    let red_row = tables.get(Face::Red).row(coordinate.x())?;
    let green_row = tables.get(Face::Green).row(coordinate.y())?;
    let blue_row = tables.get(Face::Blue).row(coordinate.z())?;

    let mut rg = blank_buffer();
    let mut gb = blank_buffer();
    let mut br = blank_buffer();

    for p in 0..GRID_SIZE {
        let red = red_row.get(p).copied().unwrap_or(0);
        let blue_p = blue_row.get(p).copied().unwrap_or(0);

        for q in 0..GRID_SIZE {
            let green = green_row.get(q).copied().unwrap_or(0);
            let blue_q = blue_row.get(q).copied().unwrap_or(0);

            write_pixel(&mut rg, p, q, [red, green, 0]);
            write_pixel(&mut gb, q, p, [0, green, blue_p]);
            write_pixel(&mut br, p, q, [red, 0, blue_q]);
        }
    }

    Ok(Composites { rg, gb, br })
}
