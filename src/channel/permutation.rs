//! Per-face permutation tables
//!
//! Each table is a uniformly shuffled arrangement of the values 0-255 laid out
//! on a 16x16 grid. The grid is embedded in its face's plane of an otherwise
//! empty color buffer, so a table can be previewed directly.

use crate::channel::buffer::{ColorBuffer, blank_buffer};
use crate::channel::face::Face;
use crate::io::configuration::{GRID_SIZE, TABLE_VALUES};
use crate::io::error::{Result, check_index, computation_error};
use bitvec::prelude::*;
use ndarray::{Array2, ArrayView1, ArrayView2, Axis};
use rand::Rng;
use rand::seq::SliceRandom;

/// Bijective 16x16 lookup for one face
#[derive(Clone, Debug)]
pub struct PermutationTable {
    face: Face,
    buffer: ColorBuffer,
}

impl PermutationTable {
    /// Draw a fresh table for `face` from the given random source
    ///
    /// # Errors
    ///
    /// Returns an error if the shuffled values cannot be arranged on the grid
    /// or the result is not a bijection. Both indicate a defect rather than a
    /// recoverable state.
    pub fn generate<R: Rng + ?Sized>(face: Face, rng: &mut R) -> Result<Self> {
        let mut values: Vec<u8> = (0..=u8::MAX).collect();
        values.shuffle(rng);

        let grid = Array2::from_shape_vec((GRID_SIZE, GRID_SIZE), values)?;
        let mut buffer = blank_buffer();
        buffer.index_axis_mut(Axis(2), face.plane()).assign(&grid);

        let table = Self { face, buffer };
        if table.is_bijection() {
            Ok(table)
        } else {
            Err(computation_error(
                "permutation generation",
                &format!("{face} table does not cover 0-255 exactly once"),
            ))
        }
    }

    /// Face this table belongs to
    pub const fn face(&self) -> Face {
        self.face
    }

    /// Full three-plane buffer with the table in its face's plane
    pub const fn buffer(&self) -> &ColorBuffer {
        &self.buffer
    }

    /// The 16x16 permutation values
    pub fn values(&self) -> ArrayView2<'_, u8> {
        self.buffer.index_axis(Axis(2), self.face.plane())
    }

    /// One row of permutation values
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfRange` if `index` is not a valid row
    pub fn row(&self, index: usize) -> Result<ArrayView1<'_, u8>> {
        let index = check_index(self.face.label(), index, GRID_SIZE)?;
        Ok(self.values().index_axis_move(Axis(0), index))
    }

    /// Check that every value 0-255 appears exactly once and the other planes are empty
    pub fn is_bijection(&self) -> bool {
        let mut seen = bitarr![0; TABLE_VALUES];
        for &value in self.values() {
            let index = usize::from(value);
            if seen.get(index).as_deref() == Some(&true) {
                return false;
            }
            seen.set(index, true);
        }

        let foreign_planes_empty = self
            .buffer
            .axis_iter(Axis(2))
            .enumerate()
            .filter(|(plane, _)| *plane != self.face.plane())
            .all(|(_, plane)| plane.iter().all(|&value| value == 0));

        seen.all() && foreign_planes_empty
    }
}

/// The three face tables generated for one puzzle
#[derive(Clone, Debug)]
pub struct ChannelTables {
    red: PermutationTable,
    green: PermutationTable,
    blue: PermutationTable,
}

impl ChannelTables {
    /// Generate red, green and blue tables in that order
    ///
    /// # Errors
    ///
    /// Propagates any table generation failure
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Result<Self> {
        Ok(Self {
            red: PermutationTable::generate(Face::Red, rng)?,
            green: PermutationTable::generate(Face::Green, rng)?,
            blue: PermutationTable::generate(Face::Blue, rng)?,
        })
    }

    /// Table for the given face
    pub const fn get(&self, face: Face) -> &PermutationTable {
        match face {
            Face::Red => &self.red,
            Face::Green => &self.green,
            Face::Blue => &self.blue,
        }
    }

    /// Tables in red, green, blue order
    pub fn iter(&self) -> impl Iterator<Item = &PermutationTable> {
        [&self.red, &self.green, &self.blue].into_iter()
    }
}
