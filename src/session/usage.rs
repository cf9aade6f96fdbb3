use crate::channel::face::Face;
use crate::compose::intensity::Coordinate;
use crate::io::configuration::{GRID_SIZE, MAX_ROWS_PER_FACE};
use crate::io::error::{Result, check_index};
use bitvec::prelude::*;
use std::fmt;

type RowSet = BitArr!(for GRID_SIZE, in u16);

/// Tracks which table rows each face has consumed during a session
///
/// A face that accumulates more than [`MAX_ROWS_PER_FACE`] distinct rows
/// invalidates the session. Rows are stored as one bit per table row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RowUsageValidator {
    rows: [RowSet; 3],
}

impl RowUsageValidator {
    /// Create a validator with no rows recorded
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a row as consumed by a face
    ///
    /// Returns whether the row was newly recorded. Recording a row twice is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// Returns `CoordinateOutOfRange` if `row` is not a valid table row
    pub fn record_usage(&mut self, face: Face, row: usize) -> Result<bool> {
        let row = check_index(face.label(), row, GRID_SIZE)?;
        let set = self.set_mut(face);
        let newly_added = set.get(row).as_deref() == Some(&false);
        set.set(row, true);
        Ok(newly_added)
    }

    /// Record the row each face consumes for a coordinate
    ///
    /// # Errors
    ///
    /// Propagates `CoordinateOutOfRange` from [`Self::record_usage`]
    pub fn record_coordinate(&mut self, coordinate: Coordinate) -> Result<()> {
        for face in Face::ALL {
            self.record_usage(face, coordinate.row_for(face))?;
        }
        Ok(())
    }

    /// True while no face exceeds its row budget
    pub fn validate(&self) -> bool {
        self.invalid_face().is_none()
    }

    /// First face whose row budget is exceeded
    pub fn invalid_face(&self) -> Option<Face> {
        Face::ALL
            .into_iter()
            .find(|&face| self.count(face) > MAX_ROWS_PER_FACE)
    }

    /// Forget all recorded rows
    pub fn reset(&mut self) {
        for set in &mut self.rows {
            set.fill(false);
        }
    }

    /// Number of distinct rows recorded for a face
    pub fn count(&self, face: Face) -> usize {
        self.set(face).count_ones()
    }

    /// Recorded rows for a face in ascending order
    pub fn rows(&self, face: Face) -> Vec<usize> {
        self.set(face).iter_ones().collect()
    }

    /// Whether no face has any recorded rows
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|set| set.not_any())
    }

    const fn set(&self, face: Face) -> &RowSet {
        let [red, green, blue] = &self.rows;
        match face {
            Face::Red => red,
            Face::Green => green,
            Face::Blue => blue,
        }
    }

    fn set_mut(&mut self, face: Face) -> &mut RowSet {
        let [red, green, blue] = &mut self.rows;
        match face {
            Face::Red => red,
            Face::Green => green,
            Face::Blue => blue,
        }
    }
}

impl fmt::Display for RowUsageValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary: Vec<String> = Face::ALL
            .iter()
            .map(|&face| format!("{face}: {:?}", self.rows(face)))
            .collect();
        write!(f, "RowUsage({})", summary.join(", "))
    }
}
