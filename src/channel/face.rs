//! Color faces and the composite pairings built from them

use crate::io::error::{PuzzleError, invalid_input};
use std::fmt;
use std::str::FromStr;

/// One of the three color channels of the puzzle
///
/// Each face owns a permutation table and its own row-usage budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// Red face, addressed by the x coordinate
    Red,
    /// Green face, addressed by the y coordinate
    Green,
    /// Blue face, addressed by the z coordinate
    Blue,
}

impl Face {
    /// All faces in table generation order
    pub const ALL: [Self; 3] = [Self::Red, Self::Green, Self::Blue];

    /// Buffer plane that stores this face's permutation values
    ///
    /// The mapping is reversed relative to the face order, so the red table
    /// lives in plane 2 and the blue table in plane 0.
    pub const fn plane(self) -> usize {
        match self {
            Self::Red => 2,
            Self::Green => 1,
            Self::Blue => 0,
        }
    }

    /// Position of this face within [`Face::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Red => 0,
            Self::Green => 1,
            Self::Blue => 2,
        }
    }

    /// Single-letter tag used in prompts and preview names
    pub const fn label(self) -> &'static str {
        match self {
            Self::Red => "R",
            Self::Green => "G",
            Self::Blue => "B",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three two-face composites derived each cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompositeKind {
    /// Red rows against green columns
    Rg,
    /// Green against blue, transposed
    Gb,
    /// Blue against red
    Br,
}

impl CompositeKind {
    /// All composites in display order
    pub const ALL: [Self; 3] = [Self::Rg, Self::Gb, Self::Br];

    /// Token used for selection and preview names
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rg => "RG",
            Self::Gb => "GB",
            Self::Br => "BR",
        }
    }

    /// Position of this composite within [`CompositeKind::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Rg => 0,
            Self::Gb => 1,
            Self::Br => 2,
        }
    }
}

impl fmt::Display for CompositeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CompositeKind {
    type Err = PuzzleError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "RG" => Ok(Self::Rg),
            "GB" => Ok(Self::Gb),
            "BR" => Ok(Self::Br),
            _ => Err(invalid_input(
                "composite",
                token,
                &"expected one of RG, GB, BR",
            )),
        }
    }
}
