//! Payment tiers gating how much of a solved cycle is revealed

use crate::channel::face::CompositeKind;
use crate::io::configuration::{FULL_DISPLAY_PAYMENT, PARTIAL_DISPLAY_PAYMENT};
use crate::io::error::Result;

/// Display tier reached by a payment amount
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentTier {
    /// All three tables and all three composites are shown
    Full,
    /// The operator picks which composites to show
    Partial,
    /// Nothing is shown and the payment is returned as change
    Insufficient,
}

impl PaymentTier {
    /// Classify a payment against the display thresholds
    pub const fn classify(payment: u32) -> Self {
        if payment >= FULL_DISPLAY_PAYMENT {
            Self::Full
        } else if payment >= PARTIAL_DISPLAY_PAYMENT {
            Self::Partial
        } else {
            Self::Insufficient
        }
    }
}

/// What a cycle's payment actually bought
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// Every image was displayed
    Full,
    /// Only the selected composites were displayed
    Partial {
        /// Composites shown, in selection order
        shown: Vec<CompositeKind>,
    },
    /// Payment fell short and was handed back
    Insufficient {
        /// Amount returned to the operator
        change: u32,
    },
}

impl PaymentOutcome {
    /// Tier this outcome belongs to
    pub const fn tier(&self) -> PaymentTier {
        match self {
            Self::Full => PaymentTier::Full,
            Self::Partial { .. } => PaymentTier::Partial,
            Self::Insufficient { .. } => PaymentTier::Insufficient,
        }
    }

    /// Change owed, set only for insufficient payments
    pub const fn change(&self) -> Option<u32> {
        match self {
            Self::Insufficient { change } => Some(*change),
            Self::Full | Self::Partial { .. } => None,
        }
    }
}

/// Parse a whitespace-separated list of composite tokens
///
/// Repeated tokens are collapsed, keeping the first occurrence. An empty line
/// yields an empty selection.
///
/// # Errors
///
/// Returns `InvalidInput` for any token other than `RG`, `GB` or `BR`
pub fn parse_selection(line: &str) -> Result<Vec<CompositeKind>> {
    let mut selection = Vec::with_capacity(CompositeKind::ALL.len());
    for token in line.split_whitespace() {
        let kind = token.parse::<CompositeKind>()?;
        if !selection.contains(&kind) {
            selection.push(kind);
        }
    }
    Ok(selection)
}
