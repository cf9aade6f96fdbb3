//! Puzzle session state machine
//!
//! A session walks `Start -> Input -> Processing -> Payment -> Validation` and
//! then either ends or returns to `Input`. Each state carries exactly the data
//! the next step needs, so a step cannot observe results from a discarded
//! cycle.

use crate::channel::buffer::ColorBuffer;
use crate::channel::face::{CompositeKind, Face};
use crate::channel::permutation::ChannelTables;
use crate::compose::intensity::{Composites, Coordinate, compose};
use crate::compose::rotation::RotationAngle;
use crate::io::configuration::TOTAL_COST;
use crate::io::error::Result;
use crate::session::payment::{PaymentOutcome, PaymentTier};
use crate::session::usage::RowUsageValidator;
use std::fmt;

/// Supplies the operator's choices for each cycle
pub trait Operator {
    /// Coordinate selecting one row per face
    ///
    /// # Errors
    ///
    /// Returns an error if no coordinate can be obtained
    fn coordinate(&mut self) -> Result<Coordinate>;

    /// Rotation angles for the RG, GB and BR composites
    ///
    /// # Errors
    ///
    /// Returns an error if the angles cannot be obtained
    fn rotation_angles(&mut self) -> Result<[RotationAngle; 3]>;

    /// Payment offered against `total_cost`
    ///
    /// # Errors
    ///
    /// Returns an error if no payment can be obtained
    fn payment(&mut self, total_cost: u32) -> Result<u32>;

    /// Composites to reveal after a partial payment
    ///
    /// # Errors
    ///
    /// Returns an error if no selection can be obtained
    fn composite_selection(&mut self) -> Result<Vec<CompositeKind>>;
}

/// Receives images and status messages produced by a session
pub trait Viewer {
    /// Present one named buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot be presented
    fn show(&mut self, name: &str, image: &ColorBuffer) -> Result<()>;

    /// Report a status change to the operator
    ///
    /// # Errors
    ///
    /// Returns an error if the notice cannot be delivered
    fn notify(&mut self, notice: &Notice) -> Result<()>;
}

/// Status messages emitted while a session runs
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// A full payment unlocked every image
    ShowingAll,
    /// The payment did not reach the partial tier
    PaymentInsufficient,
    /// Change handed back to the operator
    ChangeReturned(u32),
    /// A face exceeded its row budget and usage was reset
    RowUsageInvalid(Face),
    /// The session reached its end state
    Completed {
        /// Cycles run, including invalidated ones
        cycles: usize,
    },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShowingAll => write!(f, "Showing all images."),
            Self::PaymentInsufficient => {
                write!(f, "Payment is not sufficient. Returning change.")
            }
            Self::ChangeReturned(change) => write!(f, "Change returned: {change}"),
            Self::RowUsageInvalid(face) => write!(
                f,
                "Row usage for {face}-face is invalid. Please choose different rows."
            ),
            Self::Completed { cycles } => {
                write!(f, "Process completed after {cycles} cycle(s).")
            }
        }
    }
}

/// Operator input gathered for one cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleInput {
    /// Row selection for the composites
    pub coordinate: Coordinate,
    /// Rotations applied to RG, GB and BR
    pub angles: [RotationAngle; 3],
}

/// Session state, carrying the data produced so far in the current cycle
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum State {
    /// Initial state, tables already generated
    Start,
    /// Waiting for operator input
    Input,
    /// Input collected, composites not yet built
    Processing(CycleInput),
    /// Rotated composites ready to be paid for
    Payment {
        /// Coordinate the composites were built from
        coordinate: Coordinate,
        /// Rotated composites
        composites: Composites,
    },
    /// Payment settled, row usage not yet checked
    Validation {
        /// Coordinate whose rows must be recorded
        coordinate: Coordinate,
        /// Result of the payment step
        outcome: PaymentOutcome,
    },
    /// Session finished
    End {
        /// Payment outcome of the accepted cycle
        outcome: PaymentOutcome,
    },
}

impl State {
    /// Short state name without payload
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Input => "Input",
            Self::Processing(_) => "Processing",
            Self::Payment { .. } => "Payment",
            Self::Validation { .. } => "Validation",
            Self::End { .. } => "End",
        }
    }

    /// Whether no further transitions are possible
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::End { .. })
    }
}

/// Totals reported once a session ends
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    /// Cycles run, including invalidated ones
    pub cycles: usize,
    /// Times row usage was invalidated and reset
    pub resets: usize,
    /// Payment outcome of the accepted cycle
    pub outcome: PaymentOutcome,
}

/// Drives puzzle cycles over a fixed set of face tables
#[derive(Clone, Debug)]
pub struct PuzzleStateMachine {
    tables: ChannelTables,
    usage: RowUsageValidator,
    cycles: usize,
    resets: usize,
}

impl PuzzleStateMachine {
    /// Create a machine with empty row usage
    pub fn new(tables: ChannelTables) -> Self {
        Self::with_usage(tables, RowUsageValidator::new())
    }

    /// Create a machine that continues from existing row usage
    pub const fn with_usage(tables: ChannelTables, usage: RowUsageValidator) -> Self {
        Self {
            tables,
            usage,
            cycles: 0,
            resets: 0,
        }
    }

    /// Face tables used by every cycle
    pub const fn tables(&self) -> &ChannelTables {
        &self.tables
    }

    /// Current row usage
    pub const fn usage(&self) -> &RowUsageValidator {
        &self.usage
    }

    /// Cycles started so far
    pub const fn cycles(&self) -> usize {
        self.cycles
    }

    /// Invalidations so far
    pub const fn resets(&self) -> usize {
        self.resets
    }

    /// Advance the session by one transition
    ///
    /// # Errors
    ///
    /// Propagates failures from the operator, the viewer or composite
    /// construction
    pub fn step<O, V>(&mut self, state: State, operator: &mut O, viewer: &mut V) -> Result<State>
    where
        O: Operator + ?Sized,
        V: Viewer + ?Sized,
    {
        match state {
            State::Start => Ok(State::Input),
            State::Input => {
                self.cycles += 1;
                let coordinate = operator.coordinate()?;
                let angles = operator.rotation_angles()?;
                Ok(State::Processing(CycleInput { coordinate, angles }))
            }
            State::Processing(input) => {
                let composites = compose(input.coordinate, &self.tables)?.rotated(input.angles);
                Ok(State::Payment {
                    coordinate: input.coordinate,
                    composites,
                })
            }
            State::Payment {
                coordinate,
                composites,
            } => {
                let outcome = self.settle_payment(&composites, operator, viewer)?;
                Ok(State::Validation {
                    coordinate,
                    outcome,
                })
            }
            State::Validation {
                coordinate,
                outcome,
            } => {
                self.usage.record_coordinate(coordinate)?;
                if let Some(face) = self.usage.invalid_face() {
                    viewer.notify(&Notice::RowUsageInvalid(face))?;
                    self.usage.reset();
                    self.resets += 1;
                    Ok(State::Input)
                } else {
                    Ok(State::End { outcome })
                }
            }
            State::End { outcome } => Ok(State::End { outcome }),
        }
    }

    /// Run transitions from `Start` until the session ends
    ///
    /// # Errors
    ///
    /// Propagates the first failing transition
    pub fn run<O, V>(&mut self, operator: &mut O, viewer: &mut V) -> Result<SessionSummary>
    where
        O: Operator + ?Sized,
        V: Viewer + ?Sized,
    {
        let mut state = State::Start;
        loop {
            state = self.step(state, operator, viewer)?;
            if let State::End { outcome } = state {
                viewer.notify(&Notice::Completed {
                    cycles: self.cycles,
                })?;
                return Ok(SessionSummary {
                    cycles: self.cycles,
                    resets: self.resets,
                    outcome,
                });
            }
        }
    }

    fn settle_payment<O, V>(
        &self,
        composites: &Composites,
        operator: &mut O,
        viewer: &mut V,
    ) -> Result<PaymentOutcome>
    where
        O: Operator + ?Sized,
        V: Viewer + ?Sized,
    {
        let payment = operator.payment(TOTAL_COST)?;

        let outcome = match PaymentTier::classify(payment) {
            PaymentTier::Full => {
                viewer.notify(&Notice::ShowingAll)?;
                for table in self.tables.iter() {
                    viewer.show(table.face().label(), table.buffer())?;
                }
                for (kind, image) in composites.iter() {
                    viewer.show(kind.label(), image)?;
                }
                PaymentOutcome::Full
            }
            PaymentTier::Partial => {
                let shown = operator.composite_selection()?;
                for &kind in &shown {
                    viewer.show(kind.label(), composites.get(kind))?;
                }
                PaymentOutcome::Partial { shown }
            }
            PaymentTier::Insufficient => {
                viewer.notify(&Notice::PaymentInsufficient)?;
                PaymentOutcome::Insufficient { change: payment }
            }
        };

        if let Some(change) = outcome.change().filter(|&change| change > 0) {
            viewer.notify(&Notice::ChangeReturned(change))?;
        }

        Ok(outcome)
    }
}
