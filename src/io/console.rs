//! Line-oriented terminal operator
//!
//! Prompts are written to any `Write` sink and answers read from any
//! `BufRead` source, so the same code drives stdin and scripted tests.
//! Answers that fail validation are reported and asked for again.

use crate::channel::face::CompositeKind;
use crate::compose::intensity::Coordinate;
use crate::compose::rotation::RotationAngle;
use crate::io::configuration::GRID_SIZE;
use crate::io::error::{PuzzleError, Result, check_index, invalid_input};
use crate::session::machine::Operator;
use crate::session::payment::parse_selection;
use std::io::{BufRead, Write};

/// Terminal implementation of [`Operator`]
pub struct Console<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Wrap an input source and a prompt sink
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Recover the prompt sink, typically to inspect what was written
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn read_line(&mut self, field: &'static str, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")
            .and_then(|()| self.writer.flush())
            .map_err(|source| PuzzleError::Terminal {
                operation: "write prompt",
                source,
            })?;

        let mut line = String::new();
        let bytes = self
            .reader
            .read_line(&mut line)
            .map_err(|source| PuzzleError::Terminal {
                operation: "read input",
                source,
            })?;

        if bytes == 0 {
            return Err(PuzzleError::InputClosed { field });
        }
        Ok(line.trim().to_string())
    }

    /// Keep prompting until `parse` accepts an answer
    fn ask<T>(
        &mut self,
        field: &'static str,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            let answer = self.read_line(field, prompt)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(error) => {
                    writeln!(self.writer, "{error}").map_err(|source| PuzzleError::Terminal {
                        operation: "write diagnostic",
                        source,
                    })?;
                }
            }
        }
    }

    fn ask_axis(&mut self, field: &'static str, prompt: &str) -> Result<usize> {
        self.ask(field, prompt, |answer| {
            let value = answer
                .parse::<usize>()
                .map_err(|err| invalid_input(field, answer, &err))?;
            check_index(field, value, GRID_SIZE)
        })
    }

    fn ask_angle(&mut self, composite: CompositeKind) -> Result<RotationAngle> {
        let prompt = format!("Enter rotation angle for {composite} (0, 90, 180, 270): ");
        self.ask("rotation angle", &prompt, |answer| {
            answer
                .parse::<RotationAngle>()
                .map_err(|err| invalid_input("rotation angle", answer, &err))
        })
    }
}

impl<R: BufRead, W: Write> Operator for Console<R, W> {
    fn coordinate(&mut self) -> Result<Coordinate> {
        let x = self.ask_axis("x", "Enter the x coordinate (0-15): ")?;
        let y = self.ask_axis("y", "Enter the y coordinate (0-15): ")?;
        let z = self.ask_axis("z", "Enter the z coordinate (0-15): ")?;
        Coordinate::new(x, y, z)
    }

    fn rotation_angles(&mut self) -> Result<[RotationAngle; 3]> {
        let [rg, gb, br] = CompositeKind::ALL;
        Ok([self.ask_angle(rg)?, self.ask_angle(gb)?, self.ask_angle(br)?])
    }

    fn payment(&mut self, total_cost: u32) -> Result<u32> {
        let prompt = format!("Total cost is {total_cost}. Enter payment: ");
        self.ask("payment", &prompt, |answer| {
            answer
                .parse::<u32>()
                .map_err(|err| invalid_input("payment", answer, &err))
        })
    }

    fn composite_selection(&mut self) -> Result<Vec<CompositeKind>> {
        self.ask(
            "composite selection",
            "Enter faces to show ('RG' or 'GB BR'): ",
            parse_selection,
        )
    }
}
