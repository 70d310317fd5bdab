//! This module renders a `SimulationResult` as the textual run report printed
//! by the command-line tool.

use crate::types::SimulationResult;
use std::fmt;

/// Formats a simulation run for display.
///
/// The report lists the machine name, the input string, every explored level
/// of the computation tree, the total transition count, and the verdict. It
/// carries no decision logic of its own.
pub struct Report<'a> {
    result: &'a SimulationResult,
}

impl<'a> Report<'a> {
    /// Creates a report over the given result.
    pub fn new(result: &'a SimulationResult) -> Self {
        Self { result }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Machine: {}", self.result.machine_name)?;
        writeln!(f, "Input: {}", self.result.input)?;

        for (depth, level) in self.result.trace.iter().enumerate() {
            let configs = level
                .iter()
                .map(|config| config.to_string())
                .collect::<Vec<_>>()
                .join(" | ");

            writeln!(f, "Depth {}: {}", depth, configs)?;
        }

        writeln!(f, "Total transitions: {}", self.result.total_transitions)?;
        write!(f, "Result: {}", self.result.verdict)
    }
}
