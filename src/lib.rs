//! This crate provides the core logic for a nondeterministic Turing Machine simulator.
//! It includes modules for parsing machine descriptions, exploring every computation
//! branch breadth first, rendering run reports, and a catalog of predefined machines.

pub mod engine;
pub mod loader;
pub mod machines;
pub mod parser;
pub mod report;
pub mod types;

/// Re-exports the `Rule` enum from the parser module, used by the `pest` grammar.
pub use crate::parser::Rule;
/// Re-exports the `Simulator` struct from the engine module.
pub use engine::Simulator;
/// Re-exports the `MachineLoader` struct from the loader module.
pub use loader::MachineLoader;
/// Re-exports `MachineCatalog` and `MACHINES` from the machines module.
pub use machines::{MachineCatalog, MACHINES};
/// Re-exports the `parse` function from the parser module.
pub use parser::parse;
/// Re-exports the `Report` struct from the report module.
pub use report::Report;
/// Re-exports various types related to machine definition and simulation from the types module.
pub use types::{
    Configuration, Direction, Level, Machine, NtmError, SimulationResult, Transition, Verdict,
    BLANK_SYMBOL, DEFAULT_MAX_STEPS, MAX_DESCRIPTION_SIZE,
};
