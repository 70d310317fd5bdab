//! This module defines the core data structures and types used throughout the nondeterministic
//! Turing Machine simulator, including machine descriptions, tape configurations, simulation
//! results, and error types.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::Rule;

/// The blank symbol filling every tape cell outside the written portion.
pub const BLANK_SYMBOL: char = '_';
/// The default maximum number of levels to explore before giving up.
pub const DEFAULT_MAX_STEPS: usize = 100;
/// The maximum allowed size for a machine description in bytes.
pub const MAX_DESCRIPTION_SIZE: usize = 65536; // 64KB

/// Represents a nondeterministic Turing Machine description.
///
/// A machine defines the alphabets, the distinguished states, and the transition
/// table. Several transitions may share the same source state and read symbol;
/// every matching transition is explored during simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Machine {
    /// The name of the machine.
    pub name: String,
    /// The declared state names. Kept as metadata; transitions are not checked
    /// against this list.
    pub states: Vec<String>,
    /// The symbols the input string is expected to draw from.
    pub input_alphabet: Vec<char>,
    /// The symbols that may appear on the tape.
    pub tape_alphabet: Vec<char>,
    /// The state the machine starts in.
    pub start_state: String,
    /// The accepting state. A branch that reaches it ends successfully.
    pub accept_state: String,
    /// The rejecting state. A branch that reaches it is dead but stays visible
    /// in the computation tree.
    pub reject_state: String,
    /// The transition table, in declaration order.
    pub transitions: Vec<Transition>,
}

impl Machine {
    /// Returns every transition applicable from `state` while scanning `symbol`,
    /// in declaration order. Declaration order decides branch order, so traces
    /// are reproducible.
    pub fn rules_for<'a>(
        &'a self,
        state: &'a str,
        symbol: char,
    ) -> impl Iterator<Item = &'a Transition> + 'a {
        self.transitions
            .iter()
            .filter(move |t| t.state == state && t.read == symbol)
    }
}

/// Represents a single transition rule for a nondeterministic Turing Machine.
///
/// Field order follows the description-file columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The state this transition applies in.
    pub state: String,
    /// The symbol that must be under the head.
    pub read: char,
    /// The state the machine moves to.
    pub next_state: String,
    /// The symbol written over the scanned cell.
    pub write: char,
    /// The direction the head moves afterwards.
    pub direction: Direction,
}

/// Represents the possible directions a tape head can move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one position to the left.
    Left,
    /// Move the head one position to the right.
    Right,
    /// Keep the head in the same position.
    Stay,
}

/// An instantaneous description of one computation branch.
///
/// The tape is split around the head: `left` holds everything strictly left of
/// the head, and `right` starts with the scanned cell. Cells outside the
/// written tape read as the blank symbol. Configurations are immutable; applying
/// a transition produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// Tape content strictly left of the head.
    pub left: String,
    /// The current state.
    pub state: String,
    /// Tape content from the head rightward.
    pub right: String,
}

impl Configuration {
    /// Creates the starting configuration: head on the first input symbol.
    pub fn initial(state: &str, input: &str) -> Self {
        Self {
            left: String::new(),
            state: state.to_string(),
            right: input.to_string(),
        }
    }

    /// Returns the symbol under the head, or the blank symbol when the head
    /// sits past the end of the written tape.
    pub fn scanned_symbol(&self) -> char {
        self.right.chars().next().unwrap_or(BLANK_SYMBOL)
    }

    /// Returns the head position as an offset from the left end of the written
    /// tape.
    pub fn head(&self) -> usize {
        self.left.chars().count()
    }

    /// Returns the full written tape.
    pub fn tape(&self) -> String {
        format!("{}{}", self.left, self.right)
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]{}", self.left, self.state, self.right)
    }
}

/// All configurations reachable after exactly the same number of transitions.
pub type Level = Vec<Configuration>;

/// The outcome of a simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Some branch reached the accept state; `depth` is the level at which the
    /// first accepting configuration appeared.
    Accepted { depth: usize },
    /// Every branch died; `depth` is the level whose expansion came up empty.
    Rejected { depth: usize },
    /// The exploration hit the level bound without accepting. Inconclusive.
    StepLimit { max_steps: usize },
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted { depth } => write!(f, "accepted in {} transitions", depth),
            Verdict::Rejected { depth } => write!(f, "rejected at depth {}", depth),
            Verdict::StepLimit { max_steps } => {
                write!(f, "stopped after reaching the maximum depth of {}", max_steps)
            }
        }
    }
}

/// The complete record of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// The name of the machine that ran.
    pub machine_name: String,
    /// The input string the machine ran on.
    pub input: String,
    /// The outcome of the run.
    pub verdict: Verdict,
    /// The number of transitions applied across all branches.
    pub total_transitions: usize,
    /// How many accepting configurations were counted.
    pub accept_count: usize,
    /// How many visits to reject-state configurations were counted. Rejected
    /// branches are carried forward, so one branch counts once per level.
    pub reject_count: usize,
    /// Every explored level, level 0 holding exactly the initial configuration.
    pub trace: Vec<Level>,
}

impl SimulationResult {
    /// Returns the index of the deepest explored level.
    pub fn depth(&self) -> usize {
        self.trace.len() - 1
    }
}

/// Represents the errors that can occur while loading or simulating a machine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NtmError {
    /// Indicates an error during the parsing of a machine description.
    #[error("Machine parsing error: {0}")]
    ParseError(#[from] Box<pest::error::Error<Rule>>),
    /// Indicates a transition row that is present but unusable: wrong number of
    /// fields, a symbol that is not a single character, or an unknown head move.
    #[error("Malformed transition: {0}")]
    MalformedTransition(Box<pest::error::Error<Rule>>),
    /// Indicates a structurally valid description with unusable content, such
    /// as a missing machine name or start state.
    #[error("Machine validation error: {0}")]
    ValidationError(String),
    /// Indicates an error related to file system operations, such as reading a
    /// machine description or input file.
    #[error("File error: {0}")]
    FileError(String),
    /// Indicates that a level of the computation tree outgrew the configured
    /// width limit.
    #[error("Exploration width {width} at depth {depth} exceeds the limit of {limit}")]
    ResourceExhaustion {
        depth: usize,
        width: usize,
        limit: usize,
    },
}
