//! This module defines the `Simulator`, which explores every computation branch of a
//! nondeterministic Turing Machine breadth first. It handles configuration expansion,
//! tape growth at the edges, and the acceptance and rejection decision logic.

use crate::types::{
    Configuration, Direction, Level, Machine, NtmError, SimulationResult, Transition, Verdict,
    BLANK_SYMBOL, DEFAULT_MAX_STEPS,
};

/// Explores the computation tree of a nondeterministic Turing Machine.
///
/// The simulator keeps one level of configurations per transition depth. Each
/// level is expanded in full before the next one is examined, so every
/// configuration at depth `d` has had exactly `d` transitions applied to it.
pub struct Simulator {
    /// The maximum number of levels to explore before giving up.
    pub max_steps: usize,
    /// An optional bound on the number of configurations a single level may
    /// hold. `None` leaves the exploration width unbounded.
    pub max_level_width: Option<usize>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            max_level_width: None,
        }
    }
}

impl Simulator {
    /// Creates a simulator that gives up after `max_steps` levels, with no
    /// width bound.
    pub fn new(max_steps: usize) -> Self {
        Self {
            max_steps,
            max_level_width: None,
        }
    }

    /// Runs `machine` on `input` and returns the complete record of the run.
    ///
    /// Exploration is breadth first. Within a level, configurations are
    /// processed in order: one that reached the accept state is counted and
    /// dropped, one in the reject state is counted and carried forward
    /// unchanged, and any other forks once per transition applicable to its
    /// state and scanned symbol. Acceptance never cuts a level short; sibling
    /// branches are still expanded, which keeps the transition counts and the
    /// trace reproducible.
    ///
    /// The run ends when a level expands to nothing (accepted at the first
    /// acceptance depth if one was seen, rejected otherwise) or when
    /// `max_steps` levels have been built (accepted if an acceptance was
    /// already counted, inconclusive otherwise).
    ///
    /// # Arguments
    ///
    /// * `machine` - The machine description to simulate.
    /// * `input` - The initial tape content.
    ///
    /// # Returns
    ///
    /// * `Ok(SimulationResult)` with the verdict, counters, and full trace.
    /// * `Err(NtmError::ResourceExhaustion)` if a level outgrows the
    ///   configured width limit.
    pub fn run(&self, machine: &Machine, input: &str) -> Result<SimulationResult, NtmError> {
        let mut trace: Vec<Level> =
            vec![vec![Configuration::initial(&machine.start_state, input)]];
        let mut total_transitions = 0;
        let mut accept_count = 0;
        let mut reject_count = 0;
        let mut first_accept: Option<usize> = None;

        let mut depth = 0;
        let verdict = loop {
            if depth == self.max_steps {
                break match first_accept {
                    Some(accepted_at) => Verdict::Accepted { depth: accepted_at },
                    None => Verdict::StepLimit {
                        max_steps: self.max_steps,
                    },
                };
            }

            let mut next: Level = Vec::new();

            for config in &trace[depth] {
                if config.state == machine.accept_state {
                    accept_count += 1;
                    if first_accept.is_none() {
                        first_accept = Some(depth);
                    }
                    continue;
                }

                if config.state == machine.reject_state {
                    reject_count += 1;
                    next.push(config.clone());
                    continue;
                }

                let symbol = config.scanned_symbol();
                for rule in machine.rules_for(&config.state, symbol) {
                    total_transitions += 1;
                    next.push(advance(config, rule));
                }
            }

            if next.is_empty() {
                break match first_accept {
                    Some(accepted_at) => Verdict::Accepted { depth: accepted_at },
                    None => Verdict::Rejected { depth },
                };
            }

            if let Some(limit) = self.max_level_width {
                if next.len() > limit {
                    return Err(NtmError::ResourceExhaustion {
                        depth: depth + 1,
                        width: next.len(),
                        limit,
                    });
                }
            }

            trace.push(next);
            depth += 1;
        };

        Ok(SimulationResult {
            machine_name: machine.name.clone(),
            input: input.to_string(),
            verdict,
            total_transitions,
            accept_count,
            reject_count,
            trace,
        })
    }
}

/// Applies a single transition to a configuration, producing the successor.
///
/// The scanned cell is overwritten first, then the head moves. Moving past
/// either edge of the written tape grows it by exactly one blank cell.
fn advance(config: &Configuration, rule: &Transition) -> Configuration {
    let mut tape: Vec<char> = config.tape().chars().collect();
    let mut head = config.head();

    // Ensure the scanned cell exists before writing
    if head == tape.len() {
        tape.push(BLANK_SYMBOL);
    }
    tape[head] = rule.write;

    // Move head according to direction
    match rule.direction {
        Direction::Left => {
            if head == 0 {
                // Extend tape to the left
                tape.insert(0, BLANK_SYMBOL);
            } else {
                head -= 1;
            }
        }
        Direction::Right => {
            head += 1;
            if head >= tape.len() {
                tape.push(BLANK_SYMBOL);
            }
        }
        Direction::Stay => {
            // Head position remains unchanged
        }
    }

    Configuration {
        left: tape[..head].iter().collect(),
        state: rule.next_state.clone(),
        right: tape[head..].iter().collect(),
    }
}
