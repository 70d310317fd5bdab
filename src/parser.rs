//! This module provides the parser for machine descriptions, utilizing the `pest` crate.
//! It defines the grammar for the tabular description format and functions to parse the
//! input into a `Machine` struct.

use crate::types::{Direction, Machine, NtmError, Transition};
use pest::{
    error::{Error, ErrorVariant},
    iterators::Pair,
    Parser as PestParser, Span,
};
use pest_derive::Parser as PestParser;

/// Derives a `PestParser` for the machine description grammar defined in `grammar.pest`.
#[derive(PestParser)]
#[grammar = "grammar.pest"]
pub struct MachineParser;

/// Parses the given input string into a `Machine` struct.
///
/// This is the main entry point for parsing machine descriptions. It trims the
/// input, parses it using the `MachineParser`, and then processes the resulting
/// parse tree into a structured `Machine`.
///
/// # Arguments
///
/// * `input` - A string slice containing the machine description.
///
/// # Returns
///
/// * `Ok(Machine)` if the input is successfully parsed.
/// * `Err(NtmError::ParseError)` if there are any syntax errors.
/// * `Err(NtmError::MalformedTransition)` if a transition row is unusable.
/// * `Err(NtmError::ValidationError)` if a required name is empty.
pub fn parse(input: &str) -> Result<Machine, NtmError> {
    let root = MachineParser::parse(Rule::machine, input.trim())
        .map_err(|e| NtmError::ParseError(e.into()))? //
        .next()
        .unwrap();

    parse_machine(root)
}

/// Parses the top-level structure of a machine description from a `Pair<Rule::machine>`.
///
/// The seven header rows are positional; every row after them is a transition.
fn parse_machine(pair: Pair<Rule>) -> Result<Machine, NtmError> {
    let mut name = String::new();
    let mut states = Vec::new();
    let mut input_alphabet = Vec::new();
    let mut tape_alphabet = Vec::new();
    let mut start_state = String::new();
    let mut accept_state = String::new();
    let mut reject_state = String::new();
    let mut transitions = Vec::new();

    for row in pair.into_inner() {
        match row.as_rule() {
            Rule::name_row => name = parse_value(row, "machine name")?,
            Rule::states_row => states = parse_names(row),
            Rule::input_alphabet_row => input_alphabet = parse_alphabet(row)?,
            Rule::tape_alphabet_row => tape_alphabet = parse_alphabet(row)?,
            Rule::start_row => start_state = parse_value(row, "start state")?,
            Rule::accept_row => accept_state = parse_value(row, "accept state")?,
            Rule::reject_row => reject_state = parse_value(row, "reject state")?,
            Rule::transition_row => transitions.push(parse_transition(row)?),
            _ => {} // Skip EOI
        }
    }

    Ok(Machine {
        name,
        states,
        input_alphabet,
        tape_alphabet,
        start_state,
        accept_state,
        reject_state,
        transitions,
    })
}

/// Extracts a single required value from a header row. Extra cells are ignored;
/// the first cell wins.
fn parse_value(row: Pair<Rule>, what: &str) -> Result<String, NtmError> {
    let value = row
        .into_inner()
        .next()
        .map(|cell| cell.as_str().to_string())
        .unwrap_or_default();

    if value.is_empty() {
        return Err(NtmError::ValidationError(format!("Missing {}", what)));
    }

    Ok(value)
}

/// Collects the non-empty cells of a header row as a list of names.
fn parse_names(row: Pair<Rule>) -> Vec<String> {
    row.into_inner()
        .filter(|cell| !cell.as_str().is_empty())
        .map(|cell| cell.as_str().to_string())
        .collect()
}

/// Collects the non-empty cells of an alphabet row, requiring each to be a
/// single character.
fn parse_alphabet(row: Pair<Rule>) -> Result<Vec<char>, NtmError> {
    let mut symbols = Vec::new();

    for cell in row.into_inner() {
        if cell.as_str().is_empty() {
            continue;
        }

        symbols.push(parse_symbol(&cell)?);
    }

    Ok(symbols)
}

/// Parses a single transition row of the form `state,read,next_state,write,move`.
fn parse_transition(row: Pair<Rule>) -> Result<Transition, NtmError> {
    let span = row.as_span();
    let cells: Vec<Pair<Rule>> = row.into_inner().collect();

    if cells.len() != 5 {
        return Err(malformed(
            &format!(
                "Expected 5 fields (state, read, next state, write, move), found {}",
                cells.len()
            ),
            span,
        ));
    }

    let state = cells[0].as_str().to_string();
    let read = parse_transition_symbol(&cells[1])?;
    let next_state = cells[2].as_str().to_string();
    let write = parse_transition_symbol(&cells[3])?;
    let direction = parse_direction(&cells[4])?;

    if next_state.is_empty() {
        return Err(malformed(
            "Transition is missing a next state",
            cells[2].as_span(),
        ));
    }

    Ok(Transition {
        state,
        read,
        next_state,
        write,
        direction,
    })
}

/// Parses a single direction cell. Supports 'L' for Left, 'R' for Right, and
/// 'S' for Stay; anything else is a hard failure, never silently ignored.
fn parse_direction(cell: &Pair<Rule>) -> Result<Direction, NtmError> {
    match cell.as_str() {
        "L" => Ok(Direction::Left),
        "R" => Ok(Direction::Right),
        "S" => Ok(Direction::Stay),
        _ => Err(malformed(
            &format!("Unsupported head move: \"{}\"", cell.as_str()),
            cell.as_span(),
        )),
    }
}

/// Parses a single-character symbol cell of an alphabet row.
fn parse_symbol(cell: &Pair<Rule>) -> Result<char, NtmError> {
    single_char(cell).ok_or_else(|| {
        parse_error(
            &format!("Expected a single symbol, found \"{}\"", cell.as_str()),
            cell.as_span(),
        )
    })
}

/// Parses a single-character read or write symbol of a transition row.
fn parse_transition_symbol(cell: &Pair<Rule>) -> Result<char, NtmError> {
    single_char(cell).ok_or_else(|| {
        malformed(
            &format!("Expected a single tape symbol, found \"{}\"", cell.as_str()),
            cell.as_span(),
        )
    })
}

/// Returns the cell's character if it holds exactly one.
fn single_char(cell: &Pair<Rule>) -> Option<char> {
    let mut chars = cell.as_str().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Creates an `NtmError::ParseError` from a message and a `Span`.
fn parse_error(msg: &str, span: Span) -> NtmError {
    NtmError::ParseError(Box::new(Error::new_from_span(
        ErrorVariant::CustomError {
            message: msg.to_string(),
        },
        span,
    )))
}

/// Creates an `NtmError::MalformedTransition` from a message and a `Span`.
fn malformed(msg: &str, span: Span) -> NtmError {
    NtmError::MalformedTransition(Box::new(Error::new_from_span(
        ErrorVariant::CustomError {
            message: msg.to_string(),
        },
        span,
    )))
}
