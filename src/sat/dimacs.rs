#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser and writer for the DIMACS CNF format.
//!
//! The accepted subset:
//! - lines starting with `c` are comments;
//! - exactly one `p cnf <num_vars> <num_clauses>` problem line must precede
//!   the clauses (the declared clause count is read but not validated);
//! - every other non-blank line is a clause of whitespace-separated signed
//!   integers terminated by a `0` token;
//! - a line starting with `%` ends the data, as some benchmark suites emit.
//!
//! On success the solver's answer is written back in the conventional
//! solution-line form: `s SATISFIABLE` followed by a `v` line listing one
//! signed literal per variable, `0`-terminated.

use crate::sat::assignment::Solutions;
use crate::sat::cnf::Cnf;
use crate::sat::error::SolverError;
use itertools::Itertools;
use std::io::{self, BufRead, Write};

/// Parses DIMACS text from a buffered reader into a [`Cnf`].
///
/// # Errors
///
/// Any [`SolverError`] variant describing malformed input, or
/// [`SolverError::Io`] if the reader fails.
pub fn parse_dimacs<R: BufRead>(reader: R) -> Result<Cnf, SolverError> {
    let mut num_vars: Option<usize> = None;
    let mut clauses: Vec<Vec<i32>> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim_start();

        match trimmed.chars().next() {
            None | Some('c') => {}
            Some('%') => break,
            Some('p') => num_vars = Some(parse_problem_line(trimmed)?),
            Some(_) => {
                if num_vars.is_none() {
                    return Err(SolverError::MissingProblemLine);
                }
                clauses.push(parse_clause_line(trimmed)?);
            }
        }
    }

    let num_vars = num_vars.ok_or(SolverError::MissingProblemLine)?;
    Cnf::new(num_vars, clauses)
}

/// Opens `path` and parses it as DIMACS CNF.
///
/// # Errors
///
/// [`SolverError::Io`] if the file cannot be opened or read; otherwise as
/// [`parse_dimacs`].
pub fn parse_file(path: &str) -> Result<Cnf, SolverError> {
    let file = std::fs::File::open(path)?;
    parse_dimacs(io::BufReader::new(file))
}

fn parse_problem_line(line: &str) -> Result<usize, SolverError> {
    let tokens = line.split_whitespace().collect_vec();
    if tokens.len() < 4 || tokens[0] != "p" || tokens[1] != "cnf" {
        return Err(SolverError::InvalidProblemLine(line.to_string()));
    }

    let declared: i64 = tokens[2]
        .parse()
        .map_err(|_| SolverError::InvalidProblemLine(line.to_string()))?;
    if declared <= 0 {
        return Err(SolverError::NonPositiveVariableCount(declared));
    }

    // tokens[3] is the declared clause count; it is not checked against the
    // clause lines that actually follow.
    tokens[3]
        .parse::<i64>()
        .map_err(|_| SolverError::InvalidProblemLine(line.to_string()))?;

    Ok(declared as usize)
}

fn parse_clause_line(line: &str) -> Result<Vec<i32>, SolverError> {
    let mut literals = Vec::new();
    for token in line.split_whitespace() {
        let value: i32 = token
            .parse()
            .map_err(|_| SolverError::InvalidLiteral(token.to_string()))?;
        if value == 0 {
            break;
        }
        literals.push(value);
    }
    Ok(literals)
}

/// Writes the satisfiable answer: an `s` status line and the `0`-terminated
/// `v` model line.
///
/// # Errors
///
/// Propagates writer failures.
pub fn write_solution<W: Write>(writer: &mut W, solutions: &Solutions) -> io::Result<()> {
    writeln!(writer, "s SATISFIABLE")?;
    writeln!(writer, "v {} 0", solutions.iter().join(" "))
}

/// Writes the unknown answer emitted when a restart ceiling is exhausted.
/// Unknown is distinct from unsatisfiable; this engine can never conclude
/// the latter.
///
/// # Errors
///
/// Propagates writer failures.
pub fn write_unknown<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(writer, "s UNKNOWN")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_simple() {
        let input = "c a comment\np cnf 3 2\n1 -2 0\n2 3 0\n";
        let cnf = parse_dimacs(Cursor::new(input)).unwrap();
        assert_eq!(cnf.num_vars, 3);
        assert_eq!(cnf.len(), 2);
        assert_eq!(cnf[0].len(), 2);
    }

    #[test]
    fn test_parse_blank_lines_and_end_marker() {
        let input = "p cnf 2 2\n\n1 0\n\n-2 0\n%\nthis is ignored\n";
        let cnf = parse_dimacs(Cursor::new(input)).unwrap();
        assert_eq!(cnf.len(), 2);
    }

    #[test]
    fn test_declared_clause_count_not_validated() {
        let input = "p cnf 2 99\n1 2 0\n";
        let cnf = parse_dimacs(Cursor::new(input)).unwrap();
        assert_eq!(cnf.len(), 1);
    }

    #[test]
    fn test_missing_problem_line() {
        assert!(matches!(
            parse_dimacs(Cursor::new("1 -2 0\n")),
            Err(SolverError::MissingProblemLine)
        ));
        assert!(matches!(
            parse_dimacs(Cursor::new("c only comments\n")),
            Err(SolverError::MissingProblemLine)
        ));
    }

    #[test]
    fn test_invalid_problem_line() {
        assert!(matches!(
            parse_dimacs(Cursor::new("p dnf 2 2\n")),
            Err(SolverError::InvalidProblemLine(_))
        ));
        assert!(matches!(
            parse_dimacs(Cursor::new("p cnf two 2\n")),
            Err(SolverError::InvalidProblemLine(_))
        ));
    }

    #[test]
    fn test_non_positive_variable_count() {
        assert!(matches!(
            parse_dimacs(Cursor::new("p cnf 0 1\n")),
            Err(SolverError::NonPositiveVariableCount(0))
        ));
        assert!(matches!(
            parse_dimacs(Cursor::new("p cnf -3 1\n")),
            Err(SolverError::NonPositiveVariableCount(-3))
        ));
    }

    #[test]
    fn test_bad_literal_token() {
        assert!(matches!(
            parse_dimacs(Cursor::new("p cnf 2 1\n1 abc 0\n")),
            Err(SolverError::InvalidLiteral(_))
        ));
    }

    #[test]
    fn test_empty_clause_rejected() {
        assert!(matches!(
            parse_dimacs(Cursor::new("p cnf 1 1\n0\n")),
            Err(SolverError::EmptyClause(0))
        ));
    }

    #[test]
    fn test_out_of_range_literal() {
        assert!(matches!(
            parse_dimacs(Cursor::new("p cnf 2 1\n1 3 0\n")),
            Err(SolverError::LiteralOutOfRange {
                literal: 3,
                num_vars: 2
            })
        ));
    }

    #[test]
    fn test_write_solution() {
        let mut out = Vec::new();
        write_solution(&mut out, &vec![1, -2, 3]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "s SATISFIABLE\nv 1 -2 3 0\n"
        );
    }

    #[test]
    fn test_write_unknown() {
        let mut out = Vec::new();
        write_unknown(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "s UNKNOWN\n");
    }
}
