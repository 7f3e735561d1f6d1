//! Scans path data into [`Command`]s.
//!
//! Every supported letter is followed by exactly the number of arguments it
//! takes. Arguments are separated by whitespace and/or a single comma, or sit
//! directly next to each other when a sign makes the boundary unambiguous
//! (`M10-5`). Anything the grammar does not accept is reported as an
//! unsupported segment running up to the next command letter.

use anyhow::Result;
use nom::{
    bytes::complete::{take_till, take_while},
    character::complete::{anychar, char, digit1, one_of},
    combinator::{map_res, opt, recognize},
    error::{Error as NomError, ErrorKind},
    multi::count,
    sequence::{pair, preceded, tuple},
    IResult,
};
use tracing::warn;

use crate::{command::Command, error::PathError};

type LexResult<'a, O> = IResult<&'a str, O>;

/// A recognized command together with the text it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme<'a> {
    pub text: &'a str,
    pub command: Command,
}

#[inline]
fn is_command_letter(c: char) -> bool {
    Command::LETTERS.contains(c)
}

/// Same whitespace as [`space`], plus commas.
#[inline]
fn is_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

#[inline]
fn to_nom<O>(result: Option<O>, input: &str, error_kind: ErrorKind) -> LexResult<O> {
    result
        .map(|o| (input, o))
        .ok_or_else(|| nom::Err::Error(NomError::new(input, error_kind)))
}

fn number(input: &str) -> LexResult<f64> {
    map_res(
        recognize(tuple((opt(char('-')), digit1, opt(pair(char('.'), digit1))))),
        str::parse::<f64>,
    )(input)
}

fn space(input: &str) -> LexResult<&str> {
    take_while(char::is_whitespace)(input)
}

fn separator(input: &str) -> LexResult<()> {
    let (rest, _) = tuple((space, opt(char(',')), space))(input)?;
    Ok((rest, ()))
}

fn command(input: &str) -> LexResult<Command> {
    let (rest, letter) = one_of(Command::LETTERS)(input)?;
    let (_, arity) = to_nom(Command::arity(letter), rest, ErrorKind::OneOf)?;
    let (rest, args) = count(preceded(separator, number), arity)(rest)?;
    to_nom(Command::from_parts(letter, &args), rest, ErrorKind::Count)
}

/// Takes the offending character plus everything up to the next command letter.
fn unsupported(input: &str) -> LexResult<&str> {
    recognize(pair(anychar, take_till(is_command_letter)))(input)
}

/// Lazily walks path data, yielding one item per command or unsupported segment.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Scanner<'a> {
    type Item = std::result::Result<Lexeme<'a>, PathError>;

    fn next(&mut self) -> Option<Self::Item> {
        let input = self.rest.trim_start_matches(is_separator);
        if input.is_empty() {
            self.rest = input;
            return None;
        }

        if let Ok((rest, command)) = command(input) {
            self.rest = rest;
            let text = &input[..input.len() - rest.len()];
            return Some(Ok(Lexeme { text, command }));
        }

        let (rest, segment) = unsupported(input).unwrap_or(("", input));
        self.rest = rest;
        Some(Err(PathError::UnsupportedCommand {
            segment: segment.trim_end_matches(is_separator).to_string(),
        }))
    }
}

pub fn scan(path: &str) -> Scanner<'_> {
    Scanner { rest: path }
}

/// Collects every recognized command in order of appearance.
///
/// Unsupported segments are logged and skipped. Fails only when nothing at
/// all could be recognized.
pub fn tokenize(path: &str) -> Result<Vec<Lexeme<'_>>> {
    let lexemes = scan(path)
        .filter_map(|item| match item {
            Ok(lexeme) => Some(lexeme),
            Err(err) => {
                warn!(%err, "skipping path segment");
                None
            }
        })
        .collect::<Vec<_>>();

    if lexemes.is_empty() {
        return Err(PathError::NoCommandsFound.into());
    }
    Ok(lexemes)
}
