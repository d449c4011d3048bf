//! Message parsing implementation.
//!
//! `FromStr` for `Message` built on a small nom grammar:
//!
//! ```text
//! [@tags] [:prefix] <command> [params...] [:trailing]
//! ```

use std::str::FromStr;

use nom::{
    bytes::complete::{take_until, take_while1},
    character::complete::{char, space0},
    combinator::opt,
    error::ErrorKind,
    sequence::preceded,
    IResult,
};
use smallvec::SmallVec;

use super::Message;
use crate::error::{MessageParseError, ProtocolError};
use crate::prefix::Prefix;

/// RFC 2812: at most 15 parameters.
const MAX_PARAMS: usize = 15;

fn parse_tags(input: &str) -> IResult<&str, &str> {
    preceded(char('@'), take_until(" "))(input)
}

fn parse_prefix(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), take_while1(|c| c != ' '))(input)
}

/// Parse the command name (1*letter or 3digit).
fn parse_command(input: &str) -> IResult<&str, &str> {
    let (rest, cmd) = take_while1(|c: char| c.is_ascii_alphanumeric())(input)?;

    let is_all_letters = cmd.chars().all(|c| c.is_ascii_alphabetic());
    let is_three_digits = cmd.len() == 3 && cmd.chars().all(|c| c.is_ascii_digit());

    if is_all_letters || is_three_digits {
        Ok((rest, cmd))
    } else {
        Err(nom::Err::Error(nom::error::Error::new(
            input,
            ErrorKind::AlphaNumeric,
        )))
    }
}

/// Split the parameter section.
///
/// Consecutive spaces collapse into one separator; a parameter starting with
/// `:` swallows the rest of the line.
fn parse_params(input: &str) -> SmallVec<[&str; MAX_PARAMS]> {
    let mut params: SmallVec<[&str; MAX_PARAMS]> = SmallVec::new();
    let mut rest = input;

    while rest.starts_with(' ') {
        if params.len() >= MAX_PARAMS {
            break;
        }

        rest = rest.trim_start_matches(' ');
        if rest.is_empty() {
            break;
        }

        if let Some(trailing) = rest.strip_prefix(':') {
            params.push(trailing);
            break;
        }

        let end = rest.find(' ').unwrap_or(rest.len());
        params.push(&rest[..end]);
        rest = &rest[end..];
    }

    params
}

fn parse_message(input: &str) -> IResult<&str, (Option<&str>, &str, SmallVec<[&str; MAX_PARAMS]>)> {
    let (input, _tags) = opt(parse_tags)(input)?;
    let (input, _) = space0(input)?;
    let (input, prefix) = opt(parse_prefix)(input)?;
    let (input, _) = space0(input)?;
    let (input, command) = parse_command(input)?;
    let params = parse_params(input);
    Ok(("", (prefix, command, params)))
}

impl FromStr for Message {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Message, Self::Err> {
        let line = s.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return Err(ProtocolError::InvalidMessage {
                string: s.to_owned(),
                cause: MessageParseError::EmptyMessage,
            });
        }

        let (_, (prefix, command, params)) = parse_message(line).map_err(|e| {
            let position = match e {
                nom::Err::Error(e) | nom::Err::Failure(e) => line.len() - e.input.len(),
                nom::Err::Incomplete(_) => line.len(),
            };
            ProtocolError::InvalidMessage {
                string: s.to_owned(),
                cause: MessageParseError::InvalidCommand { position },
            }
        })?;

        Ok(Message {
            prefix: prefix.map(Prefix::new_from_str),
            command: command.to_ascii_uppercase(),
            params: params.iter().map(|p| (*p).to_owned()).collect(),
        })
    }
}
