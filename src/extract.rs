//! Command extraction from free text.
//!
//! One line can carry several commands:
//!
//! ```text
//! prefix COMMAND ( WS ARGUMENT )? ( terminator | end-of-input )
//! ```
//!
//! The command token and argument are both lazy, so the first terminator
//! (or the end of the line when no terminator is configured) ends a match.
//! Scanning resumes after each match, so matches never overlap.

use regex::Regex;

use crate::error::ExtractError;
use crate::text::{fold, supertrim};

/// Unicode space separators plus control characters, as a regex class body.
const SPACE_OR_CONTROL: &str = r"\p{Zs}\p{Zl}\p{Zp}\p{Cc}";

/// One command occurrence in a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// Folded command token.
    pub command: String,
    /// Supertrimmed argument; empty when none was given.
    pub argument: String,
}

/// Compiled extractor for one prefix/terminator pair.
#[derive(Debug, Clone)]
pub struct CommandExtractor {
    pattern: Regex,
}

impl CommandExtractor {
    /// Compile an extractor.
    ///
    /// Both strings are literal. An empty terminator means arguments only end
    /// at the end of the line.
    pub fn new(prefix: &str, terminator: &str) -> Result<Self, ExtractError> {
        if prefix.is_empty() {
            return Err(ExtractError::EmptyPrefix);
        }

        let end = if terminator.is_empty() {
            "$".to_owned()
        } else {
            format!("(?:{}|$)", regex::escape(terminator))
        };

        let source = format!(
            "(?s){prefix}([^{ws}]+?)([{ws}]+(.*?))?{end}",
            prefix = regex::escape(prefix),
            ws = SPACE_OR_CONTROL,
        );

        Ok(Self {
            pattern: Regex::new(&source)?,
        })
    }

    /// All matches in `text`, left to right.
    pub fn extract(&self, text: &str) -> Vec<Match> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| {
                let command = caps.get(1)?;
                let argument = caps.get(3).map_or("", |m| supertrim(m.as_str()));
                Some(Match {
                    command: fold(command.as_str()),
                    argument: argument.to_owned(),
                })
            })
            .collect()
    }
}
