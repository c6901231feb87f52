use std::fmt;

use simdutf8::basic::Utf8Error;
use thiserror::Error;

use crate::{grammar::{Expected, Rule}, report::Diagnostic};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParserError {
    #[error("invalid utf-8")]
    InvalidUtf8(#[from] Utf8Error),

    #[error("unexpected character `{character}` in line {line}: {text}")]
    UnexpectedCharacter {
        character: char,
        line: usize,
        text: String,
    },

    #[error("multiple decimal points in one constant `{literal}` in line {line}")]
    MultipleDecimalPoints { literal: String, line: usize },

    #[error("decimal ends with alphabetic character `{literal}` in line {line}")]
    DecimalEndsWithAlphabetic { literal: String, line: usize },

    #[error("`{identifier}` is not a valid identifier in line {line}")]
    InvalidIdentifier { identifier: String, line: usize },

    #[error("{0}")]
    Syntax(Box<SyntaxError>),
}

impl ParserError {
    pub fn is_lexical(&self) -> bool {
        !matches!(self, ParserError::Syntax(_) | ParserError::InvalidUtf8(_))
    }

    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            ParserError::Syntax(error) => Some(error),
            _ => None,
        }
    }
}

/// First structural failure of a parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Index of the offending token.
    pub index: usize,
    pub expected: Option<Expected>,
    /// Grammar rules active at the failure, outermost first.
    pub trace: Vec<Rule>,
    pub diagnostic: Diagnostic,
}

impl SyntaxError {
    /// The rule trace as `Source > Statement > ...`.
    pub fn trace_line(&self) -> String {
        self.trace
            .iter()
            .map(|rule| rule.as_str())
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diagnostic)
    }
}
