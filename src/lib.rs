//! Front end for a small imperative teaching language.
//!
//! Source text is scanned into tokens and literal tables, then checked
//! against a fixed recursive-descent grammar that records a concrete
//! syntax tree. The first lexical or structural error ends the run and is
//! reported with its line and a caret under the offending token.

mod error;
mod grammar;
mod keyword;
mod lexer;
pub mod parser;
mod report;
mod stack;
mod token;
mod tree;

pub use {
    error::{ParserError, SyntaxError},
    grammar::{Expected, Rule},
    keyword::{Reserved, Symbol},
    lexer::Source,
    parser::{Accepted, OperatorChaining, Parser, ParserOptions},
    report::{Diagnostic, Locale},
    token::{LiteralTable, Token, TokenKind, TokenTable},
    tree::{Node, NodeId, NodeKind, ParseTree},
};
