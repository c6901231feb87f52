//! Recursive-descent grammar.
//!
//! One procedure per non-terminal. Each takes the index of the next
//! unconsumed token and returns the index after what it consumed, or the
//! [`Failure`] raised at the first illegal token. Every procedure opens a
//! node in the parse tree for as long as it runs.

mod expression;
mod statement;

use std::fmt;

use strum::{Display, IntoStaticStr, VariantArray};
use tracing::trace;

use crate::{
    keyword::Symbol,
    parser::OperatorChaining,
    stack::ensure_sufficient_stack,
    token::{TokenKind, TokenTable},
    tree::{ParseTree, TreeBuilder},
};

/// Grammar non-terminals and terminal matchers, as they label tree nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr, VariantArray)]
pub enum Rule {
    Source,
    Statement,
    Assignment,
    #[strum(to_string = "Assignment_util")]
    AssignmentUtil,
    Definition,
    If,
    While,
    Block,
    Expression,
    And,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Primary,
    Identifier,
    Constant,
    Symbol,
}

impl Rule {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// What a failing rule was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Symbol(Symbol),
    Identifier,
    Constant,
    Statement,
    Operand,
    EndOfSource,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Symbol(symbol) => write!(f, "`{symbol}`"),
            Expected::Identifier => write!(f, "identifier"),
            Expected::Constant => write!(f, "constant"),
            Expected::Statement => write!(f, "statement"),
            Expected::Operand => write!(f, "`(`, identifier or constant"),
            Expected::EndOfSource => write!(f, "end of source"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Failure {
    pub(crate) index: usize,
    pub(crate) expected: Option<Expected>,
    pub(crate) trace: Vec<Rule>,
}

pub(crate) type Step = Result<usize, Failure>;

#[derive(Debug)]
pub(crate) struct Grammar<'t, 'bump> {
    tokens: &'t TokenTable<'bump>,
    tree: TreeBuilder<'bump>,
    chaining: OperatorChaining,
    active: Vec<Rule>,
}

impl<'t, 'bump> Grammar<'t, 'bump> {
    pub(crate) fn new(tokens: &'t TokenTable<'bump>, chaining: OperatorChaining) -> Self {
        Self {
            tokens,
            tree: TreeBuilder::new(),
            chaining,
            active: Vec::new(),
        }
    }

    /// Parses the whole token sequence. On success the returned index is
    /// the end-of-source token; leftover tokens fail at the first of them.
    pub(crate) fn parse(mut self) -> (ParseTree<'bump>, Step) {
        let result = match self.source(0) {
            Ok(end) if end + 1 == self.tokens.len() => Ok(end),
            Ok(end) => Err(Failure {
                index: end,
                expected: Some(Expected::EndOfSource),
                trace: Vec::new(),
            }),
            Err(failure) => Err(failure),
        };
        (self.tree.finish(), result)
    }

    fn rule(&mut self, rule: Rule, idx: usize, body: impl FnOnce(&mut Self, usize) -> Step) -> Step {
        trace!(index = idx, rule = rule.as_str(), "enter");
        let previous = self.tree.enter(rule);
        self.active.push(rule);
        let result = ensure_sufficient_stack(|| body(self, idx));
        self.active.pop();
        self.tree.exit(previous);
        result
    }

    /// Fails at the last token when `idx` runs past the sequence. Lookahead
    /// beyond `idx` goes through the `Option`-returning accessors instead, so
    /// a short statement fails at its own illegal token.
    fn ensure(&self, idx: usize) -> Result<(), Failure> {
        if idx >= self.tokens.len() {
            Err(self.fail(self.tokens.len().saturating_sub(1), None))
        } else {
            Ok(())
        }
    }

    fn fail(&self, idx: usize, expected: Option<Expected>) -> Failure {
        trace!(index = idx, rules = ?self.active, "fail");
        Failure {
            index: idx,
            expected,
            trace: self.active.clone(),
        }
    }

    fn leaf(&mut self, idx: usize) {
        let label = self.tokens.text(idx).unwrap_or_default();
        trace!(index = idx, token = label, "consume");
        self.tree.leaf(label, idx);
    }

    fn identifier(&mut self, idx: usize) -> Step {
        self.rule(Rule::Identifier, idx, |g, idx| {
            g.ensure(idx)?;
            if g.tokens.is_identifier(idx) {
                g.leaf(idx);
                Ok(idx + 1)
            } else {
                Err(g.fail(idx, Some(Expected::Identifier)))
            }
        })
    }

    fn constant(&mut self, idx: usize) -> Step {
        self.rule(Rule::Constant, idx, |g, idx| {
            g.ensure(idx)?;
            if let Some(TokenKind::Constant(_)) = g.tokens.get_kind(idx) {
                g.leaf(idx);
                Ok(idx + 1)
            } else {
                Err(g.fail(idx, Some(Expected::Constant)))
            }
        })
    }

    fn symbol(&mut self, idx: usize, symbol: Symbol) -> Step {
        self.rule(Rule::Symbol, idx, |g, idx| {
            g.ensure(idx)?;
            if g.tokens.is_symbol(idx, symbol) {
                g.leaf(idx);
                Ok(idx + 1)
            } else {
                Err(g.fail(idx, Some(Expected::Symbol(symbol))))
            }
        })
    }
}
