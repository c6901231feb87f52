use bumpalo::Bump;
use simdutf8::basic::from_utf8;
use tracing::debug;

use crate::{
    error::{ParserError, SyntaxError},
    grammar::Grammar,
    keyword::KeywordMatcher,
    lexer::{Lexer, Source},
    report::{Diagnostic, Locale},
    token::TokenTable,
    tree::ParseTree,
};

/// How a binary precedence level treats a second operator of its own kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OperatorChaining {
    /// One operator per level: `a + b + c` is rejected at the second `+`.
    #[default]
    Single,
    /// `higher (op higher)*`
    LeftAssociative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    pub operators: OperatorChaining,
    pub locale: Locale,
}

impl ParserOptions {
    pub fn with_operators(mut self, operators: OperatorChaining) -> Self {
        self.operators = operators;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}

/// A program the grammar accepted.
#[derive(Debug)]
pub struct Accepted<'bump> {
    pub source: Source<'bump>,
    pub tokens: TokenTable<'bump>,
    pub tree: ParseTree<'bump>,
    /// Index of the end-of-source token.
    pub last: usize,
}

#[derive(Debug)]
pub struct Parser<'bump> {
    allocator: &'bump Bump,
    keyword_matcher: KeywordMatcher,
    options: ParserOptions,
}

impl<'bump> Parser<'bump> {
    pub fn new(allocator: &'bump Bump) -> Self {
        Self::with_options(allocator, ParserOptions::default())
    }

    pub fn with_options(allocator: &'bump Bump, options: ParserOptions) -> Self {
        Self {
            allocator,
            keyword_matcher: KeywordMatcher::new(),
            options,
        }
    }

    pub fn options(&self) -> ParserOptions {
        self.options
    }

    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Accepted<'bump>, ParserError> {
        let text = from_utf8(bytes)?;
        self.parse(text)
    }

    /// Scans only: the token sequence and literal tables of `text`.
    pub fn tokenize(&self, text: &str) -> Result<TokenTable<'bump>, ParserError> {
        let source = Source::new(text, self.allocator);
        Lexer::new(&source, &self.keyword_matcher, self.allocator).tokenize()
    }

    pub fn parse(&self, text: &str) -> Result<Accepted<'bump>, ParserError> {
        let source = Source::new(text, self.allocator);
        let tokens = Lexer::new(&source, &self.keyword_matcher, self.allocator).tokenize()?;

        let (tree, result) = Grammar::new(&tokens, self.options.operators).parse();
        match result {
            Ok(last) => {
                debug!(tokens = tokens.len(), nodes = tree.len(), "accepted");
                Ok(Accepted {
                    source,
                    tokens,
                    tree,
                    last,
                })
            }
            Err(failure) => {
                let diagnostic = Diagnostic::new(&source, &tokens, failure.index, self.options.locale);
                debug!(
                    index = failure.index,
                    line = diagnostic.line,
                    token = diagnostic.token.as_str(),
                    "rejected"
                );
                Err(ParserError::Syntax(Box::new(SyntaxError {
                    index: failure.index,
                    expected: failure.expected,
                    trace: failure.trace,
                    diagnostic,
                })))
            }
        }
    }
}
