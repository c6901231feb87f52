use std::collections::HashMap;

use bumpalo::Bump;

use crate::keyword::{Reserved, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Symbol(Symbol),
    Reserved(Reserved),
    /// Index into the constant table.
    Constant(usize),
    /// Index into the identifier table.
    Identifier(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// 1-based source line.
    pub line: usize,
}

/// Append-only, deduplicated literal spellings. Indices are dense and
/// follow first appearance.
#[derive(Debug, Default)]
pub struct LiteralTable<'bump> {
    entries: Vec<&'bump str>,
    lookup: HashMap<&'bump str, usize>,
}

impl<'bump> LiteralTable<'bump> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            lookup: HashMap::new(),
        }
    }

    pub(crate) fn intern(&mut self, allocator: &'bump Bump, text: &str) -> usize {
        if let Some(index) = self.lookup.get(text) {
            return *index;
        }
        let text: &'bump str = allocator.alloc_str(text);
        let index = self.entries.len();
        self.entries.push(text);
        self.lookup.insert(text, index);
        index
    }

    pub fn get(&self, index: usize) -> Option<&'bump str> {
        self.entries.get(index).copied()
    }

    pub fn position(&self, text: &str) -> Option<usize> {
        self.lookup.get(text).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &'bump str)> + '_ {
        self.entries.iter().copied().enumerate()
    }
}

/// Scanner output: the token sequence plus the literal tables it indexes.
#[derive(Debug, Default)]
pub struct TokenTable<'bump> {
    tokens: Vec<Token>,
    constants: LiteralTable<'bump>,
    identifiers: LiteralTable<'bump>,
}

impl<'bump> TokenTable<'bump> {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            constants: LiteralTable::new(),
            identifiers: LiteralTable::new(),
        }
    }

    pub(crate) fn push(&mut self, kind: TokenKind, line: usize) {
        self.tokens.push(Token { kind, line });
    }

    pub(crate) fn push_constant(&mut self, allocator: &'bump Bump, text: &str, line: usize) {
        let index = self.constants.intern(allocator, text);
        self.push(TokenKind::Constant(index), line);
    }

    pub(crate) fn push_identifier(&mut self, allocator: &'bump Bump, text: &str, line: usize) {
        let index = self.identifiers.intern(allocator, text);
        self.push(TokenKind::Identifier(index), line);
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn get_kind(&self, index: usize) -> Option<TokenKind> {
        self.tokens.get(index).map(|token| token.kind)
    }

    pub fn is_symbol(&self, index: usize, symbol: Symbol) -> bool {
        self.get_kind(index) == Some(TokenKind::Symbol(symbol))
    }

    pub fn is_reserved(&self, index: usize, keyword: Reserved) -> bool {
        self.get_kind(index) == Some(TokenKind::Reserved(keyword))
    }

    pub fn is_identifier(&self, index: usize) -> bool {
        matches!(self.get_kind(index), Some(TokenKind::Identifier(_)))
    }

    /// Source spelling of the token at `index`.
    pub fn text(&self, index: usize) -> Option<&'bump str> {
        match self.get_kind(index)? {
            TokenKind::Symbol(symbol) => Some(symbol.as_str()),
            TokenKind::Reserved(keyword) => Some(keyword.as_str()),
            TokenKind::Constant(slot) => self.constants.get(slot),
            TokenKind::Identifier(slot) => self.identifiers.get(slot),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn constants(&self) -> &LiteralTable<'bump> {
        &self.constants
    }

    pub fn identifiers(&self) -> &LiteralTable<'bump> {
        &self.identifiers
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
