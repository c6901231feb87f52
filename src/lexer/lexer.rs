use std::{iter::Peekable, str::CharIndices};

use bumpalo::Bump;
use tracing::debug;

use crate::{
    error::ParserError,
    keyword::{KeywordMatcher, Symbol},
    lexer::{Source, decimal::is_decimal},
    token::{TokenKind, TokenTable},
};

#[derive(Debug)]
pub(crate) struct Lexer<'a, 'bump> {
    inner: Peekable<CharIndices<'bump>>,
    source: &'a Source<'bump>,
    keyword_matcher: &'a KeywordMatcher,
    allocator: &'bump Bump,
    table: TokenTable<'bump>,
    line: usize,
}

impl<'a, 'bump> Lexer<'a, 'bump> {
    pub(crate) fn new(
        source: &'a Source<'bump>,
        keyword_matcher: &'a KeywordMatcher,
        allocator: &'bump Bump,
    ) -> Self {
        Self {
            inner: source.text().char_indices().peekable(),
            source,
            keyword_matcher,
            allocator,
            table: TokenTable::new(),
            line: 1,
        }
    }

    // byte offset of the next unread character
    #[inline]
    fn offset(&mut self) -> usize {
        self.inner
            .peek()
            .map_or(self.source.text().len(), |(index, _)| *index)
    }

    // 匹配运算符与界符
    #[inline]
    fn match_symbol(&mut self) -> Result<Symbol, ParserError> {
        let (_, first) = match self.inner.next() {
            Some(entry) => entry,
            None => return Ok(Symbol::End),
        };
        let next = self.inner.peek().map(|(_, c)| *c);

        match self.keyword_matcher.match_symbol(first, next) {
            Some((symbol, 2)) => {
                self.inner.next();
                Ok(symbol)
            }
            Some((symbol, _)) => Ok(symbol),
            None => Err(self.unexpected(first)),
        }
    }

    // 匹配数字
    #[inline]
    fn match_number(&mut self, start: usize) -> Result<(), ParserError> {
        let text = self.source.text();
        let mut decimal_point = false;

        while let Some((index, c)) = self.inner.next_if(|(_, c)| is_decimal(*c) || *c == '.') {
            if c == '.' {
                if decimal_point {
                    return Err(ParserError::MultipleDecimalPoints {
                        literal: text[start..=index].to_string(),
                        line: self.line,
                    });
                }
                decimal_point = true;
            }
        }

        let end = self.offset();
        if let Some((index, c)) = self.inner.peek().copied() {
            if c.is_alphabetic() {
                return Err(ParserError::DecimalEndsWithAlphabetic {
                    literal: text[start..index + c.len_utf8()].to_string(),
                    line: self.line,
                });
            }
        }

        self.table.push_constant(self.allocator, &text[start..end], self.line);
        Ok(())
    }

    // 匹配标识符与保留字
    #[inline]
    fn match_identify(&mut self, start: usize) -> Result<(), ParserError> {
        let text = self.source.text();
        while self
            .inner
            .next_if(|(_, c)| c.is_alphabetic() || is_decimal(*c))
            .is_some()
        {}
        let end = self.offset();
        let word = &text[start..end];

        if let Some(keyword) = self.keyword_matcher.match_keyword(word) {
            self.table.push(TokenKind::Reserved(keyword), self.line);
        } else if Self::is_valid(word) {
            self.table.push_identifier(self.allocator, word, self.line);
        } else {
            return Err(ParserError::InvalidIdentifier {
                identifier: word.to_string(),
                line: self.line,
            });
        }
        Ok(())
    }

    // 词法分析主函数
    pub(crate) fn tokenize(mut self) -> Result<TokenTable<'bump>, ParserError> {
        loop {
            let (index, c) = match self.inner.peek().copied() {
                Some(entry) => entry,
                None => {
                    // no explicit `#`: terminate the sequence on the last line
                    self.table.push(TokenKind::Symbol(Symbol::End), self.line);
                    break;
                }
            };

            match c {
                '\n' => {
                    self.inner.next();
                    self.line += 1;
                }
                c if c.is_whitespace() => {
                    self.inner.next();
                }
                c if self.keyword_matcher.is_symbol_start(c) => {
                    let symbol = self.match_symbol()?;
                    self.table.push(TokenKind::Symbol(symbol), self.line);
                    if symbol == Symbol::End {
                        break;
                    }
                }
                c if c.is_alphabetic() => self.match_identify(index)?,
                c if is_decimal(c) => self.match_number(index)?,
                c => return Err(self.unexpected(c)),
            }
        }

        debug!(
            tokens = self.table.len(),
            constants = self.table.constants().len(),
            identifiers = self.table.identifiers().len(),
            lines = self.line,
            "tokenize finished"
        );
        Ok(self.table)
    }

    fn is_valid(word: &str) -> bool {
        word.chars().next().is_some_and(|c| !is_decimal(c))
    }

    fn unexpected(&self, character: char) -> ParserError {
        ParserError::UnexpectedCharacter {
            character,
            line: self.line,
            text: self.source.line(self.line).unwrap_or_default().to_string(),
        }
    }
}
