use crate::keyword::{RESERVED, Reserved, SYMBOLS, Symbol};

/// Resolves spellings against the symbol and reserved-word catalogues.
#[derive(Debug)]
pub(crate) struct KeywordMatcher {
    symbols: &'static phf::Map<&'static str, Symbol>,
    reserved: &'static phf::Map<&'static str, Reserved>,
}

impl KeywordMatcher {
    pub(crate) fn new() -> Self {
        Self {
            symbols: &SYMBOLS,
            reserved: &RESERVED,
        }
    }

    pub(crate) fn match_keyword(&self, word: &str) -> Option<Reserved> {
        self.reserved.get(word).copied()
    }

    pub(crate) fn is_symbol_start(&self, c: char) -> bool {
        let mut buf = [0u8; 4];
        self.symbols.contains_key(c.encode_utf8(&mut buf))
    }

    /// Greedy match: the pair `first next` wins over `first` alone.
    /// Returns the symbol and how many characters it spans.
    pub(crate) fn match_symbol(&self, first: char, next: Option<char>) -> Option<(Symbol, usize)> {
        let mut pair = String::with_capacity(8);
        pair.push(first);
        if first != '#' {
            if let Some(next) = next {
                pair.push(next);
                if let Some(symbol) = self.symbols.get(pair.as_str()) {
                    return Some((*symbol, 2));
                }
                pair.pop();
            }
        }
        self.symbols.get(pair.as_str()).map(|symbol| (*symbol, 1))
    }
}
