mod matcher;

use std::fmt;

use phf::phf_map;
use strum::{Display, IntoStaticStr, VariantArray};

pub(crate) use matcher::KeywordMatcher;

/// Punctuation and operators, in catalogue order.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, IntoStaticStr, VariantArray)]
pub enum Symbol {
    #[strum(serialize = "#")]
    End,
    #[strum(serialize = "+")]
    Plus,
    #[strum(serialize = "-")]
    Minus,
    #[strum(serialize = "*")]
    Star,
    #[strum(serialize = "/")]
    Slash,
    #[strum(serialize = "%")]
    Percent,
    #[strum(serialize = "=")]
    Assign,
    #[strum(serialize = "(")]
    LeftParen,
    #[strum(serialize = ")")]
    RightParen,
    #[strum(serialize = "{")]
    LeftBrace,
    #[strum(serialize = "}")]
    RightBrace,
    #[strum(serialize = ">")]
    Greater,
    #[strum(serialize = "<")]
    Less,
    #[strum(serialize = ";")]
    Semicolon,
    #[strum(serialize = "^")]
    Caret,
    #[strum(serialize = "!")]
    Bang,
    #[strum(serialize = "&")]
    Amp,
    #[strum(serialize = "|")]
    Pipe,
    #[strum(serialize = "==")]
    Equal,
    #[strum(serialize = "!=")]
    NotEqual,
    #[strum(serialize = ">=")]
    GreaterEqual,
    #[strum(serialize = "<=")]
    LessEqual,
    #[strum(serialize = "&&")]
    AndAnd,
    #[strum(serialize = "||")]
    OrOr,
}

impl Symbol {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

// braces in the spellings rule out strum's format-string `Display`
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reserved words. Control keywords come first, declaration types after.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Display, IntoStaticStr, VariantArray)]
#[strum(serialize_all = "lowercase")]
pub enum Reserved {
    If,
    Else,
    While,
    Int,
    Float,
    Double,
    Bool,
}

impl Reserved {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Keywords that open a variable definition.
    pub fn is_type(self) -> bool {
        matches!(
            self,
            Reserved::Int | Reserved::Float | Reserved::Double | Reserved::Bool
        )
    }
}

pub(crate) static SYMBOLS: phf::Map<&'static str, Symbol> = phf_map! {
    "#" => Symbol::End,
    "+" => Symbol::Plus,
    "-" => Symbol::Minus,
    "*" => Symbol::Star,
    "/" => Symbol::Slash,
    "%" => Symbol::Percent,
    "=" => Symbol::Assign,
    "(" => Symbol::LeftParen,
    ")" => Symbol::RightParen,
    "{" => Symbol::LeftBrace,
    "}" => Symbol::RightBrace,
    ">" => Symbol::Greater,
    "<" => Symbol::Less,
    ";" => Symbol::Semicolon,
    "^" => Symbol::Caret,
    "!" => Symbol::Bang,
    "&" => Symbol::Amp,
    "|" => Symbol::Pipe,
    "==" => Symbol::Equal,
    "!=" => Symbol::NotEqual,
    ">=" => Symbol::GreaterEqual,
    "<=" => Symbol::LessEqual,
    "&&" => Symbol::AndAnd,
    "||" => Symbol::OrOr,
};

pub(crate) static RESERVED: phf::Map<&'static str, Reserved> = phf_map! {
    "if" => Reserved::If,
    "else" => Reserved::Else,
    "while" => Reserved::While,
    "int" => Reserved::Int,
    "float" => Reserved::Float,
    "double" => Reserved::Double,
    "bool" => Reserved::Bool,
};
