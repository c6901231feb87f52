use std::fmt;

use crate::{lexer::Source, token::TokenTable};

/// Language of the diagnostic's closing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Chinese,
}

/// Formatted report of an illegal token: the source line, a caret under
/// the token, and a message naming line and token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub text: String,
    /// Character column of the token within `text`, counted from 0.
    pub column: usize,
    pub token: String,
    pub message: String,
}

impl Diagnostic {
    pub(crate) fn new(source: &Source<'_>, tokens: &TokenTable<'_>, index: usize, locale: Locale) -> Self {
        // an index past the end reports against the final token
        let index = index.min(tokens.len().saturating_sub(1));
        let line = tokens.get(index).map_or(source.line_count(), |token| token.line);
        let token = tokens.text(index).unwrap_or_default();
        let text = source.line(line).unwrap_or_default();

        // last occurrence on the line; a token missing from the line (the
        // synthetic end marker) is placed after the final character
        let column = match text.rfind(token) {
            Some(offset) if !token.is_empty() => text[..offset].chars().count(),
            _ => text.chars().count(),
        };

        let message = match locale {
            Locale::English => {
                format!("error: illegal token '{token}' found in line {line} of the source file")
            }
            Locale::Chinese => format!("错误: 在源文件第{line}行发现非法Token'{token}'"),
        };

        Self {
            line,
            text: text.to_string(),
            column,
            token: token.to_string(),
            message,
        }
    }

    /// Caret line, aligned under the token as printed by `Display`.
    pub fn marker(&self) -> String {
        let padding = self.line.to_string().len() + 2 + self.column;
        format!("{}^", " ".repeat(padding))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.line, self.text)?;
        writeln!(f, "{}", self.marker())?;
        write!(f, "{}", self.message)
    }
}
