mod decimal;
mod lexer;
mod source;

pub(crate) use lexer::Lexer;
pub use source::Source;
