use crate::{
    grammar::{Expected, Grammar, Rule, Step},
    keyword::Symbol,
    parser::OperatorChaining,
    token::TokenKind,
};

/// Binary levels from lowest to highest precedence. Each level parses the
/// next one, then optionally an operator and the next one again.
const LEVELS: [(Rule, &[Symbol]); 9] = [
    (Rule::Expression, &[Symbol::OrOr]),
    (Rule::And, &[Symbol::AndAnd]),
    (Rule::BitwiseOr, &[Symbol::Pipe]),
    (Rule::BitwiseXor, &[Symbol::Caret]),
    (Rule::BitwiseAnd, &[Symbol::Amp]),
    (Rule::Equality, &[Symbol::Equal, Symbol::NotEqual]),
    (
        Rule::Relational,
        &[Symbol::LessEqual, Symbol::GreaterEqual, Symbol::Less, Symbol::Greater],
    ),
    (Rule::Additive, &[Symbol::Plus, Symbol::Minus]),
    (Rule::Multiplicative, &[Symbol::Star, Symbol::Slash, Symbol::Percent]),
];

impl Grammar<'_, '_> {
    pub(crate) fn expression(&mut self, idx: usize) -> Step {
        self.binary(0, idx)
    }

    fn binary(&mut self, level: usize, idx: usize) -> Step {
        let Some(&(rule, operators)) = LEVELS.get(level) else {
            return self.primary(idx);
        };

        self.rule(rule, idx, |g, idx| {
            g.ensure(idx)?;
            let mut idx = g.binary(level + 1, idx)?;
            while g.is_operator(idx, operators) {
                g.leaf(idx);
                idx = g.binary(level + 1, idx + 1)?;
                if g.chaining == OperatorChaining::Single {
                    break;
                }
            }
            Ok(idx)
        })
    }

    fn is_operator(&self, idx: usize, operators: &[Symbol]) -> bool {
        match self.tokens.get_kind(idx) {
            Some(TokenKind::Symbol(symbol)) => operators.contains(&symbol),
            _ => false,
        }
    }

    /// `Primary := '(' Expression ')' | Identifier | Constant`
    fn primary(&mut self, idx: usize) -> Step {
        self.rule(Rule::Primary, idx, |g, idx| {
            g.ensure(idx)?;
            match g.tokens.get_kind(idx) {
                Some(TokenKind::Symbol(Symbol::LeftParen)) => {
                    let idx = g.symbol(idx, Symbol::LeftParen)?;
                    let idx = g.expression(idx)?;
                    g.symbol(idx, Symbol::RightParen)
                }
                Some(TokenKind::Identifier(_)) => g.identifier(idx),
                Some(TokenKind::Constant(_)) => g.constant(idx),
                _ => Err(g.fail(idx, Some(Expected::Operand))),
            }
        })
    }
}
