use crate::{
    grammar::{Expected, Grammar, Rule, Step},
    keyword::{Reserved, Symbol},
    token::TokenKind,
};

impl Grammar<'_, '_> {
    /// `Source := Statement*`, while the lookahead is a keyword or identifier.
    pub(crate) fn source(&mut self, idx: usize) -> Step {
        self.rule(Rule::Source, idx, |g, mut idx| {
            while let Some(TokenKind::Reserved(_) | TokenKind::Identifier(_)) = g.tokens.get_kind(idx) {
                idx = g.statement(idx)?;
            }
            Ok(idx)
        })
    }

    fn statement(&mut self, idx: usize) -> Step {
        self.rule(Rule::Statement, idx, |g, idx| {
            g.ensure(idx)?;
            match g.tokens.get_kind(idx) {
                Some(TokenKind::Identifier(_)) => g.assignment(idx),
                Some(TokenKind::Reserved(Reserved::If)) => g.if_statement(idx),
                Some(TokenKind::Reserved(Reserved::While)) => g.while_statement(idx),
                Some(TokenKind::Reserved(keyword)) if keyword.is_type() => g.definition(idx),
                _ => Err(g.fail(idx, Some(Expected::Statement))),
            }
        })
    }

    /// `Assignment := Assignment_util ';'`
    fn assignment(&mut self, idx: usize) -> Step {
        self.rule(Rule::Assignment, idx, |g, idx| {
            g.ensure(idx)?;
            let idx = g.assignment_util(idx)?;
            g.symbol(idx, Symbol::Semicolon)
        })
    }

    /// `Assignment_util := Identifier '=' (Identifier | Assignment_util | Expression)`
    fn assignment_util(&mut self, idx: usize) -> Step {
        self.rule(Rule::AssignmentUtil, idx, |g, idx| {
            let idx = g.identifier(idx)?;
            let idx = g.symbol(idx, Symbol::Assign)?;

            if g.tokens.is_identifier(idx) && g.tokens.is_symbol(idx + 1, Symbol::Semicolon) {
                g.identifier(idx)
            } else if g.tokens.is_identifier(idx) && g.tokens.is_symbol(idx + 1, Symbol::Assign) {
                g.assignment_util(idx)
            } else {
                g.expression(idx)
            }
        })
    }

    /// `Definition := TypeKeyword (Identifier ';' | Assignment)`
    fn definition(&mut self, idx: usize) -> Step {
        self.rule(Rule::Definition, idx, |g, idx| {
            g.ensure(idx)?;
            g.leaf(idx);
            if g.tokens.is_symbol(idx + 2, Symbol::Assign) {
                g.assignment(idx + 1)
            } else {
                let idx = g.identifier(idx + 1)?;
                g.symbol(idx, Symbol::Semicolon)
            }
        })
    }

    /// `If := 'if' '(' Expression ')' Block ('else' Block)?`
    fn if_statement(&mut self, idx: usize) -> Step {
        self.rule(Rule::If, idx, |g, idx| {
            let idx = g.condition(idx)?;
            let idx = g.block(idx)?;
            if g.tokens.is_reserved(idx, Reserved::Else) {
                g.leaf(idx);
                g.block(idx + 1)
            } else {
                Ok(idx)
            }
        })
    }

    /// `While := 'while' '(' Expression ')' Block`
    fn while_statement(&mut self, idx: usize) -> Step {
        self.rule(Rule::While, idx, |g, idx| {
            let idx = g.condition(idx)?;
            g.block(idx)
        })
    }

    // keyword '(' Expression ')', shared by `if` and `while`
    fn condition(&mut self, idx: usize) -> Step {
        self.ensure(idx)?;
        self.leaf(idx);
        let idx = self.symbol(idx + 1, Symbol::LeftParen)?;
        let idx = self.expression(idx)?;
        self.symbol(idx, Symbol::RightParen)
    }

    /// `Block := '{' Source '}' | Statement`
    fn block(&mut self, idx: usize) -> Step {
        self.rule(Rule::Block, idx, |g, idx| {
            g.ensure(idx)?;
            if g.tokens.is_symbol(idx, Symbol::LeftBrace) {
                let idx = g.symbol(idx, Symbol::LeftBrace)?;
                let idx = g.source(idx)?;
                g.symbol(idx, Symbol::RightBrace)
            } else {
                g.statement(idx)
            }
        })
    }
}
