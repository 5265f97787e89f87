// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recursive-descent parsing in order of operator precedence: `+`/`|` (OR),
//! then implicit or explicit AND, then prefix `!` and postfix `'` (NOT).
//! Two adjacent factors with no operator between them are AND-ed, so `AB'C`
//! reads as `A & !B & C`.

use super::{Expr, ParsedExpr};
use crate::errors::SyntaxError;

/// Parses an infix boolean expression over single-letter variables.
///
/// Accepted alphabet: letters (folded to uppercase), the constants `0` and
/// `1`, `!` and postfix `'` for NOT, `&`/`*` for AND, `|`/`+` for OR,
/// parentheses, and whitespace.
pub fn parse(input: &str) -> Result<ParsedExpr, SyntaxError> {
    let tokens = tokenize(input)?;
    let mut parser = Parser { tokens: &tokens, ix: 0 };
    let root = parser.or()?;
    match parser.peek() {
        None => Ok(ParsedExpr::new(root)),
        Some(&(TokenKind::RParen, pos)) => Err(SyntaxError::UnbalancedParen { pos }),
        Some(&(_, pos)) => Err(SyntaxError::UnexpectedToken { pos }),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TokenKind {
    Var(char),
    Const(bool),
    Not,
    Postfix,
    And,
    Or,
    LParen,
    RParen,
}

type Token = (TokenKind, usize);

fn tokenize(input: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    for (pos, ch) in input.char_indices() {
        let kind = match ch {
            ch if ch.is_whitespace() => continue,
            '0' => TokenKind::Const(false),
            '1' => TokenKind::Const(true),
            '!' => TokenKind::Not,
            '\'' => TokenKind::Postfix,
            '&' | '*' => TokenKind::And,
            '|' | '+' => TokenKind::Or,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ch if ch.is_ascii_alphabetic() => TokenKind::Var(ch.to_ascii_uppercase()),
            ch => return Err(SyntaxError::UnexpectedChar { ch, pos }),
        };
        tokens.push((kind, pos));
    }
    Ok(tokens)
}

struct Parser<'a> {
    tokens: &'a [Token],
    ix: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.ix)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.ix).copied();
        if token.is_some() {
            self.ix += 1;
        }
        token
    }

    fn or(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.and()?;
        while let Some(&(TokenKind::Or, _)) = self.peek() {
            self.advance();
            let rhs = self.and()?;
            expr = Expr::Or(Box::new(expr), Box::new(rhs));
        }
        Ok(expr)
    }

    fn and(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = self.unary()?;
        loop {
            match self.peek() {
                Some(&(TokenKind::And, _)) => {
                    self.advance();
                }
                // Implicit concatenation: the next token starts a factor.
                Some(&(
                    TokenKind::Var(_)
                    | TokenKind::Const(_)
                    | TokenKind::Not
                    | TokenKind::LParen,
                    _,
                )) => {}
                _ => break,
            }
            let rhs = self.unary()?;
            expr = Expr::And(Box::new(expr), Box::new(rhs));
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, SyntaxError> {
        if let Some(&(TokenKind::Not, _)) = self.peek() {
            self.advance();
            let inner = self.unary()?;
            return Ok(Expr::Not(Box::new(inner)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, SyntaxError> {
        let mut expr = match self.advance() {
            Some((TokenKind::Var(var), _)) => Expr::Var(var),
            Some((TokenKind::Const(value), _)) => Expr::Const(value),
            Some((TokenKind::LParen, lparen_pos)) => {
                let inner = self.or()?;
                match self.advance() {
                    Some((TokenKind::RParen, _)) => inner,
                    _ => return Err(SyntaxError::UnbalancedParen { pos: lparen_pos }),
                }
            }
            Some((_, pos)) => return Err(SyntaxError::UnexpectedToken { pos }),
            None => return Err(SyntaxError::UnexpectedEnd),
        };

        while let Some(&(TokenKind::Postfix, _)) = self.peek() {
            self.advance();
            expr = Expr::Not(Box::new(expr));
        }
        Ok(expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(ch: char) -> Expr {
        Expr::Var(ch)
    }

    fn not(expr: Expr) -> Expr {
        Expr::Not(Box::new(expr))
    }

    fn and(lhs: Expr, rhs: Expr) -> Expr {
        Expr::And(Box::new(lhs), Box::new(rhs))
    }

    fn or(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Or(Box::new(lhs), Box::new(rhs))
    }

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse("A").unwrap().root(), &var('A'));
        assert_eq!(parse("A'").unwrap().root(), &not(var('A')));
        assert_eq!(parse("!A").unwrap().root(), &not(var('A')));
        assert_eq!(parse("A + B").unwrap().root(), &or(var('A'), var('B')));
        assert_eq!(parse("A * B").unwrap().root(), &and(var('A'), var('B')));
        assert_eq!(parse("A & B").unwrap().root(), &and(var('A'), var('B')));
        assert_eq!(parse("0").unwrap().root(), &Expr::Const(false));
        assert_eq!(parse("1").unwrap().root(), &Expr::Const(true));
    }

    #[test]
    fn test_implicit_and() {
        assert_eq!(parse("AB").unwrap().root(), &and(var('A'), var('B')));
        assert_eq!(
            parse("A'B").unwrap().root(),
            &and(not(var('A')), var('B'))
        );
        assert_eq!(
            parse("A(B + C)").unwrap().root(),
            &and(var('A'), or(var('B'), var('C')))
        );
        assert_eq!(
            parse("(A + B)C").unwrap().root(),
            &and(or(var('A'), var('B')), var('C'))
        );
        assert_eq!(
            parse("A!B").unwrap().root(),
            &and(var('A'), not(var('B')))
        );
    }

    #[test]
    fn test_precedence() {
        // AND binds tighter than OR.
        assert_eq!(
            parse("A + BC").unwrap().root(),
            &or(var('A'), and(var('B'), var('C')))
        );
        // NOT binds tighter than AND.
        assert_eq!(
            parse("!AB").unwrap().root(),
            &and(not(var('A')), var('B'))
        );
        // Postfix NOT applies to the whole group.
        assert_eq!(
            parse("(A + B)'").unwrap().root(),
            &not(or(var('A'), var('B')))
        );
    }

    #[test]
    fn test_case_folding_and_whitespace() {
        assert_eq!(
            parse(" a + b ' ").unwrap().root(),
            parse("A + B'").unwrap().root()
        );
    }

    #[test]
    fn test_unexpected_char() {
        assert_eq!(
            parse("A ^ B").unwrap_err(),
            SyntaxError::UnexpectedChar { ch: '^', pos: 2 }
        );
        assert_eq!(
            parse("A + 2").unwrap_err(),
            SyntaxError::UnexpectedChar { ch: '2', pos: 4 }
        );
    }

    #[test]
    fn test_misplaced_operators() {
        assert!(matches!(
            parse("A + + B").unwrap_err(),
            SyntaxError::UnexpectedToken { .. }
        ));
        assert!(matches!(
            parse("'A").unwrap_err(),
            SyntaxError::UnexpectedToken { .. }
        ));
        assert_eq!(parse("A +").unwrap_err(), SyntaxError::UnexpectedEnd);
        assert_eq!(parse("").unwrap_err(), SyntaxError::UnexpectedEnd);
        assert_eq!(parse("!").unwrap_err(), SyntaxError::UnexpectedEnd);
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert_eq!(
            parse("(A + B").unwrap_err(),
            SyntaxError::UnbalancedParen { pos: 0 }
        );
        assert_eq!(
            parse("A + B)").unwrap_err(),
            SyntaxError::UnbalancedParen { pos: 5 }
        );
    }
}
