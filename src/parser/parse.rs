//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including error types, helper methods, and the main parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `statements`: Parsing blocks and statements (`var`, `if`, `for`, commands)
//! - `expressions`: Parsing expressions, conditions and command arguments
//!
//! # Implementation
//!
//! Parser methods are split across multiple files using `impl Parser` blocks,
//! allowing each module to extend the Parser with related functionality while
//! maintaining access to the shared parser state.

use crate::parser::ast::*;
use crate::parser::lexer::{LexError, Lexer, Token};
use thiserror::Error;

/// Parser error type
#[derive(Debug, Error)]
#[error("Parse error at line {}, column {}: {message}", .location.line, .location.column)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError {
            message: err.message,
            location: err.location,
        }
    }
}

/// Recursive descent parser for filescript
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize()?;
        Ok(Self {
            tokens,
            position: 0,
        })
    }

    /// Parse the entire program: one top-level block and nothing after it
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let body = self.parse_block("at start of script")?;

        if !self.is_at_end() {
            return Err(ParseError {
                message: format!("Unexpected {} after end of script block", self.peek()),
                location: self.current_location(),
            });
        }

        tracing::debug!(statements = body.len(), "parsed script");
        Ok(Program::new(body))
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(self.peek()) == std::mem::discriminant(token)
    }

    pub(crate) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.position += 1;
        }
        self.previous()
    }

    pub(crate) fn is_at_end(&self) -> bool {
        matches!(self.peek(), Token::Eof(_))
    }

    pub(crate) fn peek(&self) -> &Token {
        // The token stream always ends with Eof and `advance` never moves past it
        &self.tokens[self.position]
    }

    pub(crate) fn peek_token(&self) -> Token {
        self.peek().clone()
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.position + n)
    }

    pub(crate) fn previous(&self) -> &Token {
        &self.tokens[self.position.saturating_sub(1)]
    }

    pub(crate) fn previous_location(&self) -> SourceLocation {
        self.previous().location()
    }

    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek().location()
    }

    pub(crate) fn expect_token(&mut self, token: &Token, message: &str) -> Result<(), ParseError> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else {
            Err(ParseError {
                message: format!("{}, found {}", message, self.peek()),
                location: self.current_location(),
            })
        }
    }

    pub(crate) fn expect_lparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(
            &Token::LParen(self.current_location()),
            &format!("Expected '(' {ctx}"),
        )
    }

    pub(crate) fn expect_rparen(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(
            &Token::RParen(self.current_location()),
            &format!("Expected ')' {ctx}"),
        )
    }

    pub(crate) fn expect_lbrace(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(
            &Token::LBrace(self.current_location()),
            &format!("Expected '{{' {ctx}"),
        )
    }

    pub(crate) fn expect_rbrace(&mut self, ctx: &str) -> Result<(), ParseError> {
        self.expect_token(
            &Token::RBrace(self.current_location()),
            &format!("Expected '}}' {ctx}"),
        )
    }

    pub(crate) fn expect_identifier(&mut self, ctx: &str) -> Result<String, ParseError> {
        if let Token::Ident(name, _) = self.peek_token() {
            self.advance();
            Ok(name)
        } else {
            Err(ParseError {
                message: format!("Expected identifier {ctx}, found {}", self.peek()),
                location: self.current_location(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_empty_block() {
        let mut parser = Parser::new("{}").unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(program, Program::default());
    }

    #[test]
    fn test_parse_var_decl() {
        let mut parser = Parser::new("{ var x = 2 + 3 }").unwrap();
        let program = parser.parse_program().unwrap();

        assert_eq!(program.body.len(), 1);
        match &program.body[0] {
            Statement::VarDecl { name, init, .. } => {
                assert_eq!(name, "x");
                assert!(matches!(init, Expr::Binary { op: BinOp::Add, .. }));
            }
            other => panic!("Expected variable declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_open_brace() {
        let mut parser = Parser::new("var x = 1").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert!(err.message.starts_with("Expected '{'"));
        assert_eq!(err.location, SourceLocation::new(1, 1));
    }

    #[test]
    fn test_missing_close_brace() {
        let mut parser = Parser::new("{ var x = 1").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert!(err.message.contains("Expected '}'"));
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let mut parser = Parser::new("{ } x = 1").unwrap();
        let err = parser.parse_program().unwrap_err();

        assert!(err.message.contains("after end of script block"));
    }

    #[test]
    fn test_lex_errors_become_parse_errors() {
        let err = Parser::new("{ var s = \"oops }").err().unwrap();
        assert!(err.to_string().starts_with("Parse error at line 1, column 11"));
    }
}
