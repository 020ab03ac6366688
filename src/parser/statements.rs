//! Statement parsing implementation
//!
//! This module handles parsing of all filescript statement types:
//!
//! - Declarations and assignments: `var x = 42`, `x = x + 1`
//! - Control flow: `if cond { } else { }`, `for cond { }`
//! - File commands: `MoveFile("a.txt", "b.txt")`
//!
//! # Grammar
//!
//! ```text
//! block     ::= '{' statement* '}'
//! statement ::= 'var' ident '=' expr
//!             | 'if' condition block ('else' block)?
//!             | 'for' condition block
//!             | command '(' args? ')'
//!             | ident '=' expr
//! ```
//!
//! There are no statement terminators; one statement ends where the next token
//! can no longer extend its expression.

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse a brace-delimited block, consuming both braces
    pub(crate) fn parse_block(&mut self, ctx: &str) -> Result<Block, ParseError> {
        self.expect_lbrace(ctx)?;

        let mut statements = Vec::new();
        while !self.check(&Token::RBrace(self.current_location())) && !self.is_at_end() {
            statements.push(self.parse_statement()?);
        }

        self.expect_rbrace("to close block")?;
        Ok(statements)
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let loc = self.current_location();

        if self.match_token(&Token::Var(loc)) {
            return self.parse_var_declaration(loc);
        }

        if self.match_token(&Token::If(loc)) {
            return self.parse_if_statement(loc);
        }

        if self.match_token(&Token::For(loc)) {
            return self.parse_for_statement(loc);
        }

        if let Token::Ident(name, _) = self.peek_token() {
            if let Ok(command) = name.parse::<FileCommand>() {
                self.advance();
                let args = self.parse_command_args(command)?;
                return Ok(Statement::Command {
                    command,
                    args,
                    location: loc,
                });
            }

            if matches!(self.peek_ahead(1), Some(Token::LParen(_))) {
                return Err(ParseError {
                    message: format!("Unknown command '{}'", name),
                    location: loc,
                });
            }

            return self.parse_assignment(loc);
        }

        Err(ParseError {
            message: format!("Invalid statement starting with {}", self.peek()),
            location: loc,
        })
    }

    /// Parse `var name = expr` (the `var` keyword is already consumed)
    fn parse_var_declaration(&mut self, loc: SourceLocation) -> Result<Statement, ParseError> {
        let name = self.expect_identifier("after 'var'")?;
        self.expect_token(
            &Token::Eq(self.current_location()),
            "Expected '=' after variable name",
        )?;
        let init = self.parse_expression()?;

        Ok(Statement::VarDecl {
            name,
            init,
            location: loc,
        })
    }

    /// Parse `name = expr`
    fn parse_assignment(&mut self, loc: SourceLocation) -> Result<Statement, ParseError> {
        let name = self.expect_identifier("at start of assignment")?;
        self.expect_token(
            &Token::Eq(self.current_location()),
            "Expected '=' in assignment",
        )?;
        let value = self.parse_expression()?;

        Ok(Statement::Assign {
            name,
            value,
            location: loc,
        })
    }

    /// Parse if statement
    fn parse_if_statement(&mut self, loc: SourceLocation) -> Result<Statement, ParseError> {
        let condition = self.parse_condition()?;
        let then_branch = self.parse_block("after if condition")?;

        let else_branch = if self.match_token(&Token::Else(self.current_location())) {
            Some(self.parse_block("after 'else'")?)
        } else {
            None
        };

        Ok(Statement::If {
            condition,
            then_branch,
            else_branch,
            location: loc,
        })
    }

    /// Parse for statement
    fn parse_for_statement(&mut self, loc: SourceLocation) -> Result<Statement, ParseError> {
        let condition = self.parse_condition()?;
        let body = self.parse_block("after for condition")?;

        Ok(Statement::For {
            condition,
            body,
            location: loc,
        })
    }
}
