//! Expression parsing implementation
//!
//! filescript has a single precedence level: primaries joined left to right by
//! `+` and `-`. There is no grouping.
//!
//! ```text
//! expr      ::= primary (('+' | '-') primary)*
//! primary   ::= string | number | query | ident
//! query     ::= ('CountFiles' | 'CheckSpace') '(' args? ')'
//! condition ::= expr ('==' | '!=' | '>' | '<') expr
//! args      ::= expr (',' expr)*
//! ```
//!
//! Only the two value-producing commands are calls inside an expression. Any
//! other word, including the names of the remaining commands, is a
//! [`Expr::Variable`].

use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::{ParseError, Parser};

impl Parser {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_primary()?;

        loop {
            let op = if self.match_token(&Token::Plus(self.current_location())) {
                BinOp::Add
            } else if self.match_token(&Token::Minus(self.current_location())) {
                BinOp::Sub
            } else {
                break;
            };

            let location = self.previous_location();
            let right = self.parse_primary()?;
            left = Expr::Binary {
                op,
                left: Box::new(left),
                right: Box::new(right),
                location,
            };
        }

        Ok(left)
    }

    /// Parse primary (literals, variables, value-producing commands)
    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.peek_token() {
            Token::Number(n, loc) => {
                self.advance();
                Ok(Expr::Number(n, loc))
            }
            Token::Text(s, loc) => {
                self.advance();
                Ok(Expr::Text(s, loc))
            }
            Token::Ident(name, loc) => {
                self.advance();
                match name.parse::<FileCommand>() {
                    Ok(command) if command.is_query() => {
                        let args = self.parse_command_args(command)?;
                        Ok(Expr::Query {
                            command,
                            args,
                            location: loc,
                        })
                    }
                    _ => Ok(Expr::Variable(name, loc)),
                }
            }
            other => Err(ParseError {
                message: format!("Expected expression, found {}", other),
                location: other.location(),
            }),
        }
    }

    /// Parse `left comparator right`
    pub(crate) fn parse_condition(&mut self) -> Result<Condition, ParseError> {
        let left = self.parse_expression()?;
        let location = left.location();

        let op = match self.peek() {
            Token::EqEq(_) => CompareOp::Eq,
            Token::NotEq(_) => CompareOp::Ne,
            Token::Gt(_) => CompareOp::Gt,
            Token::Lt(_) => CompareOp::Lt,
            other => {
                return Err(ParseError {
                    message: format!(
                        "Expected comparison operator ('==', '!=', '>' or '<'), found {}",
                        other
                    ),
                    location: self.current_location(),
                });
            }
        };
        self.advance();

        let right = self.parse_expression()?;

        Ok(Condition {
            left,
            op,
            right,
            location,
        })
    }

    /// Parse a parenthesised, comma-separated argument list after a command name
    pub(crate) fn parse_command_args(&mut self, command: FileCommand) -> Result<Vec<Expr>, ParseError> {
        self.expect_lparen(&format!("after {}", command))?;

        let mut args = Vec::new();
        if !self.check(&Token::RParen(self.current_location())) {
            args.push(self.parse_expression()?);
            while self.match_token(&Token::Comma(self.current_location())) {
                args.push(self.parse_expression()?);
            }
        }

        self.expect_rparen(&format!("after arguments to {}", command))?;
        Ok(args)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::ast::*;
    use crate::parser::parse::Parser;
    use pretty_assertions::assert_eq;

    fn parse_init(source: &str) -> Expr {
        let mut parser = Parser::new(source).unwrap();
        let program = parser.parse_program().unwrap();
        match program.body.into_iter().next() {
            Some(Statement::VarDecl { init, .. }) => init,
            other => panic!("Expected variable declaration, got {:?}", other),
        }
    }

    #[test]
    fn test_left_associative() {
        // a - b + c parses as (a - b) + c
        let expr = parse_init("{ var r = 5 - 2 + 1 }");

        match expr {
            Expr::Binary { op: BinOp::Add, left, right, .. } => {
                assert!(matches!(*left, Expr::Binary { op: BinOp::Sub, .. }));
                assert!(matches!(*right, Expr::Number(n, _) if n == 1.0));
            }
            other => panic!("Expected addition at the root, got {:?}", other),
        }
    }

    #[test]
    fn test_query_in_expression() {
        let expr = parse_init(r#"{ var n = CountFiles("dir") + 1 }"#);

        match expr {
            Expr::Binary { left, .. } => match *left {
                Expr::Query { command, args, .. } => {
                    assert_eq!(command, FileCommand::CountFiles);
                    assert_eq!(args, vec![Expr::Text("dir".to_string(), SourceLocation::new(1, 22))]);
                }
                other => panic!("Expected query, got {:?}", other),
            },
            other => panic!("Expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_non_query_command_is_a_word() {
        let expr = parse_init("{ var w = MoveFile }");
        assert!(matches!(expr, Expr::Variable(ref name, _) if name == "MoveFile"));
    }

    #[test]
    fn test_missing_comparator() {
        let mut parser = Parser::new("{ if 1 { } }").unwrap();
        let err = parser.parse_program().unwrap_err();
        assert!(err.message.starts_with("Expected comparison operator"));
    }

    #[test]
    fn test_empty_argument_list() {
        let mut parser = Parser::new("{ var n = CheckSpace() }").unwrap();
        let program = parser.parse_program().unwrap();
        assert!(matches!(
            &program.body[0],
            Statement::VarDecl { init: Expr::Query { args, .. }, .. } if args.is_empty()
        ));
    }

    #[test]
    fn test_missing_close_paren() {
        let mut parser = Parser::new(r#"{ ListFiles("a" }"#).unwrap();
        let err = parser.parse_program().unwrap_err();
        assert!(err.message.starts_with("Expected ')' after arguments to ListFiles"));
    }

    #[test]
    fn test_dangling_operator() {
        let mut parser = Parser::new("{ var x = 1 + }").unwrap();
        let err = parser.parse_program().unwrap_err();
        assert_eq!(err.message, "Expected expression, found '}'");
    }
}
