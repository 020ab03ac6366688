//! Lexer (tokenizer) for filescript source
//!
//! Converts raw script text into a flat [`Token`] stream consumed by the parser.
//! The lexer is a cursor over the script's characters: whitespace (space, tab,
//! carriage return, newline) is skipped before every token, and there is no
//! comment syntax.

use super::ast::SourceLocation;
use std::fmt;
use thiserror::Error;

/// All token variants produced by the lexer.
///
/// Every variant carries a [`SourceLocation`] so that parse errors can report
/// an accurate line and column without a separate token→location table.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Number(f64, SourceLocation),
    Text(String, SourceLocation),

    // Identifiers (variable names, command names, bare words)
    Ident(String, SourceLocation),

    // Keywords
    Var(SourceLocation),
    If(SourceLocation),
    Else(SourceLocation),
    For(SourceLocation),

    // Arithmetic
    Plus(SourceLocation),  // +
    Minus(SourceLocation), // -

    // Comparison
    EqEq(SourceLocation),  // ==
    NotEq(SourceLocation), // !=
    Lt(SourceLocation),    // <
    Gt(SourceLocation),    // >

    // Assignment
    Eq(SourceLocation), // =

    // Punctuation
    LParen(SourceLocation), // (
    RParen(SourceLocation), // )
    LBrace(SourceLocation), // {
    RBrace(SourceLocation), // }
    Comma(SourceLocation),  // ,

    // End of file
    Eof(SourceLocation),
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::Number(_, loc)
            | Token::Text(_, loc)
            | Token::Ident(_, loc)
            | Token::Var(loc)
            | Token::If(loc)
            | Token::Else(loc)
            | Token::For(loc)
            | Token::Plus(loc)
            | Token::Minus(loc)
            | Token::EqEq(loc)
            | Token::NotEq(loc)
            | Token::Lt(loc)
            | Token::Gt(loc)
            | Token::Eq(loc)
            | Token::LParen(loc)
            | Token::RParen(loc)
            | Token::LBrace(loc)
            | Token::RBrace(loc)
            | Token::Comma(loc)
            | Token::Eof(loc) => *loc,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n, _) => write!(f, "number {}", n),
            Token::Text(s, _) => write!(f, "string \"{}\"", s),
            Token::Ident(s, _) => write!(f, "identifier '{}'", s),
            Token::Var(_) => write!(f, "'var'"),
            Token::If(_) => write!(f, "'if'"),
            Token::Else(_) => write!(f, "'else'"),
            Token::For(_) => write!(f, "'for'"),
            Token::Plus(_) => write!(f, "'+'"),
            Token::Minus(_) => write!(f, "'-'"),
            Token::EqEq(_) => write!(f, "'=='"),
            Token::NotEq(_) => write!(f, "'!='"),
            Token::Lt(_) => write!(f, "'<'"),
            Token::Gt(_) => write!(f, "'>'"),
            Token::Eq(_) => write!(f, "'='"),
            Token::LParen(_) => write!(f, "'('"),
            Token::RParen(_) => write!(f, "')'"),
            Token::LBrace(_) => write!(f, "'{{'"),
            Token::RBrace(_) => write!(f, "'}}'"),
            Token::Comma(_) => write!(f, "','"),
            Token::Eof(_) => write!(f, "end of file"),
        }
    }
}

/// Lexer error type
#[derive(Debug, Error)]
#[error("Lexer error at line {}, column {}: {message}", .location.line, .location.column)]
pub struct LexError {
    pub message: String,
    pub location: SourceLocation,
}

/// Returns true for characters that may continue an identifier.
pub fn is_ident_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Returns true for characters that may start an identifier.
pub fn is_ident_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

/// Lexer for filescript source
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();

            if self.is_at_end() {
                tokens.push(Token::Eof(self.current_location()));
                break;
            }

            tokens.push(self.next_token()?);
        }

        Ok(tokens)
    }

    /// Get next token
    fn next_token(&mut self) -> Result<Token, LexError> {
        let loc = self.current_location();
        let ch = self.advance().ok_or_else(|| LexError {
            message: "Unexpected end of file".to_string(),
            location: loc,
        })?;

        match ch {
            '"' => self.string_literal(loc),

            '0'..='9' => self.number_literal(ch, loc),

            c if is_ident_start(c) => Ok(self.identifier_or_keyword(ch, loc)),

            '+' => Ok(Token::Plus(loc)),
            '-' => Ok(Token::Minus(loc)),
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::EqEq(loc))
                } else {
                    Ok(Token::Eq(loc))
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    Ok(Token::NotEq(loc))
                } else {
                    Err(LexError {
                        message: "Expected '=' after '!'".to_string(),
                        location: loc,
                    })
                }
            }
            '<' => Ok(Token::Lt(loc)),
            '>' => Ok(Token::Gt(loc)),
            '(' => Ok(Token::LParen(loc)),
            ')' => Ok(Token::RParen(loc)),
            '{' => Ok(Token::LBrace(loc)),
            '}' => Ok(Token::RBrace(loc)),
            ',' => Ok(Token::Comma(loc)),

            _ => Err(LexError {
                message: format!("Unexpected character: '{}'", ch),
                location: loc,
            }),
        }
    }

    /// Parse string literal. A backslash takes the next character verbatim.
    fn string_literal(&mut self, loc: SourceLocation) -> Result<Token, LexError> {
        let mut string = String::new();

        while let Some(ch) = self.peek() {
            if ch == '"' {
                self.advance(); // consume closing quote
                return Ok(Token::Text(string, loc));
            }

            self.advance();
            if ch == '\\' {
                if let Some(escaped) = self.advance() {
                    string.push(escaped);
                }
            } else {
                string.push(ch);
            }
        }

        Err(LexError {
            message: "Unterminated string literal".to_string(),
            location: loc,
        })
    }

    /// Parse numeric literal (digits only, no sign, fraction or exponent)
    fn number_literal(&mut self, first_digit: char, loc: SourceLocation) -> Result<Token, LexError> {
        let mut num_str = String::new();
        num_str.push(first_digit);

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                num_str.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let value = num_str.parse::<f64>().map_err(|_| LexError {
            message: format!("Invalid number literal: {}", num_str),
            location: loc,
        })?;

        Ok(Token::Number(value, loc))
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self, first_char: char, loc: SourceLocation) -> Token {
        let mut ident = String::new();
        ident.push(first_char);

        while let Some(ch) = self.peek() {
            if is_ident_char(ch) {
                ident.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        match ident.as_str() {
            "var" => Token::Var(loc),
            "if" => Token::If(loc),
            "else" => Token::Else(loc),
            "for" => Token::For(loc),
            _ => Token::Ident(ident, loc),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
            self.advance();
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_tokens() {
        let mut lexer = Lexer::new("{ var x = 1 + 2 }");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::LBrace(_)));
        assert!(matches!(tokens[1], Token::Var(_)));
        assert!(matches!(tokens[2], Token::Ident(ref s, _) if s == "x"));
        assert!(matches!(tokens[3], Token::Eq(_)));
        assert!(matches!(tokens[4], Token::Number(n, _) if n == 1.0));
        assert!(matches!(tokens[5], Token::Plus(_)));
        assert!(matches!(tokens[6], Token::Number(n, _) if n == 2.0));
        assert!(matches!(tokens[7], Token::RBrace(_)));
        assert!(matches!(tokens[8], Token::Eof(_)));
    }

    #[test]
    fn test_comparators() {
        let mut lexer = Lexer::new("== != < > =");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::EqEq(_)));
        assert!(matches!(tokens[1], Token::NotEq(_)));
        assert!(matches!(tokens[2], Token::Lt(_)));
        assert!(matches!(tokens[3], Token::Gt(_)));
        assert!(matches!(tokens[4], Token::Eq(_)));
    }

    #[test]
    fn test_keyword_needs_boundary() {
        let mut lexer = Lexer::new("forX for_1 for");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Ident(ref s, _) if s == "forX"));
        assert!(matches!(tokens[1], Token::Ident(ref s, _) if s == "for_1"));
        assert!(matches!(tokens[2], Token::For(_)));
    }

    #[test]
    fn test_string_escape_is_verbatim() {
        let mut lexer = Lexer::new(r#""a\"b\nc\\""#);
        let tokens = lexer.tokenize().unwrap();

        match &tokens[0] {
            Token::Text(s, _) => assert_eq!(s, "a\"bnc\\"),
            _ => panic!("Expected string literal"),
        }
    }

    #[test]
    fn test_unterminated_string() {
        let mut lexer = Lexer::new("{ var s = \"open }");
        let err = lexer.tokenize().unwrap_err();
        assert!(err.message.contains("Unterminated"));
        assert_eq!(err.location, SourceLocation::new(1, 11));
    }

    #[test]
    fn test_number_then_word_splits() {
        let mut lexer = Lexer::new("10abc");
        let tokens = lexer.tokenize().unwrap();

        assert!(matches!(tokens[0], Token::Number(n, _) if n == 10.0));
        assert!(matches!(tokens[1], Token::Ident(ref s, _) if s == "abc"));
    }

    #[test]
    fn test_locations_track_lines() {
        let mut lexer = Lexer::new("{\n  var x = 1\n}");
        let tokens = lexer.tokenize().unwrap();

        assert_eq!(tokens[1].location(), SourceLocation::new(2, 3));
        assert_eq!(tokens[5].location(), SourceLocation::new(3, 1));
    }

    #[test]
    fn test_unexpected_character() {
        let mut lexer = Lexer::new("{ var x = 2 * 3 }");
        let err = lexer.tokenize().unwrap_err();
        assert!(err.message.contains("'*'"));
    }
}
