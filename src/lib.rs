//! Lexical scanner for the R programming language.
//!
//! Converts decoded source text into a stream of typed [`Token`]s, covering
//! R's numeric literal forms (decimal, hexadecimal with binary exponent,
//! `L`/`i` suffixes), its three quoting styles with their shared escape
//! grammar, `#` comments with the `#line` directive sub-form, `%...%` infix
//! operators, and the compound operator set.
//!
//! ```
//! use rlex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("x <- 1.5e3\n");
//! let token = scanner.next_token();
//! assert_eq!(token.kind, TokenKind::Symbol);
//! assert_eq!(token.text, "x");
//! let token = scanner.next_token();
//! assert_eq!(token.kind, TokenKind::OpLeftAssign);
//! ```
//!
//! End of input and lexical errors are token kinds
//! ([`TokenKind::EndOfInput`], [`TokenKind::Error`]), never out-of-band
//! failures. The scanner attempts no recovery after an error token; whether
//! and how to resume is the caller's decision.

mod comment;
mod keywords;
mod number;
mod reader;
mod scanner;
mod string;
mod symbol;
mod token;

pub use reader::{CharReader, Pos, ReaderError, SourceChar, PUSHBACK_CAPACITY};
pub use scanner::Scanner;
pub use token::{Token, TokenKind};

/// Scan `source` to completion, returning every token through and
/// including the final end-of-input marker.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}
