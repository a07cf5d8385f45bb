//! Tokenizer driving the character reader.
//!
//! [`Scanner::next_token`] records the token's start position, skips
//! horizontal whitespace, and dispatches on the first significant character
//! to a focused sub-scanner method. Compound operators resolve through
//! one-character probes (peek, then consume on match); numeric, quoted,
//! symbol, and comment scanning live in their own modules.

use crate::reader::{CharReader, ReaderError};
use crate::token::{Token, TokenKind};

/// Stateful tokenizer over one input stream.
///
/// Single-threaded and demand-driven: each `next_token` call runs to
/// completion before returning. No state is shared across instances.
pub struct Scanner<'src> {
    pub(crate) reader: CharReader<'src>,
}

impl<'src> Scanner<'src> {
    /// Create a scanner reading decoded source text from position
    /// (offset 0, line 1, column 1).
    pub fn new(source: &'src str) -> Self {
        Self {
            reader: CharReader::new(source),
        }
    }

    /// Produce the next token.
    ///
    /// Never fails out-of-band: end of input and lexical errors are token
    /// kinds. Calling again after an [`TokenKind::Error`] token is
    /// permitted, but what comes back depends on where the failing
    /// sub-scanner left the reader.
    pub fn next_token(&mut self) -> Token {
        let start = self.reader.position();
        let mut t = Token::at(start);
        if let Err(e) = self.scan(&mut t) {
            tracing::debug!(error = %e, offset = start.offset, "lookahead invariant violated");
            t.kind = TokenKind::Error;
        }
        tracing::trace!(kind = %t.kind, offset = t.offset, line = t.line, "token");
        t
    }

    fn scan(&mut self, t: &mut Token) -> Result<(), ReaderError> {
        let Some(c) = self.reader.skip_horizontal_space() else {
            t.kind = TokenKind::EndOfInput;
            return Ok(());
        };

        if c.ch.is_alphabetic() {
            return self.symbol(c, t);
        }
        match c.ch {
            '#' => self.comment(t),
            '"' | '\'' | '`' => self.quoted(c.ch, t),
            '%' => self.infix(t),
            '.' => {
                // A digit after the dot means a decimal starting with its
                // fractional part; anything else is a (dotted) symbol.
                if self.reader.peek_is_digit()? {
                    self.decimal(c, t)
                } else {
                    self.symbol(c, t)
                }
            }
            '1'..='9' => self.decimal(c, t),
            '0' => {
                if self.reader.peek_is_letter_ci('x')? {
                    self.hexadecimal(c, t)
                } else {
                    self.decimal(c, t)
                }
            }
            '\n' => {
                t.kind = TokenKind::EndOfLine;
                Ok(())
            }
            '+' | '/' | '^' | '~' | '?' | '$' | '@' | '(' | ')' | '{' | '}' | ']' => {
                t.kind = single_punct(c.ch);
                t.text.push(c.ch);
                Ok(())
            }
            '<' => self.less(t),
            '-' => self.minus(t),
            '>' => self.greater(t),
            '!' => self.bang(t),
            '*' => self.star(t),
            '=' => self.equal(t),
            ':' => self.colon(t),
            '&' => self.ampersand(t),
            '|' => self.pipe(t),
            '[' => self.bracket(t),
            _ => {
                t.kind = TokenKind::Error;
                Ok(())
            }
        }
    }

    /// Probe one character: consume it when it equals `want`, otherwise
    /// leave the reader as it was. End of input reports no match.
    fn probe(&mut self, want: char) -> Result<bool, ReaderError> {
        if self.reader.peek_is(want)? {
            let _ = self.reader.next();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    // ─── Compound operators ──────────────────────────────────────────────

    /// `<<-` / `<-` / `<=` / `<`.
    ///
    /// An incomplete `<<` produces an error token and leaves the reader
    /// mid-stream.
    fn less(&mut self, t: &mut Token) -> Result<(), ReaderError> {
        if self.probe('<')? {
            if self.probe('-')? {
                set(t, TokenKind::OpLeftAssign2, "<<-");
            }
            Ok(())
        } else if self.probe('-')? {
            set(t, TokenKind::OpLeftAssign, "<-");
            Ok(())
        } else if self.probe('=')? {
            set(t, TokenKind::OpLe, "<=");
            Ok(())
        } else {
            set(t, TokenKind::OpLt, "<");
            Ok(())
        }
    }

    /// `->>` / `->` / `-`.
    fn minus(&mut self, t: &mut Token) -> Result<(), ReaderError> {
        if self.probe('>')? {
            if self.probe('>')? {
                set(t, TokenKind::OpRightAssign2, "->>");
            } else {
                set(t, TokenKind::OpRightAssign, "->");
            }
        } else {
            set(t, TokenKind::OpSub, "-");
        }
        Ok(())
    }

    /// `>=` / `>`.
    fn greater(&mut self, t: &mut Token) -> Result<(), ReaderError> {
        if self.probe('=')? {
            set(t, TokenKind::OpGe, ">=");
        } else {
            set(t, TokenKind::OpGt, ">");
        }
        Ok(())
    }

    /// `!=` / `!`.
    fn bang(&mut self, t: &mut Token) -> Result<(), ReaderError> {
        if self.probe('=')? {
            set(t, TokenKind::OpNe, "!=");
        } else {
            set(t, TokenKind::OpNot, "!");
        }
        Ok(())
    }

    /// `**` / `*`.
    fn star(&mut self, t: &mut Token) -> Result<(), ReaderError> {
        if self.probe('*')? {
            set(t, TokenKind::OpMul2, "**");
        } else {
            set(t, TokenKind::OpMul, "*");
        }
        Ok(())
    }

    /// `==` / `=`.
    fn equal(&mut self, t: &mut Token) -> Result<(), ReaderError> {
        if self.probe('=')? {
            set(t, TokenKind::OpEq, "==");
        } else {
            set(t, TokenKind::OpEqualAssign, "=");
        }
        Ok(())
    }

    /// `:::` / `::` / `:=` / `:`.
    fn colon(&mut self, t: &mut Token) -> Result<(), ReaderError> {
        if self.probe(':')? {
            if self.probe(':')? {
                set(t, TokenKind::OpNamespaceInternal, ":::");
            } else {
                set(t, TokenKind::OpNamespace, "::");
            }
        } else if self.probe('=')? {
            set(t, TokenKind::OpColonAssign, ":=");
        } else {
            set(t, TokenKind::OpColon, ":");
        }
        Ok(())
    }

    /// `&&` / `&`.
    fn ampersand(&mut self, t: &mut Token) -> Result<(), ReaderError> {
        if self.probe('&')? {
            set(t, TokenKind::OpAnd2, "&&");
        } else {
            set(t, TokenKind::OpAnd, "&");
        }
        Ok(())
    }

    /// `||` / `|`.
    fn pipe(&mut self, t: &mut Token) -> Result<(), ReaderError> {
        if self.probe('|')? {
            set(t, TokenKind::OpOr2, "||");
        } else {
            set(t, TokenKind::OpOr, "|");
        }
        Ok(())
    }

    /// `[[` / `[`.
    fn bracket(&mut self, t: &mut Token) -> Result<(), ReaderError> {
        if self.probe('[')? {
            set(t, TokenKind::OpLeftSquare2, "[[");
        } else {
            set(t, TokenKind::OpLeftSquare, "[");
        }
        Ok(())
    }

    // ─── Infix operators ─────────────────────────────────────────────────

    /// `%...%` user-defined infix operator. A newline or end of input
    /// before the closing `%` is an error.
    fn infix(&mut self, t: &mut Token) -> Result<(), ReaderError> {
        t.text.push('%');
        loop {
            let Some(c) = self.reader.next() else {
                t.kind = TokenKind::Error;
                return Ok(());
            };
            match c.ch {
                '\n' => {
                    t.kind = TokenKind::Error;
                    return Ok(());
                }
                '%' => {
                    t.kind = TokenKind::Infix;
                    t.text.push('%');
                    return Ok(());
                }
                ch => t.text.push(ch),
            }
        }
    }
}

/// Set a token's kind and literal spelling in one step.
fn set(t: &mut Token, kind: TokenKind, spelling: &str) {
    t.kind = kind;
    t.text.push_str(spelling);
}

/// Token kind for a single-character operator.
///
/// Callers match the character set first; anything else maps to `Error`.
fn single_punct(ch: char) -> TokenKind {
    match ch {
        '+' => TokenKind::OpAdd,
        '/' => TokenKind::OpDiv,
        '^' => TokenKind::OpPow,
        '~' => TokenKind::OpTilde,
        '?' => TokenKind::OpQuestion,
        '$' => TokenKind::OpDollar,
        '@' => TokenKind::OpAt,
        '(' => TokenKind::OpLeftRound,
        ')' => TokenKind::OpRightRound,
        '{' => TokenKind::OpLeftCurly,
        '}' => TokenKind::OpRightCurly,
        ']' => TokenKind::OpRightSquare,
        _ => TokenKind::Error,
    }
}
