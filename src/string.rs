//! Quoted constants: string literals and backtick-quoted symbols.
//!
//! One escape grammar serves all three delimiters, with two restrictions:
//! Unicode escapes are rejected inside backticks, and a literal may not mix
//! Unicode escapes with octal or hex escapes (checked when the closing
//! quote arrives). Unescaped newlines are kept literally, so multi-line
//! literals are legal. An escape decoding to NUL is rejected.

use crate::reader::ReaderError;
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

/// Escape families seen so far in the current literal.
#[derive(Default)]
struct EscapeSeen {
    unicode: bool,
    octal: bool,
    hex: bool,
}

/// Decode a code point, substituting U+FFFD for values outside the scalar
/// range (surrogates and beyond U+10FFFF, reachable via `\U`).
fn decode_or_replacement(v: u32) -> char {
    char::from_u32(v).unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl Scanner<'_> {
    /// Quoted literal body after the opening delimiter: `"` and `'` close
    /// as a character constant, the backtick closes as a symbol. End of
    /// input before the closing delimiter is an error.
    pub(crate) fn quoted(&mut self, delim: char, t: &mut Token) -> Result<(), ReaderError> {
        let mut seen = EscapeSeen::default();

        loop {
            let Some(c) = self.reader.next() else {
                // unterminated literal
                t.kind = TokenKind::Error;
                return Ok(());
            };
            match c.ch {
                '"' | '\'' if c.ch == delim => {
                    t.kind = if seen.unicode && (seen.octal || seen.hex) {
                        TokenKind::Error
                    } else {
                        TokenKind::ConstCharacter
                    };
                    return Ok(());
                }
                '`' if c.ch == delim => {
                    t.kind = TokenKind::Symbol;
                    return Ok(());
                }
                '\\' => {
                    if !self.escape(delim, t, &mut seen)? {
                        t.kind = TokenKind::Error;
                        return Ok(());
                    }
                }
                ch => t.text.push(ch),
            }
        }
    }

    /// One escape sequence, entered after its backslash. Returns `false`
    /// when the sequence is malformed: unknown escape character, NUL
    /// decode, missing closing brace, Unicode escape inside backticks, or
    /// end of input mid-sequence.
    fn escape(
        &mut self,
        delim: char,
        t: &mut Token,
        seen: &mut EscapeSeen,
    ) -> Result<bool, ReaderError> {
        let Some(c) = self.reader.next() else {
            return Ok(false);
        };
        match c.ch {
            ' ' => t.text.push(' '),
            'n' | '\n' => t.text.push('\n'),
            'r' => t.text.push('\r'),
            't' => t.text.push('\t'),
            'b' => t.text.push('\u{8}'),
            'a' => t.text.push('\u{7}'),
            'f' => t.text.push('\u{c}'),
            'v' => t.text.push('\u{b}'),
            '\\' => t.text.push('\\'),
            '\'' => t.text.push('\''),
            '"' => t.text.push('"'),
            '`' => t.text.push('`'),

            // \nnn: one mandatory octal digit, then up to two more.
            d @ '0'..='7' => {
                seen.octal = true;
                let mut v = d.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    let Some(c) = self.reader.next() else {
                        return Ok(false);
                    };
                    match c.ch.to_digit(8) {
                        Some(digit) => v = 8 * v + digit,
                        None => {
                            self.reader.push_back(c)?;
                            break;
                        }
                    }
                }
                if v == 0 {
                    return Ok(false); // NUL is not allowed
                }
                t.text.push(decode_or_replacement(v));
            }

            // \xnn: up to two hex digits.
            'x' => {
                seen.hex = true;
                let Some(v) = self.hex_escape_digits(2)? else {
                    return Ok(false);
                };
                if v == 0 {
                    return Ok(false);
                }
                t.text.push(decode_or_replacement(v));
            }

            // \unnnn / \Unnnnnnnn: up to four or eight hex digits, with
            // an optional braced form requiring its closing brace.
            esc @ ('u' | 'U') => {
                if delim == '`' {
                    // Unicode escapes are not supported inside backticks.
                    return Ok(false);
                }
                seen.unicode = true;
                let max = if esc == 'u' { 4 } else { 8 };
                let Some(open) = self.reader.next() else {
                    return Ok(false);
                };
                let braced = open.ch == '{';
                if !braced {
                    self.reader.push_back(open)?;
                }
                let Some(v) = self.hex_escape_digits(max)? else {
                    return Ok(false);
                };
                if v == 0 {
                    return Ok(false);
                }
                if braced {
                    let Some(close) = self.reader.next() else {
                        return Ok(false);
                    };
                    if close.ch != '}' {
                        return Ok(false);
                    }
                }
                t.text.push(decode_or_replacement(v));
            }

            _ => return Ok(false),
        }
        Ok(true)
    }

    /// Accumulate up to `max` hex digits into a code point value, pushing
    /// back the first non-digit. `None` means end of input cut the run.
    fn hex_escape_digits(&mut self, max: usize) -> Result<Option<u32>, ReaderError> {
        let mut v: u32 = 0;
        for _ in 0..max {
            let Some(c) = self.reader.next() else {
                return Ok(None);
            };
            match c.ch.to_digit(16) {
                Some(d) => v = 16 * v + d,
                None => {
                    self.reader.push_back(c)?;
                    break;
                }
            }
        }
        Ok(Some(v))
    }
}

#[cfg(test)]
mod tests;
