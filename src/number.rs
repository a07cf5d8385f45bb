//! Decimal and hexadecimal numeric literal sub-scanners.
//!
//! Both are greedy and single-pass, holding one character of pushback at
//! each run boundary: the terminator of a digit run flows to the next stage
//! and is only pushed back if it is not an `L`/`i` suffix. Overflow and
//! underflow are adopted policies, not errors: decimal parsing saturates to
//! signed infinity and flushes to zero, hexadecimal values beyond `f64`
//! range saturate to positive infinity.

use crate::reader::{ReaderError, SourceChar};
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

/// 2^63 as `f64`. Values at or above it cannot truncate into `i64`.
const I64_RANGE_END: f64 = 9_223_372_036_854_775_808.0;

/// Truncate toward zero, substituting `i64::MIN` for magnitudes outside the
/// `i64` range (the established conversion behavior, kept for
/// compatibility).
#[allow(
    clippy::cast_possible_truncation,
    reason = "out-of-range values are redirected to i64::MIN before the cast"
)]
pub(crate) fn truncate_to_i64(v: f64) -> i64 {
    if v >= I64_RANGE_END {
        i64::MIN
    } else {
        // `as` saturates the negative end to i64::MIN, which coincides
        // with the compatibility value.
        v as i64
    }
}

/// Numeric value of a hex digit; -1 for anything else. The -1 sentinel
/// leaks into the mantissa when the character after `0x` is not a hex
/// digit, matching established behavior.
fn hex_value(ch: char) -> i32 {
    match ch {
        '0'..='9' => ch as i32 - '0' as i32,
        'a'..='f' => ch as i32 - 'a' as i32 + 10,
        'A'..='F' => ch as i32 - 'A' as i32 + 10,
        _ => -1,
    }
}

impl Scanner<'_> {
    /// Decimal literal: integer digit run (absent when the literal starts
    /// at `.`), optional `.`-led fractional run, optional `e`/`E` exponent
    /// with optional sign, optional `L`/`i` suffix.
    pub(crate) fn decimal(&mut self, first: SourceChar, t: &mut Token) -> Result<(), ReaderError> {
        t.kind = TokenKind::ConstReal;

        let mut cur = Some(first);
        if first.ch != '.' {
            t.text.push(first.ch);
            cur = self.digit_run(&mut t.text)?;
        }

        if cur.map(|c| c.ch) == Some('.') {
            t.text.push('.');
            cur = self.digit_run(&mut t.text)?;
        }

        if let Some(mark @ ('e' | 'E')) = cur.map(|c| c.ch) {
            t.text.push(mark);
            match self.reader.next() {
                None => cur = None,
                Some(c) if matches!(c.ch, '+' | '-') || c.ch.is_ascii_digit() => {
                    t.text.push(c.ch);
                    cur = self.digit_run(&mut t.text)?;
                }
                Some(_) => {
                    // The character after the exponent marker is neither
                    // sign nor digit: it stays consumed and is dropped.
                    cur = self.digit_run(&mut t.text)?;
                }
            }
        }

        // Standard decimal parsing: malformed text reads as zero, overflow
        // as infinity, underflow as zero.
        t.real_value = t.text.parse().unwrap_or(0.0);
        t.int_value = truncate_to_i64(t.real_value);

        self.numeric_suffix(cur, t)
    }

    /// Hexadecimal literal: `0x` lead, hex-digit runs around an optional
    /// `.` (each fractional digit contributing four bits of negative
    /// binary exponent), optional `p`/`P` signed decimal exponent,
    /// optional `L`/`i` suffix.
    #[allow(
        clippy::cast_precision_loss,
        reason = "binary exponent magnitude is capped near 1e4 plus fractional bits"
    )]
    pub(crate) fn hexadecimal(
        &mut self,
        first: SourceChar,
        t: &mut Token,
    ) -> Result<(), ReaderError> {
        t.kind = TokenKind::ConstReal;

        // Dispatch guarantees the leading '0'; anything else is a
        // malformed lead.
        if first.ch != '0' {
            t.kind = TokenKind::Error;
            return Ok(());
        }
        let Some(x) = self.reader.next() else {
            t.kind = TokenKind::Error;
            return Ok(());
        };
        t.text.push('0');
        t.text.push(x.ch);
        if x.ch != 'x' && x.ch != 'X' {
            t.kind = TokenKind::Error;
            return Ok(());
        }

        let Some(head) = self.reader.next() else {
            t.kind = TokenKind::Error;
            return Ok(());
        };

        let mut v: f64 = 0.0;
        // -1 until a '.' is seen; then the count of fractional bits.
        let mut frac_bits: i64 = -1;
        let mut cur = Some(head);

        if head.ch != '.' {
            v = f64::from(hex_value(head.ch));
            t.text.push(head.ch);
            loop {
                let Some(c) = self.reader.next() else {
                    cur = None;
                    break;
                };
                if c.ch.is_ascii_hexdigit() {
                    v = v * 16.0 + f64::from(hex_value(c.ch));
                    t.text.push(c.ch);
                } else {
                    cur = Some(c);
                    break;
                }
            }
        }

        if cur.map(|c| c.ch) == Some('.') {
            frac_bits = 0;
            t.text.push('.');
            loop {
                let Some(c) = self.reader.next() else {
                    cur = None;
                    break;
                };
                if c.ch.is_ascii_hexdigit() {
                    frac_bits += 4;
                    v = v * 16.0 + f64::from(hex_value(c.ch));
                    t.text.push(c.ch);
                } else {
                    cur = Some(c);
                    break;
                }
            }
        }

        let mut sign: i64 = 0;
        let mut n: i64 = 0;
        if let Some(mark @ ('p' | 'P')) = cur.map(|c| c.ch) {
            t.text.push(mark);
            sign = 1;
            match self.reader.next() {
                None => cur = None,
                Some(c) => {
                    match c.ch {
                        '+' => t.text.push('+'),
                        '-' => {
                            t.text.push('-');
                            sign = -1;
                        }
                        d if d.is_ascii_digit() => {
                            t.text.push(d);
                            n = i64::from(d.to_digit(10).unwrap_or(0));
                        }
                        // Neither sign nor digit: consumed and dropped,
                        // as in the decimal exponent.
                        _ => {}
                    }
                    loop {
                        let Some(c) = self.reader.next() else {
                            cur = None;
                            break;
                        };
                        if let Some(d) = c.ch.to_digit(10) {
                            if n < 9999 {
                                n = n * 10 + i64::from(d);
                            }
                            t.text.push(c.ch);
                        } else {
                            cur = Some(c);
                            break;
                        }
                    }
                }
            }
        }

        self.numeric_suffix(cur, t)?;

        // mantissa * 2^(explicit exponent - 4 * fractional hex digits)
        if v != 0.0 {
            let mut exp = sign * n;
            if frac_bits > 0 {
                exp -= frac_bits;
            }
            let scale = f64::exp2(exp.unsigned_abs() as f64);
            if exp < 0 {
                v /= scale;
            } else {
                v *= scale;
            }
        }

        if v > f64::MAX {
            t.real_value = f64::INFINITY;
        } else {
            t.real_value = v;
            t.int_value = truncate_to_i64(v);
        }
        Ok(())
    }

    /// Consume a run of decimal digits into `text`, returning the
    /// terminating character (`None` at end of input).
    fn digit_run(&mut self, text: &mut String) -> Result<Option<SourceChar>, ReaderError> {
        loop {
            let Some(c) = self.reader.next() else {
                return Ok(None);
            };
            if c.ch.is_ascii_digit() {
                text.push(c.ch);
            } else {
                return Ok(Some(c));
            }
        }
    }

    /// A trailing `L` reclassifies to an integer constant, a trailing `i`
    /// to a complex constant; any other terminator is pushed back and the
    /// kind stands.
    fn numeric_suffix(&mut self, cur: Option<SourceChar>, t: &mut Token) -> Result<(), ReaderError> {
        match cur {
            Some(c) if c.ch == 'L' => {
                t.kind = TokenKind::ConstInteger;
                t.text.push('L');
            }
            Some(c) if c.ch == 'i' => {
                t.kind = TokenKind::ConstComplex;
                t.text.push('i');
            }
            Some(c) => self.reader.push_back(c)?,
            None => {}
        }
        Ok(())
    }
}
