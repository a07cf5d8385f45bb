//! Comments and `#line` directives.

use crate::reader::ReaderError;
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

/// Payload prefix that reclassifies a comment as a line directive.
const LINE_DIRECTIVE_PREFIX: &str = "#line";

impl Scanner<'_> {
    /// `#` through end of line (exclusive) or end of input. The newline is
    /// pushed back so the next call yields its own end-of-line token. A
    /// payload beginning with `#line` becomes a line directive; the
    /// directive's content is not parsed further.
    pub(crate) fn comment(&mut self, t: &mut Token) -> Result<(), ReaderError> {
        t.text.push('#');
        loop {
            let Some(c) = self.reader.next() else {
                break;
            };
            if c.ch == '\n' {
                self.reader.push_back(c)?;
                break;
            }
            t.text.push(c.ch);
        }
        t.kind = if t.text.starts_with(LINE_DIRECTIVE_PREFIX) {
            TokenKind::LineDirective
        } else {
            TokenKind::Comment
        };
        Ok(())
    }
}
