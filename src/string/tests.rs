use pretty_assertions::assert_eq;

use crate::token::{Token, TokenKind};
use crate::Scanner;

/// Helper: scan one quoted literal standing alone.
fn scan_one(source: &str) -> Token {
    let mut scanner = Scanner::new(source);
    scanner.next_token()
}

/// Helper: assert a literal scans to the given kind and decoded payload.
fn assert_quoted(source: &str, kind: TokenKind, payload: &str) {
    let t = scan_one(source);
    assert_eq!(t.kind, kind, "kind for {source:?}");
    assert_eq!(t.text, payload, "payload for {source:?}");
}

// ─── Plain Literals ──────────────────────────────────────────────────────

#[test]
fn double_and_single_quotes_close_as_character_constants() {
    assert_quoted(r#""hello""#, TokenKind::ConstCharacter, "hello");
    assert_quoted("'hello'", TokenKind::ConstCharacter, "hello");
    assert_quoted(r#""""#, TokenKind::ConstCharacter, "");
}

#[test]
fn the_other_quote_kind_is_literal_inside_a_literal() {
    assert_quoted(r#""a'b""#, TokenKind::ConstCharacter, "a'b");
    assert_quoted(r#"'a"b'"#, TokenKind::ConstCharacter, "a\"b");
}

#[test]
fn unescaped_newlines_are_preserved() {
    assert_quoted("\"  hj\n k\"", TokenKind::ConstCharacter, "  hj\n k");
}

#[test]
fn backtick_closes_as_a_symbol() {
    assert_quoted("`a b`", TokenKind::Symbol, "a b");
    assert_quoted("`if`", TokenKind::Symbol, "if");
}

#[test]
fn quotes_are_literal_inside_backticks() {
    assert_quoted("`a\"b'c`", TokenKind::Symbol, "a\"b'c");
}

// ─── Single-Character Escapes ────────────────────────────────────────────

#[test]
fn each_single_character_escape_decodes_to_one_character() {
    let cases = [
        (r#""\ ""#, " "),
        (r#""\n""#, "\n"),
        (r#""\r""#, "\r"),
        (r#""\t""#, "\t"),
        (r#""\b""#, "\u{8}"),
        (r#""\a""#, "\u{7}"),
        (r#""\f""#, "\u{c}"),
        (r#""\v""#, "\u{b}"),
        (r#""\\""#, "\\"),
        (r#""\'""#, "'"),
        (r#""\"""#, "\""),
        (r#""\`""#, "`"),
    ];
    for (source, payload) in cases {
        assert_quoted(source, TokenKind::ConstCharacter, payload);
    }
}

#[test]
fn escaped_literal_newline_is_a_newline() {
    assert_quoted("\"a\\\nb\"", TokenKind::ConstCharacter, "a\nb");
}

#[test]
fn unknown_escape_is_an_error() {
    assert_eq!(scan_one(r#""\q""#).kind, TokenKind::Error);
}

// ─── Octal and Hex Escapes ───────────────────────────────────────────────

#[test]
fn octal_escapes_take_up_to_three_digits() {
    assert_quoted(r#""+\7-""#, TokenKind::ConstCharacter, "+\u{7}-");
    assert_quoted(r#""*\07/""#, TokenKind::ConstCharacter, "*\u{7}/");
    assert_quoted(r#""\007""#, TokenKind::ConstCharacter, "\u{7}");
    // A fourth digit is a literal character.
    assert_quoted(r"'\0074'", TokenKind::ConstCharacter, "\u{7}4");
    assert_quoted(r"'\101'", TokenKind::ConstCharacter, "A");
}

#[test]
fn hex_escapes_take_up_to_two_digits() {
    assert_quoted(r#""\x7aD""#, TokenKind::ConstCharacter, "zD");
    assert_quoted(r"'\x41'", TokenKind::ConstCharacter, "A");
}

// ─── Unicode Escapes ─────────────────────────────────────────────────────

#[test]
fn short_unicode_escapes_decode_identically_at_any_width() {
    for source in [r"'m\u7m'", r"'m\u07m'", r"'m\u007m'", r"'m\u0007m'"] {
        assert_quoted(source, TokenKind::ConstCharacter, "m\u{7}m");
    }
    assert_quoted(r"'m\u{07}2m'", TokenKind::ConstCharacter, "m\u{7}2m");
}

#[test]
fn long_unicode_escapes_decode_identically_at_any_width() {
    for source in [r"'n\U7n'", r"'n\U07n'", r"'n\U007n'", r"'n\U0007n'"] {
        assert_quoted(source, TokenKind::ConstCharacter, "n\u{7}n");
    }
    assert_quoted(r"'n\U{00000007}2n'", TokenKind::ConstCharacter, "n\u{7}2n");
}

#[test]
fn braced_unicode_escape_requires_its_closing_brace() {
    assert_eq!(scan_one(r"'\u{7x'").kind, TokenKind::Error);
    // The digit run stops at four digits, so a fifth digit cannot reach
    // the closing brace either.
    assert_eq!(scan_one(r"'\u{12345}'").kind, TokenKind::Error);
}

#[test]
fn unicode_escape_beyond_scalar_range_decodes_to_replacement() {
    assert_quoted(r"'\UD800'", TokenKind::ConstCharacter, "\u{FFFD}");
    assert_quoted(r"'\UFFFFFFFF'", TokenKind::ConstCharacter, "\u{FFFD}");
}

#[test]
fn unicode_escapes_are_rejected_inside_backticks() {
    assert_eq!(scan_one(r"`\u7`").kind, TokenKind::Error);
    assert_eq!(scan_one(r"`\U7`").kind, TokenKind::Error);
}

#[test]
fn mixing_unicode_with_octal_or_hex_escapes_is_an_error() {
    assert_eq!(scan_one(r"'\u7\x41'").kind, TokenKind::Error);
    assert_eq!(scan_one(r"'\7\u41'").kind, TokenKind::Error);
    // Octal with hex is fine; the restriction involves Unicode only.
    assert_quoted(r"'\7\x41'", TokenKind::ConstCharacter, "\u{7}A");
}

// ─── NUL and Termination Errors ──────────────────────────────────────────

#[test]
fn escapes_decoding_to_nul_are_errors() {
    for source in [r"'\0'", r"'\00'", r"'\000'", r"'\x0'", r"'\x00'", r"'\u0'", r"'\U0'"] {
        assert_eq!(scan_one(source).kind, TokenKind::Error, "for {source:?}");
    }
}

#[test]
fn hex_escape_with_no_digits_is_an_error() {
    // `\x` followed by a non-digit decodes to zero, which is rejected.
    assert_eq!(scan_one(r"'\xg'").kind, TokenKind::Error);
}

#[test]
fn unterminated_literals_are_errors() {
    for source in ["\"abc", "'abc", "`abc", "\"abc\\"] {
        let t = scan_one(source);
        assert_eq!(t.kind, TokenKind::Error, "for {source:?}");
    }
}

#[test]
fn multiline_literal_with_escapes_decodes_fully() {
    // Multi-line double-quoted string mixing literal newlines, an escaped
    // newline, and a comment-looking body.
    let source = "\"  hj\n k k\\n df\n jhjh \\\n\tdfg # not a comment\"";
    assert_quoted(
        source,
        TokenKind::ConstCharacter,
        "  hj\n k k\n df\n jhjh \n\tdfg # not a comment",
    );
}
