//! The SQL lexer.
//!
//! Turns a source string into classified tokens with byte positions,
//! reproducing PostgreSQL's tokenization rules: identifier downcasing,
//! quote doubling, escape strings, dollar quoting, radix and underscore
//! numeric literals, nested block comments, and the operator trimming rule
//! that keeps `@-` one token while splitting `*-` into two.
//!
//! Lexical errors are sticky: once one is reported, every further
//! `next_token` call returns the same error.

use crate::keywords::Keyword;
use crate::ParseError;

/// A classified token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Token text. Lowercased for keywords and unquoted identifiers,
    /// unescaped content for strings, literal text for operators.
    pub text: String,
    /// Integer value, for integer constants and parameters.
    pub ival: Option<i64>,
    /// Byte offset of the token start in the source string.
    pub loc: usize,
}

impl Token {
    fn new(kind: TokenKind, text: impl Into<String>, loc: usize) -> Self {
        Token { kind, text: text.into(), ival: None, loc }
    }
}

/// Token kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input
    Eof,
    Ident,
    /// Integer constant
    IConst,
    /// Floating point constant (value kept as text)
    FConst,
    /// String constant
    SConst,
    /// Bit string constant (B'...')
    BConst,
    /// Hex string constant (X'...')
    XConst,
    /// $n parameter
    Param,
    /// A generic multi-character operator; text carries its spelling
    Op,

    // Multi-character operators with dedicated tokens
    Typecast,
    DotDot,
    ColonEquals,
    EqualsGreater,
    LessEquals,
    GreaterEquals,
    NotEquals,

    // Single-character tokens
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Semicolon,
    Colon,
    Dot,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    Lt,
    Gt,
    Eq,

    /// Any SQL keyword
    Keyword(Keyword),

    // Tokens produced by the parser's one-token lookahead reclassification,
    // never directly by the lexer. See Parser::fill.
    NotLa,
    NullsLa,
    WithLa,
    WithoutLa,
    FormatLa,
}

const OP_CHARS: &[u8] = b"+-*/<>=~!@#%^&|`?";
/// An operator may keep a trailing '+' or '-' only if it also contains one
/// of these characters.
const OP_SPECIAL_CHARS: &[u8] = b"~!@#%^&|`?";

pub struct Lexer<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    /// Sticky lexical error
    err: Option<ParseError>,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Lexer<'a> {
        Lexer { input, bytes: input.as_bytes(), pos: 0, err: None }
    }

    /// The current byte position, used for error reporting.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn error(&mut self, message: &str, position: usize) -> ParseError {
        let err = ParseError { message: message.to_string(), position };
        self.err = Some(err.clone());
        err
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Scans the next token, skipping leading whitespace and comments.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        if let Some(err) = &self.err {
            return Err(err.clone());
        }
        self.skip_whitespace_and_comments()?;

        let loc = self.pos;
        let b = match self.peek() {
            Some(b) => b,
            None => return Ok(Token::new(TokenKind::Eof, "", loc)),
        };

        match b {
            b'\'' => self.scan_string(loc),
            b'"' => self.scan_quoted_ident(loc),
            b'e' | b'E' if self.peek_at(1) == Some(b'\'') => {
                self.pos += 1;
                self.scan_escape_string(loc)
            }
            b'b' | b'B' if self.peek_at(1) == Some(b'\'') => {
                self.pos += 1;
                self.scan_prefixed_string(loc, 'b', TokenKind::BConst)
            }
            b'x' | b'X' if self.peek_at(1) == Some(b'\'') => {
                self.pos += 1;
                self.scan_prefixed_string(loc, 'x', TokenKind::XConst)
            }
            b'$' => self.scan_dollar(loc),
            b'0'..=b'9' => self.scan_number(loc),
            b'.' => {
                if self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
                    self.scan_number(loc)
                } else if self.peek_at(1) == Some(b'.') {
                    self.pos += 2;
                    Ok(Token::new(TokenKind::DotDot, "..", loc))
                } else {
                    self.pos += 1;
                    Ok(Token::new(TokenKind::Dot, ".", loc))
                }
            }
            b':' => {
                self.pos += 1;
                match self.peek() {
                    Some(b':') => {
                        self.pos += 1;
                        Ok(Token::new(TokenKind::Typecast, "::", loc))
                    }
                    Some(b'=') => {
                        self.pos += 1;
                        Ok(Token::new(TokenKind::ColonEquals, ":=", loc))
                    }
                    _ => Ok(Token::new(TokenKind::Colon, ":", loc)),
                }
            }
            b'(' | b')' | b'[' | b']' | b',' | b';' => {
                self.pos += 1;
                let kind = match b {
                    b'(' => TokenKind::LParen,
                    b')' => TokenKind::RParen,
                    b'[' => TokenKind::LBracket,
                    b']' => TokenKind::RBracket,
                    b',' => TokenKind::Comma,
                    _ => TokenKind::Semicolon,
                };
                Ok(Token::new(kind, (b as char).to_string(), loc))
            }
            _ if is_ident_start(b) => Ok(self.scan_ident(loc)),
            _ if OP_CHARS.contains(&b) => Ok(self.scan_operator(loc)),
            _ => {
                let ch = self.input[loc..].chars().next().unwrap_or('?');
                Err(self.error(&format!("unexpected character \"{ch}\""), loc))
            }
        }
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            match self.peek() {
                Some(b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c') => {
                    self.pos += 1;
                }
                Some(b'-') if self.peek_at(1) == Some(b'-') => {
                    while let Some(b) = self.peek() {
                        if b == b'\n' {
                            break;
                        }
                        self.pos += 1;
                    }
                }
                Some(b'/') if self.peek_at(1) == Some(b'*') => {
                    let start = self.pos;
                    self.pos += 2;
                    let mut depth = 1;
                    while depth > 0 {
                        match (self.peek(), self.peek_at(1)) {
                            (Some(b'/'), Some(b'*')) => {
                                depth += 1;
                                self.pos += 2;
                            }
                            (Some(b'*'), Some(b'/')) => {
                                depth -= 1;
                                self.pos += 2;
                            }
                            (Some(_), _) => self.pos += 1,
                            (None, _) => {
                                return Err(self.error("unterminated /* comment", start));
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    /// Scans an unquoted identifier or keyword, downcasing ASCII letters the
    /// way PostgreSQL's downcase_identifier does.
    fn scan_ident(&mut self, loc: usize) -> Token {
        while self.peek().is_some_and(is_ident_cont) {
            self.pos += 1;
        }
        let text = self.input[loc..self.pos].to_ascii_lowercase();
        match Keyword::lookup(&text) {
            Some(kw) => Token::new(TokenKind::Keyword(kw), text, loc),
            None => Token::new(TokenKind::Ident, text, loc),
        }
    }

    /// Copies bytes into `text` until the (ASCII) stop byte, keeping
    /// multibyte sequences intact. Leaves the cursor on the stop byte;
    /// false means EOF was hit first.
    fn take_until(&mut self, stop: impl Fn(u8) -> bool, text: &mut String) -> bool {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if stop(b) {
                text.push_str(&self.input[start..self.pos]);
                return true;
            }
            self.pos += 1;
        }
        false
    }

    /// Scans a double-quoted identifier, processing `""` doubling.
    fn scan_quoted_ident(&mut self, loc: usize) -> Result<Token, ParseError> {
        self.pos += 1;
        let mut text = String::new();
        loop {
            if !self.take_until(|b| b == b'"', &mut text) {
                return Err(self.error("unterminated quoted identifier", loc));
            }
            self.pos += 1;
            if self.peek() == Some(b'"') {
                self.pos += 1;
                text.push('"');
            } else {
                break;
            }
        }
        if text.is_empty() {
            return Err(self.error("zero-length delimited identifier", loc));
        }
        Ok(Token::new(TokenKind::Ident, text, loc))
    }

    /// Scans a standard single-quoted string with `''` doubling.
    fn scan_string(&mut self, loc: usize) -> Result<Token, ParseError> {
        self.pos += 1;
        let mut text = String::new();
        loop {
            if !self.take_until(|b| b == b'\'', &mut text) {
                return Err(self.error("unterminated quoted string", loc));
            }
            self.pos += 1;
            if self.peek() == Some(b'\'') {
                self.pos += 1;
                text.push('\'');
            } else {
                return Ok(Token::new(TokenKind::SConst, text, loc));
            }
        }
    }

    /// Scans an E'...' string, interpreting backslash escapes.
    fn scan_escape_string(&mut self, loc: usize) -> Result<Token, ParseError> {
        self.pos += 1;
        let mut text = String::new();
        loop {
            if !self.take_until(|b| b == b'\'' || b == b'\\', &mut text) {
                return Err(self.error("unterminated quoted string", loc));
            }
            match self.bump() {
                Some(b'\'') => {
                    if self.peek() == Some(b'\'') {
                        self.pos += 1;
                        text.push('\'');
                    } else {
                        return Ok(Token::new(TokenKind::SConst, text, loc));
                    }
                }
                Some(b'\\') => match self.bump() {
                    Some(b'b') => text.push('\x08'),
                    Some(b'f') => text.push('\x0c'),
                    Some(b'n') => text.push('\n'),
                    Some(b'r') => text.push('\r'),
                    Some(b't') => text.push('\t'),
                    Some(c @ b'0'..=b'7') => {
                        let mut val = (c - b'0') as u32;
                        for _ in 0..2 {
                            match self.peek() {
                                Some(d @ b'0'..=b'7') => {
                                    val = val * 8 + (d - b'0') as u32;
                                    self.pos += 1;
                                }
                                _ => break,
                            }
                        }
                        text.push(char::from_u32(val).unwrap_or('\u{fffd}'));
                    }
                    Some(b'x') => {
                        let mut val = 0u32;
                        let mut digits = 0;
                        while digits < 2 {
                            match self.peek() {
                                Some(d) if d.is_ascii_hexdigit() => {
                                    val = val * 16 + (d as char).to_digit(16).unwrap();
                                    self.pos += 1;
                                    digits += 1;
                                }
                                _ => break,
                            }
                        }
                        if digits == 0 {
                            text.push('x');
                        } else {
                            text.push(char::from_u32(val).unwrap_or('\u{fffd}'));
                        }
                    }
                    Some(other) => {
                        // any other escaped character stands for itself
                        if other.is_ascii() {
                            text.push(other as char);
                        } else {
                            self.pos -= 1;
                            let ch = self.input[self.pos..].chars().next().unwrap_or('\u{fffd}');
                            text.push(ch);
                            self.pos += ch.len_utf8();
                        }
                    }
                    None => return Err(self.error("unterminated quoted string", loc)),
                },
                _ => return Err(self.error("unterminated quoted string", loc)),
            }
        }
    }

    /// Scans a B'...' or X'...' string; the value carries the radix prefix
    /// character, matching PostgreSQL's bit-string value nodes.
    fn scan_prefixed_string(
        &mut self,
        loc: usize,
        prefix: char,
        kind: TokenKind,
    ) -> Result<Token, ParseError> {
        self.pos += 1;
        let mut text = String::new();
        text.push(prefix);
        loop {
            if !self.take_until(|b| b == b'\'', &mut text) {
                return Err(self.error("unterminated quoted string", loc));
            }
            self.pos += 1;
            if self.peek() == Some(b'\'') {
                self.pos += 1;
                text.push('\'');
            } else {
                return Ok(Token::new(kind, text, loc));
            }
        }
    }

    /// Scans `$n` parameters and `$tag$...$tag$` dollar-quoted strings.
    fn scan_dollar(&mut self, loc: usize) -> Result<Token, ParseError> {
        if self.peek_at(1).is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
            let start = self.pos;
            while self.peek().is_some_and(|b| b.is_ascii_digit()) {
                self.pos += 1;
            }
            let digits = &self.input[start..self.pos];
            let mut tok = Token::new(TokenKind::Param, digits, loc);
            tok.ival = digits.parse::<i64>().ok();
            return Ok(tok);
        }

        // try to read a $tag$ opener
        let mut end = self.pos + 1;
        while end < self.bytes.len() && is_ident_cont(self.bytes[end]) {
            end += 1;
        }
        if self.bytes.get(end) != Some(&b'$') {
            // a lone '$' acts as an operator character
            self.pos += 1;
            return Ok(Token::new(TokenKind::Op, "$", loc));
        }
        let tag = &self.input[self.pos..=end];
        self.pos = end + 1;

        match self.input[self.pos..].find(tag) {
            Some(rel) => {
                let text = self.input[self.pos..self.pos + rel].to_string();
                self.pos += rel + tag.len();
                Ok(Token::new(TokenKind::SConst, text, loc))
            }
            None => {
                self.pos = self.bytes.len();
                Err(self.error("unterminated dollar-quoted string", loc))
            }
        }
    }

    /// Scans numeric literals: decimal integers and floats, and 0x/0o/0b
    /// radix integers, all allowing '_' digit separators.
    fn scan_number(&mut self, loc: usize) -> Result<Token, ParseError> {
        if self.peek() == Some(b'0') {
            let radix = match self.peek_at(1) {
                Some(b'x' | b'X') => Some(16),
                Some(b'o' | b'O') => Some(8),
                Some(b'b' | b'B') => Some(2),
                _ => None,
            };
            if let Some(radix) = radix {
                self.pos += 2;
                let digits_start = self.pos;
                while self.peek().is_some_and(|b| {
                    b == b'_' || (b as char).to_digit(radix).is_some()
                }) {
                    self.pos += 1;
                }
                let digits: String =
                    self.input[digits_start..self.pos].chars().filter(|c| *c != '_').collect();
                if digits.is_empty() {
                    let what = match radix {
                        16 => "hexadecimal",
                        8 => "octal",
                        _ => "binary",
                    };
                    return Err(self.error(&format!("invalid {what} integer"), loc));
                }
                self.reject_trailing_junk(loc)?;
                let text = self.input[loc..self.pos].to_string();
                return match i64::from_str_radix(&digits, radix) {
                    Ok(value) => {
                        let mut tok = Token::new(TokenKind::IConst, text, loc);
                        tok.ival = Some(value);
                        Ok(tok)
                    }
                    Err(_) => Ok(Token::new(TokenKind::FConst, text, loc)),
                };
            }
        }

        let mut is_float = false;
        let mut digits = String::new();
        while let Some(b) = self.peek() {
            match b {
                b'0'..=b'9' => {
                    digits.push(b as char);
                    self.pos += 1;
                }
                b'_' => {
                    self.pos += 1;
                }
                b'.' => {
                    // ".." must be left alone so ranges like 1..10 lex properly
                    if self.peek_at(1) == Some(b'.') || is_float {
                        break;
                    }
                    is_float = true;
                    digits.push('.');
                    self.pos += 1;
                }
                b'e' | b'E' => {
                    let mut ahead = 1;
                    if matches!(self.peek_at(1), Some(b'+' | b'-')) {
                        ahead = 2;
                    }
                    if !self.peek_at(ahead).is_some_and(|c| c.is_ascii_digit()) {
                        break;
                    }
                    is_float = true;
                    digits.push('e');
                    self.pos += 1;
                    if let Some(sign @ (b'+' | b'-')) = self.peek() {
                        digits.push(sign as char);
                        self.pos += 1;
                    }
                    while let Some(d) = self.peek() {
                        match d {
                            b'0'..=b'9' => {
                                digits.push(d as char);
                                self.pos += 1;
                            }
                            b'_' => self.pos += 1,
                            _ => break,
                        }
                    }
                    break;
                }
                _ => break,
            }
        }
        self.reject_trailing_junk(loc)?;

        if is_float {
            return Ok(Token::new(TokenKind::FConst, digits, loc));
        }
        match digits.parse::<i64>() {
            Ok(value) => {
                let mut tok = Token::new(TokenKind::IConst, digits, loc);
                tok.ival = Some(value);
                Ok(tok)
            }
            // an integer too large for i64 is reclassified as a float
            Err(_) => Ok(Token::new(TokenKind::FConst, digits, loc)),
        }
    }

    fn reject_trailing_junk(&mut self, loc: usize) -> Result<(), ParseError> {
        if self.peek().is_some_and(is_ident_start) {
            return Err(self.error("trailing junk after numeric literal", loc));
        }
        Ok(())
    }

    /// Scans a run of operator characters, applying PostgreSQL's rules: the
    /// run stops before an embedded comment start, and a multi-character
    /// operator may only end in '+' or '-' if it contains one of the
    /// "special" operator characters.
    fn scan_operator(&mut self, loc: usize) -> Token {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !OP_CHARS.contains(&b) {
                break;
            }
            if (b == b'-' && self.peek_at(1) == Some(b'-'))
                || (b == b'/' && self.peek_at(1) == Some(b'*'))
            {
                break;
            }
            self.pos += 1;
        }
        let mut len = self.pos - start;
        let run = &self.bytes[start..self.pos];
        if len > 1
            && matches!(run[len - 1], b'+' | b'-')
            && !run.iter().any(|b| OP_SPECIAL_CHARS.contains(b))
        {
            while len > 1 && matches!(run[len - 1], b'+' | b'-') {
                len -= 1;
            }
            self.pos = start + len;
        }
        let text = &self.input[start..start + len];

        let kind = match text {
            "=>" => TokenKind::EqualsGreater,
            "<=" => TokenKind::LessEquals,
            ">=" => TokenKind::GreaterEquals,
            "<>" | "!=" => TokenKind::NotEquals,
            "+" => TokenKind::Plus,
            "-" => TokenKind::Minus,
            "*" => TokenKind::Star,
            "/" => TokenKind::Slash,
            "%" => TokenKind::Percent,
            "^" => TokenKind::Caret,
            "<" => TokenKind::Lt,
            ">" => TokenKind::Gt,
            "=" => TokenKind::Eq,
            _ => TokenKind::Op,
        };
        // "<>" and "!=" both mean the not-equals operator
        let text = if kind == TokenKind::NotEquals { "<>" } else { text };
        Token::new(kind, text, loc)
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

fn is_ident_cont(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}
