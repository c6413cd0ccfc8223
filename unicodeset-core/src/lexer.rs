use std::iter::Peekable;
use std::str::CharIndices;

use crate::codepoint::Codepoint;
use crate::error::{Error, Result};

/// A token paired with the byte offset at which it begins.
#[derive(Clone, Debug, PartialEq)]
pub struct Spanned<T> {
    pub value: T,
    pub offset: usize,
}

/// One lexical unit of a Unicode Set pattern. See spec.md §4.B.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    /// The `^` immediately following an opening bracket.
    CaretInitial,
    /// Candidate for a range (`a-z`) or the difference operator.
    Dash,
    /// Intersection, `&`.
    Amp,
    Colon,
    /// `[:` or `[:^`.
    PosixOpen { negated: bool },
    /// `:]`.
    PosixClose,
    /// `\p{...}` or `\P{...}`; `body` is the raw, unparsed text between the
    /// braces (whitespace included) as captured by the lexer.
    BackslashP { negated: bool, body: String, body_offset: usize },
    /// A single codepoint. `literal` is true when this token was produced by
    /// a backslash escape or a quoted run, rather than appearing bare in the
    /// pattern text.
    Char { cp: Codepoint, literal: bool },
    Eof,
}

/// Tokenize an entire pattern up front.
///
/// Patterns are short enough (spec.md §5: bounded by pattern length, no
/// unbounded recursion needed) that there's no benefit to a streaming
/// lexer; producing the whole token vector keeps the parser's lookahead
/// trivial.
pub fn lex(src: &str) -> Result<Vec<Spanned<Token>>> {
    Lexer::new(src).run()
}

struct Lexer<'p> {
    src: &'p str,
    iter: Peekable<CharIndices<'p>>,
    out: Vec<Spanned<Token>>,
}

impl<'p> Lexer<'p> {
    fn new(src: &'p str) -> Lexer<'p> {
        Lexer { src, iter: src.char_indices().peekable(), out: Vec::new() }
    }

    fn push(&mut self, offset: usize, value: Token) {
        self.out.push(Spanned { value, offset });
    }

    fn skip_ws(&mut self) {
        while matches!(self.iter.peek(), Some(&(_, c)) if c.is_whitespace()) {
            self.iter.next();
        }
    }

    fn run(mut self) -> Result<Vec<Spanned<Token>>> {
        loop {
            self.skip_ws();
            let (offset, ch) = match self.iter.next() {
                None => break,
                Some(x) => x,
            };
            match ch {
                '\'' => self.lex_quoted(offset)?,
                '\\' => self.lex_escape(offset)?,
                '[' => self.lex_lbracket(offset)?,
                ']' => self.push(offset, Token::RBracket),
                '{' => self.push(offset, Token::LBrace),
                '}' => self.push(offset, Token::RBrace),
                '-' => self.push(offset, Token::Dash),
                '&' => self.push(offset, Token::Amp),
                ':' => self.lex_colon(offset)?,
                other => {
                    let cp = Codepoint::from_u32(other as u32)
                        .expect("char is always a valid scalar value");
                    self.push(offset, Token::Char { cp, literal: false });
                }
            }
        }
        let eof_offset = self.src.len();
        self.push(eof_offset, Token::Eof);
        Ok(self.out)
    }

    fn lex_lbracket(&mut self, offset: usize) -> Result<()> {
        let save = self.iter.clone();
        self.skip_ws();
        if matches!(self.iter.peek(), Some(&(_, ':'))) {
            self.iter.next();
            self.skip_ws();
            let negated = matches!(self.iter.peek(), Some(&(_, '^')));
            if negated {
                self.iter.next();
            }
            self.push(offset, Token::PosixOpen { negated });
            return Ok(());
        }
        self.iter = save;
        self.push(offset, Token::LBracket);
        self.skip_ws();
        if matches!(self.iter.peek(), Some(&(_, '^'))) {
            let (caret_offset, _) = self.iter.next().unwrap();
            self.push(caret_offset, Token::CaretInitial);
        }
        Ok(())
    }

    fn lex_colon(&mut self, offset: usize) -> Result<()> {
        if matches!(self.iter.peek(), Some(&(_, ']'))) {
            self.iter.next();
            self.push(offset, Token::PosixClose);
        } else {
            self.push(offset, Token::Colon);
        }
        Ok(())
    }

    fn lex_quoted(&mut self, offset: usize) -> Result<()> {
        loop {
            match self.iter.next() {
                None => return Err(Error::UnterminatedQuote { offset }),
                Some((pos, '\'')) => {
                    if matches!(self.iter.peek(), Some(&(_, '\''))) {
                        self.iter.next();
                        self.push(pos, Token::Char { cp: quote_cp(), literal: true });
                        continue;
                    }
                    return Ok(());
                }
                Some((pos, c)) => {
                    let cp = Codepoint::from_u32(c as u32)
                        .expect("char is always a valid scalar value");
                    self.push(pos, Token::Char { cp, literal: true });
                }
            }
        }
    }

    fn lex_escape(&mut self, offset: usize) -> Result<()> {
        let (_, kind) = self.iter.next().ok_or(Error::BadEscape { offset })?;
        match kind {
            'u' => {
                let cp = self.hex_codepoint(offset, 4, 4)?;
                self.push(offset, Token::Char { cp, literal: true });
            }
            'U' => {
                let cp = self.hex_codepoint(offset, 8, 8)?;
                self.push(offset, Token::Char { cp, literal: true });
            }
            'x' => {
                let cp = self.hex_codepoint(offset, 1, 2)?;
                self.push(offset, Token::Char { cp, literal: true });
            }
            'p' | 'P' => self.lex_backslash_p(offset, kind == 'P')?,
            'a' => self.push(offset, simple_char_token(0x07)),
            'b' => self.push(offset, simple_char_token(0x08)),
            't' => self.push(offset, simple_char_token(0x09)),
            'n' => self.push(offset, simple_char_token(0x0A)),
            'v' => self.push(offset, simple_char_token(0x0B)),
            'f' => self.push(offset, simple_char_token(0x0C)),
            'r' => self.push(offset, simple_char_token(0x0D)),
            '\\' => self.push(offset, simple_char_token(0x5C)),
            other => {
                let cp = Codepoint::from_u32(other as u32)
                    .expect("char is always a valid scalar value");
                self.push(offset, Token::Char { cp, literal: true });
            }
        }
        Ok(())
    }

    fn hex_codepoint(&mut self, offset: usize, min: usize, max: usize) -> Result<Codepoint> {
        let mut digits = String::new();
        while digits.len() < max {
            match self.iter.peek() {
                Some(&(_, c)) if c.is_ascii_hexdigit() => {
                    digits.push(c);
                    self.iter.next();
                }
                _ => break,
            }
        }
        if digits.len() < min {
            return Err(Error::BadEscape { offset });
        }
        let value = u32::from_str_radix(&digits, 16).map_err(|_| Error::BadEscape { offset })?;
        Codepoint::from_u32(value).ok_or(Error::BadEscape { offset })
    }

    fn lex_backslash_p(&mut self, offset: usize, negated: bool) -> Result<()> {
        match self.iter.next() {
            Some((_, '{')) => {}
            _ => return Err(Error::BadEscape { offset }),
        }
        let body_offset = self.iter.peek().map(|&(pos, _)| pos).unwrap_or(self.src.len());
        let mut body = String::new();
        loop {
            match self.iter.next() {
                None => return Err(Error::UnbalancedBrace { offset }),
                Some((_, '}')) => break,
                Some((_, c)) => body.push(c),
            }
        }
        self.push(offset, Token::BackslashP { negated, body, body_offset });
        Ok(())
    }
}

fn simple_char_token(value: u32) -> Token {
    Token::Char {
        cp: Codepoint::from_u32(value).expect("control codepoints are always valid"),
        literal: true,
    }
}

fn quote_cp() -> Codepoint {
    Codepoint::from_u32('\'' as u32).unwrap()
}
