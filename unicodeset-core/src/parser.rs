use crate::ast::{Ast, OpKind, SetItem};
use crate::error::{Error, Result};
use crate::lexer::{self, Spanned, Token};

/// Default nesting-depth limit (spec.md §5: "A hard depth limit (suggested:
/// 64) is an acceptable defence against pathological inputs").
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// Parse a pattern's outermost bracketed set, per spec.md §4.C's grammar.
///
/// The outermost expression must be a bracketed set (spec.md §6) or a bare
/// property reference (`[:X:]`, `[:^X:]`, `\p{X}`, `\P{X}`) standing on its
/// own — spec.md §8's testable property 6 requires `resolve("[:X:]")` to
/// work directly, and scenarios 4/5 use `[:digit:]` standalone. There is no
/// trailing content allowed after the outermost expression.
pub fn parse(src: &str) -> Result<Ast> {
    parse_with_depth(src, DEFAULT_MAX_DEPTH)
}

/// As [`parse`], but with an explicit nesting-depth limit.
pub fn parse_with_depth(src: &str, max_depth: u32) -> Result<Ast> {
    log::trace!("parsing pattern of {} bytes, max_depth={}", src.len(), max_depth);
    let tokens = lexer::lex(src)?;
    let mut p = Parser { tokens, pos: 0, max_depth };
    let ast = match p.peek().clone() {
        Token::PosixOpen { negated } => p.parse_posix(negated)?,
        Token::BackslashP { negated, body, body_offset } => {
            p.advance();
            p.make_property_ref(&body, body_offset, negated)?
        }
        _ => p.parse_set(0)?,
    };
    p.expect_eof()?;
    Ok(ast)
}

/// Parse a single top-level element that may be a bare property reference
/// (`\p{X}`, `\P{X}`, `[:X:]`, `[:^X:]`) as well as a full bracketed set.
///
/// Host regex engines commonly accept a property escape directly, outside
/// of `[...]` (spec.md §4.F.3: "A top-level pattern `\p{X}` or `[:X:]` in
/// the input is rewritten in place"); this relaxes spec.md §6's "outermost
/// expression must be a bracketed set" rule specifically for that case.
pub fn parse_top_level_for_regex(src: &str, max_depth: u32) -> Result<Ast> {
    let tokens = lexer::lex(src)?;
    let mut p = Parser { tokens, pos: 0, max_depth };
    let ast = p.parse_element(0)?;
    p.expect_eof()?;
    Ok(ast)
}

struct Parser {
    tokens: Vec<Spanned<Token>>,
    pos: usize,
    max_depth: u32,
}

impl Parser {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos].value
    }

    fn offset(&self) -> usize {
        self.tokens[self.pos].offset
    }

    fn advance(&mut self) -> Spanned<Token> {
        let tok = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn expect_eof(&mut self) -> Result<()> {
        if matches!(self.peek(), Token::Eof) {
            Ok(())
        } else {
            Err(Error::UnbalancedBracket { offset: self.offset() })
        }
    }

    /// `set := '[' negation? body ']'`
    fn parse_set(&mut self, depth: u32) -> Result<Ast> {
        if depth > self.max_depth {
            log::warn!("nesting depth {} exceeded limit {} at byte {}", depth, self.max_depth, self.offset());
            return Err(Error::DepthExceeded { offset: self.offset(), limit: self.max_depth });
        }
        let open_offset = self.offset();
        match self.advance().value {
            Token::LBracket => {}
            _ => return Err(Error::UnbalancedBracket { offset: open_offset }),
        }
        let negated = if matches!(self.peek(), Token::CaretInitial) {
            self.advance();
            true
        } else {
            false
        };

        let mut children: Vec<SetItem> = Vec::new();
        loop {
            match self.peek().clone() {
                Token::RBracket => {
                    self.advance();
                    break;
                }
                Token::Eof => return Err(Error::UnbalancedBracket { offset: open_offset }),
                Token::Amp => {
                    let op_offset = self.offset();
                    self.advance();
                    self.push_operator(&mut children, OpKind::Intersect, op_offset)?;
                    let rhs = self.parse_element(depth)?;
                    self.push_rhs_operand(&mut children, rhs, op_offset)?;
                }
                Token::Dash => {
                    let op_offset = self.offset();
                    self.advance();
                    self.push_operator(&mut children, OpKind::Difference, op_offset)?;
                    let rhs = self.parse_element(depth)?;
                    self.push_rhs_operand(&mut children, rhs, op_offset)?;
                }
                _ => {
                    let elem = self.parse_element(depth)?;
                    if !children.is_empty() {
                        children.push(SetItem::Op(OpKind::UnionImplicit));
                    }
                    children.push(SetItem::Operand(elem));
                }
            }
        }
        Ok(Ast::Set { children, negated })
    }

    /// Enforce the `&`/`-` operand-restriction rule on the operand already
    /// pushed (the left-hand side), then record the operator.
    fn push_operator(
        &self,
        children: &mut Vec<SetItem>,
        op: OpKind,
        op_offset: usize,
    ) -> Result<()> {
        let lhs_ok = match children.last() {
            Some(SetItem::Operand(ast)) => ast.is_set_like(),
            _ => false,
        };
        if !lhs_ok {
            return Err(Error::OperatorNeedsSet { offset: op_offset });
        }
        children.push(SetItem::Op(op));
        Ok(())
    }

    fn push_rhs_operand(
        &self,
        children: &mut Vec<SetItem>,
        rhs: Ast,
        op_offset: usize,
    ) -> Result<()> {
        if !rhs.is_set_like() {
            return Err(Error::OperatorNeedsSet { offset: op_offset });
        }
        children.push(SetItem::Operand(rhs));
        Ok(())
    }

    /// `element := set | range | char | string | property`
    fn parse_element(&mut self, depth: u32) -> Result<Ast> {
        match self.peek().clone() {
            Token::LBracket => self.parse_set(depth + 1),
            Token::PosixOpen { negated } => self.parse_posix(negated),
            Token::BackslashP { negated, body, body_offset } => {
                self.advance();
                self.make_property_ref(&body, body_offset, negated)
            }
            Token::LBrace => self.parse_string_literal(),
            Token::Char { cp, .. } => {
                let lo_offset = self.offset();
                self.advance();
                if let Token::Dash = self.peek() {
                    if let Token::Char { cp: hi, .. } = self.tokens[self.pos + 1].value.clone() {
                        let dash_offset = self.offset();
                        self.advance();
                        self.advance();
                        if cp.value() > hi.value() {
                            return Err(Error::EmptyRange { offset: dash_offset });
                        }
                        return Ok(Ast::Range(cp, hi));
                    }
                }
                let _ = lo_offset;
                Ok(Ast::Literal(cp))
            }
            _ => Err(Error::OperatorNeedsSet { offset: self.offset() }),
        }
    }

    /// `property := '[:' negation? text ':]'`
    fn parse_posix(&mut self, negated: bool) -> Result<Ast> {
        let open_offset = self.offset();
        self.advance();
        let body_offset = self.offset();
        let mut body = String::new();
        loop {
            match self.peek().clone() {
                Token::PosixClose => {
                    self.advance();
                    break;
                }
                Token::Char { cp, .. } => {
                    self.advance();
                    body.push(char::from_u32(cp.value()).unwrap_or('\u{FFFD}'));
                }
                Token::Eof => return Err(Error::UnbalancedBracket { offset: open_offset }),
                _ => return Err(Error::EmptyPropertyName { offset: body_offset }),
            }
        }
        self.make_property_ref(&body, body_offset, negated)
    }

    /// `string := '{' char+ '}'`
    fn parse_string_literal(&mut self) -> Result<Ast> {
        let open_offset = self.offset();
        self.advance();
        let mut codepoints = Vec::new();
        loop {
            match self.peek().clone() {
                Token::RBrace => {
                    self.advance();
                    break;
                }
                Token::Char { cp, .. } => {
                    self.advance();
                    codepoints.push(cp);
                }
                Token::Eof => return Err(Error::UnbalancedBrace { offset: open_offset }),
                _ => return Err(Error::UnbalancedBrace { offset: open_offset }),
            }
        }
        if codepoints.is_empty() {
            return Err(Error::UnbalancedBrace { offset: open_offset });
        }
        Ok(Ast::string_literal(codepoints))
    }

    fn make_property_ref(&self, body: &str, body_offset: usize, negated: bool) -> Result<Ast> {
        if body.is_empty() {
            return Err(Error::EmptyPropertyName { offset: body_offset });
        }
        let (ty, value) = match body.find('=') {
            Some(idx) => (Some(body[..idx].to_string()), body[idx + 1..].to_string()),
            None => (None, body.to_string()),
        };
        if value.is_empty() {
            return Err(Error::EmptyPropertyName { offset: body_offset });
        }
        Ok(Ast::PropertyRef { ty, value, negated, offset: body_offset })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codepoint::Codepoint;

    fn cp(c: char) -> Codepoint {
        Codepoint::from_u32(c as u32).unwrap()
    }

    #[test]
    fn simple_range() {
        let ast = parse("[a-z]").unwrap();
        assert_eq!(
            ast,
            Ast::Set {
                children: vec![SetItem::Operand(Ast::Range(cp('a'), cp('z')))],
                negated: false,
            }
        );
    }

    #[test]
    fn implicit_union_between_adjacent_elements() {
        let ast = parse("[abc123]").unwrap();
        match ast {
            Ast::Set { children, negated: false } => {
                // a, b, c, 1, 2, 3 = 6 operands + 5 implicit unions.
                assert_eq!(children.len(), 11);
            }
            other => panic!("unexpected ast: {:?}", other),
        }
    }

    #[test]
    fn operator_needs_set_rejects_bare_char_operand() {
        let err = parse("[[:Lu:]-A]").unwrap_err();
        assert!(matches!(err, Error::OperatorNeedsSet { .. }), "got {:?}", err);
    }

    #[test]
    fn operator_accepts_bracketed_set_operand() {
        let ast = parse("[[:Lu:]-[A]]").unwrap();
        match ast {
            Ast::Set { children, .. } => {
                assert_eq!(children.len(), 3);
                assert!(matches!(children[1], SetItem::Op(OpKind::Difference)));
            }
            other => panic!("unexpected ast: {:?}", other),
        }
    }

    #[test]
    fn empty_range_is_rejected() {
        let err = parse("[z-a]").unwrap_err();
        assert!(matches!(err, Error::EmptyRange { .. }));
    }

    #[test]
    fn string_literal_collapses_single_char() {
        let ast = parse("[{a}]").unwrap();
        match ast {
            Ast::Set { children, .. } => {
                assert_eq!(children, vec![SetItem::Operand(Ast::Literal(cp('a')))]);
            }
            other => panic!("unexpected ast: {:?}", other),
        }
    }

    #[test]
    fn string_literal_multi_char() {
        let ast = parse("[{def}]").unwrap();
        match ast {
            Ast::Set { children, .. } => {
                assert_eq!(
                    children,
                    vec![SetItem::Operand(Ast::StringLiteral(vec![
                        cp('d'),
                        cp('e'),
                        cp('f')
                    ]))]
                );
            }
            other => panic!("unexpected ast: {:?}", other),
        }
    }

    #[test]
    fn unbalanced_bracket_detected() {
        assert!(matches!(parse("[a-z").unwrap_err(), Error::UnbalancedBracket { .. }));
        assert!(matches!(parse("[a-z]x").unwrap_err(), Error::UnbalancedBracket { .. }));
    }

    #[test]
    fn empty_property_name_detected() {
        assert!(matches!(parse("[[::]]").unwrap_err(), Error::EmptyPropertyName { .. }));
    }

    #[test]
    fn depth_exceeded_on_pathological_nesting() {
        let mut src = String::new();
        for _ in 0..70 {
            src.push('[');
        }
        src.push('a');
        for _ in 0..70 {
            src.push(']');
        }
        assert!(matches!(parse(&src).unwrap_err(), Error::DepthExceeded { .. }));
    }
}
