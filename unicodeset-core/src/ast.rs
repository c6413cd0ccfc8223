use crate::codepoint::Codepoint;

/// A single node of a parsed Unicode Set pattern.
///
/// Nodes are immutable once built: the parser produces a tree and the
/// evaluator consumes it without ever mutating it in place.
#[derive(Clone, Debug, PartialEq)]
pub enum Ast {
    /// A single codepoint, e.g. the `a` in `[a-z]`.
    Literal(Codepoint),
    /// An inclusive range `lo..=hi`, with `lo <= hi` already enforced by the
    /// parser.
    Range(Codepoint, Codepoint),
    /// A multi-codepoint string member, e.g. `def` in `{def}`.
    ///
    /// Always has at least two codepoints; a one-codepoint `{x}` is built as
    /// `Ast::Literal` instead (see [`Ast::string_literal`]).
    StringLiteral(Vec<Codepoint>),
    /// A reference to a Unicode property, e.g. `[:Lu:]` or `\p{Script=Thai}`.
    PropertyRef {
        /// The property type, canonicalized. `None` is the `CATEGORY_OR_SCRIPT`
        /// sentinel from spec.md §4.A: no type was given, so the resolver
        /// tries General_Category, then Script, then boolean properties, then
        /// the derived quote-mark properties, in that order.
        ty: Option<String>,
        /// The property value, canonicalized.
        value: String,
        /// Whether this reference was negated (`[:^...:]` or `\P{...}`).
        negated: bool,
        /// Byte offset of the reference's body, used to annotate resolution
        /// errors.
        offset: usize,
    },
    /// A bracketed set: `[` body `]`, optionally negated with a leading `^`.
    Set {
        /// Operands and operators, alternating operand/operator/operand.
        children: Vec<SetItem>,
        /// Whether this set was written `[^...]`.
        negated: bool,
    },
}

impl Ast {
    /// Build a string-literal node, collapsing a single-codepoint sequence
    /// into a plain `Literal` per the data-model invariant that a
    /// `StringLiteral` always has two or more codepoints.
    pub fn string_literal(codepoints: Vec<Codepoint>) -> Ast {
        if codepoints.len() == 1 {
            Ast::Literal(codepoints[0])
        } else {
            Ast::StringLiteral(codepoints)
        }
    }

    /// Whether this node is eligible to stand on either side of the `&` or
    /// `-` binary operators: a bracketed set or a property reference, per
    /// spec.md §4.C's operand-restriction rule.
    pub(crate) fn is_set_like(&self) -> bool {
        matches!(self, Ast::Set { .. } | Ast::PropertyRef { .. })
    }
}

/// One element of a [`Ast::Set`]'s flat children list: either an operand or
/// the operator that combines it with the previous operand.
#[derive(Clone, Debug, PartialEq)]
pub enum SetItem {
    /// An operand: anything [`Ast::is_set_like`] permits as a bare element,
    /// plus literals, ranges, and strings when no operator restricts them.
    Operand(Ast),
    /// The operator joining this operand to the previous one.
    Op(OpKind),
}

/// The three operators that can appear between operands inside a `Set`.
///
/// All three share one precedence level and are left-associative (spec.md
/// §4.C); modeling them as one enum rather than as distinct AST node shapes
/// keeps the evaluator to a single fold loop (spec.md §9).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OpKind {
    /// Inserted by the parser between adjacent operands with no explicit
    /// operator between them.
    UnionImplicit,
    /// `&`
    Intersect,
    /// `-`
    Difference,
}
