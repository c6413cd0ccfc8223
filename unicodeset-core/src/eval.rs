//! Walking an [`Ast`] into a canonical [`ResolvedSet`]. Spec.md §4.D.

use crate::ast::{Ast, OpKind, SetItem};
use crate::codepoint::Codepoint;
use crate::error::Result;
use crate::interval::{self};
use crate::property::{self, PropertyProvider};

/// The result of resolving a pattern: a canonical interval set plus the
/// multi-codepoint string members that survived alongside it (spec.md §3).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedSet {
    /// Sorted, disjoint, coalesced inclusive intervals.
    pub intervals: Vec<(u32, u32)>,
    /// Multi-codepoint string members, sorted for determinism.
    pub strings: Vec<Vec<Codepoint>>,
}

impl ResolvedSet {
    fn from_literal(cp: Codepoint) -> ResolvedSet {
        ResolvedSet { intervals: vec![(cp.value(), cp.value())], strings: Vec::new() }
    }

    fn from_range(lo: Codepoint, hi: Codepoint) -> ResolvedSet {
        ResolvedSet { intervals: vec![(lo.value(), hi.value())], strings: Vec::new() }
    }

    fn from_string(s: Vec<Codepoint>) -> ResolvedSet {
        ResolvedSet { intervals: Vec::new(), strings: vec![s] }
    }

    fn complement_codepoints(mut self) -> ResolvedSet {
        self.intervals = interval::complement(&self.intervals);
        self
    }

    fn combine(a: ResolvedSet, op: OpKind, b: ResolvedSet) -> ResolvedSet {
        let intervals = match op {
            OpKind::UnionImplicit => interval::union(&a.intervals, &b.intervals),
            OpKind::Intersect => interval::intersect(&a.intervals, &b.intervals),
            OpKind::Difference => interval::difference(&a.intervals, &b.intervals),
        };
        let strings = combine_strings(op, a.strings, b.strings);
        ResolvedSet { intervals, strings }
    }
}

fn combine_strings(
    op: OpKind,
    mut a: Vec<Vec<Codepoint>>,
    b: Vec<Vec<Codepoint>>,
) -> Vec<Vec<Codepoint>> {
    match op {
        OpKind::UnionImplicit => {
            for s in b {
                if !a.contains(&s) {
                    a.push(s);
                }
            }
        }
        OpKind::Intersect => {
            a.retain(|s| b.contains(s));
        }
        OpKind::Difference => {
            a.retain(|s| !b.contains(s));
        }
    }
    a.sort();
    a
}

/// Evaluate an already-parsed AST against a property provider.
pub fn eval<P: PropertyProvider>(ast: &Ast, provider: &P) -> Result<ResolvedSet> {
    match ast {
        Ast::Literal(cp) => Ok(ResolvedSet::from_literal(*cp)),
        Ast::Range(lo, hi) => Ok(ResolvedSet::from_range(*lo, *hi)),
        Ast::StringLiteral(cps) => Ok(ResolvedSet::from_string(cps.clone())),
        Ast::PropertyRef { ty, value, negated, offset } => {
            let intervals = property::resolve(provider, ty.as_deref(), value, *negated, *offset)?;
            Ok(ResolvedSet { intervals, strings: Vec::new() })
        }
        Ast::Set { children, negated } => {
            let body = eval_children(children, provider)?;
            Ok(if *negated { body.complement_codepoints() } else { body })
        }
    }
}

/// Evaluate a `Set` node's children without applying its own top-level
/// negation. Used both by [`eval`] and by `to_pattern_list`, which needs
/// the pre-negation body to emit compact `NEGATED(c)` entries.
pub(crate) fn eval_children<P: PropertyProvider>(
    children: &[SetItem],
    provider: &P,
) -> Result<ResolvedSet> {
    let mut items = children.iter();
    let mut acc = match items.next() {
        None => ResolvedSet::default(),
        Some(SetItem::Operand(first)) => eval(first, provider)?,
        Some(SetItem::Op(_)) => unreachable!("a Set's first child is always an operand"),
    };
    loop {
        let op = match items.next() {
            None => break,
            Some(SetItem::Op(op)) => *op,
            Some(SetItem::Operand(_)) => unreachable!("operands and operators alternate"),
        };
        let rhs = match items.next() {
            Some(SetItem::Operand(ast)) => eval(ast, provider)?,
            _ => unreachable!("every operator is followed by an operand"),
        };
        acc = ResolvedSet::combine(acc, op, rhs);
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::property::PropertyProvider;

    struct Toy;

    impl PropertyProvider for Toy {
        fn general_category(&self, v: &str) -> Option<&[(u32, u32)]> {
            match v {
                "lu" => Some(&[(0x41, 0x5A)]),
                "nd" => Some(&[(0x30, 0x39)]),
                _ => None,
            }
        }
        fn script(&self, v: &str) -> Option<&[(u32, u32)]> {
            match v {
                "thai" => Some(&[(0x0E00, 0x0E7F)]),
                _ => None,
            }
        }
        fn block(&self, _v: &str) -> Option<&[(u32, u32)]> {
            None
        }
        fn boolean(&self, _v: &str) -> Option<&[(u32, u32)]> {
            None
        }
        fn combining_class(&self, _c: u8) -> Option<&[(u32, u32)]> {
            None
        }
        fn all_assigned(&self) -> &[(u32, u32)] {
            &[(0x30, 0x39), (0x41, 0x5A), (0x0E00, 0x0E7F)]
        }
    }

    #[test]
    fn literal_and_range() {
        let ast = parse("[a-z]").unwrap();
        let resolved = eval(&ast, &Toy).unwrap();
        assert_eq!(resolved.intervals, vec![(0x61, 0x7A)]);
        assert!(resolved.strings.is_empty());
    }

    #[test]
    fn union_coalesces_overlapping_ranges() {
        let ast = parse("[abc123]").unwrap();
        let resolved = eval(&ast, &Toy).unwrap();
        assert_eq!(resolved.intervals, vec![(0x31, 0x33), (0x61, 0x63)]);
    }

    #[test]
    fn strings_survive_alongside_intervals() {
        let ast = parse("[abc{def}]").unwrap();
        let resolved = eval(&ast, &Toy).unwrap();
        assert_eq!(resolved.intervals, vec![(0x61, 0x63)]);
        assert_eq!(resolved.strings, vec![vec![
            Codepoint::from_u32('d' as u32).unwrap(),
            Codepoint::from_u32('e' as u32).unwrap(),
            Codepoint::from_u32('f' as u32).unwrap(),
        ]]);
    }

    #[test]
    fn negation_does_not_touch_strings() {
        let positive = eval(&parse("[abc{def}]").unwrap(), &Toy).unwrap();
        let negated = eval(&parse("[^abc{def}]").unwrap(), &Toy).unwrap();
        assert_eq!(positive.strings, negated.strings);
        assert_eq!(negated.intervals, interval::complement(&positive.intervals));
    }

    #[test]
    fn nested_set_difference() {
        // [[ace][bdf]-[abc][def]] == {d,e,f}
        let ast = parse("[[ace][bdf]-[abc][def]]").unwrap();
        let resolved = eval(&ast, &Toy).unwrap();
        assert_eq!(resolved.intervals, vec![(0x64, 0x66)]);
    }

    #[test]
    fn property_ref_digit_alias() {
        let ast = parse("[:digit:]").unwrap();
        let resolved = eval(&ast, &Toy).unwrap();
        assert_eq!(resolved.intervals, vec![(0x30, 0x39)]);
    }
}
