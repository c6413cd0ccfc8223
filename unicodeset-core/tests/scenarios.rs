//! Integration tests exercising the invariants and concrete scenarios.

use unicodeset_core::property::PropertyProvider;
use unicodeset_core::{compile, eval, interval, parse, to_pattern_list, to_regex_class, PatternItem};

struct Toy;

impl PropertyProvider for Toy {
    fn general_category(&self, v: &str) -> Option<&[(u32, u32)]> {
        match v {
            "lu" => Some(&[(0x41, 0x5A)]),
            "nd" => Some(&[(0x30, 0x39), (0x0E50, 0x0E59)]),
            "zs" => Some(&[
                (0x0020, 0x0020),
                (0x00A0, 0x00A0),
                (0x1680, 0x1680),
                (0x2000, 0x200A),
                (0x202F, 0x202F),
                (0x205F, 0x205F),
                (0x3000, 0x3000),
            ]),
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

// Scenario 1: [a-z]
#[test]
fn scenario_simple_range() {
    let resolved = eval(&parse("[a-z]").unwrap(), &Toy).unwrap();
    assert_eq!(resolved.intervals, vec![(0x61, 0x7A)]);
    assert!(resolved.strings.is_empty());
}

// Scenario 2: [abc123]
#[test]
fn scenario_implicit_union() {
    let resolved = eval(&parse("[abc123]").unwrap(), &Toy).unwrap();
    assert_eq!(resolved.intervals, vec![(0x31, 0x33), (0x61, 0x63)]);
}

// Scenario 3: [[ace][bdf]-[abc][def]] == {d,e,f}
#[test]
fn scenario_nested_union_then_difference() {
    let resolved = eval(&parse("[[ace][bdf]-[abc][def]]").unwrap(), &Toy).unwrap();
    assert_eq!(resolved.intervals, vec![(0x64, 0x66)]);
}

// Scenarios 4 & 5: [:digit:] vs [:digit:]-[:thai:] on the Thai digit 3 (0xE53).
#[test]
fn scenario_thai_digit_excluded_by_difference() {
    let excluding_thai = compile("[[:digit:]-[:thai:]]", &Toy).unwrap();
    assert!(!excluding_thai.contains_char('\u{0E53}'));

    let digit_only = compile("[:digit:]", &Toy).unwrap();
    assert!(digit_only.contains_char('\u{0E53}'));
}

// Scenario 6: [abc{def}]
#[test]
fn scenario_string_member_survives_alongside_intervals() {
    let resolved = eval(&parse("[abc{def}]").unwrap(), &Toy).unwrap();
    assert_eq!(resolved.intervals, vec![(0x61, 0x63)]);
    assert_eq!(resolved.strings.len(), 1);
}

// Scenario 7: [{a}{b}{c}] == [abc]
#[test]
fn scenario_single_char_strings_collapse_like_bare_chars() {
    let braces = eval(&parse("[{a}{b}{c}]").unwrap(), &Toy).unwrap();
    let bare = eval(&parse("[abc]").unwrap(), &Toy).unwrap();
    assert_eq!(braces, bare);
    assert_eq!(braces.intervals, vec![(0x61, 0x63)]);
    assert!(braces.strings.is_empty());
}

// Scenario 8: [[:Lu:]-A] is an error.
#[test]
fn scenario_bare_operand_rejected() {
    let err = parse("[[:Lu:]-A]").unwrap_err();
    assert!(matches!(err, unicodeset_core::Error::OperatorNeedsSet { .. }));
}

// Scenario 9: [[:Lu:]-[A]] == uppercase letters minus 0x41.
#[test]
fn scenario_bracketed_operand_accepted() {
    let resolved = eval(&parse("[[:Lu:]-[A]]").unwrap(), &Toy).unwrap();
    assert_eq!(resolved.intervals, vec![(0x42, 0x5A)]);
}

// Scenario 10: \p{Zs} regex-class rewrite.
#[test]
fn scenario_zs_regex_class() {
    let got = to_regex_class(r"\p{Zs}", &Toy).unwrap();
    assert_eq!(
        got,
        r"[\u{20}\u{A0}\u{1680}\u{2000}-\u{200A}\u{202F}\u{205F}\u{3000}]"
    );
}

// Invariant 1: resolved intervals are always sorted, disjoint, and coalesced.
#[test]
fn invariant_canonical_form() {
    let resolved = eval(&parse("[[a-c][g-i][a-c]]").unwrap(), &Toy).unwrap();
    for w in resolved.intervals.windows(2) {
        assert!(w[0].0 <= w[1].0, "not sorted: {:?}", resolved.intervals);
        assert!(w[0].1 + 1 < w[1].0, "not disjoint/coalesced: {:?}", resolved.intervals);
    }
}

// Invariant 2: predicate agrees with resolved intervals, codepoint by codepoint.
#[test]
fn invariant_predicate_matches_resolved_intervals() {
    let resolved = eval(&parse("[a-z]").unwrap(), &Toy).unwrap();
    let predicate = compile("[a-z]", &Toy).unwrap();
    for c in 0x20u32..0x80 {
        let ch = char::from_u32(c).unwrap();
        assert_eq!(interval::contains(&resolved.intervals, c), predicate.contains_char(ch));
    }
}

// Invariant 3: [^body] complements body's intervals and leaves strings alone.
#[test]
fn invariant_negation_complements_codepoints_only() {
    let body = eval(&parse("[abc{def}]").unwrap(), &Toy).unwrap();
    let negated = eval(&parse("[^abc{def}]").unwrap(), &Toy).unwrap();
    assert_eq!(negated.intervals, interval::complement(&body.intervals));
    assert_eq!(negated.strings, body.strings);
}

// Invariant 4: union commutative/associative, intersection idempotent.
#[test]
fn invariant_union_and_intersection_algebra() {
    let a = eval(&parse("[ace]").unwrap(), &Toy).unwrap();
    let b = eval(&parse("[bdf]").unwrap(), &Toy).unwrap();
    let ab = interval::union(&a.intervals, &b.intervals);
    let ba = interval::union(&b.intervals, &a.intervals);
    assert_eq!(ab, ba);

    let c = eval(&parse("[abc]").unwrap(), &Toy).unwrap();
    let left = interval::union(&interval::union(&a.intervals, &b.intervals), &c.intervals);
    let right = interval::union(&a.intervals, &interval::union(&b.intervals, &c.intervals));
    assert_eq!(left, right);

    let once = interval::intersect(&a.intervals, &c.intervals);
    let twice = interval::intersect(&once, &c.intervals);
    assert_eq!(once, twice);
}

// Invariant 5: rendering a resolved set's own intervals as `\u{...}` text and
// re-parsing that text as a Unicode Set pattern yields the same resolved set.
#[test]
fn invariant_round_trips_through_emitted_intervals() {
    let original = eval(&parse("[[:Lu:]&[ABC]]").unwrap(), &Toy).unwrap();
    let mut emitted = String::from("[");
    for &(lo, hi) in &original.intervals {
        emitted.push_str(&format!(r"\u{{{:04X}}}", lo));
        if hi != lo {
            emitted.push('-');
            emitted.push_str(&format!(r"\u{{{:04X}}}", hi));
        }
    }
    emitted.push(']');
    let reparsed = eval(&parse(&emitted).unwrap(), &Toy).unwrap();
    assert_eq!(original.intervals, reparsed.intervals);
}

// Invariant 6: resolve("[:X:]") == (I, ∅) and resolve("[:^X:]") == (complement(I), ∅).
#[test]
fn invariant_property_negation_round_trip() {
    let plain = eval(&parse("[:Lu:]").unwrap(), &Toy).unwrap();
    let negated = eval(&parse("[:^Lu:]").unwrap(), &Toy).unwrap();
    assert_eq!(plain.intervals, vec![(0x41, 0x5A)]);
    assert!(plain.strings.is_empty());
    assert_eq!(negated.intervals, interval::complement(&plain.intervals));
    assert!(negated.strings.is_empty());
}

#[test]
fn negated_pattern_list_tags_the_bodys_members() {
    let items = to_pattern_list("[^a-c]", &Toy).unwrap();
    assert_eq!(
        items,
        vec![
            PatternItem::Negated('a' as u32),
            PatternItem::Negated('b' as u32),
            PatternItem::Negated('c' as u32),
        ]
    );
}
