//! Turning a resolved set into the four output shapes spec.md §4.F names:
//! a membership predicate, a regex character class, a `NEGATED`-tagged
//! pattern list, and a split pattern (ranges plus string needles).

use std::sync::Arc;

use regex::Regex;

use crate::ast::Ast;
use crate::codepoint::Codepoint;
use crate::error::Result;
use crate::eval::{self, ResolvedSet};
use crate::interval;
use crate::parser;
use crate::property::PropertyProvider;

/// A compiled membership test over a resolved set.
///
/// Cheap to clone and safe to share across threads: once built, a
/// `Predicate` never mutates its tables (spec.md §9's concurrency note).
#[derive(Clone, Debug)]
pub struct Predicate {
    intervals: Arc<[(u32, u32)]>,
    strings: Arc<[Vec<Codepoint>]>,
}

impl Predicate {
    fn new(resolved: ResolvedSet) -> Predicate {
        Predicate {
            intervals: resolved.intervals.into(),
            strings: resolved.strings.into(),
        }
    }

    /// Whether a single codepoint is a member.
    pub fn contains_char(&self, c: char) -> bool {
        interval::contains(&self.intervals, c as u32)
    }

    /// Whether `s` is a member: either an exact string member, or a single
    /// codepoint that falls in the interval set. A multi-codepoint `s` that
    /// isn't a listed string member never matches, even if every individual
    /// codepoint would (spec.md §3: string members are matched whole).
    pub fn contains_str(&self, s: &str) -> bool {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.contains_char(c),
            _ => self.strings.iter().any(|member| codepoints_eq_str(member, s)),
        }
    }

    /// The canonical intervals backing this predicate.
    pub fn intervals(&self) -> &[(u32, u32)] {
        &self.intervals
    }

    /// The string members backing this predicate.
    pub fn strings(&self) -> &[Vec<Codepoint>] {
        &self.strings
    }
}

fn codepoints_eq_str(cps: &[Codepoint], s: &str) -> bool {
    let mut chars = s.chars();
    for &cp in cps {
        match chars.next() {
            Some(c) if c as u32 == cp.value() => {}
            _ => return false,
        }
    }
    chars.next().is_none()
}

/// Parse and resolve `src`, producing a [`Predicate`].
pub fn compile<P: PropertyProvider>(src: &str, provider: &P) -> Result<Predicate> {
    let ast = parser::parse(src)?;
    let resolved = eval::eval(&ast, provider)?;
    Ok(Predicate::new(resolved))
}

/// Render a resolved set as a host-regex character class, e.g.
/// `[\u{61}-\u{7a}]`.
///
/// String members have no representation inside a regex character class
/// (spec.md §4.F.3: classes only ever match one codepoint at a time) and are
/// silently dropped; callers that need them should use [`to_split_pattern`]
/// instead.
pub fn to_regex_class<P: PropertyProvider>(src: &str, provider: &P) -> Result<String> {
    let ast = parser::parse_top_level_for_regex(src, parser::DEFAULT_MAX_DEPTH)?;
    let resolved = eval::eval(&ast, provider)?;
    Ok(render_regex_class(&resolved.intervals))
}

fn render_regex_class(intervals: &[(u32, u32)]) -> String {
    let mut out = String::from("[");
    for &(lo, hi) in intervals {
        if lo == hi {
            out.push_str(&format!(r"\u{{{:X}}}", lo));
        } else {
            out.push_str(&format!(r"\u{{{:X}}}-\u{{{:X}}}", lo, hi));
        }
    }
    out.push(']');
    out
}

/// An entry in a [`to_pattern_list`] result.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PatternItem {
    /// A codepoint that is a direct member of the set.
    Codepoint(u32),
    /// A codepoint that is a member of the set's negation, i.e. the set
    /// itself excludes it. Spec.md §4.F.2's `NEGATED(c)` tag.
    Negated(u32),
}

/// Enumerate a resolved pattern one codepoint at a time.
///
/// For a top-level negated set (`[^...]`), enumerating the full complement
/// directly would mean walking most of the codepoint space. Instead this
/// evaluates the set's body before its negation is applied and emits
/// `Negated` entries for that (much smaller) body, which is equivalent: `c`
/// is excluded by `[^body]` exactly when `c` is a member of `body`.
pub fn to_pattern_list<P: PropertyProvider>(src: &str, provider: &P) -> Result<Vec<PatternItem>> {
    let ast = parser::parse(src)?;
    let (body, negated) = match &ast {
        Ast::Set { children, negated } => (eval::eval_children(children, provider)?, *negated),
        other => (eval::eval(other, provider)?, false),
    };
    let wrap: fn(u32) -> PatternItem =
        if negated { PatternItem::Negated } else { PatternItem::Codepoint };
    let mut out = Vec::new();
    for &(lo, hi) in &body.intervals {
        let mut c = lo;
        while c <= hi {
            out.push(wrap(c));
            if c == hi {
                break;
            }
            c += 1;
        }
    }
    Ok(out)
}

/// A set rendered as disjoint codepoint ranges plus string "needles", meant
/// for feeding a search structure that treats multi-codepoint members
/// separately from the interval test (spec.md §4.F.4).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplitPattern {
    /// Sorted, disjoint, coalesced codepoint ranges.
    pub ranges: Vec<(u32, u32)>,
    /// String members, rendered as plain `String`s.
    pub needles: Vec<String>,
}

/// Parse, resolve, and split `src` into ranges and string needles.
pub fn to_split_pattern<P: PropertyProvider>(src: &str, provider: &P) -> Result<SplitPattern> {
    let ast = parser::parse(src)?;
    let resolved = eval::eval(&ast, provider)?;
    let needles = resolved
        .strings
        .iter()
        .map(|cps| cps.iter().filter_map(|cp| char::from_u32(cp.value())).collect())
        .collect();
    Ok(SplitPattern { ranges: resolved.intervals, needles })
}

/// Find-and-replace every bare property escape (`\p{...}`, `\P{...}`, or a
/// POSIX `[:...:]` that isn't already nested inside a larger expression) in
/// a piece of host-regex source text with its rewritten character class.
///
/// Grounded on the find-and-replace idiom `unicode_data.rs` uses for its own
/// generated-code substitution (`PARTS`/`WITH_TAG`): a `Regex` finds
/// candidate spans, and each is replaced independently.
pub fn rewrite_regex_source<P: PropertyProvider>(host_pattern: &str, provider: &P) -> Result<String> {
    lazy_static::lazy_static! {
        static ref PROPERTY_ESCAPE: Regex =
            Regex::new(r"\\[pP]\{[^}]*\}|\[:\^?[A-Za-z_]+:\]").unwrap();
    }
    let mut out = String::with_capacity(host_pattern.len());
    let mut last = 0;
    for m in PROPERTY_ESCAPE.find_iter(host_pattern) {
        out.push_str(&host_pattern[last..m.start()]);
        out.push_str(&to_regex_class(m.as_str(), provider)?);
        last = m.end();
    }
    out.push_str(&host_pattern[last..]);
    Ok(out)
}
