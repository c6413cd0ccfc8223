//! A built-in [`PropertyProvider`] for `unicodeset-core`, backed by const
//! interval tables laid out the way a Unicode-table generator would emit
//! them.
//!
//! The tables here are a representative subset of the Unicode Character
//! Database (see `tables.rs` for what's covered), not a full copy of it.
//! Generating a complete UCD table set is its own project; this crate only
//! needs enough real data to resolve the patterns this repo's own tests and
//! examples exercise.

#![deny(missing_docs)]

pub mod tables;

use unicodeset_core::interval;
use unicodeset_core::property::PropertyProvider;

/// The built-in property provider. Stateless; all lookups are const-table
/// reads.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinProvider;

impl PropertyProvider for BuiltinProvider {
    fn general_category(&self, canonical_value: &str) -> Option<&[(u32, u32)]> {
        tables::GENERAL_CATEGORY_TABLES
            .iter()
            .find(|&&(name, _)| name == canonical_value)
            .map(|&(_, set)| set)
    }

    fn script(&self, canonical_value: &str) -> Option<&[(u32, u32)]> {
        tables::SCRIPT_TABLES
            .iter()
            .find(|&&(name, _)| name == canonical_value)
            .map(|&(_, set)| set)
    }

    fn block(&self, canonical_value: &str) -> Option<&[(u32, u32)]> {
        tables::BLOCK_TABLES
            .iter()
            .find(|&&(name, _)| name == canonical_value)
            .map(|&(_, set)| set)
    }

    fn boolean(&self, canonical_name: &str) -> Option<&[(u32, u32)]> {
        tables::BOOLEAN_TABLES
            .iter()
            .find(|&&(name, _)| name == canonical_name)
            .map(|&(_, set)| set)
    }

    fn combining_class(&self, class: u8) -> Option<&[(u32, u32)]> {
        tables::CCC_TABLES.iter().find(|&&(c, _)| c == class).map(|&(_, set)| set)
    }

    fn all_assigned(&self) -> &[(u32, u32)] {
        lazy_static::lazy_static! {
            static ref ALL_ASSIGNED: Vec<(u32, u32)> = {
                let mut acc = Vec::new();
                for &(_, set) in tables::GENERAL_CATEGORY_TABLES {
                    acc = interval::union(&acc, set);
                }
                acc
            };
        }
        &ALL_ASSIGNED
    }
}

/// The process-wide default provider, published once via `lazy_static` so
/// every caller shares the same backing tables (spec.md §9's "atomic
/// publish" note on shared immutable data).
pub fn default_provider() -> &'static BuiltinProvider {
    lazy_static::lazy_static! {
        static ref PROVIDER: BuiltinProvider = BuiltinProvider;
    }
    &PROVIDER
}

/// Parse and resolve `src` against the [`default_provider`].
pub fn resolve(src: &str) -> unicodeset_core::Result<unicodeset_core::ResolvedSet> {
    let ast = unicodeset_core::parse(src)?;
    unicodeset_core::eval(&ast, default_provider())
}

/// Parse, resolve, and compile `src` into a [`unicodeset_core::Predicate`]
/// against the [`default_provider`].
pub fn compile(src: &str) -> unicodeset_core::Result<unicodeset_core::Predicate> {
    unicodeset_core::compile(src, default_provider())
}

/// Render `src` as a host-regex character class against the
/// [`default_provider`].
pub fn to_regex_class(src: &str) -> unicodeset_core::Result<String> {
    unicodeset_core::to_regex_class(src, default_provider())
}

/// Enumerate `src` as a `NEGATED`-tagged pattern list against the
/// [`default_provider`].
pub fn to_pattern_list(
    src: &str,
) -> unicodeset_core::Result<Vec<unicodeset_core::PatternItem>> {
    unicodeset_core::to_pattern_list(src, default_provider())
}

/// Split `src` into ranges and string needles against the
/// [`default_provider`].
pub fn to_split_pattern(src: &str) -> unicodeset_core::Result<unicodeset_core::SplitPattern> {
    unicodeset_core::to_split_pattern(src, default_provider())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_provider_resolves_uppercase_letters() {
        let resolved = resolve("[:Lu:]").unwrap();
        assert!(resolved.intervals.contains(&(0x0041, 0x005A)));
    }

    #[test]
    fn space_separator_matches_the_exact_unicode_set() {
        let resolved = resolve(r"\p{General_Category=Zs}").unwrap();
        assert_eq!(
            resolved.intervals,
            vec![
                (0x0020, 0x0020),
                (0x00A0, 0x00A0),
                (0x1680, 0x1680),
                (0x2000, 0x200A),
                (0x202F, 0x202F),
                (0x205F, 0x205F),
                (0x3000, 0x3000),
            ]
        );
    }

    #[test]
    fn digit_alias_includes_thai_digits() {
        let resolved = resolve("[:digit:]").unwrap();
        assert!(resolved.intervals.contains(&(0x0E50, 0x0E59)));
    }

    #[test]
    fn compile_builds_a_working_predicate() {
        let p = compile("[a-z]").unwrap();
        assert!(p.contains_char('m'));
        assert!(!p.contains_char('M'));
    }
}
