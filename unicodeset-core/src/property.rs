//! Property resolution: turning a `(type, value, negated)` triple into an
//! interval set. See spec.md §4.A.
//!
//! The actual Unicode property tables are out of this crate's scope (spec.md
//! §1); this module only knows how to canonicalize names, walk the
//! General_Category derivation rules, and try the fallback order for an
//! omitted type. The tables themselves come from whatever `PropertyProvider`
//! the caller supplies — see the `unicodeset-data` crate for a built-in one.

use crate::error::{Error, Result};
use crate::interval::{self, MAX_CODEPOINT};

/// The set of General_Category two-letter codes that make up each
/// single-letter derived group (spec.md §4.A: "`L` -> union of
/// `Lu|Ll|Lt|Lm|Lo`").
const DERIVED_GROUPS: &[(&str, &[&str])] = &[
    ("l", &["lu", "ll", "lt", "lm", "lo"]),
    ("m", &["mn", "mc", "me"]),
    ("n", &["nd", "nl", "no"]),
    ("p", &["pc", "pd", "ps", "pe", "pi", "pf", "po"]),
    ("s", &["sm", "sc", "sk", "so"]),
    ("z", &["zs", "zl", "zp"]),
    ("c", &["cc", "cf", "co", "cs", "cn"]),
];

/// Value aliases that resolve through General_Category before anything else
/// is tried, e.g. ICU's `digit` alias for `Nd` (spec.md §8 scenario 4/5).
const GENERAL_CATEGORY_VALUE_ALIASES: &[(&str, &str)] = &[("digit", "nd"), ("letter", "l")];

/// A source of concrete Unicode property data.
///
/// Every method takes an already-canonicalized value (see [`canonicalize`])
/// and returns the interval set for it, or `None` if this provider doesn't
/// know that value. Implementations are expected to be cheap to call
/// repeatedly — `unicodeset-data`'s implementation is just const-table
/// lookups.
pub trait PropertyProvider {
    /// Look up a two-letter General_Category value, e.g. `"lu"`, `"zs"`.
    fn general_category(&self, canonical_value: &str) -> Option<&[(u32, u32)]>;
    /// Look up a Script value, e.g. `"thai"`, `"greek"`.
    fn script(&self, canonical_value: &str) -> Option<&[(u32, u32)]>;
    /// Look up a Block value, e.g. `"basiclatin"`.
    fn block(&self, canonical_value: &str) -> Option<&[(u32, u32)]>;
    /// Look up a boolean property by name, e.g. `"whitespace"`, including the
    /// derived quote-mark properties.
    fn boolean(&self, canonical_name: &str) -> Option<&[(u32, u32)]>;
    /// Look up a Canonical_Combining_Class numeric value.
    fn combining_class(&self, class: u8) -> Option<&[(u32, u32)]>;
    /// The union of every General_Category value this provider knows about.
    /// Used to derive `Cn` (unassigned) and `Assigned` (spec.md §4.A).
    fn all_assigned(&self) -> &[(u32, u32)];
}

/// Strip whitespace and underscores, lowercase ASCII letters. Spec.md §4.A's
/// canonicalization rule.
pub fn canonicalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .map(|c| if c.is_ascii_uppercase() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Resolve a property reference to an interval set.
///
/// `ty` is `None` for the `CATEGORY_OR_SCRIPT` sentinel (no type was given
/// in the pattern, e.g. `[:Lu:]` or `\p{Letter}`). `offset` is used only to
/// annotate errors.
pub fn resolve<P: PropertyProvider>(
    provider: &P,
    ty: Option<&str>,
    value: &str,
    negated: bool,
    offset: usize,
) -> Result<Vec<(u32, u32)>> {
    let canonical_value = canonicalize(value);
    let intervals = match ty {
        Some(ty) => resolve_typed(provider, &canonicalize(ty), &canonical_value, offset)?,
        None => resolve_category_or_script(provider, &canonical_value, offset)?,
    };
    Ok(if negated { interval::complement(&intervals) } else { intervals })
}

fn resolve_typed<P: PropertyProvider>(
    provider: &P,
    ty: &str,
    value: &str,
    offset: usize,
) -> Result<Vec<(u32, u32)>> {
    match ty {
        "generalcategory" | "gc" | "category" => {
            general_category(provider, value).ok_or_else(|| Error::UnknownPropertyValue {
                offset,
                property: ty.to_string(),
                value: value.to_string(),
            })
        }
        "script" | "sc" => provider
            .script(value)
            .map(|s| s.to_vec())
            .ok_or_else(|| Error::UnknownPropertyValue {
                offset,
                property: ty.to_string(),
                value: value.to_string(),
            }),
        "block" | "blk" => provider
            .block(value)
            .map(|s| s.to_vec())
            .ok_or_else(|| Error::UnknownPropertyValue {
                offset,
                property: ty.to_string(),
                value: value.to_string(),
            }),
        "canonicalcombiningclass" | "ccc" => {
            let class: u8 = value
                .parse()
                .map_err(|_| Error::UnknownPropertyValue {
                    offset,
                    property: ty.to_string(),
                    value: value.to_string(),
                })?;
            provider
                .combining_class(class)
                .map(|s| s.to_vec())
                .ok_or_else(|| Error::UnknownPropertyValue {
                    offset,
                    property: ty.to_string(),
                    value: value.to_string(),
                })
        }
        _ => {
            // A typed boolean property, e.g. `\p{White_Space=Yes}`.
            let truthy = matches!(value, "y" | "yes" | "true" | "t");
            let falsy = matches!(value, "n" | "no" | "false" | "f");
            if !truthy && !falsy {
                return Err(Error::UnknownProperty { offset, name: ty.to_string() });
            }
            let set = provider
                .boolean(ty)
                .ok_or_else(|| Error::UnknownProperty { offset, name: ty.to_string() })?;
            Ok(if falsy { interval::complement(set) } else { set.to_vec() })
        }
    }
}

fn resolve_category_or_script<P: PropertyProvider>(
    provider: &P,
    value: &str,
    offset: usize,
) -> Result<Vec<(u32, u32)>> {
    if let Some(special) = special_derived(provider, value) {
        return Ok(special);
    }
    if let Some(gc) = general_category(provider, value) {
        return Ok(gc);
    }
    if let Some(sc) = provider.script(value) {
        return Ok(sc.to_vec());
    }
    if let Some(b) = provider.boolean(value) {
        return Ok(b.to_vec());
    }
    log::debug!("no General_Category, Script, or boolean property named {:?}", value);
    Err(Error::UnknownProperty { offset, name: value.to_string() })
}

/// `Any`, `Assigned`, and `ASCII` (spec.md §4.A: "Derived categories").
fn special_derived<P: PropertyProvider>(provider: &P, value: &str) -> Option<Vec<(u32, u32)>> {
    match value {
        "any" => Some(vec![(0, MAX_CODEPOINT)]),
        "assigned" => Some(provider.all_assigned().to_vec()),
        "ascii" => Some(vec![(0, 0x7F)]),
        _ => None,
    }
}

/// Resolve a value against General_Category: direct two-letter codes,
/// single-letter derived groups, `Cn` (unassigned), and the value-alias
/// table, in that order.
fn general_category<P: PropertyProvider>(provider: &P, value: &str) -> Option<Vec<(u32, u32)>> {
    if value == "cn" {
        return Some(interval::complement(provider.all_assigned()));
    }
    if let Some(direct) = provider.general_category(value) {
        return Some(direct.to_vec());
    }
    for &(group, members) in DERIVED_GROUPS {
        if group == value {
            let mut acc = Vec::new();
            for &m in members {
                if let Some(part) = provider.general_category(m) {
                    acc = interval::union(&acc, part);
                }
            }
            return Some(acc);
        }
    }
    for &(alias, target) in GENERAL_CATEGORY_VALUE_ALIASES {
        if alias == value {
            return general_category(provider, target);
        }
    }
    None
}
