//! Canonical interval-set algebra over `u32` codepoint values.
//!
//! An interval set is a `Vec<(u32, u32)>` that is sorted by `lo`, with every
//! pair disjoint and non-touching (adjacent intervals are always coalesced).
//! Every function here both takes and returns sets in that canonical form,
//! per spec.md §4.E. A plain sorted vector is used rather than any tree
//! structure (spec.md §9: "the constant factor beats any balanced tree at
//! the sizes Unicode produces").

pub const MAX_CODEPOINT: u32 = 0x0010_FFFF;

/// Merge a set of (not necessarily sorted or disjoint) intervals into
/// canonical form: sorted, disjoint, and coalesced.
pub fn coalesce(mut intervals: Vec<(u32, u32)>) -> Vec<(u32, u32)> {
    intervals.sort_by_key(|&(lo, _)| lo);
    let mut out: Vec<(u32, u32)> = Vec::with_capacity(intervals.len());
    for (lo, hi) in intervals {
        if let Some(last) = out.last_mut() {
            if lo <= last.1.saturating_add(1) {
                if hi > last.1 {
                    last.1 = hi;
                }
                continue;
            }
        }
        out.push((lo, hi));
    }
    out
}

/// The union of two canonical interval sets.
pub fn union(a: &[(u32, u32)], b: &[(u32, u32)]) -> Vec<(u32, u32)> {
    let mut all = Vec::with_capacity(a.len() + b.len());
    all.extend_from_slice(a);
    all.extend_from_slice(b);
    coalesce(all)
}

/// The intersection of two canonical interval sets.
pub fn intersect(a: &[(u32, u32)], b: &[(u32, u32)]) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        let (alo, ahi) = a[i];
        let (blo, bhi) = b[j];
        let lo = alo.max(blo);
        let hi = ahi.min(bhi);
        if lo <= hi {
            out.push((lo, hi));
        }
        if ahi < bhi {
            i += 1;
        } else {
            j += 1;
        }
    }
    out
}

/// `a` with every codepoint in `b` removed.
pub fn difference(a: &[(u32, u32)], b: &[(u32, u32)]) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    let mut j = 0;
    for &(mut lo, hi) in a {
        while lo <= hi {
            while j < b.len() && b[j].1 < lo {
                j += 1;
            }
            if j >= b.len() || b[j].0 > hi {
                out.push((lo, hi));
                break;
            }
            let (blo, bhi) = b[j];
            if blo > lo {
                out.push((lo, blo - 1));
            }
            if bhi >= hi {
                break;
            }
            lo = bhi + 1;
        }
    }
    out
}

/// The complement of a canonical interval set over `0..=MAX_CODEPOINT`.
pub fn complement(a: &[(u32, u32)]) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    let mut next = 0u32;
    for &(lo, hi) in a {
        if next < lo {
            out.push((next, lo - 1));
        }
        next = hi.saturating_add(1);
        if hi == MAX_CODEPOINT {
            next = MAX_CODEPOINT + 1;
        }
    }
    if next <= MAX_CODEPOINT {
        out.push((next, MAX_CODEPOINT));
    }
    out
}

/// Whether `cp` lies in any interval of a canonical set, via binary search
/// on interval starts (spec.md §4.F.1).
pub fn contains(intervals: &[(u32, u32)], cp: u32) -> bool {
    match intervals.binary_search_by(|&(lo, _)| lo.cmp(&cp)) {
        Ok(_) => true,
        Err(0) => false,
        Err(idx) => {
            let (_, hi) = intervals[idx - 1];
            cp <= hi
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coalesce_merges_touching_and_overlapping() {
        assert_eq!(coalesce(vec![(1, 3), (4, 6), (10, 12)]), vec![(1, 6), (10, 12)]);
        assert_eq!(coalesce(vec![(5, 10), (1, 6)]), vec![(1, 10)]);
    }

    #[test]
    fn union_basic() {
        assert_eq!(union(&[(0x61, 0x63)], &[(0x62, 0x66)]), vec![(0x61, 0x66)]);
    }

    #[test]
    fn intersect_basic() {
        assert_eq!(intersect(&[(1, 10)], &[(5, 20)]), vec![(5, 10)]);
        assert_eq!(intersect(&[(1, 3)], &[(4, 6)]), vec![]);
    }

    #[test]
    fn difference_basic() {
        assert_eq!(difference(&[(1, 10)], &[(4, 6)]), vec![(1, 3), (7, 10)]);
        assert_eq!(difference(&[(1, 10)], &[(1, 10)]), vec![]);
        assert_eq!(difference(&[(1, 10)], &[(20, 30)]), vec![(1, 10)]);
    }

    #[test]
    fn complement_basic() {
        assert_eq!(
            complement(&[(1, 10)]),
            vec![(0, 0), (11, MAX_CODEPOINT)]
        );
        assert_eq!(complement(&[(0, MAX_CODEPOINT)]), Vec::<(u32, u32)>::new());
    }

    #[test]
    fn contains_binary_search() {
        let set = vec![(0x30, 0x39), (0x61, 0x7A)];
        assert!(contains(&set, 0x35));
        assert!(contains(&set, 0x7A));
        assert!(!contains(&set, 0x60));
        assert!(!contains(&set, 0x7B));
    }
}
