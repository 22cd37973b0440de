use std::collections::HashSet;

use ttyclock::{glyph::GLYPH_ENTRIES, pattern_for, CellClass};

#[test]
fn every_digit_has_fifteen_entries() {
    assert_eq!(GLYPH_ENTRIES, 15);
    for d in 0..=9 {
        assert_eq!(pattern_for(d).entries().len(), 15);
    }
}

#[test]
fn patterns_are_pairwise_distinct() {
    let set: HashSet<_> = (0..=9).map(pattern_for).collect();
    assert_eq!(set.len(), 10);
}

#[test]
fn digits_only_use_off_and_lit() {
    for d in 0..=9 {
        assert!(pattern_for(d)
            .entries()
            .iter()
            .all(|c| matches!(c, CellClass::Off | CellClass::Lit)));
    }
}

#[test]
fn eight_covers_every_other_digit() {
    let eight = pattern_for(8).entries();
    for d in 0..=9 {
        for (i, class) in pattern_for(d).entries().iter().enumerate() {
            if *class == CellClass::Lit {
                assert_eq!(eight[i], CellClass::Lit, "digit {d} entry {i}");
            }
        }
    }
}
