// src/matcher.rs
//! Which combinations to show for a selection.
//!
//! Undirected: filter the dataset down to keys whose two glazes are both
//! selected. Directed: generate every "top over bottom" candidate from the
//! selection; those get checked against the live site by
//! `scrape::validate`.

use crate::combos::{Combination, CombinationSet, ValidatedCombination};
use crate::config::options::MatchKeys;
use crate::glaze::format_label;
use crate::pair::{DirectedPair, GlazePair};
use crate::selection::Selection;

/// A dataset pair whose glazes are both selected.
#[derive(Clone, Copy, Debug)]
pub struct Matched<'a> {
    pub pair: &'a GlazePair,
    pub entries: &'a [Combination],
}

impl Matched<'_> {
    pub fn title(&self) -> String {
        self.pair.title()
    }
}

/// Dataset order is kept.
pub fn filter<'a>(set: &'a CombinationSet, selection: &Selection, keys: MatchKeys) -> Vec<Matched<'a>> {
    if selection.is_empty() {
        return Vec::new();
    }
    set.iter()
        .filter(|(pair, _)| pair_selected(pair, selection, keys))
        .map(|(pair, entries)| Matched { pair, entries })
        .collect()
}

pub fn pair_selected(pair: &GlazePair, selection: &Selection, keys: MatchKeys) -> bool {
    match keys {
        MatchKeys::Labels => {
            selection.contains(&format_label(pair.first())) && selection.contains(&format_label(pair.second()))
        }
        MatchKeys::RawIds => selection.contains(pair.first()) && selection.contains(pair.second()),
    }
}

/// Every ordered `(top, bottom)` with `top != bottom`, nested in selection
/// order: `[X, Y]` → `X over Y`, `Y over X`.
pub fn directed_candidates(selection: &Selection) -> Vec<DirectedPair> {
    let keys = selection.as_slice();
    let mut out = Vec::with_capacity(keys.len() * keys.len().saturating_sub(1));
    for (i, top) in keys.iter().enumerate() {
        for (j, bottom) in keys.iter().enumerate() {
            if i != j {
                out.push(DirectedPair::new(top.clone(), bottom.clone()));
            }
        }
    }
    out
}

/// Validated results still covered by the selection.
pub fn visible_validated<'a>(
    results: &'a [ValidatedCombination],
    selection: &Selection,
) -> Vec<&'a ValidatedCombination> {
    results
        .iter()
        .filter(|r| selection.contains(&r.pair.top) && selection.contains(&r.pair.bottom))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CombinationSet {
        CombinationSet::from_json(r#"{
            "a/b": [ { "url": "u1", "imageUrl": "i1" } ],
            "pc-24-sapphire-float/pc-30-temmoku": [ { "url": "u2", "imageUrl": "i2" } ],
            "pc-30-temmoku/pc-20-blue-rutile": [ { "url": "u3", "imageUrl": "i3" } ]
        }"#).unwrap()
    }

    fn sel(keys: &[&str]) -> Selection {
        keys.iter().copied().collect()
    }

    #[test]
    fn needs_both_members() {
        let set = sample();
        assert!(filter(&set, &sel(&["A"]), MatchKeys::Labels).is_empty());

        let hits = filter(&set, &sel(&["A", "B"]), MatchKeys::Labels);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].entries[0].url, "u1");
    }

    #[test]
    fn empty_selection_matches_nothing() {
        assert!(filter(&sample(), &Selection::new(), MatchKeys::Labels).is_empty());
    }

    #[test]
    fn keeps_dataset_order() {
        let set = sample();
        let s = sel(&["PC-20 Blue Rutile", "PC-30 Temmoku", "PC-24 Sapphire Float"]);
        let keys: Vec<String> = filter(&set, &s, MatchKeys::Labels).iter().map(|m| m.pair.key()).collect();
        assert_eq!(keys, vec!["pc-24-sapphire-float/pc-30-temmoku", "pc-30-temmoku/pc-20-blue-rutile"]);
    }

    #[test]
    fn raw_keys_compare_unformatted() {
        let set = sample();
        assert!(filter(&set, &sel(&["A", "B"]), MatchKeys::RawIds).is_empty());
        assert_eq!(filter(&set, &sel(&["a", "b"]), MatchKeys::RawIds).len(), 1);
    }

    #[test]
    fn removing_a_glaze_drops_its_pairs() {
        let set = sample();
        let mut s = sel(&["PC-24 Sapphire Float", "PC-30 Temmoku"]);
        assert_eq!(filter(&set, &s, MatchKeys::Labels).len(), 1);
        s.remove("PC-30 Temmoku");
        assert!(filter(&set, &s, MatchKeys::Labels).is_empty());
    }

    #[test]
    fn directed_two_glazes() {
        let c = directed_candidates(&sel(&["X", "Y"]));
        assert_eq!(c, vec![DirectedPair::new("X", "Y"), DirectedPair::new("Y", "X")]);
    }

    #[test]
    fn directed_count_is_n_times_n_minus_one() {
        assert_eq!(directed_candidates(&sel(&["a", "b", "c", "d"])).len(), 12);
        assert!(directed_candidates(&sel(&["a"])).is_empty());
        assert!(directed_candidates(&Selection::new()).is_empty());
    }
}
