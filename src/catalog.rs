// src/catalog.rs
//! The set of known glazes.
//!
//! Three sources: the keys of the combinations dataset, the built-in list
//! in `assets/glazes.txt`, or names scraped from the vendor site. Each
//! entry keeps the identifier used for lookups next to its display label.

use std::collections::HashSet;

use crate::combos::CombinationSet;
use crate::config::options::MatchKeys;
use crate::core::sanitize::normalize_ws;
use crate::glaze::format_label;

const BUILTIN: &str = include_str!("../assets/glazes.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlazeEntry {
    pub id: String,
    pub label: String,
}

impl GlazeEntry {
    /// Dataset-style id; label is derived.
    pub fn from_id(id: &str) -> Self {
        Self { id: s!(id), label: format_label(id) }
    }

    /// Scraped display name; used verbatim for both.
    pub fn from_name(name: &str) -> Self {
        let name = normalize_ws(name);
        Self { id: name.clone(), label: name }
    }

    /// The string the selection stores for this entry.
    pub fn key(&self, keys: MatchKeys) -> &str {
        match keys {
            MatchKeys::Labels => &self.label,
            MatchKeys::RawIds => &self.id,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<GlazeEntry>,
}

impl Catalog {
    /// Every glaze named by a dataset key, sorted by label. One entry per
    /// selection key: ids that format to the same label collapse under
    /// `Labels` but stay apart under `RawIds`.
    pub fn from_combinations(set: &CombinationSet, keys: MatchKeys) -> Self {
        Self::from_ids(set.glaze_ids(), keys)
    }

    pub fn builtin() -> Self {
        Self::from_ids(
            BUILTIN
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty() && !l.starts_with('#')),
            MatchKeys::RawIds,
        )
    }

    /// Scraped names, page order, duplicates dropped.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let entries = names
            .into_iter()
            .map(|n| GlazeEntry::from_name(n.as_ref()))
            .filter(|e| !e.id.is_empty() && seen.insert(e.id.clone()))
            .collect();
        Self { entries }
    }

    fn from_ids<'a, I: IntoIterator<Item = &'a str>>(ids: I, keys: MatchKeys) -> Self {
        let mut seen = HashSet::new();
        let mut entries: Vec<GlazeEntry> = ids
            .into_iter()
            .map(GlazeEntry::from_id)
            .filter(|e| !e.label.is_empty() && seen.insert(s!(e.key(keys))))
            .collect();
        entries.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.id.cmp(&b.id)));
        Self { entries }
    }

    pub fn entries(&self) -> &[GlazeEntry] { &self.entries }
    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn find(&self, key: &str, keys: MatchKeys) -> Option<&GlazeEntry> {
        self.entries.iter().find(|e| e.key(keys) == key)
    }

    pub fn contains_key(&self, key: &str, keys: MatchKeys) -> bool {
        self.find(key, keys).is_some()
    }

    /// Entries whose label contains `query`, ignoring case. Empty query
    /// suggests nothing.
    pub fn suggest(&self, query: &str) -> Vec<&GlazeEntry> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return Vec::new();
        }
        self.entries
            .iter()
            .filter(|e| e.label.to_lowercase().contains(&q))
            .collect()
    }

    /// Loose lookup for typed input: exact id, then label ignoring case,
    /// then a single unambiguous suggestion.
    pub fn resolve(&self, input: &str) -> Option<&GlazeEntry> {
        let input = input.trim();
        if let Some(e) = self.entries.iter().find(|e| e.id == input) {
            return Some(e);
        }
        let lc = input.to_lowercase();
        if let Some(e) = self.entries.iter().find(|e| e.label.to_lowercase() == lc) {
            return Some(e);
        }
        match self.suggest(input).as_slice() {
            [only] => Some(*only),
            _ => None,
        }
    }
}
