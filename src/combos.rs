// src/combos.rs
//! Combination records and the ordered pair → records mapping.
//!
//! On disk the dataset is a JSON object:
//! `{ "glazeA/glazeB": [ { "url": "...", "imageUrl": "..." }, ... ], ... }`
//! Key order in the file is the display order; it is kept through
//! load → merge → save.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::pair::{DirectedPair, GlazePair};

/// One layering photo/link for a pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Combination {
    pub url: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl Combination {
    pub fn new(url: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self { url: url.into(), image_url: image_url.into() }
    }
}

/// A directed candidate that was confirmed against its live page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedCombination {
    pub pair: DirectedPair,
    pub url: String,
    pub text: String,
    pub image_url: String,
}

/// Pair → records, in first-seen order.
///
/// `a/b` and `b/a` are one group. When both spellings occur, records are
/// merged under the first one, and saving writes only that key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CombinationSet {
    groups: Vec<(GlazePair, Vec<Combination>)>,
    index: HashMap<GlazePair, usize>,
}

impl CombinationSet {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.groups.len() }
    pub fn is_empty(&self) -> bool { self.groups.is_empty() }

    /// Total number of records across all pairs.
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|(_, v)| v.len()).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GlazePair, &[Combination])> {
        self.groups.iter().map(|(p, v)| (p, v.as_slice()))
    }

    pub fn get(&self, pair: &GlazePair) -> Option<&[Combination]> {
        self.index.get(pair).map(|&i| self.groups[i].1.as_slice())
    }

    /// Append records under `pair`, creating the group at the end if new.
    /// An existing group keeps its original key spelling.
    pub fn extend_pair<I>(&mut self, pair: GlazePair, combos: I)
    where
        I: IntoIterator<Item = Combination>,
    {
        let ix = match self.index.get(&pair) {
            Some(&ix) => ix,
            None => {
                self.groups.push((pair.clone(), Vec::new()));
                self.index.insert(pair, self.groups.len() - 1);
                self.groups.len() - 1
            }
        };
        self.groups[ix].1.extend(combos);
    }

    pub fn push(&mut self, pair: GlazePair, combo: Combination) {
        self.extend_pair(pair, std::iter::once(combo));
    }

    /// Fold `other` into `self`; groups already present get `other`'s
    /// records appended.
    pub fn merge(&mut self, other: CombinationSet) {
        for (pair, combos) in other.groups {
            self.extend_pair(pair, combos);
        }
    }

    /// Drop repeated `(url, imageUrl)` records within each pair, keeping
    /// the first. Returns how many were removed.
    pub fn dedup(&mut self) -> usize {
        let mut removed = 0;
        for (_, combos) in &mut self.groups {
            let before = combos.len();
            let mut seen: HashSet<Combination> = HashSet::with_capacity(before);
            combos.retain(|c| seen.insert(c.clone()));
            removed += before - combos.len();
        }
        removed
    }

    /// Every glaze id mentioned by a key, first-seen order, no repeats.
    pub fn glaze_ids(&self) -> Vec<&str> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut out = Vec::new();
        for (pair, _) in &self.groups {
            for id in [pair.first(), pair.second()] {
                if seen.insert(id) {
                    out.push(id);
                }
            }
        }
        out
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Pretty JSON with four-space indent.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let fmt = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, fmt);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl FromIterator<(GlazePair, Vec<Combination>)> for CombinationSet {
    fn from_iter<T: IntoIterator<Item = (GlazePair, Vec<Combination>)>>(iter: T) -> Self {
        let mut set = CombinationSet::new();
        for (pair, combos) in iter {
            set.extend_pair(pair, combos);
        }
        set
    }
}

impl Serialize for CombinationSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (pair, combos) in &self.groups {
            map.serialize_entry(&pair.key(), combos)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CombinationSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = CombinationSet;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object of \"glazeA/glazeB\" keys to combination arrays")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
                let mut set = CombinationSet::new();
                while let Some((key, combos)) = access.next_entry::<String, Vec<Combination>>()? {
                    let pair = GlazePair::parse(&key).map_err(de::Error::custom)?;
                    set.extend_pair(pair, combos);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(SetVisitor)
    }
}
