// src/pair.rs
//! Structured glaze pairs.
//!
//! `GlazePair` is the dataset key: unordered for identity (`a/b` == `b/a`)
//! but it remembers the order it was written in, so it serializes back to
//! the same `"a/b"` text. `DirectedPair` is "top over bottom" and is
//! order-sensitive.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{Error, Result};
use crate::glaze::{format_label, slugify};

pub const KEY_SEP: char = '/';

#[derive(Clone, Debug)]
pub struct GlazePair {
    first: String,
    second: String,
}

impl GlazePair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self { first: first.into(), second: second.into() }
    }

    /// Pair with its members in lexicographic order.
    pub fn sorted(a: impl Into<String>, b: impl Into<String>) -> Self {
        let (a, b) = (a.into(), b.into());
        if a <= b { Self::new(a, b) } else { Self::new(b, a) }
    }

    /// Parse a dataset key of the form `glazeA/glazeB`.
    pub fn parse(key: &str) -> Result<Self> {
        let invalid = |reason| Error::InvalidKey { key: s!(key), reason };

        let (first, second) = key.split_once(KEY_SEP).ok_or_else(|| invalid("missing '/'"))?;
        if second.contains(KEY_SEP) {
            return Err(invalid("more than one '/'"));
        }
        let (first, second) = (first.trim(), second.trim());
        if first.is_empty() || second.is_empty() {
            return Err(invalid("empty glaze id"));
        }
        Ok(Self::new(first, second))
    }

    pub fn first(&self) -> &str { &self.first }
    pub fn second(&self) -> &str { &self.second }

    pub fn key(&self) -> String {
        join!(self.first.as_str(), "/", &self.second)
    }

    /// `"PC-20 Blue Rutile and PC-30 Temmoku"`
    pub fn title(&self) -> String {
        format!("{} and {}", format_label(&self.first), format_label(&self.second))
    }

    fn canonical(&self) -> (&str, &str) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }
}

impl PartialEq for GlazePair {
    fn eq(&self, other: &Self) -> bool {
        self.canonical() == other.canonical()
    }
}

impl Eq for GlazePair {}

impl Hash for GlazePair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical().hash(state);
    }
}

impl fmt::Display for GlazePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.first, KEY_SEP, self.second)
    }
}

/// `top` layered over `bottom`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirectedPair {
    pub top: String,
    pub bottom: String,
}

impl DirectedPair {
    pub fn new(top: impl Into<String>, bottom: impl Into<String>) -> Self {
        Self { top: top.into(), bottom: bottom.into() }
    }

    /// `<top-slug>-over-<bottom-slug>`
    pub fn slug(&self) -> String {
        join!(&slugify(&self.top), "-over-", &slugify(&self.bottom))
    }

    /// `"<top> over <bottom>"`
    pub fn text(&self) -> String {
        format!("{} over {}", self.top, self.bottom)
    }
}

impl fmt::Display for DirectedPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} over {}", self.top, self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn parse_and_key() {
        let p = GlazePair::parse("pc-20-blue-rutile/pc-30-temmoku").unwrap();
        assert_eq!(p.first(), "pc-20-blue-rutile");
        assert_eq!(p.second(), "pc-30-temmoku");
        assert_eq!(p.key(), "pc-20-blue-rutile/pc-30-temmoku");
        assert_eq!(p.to_string(), p.key());
    }

    #[test]
    fn parse_rejects_bad_keys() {
        for key in ["", "abc", "a/", "/b", "a/b/c", " / "] {
            assert!(GlazePair::parse(key).is_err(), "accepted {key:?}");
        }
    }

    #[test]
    fn unordered_identity() {
        let ab = GlazePair::parse("a/b").unwrap();
        let ba = GlazePair::parse("b/a").unwrap();
        assert_eq!(ab, ba);

        let set: HashSet<GlazePair> = [ab.clone(), ba].into_iter().collect();
        assert_eq!(set.len(), 1);
        // display order is kept
        assert_eq!(ab.key(), "a/b");
    }

    #[test]
    fn sorted_orders_members() {
        assert_eq!(GlazePair::sorted("z", "a").key(), "a/z");
    }

    #[test]
    fn title_uses_labels() {
        let p = GlazePair::parse("pc-20-blue-rutile/pc-30-temmoku").unwrap();
        assert_eq!(p.title(), "PC-20 Blue Rutile and PC-30 Temmoku");
    }

    #[test]
    fn directed_is_order_sensitive() {
        let xy = DirectedPair::new("X", "Y");
        assert_ne!(xy, DirectedPair::new("Y", "X"));
        assert_eq!(xy.text(), "X over Y");
        assert_eq!(DirectedPair::new("Blue Midnight", "PC-24 Sapphire Float").slug(),
            "blue-midnight-over-pc-24-sapphire-float");
    }
}
