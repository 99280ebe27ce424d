// src/selection.rs

/// The glazes the user picked, in the order they were picked.
/// Stores whatever key the session matches on (label or raw id).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    keys: Vec<String>,
}

impl Selection {
    pub fn new() -> Self { Self::default() }

    /// Returns false if it was already selected.
    pub fn insert(&mut self, key: &str) -> bool {
        if self.contains(key) {
            return false;
        }
        self.keys.push(s!(key));
        true
    }

    /// Returns false if it wasn't selected.
    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.keys.len();
        self.keys.retain(|k| k != key);
        self.keys.len() != before
    }

    pub fn toggle(&mut self, key: &str) {
        if !self.remove(key) {
            self.keys.push(s!(key));
        }
    }

    pub fn clear(&mut self) { self.keys.clear(); }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] { &self.keys }
    pub fn len(&self) -> usize { self.keys.len() }
    pub fn is_empty(&self) -> bool { self.keys.is_empty() }
}

impl<S: AsRef<str>> FromIterator<S> for Selection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut sel = Selection::new();
        for k in iter {
            sel.insert(k.as_ref());
        }
        sel
    }
}
