// src/session.rs
//! Selection state as immutable snapshots.
//!
//! Every change goes through `reduce(&Snapshot, Action) -> Snapshot`;
//! `Session` just holds the latest one behind an `Arc`. Views read the
//! snapshot and derive everything else (matches, candidates) from it.

use std::sync::Arc;

use crate::catalog::{Catalog, GlazeEntry};
use crate::combos::{CombinationSet, ValidatedCombination};
use crate::config::options::{CatalogOptions, PairMode, SelectorStyle};
use crate::loader::Loaded;
use crate::matcher::{self, Matched};
use crate::pair::DirectedPair;
use crate::selection::Selection;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataPhase {
    #[default]
    Loading,
    Ready,
    /// Load failed; catalog and dataset are empty.
    Failed,
}

/// Directed-mode validation workflow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading { batch: u64 },
    Error(String),
}

#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    pub options: CatalogOptions,
    pub data: DataPhase,
    pub catalog: Arc<Catalog>,
    pub combos: Arc<CombinationSet>,
    pub selection: Selection,
    pub input: String,
    pub suggestions: Vec<GlazeEntry>,
    pub phase: LoadPhase,
    pub validated: Arc<Vec<ValidatedCombination>>,
    pub next_batch: u64,
}

#[derive(Clone, Debug)]
pub enum Action {
    Loaded(Loaded),
    LoadFailed(String),
    InputChanged(String),
    /// Add the suggestion with this key and reset the input.
    PickSuggestion(String),
    Add(String),
    Remove(String),
    Toggle(String),
    Clear,
    SetSelector(SelectorStyle),
    SetPairMode(PairMode),
    ValidationStarted,
    ValidationFinished { batch: u64, results: Vec<ValidatedCombination> },
    ValidationFailed { batch: u64, message: String },
    ValidationCancelled { batch: u64 },
}

impl Snapshot {
    pub fn new(options: CatalogOptions) -> Self {
        Self { options, ..Self::default() }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading { .. })
    }

    /// The batch currently in flight, if any.
    pub fn batch(&self) -> Option<u64> {
        match self.phase {
            LoadPhase::Loading { batch } => Some(batch),
            _ => None,
        }
    }

    /// Undirected matches for the current selection; empty in directed mode.
    pub fn matches(&self) -> Vec<Matched<'_>> {
        match self.options.pairs {
            PairMode::Undirected => matcher::filter(&self.combos, &self.selection, self.options.keys),
            PairMode::Directed => Vec::new(),
        }
    }

    pub fn candidates(&self) -> Vec<DirectedPair> {
        matcher::directed_candidates(&self.selection)
    }

    pub fn visible_validated(&self) -> Vec<&ValidatedCombination> {
        matcher::visible_validated(&self.validated, &self.selection)
    }

    /// Display label for a selection key.
    pub fn label_for<'a>(&'a self, key: &'a str) -> &'a str {
        self.catalog
            .find(key, self.options.keys)
            .map_or(key, |e| e.label.as_str())
    }

    fn knows(&self, key: &str) -> bool {
        self.catalog.contains_key(key, self.options.keys)
    }

    fn refresh_suggestions(&mut self) {
        self.suggestions = self.catalog.suggest(&self.input).into_iter().cloned().collect();
    }

    fn reset_input(&mut self) {
        self.input.clear();
        self.suggestions.clear();
    }

    /// Settle the batch `batch` if it is the one in flight.
    fn settle(&mut self, batch: u64, phase: LoadPhase) -> bool {
        if self.batch() != Some(batch) {
            logd!("Session: ignoring stale batch {}", batch);
            return false;
        }
        self.phase = phase;
        true
    }
}

pub fn reduce(prev: &Snapshot, action: Action) -> Snapshot {
    let mut next = prev.clone();
    match action {
        Action::Loaded(loaded) => {
            next.catalog = Arc::new(loaded.catalog);
            next.combos = Arc::new(loaded.combos);
            next.data = DataPhase::Ready;
            let keys = next.options.keys;
            next.selection = prev
                .selection
                .iter()
                .filter(|k| next.catalog.contains_key(k, keys))
                .collect();
            next.refresh_suggestions();
        }
        Action::LoadFailed(message) => {
            loge!("Session: load failed: {}", message);
            next.catalog = Arc::default();
            next.combos = Arc::default();
            next.data = DataPhase::Failed;
            next.selection.clear();
            next.reset_input();
        }
        Action::InputChanged(text) => {
            next.input = text;
            next.refresh_suggestions();
        }
        Action::PickSuggestion(key) => {
            if next.knows(&key) {
                next.selection.insert(&key);
            }
            next.reset_input();
        }
        Action::Add(key) => {
            if next.knows(&key) {
                next.selection.insert(&key);
            }
        }
        Action::Remove(key) => {
            next.selection.remove(&key);
        }
        Action::Toggle(key) => {
            if next.selection.contains(&key) {
                next.selection.remove(&key);
            } else if next.knows(&key) {
                next.selection.insert(&key);
            }
        }
        Action::Clear => next.selection.clear(),
        Action::SetSelector(style) => {
            next.options.selector = style;
            next.reset_input();
        }
        Action::SetPairMode(mode) => {
            if mode != next.options.pairs {
                next.options.pairs = mode;
                next.phase = LoadPhase::Idle;
                next.validated = Arc::default();
            }
        }
        Action::ValidationStarted => {
            if !next.is_loading() {
                next.phase = LoadPhase::Loading { batch: next.next_batch };
                next.next_batch += 1;
            }
        }
        Action::ValidationFinished { batch, results } => {
            if next.settle(batch, LoadPhase::Idle) {
                next.validated = Arc::new(results);
            }
        }
        Action::ValidationFailed { batch, message } => {
            next.settle(batch, LoadPhase::Error(message));
        }
        Action::ValidationCancelled { batch } => {
            next.settle(batch, LoadPhase::Idle);
        }
    }
    next
}

/// Holder of the latest snapshot. Only the UI thread dispatches.
#[derive(Clone, Debug, Default)]
pub struct Session {
    current: Arc<Snapshot>,
}

impl Session {
    pub fn new(options: CatalogOptions) -> Self {
        Self { current: Arc::new(Snapshot::new(options)) }
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current)
    }

    pub fn dispatch(&mut self, action: Action) -> Arc<Snapshot> {
        self.current = Arc::new(reduce(&self.current, action));
        self.snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combos::Combination;
    use crate::config::options::MatchKeys;
    use crate::pair::GlazePair;

    fn ready() -> Session {
        let combos: CombinationSet = [
            (GlazePair::new("a", "b"), vec![Combination::new("u1", "i1")]),
        ].into_iter().collect();
        let mut session = Session::new(CatalogOptions::default());
        session.dispatch(Action::Loaded(Loaded { catalog: Catalog::from_combinations(&combos, MatchKeys::Labels), combos }));
        session
    }

    #[test]
    fn add_needs_a_catalog_entry() {
        let mut s = ready();
        s.dispatch(Action::Add(s!("A")));
        s.dispatch(Action::Add(s!("nope")));
        s.dispatch(Action::Add(s!("A")));
        assert_eq!(s.snapshot().selection.as_slice(), &[s!("A")]);
    }

    #[test]
    fn snapshots_are_immutable() {
        let mut s = ready();
        let before = s.snapshot();
        s.dispatch(Action::Add(s!("A")));
        assert!(before.selection.is_empty());
        assert_eq!(s.snapshot().selection.len(), 1);
    }

    #[test]
    fn toggle_and_remove() {
        let mut s = ready();
        s.dispatch(Action::Toggle(s!("B")));
        assert!(s.snapshot().selection.contains("B"));
        s.dispatch(Action::Toggle(s!("B")));
        assert!(s.snapshot().selection.is_empty());
        s.dispatch(Action::Remove(s!("B")));
        assert!(s.snapshot().selection.is_empty());
    }

    #[test]
    fn matches_follow_selection() {
        let mut s = ready();
        s.dispatch(Action::Add(s!("A")));
        assert!(s.snapshot().matches().is_empty());
        s.dispatch(Action::Add(s!("B")));
        assert_eq!(s.snapshot().matches().len(), 1);
        s.dispatch(Action::Clear);
        assert!(s.snapshot().matches().is_empty());
    }

    #[test]
    fn stale_batches_are_ignored() {
        let mut s = Session::new(CatalogOptions { pairs: PairMode::Directed, keys: MatchKeys::RawIds, ..Default::default() });
        s.dispatch(Action::ValidationStarted);
        assert_eq!(s.snapshot().batch(), Some(0));

        s.dispatch(Action::ValidationFinished { batch: 7, results: Vec::new() });
        assert!(s.snapshot().is_loading());

        s.dispatch(Action::ValidationFailed { batch: 0, message: s!("channel closed") });
        assert_eq!(s.snapshot().phase, LoadPhase::Error(s!("channel closed")));

        s.dispatch(Action::ValidationStarted);
        assert_eq!(s.snapshot().batch(), Some(1));
    }

    #[test]
    fn load_failure_empties_everything() {
        let mut s = ready();
        s.dispatch(Action::Add(s!("A")));
        s.dispatch(Action::LoadFailed(s!("boom")));
        let snap = s.snapshot();
        assert_eq!(snap.data, DataPhase::Failed);
        assert!(snap.catalog.is_empty());
        assert!(snap.selection.is_empty());
    }
}
