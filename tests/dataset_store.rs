// tests/dataset_store.rs
//
// Dataset file round trip and loader behavior per catalog source.
mod common;

use std::fs;

use amacombos::combos::{Combination, CombinationSet};
use amacombos::config::options::{CatalogOptions, CatalogSource, MatchKeys};
use amacombos::loader;
use amacombos::pair::GlazePair;
use amacombos::store::{self, DatasetLocation};

use common::{FakeFetch, LAYERING, layering_page, offline_net};

const DATASET: &str = r#"{
    "pc-30-temmoku/pc-20-blue-rutile": [ { "url": "u1", "imageUrl": "i1" } ],
    "a/b": [ { "url": "u2", "imageUrl": "i2" } ]
}"#;

fn options(source: CatalogSource, dataset: &str) -> CatalogOptions {
    CatalogOptions { source, dataset: dataset.to_string(), ..CatalogOptions::default() }
}

#[test]
fn save_then_load_keeps_order_and_entries() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("combos.json");

    let mut set = CombinationSet::from_json(DATASET).unwrap();
    set.push(GlazePair::new("b", "a"), Combination::new("u3", "i3"));

    let written = store::save_dataset(&path, &set).unwrap();
    assert_eq!(written, path);

    let back = store::read_dataset(&path).unwrap();
    assert_eq!(back, set);
    let keys: Vec<String> = back.iter().map(|(p, _)| p.key()).collect();
    assert_eq!(keys, vec!["pc-30-temmoku/pc-20-blue-rutile", "a/b"]);
    assert_eq!(back.get(&GlazePair::new("a", "b")).unwrap().len(), 2);
}

#[test]
fn missing_file_reads_empty_but_garbage_does_not() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("none.json");
    assert!(store::read_dataset_or_empty(&missing).unwrap().is_empty());

    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{ not json").unwrap();
    assert!(store::read_dataset_or_empty(&bad).is_err());
}

#[test]
fn dataset_source_derives_sorted_labels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("combos.json");
    fs::write(&path, DATASET).unwrap();

    let loaded = loader::load_strict(
        &options(CatalogSource::Dataset, path.to_str().unwrap()),
        &offline_net(),
        &FakeFetch::new(),
    ).unwrap();

    let labels: Vec<&str> = loaded.catalog.entries().iter().map(|e| e.label.as_str()).collect();
    assert_eq!(labels, vec!["A", "B", "PC-20 Blue Rutile", "PC-30 Temmoku"]);
    assert_eq!(loaded.combos.len(), 2);
}

#[test]
fn dataset_over_http() {
    let url = "https://data.test/glaze_combinations.json";
    let fetch = FakeFetch::new().page(url, DATASET);
    assert_eq!(DatasetLocation::parse(url), DatasetLocation::Url(url.to_string()));

    let loaded = loader::load_strict(&options(CatalogSource::Dataset, url), &offline_net(), &fetch).unwrap();
    assert_eq!(loaded.combos.entry_count(), 2);
    assert_eq!(fetch.requested(), vec![url.to_string()]);
}

#[test]
fn broken_dataset_degrades_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("combos.json");
    fs::write(&path, r#"{ "no-slash": [] }"#).unwrap();

    let opts = options(CatalogSource::Dataset, path.to_str().unwrap());
    assert!(loader::load_strict(&opts, &offline_net(), &FakeFetch::new()).is_err());

    let loaded = loader::load(&opts, &offline_net(), &FakeFetch::new());
    assert!(loaded.catalog.is_empty());
    assert!(loaded.combos.is_empty());
}

#[test]
fn builtin_source_survives_missing_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("none.json");

    let loaded = loader::load_strict(
        &options(CatalogSource::Builtin, missing.to_str().unwrap()),
        &offline_net(),
        &FakeFetch::new(),
    ).unwrap();
    assert!(!loaded.catalog.is_empty());
    assert!(loaded.combos.is_empty());
}

#[test]
fn scrape_source_uses_page_names() {
    let fetch = FakeFetch::new().page(LAYERING, layering_page(&["Blue Midnight", "PC-24 Sapphire Float", "Blue Midnight"]));
    let mut opts = CatalogOptions::scraping();
    opts.dataset = "unused.json".into();
    assert_eq!(opts.keys, MatchKeys::RawIds);

    let loaded = loader::load_strict(&opts, &offline_net(), &fetch).unwrap();
    let ids: Vec<&str> = loaded.catalog.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["Blue Midnight", "PC-24 Sapphire Float"]);
    assert!(loaded.combos.is_empty());
}
