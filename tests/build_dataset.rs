// tests/build_dataset.rs
//
// Listing crawl + merge into an existing dataset.
mod common;

use std::sync::Arc;

use amacombos::combos::{Combination, CombinationSet};
use amacombos::config::options::{BuildOptions, ListingPosition};
use amacombos::pair::GlazePair;
use amacombos::scrape::{CancelToken, build_dataset};
use amacombos::Error;

use common::{FakeFetch, LAYERING, layering_page, offline_net};

fn card(slug: &str, image: &str) -> String {
    format!(
        r#"<div class="card-combination title-link-parent">
             <div class="card-combination__image"><img class="lazyload" data-src="{image}"></div>
             <a class="title-link text-reset" href="/resources/layering/{slug}">{slug}</a>
           </div>"#
    )
}

fn listing(cards: &[String], next: Option<u32>) -> String {
    let pager = next
        .map(|n| format!(r#"<a class="page-link" href="?top=x&amp;page={n}">{n}</a>"#))
        .unwrap_or_default();
    format!("<div>{}</div><nav>{pager}</nav>", cards.concat())
}

fn listing_url(pos: ListingPosition, slug: &str, page: u32) -> String {
    offline_net().listing_url(pos, slug, page).unwrap()
}

fn site() -> FakeFetch {
    use ListingPosition::*;
    FakeFetch::new()
        .page(LAYERING, layering_page(&["PC-30 Temmoku", "Blue Midnight"]))
        .page(
            listing_url(Top, "pc-30-temmoku", 1),
            listing(&[card("pc-30-temmoku-over-blue-midnight", "/m/1.jpg")], Some(2)),
        )
        .page(
            listing_url(Top, "pc-30-temmoku", 2),
            listing(&[card("pc-30-temmoku-over-pc-20-blue-rutile", "/m/2.jpg")], None),
        )
        .page(
            listing_url(Bottom, "pc-30-temmoku", 1),
            listing(&[card("blue-midnight-over-pc-30-temmoku", "/m/3.jpg"), card("a-over-b", "/m/dup.jpg")], None),
        )
}

fn existing() -> CombinationSet {
    [(
        GlazePair::new("a", "b"),
        vec![Combination::new("https://amaco.com/resources/layering/a-over-b", "https://amaco.com/m/dup.jpg")],
    )]
    .into_iter()
    .collect()
}

#[test]
fn crawls_first_glaze_and_merges() {
    let fetch = Arc::new(site());
    let opts = BuildOptions { glaze_limit: 1, ..BuildOptions::default() };

    let (set, report) = build_dataset(fetch.clone(), &offline_net(), &opts, existing(), &CancelToken::new(), None).unwrap();

    assert_eq!(report.glazes, 1);
    assert_eq!(report.pages, 3);
    assert_eq!(report.failed, 0);
    assert_eq!(report.pairs_before, 1);
    assert_eq!(report.duplicates_removed, 1);

    // existing first, then crawl order; both directions of a pair share a key
    let keys: Vec<String> = set.iter().map(|(p, _)| p.key()).collect();
    assert_eq!(keys, vec!["a/b", "blue-midnight/pc-30-temmoku", "pc-20-blue-rutile/pc-30-temmoku"]);
    assert_eq!(report.pairs_after, 3);

    let bm = set.get(&GlazePair::new("pc-30-temmoku", "blue-midnight")).unwrap();
    assert_eq!(bm.len(), 2);
    assert_eq!(bm[0].image_url, "https://amaco.com/m/1.jpg");

    // "Blue Midnight" was past the limit
    assert!(fetch.requested().iter().all(|u| !u.contains("blue-midnight&")));
}

#[test]
fn page_cap_stops_pagination() {
    let fetch = Arc::new(site());
    let opts = BuildOptions { glaze_limit: 1, max_pages: 1, ..BuildOptions::default() };

    let (set, report) = build_dataset(fetch, &offline_net(), &opts, CombinationSet::new(), &CancelToken::new(), None).unwrap();
    assert_eq!(report.pages, 2);
    assert!(set.get(&GlazePair::new("pc-30-temmoku", "pc-20-blue-rutile")).is_none());
}

#[test]
fn failing_glaze_is_skipped() {
    // second glaze has no listing pages at all
    let fetch = Arc::new(site());
    let opts = BuildOptions { glaze_limit: 2, ..BuildOptions::default() };

    let (set, report) = build_dataset(fetch, &offline_net(), &opts, CombinationSet::new(), &CancelToken::new(), None).unwrap();
    assert_eq!(report.glazes, 2);
    assert_eq!(report.failed, 1);
    assert_eq!(set.len(), 3);
}

#[test]
fn no_glaze_list_is_an_error() {
    let fetch = Arc::new(FakeFetch::new());
    let res = build_dataset(fetch, &offline_net(), &BuildOptions::default(), CombinationSet::new(), &CancelToken::new(), None);
    assert!(matches!(res, Err(Error::Status { status: 404, .. })));
}

#[test]
fn cancelled_build_keeps_nothing() {
    let cancel = CancelToken::new();
    cancel.cancel();
    let res = build_dataset(Arc::new(site()), &offline_net(), &BuildOptions::default(), existing(), &cancel, None);
    assert!(matches!(res, Err(Error::Cancelled)));
}
