// src/scrape/build.rs
//! Dataset builder: crawl the layering listings for each glaze and fold the
//! cards into a `CombinationSet` keyed by undirected pair.
//!
//! For every glaze the listing is walked twice (glaze on top, glaze on
//! bottom), page by page, until the pagination has no next page or
//! `max_pages` is hit.

use std::sync::Arc;

use url::Url;

use super::catalog::fetch_glaze_names;
use super::pool::{self, CancelToken, PoolConfig};
use crate::combos::CombinationSet;
use crate::config::options::{BuildOptions, ListingPosition, NetOptions};
use crate::core::net::Fetch;
use crate::error::{Error, Result};
use crate::glaze::slugify;
use crate::progress::Progress;
use crate::specs::listing;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub glazes: usize,
    pub failed: usize,
    pub pages: usize,
    pub pairs_before: usize,
    pub pairs_after: usize,
    pub duplicates_removed: usize,
}

/// Every card listed for `name`, as top and as bottom. Also returns the
/// number of pages fetched.
pub fn collect_for_glaze(
    fetch: &dyn Fetch,
    net: &NetOptions,
    name: &str,
    max_pages: u32,
    cancel: &CancelToken,
) -> Result<(CombinationSet, usize)> {
    let slug = slugify(name);
    let mut set = CombinationSet::new();
    let mut pages = 0;

    for position in ListingPosition::BOTH {
        let mut page = 1;
        loop {
            if cancel.is_cancelled() {
                return Err(Error::Cancelled);
            }
            let target = net.listing_url(position, &slug, page)?;
            logd!("Build: {} as {}, page {}", name, position.as_str(), page);
            let doc = fetch.get_text(&net.proxied(&target))?;
            pages += 1;

            let base = Url::parse(&target)?;
            for combo in listing::parse_cards(&doc, &base)? {
                match listing::pair_for_url(&combo.url) {
                    Some(pair) => set.push(pair, combo),
                    None => logd!("Build: card without pair slug: {}", combo.url),
                }
            }

            if page >= max_pages || !listing::has_next_page(&doc, page)? {
                break;
            }
            page += 1;
        }
    }
    Ok((set, pages))
}

/// Scrape the glaze list, crawl the first `opts.glaze_limit` glazes and
/// merge what was found into `existing`. Per-glaze failures are logged
/// and skipped; cancellation aborts the whole build.
pub fn build_dataset(
    fetch: Arc<dyn Fetch>,
    net: &NetOptions,
    opts: &BuildOptions,
    existing: CombinationSet,
    cancel: &CancelToken,
    mut progress: Option<&mut dyn Progress>,
) -> Result<(CombinationSet, BuildReport)> {
    let names: Vec<String> = fetch_glaze_names(fetch.as_ref(), net)?
        .into_iter()
        .take(opts.glaze_limit)
        .collect();

    let mut report = BuildReport { glazes: names.len(), pairs_before: existing.len(), ..Default::default() };
    if let Some(p) = progress.as_deref_mut() {
        p.begin(names.len());
        p.log(&format!("Crawling {} glazes", names.len()));
    }

    let max_pages = opts.max_pages.max(1);
    let worker_net = net.clone();
    let worker_cancel = cancel.clone();
    let rx = pool::spawn(names.clone(), PoolConfig::from_net(net), cancel, move |name| {
        collect_for_glaze(fetch.as_ref(), &worker_net, name, max_pages, &worker_cancel)
    });

    let mut per_glaze: Vec<(usize, CombinationSet)> = Vec::with_capacity(names.len());
    for (i, res) in rx {
        match res {
            Ok((set, pages)) => {
                logf!("Build: {}: {} pairs from {} pages", names[i], set.len(), pages);
                report.pages += pages;
                per_glaze.push((i, set));
                if let Some(p) = progress.as_deref_mut() { p.item_done(&names[i]); }
            }
            Err(e) => {
                loge!("Build: {}: {}", names[i], e);
                report.failed += 1;
                if let Some(p) = progress.as_deref_mut() { p.item_failed(&names[i]); }
            }
        }
    }

    if cancel.is_cancelled() {
        if let Some(p) = progress.as_deref_mut() { p.finish(); }
        return Err(Error::Cancelled);
    }

    per_glaze.sort_by_key(|(i, _)| *i);
    let mut merged = existing;
    for (_, set) in per_glaze {
        merged.merge(set);
    }
    report.duplicates_removed = merged.dedup();
    report.pairs_after = merged.len();

    logf!(
        "Build: {} -> {} pairs, {} duplicates removed, {} glazes failed",
        report.pairs_before, report.pairs_after, report.duplicates_removed, report.failed
    );
    if let Some(p) = progress.as_deref_mut() { p.finish(); }
    Ok((merged, report))
}
