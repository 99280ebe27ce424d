// src/scrape/validate.rs
//! Check directed candidates against their live combination pages.
//!
//! A candidate survives only if its page fetches and carries a lazily
//! loaded hero image. Anything else (HTTP error, timeout, no image) drops
//! the candidate quietly; only the counts are reported.

use std::sync::Arc;

use super::pool::{self, CancelToken, PoolConfig};
use crate::combos::ValidatedCombination;
use crate::config::options::NetOptions;
use crate::core::net::Fetch;
use crate::error::{Error, Result};
use crate::pair::DirectedPair;
use crate::progress::Progress;
use crate::specs::combination;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Confirmed pairs, in candidate order.
    pub valid: Vec<ValidatedCombination>,
    pub dropped: usize,
    /// Set when the batch was cancelled; `valid` is then empty.
    pub cancelled: bool,
}

pub fn validate_one(fetch: &dyn Fetch, net: &NetOptions, pair: &DirectedPair) -> Result<ValidatedCombination> {
    let url = net.combination_url(pair);
    let doc = fetch.get_text(&net.proxied(&url))?;
    let image_url = combination::parse_hero_image(&doc, &url)?
        .ok_or_else(|| Error::Parse(format!("no combination image on {url}")))?;
    Ok(ValidatedCombination { text: pair.text(), pair: pair.clone(), url, image_url })
}

pub fn validate_pairs(
    fetch: Arc<dyn Fetch>,
    net: &NetOptions,
    pairs: Vec<DirectedPair>,
    cancel: &CancelToken,
    mut progress: Option<&mut dyn Progress>,
) -> ValidationReport {
    let total = pairs.len();
    if let Some(p) = progress.as_deref_mut() {
        p.begin(total);
        p.log(&format!("Checking {total} combinations"));
    }
    logf!("Validate: {} candidates", total);

    let labels: Vec<String> = pairs.iter().map(DirectedPair::text).collect();
    let worker_net = net.clone();
    let rx = pool::spawn(pairs, PoolConfig::from_net(net), cancel, move |pair| {
        validate_one(fetch.as_ref(), &worker_net, pair)
    });

    let mut found: Vec<(usize, ValidatedCombination)> = Vec::new();
    let mut dropped = 0;
    for (i, res) in rx {
        match res {
            Ok(v) => {
                logd!("Validate: ok {}", labels[i]);
                found.push((i, v));
                if let Some(p) = progress.as_deref_mut() { p.item_done(&labels[i]); }
            }
            Err(_) => {
                dropped += 1;
                if let Some(p) = progress.as_deref_mut() { p.item_failed(&labels[i]); }
            }
        }
    }

    let cancelled = cancel.is_cancelled();
    let valid = if cancelled {
        logf!("Validate: cancelled");
        Vec::new()
    } else {
        found.sort_by_key(|(i, _)| *i);
        found.into_iter().map(|(_, v)| v).collect()
    };
    logf!("Validate: {} valid, {} dropped", valid.len(), dropped);

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("{} found, {} dropped", valid.len(), dropped));
        p.finish();
    }
    ValidationReport { valid, dropped, cancelled }
}
