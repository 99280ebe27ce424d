// src/specs/listing.rs
//! Spec for the paginated listing pages (`?top=<slug>&page=<n>`).
//!
//! Each result is a card:
//! ```html
//! <div class="card-combination title-link-parent">
//!   <div class="card-combination__image"><img data-src="…/photo.jpg"></div>
//!   <a class="title-link text-reset" href="/resources/layering/a-over-b">A over B</a>
//! </div>
//! ```
//! Pagination links are `.page-link` anchors carrying `page=<n>`.

use scraper::{ElementRef, Html};
use url::Url;

use super::selector;
use crate::combos::Combination;
use crate::core::sanitize::last_path_segment;
use crate::error::Result;
use crate::glaze::split_over_slug;
use crate::pair::GlazePair;

pub const CARD_SELECTOR: &str = ".card-combination.title-link-parent";
pub const CARD_IMAGE_SELECTOR: &str = ".card-combination__image img";
pub const CARD_LINK_SELECTOR: &str = ".title-link.text-reset";
pub const PAGE_LINK_SELECTOR: &str = ".page-link";

/// Cards with both an image and a detail link. Relative URLs are resolved
/// against `base`.
pub fn parse_cards(doc: &str, base: &Url) -> Result<Vec<Combination>> {
    let html = Html::parse_document(doc);
    let cards = selector(CARD_SELECTOR)?;
    let image = selector(CARD_IMAGE_SELECTOR)?;
    let link = selector(CARD_LINK_SELECTOR)?;

    let mut out = Vec::new();
    for card in html.select(&cards) {
        let Some(image_url) = card.select(&image).next().and_then(image_source) else { continue };
        let Some(href) = card.select(&link).next().and_then(|a| a.value().attr("href")) else { continue };

        let url = resolve(base, href);
        let image_url = resolve(base, image_url);
        out.push(Combination { url, image_url });
    }
    Ok(out)
}

/// True if any pagination link points at `page + 1`.
pub fn has_next_page(doc: &str, page: u32) -> Result<bool> {
    let html = Html::parse_document(doc);
    let links = selector(PAGE_LINK_SELECTOR)?;
    let needle = format!("page={}", page + 1);

    Ok(html
        .select(&links)
        .filter_map(|a| a.value().attr("href"))
        .any(|href| href_has_param(href, &needle)))
}

/// Dataset key of a card's detail URL: the `a-over-b` slug, members sorted.
pub fn pair_for_url(url: &str) -> Option<GlazePair> {
    let slug = last_path_segment(url)?;
    let (top, bottom) = split_over_slug(slug)?;
    Some(GlazePair::sorted(top, bottom))
}

/// Lazy-loaded images keep the real source in `data-src`.
fn image_source<'a>(img: ElementRef<'a>) -> Option<&'a str> {
    let el = img.value();
    el.attr("data-src")
        .or_else(|| el.attr("src"))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn resolve(base: &Url, href: &str) -> String {
    match base.join(href.trim()) {
        Ok(u) => u.into(),
        Err(_) => s!(href.trim()),
    }
}

// `page=2` must not match `page=21`
fn href_has_param(href: &str, needle: &str) -> bool {
    href.match_indices(needle).any(|(i, m)| {
        let before_ok = i == 0 || matches!(href.as_bytes()[i - 1], b'?' | b'&' | b';');
        let after = href.as_bytes().get(i + m.len());
        before_ok && !matches!(after, Some(c) if c.is_ascii_digit())
    })
}
