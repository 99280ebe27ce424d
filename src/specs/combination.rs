// src/specs/combination.rs
//! Spec for a single combination page (`…/layering/<top>-over-<bottom>`).
//!
//! The photo is lazy-loaded: `src` is a placeholder and the real URL sits
//! in `data-src`. A page without that attribute is treated as "no such
//! combination", even when it returned 200. Listing cards also use lazy
//! images, so anything inside a `.card-combination` is not the hero.

use scraper::{ElementRef, Html};
use url::Url;

use super::selector;
use crate::error::Result;

pub const HERO_IMAGE_SELECTOR: &str = "img.lazyload, .combination-image img";
pub const LAZY_ATTR: &str = "data-src";
pub const CARD_CLASS: &str = "card-combination";

pub fn parse_hero_image(doc: &str, page_url: &str) -> Result<Option<String>> {
    let html = Html::parse_document(doc);
    let images = selector(HERO_IMAGE_SELECTOR)?;

    let found = html
        .select(&images)
        .filter(|img| !inside_card(*img))
        .filter_map(|img| img.value().attr(LAZY_ATTR))
        .map(str::trim)
        .find(|src| !src.is_empty());

    let Some(src) = found else { return Ok(None) };
    let absolute = Url::parse(page_url)
        .and_then(|base| base.join(src))
        .map(String::from)
        .unwrap_or_else(|_| s!(src));
    Ok(Some(absolute))
}

fn inside_card(img: ElementRef<'_>) -> bool {
    img.ancestors()
        .filter_map(|n| n.value().as_element())
        .any(|el| el.classes().any(|c| c == CARD_CLASS))
}
