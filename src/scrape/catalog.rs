// src/scrape/catalog.rs
use crate::config::options::NetOptions;
use crate::core::net::Fetch;
use crate::error::Result;
use crate::specs::layering;

/// Glaze names from the layering page's select options, page order.
pub fn fetch_glaze_names(fetch: &dyn Fetch, net: &NetOptions) -> Result<Vec<String>> {
    logf!("Catalog: fetching {}", net.layering_url);
    let doc = fetch.get_text(&net.proxied(&net.layering_url))?;
    let names = layering::parse_glaze_options(&doc)?;
    logf!("Catalog: {} glazes", names.len());
    Ok(names)
}
