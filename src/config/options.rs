// src/config/options.rs
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::{Url, form_urlencoded};

use super::consts::*;
use crate::error::{Error, Result};
use crate::pair::DirectedPair;
use crate::store::DatasetLocation;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub catalog: CatalogOptions,
    pub net: NetOptions,
    pub build: BuildOptions,
}

/// Where the glaze list comes from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    /// Derived from the keys of the combinations dataset.
    #[default]
    Dataset,
    /// The list shipped with the binary.
    Builtin,
    /// Scraped from the vendor's layering page.
    Scrape,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorStyle {
    #[default]
    Autocomplete,
    Checkboxes,
}

/// Undirected pairs are filtered out of the dataset; directed pairs are
/// generated from the selection and checked against the live site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairMode {
    #[default]
    Undirected,
    Directed,
}

/// What the selection stores: display labels or the raw identifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKeys {
    #[default]
    Labels,
    RawIds,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogOptions {
    pub source: CatalogSource,
    pub selector: SelectorStyle,
    pub pairs: PairMode,
    pub keys: MatchKeys,
    /// File path or http(s) URL of the combinations JSON.
    pub dataset: String,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            source: CatalogSource::Dataset,
            selector: SelectorStyle::Autocomplete,
            pairs: PairMode::Undirected,
            keys: MatchKeys::Labels,
            dataset: default_dataset_path().to_string_lossy().into_owned(),
        }
    }
}

impl CatalogOptions {
    /// The live-scraping setup: scraped names, checkboxes, directed pairs.
    pub fn scraping() -> Self {
        Self {
            source: CatalogSource::Scrape,
            selector: SelectorStyle::Checkboxes,
            pairs: PairMode::Directed,
            keys: MatchKeys::RawIds,
            ..Self::default()
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingPosition {
    Top,
    Bottom,
}

impl ListingPosition {
    pub const BOTH: [ListingPosition; 2] = [ListingPosition::Top, ListingPosition::Bottom];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingPosition::Top => "top",
            ListingPosition::Bottom => "bottom",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetOptions {
    pub layering_url: String,
    /// CORS relay prefix; `None` fetches targets directly.
    pub proxy: Option<String>,
    /// Percent-encode the target before appending it to the proxy.
    pub encode_target: bool,
    pub timeout_secs: u64,
    pub workers: usize,
    pub pause_ms: u64,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            layering_url: s!(LAYERING_URL),
            proxy: Some(s!(DEFAULT_PROXY)),
            encode_target: true,
            timeout_secs: REQUEST_TIMEOUT_SECS,
            workers: WORKERS,
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

impl NetOptions {
    /// Wrap `target` in the relay, if one is configured.
    pub fn proxied(&self, target: &str) -> String {
        match &self.proxy {
            None => s!(target),
            Some(base) if self.encode_target => {
                let encoded: String = form_urlencoded::byte_serialize(target.as_bytes()).collect();
                join!(base.as_str(), &encoded)
            }
            Some(base) => join!(base.as_str(), target),
        }
    }

    /// `<layering>/<top-slug>-over-<bottom-slug>`
    pub fn combination_url(&self, pair: &DirectedPair) -> String {
        join!(self.layering_url.trim_end_matches('/'), "/", &pair.slug())
    }

    /// `<layering>?top=<slug>&page=<n>` (or `bottom=`)
    pub fn listing_url(&self, position: ListingPosition, slug: &str, page: u32) -> Result<String> {
        let mut url = Url::parse(&self.layering_url)?;
        url.query_pairs_mut()
            .append_pair(position.as_str(), slug)
            .append_pair("page", &page.to_string());
        Ok(url.into())
    }

    pub fn worker_count(&self) -> usize {
        self.workers.max(1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// How many scraped glazes to crawl listing pages for.
    pub glaze_limit: usize,
    pub max_pages: u32,
    pub out: Option<PathBuf>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            glaze_limit: BUILD_GLAZE_LIMIT,
            max_pages: MAX_LISTING_PAGES,
            out: None,
        }
    }
}

pub fn default_dataset_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(DATASET_FILE)
}

pub fn settings_path() -> PathBuf {
    PathBuf::from(STORE_DIR).join(SETTINGS_FILE)
}

impl AppOptions {
    /// Read settings; anything missing or unreadable falls back to defaults.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(Some(opts)) => opts,
            Ok(None) => Self::default(),
            Err(e) => {
                logw!("Settings: ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)?;
        let opts = serde_json::from_str(&text)?;
        Ok(Some(opts))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Where a build writes: `build.out`, else the dataset file the app
    /// loads, else the default path when the dataset is a URL.
    pub fn build_out_path(&self) -> PathBuf {
        if let Some(out) = &self.build.out {
            return out.clone();
        }
        match DatasetLocation::parse(&self.catalog.dataset) {
            DatasetLocation::File(path) => path,
            DatasetLocation::Url(_) => default_dataset_path(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.net.layering_url)
            .map_err(|e| Error::Config(format!("layering_url: {e}")))?;
        if self.catalog.dataset.trim().is_empty() {
            return Err(Error::Config(s!("dataset location is empty")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxied_encodes_target() {
        let net = NetOptions::default();
        let url = net.proxied("https://amaco.com/resources/layering?top=a b");
        assert!(url.starts_with(DEFAULT_PROXY));
        assert!(url.ends_with("https%3A%2F%2Famaco.com%2Fresources%2Flayering%3Ftop%3Da+b"));
    }

    #[test]
    fn proxied_raw_and_direct() {
        let mut net = NetOptions {
            proxy: Some(s!("https://relay.test/")),
            encode_target: false,
            ..NetOptions::default()
        };
        assert_eq!(net.proxied("https://x.test/a"), "https://relay.test/https://x.test/a");
        net.proxy = None;
        assert_eq!(net.proxied("https://x.test/a"), "https://x.test/a");
    }

    #[test]
    fn combination_url_uses_slugs() {
        let net = NetOptions::default();
        let pair = DirectedPair::new("PC-24 Sapphire Float", "Blue Midnight");
        assert_eq!(
            net.combination_url(&pair),
            "https://amaco.com/resources/layering/pc-24-sapphire-float-over-blue-midnight"
        );
    }

    #[test]
    fn listing_url_has_position_and_page() {
        let net = NetOptions::default();
        let url = net.listing_url(ListingPosition::Bottom, "pc-20-blue-rutile", 3).unwrap();
        assert_eq!(url, "https://amaco.com/resources/layering?bottom=pc-20-blue-rutile&page=3");
    }

    #[test]
    fn build_writes_where_the_dataset_is_read() {
        let mut opts = AppOptions::default();
        assert_eq!(opts.build_out_path(), default_dataset_path());

        opts.catalog.dataset = s!("data/my_combos.json");
        assert_eq!(opts.build_out_path(), PathBuf::from("data/my_combos.json"));

        opts.catalog.dataset = s!("https://data.test/combos.json");
        assert_eq!(opts.build_out_path(), default_dataset_path());

        opts.build.out = Some(PathBuf::from("explicit.json"));
        assert_eq!(opts.build_out_path(), PathBuf::from("explicit.json"));
    }

    #[test]
    fn partial_settings_fill_defaults() {
        let opts: AppOptions = serde_json::from_str(r#"{ "catalog": { "selector": "checkboxes" } }"#).unwrap();
        assert_eq!(opts.catalog.selector, SelectorStyle::Checkboxes);
        assert_eq!(opts.catalog.source, CatalogSource::Dataset);
        assert_eq!(opts.net.workers, WORKERS);
    }
}
