// src/loader.rs
//! Startup loading: the catalog and (when there is one) the dataset,
//! according to `CatalogOptions::source`.

use crate::catalog::Catalog;
use crate::combos::CombinationSet;
use crate::config::options::{CatalogOptions, CatalogSource, NetOptions};
use crate::core::net::Fetch;
use crate::error::Result;
use crate::scrape::fetch_glaze_names;
use crate::store::{self, DatasetLocation};

#[derive(Clone, Debug, Default)]
pub struct Loaded {
    pub catalog: Catalog,
    pub combos: CombinationSet,
}

/// Fail on the first error.
pub fn load_strict(catalog: &CatalogOptions, net: &NetOptions, fetch: &dyn Fetch) -> Result<Loaded> {
    let location = DatasetLocation::parse(&catalog.dataset);
    match catalog.source {
        CatalogSource::Dataset => {
            let combos = store::load_dataset(&location, fetch)?;
            Ok(Loaded { catalog: Catalog::from_combinations(&combos, catalog.keys), combos })
        }
        CatalogSource::Builtin => {
            // the built-in list stands on its own; combos are a bonus
            let combos = store::load_dataset(&location, fetch).unwrap_or_else(|e| {
                logw!("Loader: no dataset at {}: {}", location, e);
                CombinationSet::new()
            });
            Ok(Loaded { catalog: Catalog::builtin(), combos })
        }
        CatalogSource::Scrape => {
            let names = fetch_glaze_names(fetch, net)?;
            Ok(Loaded { catalog: Catalog::from_names(names), combos: CombinationSet::new() })
        }
    }
}

/// Like `load_strict`, but a failure is logged and yields an empty catalog
/// and dataset so the UI still comes up.
pub fn load(catalog: &CatalogOptions, net: &NetOptions, fetch: &dyn Fetch) -> Loaded {
    match load_strict(catalog, net, fetch) {
        Ok(loaded) => {
            logf!("Loader: {} glazes, {} pairs", loaded.catalog.len(), loaded.combos.len());
            loaded
        }
        Err(e) => {
            loge!("Loader: {}", e);
            Loaded::default()
        }
    }
}
