// src/store.rs
//! Reading and writing the combinations dataset.
//!
//! The dataset location is either a local path or an http(s) URL; the
//! latter is fetched directly (no relay) since it is our own file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::combos::CombinationSet;
use crate::core::net::Fetch;
use crate::error::Result;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetLocation {
    File(PathBuf),
    Url(String),
}

impl DatasetLocation {
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        let lc = location.to_ascii_lowercase();
        if lc.starts_with("http://") || lc.starts_with("https://") {
            Self::Url(s!(location))
        } else {
            Self::File(PathBuf::from(location))
        }
    }
}

impl std::fmt::Display for DatasetLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(p) => write!(f, "{}", p.display()),
            Self::Url(u) => f.write_str(u),
        }
    }
}

pub fn load_dataset(location: &DatasetLocation, fetch: &dyn Fetch) -> Result<CombinationSet> {
    let set = match location {
        DatasetLocation::File(path) => read_dataset(path)?,
        DatasetLocation::Url(url) => CombinationSet::from_json(&fetch.get_text(url)?)?,
    };
    logf!("Dataset: {} pairs, {} combinations from {}", set.len(), set.entry_count(), location);
    Ok(set)
}

pub fn read_dataset(path: &Path) -> Result<CombinationSet> {
    let text = fs::read_to_string(path)?;
    CombinationSet::from_json(&text)
}

/// Missing file reads as empty; a file that exists but doesn't parse is
/// still an error, so a build never silently clobbers it.
pub fn read_dataset_or_empty(path: &Path) -> Result<CombinationSet> {
    if !path.exists() {
        logd!("Dataset: {} not found, starting empty", path.display());
        return Ok(CombinationSet::new());
    }
    read_dataset(path)
}

/// Write pretty JSON, creating parent directories. Returns the path written.
pub fn save_dataset(path: &Path, set: &CombinationSet) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, set.to_json_pretty()?)?;
    logf!("Dataset: saved {} pairs to {}", set.len(), path.display());
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_kinds() {
        assert_eq!(
            DatasetLocation::parse("https://example.test/combos.json"),
            DatasetLocation::Url(s!("https://example.test/combos.json"))
        );
        assert_eq!(
            DatasetLocation::parse(" HTTP://x.test/a.json "),
            DatasetLocation::Url(s!("HTTP://x.test/a.json"))
        );
        assert_eq!(
            DatasetLocation::parse(".store/glaze_combinations.json"),
            DatasetLocation::File(PathBuf::from(".store/glaze_combinations.json"))
        );
    }
}
