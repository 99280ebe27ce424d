// src/cli.rs
//! Terminal front end: the same catalog, matching and validation the GUI
//! does, plus the dataset builder.

use std::{path::PathBuf, sync::Arc};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};

use crate::{
    catalog::Catalog,
    config::options::{AppOptions, CatalogSource, settings_path},
    core::net::{Fetch, HttpFetch},
    loader,
    matcher,
    pair::DirectedPair,
    progress::Progress,
    scrape::{self, CancelToken},
    selection::Selection,
    store,
};

#[derive(Parser, Debug)]
#[command(name = "cli", version, about = "Browse layered glaze combinations from a terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Where the glaze list comes from
    #[arg(long, global = true)]
    pub source: Option<CatalogSource>,

    /// Combinations dataset: file path or http(s) URL
    #[arg(long, global = true)]
    pub dataset: Option<String>,

    /// Fetch vendor pages directly instead of through the relay
    #[arg(long, global = true)]
    pub no_proxy: bool,

    /// Concurrent requests
    #[arg(long, global = true)]
    pub workers: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the glaze catalog
    Glazes,

    /// Print glazes whose name contains QUERY (case-insensitive)
    Suggest { query: String },

    /// Print dataset combinations where every listed glaze pairs up
    Match {
        #[arg(required = true)]
        glazes: Vec<String>,
    },

    /// Check every top-over-bottom order of the glazes on the vendor site
    Layer {
        #[arg(required = true)]
        glazes: Vec<String>,
    },

    /// Crawl listing pages and merge them into the dataset file
    Build {
        /// How many glazes to crawl
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output file (default: the --dataset file, if it is one)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

impl Cli {
    /// Saved settings with command-line overrides on top.
    pub fn options(&self) -> AppOptions {
        let mut opts = AppOptions::load(&settings_path());
        if let Some(source) = self.source {
            opts.catalog.source = source;
        }
        if let Some(dataset) = &self.dataset {
            opts.catalog.dataset = dataset.clone();
        }
        if self.no_proxy {
            opts.net.proxy = None;
        }
        if let Some(n) = self.workers {
            opts.net.workers = n;
        }
        if let Command::Build { limit, out } = &self.command {
            if let Some(n) = limit {
                opts.build.glaze_limit = *n;
            }
            if out.is_some() {
                opts.build.out = out.clone();
            }
        }
        opts
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let opts = cli.options();
    opts.validate()?;

    let fetch: Arc<dyn Fetch> = Arc::new(HttpFetch::new(&opts.net)?);
    logf!("CLI: {:?}", cli.command);

    match &cli.command {
        Command::Glazes => {
            let catalog = load_catalog(&opts, fetch.as_ref())?;
            for entry in catalog.entries() {
                println!("{}", entry.label);
            }
        }
        Command::Suggest { query } => {
            let catalog = load_catalog(&opts, fetch.as_ref())?;
            for entry in catalog.suggest(query) {
                println!("{}", entry.label);
            }
        }
        Command::Match { glazes } => run_match(&opts, fetch.as_ref(), glazes)?,
        Command::Layer { glazes } => run_layer(&opts, fetch, glazes)?,
        Command::Build { .. } => run_build(&opts, fetch)?,
    }
    Ok(())
}

fn load_catalog(opts: &AppOptions, fetch: &dyn Fetch) -> Result<Catalog> {
    Ok(loader::load_strict(&opts.catalog, &opts.net, fetch)?.catalog)
}

fn run_match(opts: &AppOptions, fetch: &dyn Fetch, glazes: &[String]) -> Result<()> {
    let loaded = loader::load_strict(&opts.catalog, &opts.net, fetch)?;
    let keys = opts.catalog.keys;

    let mut selection = Selection::new();
    for input in glazes {
        let entry = loaded
            .catalog
            .resolve(input)
            .ok_or_else(|| eyre!("unknown or ambiguous glaze {input:?}"))?;
        selection.insert(entry.key(keys));
    }

    let hits = matcher::filter(&loaded.combos, &selection, keys);
    if hits.is_empty() {
        println!("No combinations found");
        return Ok(());
    }
    for m in hits {
        println!("{}", m.title());
        for c in m.entries {
            println!("  {}  [{}]", c.url, c.image_url);
        }
    }
    Ok(())
}

fn run_layer(opts: &AppOptions, fetch: Arc<dyn Fetch>, glazes: &[String]) -> Result<()> {
    // The catalog is only used to tidy names; unknown ones go through as typed.
    let catalog = loader::load(&opts.catalog, &opts.net, fetch.as_ref()).catalog;
    let names: Selection = glazes
        .iter()
        .map(|g| catalog.resolve(g).map_or_else(|| s!(g.trim()), |e| e.label.clone()))
        .collect();
    if names.len() < 2 {
        return Err(eyre!("need at least two different glazes"));
    }

    let pairs: Vec<DirectedPair> = matcher::directed_candidates(&names);
    let mut prog = StderrProgress::default();
    let report = scrape::validate_pairs(fetch, &opts.net, pairs, &CancelToken::new(), Some(&mut prog));

    if report.valid.is_empty() {
        println!("No combinations found");
    }
    for v in &report.valid {
        println!("{}", v.text);
        println!("  {}  [{}]", v.url, v.image_url);
    }
    Ok(())
}

fn run_build(opts: &AppOptions, fetch: Arc<dyn Fetch>) -> Result<()> {
    let out = opts.build_out_path();
    let existing = store::read_dataset_or_empty(&out)?;

    let mut prog = StderrProgress::default();
    let (set, report) = scrape::build_dataset(fetch, &opts.net, &opts.build, existing, &CancelToken::new(), Some(&mut prog))?;
    let path = store::save_dataset(&out, &set)?;

    eprintln!(
        "Saved {} pairs ({} new, {} duplicates removed, {} pages, {} glazes failed) to {}",
        report.pairs_after,
        report.pairs_after.saturating_sub(report.pairs_before),
        report.duplicates_removed,
        report.pages,
        report.failed,
        path.display()
    );
    Ok(())
}

/// Progress lines on stderr so stdout stays pipeable.
#[derive(Default)]
struct StderrProgress {
    done: usize,
    failed: usize,
    total: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_done(&mut self, label: &str) {
        self.done += 1;
        eprintln!("[{}/{}] ok   {}", self.done + self.failed, self.total, label);
    }
    fn item_failed(&mut self, label: &str) {
        self.failed += 1;
        eprintln!("[{}/{}] --   {}", self.done + self.failed, self.total, label);
    }
}
