//! `pagewise` - page and sort a JSON array of records from the command line.
//!
//! ```text
//! $ pagewise --input posts.json --query 'page[offset]=2&sort[criteria]=id&sort[reverse]=true'
//! {"results":[...],"meta":{"size":25,"offset":2,...}}
//! ```

use std::io::Read;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use pagewise::{EnvReader, PageConfig, PageEngine, PageParams, RealEnv};
use serde_json::Value as Json;

#[derive(Debug, Parser)]
#[command(
    name = "pagewise",
    version,
    about = "Page and sort a JSON array of records"
)]
struct Cli {
    /// JSON file holding an array of records (stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// URL query string, e.g. 'page[offset]=1&page[size]=10&sort[criteria]=id'
    #[arg(short, long)]
    query: Option<String>,

    /// 1-based page number
    #[arg(long, allow_negative_numbers = true)]
    offset: Option<i64>,

    /// Records per page
    #[arg(long, allow_negative_numbers = true)]
    size: Option<i64>,

    /// Field to sort by
    #[arg(long)]
    sort: Option<String>,

    /// Sort largest first
    #[arg(long)]
    desc: bool,

    /// Page size when none is requested
    #[arg(long)]
    default_page_size: Option<NonZeroUsize>,

    /// Upper bound on the page size
    #[arg(long)]
    max_page_size: Option<NonZeroUsize>,

    /// YAML page configuration (replaces PAGEWISE_* environment settings)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pretty-print the output
    #[arg(long)]
    pretty: bool,
}

impl Cli {
    /// Query string parameters with explicit flags layered on top.
    fn params(&self) -> Result<PageParams> {
        let base = match &self.query {
            Some(query) => PageParams::from_query(query).context("parsing --query")?,
            None => PageParams::default(),
        };

        let flags = PageParams {
            sort_field: self.sort.clone(),
            sort_descending: self.desc,
            size: self.size,
            offset: self.offset,
        };
        Ok(base.merge(flags))
    }

    /// Flags, then the YAML file, then the environment, then defaults.
    fn page_config(&self, env: &impl EnvReader) -> Result<PageConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let source = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                PageConfig::from_yaml(&source)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => PageConfig::from_env_reader(env).context("reading PAGEWISE_* environment")?,
        };

        if let Some(size) = self.default_page_size {
            config = config.with_default_page_size(size);
        }
        if let Some(max) = self.max_page_size {
            config = config.with_max_page_size(max);
        }
        Ok(config)
    }
}

fn run(cli: &Cli, input: &str, env: &impl EnvReader) -> Result<String> {
    let records: Vec<Json> =
        serde_json::from_str(input).context("input must be a JSON array of records")?;
    let params = cli.params()?;
    let config = cli.page_config(env)?;
    debug!("params {:?}, config {:?}", params, config);

    let engine = PageEngine::new(records, &params, &config)?;
    info!(
        "returning {} of {} records",
        engine.results().len(),
        engine.total_records()
    );

    let page = engine.into_page();
    let output = if cli.pretty {
        serde_json::to_string_pretty(&page)?
    } else {
        serde_json::to_string(&page)?
    };
    Ok(output)
}

fn read_input(cli: &Cli) -> Result<String> {
    match &cli.input {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("reading stdin")?;
            Ok(buffer)
        }
    }
}

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let cli = Cli::parse();
    let result = read_input(&cli).and_then(|input| run(&cli, &input, &RealEnv));
    match result {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("error: {:#}", e);
            std::process::exit(1);
        }
    }
}
