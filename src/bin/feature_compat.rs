//! Command-line front end for the feature compatibility catalog.
//!
//! Usage:
//!   feature-compat search grid
//!   feature-compat --json search css
//!   feature-compat show 12
//!   feature-compat stash "container queries" --scroll && feature-compat resume

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use feature_compat::logging::init_logging;
use feature_compat::{
    DocSite, FeatureDetail, FeatureId, FeatureIndex, FeatureSchema, HandoffMessage, HandoffStore,
    LookupError, Notice, ResultView, Session, Severity, documentation_url, resolve_catalog_path,
};
use serde::Serialize;
use serde_json::Value;
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "feature-compat")]
#[command(about = "Search web-platform features and their cross-browser support")]
struct Cli {
    /// Catalog file; defaults to FEATURE_COMPAT_CATALOG or data/feature_compat.json.
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Directory holding the hand-off slot; defaults to FEATURE_COMPAT_STATE_DIR.
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,
    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,
    /// Log lookup decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search by category name or feature name.
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Show full details for one feature id.
    Show { id: u64 },
    /// Print the documentation search URL for a feature name.
    Docs {
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
        #[arg(long, default_value = "mdn", value_parser = ["mdn", "webdev", "caniuse"])]
        site: String,
    },
    /// Store a query for the next `resume`.
    Stash {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Ask the consumer to jump straight to the results.
        #[arg(long)]
        scroll: bool,
    },
    /// Consume the stashed query and run it once.
    Resume,
    /// List categories with their record counts.
    Categories,
    /// Validate the catalog, optionally against an extra schema file.
    Validate {
        #[arg(long)]
        schema: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if let Err(err) = run(cli) {
        match err.downcast_ref::<LookupError>() {
            Some(lookup) => print_notice(&Notice::from(lookup)),
            None => eprintln!("{err:#}"),
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let store = match &cli.state_dir {
        Some(dir) => HandoffStore::at(dir),
        None => HandoffStore::from_env(),
    };

    match &cli.command {
        Command::Search { query } => {
            let session = open_session(&cli, None)?;
            let result = session.search(&query.join(" "))?;
            emit_result(&cli, &ResultView::from_result(&result))
        }
        Command::Show { id } => {
            let session = open_session(&cli, None)?;
            let detail = FeatureDetail::new(session.details(FeatureId(*id))?);
            if cli.json {
                print_json(&detail)
            } else {
                print!("{}", detail.render_text());
                Ok(())
            }
        }
        Command::Docs { name, site } => {
            let site = DocSite::try_from(site.as_str())?;
            let url = documentation_url(&name.join(" "), site);
            if cli.json {
                print_json(&serde_json::json!({ "site": site, "url": url }))
            } else {
                println!("{url}");
                Ok(())
            }
        }
        Command::Stash { query, scroll } => {
            let message = HandoffMessage::new(query.join(" "), *scroll);
            store.stash(&message)?;
            println!("stashed \"{}\" in {}", message.query, store.dir().display());
            Ok(())
        }
        Command::Resume => {
            if !store.is_pending() {
                print_notice(&no_pending_notice());
                return Ok(());
            }
            // The slot survives a failed load; it is only cleared once the
            // catalog is ready to run the query.
            let mut session = open_session(&cli, None)?;
            let Some(message) = store.take()? else {
                print_notice(&no_pending_notice());
                return Ok(());
            };
            session.set_pending(message);
            let Some(pending) = session.take_pending() else {
                return Ok(());
            };
            let view = ResultView::from_result(&pending.outcome?)
                .with_scroll(pending.message.scroll_to_results);
            emit_result(&cli, &view)
        }
        Command::Categories => {
            let session = open_session(&cli, None)?;
            let counts = session.index().category_counts();
            if cli.json {
                let map: serde_json::Map<String, Value> = counts
                    .iter()
                    .map(|(category, count)| (category.to_string(), Value::from(*count)))
                    .collect();
                print_json(&map)
            } else {
                for (category, count) in counts {
                    println!("{category:<12} {count}");
                }
                Ok(())
            }
        }
        Command::Validate { schema } => {
            let path = resolve_catalog_path(cli.catalog.as_deref())?;
            if let Some(schema_path) = schema {
                validate_with_schema(&path, schema_path)?;
            }
            let index = FeatureIndex::load(&path)?;
            println!("{}: {} features", path.display(), index.len());
            Ok(())
        }
    }
}

fn open_session(cli: &Cli, handoff: Option<HandoffMessage>) -> Result<Session> {
    let path = resolve_catalog_path(cli.catalog.as_deref())?;
    Ok(Session::open(&path, handoff)?)
}

fn no_pending_notice() -> Notice {
    Notice {
        severity: Severity::Info,
        message: "no pending hand-off query".to_string(),
    }
}

fn print_notice(notice: &Notice) {
    eprintln!("{}: {}", notice.severity.as_str(), notice.message);
}

fn validate_with_schema(catalog: &Path, schema_path: &Path) -> Result<()> {
    let schema = FeatureSchema::load(schema_path)?;
    let value: Value = serde_json::from_reader(
        File::open(catalog).with_context(|| format!("opening catalog {}", catalog.display()))?,
    )
    .with_context(|| format!("parsing catalog {}", catalog.display()))?;
    schema.validate(&value)
}

fn emit_result(cli: &Cli, view: &ResultView) -> Result<()> {
    if cli.json {
        print_json(view)
    } else {
        print!("{}", view.render_text());
        Ok(())
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
