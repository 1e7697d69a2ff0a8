//! Dapp Ratings CLI
//!
//! Command-line interface for browsing the rated dapp catalog:
//! - List dapps, highest rated first
//! - Show rating counts per dapp
//! - Generate a config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use dapp_ratings::catalog::{star_symbols, summarize_ratings, CatalogQuery, CatalogView};
use dapp_ratings::config::{generate_default_config, Config};
use dapp_ratings::loader::CatalogLoader;
use dapp_ratings::sources::{
    DappSource, HttpDappSource, RatingSource, StaticDappSource, StaticRatingSource,
    SubgraphClient,
};

#[derive(Parser)]
#[command(name = "dapp-ratings")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Browse dapps and their community star ratings")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: standard locations, then environment)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Read dapps from a JSON file instead of the contract gateway
    #[arg(long, global = true)]
    pub dapps_file: Option<PathBuf>,

    /// Read rating events from a JSON file instead of the subgraph
    #[arg(long, global = true)]
    pub ratings_file: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List dapps, highest rated first
    List {
        /// Case-insensitive name search
        #[arg(short, long)]
        search: Option<String>,
        /// Platform tag (default: configured platform)
        #[arg(short, long)]
        platform: Option<String>,
        /// Show every platform
        #[arg(long, conflicts_with = "platform")]
        all_platforms: bool,
    },

    /// Show rating counts and averages per dapp
    Ratings,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    // Logs go to stderr so table and JSON output stay clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dapp_ratings=warn".into()),
        )
        .init();

    match cli.command {
        Commands::List {
            search,
            platform,
            all_platforms,
        } => {
            let loader = build_loader(&cli.dapps_file, &cli.ratings_file, &config)?;

            let dapps = match loader.load().await {
                Ok(dapps) => dapps,
                Err(e) => {
                    eprintln!("{}", e.user_message());
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            };

            let query = CatalogQuery {
                search,
                platform: if all_platforms {
                    None
                } else {
                    Some(platform.unwrap_or_else(|| config.catalog.platform.clone()))
                },
            };
            let view = CatalogView::build(&dapps, &query);

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&view)?),
                _ => print_table(&view),
            }
        }

        Commands::Ratings => {
            let loader = build_loader(&cli.dapps_file, &cli.ratings_file, &config)?;
            let events = loader.load_ratings().await?;

            let mut summaries: Vec<_> = summarize_ratings(&events).into_iter().collect();
            summaries.sort_by(|a, b| {
                b.1.average()
                    .total_cmp(&a.1.average())
                    .then_with(|| a.0.cmp(&b.0))
            });

            match cli.format.as_str() {
                "json" => {
                    let rows: Vec<serde_json::Value> = summaries
                        .iter()
                        .map(|(id, s)| {
                            serde_json::json!({
                                "dapp_id": id,
                                "count": s.count,
                                "average": s.average(),
                            })
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&rows)?);
                }
                _ => {
                    if summaries.is_empty() {
                        println!("No ratings submitted yet.");
                    } else {
                        println!("{:<12} {:>8} {:>8}  {}", "Dapp ID", "Ratings", "Average", "Stars");
                        println!("{}", "-".repeat(42));
                        for (id, summary) in &summaries {
                            println!(
                                "{:<12} {:>8} {:>8.2}  {}",
                                id.as_str(),
                                summary.count,
                                summary.average(),
                                star_symbols(summary.average())
                            );
                        }
                        println!();
                        println!("{} rating events", events.len());
                    }
                }
            }
        }

        Commands::Config { output } => {
            let config = generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

/// File-backed sources take precedence over the configured endpoints
fn build_loader(
    dapps_file: &Option<PathBuf>,
    ratings_file: &Option<PathBuf>,
    config: &Config,
) -> Result<CatalogLoader, Box<dyn std::error::Error>> {
    let timeout = config.sources.request_timeout();

    let dapps: Arc<dyn DappSource> = match dapps_file {
        Some(path) => Arc::new(StaticDappSource::from_json_file(path)?),
        None => Arc::new(HttpDappSource::new(&config.sources.dapps_url, timeout)?),
    };

    let ratings: Arc<dyn RatingSource> = match ratings_file {
        Some(path) => Arc::new(StaticRatingSource::from_json_file(path)?),
        None => Arc::new(
            SubgraphClient::new(&config.sources.subgraph_url, timeout)?
                .max_events(config.sources.max_rating_events),
        ),
    };

    Ok(CatalogLoader::new(dapps, ratings))
}

fn print_table(view: &CatalogView) {
    if view.is_empty() {
        println!("Can't find what you're looking for?");
        println!("Register a new project: {}", view.register_url);
        return;
    }

    println!("{:<28} {:<7} {:>5}  {}", "Name", "Stars", "Avg", "URL");
    println!("{}", "-".repeat(72));

    for entry in &view.dapps {
        println!(
            "{:<28} {:<7} {:>5.2}  {}",
            truncate(&entry.dapp.name, 28),
            star_symbols(entry.dapp.average_rating),
            entry.dapp.average_rating,
            entry.dapp.url
        );
    }

    println!();
    println!("{} of {} dapps shown", view.len(), view.total);
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
