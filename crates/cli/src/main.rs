//! Vitrine CLI — product search from the terminal.
//!
//! Talks to the same `/search` backend as the web widget and prints the
//! resulting cards, or the raw product records with `--json`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use vitrine_core::render::{cards, ProductCard};
use vitrine_core::widget::Grid;
use vitrine_core::{HttpTransport, SearchWidget, UiState, WidgetConfig};

/// Vitrine CLI — search the product catalogue from the terminal.
#[derive(Parser)]
#[command(name = "vt", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    /// Config file (default: ./.vitrine.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Search endpoint, absolute or relative to the configured base URL
    #[arg(long, global = true, env = "VITRINE_ENDPOINT")]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for products
    Search {
        /// Search query (words are joined with spaces)
        #[arg(required_unless_present = "suggestion", conflicts_with = "suggestion")]
        query: Vec<String>,

        /// Run the Nth suggested query instead (1-indexed, see `vt suggestions`)
        #[arg(long, short)]
        suggestion: Option<usize>,
    },
    /// List suggested queries
    Suggestions,
}

fn load_config(cli: &Cli) -> Result<WidgetConfig, String> {
    let mut config = match &cli.config {
        Some(path) => WidgetConfig::load_file(path).map_err(|e| e.to_string())?,
        None => {
            let cwd = std::env::current_dir()
                .map_err(|e| format!("Could not determine current directory: {e}"))?;
            WidgetConfig::load_from_dir(&cwd)
        }
    };
    if let Some(endpoint) = &cli.endpoint {
        config.endpoint = endpoint.clone();
    }
    Ok(config)
}

fn print_card(card: &ProductCard) {
    println!("{:<48} {:>14}  {}", card.name, card.price, card.match_label);
    println!("  [{}]", card.category);
    if let Some(desc) = &card.description {
        println!("  {desc}");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("vitrine=warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    match &cli.command {
        Commands::Suggestions => {
            if cli.json {
                println!("{}", serde_json::json!(config.suggestions));
            } else {
                for (i, s) in config.suggestions.iter().enumerate() {
                    println!("{:>3}  {s}", i + 1);
                }
            }
            ExitCode::SUCCESS
        }
        Commands::Search { query, suggestion } => {
            let transport = match HttpTransport::from_config(&config, &config.base_url) {
                Ok(t) => t,
                Err(e) => {
                    eprintln!("{e}");
                    return ExitCode::from(2);
                }
            };
            let mut widget = SearchWidget::new(transport);

            let ui = match suggestion {
                Some(n) => {
                    let Some(text) = n.checked_sub(1).and_then(|i| config.suggestions.get(i)) else {
                        eprintln!("No suggestion #{n} ({} configured)", config.suggestions.len());
                        return ExitCode::from(2);
                    };
                    widget.fill_search(text.clone()).await
                }
                None => {
                    widget.set_input(query.join(" "));
                    widget.perform_search().await
                }
            };

            match (ui, widget.state().grid()) {
                (None, _) => {
                    eprintln!("Empty query");
                    ExitCode::from(2)
                }
                (Some(UiState::ResultsShown), Grid::Cards(products)) => {
                    if cli.json {
                        match serde_json::to_string_pretty(products) {
                            Ok(s) => println!("{s}"),
                            Err(e) => {
                                eprintln!("Could not encode results: {e}");
                                return ExitCode::from(2);
                            }
                        }
                    } else {
                        for card in cards(widget.state(), &config.placeholder_image) {
                            print_card(&card);
                        }
                        eprintln!("\n{}", widget.state().count_label());
                    }
                    ExitCode::SUCCESS
                }
                (Some(_), Grid::NoResults { message }) => {
                    if cli.json {
                        println!("[]");
                    }
                    eprintln!("{message}");
                    ExitCode::from(1)
                }
                (Some(_), Grid::Error { message }) => {
                    eprintln!("{message}");
                    ExitCode::from(2)
                }
                (Some(_), _) => ExitCode::SUCCESS,
            }
        }
    }
}
