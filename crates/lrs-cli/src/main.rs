mod render;

use std::io::Write;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use lrs_client::{run_search, DebounceSettings, LrsClient, SearchRequest, SuggestionDebouncer};
use lrs_core::presentation::active_preset;
use lrs_core::Mode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "lrs")]
#[command(about = "Local Restaurant Scout: locals-first picks, no hype unless you ask for it")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Find local favorites near a location
    Search {
        /// City or area, sent exactly as typed (e.g. "Los Angeles, CA")
        #[arg(long, short)]
        location: String,
        /// What you're craving (e.g. tacos, ramen, bbq)
        #[arg(long, short, default_value = "")]
        cuisine: String,
        /// strict (Top Local Picks), best (Best Available), or hype
        #[arg(long, short, default_value_t = Mode::Strict)]
        mode: Mode,
        /// Explain why locals trust these picks
        #[arg(long)]
        why: bool,
        /// Print a share message under each pick
        #[arg(long)]
        share: bool,
        /// Emit the outcome as JSON instead of cards
        #[arg(long)]
        json: bool,
    },
    /// Show location suggestions for a partial query
    Suggest {
        query: String,
        /// Choose the Nth suggestion (1-based) and print its label
        #[arg(long)]
        pick: Option<usize>,
    },
    /// List the quick-pick cravings
    Presets {
        /// Current craving; a matching preset is marked
        #[arg(long, short, default_value = "")]
        cuisine: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = lrs_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!(?config, "configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Search {
            location,
            cuisine,
            mode,
            why,
            share,
            json,
        } => {
            let client = LrsClient::from_config(&config)?;
            if !json {
                writeln!(out, "{}", lrs_core::presentation::LOADING_HINT)?;
            }
            let request = SearchRequest::new(location, cuisine, mode);
            let outcome = run_search(&client, &request).await;
            if json {
                render::write_json(&mut out, &outcome)?;
            } else {
                let options = render::CardOptions { why, share };
                render::write_outcome(&mut out, &outcome, options)?;
            }
        }
        Commands::Suggest { query, pick } => {
            let client = Arc::new(LrsClient::from_config(&config)?);
            let mut debouncer =
                SuggestionDebouncer::new(client, DebounceSettings::default());

            if let Some(handle) = debouncer.update(&query, true) {
                writeln!(out, "{}", lrs_core::presentation::SUGGESTIONS_LOADING_HINT)?;
                handle.await?;
            }
            let state = debouncer.state();

            match pick {
                Some(n) => {
                    let chosen = n
                        .checked_sub(1)
                        .and_then(|i| state.suggestions.get(i))
                        .ok_or_else(|| {
                            anyhow::anyhow!(
                                "no suggestion #{n} ({} available)",
                                state.suggestions.len()
                            )
                        })?;
                    let field = debouncer.select(chosen);
                    writeln!(out, "{field}")?;
                }
                None => render::write_suggestions(&mut out, &state.suggestions)?,
            }
        }
        Commands::Presets { cuisine } => {
            render::write_presets(&mut out, active_preset(&cuisine))?;
        }
    }

    Ok(())
}
