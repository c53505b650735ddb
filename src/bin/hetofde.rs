//! hetofde CLI
//!
//! Looks up the article of Dutch nouns.
//!
//! Usage:
//!   hetofde huis auto kind
//!   hetofde --json --offline fiets
//!   hetofde -i                  # one word per line from stdin
//!
//! Interactive mode reads whole lines, so each line is looked up at once:
//! a finished line needs no quiet period (`DebouncedLookup::flush`). The
//! debounced path (`DebouncedLookup::input`) is for keystroke-level input.
//!
//! Environment:
//!   RUST_LOG             log filter (default hetofde=warn)
//!   HETOFDE_CONFIG       YAML config file, used when --config is absent
//!                        (read after .env is loaded)
//!   HETOFDE_BASE_URL, HETOFDE_TIMEOUT_SECS, HETOFDE_OFFLINE, ...

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use hetofde::{
    ArticleLookupService, ArticleResult, DebouncedLookup, LookupConfig, Presentation, Tint,
};

/// Look up whether a Dutch noun takes "het" or "de"
#[derive(Parser, Debug)]
#[command(name = "hetofde", version)]
#[command(about = "Look up whether a Dutch noun takes \"het\" or \"de\"")]
struct Args {
    /// Nouns to look up
    words: Vec<String>,

    /// Print one JSON record per word
    #[arg(long)]
    json: bool,

    /// Only use the local dictionary
    #[arg(long)]
    offline: bool,

    /// Extra word list (word|article per line) layered over the bundled one
    #[arg(long, short = 'd')]
    dictionary: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Also print the lookup page link
    #[arg(long)]
    link: bool,

    /// Read words from stdin, one per line
    #[arg(long, short = 'i')]
    interactive: bool,

    /// Verbose logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut config =
        LookupConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    if args.offline {
        config.offline = true;
    }
    if let Some(path) = &args.dictionary {
        config.dictionary_path = Some(path.clone());
    }

    let base_url = config
        .parsed_base_url()
        .context("Invalid lookup service URL")?;
    let service =
        ArticleLookupService::from_config(&config).context("Failed to start lookup service")?;

    tracing::info!(
        entries = service.dictionary().len(),
        offline = config.offline,
        "Lookup service ready"
    );

    let printer = Printer {
        json: args.json,
        link: args.link,
        base_url,
    };

    if args.interactive || args.words.is_empty() {
        let debounced = DebouncedLookup::new(service, Duration::from_millis(config.debounce_ms));
        return run_interactive(&debounced, &printer).await;
    }

    for word in &args.words {
        let result = service.lookup_article(word).await;
        printer.print(&result)?;
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "hetofde=debug" } else { "hetofde=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run_interactive(debounced: &DebouncedLookup, printer: &Printer) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() {
            continue;
        }
        // Whole line typed: skip the quiet period
        if let Some(update) = debounced.flush(&line).await {
            printer.print(&update.result)?;
        }
    }

    Ok(())
}

struct Printer {
    json: bool,
    link: bool,
    base_url: Url,
}

impl Printer {
    fn print(&self, result: &ArticleResult) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(result)?);
            return Ok(());
        }

        let view = Presentation::for_result(result, &self.base_url);
        let title = match view.tint {
            Tint::Green => view.title.green(),
            Tint::Blue => view.title.blue(),
            Tint::Purple => view.title.purple(),
            Tint::Red => view.title.red(),
        };

        println!("{}  {} [{}]", title.bold(), view.subtitle, view.source_label.dimmed());
        if self.link {
            if let Some(url) = &view.open_url {
                println!("  {}", url.underline());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_config_path_left_to_config_loader() {
        let command = Args::command();
        let config = command
            .get_arguments()
            .find(|arg| arg.get_id() == "config")
            .unwrap();
        assert_eq!(config.get_env(), None);

        let args = Args::try_parse_from(["hetofde", "huis"]).unwrap();
        assert_eq!(args.config, None);
        let args = Args::try_parse_from(["hetofde", "-c", "cli.yaml", "huis"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("cli.yaml")));
    }
}
