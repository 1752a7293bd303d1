//! Command-line front end for the shortening client.
//!
//! Owns all presentation state (prompts, rendering); the library core only receives
//! plain call arguments.
//!
//! # Usage
//!
//! ```bash
//! # Shorten up to five URLs at once
//! cargo run --bin shortener -- shorten https://example.com https://rust-lang.org
//!
//! # With a lifetime, a custom shortcode and statistics afterwards
//! cargo run --bin shortener -- shorten https://example.com -v 30 -c promo --stats
//!
//! # Enter rows interactively
//! cargo run --bin shortener -- interactive
//! ```
//!
//! # Environment Variables
//!
//! See [`url_shortener_client::config`].

use std::sync::Arc;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use futures::future::join_all;
use url_shortener_client::config::{self, Config};
use url_shortener_client::prelude::*;
use url_shortener_client::telemetry;

/// Batch URL shortening client.
#[derive(Parser)]
#[command(name = "shortener")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shorten one or more URLs (at most 5)
    Shorten {
        /// URLs to shorten
        #[arg(required = true)]
        urls: Vec<String>,

        /// Validity in minutes, applied to every URL
        #[arg(short, long)]
        validity: Option<String>,

        /// Custom shortcode (only with a single URL)
        #[arg(short = 'c', long)]
        shortcode: Option<String>,

        /// Fetch statistics for the new links afterwards
        #[arg(long)]
        stats: bool,
    },

    /// Enter URLs interactively
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    telemetry::init(&config);
    config.print_summary();

    let api = Arc::new(HttpShortenerApi::from_config(&config)?);
    let controller = BatchController::new(api);

    match cli.command {
        Commands::Shorten {
            urls,
            validity,
            shortcode,
            stats,
        } => {
            if shortcode.is_some() && urls.len() > 1 {
                bail!("--shortcode can only be used with a single URL");
            }
            fill_drafts(&controller, &urls, validity.as_deref(), shortcode.as_deref());
            submit_all(&controller).await;
            if stats {
                show_stats(&controller, &config).await;
            }
        }
        Commands::Interactive => {
            prompt_drafts(&controller)?;
            submit_all(&controller).await;

            let wants_stats = !controller.results().is_empty()
                && Confirm::new()
                    .with_prompt("Show statistics?")
                    .default(true)
                    .interact()?;
            if wants_stats {
                show_stats(&controller, &config).await;
            }
        }
    }

    Ok(())
}

/// Creates one draft per URL, stopping at the batch limit.
fn fill_drafts(
    controller: &BatchController<HttpShortenerApi>,
    urls: &[String],
    validity: Option<&str>,
    shortcode: Option<&str>,
) {
    for (index, url) in urls.iter().enumerate() {
        let id = if index == 0 {
            1
        } else {
            match controller.add_draft() {
                Ok(id) => id,
                Err(limit) => {
                    print_alert(limit.title(), &limit.to_string());
                    break;
                }
            }
        };

        controller.update_draft(id, DraftField::Url, url.as_str());
        if let Some(validity) = validity {
            controller.update_draft(id, DraftField::Validity, validity);
        }
        if let Some(shortcode) = shortcode {
            controller.update_draft(id, DraftField::Shortcode, shortcode);
        }
    }
}

/// Prompts for draft rows until the user stops or the batch is full.
fn prompt_drafts(controller: &BatchController<HttpShortenerApi>) -> Result<()> {
    println!("{}", "🔗 URL Shortener".bright_blue().bold());
    println!();

    let mut id = 1;
    loop {
        println!("{}", format!("URL #{id}").bright_white().bold());

        let url: String = Input::new()
            .with_prompt("  Original URL")
            .allow_empty(true)
            .interact_text()?;
        let validity: String = Input::new()
            .with_prompt("  Validity (minutes, optional)")
            .allow_empty(true)
            .interact_text()?;
        let shortcode: String = Input::new()
            .with_prompt("  Custom shortcode (optional)")
            .allow_empty(true)
            .interact_text()?;

        controller.update_draft(id, DraftField::Url, url);
        controller.update_draft(id, DraftField::Validity, validity);
        controller.update_draft(id, DraftField::Shortcode, shortcode);

        if controller.drafts().len() >= MAX_DRAFTS {
            break;
        }

        let another = Confirm::new()
            .with_prompt("Add another URL?")
            .default(false)
            .interact()?;
        if !another {
            break;
        }

        id = match controller.add_draft() {
            Ok(id) => id,
            Err(limit) => {
                print_alert(limit.title(), &limit.to_string());
                break;
            }
        };
    }

    println!();
    Ok(())
}

/// Submits every draft concurrently and prints each result.
async fn submit_all(controller: &BatchController<HttpShortenerApi>) {
    let ids: Vec<u32> = controller.drafts().iter().map(|d| d.id).collect();
    let results = join_all(ids.iter().map(|&id| controller.submit(id))).await;

    for (id, result) in ids.iter().zip(results) {
        match result {
            Ok(outcome) => print_outcome(&outcome),
            Err(err) => print_alert(err.title(), &format!("URL #{id}: {err}")),
        }
    }

    let succeeded = controller.results().len();
    println!();
    println!(
        "  Shortened: {} of {}",
        succeeded.to_string().bright_green().bold(),
        ids.len().to_string().bright_white()
    );
    println!();
}

fn print_outcome(outcome: &ShortenOutcome) {
    println!("{}", "✅ URL shortened successfully!".green().bold());
    println!("  Original:   {}", outcome.original_url.bright_white());
    println!("  Short link: {}", outcome.short_link.bright_yellow().bold());
    println!(
        "  Expires:    {}",
        outcome
            .expiry
            .format("%Y-%m-%d %H:%M UTC")
            .to_string()
            .bright_black()
    );
}

fn print_alert(title: &str, message: &str) {
    println!("{} {}", format!("❌ {title}:").red().bold(), message);
}

/// Fetches and renders statistics for every shortened link.
async fn show_stats(controller: &BatchController<HttpShortenerApi>, config: &Config) {
    println!("{}", "📊 URL Statistics".bright_blue().bold());
    println!();

    let stats = controller.request_stats().await;

    if stats.is_empty() {
        println!(
            "{}",
            "  No shortened URLs found in this session or available for statistics.".yellow()
        );
        println!();
        return;
    }

    for entry in &stats {
        println!("  {}", entry.short_link(&config.base_url).bright_yellow().bold());
        println!("    Original URL: {}", entry.original_url.cyan());
        println!(
            "    Created:      {}",
            entry.creation_date.format("%Y-%m-%d %H:%M").to_string().bright_black()
        );
        println!(
            "    Expires:      {}",
            entry.expiry_date.format("%Y-%m-%d %H:%M").to_string().bright_black()
        );
        println!(
            "    Total clicks: {}",
            entry.total_clicks.to_string().bright_green().bold()
        );

        if entry.has_clicks() {
            for click in &entry.detailed_clicks {
                println!(
                    "      {}  source: {}, location: {}",
                    click.timestamp.format("%Y-%m-%d %H:%M:%S").to_string().bright_black(),
                    click.source,
                    click.location
                );
            }
        } else {
            println!("      {}", "No clicks yet.".bright_black());
        }
        println!();
    }
}
