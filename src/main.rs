use anyhow::Context;
use clap::Parser;
use fetcher::outcome::{FetchOutcome, RunSummary};
use fetcher::seen::SeenHashes;
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use utils::{files, http};
mod fetcher;
mod input;
mod logging;
mod utils;

const PROMPT: &str = "Please enter image URL(s), separated by commas: ";

/// Fetch images from the web, skipping non-images and duplicate content
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Image URLs (comma-separated lists allowed). Prompts on stdin when omitted
    urls: Vec<String>,

    /// Directory where images are saved
    #[arg(short, long, default_value = files::DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = http::DEFAULT_TIMEOUT_SECS)]
    timeout: u64,
}

#[tokio::main]
async fn main() {
    logging::init_logging();
    let args = Args::parse();

    match run(args).await {
        Ok(summary) => {
            println!("\nConnection strengthened. Community enriched.");
            println!("{}", summary);
        }
        Err(e) => {
            tracing::error!(error = %e, "setup failed");
            println!("✗ Setup error: {:#}", e);
        }
    }
}

/// Set up the run and fetch every URL.
///
/// Errors returned here are setup failures; per-URL failures are reported as
/// they happen and counted in the summary.
async fn run(args: Args) -> anyhow::Result<RunSummary> {
    println!("Welcome to the Ubuntu Image Fetcher");
    println!("A tool for mindfully collecting images from the web\n");

    let urls = if args.urls.is_empty() {
        input::prompt_for_urls(&mut io::stdin().lock(), PROMPT)
            .context("failed to read URLs from stdin")?
    } else {
        input::parse_url_list(&args.urls.join(","))
    };

    files::ensure_output_dir(&args.output_dir)
        .with_context(|| format!("failed to create {}", args.output_dir.display()))?;
    let client = http::build_client(Duration::from_secs(args.timeout))
        .context("failed to build HTTP client")?;

    let pb = ProgressBar::new(urls.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            )?
            .progress_chars("#>-"),
    );

    let mut summary = RunSummary::default();
    let (_, seen) = fetcher::fetch_all(
        &client,
        &urls,
        &args.output_dir,
        SeenHashes::new(),
        |url, outcome| {
            pb.suspend(|| report(url, outcome));
            summary.record(outcome);
            pb.inc(1);
        },
    )
    .await;
    pb.finish_and_clear();
    tracing::debug!(unique = seen.len(), "run complete");

    Ok(summary)
}

/// Print the status line(s) for one URL
fn report(url: &str, outcome: &FetchOutcome) {
    match outcome {
        FetchOutcome::Saved { filename, path } => {
            println!("✓ Successfully fetched: {}", filename);
            println!("✓ Image saved to {}", path.display());
        }
        FetchOutcome::Skipped(reason) => {
            println!("✗ Skipped ({}): {}", reason, url);
        }
        FetchOutcome::Failed(e) if e.is_transport() => {
            println!("✗ Connection error: {} → {}", url, e);
        }
        FetchOutcome::Failed(e) => {
            println!("✗ An error occurred: {} → {}", url, e);
        }
    }
}
