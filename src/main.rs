//! Kakolog main entry point
//!
//! This is the command-line interface around the replay crawler: argument
//! parsing, logging setup, and the per-video batch loop live here and
//! nowhere else.

use anyhow::Context;
use clap::Parser;
use kakolog::batch::load_batch;
use kakolog::output::{archive_raw_dir, write_raw_pages, write_transcript};
use kakolog::{CrawlConfig, PaidMessagePolicy, ReplayCrawler, VideoId};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Kakolog: an archived live chat replay extractor
///
/// Downloads the full chat replay of finished YouTube broadcasts and writes
/// one normalized JSON transcript per video.
#[derive(Parser, Debug)]
#[command(name = "kakolog")]
#[command(version)]
#[command(about = "Archived live chat replay extractor", long_about = None)]
struct Cli {
    /// Video URL or id to crawl
    #[arg(
        short,
        long,
        value_name = "URL_OR_ID",
        conflicts_with = "batch",
        required_unless_present = "batch"
    )]
    input: Option<String>,

    /// JSON batch file of video identifiers
    #[arg(short, long, value_name = "FILE")]
    batch: Option<PathBuf>,

    /// Output directory for transcripts and raw artifacts
    #[arg(short, long, value_name = "DIR", default_value = "live_chat_replay")]
    output_dir: PathBuf,

    /// Enable raw-page capture and debug logging
    #[arg(short, long)]
    debug: bool,

    /// Keep superchats that carry no message text (amount only)
    #[arg(long)]
    keep_empty_superchats: bool,

    /// Abort a video's crawl after this many seconds
    #[arg(long, value_name = "SECONDS")]
    deadline: Option<u64>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet, cli.debug);

    let video_ids = collect_video_ids(&cli)?;
    tracing::info!("{} video(s) to crawl", video_ids.len());

    let config = CrawlConfig {
        capture_raw: cli.debug,
        crawl_deadline: cli.deadline.map(Duration::from_secs),
        paid_message_policy: if cli.keep_empty_superchats {
            PaidMessagePolicy::KeepAmountOnly
        } else {
            PaidMessagePolicy::DropEmpty
        },
        ..CrawlConfig::default()
    };
    let crawler = ReplayCrawler::new(config).context("failed to build HTTP client")?;

    // Per-video isolation: one bad video never aborts the batch
    let started = Instant::now();
    let mut failures = 0usize;
    for video_id in &video_ids {
        if let Err(e) = process_video(&crawler, video_id, &cli).await {
            tracing::error!("crawl failed for {}: {}", video_id, e);
            failures += 1;
        }
    }

    tracing::info!("elapsed time: {:?}", started.elapsed());

    if failures == video_ids.len() {
        anyhow::bail!("all {} video(s) failed", failures);
    }
    if failures > 0 {
        tracing::warn!("{} of {} video(s) failed", failures, video_ids.len());
    }
    Ok(())
}

/// Crawls one video and writes its artifacts
async fn process_video(
    crawler: &ReplayCrawler,
    video_id: &VideoId,
    cli: &Cli,
) -> kakolog::Result<()> {
    let result = crawler.run(video_id).await?;

    let path = write_transcript(&cli.output_dir, video_id, &result.events)?;
    tracing::info!(
        "wrote {} events ({} pages) to {}",
        result.events.len(),
        result.pages_fetched,
        path.display()
    );

    if !result.raw_pages.is_empty() {
        let raw_dir = write_raw_pages(&cli.output_dir, video_id, &result.raw_pages)?;
        archive_raw_dir(&raw_dir)?;
    }

    Ok(())
}

/// Resolves the CLI source arguments into the list of videos to crawl
fn collect_video_ids(cli: &Cli) -> anyhow::Result<Vec<VideoId>> {
    if let Some(batch) = &cli.batch {
        let ids = load_batch(batch)
            .with_context(|| format!("failed to load batch file {}", batch.display()))?;
        Ok(ids)
    } else if let Some(input) = &cli.input {
        Ok(vec![input.parse()?])
    } else {
        // clap enforces that one of the two is present
        anyhow::bail!("either --input or --batch is required");
    }
}

/// Sets up the tracing subscriber based on verbosity flags
fn setup_logging(verbose: u8, quiet: bool, debug: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if debug {
        EnvFilter::new("kakolog=debug,info")
    } else {
        match verbose {
            0 => EnvFilter::new("kakolog=info,warn"),
            1 => EnvFilter::new("kakolog=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
