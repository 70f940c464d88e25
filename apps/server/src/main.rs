//! Roadwatch - Accident Alert Forwarder
//!
//! Polls the Waze live-alert feed for a configured area and forwards
//! new accidents to a Telegram chat, deduplicated by alert id.

mod config;

use clap::Parser;
use config::TelegramConfig;
use roadwatch_alerts::{Poller, TelegramNotifier};
use roadwatch_feed::{FeedConfig, WazeFeed, DEFAULT_FEED_URL};
use std::time::Duration;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Roadwatch CLI
#[derive(Parser, Debug)]
#[command(name = "roadwatch")]
#[command(about = "Forward Waze accident alerts to Telegram", long_about = None)]
struct Args {
    /// Latitude of the search center
    #[arg(long, default_value_t = 1.35)]
    lat: f64,

    /// Longitude of the search center
    #[arg(long, default_value_t = 103.82)]
    lon: f64,

    /// Search radius around the center
    #[arg(short, long, default_value_t = 20)]
    radius: u32,

    /// Seconds between polls
    #[arg(short, long, default_value_t = 300)]
    interval: u64,

    /// Feed request timeout in seconds
    #[arg(long, default_value_t = 10)]
    fetch_timeout: u64,

    /// Feed endpoint override
    #[arg(long, default_value_t = DEFAULT_FEED_URL.to_string())]
    feed_url: String,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) {
    let level = match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

fn feed_config(args: &Args) -> FeedConfig {
    FeedConfig {
        endpoint: args.feed_url.clone(),
        latitude: args.lat,
        longitude: args.lon,
        radius: args.radius,
        timeout: Duration::from_secs(args.fetch_timeout),
    }
}

/// Run ticks forever. Only external termination stops the loop; a failed
/// tick is logged and the next one happens after the same interval.
async fn run_poll_loop(mut poller: Poller<WazeFeed, TelegramNotifier>, interval: Duration) {
    info!("Starting poll loop");

    loop {
        match poller.tick().await {
            Ok(stats) => {
                info!(
                    fetched = stats.fetched,
                    accidents = stats.accidents,
                    notified = stats.notified,
                    seen = poller.seen().len(),
                    "Tick complete"
                );
            }
            Err(e) => {
                error!("Error fetching alert feed: {}", e);
            }
        }

        tokio::time::sleep(interval).await;
    }
}

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    init_logging(&args.log_level);

    info!("🚗 Roadwatch starting...");
    info!("  Center: ({}, {})", args.lat, args.lon);
    info!("  Radius: {}", args.radius);
    info!("  Interval: {}s", args.interval);

    let telegram = match TelegramConfig::from_env() {
        Ok(telegram) => telegram,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let feed = match WazeFeed::new(feed_config(&args)) {
        Ok(feed) => feed,
        Err(e) => {
            error!("Failed to build feed client: {}", e);
            std::process::exit(1);
        }
    };

    let notifier = TelegramNotifier::new(&telegram.bot_token, telegram.chat_id);
    let poller = Poller::new(feed, notifier);

    run_poll_loop(poller, Duration::from_secs(args.interval)).await;
}
