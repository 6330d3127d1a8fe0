use std::io::{stderr, stdout, BufWriter};
use std::process::exit;
use std::str::FromStr;
use std::time::Instant;

use anyhow::Result;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use recurring_sequence_engine::config::EngineConfig;
use recurring_sequence_engine::engine::AsyncEngine;
use recurring_sequence_engine::models::AnnotatedTable;
use recurring_sequence_engine::types::ThresholdMultiplier;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        exit(1);
    }

    let path = &args[1];
    let threshold_multiplier = match args.get(2).map(|value| ThresholdMultiplier::from_str(value)) {
        Some(Ok(multiplier)) => multiplier,
        Some(Err(error)) => {
            eprintln!("{error}");
            print_usage();
            exit(1);
        }
        None => ThresholdMultiplier::default()
    };
    let log_level = args.get(3)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let config = EngineConfig::default().with_threshold_multiplier(threshold_multiplier);
    let engine = AsyncEngine::new(config);

    let timer = Instant::now();
    let table = engine.run(path).await?;
    let duration = timer.elapsed();

    info!("Processed [{}] transactions in: {duration:?}", table.rows.len());

    write_results_to_stdout(&table)?;

    Ok(())
}

fn print_usage() {
    eprintln!("Usage: recurring-sequence-engine [input].csv [threshold_multiplier:optional] [log_level:optional] > [output].csv");
    eprintln!("Threshold multiplier applied to each pair's median amount (default: {})", ThresholdMultiplier::default());
    eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: Results go to stdout, so logging has to use stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn write_results_to_stdout(table: &AnnotatedTable) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(stdout().lock()));

    writer.write_record(table.header())?;

    for row in &table.rows {
        writer.write_record(row.to_record())?;
    }

    writer.flush()?;

    Ok(())
}
