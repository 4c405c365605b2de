use anyhow::Context;
use resultkit::bench;
use resultkit::config::Config;
use resultkit::demo;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Path of an explicit config file, if any
const CONFIG_ENV: &str = "RESULTKIT_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "resultkit.toml";

fn main() -> anyhow::Result<()> {
    let config_path = config_path();
    let config = Config::load(config_path.as_deref())
        .with_context(|| format!("loading configuration from {:?}", config_path))?;

    // Initialize tracing
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting resultkit demo");
    info!("Configuration loaded: {:?}", config);

    run_demos();

    let reports = bench::run_all(&config.bench);
    for report in &reports {
        info!(
            name = %report.name,
            iterations = report.iterations,
            total_micros = report.total_micros,
            per_op_micros = report.per_op_micros,
            "benchmark complete"
        );
    }

    if config.bench.json_report {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    Ok(())
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
    default.exists().then_some(default)
}

fn run_demos() {
    let header = [2, 3, 4, 5, 6, 7];

    demo::parse_version(&header).match_with(
        |version| info!("Version: {}", version as u8),
        |error| warn!("{}", error),
    );

    demo::parse_data(&header).match_with(
        |parsed| info!("parsed: {}", parsed),
        |error| warn!("failed to parse data: {}", error),
    );

    let chained = demo::division_chain(8, 3);
    info!(
        "division chain finished: {}",
        chained.is_ok_and(|value| {
            info!("finally got value: {}", value);
            true
        })
    );
}
