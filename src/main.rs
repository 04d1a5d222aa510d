use loadtest_metrics::{MetricsConfig, TrendMetrics};
use prometheus::Registry;
use std::{env, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> ExitCode {
    init_logging();

    let config = MetricsConfig::from_env();
    info!(
        test_name = %config.test_name,
        median_threshold = %config.median_threshold,
        p95_threshold = %config.p95_threshold,
        "Resolved metrics configuration"
    );

    let registry = Registry::new();
    let trends = match TrendMetrics::register(&registry, &config.test_name) {
        Ok(trends) => trends,
        Err(e) => {
            error!(error = %e, "Trend registration failed");
            return ExitCode::FAILURE;
        }
    };

    let summary = match serde_json::to_string_pretty(&config) {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "Failed to serialize configuration");
            return ExitCode::FAILURE;
        }
    };
    println!("{summary}");

    match trends.render() {
        Ok(exposition) => {
            print!("{exposition}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Failed to render trends");
            ExitCode::FAILURE
        }
    }
}
