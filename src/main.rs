use newsedge::{config, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pull in a local .env before any configuration is read.
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    server::run(config).await
}

/// Initializes the tracing subscriber in text or JSON format.
///
/// `level` accepts full `RUST_LOG` directive strings, not just a bare
/// level name.
fn init_tracing(level: &str, format: &str) {
    let builder = tracing_subscriber::fmt().with_env_filter(EnvFilter::new(level));

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
