mod action;
mod app;
mod app_state;
mod component;
mod components;
mod focus;
mod router;
mod terminal;
mod theme;
mod widgets;

use yacht_search::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let data_dir = yacht_search::platform::data_dir();
    std::fs::create_dir_all(&data_dir)?;
    let log_path = data_dir.join("yachts.log");

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    // Config first: it carries the default log filter.
    let (config, config_err) = match Config::load() {
        Ok(c) => (c, None),
        Err(e) => (Config::default(), Some(e)),
    };

    // Allow RUST_LOG override
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| config.log.filter.clone());
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_env_filter(log_filter.as_str())
        .with_ansi(false)
        .init();

    // Print log path to stderr so the operator can tail it immediately.
    eprintln!("yachts log: {}", log_path.display());

    tracing::info!("yachts starting…");
    if let Some(e) = config_err {
        tracing::warn!("using default config: {}", e);
    }

    let today = chrono::Local::now().date_naive();
    app::App::new(config, today).run().await?;

    Ok(())
}
