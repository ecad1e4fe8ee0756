use anyhow::{Context, Result};
use clap::Parser;
use condor::cli::Cli;
use condor::styles::{init_theme, ThemeType};
use condor::utils::get_log_dir;
use condor::{App, Config};

fn main() -> Result<()> {
    condor::tui::install_panic_hook();

    let cli = Cli::parse();
    if cli.execute()? {
        return Ok(());
    }

    let log_dir = get_log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;
    let log_file = log_dir.join("condor.log");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // The TUI owns the terminal, so logs only go to the file
    let file_appender = tracing_appender::rolling::never(&log_dir, "condor.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    eprintln!("Logs are being written to: {:?}", log_file);

    let config_path = cli.config_path();
    let config = Config::load_or_create(&config_path).context("Failed to load configuration")?;

    let no_color = cli.no_colors || std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    let theme_type = if no_color {
        ThemeType::NoColor
    } else {
        match cli.theme.as_deref() {
            Some(name) => name.parse().unwrap_or_default(),
            None => config.theme,
        }
    };
    init_theme(theme_type);

    let start = match cli.start_route()? {
        Some(route) => route,
        None => config.start(),
    };

    tracing::info!(route = %start, theme = ?theme_type, "Launching condor");
    let mut app = App::new(&config, start, &config_path)?;
    let result = app.run();

    drop(guard);
    result
}
