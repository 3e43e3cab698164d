use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use bookdesk::{
    api::{BookApi, HttpBookApi},
    book_tui::App,
    cli::{self, Cli, Commands},
    config::Config,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(api_url) = &cli.api_url {
        config = config.with_api_url(api_url.as_str());
    }
    config.validate()?;

    // Log to a file only; stdout belongs to the TUI and to command output
    let _guard = init_logging(&config);
    info!("Starting bookdesk against {}", config.api_base());

    let api = HttpBookApi::new(&config).context("Failed to create backend client")?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => run_tui(config, Arc::new(api)).await,
        command => {
            let result = cli::run_command(&command, &api, config.list.page_size).await;
            if let Err(e) = &result {
                error!("Command failed: {:#}", e);
            }
            result
        }
    }
}

fn init_logging(config: &Config) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

    // Set default log level to INFO if not specified
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bookdesk=info"));

    let file_appender = tracing_appender::rolling::never(&config.log_dir, "bookdesk.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(filter),
        )
        .init();

    guard
}

async fn run_tui(config: Config, api: Arc<dyn BookApi>) -> Result<()> {
    info!("Launching TUI interface");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, api);
    let result = app.run(&mut terminal).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match &result {
        Ok(_) => info!("TUI exited successfully"),
        Err(e) => error!("TUI failed: {}", e),
    }
    result
}
