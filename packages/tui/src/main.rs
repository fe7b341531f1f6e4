use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

use cotdesk_records::DatasetStore;
use cotdesk_tui::App;

/// CoT curation workbench
#[derive(Parser, Debug)]
#[command(name = "cotdesk", version, about = "Chain-of-Thought 데이터 큐레이션 터미널 워크벤치")]
struct Cli {
    /// Seed the list filters from a query string,
    /// e.g. "product_category=SECURITIES&gender=MALE"
    #[arg(long, default_value = "")]
    query: String,

    /// Event tick rate in milliseconds
    #[arg(long, default_value_t = 250)]
    tick_rate: u64,

    /// Write logs to this file; without it logs are discarded so the
    /// terminal stays clean
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::sink)
                .init();
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    let store = DatasetStore::with_mock_data();
    let mut app = App::new(store, &cli.query, cli.tick_rate);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
