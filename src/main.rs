use clap::Parser;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use skyward::assets::AssetSource;
use skyward::audio::player_for;
use skyward::build_info;
use skyward::core::GameConfig;
use skyward::driver::{self, App};
use skyward::logging;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

/// Skyward - a side-scrolling flap-through-the-pipes game for the terminal
#[derive(Parser)]
#[command(name = "skyward", disable_version_flag = true)]
struct Cli {
    /// Asset directory containing images/ and sounds/ (built-in sizes if omitted)
    #[arg(short, long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Seed for reproducible pipe heights
    #[arg(short, long)]
    seed: Option<u64>,

    /// Start moving immediately instead of waiting for the first flap
    #[arg(long)]
    no_wait: bool,

    /// Seconds to wait for images before giving up
    #[arg(long, value_name = "SECS")]
    asset_timeout: Option<u64>,

    /// Show version information
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if cli.version {
        println!("skyward {}", build_info::version_line());
        return Ok(());
    }

    let mut config = GameConfig {
        seed: cli.seed,
        wait_for_first_flap: !cli.no_wait,
        ..Default::default()
    };
    if let Some(secs) = cli.asset_timeout {
        config.asset_timeout = Duration::from_secs(secs);
    }
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(2);
    }

    // No log file means no logging; the game still runs
    let _ = logging::init();

    let source = match cli.assets {
        Some(dir) => AssetSource::Directory(dir),
        None => AssetSource::Builtin,
    };
    let player = player_for(&source);
    let mut app = App::new(config, source, player);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = driver::run(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("terminal error: {}", e);
    }
    log::info!("exiting");
    result
}
