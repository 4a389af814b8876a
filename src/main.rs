// sortty: step-by-step sorting visualizer for the terminal

use std::fs::File;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{Terminal, backend::CrosstermBackend};

use sortty::config::CliOptions;
use sortty::playback::Playback;
use sortty::report::{format_report, run_report};
use sortty::sort::generate_permutation;
use sortty::ui::App;

/// Set up `env_logger`; RUST_LOG overrides the default filter
fn init_logging(log_file: Option<&Path>) -> io::Result<()> {
    // Log lines on stderr would draw over the TUI, so stay quiet unless redirected
    let default_filter = if log_file.is_some() { "info" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    builder.format_timestamp_millis();

    if let Some(path) = log_file {
        let file = File::create(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments; clap handles --help and usage errors
    let options = CliOptions::parse();
    let config = match options.playback_config() {
        Ok(config) => config,
        Err(e) => CliOptions::command().error(ErrorKind::ValueValidation, e).exit(),
    };

    init_logging(options.log_file.as_deref())?;
    log::info!("sortty starting with {:?}", config);

    if options.report {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let values = generate_permutation(config.item_count, &mut rng)?;
        print!("{}", format_report(values.len(), &run_report(&values)));
        return Ok(());
    }

    let playback = Playback::new(config)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(playback);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("event loop failed: {}", err);
        eprintln!("Error: {:?}", err);
    }

    log::info!("sortty exiting");
    Ok(())
}
