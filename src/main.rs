use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};

mod app;
mod cli;
mod config;
mod error;
mod logging;
mod models;
mod report;
mod theme;
mod ui;

use app::App;
use cli::{Args, OutputMode};
use config::Config;
use models::{Action, ActivityData};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mode = args.output_mode();

    let (config, config_path) =
        Config::resolve(args.config.as_deref()).context("loading configuration")?;
    let config = config.merge_args(&args);
    logging::init(&config, mode)?;

    let config_label = config_path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<defaults>".to_string());
    tracing::info!(
        version = cli::VERSION,
        config = %config_label,
        "starting activity guide"
    );

    let data = load_data(&config)?;
    let mut app = App::new(data, &config);
    if let Some(ref phase) = args.phase {
        if app.data.find_phase(phase).is_none() {
            tracing::warn!(phase = %phase, "no phase with this name, nothing will be shown");
        }
        app.select_phase(Some(phase.as_str()));
    }

    match mode {
        OutputMode::Text => print!("{}", report::render_text(&app)),
        OutputMode::Json => println!("{}", report::render_json(&app)?),
        OutputMode::Interactive => run_interactive(&mut app)?,
    }

    tracing::info!("activity guide closed");
    Ok(())
}

/// Load the dataset and apply the duplicate-name policy
fn load_data(config: &Config) -> anyhow::Result<ActivityData> {
    let source = config.data_source();
    let data = ActivityData::from_source(&source)
        .with_context(|| format!("loading activity data from {}", source))?;

    if config.strict {
        data.ensure_unique_names()?;
    } else {
        for problem in data.duplicate_names() {
            tracing::warn!(source = %source, "{}; every match is shown", problem);
        }
    }

    tracing::info!(
        source = %source,
        phases = data.phases.len(),
        categories = data.category_count(),
        activities = data.total_activities(),
        "activity data loaded"
    );
    Ok(data)
}

fn run_interactive(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && app.handle_key(key) == Action::Quit {
                    break;
                }
            }
        }
    }

    Ok(())
}
