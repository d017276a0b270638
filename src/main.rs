mod app;
mod cli;
mod config;
mod error;
mod logging;
mod models;
mod router;
mod theme;
mod ui;
mod watcher;

use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::app::App;
use crate::cli::{parse_args, CliConfig, OutputMode};
use crate::config::{find_theme_source, load_theme};
use crate::error::ThemeError;
use crate::ui::{PERFORMANCE_BARS, RECENT_ACTIVITIES, SPRINT_PROGRESS, STAT_CARDS};

fn main() -> Result<()> {
    let config: CliConfig = parse_args();

    let log_path = config.log_file.clone().or_else(logging::default_log_path);
    let _log_guard = match log_path.as_deref().map(logging::init_logging) {
        Some(Ok(guard)) => Some(guard),
        Some(Err(e)) => {
            eprintln!("Warning: logging disabled: {e:#}");
            None
        }
        None => None,
    };

    let theme_source = find_theme_source(config.theme_path.as_deref());
    let theme = load_theme(&theme_source).context("loading theme")?;
    tracing::info!(source = ?theme_source, route = %config.route, "starting");

    let mut app = App::new(theme, theme_source, config.route);

    match config.mode {
        OutputMode::Json => print_dataset(),
        OutputMode::Print { width, height } => {
            let lines = ui::render_to_lines(&app, width, height)
                .inspect_err(|e| log_render_error(e, &app))?;
            for line in lines {
                println!("{line}");
            }
            Ok(())
        }
        OutputMode::Interactive => run_interactive(&mut app),
    }
}

/// Write the fixed dashboard data as pretty JSON
fn print_dataset() -> Result<()> {
    let dataset = serde_json::json!({
        "stats": STAT_CARDS,
        "sprints": SPRINT_PROGRESS,
        "activities": RECENT_ACTIVITIES,
        "performance": PERFORMANCE_BARS,
    });
    println!("{}", serde_json::to_string_pretty(&dataset)?);
    Ok(())
}

fn run_interactive(app: &mut App) -> Result<()> {
    // Held for the whole session; dropping it stops hot reload
    let _watcher = app.theme_source.path().and_then(|path| {
        watcher::setup_theme_watcher(path.to_path_buf(), Arc::clone(&app.theme_needs_reload))
    });

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    tracing::info!(ok = result.is_ok(), "session ended");
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.reload_theme_if_needed();

        let mut rendered = Ok(0);
        terminal.draw(|frame| rendered = ui::render_shell(frame, app))?;
        match rendered {
            Ok(max_scroll) => app.set_max_scroll(max_scroll),
            Err(e) => {
                let e = anyhow::Error::from(e);
                log_render_error(&e, app);
                return Err(e.context("rendering dashboard"));
            }
        }

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn log_render_error(error: &anyhow::Error, app: &App) {
    if let Some(ThemeError::UnknownPaletteColor(key)) = error.downcast_ref::<ThemeError>() {
        let available: Vec<&str> = app.theme.palette_keys().collect();
        tracing::error!(%key, ?available, "stat card color missing from palette");
    } else {
        tracing::error!(error = %error, "render failed");
    }
}
