//! Terminal front end for the tic-tac-toe engine.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};
use strictly_tictactoe::{Effect, GameConfig};
use tracing::{error, info, instrument};

use app::App;

/// Runs the game until the user quits.
#[instrument(skip_all, fields(mode = %config.mode(), fps = config.fps()))]
pub fn run(config: &GameConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(config), config);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Frame loop: input, one controller tick, draw, feedback.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    config: &GameConfig,
) -> Result<()> {
    let frame = Duration::from_secs(1) / (*config.fps()).max(1);

    loop {
        let started = Instant::now();
        let size = terminal.size()?;
        app.resize(ratatui::layout::Rect::new(0, 0, size.width, size.height));

        // Drain input until the frame budget is spent.
        while let Some(remaining) = frame.checked_sub(started.elapsed()) {
            if !event::poll(remaining)? {
                break;
            }
            match event::read()? {
                Event::Key(key) => app.on_key(key),
                Event::Mouse(mouse) => app.on_mouse(mouse),
                _ => {}
            }
            if app.should_quit() {
                return Ok(());
            }
        }

        let effects = app.on_frame();
        terminal.draw(|f| ui::draw(f, &app))?;

        if effects
            .iter()
            .any(|e| matches!(e, Effect::GameWon(_) | Effect::GameDrawn))
        {
            // Terminal bell stands in for the win/draw sound.
            terminal.backend_mut().write_all(b"\x07")?;
            terminal.backend_mut().flush()?;
        }
    }
}
