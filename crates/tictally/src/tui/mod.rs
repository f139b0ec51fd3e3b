//! Terminal UI for tictally.

mod app;
mod input;
mod names;
mod ui;

pub use app::{App, Control};
pub use input::{digit_position, move_cursor};
pub use names::{MAX_NAME_LEN, NameEntry, NameField};

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tictally_stats::StatsStore;
use tracing::{error, info, instrument, warn};

use crate::session::EffectRunner;

/// Runs the game in the terminal until the user quits.
///
/// Effects run against the injected store; the terminal is restored
/// even when the loop fails.
#[instrument(skip(store), fields(stats_enabled = store.is_enabled()))]
pub async fn run_tui(store: StatsStore) -> Result<()> {
    info!("Starting tictally TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_app(&mut terminal, store).await;
    let restored = restore(&mut terminal);

    if let Err(e) = &res {
        error!(error = ?e, "Game loop error");
    }
    info!("TUI closed");
    res.and(restored)
}

/// Puts the terminal back, attempting every step even if one fails.
fn restore(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let steps = [
        ("raw mode", disable_raw_mode()),
        ("alternate screen", execute!(terminal.backend_mut(), LeaveAlternateScreen)),
        ("cursor", terminal.show_cursor()),
    ];
    Ok(first_failure(steps)?)
}

/// Logs every failed step and returns the first failure.
fn first_failure<const N: usize>(steps: [(&str, io::Result<()>); N]) -> io::Result<()> {
    let mut first = None;
    for (step, result) in steps {
        if let Err(e) = result {
            warn!(step, error = %e, "Failed to restore terminal");
            first.get_or_insert(e);
        }
    }
    first.map_or(Ok(()), Err)
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, store: StatsStore) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let (runner, mut refreshed) = EffectRunner::new(store);
    let mut app = App::new(runner.is_enabled());

    loop {
        while let Ok(stats) = refreshed.try_recv() {
            app.refresh_stats(stats);
        }

        // Re-checked every frame; the latch keeps a result from recording twice.
        if let Some(effect) = app.settle() {
            runner.submit(effect);
        }

        terminal.draw(|f| ui::draw(f, &app))?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Release {
            continue;
        }

        match app.handle_key(key) {
            Control::Quit => return Ok(()),
            Control::Continue(effects) => {
                for effect in effects {
                    runner.submit(effect);
                }
            }
        }
    }
}
