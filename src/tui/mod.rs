//! Terminal front end.
//!
//! A presentation layer over [`GameEngine`](crate::GameEngine): nine
//! clickable cells, a status line, a reset key and a celebration banner.

mod app;
mod input;
mod ui;

pub use app::App;
pub use ui::{cell_at, cell_rects, draw};

use crate::Config;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument};

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run(config: &Config) -> Result<()> {
    info!("Starting Strictly Boxes TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.display().clone());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!(error = %e, "TUI loop failed");
    }
    info!("TUI closed");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        let completed = terminal.draw(|f| draw(f, app))?;
        let viewport = completed.area;
        app.set_viewport(viewport);

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) => {
                if mouse.kind == MouseEventKind::Down(MouseButton::Left) {
                    app.handle_click(mouse.column, mouse.row);
                }
            }
            _ => {}
        }
    }
    Ok(())
}
