//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use crate::{CellView, Player, Position, Snapshot, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3;

const HELP: &str = "1-9 or click: place | arrows + enter: place at cursor | r: reset | q: quit";

/// Splits the frame into title, board, status, banner and help rows.
fn screen_layout(area: Rect) -> [Rect; 5] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(3),         // Status
            Constraint::Length(1),         // Celebration banner
            Constraint::Length(1),         // Help
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3], chunks[4]]
}

/// Screen rectangles of the nine cells, in board order.
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let board = center_rect(screen_layout(area)[1], BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board);

    let mut rects = [Rect::default(); 9];
    for (r, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row);
        for (c, col) in cols.iter().enumerate() {
            rects[r * 3 + c] = *col;
        }
    }
    rects
}

/// Cell under a terminal coordinate, if any.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    cell_rects(area)
        .iter()
        .position(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
        .and_then(Position::from_index)
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.engine().snapshot();
    let [title_area, _, status_area, banner_area, help_area] = screen_layout(frame.area());

    let title = Paragraph::new("Strictly Boxes - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    for (cell, rect) in snapshot.cells.iter().zip(cell_rects(frame.area())) {
        draw_cell(frame, rect, cell, app);
    }

    let status = Paragraph::new(snapshot.status_text.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);

    if *app.display().celebrate() {
        draw_banner(frame, banner_area, &snapshot);
    }

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, help_area);
}

fn draw_cell(frame: &mut Frame, area: Rect, cell: &CellView, app: &App) {
    let text = match cell.square {
        Square::Empty if *app.display().show_cell_numbers() => {
            (cell.position.to_index() + 1).to_string()
        }
        square => square.symbol().to_string(),
    };

    let mut style = match cell.square {
        Square::Empty => Style::default().fg(Color::DarkGray),
        Square::Occupied(Player::X) => Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD),
        Square::Occupied(Player::O) => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::BOLD),
    };
    if cell.winning {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if cell.disabled {
        style = style.add_modifier(Modifier::DIM);
    }

    let border = if cell.position == app.cursor() && !app.engine().is_over() {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if cell.winning {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn draw_banner(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    if !snapshot.celebrate {
        return;
    }
    let winner = snapshot.status.winner().map(|p| p.to_string()).unwrap_or_default();
    let banner = Paragraph::new(format!("*** {} takes the game! ***", winner))
        .style(
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
        )
        .alignment(Alignment::Center);
    frame.render_widget(banner, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(horizontal[1])[1]
}
