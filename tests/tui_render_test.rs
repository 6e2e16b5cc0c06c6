//! Rendering tests for the terminal front end using ratatui's test backend.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use strictly_boxes::tui::{App, cell_rects, draw};
use strictly_boxes::{DisplayConfig, Position};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_fresh_screen_shows_turn_and_numbers() {
    let app = App::new(DisplayConfig::default());
    let screen = render(&app);
    assert!(screen.contains("Turn: X"));
    assert!(screen.contains('5'));
}

#[test]
fn test_hidden_cell_numbers() {
    let app = App::new(DisplayConfig::default().with_show_cell_numbers(false));
    let screen = render(&app);
    assert!(!screen.contains('5'));
}

#[test]
fn test_win_shows_status_and_banner() {
    let mut app = App::new(DisplayConfig::default());
    for c in ['1', '5', '2', '6', '3'] {
        app.handle_key(KeyCode::Char(c));
    }
    let screen = render(&app);
    assert!(screen.contains("You won!"));
    assert!(screen.contains("X takes the game!"));
}

#[test]
fn test_banner_disabled_by_config() {
    let mut app = App::new(DisplayConfig::default().with_celebrate(false));
    for c in ['1', '5', '2', '6', '3'] {
        app.handle_key(KeyCode::Char(c));
    }
    let screen = render(&app);
    assert!(screen.contains("You won!"));
    assert!(!screen.contains("takes the game"));
}

#[test]
fn test_tie_has_no_banner() {
    let mut app = App::new(DisplayConfig::default());
    for c in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
        app.handle_key(KeyCode::Char(c));
    }
    let screen = render(&app);
    assert!(screen.contains("Tie game"));
    assert!(!screen.contains("takes the game"));
}

#[test]
fn test_click_places_marker() {
    let area = ratatui::layout::Rect::new(0, 0, 80, 24);
    let mut app = App::new(DisplayConfig::default());
    app.set_viewport(area);
    let target = cell_rects(area)[Position::BottomLeft.to_index()];
    app.handle_click(target.x + 1, target.y + 1);
    assert_eq!(app.engine().history(), &[Position::BottomLeft]);
    assert!(render(&app).contains("Turn: O"));
}
