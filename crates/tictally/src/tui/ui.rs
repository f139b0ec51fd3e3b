//! Stateless rendering of the board, stats cards and name overlay.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictally_game::{Cell, Mark, Position};

use super::app::App;
use super::names::{NameEntry, NameField};

const CELL_WIDTH: u16 = 12;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = 11;

/// Renders one frame.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Length(4),            // Stats cards
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Footer
        ])
        .split(area);

    let title = Paragraph::new("Tictally - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_cards(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);

    let status = Paragraph::new(app.game().status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    draw_footer(frame, chunks[4], app);

    if let Some(entry) = app.names() {
        draw_name_overlay(frame, area, entry, *app.stats_enabled());
    }
}

fn draw_cards(frame: &mut Frame, area: Rect, app: &App) {
    if !app.game().is_identified() {
        return;
    }
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (mark, col) in [(Mark::X, cols[0]), (Mark::O, cols[1])] {
        let Some((name, stats)) = app.player_stats(mark) else {
            continue;
        };
        let active = !app.game().outcome().is_terminal() && app.game().turn() == mark;
        let border = if active {
            Style::default().fg(mark_color(mark))
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let body = Line::from(vec![
            Span::raw("Wins: "),
            Span::styled(stats.wins.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("   Draws: "),
            Span::styled(stats.draws.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ]);
        let card = Paragraph::new(body).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} - {} ", mark, name)),
        );
        frame.render_widget(card, col);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, positions) in Position::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], app, positions);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(BOARD_WIDTH as usize))
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, positions: &[Position]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
            Constraint::Length(1),
            Constraint::Length(CELL_WIDTH),
        ])
        .split(area);

    for (i, &pos) in positions.iter().enumerate() {
        draw_cell(frame, cols[i * 2], app, pos);
        if i < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let game = app.game();
    let (symbol, mut style) = match game.board().get(pos) {
        Cell::Empty => ((pos.to_index() + 1).to_string(), Style::default().fg(Color::DarkGray)),
        Cell::Occupied(mark) => (
            mark.to_string(),
            Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
        ),
    };

    if game.outcome().highlights(pos) {
        style = style.bg(Color::Green).fg(Color::Black);
    } else if pos == *app.cursor() && app.names().is_none() {
        style = style.bg(Color::White).fg(Color::Black);
    }
    if !game.can_play(pos) {
        style = style.add_modifier(Modifier::DIM);
    }

    let text = vec![Line::raw(""), Line::from(Span::styled(format!(" {} ", symbol), style))];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let indicator_style = if *app.stats_enabled() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let footer = Line::from(vec![
        Span::styled(
            "Arrows/1-9 move  Enter place  r reset  q quit  ",
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(app.stats_indicator(), indicator_style),
    ]);
    frame.render_widget(Paragraph::new(footer).alignment(Alignment::Center), area);
}

fn draw_name_overlay(frame: &mut Frame, area: Rect, entry: &NameEntry, stats_enabled: bool) {
    let popup = center_rect(area, 44, 11);
    frame.render_widget(Clear, popup);

    let field = |label: &str, value: &str, focused: bool| {
        let style = if focused {
            Style::default().fg(Color::Black).bg(Color::White)
        } else {
            Style::default()
        };
        let cursor = if focused { "_" } else { "" };
        Line::from(vec![
            Span::styled(format!("{:<10}", label), Style::default().fg(Color::Cyan)),
            Span::styled(format!("{}{}", value, cursor), style),
        ])
    };

    let saving = if stats_enabled {
        Span::styled("Results will be saved", Style::default().fg(Color::Green))
    } else {
        Span::styled("Stats not configured, results not saved", Style::default().fg(Color::DarkGray))
    };
    let hint = if entry.is_complete() {
        "Enter: start game   Tab: switch field"
    } else {
        "Enter both names   Tab: switch field"
    };

    let lines = vec![
        Line::raw(""),
        field("Player X", entry.x(), *entry.focus() == NameField::X),
        Line::raw(""),
        field("Player O", entry.o(), *entry.focus() == NameField::O),
        Line::raw(""),
        Line::from(saving),
        Line::raw(""),
        Line::styled(hint, Style::default().fg(Color::DarkGray)),
    ];

    let overlay = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Who's playing? ")
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(overlay, popup);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("terminal");
        terminal.draw(|f| draw(f, app)).expect("draw");
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
    }

    #[test]
    fn test_overlay_shows_stats_capability() {
        let screen = render(&App::new(false));
        assert!(screen.contains("Who's playing?"));
        assert!(screen.contains("results not saved"));
        assert!(screen.contains("Stats: not configured"));
    }

    #[test]
    fn test_cards_and_status_after_names() {
        let mut app = App::new(true);
        "Alice".chars().for_each(|c| press(&mut app, c));
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        "Bob".chars().for_each(|c| press(&mut app, c));
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));

        let screen = render(&app);
        assert!(!screen.contains("Who's playing?"));
        assert!(screen.contains("X - Alice"));
        assert!(screen.contains("O - Bob"));
        assert!(screen.contains("Next: X"));
    }
}
