//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use noughts_engine::{Board, Player, Position, Square};

use crate::app::App;

/// Renders the full screen: title, scores, board, status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(1), // Scores
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("TIC TAC TOE")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App) {
    let scores = app.game().state().scores();
    let line = Line::from(vec![
        Span::styled(
            format!("Player X: {}", scores.wins(Player::X)),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    "),
        Span::styled(
            format!("Player O: {}", scores.wins(Player::O)),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    ]);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

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

    draw_row(frame, rows[0], app, [Position::TopLeft, Position::TopCenter, Position::TopRight]);
    draw_separator(frame, rows[1]);
    draw_row(frame, rows[2], app, [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]);
    draw_separator(frame, rows[3]);
    draw_row(frame, rows[4], app, [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, positions: [Position; 3]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], app, positions[0]);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], app, positions[1]);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], app, positions[2]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let board: &Board = app.game().state().board();

    let (symbol, base_style) = match board.get(pos) {
        // Empty cells show their 1-9 key.
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let winning = app
        .highlight()
        .is_some_and(|cells| cells.contains(&pos));

    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && app.game().state().active() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
