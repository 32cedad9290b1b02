//! Stateless UI rendering.

use chrono::{DateTime, Local, Utc};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table},
};
use tally_tictactoe::{Player, Position, Square};

use super::app::App;

const CELL_WIDTH: u16 = 7;
const BOARD_WIDTH: u16 = 31;
const BOARD_HEIGHT: u16 = 7 + 2;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(10),   // Board and side panels
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tally - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);

    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(3)])
        .split(body[1]);
    draw_score(frame, panels[0], app);
    draw_history(frame, panels[1], app);

    let status = Paragraph::new(app.session().game().status_string())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows/hjkl move  enter/space place  1-9 place  n new game  r reset all  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let block = Block::default().title("Board").borders(Borders::ALL);
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let separator = "─".repeat((CELL_WIDTH * 3 + 2) as usize);
    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        if row > 0 {
            lines.push(Line::styled(separator.clone(), Style::default().fg(Color::DarkGray)));
        }
        let mut spans = Vec::with_capacity(5);
        for col in 0..3 {
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }
            if let Some(pos) = Position::from_row_col(row, col) {
                spans.push(cell_span(app, pos));
            }
        }
        lines.push(Line::from(spans));
    }
    lines.push(Line::default());
    lines.push(Line::styled(cursor_hint(app), Style::default().fg(Color::Gray)));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Describes the square under the cursor, e.g. "Center: Square with X".
fn cursor_hint(app: &App) -> String {
    let pos = app.cursor();
    format!("{}: {}", pos.label(), app.session().board().get(pos).label())
}

fn cell_span(app: &App, pos: Position) -> Span<'static> {
    let (symbol, base_style) = match app.session().board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ),
    };

    let on_win_line = app
        .session()
        .outcome()
        .line()
        .is_some_and(|line| line.contains(pos));

    let style = if on_win_line {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == app.cursor() && !app.session().game().is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    Span::styled(format!("{:^width$}", symbol, width = CELL_WIDTH as usize), style)
}

fn draw_score(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.session().scoreboard();
    let settings = app.settings();

    let rows = vec![
        Row::new(vec![
            format!("{} (X)", settings.name_for(Player::X)),
            score.x_wins().to_string(),
        ]),
        Row::new(vec![
            format!("{} (O)", settings.name_for(Player::O)),
            score.o_wins().to_string(),
        ]),
        Row::new(vec!["Draws".to_string(), score.draws().to_string()]),
    ];

    let table = Table::new(rows, [Constraint::Min(12), Constraint::Length(6)])
        .header(Row::new(vec!["Player", "Wins"]).style(Style::default().add_modifier(Modifier::BOLD)))
        .block(Block::default().title("Score Board").borders(Borders::ALL));
    frame.render_widget(table, area);
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().title("Game History").borders(Borders::ALL);
    let history = app.session().history();

    if history.is_empty() {
        let empty = Paragraph::new("No games played yet")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = history
        .newest_first()
        .take(*app.settings().history_limit())
        .map(|entry| {
            let style = match entry.conclusion().winner() {
                Some(Player::X) => Style::default().fg(Color::Blue),
                Some(Player::O) => Style::default().fg(Color::Magenta),
                None => Style::default().fg(Color::Gray),
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<14}", entry.label()), style),
                Span::raw(local_time(entry.played_at())),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

/// History timestamps are stored in UTC and shown in the local zone.
fn local_time(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string()
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_fresh_screen() {
        let app = App::new(Settings::default());
        let screen = render(&app);
        assert!(screen.contains("Tally - Tic Tac Toe"));
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Score Board"));
        assert!(screen.contains("Pushpa Raj (X)"));
        assert!(screen.contains("Appanna (O)"));
        assert!(screen.contains("Draws"));
        assert!(screen.contains("No games played yet"));
    }

    #[test]
    fn test_cursor_hint_names_the_square() {
        let mut app = App::new(Settings::default());
        assert!(render(&app).contains("Center: Empty square"));

        app.handle_key(KeyCode::Enter);
        assert!(render(&app).contains("Center: Square with X"));

        app.handle_key(KeyCode::Up);
        assert!(render(&app).contains("Top-center: Empty square"));
    }

    #[test]
    fn test_history_time_is_local() {
        use chrono::TimeZone;

        let at = Utc.with_ymd_and_hms(2024, 3, 9, 18, 30, 5).unwrap();
        let expected = at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string();
        assert_eq!(local_time(&at), expected);
        assert_eq!(local_time(&at).len(), "2024-03-09 18:30:05".len());
    }

    #[test]
    fn test_finished_game_screen() {
        let mut app = App::new(Settings::default());
        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(c));
        }
        let screen = render(&app);
        assert!(screen.contains("Player X wins!"));
        assert!(screen.contains("Player X won"));
        assert!(!screen.contains("No games played yet"));
    }

    #[test]
    fn test_winning_line_is_highlighted() {
        let mut app = App::new(Settings::default());
        for c in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(c));
        }
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let highlighted = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .filter(|cell| cell.symbol() == "X" && cell.bg == Color::Green)
            .count();
        assert_eq!(highlighted, 3);
    }
}
