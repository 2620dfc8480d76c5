//! UI rendering using ratatui
//!
//! Screens:
//! - Menu: mode selection and player names
//! - Game: board, racks, scores, suggestions
//! - Paused: pause options over a dimmed hint
//! - GameOver: final scores and winner

use crate::app::{App, MenuOption};
use crate::game::{BonusKind, EndReason, GameState, Position, BOARD_SIZE};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the appropriate screen based on app state
pub fn render(frame: &mut Frame, app: &App) {
    if app.in_menu {
        render_menu(frame, app);
        return;
    }
    match app.game.state() {
        GameState::Paused => render_paused(frame, app),
        GameState::GameOver => render_game_over(frame, app),
        _ => render_game(frame, app),
    }
}

/// Render the main menu
fn render_menu(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),  // Logo
            Constraint::Length(4),  // Player names
            Constraint::Length(1),  // Spacer
            Constraint::Min(6),     // Menu options
            Constraint::Length(2),  // Footer
        ])
        .margin(2)
        .split(area);

    let logo = r#"
  ___ ___ ___  ___ ___ ___  _   ___ _  __
 / __| _ \ _ \/ __/ __| _ \/_\ / __| |/ /
| (__|   /(_) \__ \__ \   / _ \ (__| ' <
 \___|_|_\___/|___/___/_|_\_/ \_\___|_|\_\
"#;
    let logo_widget = Paragraph::new(logo)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(logo_widget, layout[0]);

    let mut name_lines = Vec::new();
    for (idx, name) in app.name_inputs.iter().enumerate() {
        let editing = app.editing_name == Some(idx);
        let text = if editing {
            format!("Player {}: [{}]_", idx + 1, name)
        } else {
            format!("Player {}: {}", idx + 1, name)
        };
        let style = if editing {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        name_lines.push(Line::from(Span::styled(text, style)));
    }
    let names_widget = Paragraph::new(name_lines).alignment(Alignment::Center);
    frame.render_widget(names_widget, layout[1]);

    let items: Vec<ListItem> = MenuOption::all()
        .iter()
        .enumerate()
        .map(|(i, opt)| {
            let style = if i == app.menu_selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if i == app.menu_selected { "> " } else { "  " };
            ListItem::new(format!("{}{}", prefix, opt.label())).style(style)
        })
        .collect();
    let menu = List::new(items).block(Block::default());
    frame.render_widget(menu, centered_column(layout[3], 24));

    let footer = Paragraph::new("Up/Down select · Enter start · Tab edit names · Esc quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);
}

/// Render the in-game screen: board left, status panel right, feedback
/// line along the bottom.
fn render_game(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(17), Constraint::Length(3)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_SIZE as u16 * 3 + 2), Constraint::Min(28)])
        .split(rows[0]);

    let board = Paragraph::new(board_lines(app)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Board"),
    );
    frame.render_widget(board, columns[0]);

    render_side_panel(frame, app, columns[1]);

    let feedback = Paragraph::new(app.feedback.as_str())
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(feedback, rows[1]);
}

fn board_lines(app: &App) -> Vec<Line<'static>> {
    let board = app.game.board();
    let tentative = app.game.tentative_cells();
    let mut lines = Vec::with_capacity(BOARD_SIZE);
    for row in 0..BOARD_SIZE {
        let mut spans = Vec::with_capacity(BOARD_SIZE);
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            let mut style;
            let text;
            match board.tile(row, col) {
                Some(tile) => {
                    text = format!(" {} ", tile.letter());
                    style = if tentative.contains(&pos) {
                        Style::default().fg(Color::Black).bg(Color::Yellow).bold()
                    } else {
                        Style::default().fg(Color::White).bg(Color::DarkGray).bold()
                    };
                }
                None => {
                    let kind = board.bonus(row, col);
                    text = format!("{:^3}", bonus_glyph(kind));
                    style = Style::default().fg(bonus_color(kind));
                }
            }
            if pos == app.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(text, style));
        }
        lines.push(Line::from(spans));
    }
    lines
}

fn bonus_glyph(kind: BonusKind) -> &'static str {
    match kind {
        BonusKind::Normal => "·",
        _ => kind.label(),
    }
}

fn bonus_color(kind: BonusKind) -> Color {
    match kind {
        BonusKind::Normal => Color::DarkGray,
        BonusKind::DoubleLetter => Color::Cyan,
        BonusKind::TripleLetter => Color::Blue,
        BonusKind::DoubleWord => Color::Magenta,
        BonusKind::TripleWord => Color::Red,
        BonusKind::Center => Color::Yellow,
    }
}

fn render_side_panel(frame: &mut Frame, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Scores
            Constraint::Length(4), // Rack
            Constraint::Length(4), // Supply / counters
            Constraint::Min(4),    // Suggestions
            Constraint::Length(3), // Help
        ])
        .split(area);

    let mut score_lines = Vec::new();
    for idx in 0..2 {
        let player = app.game.player(idx);
        let marker = if idx == app.game.current_player_index() {
            "> "
        } else {
            "  "
        };
        let style = if idx == app.game.current_player_index() {
            Style::default().fg(Color::Yellow).bold()
        } else {
            Style::default().fg(Color::White)
        };
        score_lines.push(Line::from(Span::styled(
            format!("{}{:<12} {:>5}", marker, player.name(), player.score()),
            style,
        )));
    }
    let scores = Paragraph::new(score_lines)
        .block(Block::default().borders(Borders::ALL).title("Scores"));
    frame.render_widget(scores, layout[0]);

    frame.render_widget(rack_widget(app), layout[1]);

    let status = Paragraph::new(vec![
        Line::from(format!("Bag: {} tiles", app.game.bag_count())),
        Line::from(format!(
            "Passes: {}  Failures: {}",
            app.game.consecutive_passes(),
            app.game.consecutive_failures()
        )),
    ])
    .block(Block::default().borders(Borders::ALL).title(app.game.mode().label()));
    frame.render_widget(status, layout[2]);

    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .map(|w| ListItem::new(w.as_str()).style(Style::default().fg(Color::Green)))
        .collect();
    let suggestions =
        List::new(items).block(Block::default().borders(Borders::ALL).title("Words"));
    frame.render_widget(suggestions, layout[3]);

    let help = Paragraph::new(
        "arrows move · tab tile · space place · enter play\nbksp undo · x swap · s pass · esc cancel/pause",
    )
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, layout[4]);
}

fn rack_widget(app: &App) -> Paragraph<'static> {
    let rack = app.game.current_player().rack();
    let mut letter_spans = Vec::new();
    let mut point_spans = Vec::new();
    for (i, tile) in rack.tiles().iter().enumerate() {
        let picked = app.exchange_picks.contains(&i);
        let mut style = if picked {
            Style::default().fg(Color::Black).bg(Color::Green)
        } else {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        };
        if !app.exchange_mode && i == app.rack_selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        let letter = if tile.is_blank() { '_' } else { tile.letter() };
        letter_spans.push(Span::styled(format!(" {} ", letter), style));
        letter_spans.push(Span::raw(" "));
        point_spans.push(Span::styled(
            format!("{:^3} ", tile.points()),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let title = if app.exchange_mode { "Swap (1-7)" } else { "Rack" };
    Paragraph::new(vec![Line::from(letter_spans), Line::from(point_spans)])
        .block(Block::default().borders(Borders::ALL).title(title))
}

/// Render the pause screen
fn render_paused(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let lines = vec![
        Line::from(Span::styled(
            "PAUSED",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(format!(
            "{} {} — {} {}",
            app.game.player(0).name(),
            app.game.player(0).score(),
            app.game.player(1).name(),
            app.game.player(1).score(),
        )),
        Line::from(""),
        Line::from("r resume · g give up · q quit"),
    ];
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, centered_rows(area, 6));
}

/// Render the end-of-game summary
fn render_game_over(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let mut lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
    ];
    if let Some(outcome) = app.game.outcome() {
        lines.push(Line::from(end_reason_text(outcome.reason)));
        lines.push(Line::from(""));
        for idx in 0..2 {
            let player = app.game.player(idx);
            lines.push(Line::from(format!(
                "{:<12} {:>5}",
                player.name(),
                player.score()
            )));
        }
        lines.push(Line::from(""));
        let verdict = match outcome.winner {
            Some(idx) => format!("{} wins!", app.game.player(idx).name()),
            None => "A draw.".to_string(),
        };
        lines.push(Line::from(Span::styled(
            verdict,
            Style::default().fg(Color::Yellow).bold(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter for menu · q quit",
        Style::default().fg(Color::DarkGray),
    )));
    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(widget, centered_rows(area, 12));
}

fn end_reason_text(reason: EndReason) -> &'static str {
    match reason {
        EndReason::BagExhausted => "All tiles played out",
        EndReason::PassLimit => "Too many passes in a row",
        EndReason::FailureLimit => "Forfeited after repeated invalid words",
        EndReason::Surrender => "Surrendered",
    }
}

/// A horizontally centered column of the given width.
fn centered_column(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

/// A vertically centered band of the given height.
fn centered_rows(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    Rect {
        y: area.y + (area.height - height) / 2,
        height,
        ..area
    }
}
