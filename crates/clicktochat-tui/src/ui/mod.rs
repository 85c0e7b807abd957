use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, Focus, MESSAGE_VISIBLE_LINES};

const LINK_PLACEHOLDER: &str = "Type a phone number or a message to build a link.";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let size = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Length(MESSAGE_VISIBLE_LINES as u16 + 2),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(size);

    render_link_card(frame, chunks[0], app);
    render_phone(frame, chunks[1], app);
    render_message(frame, chunks[2], app);
    render_buttons(frame, chunks[3], app);
    render_footer(frame, chunks[5], app);

    if app.show_help {
        render_help(frame, size, app.saves_on_exit);
    }
}

fn render_link_card(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Chat link");
    let line = if app.compose.is_link_blank() {
        Line::from(Span::styled(
            LINK_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(Span::styled(
            app.compose.link().to_string(),
            Style::default().fg(Color::Cyan),
        ))
    };
    let paragraph = Paragraph::new(line)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_phone(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let focused = app.focus == Focus::Phone;
    let paragraph =
        Paragraph::new(app.compose.phone().to_string()).block(field_block("Phone", focused));
    frame.render_widget(paragraph, area);

    if focused {
        let width = app.compose.phone().chars().count() as u16;
        place_cursor(frame, area, width, 0);
    }
}

fn render_message(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let focused = app.focus == Focus::Message;
    let lines: Vec<&str> = app.compose.message().split('\n').collect();
    let start = lines.len().saturating_sub(MESSAGE_VISIBLE_LINES);
    let visible: Vec<Line> = lines[start..]
        .iter()
        .map(|line| Line::from(line.to_string()))
        .collect();
    let paragraph = Paragraph::new(visible).block(field_block("Message", focused));
    frame.render_widget(paragraph, area);

    if focused {
        let row = (lines.len() - start).saturating_sub(1) as u16;
        let width = lines.last().map(|line| line.chars().count()).unwrap_or(0) as u16;
        place_cursor(frame, area, width, row);
    }
}

fn render_buttons(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let enabled = app.actions_enabled();
    let share = button_span("[Share link]", app.focus == Focus::Share, enabled, Color::Blue);
    let open = button_span("[Open chat]", app.focus == Focus::Open, enabled, Color::Green);
    let line = Line::from(vec![share, Span::raw("  "), open]).right_aligned();
    frame.render_widget(Paragraph::new(line), area);
}

fn render_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let hint = match app.focus {
        Focus::Phone => "tab next  enter message  ctrl+u clear  ctrl+o open  ctrl+s share  F1 help  esc quit",
        Focus::Message => "tab next  enter newline  ctrl+u clear  ctrl+w word  ctrl+o open  ctrl+s share  esc quit",
        Focus::Share | Focus::Open => "tab next  left/right switch  enter activate  F1 help  esc quit",
    };

    let mut lines = vec![Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    ))];

    if let Some(err) = &app.error {
        lines.push(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )));
    } else if let Some(status) = &app.status {
        lines.push(Line::from(Span::styled(
            status.clone(),
            Style::default().fg(Color::Green),
        )));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
    frame.render_widget(paragraph, area);
}

fn render_help(frame: &mut Frame<'_>, area: Rect, saves_on_exit: bool) {
    let modal = centered_rect(70, 60, area);
    frame.render_widget(Clear, modal);

    let mut text = vec![
        Line::from("Global: esc quit, Ctrl+C quit, F1 help"),
        Line::from("Fields: tab/shift+tab move, Ctrl+U clear field, Ctrl+W delete word"),
        Line::from("Phone: enter jumps to the message; anything but digits is ignored"),
        Line::from("Message: enter inserts a new line"),
        Line::from("Links: Ctrl+O open chat, Ctrl+S share link (disabled while empty)"),
        Line::from(""),
    ];
    if saves_on_exit {
        text.push(Line::from("The phone and message are saved when you quit."));
    } else {
        text.push(Line::from("Saving is off for this session."));
    }

    let paragraph = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, modal);
}

fn field_block(title: &str, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(style)
        .title(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
}

fn button_span(label: &'static str, focused: bool, enabled: bool, color: Color) -> Span<'static> {
    let style = match (enabled, focused) {
        (false, true) => Style::default().fg(Color::Black).bg(Color::DarkGray),
        (false, false) => Style::default().fg(Color::DarkGray),
        (true, true) => Style::default().fg(Color::Black).bg(color),
        (true, false) => Style::default().fg(color),
    };
    Span::styled(label, style)
}

fn place_cursor(frame: &mut Frame<'_>, area: Rect, column: u16, row: u16) {
    let max_x = area.x + area.width.saturating_sub(2);
    let x = (area.x + 1).saturating_add(column).min(max_x);
    let y = area.y + 1 + row;
    frame.set_cursor_position(Position::new(x, y));
}

fn centered_rect(percent_x: u16, percent_y: u16, rect: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(rect);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
