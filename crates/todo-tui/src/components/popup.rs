use crate::theme::{highlight_text, label_text, normal_text, popup_bg, warning_text};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Rectangle of `width` columns and `height` rows centred in `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    let vertical = Layout::default()
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
        .split(vertical[1])[1]
}

/// Text entry box with a label and the terminal cursor placed at `cursor_pos`.
pub fn render_input_popup(
    frame: &mut Frame,
    title: &str,
    label: &str,
    input_text: &str,
    cursor_pos: usize,
) {
    let area = centered_rect(60, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(popup_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(label).style(highlight_text()), chunks[0]);

    let (offset, column) = input_scroll(cursor_pos, chunks[1].width.saturating_sub(2));
    let input = Paragraph::new(input_text)
        .style(normal_text())
        .scroll((0, offset))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(input, chunks[1]);

    frame.render_widget(
        Paragraph::new("ENTER: save  ESC: cancel").style(label_text()),
        chunks[2],
    );

    let cursor_x = chunks[1].x + column + 1;
    let cursor_y = chunks[1].y + 1;
    frame.set_cursor_position((cursor_x, cursor_y));
}

/// Horizontal scroll and cursor column that keep `cursor_pos` inside a box
/// `width` cells wide.
fn input_scroll(cursor_pos: usize, width: u16) -> (u16, u16) {
    let last = width.saturating_sub(1) as usize;
    let offset = cursor_pos.saturating_sub(last);
    let column = cursor_pos - offset;
    (
        offset.min(u16::MAX as usize) as u16,
        column.min(u16::MAX as usize) as u16,
    )
}

pub fn render_confirm_popup(frame: &mut Frame, title: &str, question: &str) {
    let area = centered_rect(40, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(popup_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    frame.render_widget(Paragraph::new(question).style(warning_text()), chunks[0]);
    frame.render_widget(
        Paragraph::new("y: confirm  n/ESC: cancel").style(label_text()),
        chunks[1],
    );
}
