use crate::app::{App, AppMode};
use crate::components::{render_confirm_popup, render_input_popup};
use crate::theme::*;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use todo_domain::{PersistenceGateway, Task};

const NORMAL_HELP: &str =
    "a:add e:edit d:remove space:toggle c/C:check/uncheck all D:clear u:undo r:redo q:quit";

pub fn render<G: PersistenceGateway>(app: &App<G>, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    render_tasks_panel(app, frame, chunks[0]);
    render_footer(app, frame, chunks[1]);

    match &app.mode {
        AppMode::Normal => {}
        AppMode::AddTask => render_input_popup(
            frame,
            "New Task",
            "What needs to be done?",
            &app.prompt.text(),
            app.prompt.cursor(),
        ),
        AppMode::EditTask(_) => render_input_popup(
            frame,
            "Edit Task",
            "Description:",
            &app.prompt.text(),
            app.prompt.cursor(),
        ),
        AppMode::ConfirmClear { prompt } => render_confirm_popup(frame, "Clear All", prompt),
    }

    if let Some(banner) = app.controller().presenter().banner() {
        banner.render(frame, frame.area());
    }
}

fn render_tasks_panel<G: PersistenceGateway>(app: &App<G>, frame: &mut Frame, area: Rect) {
    let tasks = app.controller().tasks();
    let selected = app.selection.get();

    let lines: Vec<Line> = if tasks.is_empty() {
        vec![Line::from(Span::styled(
            "Nothing to do. Press 'a' to add a task!",
            label_text(),
        ))]
    } else {
        tasks
            .iter()
            .enumerate()
            .map(|(idx, task)| task_line(task, selected == Some(idx)))
            .collect()
    };

    let block = Block::default()
        .title("Todos")
        .borders(Borders::ALL)
        .border_style(border());

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn task_line(task: &Task, selected: bool) -> Line<'_> {
    let marker = if task.completed { "[x] " } else { "[ ] " };
    let text_style = if task.completed {
        done_text()
    } else {
        normal_text()
    };

    let line = Line::from(vec![
        Span::styled(marker, highlight_text()),
        Span::styled(task.description.as_str(), text_style),
    ]);

    if selected {
        line.style(selected_item())
    } else {
        line
    }
}

fn render_footer<G: PersistenceGateway>(app: &App<G>, frame: &mut Frame, area: Rect) {
    let controller = app.controller();
    let tasks = controller.tasks();
    let history = controller.history();

    let mut spans = vec![
        Span::styled(format!("Total: {}", tasks.len()), normal_text()),
        Span::raw("  "),
        Span::styled(
            format!("Completed: {}", tasks.completed_count()),
            normal_text(),
        ),
        Span::raw("  "),
        Span::styled(
            format!("History: {}/{}", history.current_index() + 1, history.len()),
            label_text(),
        ),
    ];
    if history.has_undone() {
        spans.push(Span::styled(" (undone)", highlight_text()));
    }
    if app.mode == AppMode::Normal {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(NORMAL_HELP, label_text()));
    }

    let footer = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}
