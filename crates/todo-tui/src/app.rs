use crate::{
    events::{should_quit, Event, EventHandler},
    prompt::Prompt,
    selection::SelectionState,
    ui, TuiPresenter,
};
use crossterm::{
    event::{KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use todo_core::TodoResult;
use todo_domain::{Confirm, FixedAnswer, HistoryController, Outcome, PersistenceGateway};

const TICK_RATE: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    AddTask,
    EditTask(usize),
    /// Waiting for y/n before a hard clear.
    ConfirmClear { prompt: String },
}

/// Records the question instead of answering it.
///
/// The terminal cannot block inside the controller call, so clear-all is
/// asked twice: once with this to learn whether a confirmation is needed,
/// and again with the user's answer once the popup is dismissed.
#[derive(Default)]
struct DeferredConfirm {
    asked: Option<String>,
}

impl Confirm for DeferredConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.asked = Some(prompt.to_string());
        false
    }
}

pub struct App<G: PersistenceGateway> {
    pub should_quit: bool,
    pub mode: AppMode,
    pub prompt: Prompt,
    pub selection: SelectionState,
    controller: HistoryController<G, TuiPresenter>,
    notice_ttl: Duration,
}

impl<G: PersistenceGateway> App<G> {
    pub fn new(gateway: G, notice_ttl: Duration) -> TodoResult<Self> {
        let controller = HistoryController::open(gateway, TuiPresenter::new())?;
        let mut selection = SelectionState::new();
        selection.clamp(controller.tasks().len());

        Ok(Self {
            should_quit: false,
            mode: AppMode::Normal,
            prompt: Prompt::new(),
            selection,
            controller,
            notice_ttl,
        })
    }

    pub fn controller(&self) -> &HistoryController<G, TuiPresenter> {
        &self.controller
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Hide the banner once it has outlived the notice TTL.
    pub fn tick(&mut self) {
        self.controller.presenter_mut().expire(self.notice_ttl);
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> TodoResult<()> {
        match self.mode.clone() {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::AddTask => self.handle_prompt_key(key, None),
            AppMode::EditTask(index) => self.handle_prompt_key(key, Some(index)),
            AppMode::ConfirmClear { .. } => self.handle_confirm_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> TodoResult<()> {
        if should_quit(&key) {
            self.quit();
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('z') if ctrl => {
                self.after(|c| c.undo())?;
            }
            KeyCode::Char('y') if ctrl => {
                self.after(|c| c.redo())?;
            }
            KeyCode::Char('a') | KeyCode::Char('n') => {
                self.prompt.clear();
                self.mode = AppMode::AddTask;
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(index) = self.selection.get() {
                    if let Some(task) = self.controller.tasks().get(index) {
                        self.prompt = Prompt::with_text(&task.description);
                        self.mode = AppMode::EditTask(index);
                    }
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(index) = self.selection.get() {
                    self.after(|c| c.remove_task(index))?;
                }
            }
            KeyCode::Char(' ') | KeyCode::Char('x') => {
                if let Some(index) = self.selection.get() {
                    self.after(|c| c.toggle_task(index))?;
                }
            }
            KeyCode::Char('c') => {
                self.after(|c| c.check_all())?;
            }
            KeyCode::Char('C') => {
                self.after(|c| c.uncheck_all())?;
            }
            KeyCode::Char('D') => self.request_clear()?,
            KeyCode::Char('u') => {
                self.after(|c| c.undo())?;
            }
            KeyCode::Char('r') => {
                self.after(|c| c.redo())?;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.selection.next(self.controller.tasks().len());
            }
            KeyCode::Char('k') | KeyCode::Up => self.selection.prev(),
            KeyCode::Char('G') | KeyCode::End => {
                self.selection.jump_to_last(self.controller.tasks().len());
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.selection.set(None);
                self.selection.clamp(self.controller.tasks().len());
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_prompt_key(&mut self, key: KeyEvent, editing: Option<usize>) -> TodoResult<()> {
        match key.code {
            KeyCode::Esc => {
                self.prompt.clear();
                self.mode = AppMode::Normal;
            }
            KeyCode::Enter => {
                let text = self.prompt.text();
                self.prompt.clear();
                self.mode = AppMode::Normal;
                match editing {
                    Some(index) => {
                        self.after(|c| c.edit_task(index, &text))?;
                    }
                    None => {
                        let outcome = self.after(|c| c.add_task(&text))?;
                        if outcome.is_applied() {
                            self.selection.jump_to_last(self.controller.tasks().len());
                        }
                    }
                }
            }
            KeyCode::Char(c) => self.prompt.insert(c),
            KeyCode::Backspace => self.prompt.backspace(),
            KeyCode::Delete => self.prompt.delete(),
            KeyCode::Left => self.prompt.left(),
            KeyCode::Right => self.prompt.right(),
            KeyCode::Home => self.prompt.home(),
            KeyCode::End => self.prompt.end(),
            _ => {}
        }
        Ok(())
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) -> TodoResult<()> {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.mode = AppMode::Normal;
                self.after(|c| c.clear_all(&mut FixedAnswer(true)))?;
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                tracing::debug!("Clear all cancelled");
                self.mode = AppMode::Normal;
            }
            _ => {}
        }
        Ok(())
    }

    fn request_clear(&mut self) -> TodoResult<()> {
        let mut deferred = DeferredConfirm::default();
        self.controller.clear_all(&mut deferred)?;
        if let Some(prompt) = deferred.asked {
            self.mode = AppMode::ConfirmClear { prompt };
        }
        Ok(())
    }

    /// Run a controller operation, then pull the selection back into range.
    fn after<F>(&mut self, op: F) -> TodoResult<Outcome>
    where
        F: FnOnce(&mut HistoryController<G, TuiPresenter>) -> TodoResult<Outcome>,
    {
        let outcome = op(&mut self.controller)?;
        self.selection.clamp(self.controller.tasks().len());
        Ok(outcome)
    }

    pub async fn run(&mut self) -> TodoResult<()> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal).await;
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> TodoResult<()> {
        let mut events = EventHandler::new(TICK_RATE);

        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key_event(key)?,
                Some(Event::Tick) => self.tick(),
                Some(Event::Resize) => {}
                None => break,
            }
        }

        events.stop();
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
