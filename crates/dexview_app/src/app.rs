use std::io;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;

use dexview_core::{update, AppState, AppViewModel, Msg};
use dexview_engine::{EngineEvent, FetchSettings, PageProgress};
use dexview_logging::dex_info;

use crate::effects::{self, EffectRunner};
use crate::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
/// How close the cursor may get to the end of the table before the next page
/// is requested.
const SCROLL_AHEAD_ROWS: usize = 3;

pub fn run() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Owns the session state for the lifetime of the view: constructed on
/// entry, dropped on exit, nothing ambient.
struct App {
    state: AppState,
    effects: EffectRunner,
    /// Cursor into the filtered rows of the current view.
    cursor: usize,
    progress: Option<PageProgress>,
    last_page_at: Option<DateTime<Local>>,
    needs_render: bool,
    should_quit: bool,
}

impl App {
    fn new() -> Self {
        Self {
            state: AppState::new(),
            effects: EffectRunner::new(FetchSettings::default()),
            cursor: 0,
            progress: None,
            last_page_at: None,
            needs_render: true,
            should_quit: false,
        }
    }

    fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        dex_info!("dexview starting");
        // First page, mirroring load-on-mount.
        self.dispatch(Msg::MoreRequested);

        while !self.should_quit {
            if self.needs_render {
                let view = self.state.view();
                self.clamp_cursor(&view);
                let cursor = self.cursor;
                let progress = self.progress.clone();
                let last_page_at = self.last_page_at;
                terminal.draw(|frame| {
                    ui::render::draw(frame, &view, cursor, progress.as_ref(), last_page_at)
                })?;
                self.needs_render = false;
            }

            if event::poll(POLL_INTERVAL)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }

            self.pump_engine();
        }

        dex_info!("dexview exiting");
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let view = self.state.view();
        let modal_open = view.modal.is_some();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                if modal_open {
                    self.dispatch(Msg::SelectionDismissed);
                } else {
                    self.should_quit = true;
                }
            }
            KeyCode::Up | KeyCode::Char('k') if !modal_open => {
                self.cursor = self.cursor.saturating_sub(1);
                self.needs_render = true;
            }
            KeyCode::Down | KeyCode::Char('j') if !modal_open => {
                if !view.rows.is_empty() {
                    self.cursor = (self.cursor + 1).min(view.rows.len() - 1);
                }
                self.needs_render = true;
                self.maybe_request_more(&view);
            }
            KeyCode::Enter if !modal_open => {
                if let Some(row) = view.rows.get(self.cursor) {
                    self.dispatch(Msg::EntrySelected { index: row.index });
                }
            }
            KeyCode::Left | KeyCode::Char('h') if !modal_open => {
                let next = cycle_filter(&view, -1);
                self.dispatch(Msg::FilterChanged(next));
            }
            KeyCode::Right | KeyCode::Char('l') if !modal_open => {
                let next = cycle_filter(&view, 1);
                self.dispatch(Msg::FilterChanged(next));
            }
            _ => {}
        }
    }

    /// Scroll-position pagination trigger: ask for the next page once the
    /// cursor is near the end of what is shown. The core ignores the
    /// request while a page is in flight or after exhaustion.
    fn maybe_request_more(&mut self, view: &AppViewModel) {
        if view.rows.len().saturating_sub(self.cursor) <= SCROLL_AHEAD_ROWS {
            self.dispatch(Msg::MoreRequested);
        }
    }

    fn pump_engine(&mut self) {
        while let Some(event) = self.effects.try_recv() {
            match event {
                EngineEvent::Progress(progress) => {
                    self.progress = Some(progress);
                    self.needs_render = true;
                }
                EngineEvent::PageCompleted { offset, result } => {
                    self.progress = None;
                    self.needs_render = true;
                    if result.is_ok() {
                        self.last_page_at = Some(Local::now());
                    }
                    self.dispatch(effects::completed_to_msg(offset, result));
                }
            }
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.run(effects);
        if self.state.consume_dirty() {
            self.needs_render = true;
        }
    }

    /// The filtered row set can shrink under the cursor when the filter
    /// changes; keep it on a real row.
    fn clamp_cursor(&mut self, view: &AppViewModel) {
        if view.rows.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= view.rows.len() {
            self.cursor = view.rows.len() - 1;
        }
    }
}

/// Steps through "All" plus the enumerated category options, wrapping at
/// both ends.
fn cycle_filter(view: &AppViewModel, step: isize) -> Option<String> {
    let mut options: Vec<Option<String>> = vec![None];
    options.extend(view.filter_options.iter().cloned().map(Some));

    let current = options
        .iter()
        .position(|option| *option == view.filter)
        .unwrap_or(0);
    let len = options.len() as isize;
    let next = (current as isize + step).rem_euclid(len) as usize;
    options.swap_remove(next)
}
