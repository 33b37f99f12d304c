//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. Every handled event is
//! followed by a full redraw from [`AppState`].

use crate::{
    event::{self, AppEvent},
    layout::Regions,
    theme::Theme,
    widgets::{
        help::HelpPopup,
        results::Results,
        search_bar::{SearchButton, SearchInput, SearchInputState},
    },
};
use crossterm::{
    event::{self as ct_event, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Alignment,
    text::Line,
    widgets::{Block, BorderType, Paragraph},
    Frame, Terminal,
};
use std::{io, time::Duration};
use xdict_core::{config::Config, Dictionary, LookupView};

const HINT: &str = " Enter: search   Tab: focus   F1: help   Esc: quit ";

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Button,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Button,
            Focus::Button => Focus::Input,
        }
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub view: LookupView,
    pub input: SearchInputState,
    pub focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    /// Geometry of the last drawn frame, used for mouse hit-testing.
    pub regions: Regions,
    pub quit: bool,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(config: Config, theme: Theme) -> Self {
        let state = AppState {
            view: LookupView::new(Dictionary::builtin()),
            input: SearchInputState::default(),
            focus: Focus::Input,
            theme,
            config,
            show_help: false,
            regions: Regions::default(),
            quit: false,
        };
        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.draw(terminal)?;

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(50))? {
                let raw = ct_event::read()?;
                if let Event::Key(key) = &raw {
                    // Some terminals also report releases
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                }
                let app_event = match self.state.focus {
                    Focus::Input => event::to_app_event_insert(raw),
                    Focus::Button => event::to_app_event(raw),
                };
                if let Some(ev) = app_event {
                    tracing::debug!(focus = ?self.state.focus, event = ?ev, "event");
                    self.handle(ev);
                }
            }
        }
        Ok(())
    }

    /// Recompute the layout for the current terminal size and render.
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        B::Error: std::error::Error + Send + Sync + 'static,
    {
        let s = &mut self.state;
        terminal.draw(|frame| {
            s.regions = Regions::compute(frame.area(), s.config.ui.card_width, &s.config.ui.button);
            draw(frame, s);
        })?;
        Ok(())
    }

    /// Apply one event to the application state.
    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Help | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        match event {
            AppEvent::Quit | AppEvent::Escape => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::Help => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::FocusNext => {
                let next = s.focus.next();
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            AppEvent::Click(col, row) => {
                if s.regions.hit_button(col, row) {
                    tracing::debug!("button clicked");
                    s.focus = Focus::Button;
                    search(s);
                } else if s.regions.hit_input(col, row) {
                    s.focus = Focus::Input;
                }
            }

            // Terminal resize is handled by the next draw
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

fn search(s: &mut AppState) {
    s.view.on_search_triggered();
    tracing::debug!(outcome = %s.view.outcome(), "search");
}

/// Route an event to the control that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::Input => {
            if event == AppEvent::Enter {
                search(s);
            } else if let Some(next) = s.input.edit(s.view.input_text(), &event) {
                s.view.on_input_change(next);
            }
        }
        Focus::Button => {
            if matches!(event, AppEvent::Enter | AppEvent::Char(' ')) {
                search(s);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let r = &state.regions;
    let ui = &state.config.ui;
    let theme = &state.theme;

    frame.render_widget(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(theme.border_unfocused),
        r.card,
    );
    frame.render_widget(
        Paragraph::new(Line::styled(ui.title.as_str(), theme.title)).alignment(Alignment::Center),
        r.title,
    );

    let input = SearchInput::new(
        state.view.input_text(),
        &state.input,
        &ui.placeholder,
        state.focus == Focus::Input,
        theme,
    );
    let cursor = input.cursor_position(r.input);
    frame.render_widget(input, r.input);
    frame.render_widget(
        SearchButton::new(&ui.button, state.focus == Focus::Button, theme),
        r.button,
    );
    frame.render_widget(Results::new(&state.view, theme), r.results);
    frame.render_widget(
        Paragraph::new(Line::styled(HINT, theme.hint)).alignment(Alignment::Center),
        r.hint,
    );

    if state.show_help {
        frame.render_widget(HelpPopup::new(theme), frame.area());
        return;
    }

    if state.focus == Focus::Input {
        frame.set_cursor_position(cursor);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
