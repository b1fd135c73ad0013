//! TUI application state and logic

use crate::commands::{FindOutcome, FindResult, find_words};
use crate::core::{GraphStats, WordStore};
use crate::output::formatters::steps_label;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Number of past queries kept for the side panel
const RECENT_LIMIT: usize = 8;

/// Application state
pub struct App<'a> {
    pub store: &'a WordStore,
    pub stats: GraphStats,
    pub start_input: String,
    pub end_input: String,
    pub focus: Field,
    pub last_result: Option<FindResult<'a>>,
    pub recent: Vec<RecentQuery>,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

/// Which input box receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentQuery {
    pub start: String,
    pub end: String,
    pub steps: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(store: &'a WordStore) -> Self {
        let stats = store.stats();

        Self {
            store,
            stats,
            start_input: String::new(),
            end_input: String::new(),
            focus: Field::Start,
            last_result: None,
            recent: Vec::new(),
            messages: vec![
                Message {
                    text: format!(
                        "Loaded {} words with {} edges.",
                        stats.words, stats.edges
                    ),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a start word, TAB to the end word, Enter to search.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
        }
    }

    /// The input box that currently has focus
    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Field::Start => &mut self.start_input,
            Field::End => &mut self.end_input,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_alphabetic() {
            self.focused_input().push(c.to_ascii_lowercase());
        }
    }

    pub fn backspace(&mut self) {
        self.focused_input().pop();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Start => Field::End,
            Field::End => Field::Start,
        };
    }

    pub fn clear(&mut self) {
        self.start_input.clear();
        self.end_input.clear();
        self.focus = Field::Start;
        self.last_result = None;
    }

    /// Enter on the start box moves on; Enter on the end box searches
    pub fn submit(&mut self) {
        if self.focus == Field::Start && self.end_input.is_empty() {
            self.focus = Field::End;
            return;
        }

        if self.start_input.is_empty() || self.end_input.is_empty() {
            self.add_message("Enter both a start and an end word.", MessageStyle::Error);
            return;
        }

        self.run_query();
    }

    fn run_query(&mut self) {
        let result = match find_words(self.store, &self.start_input, &self.end_input) {
            Ok(result) => result,
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        let (text, style) = match result.outcome {
            FindOutcome::Found => {
                let steps = result.steps().unwrap_or(0);
                (
                    format!(
                        "{} -> {}: {steps} {}",
                        result.start,
                        result.end,
                        steps_label(steps)
                    ),
                    MessageStyle::Success,
                )
            }
            FindOutcome::UnknownStart => (
                format!("'{}' is not in the dictionary", result.start),
                MessageStyle::Error,
            ),
            FindOutcome::UnknownEnd => (
                format!("'{}' is not in the dictionary", result.end),
                MessageStyle::Error,
            ),
            FindOutcome::Unreachable => (
                format!("No ladder from '{}' to '{}'", result.start, result.end),
                MessageStyle::Error,
            ),
        };
        self.add_message(&text, style);

        self.recent.push(RecentQuery {
            start: result.start.clone(),
            end: result.end.clone(),
            steps: result.steps(),
        });
        if self.recent.len() > RECENT_LIMIT {
            self.recent.remove(0);
        }

        self.last_result = Some(result);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Esc => app.should_quit = true,
                KeyCode::Delete => app.clear(),
                KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
                KeyCode::Char(c) => app.push_char(c),
                KeyCode::Backspace => app.backspace(),
                KeyCode::Enter => app.submit(),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::SubstituteRule;

    fn store() -> WordStore {
        let mut store = WordStore::from_words(["cat", "cot", "cog", "xyz"]);
        store.apply(&SubstituteRule);
        store
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.push_char(c);
        }
    }

    #[test]
    fn typing_fills_focused_field() {
        let store = store();
        let mut app = App::new(&store);

        type_word(&mut app, "Ca1üt");
        app.toggle_focus();
        type_word(&mut app, "cog");

        assert_eq!(app.start_input, "cat");
        assert_eq!(app.end_input, "cog");
    }

    #[test]
    fn enter_moves_then_searches() {
        let store = store();
        let mut app = App::new(&store);

        type_word(&mut app, "cat");
        app.submit();
        assert_eq!(app.focus, Field::End);
        assert!(app.last_result.is_none());

        type_word(&mut app, "cog");
        app.submit();

        let result = app.last_result.as_ref().unwrap();
        assert_eq!(result.ladder, vec!["cat", "cot", "cog"]);
        assert_eq!(app.recent.len(), 1);
        assert_eq!(app.recent[0].steps, Some(2));
    }

    #[test]
    fn one_step_ladder_uses_singular() {
        let store = store();
        let mut app = App::new(&store);

        type_word(&mut app, "cat");
        app.toggle_focus();
        type_word(&mut app, "cot");
        app.submit();

        let last = app.messages.last().unwrap();
        assert_eq!(last.text, "cat -> cot: 1 step");
        assert_eq!(last.style, MessageStyle::Success);
    }

    #[test]
    fn unreachable_query_is_reported() {
        let store = store();
        let mut app = App::new(&store);

        type_word(&mut app, "cat");
        app.toggle_focus();
        type_word(&mut app, "xyz");
        app.submit();

        assert_eq!(app.recent[0].steps, None);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn backspace_and_clear() {
        let store = store();
        let mut app = App::new(&store);

        type_word(&mut app, "cats");
        app.backspace();
        assert_eq!(app.start_input, "cat");

        app.toggle_focus();
        type_word(&mut app, "cot");
        app.clear();
        assert!(app.start_input.is_empty());
        assert!(app.end_input.is_empty());
        assert_eq!(app.focus, Field::Start);
    }

    #[test]
    fn recent_queries_are_bounded() {
        let store = store();
        let mut app = App::new(&store);

        type_word(&mut app, "cat");
        app.toggle_focus();
        type_word(&mut app, "cot");
        for _ in 0..(RECENT_LIMIT + 3) {
            app.submit();
        }

        assert_eq!(app.recent.len(), RECENT_LIMIT);
        assert!(app.messages.len() <= 5);
    }
}
