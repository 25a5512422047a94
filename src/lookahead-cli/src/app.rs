//! Interactive loop of the demo host.

use std::io::{self, Stdout};

use anyhow::Context;
use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use lookahead_widget::prelude::*;
use lookahead_widget::style::{ACCENT, TEXT_DIM};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tracing::{debug, info};

use crate::catalog::Catalog;

/// Extra key hint of the demo host.
const QUIT_HINT: (&str, &str) = ("Ctrl+C", "Quit");

/// Demo host state.
pub struct App {
    widget: AutocompleteComponent,
    catalog: Catalog,
}

impl App {
    pub fn new(config: AutocompleteConfig, catalog: Catalog) -> Self {
        let mut widget = AutocompleteComponent::new(config);
        widget.on_show();
        Self { widget, catalog }
    }

    /// Run until a value is selected or the user quits.
    pub fn run(mut self) -> anyhow::Result<Option<String>> {
        let mut terminal = setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> anyhow::Result<Option<String>> {
        loop {
            terminal.draw(|frame| {
                let [title, body, hints] = Layout::vertical([
                    Constraint::Length(2),
                    Constraint::Min(1),
                    Constraint::Length(1),
                ])
                .areas(frame.area());

                frame.render_widget(self.title(), title);
                self.widget.render(body, frame.buffer_mut());
                frame.render_widget(self.hints(), hints);
            })?;

            let result = match event::read().context("Failed to read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if is_quit(&key) {
                        info!("quit without selection");
                        return Ok(None);
                    }
                    self.widget.handle_key(key)
                }
                Event::Mouse(mouse) => self.widget.handle_mouse(mouse),
                Event::Paste(text) => self.widget.handle_paste(&text),
                _ => ComponentResult::NotHandled,
            };

            if let Some(selected) = self.apply(result) {
                return Ok(Some(selected));
            }
        }
    }

    /// React to a notification. Returns the selected value, if any.
    fn apply(&mut self, result: ComponentResult<AutocompleteEvent>) -> Option<String> {
        match result {
            ComponentResult::Emit(AutocompleteEvent::TermChanged(term)) => {
                let matches = self.catalog.filter(&term);
                debug!(term = %term, matches = matches.len(), "candidates refreshed");
                self.widget.set_candidates(matches);
                None
            }
            ComponentResult::Emit(AutocompleteEvent::ValueSelected(value)) => {
                info!(value = %value, "value selected");
                Some(value)
            }
            ComponentResult::Handled | ComponentResult::NotHandled => None,
        }
    }

    fn title(&self) -> Paragraph<'static> {
        let id = self.widget.input_id().unwrap_or_default().to_string();
        Paragraph::new(Line::from(vec![
            Span::styled(
                "lookahead",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  #{id}"), Style::default().fg(TEXT_DIM)),
        ]))
    }

    fn hints(&self) -> Paragraph<'static> {
        let mut spans = Vec::new();
        for (key, description) in self.widget.key_hints().into_iter().chain([QUIT_HINT]) {
            if !spans.is_empty() {
                spans.push(Span::styled(" · ", Style::default().fg(TEXT_DIM)));
            }
            spans.push(Span::styled(key, Style::default().fg(ACCENT)));
            spans.push(Span::styled(
                format!(" {description}"),
                Style::default().fg(TEXT_DIM),
            ));
        }
        Paragraph::new(Line::from(spans))
    }
}

fn is_quit(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('d'))
}

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookahead_widget::registry::InstanceRegistry;
    use pretty_assertions::assert_eq;

    fn app() -> App {
        let registry = InstanceRegistry::new();
        App {
            widget: AutocompleteComponent::with_registry(AutocompleteConfig::new(), &registry),
            catalog: Catalog::builtin(),
        }
    }

    fn press(app: &mut App, code: KeyCode) -> Option<String> {
        let result = app.widget.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
        app.apply(result)
    }

    #[test]
    fn test_typing_refreshes_candidates() {
        let mut app = app();
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('o'));
        assert_eq!(
            app.widget.controller().candidates(),
            &["Rome".to_string(), "Rotterdam".to_string()]
        );
    }

    #[test]
    fn test_enter_returns_first_match() {
        let mut app = app();
        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(press(&mut app, KeyCode::Enter), Some("Oslo".to_string()));
    }

    #[test]
    fn test_escape_empties_candidates() {
        let mut app = app();
        press(&mut app, KeyCode::Char('b'));
        assert!(!app.widget.controller().candidates().is_empty());
        press(&mut app, KeyCode::Esc);
        assert!(app.widget.controller().candidates().is_empty());
        assert_eq!(press(&mut app, KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE)));
    }
}
