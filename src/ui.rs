//! Wizard TUI shell
//!
//! The shell owns the terminal, the row list, and the cursor. It renders the
//! rows the blocks produce and turns key presses into calls on the row
//! closures. It holds no option state of its own: after every edit, and
//! whenever any block requests a re-render, the rows are rebuilt from the
//! registry and the shared label column is re-derived.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{Frame, Terminal};

use crate::blocks::FormRow;
use crate::error::Result;
use crate::registry::OptionRegistry;
use crate::theme::Styles;

/// How the wizard session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardOutcome {
    /// The user confirmed; hand the option map to the generator.
    Generate,
    /// The user backed out; nothing is persisted.
    Cancelled,
}

pub struct WizardApp {
    registry: OptionRegistry,
    rows: Vec<FormRow>,
    label_width: usize,
    selected: usize,
    scroll: usize,
    needs_rebuild: Rc<Cell<bool>>,
}

impl WizardApp {
    pub fn new(registry: OptionRegistry) -> Self {
        let needs_rebuild = Rc::new(Cell::new(false));
        {
            let flag = Rc::clone(&needs_rebuild);
            registry.connect_update_ui(move || flag.set(true));
        }

        let mut app = Self {
            registry,
            rows: Vec::new(),
            label_width: 0,
            selected: 0,
            scroll: 0,
            needs_rebuild,
        };
        app.rebuild_rows();
        app.selected = app.first_interactive();
        app
    }

    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Rebuilds the row snapshots and the shared label column width. The
    /// project-name field leads the form; everything else comes from the
    /// registry in block registration order.
    fn rebuild_rows(&mut self) {
        let mut rows = vec![FormRow::text("Project Name", self.registry.project_name())];
        rows.extend(self.registry.rows());
        self.label_width = rows
            .iter()
            .map(|row| row.label().chars().count())
            .max()
            .unwrap_or(0);
        self.rows = rows;
        self.needs_rebuild.set(false);
        if self.selected >= self.rows.len() {
            self.selected = self.rows.len().saturating_sub(1);
        }
    }

    fn first_interactive(&self) -> usize {
        self.rows
            .iter()
            .position(|row| !matches!(row, FormRow::Heading(_)))
            .unwrap_or(0)
    }

    fn move_selection(&mut self, down: bool) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let mut index = self.selected;
        for _ in 0..len {
            index = if down {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };
            if !matches!(self.rows[index], FormRow::Heading(_)) {
                self.selected = index;
                return;
            }
        }
    }

    /// Moves a choice row's selection one step, skipping disabled choices,
    /// wrapping around.
    fn cycle_choice(&mut self, forward: bool) {
        let FormRow::Choice { choices, .. } = &self.rows[self.selected] else {
            return;
        };
        let len = choices.len();
        let Some(current) = choices.iter().position(|c| c.selected) else {
            return;
        };
        let mut index = current;
        for _ in 0..len {
            index = if forward {
                (index + 1) % len
            } else {
                (index + len - 1) % len
            };
            if index == current {
                return;
            }
            if choices[index].enabled {
                (choices[index].select)();
                self.rebuild_rows();
                return;
            }
        }
    }

    fn toggle_current(&mut self) {
        if let FormRow::Toggle { enabled, toggle, .. } = &self.rows[self.selected] {
            if *enabled {
                toggle();
                self.rebuild_rows();
            }
        }
    }

    fn edit_current_text(&mut self, key: KeyCode) {
        let FormRow::Text { value, set, .. } = &self.rows[self.selected] else {
            return;
        };
        match key {
            KeyCode::Char(c) => {
                let mut next = value.clone();
                next.push(c);
                set(next);
            }
            KeyCode::Backspace => {
                let mut next = value.clone();
                next.pop();
                set(next);
            }
            _ => return,
        }
        self.rebuild_rows();
    }

    /// Translates one key press. Returns the session outcome once decided.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<WizardOutcome> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let editing_text = matches!(self.rows[self.selected], FormRow::Text { .. });
        match key.code {
            KeyCode::Esc => return Some(WizardOutcome::Cancelled),
            KeyCode::Char('q') if !editing_text => return Some(WizardOutcome::Cancelled),
            KeyCode::Enter => return Some(WizardOutcome::Generate),
            KeyCode::Up => self.move_selection(false),
            KeyCode::Down | KeyCode::Tab => self.move_selection(true),
            KeyCode::Left => self.cycle_choice(false),
            KeyCode::Right => self.cycle_choice(true),
            KeyCode::Char(' ') if !editing_text => self.toggle_current(),
            KeyCode::Char(_) | KeyCode::Backspace if editing_text => {
                self.edit_current_text(key.code)
            }
            _ => {}
        }
        None
    }

    /// Event loop: draw, wait for input, apply, repeat until an outcome.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<WizardOutcome> {
        loop {
            if self.needs_rebuild.get() {
                self.rebuild_rows();
            }
            terminal.draw(|frame| self.render(frame))?;

            if !event::poll(Duration::from_millis(100))? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if let Some(outcome) = self.handle_key(key) {
                    tracing::info!(?outcome, "wizard session finished");
                    return Ok(outcome);
                }
            }
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let title = Line::from(Span::styled(
            format!(" Appforge - {} ", self.registry.project_name().get()),
            Styles::title(),
        ));
        frame.render_widget(Paragraph::new(title), chunks[0]);

        let visible = chunks[1].height.saturating_sub(2) as usize;
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if visible > 0 && self.selected >= self.scroll + visible {
            self.scroll = self.selected + 1 - visible;
        }

        let lines: Vec<Line> = self
            .rows
            .iter()
            .enumerate()
            .skip(self.scroll)
            .take(visible.max(1))
            .map(|(index, row)| self.render_row(index, row))
            .collect();
        let form = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
        frame.render_widget(form, chunks[1]);

        let hints = Line::from(Span::styled(
            " ↑/↓ move  ←/→ change  space toggle  enter create  q quit ",
            Styles::hint(),
        ));
        frame.render_widget(Paragraph::new(hints), chunks[2]);
    }

    fn render_row(&self, index: usize, row: &FormRow) -> Line<'static> {
        let cursor = if index == self.selected { "> " } else { "  " };
        match row {
            FormRow::Heading(heading) => Line::from(Span::styled(
                format!("  {heading}"),
                Styles::heading(),
            )),
            FormRow::Choice { label, choices } => {
                let mut spans = vec![
                    Span::raw(cursor.to_string()),
                    Span::styled(
                        format!("{label:<width$}  ", width = self.label_width),
                        if index == self.selected {
                            Styles::selected()
                        } else {
                            Styles::label()
                        },
                    ),
                ];
                for choice in choices {
                    let style = if choice.selected {
                        Styles::choice_selected()
                    } else if choice.enabled {
                        Styles::choice()
                    } else {
                        Styles::disabled()
                    };
                    spans.push(Span::styled(format!("{} ", choice.label), style));
                }
                Line::from(spans)
            }
            FormRow::Toggle { label, on, enabled, .. } => {
                let marker = if *on { "[x]" } else { "[ ]" };
                let style = if !enabled {
                    Styles::disabled()
                } else if index == self.selected {
                    Styles::selected()
                } else {
                    Styles::label()
                };
                Line::from(vec![
                    Span::raw(cursor.to_string()),
                    Span::styled(
                        format!("{label:<width$}  {marker}", width = self.label_width),
                        style,
                    ),
                ])
            }
            FormRow::Text { label, value, .. } => {
                let caret = if index == self.selected { "_" } else { "" };
                Line::from(vec![
                    Span::raw(cursor.to_string()),
                    Span::styled(
                        format!("{label:<width$}  ", width = self.label_width),
                        if index == self.selected {
                            Styles::selected()
                        } else {
                            Styles::label()
                        },
                    ),
                    Span::styled(format!("{value}{caret}"), Styles::choice()),
                ])
            }
        }
    }
}
