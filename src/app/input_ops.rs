use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use tui_input::backend::crossterm::EventHandler;

use crate::command::Command;
use crate::input::map_key_to_command_with_preset;
use crate::nav::AffordanceKind;

use super::core::App;
use super::state::Mode;

#[derive(Debug, Default, PartialEq)]
pub(crate) struct InputEventOutcome {
    pub(crate) quit_requested: bool,
    pub(crate) redraw: bool,
    pub(crate) command: Option<Command>,
}

impl InputEventOutcome {
    fn command(command: Command) -> Self {
        Self {
            command: Some(command),
            ..Self::default()
        }
    }

    fn redraw() -> Self {
        Self {
            redraw: true,
            ..Self::default()
        }
    }
}

impl App {
    pub(crate) fn handle_input_event(&mut self, event: Event) -> InputEventOutcome {
        match event {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                if self.state.mode == Mode::Location {
                    return self.handle_location_key(key);
                }
                match map_key_to_command_with_preset(key, self.state.mode, self.keymap) {
                    Some(command) => InputEventOutcome::command(command),
                    None => InputEventOutcome::default(),
                }
            }
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => match self.state.mode {
                    Mode::Normal => match self.hit_map.page_at(mouse.column, mouse.row) {
                        Some(page) => InputEventOutcome::command(Command::SwitchPage { page }),
                        None => InputEventOutcome::default(),
                    },
                    Mode::Menu => self.handle_menu_click(mouse.column, mouse.row),
                    Mode::Location => InputEventOutcome::default(),
                },
                MouseEventKind::ScrollDown => InputEventOutcome::command(Command::Scroll { dy: 1 }),
                MouseEventKind::ScrollUp => InputEventOutcome::command(Command::Scroll { dy: -1 }),
                _ => InputEventOutcome::default(),
            },
            Event::Resize(_, _) => InputEventOutcome::redraw(),
            _ => InputEventOutcome::default(),
        }
    }

    /// Items select, the backdrop closes the menu, the popup frame does
    /// nothing.
    fn handle_menu_click(&self, column: u16, row: u16) -> InputEventOutcome {
        let Some(menu) = &self.menu_hits else {
            return InputEventOutcome::default();
        };
        if let Some(page) = menu.items.page_at(column, row) {
            let position = self
                .nav
                .affordances()
                .items(AffordanceKind::Mobile)
                .iter()
                .position(|item| item.page == page);
            return match position {
                Some(position) => InputEventOutcome::command(Command::MenuSelect { position }),
                None => InputEventOutcome::default(),
            };
        }
        if menu.is_backdrop(column, row) {
            return InputEventOutcome::command(Command::ToggleMenu);
        }
        InputEventOutcome::default()
    }

    /// The prompt is a text input: page shortcuts do not apply while it has
    /// focus.
    fn handle_location_key(&mut self, key: KeyEvent) -> InputEventOutcome {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return InputEventOutcome {
                quit_requested: true,
                ..InputEventOutcome::default()
            };
        }

        match key.code {
            KeyCode::Enter => {
                let input = self.location_input.value().to_string();
                self.location_input.reset();
                InputEventOutcome::command(Command::SubmitLocation { input })
            }
            KeyCode::Esc => {
                self.location_input.reset();
                InputEventOutcome::command(Command::Cancel)
            }
            _ => {
                self.location_input.handle_event(&Event::Key(key));
                InputEventOutcome::redraw()
            }
        }
    }
}
