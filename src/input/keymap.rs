use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Mode;
use crate::command::Command;
use crate::page::StepDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapPreset {
    Default,
    Vim,
}

impl KeymapPreset {
    pub fn parse(value: &str) -> Self {
        match value {
            "default" => Self::Default,
            "vim" => Self::Vim,
            _ => Self::Default,
        }
    }
}

pub fn map_key_to_command(key: KeyEvent, mode: Mode) -> Option<Command> {
    map_key_to_command_with_preset(key, mode, KeymapPreset::Default)
}

/// Location mode is not mapped here: the prompt owns every key there.
pub fn map_key_to_command_with_preset(
    key: KeyEvent,
    mode: Mode,
    preset: KeymapPreset,
) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }

    match mode {
        Mode::Normal => match preset {
            KeymapPreset::Default => map_normal_mode_key_default(key),
            KeymapPreset::Vim => map_normal_mode_key_vim(key),
        },
        Mode::Menu => map_menu_mode_key(key),
        Mode::Location => None,
    }
}

fn map_normal_mode_key_default(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::ALT) {
        return match key.code {
            KeyCode::Left => Some(Command::HistoryBack),
            KeyCode::Right => Some(Command::HistoryForward),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|digit| Command::JumpToDigit { digit }),
        KeyCode::Left => Some(Command::Step {
            dir: StepDirection::Left,
        }),
        KeyCode::Right => Some(Command::Step {
            dir: StepDirection::Right,
        }),
        KeyCode::Backspace => Some(Command::HistoryBack),
        KeyCode::Char('m') => Some(Command::ToggleMenu),
        KeyCode::Char(':') | KeyCode::Char('g') => Some(Command::OpenLocation),
        KeyCode::Tab => Some(Command::FocusNext),
        KeyCode::BackTab => Some(Command::FocusPrev),
        KeyCode::Enter => Some(Command::ActivateFocused),
        KeyCode::Char('j') | KeyCode::Down => Some(Command::Scroll { dy: 1 }),
        KeyCode::Char('k') | KeyCode::Up => Some(Command::Scroll { dy: -1 }),
        KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Cancel),
        _ => None,
    }
}

fn map_normal_mode_key_vim(key: KeyEvent) -> Option<Command> {
    if key.modifiers.is_empty() {
        match key.code {
            KeyCode::Char('h') => {
                return Some(Command::Step {
                    dir: StepDirection::Left,
                });
            }
            KeyCode::Char('l') => {
                return Some(Command::Step {
                    dir: StepDirection::Right,
                });
            }
            _ => {}
        }
    }
    map_normal_mode_key_default(key)
}

fn map_menu_mode_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|digit| usize::try_from(digit).ok())
            .map(|digit| Command::MenuSelect {
                position: digit - 1,
            }),
        KeyCode::Up | KeyCode::Char('k') => Some(Command::MenuMove { delta: -1 }),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::MenuMove { delta: 1 }),
        KeyCode::Enter => Some(Command::MenuActivate),
        KeyCode::Char('m') | KeyCode::Esc => Some(Command::ToggleMenu),
        KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::Mode;
    use crate::command::Command;
    use crate::page::StepDirection;

    use super::{KeymapPreset, map_key_to_command, map_key_to_command_with_preset};

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn keymap_preset_parse_defaults_on_unknown_values() {
        assert_eq!(KeymapPreset::parse("default"), KeymapPreset::Default);
        assert_eq!(KeymapPreset::parse("vim"), KeymapPreset::Vim);
        assert_eq!(KeymapPreset::parse("emacs"), KeymapPreset::Default);
    }

    #[test]
    fn digits_map_to_absolute_jumps() {
        assert_eq!(
            map_key_to_command(plain(KeyCode::Char('3')), Mode::Normal),
            Some(Command::JumpToDigit { digit: 3 })
        );
        assert_eq!(
            map_key_to_command(plain(KeyCode::Char('0')), Mode::Normal),
            None
        );
    }

    #[test]
    fn arrows_step_and_alt_arrows_walk_history() {
        assert_eq!(
            map_key_to_command(plain(KeyCode::Left), Mode::Normal),
            Some(Command::Step {
                dir: StepDirection::Left
            })
        );
        assert_eq!(
            map_key_to_command(
                KeyEvent::new(KeyCode::Right, KeyModifiers::ALT),
                Mode::Normal
            ),
            Some(Command::HistoryForward)
        );
    }

    #[test]
    fn location_mode_leaves_keys_to_the_prompt() {
        assert_eq!(
            map_key_to_command(plain(KeyCode::Char('3')), Mode::Location),
            None
        );
        assert_eq!(
            map_key_to_command(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                Mode::Location
            ),
            Some(Command::Quit)
        );
    }

    #[test]
    fn vim_preset_adds_h_and_l() {
        assert_eq!(
            map_key_to_command_with_preset(
                plain(KeyCode::Char('l')),
                Mode::Normal,
                KeymapPreset::Vim
            ),
            Some(Command::Step {
                dir: StepDirection::Right
            })
        );
        assert_eq!(
            map_key_to_command_with_preset(
                plain(KeyCode::Char('l')),
                Mode::Normal,
                KeymapPreset::Default
            ),
            None
        );
    }

    #[test]
    fn menu_digits_select_by_position() {
        assert_eq!(
            map_key_to_command(plain(KeyCode::Char('2')), Mode::Menu),
            Some(Command::MenuSelect { position: 1 })
        );
        assert_eq!(
            map_key_to_command(plain(KeyCode::Esc), Mode::Menu),
            Some(Command::ToggleMenu)
        );
    }
}
