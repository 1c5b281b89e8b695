use crate::command::ActionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    /// Pop-up list of mobile nav items.
    Menu,
    /// Address prompt has keyboard focus; page shortcuts are off.
    Location,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Menu => "MENU",
            Self::Location => "LOCATION",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatusState {
    pub message: String,
    pub last_action_id: Option<ActionId>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub mode: Mode,
    pub status: StatusState,
    /// Index into the visible page's buttons.
    pub focused_button: Option<usize>,
    pub menu_highlight: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            mode: Mode::Normal,
            status: StatusState::default(),
            focused_button: None,
            menu_highlight: 0,
        }
    }
}
