use crate::page::{PageId, StepDirection};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SwitchPage { page: PageId },
    /// A raw page reference, as carried by in-page buttons.
    RequestPage { target: String },
    JumpToDigit { digit: u32 },
    Step { dir: StepDirection },
    HistoryBack,
    HistoryForward,
    OpenLocation,
    SubmitLocation { input: String },
    ToggleMenu,
    MenuMove { delta: i32 },
    MenuSelect { position: usize },
    MenuActivate,
    FocusNext,
    FocusPrev,
    ActivateFocused,
    Scroll { dy: i32 },
    Cancel,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionId {
    SwitchPage,
    RequestPage,
    JumpToDigit,
    Step,
    HistoryBack,
    HistoryForward,
    OpenLocation,
    SubmitLocation,
    ToggleMenu,
    MenuMove,
    MenuSelect,
    FocusButton,
    ActivateButton,
    Scroll,
    Cancel,
    Quit,
    Commit,
    Input,
}

impl ActionId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SwitchPage => "switch-page",
            Self::RequestPage => "request-page",
            Self::JumpToDigit => "jump-to-digit",
            Self::Step => "step",
            Self::HistoryBack => "history-back",
            Self::HistoryForward => "history-forward",
            Self::OpenLocation => "open-location",
            Self::SubmitLocation => "submit-location",
            Self::ToggleMenu => "toggle-menu",
            Self::MenuMove => "menu-move",
            Self::MenuSelect => "menu-select",
            Self::FocusButton => "focus-button",
            Self::ActivateButton => "activate-button",
            Self::Scroll => "scroll",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
            Self::Commit => "commit",
            Self::Input => "input",
        }
    }
}

impl Command {
    pub fn action_id(&self) -> ActionId {
        match self {
            Self::SwitchPage { .. } => ActionId::SwitchPage,
            Self::RequestPage { .. } => ActionId::RequestPage,
            Self::JumpToDigit { .. } => ActionId::JumpToDigit,
            Self::Step { .. } => ActionId::Step,
            Self::HistoryBack => ActionId::HistoryBack,
            Self::HistoryForward => ActionId::HistoryForward,
            Self::OpenLocation => ActionId::OpenLocation,
            Self::SubmitLocation { .. } => ActionId::SubmitLocation,
            Self::ToggleMenu => ActionId::ToggleMenu,
            Self::MenuMove { .. } => ActionId::MenuMove,
            Self::MenuSelect { .. } | Self::MenuActivate => ActionId::MenuSelect,
            Self::FocusNext | Self::FocusPrev => ActionId::FocusButton,
            Self::ActivateFocused => ActionId::ActivateButton,
            Self::Scroll { .. } => ActionId::Scroll,
            Self::Cancel => ActionId::Cancel,
            Self::Quit => ActionId::Quit,
        }
    }

    /// Commands that rewrite the location before following it.
    pub fn changes_location(&self) -> bool {
        matches!(
            self,
            Self::HistoryBack | Self::HistoryForward | Self::SubmitLocation { .. }
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    Noop,
    QuitRequested,
}
