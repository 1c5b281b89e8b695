use crate::app::{AppState, Mode, Navigator};
use crate::content::content_for;
use crate::nav::{AffordanceKind, SwitchOutcome, TransitionTicket};

use super::types::{Command, CommandOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandDispatchResult {
    pub outcome: CommandOutcome,
    /// Transition that the caller must schedule a commit for.
    pub started: Option<TransitionTicket>,
}

impl CommandDispatchResult {
    fn applied() -> Self {
        Self {
            outcome: CommandOutcome::Applied,
            started: None,
        }
    }

    fn noop() -> Self {
        Self {
            outcome: CommandOutcome::Noop,
            started: None,
        }
    }
}

pub fn dispatch(app: &mut AppState, cmd: Command, nav: &mut Navigator) -> CommandDispatchResult {
    let action_id = cmd.action_id();
    app.status.last_action_id = Some(action_id);

    // Hash changes are dropped whole while a switch is in flight, so the
    // location never runs ahead of the page that is about to commit.
    if cmd.changes_location() && nav.is_transitioning() {
        if matches!(cmd, Command::SubmitLocation { .. }) {
            app.mode = Mode::Normal;
        }
        return CommandDispatchResult::noop();
    }

    match cmd {
        Command::SwitchPage { page } => navigate(app, nav.switch_page(page)),
        Command::RequestPage { target } => navigate(app, nav.request_page(&target)),
        Command::JumpToDigit { digit } => match nav.registry().by_digit(digit) {
            Some(page) => navigate(app, nav.switch_page(page)),
            None => CommandDispatchResult::noop(),
        },
        Command::Step { dir } => {
            let target = nav.registry().step(nav.active(), dir);
            navigate(app, nav.switch_page(target))
        }
        Command::HistoryBack => {
            if !nav.location_mut().back() {
                return CommandDispatchResult::noop();
            }
            navigate(app, nav.init_from_hash())
        }
        Command::HistoryForward => {
            if !nav.location_mut().forward() {
                return CommandDispatchResult::noop();
            }
            navigate(app, nav.init_from_hash())
        }
        Command::OpenLocation => {
            app.mode = Mode::Location;
            app.status.message = "enter an address, e.g. #food".to_string();
            CommandDispatchResult::applied()
        }
        Command::SubmitLocation { input } => {
            app.mode = Mode::Normal;
            nav.location_mut().assign(&input);
            navigate(app, nav.init_from_hash())
        }
        Command::ToggleMenu => {
            if app.mode == Mode::Menu {
                app.mode = Mode::Normal;
            } else {
                app.mode = Mode::Menu;
                app.menu_highlight = nav.active().index();
            }
            CommandDispatchResult::applied()
        }
        Command::MenuMove { delta } => {
            let n = nav.affordances().items(AffordanceKind::Mobile).len();
            if n == 0 {
                return CommandDispatchResult::noop();
            }
            let n = i64::try_from(n).unwrap_or(i64::MAX);
            let next = (i64::try_from(app.menu_highlight).unwrap_or(0) + i64::from(delta))
                .rem_euclid(n);
            app.menu_highlight = usize::try_from(next).unwrap_or(0);
            CommandDispatchResult::applied()
        }
        Command::MenuSelect { position } => select_menu_item(app, nav, position),
        Command::MenuActivate => {
            let position = app.menu_highlight;
            select_menu_item(app, nav, position)
        }
        Command::FocusNext => move_focus(app, nav, 1),
        Command::FocusPrev => move_focus(app, nav, -1),
        Command::ActivateFocused => {
            let buttons = content_for(nav.active()).buttons;
            let Some(button) = app.focused_button.and_then(|i| buttons.get(i)) else {
                return CommandDispatchResult::noop();
            };
            navigate(app, nav.request_page(button.target))
        }
        Command::Scroll { dy } => {
            nav.surface_mut().scroll_by(dy);
            CommandDispatchResult::applied()
        }
        Command::Cancel => {
            if app.mode == Mode::Normal && app.focused_button.is_none() {
                return CommandDispatchResult::noop();
            }
            app.mode = Mode::Normal;
            app.focused_button = None;
            CommandDispatchResult::applied()
        }
        Command::Quit => CommandDispatchResult {
            outcome: CommandOutcome::QuitRequested,
            started: None,
        },
    }
}

/// Records an accepted switch. Ignored requests stay silent: no message, no
/// state change.
fn navigate(app: &mut AppState, outcome: SwitchOutcome) -> CommandDispatchResult {
    match outcome {
        SwitchOutcome::Started(ticket) => {
            app.focused_button = None;
            app.status.message = format!("-> {}", ticket.target());
            CommandDispatchResult {
                outcome: CommandOutcome::Applied,
                started: Some(ticket),
            }
        }
        SwitchOutcome::Ignored(_) => CommandDispatchResult::noop(),
    }
}

fn select_menu_item(
    app: &mut AppState,
    nav: &mut Navigator,
    position: usize,
) -> CommandDispatchResult {
    let Some(page) = nav.affordances().page_at(AffordanceKind::Mobile, position) else {
        return CommandDispatchResult::noop();
    };
    app.mode = Mode::Normal;
    let result = navigate(app, nav.switch_page(page));
    if result.outcome == CommandOutcome::Noop {
        // Closing the menu still counts as doing something.
        return CommandDispatchResult::applied();
    }
    result
}

fn move_focus(app: &mut AppState, nav: &Navigator, delta: isize) -> CommandDispatchResult {
    let count = content_for(nav.active()).buttons.len();
    if count == 0 {
        return CommandDispatchResult::noop();
    }
    let next = match app.focused_button {
        None if delta >= 0 => 0,
        None => count - 1,
        Some(current) => current.checked_add_signed(delta).map_or(count - 1, |i| i % count),
    };
    app.focused_button = Some(next);
    CommandDispatchResult::applied()
}

#[cfg(test)]
mod tests {
    use super::dispatch;
    use crate::app::{AppState, Mode, Navigator, PageDocument};
    use crate::command::{Command, CommandOutcome};
    use crate::nav::{Location, NavigationController, SessionLocation};
    use crate::page::{PageId, PageRegistry, StepDirection};

    fn navigator_at(fragment: Option<&str>) -> Navigator {
        let registry = PageRegistry::default();
        let document = PageDocument::from_registry(&registry);
        NavigationController::new(
            registry,
            SessionLocation::with_initial("zz", fragment),
            document,
        )
    }

    fn run(app: &mut AppState, nav: &mut Navigator, cmd: Command) -> CommandOutcome {
        let result = dispatch(app, cmd, nav);
        if let Some(ticket) = result.started {
            nav.commit(ticket).expect("started switch should commit");
        }
        result.outcome
    }

    #[test]
    fn digit_three_selects_modern_from_any_page() {
        for start in PageId::ALL {
            let mut app = AppState::default();
            let mut nav = navigator_at(None);
            run(&mut app, &mut nav, Command::SwitchPage { page: start });
            run(&mut app, &mut nav, Command::JumpToDigit { digit: 3 });
            assert_eq!(nav.active(), PageId::Modern);
        }
    }

    #[test]
    fn out_of_range_digit_is_noop() {
        let mut app = AppState::default();
        let mut nav = navigator_at(None);
        assert_eq!(
            run(&mut app, &mut nav, Command::JumpToDigit { digit: 9 }),
            CommandOutcome::Noop
        );
    }

    #[test]
    fn arrow_steps_wrap_around() {
        let mut app = AppState::default();
        let mut nav = navigator_at(None);
        run(
            &mut app,
            &mut nav,
            Command::Step {
                dir: StepDirection::Left,
            },
        );
        assert_eq!(nav.active(), PageId::Nature);
        run(
            &mut app,
            &mut nav,
            Command::Step {
                dir: StepDirection::Right,
            },
        );
        assert_eq!(nav.active(), PageId::Home);
    }

    #[test]
    fn unknown_request_is_silent() {
        let mut app = AppState::default();
        app.status.message = "previous".to_string();
        let mut nav = navigator_at(None);
        let outcome = run(
            &mut app,
            &mut nav,
            Command::RequestPage {
                target: "atlantis".to_string(),
            },
        );
        assert_eq!(outcome, CommandOutcome::Noop);
        assert_eq!(app.status.message, "previous");
        assert_eq!(nav.active(), PageId::Home);
    }

    #[test]
    fn history_back_and_forward_follow_fragments() {
        let mut app = AppState::default();
        let mut nav = navigator_at(Some("home"));
        run(&mut app, &mut nav, Command::SwitchPage { page: PageId::Food });

        run(&mut app, &mut nav, Command::HistoryBack);
        assert_eq!(nav.active(), PageId::Home);
        assert_eq!(nav.location().fragment(), Some("home"));

        run(&mut app, &mut nav, Command::HistoryForward);
        assert_eq!(nav.active(), PageId::Food);
        assert_eq!(
            run(&mut app, &mut nav, Command::HistoryForward),
            CommandOutcome::Noop
        );
    }

    #[test]
    fn submitted_location_switches_and_leaves_prompt() {
        let mut app = AppState::default();
        let mut nav = navigator_at(None);
        run(&mut app, &mut nav, Command::OpenLocation);
        assert_eq!(app.mode, Mode::Location);

        run(
            &mut app,
            &mut nav,
            Command::SubmitLocation {
                input: "#nature".to_string(),
            },
        );
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(nav.active(), PageId::Nature);
    }

    #[test]
    fn menu_selection_switches_and_closes_menu() {
        let mut app = AppState::default();
        let mut nav = navigator_at(None);
        run(&mut app, &mut nav, Command::ToggleMenu);
        assert_eq!(app.mode, Mode::Menu);
        assert_eq!(app.menu_highlight, 0);

        run(&mut app, &mut nav, Command::MenuMove { delta: -1 });
        assert_eq!(app.menu_highlight, 4);
        run(&mut app, &mut nav, Command::MenuActivate);
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(nav.active(), PageId::Nature);
    }

    #[test]
    fn focused_button_follows_its_page_reference() {
        let mut app = AppState::default();
        let mut nav = navigator_at(None);
        run(&mut app, &mut nav, Command::FocusNext);
        run(&mut app, &mut nav, Command::FocusNext);
        assert_eq!(app.focused_button, Some(1));
        run(&mut app, &mut nav, Command::ActivateFocused);
        assert_eq!(nav.active(), PageId::Food);
        assert_eq!(app.focused_button, None);
    }

    #[test]
    fn focus_prev_wraps_to_last_button() {
        let mut app = AppState::default();
        let mut nav = navigator_at(None);
        run(&mut app, &mut nav, Command::FocusPrev);
        assert_eq!(app.focused_button, Some(1));
        run(&mut app, &mut nav, Command::FocusNext);
        assert_eq!(app.focused_button, Some(0));
    }

    #[test]
    fn quit_is_reported() {
        let mut app = AppState::default();
        let mut nav = navigator_at(None);
        assert_eq!(
            run(&mut app, &mut nav, Command::Quit),
            CommandOutcome::QuitRequested
        );
    }
}
