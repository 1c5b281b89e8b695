use std::time::Duration;

use tui_input::Input;

use crate::command::{ActionId, Command, CommandDispatchResult, dispatch};
use crate::config::Config;
use crate::effects::{ParticleStyler, ScrollDots};
use crate::input::KeymapPreset;
use crate::nav::{
    Location, NavigationController, ScrollBehavior, SessionLocation, TransitionTicket,
};
use crate::page::PageRegistry;
use crate::ui::{HitMap, MenuHits};

use super::document::PageDocument;
use super::state::{AppState, Mode};

pub type Navigator = NavigationController<SessionLocation, PageDocument>;

/// Listeners that only see page-changed notifications.
pub struct EffectSubsystem {
    pub dots: ScrollDots,
    pub styler: ParticleStyler,
}

pub struct App {
    pub state: AppState,
    pub nav: Navigator,
    pub effects: EffectSubsystem,
    pub location_input: Input,
    pub config: Config,
    pub(crate) keymap: KeymapPreset,
    pub(crate) hit_map: HitMap,
    pub(crate) menu_hits: Option<MenuHits>,
}

impl App {
    /// `initial_location` is the address the session starts at; it is not
    /// followed until [`start`](Self::start) or the event loop runs.
    pub fn new(config: Config, initial_location: Option<&str>) -> Self {
        let registry = PageRegistry::default();
        let document = PageDocument::from_registry(&registry);
        let location = SessionLocation::with_initial(config.ui.site_name.clone(), initial_location);
        let scroll = if config.transition.smooth_scroll {
            ScrollBehavior::Smooth
        } else {
            ScrollBehavior::Instant
        };
        let mut nav = NavigationController::new(registry, location, document)
            .with_scroll_behavior(scroll);

        let initial = nav.active();
        let dots = ScrollDots::new(nav.subscribe(), nav.registry(), initial);
        let styler = ParticleStyler::new(nav.subscribe(), initial);

        Self {
            state: AppState::default(),
            nav,
            effects: EffectSubsystem { dots, styler },
            location_input: Input::default(),
            keymap: KeymapPreset::parse(&config.keymap.preset),
            config,
            hit_map: HitMap::default(),
            menu_hits: None,
        }
    }

    pub fn transition_delay(&self) -> Duration {
        Duration::from_millis(self.config.transition.delay_ms)
    }

    /// Follows the initial fragment, if it names a page.
    pub fn start(&mut self) -> Option<TransitionTicket> {
        self.nav.init_from_hash().ticket()
    }

    pub fn apply_command(&mut self, command: Command) -> CommandDispatchResult {
        let prev_mode = self.state.mode;
        let result = dispatch(&mut self.state, command, &mut self.nav);
        if self.state.mode == Mode::Location && prev_mode != Mode::Location {
            let seed = self
                .nav
                .location()
                .fragment()
                .map(|fragment| format!("#{fragment}"))
                .unwrap_or_default();
            self.location_input = Input::new(seed);
        }
        result
    }

    /// Completes a transition once its scheduled delay has elapsed.
    pub fn commit_transition(&mut self, ticket: TransitionTicket) -> bool {
        let Some(event) = self.nav.commit(ticket) else {
            return false;
        };
        self.state.focused_button = None;
        self.state.status.last_action_id = Some(ActionId::Commit);
        self.state.status.message = format!("{} -> {}", event.previous, event.page);
        true
    }

    /// Lets subscribers react to committed switches. Returns `true` if any
    /// of them changed.
    pub fn sync_effects(&mut self) -> bool {
        let dots_changed = self.effects.dots.sync();
        let style_changed = self.effects.styler.sync();
        dots_changed || style_changed
    }
}
