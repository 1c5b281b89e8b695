use crate::event::PageChangedEvent;
use crate::page::{PageId, PageRegistry};

use super::affordance::Affordances;
use super::bus::{PageEvents, Subscription, SubscriptionId};
use super::location::Location;
use super::state::{NavigationState, Phase, TransitionTicket};
use super::surface::{PageSurface, ScrollBehavior};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    UnknownPage,
    AlreadyActive,
    Busy,
    NoFragment,
}

impl IgnoreReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UnknownPage => "unknown page",
            Self::AlreadyActive => "already active",
            Self::Busy => "transition in flight",
            Self::NoFragment => "no fragment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchOutcome {
    /// The switch was accepted; commit it with this ticket once the visual
    /// transition has finished.
    Started(TransitionTicket),
    Ignored(IgnoreReason),
}

impl SwitchOutcome {
    pub fn ticket(self) -> Option<TransitionTicket> {
        match self {
            Self::Started(ticket) => Some(ticket),
            Self::Ignored(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HistoryMode {
    Push,
    Keep,
}

/// Single authority over which page is shown.
///
/// Every request is checked synchronously against the guard; an accepted
/// switch stays in flight until [`commit`](Self::commit) is called with its
/// ticket, which is when the active page changes and subscribers are told.
pub struct NavigationController<L, S> {
    registry: PageRegistry,
    state: NavigationState,
    affordances: Affordances,
    events: PageEvents,
    location: L,
    surface: S,
    scroll_behavior: ScrollBehavior,
    next_ticket: u64,
}

impl<L: Location, S: PageSurface> NavigationController<L, S> {
    pub fn new(registry: PageRegistry, location: L, mut surface: S) -> Self {
        let state = NavigationState::default();
        let mut affordances = Affordances::from_registry(&registry);
        affordances.mark_active(state.active);
        surface.show(&registry.get(state.active).anchor);

        Self {
            registry,
            state,
            affordances,
            events: PageEvents::default(),
            location,
            surface,
            scroll_behavior: ScrollBehavior::Smooth,
            next_ticket: 1,
        }
    }

    pub fn with_scroll_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.scroll_behavior = behavior;
        self
    }

    pub fn switch_page(&mut self, target: PageId) -> SwitchOutcome {
        self.begin(target, HistoryMode::Push)
    }

    /// String entry point for page-reference attributes and typed input.
    pub fn request_page(&mut self, raw: &str) -> SwitchOutcome {
        match self.registry.resolve(raw) {
            Some(target) => self.switch_page(target),
            None => {
                tracing::debug!(target_page = raw, "ignored switch to unknown page");
                SwitchOutcome::Ignored(IgnoreReason::UnknownPage)
            }
        }
    }

    /// Follows the current fragment. The fragment already names the target, so
    /// no history entry is pushed.
    pub fn init_from_hash(&mut self) -> SwitchOutcome {
        let Some(fragment) = self.location.fragment() else {
            return SwitchOutcome::Ignored(IgnoreReason::NoFragment);
        };
        let Some(target) = self.registry.resolve(fragment) else {
            tracing::debug!(fragment, "ignored unknown fragment");
            return SwitchOutcome::Ignored(IgnoreReason::UnknownPage);
        };
        self.begin(target, HistoryMode::Keep)
    }

    /// Completes the in-flight transition named by `ticket`. Stale tickets are
    /// ignored.
    pub fn commit(&mut self, ticket: TransitionTicket) -> Option<PageChangedEvent> {
        let Phase::Transitioning {
            ticket: pending,
            from,
        } = self.state.phase
        else {
            tracing::debug!(ticket = ticket.id(), "commit with no transition in flight");
            return None;
        };
        if pending != ticket {
            tracing::debug!(
                ticket = ticket.id(),
                pending = pending.id(),
                "ignored stale transition ticket"
            );
            return None;
        }

        let target = ticket.target();
        let anchor = &self.registry.get(target).anchor;
        if !self.surface.show(anchor) {
            tracing::debug!(anchor = anchor.as_str(), "page container missing");
        }
        self.state.active = target;
        self.state.phase = Phase::Idle;

        let event = PageChangedEvent {
            previous: from,
            page: target,
        };
        let delivered = self.events.publish(event);
        tracing::info!(from = %from, to = %target, delivered, "page changed");
        Some(event)
    }

    pub fn subscribe(&mut self) -> Subscription {
        self.events.subscribe()
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    pub fn active(&self) -> PageId {
        self.state.active()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn pending(&self) -> Option<TransitionTicket> {
        self.state.pending()
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn registry(&self) -> &PageRegistry {
        &self.registry
    }

    pub fn affordances(&self) -> &Affordances {
        &self.affordances
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// Mutable access for back/forward and typed addresses. Callers follow up
    /// with [`init_from_hash`](Self::init_from_hash).
    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn begin(&mut self, target: PageId, history: HistoryMode) -> SwitchOutcome {
        if self.state.is_transitioning() {
            tracing::debug!(to = %target, "dropped switch while transitioning");
            return SwitchOutcome::Ignored(IgnoreReason::Busy);
        }
        if target == self.state.active {
            return SwitchOutcome::Ignored(IgnoreReason::AlreadyActive);
        }

        let from = self.state.active;
        let ticket = TransitionTicket::new(self.next_ticket, target);
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.state.phase = Phase::Transitioning { ticket, from };

        self.affordances.mark_active(target);
        self.surface.fade_out(&self.registry.get(from).anchor);
        self.surface.scroll_to_top(self.scroll_behavior);
        if history == HistoryMode::Push {
            self.location.push_fragment(target.as_str());
        }

        tracing::debug!(from = %from, to = %target, ticket = ticket.id(), "switch started");
        SwitchOutcome::Started(ticket)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{IgnoreReason, NavigationController, SwitchOutcome};
    use crate::event::PageChangedEvent;
    use crate::nav::affordance::AffordanceKind;
    use crate::nav::location::{Location, SessionLocation};
    use crate::nav::surface::{PageSurface, ScrollBehavior};
    use crate::page::{PageId, PageRegistry};

    #[derive(Default)]
    struct RecordingSurface {
        containers: HashSet<String>,
        visible: Option<String>,
        faded: Vec<String>,
        scrolls: Vec<ScrollBehavior>,
    }

    impl RecordingSurface {
        fn with_all_pages() -> Self {
            Self {
                containers: PageId::ALL.iter().map(|id| id.anchor()).collect(),
                ..Self::default()
            }
        }
    }

    impl PageSurface for RecordingSurface {
        fn fade_out(&mut self, anchor: &str) {
            self.faded.push(anchor.to_string());
        }

        fn show(&mut self, anchor: &str) -> bool {
            if !self.containers.contains(anchor) {
                return false;
            }
            self.visible = Some(anchor.to_string());
            true
        }

        fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
            self.scrolls.push(behavior);
        }
    }

    type TestController = NavigationController<SessionLocation, RecordingSurface>;

    fn controller() -> TestController {
        controller_at(None)
    }

    fn controller_at(fragment: Option<&str>) -> TestController {
        NavigationController::new(
            PageRegistry::default(),
            SessionLocation::with_initial("zz", fragment),
            RecordingSurface::with_all_pages(),
        )
    }

    fn switch_and_commit(nav: &mut TestController, target: PageId) -> PageChangedEvent {
        let ticket = nav
            .switch_page(target)
            .ticket()
            .expect("switch should start");
        nav.commit(ticket).expect("commit should publish")
    }

    #[test]
    fn starts_on_home_with_home_marked() {
        let nav = controller();
        assert_eq!(nav.active(), PageId::Home);
        assert!(!nav.is_transitioning());
        assert_eq!(
            nav.affordances().active_pages(AffordanceKind::Desktop),
            vec![PageId::Home]
        );
        assert_eq!(nav.surface().visible.as_deref(), Some("page-home"));
    }

    #[test]
    fn switch_is_deferred_until_commit() {
        let mut nav = controller();
        let sub = nav.subscribe();

        let ticket = nav
            .switch_page(PageId::Food)
            .ticket()
            .expect("switch should start");
        assert!(nav.is_transitioning());
        assert_eq!(nav.active(), PageId::Home);
        assert_eq!(sub.try_next(), None);
        assert_eq!(nav.location().fragment(), Some("food"));
        assert_eq!(nav.surface().scrolls, vec![ScrollBehavior::Smooth]);
        assert_eq!(nav.surface().faded, vec!["page-home".to_string()]);

        let event = nav.commit(ticket).expect("commit should publish");
        assert_eq!(
            event,
            PageChangedEvent {
                previous: PageId::Home,
                page: PageId::Food
            }
        );
        assert_eq!(nav.active(), PageId::Food);
        assert!(!nav.is_transitioning());
        assert_eq!(sub.drain(), vec![event]);
        assert_eq!(nav.surface().visible.as_deref(), Some("page-food"));
    }

    #[test]
    fn switching_to_active_page_is_a_silent_noop() {
        let mut nav = controller();
        let sub = nav.subscribe();
        let before = nav.state();
        let history_before = nav.location().history_len();

        for _ in 0..3 {
            assert_eq!(
                nav.switch_page(PageId::Home),
                SwitchOutcome::Ignored(IgnoreReason::AlreadyActive)
            );
        }
        assert_eq!(nav.state(), before);
        assert_eq!(nav.location().history_len(), history_before);
        assert!(nav.surface().scrolls.is_empty());
        assert_eq!(sub.try_next(), None);
    }

    #[test]
    fn second_request_during_transition_is_dropped() {
        let mut nav = controller();
        let sub = nav.subscribe();

        let first = nav
            .switch_page(PageId::History)
            .ticket()
            .expect("first switch should start");
        assert_eq!(
            nav.switch_page(PageId::Nature),
            SwitchOutcome::Ignored(IgnoreReason::Busy)
        );
        assert_eq!(nav.active(), PageId::Home);
        assert_eq!(nav.location().fragment(), Some("history"));
        assert_eq!(
            nav.affordances().active_pages(AffordanceKind::Mobile),
            vec![PageId::History]
        );

        nav.commit(first).expect("first commit should publish");
        assert_eq!(nav.active(), PageId::History);
        assert_eq!(sub.drain().len(), 1);
    }

    #[test]
    fn unknown_page_leaves_everything_untouched() {
        let mut nav = controller();
        let sub = nav.subscribe();
        let before = nav.state();

        assert_eq!(
            nav.request_page("atlantis"),
            SwitchOutcome::Ignored(IgnoreReason::UnknownPage)
        );
        assert_eq!(nav.state(), before);
        assert_eq!(nav.location().fragment(), None);
        assert_eq!(sub.try_next(), None);
    }

    #[test]
    fn request_page_accepts_known_names() {
        let mut nav = controller();
        assert!(matches!(
            nav.request_page("nature"),
            SwitchOutcome::Started(ticket) if ticket.target() == PageId::Nature
        ));
    }

    #[test]
    fn stale_or_repeated_tickets_are_ignored() {
        let mut nav = controller();
        let sub = nav.subscribe();
        let first = nav
            .switch_page(PageId::Modern)
            .ticket()
            .expect("switch should start");
        nav.commit(first).expect("commit should publish");

        assert_eq!(nav.commit(first), None);
        let second = nav
            .switch_page(PageId::Food)
            .ticket()
            .expect("switch should start");
        assert_eq!(nav.commit(first), None);
        assert!(nav.is_transitioning());
        nav.commit(second).expect("matching ticket should commit");
        assert_eq!(sub.drain().len(), 2);
    }

    #[test]
    fn exactly_one_affordance_active_after_settling() {
        let mut nav = controller();
        for target in [PageId::Food, PageId::Food, PageId::Nature, PageId::Home] {
            if let Some(ticket) = nav.switch_page(target).ticket() {
                let _ = nav.switch_page(PageId::History);
                nav.commit(ticket);
            }
            for kind in [AffordanceKind::Desktop, AffordanceKind::Mobile] {
                assert_eq!(nav.affordances().active_pages(kind), vec![nav.active()]);
            }
        }
    }

    #[test]
    fn committed_switch_leaves_fragment_equal_to_page() {
        let mut nav = controller();
        switch_and_commit(&mut nav, PageId::Food);
        assert_eq!(nav.location().fragment(), Some("food"));
        assert_eq!(nav.location().href(), "tvw://zz#food");
    }

    #[test]
    fn init_from_hash_selects_fragment_page_without_extra_history() {
        let mut nav = controller_at(Some("#modern"));
        let ticket = nav
            .init_from_hash()
            .ticket()
            .expect("valid fragment should start a switch");
        nav.commit(ticket).expect("commit should publish");

        assert_eq!(nav.active(), PageId::Modern);
        assert_eq!(nav.location().history_len(), 1);
        assert_eq!(nav.location().fragment(), Some("modern"));
    }

    #[test]
    fn init_from_hash_ignores_missing_invalid_and_current() {
        let mut missing = controller();
        assert_eq!(
            missing.init_from_hash(),
            SwitchOutcome::Ignored(IgnoreReason::NoFragment)
        );

        let mut invalid = controller_at(Some("#atlantis"));
        assert_eq!(
            invalid.init_from_hash(),
            SwitchOutcome::Ignored(IgnoreReason::UnknownPage)
        );
        assert_eq!(invalid.active(), PageId::Home);

        let mut current = controller_at(Some("home"));
        assert_eq!(
            current.init_from_hash(),
            SwitchOutcome::Ignored(IgnoreReason::AlreadyActive)
        );
    }

    #[test]
    fn back_then_init_from_hash_returns_to_previous_page() {
        let mut nav = controller_at(Some("home"));
        switch_and_commit(&mut nav, PageId::History);
        switch_and_commit(&mut nav, PageId::Food);
        let len = nav.location().history_len();

        assert!(nav.location_mut().back());
        let ticket = nav.init_from_hash().ticket().expect("back should switch");
        nav.commit(ticket);
        assert_eq!(nav.active(), PageId::History);
        assert_eq!(nav.location().history_len(), len);
    }

    #[test]
    fn missing_container_still_commits_and_broadcasts() {
        let mut surface = RecordingSurface::with_all_pages();
        surface.containers.remove("page-food");
        let mut nav = NavigationController::new(
            PageRegistry::default(),
            SessionLocation::new("zz"),
            surface,
        );
        let sub = nav.subscribe();

        switch_and_commit(&mut nav, PageId::Food);
        assert_eq!(nav.active(), PageId::Food);
        assert_eq!(sub.drain().len(), 1);
        assert_eq!(nav.surface().visible.as_deref(), Some("page-home"));
    }

    #[test]
    fn instant_scroll_behavior_is_forwarded() {
        let mut nav = controller().with_scroll_behavior(ScrollBehavior::Instant);
        nav.switch_page(PageId::Food);
        assert_eq!(nav.surface().scrolls, vec![ScrollBehavior::Instant]);
    }
}
