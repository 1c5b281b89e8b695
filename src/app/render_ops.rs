use crate::content::content_for;
use crate::error::AppResult;
use crate::nav::AffordanceKind;
use crate::ui::{FrameOutput, FrameView, draw_frame};

use super::core::App;
use super::terminal_session::TerminalSurface;

impl App {
    pub(crate) fn render_frame(&mut self, session: &mut impl TerminalSurface) -> AppResult<()> {
        let page = self.nav.active();
        let href = self.nav.location().href();
        let view = FrameView {
            nav_items: self.nav.affordances().items(AffordanceKind::Desktop),
            menu_items: self.nav.affordances().items(AffordanceKind::Mobile),
            page,
            page_title: self.nav.registry().get(page).title,
            content: content_for(page),
            profile: self.effects.styler.profile(),
            dots: self
                .config
                .ui
                .show_scroll_dots
                .then(|| self.effects.dots.dots()),
            scroll: self.nav.surface().scroll(),
            fading: self.nav.surface().is_fading(),
            transitioning: self.nav.is_transitioning(),
            focused_button: self.state.focused_button,
            mode: self.state.mode,
            menu_highlight: self.state.menu_highlight,
            href: &href,
            can_go_back: self.nav.location().can_go_back(),
            can_go_forward: self.nav.location().can_go_forward(),
            status: &self.state.status,
            location_input: &self.location_input,
        };

        let mut output = FrameOutput::default();
        session.draw(|frame| output = draw_frame(frame, &view))?;

        self.hit_map = output.hit_map;
        self.menu_hits = output.menu;
        self.nav.surface_mut().set_scroll_limit(output.scroll_limit);
        Ok(())
    }
}
