mod chrome;
mod layout;
mod overlay;
mod page_view;

use ratatui::Frame;
use tui_input::Input;

use crate::app::{Mode, StatusState};
use crate::content::PageContent;
use crate::effects::{Dot, StyleProfile};
use crate::nav::NavItem;
use crate::page::PageId;

pub use chrome::{SCROLLED_NAVBAR_BG, StatusLine, draw_navbar, draw_status, nav_label};
pub use layout::{HitMap, MenuHits, UiLayout, nav_item_rects, split_layout};
pub use overlay::{draw_location_prompt, draw_menu_overlay};
pub use page_view::{PageBody, draw_dots, draw_page, page_title};

/// Everything one frame needs, borrowed from the app.
pub struct FrameView<'a> {
    pub nav_items: &'a [NavItem],
    pub menu_items: &'a [NavItem],
    pub page: PageId,
    pub page_title: &'a str,
    pub content: &'a PageContent,
    pub profile: &'a StyleProfile,
    pub dots: Option<&'a [Dot]>,
    pub scroll: u16,
    pub fading: bool,
    pub transitioning: bool,
    pub focused_button: Option<usize>,
    pub mode: Mode,
    pub menu_highlight: usize,
    pub href: &'a str,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub status: &'a StatusState,
    pub location_input: &'a Input,
}

#[derive(Debug, Default)]
pub struct FrameOutput {
    pub hit_map: HitMap,
    pub menu: Option<MenuHits>,
    pub scroll_limit: u16,
}

pub fn draw_frame(frame: &mut Frame<'_>, view: &FrameView<'_>) -> FrameOutput {
    let mut output = FrameOutput::default();
    let layout = split_layout(frame.area(), view.dots.is_some());

    draw_navbar(
        frame,
        layout.navbar,
        view.nav_items,
        view.profile.accent,
        view.scroll > 0,
        &mut output.hit_map,
    );

    let title = page_title(view.page, view.page_title);
    output.scroll_limit = draw_page(
        frame,
        layout.body,
        PageBody {
            title: &title,
            content: view.content,
            scroll: view.scroll,
            fading: view.fading,
            focused_button: view.focused_button,
            profile: view.profile,
        },
    );

    if let (Some(area), Some(dots)) = (layout.dots, view.dots) {
        draw_dots(frame, area, dots, view.profile, &mut output.hit_map);
    }

    draw_status(
        frame,
        layout.status,
        StatusLine {
            href: view.href,
            can_go_back: view.can_go_back,
            can_go_forward: view.can_go_forward,
            mode: view.mode,
            transitioning: view.transitioning,
            status: view.status,
        },
    );

    match view.mode {
        Mode::Menu => {
            output.menu = Some(draw_menu_overlay(
                frame,
                layout.body,
                view.menu_items,
                view.menu_highlight,
                view.profile.accent,
            ));
        }
        Mode::Location => draw_location_prompt(frame, layout.body, view.location_input),
        Mode::Normal => {}
    }

    output
}
