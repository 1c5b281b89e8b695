use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use unicode_width::UnicodeWidthStr;

use crate::page::PageId;

const DOTS_COLUMN_WIDTH: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiLayout {
    pub navbar: Rect,
    pub body: Rect,
    pub dots: Option<Rect>,
    pub status: Rect,
}

pub fn split_layout(area: Rect, show_dots: bool) -> UiLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let (body, dots) = if show_dots && chunks[1].width > DOTS_COLUMN_WIDTH * 4 {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(DOTS_COLUMN_WIDTH)])
            .split(chunks[1]);
        (columns[0], Some(columns[1]))
    } else {
        (chunks[1], None)
    };

    UiLayout {
        navbar: chunks[0],
        body,
        dots,
        status: chunks[2],
    }
}

/// Lays `labels` out left to right with one blank column between them.
/// Labels that do not fit are left out.
pub fn nav_item_rects(navbar: Rect, labels: &[String]) -> Vec<Rect> {
    let mut rects = Vec::with_capacity(labels.len());
    let right = navbar.x.saturating_add(navbar.width);
    let mut x = navbar.x;
    for label in labels {
        let width = u16::try_from(label.width()).unwrap_or(u16::MAX);
        if x.saturating_add(width) > right {
            break;
        }
        rects.push(Rect::new(x, navbar.y, width, 1));
        x = x.saturating_add(width).saturating_add(1);
    }
    rects
}

pub(crate) fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.max(1).min(area.width);
    let height = height.max(1).min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Clickable regions of the last drawn frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    targets: Vec<(Rect, PageId)>,
}

impl HitMap {
    pub fn push(&mut self, rect: Rect, page: PageId) {
        self.targets.push((rect, page));
    }

    pub fn page_at(&self, column: u16, row: u16) -> Option<PageId> {
        let position = Position::new(column, row);
        self.targets
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, page)| *page)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Click regions of the open menu. Anything outside `popup` is backdrop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuHits {
    pub popup: Rect,
    pub items: HitMap,
}

impl MenuHits {
    pub fn is_backdrop(&self, column: u16, row: u16) -> bool {
        !self.popup.contains(Position::new(column, row))
    }
}
