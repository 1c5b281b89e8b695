use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::app::{Mode, StatusState};
use crate::nav::NavItem;

use super::layout::{HitMap, nav_item_rects};

pub fn nav_label(position: usize, item: &NavItem) -> String {
    format!(" {} {} ", position + 1, item.label)
}

/// Background of the navbar once the page body is scrolled away from the top.
pub const SCROLLED_NAVBAR_BG: Color = Color::Indexed(236);

/// Draws the desktop nav items and records their click regions. A scrolled
/// page gets a filled navbar so it stays apart from the body.
pub fn draw_navbar(
    frame: &mut Frame<'_>,
    area: Rect,
    items: &[NavItem],
    accent: Color,
    scrolled: bool,
    hit_map: &mut HitMap,
) {
    let base = if scrolled {
        Style::default().bg(SCROLLED_NAVBAR_BG)
    } else {
        Style::default()
    };
    frame.render_widget(Block::default().style(base), area);

    let labels: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(i, item)| nav_label(i, item))
        .collect();
    let rects = nav_item_rects(area, &labels);

    for ((item, label), rect) in items.iter().zip(labels).zip(rects) {
        let style = if item.active {
            Style::default()
                .fg(Color::Black)
                .bg(accent)
                .add_modifier(Modifier::BOLD)
        } else {
            base.fg(Color::Gray)
        };
        frame.render_widget(Paragraph::new(label).style(style), rect);
        hit_map.push(rect, item.page);
    }
}

pub struct StatusLine<'a> {
    pub href: &'a str,
    pub can_go_back: bool,
    pub can_go_forward: bool,
    pub mode: Mode,
    pub transitioning: bool,
    pub status: &'a StatusState,
}

pub fn draw_status(frame: &mut Frame<'_>, area: Rect, line: StatusLine<'_>) {
    let marker = if line.transitioning { " ~ " } else { "   " };
    let action = line
        .status
        .last_action_id
        .map(|id| id.as_str())
        .unwrap_or("-");
    let message = if line.status.message.is_empty() {
        "-"
    } else {
        line.status.message.as_str()
    };

    let history = format!(
        "{}{} ",
        if line.can_go_back { '<' } else { ' ' },
        if line.can_go_forward { '>' } else { ' ' },
    );

    let spans = vec![
        Span::raw(history),
        Span::styled(line.href.to_string(), Style::default().fg(Color::White)),
        Span::raw(marker),
        Span::styled(
            line.mode.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" | {action} | {message}")),
    ];
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
