use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use tui_input::Input;

use crate::nav::NavItem;

use super::layout::{MenuHits, centered_rect};

/// The pop-up menu listing the mobile nav items. Returns its click regions.
pub fn draw_menu_overlay(
    frame: &mut Frame<'_>,
    area: Rect,
    items: &[NavItem],
    highlight: usize,
    accent: Color,
) -> MenuHits {
    let mut hits = MenuHits::default();
    if area.width == 0 || area.height == 0 {
        return hits;
    }

    let height = u16::try_from(items.len())
        .unwrap_or(u16::MAX)
        .saturating_add(2);
    let popup = centered_rect(area, 28, height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Menu ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);
    hits.popup = popup;
    for (row, item) in (inner.y..inner.y.saturating_add(inner.height)).zip(items) {
        hits.items.push(Rect::new(inner.x, row, inner.width, 1), item.page);
    }

    let lines: Vec<Line<'_>> = items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let marker = if item.active { "●" } else { " " };
            let mut style = Style::default();
            if i == highlight {
                style = style.add_modifier(Modifier::REVERSED);
            }
            if item.active {
                style = style.fg(accent);
            }
            Line::from(Span::styled(
                format!("{marker} {} {}", i + 1, item.label),
                style,
            ))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
    hits
}

pub fn draw_location_prompt(frame: &mut Frame<'_>, area: Rect, input: &Input) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let popup = centered_rect(area, 48, 3);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(" Go to ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let width = usize::from(inner.width.max(1));
    let scroll = input.visual_scroll(width.saturating_sub(1));
    let paragraph = Paragraph::new(input.value()).scroll((0, u16::try_from(scroll).unwrap_or(0)));
    frame.render_widget(paragraph, inner);

    let cursor = input.visual_cursor().saturating_sub(scroll);
    let x = inner.x + u16::try_from(cursor).unwrap_or(0).min(inner.width.saturating_sub(1));
    frame.set_cursor_position((x, inner.y));
}
