use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::content::PageContent;
use crate::effects::{Dot, StyleProfile};
use crate::page::PageId;

use super::layout::HitMap;

pub struct PageBody<'a> {
    pub title: &'a str,
    pub content: &'a PageContent,
    pub scroll: u16,
    pub fading: bool,
    pub focused_button: Option<usize>,
    pub profile: &'a StyleProfile,
}

/// Draws the visible page and returns the largest useful scroll offset.
pub fn draw_page(frame: &mut Frame<'_>, area: Rect, body: PageBody<'_>) -> u16 {
    let block = Block::default()
        .borders(Borders::TOP)
        .title(format!(" {} ", body.title))
        .border_style(Style::default().fg(body.profile.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return 0;
    }

    let mut lines = vec![
        Line::from(Span::styled(
            body.content.heading,
            Style::default()
                .fg(body.profile.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            body.profile.particle_row(inner.width),
            Style::default()
                .fg(body.profile.accent)
                .add_modifier(Modifier::DIM),
        )),
        Line::default(),
    ];
    for paragraph in body.content.paragraphs {
        lines.push(Line::from(*paragraph));
        lines.push(Line::default());
    }
    for (i, button) in body.content.buttons.iter().enumerate() {
        let mut style = Style::default().fg(body.profile.accent);
        if body.focused_button == Some(i) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        lines.push(Line::from(Span::styled(
            format!("[ {} -> #{} ]", button.label, button.target),
            style,
        )));
    }

    let mut style = Style::default();
    if body.fading {
        style = style.add_modifier(Modifier::DIM);
    }
    let paragraph = Paragraph::new(lines)
        .style(style)
        .wrap(Wrap { trim: false });
    let limit = scroll_limit(&paragraph, inner.width, inner.height);
    let paragraph = paragraph.scroll((body.scroll.min(limit), 0));
    frame.render_widget(paragraph, inner);
    limit
}

/// Rows the wrapped paragraph needs beyond `height`.
fn scroll_limit(paragraph: &Paragraph<'_>, width: u16, height: u16) -> u16 {
    let rows = paragraph.line_count(width.max(1));
    u16::try_from(rows).unwrap_or(u16::MAX).saturating_sub(height)
}

/// Draws the page indicator dots and records their click regions.
pub fn draw_dots(
    frame: &mut Frame<'_>,
    area: Rect,
    dots: &[Dot],
    profile: &StyleProfile,
    hit_map: &mut HitMap,
) {
    let count = u16::try_from(dots.len()).unwrap_or(u16::MAX);
    if area.height < count || area.width == 0 {
        return;
    }
    let top = area.y + (area.height - count) / 2;
    for (row, dot) in (top..).zip(dots) {
        let rect = Rect::new(area.x, row, area.width, 1);
        let (glyph, style) = if dot.active {
            ("●", Style::default().fg(profile.accent))
        } else {
            ("○", Style::default().fg(ratatui::style::Color::DarkGray))
        };
        frame.render_widget(Paragraph::new(format!(" {glyph}")).style(style), rect);
        hit_map.push(rect, dot.page);
    }
}

pub fn page_title(page: PageId, title: &str) -> String {
    format!("{title} #{page}")
}
