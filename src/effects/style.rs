use ratatui::style::Color;

use crate::nav::Subscription;
use crate::page::PageId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleShape {
    Round,
    /// Streak particles: `width` is the horizontal extent range in px.
    Streak { width: (f32, f32) },
    /// Leaves alternate between two mirrored glyphs.
    Leaf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSet {
    Cosmic,
    Time,
    Cyberpunk,
    Quantum,
    Nature,
}

impl EffectSet {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cosmic => "cosmic",
            Self::Time => "time",
            Self::Cyberpunk => "cyberpunk",
            Self::Quantum => "quantum",
            Self::Nature => "nature",
        }
    }
}

/// Decorative profile of a page. `size_px` is the `(min, max)` particle size
/// the page was designed with; the terminal row spaces particles by it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleProfile {
    pub effects: EffectSet,
    pub accent: Color,
    pub glyph: char,
    pub shape: ParticleShape,
    pub size_px: (f32, f32),
}

impl StyleProfile {
    pub fn for_page(page: PageId) -> Self {
        match page {
            PageId::Home => Self {
                effects: EffectSet::Cosmic,
                accent: Color::LightMagenta,
                glyph: '·',
                shape: ParticleShape::Round,
                size_px: (1.0, 4.0),
            },
            PageId::History => Self {
                effects: EffectSet::Time,
                accent: Color::Yellow,
                glyph: '∙',
                shape: ParticleShape::Round,
                size_px: (1.0, 3.0),
            },
            PageId::Modern => Self {
                effects: EffectSet::Cyberpunk,
                accent: Color::Cyan,
                glyph: '─',
                shape: ParticleShape::Streak {
                    width: (10.0, 40.0),
                },
                size_px: (1.0, 3.0),
            },
            PageId::Food => Self {
                effects: EffectSet::Quantum,
                accent: Color::LightRed,
                glyph: '•',
                shape: ParticleShape::Round,
                size_px: (5.0, 15.0),
            },
            PageId::Nature => Self {
                effects: EffectSet::Nature,
                accent: Color::LightGreen,
                glyph: '❦',
                shape: ParticleShape::Leaf,
                size_px: (10.0, 25.0),
            },
        }
    }

    /// One decorative row of particles, `width` cells wide.
    ///
    /// Larger particles sit further apart. Streaks draw a run of glyphs as
    /// long as their widest extent allows, one cell per 10 px.
    pub fn particle_row(&self, width: u16) -> String {
        let gap = cells_for_px(self.size_px.1 / 3.0) + 1;
        let run = match self.shape {
            ParticleShape::Streak { width } => cells_for_px(width.1 / 10.0),
            ParticleShape::Round | ParticleShape::Leaf => 1,
        };
        let period = run + gap;

        (0..usize::from(width))
            .map(|x| {
                if x % period >= run {
                    return ' ';
                }
                match self.shape {
                    ParticleShape::Leaf if (x / period) % 2 == 1 => '❧',
                    _ => self.glyph,
                }
            })
            .collect()
    }
}

fn cells_for_px(px: f32) -> usize {
    // `as` saturates; negative and NaN inputs land on 0.
    (px.ceil() as usize).max(1)
}

/// Keeps the current page's profile in step with page-changed notifications.
#[derive(Debug)]
pub struct ParticleStyler {
    subscription: Subscription,
    profile: StyleProfile,
}

impl ParticleStyler {
    pub fn new(subscription: Subscription, initial: PageId) -> Self {
        Self {
            subscription,
            profile: StyleProfile::for_page(initial),
        }
    }

    pub fn profile(&self) -> &StyleProfile {
        &self.profile
    }

    /// Applies pending notifications. Returns `true` if the profile changed.
    pub fn sync(&mut self) -> bool {
        let Some(last) = self.subscription.drain().pop() else {
            return false;
        };
        let next = StyleProfile::for_page(last.page);
        let changed = next != self.profile;
        self.profile = next;
        changed
    }
}
