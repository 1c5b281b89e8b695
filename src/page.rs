use std::fmt;

/// A navigable section of the showcase.
///
/// Declaration order is the navigation order: it drives digit shortcuts and
/// cyclic stepping, and the positional binding of nav items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    History,
    Modern,
    Food,
    Nature,
}

impl PageId {
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::History,
        PageId::Modern,
        PageId::Food,
        PageId::Nature,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::History => "history",
            Self::Modern => "modern",
            Self::Food => "food",
            Self::Nature => "nature",
        }
    }

    /// Exact, case-sensitive match against the fragment text.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "home" => Some(Self::Home),
            "history" => Some(Self::History),
            "modern" => Some(Self::Modern),
            "food" => Some(Self::Food),
            "nature" => Some(Self::Nature),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::History => 1,
            Self::Modern => 2,
            Self::Food => 3,
            Self::Nature => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Container anchor, `page-<id>`.
    pub fn anchor(self) -> String {
        format!("page-{}", self.as_str())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEntry {
    pub id: PageId,
    pub title: &'static str,
    pub anchor: String,
}

/// Fixed, ordered table of pages with their display titles and anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRegistry {
    entries: Vec<PageEntry>,
}

impl Default for PageRegistry {
    fn default() -> Self {
        let entries = PageId::ALL
            .iter()
            .map(|&id| PageEntry {
                id,
                title: default_title(id),
                anchor: id.anchor(),
            })
            .collect();
        Self { entries }
    }
}

fn default_title(id: PageId) -> &'static str {
    match id {
        PageId::Home => "Home",
        PageId::History => "History",
        PageId::Modern => "Modern",
        PageId::Food => "Food",
        PageId::Nature => "Nature",
    }
}

impl PageRegistry {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    pub fn get(&self, id: PageId) -> &PageEntry {
        &self.entries[id.index()]
    }

    pub fn resolve(&self, raw: &str) -> Option<PageId> {
        PageId::parse(raw)
    }

    /// Digit shortcut lookup, 1-based.
    pub fn by_digit(&self, digit: u32) -> Option<PageId> {
        let index = usize::try_from(digit).ok()?.checked_sub(1)?;
        self.entries.get(index).map(|entry| entry.id)
    }

    pub fn step(&self, from: PageId, dir: StepDirection) -> PageId {
        let n = self.entries.len();
        let current = from.index();
        let next = match dir {
            StepDirection::Left => (current + n - 1) % n,
            StepDirection::Right => (current + 1) % n,
        };
        self.entries[next].id
    }
}

#[cfg(test)]
mod tests {
    use super::{PageId, PageRegistry, StepDirection};

    #[test]
    fn parse_accepts_only_exact_page_names() {
        assert_eq!(PageId::parse("food"), Some(PageId::Food));
        assert_eq!(PageId::parse("Food"), None);
        assert_eq!(PageId::parse("atlantis"), None);
        assert_eq!(PageId::parse(""), None);
    }

    #[test]
    fn index_matches_declaration_order() {
        for (i, id) in PageId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(PageId::from_index(i), Some(*id));
        }
        assert_eq!(PageId::from_index(5), None);
    }

    #[test]
    fn step_wraps_at_both_ends() {
        let registry = PageRegistry::default();
        assert_eq!(
            registry.step(PageId::Home, StepDirection::Left),
            PageId::Nature
        );
        assert_eq!(
            registry.step(PageId::Nature, StepDirection::Right),
            PageId::Home
        );
        assert_eq!(
            registry.step(PageId::History, StepDirection::Right),
            PageId::Modern
        );
    }

    #[test]
    fn digits_map_by_position() {
        let registry = PageRegistry::default();
        assert_eq!(registry.by_digit(1), Some(PageId::Home));
        assert_eq!(registry.by_digit(3), Some(PageId::Modern));
        assert_eq!(registry.by_digit(5), Some(PageId::Nature));
        assert_eq!(registry.by_digit(0), None);
        assert_eq!(registry.by_digit(6), None);
    }

    #[test]
    fn anchors_follow_page_prefix() {
        let registry = PageRegistry::default();
        assert_eq!(registry.get(PageId::Modern).anchor, "page-modern");
    }
}
