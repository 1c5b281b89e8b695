use crate::page::{PageId, PageRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffordanceKind {
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub page: PageId,
    pub label: &'static str,
    pub active: bool,
}

/// Clickable nav items, one per page for each kind, in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordances {
    desktop: Vec<NavItem>,
    mobile: Vec<NavItem>,
}

impl Affordances {
    pub fn from_registry(registry: &PageRegistry) -> Self {
        let items: Vec<NavItem> = registry
            .entries()
            .iter()
            .map(|entry| NavItem {
                page: entry.id,
                label: entry.title,
                active: false,
            })
            .collect();
        Self {
            desktop: items.clone(),
            mobile: items,
        }
    }

    pub fn items(&self, kind: AffordanceKind) -> &[NavItem] {
        match kind {
            AffordanceKind::Desktop => &self.desktop,
            AffordanceKind::Mobile => &self.mobile,
        }
    }

    /// Page bound to the item at `position`.
    pub fn page_at(&self, kind: AffordanceKind, position: usize) -> Option<PageId> {
        self.items(kind).get(position).map(|item| item.page)
    }

    /// Moves the active marker to `page` in every set; all other items lose it.
    pub fn mark_active(&mut self, page: PageId) {
        for item in self.desktop.iter_mut().chain(self.mobile.iter_mut()) {
            item.active = item.page == page;
        }
    }

    pub fn active_pages(&self, kind: AffordanceKind) -> Vec<PageId> {
        self.items(kind)
            .iter()
            .filter(|item| item.active)
            .map(|item| item.page)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{AffordanceKind, Affordances};
    use crate::page::{PageId, PageRegistry};

    #[test]
    fn mark_active_is_exclusive_in_both_sets() {
        let mut affordances = Affordances::from_registry(&PageRegistry::default());
        affordances.mark_active(PageId::Home);
        affordances.mark_active(PageId::Food);

        for kind in [AffordanceKind::Desktop, AffordanceKind::Mobile] {
            assert_eq!(affordances.active_pages(kind), vec![PageId::Food]);
        }
    }

    #[test]
    fn items_are_positionally_bound() {
        let affordances = Affordances::from_registry(&PageRegistry::default());
        assert_eq!(
            affordances.page_at(AffordanceKind::Mobile, 2),
            Some(PageId::Modern)
        );
        assert_eq!(affordances.page_at(AffordanceKind::Desktop, 9), None);
    }
}
