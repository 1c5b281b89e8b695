use crate::nav::Subscription;
use crate::page::{PageId, PageRegistry};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dot {
    pub page: PageId,
    pub title: &'static str,
    pub active: bool,
}

/// Side indicator with one dot per page, highlighting the committed page.
#[derive(Debug)]
pub struct ScrollDots {
    subscription: Subscription,
    dots: Vec<Dot>,
}

impl ScrollDots {
    pub fn new(subscription: Subscription, registry: &PageRegistry, initial: PageId) -> Self {
        let dots = registry
            .entries()
            .iter()
            .map(|entry| Dot {
                page: entry.id,
                title: entry.title,
                active: entry.id == initial,
            })
            .collect();
        Self { subscription, dots }
    }

    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    pub fn sync(&mut self) -> bool {
        let mut changed = false;
        for event in self.subscription.drain() {
            for dot in &mut self.dots {
                dot.active = dot.page == event.page;
            }
            changed = true;
        }
        changed
    }
}
