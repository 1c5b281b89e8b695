use crate::nav::{PageSurface, ScrollBehavior};
use crate::page::PageRegistry;

/// Terminal stand-in for the page DOM: one container per anchor, a fading
/// container while a switch is in flight, and a vertical scroll position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDocument {
    containers: Vec<String>,
    visible: Option<String>,
    fading: Option<String>,
    scroll: u16,
    scroll_target: u16,
    scroll_limit: u16,
}

impl PageDocument {
    pub fn from_registry(registry: &PageRegistry) -> Self {
        Self::with_containers(
            registry
                .entries()
                .iter()
                .map(|entry| entry.anchor.clone())
                .collect(),
        )
    }

    pub fn with_containers(containers: Vec<String>) -> Self {
        Self {
            containers,
            visible: None,
            fading: None,
            scroll: 0,
            scroll_target: 0,
            scroll_limit: 0,
        }
    }

    pub fn visible(&self) -> Option<&str> {
        self.visible.as_deref()
    }

    pub fn is_fading(&self) -> bool {
        self.fading.is_some()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Largest scroll offset the current page allows; set by the renderer.
    pub fn set_scroll_limit(&mut self, limit: u16) {
        self.scroll_limit = limit;
        self.scroll = self.scroll.min(limit);
        self.scroll_target = self.scroll_target.min(limit);
    }

    pub fn scroll_by(&mut self, dy: i32) {
        let max = self.scroll_limit;
        let next = (i32::from(self.scroll) + dy).clamp(0, i32::from(max));
        self.scroll = u16::try_from(next).unwrap_or(max);
        self.scroll_target = self.scroll;
    }

    pub fn is_animating(&self) -> bool {
        self.scroll != self.scroll_target
    }

    /// One step of smooth scrolling: halves the remaining distance.
    pub fn advance_scroll(&mut self) -> bool {
        if !self.is_animating() {
            return false;
        }
        let distance = self.scroll.abs_diff(self.scroll_target);
        let step = distance.div_ceil(2);
        if self.scroll > self.scroll_target {
            self.scroll -= step;
        } else {
            self.scroll += step;
        }
        true
    }
}

impl PageSurface for PageDocument {
    fn fade_out(&mut self, anchor: &str) {
        if self.containers.iter().any(|c| c == anchor) {
            self.fading = Some(anchor.to_string());
        }
    }

    fn show(&mut self, anchor: &str) -> bool {
        self.fading = None;
        if !self.containers.iter().any(|c| c == anchor) {
            return false;
        }
        self.visible = Some(anchor.to_string());
        true
    }

    fn scroll_to_top(&mut self, behavior: ScrollBehavior) {
        self.scroll_target = 0;
        if behavior == ScrollBehavior::Instant {
            self.scroll = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PageDocument;
    use crate::nav::{PageSurface, ScrollBehavior};
    use crate::page::PageRegistry;

    #[test]
    fn smooth_scroll_converges_to_top() {
        let mut doc = PageDocument::from_registry(&PageRegistry::default());
        doc.set_scroll_limit(20);
        doc.scroll_by(9);
        doc.scroll_to_top(ScrollBehavior::Smooth);
        assert_eq!(doc.scroll(), 9);

        let mut steps = 0;
        while doc.advance_scroll() {
            steps += 1;
        }
        assert_eq!(doc.scroll(), 0);
        assert!(steps > 1);
    }

    #[test]
    fn instant_scroll_jumps() {
        let mut doc = PageDocument::from_registry(&PageRegistry::default());
        doc.set_scroll_limit(20);
        doc.scroll_by(5);
        doc.scroll_to_top(ScrollBehavior::Instant);
        assert_eq!(doc.scroll(), 0);
        assert!(!doc.is_animating());
    }

    #[test]
    fn scroll_by_clamps_to_range() {
        let mut doc = PageDocument::from_registry(&PageRegistry::default());
        doc.set_scroll_limit(10);
        doc.scroll_by(-3);
        assert_eq!(doc.scroll(), 0);
        doc.scroll_by(50);
        assert_eq!(doc.scroll(), 10);
        doc.set_scroll_limit(4);
        assert_eq!(doc.scroll(), 4);
    }

    #[test]
    fn unknown_container_is_reported_missing() {
        let mut doc = PageDocument::with_containers(vec!["page-home".to_string()]);
        assert!(doc.show("page-home"));
        doc.fade_out("page-home");
        assert!(doc.is_fading());
        assert!(!doc.show("page-food"));
        assert!(!doc.is_fading());
        assert_eq!(doc.visible(), Some("page-home"));
    }
}
