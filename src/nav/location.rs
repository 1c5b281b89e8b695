use std::collections::VecDeque;

const HISTORY_CAPACITY: usize = 64;

/// The address-bar side of navigation: the current fragment and a
/// non-reloading way to push a new one.
pub trait Location {
    /// Current fragment without the leading `#`, if any.
    fn fragment(&self) -> Option<&str>;

    /// Adds a history entry for `fragment`. Never reloads anything.
    fn push_fragment(&mut self, fragment: &str);
}

/// In-process session history, the terminal stand-in for `window.location`
/// plus `history.pushState`.
#[derive(Debug, Clone)]
pub struct SessionLocation {
    site: String,
    current: Option<String>,
    back_stack: VecDeque<Option<String>>,
    forward_stack: VecDeque<Option<String>>,
}

impl SessionLocation {
    pub fn new(site: impl Into<String>) -> Self {
        Self {
            site: site.into(),
            current: None,
            back_stack: VecDeque::new(),
            forward_stack: VecDeque::new(),
        }
    }

    /// Starts the session at `raw` (`#food`, `food`, or a full href) without
    /// creating a history entry, as when a document is loaded with a fragment.
    pub fn with_initial(site: impl Into<String>, raw: Option<&str>) -> Self {
        let mut location = Self::new(site);
        location.current = raw.and_then(normalize_fragment);
        location
    }

    pub fn href(&self) -> String {
        match self.current.as_deref() {
            Some(fragment) => format!("tvw://{}#{}", self.site, fragment),
            None => format!("tvw://{}", self.site),
        }
    }

    /// Moves one entry back. Returns `false` when there is nothing to go to.
    pub fn back(&mut self) -> bool {
        let Some(previous) = self.back_stack.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.current, previous);
        push_bounded(&mut self.forward_stack, current);
        true
    }

    pub fn forward(&mut self) -> bool {
        let Some(next) = self.forward_stack.pop_back() else {
            return false;
        };
        let current = std::mem::replace(&mut self.current, next);
        push_bounded(&mut self.back_stack, current);
        true
    }

    /// A typed address. Behaves like assigning `location.hash`: the entry is
    /// pushed even if the fragment names no page.
    pub fn assign(&mut self, raw: &str) {
        let fragment = normalize_fragment(raw);
        if fragment == self.current {
            return;
        }
        let previous = std::mem::replace(&mut self.current, fragment);
        push_bounded(&mut self.back_stack, previous);
        self.forward_stack.clear();
    }

    pub fn can_go_back(&self) -> bool {
        !self.back_stack.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward_stack.is_empty()
    }

    /// Number of entries in the session, current one included.
    pub fn history_len(&self) -> usize {
        self.back_stack.len() + 1 + self.forward_stack.len()
    }
}

impl Location for SessionLocation {
    fn fragment(&self) -> Option<&str> {
        self.current.as_deref()
    }

    fn push_fragment(&mut self, fragment: &str) {
        let next = Some(fragment.to_string());
        let previous = std::mem::replace(&mut self.current, next);
        push_bounded(&mut self.back_stack, previous);
        self.forward_stack.clear();
    }
}

fn push_bounded(stack: &mut VecDeque<Option<String>>, entry: Option<String>) {
    if stack.len() >= HISTORY_CAPACITY {
        stack.pop_front();
    }
    stack.push_back(entry);
}

/// Extracts the fragment from `#food`, `food`, or `tvw://site#food`.
/// Empty fragments normalize to `None`.
pub fn normalize_fragment(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let fragment = match raw.split_once('#') {
        Some((_, after)) => after,
        None if raw.contains("://") => "",
        None => raw,
    };
    if fragment.is_empty() {
        None
    } else {
        Some(fragment.to_string())
    }
}
