#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// The document side of navigation: page containers and the viewport.
pub trait PageSurface {
    /// Starts hiding the container for `anchor`. Unknown anchors are ignored.
    fn fade_out(&mut self, anchor: &str);

    /// Makes the container for `anchor` the visible one. Returns `false` when
    /// no such container exists.
    fn show(&mut self, anchor: &str) -> bool;

    fn scroll_to_top(&mut self, behavior: ScrollBehavior);
}
