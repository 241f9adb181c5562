#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Scroll position reached the end of the list (or initial load).
    MoreRequested,
    /// A page of enriched entries arrived from the engine.
    PageLoaded { entries: Vec<crate::Entry> },
    /// The in-flight page fetch failed; the attempt is abandoned.
    PageFailed,
    /// User picked a category filter; `None` clears it.
    FilterChanged(Option<String>),
    /// User opened the detail overlay for an entry (master-list index).
    EntrySelected { index: usize },
    /// User dismissed the detail overlay.
    SelectionDismissed,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
