use crate::SessionState;

/// Listing page size, matching the remote API default the UI was tuned for.
pub const PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub session: SessionState,
    /// Size of the master list, independent of the active filter.
    pub total_count: usize,
    pub filter: Option<String>,
    /// Enumerated category options: sorted union of every category fetched
    /// so far.
    pub filter_options: Vec<String>,
    /// The filtered subsequence of the master list, in insertion order.
    pub rows: Vec<EntryRowView>,
    pub modal: Option<SelectedEntryView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryRowView {
    /// Index into the master list, stable across filtering.
    pub index: usize,
    pub name: String,
    pub dex_number: Option<u32>,
    pub categories: Vec<String>,
    pub has_sprite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedEntryView {
    pub name: String,
    pub dex_number: Option<u32>,
    /// `None` when the API has no sprite; the platform falls back to a
    /// placeholder at render time.
    pub sprite_url: Option<String>,
    pub categories: Vec<String>,
}
