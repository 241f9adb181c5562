use std::collections::BTreeSet;

use crate::view_model::{AppViewModel, EntryRowView, SelectedEntryView};

/// One browsable creature. Built in two phases: a minimal stub from the
/// listing endpoint, then enriched in place once the detail lookup resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    /// URL of the detail resource this entry was enriched from.
    pub source_url: String,
    /// Sprite URL; the API may have none for an entry.
    pub image: Option<String>,
    /// Type names, in the order the API lists them.
    pub categories: Vec<String>,
}

/// Pagination session. `Exhausted` is terminal: no transition leaves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    entries: Vec<Entry>,
    filter: Option<String>,
    selected: Option<usize>,
    session: SessionState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the dirty flag and resets it. The platform uses this to
    /// coalesce renders.
    pub fn consume_dirty(&mut self) -> bool {
        let was_dirty = self.dirty;
        self.dirty = false;
        was_dirty
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_loading(&mut self) {
        self.session = SessionState::Loading;
        self.mark_dirty();
    }

    /// Reverts an abandoned fetch so a later scroll can retry. Only a
    /// `Loading` session is touched; exhaustion is never undone.
    pub(crate) fn abandon_loading(&mut self) {
        if self.session == SessionState::Loading {
            self.session = if self.entries.is_empty() {
                SessionState::Idle
            } else {
                SessionState::Loaded
            };
            self.mark_dirty();
        }
    }

    /// Appends one enriched page as a single batch. Entries already present
    /// are never removed or reordered.
    pub(crate) fn append_page(&mut self, entries: Vec<Entry>) {
        self.entries.extend(entries);
        self.session = SessionState::Loaded;
        self.mark_dirty();
    }

    pub(crate) fn mark_exhausted(&mut self) {
        self.session = SessionState::Exhausted;
        self.mark_dirty();
    }

    pub(crate) fn set_filter(&mut self, filter: Option<String>) {
        if self.filter != filter {
            self.filter = filter;
            self.mark_dirty();
        }
    }

    /// Records the selection; a second selection replaces the first without
    /// requiring an explicit dismissal. Out-of-bounds indices are ignored.
    pub(crate) fn select(&mut self, index: usize) {
        if index < self.entries.len() {
            self.selected = Some(index);
            self.mark_dirty();
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.mark_dirty();
        }
    }

    fn matches_filter(&self, entry: &Entry) -> bool {
        match self.filter.as_deref() {
            None => true,
            Some(category) => entry.categories.iter().any(|c| c == category),
        }
    }

    /// Total, non-incremental derivation of the display model. Re-evaluates
    /// the whole list on every call.
    pub fn view(&self) -> AppViewModel {
        let rows = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| self.matches_filter(entry))
            .map(|(index, entry)| EntryRowView {
                index,
                name: entry.name.clone(),
                dex_number: dex_number_from_url(&entry.source_url),
                categories: entry.categories.clone(),
                has_sprite: entry.image.is_some(),
            })
            .collect();

        let filter_options: BTreeSet<String> = self
            .entries
            .iter()
            .flat_map(|entry| entry.categories.iter().cloned())
            .collect();

        let modal = self
            .selected
            .and_then(|index| self.entries.get(index))
            .map(|entry| SelectedEntryView {
                name: entry.name.clone(),
                dex_number: dex_number_from_url(&entry.source_url),
                sprite_url: entry.image.clone(),
                categories: entry.categories.clone(),
            });

        AppViewModel {
            session: self.session,
            total_count: self.entries.len(),
            filter: self.filter.clone(),
            filter_options: filter_options.into_iter().collect(),
            rows,
            modal,
            dirty: self.dirty,
        }
    }
}

/// Extracts the dex number from a detail URL's trailing path segment,
/// e.g. `https://pokeapi.co/api/v2/pokemon/1/` -> 1.
pub fn dex_number_from_url(source_url: &str) -> Option<u32> {
    let parsed = url::Url::parse(source_url).ok()?;
    parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .next_back()?
        .parse()
        .ok()
}
