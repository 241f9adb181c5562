use crate::{AppState, Effect, Msg, SessionState, PAGE_SIZE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::MoreRequested => match state.session() {
            // At most one page fetch is in flight, and exhaustion is final.
            SessionState::Loading | SessionState::Exhausted => Vec::new(),
            SessionState::Idle | SessionState::Loaded => {
                let offset = state.entry_count() as u32;
                state.begin_loading();
                vec![Effect::FetchPage {
                    offset,
                    limit: PAGE_SIZE,
                }]
            }
        },
        Msg::PageLoaded { entries } => {
            if entries.is_empty() {
                state.mark_exhausted();
            } else {
                state.append_page(entries);
            }
            Vec::new()
        }
        Msg::PageFailed => {
            state.abandon_loading();
            Vec::new()
        }
        Msg::FilterChanged(filter) => {
            state.set_filter(filter);
            Vec::new()
        }
        Msg::EntrySelected { index } => {
            state.select(index);
            Vec::new()
        }
        Msg::SelectionDismissed => {
            state.clear_selection();
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
