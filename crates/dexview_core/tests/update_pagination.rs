use std::sync::Once;

use dexview_core::{update, AppState, Effect, Entry, Msg, SessionState, PAGE_SIZE};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dexview_logging::initialize_for_tests);
}

fn entry(name: &str, dex: u32, categories: &[&str]) -> Entry {
    Entry {
        name: name.to_string(),
        source_url: format!("https://pokeapi.co/api/v2/pokemon/{dex}/"),
        image: Some(format!("https://sprites.example/{dex}.png")),
        categories: categories.iter().map(ToString::to_string).collect(),
    }
}

#[test]
fn more_requested_from_idle_emits_fetch_for_first_page() {
    init_logging();
    let state = AppState::new();

    let (mut state, effects) = update(state, Msg::MoreRequested);

    assert_eq!(state.session(), SessionState::Loading);
    assert_eq!(
        effects,
        vec![Effect::FetchPage {
            offset: 0,
            limit: PAGE_SIZE,
        }]
    );
    assert!(state.consume_dirty());
}

#[test]
fn next_fetch_offset_is_accumulated_count() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::MoreRequested);
    let (state, _effects) = update(
        state,
        Msg::PageLoaded {
            entries: vec![entry("bulbasaur", 1, &["grass"]), entry("charmander", 4, &["fire"])],
        },
    );

    let (_state, effects) = update(state, Msg::MoreRequested);

    assert_eq!(
        effects,
        vec![Effect::FetchPage {
            offset: 2,
            limit: PAGE_SIZE,
        }]
    );
}

#[test]
fn more_requested_while_loading_is_ignored() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::MoreRequested);
    assert_eq!(state.session(), SessionState::Loading);

    // A second scroll trigger before the page completes must not start an
    // overlapping fetch.
    let (state, effects) = update(state, Msg::MoreRequested);
    assert_eq!(state.session(), SessionState::Loading);
    assert!(effects.is_empty());
}

#[test]
fn appending_pages_preserves_prefix_order() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::MoreRequested);
    let (state, _effects) = update(
        state,
        Msg::PageLoaded {
            entries: vec![entry("bulbasaur", 1, &["grass"]), entry("ivysaur", 2, &["grass"])],
        },
    );
    let first_page: Vec<String> = state.view().rows.iter().map(|r| r.name.clone()).collect();

    let (state, _effects) = update(state, Msg::MoreRequested);
    let (state, _effects) = update(
        state,
        Msg::PageLoaded {
            entries: vec![entry("venusaur", 3, &["grass", "poison"])],
        },
    );

    let all: Vec<String> = state.view().rows.iter().map(|r| r.name.clone()).collect();
    assert_eq!(all[..first_page.len()], first_page[..]);
    assert_eq!(all, vec!["bulbasaur", "ivysaur", "venusaur"]);
    assert_eq!(state.view().total_count, 3);
}

#[test]
fn empty_page_marks_exhausted_and_list_is_unchanged() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::MoreRequested);
    let (state, _effects) = update(
        state,
        Msg::PageLoaded {
            entries: vec![entry("bulbasaur", 1, &["grass"])],
        },
    );

    let (state, _effects) = update(state, Msg::MoreRequested);
    let (mut state, effects) = update(state, Msg::PageLoaded { entries: Vec::new() });

    assert_eq!(state.session(), SessionState::Exhausted);
    assert_eq!(state.view().total_count, 1);
    assert!(effects.is_empty());
    assert!(state.consume_dirty());
}

#[test]
fn exhaustion_is_terminal() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::MoreRequested);
    let (state, _effects) = update(state, Msg::PageLoaded { entries: Vec::new() });
    assert_eq!(state.session(), SessionState::Exhausted);

    // Further scroll triggers request nothing and append nothing.
    let (mut state, effects) = update(state, Msg::MoreRequested);
    assert_eq!(state.session(), SessionState::Exhausted);
    assert!(effects.is_empty());
    assert_eq!(state.view().total_count, 0);
    state.consume_dirty();
    let (mut state, _effects) = update(state, Msg::MoreRequested);
    assert!(!state.consume_dirty());
}

#[test]
fn failed_page_is_abandoned_and_scrolling_retries() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::MoreRequested);
    let (state, _effects) = update(
        state,
        Msg::PageLoaded {
            entries: vec![entry("bulbasaur", 1, &["grass"])],
        },
    );

    let (state, _effects) = update(state, Msg::MoreRequested);
    let (state, effects) = update(state, Msg::PageFailed);

    // The attempt is dropped silently: no new entries, exhaustion untouched.
    assert_eq!(state.session(), SessionState::Loaded);
    assert_eq!(state.view().total_count, 1);
    assert!(effects.is_empty());

    // The next trigger retries from the same offset.
    let (_state, effects) = update(state, Msg::MoreRequested);
    assert_eq!(
        effects,
        vec![Effect::FetchPage {
            offset: 1,
            limit: PAGE_SIZE,
        }]
    );
}

#[test]
fn failure_before_any_page_returns_to_idle() {
    init_logging();
    let state = AppState::new();
    let (state, _effects) = update(state, Msg::MoreRequested);
    let (state, _effects) = update(state, Msg::PageFailed);

    assert_eq!(state.session(), SessionState::Idle);
    assert_eq!(state.view().total_count, 0);
}
