use dexview_core::{Effect, Entry, Msg};
use dexview_engine::{EngineEvent, EngineHandle, FetchError, FetchSettings, PageEntry};
use dexview_logging::{dex_info, dex_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings) -> Self {
        Self {
            engine: EngineHandle::new(settings),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { offset, limit } => {
                    dex_info!("FetchPage offset={} limit={}", offset, limit);
                    self.engine.fetch_page(offset, limit);
                }
            }
        }
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.engine.try_recv()
    }
}

/// Translates a completed page into the core message, logging abandoned
/// attempts on the way. Failures have no user-visible surface; the list
/// simply stops growing until the next scroll trigger.
pub fn completed_to_msg(offset: u32, result: Result<Vec<PageEntry>, FetchError>) -> Msg {
    match result {
        Ok(entries) => Msg::PageLoaded {
            entries: entries.into_iter().map(map_entry).collect(),
        },
        Err(err) => {
            dex_warn!("page at offset {} abandoned: {}", offset, err);
            Msg::PageFailed
        }
    }
}

fn map_entry(entry: PageEntry) -> Entry {
    Entry {
        name: entry.name,
        source_url: entry.detail_url,
        image: entry.image,
        categories: entry.categories,
    }
}
