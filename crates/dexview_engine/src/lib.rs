//! Dexview engine: remote listing/detail pipeline and effect execution.
mod engine;
mod fetch;
mod types;
mod wire;

pub use engine::EngineHandle;
pub use fetch::{FetchSettings, PageFetcher, ProgressSink, ReqwestPageFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, PageEntry, PageProgress, Stage};
pub use wire::{
    merge_detail, parse_detail, parse_listing, CreatureDetail, ListingEntry, ListingPage,
    SpriteSet, TypeName, TypeSlot,
};
