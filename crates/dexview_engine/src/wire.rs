use serde::Deserialize;

use crate::PageEntry;

/// One page of the listing endpoint: `GET <base>/pokemon?offset=..&limit=..`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingPage {
    pub results: Vec<ListingEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    pub url: String,
}

/// The slice of the detail resource this UI cares about. Everything else in
/// the (large) detail payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatureDetail {
    pub sprites: SpriteSet,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SpriteSet {
    /// Nullable in the API.
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: TypeName,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TypeName {
    pub name: String,
}

pub fn parse_listing(bytes: &[u8]) -> Result<ListingPage, serde_json::Error> {
    serde_json::from_slice(bytes)
}

pub fn parse_detail(bytes: &[u8]) -> Result<CreatureDetail, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Second phase of entry construction: merges the detail payload into the
/// listing stub.
pub fn merge_detail(listing: ListingEntry, detail: CreatureDetail) -> PageEntry {
    PageEntry {
        name: listing.name,
        detail_url: listing.url,
        image: detail.sprites.front_default,
        categories: detail.types.into_iter().map(|slot| slot.kind.name).collect(),
    }
}
