/// Sprite shown in the detail overlay when an entry has none of its own.
pub const PLACEHOLDER_SPRITE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png";

/// Label for the unfiltered view.
pub const ALL_TYPES_LABEL: &str = "All";

pub const KEY_HELP: &str = " up/down move | enter details | left/right type | q quit ";
