use dexview_engine::{merge_detail, parse_detail, parse_listing, PageEntry};
use pretty_assertions::assert_eq;

#[test]
fn listing_page_parses_name_and_url() {
    let body = br#"{
        "count": 1302,
        "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
        "previous": null,
        "results": [
            {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
            {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
        ]
    }"#;

    let page = parse_listing(body).expect("listing parses");
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].name, "bulbasaur");
    assert_eq!(page.results[0].url, "https://pokeapi.co/api/v2/pokemon/1/");
}

#[test]
fn empty_listing_parses_to_no_results() {
    let body = br#"{"count": 1302, "next": null, "previous": null, "results": []}"#;
    let page = parse_listing(body).expect("listing parses");
    assert!(page.results.is_empty());
}

#[test]
fn detail_extracts_sprite_and_ordered_types() {
    // The real payload carries dozens of other fields; they are ignored.
    let body = br#"{
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "sprites": {"front_default": "img1", "back_default": "imgb"},
        "types": [
            {"slot": 1, "type": {"name": "grass", "url": "https://pokeapi.co/api/v2/type/12/"}},
            {"slot": 2, "type": {"name": "poison", "url": "https://pokeapi.co/api/v2/type/4/"}}
        ]
    }"#;

    let detail = parse_detail(body).expect("detail parses");
    assert_eq!(detail.sprites.front_default.as_deref(), Some("img1"));
    let types: Vec<&str> = detail.types.iter().map(|slot| slot.kind.name.as_str()).collect();
    assert_eq!(types, vec!["grass", "poison"]);
}

#[test]
fn detail_tolerates_null_sprite() {
    let body = br#"{"sprites": {"front_default": null}, "types": []}"#;
    let detail = parse_detail(body).expect("detail parses");
    assert_eq!(detail.sprites.front_default, None);
}

#[test]
fn malformed_body_is_an_error() {
    assert!(parse_listing(b"<html>not json</html>").is_err());
    assert!(parse_detail(b"{\"sprites\": 3}").is_err());
}

#[test]
fn merge_builds_the_enriched_entry() {
    let body = br#"{"sprites": {"front_default": "img1"}, "types": [{"slot": 1, "type": {"name": "grass", "url": ""}}]}"#;
    let detail = parse_detail(body).expect("detail parses");
    let listing = parse_listing(
        br#"{"results": [{"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}]}"#,
    )
    .expect("listing parses")
    .results
    .remove(0);

    let entry = merge_detail(listing, detail);
    assert_eq!(
        entry,
        PageEntry {
            name: "bulbasaur".to_string(),
            detail_url: "https://pokeapi.co/api/v2/pokemon/1/".to_string(),
            image: Some("img1".to_string()),
            categories: vec!["grass".to_string()],
        }
    );
}
