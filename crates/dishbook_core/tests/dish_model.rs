use dishbook_core::{Category, Dish};
use serde_json::Value;
use uuid::Uuid;

fn sample_dish() -> Dish {
    Dish::with_id(
        Uuid::parse_str("7f0c0d3c-5a1e-4b57-9f3c-2a1d6f0e8b21").unwrap(),
        "Bruschetta",
        vec![1, 2, 3],
        "grilled bread",
        "toast, rub garlic, top with tomato",
        Category::Antipasto,
        "15 min",
        "easy",
    )
}

#[test]
fn blob_uses_explicit_field_tags() {
    let json: Value = serde_json::to_value(sample_dish()).unwrap();

    assert_eq!(json["id"], "7f0c0d3c-5a1e-4b57-9f3c-2a1d6f0e8b21");
    assert_eq!(json["name"], "Bruschetta");
    // [1, 2, 3] base64-encoded with the standard alphabet.
    assert_eq!(json["photo"], "AQID");
    assert_eq!(json["description"], "grilled bread");
    assert_eq!(json["recipe"], "toast, rub garlic, top with tomato");
    assert_eq!(json["category"], "Antipasto");
    assert_eq!(json["duration"], "15 min");
    assert_eq!(json["difficulty"], "easy");
}

#[test]
fn category_serializes_with_display_spelling() {
    for (category, tag) in [
        (Category::Antipasto, "\"Antipasto\""),
        (Category::Primo, "\"Primo\""),
        (Category::Secondo, "\"Secondo\""),
    ] {
        assert_eq!(serde_json::to_string(&category).unwrap(), tag);
    }
}

#[test]
fn dish_round_trips_through_json() {
    let dish = sample_dish();
    let blob = serde_json::to_vec(&dish).unwrap();
    let decoded: Dish = serde_json::from_slice(&blob).unwrap();
    assert_eq!(decoded, dish);
}

#[test]
fn collection_round_trip_preserves_order_and_bytes() {
    let dishes = vec![
        Dish::new("Carbonara", vec![0xFF, 0xD8, 0xFF], "", "", Category::Primo, "", ""),
        Dish::new("Tagliata", vec![0x00], "", "", Category::Secondo, "", ""),
        Dish::new("Caprese", vec![9, 8, 7, 6], "", "", Category::Antipasto, "", ""),
    ];

    let blob = serde_json::to_vec(&dishes).unwrap();
    let decoded: Vec<Dish> = serde_json::from_slice(&blob).unwrap();

    assert_eq!(decoded, dishes);
    assert_eq!(decoded[0].photo, vec![0xFF, 0xD8, 0xFF]);
}

#[test]
fn invalid_photo_encoding_fails_to_decode() {
    let raw = r#"{
        "id": "7f0c0d3c-5a1e-4b57-9f3c-2a1d6f0e8b21",
        "name": "x",
        "photo": "not-base64!!!",
        "description": "",
        "recipe": "",
        "category": "Primo",
        "duration": "",
        "difficulty": ""
    }"#;
    assert!(serde_json::from_str::<Dish>(raw).is_err());
}

#[test]
fn unknown_category_tag_fails_to_decode() {
    let raw = r#"{
        "id": "7f0c0d3c-5a1e-4b57-9f3c-2a1d6f0e8b21",
        "name": "x",
        "photo": "AQID",
        "description": "",
        "recipe": "",
        "category": "Dolce",
        "duration": "",
        "difficulty": ""
    }"#;
    assert!(serde_json::from_str::<Dish>(raw).is_err());
}
