use coffee_core::{Coffee, CoffeeValidationError, CreateCoffee, UpdateCoffee};

#[test]
fn seed_matches_initial_catalog_entry() {
    let seed = Coffee::seed();

    assert_eq!(seed.id, 1);
    assert_eq!(seed.name, "Cappuccino");
    assert_eq!(seed.brand, "Starbucks");
    assert_eq!(seed.flavors, vec!["vanilla", "caramel"]);
    assert!(seed.validate().is_ok());
}

#[test]
fn new_trims_text_fields() {
    let coffee = Coffee::new(2, "  Latte ", " Costa", [" hazelnut "]).unwrap();

    assert_eq!(coffee.name, "Latte");
    assert_eq!(coffee.brand, "Costa");
    assert_eq!(coffee.flavors, vec!["hazelnut"]);
}

#[test]
fn new_rejects_invalid_shapes() {
    assert_eq!(
        Coffee::new(0, "Latte", "Costa", Vec::<String>::new()).unwrap_err(),
        CoffeeValidationError::NonPositiveId(0)
    );
    assert_eq!(
        Coffee::new(2, "   ", "Costa", Vec::<String>::new()).unwrap_err(),
        CoffeeValidationError::EmptyName
    );
    assert_eq!(
        Coffee::new(2, "Latte", "", Vec::<String>::new()).unwrap_err(),
        CoffeeValidationError::EmptyBrand
    );
    assert_eq!(
        Coffee::new(2, "Latte", "Costa", ["hazelnut", " "]).unwrap_err(),
        CoffeeValidationError::EmptyFlavor { index: 1 }
    );
}

#[test]
fn create_payload_converts_through_validation() {
    let input = CreateCoffee {
        id: 3,
        name: "Flat White".to_string(),
        brand: "Nero".to_string(),
        flavors: vec![],
    };
    let coffee = Coffee::try_from(input).unwrap();
    assert_eq!(coffee.name, "Flat White");
    assert!(coffee.flavors.is_empty());

    let bad = CreateCoffee {
        id: -4,
        name: "Mocha".to_string(),
        brand: "Nero".to_string(),
        flavors: vec![],
    };
    assert_eq!(
        Coffee::try_from(bad).unwrap_err(),
        CoffeeValidationError::NonPositiveId(-4)
    );
}

#[test]
fn apply_patch_merges_only_set_fields() {
    let mut coffee = Coffee::seed();
    let patch = UpdateCoffee {
        name: Some(" Iced Cappuccino ".to_string()),
        ..UpdateCoffee::default()
    };

    coffee.apply_patch(&patch).unwrap();

    assert_eq!(coffee.name, "Iced Cappuccino");
    assert_eq!(coffee.brand, "Starbucks");
    assert_eq!(coffee.flavors, vec!["vanilla", "caramel"]);
}

#[test]
fn apply_patch_rejects_blank_values_without_partial_write() {
    let mut coffee = Coffee::seed();
    let patch = UpdateCoffee {
        name: Some("Mocha".to_string()),
        brand: Some("  ".to_string()),
        flavors: None,
    };

    let err = coffee.apply_patch(&patch).unwrap_err();

    assert_eq!(err, CoffeeValidationError::EmptyBrand);
    assert_eq!(coffee, Coffee::seed());
}

#[test]
fn empty_patch_is_valid_and_changes_nothing() {
    let mut coffee = Coffee::seed();
    let patch = UpdateCoffee::default();

    assert!(patch.is_empty());
    coffee.apply_patch(&patch).unwrap();
    assert_eq!(coffee, Coffee::seed());
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let json = serde_json::to_value(Coffee::seed()).unwrap();

    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Cappuccino");
    assert_eq!(json["brand"], "Starbucks");
    assert_eq!(json["flavors"], serde_json::json!(["vanilla", "caramel"]));

    let decoded: Coffee = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, Coffee::seed());
}

#[test]
fn deserialize_rejects_blank_name() {
    let value = serde_json::json!({
        "id": 7,
        "name": " ",
        "brand": "Costa",
        "flavors": []
    });

    let err = serde_json::from_value::<Coffee>(value).unwrap_err();
    assert!(
        err.to_string().contains("coffee name cannot be blank"),
        "unexpected error: {err}"
    );
}

#[test]
fn patch_deserializes_with_missing_fields_as_none() {
    let patch: UpdateCoffee = serde_json::from_str(r#"{"brand":"Lavazza"}"#).unwrap();

    assert_eq!(patch.name, None);
    assert_eq!(patch.brand.as_deref(), Some("Lavazza"));
    assert_eq!(patch.flavors, None);
    assert!(!patch.is_empty());
}
