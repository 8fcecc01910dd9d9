//! # Prompt Catalog Tests
//!
//! Covers the `default` fallback contract, dotted/namespaced keys, YAML
//! flattening, and the override-layer semantics.

use pawmate::{CatalogError, PromptCatalog};

#[test]
fn test_unknown_key_falls_back_to_default_category() {
    let catalog = PromptCatalog::with_defaults();

    assert_eq!(
        catalog.get("does_not_exist").to_vec(),
        catalog.get("default").to_vec(),
        "An absent category key must resolve to the default prompts."
    );
    assert!(!catalog.contains("does_not_exist"));
}

#[test]
fn test_namespaced_keys_resolve() {
    let catalog = PromptCatalog::with_defaults();

    let dog = catalog.get("training.dog").to_vec();

    assert!(catalog.contains("training.dog"));
    assert_eq!(dog[0], "How can I stop my dog from pulling on leash?");
    assert_ne!(dog, catalog.get("training.cat").to_vec());
}

#[test]
fn test_prompt_order_within_a_category_is_preserved() {
    let yaml = r#"
default:
  - "first"
  - "second"
  - "third"
"#;

    let catalog = PromptCatalog::from_yaml(yaml).expect("valid catalog");

    assert_eq!(
        catalog.get("default").to_vec(),
        vec!["first", "second", "third"]
    );
}

#[test]
fn test_yaml_nested_maps_flatten_to_dotted_keys() {
    let yaml = r#"
default:
  - "Base prompt"
training:
  dog:
    - "Dog prompt"
  cat:
    - "Cat prompt"
"#;

    let catalog = PromptCatalog::from_yaml(yaml).expect("valid catalog");

    assert_eq!(catalog.get("training.dog").to_vec(), vec!["Dog prompt"]);
    assert_eq!(catalog.get("training.cat").to_vec(), vec!["Cat prompt"]);
    assert!(
        !catalog.contains("training"),
        "A namespace node is not itself a category."
    );
}

#[test]
fn test_yaml_without_default_is_rejected() {
    let yaml = r#"
general:
  - "Some prompt"
"#;

    let result = PromptCatalog::from_yaml(yaml);

    assert!(matches!(result, Err(CatalogError::MissingDefault)));
}

#[test]
fn test_non_string_prompt_entries_are_rejected() {
    let yaml = r#"
default:
  - 42
"#;

    let result = PromptCatalog::from_yaml(yaml);

    assert!(matches!(result, Err(CatalogError::InvalidPrompt(key)) if key == "default"));
}

#[test]
fn test_override_layer_replaces_categories_wholesale() {
    let yaml = r#"
general:
  - "Only this one"
"#;

    let catalog = PromptCatalog::with_overrides(yaml).expect("valid override layer");

    assert_eq!(catalog.get("general").to_vec(), vec!["Only this one"]);
    // Categories the layer does not mention keep their built-in content.
    assert_eq!(
        catalog.get("default").to_vec(),
        PromptCatalog::with_defaults().get("default").to_vec()
    );
}

#[test]
fn test_override_layer_may_add_new_categories() {
    let yaml = r#"
seniors:
  - "How do care needs change for older pets?"
"#;

    let catalog = PromptCatalog::with_overrides(yaml).expect("valid override layer");

    assert!(catalog.contains("seniors"));
    assert_eq!(
        catalog.get("seniors").to_vec(),
        vec!["How do care needs change for older pets?"]
    );
}
