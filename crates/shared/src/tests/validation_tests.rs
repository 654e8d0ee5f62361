use super::*;
use crate::domain::ProductId;

fn table() -> Product {
    Product {
        id: ProductId(1),
        name: "Table".into(),
        color: "Red".into(),
        price: 500.0,
        stock: 19,
    }
}

#[test]
fn named_product_is_valid() {
    assert!(table().validate().is_valid());
}

#[test]
fn blank_name_is_rejected() {
    let product = Product {
        name: "   ".into(),
        ..table()
    };
    let state = product.validate();
    assert!(!state.is_valid());
    assert_eq!(state.errors_for("Name").count(), 1);
    assert_eq!(
        state.errors()[0].to_string(),
        "Name: The Name field is required."
    );
}

#[test]
fn manually_added_error_invalidates_state() {
    let mut state = table().validate();
    state.add_model_error("Name", "Name alanı gereklidir.");
    assert!(!state.is_valid());
    assert_eq!(state.errors_for("Color").count(), 0);
}

#[test]
fn merge_keeps_errors_from_both_states() {
    let mut state = ModelState::new();
    state.add_model_error("Price", "The value 'abc' is invalid.");
    state.merge(
        Product {
            name: String::new(),
            ..table()
        }
        .validate(),
    );
    assert_eq!(state.errors().len(), 2);
    assert_eq!(state.errors_for("Name").count(), 1);
}
