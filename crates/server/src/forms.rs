//! Form binding for the product views.
//!
//! Fields arrive as text; a value that does not convert becomes a
//! `ModelState` error instead of a rejected request.

use std::str::FromStr;

use serde::Deserialize;
use shared::{
    domain::{Product, ProductId},
    validation::{ModelState, Validate},
};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ProductForm {
    id: String,
    name: String,
    color: String,
    price: String,
    stock: String,
}

impl ProductForm {
    pub(crate) fn bind(self) -> (Product, ModelState) {
        let mut state = ModelState::new();

        if self.id.trim().is_empty() {
            state.add_model_error("Id", "The Id field is required.");
        }
        let id = bind_number(&mut state, "Id", &self.id);
        let price = bind_number(&mut state, "Price", &self.price);
        let stock = bind_number(&mut state, "Stock", &self.stock);

        let product = Product {
            id: ProductId(id),
            name: self.name,
            color: self.color,
            price,
            stock,
        };
        state.merge(product.validate());
        (product, state)
    }
}

/// Blank input binds to the default value.
fn bind_number<T: FromStr + Default>(state: &mut ModelState, field: &str, raw: &str) -> T {
    let raw = raw.trim();
    if raw.is_empty() {
        return T::default();
    }
    raw.parse().unwrap_or_else(|_| {
        state.add_model_error(field, format!("The value '{raw}' is invalid."));
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: &str, name: &str, price: &str, stock: &str) -> ProductForm {
        ProductForm {
            id: id.into(),
            name: name.into(),
            color: "Green".into(),
            price: price.into(),
            stock: stock.into(),
        }
    }

    #[test]
    fn complete_form_binds_without_errors() {
        let (product, state) = form("5", "Lamp", "45.5", "12").bind();
        assert!(state.is_valid());
        assert_eq!(product.id, ProductId(5));
        assert_eq!(product.price, 45.5);
        assert_eq!(product.stock, 12);
    }

    #[test]
    fn blank_numbers_bind_to_zero() {
        let (product, state) = form("7", "Lamp", "", " ").bind();
        assert!(state.is_valid());
        assert_eq!(product.price, 0.0);
        assert_eq!(product.stock, 0);
    }

    #[test]
    fn unparsable_numbers_become_field_errors() {
        let (product, state) = form("7", "Lamp", "cheap", "1.5").bind();
        assert!(!state.is_valid());
        assert_eq!(
            state.errors_for("Price").next().map(|e| e.message.as_str()),
            Some("The value 'cheap' is invalid.")
        );
        assert_eq!(state.errors_for("Stock").count(), 1);
        assert_eq!(product.name, "Lamp");
    }

    #[test]
    fn missing_id_and_name_are_required() {
        let (_, state) = form("", "", "", "").bind();
        assert_eq!(state.errors_for("Id").count(), 1);
        assert_eq!(state.errors_for("Name").count(), 1);
    }
}
