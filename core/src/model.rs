// product_catalog/src/model.rs

//! Wire and storage shapes of the single catalog entity.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// A product row. `id` is assigned by the store on insert and never changes.
///
/// `Default` is the zero-valued product that get-one answers with when no row matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
  pub id: i64,
  #[serde(rename = "pname")]
  pub name: String,
  #[serde(rename = "pdesc")]
  pub description: String,
  pub mrp: i64,
  #[serde(rename = "stBidPrice")]
  pub starting_bid_price: i64,
}

impl Product {
  /// Builds the stored form of `input` under `id`.
  pub fn from_input(id: i64, input: &ProductInput) -> Self {
    Self {
      id,
      name: input.name.clone(),
      description: input.description.clone(),
      mrp: input.mrp,
      starting_bid_price: input.starting_bid_price,
    }
  }

  /// Replaces every mutable field with the values from `input`; `id` is kept.
  pub fn apply(&mut self, input: &ProductInput) {
    self.name = input.name.clone();
    self.description = input.description.clone();
    self.mrp = input.mrp;
    self.starting_bid_price = input.starting_bid_price;
  }
}

/// Body of create and update requests.
///
/// Decoding is lenient: missing fields and `null` values take their zero value,
/// keys match regardless of letter case (`"PNAME"` sets `name`) and unknown keys
/// (including `id`) are ignored. A wrongly typed value is still an error.
/// Values are not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductInput {
  #[serde(rename = "pname")]
  pub name: String,
  #[serde(rename = "pdesc")]
  pub description: String,
  pub mrp: i64,
  #[serde(rename = "stBidPrice")]
  pub starting_bid_price: i64,
}

impl ProductInput {
  pub fn new(name: impl Into<String>, description: impl Into<String>, mrp: i64, starting_bid_price: i64) -> Self {
    Self {
      name: name.into(),
      description: description.into(),
      mrp,
      starting_bid_price,
    }
  }
}

impl<'de> Deserialize<'de> for ProductInput {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    deserializer.deserialize_map(ProductInputVisitor)
  }
}

struct ProductInputVisitor;

impl<'de> Visitor<'de> for ProductInputVisitor {
  type Value = ProductInput;

  fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("a product object with pname, pdesc, mrp and stBidPrice")
  }

  fn visit_map<A>(self, mut map: A) -> Result<ProductInput, A::Error>
  where
    A: MapAccess<'de>,
  {
    let mut input = ProductInput::default();
    // Repeated keys: the last value wins.
    while let Some(key) = map.next_key::<String>()? {
      match key.to_ascii_lowercase().as_str() {
        "pname" => input.name = map.next_value::<Option<String>>()?.unwrap_or_default(),
        "pdesc" => input.description = map.next_value::<Option<String>>()?.unwrap_or_default(),
        "mrp" => input.mrp = map.next_value::<Option<i64>>()?.unwrap_or_default(),
        "stbidprice" => input.starting_bid_price = map.next_value::<Option<i64>>()?.unwrap_or_default(),
        _ => {
          map.next_value::<IgnoredAny>()?;
        }
      }
    }
    Ok(input)
  }
}

/// `{id, message}` answer of create, update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
  pub id: i64,
  pub message: String,
}

impl MutationResponse {
  pub fn created(id: i64) -> Self {
    Self {
      id,
      message: "Product created successfully".to_string(),
    }
  }

  pub fn updated(id: i64, rows_affected: u64) -> Self {
    Self {
      id,
      message: format!("Product updated successfully. Total rows/record affected {}", rows_affected),
    }
  }

  pub fn deleted(id: i64, rows_affected: u64) -> Self {
    Self {
      id,
      message: format!("Product deleted successfully. Total rows/record affected {}", rows_affected),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn product_serializes_with_wire_names() {
    let product = Product {
      id: 1,
      name: "Widget".to_string(),
      description: "A widget".to_string(),
      mrp: 100,
      starting_bid_price: 50,
    };
    let value = serde_json::to_value(&product).unwrap();
    assert_eq!(
      value,
      serde_json::json!({"id": 1, "pname": "Widget", "pdesc": "A widget", "mrp": 100, "stBidPrice": 50})
    );
  }

  #[test]
  fn zero_product_serializes_every_field() {
    let value = serde_json::to_value(Product::default()).unwrap();
    assert_eq!(
      value,
      serde_json::json!({"id": 0, "pname": "", "pdesc": "", "mrp": 0, "stBidPrice": 0})
    );
  }

  #[test]
  fn input_decoding_is_lenient() {
    let input: ProductInput = serde_json::from_str(r#"{"pname":"Lamp","id":77,"colour":"red"}"#).unwrap();
    assert_eq!(input, ProductInput::new("Lamp", "", 0, 0));
  }

  #[test]
  fn input_null_values_take_zero_value() {
    let input: ProductInput =
      serde_json::from_str(r#"{"pname":"Widget","pdesc":null,"mrp":100,"stBidPrice":null}"#).unwrap();
    assert_eq!(input, ProductInput::new("Widget", "", 100, 0));
  }

  #[test]
  fn input_keys_match_case_insensitively() {
    let input: ProductInput =
      serde_json::from_str(r#"{"PNAME":"Loud","PDesc":"mixed","MRP":7,"stbidprice":3}"#).unwrap();
    assert_eq!(input, ProductInput::new("Loud", "mixed", 7, 3));
  }

  #[test]
  fn input_last_repeated_key_wins() {
    let input: ProductInput = serde_json::from_str(r#"{"pname":"first","Pname":"second"}"#).unwrap();
    assert_eq!(input.name, "second");
  }

  #[test]
  fn null_body_decodes_as_absent_input() {
    let input: Option<ProductInput> = serde_json::from_str("null").unwrap();
    assert_eq!(input.unwrap_or_default(), ProductInput::default());
  }

  #[test]
  fn input_rejects_non_object_body() {
    assert!(serde_json::from_str::<ProductInput>("[1, 2]").is_err());
  }

  #[test]
  fn input_rejects_wrong_field_type() {
    let result = serde_json::from_str::<ProductInput>(r#"{"pname":"Lamp","mrp":"ten"}"#);
    assert!(result.is_err());
  }

  #[test]
  fn apply_keeps_id_and_replaces_all_fields() {
    let mut product = Product::from_input(9, &ProductInput::new("Old", "old", 5, 1));
    product.apply(&ProductInput::new("New", "", -3, 0));
    assert_eq!(product, Product::from_input(9, &ProductInput::new("New", "", -3, 0)));
  }

  #[test]
  fn mutation_messages_carry_affected_rows() {
    assert_eq!(MutationResponse::created(4).message, "Product created successfully");
    assert!(MutationResponse::updated(1, 1).message.ends_with("affected 1"));
    assert!(MutationResponse::deleted(999, 0).message.ends_with("affected 0"));
    assert_eq!(MutationResponse::deleted(999, 0).id, 999);
  }
}
