//! Conversion from raw upstream records to canonical catalog types.
//!
//! Every canonical field has a prioritized list of candidate upstream keys
//! and a documented fallback; a record missing data degrades to defaults
//! rather than failing.

use rust_decimal::Decimal;
use serde_json::Value;

use sapling_core::{CategoryId, ItemKey, Price};

use super::envelope::{extract_records, pick_field};
use super::types::{Category, Plant};

/// Candidate upstream keys, in priority order.
const CATEGORY_ID_KEYS: &[&str] = &["category_id", "id", "_id"];
const CATEGORY_NAME_KEYS: &[&str] = &["category", "category_name", "name", "title"];
const PLANT_NAME_KEYS: &[&str] = &["plant_name", "name", "common_name"];
const PLANT_ID_KEYS: &[&str] = &["plant_id", "id", "_id"];
const PLANT_IMAGE_KEYS: &[&str] = &["image", "image_url", "imageUrl"];
const PLANT_DESCRIPTION_KEYS: &[&str] = &["description", "short_description", "about", "details"];
const PLANT_CATEGORY_KEYS: &[&str] = &["category", "category_name"];
const PLANT_PRICE_KEYS: &[&str] = &["price", "cost", "sale_price", "price_bdt"];

// =============================================================================
// Record selection
// =============================================================================

/// Select category records from a payload.
///
/// Probes the standard envelope shapes first, then the `data.categories`
/// path some category responses use.
#[must_use]
pub fn category_records(payload: &Value) -> Vec<Value> {
    let records = extract_records(payload);
    if !records.is_empty() {
        return records;
    }
    nested_list(payload, "categories")
}

/// Select plant records from a payload.
///
/// Probes the standard envelope shapes first, then the `data.plants` path
/// some per-category responses use.
#[must_use]
pub fn plant_records(payload: &Value) -> Vec<Value> {
    let records = extract_records(payload);
    if !records.is_empty() {
        return records;
    }
    nested_list(payload, "plants")
}

fn nested_list(payload: &Value, key: &str) -> Vec<Value> {
    payload
        .get("data")
        .and_then(|data| data.get(key))
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

// =============================================================================
// Category conversions
// =============================================================================

/// Convert one upstream record to a `Category`.
///
/// `index` is the record's 0-based position, used to synthesize a sequential
/// id when the record carries none.
#[must_use]
pub fn convert_category(record: &Value, index: usize) -> Category {
    let id = pick_string(record, CATEGORY_ID_KEYS).unwrap_or_else(|| (index + 1).to_string());
    let name = pick_string(record, CATEGORY_NAME_KEYS).unwrap_or_else(|| "Unnamed".to_string());

    Category {
        id: CategoryId::new(id),
        name,
    }
}

// =============================================================================
// Plant conversions
// =============================================================================

/// Convert one upstream record to a `Plant`.
#[must_use]
pub fn convert_plant(record: &Value) -> Plant {
    let name = pick_string(record, PLANT_NAME_KEYS).unwrap_or_else(|| "Unnamed Plant".to_string());
    // The name doubles as the identity key when the record has no usable id,
    // so every plant ends up with a non-empty key.
    let key = pick_string(record, PLANT_ID_KEYS).unwrap_or_else(|| name.clone());

    Plant {
        key: ItemKey::new(key),
        name,
        image_url: pick_string(record, PLANT_IMAGE_KEYS).unwrap_or_default(),
        description: pick_string(record, PLANT_DESCRIPTION_KEYS).unwrap_or_default(),
        category_label: pick_string(record, PLANT_CATEGORY_KEYS).unwrap_or_default(),
        price: coerce_price(pick_field(record, PLANT_PRICE_KEYS)),
    }
}

// =============================================================================
// Scalar coercion
// =============================================================================

/// Pick a field and coerce it to a usable display string.
///
/// Upstream occasionally sends numbers where names belong; those render via
/// their JSON representation. Empty strings count as absent, matching the
/// falsy-fallback behavior the consumers rely on.
fn pick_string(record: &Value, candidate_keys: &[&str]) -> Option<String> {
    match pick_field(record, candidate_keys)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerce an optional upstream scalar to a non-negative price.
///
/// Accepts JSON numbers and numeric strings; anything else (absent,
/// non-numeric, negative) coerces to zero.
fn coerce_price(value: Option<&Value>) -> Price {
    let amount = match value {
        Some(Value::Number(n)) => {
            if let Some(int) = n.as_i64() {
                Some(Decimal::from(int))
            } else {
                n.as_f64().and_then(|f| Decimal::try_from(f).ok())
            }
        }
        Some(Value::String(s)) => s.trim().parse::<Decimal>().ok(),
        _ => None,
    };
    amount.map_or(Price::ZERO, Price::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_convert_category_with_upstream_ids() {
        let record = json!({"category_id": "5", "category_name": "Fruit"});
        let category = convert_category(&record, 0);
        assert_eq!(category.id, CategoryId::new("5"));
        assert_eq!(category.name, "Fruit");
    }

    #[test]
    fn test_convert_category_synthesizes_sequential_id() {
        let record = json!({"title": "Shade Trees"});
        let category = convert_category(&record, 2);
        assert_eq!(category.id, CategoryId::new("3"));
        assert_eq!(category.name, "Shade Trees");
    }

    #[test]
    fn test_convert_category_defaults_name() {
        let category = convert_category(&json!({"id": 9}), 0);
        assert_eq!(category.id, CategoryId::new("9"));
        assert_eq!(category.name, "Unnamed");
    }

    #[test]
    fn test_convert_plant_canonical_record() {
        let record = json!({
            "plant_id": "p1",
            "plant_name": "Mango",
            "image": "https://img.example/mango.png",
            "description": "A mango tree",
            "category": "Fruit",
            "price": "120"
        });
        let plant = convert_plant(&record);
        assert_eq!(plant.key, ItemKey::new("p1"));
        assert_eq!(plant.name, "Mango");
        assert_eq!(plant.image_url, "https://img.example/mango.png");
        assert_eq!(plant.category_label, "Fruit");
        assert_eq!(plant.price.amount(), Decimal::from(120));
    }

    #[test]
    fn test_convert_plant_key_falls_back_to_name() {
        let plant = convert_plant(&json!({"name": "Guava"}));
        assert_eq!(plant.key, ItemKey::new("Guava"));
        assert_eq!(plant.name, "Guava");
        assert_eq!(plant.image_url, "");
        assert_eq!(plant.description, "");
        assert_eq!(plant.category_label, "");
        assert_eq!(plant.price, Price::ZERO);
    }

    #[test]
    fn test_convert_plant_alternate_field_names() {
        let record = json!({
            "common_name": "Neem",
            "_id": 44,
            "imageUrl": "https://img.example/neem.png",
            "about": "Hardy shade tree",
            "category_name": "Shade",
            "price_bdt": 80.5
        });
        let plant = convert_plant(&record);
        assert_eq!(plant.key, ItemKey::new("44"));
        assert_eq!(plant.name, "Neem");
        assert_eq!(plant.description, "Hardy shade tree");
        assert_eq!(plant.category_label, "Shade");
        assert_eq!(plant.price.amount(), Decimal::new(805, 1));
    }

    #[test]
    fn test_coerce_price_rejects_garbage() {
        assert_eq!(coerce_price(Some(&json!("not a number"))), Price::ZERO);
        assert_eq!(coerce_price(Some(&json!({"amount": 5}))), Price::ZERO);
        assert_eq!(coerce_price(None), Price::ZERO);
    }

    #[test]
    fn test_coerce_price_clamps_negative_values() {
        assert_eq!(coerce_price(Some(&json!(-30))), Price::ZERO);
        assert_eq!(coerce_price(Some(&json!("-30"))), Price::ZERO);
    }

    #[test]
    fn test_category_records_probes_nested_fallback() {
        let payload = json!({"data": {"categories": [{"category_id": "5"}]}});
        assert_eq!(category_records(&payload).len(), 1);
        // standard envelopes still win when present
        let payload = json!({"categories": [{"category_id": "1"}, {"category_id": "2"}]});
        assert_eq!(category_records(&payload).len(), 2);
    }

    #[test]
    fn test_plant_records_probes_nested_fallback() {
        let payload = json!({"data": {"plants": [{"plant_id": "p1"}]}});
        assert_eq!(plant_records(&payload).len(), 1);
        assert!(plant_records(&json!({"data": {}})).is_empty());
    }
}
